// src/models/fornecedor.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Fornecedor {
    pub id: i64,
    pub nome: String,
    pub cnpj: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFornecedorPayload {
    #[validate(length(min = 2, max = 150, message = "O nome deve ter entre 2 e 150 caracteres."))]
    pub nome: String,

    #[validate(length(min = 14, max = 18, message = "O CNPJ deve ter entre 14 e 18 caracteres."))]
    pub cnpj: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    #[validate(length(min = 10, max = 20, message = "O telefone deve ter entre 10 e 20 caracteres."))]
    pub telefone: Option<String>,

    #[validate(length(max = 255, message = "O endereço deve ter no máximo 255 caracteres."))]
    pub endereco: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFornecedorPayload {
    #[validate(length(min = 2, max = 150, message = "O nome deve ter entre 2 e 150 caracteres."))]
    pub nome: Option<String>,

    #[validate(length(min = 14, max = 18, message = "O CNPJ deve ter entre 14 e 18 caracteres."))]
    pub cnpj: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    #[validate(length(min = 10, max = 20, message = "O telefone deve ter entre 10 e 20 caracteres."))]
    pub telefone: Option<String>,

    #[validate(length(max = 255, message = "O endereço deve ter no máximo 255 caracteres."))]
    pub endereco: Option<String>,
}

// Busca por nome (LIKE), ex.: GET /fornecedores/busca?nome=dist
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct BuscaNomeQuery {
    #[validate(length(min = 1, message = "O nome não pode ser vazio."))]
    pub nome: String,
}
