// src/models/cliente.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Cliente {
    pub id: i64,
    pub cpf: String,
    pub telefone: Option<String>,
    #[serde(rename = "dataNascimento")]
    pub data_nascimento: Option<NaiveDate>,
    #[serde(rename = "userId")]
    pub user_id: i64,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClientePayload {
    #[validate(length(min = 11, max = 14, message = "O CPF deve ter entre 11 e 14 caracteres."))]
    pub cpf: String,

    #[validate(length(min = 10, max = 20, message = "O telefone deve ter entre 10 e 20 caracteres."))]
    pub telefone: Option<String>,

    #[serde(rename = "dataNascimento")]
    pub data_nascimento: Option<NaiveDate>,

    // ADMIN pode criar para qualquer usuário CLIENTE;
    // CLIENTE só cria o próprio cadastro.
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClientePayload {
    #[validate(length(min = 11, max = 14, message = "O CPF deve ter entre 11 e 14 caracteres."))]
    pub cpf: Option<String>,

    #[validate(length(min = 10, max = 20, message = "O telefone deve ter entre 10 e 20 caracteres."))]
    pub telefone: Option<String>,

    #[serde(rename = "dataNascimento")]
    pub data_nascimento: Option<NaiveDate>,
}
