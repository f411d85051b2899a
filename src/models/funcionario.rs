// src/models/funcionario.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Funcionario {
    pub id: i64,
    pub cpf: String,
    pub cargo: String,
    pub salario: Decimal,
    pub telefone: Option<String>,
    #[serde(rename = "dataAdmissao")]
    pub data_admissao: NaiveDate,
    #[serde(rename = "userId")]
    pub user_id: i64,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFuncionarioPayload {
    #[validate(length(min = 11, max = 14, message = "O CPF deve ter entre 11 e 14 caracteres."))]
    pub cpf: String,

    #[validate(length(min = 2, max = 100, message = "O cargo deve ter entre 2 e 100 caracteres."))]
    pub cargo: String,

    pub salario: Decimal,

    #[validate(length(min = 10, max = 20, message = "O telefone deve ter entre 10 e 20 caracteres."))]
    pub telefone: Option<String>,

    #[serde(rename = "dataAdmissao")]
    pub data_admissao: NaiveDate,

    // ADMIN pode criar para qualquer usuário FUNCIONARIO;
    // FUNCIONARIO só cria o próprio cadastro.
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFuncionarioPayload {
    #[validate(length(min = 11, max = 14, message = "O CPF deve ter entre 11 e 14 caracteres."))]
    pub cpf: Option<String>,

    #[validate(length(min = 2, max = 100, message = "O cargo deve ter entre 2 e 100 caracteres."))]
    pub cargo: Option<String>,

    pub salario: Option<Decimal>,

    #[validate(length(min = 10, max = 20, message = "O telefone deve ter entre 10 e 20 caracteres."))]
    pub telefone: Option<String>,

    #[serde(rename = "dataAdmissao")]
    pub data_admissao: Option<NaiveDate>,
}
