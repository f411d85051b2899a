// src/models/produto.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::format::{formatar_data, formatar_preco};

// Unidade de medida do produto, igual ao enum `medida` do banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "medida", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Medida {
    Unidade,
    Caixa,
    Litro,
    Quilo,
}

// Linha da tabela `produtos`. O campo `total` é o saldo corrente,
// mantido exclusivamente pelo serviço de estoque.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Produto {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub preco: Decimal,
    pub data_validade: NaiveDate,
    pub medida: Medida,
    pub total: i32,
    pub categoria_id: i64,
    pub fornecedor_id: i64,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

// Projeção usada dentro das respostas de estoque.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProdutoResumo {
    pub id: i64,
    pub nome: String,
}

// Saldo do produto lido com `FOR UPDATE` dentro das transações do estoque.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProdutoSaldo {
    pub id: i64,
    pub nome: String,
    pub total: i32,
}

// Resposta com preço e validade formatados para exibição.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProdutoResponse {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub preco: String,
    pub data_validade: String,
    pub medida: Medida,
    pub total: i32,
    #[serde(rename = "categoriaId")]
    pub categoria_id: i64,
    #[serde(rename = "fornecedorId")]
    pub fornecedor_id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Produto> for ProdutoResponse {
    fn from(p: Produto) -> Self {
        Self {
            id: p.id,
            nome: p.nome,
            descricao: p.descricao,
            preco: formatar_preco(p.preco),
            data_validade: formatar_data(p.data_validade),
            medida: p.medida,
            total: p.total,
            categoria_id: p.categoria_id,
            fornecedor_id: p.fornecedor_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProdutoPayload {
    #[validate(length(min = 2, max = 150, message = "O nome deve ter entre 2 e 150 caracteres."))]
    pub nome: String,

    #[validate(length(min = 5, max = 500, message = "A descrição deve ter entre 5 e 500 caracteres."))]
    pub descricao: String,

    pub preco: Decimal,

    pub data_validade: NaiveDate,

    pub medida: Medida,

    #[serde(rename = "categoriaId")]
    pub categoria_id: i64,

    #[serde(rename = "fornecedorId")]
    pub fornecedor_id: i64,

    // Saldo inicial opcional; movimentações posteriores passam pelo estoque.
    #[serde(default)]
    #[validate(range(min = 0, message = "O total não pode ser negativo."))]
    pub total: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProdutoPayload {
    #[validate(length(min = 2, max = 150, message = "O nome deve ter entre 2 e 150 caracteres."))]
    pub nome: Option<String>,

    #[validate(length(min = 5, max = 500, message = "A descrição deve ter entre 5 e 500 caracteres."))]
    pub descricao: Option<String>,

    pub preco: Option<Decimal>,

    pub data_validade: Option<NaiveDate>,

    pub medida: Option<Medida>,

    #[serde(rename = "categoriaId")]
    pub categoria_id: Option<i64>,

    #[serde(rename = "fornecedorId")]
    pub fornecedor_id: Option<i64>,
}
