// src/models/estoque.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::produto::ProdutoResumo;

// Tipo da movimentação, igual ao enum `movimento` do banco.
//
// ENTRADA soma no saldo do produto; SAIDA subtrai; AJUSTE é uma baixa de
// ajuste (inventário, perda, correção) e subtrai com as mesmas validações
// de saldo de uma SAIDA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "movimento", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Movimento {
    Entrada,
    Saida,
    Ajuste,
}

impl Movimento {
    // Variação assinada que este movimento causa no saldo do produto.
    pub fn delta(&self, quantidade: i32) -> i32 {
        match self {
            Movimento::Entrada => quantidade,
            Movimento::Saida | Movimento::Ajuste => -quantidade,
        }
    }

    pub fn reduz_saldo(&self) -> bool {
        !matches!(self, Movimento::Entrada)
    }
}

// Linha da tabela `estoques`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Estoque {
    pub id: i64,
    pub tipo_movimento: Movimento,
    pub quantidade: i32,
    pub data_movimento: DateTime<Utc>,
    pub origem_destino: String,
    pub observacoes: String,
    #[serde(rename = "produtoId")]
    pub produto_id: i64,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

// Linha do JOIN estoques × produtos usada nas listagens.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EstoqueComProduto {
    pub id: i64,
    pub tipo_movimento: Movimento,
    pub quantidade: i32,
    pub data_movimento: DateTime<Utc>,
    pub origem_destino: String,
    pub observacoes: String,
    pub produto_id: i64,
    pub produto_nome: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Resposta completa de um movimento, com o produto aninhado.
#[derive(Debug, Serialize, ToSchema)]
pub struct EstoqueResponse {
    pub id: i64,
    pub tipo_movimento: Movimento,
    pub quantidade: i32,
    pub data_movimento: DateTime<Utc>,
    pub origem_destino: String,
    pub observacoes: String,
    pub produto: ProdutoResumo,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<EstoqueComProduto> for EstoqueResponse {
    fn from(e: EstoqueComProduto) -> Self {
        Self {
            id: e.id,
            tipo_movimento: e.tipo_movimento,
            quantidade: e.quantidade,
            data_movimento: e.data_movimento,
            origem_destino: e.origem_destino,
            observacoes: e.observacoes,
            produto: ProdutoResumo {
                id: e.produto_id,
                nome: e.produto_nome,
            },
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl EstoqueResponse {
    // Monta a resposta a partir da linha crua + dados do produto já
    // carregados na mesma transação.
    pub fn from_estoque(e: Estoque, produto_id: i64, produto_nome: String) -> Self {
        Self {
            id: e.id,
            tipo_movimento: e.tipo_movimento,
            quantidade: e.quantidade,
            data_movimento: e.data_movimento,
            origem_destino: e.origem_destino,
            observacoes: e.observacoes,
            produto: ProdutoResumo {
                id: produto_id,
                nome: produto_nome,
            },
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

// Projeção enxuta para GET /estoques/produto/{id}.
#[derive(Debug, Serialize, ToSchema)]
pub struct EstoqueMovimentoProduto {
    pub id: i64,
    pub tipo_movimento: Movimento,
    pub quantidade: i32,
    pub produto: ProdutoResumo,
}

impl From<EstoqueComProduto> for EstoqueMovimentoProduto {
    fn from(e: EstoqueComProduto) -> Self {
        Self {
            id: e.id,
            tipo_movimento: e.tipo_movimento,
            quantidade: e.quantidade,
            produto: ProdutoResumo {
                id: e.produto_id,
                nome: e.produto_nome,
            },
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEstoquePayload {
    pub tipo_movimento: Movimento,

    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub quantidade: i32,

    pub data_movimento: DateTime<Utc>,

    #[validate(length(min = 2, max = 255, message = "origem_destino deve ter entre 2 e 255 caracteres."))]
    pub origem_destino: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "As observações devem ter no máximo 500 caracteres."))]
    pub observacoes: String,

    #[serde(rename = "produtoId")]
    pub produto_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEstoquePayload {
    pub tipo_movimento: Option<Movimento>,

    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub quantidade: Option<i32>,

    pub data_movimento: Option<DateTime<Utc>>,

    #[validate(length(min = 2, max = 255, message = "origem_destino deve ter entre 2 e 255 caracteres."))]
    pub origem_destino: Option<String>,

    #[validate(length(max = 500, message = "As observações devem ter no máximo 500 caracteres."))]
    pub observacoes: Option<String>,

    #[serde(rename = "produtoId")]
    pub produto_id: Option<i64>,
}

// GET /estoques/periodo?dataInicio=...&dataFim=...
// (paginação repetida aqui porque `serde(flatten)` não funciona com
// query strings numéricas)
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct PeriodoQuery {
    #[serde(rename = "dataInicio")]
    pub data_inicio: NaiveDate,

    #[serde(rename = "dataFim")]
    pub data_fim: NaiveDate,

    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page deve ser no mínimo 1."))]
    pub page: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit deve estar entre 1 e 100."))]
    pub limit: i64,
}

// GET /estoques/origem-destino?origemDestino=...&tipoMovimento=...
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct OrigemDestinoQuery {
    #[serde(rename = "origemDestino")]
    pub origem_destino: String,

    #[serde(rename = "tipoMovimento")]
    pub tipo_movimento: Movimento,

    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page deve ser no mínimo 1."))]
    pub page: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit deve estar entre 1 e 100."))]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrada_soma_no_saldo() {
        assert_eq!(Movimento::Entrada.delta(5), 5);
    }

    #[test]
    fn saida_e_ajuste_subtraem_do_saldo() {
        assert_eq!(Movimento::Saida.delta(5), -5);
        assert_eq!(Movimento::Ajuste.delta(3), -3);
    }

    #[test]
    fn apenas_entrada_nao_reduz_saldo() {
        assert!(!Movimento::Entrada.reduz_saldo());
        assert!(Movimento::Saida.reduz_saldo());
        assert!(Movimento::Ajuste.reduz_saldo());
    }

    #[test]
    fn movimento_serializa_em_maiusculas() {
        assert_eq!(serde_json::to_string(&Movimento::Entrada).unwrap(), "\"ENTRADA\"");
        let m: Movimento = serde_json::from_str("\"SAIDA\"").unwrap();
        assert_eq!(m, Movimento::Saida);
    }
}
