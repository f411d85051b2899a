use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::{
    common::error::AppError,
    models::produto::{CreateProdutoPayload, Produto, ProdutoSaldo, UpdateProdutoPayload},
};

#[derive(Clone)]
pub struct ProdutoRepository {
    pool: PgPool,
}

impl ProdutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Produto>, AppError> {
        let produto = sqlx::query_as::<_, Produto>("SELECT * FROM produtos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(produto)
    }

    pub async fn exists_by_nome(&self, nome: &str) -> Result<bool, AppError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM produtos WHERE nome = $1)")
                .bind(nome)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>(
            "SELECT * FROM produtos ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(take)
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM produtos")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn find_by_categoria(&self, categoria_id: i64) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>(
            "SELECT * FROM produtos WHERE categoria_id = $1 ORDER BY nome ASC",
        )
        .bind(categoria_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    pub async fn find_by_fornecedor(&self, fornecedor_id: i64) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>(
            "SELECT * FROM produtos WHERE fornecedor_id = $1 ORDER BY nome ASC",
        )
        .bind(fornecedor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    pub async fn find_vencidos(&self, hoje: NaiveDate) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>(
            "SELECT * FROM produtos WHERE data_validade < $1 ORDER BY data_validade ASC",
        )
        .bind(hoje)
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    pub async fn find_proximos_vencimento(
        &self,
        hoje: NaiveDate,
        limite: NaiveDate,
    ) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>(
            r#"
            SELECT * FROM produtos
            WHERE data_validade >= $1 AND data_validade <= $2
            ORDER BY data_validade ASC
            "#,
        )
        .bind(hoje)
        .bind(limite)
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    pub async fn create(&self, data: &CreateProdutoPayload) -> Result<Produto, AppError> {
        sqlx::query_as::<_, Produto>(
            r#"
            INSERT INTO produtos (nome, descricao, preco, data_validade, medida, total, categoria_id, fornecedor_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&data.nome)
        .bind(&data.descricao)
        .bind(data.preco)
        .bind(data.data_validade)
        .bind(data.medida)
        .bind(data.total)
        .bind(data.categoria_id)
        .bind(data.fornecedor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::ProdutoNomeJaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn update(&self, id: i64, data: &UpdateProdutoPayload) -> Result<Produto, AppError> {
        sqlx::query_as::<_, Produto>(
            r#"
            UPDATE produtos SET
                nome = COALESCE($2, nome),
                descricao = COALESCE($3, descricao),
                preco = COALESCE($4, preco),
                data_validade = COALESCE($5, data_validade),
                medida = COALESCE($6, medida),
                categoria_id = COALESCE($7, categoria_id),
                fornecedor_id = COALESCE($8, fornecedor_id),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.nome.as_deref())
        .bind(data.descricao.as_deref())
        .bind(data.preco)
        .bind(data.data_validade)
        .bind(data.medida)
        .bind(data.categoria_id)
        .bind(data.fornecedor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::ProdutoNomeJaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ---
    // Funções transacionais do livro de estoque
    // ---
    // O saldo do produto é o único recurso disputado: o `FOR UPDATE`
    // serializa escritores concorrentes no mesmo produto.

    pub async fn find_saldo_for_update(
        &self,
        conn: &mut PgConnection,
        id: i64,
    ) -> Result<Option<ProdutoSaldo>, AppError> {
        let saldo = sqlx::query_as::<_, ProdutoSaldo>(
            "SELECT id, nome, total FROM produtos WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(saldo)
    }

    pub async fn update_total(
        &self,
        conn: &mut PgConnection,
        id: i64,
        novo_total: i32,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE produtos SET total = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(novo_total)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
