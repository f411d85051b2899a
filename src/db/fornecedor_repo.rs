use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::fornecedor::{CreateFornecedorPayload, Fornecedor, UpdateFornecedorPayload},
};

#[derive(Clone)]
pub struct FornecedorRepository {
    pool: PgPool,
}

impl FornecedorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Fornecedor>, AppError> {
        let fornecedor =
            sqlx::query_as::<_, Fornecedor>("SELECT * FROM fornecedores WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(fornecedor)
    }

    pub async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<Fornecedor>, AppError> {
        let fornecedor =
            sqlx::query_as::<_, Fornecedor>("SELECT * FROM fornecedores WHERE cnpj = $1")
                .bind(cnpj)
                .fetch_optional(&self.pool)
                .await?;
        Ok(fornecedor)
    }

    // Busca por nome parcial, sem diferenciar maiúsculas.
    pub async fn search_by_nome(&self, nome: &str) -> Result<Vec<Fornecedor>, AppError> {
        let fornecedores = sqlx::query_as::<_, Fornecedor>(
            "SELECT * FROM fornecedores WHERE nome ILIKE '%' || $1 || '%' ORDER BY nome ASC",
        )
        .bind(nome)
        .fetch_all(&self.pool)
        .await?;
        Ok(fornecedores)
    }

    pub async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<Fornecedor>, AppError> {
        let fornecedores = sqlx::query_as::<_, Fornecedor>(
            "SELECT * FROM fornecedores ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(take)
        .fetch_all(&self.pool)
        .await?;
        Ok(fornecedores)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fornecedores")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn create(&self, data: &CreateFornecedorPayload) -> Result<Fornecedor, AppError> {
        sqlx::query_as::<_, Fornecedor>(
            r#"
            INSERT INTO fornecedores (nome, cnpj, email, telefone, endereco)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.nome)
        .bind(&data.cnpj)
        .bind(data.email.as_deref())
        .bind(data.telefone.as_deref())
        .bind(data.endereco.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::CnpjJaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn update(
        &self,
        id: i64,
        data: &UpdateFornecedorPayload,
    ) -> Result<Fornecedor, AppError> {
        sqlx::query_as::<_, Fornecedor>(
            r#"
            UPDATE fornecedores SET
                nome = COALESCE($2, nome),
                cnpj = COALESCE($3, cnpj),
                email = COALESCE($4, email),
                telefone = COALESCE($5, telefone),
                endereco = COALESCE($6, endereco),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.nome.as_deref())
        .bind(data.cnpj.as_deref())
        .bind(data.email.as_deref())
        .bind(data.telefone.as_deref())
        .bind(data.endereco.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::CnpjJaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM fornecedores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
