use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::cliente::{Cliente, CreateClientePayload, UpdateClientePayload},
};

#[derive(Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cliente)
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cliente)
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE cpf = $1")
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cliente)
    }

    pub async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(take)
        .fetch_all(&self.pool)
        .await?;
        Ok(clientes)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn create(
        &self,
        data: &CreateClientePayload,
        user_id: i64,
        telefone: Option<&str>,
    ) -> Result<Cliente, AppError> {
        sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (cpf, telefone, data_nascimento, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.cpf)
        .bind(telefone)
        .bind(data.data_nascimento)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    let constraint = db_err.constraint().unwrap_or_default();
                    if constraint.contains("cpf") {
                        return AppError::CpfJaExiste;
                    }
                    return AppError::CadastroJaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn update(&self, id: i64, data: &UpdateClientePayload) -> Result<Cliente, AppError> {
        sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes SET
                cpf = COALESCE($2, cpf),
                telefone = COALESCE($3, telefone),
                data_nascimento = COALESCE($4, data_nascimento),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.cpf.as_deref())
        .bind(data.telefone.as_deref())
        .bind(data.data_nascimento)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::CpfJaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
