use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::funcionario::{CreateFuncionarioPayload, Funcionario, UpdateFuncionarioPayload},
};

#[derive(Clone)]
pub struct FuncionarioRepository {
    pool: PgPool,
}

impl FuncionarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Funcionario>, AppError> {
        let funcionario =
            sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(funcionario)
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Funcionario>, AppError> {
        let funcionario =
            sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(funcionario)
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Funcionario>, AppError> {
        let funcionario =
            sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios WHERE cpf = $1")
                .bind(cpf)
                .fetch_optional(&self.pool)
                .await?;
        Ok(funcionario)
    }

    pub async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<Funcionario>, AppError> {
        let funcionarios = sqlx::query_as::<_, Funcionario>(
            "SELECT * FROM funcionarios ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(take)
        .fetch_all(&self.pool)
        .await?;
        Ok(funcionarios)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM funcionarios")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn create(
        &self,
        data: &CreateFuncionarioPayload,
        user_id: i64,
        telefone: Option<&str>,
    ) -> Result<Funcionario, AppError> {
        sqlx::query_as::<_, Funcionario>(
            r#"
            INSERT INTO funcionarios (cpf, cargo, salario, telefone, data_admissao, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.cpf)
        .bind(&data.cargo)
        .bind(data.salario)
        .bind(telefone)
        .bind(data.data_admissao)
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

    pub async fn update(
        &self,
        id: i64,
        data: &UpdateFuncionarioPayload,
    ) -> Result<Funcionario, AppError> {
        sqlx::query_as::<_, Funcionario>(
            r#"
            UPDATE funcionarios SET
                cpf = COALESCE($2, cpf),
                cargo = COALESCE($3, cargo),
                salario = COALESCE($4, salario),
                telefone = COALESCE($5, telefone),
                data_admissao = COALESCE($6, data_admissao),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.cpf.as_deref())
        .bind(data.cargo.as_deref())
        .bind(data.salario)
        .bind(data.telefone.as_deref())
        .bind(data.data_admissao)
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
        sqlx::query("DELETE FROM funcionarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
