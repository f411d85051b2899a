use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::categoria::{Categoria, CreateCategoriaPayload, UpdateCategoriaPayload},
};

#[derive(Clone)]
pub struct CategoriaRepository {
    pool: PgPool,
}

impl CategoriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Categoria>, AppError> {
        let categoria = sqlx::query_as::<_, Categoria>("SELECT * FROM categorias WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(categoria)
    }

    pub async fn find_by_nome(&self, nome: &str) -> Result<Option<Categoria>, AppError> {
        let categoria = sqlx::query_as::<_, Categoria>("SELECT * FROM categorias WHERE nome = $1")
            .bind(nome)
            .fetch_optional(&self.pool)
            .await?;
        Ok(categoria)
    }

    pub async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<Categoria>, AppError> {
        let categorias = sqlx::query_as::<_, Categoria>(
            "SELECT * FROM categorias ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(take)
        .fetch_all(&self.pool)
        .await?;
        Ok(categorias)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categorias")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn create(&self, data: &CreateCategoriaPayload) -> Result<Categoria, AppError> {
        sqlx::query_as::<_, Categoria>(
            r#"
            INSERT INTO categorias (nome, descricao)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&data.nome)
        .bind(data.descricao.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::CategoriaNomeJaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn update(
        &self,
        id: i64,
        data: &UpdateCategoriaPayload,
    ) -> Result<Categoria, AppError> {
        sqlx::query_as::<_, Categoria>(
            r#"
            UPDATE categorias SET
                nome = COALESCE($2, nome),
                descricao = COALESCE($3, descricao),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.nome.as_deref())
        .bind(data.descricao.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::CategoriaNomeJaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM categorias WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
