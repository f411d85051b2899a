// src/services/categoria_service.rs

use crate::{
    common::{error::AppError, pagination::{Paginated, PaginationQuery}},
    db::CategoriaRepository,
    middleware::{auth::AuthUser, rbac::{authorize, STAFF}},
    models::categoria::{Categoria, CreateCategoriaPayload, UpdateCategoriaPayload},
};

#[derive(Clone)]
pub struct CategoriaService {
    repo: CategoriaRepository,
}

impl CategoriaService {
    pub fn new(repo: CategoriaRepository) -> Self {
        Self { repo }
    }

    fn auth_access(&self, user: &AuthUser) -> Result<(), AppError> {
        authorize(
            user,
            STAFF,
            "Apenas administradores e funcionários podem acessar categorias.",
        )
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        data: CreateCategoriaPayload,
    ) -> Result<Categoria, AppError> {
        self.auth_access(user)?;

        if self.repo.find_by_nome(&data.nome).await?.is_some() {
            return Err(AppError::CategoriaNomeJaExiste);
        }

        self.repo.create(&data).await
    }

    pub async fn find_by_id(&self, user: &AuthUser, id: i64) -> Result<Categoria, AppError> {
        self.auth_access(user)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::CategoriaNotFound)
    }

    pub async fn find_all(
        &self,
        user: &AuthUser,
        pagination: PaginationQuery,
    ) -> Result<Paginated<Categoria>, AppError> {
        self.auth_access(user)?;

        let total = self.repo.count().await?;
        let data = self.repo.find_all(pagination.skip(), pagination.limit).await?;

        Ok(Paginated::new(data, total, &pagination))
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i64,
        data: UpdateCategoriaPayload,
    ) -> Result<Categoria, AppError> {
        self.auth_access(user)?;

        let existente = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::CategoriaNotFound)?;

        if let Some(nome) = &data.nome {
            if nome != &existente.nome && self.repo.find_by_nome(nome).await?.is_some() {
                return Err(AppError::CategoriaNomeJaExiste);
            }
        }

        self.repo.update(id, &data).await
    }

    pub async fn delete(&self, user: &AuthUser, id: i64) -> Result<(), AppError> {
        self.auth_access(user)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::CategoriaNotFound)?;

        self.repo.delete(id).await
    }
}
