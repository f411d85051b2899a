// src/services/fornecedor_service.rs

use crate::{
    common::{error::AppError, pagination::{Paginated, PaginationQuery}},
    db::FornecedorRepository,
    middleware::{auth::AuthUser, rbac::{authorize, STAFF}},
    models::fornecedor::{CreateFornecedorPayload, Fornecedor, UpdateFornecedorPayload},
};

#[derive(Clone)]
pub struct FornecedorService {
    repo: FornecedorRepository,
}

impl FornecedorService {
    pub fn new(repo: FornecedorRepository) -> Self {
        Self { repo }
    }

    fn auth_access(&self, user: &AuthUser) -> Result<(), AppError> {
        authorize(
            user,
            STAFF,
            "Apenas administradores e funcionários podem acessar fornecedores.",
        )
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        data: CreateFornecedorPayload,
    ) -> Result<Fornecedor, AppError> {
        self.auth_access(user)?;

        if self.repo.find_by_cnpj(&data.cnpj).await?.is_some() {
            return Err(AppError::CnpjJaExiste);
        }

        self.repo.create(&data).await
    }

    pub async fn find_by_id(&self, user: &AuthUser, id: i64) -> Result<Fornecedor, AppError> {
        self.auth_access(user)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::FornecedorNotFound)
    }

    pub async fn find_all(
        &self,
        user: &AuthUser,
        pagination: PaginationQuery,
    ) -> Result<Paginated<Fornecedor>, AppError> {
        self.auth_access(user)?;

        let total = self.repo.count().await?;
        let data = self.repo.find_all(pagination.skip(), pagination.limit).await?;

        Ok(Paginated::new(data, total, &pagination))
    }

    pub async fn search_by_nome(
        &self,
        user: &AuthUser,
        nome: &str,
    ) -> Result<Vec<Fornecedor>, AppError> {
        self.auth_access(user)?;
        self.repo.search_by_nome(nome).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i64,
        data: UpdateFornecedorPayload,
    ) -> Result<Fornecedor, AppError> {
        self.auth_access(user)?;

        let existente = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::FornecedorNotFound)?;

        if let Some(cnpj) = &data.cnpj {
            if cnpj != &existente.cnpj && self.repo.find_by_cnpj(cnpj).await?.is_some() {
                return Err(AppError::CnpjJaExiste);
            }
        }

        self.repo.update(id, &data).await
    }

    pub async fn delete(&self, user: &AuthUser, id: i64) -> Result<(), AppError> {
        self.auth_access(user)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::FornecedorNotFound)?;

        self.repo.delete(id).await
    }
}
