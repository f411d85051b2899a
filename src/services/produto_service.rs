// src/services/produto_service.rs

use chrono::{Duration, Utc};

use crate::{
    common::{error::AppError, pagination::{Paginated, PaginationQuery}},
    db::{CategoriaRepository, FornecedorRepository, ProdutoRepository},
    middleware::{auth::AuthUser, rbac::{authorize, STAFF}},
    models::produto::{CreateProdutoPayload, ProdutoResponse, UpdateProdutoPayload},
};

#[derive(Clone)]
pub struct ProdutoService {
    repo: ProdutoRepository,
    categoria_repo: CategoriaRepository,
    fornecedor_repo: FornecedorRepository,
}

impl ProdutoService {
    pub fn new(
        repo: ProdutoRepository,
        categoria_repo: CategoriaRepository,
        fornecedor_repo: FornecedorRepository,
    ) -> Self {
        Self { repo, categoria_repo, fornecedor_repo }
    }

    fn auth_access(&self, user: &AuthUser) -> Result<(), AppError> {
        authorize(
            user,
            STAFF,
            "Apenas administradores e funcionários podem acessar produtos.",
        )
    }

    // Categoria e fornecedor precisam existir antes de vincular o produto.
    async fn validar_referencias(
        &self,
        categoria_id: i64,
        fornecedor_id: i64,
    ) -> Result<(), AppError> {
        if self.categoria_repo.find_by_id(categoria_id).await?.is_none() {
            return Err(AppError::CategoriaNotFound);
        }
        if self.fornecedor_repo.find_by_id(fornecedor_id).await?.is_none() {
            return Err(AppError::FornecedorNotFound);
        }
        Ok(())
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        data: CreateProdutoPayload,
    ) -> Result<ProdutoResponse, AppError> {
        self.auth_access(user)?;

        if self.repo.exists_by_nome(&data.nome).await? {
            return Err(AppError::ProdutoNomeJaExiste);
        }

        self.validar_referencias(data.categoria_id, data.fornecedor_id)
            .await?;

        let produto = self.repo.create(&data).await?;
        Ok(produto.into())
    }

    pub async fn find_by_id(&self, user: &AuthUser, id: i64) -> Result<ProdutoResponse, AppError> {
        self.auth_access(user)?;

        let produto = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProdutoNotFound)?;
        Ok(produto.into())
    }

    pub async fn find_all(
        &self,
        user: &AuthUser,
        pagination: PaginationQuery,
    ) -> Result<Paginated<ProdutoResponse>, AppError> {
        self.auth_access(user)?;

        let total = self.repo.count().await?;
        let produtos = self.repo.find_all(pagination.skip(), pagination.limit).await?;

        let data = produtos.into_iter().map(ProdutoResponse::from).collect();
        Ok(Paginated::new(data, total, &pagination))
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i64,
        data: UpdateProdutoPayload,
    ) -> Result<ProdutoResponse, AppError> {
        self.auth_access(user)?;

        let existente = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProdutoNotFound)?;

        if let Some(nome) = &data.nome {
            if nome != &existente.nome && self.repo.exists_by_nome(nome).await? {
                return Err(AppError::ProdutoNomeJaExiste);
            }
        }

        if data.categoria_id.is_some() || data.fornecedor_id.is_some() {
            self.validar_referencias(
                data.categoria_id.unwrap_or(existente.categoria_id),
                data.fornecedor_id.unwrap_or(existente.fornecedor_id),
            )
            .await?;
        }

        let produto = self.repo.update(id, &data).await?;
        Ok(produto.into())
    }

    pub async fn delete(&self, user: &AuthUser, id: i64) -> Result<(), AppError> {
        self.auth_access(user)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProdutoNotFound)?;

        self.repo.delete(id).await
    }

    pub async fn find_by_categoria(
        &self,
        user: &AuthUser,
        categoria_id: i64,
    ) -> Result<Vec<ProdutoResponse>, AppError> {
        self.auth_access(user)?;

        let produtos = self.repo.find_by_categoria(categoria_id).await?;
        Ok(produtos.into_iter().map(ProdutoResponse::from).collect())
    }

    pub async fn find_by_fornecedor(
        &self,
        user: &AuthUser,
        fornecedor_id: i64,
    ) -> Result<Vec<ProdutoResponse>, AppError> {
        self.auth_access(user)?;

        let produtos = self.repo.find_by_fornecedor(fornecedor_id).await?;
        Ok(produtos.into_iter().map(ProdutoResponse::from).collect())
    }

    pub async fn find_vencidos(&self, user: &AuthUser) -> Result<Vec<ProdutoResponse>, AppError> {
        self.auth_access(user)?;

        let hoje = Utc::now().date_naive();
        let produtos = self.repo.find_vencidos(hoje).await?;
        Ok(produtos.into_iter().map(ProdutoResponse::from).collect())
    }

    pub async fn find_proximos_vencimento(
        &self,
        user: &AuthUser,
        dias: i64,
    ) -> Result<Vec<ProdutoResponse>, AppError> {
        self.auth_access(user)?;

        let hoje = Utc::now().date_naive();
        let limite = hoje + Duration::days(dias);
        let produtos = self.repo.find_proximos_vencimento(hoje, limite).await?;
        Ok(produtos.into_iter().map(ProdutoResponse::from).collect())
    }
}
