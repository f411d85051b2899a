// src/services/user_service.rs

use bcrypt::hash;

use crate::{
    common::{error::AppError, pagination::{Paginated, PaginationQuery}},
    db::UserRepository,
    middleware::{auth::AuthUser, rbac::{authorize, STAFF}},
    models::{
        auth::Role,
        user::{CreateUserPayload, UpdateUserPayload, User},
    },
};

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    async fn hash_senha(senha: &str) -> Result<String, AppError> {
        let senha_clone = senha.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash(&senha_clone, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }

    // Registro público de usuário.
    pub async fn create(&self, data: CreateUserPayload) -> Result<User, AppError> {
        if self.user_repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }

        let senha_hash = Self::hash_senha(&data.senha).await?;

        self.user_repo
            .create(
                &data.name,
                &data.email,
                &senha_hash,
                data.telefone.as_deref(),
                data.role,
            )
            .await
    }

    pub async fn find_all(
        &self,
        user: &AuthUser,
        pagination: PaginationQuery,
    ) -> Result<Paginated<User>, AppError> {
        authorize(user, STAFF, "Apenas administradores e funcionários podem listar usuários.")?;

        let total = self.user_repo.count().await?;
        let data = self
            .user_repo
            .find_all(pagination.skip(), pagination.limit)
            .await?;

        Ok(Paginated::new(data, total, &pagination))
    }

    // Um usuário comum só enxerga o próprio registro.
    pub async fn find_by_id(&self, user: &AuthUser, id: i64) -> Result<User, AppError> {
        if user.role != Role::Admin && user.id != id {
            return Err(AppError::Forbidden(
                "Você só pode acessar o seu próprio usuário.".to_string(),
            ));
        }

        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i64,
        data: UpdateUserPayload,
    ) -> Result<User, AppError> {
        if user.role != Role::Admin && user.id != id {
            return Err(AppError::Forbidden(
                "Você só pode alterar o seu próprio usuário.".to_string(),
            ));
        }

        // Troca de papel é restrita a administradores.
        if data.role.is_some() && user.role != Role::Admin {
            return Err(AppError::Forbidden(
                "Apenas administradores podem alterar o papel de um usuário.".to_string(),
            ));
        }

        let existente = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if let Some(email) = &data.email {
            if email != &existente.email && self.user_repo.find_by_email(email).await?.is_some() {
                return Err(AppError::EmailAlreadyExists);
            }
        }

        let senha_hash = match &data.senha {
            Some(senha) => Some(Self::hash_senha(senha).await?),
            None => None,
        };

        self.user_repo.update(id, &data, senha_hash.as_deref()).await
    }

    pub async fn delete(&self, user: &AuthUser, id: i64) -> Result<(), AppError> {
        authorize(user, &[Role::Admin], "Apenas administradores podem excluir usuários.")?;

        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        self.user_repo.delete(id).await
    }
}
