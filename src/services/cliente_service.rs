// src/services/cliente_service.rs

use crate::{
    common::{error::AppError, pagination::{Paginated, PaginationQuery}},
    db::{ClienteRepository, UserRepository},
    middleware::{auth::AuthUser, rbac::{authorize, STAFF}},
    models::{
        auth::Role,
        cliente::{Cliente, CreateClientePayload, UpdateClientePayload},
    },
};

#[derive(Clone)]
pub struct ClienteService {
    repo: ClienteRepository,
    user_repo: UserRepository,
}

impl ClienteService {
    pub fn new(repo: ClienteRepository, user_repo: UserRepository) -> Self {
        Self { repo, user_repo }
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        mut data: CreateClientePayload,
    ) -> Result<Cliente, AppError> {
        // CLIENTE só cria o próprio cadastro; ADMIN cria para qualquer usuário CLIENTE.
        if user.role == Role::Cliente {
            if matches!(data.user_id, Some(uid) if uid != user.id) {
                return Err(AppError::Forbidden(
                    "Cliente não pode criar cadastro para outro usuário.".to_string(),
                ));
            }
            data.user_id = Some(user.id);
        } else {
            authorize(user, &[Role::Admin], "Apenas administradores podem criar cadastros de cliente para outros usuários.")?;
        }

        let target_user_id = data.user_id.unwrap_or(user.id);

        if self.repo.find_by_user_id(target_user_id).await?.is_some() {
            return Err(AppError::CadastroJaExiste);
        }

        let user_db = self
            .user_repo
            .find_by_id(target_user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        // Só usuários com papel CLIENTE recebem cadastro de cliente.
        if user_db.role != Role::Cliente {
            return Err(AppError::Forbidden(format!(
                "Esse usuário possui papel {:?} e não pode receber cadastro de cliente.",
                user_db.role
            )));
        }

        if self.repo.find_by_cpf(&data.cpf).await?.is_some() {
            return Err(AppError::CpfJaExiste);
        }

        // Telefone do cadastro cai para o telefone do usuário quando ausente.
        let telefone = data.telefone.clone().or(user_db.telefone);

        self.repo.create(&data, target_user_id, telefone.as_deref()).await
    }

    pub async fn find_by_id(&self, user: &AuthUser, id: i64) -> Result<Cliente, AppError> {
        let cliente = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ClienteNotFound)?;

        // CLIENTE só enxerga o próprio cadastro.
        if user.role == Role::Cliente && cliente.user_id != user.id {
            return Err(AppError::Forbidden(
                "Você só pode acessar o seu próprio cadastro.".to_string(),
            ));
        }

        Ok(cliente)
    }

    pub async fn find_all(
        &self,
        user: &AuthUser,
        pagination: PaginationQuery,
    ) -> Result<Paginated<Cliente>, AppError> {
        authorize(
            user,
            STAFF,
            "Apenas administradores e funcionários podem listar clientes.",
        )?;

        let total = self.repo.count().await?;
        let data = self.repo.find_all(pagination.skip(), pagination.limit).await?;

        Ok(Paginated::new(data, total, &pagination))
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i64,
        data: UpdateClientePayload,
    ) -> Result<Cliente, AppError> {
        let existente = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ClienteNotFound)?;

        let is_admin = user.role == Role::Admin;
        let is_owner = user.role == Role::Cliente && existente.user_id == user.id;
        if !is_admin && !is_owner {
            return Err(AppError::Forbidden(
                "Você só pode alterar o seu próprio cadastro.".to_string(),
            ));
        }

        if let Some(cpf) = &data.cpf {
            if cpf != &existente.cpf && self.repo.find_by_cpf(cpf).await?.is_some() {
                return Err(AppError::CpfJaExiste);
            }
        }

        self.repo.update(id, &data).await
    }

    pub async fn delete(&self, user: &AuthUser, id: i64) -> Result<(), AppError> {
        authorize(user, &[Role::Admin], "Apenas administradores podem excluir cadastros.")?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ClienteNotFound)?;

        self.repo.delete(id).await
    }
}
