// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    db::UserRepository,
    middleware::auth::AuthUser,
    models::auth::{AuthResponse, Claims, Role, UsuarioLogado},
};

// Monta e assina o token; separado do serviço para depender só do segredo.
fn gerar_token(jwt_secret: &str, user_id: i64, role: Role) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::days(1);

    let claims = Claims {
        sub: user_id,
        role,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String) -> Self {
        Self { user_repo, jwt_secret }
    }

    pub async fn login(&self, email: &str, senha: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let senha_clone = senha.to_owned();
        let hash_clone = user.senha.clone();

        // Executa a verificação de senha em uma thread separada
        let senha_valida =
            tokio::task::spawn_blocking(move || verify(&senha_clone, &hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !senha_valida {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(user.id, user.role)?;

        Ok(AuthResponse {
            token,
            user: UsuarioLogado {
                id: user.id,
                nome: user.name,
                email: user.email,
                role: user.role,
            },
        })
    }

    // Decodifica o token e recarrega o usuário: o papel vigente vem sempre
    // do banco, não do claim.
    pub async fn validate_token(&self, token: &str) -> Result<AuthUser, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let user = self
            .user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)?;

        Ok(AuthUser { id: user.id, role: user.role })
    }

    fn create_token(&self, user_id: i64, role: Role) -> Result<String, AppError> {
        gerar_token(&self.jwt_secret, user_id, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEGREDO: &str = "segredo-de-teste";

    fn decodificar(token: &str, segredo: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(segredo.as_ref()),
            &Validation::default(),
        )
        .map(|dados| dados.claims)
    }

    #[test]
    fn claims_sobrevivem_a_emissao_e_decodificacao() {
        let token = gerar_token(SEGREDO, 42, Role::Funcionario).unwrap();
        let claims = decodificar(&token, SEGREDO).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Funcionario);
        // expira exatamente um dia após a emissão
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn token_assinado_com_outro_segredo_e_recusado() {
        let token = gerar_token(SEGREDO, 1, Role::Admin).unwrap();
        assert!(decodificar(&token, "outro-segredo").is_err());
    }
}
