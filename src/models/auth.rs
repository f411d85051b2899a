// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Papel do usuário, igual ao enum `role` do banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Funcionario,
    Cliente,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,   // Subject (ID do usuário)
    pub role: Role, // Papel no momento da emissão
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,
}

// Resumo do usuário devolvido junto com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct UsuarioLogado {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub role: Role,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UsuarioLogado,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializa_em_maiusculas() {
        assert_eq!(serde_json::to_string(&Role::Funcionario).unwrap(), "\"FUNCIONARIO\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }

    #[test]
    fn role_desserializa_do_json() {
        let role: Role = serde_json::from_str("\"CLIENTE\"").unwrap();
        assert_eq!(role, Role::Cliente);
    }
}
