// src/middleware/rbac.rs
//
// Checagem de capacidade única: cada operação de serviço declara os papéis
// aceitos e chama `authorize` no topo, em vez de espalhar `if role != ...`.

use crate::{common::error::AppError, middleware::auth::AuthUser, models::auth::Role};

// Papéis com acesso às movimentações de estoque e ao catálogo.
pub const STAFF: &[Role] = &[Role::Admin, Role::Funcionario];

pub fn authorize(user: &AuthUser, permitidos: &[Role], mensagem: &str) -> Result<(), AppError> {
    if permitidos.contains(&user.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(mensagem.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthUser {
        AuthUser { id: 1, role }
    }

    #[test]
    fn admin_e_funcionario_passam_no_gate_de_estoque() {
        assert!(authorize(&user(Role::Admin), STAFF, "negado").is_ok());
        assert!(authorize(&user(Role::Funcionario), STAFF, "negado").is_ok());
    }

    #[test]
    fn cliente_recebe_forbidden() {
        let err = authorize(&user(Role::Cliente), STAFF, "sem acesso").unwrap_err();
        match err {
            AppError::Forbidden(msg) => assert_eq!(msg, "sem acesso"),
            other => panic!("esperava Forbidden, veio {other:?}"),
        }
    }

    #[test]
    fn lista_vazia_nega_todo_mundo() {
        assert!(authorize(&user(Role::Admin), &[], "negado").is_err());
    }
}
