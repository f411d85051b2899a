use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Acesso negado: {0}")]
    Forbidden(String),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Categoria não encontrada")]
    CategoriaNotFound,

    #[error("Já existe uma categoria cadastrada com este nome")]
    CategoriaNomeJaExiste,

    #[error("Fornecedor não encontrado")]
    FornecedorNotFound,

    #[error("Já existe um fornecedor cadastrado com este CNPJ")]
    CnpjJaExiste,

    #[error("Produto não encontrado")]
    ProdutoNotFound,

    #[error("Já existe um produto cadastrado com este nome")]
    ProdutoNomeJaExiste,

    #[error("Cadastro de funcionário não encontrado")]
    FuncionarioNotFound,

    #[error("Cadastro de cliente não encontrado")]
    ClienteNotFound,

    #[error("Já existe um cadastro para este usuário")]
    CadastroJaExiste,

    #[error("Já existe um cadastro com este CPF")]
    CpfJaExiste,

    #[error("Movimento de estoque não encontrado")]
    MovimentoNotFound,

    #[error("A quantidade deve ser maior que zero")]
    QuantidadeInvalida,

    #[error("Quantidade maior que o estoque disponível")]
    EstoqueInsuficiente,

    #[error("Estoque não pode ficar negativo")]
    EstoqueNegativo,

    #[error("O total do produto excede o limite suportado")]
    TotalExcedeLimite,

    #[error("Movimentos com mais de 24 horas não podem ser excluídos")]
    JanelaExclusaoExpirada,

    #[error("A data inicial não pode ser maior que a data final")]
    PeriodoInvalido,

    #[error("Origem/Destino não pode ser vazio")]
    OrigemDestinoVazia,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::JanelaExclusaoExpirada => {
                (StatusCode::FORBIDDEN, format!("{}.", self))
            }

            AppError::UserNotFound
            | AppError::CategoriaNotFound
            | AppError::FornecedorNotFound
            | AppError::ProdutoNotFound
            | AppError::FuncionarioNotFound
            | AppError::ClienteNotFound
            | AppError::MovimentoNotFound => (StatusCode::NOT_FOUND, format!("{}.", self)),

            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }

            AppError::CategoriaNomeJaExiste
            | AppError::CnpjJaExiste
            | AppError::ProdutoNomeJaExiste
            | AppError::CadastroJaExiste
            | AppError::CpfJaExiste
            | AppError::QuantidadeInvalida
            | AppError::EstoqueInsuficiente
            | AppError::EstoqueNegativo
            | AppError::TotalExcedeLimite
            | AppError::PeriodoInvalido
            | AppError::OrigemDestinoVazia => (StatusCode::BAD_REQUEST, format!("{}.", self)),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe algo genérico.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
