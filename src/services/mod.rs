pub mod auth;
pub mod categoria_service;
pub mod cliente_service;
pub mod estoque_service;
pub mod fornecedor_service;
pub mod funcionario_service;
pub mod produto_service;
pub mod user_service;
