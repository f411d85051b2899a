pub mod auth;
pub mod categoria;
pub mod cliente;
pub mod estoque;
pub mod fornecedor;
pub mod funcionario;
pub mod produto;
pub mod user;
