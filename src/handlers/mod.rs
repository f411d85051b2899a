pub mod auth;
pub mod categorias;
pub mod clientes;
pub mod estoques;
pub mod fornecedores;
pub mod funcionarios;
pub mod produtos;
pub mod users;
