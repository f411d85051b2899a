pub mod user_repo;
pub use user_repo::UserRepository;
pub mod categoria_repo;
pub use categoria_repo::CategoriaRepository;
pub mod fornecedor_repo;
pub use fornecedor_repo::FornecedorRepository;
pub mod produto_repo;
pub use produto_repo::ProdutoRepository;
pub mod estoque_repo;
pub use estoque_repo::EstoqueRepository;
pub mod funcionario_repo;
pub use funcionario_repo::FuncionarioRepository;
pub mod cliente_repo;
pub use cliente_repo::ClienteRepository;
