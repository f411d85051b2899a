// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CategoriaRepository, ClienteRepository, EstoqueRepository, FornecedorRepository,
        FuncionarioRepository, ProdutoRepository, UserRepository,
    },
    services::{
        auth::AuthService, categoria_service::CategoriaService, cliente_service::ClienteService,
        estoque_service::EstoqueService, fornecedor_service::FornecedorService,
        funcionario_service::FuncionarioService, produto_service::ProdutoService,
        user_service::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub categoria_service: CategoriaService,
    pub fornecedor_service: FornecedorService,
    pub produto_service: ProdutoService,
    pub funcionario_service: FuncionarioService,
    pub cliente_service: ClienteService,
    pub estoque_service: EstoqueService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("Conexão com o banco de dados estabelecida.");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let categoria_repo = CategoriaRepository::new(db_pool.clone());
        let fornecedor_repo = FornecedorRepository::new(db_pool.clone());
        let produto_repo = ProdutoRepository::new(db_pool.clone());
        let funcionario_repo = FuncionarioRepository::new(db_pool.clone());
        let cliente_repo = ClienteRepository::new(db_pool.clone());
        let estoque_repo = EstoqueRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let user_service = UserService::new(user_repo.clone());
        let categoria_service = CategoriaService::new(categoria_repo.clone());
        let fornecedor_service = FornecedorService::new(fornecedor_repo.clone());
        let produto_service =
            ProdutoService::new(produto_repo.clone(), categoria_repo, fornecedor_repo);
        let funcionario_service = FuncionarioService::new(funcionario_repo, user_repo.clone());
        let cliente_service = ClienteService::new(cliente_repo, user_repo);
        let estoque_service =
            EstoqueService::new(db_pool.clone(), estoque_repo, produto_repo);

        Ok(Self {
            db_pool,
            auth_service,
            user_service,
            categoria_service,
            fornecedor_service,
            produto_service,
            funcionario_service,
            cliente_service,
            estoque_service,
        })
    }
}
