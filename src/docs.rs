// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Usuarios ---
        handlers::users::create,
        handlers::users::find_all,
        handlers::users::find_by_id,
        handlers::users::update,
        handlers::users::delete,

        // --- Categorias ---
        handlers::categorias::create,
        handlers::categorias::find_all,
        handlers::categorias::find_by_id,
        handlers::categorias::update,
        handlers::categorias::delete,

        // --- Fornecedores ---
        handlers::fornecedores::create,
        handlers::fornecedores::find_all,
        handlers::fornecedores::search_by_nome,
        handlers::fornecedores::find_by_id,
        handlers::fornecedores::update,
        handlers::fornecedores::delete,

        // --- Produtos ---
        handlers::produtos::create,
        handlers::produtos::find_all,
        handlers::produtos::find_vencidos,
        handlers::produtos::find_proximos_vencimento,
        handlers::produtos::find_by_categoria,
        handlers::produtos::find_by_fornecedor,
        handlers::produtos::find_by_id,
        handlers::produtos::update,
        handlers::produtos::delete,

        // --- Funcionarios ---
        handlers::funcionarios::create,
        handlers::funcionarios::find_all,
        handlers::funcionarios::find_by_id,
        handlers::funcionarios::update,
        handlers::funcionarios::delete,

        // --- Clientes ---
        handlers::clientes::create,
        handlers::clientes::find_all,
        handlers::clientes::find_by_id,
        handlers::clientes::update,
        handlers::clientes::delete,

        // --- Estoques ---
        handlers::estoques::create,
        handlers::estoques::find_all,
        handlers::estoques::find_by_periodo,
        handlers::estoques::find_by_origem_destino,
        handlers::estoques::find_by_tipo,
        handlers::estoques::find_by_produto,
        handlers::estoques::find_by_id,
        handlers::estoques::update,
        handlers::estoques::delete,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::LoginPayload,
            models::auth::UsuarioLogado,
            models::auth::AuthResponse,

            // --- Usuarios ---
            models::user::User,
            models::user::CreateUserPayload,
            models::user::UpdateUserPayload,

            // --- Categorias ---
            models::categoria::Categoria,
            models::categoria::CreateCategoriaPayload,
            models::categoria::UpdateCategoriaPayload,

            // --- Fornecedores ---
            models::fornecedor::Fornecedor,
            models::fornecedor::CreateFornecedorPayload,
            models::fornecedor::UpdateFornecedorPayload,

            // --- Produtos ---
            models::produto::Medida,
            models::produto::Produto,
            models::produto::ProdutoResumo,
            models::produto::ProdutoResponse,
            models::produto::CreateProdutoPayload,
            models::produto::UpdateProdutoPayload,

            // --- Funcionarios ---
            models::funcionario::Funcionario,
            models::funcionario::CreateFuncionarioPayload,
            models::funcionario::UpdateFuncionarioPayload,

            // --- Clientes ---
            models::cliente::Cliente,
            models::cliente::CreateClientePayload,
            models::cliente::UpdateClientePayload,

            // --- Estoques ---
            models::estoque::Movimento,
            models::estoque::Estoque,
            models::estoque::EstoqueResponse,
            models::estoque::EstoqueMovimentoProduto,
            models::estoque::CreateEstoquePayload,
            models::estoque::UpdateEstoquePayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e emissão de token"),
        (name = "Usuarios", description = "Registro e gestão de usuários"),
        (name = "Categorias", description = "Categorias de produtos"),
        (name = "Fornecedores", description = "Fornecedores"),
        (name = "Produtos", description = "Produtos e relatórios de validade"),
        (name = "Funcionarios", description = "Cadastros de funcionário"),
        (name = "Clientes", description = "Cadastros de cliente"),
        (name = "Estoques", description = "Livro de movimentações de estoque")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
