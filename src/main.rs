// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é aceitável aqui: se a configuração falhar, a aplicação
    // não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("Migrações do banco de dados executadas com sucesso.");

    // Rotas públicas de autenticação
    let auth_routes = Router::new().route("/login", post(handlers::auth::login));

    // Registro é público; o restante das rotas de usuário exige token.
    let usuario_routes = Router::new()
        .route("/", get(handlers::users::find_all))
        .route(
            "/{id}",
            get(handlers::users::find_by_id)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ))
        .route("/", post(handlers::users::create));

    let categoria_routes = Router::new()
        .route(
            "/",
            post(handlers::categorias::create).get(handlers::categorias::find_all),
        )
        .route(
            "/{id}",
            get(handlers::categorias::find_by_id)
                .put(handlers::categorias::update)
                .delete(handlers::categorias::delete),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let fornecedor_routes = Router::new()
        .route(
            "/",
            post(handlers::fornecedores::create).get(handlers::fornecedores::find_all),
        )
        .route("/busca", get(handlers::fornecedores::search_by_nome))
        .route(
            "/{id}",
            get(handlers::fornecedores::find_by_id)
                .put(handlers::fornecedores::update)
                .delete(handlers::fornecedores::delete),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let produto_routes = Router::new()
        .route(
            "/",
            post(handlers::produtos::create).get(handlers::produtos::find_all),
        )
        .route("/vencidos", get(handlers::produtos::find_vencidos))
        .route(
            "/proximos-vencimento",
            get(handlers::produtos::find_proximos_vencimento),
        )
        .route("/categoria/{id}", get(handlers::produtos::find_by_categoria))
        .route("/fornecedor/{id}", get(handlers::produtos::find_by_fornecedor))
        .route(
            "/{id}",
            get(handlers::produtos::find_by_id)
                .put(handlers::produtos::update)
                .delete(handlers::produtos::delete),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let funcionario_routes = Router::new()
        .route(
            "/",
            post(handlers::funcionarios::create).get(handlers::funcionarios::find_all),
        )
        .route(
            "/{id}",
            get(handlers::funcionarios::find_by_id)
                .put(handlers::funcionarios::update)
                .delete(handlers::funcionarios::delete),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let cliente_routes = Router::new()
        .route(
            "/",
            post(handlers::clientes::create).get(handlers::clientes::find_all),
        )
        .route(
            "/{id}",
            get(handlers::clientes::find_by_id)
                .put(handlers::clientes::update)
                .delete(handlers::clientes::delete),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // As rotas de consulta com caminho fixo (periodo, origem-destino, tipo,
    // produto) vêm antes de "/{id}" para não serem capturadas por ele.
    let estoque_routes = Router::new()
        .route(
            "/",
            post(handlers::estoques::create).get(handlers::estoques::find_all),
        )
        .route("/periodo", get(handlers::estoques::find_by_periodo))
        .route(
            "/origem-destino",
            get(handlers::estoques::find_by_origem_destino),
        )
        .route("/tipo/{tipo_movimento}", get(handlers::estoques::find_by_tipo))
        .route("/produto/{id}", get(handlers::estoques::find_by_produto))
        .route(
            "/{id}",
            get(handlers::estoques::find_by_id)
                .put(handlers::estoques::update)
                .delete(handlers::estoques::delete),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/auth", auth_routes)
        .nest("/usuarios", usuario_routes)
        .nest("/categorias", categoria_routes)
        .nest("/fornecedores", fornecedor_routes)
        .nest("/produtos", produto_routes)
        .nest("/funcionarios", funcionario_routes)
        .nest("/clientes", cliente_routes)
        .nest("/estoques", estoque_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
