// src/handlers/produtos.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::{error::AppError, pagination::PaginationQuery},
    config::AppState,
    middleware::auth::AuthUser,
    models::produto::{CreateProdutoPayload, UpdateProdutoPayload},
};

fn default_dias() -> i64 {
    7
}

// GET /produtos/proximos-vencimento?dias=...
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct DiasQuery {
    #[serde(default = "default_dias")]
    #[validate(range(min = 1, max = 365, message = "dias deve estar entre 1 e 365."))]
    pub dias: i64,
}

// POST /produtos
#[utoipa::path(
    post,
    path = "/produtos",
    tag = "Produtos",
    request_body = CreateProdutoPayload,
    responses(
        (status = 201, description = "Produto criado", body = crate::models::produto::ProdutoResponse),
        (status = 400, description = "Nome já cadastrado"),
        (status = 404, description = "Categoria ou fornecedor inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let produto = app_state.produto_service.create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(produto)))
}

// GET /produtos
#[utoipa::path(
    get,
    path = "/produtos",
    tag = "Produtos",
    params(PaginationQuery),
    responses((status = 200, description = "Lista paginada de produtos")),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state.produto_service.find_all(&user, pagination).await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /produtos/vencidos
#[utoipa::path(
    get,
    path = "/produtos/vencidos",
    tag = "Produtos",
    responses((status = 200, description = "Produtos com validade vencida")),
    security(("api_jwt" = []))
)]
pub async fn find_vencidos(
    State(app_state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state.produto_service.find_vencidos(&user).await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// GET /produtos/proximos-vencimento?dias=7
#[utoipa::path(
    get,
    path = "/produtos/proximos-vencimento",
    tag = "Produtos",
    params(DiasQuery),
    responses((status = 200, description = "Produtos que vencem dentro do prazo informado")),
    security(("api_jwt" = []))
)]
pub async fn find_proximos_vencimento(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(query): Query<DiasQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let produtos = app_state
        .produto_service
        .find_proximos_vencimento(&user, query.dias)
        .await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// GET /produtos/categoria/{id}
#[utoipa::path(
    get,
    path = "/produtos/categoria/{id}",
    tag = "Produtos",
    params(("id" = i64, Path, description = "ID da categoria")),
    responses((status = 200, description = "Produtos da categoria")),
    security(("api_jwt" = []))
)]
pub async fn find_by_categoria(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state
        .produto_service
        .find_by_categoria(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// GET /produtos/fornecedor/{id}
#[utoipa::path(
    get,
    path = "/produtos/fornecedor/{id}",
    tag = "Produtos",
    params(("id" = i64, Path, description = "ID do fornecedor")),
    responses((status = 200, description = "Produtos do fornecedor")),
    security(("api_jwt" = []))
)]
pub async fn find_by_fornecedor(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state
        .produto_service
        .find_by_fornecedor(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// GET /produtos/{id}
#[utoipa::path(
    get,
    path = "/produtos/{id}",
    tag = "Produtos",
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = crate::models::produto::ProdutoResponse),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let produto = app_state.produto_service.find_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(produto)))
}

// PUT /produtos/{id}
#[utoipa::path(
    put,
    path = "/produtos/{id}",
    tag = "Produtos",
    params(("id" = i64, Path, description = "ID do produto")),
    request_body = UpdateProdutoPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = crate::models::produto::ProdutoResponse),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let produto = app_state.produto_service.update(&user, id, payload).await?;

    Ok((StatusCode::OK, Json(produto)))
}

// DELETE /produtos/{id}
#[utoipa::path(
    delete,
    path = "/produtos/{id}",
    tag = "Produtos",
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto excluído"),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.produto_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
