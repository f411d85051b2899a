// src/handlers/fornecedores.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{error::AppError, pagination::PaginationQuery},
    config::AppState,
    middleware::auth::AuthUser,
    models::fornecedor::{BuscaNomeQuery, CreateFornecedorPayload, UpdateFornecedorPayload},
};

// POST /fornecedores
#[utoipa::path(
    post,
    path = "/fornecedores",
    tag = "Fornecedores",
    request_body = CreateFornecedorPayload,
    responses(
        (status = 201, description = "Fornecedor criado", body = crate::models::fornecedor::Fornecedor),
        (status = 400, description = "CNPJ já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateFornecedorPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let fornecedor = app_state.fornecedor_service.create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(fornecedor)))
}

// GET /fornecedores
#[utoipa::path(
    get,
    path = "/fornecedores",
    tag = "Fornecedores",
    params(PaginationQuery),
    responses((status = 200, description = "Lista paginada de fornecedores")),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state
        .fornecedor_service
        .find_all(&user, pagination)
        .await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /fornecedores/busca?nome=...
#[utoipa::path(
    get,
    path = "/fornecedores/busca",
    tag = "Fornecedores",
    params(BuscaNomeQuery),
    responses((status = 200, description = "Fornecedores com nome semelhante")),
    security(("api_jwt" = []))
)]
pub async fn search_by_nome(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(query): Query<BuscaNomeQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let fornecedores = app_state
        .fornecedor_service
        .search_by_nome(&user, &query.nome)
        .await?;

    Ok((StatusCode::OK, Json(fornecedores)))
}

// GET /fornecedores/{id}
#[utoipa::path(
    get,
    path = "/fornecedores/{id}",
    tag = "Fornecedores",
    params(("id" = i64, Path, description = "ID do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor encontrado", body = crate::models::fornecedor::Fornecedor),
        (status = 404, description = "Fornecedor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let fornecedor = app_state.fornecedor_service.find_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(fornecedor)))
}

// PUT /fornecedores/{id}
#[utoipa::path(
    put,
    path = "/fornecedores/{id}",
    tag = "Fornecedores",
    params(("id" = i64, Path, description = "ID do fornecedor")),
    request_body = UpdateFornecedorPayload,
    responses(
        (status = 200, description = "Fornecedor atualizado", body = crate::models::fornecedor::Fornecedor),
        (status = 404, description = "Fornecedor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFornecedorPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let fornecedor = app_state
        .fornecedor_service
        .update(&user, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(fornecedor)))
}

// DELETE /fornecedores/{id}
#[utoipa::path(
    delete,
    path = "/fornecedores/{id}",
    tag = "Fornecedores",
    params(("id" = i64, Path, description = "ID do fornecedor")),
    responses(
        (status = 204, description = "Fornecedor excluído"),
        (status = 404, description = "Fornecedor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.fornecedor_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
