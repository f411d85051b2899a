// src/handlers/clientes.rs

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
    models::cliente::{CreateClientePayload, UpdateClientePayload},
};

// POST /clientes
#[utoipa::path(
    post,
    path = "/clientes",
    tag = "Clientes",
    request_body = CreateClientePayload,
    responses(
        (status = 201, description = "Cadastro de cliente criado", body = crate::models::cliente::Cliente),
        (status = 400, description = "CPF ou usuário já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = app_state.cliente_service.create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

// GET /clientes
#[utoipa::path(
    get,
    path = "/clientes",
    tag = "Clientes",
    params(PaginationQuery),
    responses((status = 200, description = "Lista paginada de clientes")),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state.cliente_service.find_all(&user, pagination).await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /clientes/{id}
#[utoipa::path(
    get,
    path = "/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cadastro")),
    responses(
        (status = 200, description = "Cadastro encontrado", body = crate::models::cliente::Cliente),
        (status = 404, description = "Cadastro não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state.cliente_service.find_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// PUT /clientes/{id}
#[utoipa::path(
    put,
    path = "/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cadastro")),
    request_body = UpdateClientePayload,
    responses(
        (status = 200, description = "Cadastro atualizado", body = crate::models::cliente::Cliente),
        (status = 404, description = "Cadastro não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = app_state.cliente_service.update(&user, id, payload).await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// DELETE /clientes/{id}
#[utoipa::path(
    delete,
    path = "/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cadastro")),
    responses(
        (status = 204, description = "Cadastro excluído"),
        (status = 404, description = "Cadastro não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cliente_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
