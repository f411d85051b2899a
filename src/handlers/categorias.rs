// src/handlers/categorias.rs

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
    models::categoria::{CreateCategoriaPayload, UpdateCategoriaPayload},
};

// POST /categorias
#[utoipa::path(
    post,
    path = "/categorias",
    tag = "Categorias",
    request_body = CreateCategoriaPayload,
    responses(
        (status = 201, description = "Categoria criada", body = crate::models::categoria::Categoria),
        (status = 400, description = "Nome já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCategoriaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let categoria = app_state.categoria_service.create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(categoria)))
}

// GET /categorias
#[utoipa::path(
    get,
    path = "/categorias",
    tag = "Categorias",
    params(PaginationQuery),
    responses((status = 200, description = "Lista paginada de categorias")),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state
        .categoria_service
        .find_all(&user, pagination)
        .await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /categorias/{id}
#[utoipa::path(
    get,
    path = "/categorias/{id}",
    tag = "Categorias",
    params(("id" = i64, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria encontrada", body = crate::models::categoria::Categoria),
        (status = 404, description = "Categoria não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let categoria = app_state.categoria_service.find_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(categoria)))
}

// PUT /categorias/{id}
#[utoipa::path(
    put,
    path = "/categorias/{id}",
    tag = "Categorias",
    params(("id" = i64, Path, description = "ID da categoria")),
    request_body = UpdateCategoriaPayload,
    responses(
        (status = 200, description = "Categoria atualizada", body = crate::models::categoria::Categoria),
        (status = 404, description = "Categoria não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoriaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let categoria = app_state
        .categoria_service
        .update(&user, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(categoria)))
}

// DELETE /categorias/{id}
#[utoipa::path(
    delete,
    path = "/categorias/{id}",
    tag = "Categorias",
    params(("id" = i64, Path, description = "ID da categoria")),
    responses(
        (status = 204, description = "Categoria excluída"),
        (status = 404, description = "Categoria não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.categoria_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
