// src/handlers/users.rs

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
    models::user::{CreateUserPayload, UpdateUserPayload},
};

// POST /usuarios (registro público, sem token)
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Usuarios",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = crate::models::user::User),
        (status = 409, description = "E-mail já em uso")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = app_state.user_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// GET /usuarios
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuarios",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Lista paginada de usuários")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state.user_service.find_all(&user, pagination).await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /usuarios/{id}
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = crate::models::user::User),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let encontrado = app_state.user_service.find_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(encontrado)))
}

// PUT /usuarios/{id}
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "ID do usuário")),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "Usuário atualizado", body = crate::models::user::User),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let atualizado = app_state.user_service.update(&user, id, payload).await?;

    Ok((StatusCode::OK, Json(atualizado)))
}

// DELETE /usuarios/{id}
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário excluído"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.user_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
