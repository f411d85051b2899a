// src/handlers/funcionarios.rs

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
    models::funcionario::{CreateFuncionarioPayload, UpdateFuncionarioPayload},
};

// POST /funcionarios
#[utoipa::path(
    post,
    path = "/funcionarios",
    tag = "Funcionarios",
    request_body = CreateFuncionarioPayload,
    responses(
        (status = 201, description = "Cadastro de funcionário criado", body = crate::models::funcionario::Funcionario),
        (status = 400, description = "CPF ou usuário já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateFuncionarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let funcionario = app_state
        .funcionario_service
        .create(&user, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(funcionario)))
}

// GET /funcionarios
#[utoipa::path(
    get,
    path = "/funcionarios",
    tag = "Funcionarios",
    params(PaginationQuery),
    responses((status = 200, description = "Lista paginada de funcionários")),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state
        .funcionario_service
        .find_all(&user, pagination)
        .await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /funcionarios/{id}
#[utoipa::path(
    get,
    path = "/funcionarios/{id}",
    tag = "Funcionarios",
    params(("id" = i64, Path, description = "ID do cadastro")),
    responses(
        (status = 200, description = "Cadastro encontrado", body = crate::models::funcionario::Funcionario),
        (status = 404, description = "Cadastro não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let funcionario = app_state.funcionario_service.find_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(funcionario)))
}

// PUT /funcionarios/{id}
#[utoipa::path(
    put,
    path = "/funcionarios/{id}",
    tag = "Funcionarios",
    params(("id" = i64, Path, description = "ID do cadastro")),
    request_body = UpdateFuncionarioPayload,
    responses(
        (status = 200, description = "Cadastro atualizado", body = crate::models::funcionario::Funcionario),
        (status = 404, description = "Cadastro não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFuncionarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let funcionario = app_state
        .funcionario_service
        .update(&user, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(funcionario)))
}

// DELETE /funcionarios/{id}
#[utoipa::path(
    delete,
    path = "/funcionarios/{id}",
    tag = "Funcionarios",
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
    app_state.funcionario_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
