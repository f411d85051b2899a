// src/handlers/estoques.rs
//
// Rotas do livro de movimentações. As mutações delegam ao serviço, que
// cuida da transação e da reconciliação do saldo do produto.

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
    models::estoque::{
        CreateEstoquePayload, Movimento, OrigemDestinoQuery, PeriodoQuery, UpdateEstoquePayload,
    },
};

// POST /estoques
#[utoipa::path(
    post,
    path = "/estoques",
    tag = "Estoques",
    request_body = CreateEstoquePayload,
    responses(
        (status = 201, description = "Movimento registrado e saldo atualizado", body = crate::models::estoque::EstoqueResponse),
        (status = 400, description = "Quantidade inválida ou estoque insuficiente"),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateEstoquePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let movimento = app_state.estoque_service.create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(movimento)))
}

// GET /estoques
#[utoipa::path(
    get,
    path = "/estoques",
    tag = "Estoques",
    params(PaginationQuery),
    responses((status = 200, description = "Lista paginada de movimentos")),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state.estoque_service.find_all(&user, pagination).await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /estoques/periodo?dataInicio=...&dataFim=...
#[utoipa::path(
    get,
    path = "/estoques/periodo",
    tag = "Estoques",
    params(PeriodoQuery),
    responses(
        (status = 200, description = "Movimentos dentro do período (inclusivo)"),
        (status = 400, description = "Data inicial maior que a final")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_periodo(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(query): Query<PeriodoQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let pagina = app_state.estoque_service.find_by_periodo(&user, query).await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /estoques/origem-destino?origemDestino=...&tipoMovimento=...
#[utoipa::path(
    get,
    path = "/estoques/origem-destino",
    tag = "Estoques",
    params(OrigemDestinoQuery),
    responses(
        (status = 200, description = "Movimentos filtrados por origem/destino e tipo"),
        (status = 400, description = "Origem/Destino vazio")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_origem_destino(
    State(app_state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrigemDestinoQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let pagina = app_state
        .estoque_service
        .find_by_origem_destino(&user, query)
        .await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /estoques/tipo/{tipo_movimento}
#[utoipa::path(
    get,
    path = "/estoques/tipo/{tipo_movimento}",
    tag = "Estoques",
    params(
        ("tipo_movimento" = Movimento, Path, description = "ENTRADA, SAIDA ou AJUSTE"),
        PaginationQuery
    ),
    responses((status = 200, description = "Movimentos do tipo informado")),
    security(("api_jwt" = []))
)]
pub async fn find_by_tipo(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(tipo): Path<Movimento>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state
        .estoque_service
        .find_by_tipo(&user, tipo, pagination)
        .await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /estoques/produto/{id}
#[utoipa::path(
    get,
    path = "/estoques/produto/{id}",
    tag = "Estoques",
    params(
        ("id" = i64, Path, description = "ID do produto"),
        PaginationQuery
    ),
    responses((status = 200, description = "Movimentos do produto")),
    security(("api_jwt" = []))
)]
pub async fn find_by_produto(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    pagination.validate()?;

    let pagina = app_state
        .estoque_service
        .find_by_produto(&user, id, pagination)
        .await?;

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /estoques/{id}
#[utoipa::path(
    get,
    path = "/estoques/{id}",
    tag = "Estoques",
    params(("id" = i64, Path, description = "ID do movimento")),
    responses(
        (status = 200, description = "Movimento encontrado", body = crate::models::estoque::EstoqueResponse),
        (status = 404, description = "Movimento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let movimento = app_state.estoque_service.find_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(movimento)))
}

// PUT /estoques/{id}
#[utoipa::path(
    put,
    path = "/estoques/{id}",
    tag = "Estoques",
    params(("id" = i64, Path, description = "ID do movimento")),
    request_body = UpdateEstoquePayload,
    responses(
        (status = 200, description = "Movimento atualizado e saldos reconciliados", body = crate::models::estoque::EstoqueResponse),
        (status = 400, description = "Reconciliação rejeitada"),
        (status = 404, description = "Movimento ou produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEstoquePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let movimento = app_state.estoque_service.update(&user, id, payload).await?;

    Ok((StatusCode::OK, Json(movimento)))
}

// DELETE /estoques/{id}
#[utoipa::path(
    delete,
    path = "/estoques/{id}",
    tag = "Estoques",
    params(("id" = i64, Path, description = "ID do movimento")),
    responses(
        (status = 200, description = "Movimento excluído e saldo revertido", body = crate::models::estoque::EstoqueResponse),
        (status = 403, description = "Fora da janela de 24 horas"),
        (status = 404, description = "Movimento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let excluido = app_state.estoque_service.delete(&user, id).await?;

    Ok((StatusCode::OK, Json(excluido)))
}
