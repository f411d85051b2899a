use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::{
    common::error::AppError,
    models::estoque::{
        CreateEstoquePayload, Estoque, EstoqueComProduto, Movimento, UpdateEstoquePayload,
    },
};

const SELECT_COM_PRODUTO: &str = r#"
SELECT e.id, e.tipo_movimento, e.quantidade, e.data_movimento,
       e.origem_destino, e.observacoes, e.produto_id,
       p.nome AS produto_nome, e.created_at, e.updated_at
FROM estoques e
JOIN produtos p ON p.id = e.produto_id
"#;

// Repositório do livro de movimentações. Toda lista filtrada tem a
// contagem correspondente para a paginação.
#[derive(Clone)]
pub struct EstoqueRepository {
    pool: PgPool,
}

impl EstoqueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Escritas (sempre dentro da transação aberta pelo serviço)
    // ---

    pub async fn create(
        &self,
        conn: &mut PgConnection,
        data: &CreateEstoquePayload,
    ) -> Result<Estoque, AppError> {
        let movimento = sqlx::query_as::<_, Estoque>(
            r#"
            INSERT INTO estoques (tipo_movimento, quantidade, data_movimento, origem_destino, observacoes, produto_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.tipo_movimento)
        .bind(data.quantidade)
        .bind(data.data_movimento)
        .bind(&data.origem_destino)
        .bind(&data.observacoes)
        .bind(data.produto_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(movimento)
    }

    // Lê a linha crua do movimento dentro da transação, travando-a para
    // o restante da reconciliação.
    pub async fn find_row_for_update(
        &self,
        conn: &mut PgConnection,
        id: i64,
    ) -> Result<Option<Estoque>, AppError> {
        let movimento =
            sqlx::query_as::<_, Estoque>("SELECT * FROM estoques WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        Ok(movimento)
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &UpdateEstoquePayload,
    ) -> Result<Estoque, AppError> {
        let movimento = sqlx::query_as::<_, Estoque>(
            r#"
            UPDATE estoques SET
                tipo_movimento = COALESCE($2, tipo_movimento),
                quantidade = COALESCE($3, quantidade),
                data_movimento = COALESCE($4, data_movimento),
                origem_destino = COALESCE($5, origem_destino),
                observacoes = COALESCE($6, observacoes),
                produto_id = COALESCE($7, produto_id),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.tipo_movimento)
        .bind(data.quantidade)
        .bind(data.data_movimento)
        .bind(data.origem_destino.as_deref())
        .bind(data.observacoes.as_deref())
        .bind(data.produto_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(movimento)
    }

    pub async fn delete(&self, conn: &mut PgConnection, id: i64) -> Result<Estoque, AppError> {
        let movimento =
            sqlx::query_as::<_, Estoque>("DELETE FROM estoques WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_one(&mut *conn)
                .await?;
        Ok(movimento)
    }

    // ---
    // Leituras (pool, consistência de snapshot)
    // ---

    pub async fn find_by_id(&self, id: i64) -> Result<Option<EstoqueComProduto>, AppError> {
        let sql = format!("{SELECT_COM_PRODUTO} WHERE e.id = $1");
        let movimento = sqlx::query_as::<_, EstoqueComProduto>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(movimento)
    }

    pub async fn find_all(&self, skip: i64, take: i64) -> Result<Vec<EstoqueComProduto>, AppError> {
        let sql = format!("{SELECT_COM_PRODUTO} ORDER BY e.created_at DESC OFFSET $1 LIMIT $2");
        let movimentos = sqlx::query_as::<_, EstoqueComProduto>(&sql)
            .bind(skip)
            .bind(take)
            .fetch_all(&self.pool)
            .await?;
        Ok(movimentos)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM estoques")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn find_by_produto(
        &self,
        produto_id: i64,
        skip: i64,
        take: i64,
    ) -> Result<Vec<EstoqueComProduto>, AppError> {
        let sql = format!(
            "{SELECT_COM_PRODUTO} WHERE e.produto_id = $1 ORDER BY e.data_movimento DESC OFFSET $2 LIMIT $3"
        );
        let movimentos = sqlx::query_as::<_, EstoqueComProduto>(&sql)
            .bind(produto_id)
            .bind(skip)
            .bind(take)
            .fetch_all(&self.pool)
            .await?;
        Ok(movimentos)
    }

    pub async fn count_by_produto(&self, produto_id: i64) -> Result<i64, AppError> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM estoques WHERE produto_id = $1")
                .bind(produto_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    pub async fn find_by_periodo(
        &self,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
        skip: i64,
        take: i64,
    ) -> Result<Vec<EstoqueComProduto>, AppError> {
        let sql = format!(
            "{SELECT_COM_PRODUTO} WHERE e.data_movimento >= $1 AND e.data_movimento < $2 \
             ORDER BY e.data_movimento DESC OFFSET $3 LIMIT $4"
        );
        let movimentos = sqlx::query_as::<_, EstoqueComProduto>(&sql)
            .bind(inicio)
            .bind(fim)
            .bind(skip)
            .bind(take)
            .fetch_all(&self.pool)
            .await?;
        Ok(movimentos)
    }

    pub async fn count_by_periodo(
        &self,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM estoques WHERE data_movimento >= $1 AND data_movimento < $2",
        )
        .bind(inicio)
        .bind(fim)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn find_by_tipo(
        &self,
        tipo: Movimento,
        skip: i64,
        take: i64,
    ) -> Result<Vec<EstoqueComProduto>, AppError> {
        let sql = format!(
            "{SELECT_COM_PRODUTO} WHERE e.tipo_movimento = $1 \
             ORDER BY e.data_movimento DESC OFFSET $2 LIMIT $3"
        );
        let movimentos = sqlx::query_as::<_, EstoqueComProduto>(&sql)
            .bind(tipo)
            .bind(skip)
            .bind(take)
            .fetch_all(&self.pool)
            .await?;
        Ok(movimentos)
    }

    pub async fn count_by_tipo(&self, tipo: Movimento) -> Result<i64, AppError> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM estoques WHERE tipo_movimento = $1")
                .bind(tipo)
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    pub async fn find_by_origem_destino(
        &self,
        origem_destino: &str,
        tipo: Movimento,
        skip: i64,
        take: i64,
    ) -> Result<Vec<EstoqueComProduto>, AppError> {
        let sql = format!(
            "{SELECT_COM_PRODUTO} WHERE e.origem_destino = $1 AND e.tipo_movimento = $2 \
             ORDER BY e.data_movimento DESC OFFSET $3 LIMIT $4"
        );
        let movimentos = sqlx::query_as::<_, EstoqueComProduto>(&sql)
            .bind(origem_destino)
            .bind(tipo)
            .bind(skip)
            .bind(take)
            .fetch_all(&self.pool)
            .await?;
        Ok(movimentos)
    }

    pub async fn count_by_origem_destino(
        &self,
        origem_destino: &str,
        tipo: Movimento,
    ) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM estoques WHERE origem_destino = $1 AND tipo_movimento = $2",
        )
        .bind(origem_destino)
        .bind(tipo)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }
}
