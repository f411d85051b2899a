// src/services/estoque_service.rs
//
// Motor de reconciliação do livro de movimentações: toda mutação abre UMA
// transação que lê o saldo do produto com `FOR UPDATE`, valida, grava o
// movimento e persiste o novo total antes do commit. Sem isso, duas SAIDAs
// concorrentes no mesmo produto leriam um saldo defasado e passariam juntas
// na checagem de estoque.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use sqlx::PgPool;

use crate::{
    common::{error::AppError, pagination::{Paginated, PaginationQuery}},
    db::{EstoqueRepository, ProdutoRepository},
    middleware::{auth::AuthUser, rbac::{authorize, STAFF}},
    models::estoque::{
        CreateEstoquePayload, EstoqueMovimentoProduto, EstoqueResponse, Movimento,
        OrigemDestinoQuery, PeriodoQuery, UpdateEstoquePayload,
    },
};

const JANELA_EXCLUSAO_HORAS: i64 = 24;

// ---
// Aritmética de reconciliação (pura, testável sem banco)
// ---

// Soma com detecção de estouro: um ENTRADA válido no schema ainda pode
// empurrar o total além de i32::MAX, e isso é erro de domínio, não panic.
fn soma_verificada(total: i32, delta: i32) -> Result<i32, AppError> {
    total.checked_add(delta).ok_or(AppError::TotalExcedeLimite)
}

fn subtrai_verificada(total: i32, delta: i32) -> Result<i32, AppError> {
    total.checked_sub(delta).ok_or(AppError::TotalExcedeLimite)
}

// Saldo resultante de um movimento novo sobre o total atual.
fn aplicar_criacao(total: i32, tipo: Movimento, quantidade: i32) -> Result<i32, AppError> {
    if tipo.reduz_saldo() && quantidade > total {
        return Err(AppError::EstoqueInsuficiente);
    }
    soma_verificada(total, tipo.delta(quantidade))
}

// Reverte o movimento antigo e aplica o novo sobre o MESMO produto.
// Recalcular do zero evita contagem dupla quando tipo e quantidade mudam
// na mesma atualização.
fn reconciliar(
    total_atual: i32,
    antigo: (Movimento, i32),
    novo: (Movimento, i32),
) -> Result<i32, AppError> {
    let ajustado = subtrai_verificada(total_atual, antigo.0.delta(antigo.1))?;

    if novo.0.reduz_saldo() && novo.1 > ajustado {
        return Err(AppError::EstoqueInsuficiente);
    }

    let total_final = soma_verificada(ajustado, novo.0.delta(novo.1))?;
    if total_final < 0 {
        return Err(AppError::EstoqueNegativo);
    }
    Ok(total_final)
}

// Variante para quando a atualização move o lançamento para outro produto:
// reversão no produto de origem, aplicação no produto de destino.
fn reconciliar_entre_produtos(
    total_origem: i32,
    antigo: (Movimento, i32),
    total_destino: i32,
    novo: (Movimento, i32),
) -> Result<(i32, i32), AppError> {
    let origem_final = subtrai_verificada(total_origem, antigo.0.delta(antigo.1))?;
    if origem_final < 0 {
        return Err(AppError::EstoqueNegativo);
    }

    if novo.0.reduz_saldo() && novo.1 > total_destino {
        return Err(AppError::EstoqueInsuficiente);
    }
    let destino_final = soma_verificada(total_destino, novo.0.delta(novo.1))?;
    if destino_final < 0 {
        return Err(AppError::EstoqueNegativo);
    }

    Ok((origem_final, destino_final))
}

// Saldo após desfazer um movimento excluído.
fn reverter_para_exclusao(total: i32, tipo: Movimento, quantidade: i32) -> Result<i32, AppError> {
    let novo_total = subtrai_verificada(total, tipo.delta(quantidade))?;
    if novo_total < 0 {
        return Err(AppError::EstoqueNegativo);
    }
    Ok(novo_total)
}

fn dentro_da_janela_exclusao(created_at: DateTime<Utc>, agora: DateTime<Utc>) -> bool {
    agora - created_at <= Duration::hours(JANELA_EXCLUSAO_HORAS)
}

// Duas linhas de produto na mesma transação são sempre travadas em ordem
// crescente de id; sem isso, atualizações concorrentes movendo lançamentos
// entre o mesmo par de produtos em sentidos opostos podem entrar em deadlock.
fn ordem_de_travamento(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[derive(Clone)]
pub struct EstoqueService {
    pool: PgPool,
    estoque_repo: EstoqueRepository,
    produto_repo: ProdutoRepository,
}

impl EstoqueService {
    pub fn new(pool: PgPool, estoque_repo: EstoqueRepository, produto_repo: ProdutoRepository) -> Self {
        Self { pool, estoque_repo, produto_repo }
    }

    fn auth_access(&self, user: &AuthUser) -> Result<(), AppError> {
        authorize(
            user,
            STAFF,
            "Apenas administradores e funcionários podem acessar movimentações de estoque.",
        )
    }

    // ---
    // Mutações (transacionais)
    // ---

    pub async fn create(
        &self,
        user: &AuthUser,
        data: CreateEstoquePayload,
    ) -> Result<EstoqueResponse, AppError> {
        self.auth_access(user)?;

        if data.quantidade <= 0 {
            return Err(AppError::QuantidadeInvalida);
        }

        let mut tx = self.pool.begin().await?;

        let produto = self
            .produto_repo
            .find_saldo_for_update(&mut *tx, data.produto_id)
            .await?
            .ok_or(AppError::ProdutoNotFound)?;

        let novo_total = aplicar_criacao(produto.total, data.tipo_movimento, data.quantidade)?;

        let movimento = self.estoque_repo.create(&mut *tx, &data).await?;
        self.produto_repo
            .update_total(&mut *tx, produto.id, novo_total)
            .await?;

        tx.commit().await?;

        Ok(EstoqueResponse::from_estoque(movimento, produto.id, produto.nome))
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i64,
        data: UpdateEstoquePayload,
    ) -> Result<EstoqueResponse, AppError> {
        self.auth_access(user)?;

        if matches!(data.quantidade, Some(q) if q <= 0) {
            return Err(AppError::QuantidadeInvalida);
        }

        let mut tx = self.pool.begin().await?;

        let atual = self
            .estoque_repo
            .find_row_for_update(&mut *tx, id)
            .await?
            .ok_or(AppError::MovimentoNotFound)?;

        let produto_final_id = data.produto_id.unwrap_or(atual.produto_id);
        let novo_tipo = data.tipo_movimento.unwrap_or(atual.tipo_movimento);
        let nova_quantidade = data.quantidade.unwrap_or(atual.quantidade);

        let (produto_id, produto_nome) = if produto_final_id == atual.produto_id {
            let produto = self
                .produto_repo
                .find_saldo_for_update(&mut *tx, produto_final_id)
                .await?
                .ok_or(AppError::ProdutoNotFound)?;

            let novo_total = reconciliar(
                produto.total,
                (atual.tipo_movimento, atual.quantidade),
                (novo_tipo, nova_quantidade),
            )?;

            self.produto_repo
                .update_total(&mut *tx, produto.id, novo_total)
                .await?;

            (produto.id, produto.nome)
        } else {
            // O lançamento mudou de produto: reverte na origem e aplica no
            // destino, com as duas linhas travadas na mesma transação e em
            // ordem crescente de id. Se o destino não existir, nada é
            // persistido.
            let (primeiro_id, segundo_id) =
                ordem_de_travamento(atual.produto_id, produto_final_id);
            let primeiro = self
                .produto_repo
                .find_saldo_for_update(&mut *tx, primeiro_id)
                .await?
                .ok_or(AppError::ProdutoNotFound)?;
            let segundo = self
                .produto_repo
                .find_saldo_for_update(&mut *tx, segundo_id)
                .await?
                .ok_or(AppError::ProdutoNotFound)?;

            let (origem, destino) = if primeiro.id == atual.produto_id {
                (primeiro, segundo)
            } else {
                (segundo, primeiro)
            };

            let (total_origem, total_destino) = reconciliar_entre_produtos(
                origem.total,
                (atual.tipo_movimento, atual.quantidade),
                destino.total,
                (novo_tipo, nova_quantidade),
            )?;

            self.produto_repo
                .update_total(&mut *tx, origem.id, total_origem)
                .await?;
            self.produto_repo
                .update_total(&mut *tx, destino.id, total_destino)
                .await?;

            (destino.id, destino.nome)
        };

        let atualizado = self.estoque_repo.update(&mut *tx, id, &data).await?;

        tx.commit().await?;

        Ok(EstoqueResponse::from_estoque(atualizado, produto_id, produto_nome))
    }

    pub async fn delete(&self, user: &AuthUser, id: i64) -> Result<EstoqueResponse, AppError> {
        self.auth_access(user)?;

        let mut tx = self.pool.begin().await?;

        let movimento = self
            .estoque_repo
            .find_row_for_update(&mut *tx, id)
            .await?
            .ok_or(AppError::MovimentoNotFound)?;

        if !dentro_da_janela_exclusao(movimento.created_at, Utc::now()) {
            return Err(AppError::JanelaExclusaoExpirada);
        }

        let produto = self
            .produto_repo
            .find_saldo_for_update(&mut *tx, movimento.produto_id)
            .await?
            .ok_or(AppError::ProdutoNotFound)?;

        let novo_total =
            reverter_para_exclusao(produto.total, movimento.tipo_movimento, movimento.quantidade)?;

        self.produto_repo
            .update_total(&mut *tx, produto.id, novo_total)
            .await?;
        let excluido = self.estoque_repo.delete(&mut *tx, id).await?;

        tx.commit().await?;

        Ok(EstoqueResponse::from_estoque(excluido, produto.id, produto.nome))
    }

    // ---
    // Consultas (somente leitura, paginadas)
    // ---

    pub async fn find_by_id(&self, user: &AuthUser, id: i64) -> Result<EstoqueResponse, AppError> {
        self.auth_access(user)?;

        let movimento = self
            .estoque_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::MovimentoNotFound)?;

        Ok(movimento.into())
    }

    pub async fn find_all(
        &self,
        user: &AuthUser,
        pagination: PaginationQuery,
    ) -> Result<Paginated<EstoqueResponse>, AppError> {
        self.auth_access(user)?;

        let total = self.estoque_repo.count().await?;
        let movimentos = self
            .estoque_repo
            .find_all(pagination.skip(), pagination.limit)
            .await?;

        let data = movimentos.into_iter().map(EstoqueResponse::from).collect();
        Ok(Paginated::new(data, total, &pagination))
    }

    pub async fn find_by_produto(
        &self,
        user: &AuthUser,
        produto_id: i64,
        pagination: PaginationQuery,
    ) -> Result<Paginated<EstoqueMovimentoProduto>, AppError> {
        self.auth_access(user)?;

        let total = self.estoque_repo.count_by_produto(produto_id).await?;
        let movimentos = self
            .estoque_repo
            .find_by_produto(produto_id, pagination.skip(), pagination.limit)
            .await?;

        let data = movimentos
            .into_iter()
            .map(EstoqueMovimentoProduto::from)
            .collect();
        Ok(Paginated::new(data, total, &pagination))
    }

    pub async fn find_by_periodo(
        &self,
        user: &AuthUser,
        query: PeriodoQuery,
    ) -> Result<Paginated<EstoqueResponse>, AppError> {
        self.auth_access(user)?;

        if query.data_inicio > query.data_fim {
            return Err(AppError::PeriodoInvalido);
        }

        // Intervalo inclusivo em granularidade de dia: [início 00:00, fim+1d).
        let inicio = query.data_inicio.and_time(NaiveTime::MIN).and_utc();
        let fim = (query.data_fim + Duration::days(1))
            .and_time(NaiveTime::MIN)
            .and_utc();

        let pagination = PaginationQuery { page: query.page, limit: query.limit };

        let total = self.estoque_repo.count_by_periodo(inicio, fim).await?;
        let movimentos = self
            .estoque_repo
            .find_by_periodo(inicio, fim, pagination.skip(), pagination.limit)
            .await?;

        let data = movimentos.into_iter().map(EstoqueResponse::from).collect();
        Ok(Paginated::new(data, total, &pagination))
    }

    pub async fn find_by_tipo(
        &self,
        user: &AuthUser,
        tipo: Movimento,
        pagination: PaginationQuery,
    ) -> Result<Paginated<EstoqueResponse>, AppError> {
        self.auth_access(user)?;

        let total = self.estoque_repo.count_by_tipo(tipo).await?;
        let movimentos = self
            .estoque_repo
            .find_by_tipo(tipo, pagination.skip(), pagination.limit)
            .await?;

        let data = movimentos.into_iter().map(EstoqueResponse::from).collect();
        Ok(Paginated::new(data, total, &pagination))
    }

    pub async fn find_by_origem_destino(
        &self,
        user: &AuthUser,
        query: OrigemDestinoQuery,
    ) -> Result<Paginated<EstoqueResponse>, AppError> {
        self.auth_access(user)?;

        let origem_destino = query.origem_destino.trim();
        if origem_destino.is_empty() {
            return Err(AppError::OrigemDestinoVazia);
        }

        let pagination = PaginationQuery { page: query.page, limit: query.limit };

        let total = self
            .estoque_repo
            .count_by_origem_destino(origem_destino, query.tipo_movimento)
            .await?;
        let movimentos = self
            .estoque_repo
            .find_by_origem_destino(
                origem_destino,
                query.tipo_movimento,
                pagination.skip(),
                pagination.limit,
            )
            .await?;

        let data = movimentos.into_iter().map(EstoqueResponse::from).collect();
        Ok(Paginated::new(data, total, &pagination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entrada_soma_no_total() {
        // produto com 20, ENTRADA de 5 => 25
        assert_eq!(aplicar_criacao(20, Movimento::Entrada, 5).unwrap(), 25);
    }

    #[test]
    fn saida_maior_que_saldo_e_rejeitada() {
        // produto com 3, SAIDA de 5 => estoque insuficiente
        let err = aplicar_criacao(3, Movimento::Saida, 5).unwrap_err();
        assert!(matches!(err, AppError::EstoqueInsuficiente));
    }

    #[test]
    fn saida_igual_ao_saldo_zera_o_total() {
        assert_eq!(aplicar_criacao(5, Movimento::Saida, 5).unwrap(), 0);
    }

    #[test]
    fn ajuste_se_comporta_como_baixa() {
        assert_eq!(aplicar_criacao(10, Movimento::Ajuste, 4).unwrap(), 6);
        assert!(matches!(
            aplicar_criacao(2, Movimento::Ajuste, 3).unwrap_err(),
            AppError::EstoqueInsuficiente
        ));
    }

    #[test]
    fn reconciliacao_reverte_o_antigo_e_aplica_o_novo() {
        // total 50, movimento era {ENTRADA, 10}, vira {SAIDA, 4}:
        // 50 - 10 - 4 = 36
        let total = reconciliar(50, (Movimento::Entrada, 10), (Movimento::Saida, 4)).unwrap();
        assert_eq!(total, 36);
    }

    #[test]
    fn reconciliacao_rejeita_saida_maior_que_saldo_ajustado() {
        // total 5 com SAIDA antiga de 3 => ajustado 8; nova SAIDA de 20 não cabe
        let err = reconciliar(5, (Movimento::Saida, 3), (Movimento::Saida, 20)).unwrap_err();
        assert!(matches!(err, AppError::EstoqueInsuficiente));
    }

    #[test]
    fn reconciliacao_nunca_deixa_total_negativo() {
        // reverter uma ENTRADA de 10 sobre total 5 deixaria -5; nem uma
        // ENTRADA nova pequena pode ser aceita
        let err = reconciliar(5, (Movimento::Entrada, 10), (Movimento::Entrada, 1)).unwrap_err();
        assert!(matches!(err, AppError::EstoqueNegativo));
    }

    #[test]
    fn reconciliacao_entre_produtos_ajusta_os_dois_saldos() {
        // origem 30 perde a ENTRADA de 10 => 20; destino 7 recebe SAIDA de 5 => 2
        let (origem, destino) = reconciliar_entre_produtos(
            30,
            (Movimento::Entrada, 10),
            7,
            (Movimento::Saida, 5),
        )
        .unwrap();
        assert_eq!(origem, 20);
        assert_eq!(destino, 2);
    }

    #[test]
    fn reconciliacao_entre_produtos_protege_a_origem() {
        // reverter ENTRADA de 10 numa origem com total 4 ficaria negativo
        let err = reconciliar_entre_produtos(4, (Movimento::Entrada, 10), 50, (Movimento::Entrada, 1))
            .unwrap_err();
        assert!(matches!(err, AppError::EstoqueNegativo));
    }

    #[test]
    fn exclusao_reverte_o_movimento() {
        // SAIDA de 4 excluída devolve as unidades
        assert_eq!(reverter_para_exclusao(10, Movimento::Saida, 4).unwrap(), 14);
        // ENTRADA de 5 excluída retira as unidades
        assert_eq!(reverter_para_exclusao(10, Movimento::Entrada, 5).unwrap(), 5);
    }

    #[test]
    fn exclusao_que_negativaria_o_saldo_e_rejeitada() {
        // total 2, movimento era ENTRADA de 5: reverter daria -3
        let err = reverter_para_exclusao(2, Movimento::Entrada, 5).unwrap_err();
        assert!(matches!(err, AppError::EstoqueNegativo));
    }

    #[test]
    fn entrada_que_estoura_o_limite_do_total_e_rejeitada() {
        // total perto do teto, ENTRADA pequena: erro de domínio, não panic
        let err = aplicar_criacao(i32::MAX - 1, Movimento::Entrada, 5).unwrap_err();
        assert!(matches!(err, AppError::TotalExcedeLimite));
    }

    #[test]
    fn reconciliacao_detecta_estouro_ao_reverter_e_ao_reaplicar() {
        // reverter uma SAIDA antiga somaria além do teto
        let err = reconciliar(
            i32::MAX - 1,
            (Movimento::Saida, 10),
            (Movimento::Saida, 1),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::TotalExcedeLimite));

        // exclusão de SAIDA devolve unidades; perto do teto também estoura
        let err = reverter_para_exclusao(i32::MAX, Movimento::Saida, 1).unwrap_err();
        assert!(matches!(err, AppError::TotalExcedeLimite));
    }

    #[test]
    fn travamento_de_duas_linhas_e_sempre_em_ordem_crescente() {
        assert_eq!(ordem_de_travamento(3, 7), (3, 7));
        assert_eq!(ordem_de_travamento(7, 3), (3, 7));
        assert_eq!(ordem_de_travamento(5, 5), (5, 5));
    }

    #[test]
    fn janela_de_exclusao_de_24_horas() {
        let agora = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();

        let criado_23h59 = agora - Duration::hours(23) - Duration::minutes(59);
        assert!(dentro_da_janela_exclusao(criado_23h59, agora));

        let criado_24h01 = agora - Duration::hours(24) - Duration::minutes(1);
        assert!(!dentro_da_janela_exclusao(criado_24h01, agora));
    }
}
