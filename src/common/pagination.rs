// src/common/pagination.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

// Parâmetros de paginação compartilhados por todas as listagens.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page deve ser no mínimo 1."))]
    pub page: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit deve estar entre 1 e 100."))]
    pub limit: i64,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PaginationQuery {
    // Offset equivalente ao skip = (page - 1) * limit.
    pub fn skip(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, pagination: &PaginationQuery) -> Self {
        Self {
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: total_pages(total, pagination.limit),
        }
    }
}

// Envelope `{ data, meta }` das respostas paginadas.
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(data: Vec<T>, total: i64, pagination: &PaginationQuery) -> Self {
        Self {
            data,
            meta: PageMeta::new(total, pagination),
        }
    }
}

fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_para_segunda_pagina() {
        let q = PaginationQuery { page: 2, limit: 10 };
        assert_eq!(q.skip(), 10);
    }

    #[test]
    fn total_pages_arredonda_para_cima() {
        let q = PaginationQuery { page: 2, limit: 10 };
        let meta = PageMeta::new(25, &q);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.page, 2);
        assert_eq!(meta.limit, 10);
    }

    #[test]
    fn total_pages_exato() {
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
    }
}
