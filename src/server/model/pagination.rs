use crate::model::api::{PaginatedDto, PaginationDto};

/// Upper bound for any page size requested by a client.
pub const MAX_PER_PAGE: u64 = 100;

/// Validated page request. Pages are 1-based on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Builds a page request from raw query values.
    ///
    /// Missing or zero page becomes 1; the page size falls back to `default_per_page` and is
    /// clamped to `1..=MAX_PER_PAGE`.
    pub fn new(page: Option<u64>, per_page: Option<u64>, default_per_page: u64) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(default_per_page)
                .clamp(1, MAX_PER_PAGE),
        }
    }

    /// Zero-based page index as expected by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

/// One page of results plus the totals needed to render pagination controls.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
            total_pages: total.div_ceil(request.per_page),
        }
    }

    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PaginatedDto<D> {
        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            pagination: PaginationDto {
                page: self.page,
                per_page: self.per_page,
                total: self.total,
                pages: self.total_pages,
            },
        }
    }
}
