use sea_orm::{ConnectionTrait, EntityTrait, ItemsAndPagesNumber, PaginatorTrait, Select};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppResult;

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;
/// Keeps `page * per_page` inside the signed 64-bit OFFSET range.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PER_PAGE;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PageParams {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).clamp(1, MAX_PAGE)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
    pub per_page: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total: u64, pages: u64, current_page: u64, per_page: u64) -> Self {
        Self {
            content,
            total,
            pages,
            current_page,
            per_page,
            has_next: current_page < pages,
            has_prev: current_page > 1,
        }
    }
}

/// Runs `select` through sea-orm's paginator. Pages past the end come back empty.
pub async fn paginate<'db, C, E>(
    db: &'db C,
    select: Select<E>,
    params: &PageParams,
) -> AppResult<Page<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Send + Sync + 'db,
{
    let page = params.page();
    let per_page = params.per_page();

    let paginator = select.paginate(db, per_page);
    let ItemsAndPagesNumber {
        number_of_items,
        number_of_pages,
    } = paginator.num_items_and_pages().await?;
    let content = if page > number_of_pages {
        Vec::new()
    } else {
        paginator.fetch_page(page - 1).await?
    };

    Ok(Page::new(
        content,
        number_of_items,
        number_of_pages,
        page,
        per_page,
    ))
}
