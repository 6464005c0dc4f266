use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    Value,
};

use super::dtos::{CategoryTree, CreateCategoryRequest, UpdateCategoryRequest};
use super::entities::category;
use crate::modules::products::entities::product;
use crate::shared::error::{AppError, AppResult};
use crate::shared::transaction::finish;

pub struct CategoryService;

impl CategoryService {
    pub async fn find<C>(db: &C, id: i32) -> AppResult<category::Model>
    where
        C: ConnectionTrait,
    {
        category::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Category"))
    }

    async fn children<C>(db: &C, parent_id: i32) -> AppResult<Vec<category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(category::Entity::find()
            .filter(category::Column::ParentId.eq(parent_id))
            .order_by_asc(category::Column::Id)
            .all(db)
            .await?)
    }

    /// Root categories, each with its direct subcategories.
    pub async fn list<C>(db: &C) -> AppResult<Vec<CategoryTree>>
    where
        C: ConnectionTrait,
    {
        let all = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(db)
            .await?;

        let (roots, children): (Vec<_>, Vec<_>) =
            all.into_iter().partition(|c| c.parent_id.is_none());

        Ok(roots
            .into_iter()
            .map(|root| {
                let subcategories = children
                    .iter()
                    .filter(|c| c.parent_id == Some(root.id))
                    .cloned()
                    .collect();
                CategoryTree {
                    category: root,
                    subcategories,
                }
            })
            .collect())
    }

    pub async fn get<C>(db: &C, id: i32) -> AppResult<CategoryTree>
    where
        C: ConnectionTrait,
    {
        let category = Self::find(db, id).await?;
        let subcategories = Self::children(db, id).await?;
        Ok(CategoryTree {
            category,
            subcategories,
        })
    }

    async fn ensure_parent<C>(db: &C, parent_id: Option<i32>) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        if let Some(parent_id) = parent_id {
            category::Entity::find_by_id(parent_id)
                .one(db)
                .await?
                .ok_or_else(|| AppError::not_found("Parent category"))?;
        }
        Ok(())
    }

    /// Walks up from `parent_id`; reaching `id` would close a cycle.
    async fn ensure_not_descendant<C>(db: &C, id: i32, parent_id: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let mut seen = HashSet::new();
        let mut cursor = Some(parent_id);

        while let Some(current) = cursor {
            if current == id {
                return Err(AppError::Validation(
                    "A category cannot be placed under itself or its subcategories".to_string(),
                ));
            }
            if !seen.insert(current) {
                break;
            }
            let ancestor = category::Entity::find_by_id(current)
                .one(db)
                .await?
                .ok_or_else(|| AppError::not_found("Parent category"))?;
            cursor = ancestor.parent_id;
        }
        Ok(())
    }

    async fn ensure_slug_free<C>(db: &C, slug: &str, except: Option<i32>) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let mut query = category::Entity::find().filter(category::Column::Slug.eq(slug));
        if let Some(id) = except {
            query = query.filter(category::Column::Id.ne(id));
        }
        if query.one(db).await?.is_some() {
            return Err(AppError::Validation(
                "Category slug already exists".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create<C>(db: &C, payload: CreateCategoryRequest) -> AppResult<category::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        Self::ensure_parent(db, payload.parent_id).await?;
        Self::ensure_slug_free(db, &payload.slug, None).await?;

        let category = category::ActiveModel {
            name: Set(payload.name),
            slug: Set(payload.slug),
            description: Set(payload.description),
            parent_id: Set(payload.parent_id),
            image_url: Set(payload.image_url),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!("Created category {} ({})", category.id, category.slug);
        Ok(category)
    }

    pub async fn update<C>(
        db: &C,
        id: i32,
        payload: UpdateCategoryRequest,
    ) -> AppResult<category::Model>
    where
        C: ConnectionTrait,
    {
        payload.validate()?;
        let existing = Self::find(db, id).await?;

        if let Some(parent_id) = payload.parent_id {
            Self::ensure_not_descendant(db, id, parent_id).await?;
        }
        if let Some(slug) = &payload.slug {
            Self::ensure_slug_free(db, slug, Some(id)).await?;
        }

        let mut active: category::ActiveModel = existing.into();
        payload.apply(&mut active);
        Ok(active.update(db).await?)
    }

    /// Refuses while products still reference the category; subcategories
    /// become roots.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let result = Self::delete_internal(&txn, id).await;
        finish(txn, result).await
    }

    async fn delete_internal<C>(db: &C, id: i32) -> AppResult<()>
    where
        C: ConnectionTrait,
    {
        let existing = Self::find(db, id).await?;

        let products = product::Entity::find()
            .filter(product::Column::CategoryId.eq(id))
            .count(db)
            .await?;
        if products > 0 {
            return Err(AppError::Validation(format!(
                "Cannot delete category: {} product(s) still reference it",
                products
            )));
        }

        category::Entity::update_many()
            .col_expr(category::Column::ParentId, Expr::value(Value::Int(None)))
            .filter(category::Column::ParentId.eq(id))
            .exec(db)
            .await?;

        existing.delete(db).await?;
        tracing::info!("Deleted category {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn category(id: i32, parent_id: Option<i32>) -> category::Model {
        category::Model {
            id,
            name: format!("Category {}", id),
            slug: format!("category-{}", id),
            description: None,
            parent_id,
            image_url: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn test_list_nests_direct_children_under_roots() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                category(1, None),
                category(2, Some(1)),
                category(3, None),
                category(4, Some(1)),
            ]])
            .into_connection();

        let tree = CategoryService::list(&db).await.unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].category.id, 1);
        let child_ids: Vec<i32> = tree[0].subcategories.iter().map(|c| c.id).collect();
        assert_eq!(child_ids, vec![2, 4]);
        assert!(tree[1].subcategories.is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_self_parent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![category(5, None)]])
            .into_connection();

        let payload = UpdateCategoryRequest {
            parent_id: Some(5),
            ..Default::default()
        };
        let result = CategoryService::update(&db, 5, payload).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_moving_under_own_subcategory() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![category(1, None)]])
            .append_query_results([vec![category(2, Some(1))]])
            .into_connection();

        let payload = UpdateCategoryRequest {
            parent_id: Some(2),
            ..Default::default()
        };
        let result = CategoryService::update(&db, 1, payload).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_with_missing_parent_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection();

        let payload = CreateCategoryRequest {
            name: "Filters".to_string(),
            slug: "filters".to_string(),
            description: None,
            parent_id: Some(42),
            image_url: None,
        };
        let result = CategoryService::create(&db, payload).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
