//! MySQL implementation of the ItemRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hub_core::domain::entities::item::Item;
use hub_core::errors::DomainError;
use hub_core::repositories::ItemRepository;

use super::{column, db_error, summary_columns, uuid_column};

const ITEM_SELECT: &str = r#"
    SELECT i.id, i.title, i.description, i.price, i.created_at, i.updated_at,
           u.id AS creator_id, u.name AS creator_name, u.email AS creator_email
    FROM items i
    INNER JOIN users u ON u.id = i.created_by
"#;

/// MySQL-backed item repository
pub struct MySqlItemRepository {
    pool: MySqlPool,
}

impl MySqlItemRepository {
    /// Create a new item repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &MySqlRow) -> Result<Item, DomainError> {
        Ok(Item {
            id: uuid_column(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            price: column(row, "price")?,
            created_by: summary_columns(row, "creator")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        let query = format!("{ITEM_SELECT} ORDER BY i.created_at DESC");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list items", e))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let query = format!("{ITEM_SELECT} WHERE i.id = ?");
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query item", e))?;

        row.as_ref().map(Self::row_to_item).transpose()
    }

    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let query = r#"
            INSERT INTO items (id, title, description, price, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(item.id.to_string())
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.price)
            .bind(item.created_by.id.to_string())
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create item", e))?;

        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        let query = r#"
            UPDATE items
            SET title = ?, description = ?, price = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.price)
            .bind(item.updated_at)
            .bind(item.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update item", e))?;

        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete item", e))?;

        Ok(result.rows_affected() > 0)
    }
}
