//! Marketplace item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserSummary;

/// A marketplace listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: Uuid,

    /// Listing title
    pub title: String,

    /// Listing description
    pub description: String,

    /// Asking price
    pub price: f64,

    /// Creator of the listing; only the creator may mutate it
    pub created_by: UserSummary,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(title: String, description: String, price: f64, created_by: UserSummary) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            price,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if the given user owns this item
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.created_by.id == user_id
    }

    /// Apply an update from the allow-listed fields
    pub fn apply_update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserSummary {
        UserSummary {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_ownership() {
        let creator = owner();
        let item = Item::new("Desk".into(), "Small desk".into(), 40.0, creator.clone());
        assert!(item.is_owned_by(creator.id));
        assert!(!item.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_apply_update_partial() {
        let mut item = Item::new("Desk".into(), "Small desk".into(), 40.0, owner());
        item.apply_update(None, None, Some(35.0));
        assert_eq!(item.title, "Desk");
        assert_eq!(item.price, 35.0);
    }
}
