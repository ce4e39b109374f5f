use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use super::domain::{NewTutorial, RatingOrder, Tutorial};

/// Persistence capability required by [`super::TutorialService`].
///
/// Matching rules for keyword search and the effect of deleting a missing id
/// belong to the implementation.
#[async_trait]
pub trait TutorialStore: Send + Sync {
    async fn create(&self, input: NewTutorial) -> Result<Tutorial, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    async fn get_all(&self) -> Result<Vec<Tutorial>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Tutorial>, ServiceError>;
    async fn get_by_category(&self, category: &str) -> Result<Vec<Tutorial>, ServiceError>;
    async fn get_by_rating_order(&self, order: RatingOrder) -> Result<Vec<Tutorial>, ServiceError>;
    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Tutorial>, ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmTutorialStore {
    pub db: DatabaseConnection,
}

impl SeaOrmTutorialStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl TutorialStore for SeaOrmTutorialStore {
    async fn create(&self, input: NewTutorial) -> Result<Tutorial, ServiceError> {
        crate::db::tutorial_queries::insert_tutorial(&self.db, input).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        crate::db::tutorial_queries::delete_tutorial(&self.db, id).await
    }

    async fn get_all(&self) -> Result<Vec<Tutorial>, ServiceError> {
        crate::db::tutorial_queries::list_tutorials(&self.db).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Tutorial>, ServiceError> {
        crate::db::tutorial_queries::get_tutorial(&self.db, id).await
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Tutorial>, ServiceError> {
        crate::db::tutorial_queries::list_by_category(&self.db, category).await
    }

    async fn get_by_rating_order(&self, order: RatingOrder) -> Result<Vec<Tutorial>, ServiceError> {
        crate::db::tutorial_queries::list_by_rating(&self.db, order).await
    }

    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Tutorial>, ServiceError> {
        crate::db::tutorial_queries::search_tutorials(&self.db, keyword).await
    }
}

/// Simple in-memory store for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Rows {
        next_id: i32,
        by_id: BTreeMap<i32, Tutorial>,
    }

    /// Mirrors the SeaORM store: id order for listings, case-sensitive
    /// substring search over title and body.
    #[derive(Default)]
    pub struct MemoryTutorialStore {
        rows: Mutex<Rows>,
    }

    impl MemoryTutorialStore {
        fn rows(&self) -> Result<MutexGuard<'_, Rows>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("memory store lock poisoned".into()))
        }

        fn select(&self, keep: impl Fn(&Tutorial) -> bool) -> Result<Vec<Tutorial>, ServiceError> {
            Ok(self.rows()?.by_id.values().filter(|t| keep(*t)).cloned().collect())
        }
    }

    #[async_trait]
    impl TutorialStore for MemoryTutorialStore {
        async fn create(&self, input: NewTutorial) -> Result<Tutorial, ServiceError> {
            let mut rows = self.rows()?;
            rows.next_id += 1;
            let created = Tutorial {
                id: rows.next_id,
                title: input.title,
                body: input.body,
                category: input.category,
                rating: input.rating,
                created_at: chrono::Utc::now().into(),
            };
            rows.by_id.insert(created.id, created.clone());
            Ok(created)
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
            self.rows()?.by_id.remove(&id);
            Ok(())
        }

        async fn get_all(&self) -> Result<Vec<Tutorial>, ServiceError> {
            self.select(|_| true)
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Tutorial>, ServiceError> {
            Ok(self.rows()?.by_id.get(&id).cloned())
        }

        async fn get_by_category(&self, category: &str) -> Result<Vec<Tutorial>, ServiceError> {
            self.select(|t| t.category == category)
        }

        async fn get_by_rating_order(&self, order: RatingOrder) -> Result<Vec<Tutorial>, ServiceError> {
            let mut all = self.select(|_| true)?;
            // stable sort keeps ascending id among equal ratings
            match order {
                RatingOrder::Ascending => all.sort_by_key(|t| t.rating),
                RatingOrder::Descending => all.sort_by(|a, b| b.rating.cmp(&a.rating)),
            }
            Ok(all)
        }

        async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Tutorial>, ServiceError> {
            self.select(|t| t.title.contains(keyword) || t.body.contains(keyword))
        }
    }
}
