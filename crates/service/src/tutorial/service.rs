use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::errors::ServiceError;
use super::domain::{ErrorPolicy, NewTutorial, OperationOutcome, RatingOrder, Tutorial, TutorialOperation};
use super::repository::TutorialStore;

/// Application service validating tutorial input and delegating to a store.
///
/// Create and delete never fail past this boundary: store errors become an
/// [`OperationOutcome`] carrying a generic message. Read operations raise
/// [`ServiceError::Internal`] instead.
pub struct TutorialService<S: TutorialStore> {
    store: Arc<S>,
}

impl<S: TutorialStore> TutorialService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Validate and persist a new tutorial.
    ///
    /// # Examples
    /// ```
    /// use service::tutorial::{TutorialService, repository::mock::MemoryTutorialStore};
    /// use models::tutorial::NewTutorial;
    /// use std::sync::Arc;
    /// let svc = TutorialService::new(Arc::new(MemoryTutorialStore::default()));
    /// let ok = tokio_test::block_on(svc.create_tutorial(NewTutorial::new("Intro to Go", "x".repeat(25))));
    /// assert!(ok.success);
    /// let bad = tokio_test::block_on(svc.create_tutorial(NewTutorial::new("Intro: Go", "x".repeat(25))));
    /// assert_eq!(bad.message, "title contains invalid characters");
    /// ```
    #[instrument(skip(self, input), fields(title = %input.title, category = %input.category))]
    pub async fn create_tutorial(&self, input: NewTutorial) -> OperationOutcome {
        if let Err(e) = input.validate() {
            debug!(reason = e.detail(), "tutorial_rejected");
            return OperationOutcome::failure(e.detail());
        }
        match self.store.create(input).await {
            Ok(created) => {
                info!(tutorial_id = created.id, "tutorial_created");
                OperationOutcome::created(created.id)
            }
            Err(e) => report(TutorialOperation::Create, e),
        }
    }

    /// Delete by id. No existence check is made; a missing id is whatever the store says it is.
    #[instrument(skip(self))]
    pub async fn delete_tutorial(&self, id: i32) -> OperationOutcome {
        match self.store.delete_by_id(id).await {
            Ok(()) => {
                info!(tutorial_id = id, "tutorial_deleted");
                OperationOutcome::deleted()
            }
            Err(e) => report(TutorialOperation::Delete, e),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_tutorials(&self) -> Result<Vec<Tutorial>, ServiceError> {
        self.store.get_all().await.map_err(|e| raise(TutorialOperation::List, e))
    }

    /// `Ok(None)` when no tutorial has this id.
    #[instrument(skip(self))]
    pub async fn get_tutorial(&self, id: i32) -> Result<Option<Tutorial>, ServiceError> {
        self.store.get_by_id(id).await.map_err(|e| raise(TutorialOperation::Get, e))
    }

    /// A non-empty category wins over the rating order; with neither, every
    /// tutorial is returned as by [`Self::list_tutorials`].
    #[instrument(skip(self))]
    pub async fn filter_tutorials(
        &self,
        category: Option<&str>,
        rating_order: Option<RatingOrder>,
    ) -> Result<Vec<Tutorial>, ServiceError> {
        let rows = match (category.filter(|c| !c.is_empty()), rating_order) {
            (Some(category), _) => self.store.get_by_category(category).await,
            (None, Some(order)) => self.store.get_by_rating_order(order).await,
            (None, None) => self.store.get_all().await,
        };
        rows.map_err(|e| raise(TutorialOperation::Filter, e))
    }

    #[instrument(skip(self))]
    pub async fn search_tutorials(&self, keyword: &str) -> Result<Vec<Tutorial>, ServiceError> {
        self.store
            .search_by_keyword(keyword)
            .await
            .map_err(|e| raise(TutorialOperation::Search, e))
    }
}

/// Log a store failure and fold it into a failed outcome.
fn report(op: TutorialOperation, err: ServiceError) -> OperationOutcome {
    debug_assert_eq!(op.policy(), ErrorPolicy::Report);
    error!(operation = %op, error = %err, "tutorial_store_failed");
    OperationOutcome::internal_error()
}

/// Log a store failure and replace it with the generic internal error.
fn raise(op: TutorialOperation, err: ServiceError) -> ServiceError {
    debug_assert_eq!(op.policy(), ErrorPolicy::Raise);
    error!(operation = %op, error = %err, "tutorial_store_failed");
    ServiceError::Internal
}
