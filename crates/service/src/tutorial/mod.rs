//! Tutorial module: domain types, store abstraction and the validating service.
//!
//! Create and delete report failures as an [`domain::OperationOutcome`]; list,
//! get, filter and search raise [`crate::errors::ServiceError::Internal`].

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{ErrorPolicy, OperationOutcome, RatingOrder, Tutorial, TutorialOperation};
pub use repository::{SeaOrmTutorialStore, TutorialStore};
pub use service::TutorialService;
