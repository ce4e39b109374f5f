//! Service layer providing tutorial CRUD on top of models.
//! - Validation happens here; persistence sits behind `TutorialStore`.
//! - Create/delete report failures as outcomes, reads raise a generic error.

pub mod errors;
pub mod db;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod tutorial;
