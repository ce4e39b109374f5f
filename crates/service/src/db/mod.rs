//! SeaORM query helpers backing [`crate::tutorial::SeaOrmTutorialStore`].

pub mod tutorial_queries;
