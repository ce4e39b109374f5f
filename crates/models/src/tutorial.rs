use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const TITLE_MAX_CHARS: usize = 100;
pub const BODY_MIN_CHARS: usize = 20;
pub const BODY_MAX_CHARS: usize = 1000;

pub const MSG_TITLE_EMPTY: &str = "title must not be empty";
pub const MSG_TITLE_INVALID_CHARS: &str = "title contains invalid characters";
pub const MSG_TITLE_TOO_LONG: &str = "title too long (max 100)";
pub const MSG_BODY_TOO_LONG: &str = "body too long (max 1000)";
pub const MSG_BODY_TOO_SHORT: &str = "body too short (min 20)";

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]+$").expect("valid title regex"));

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tutorial")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    pub rating: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Creation input; id and timestamp are assigned by the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTutorial {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: i32,
}

impl NewTutorial {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into(), ..Self::default() }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Active model ready for insertion; the primary key is left to the database.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title),
            body: Set(self.body),
            category: Set(self.category),
            rating: Set(self.rating),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
    }

    /// Run every field rule in order; the first failure wins.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_title(&self.title)?;
        validate_body(&self.body)
    }
}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.is_empty() {
        return Err(ModelError::Validation(MSG_TITLE_EMPTY.into()));
    }
    if !TITLE_RE.is_match(title) {
        return Err(ModelError::Validation(MSG_TITLE_INVALID_CHARS.into()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ModelError::Validation(MSG_TITLE_TOO_LONG.into()));
    }
    Ok(())
}

/// Length is measured in UTF-16 code units, so an astral character counts twice.
pub fn validate_body(body: &str) -> Result<(), ModelError> {
    let len = body.encode_utf16().count();
    if len > BODY_MAX_CHARS {
        return Err(ModelError::Validation(MSG_BODY_TOO_LONG.into()));
    }
    if len < BODY_MIN_CHARS {
        return Err(ModelError::Validation(MSG_BODY_TOO_SHORT.into()));
    }
    Ok(())
}
