use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use models::tutorial::{self, NewTutorial};
use crate::{errors::ServiceError, tutorial::RatingOrder};

/// Insert a tutorial; the database assigns the id.
pub async fn insert_tutorial(db: &DatabaseConnection, input: NewTutorial) -> Result<tutorial::Model, ServiceError> {
    Ok(input.into_active_model().insert(db).await?)
}

/// Delete by id. Missing rows are not an error.
pub async fn delete_tutorial(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    tutorial::Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

pub async fn list_tutorials(db: &DatabaseConnection) -> Result<Vec<tutorial::Model>, ServiceError> {
    Ok(tutorial::Entity::find().order_by_asc(tutorial::Column::Id).all(db).await?)
}

pub async fn get_tutorial(db: &DatabaseConnection, id: i32) -> Result<Option<tutorial::Model>, ServiceError> {
    Ok(tutorial::Entity::find_by_id(id).one(db).await?)
}

pub async fn list_by_category(db: &DatabaseConnection, category: &str) -> Result<Vec<tutorial::Model>, ServiceError> {
    let rows = tutorial::Entity::find()
        .filter(tutorial::Column::Category.eq(category))
        .order_by_asc(tutorial::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Ordered by rating, ties broken by ascending id.
pub async fn list_by_rating(db: &DatabaseConnection, order: RatingOrder) -> Result<Vec<tutorial::Model>, ServiceError> {
    let query = match order {
        RatingOrder::Ascending => tutorial::Entity::find().order_by_asc(tutorial::Column::Rating),
        RatingOrder::Descending => tutorial::Entity::find().order_by_desc(tutorial::Column::Rating),
    };
    Ok(query.order_by_asc(tutorial::Column::Id).all(db).await?)
}

/// Substring match on title or body.
pub async fn search_tutorials(db: &DatabaseConnection, keyword: &str) -> Result<Vec<tutorial::Model>, ServiceError> {
    let rows = tutorial::Entity::find()
        .filter(
            Condition::any()
                .add(tutorial::Column::Title.contains(keyword))
                .add(tutorial::Column::Body.contains(keyword)),
        )
        .order_by_asc(tutorial::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
