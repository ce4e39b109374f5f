use std::sync::Arc;

use configs::{AppConfig, DatabaseConfig, LogFormat};
use models::tutorial::NewTutorial;
use service::errors::ServiceError;
use service::runtime;
use service::tutorial::{RatingOrder, SeaOrmTutorialStore, TutorialService};

async fn start_service() -> anyhow::Result<TutorialService<SeaOrmTutorialStore>> {
    let mut database = DatabaseConfig::with_url("sqlite::memory:");
    database.max_connections = 1;
    database.min_connections = 1;
    let mut cfg = AppConfig { database, ..AppConfig::default() };
    cfg.logging.format = LogFormat::Compact;
    runtime::bootstrap(&cfg).await
}

fn lesson(title: &str, category: &str, rating: i32) -> NewTutorial {
    NewTutorial::new(title, format!("A walkthrough of {title} for beginners"))
        .with_category(category)
        .with_rating(rating)
}

#[tokio::test]
async fn create_delete_get_against_database() -> anyhow::Result<()> {
    let svc = start_service().await?;

    let created = svc.create_tutorial(NewTutorial::new("Intro to Go", "x".repeat(25))).await;
    assert!(created.success, "{}", created.message);
    let id = created.id.expect("id of created tutorial");

    let fetched = svc.get_tutorial(id).await?.expect("tutorial just created");
    assert_eq!(fetched.title, "Intro to Go");
    assert_eq!(fetched.body.len(), 25);

    assert!(svc.delete_tutorial(id).await.success);
    assert!(svc.get_tutorial(id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn rejected_input_is_not_persisted() -> anyhow::Result<()> {
    let svc = start_service().await?;

    let outcome = svc.create_tutorial(NewTutorial::new("Go: the basics", "x".repeat(25))).await;
    assert!(!outcome.success);
    assert_eq!(outcome.message, "title contains invalid characters");

    let outcome = svc.create_tutorial(NewTutorial::new("Go basics", "x".repeat(19))).await;
    assert_eq!(outcome.message, "body too short (min 20)");

    assert!(svc.list_tutorials().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn filter_and_search_against_database() -> anyhow::Result<()> {
    let svc = start_service().await?;
    for input in [
        lesson("Fractions", "Math", 2),
        lesson("Borrowing", "Programming", 5),
        lesson("Derivatives", "Math", 4),
    ] {
        assert!(svc.create_tutorial(input).await.success);
    }

    let math = svc.filter_tutorials(Some("Math"), None).await?;
    assert_eq!(math.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(), ["Fractions", "Derivatives"]);
    assert_eq!(svc.filter_tutorials(Some("Math"), Some(RatingOrder::Descending)).await?, math);

    let best_first = svc.filter_tutorials(None, Some(RatingOrder::Descending)).await?;
    assert_eq!(best_first.iter().map(|t| t.rating).collect::<Vec<_>>(), [5, 4, 2]);

    assert_eq!(svc.filter_tutorials(None, None).await?, svc.list_tutorials().await?);

    let hits = svc.search_tutorials("Borrow").await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category, "Programming");
    Ok(())
}

#[tokio::test]
async fn bootstrap_rejects_invalid_database_url() {
    let cfg = AppConfig { database: DatabaseConfig::with_url("mysql://localhost/tutorials"), ..AppConfig::default() };
    assert!(runtime::bootstrap(&cfg).await.is_err());
}

#[tokio::test]
async fn missing_schema_surfaces_as_internal_error() -> anyhow::Result<()> {
    let mut database = DatabaseConfig::with_url("sqlite::memory:");
    database.max_connections = 1;
    database.min_connections = 1;
    // connected but never migrated, so every query fails
    let db = models::db::connect_with_config(&database).await?;
    let broken = TutorialService::new(Arc::new(SeaOrmTutorialStore::new(db)));

    assert!(matches!(broken.list_tutorials().await, Err(ServiceError::Internal)));
    assert!(matches!(broken.get_tutorial(1).await, Err(ServiceError::Internal)));
    assert!(matches!(broken.filter_tutorials(None, Some(RatingOrder::Ascending)).await, Err(ServiceError::Internal)));
    assert!(matches!(broken.search_tutorials("go").await, Err(ServiceError::Internal)));

    let outcome = broken.create_tutorial(NewTutorial::new("Intro to Go", "x".repeat(25))).await;
    assert!(!outcome.success);
    assert_eq!(outcome.message, "internal server error");
    let outcome = broken.delete_tutorial(1).await;
    assert_eq!(outcome.message, "internal server error");
    Ok(())
}
