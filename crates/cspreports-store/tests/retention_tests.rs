use chrono::{NaiveDate, NaiveDateTime};
use cspreports_store::{ReportStore, Store};
use entity::csp_reports;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DbErr, Set};

async fn setup_test_db() -> Result<Store, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Store::new(db))
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

async fn create_test_report(store: &Store, created: NaiveDateTime) -> csp_reports::Model {
    let report = csp_reports::ActiveModel {
        created: Set(created),
        modified: Set(created),
        json: Set(r#"{"csp-report": {"document-uri": "https://example.com/"}}"#.to_string()),
        is_valid: Set(true),
        ..Default::default()
    };

    store
        .reports()
        .create(report)
        .await
        .expect("Failed to create report")
}

#[tokio::test]
async fn test_delete_created_before() {
    let store = setup_test_db().await.expect("Failed to connect");

    let first = create_test_report(&store, at(2021, 1, 1)).await;
    let second = create_test_report(&store, at(2021, 1, 10)).await;
    let third = create_test_report(&store, at(2021, 1, 20)).await;

    let deleted = store
        .reports()
        .delete_created_before(at(2021, 1, 15))
        .await
        .expect("Failed to delete");

    assert_eq!(deleted, 2);

    let reports = store.reports();
    assert!(reports.find_by_id(first.id).await.unwrap().is_none());
    assert!(reports.find_by_id(second.id).await.unwrap().is_none());
    assert!(
        reports.find_by_id(third.id).await.unwrap().is_some(),
        "Report created after the cutoff should be kept"
    );
}

#[tokio::test]
async fn test_delete_keeps_report_at_cutoff() {
    let store = setup_test_db().await.expect("Failed to connect");

    let at_cutoff = create_test_report(&store, at(2021, 1, 15)).await;
    create_test_report(&store, at(2021, 1, 14)).await;

    let deleted = store
        .delete_where_created_before(at(2021, 1, 15))
        .await
        .expect("Failed to delete");

    assert_eq!(deleted, 1);
    assert!(
        store
            .reports()
            .find_by_id(at_cutoff.id)
            .await
            .unwrap()
            .is_some(),
        "Report created exactly at the cutoff should be kept"
    );
}

#[tokio::test]
async fn test_delete_twice_is_idempotent() {
    let store = setup_test_db().await.expect("Failed to connect");

    create_test_report(&store, at(2020, 6, 1)).await;
    create_test_report(&store, at(2020, 6, 2)).await;
    create_test_report(&store, at(2022, 1, 1)).await;

    let cutoff = at(2021, 1, 1);
    let first = store.delete_where_created_before(cutoff).await.unwrap();
    let second = store.delete_where_created_before(cutoff).await.unwrap();

    assert_eq!(first, 2);
    assert_eq!(second, 0);
    assert_eq!(store.reports().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_count_created_before_does_not_delete() {
    let store = setup_test_db().await.expect("Failed to connect");

    create_test_report(&store, at(2021, 1, 1)).await;
    create_test_report(&store, at(2021, 1, 10)).await;
    create_test_report(&store, at(2021, 1, 20)).await;

    let matching = store
        .count_created_before(at(2021, 1, 15))
        .await
        .expect("Failed to count");

    assert_eq!(matching, 2);
    assert_eq!(store.reports().count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_delete_on_empty_table() {
    let store = setup_test_db().await.expect("Failed to connect");

    let deleted = store
        .delete_where_created_before(at(2030, 1, 1))
        .await
        .expect("Failed to delete");

    assert_eq!(deleted, 0);
}
