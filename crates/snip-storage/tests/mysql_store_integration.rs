use std::time::Duration;

use snip_core::{ShortId, UrlAssociation};
use snip_storage::{MySqlStore, ReadStore, StorageError, Store};
use snip_test_infra::mysql::{MySqlServer, MysqlConfig};
use sqlx::mysql::MySqlPoolOptions;

struct Fixture {
    _mysql: MySqlServer,
    store: MySqlStore,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::new(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let url = mysql.database_url().await.expect("mysql url");
        let pool = connect_with_retry(&url).await;

        let store = MySqlStore::new(pool);
        store.ensure_schema().await.expect("create schema");

        Self {
            _mysql: mysql,
            store,
        }
    }
}

async fn connect_with_retry(url: &str) -> sqlx::MySqlPool {
    let mut last_error = None;

    for _ in 0..20 {
        match MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
        {
            Ok(pool) => return pool,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect mysql: {last_error:?}");
}

fn id(value: &str) -> ShortId {
    ShortId::new(value).unwrap()
}

fn association(code: &str, url: &str) -> UrlAssociation {
    UrlAssociation::new(id(code), url)
}

#[tokio::test]
async fn insert_and_find_record() {
    let fixture = Fixture::start().await;

    fixture
        .store
        .insert(association("abcdefghi12345678910", "https://example.com"))
        .await
        .unwrap();

    let got = fixture
        .store
        .find_by_id(&id("abcdefghi12345678910"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(got, association("abcdefghi12345678910", "https://example.com"));
}

#[tokio::test]
async fn list_all_returns_inserted_records() {
    let fixture = Fixture::start().await;

    fixture
        .store
        .insert(association("abcdefghi12345678910", "http://google.com"))
        .await
        .unwrap();
    fixture
        .store
        .insert(association("abcdefghi12345678911", "https://facebook.com"))
        .await
        .unwrap();

    let mut all = fixture.store.list_all().await.unwrap();
    all.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(
        all,
        vec![
            association("abcdefghi12345678910", "http://google.com"),
            association("abcdefghi12345678911", "https://facebook.com"),
        ]
    );
}

#[tokio::test]
async fn update_changes_only_the_url() {
    let fixture = Fixture::start().await;
    let code = id("abcdefghi12345678910");

    fixture
        .store
        .insert(association("abcdefghi12345678910", "https://old.example"))
        .await
        .unwrap();

    assert!(fixture
        .store
        .update_target(&code, "https://new.example")
        .await
        .unwrap());

    let got = fixture.store.find_by_id(&code).await.unwrap().unwrap();
    assert_eq!(got, association("abcdefghi12345678910", "https://new.example"));
}

#[tokio::test]
async fn update_and_delete_report_missing_records() {
    let fixture = Fixture::start().await;
    let code = id("abcdefghi12345678910");

    assert!(!fixture
        .store
        .update_target(&code, "https://new.example")
        .await
        .unwrap());
    assert!(!fixture.store.delete_by_id(&code).await.unwrap());
}

#[tokio::test]
async fn delete_removes_record() {
    let fixture = Fixture::start().await;
    let code = id("abcdefghi12345678910");

    fixture
        .store
        .insert(association("abcdefghi12345678910", "https://example.com"))
        .await
        .unwrap();

    assert!(fixture.store.delete_by_id(&code).await.unwrap());
    assert!(fixture.store.find_by_id(&code).await.unwrap().is_none());
    assert!(!fixture.store.delete_by_id(&code).await.unwrap());
}

#[tokio::test]
async fn closed_store_is_unavailable() {
    let fixture = Fixture::start().await;

    fixture.store.close().await;

    let err = fixture.store.list_all().await.unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));
}
