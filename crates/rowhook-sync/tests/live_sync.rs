//! Live synchronization tests.
//!
//! These need a real PostgreSQL with the `supabase_functions` extension
//! schema installed. Point `ROWHOOK_TEST_DATABASE_URL` at it and run
//! with `--ignored`.

use std::collections::BTreeMap;

use rowhook_core::{EventKind, FunctionDescriptor, SyncConfig};
use sqlx::{Connection, PgConnection};

fn function(name: &str, table: &str, event: EventKind) -> (String, FunctionDescriptor) {
    (
        name.to_string(),
        FunctionDescriptor {
            name: name.to_string(),
            table: table.to_string(),
            event,
        },
    )
}

fn test_database_url() -> String {
    std::env::var("ROWHOOK_TEST_DATABASE_URL")
        .expect("ROWHOOK_TEST_DATABASE_URL must be set for live tests")
}

async fn trigger_count(database_url: &str, name: &str) -> i64 {
    let mut conn = PgConnection::connect(database_url).await.unwrap();
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM pg_trigger WHERE tgname = $1")
        .bind(name)
        .fetch_one(&mut conn)
        .await
        .unwrap();
    conn.close().await.unwrap();
    count
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL with supabase_functions installed"]
async fn replacing_twice_converges_on_one_trigger() {
    let database_url = test_database_url();
    let config = SyncConfig::new("https://api.example.com", "s3cr3t").unwrap();
    let functions = BTreeMap::from([function("sendWelcome", "users", EventKind::RowCreated)]);

    let first = rowhook_sync::run(&config, &database_url, &functions)
        .await
        .unwrap();
    let second = rowhook_sync::run(&config, &database_url, &functions)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(trigger_count(&database_url, "sendWelcome").await, 1);
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL with supabase_functions installed"]
async fn failed_batch_leaves_the_trigger_set_untouched() {
    let database_url = test_database_url();
    let config = SyncConfig::new("https://api.example.com", "s3cr3t").unwrap();

    // Function 2 of 3 targets a table that does not exist, so its create
    // statement fails mid-batch. The transaction must roll back function
    // 1's trigger and never attempt function 3.
    let functions = BTreeMap::from([
        function("fnA", "users", EventKind::RowCreated),
        function("fnB", "no_such_table_anywhere", EventKind::RowUpdated),
        function("fnC", "users", EventKind::RowUpdated),
    ]);

    let result = rowhook_sync::run(&config, &database_url, &functions).await;
    assert!(result.is_err());

    assert_eq!(trigger_count(&database_url, "fnA").await, 0);
    assert_eq!(trigger_count(&database_url, "fnB").await, 0);
    assert_eq!(trigger_count(&database_url, "fnC").await, 0);
}
