use tf_db::{connect, run_migrations};

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_missing_directory_when_connecting_then_database_created_with_wal_and_foreign_keys() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("taskflow.db");

    // When
    let pool = connect(&path, 2).await.unwrap();
    run_migrations(&pool).await.unwrap();

    // Then
    assert_that!(path.exists(), eq(true));
    let journal: String = sqlx::query_scalar("PRAGMA journal_mode").fetch_one(&pool).await.unwrap();
    assert_that!(journal.to_lowercase(), eq("wal"));
    let foreign_keys: i64 = sqlx::query_scalar("PRAGMA foreign_keys").fetch_one(&pool).await.unwrap();
    assert_that!(foreign_keys, eq(1));
}

#[tokio::test]
async fn given_migrated_database_when_migrating_again_then_noop() {
    let temp = TempDir::new().unwrap();
    let pool = connect(&temp.path().join("twice.db"), 1).await.unwrap();

    run_migrations(&pool).await.unwrap();
    let again = run_migrations(&pool).await;

    assert_that!(again.is_ok(), eq(true));
}
