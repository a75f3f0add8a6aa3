use login_auth::auth::{AuthOutcome, Authenticator, LoginAttempt, RejectReason};
use login_auth::config::StoreConfig;
use login_auth::{AuthError, CredentialStore, SqlCredentialStore, StoreError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use tempfile::TempDir;

const EMAIL: &str = "johndoe@example.com";
const PASSWORD: &str = "password123";

fn store_config(path: &Path) -> StoreConfig {
    StoreConfig {
        database_url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 1,
        acquire_timeout_secs: 2,
        create_schema: true,
    }
}

// Insert rows out of band, the way the table is populated in production
async fn seed(path: &Path, rows: &[(&str, &str)]) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    for (email, password) in rows {
        sqlx::query("INSERT INTO User (Email, Password) VALUES (?, ?)")
            .bind(*email)
            .bind(*password)
            .execute(&pool)
            .await
            .unwrap();
    }
    pool.close().await;
}

async fn seeded_authenticator(
    rows: &[(&str, &str)],
) -> (TempDir, Authenticator<SqlCredentialStore>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.db");
    let store = SqlCredentialStore::connect(&store_config(&path))
        .await
        .unwrap();
    store.ensure_schema().await.unwrap();
    seed(&path, rows).await;
    (dir, Authenticator::new(store))
}

#[tokio::test]
async fn test_valid_login() {
    let (_dir, auth) = seeded_authenticator(&[(EMAIL, PASSWORD)]).await;
    assert!(auth.authenticate(EMAIL, PASSWORD).await.unwrap());

    let row = auth.store().find_user(EMAIL, PASSWORD).await.unwrap().unwrap();
    assert_eq!(row.email, EMAIL);
    assert_eq!(row.password, PASSWORD);
}

#[tokio::test]
async fn test_invalid_login() {
    let (_dir, auth) = seeded_authenticator(&[(EMAIL, PASSWORD)]).await;
    assert!(
        !auth
            .authenticate("invalid@example.com", "wrongpassword")
            .await
            .unwrap()
    );
    assert!(
        auth.store()
            .find_user("invalid@example.com", "wrongpassword")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_existing_email_with_incorrect_password() {
    let (_dir, auth) = seeded_authenticator(&[(EMAIL, PASSWORD)]).await;
    assert!(!auth.authenticate(EMAIL, "wrongPassword123").await.unwrap());
    assert!(!auth.authenticate(EMAIL, "Password123").await.unwrap());
}

#[tokio::test]
async fn test_password_of_another_user_is_rejected() {
    let (_dir, auth) =
        seeded_authenticator(&[(EMAIL, PASSWORD), ("jane@example.com", "hunter2")]).await;
    assert!(!auth.authenticate(EMAIL, "hunter2").await.unwrap());
    assert!(auth.authenticate("jane@example.com", "hunter2").await.unwrap());
}

#[tokio::test]
async fn test_empty_credentials() {
    let (_dir, auth) = seeded_authenticator(&[(EMAIL, PASSWORD)]).await;
    assert!(!auth.authenticate("", "").await.unwrap());
    assert!(!auth.authenticate(EMAIL, "").await.unwrap());
}

#[tokio::test]
async fn test_stored_empty_pair_is_an_ordinary_record() {
    let (_dir, auth) = seeded_authenticator(&[("", "")]).await;
    assert!(auth.authenticate("", "").await.unwrap());
}

#[tokio::test]
async fn test_long_stored_credentials_authenticate() {
    let email = format!("{}@example.com", "j".repeat(300));
    let password = "p".repeat(300);
    let rows = [(EMAIL, password.as_str()), (email.as_str(), password.as_str())];
    let (_dir, auth) = seeded_authenticator(&rows).await;

    assert!(auth.authenticate(EMAIL, &password).await.unwrap());
    assert!(auth.authenticate(&email, &password).await.unwrap());
    assert!(!auth.authenticate(EMAIL, &password[..299]).await.unwrap());
}

#[tokio::test]
async fn test_sql_injection_protection() {
    let (_dir, auth) = seeded_authenticator(&[(EMAIL, PASSWORD)]).await;

    assert!(!auth.authenticate("admin' --", PASSWORD).await.unwrap());
    assert!(
        !auth
            .authenticate("johndoe@example.com' --", "anything")
            .await
            .unwrap()
    );
    assert!(!auth.authenticate(EMAIL, "' OR '1'='1").await.unwrap());
    assert!(
        !auth
            .authenticate("x'; DROP TABLE User; --", PASSWORD)
            .await
            .unwrap()
    );

    // Table and data untouched by the payloads above
    assert!(auth.authenticate(EMAIL, PASSWORD).await.unwrap());
}

#[tokio::test]
async fn test_check_reports_reason() {
    let (_dir, auth) = seeded_authenticator(&[(EMAIL, PASSWORD)]).await;
    let outcome = auth
        .check(&LoginAttempt::new(EMAIL, "nope"))
        .await
        .unwrap();
    assert_eq!(outcome, AuthOutcome::Rejected(RejectReason::NoMatch));
}

#[tokio::test]
async fn test_connection_released_after_each_lookup() {
    // A single pooled connection: a leak would make the next acquire time out
    let (_dir, auth) = seeded_authenticator(&[(EMAIL, PASSWORD)]).await;
    for i in 0..10 {
        let password = if i % 2 == 0 { PASSWORD } else { "wrong" };
        assert_eq!(auth.authenticate(EMAIL, password).await.unwrap(), i % 2 == 0);
    }
    auth.store().ping().await.unwrap();
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let (_dir, auth) = seeded_authenticator(&[(EMAIL, PASSWORD)]).await;
    auth.store().ensure_schema().await.unwrap();
    assert!(auth.authenticate(EMAIL, PASSWORD).await.unwrap());
}

#[tokio::test]
async fn test_unreachable_store_fails_to_connect() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("users.db");
    let err = SqlCredentialStore::connect(&store_config(&path))
        .await
        .err()
        .unwrap();
    assert!(err.is_connectivity(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_unreachable_store_is_a_fault_not_a_rejection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("users.db");
    let store = SqlCredentialStore::connect_lazy(&store_config(&path)).unwrap();
    let auth = Authenticator::new(store);

    match auth.authenticate(EMAIL, PASSWORD).await {
        Err(AuthError::Store(e)) => assert!(e.is_connectivity(), "unexpected error: {e}"),
        other => panic!("expected store fault, got {other:?}"),
    }
    assert!(auth.store().ping().await.is_err());
}

#[tokio::test]
async fn test_unexpected_table_shape_is_a_fault() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.db");
    let store = SqlCredentialStore::connect(&store_config(&path))
        .await
        .unwrap();

    let options = SqliteConnectOptions::new().filename(&path);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE User (Login TEXT, Secret TEXT)")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let auth = Authenticator::new(store);
    let result = auth.authenticate(EMAIL, PASSWORD).await;
    assert!(
        matches!(result, Err(AuthError::Store(StoreError::Query(_)))),
        "unexpected result: {result:?}"
    );
}
