mod common;

use application::auth::tokens::{self, AuthConfig};
use application::users::dtos::{
    LoginRequest, RegisterRequest, UpdateImageRequest, UpdateNameRequest,
};
use application::users::get_user::GetUserUseCase;
use application::users::list_users::ListUsersUseCase;
use application::users::login::LoginUseCase;
use application::users::register::RegisterUserUseCase;
use application::users::update_profile::{UpdateProfileImageUseCase, UpdateProfileNameUseCase};
use application::AppError;
use uuid::Uuid;

use common::{create_user, setup_db};

fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        jwt_expiration: 3600,
    }
}

fn register(name: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: "hunter2hunter2".to_string(),
        image: None,
    }
}

#[tokio::test]
async fn register_and_login_roundtrip() {
    let (db, _dir) = setup_db().await;

    let registered = RegisterUserUseCase::execute(&db, register("Alice", "alice@example.com"))
        .await
        .expect("register");
    assert_eq!(registered.email, "alice@example.com");

    let config = auth_config();
    let login = LoginUseCase::execute(
        &db,
        &config,
        LoginRequest {
            email: "alice@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        },
    )
    .await
    .expect("login");
    assert_eq!(login.user_id, registered.user_id);

    // The issued token identifies the user.
    let claims = tokens::verify_token(&config, &login.token).unwrap();
    assert_eq!(claims.sub, registered.user_id.to_string());
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let (db, _dir) = setup_db().await;

    RegisterUserUseCase::execute(&db, register("Alice", "alice@example.com"))
        .await
        .unwrap();
    let err = RegisterUserUseCase::execute(&db, register("Other Alice", "alice@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn register_validates_input_before_mutating() {
    let (db, _dir) = setup_db().await;

    let err = RegisterUserUseCase::execute(
        &db,
        RegisterRequest {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            password: "hunter2hunter2".to_string(),
            image: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));

    // Nothing was written.
    let caller = create_user(&db, "Probe", "probe@example.com").await;
    assert!(ListUsersUseCase::execute(&db, caller).await.unwrap().is_empty());
}

#[tokio::test]
async fn login_failures_are_distinguished() {
    let (db, _dir) = setup_db().await;
    RegisterUserUseCase::execute(&db, register("Alice", "alice@example.com"))
        .await
        .unwrap();

    let err = LoginUseCase::execute(
        &db,
        &auth_config(),
        LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = LoginUseCase::execute(
        &db,
        &auth_config(),
        LoginRequest {
            email: "alice@example.com".to_string(),
            password: "wrong password".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
}

#[tokio::test]
async fn list_users_excludes_the_caller() {
    let (db, _dir) = setup_db().await;
    let alice = create_user(&db, "Alice", "alice@example.com").await;
    let bob = create_user(&db, "Bob", "bob@example.com").await;
    let carol = create_user(&db, "Carol", "carol@example.com").await;

    let others = ListUsersUseCase::execute(&db, alice).await.unwrap();
    let ids: Vec<Uuid> = others.iter().map(|u| u.user_id).collect();
    assert_eq!(others.len(), 2);
    assert!(ids.contains(&bob));
    assert!(ids.contains(&carol));
    assert!(!ids.contains(&alice));
}

#[tokio::test]
async fn get_user_returns_profile_or_not_found() {
    let (db, _dir) = setup_db().await;
    let alice = create_user(&db, "Alice", "alice@example.com").await;

    let details = GetUserUseCase::execute(&db, alice).await.unwrap();
    assert_eq!(details.name, "Alice");
    assert_eq!(details.email, "alice@example.com");

    let err = GetUserUseCase::execute(&db, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn profile_updates_are_visible() {
    let (db, _dir) = setup_db().await;
    let alice = create_user(&db, "Alice", "alice@example.com").await;

    UpdateProfileNameUseCase::execute(
        &db,
        alice,
        UpdateNameRequest {
            name: "Alice Cooper".to_string(),
        },
    )
    .await
    .unwrap();

    UpdateProfileImageUseCase::execute(
        &db,
        alice,
        UpdateImageRequest {
            image: "/uploads/alice.png".to_string(),
        },
    )
    .await
    .unwrap();

    let details = GetUserUseCase::execute(&db, alice).await.unwrap();
    assert_eq!(details.name, "Alice Cooper");
    assert_eq!(details.image.as_deref(), Some("/uploads/alice.png"));
}
