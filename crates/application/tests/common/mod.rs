#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tempfile::TempDir;
use uuid::Uuid;

use application::friends::dtos::{RespondFriendRequest, SendFriendRequest};
use application::friends::respond_request::RespondFriendRequestUseCase;
use application::friends::send_request::SendFriendRequestUseCase;
use application::locks::PairLocks;
use linkup_core::entities::users;

/// Opens a fresh SQLite database in a temp dir and applies all migrations.
/// The returned TempDir must outlive the connection.
pub async fn setup_db() -> (DatabaseConnection, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("linkup-test.db").display()
    );
    let db = sea_orm::Database::connect(url.as_str())
        .await
        .expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    (db, dir)
}

/// Inserts a user directly, bypassing registration (no password hashing
/// cost; credential checks have their own tests).
pub async fn create_user(db: &DatabaseConnection, name: &str, email: &str) -> Uuid {
    let now = Utc::now();
    let user = users::ActiveModel {
        user_id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set("unused-in-tests".to_string()),
        image: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let inserted = user.insert(db).await.expect("insert user");
    inserted.user_id
}

/// Drives the full request/accept flow so `a` and `b` end up friends.
pub async fn make_friends(db: &DatabaseConnection, locks: &PairLocks, a: Uuid, b: Uuid) {
    SendFriendRequestUseCase::execute(
        db,
        locks,
        SendFriendRequest {
            sender_id: a,
            recipient_id: b,
        },
    )
    .await
    .expect("send friend request");
    RespondFriendRequestUseCase::execute(
        db,
        locks,
        RespondFriendRequest {
            recipient_id: b,
            requester_id: a,
            accept: true,
        },
    )
    .await
    .expect("accept friend request");
}

/// Fixed timestamp helper for deterministic ordering assertions.
pub fn at(minutes: i64) -> DateTimeWithTimeZone {
    (Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)).into()
}
