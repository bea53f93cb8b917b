mod common;

use application::friends::dtos::{RespondFriendRequest, SendFriendRequest};
use application::friends::list_friends::{FriendIdsUseCase, ListFriendsUseCase};
use application::friends::list_requests::{
    ListIncomingRequestsUseCase, ListOutgoingRequestsUseCase,
};
use application::friends::respond_request::RespondFriendRequestUseCase;
use application::friends::send_request::SendFriendRequestUseCase;
use application::locks::PairLocks;
use application::AppError;
use uuid::Uuid;

use common::{create_user, make_friends, setup_db};

fn send(sender_id: Uuid, recipient_id: Uuid) -> SendFriendRequest {
    SendFriendRequest {
        sender_id,
        recipient_id,
    }
}

fn respond(recipient_id: Uuid, requester_id: Uuid, accept: bool) -> RespondFriendRequest {
    RespondFriendRequest {
        recipient_id,
        requester_id,
        accept,
    }
}

#[tokio::test]
async fn send_request_creates_pending_edges() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;
    let bob = create_user(&db, "Bob", "bob@example.com").await;

    SendFriendRequestUseCase::execute(&db, &locks, send(alice, bob))
        .await
        .expect("send request");

    let incoming = ListIncomingRequestsUseCase::execute(&db, bob).await.unwrap();
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].user_id, alice);
    assert_eq!(incoming[0].name, "Alice");
    assert_eq!(incoming[0].email, "alice@example.com");

    let outgoing = ListOutgoingRequestsUseCase::execute(&db, alice).await.unwrap();
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].user_id, bob);

    // The pending request is not a friendship, in either direction.
    assert!(ListFriendsUseCase::execute(&db, alice).await.unwrap().is_empty());
    assert!(ListFriendsUseCase::execute(&db, bob).await.unwrap().is_empty());

    // And the reverse projections are empty.
    assert!(ListIncomingRequestsUseCase::execute(&db, alice).await.unwrap().is_empty());
    assert!(ListOutgoingRequestsUseCase::execute(&db, bob).await.unwrap().is_empty());
}

#[tokio::test]
async fn send_request_to_self_is_rejected() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;

    let err = SendFriendRequestUseCase::execute(&db, &locks, send(alice, alice))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));
}

#[tokio::test]
async fn send_request_to_unknown_user_is_not_found() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;

    let err = SendFriendRequestUseCase::execute(&db, &locks, send(alice, Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_send_request_is_rejected_and_state_unchanged() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;
    let bob = create_user(&db, "Bob", "bob@example.com").await;

    SendFriendRequestUseCase::execute(&db, &locks, send(alice, bob))
        .await
        .unwrap();
    let err = SendFriendRequestUseCase::execute(&db, &locks, send(alice, bob))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));

    // A request in the opposite direction is blocked too.
    let err = SendFriendRequestUseCase::execute(&db, &locks, send(bob, alice))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));

    // State after the failed calls equals state after the first.
    let incoming = ListIncomingRequestsUseCase::execute(&db, bob).await.unwrap();
    assert_eq!(incoming.len(), 1);
    let outgoing = ListOutgoingRequestsUseCase::execute(&db, alice).await.unwrap();
    assert_eq!(outgoing.len(), 1);
}

#[tokio::test]
async fn accept_creates_symmetric_friendship() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;
    let bob = create_user(&db, "Bob", "bob@example.com").await;

    SendFriendRequestUseCase::execute(&db, &locks, send(alice, bob))
        .await
        .unwrap();
    RespondFriendRequestUseCase::execute(&db, &locks, respond(bob, alice, true))
        .await
        .expect("accept");

    let alice_friends = ListFriendsUseCase::execute(&db, alice).await.unwrap();
    assert_eq!(alice_friends.len(), 1);
    assert_eq!(alice_friends[0].user_id, bob);
    assert_eq!(alice_friends[0].name, "Bob");

    let bob_friends = ListFriendsUseCase::execute(&db, bob).await.unwrap();
    assert_eq!(bob_friends.len(), 1);
    assert_eq!(bob_friends[0].user_id, alice);

    // Both request projections are stripped.
    assert!(ListIncomingRequestsUseCase::execute(&db, bob).await.unwrap().is_empty());
    assert!(ListOutgoingRequestsUseCase::execute(&db, alice).await.unwrap().is_empty());

    let ids = FriendIdsUseCase::execute(&db, alice).await.unwrap();
    assert_eq!(ids, vec![bob]);
}

#[tokio::test]
async fn accept_is_not_replayable() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;
    let bob = create_user(&db, "Bob", "bob@example.com").await;

    SendFriendRequestUseCase::execute(&db, &locks, send(alice, bob))
        .await
        .unwrap();
    RespondFriendRequestUseCase::execute(&db, &locks, respond(bob, alice, true))
        .await
        .unwrap();

    // The pending edge is gone, so a second accept is an invalid transition.
    let err = RespondFriendRequestUseCase::execute(&db, &locks, respond(bob, alice, true))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));

    // State is unchanged: still exactly one friend each.
    assert_eq!(ListFriendsUseCase::execute(&db, alice).await.unwrap().len(), 1);
    assert_eq!(ListFriendsUseCase::execute(&db, bob).await.unwrap().len(), 1);
}

#[tokio::test]
async fn accept_without_pending_request_is_invalid() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;
    let bob = create_user(&db, "Bob", "bob@example.com").await;

    let err = RespondFriendRequestUseCase::execute(&db, &locks, respond(bob, alice, true))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));
}

#[tokio::test]
async fn accept_with_unknown_user_is_not_found() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let bob = create_user(&db, "Bob", "bob@example.com").await;

    let err = RespondFriendRequestUseCase::execute(&db, &locks, respond(bob, Uuid::new_v4(), true))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn reject_returns_pair_to_none_and_allows_resend() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;
    let bob = create_user(&db, "Bob", "bob@example.com").await;

    SendFriendRequestUseCase::execute(&db, &locks, send(alice, bob))
        .await
        .unwrap();
    RespondFriendRequestUseCase::execute(&db, &locks, respond(bob, alice, false))
        .await
        .expect("reject");

    // No request, no friendship, on either side.
    assert!(ListIncomingRequestsUseCase::execute(&db, bob).await.unwrap().is_empty());
    assert!(ListOutgoingRequestsUseCase::execute(&db, alice).await.unwrap().is_empty());
    assert!(ListFriendsUseCase::execute(&db, alice).await.unwrap().is_empty());
    assert!(ListFriendsUseCase::execute(&db, bob).await.unwrap().is_empty());

    // The pair is back to the initial state, so a new request is legal.
    SendFriendRequestUseCase::execute(&db, &locks, send(alice, bob))
        .await
        .expect("resend after reject");
}

#[tokio::test]
async fn send_request_between_friends_is_rejected() {
    let (db, _dir) = setup_db().await;
    let locks = PairLocks::new();
    let alice = create_user(&db, "Alice", "alice@example.com").await;
    let bob = create_user(&db, "Bob", "bob@example.com").await;

    make_friends(&db, &locks, alice, bob).await;

    for (a, b) in [(alice, bob), (bob, alice)] {
        let err = SendFriendRequestUseCase::execute(&db, &locks, send(a, b))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidOperation(_)));
    }
}

#[tokio::test]
async fn listing_for_unknown_user_is_not_found() {
    let (db, _dir) = setup_db().await;

    let missing = Uuid::new_v4();
    assert!(matches!(
        ListFriendsUseCase::execute(&db, missing).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        ListIncomingRequestsUseCase::execute(&db, missing).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        ListOutgoingRequestsUseCase::execute(&db, missing).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}
