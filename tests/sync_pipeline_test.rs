//! Create-or-update pipeline tests against mock GitHub and Freshdesk APIs.
//!
//! Coverage:
//! - Update scenario: existing contact located, PUT to its id with the
//!   mapped body, exactly three calls
//! - Create scenario: locate misses, POST with the mapped body
//! - Unknown login: one call total, no write attempted
//! - Idempotence: create once, then update, never a second create
//! - Search failure: aborts the run instead of creating a duplicate

mod common;

use freshdesk_contact::{ContactId, SyncError, SyncOutcome};
use mockito::{Matcher, Server};

use common::{
    batman_contact_body, batman_profile, synchronizer, BATMAN_EXTERNAL_ID, FRESHDESK_AUTH,
    GITHUB_AUTH,
};

#[tokio::test]
async fn update_scenario_puts_the_mapped_body_to_the_located_contact() {
    let mut server = Server::new_async().await;

    let fetch = server
        .mock("GET", "/users/batman")
        .match_header("authorization", GITHUB_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(batman_profile().to_string())
        .expect(1)
        .create_async()
        .await;

    let locate = server
        .mock("GET", "/api/v2/contacts")
        .match_query(Matcher::UrlEncoded(
            "unique_external_id".into(),
            BATMAN_EXTERNAL_ID.into(),
        ))
        .match_header("authorization", FRESHDESK_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 123456, "name": "batman"}]"#)
        .expect(1)
        .create_async()
        .await;

    let update = server
        .mock("PUT", "/api/v2/contacts/123456")
        .match_header("authorization", FRESHDESK_AUTH)
        .match_body(Matcher::Json(batman_contact_body()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 123456, "name": "batman"}"#)
        .expect(1)
        .create_async()
        .await;

    let outcome = synchronizer(&server.url()).sync("batman").await.unwrap();

    assert_eq!(outcome, SyncOutcome::Updated(ContactId(123_456)));
    fetch.assert_async().await;
    locate.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn create_scenario_posts_the_mapped_body_when_nothing_matches() {
    let mut server = Server::new_async().await;

    // Same profile, but with the blog cleared: the description must omit
    // the "Blog:" fragment entirely.
    let mut profile = batman_profile();
    profile["blog"] = serde_json::Value::Null;
    let mut expected_body = batman_contact_body();
    expected_body["description"] =
        serde_json::Value::String("Github profile: https://github.com/batman".to_string());

    let fetch = server
        .mock("GET", "/users/batman")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(profile.to_string())
        .expect(1)
        .create_async()
        .await;

    let locate = server
        .mock("GET", "/api/v2/contacts")
        .match_query(Matcher::UrlEncoded(
            "unique_external_id".into(),
            BATMAN_EXTERNAL_ID.into(),
        ))
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Not Found"}"#)
        .expect(1)
        .create_async()
        .await;

    let create = server
        .mock("POST", "/api/v2/contacts")
        .match_header("authorization", FRESHDESK_AUTH)
        .match_body(Matcher::Json(expected_body))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 555, "name": "batman"}"#)
        .expect(1)
        .create_async()
        .await;

    let outcome = synchronizer(&server.url()).sync("batman").await.unwrap();

    assert_eq!(outcome, SyncOutcome::Created(ContactId(555)));
    fetch.assert_async().await;
    locate.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn unknown_login_makes_exactly_one_call_and_no_write() {
    let mut server = Server::new_async().await;

    let fetch = server
        .mock("GET", "/users/ghost")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Not Found"}"#)
        .expect(1)
        .create_async()
        .await;

    let locate = server
        .mock("GET", "/api/v2/contacts")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let create = server
        .mock("POST", "/api/v2/contacts")
        .expect(0)
        .create_async()
        .await;

    let outcome = synchronizer(&server.url()).sync("ghost").await.unwrap();

    assert_eq!(outcome, SyncOutcome::ProfileNotFound);
    fetch.assert_async().await;
    locate.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn running_twice_creates_once_then_updates() {
    // First run: the join key is new, so the contact is created.
    let mut first = Server::new_async().await;

    first
        .mock("GET", "/users/batman")
        .with_status(200)
        .with_body(batman_profile().to_string())
        .create_async()
        .await;

    first
        .mock("GET", "/api/v2/contacts")
        .match_query(Matcher::UrlEncoded(
            "unique_external_id".into(),
            BATMAN_EXTERNAL_ID.into(),
        ))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let create = first
        .mock("POST", "/api/v2/contacts")
        .with_status(201)
        .with_body(r#"{"id": 555}"#)
        .expect(1)
        .create_async()
        .await;

    let outcome = synchronizer(&first.url()).sync("batman").await.unwrap();
    assert_eq!(outcome, SyncOutcome::Created(ContactId(555)));
    create.assert_async().await;

    // Second run: the search now finds the contact, so the pipeline must
    // update it and never issue a second create.
    let mut second = Server::new_async().await;

    second
        .mock("GET", "/users/batman")
        .with_status(200)
        .with_body(batman_profile().to_string())
        .create_async()
        .await;

    second
        .mock("GET", "/api/v2/contacts")
        .match_query(Matcher::UrlEncoded(
            "unique_external_id".into(),
            BATMAN_EXTERNAL_ID.into(),
        ))
        .with_status(200)
        .with_body(r#"[{"id": 555}]"#)
        .create_async()
        .await;

    let second_create = second
        .mock("POST", "/api/v2/contacts")
        .expect(0)
        .create_async()
        .await;

    let update = second
        .mock("PUT", "/api/v2/contacts/555")
        .match_body(Matcher::Json(batman_contact_body()))
        .with_status(200)
        .with_body(r#"{"id": 555}"#)
        .expect(1)
        .create_async()
        .await;

    let outcome = synchronizer(&second.url()).sync("batman").await.unwrap();
    assert_eq!(outcome, SyncOutcome::Updated(ContactId(555)));
    second_create.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn a_failed_search_aborts_the_run_instead_of_creating() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/users/batman")
        .with_status(200)
        .with_body(batman_profile().to_string())
        .create_async()
        .await;

    let locate = server
        .mock("GET", "/api/v2/contacts")
        .match_query(Matcher::UrlEncoded(
            "unique_external_id".into(),
            BATMAN_EXTERNAL_ID.into(),
        ))
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "internal error"}"#)
        .expect(1)
        .create_async()
        .await;

    let create = server
        .mock("POST", "/api/v2/contacts")
        .expect(0)
        .create_async()
        .await;

    let result = synchronizer(&server.url()).sync("batman").await;

    assert!(matches!(result, Err(SyncError::SearchFailed { status: 500 })));
    locate.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn a_rejected_create_surfaces_the_write_failure() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/users/batman")
        .with_status(200)
        .with_body(batman_profile().to_string())
        .create_async()
        .await;

    server
        .mock("GET", "/api/v2/contacts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    server
        .mock("POST", "/api/v2/contacts")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": [{"field": "email", "code": "invalid_value"}]}"#)
        .create_async()
        .await;

    let result = synchronizer(&server.url()).sync("batman").await;

    assert!(matches!(
        result,
        Err(SyncError::WriteFailed {
            action: freshdesk_contact::WriteAction::Create,
            status: 400,
        })
    ));
}
