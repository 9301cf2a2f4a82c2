//! API Integration Tests
//!
//! Most tests run against an in-process server over the in-memory store.
//! The Postgres smoke test needs DATABASE_URL and skips without it.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use food_core::UserId;
use integration_tests::{
    assert_json, assert_status, check_postgres_env, fixtures::*, postgres_config, TestServer,
};
use reqwest::StatusCode;

fn finished_path(post_id: impl std::fmt::Display) -> String {
    format!("/api/v1/posts/{post_id}/finished")
}

fn going_path(post_id: impl std::fmt::Display) -> String {
    format!("/api/v1/posts/{post_id}/going")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_memory() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["backend"], "memory");
}

#[tokio::test]
async fn test_health_ready_postgres() {
    if !check_postgres_env() {
        return;
    }

    let config = postgres_config().unwrap();
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["checks"]["backend"], "postgres");
}

// ============================================================================
// Participation Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_finished_twice_restores_set() {
    let server = TestServer::start().await.unwrap();
    let user = UserId::generate();
    let token = server.token_for(user);
    let post_id = PostFixture::owned_by(UserId::generate()).insert(&server.posts);

    let response = server.post_auth(&finished_path(post_id), &token).await.unwrap();
    let marked: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(marked.is_marking);
    assert_eq!(marked.participants, vec![user]);
    assert_eq!(marked.field, "finished");
    assert_eq!(marked.message, "Marked as finished.");

    let response = server.post_auth(&finished_path(post_id), &token).await.unwrap();
    let unmarked: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!unmarked.is_marking);
    assert_eq!(unmarked.count, 0);
    assert!(server.posts.get(post_id).unwrap().finished_by.is_empty());
}

#[tokio::test]
async fn test_going_leaves_finished_untouched() {
    let server = TestServer::start().await.unwrap();
    let finisher = UserId::generate();
    let user = UserId::generate();
    let post_id = PostFixture::owned_by(UserId::generate())
        .finished_by(vec![finisher])
        .insert(&server.posts);

    let response = server
        .post_auth(&going_path(post_id), &server.token_for(user))
        .await
        .unwrap();
    let toggled: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled.field, "going");
    assert!(!toggled.auto_expired);

    let stored = server.posts.get(post_id).unwrap();
    assert_eq!(stored.finished_by.as_slice(), &[finisher]);
    assert_eq!(stored.going_by.as_slice(), &[user]);
}

#[tokio::test]
async fn test_third_finisher_expires_post() {
    let server = TestServer::start().await.unwrap();
    let post_id = PostFixture::owned_by(UserId::generate())
        .finished_by(vec![UserId::generate(), UserId::generate()])
        .insert(&server.posts);

    let before = Utc::now();
    let response = server
        .post_auth(&finished_path(post_id), &server.token_for(UserId::generate()))
        .await
        .unwrap();
    let toggled: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(toggled.auto_expired);
    assert_eq!(toggled.count, 3);
    assert!(toggled.message.contains("automatically expired"));
    let expires_at = toggled.expires_at.expect("forced expiry");
    assert!(expires_at >= before && expires_at <= Utc::now());

    // Gone from the active feed, present in the expired one
    let response = server.get("/api/v1/posts/active").await.unwrap();
    let active: DataResponse<Vec<PostResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(active.data.iter().all(|p| p.id != post_id));

    let response = server.get("/api/v1/posts/expired").await.unwrap();
    let expired: DataResponse<Vec<PostResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    let post = expired.data.iter().find(|p| p.id == post_id).unwrap();
    assert_eq!(post.status, "expired");
}

#[tokio::test]
async fn test_unmarking_does_not_revive_post() {
    let server = TestServer::start().await.unwrap();
    let leaver = UserId::generate();
    let post_id = PostFixture::owned_by(UserId::generate())
        .finished_by(vec![leaver, UserId::generate(), UserId::generate()])
        .expires_in(Duration::minutes(-5))
        .insert(&server.posts);
    let expired_at = server.posts.get(post_id).unwrap().expires_at;

    let response = server
        .post_auth(&finished_path(post_id), &server.token_for(leaver))
        .await
        .unwrap();
    let toggled: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!toggled.is_marking);
    assert!(!toggled.auto_expired);
    assert_eq!(toggled.count, 2);
    assert_eq!(server.posts.get(post_id).unwrap().expires_at, expired_at);
}

#[tokio::test]
async fn test_anonymous_toggle() {
    let server = TestServer::start().await.unwrap();
    let post_id = PostFixture::owned_by(UserId::generate()).insert(&server.posts);

    let response = server.post(&going_path(post_id)).await.unwrap();
    let toggled: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(toggled.participants, vec![UserId::ANONYMOUS]);
}

#[tokio::test]
async fn test_toggle_with_invalid_token() {
    let server = TestServer::start().await.unwrap();
    let post_id = PostFixture::owned_by(UserId::generate()).insert(&server.posts);

    let response = server
        .post_auth(&finished_path(post_id), "definitely-not-a-jwt")
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(body.error.code, "INVALID_TOKEN");
    assert!(server.posts.get(post_id).unwrap().finished_by.is_empty());
}

#[tokio::test]
async fn test_toggle_unknown_post() {
    let server = TestServer::start().await.unwrap();
    let post_id = food_core::PostId::generate();

    let response = server.post(&finished_path(post_id)).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error.code, "UNKNOWN_POST");
    assert!(server.posts.writes().is_empty());
}

#[tokio::test]
async fn test_failed_write_leaves_store_unchanged() {
    let server = TestServer::start().await.unwrap();
    let post_id = PostFixture::owned_by(UserId::generate()).insert(&server.posts);
    server.posts.faults().fail_participant_writes(true);

    let response = server.post(&finished_path(post_id)).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();

    assert_eq!(body.error.code, "STORE_WRITE_FAILED");
    assert!(server.posts.get(post_id).unwrap().finished_by.is_empty());
}

#[tokio::test]
async fn test_failed_read_reports_unavailable() {
    let server = TestServer::start().await.unwrap();
    let post_id = PostFixture::owned_by(UserId::generate()).insert(&server.posts);
    server.posts.faults().fail_reads(true);

    let response = server.post(&finished_path(post_id)).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();

    assert_eq!(body.error.code, "STORE_READ_FAILED");
}

#[tokio::test]
async fn test_failed_auto_expiry_still_records_finisher() {
    let server = TestServer::start().await.unwrap();
    let post_id = PostFixture::owned_by(UserId::generate())
        .finished_by(vec![UserId::generate(), UserId::generate()])
        .insert(&server.posts);
    let original_expiry = server.posts.get(post_id).unwrap().expires_at;
    server.posts.faults().fail_expiry_writes(true);

    let response = server.post(&finished_path(post_id)).await.unwrap();
    let toggled: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(toggled.count, 3);
    assert!(!toggled.auto_expired);
    let stored = server.posts.get(post_id).unwrap();
    assert_eq!(stored.finished_by.len(), 3);
    assert_eq!(stored.expires_at, original_expiry);
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_list_active_with_viewer_state() {
    let server = TestServer::start().await.unwrap();
    let owner = UserId::generate();
    let viewer = UserId::generate();
    insert_profile(&server.profiles, owner, "Ada", "Lovelace");
    let post_id = PostFixture::owned_by(owner)
        .title("Dumplings")
        .going_by(vec![viewer])
        .insert(&server.posts);
    PostFixture::owned_by(owner)
        .expires_in(Duration::hours(-1))
        .insert(&server.posts);

    let response = server
        .get_auth("/api/v1/posts/active", &server.token_for(viewer))
        .await
        .unwrap();
    let list: DataResponse<Vec<PostResponse>> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.data.len(), 1);
    let post = &list.data[0];
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Dumplings");
    assert_eq!(post.status, "active");
    assert!(post.time_status.starts_with("Expires in"));
    assert!(post.viewer.is_going);
    assert!(!post.viewer.is_owner);
    assert!(!post.viewer.has_finished);
    let author = post.author.as_ref().unwrap();
    assert_eq!(author.display_name.as_deref(), Some("Ada Lovelace"));
}

#[tokio::test]
async fn test_list_limit_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/posts/active?limit=101").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let response = server.get("/api/v1/posts/active?limit=abc").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_mine() {
    let server = TestServer::start().await.unwrap();
    let owner = UserId::generate();
    let mine = PostFixture::owned_by(owner).insert(&server.posts);
    let old = PostFixture::owned_by(owner)
        .expires_in(Duration::days(-2))
        .insert(&server.posts);
    PostFixture::owned_by(UserId::generate()).insert(&server.posts);

    let response = server.get("/api/v1/posts/mine").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/posts/mine", &server.token_for(owner))
        .await
        .unwrap();
    let list: DataResponse<Vec<PostResponse>> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<_> = list.data.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&mine) && ids.contains(&old));
    assert!(list.data.iter().all(|p| p.user_id == owner && p.viewer.is_owner));
}

#[tokio::test]
async fn test_get_post_invalid_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/posts/12345").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_owner_finishes_post() {
    let server = TestServer::start().await.unwrap();
    let owner = UserId::generate();
    let post_id = PostFixture::owned_by(owner).insert(&server.posts);
    let path = format!("/api/v1/posts/{post_id}/finish");

    let response = server
        .post_auth(&path, &server.token_for(UserId::generate()))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_POST_OWNER");

    let response = server.post_auth(&path, &server.token_for(owner)).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.status, "expired");
    assert!(post.expires_at <= Utc::now());
}

#[tokio::test]
async fn test_owner_deletes_post() {
    let server = TestServer::start().await.unwrap();
    let owner = UserId::generate();
    let post_id = PostFixture::owned_by(owner).insert(&server.posts);
    let path = format!("/api/v1/posts/{post_id}");

    let response = server
        .delete_auth(&path, &server.token_for(UserId::generate()))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    assert!(server.posts.get(post_id).is_some());

    let token = server.token_for(owner);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Map Tests
// ============================================================================

#[tokio::test]
async fn test_map_markers_spread_overlaps() {
    let server = TestServer::start().await.unwrap();
    let owner = UserId::generate();
    PostFixture::owned_by(owner)
        .at(44.5646, -123.2620)
        .insert(&server.posts);
    PostFixture::owned_by(owner)
        .at(44.5646, -123.2620)
        .finished_by(vec![UserId::generate(), UserId::generate()])
        .insert(&server.posts);
    // No coordinates: not drawn
    PostFixture::owned_by(owner).insert(&server.posts);

    let response = server.get("/api/v1/map/markers").await.unwrap();
    let markers: DataResponse<Vec<MarkerResponse>> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(markers.data.len(), 2);
    let (a, b) = (&markers.data[0], &markers.data[1]);
    assert!(a.lat != b.lat || a.lng != b.lng);
    assert!(markers.data.iter().any(|m| m.color == "almost_finished"));
}

#[tokio::test]
async fn test_map_limit_counts_only_requested_status() {
    let server = TestServer::start().await.unwrap();
    let older = PostFixture::owned_by(UserId::generate())
        .at(44.5646, -123.2620)
        .created_ago(Duration::hours(1))
        .insert(&server.posts);
    for offset in 0..3 {
        PostFixture::owned_by(UserId::generate())
            .at(44.5700 + f64::from(offset) * 0.001, -123.2700)
            .expires_in(Duration::minutes(-5))
            .insert(&server.posts);
    }

    let response = server.get("/api/v1/map/markers?limit=2").await.unwrap();
    let markers: DataResponse<Vec<MarkerResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(markers.data.len(), 1);
    assert_eq!(markers.data[0].post_id, older);

    let response = server.get("/api/v1/map/markers?expired=true&limit=2").await.unwrap();
    let markers: DataResponse<Vec<MarkerResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(markers.data.len(), 2);
    assert!(markers.data.iter().all(|m| m.color == "expired"));
}

#[tokio::test]
async fn test_map_markers_expired() {
    let server = TestServer::start().await.unwrap();
    let gone = PostFixture::owned_by(UserId::generate())
        .at(44.5650, -123.2790)
        .expires_in(Duration::hours(-3))
        .insert(&server.posts);
    PostFixture::owned_by(UserId::generate())
        .at(44.5600, -123.2700)
        .insert(&server.posts);

    let response = server.get("/api/v1/map/markers?expired=true").await.unwrap();
    let markers: DataResponse<Vec<MarkerResponse>> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(markers.data.len(), 1);
    assert_eq!(markers.data[0].post_id, gone);
    assert_eq!(markers.data[0].color, "expired");
    assert_eq!(markers.data[0].color_hex, "#6b7280");
}
