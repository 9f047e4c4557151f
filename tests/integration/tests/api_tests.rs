//! API Integration Tests
//!
//! Each test spawns the full router (middleware included) on an ephemeral
//! port, backed by a fresh in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;
use temuka_core::EntityId;
use temuka_db::FailPoint;

async fn create_community(server: &TestServer) -> CommunityResponse {
    let response = server
        .post("/communities", &CreateCommunityRequest::unique())
        .await
        .unwrap();
    let body: Envelope<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    body.data
}

async fn fetch_community(server: &TestServer, id: i64) -> CommunityResponse {
    let response = server.get(&format!("/communities/{id}")).await.unwrap();
    let body: Envelope<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    body.data
}

async fn create_user(server: &TestServer) -> UserResponse {
    let response = server.post("/users", &CreateUserRequest::unique()).await.unwrap();
    let body: Envelope<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    body.data
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
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_reports_store_failure() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store.fail_on(FailPoint::Ping);

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Community Tests
// ============================================================================

#[tokio::test]
async fn test_create_community() {
    let server = TestServer::start().await.unwrap();
    let request = CreateCommunityRequest::unique();

    let response = server.post("/communities", &request).await.unwrap();
    let body: Envelope<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message, "Community has been created");
    assert!(body.data.id > 0);
    assert_eq!(body.data.name, request.name);
    assert_eq!(body.data.description, request.desc);
    assert_eq!(body.data.logo_picture, request.logopicture);
    assert_eq!(body.data.members_count, 0);
}

#[tokio::test]
async fn test_create_community_requires_name() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/communities", &json!({ "name": "", "desc": "d" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_community_store_failure() {
    let server = TestServer::start().await.unwrap();
    server.store.fail_on(FailPoint::CreateCommunity);

    let response = server
        .post("/communities", &CreateCommunityRequest::unique())
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(error, "Error creating community");
}

#[tokio::test]
async fn test_list_and_get_communities() {
    let server = TestServer::start().await.unwrap();
    let first = create_community(&server).await;
    let second = create_community(&server).await;

    let response = server.get("/communities").await.unwrap();
    let body: Envelope<Vec<CommunityResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Communities have been retrieved");
    let ids: Vec<i64> = body.data.iter().map(|c| c.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    let response = server
        .get(&format!("/communities/{}", second.id))
        .await
        .unwrap();
    let body: Envelope<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Community detail has been retrieved");
    assert_eq!(body.data.name, second.name);
}

#[tokio::test]
async fn test_get_community_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/communities/424242").await.unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "Community not found");
}

#[tokio::test]
async fn test_get_community_invalid_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/communities/abc").await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Invalid community id");
}

// ============================================================================
// Join Tests
// ============================================================================

#[tokio::test]
async fn test_join_community() {
    let server = TestServer::start().await.unwrap();
    let community = create_community(&server).await;

    let response = server
        .post(
            &format!("/communities/{}/join", community.id),
            &JoinRequest::new(7),
        )
        .await
        .unwrap();
    let body: Message = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Successfully joined the community");

    assert_eq!(fetch_community(&server, community.id).await.members_count, 1);
}

#[tokio::test]
async fn test_join_with_put() {
    let server = TestServer::start().await.unwrap();
    let community = create_community(&server).await;

    let response = server
        .put(
            &format!("/communities/{}/join", community.id),
            &JoinRequest::new(3),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetch_community(&server, community.id).await.members_count, 1);
}

#[tokio::test]
async fn test_join_without_json_content_type() {
    let server = TestServer::start().await.unwrap();
    let community = create_community(&server).await;
    let path = format!("/communities/{}/join", community.id);

    // As sent by `curl -d` or a bare client: well-formed JSON, no JSON header
    let response = server
        .post_raw(&path, None, r#"{"user_id":43}"#)
        .await
        .unwrap();
    let body: Message = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Successfully joined the community");

    let response = server
        .post_raw(
            &path,
            Some("application/x-www-form-urlencoded"),
            r#"{"user_id":44}"#,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetch_community(&server, community.id).await.members_count, 2);

    let response = server
        .post_raw(&path, None, r#"{"user_id":43}"#)
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "User already a member of the community");
}

#[tokio::test]
async fn test_join_twice_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let community = create_community(&server).await;
    let path = format!("/communities/{}/join", community.id);

    let response = server.post(&path, &JoinRequest::new(11)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post(&path, &JoinRequest::new(11)).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "User already a member of the community");

    assert_eq!(fetch_community(&server, community.id).await.members_count, 1);
    assert_eq!(
        server
            .store
            .members_of(EntityId::new(community.id))
            .await
            .len(),
        1
    );
}

#[tokio::test]
async fn test_join_unknown_community() {
    let server = TestServer::start().await.unwrap();

    for user_id in [1, 2, 999] {
        let response = server
            .post("/communities/987654/join", &JoinRequest::new(user_id))
            .await
            .unwrap();
        let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(error, "Community not found");
    }
}

#[tokio::test]
async fn test_join_invalid_community_id() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/communities/not-a-number/join", &JoinRequest::new(1))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Invalid community id");
}

#[tokio::test]
async fn test_join_malformed_body_touches_nothing() {
    let server = TestServer::start().await.unwrap();
    let community = create_community(&server).await;

    // Any repository call would fail, so a 400 proves none was made.
    server.store.fail_on(FailPoint::Begin);
    server.store.fail_on(FailPoint::GetCommunity);

    let response = server
        .post(
            &format!("/communities/{}/join", community.id),
            &json!({ "user_id": "seven" }),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Invalid request body");

    server.store.clear_failures();
    assert_eq!(fetch_community(&server, community.id).await.members_count, 0);
    assert!(server
        .store
        .members_of(EntityId::new(community.id))
        .await
        .is_empty());
}

#[tokio::test]
async fn test_join_update_failure_rolls_back() {
    let server = TestServer::start().await.unwrap();
    let community = create_community(&server).await;
    server.store.fail_on(FailPoint::UpdateCommunity);

    let response = server
        .post(
            &format!("/communities/{}/join", community.id),
            &JoinRequest::new(5),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(error, "Error updating community");

    server.store.clear_failures();
    assert_eq!(fetch_community(&server, community.id).await.members_count, 0);
    assert!(server
        .store
        .members_of(EntityId::new(community.id))
        .await
        .is_empty());
}

#[tokio::test]
async fn test_concurrent_joins_keep_count_consistent() {
    let server = TestServer::start().await.unwrap();
    let community = create_community(&server).await;
    let url = format!("{}/communities/{}/join", server.base_url(), community.id);

    let mut handles = Vec::new();
    for user_id in 1..=15 {
        let client = server.client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            client
                .post(&url)
                .json(&JoinRequest::new(user_id))
                .send()
                .await
        }));
    }
    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let stored = fetch_community(&server, community.id).await;
    let members = server.store.members_of(EntityId::new(community.id)).await;
    assert_eq!(stored.members_count, 15);
    assert_eq!(members.len(), 15);
}

#[tokio::test]
async fn test_concurrent_duplicate_join() {
    let server = TestServer::start().await.unwrap();
    let community = create_community(&server).await;
    let url = format!("{}/communities/{}/join", server.base_url(), community.id);

    let mut handles = Vec::new();
    for _ in 0..2 {
        let client = server.client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            client.post(&url).json(&JoinRequest::new(42)).send().await
        }));
    }

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap().unwrap().status());
    }
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::BAD_REQUEST]);
    assert_eq!(fetch_community(&server, community.id).await.members_count, 1);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    let server = TestServer::start().await.unwrap();
    let request = CreateUserRequest::unique();

    let response = server.post("/users", &request).await.unwrap();
    let body: Envelope<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "User has been created");
    assert_eq!(body.data.username, request.username);

    let response = server
        .get(&format!("/users/{}", body.data.id))
        .await
        .unwrap();
    let detail: Envelope<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.message, "User detail has been retrieved");
    assert_eq!(detail.data.email, request.email);

    let stored = server
        .store
        .password_hash_of(EntityId::new(body.data.id))
        .await
        .unwrap();
    assert_ne!(stored, request.password);
}

#[tokio::test]
async fn test_user_response_hides_password() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/users", &CreateUserRequest::unique())
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let server = TestServer::start().await.unwrap();
    let request = CreateUserRequest::unique();
    server.post("/users", &request).await.unwrap();

    let duplicate = CreateUserRequest {
        username: format!("other{}", unique_suffix()),
        ..request
    };
    let response = server.post("/users", &duplicate).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Email already in use");
}

#[tokio::test]
async fn test_search_users() {
    let server = TestServer::start().await.unwrap();
    let user = create_user(&server).await;

    let response = server
        .get(&format!("/users?username={}", user.username.to_uppercase()))
        .await
        .unwrap();
    let body: Envelope<Vec<UserResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Users have been retrieved");
    assert!(body.data.iter().any(|u| u.id == user.id));
}

#[tokio::test]
async fn test_search_users_empty() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/users?username=nobody").await.unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "No user found");
}

#[tokio::test]
async fn test_update_user() {
    let server = TestServer::start().await.unwrap();
    let user = create_user(&server).await;
    let new_name = format!("renamed{}", unique_suffix());

    let response = server
        .put(&format!("/users/{}", user.id), &json!({ "username": new_name }))
        .await
        .unwrap();
    let body: Envelope<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "User has been updated");
    assert_eq!(body.data.username, new_name);
    assert_eq!(body.data.email, user.email);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/users/31337").await.unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "User not found");

    let response = server.get("/users/x1").await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error, "Invalid user id");
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let user = create_user(&server).await;
    let community = create_community(&server).await;

    let request = CreatePostRequest::new(user.id, Some(community.id));
    let response = server.post("/posts", &request).await.unwrap();
    let created: Envelope<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.message, "Post has been created");
    assert_eq!(created.data.content, request.content);
    assert_eq!(created.data.community_id, Some(community.id));
    assert_eq!(created.data.likes_count, 0);

    let like_path = format!("/posts/like/{}", created.data.id);
    let response = server.put_empty(&like_path).await.unwrap();
    let liked: Envelope<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked.message, "Post has been liked");
    assert_eq!(liked.data.likes_count, 1);

    let response = server.put_empty(&like_path).await.unwrap();
    let liked: Envelope<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked.data.likes_count, 2);

    let response = server
        .delete(&format!("/posts/{}", created.data.id))
        .await
        .unwrap();
    let deleted: Message = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.message, "Post has been deleted");

    let response = server.put_empty(&like_path).await.unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "Post not found");
}

#[tokio::test]
async fn test_create_post_unknown_community() {
    let server = TestServer::start().await.unwrap();
    let user = create_user(&server).await;

    let response = server
        .post("/posts", &CreatePostRequest::new(user.id, Some(99_999)))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "Community not found");
}

#[tokio::test]
async fn test_timeline_paging() {
    let server = TestServer::start().await.unwrap();
    let user = create_user(&server).await;

    let mut ids = Vec::new();
    for _ in 0..5 {
        let response = server
            .post("/posts", &CreatePostRequest::new(user.id, None))
            .await
            .unwrap();
        let body: Envelope<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
        ids.push(body.data.id);
    }

    let response = server.get("/posts/timeline?limit=2").await.unwrap();
    let page: Envelope<Vec<PostResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.message, "Timeline posts have been retrieved");
    assert_eq!(
        page.data.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![ids[4], ids[3]]
    );

    let response = server
        .get(&format!("/posts/timeline?limit=10&before={}", ids[3]))
        .await
        .unwrap();
    let page: Envelope<Vec<PostResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        page.data.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1], ids[0]]
    );

    let response = server.get("/posts/timeline?limit=lots").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_post_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.delete("/posts/5150").await.unwrap();
    let error = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error, "Post not found");
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_spares_health_routes() {
    let config = test_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "2"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let mut statuses = Vec::new();
    for _ in 0..4 {
        statuses.push(server.get("/communities").await.unwrap().status());
    }
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));

    for _ in 0..4 {
        let response = server.get("/health").await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}
