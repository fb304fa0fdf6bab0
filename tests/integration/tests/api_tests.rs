//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_unprefixed("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_unprefixed("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_and_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let token = server
        .login(&request.username, &request.email)
        .await
        .unwrap();
    assert!(!token.is_empty());

    let response = server.get("/users/me", Some(&token)).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.username, request.username);
    assert_eq!(me.role, "user");
}

#[tokio::test]
async fn test_signup_is_idempotent_for_same_pair() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    for _ in 0..2 {
        let response = server.post("/auth/signup", None, &request).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    // The second signup rotated the code; only the latest one works
    let code = server.latest_code(&request.email).await.unwrap();
    let response = server
        .post(
            "/auth/token",
            None,
            &TokenRequest {
                username: request.username.clone(),
                confirmation_code: code,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_signup_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = SignupRequest::unique();
    let response = server.post("/auth/signup", None, &first).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Same username, different email
    let other = SignupRequest::unique();
    let response = server
        .post(
            "/auth/signup",
            None,
            &SignupRequest {
                username: first.username.clone(),
                email: other.email.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Same email, different username
    let response = server
        .post(
            "/auth/signup",
            None,
            &SignupRequest {
                username: other.username,
                email: first.email.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Reserved username
    let response = server
        .post(
            "/auth/signup",
            None,
            &SignupRequest {
                username: "me".to_string(),
                email: other.email,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_token_with_wrong_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();
    server.post("/auth/signup", None, &request).await.unwrap();

    let response = server
        .post(
            "/auth/token",
            None,
            &TokenRequest {
                username: request.username,
                confirmation_code: "definitely-wrong".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post(
            "/auth/token",
            None,
            &TokenRequest {
                username: format!("ghost_{}", unique_suffix()),
                confirmation_code: "whatever".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_me_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users/me", None).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/users/me", Some("not-a-token")).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_self_update_keeps_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();
    let token = server.login(&request.username, &request.email).await.unwrap();

    let response = server
        .patch(
            "/users/me",
            Some(&token),
            &json!({"first_name": "Ann", "role": "admin"}),
        )
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.first_name, "Ann");
    assert_eq!(me.role, "user");
}

#[tokio::test]
async fn test_admin_manages_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.login_admin().await.unwrap();
    let new_user = SignupRequest::unique();

    let response = server
        .post(
            "/users",
            Some(&admin),
            &json!({
                "username": new_user.username,
                "email": new_user.email,
                "role": "moderator"
            }),
        )
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.role, "moderator");

    let response = server
        .get(&format!("/users?search={}", new_user.username), Some(&admin))
        .await
        .unwrap();
    let page: Paginated<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.count, 1);

    let path = format!("/users/{}", new_user.username);
    let response = server.delete(&path, Some(&admin)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path, Some(&admin)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_regular_user_cannot_list_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();
    let token = server.login(&request.username, &request.email).await.unwrap();

    let response = server.get("/users", Some(&token)).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_catalog_writes_are_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();
    let token = server.login(&request.username, &request.email).await.unwrap();

    let response = server
        .post("/genres", Some(&token), &TaxonRequest::unique("genre"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post("/titles", Some(&token), &CreateTitleRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_title_with_taxonomy() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.login_admin().await.unwrap();

    let category = TaxonRequest::unique("cat");
    let genre = TaxonRequest::unique("genre");
    let response = server.post("/categories", Some(&admin), &category).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server.post("/genres", Some(&admin), &genre).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Duplicate slug
    let response = server.post("/genres", Some(&admin), &genre).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let mut request = CreateTitleRequest::unique();
    request.category = Some(category.slug.clone());
    request.genre = vec![genre.slug.clone()];
    let response = server.post("/titles", Some(&admin), &request).await.unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(title.name, request.name);
    assert!(title.rating.is_none());
    assert_eq!(title.genre.len(), 1);

    let response = server
        .get(&format!("/titles?genre={}", genre.slug), None)
        .await
        .unwrap();
    let page: Paginated<TitleResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].id, title.id);

    // Deleting the category keeps the title but clears its category
    let response = server
        .delete(&format!("/categories/{}", category.slug), Some(&admin))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/titles/{}", title.id), None)
        .await
        .unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(title.category.is_none());
}

// ============================================================================
// Review and Comment Tests
// ============================================================================

#[tokio::test]
async fn test_review_flow_and_cascade() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.login_admin().await.unwrap();

    let response = server
        .post("/titles", Some(&admin), &CreateTitleRequest::unique())
        .await
        .unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let reviews = format!("/titles/{}/reviews", title.id);

    let mut review_ids = Vec::new();
    for score in [10, 7] {
        let user = SignupRequest::unique();
        let token = server.login(&user.username, &user.email).await.unwrap();
        let response = server
            .post(
                &reviews,
                Some(&token),
                &CreateReviewRequest {
                    text: "Worth watching".to_string(),
                    score,
                },
            )
            .await
            .unwrap();
        let review: ReviewResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(review.author, user.username);

        // One review per title
        let response = server
            .post(
                &reviews,
                Some(&token),
                &CreateReviewRequest {
                    text: "Again".to_string(),
                    score: 1,
                },
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

        // Editing is never blocked by the one-review rule
        let response = server
            .patch(
                &format!("{reviews}/{}", review.id),
                Some(&token),
                &json!({"text": "Still worth watching"}),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();

        review_ids.push(review.id);
    }

    let response = server
        .get(&format!("/titles/{}", title.id), None)
        .await
        .unwrap();
    let rated: TitleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!((rated.rating.unwrap() - 8.5).abs() < 1e-9);

    // Comment on the first review
    let commenter = SignupRequest::unique();
    let token = server
        .login(&commenter.username, &commenter.email)
        .await
        .unwrap();
    let comments = format!("{reviews}/{}/comments", review_ids[0]);
    let response = server
        .post(
            &comments,
            Some(&token),
            &CommentRequest {
                text: "Agreed".to_string(),
            },
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.review, review_ids[0]);

    // Deleting the title removes its reviews and comments
    let response = server
        .delete(&format!("/titles/{}", title.id), Some(&admin))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("{comments}/{}", comment.id), None)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_score_bounds() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.login_admin().await.unwrap();
    let response = server
        .post("/titles", Some(&admin), &CreateTitleRequest::unique())
        .await
        .unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let reviews = format!("/titles/{}/reviews", title.id);

    for (score, expected) in [
        (0, StatusCode::BAD_REQUEST),
        (11, StatusCode::BAD_REQUEST),
        (1, StatusCode::CREATED),
        (10, StatusCode::CREATED),
    ] {
        let user = SignupRequest::unique();
        let token = server.login(&user.username, &user.email).await.unwrap();
        let response = server
            .post(
                &reviews,
                Some(&token),
                &CreateReviewRequest {
                    text: "Scored".to_string(),
                    score,
                },
            )
            .await
            .unwrap();
        assert_status(response, expected).await.unwrap();
    }
}
