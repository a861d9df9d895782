//! HTTP-level integration tests for submission, listing, gallery,
//! statistics and owner edits.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_project, get, get_auth, member_token, patch_json_auth, post_json,
    put_json_auth, submission,
};
use showcase_db::models::mentor::CreateMentor;
use showcase_db::repositories::MentorRepo;
use sqlx::PgPool;

async fn create_mentor(pool: &PgPool) -> i64 {
    MentorRepo::create(
        pool,
        &CreateMentor {
            name: "Dr. Rao".to_string(),
            email: "rao@club.edu".to_string(),
            password_hash: "unused".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submission_is_normalized_and_hides_contact(pool: PgPool) {
    let mut body = submission("OctoCat", "  555-0100 ");
    body["tech_stack"] = serde_json::json!([" Rust ", "Rust", "", "Axum"]);
    body["deployed_link"] = serde_json::json!("   ");

    let response = post_json(common::build_test_app(pool), "/api/v1/projects", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["github_username"], "octocat");
    assert_eq!(data["status"], "pending");
    assert_eq!(data["tier"], serde_json::Value::Null);
    assert_eq!(data["rating_count"], 0);
    assert_eq!(data["tech_stack"], serde_json::json!(["Rust", "Axum"]));
    assert_eq!(data["deployed_link"], serde_json::Value::Null);
    assert!(data.get("contact_no").is_none(), "contact number must not leak");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_submissions_are_rejected(pool: PgPool) {
    let cases = [
        ("title", serde_json::json!("ab")),
        ("description", serde_json::json!("too short")),
        ("github_repo_link", serde_json::json!("https://gitlab.com/x/y")),
        ("github_username", serde_json::json!("-bad-")),
        ("domain", serde_json::json!("Quantum Basket Weaving")),
        ("tech_stack", serde_json::json!([])),
        ("submitter_name", serde_json::json!("A")),
    ];
    for (field, value) in cases {
        let mut body = submission("ann", &format!("contact-{field}"));
        body[field] = value;
        let response =
            post_json(common::build_test_app(pool.clone()), "/api/v1/projects", body).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "field {field} should be validated"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_submission_within_cooldown_is_rate_limited(pool: PgPool) {
    create_project(&pool, submission("ann", "555-0100")).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/projects",
        submission("ann", "555-0100"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Please wait 5 minutes between submissions");

    // A different contact number is unaffected.
    create_project(&pool, submission("ann", "555-0199")).await;
}

// ---------------------------------------------------------------------------
// Listing, gallery and statistics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_domain_and_search(pool: PgPool) {
    create_project(&pool, submission("ann", "c1")).await;
    let mut body = submission("bob", "c2");
    body["title"] = serde_json::json!("Crop Doctor");
    body["domain"] = serde_json::json!("AI/ML");
    create_project(&pool, body).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects?domain=AI%2FML&status=all").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Crop Doctor");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects?search=ANN").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects?status=shipped").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_groups_by_tier(pool: PgPool) {
    let featured = create_project(&pool, submission("ann", "c1")).await;
    create_project(&pool, submission("bob", "c2")).await;
    let mentor = create_mentor(&pool).await;

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{featured}/tier"),
        serde_json::json!({ "tier": 1 }),
        &common::mentor_token(mentor),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(common::build_test_app(pool), "/api/v1/projects/gallery").await).await;
    let data = &json["data"];
    assert_eq!(data["featured"].as_array().unwrap().len(), 1);
    assert_eq!(data["featured"][0]["id"], featured);
    assert_eq!(data["highlighted"].as_array().unwrap().len(), 0);
    assert_eq!(data["unranked"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_and_domains(pool: PgPool) {
    create_project(&pool, submission("ann", "c1")).await;
    create_project(&pool, submission("ann", "c2")).await;
    let mut body = submission("bob", "c3");
    body["domain"] = serde_json::json!("IoT");
    let iot = create_project(&pool, body).await;

    let mentor = create_mentor(&pool).await;
    patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{iot}/status"),
        serde_json::json!({ "status": "deployed-great" }),
        &common::mentor_token(mentor),
    )
    .await;

    let json = body_json(get(common::build_test_app(pool.clone()), "/api/v1/projects/stats").await).await;
    assert_eq!(
        json["data"],
        serde_json::json!({
            "total_projects": 3,
            "completed_projects": 1,
            "deployed_projects": 1,
            "total_members": 2,
        })
    );

    let json = body_json(get(common::build_test_app(pool), "/api/v1/projects/domains").await).await;
    assert_eq!(
        json["data"],
        serde_json::json!([
            { "domain": "Web Development", "count": 2 },
            { "domain": "IoT", "count": 1 },
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_project_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/projects/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Owner edits and moderation guards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn owner_can_edit_and_others_cannot(pool: PgPool) {
    let id = create_project(&pool, submission("ann", "c1")).await;
    let mut edit = submission("ann", "ignored");
    edit["title"] = serde_json::json!("Campus Navigator Pro");

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{id}"),
        edit.clone(),
        &member_token("bob"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{id}"),
        edit,
        &member_token("ann"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Campus Navigator Pro");

    let json = body_json(
        get_auth(
            common::build_test_app(pool),
            "/api/v1/members/me/projects",
            &member_token("ann"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"][0]["title"], "Campus Navigator Pro");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn moderation_requires_mentor_role(pool: PgPool) {
    let id = create_project(&pool, submission("ann", "c1")).await;

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{id}/status"),
        serde_json::json!({ "status": "complete" }),
        &member_token("ann"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{id}/reviews"),
        serde_json::json!({ "content": "Nice" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tier_out_of_range_and_clear(pool: PgPool) {
    let id = create_project(&pool, submission("ann", "c1")).await;
    let token = common::mentor_token(create_mentor(&pool).await);
    let uri = format!("/api/v1/projects/{id}/tier");

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "tier": 4 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "tier": 3 }),
        &token,
    )
    .await;
    let response = patch_json_auth(
        common::build_test_app(pool),
        &uri,
        serde_json::json!({ "tier": null }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["tier"], serde_json::Value::Null);
}
