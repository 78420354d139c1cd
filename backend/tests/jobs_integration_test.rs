//! Integration tests for job posting endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique(prefix: &str) -> (String, String) {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    (
        format!("{}_{}", prefix, suffix),
        format!("{}_{}@example.com", prefix, suffix),
    )
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_employer_creates_and_reads_job() {
    let app = common::TestApp::new().await;
    let (username, email) = unique("employer");
    let token = app.register_employer(&username, &email).await;

    let job_id = app.create_job(&token, "Senior Rust Engineer").await;

    // Listing is public
    let (status, body) = app.get("/api/v1/jobs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Senior Rust Engineer"));

    // So is fetching a single posting
    let (status, body) = app.get(&format!("/api/v1/jobs/{}", job_id)).await;
    assert_eq!(status, StatusCode::OK);
    let job: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(job["title"], "Senior Rust Engineer");
    assert_eq!(job["salary"], "95000.00");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_job_seeker_cannot_create_job() {
    let app = common::TestApp::new().await;
    let (username, email) = unique("seeker");
    let token = app.register_seeker(&username, &email).await;

    let body = json!({
        "title": "Not allowed",
        "description": "x",
        "requirements": "x",
        "salary": "1.00",
        "location": "Remote",
        "job_type": "full_time",
        "application_deadline": "2030-01-01T00:00:00Z",
        "skills_required": "x"
    });
    let (status, _) = app.post_auth("/api/v1/jobs", &body.to_string(), &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_only_owner_can_update_job() {
    let app = common::TestApp::new().await;
    let (owner_name, owner_email) = unique("owner");
    let (other_name, other_email) = unique("other");
    let owner = app.register_employer(&owner_name, &owner_email).await;
    let other = app.register_employer(&other_name, &other_email).await;

    let job_id = app.create_job(&owner, "Backend Engineer").await;

    let update = json!({
        "title": "Backend Engineer (updated)",
        "description": "Build and maintain backend services",
        "requirements": "3+ years of Rust",
        "salary": "99000.00",
        "location": "Remote",
        "job_type": "full_time",
        "application_deadline": "2030-01-01T00:00:00Z",
        "skills_required": "rust, sql"
    });

    let (status, _) = app
        .put_auth(&format!("/api/v1/jobs/{}", job_id), &update.to_string(), &other)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .put_auth(&format!("/api/v1/jobs/{}", job_id), &update.to_string(), &owner)
        .await;
    assert_eq!(status, StatusCode::OK);
    let job: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(job["title"], "Backend Engineer (updated)");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_job_removes_applications() {
    let app = common::TestApp::new().await;
    let (employer_name, employer_email) = unique("deleter");
    let (seeker_name, seeker_email) = unique("applicant");
    let employer = app.register_employer(&employer_name, &employer_email).await;
    let seeker = app.register_seeker(&seeker_name, &seeker_email).await;

    let job_id = app.create_job(&employer, "Ephemeral Role").await;

    let application = json!({
        "job_id": job_id,
        "name": "Jane Doe",
        "resume": "resume text",
        "cover_letter": "cover letter text",
        "skills": "rust"
    });
    let (status, _) = app
        .post_auth("/api/v1/applications", &application.to_string(), &seeker)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .delete_auth(&format!("/api/v1/jobs/{}", job_id), &employer)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The seeker's application went with the job
    let (status, body) = app.get_auth("/api/v1/applications", &seeker).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains(&job_id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_unknown_job_is_404() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .get(&format!("/api/v1/jobs/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/v1/jobs/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_mine_returns_only_own_jobs() {
    let app = common::TestApp::new().await;
    let (a_name, a_email) = unique("mine_a");
    let (b_name, b_email) = unique("mine_b");
    let a = app.register_employer(&a_name, &a_email).await;
    let b = app.register_employer(&b_name, &b_email).await;

    let a_job = app.create_job(&a, "Job A").await;
    let b_job = app.create_job(&b, "Job B").await;

    let (status, body) = app.get_auth("/api/v1/jobs/mine", &a).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(&a_job));
    assert!(!body.contains(&b_job));
}
