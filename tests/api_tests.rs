//! Integration tests exercising the HTTP layer end to end against a fresh
//! in-memory store per test.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error, test, web};
use serde_json::{Value, json};

use testhub_lib::api;
use testhub_lib::store::MemStore;

/// Build a test service with an empty store and the full `/api` scope.
async fn init_app()
-> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(MemStore::new()))
            .configure(api::configure_api),
    )
    .await
}

async fn post_json(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
    >,
    path: &str,
    body: Value,
) -> ServiceResponse<impl MessageBody> {
    let req = test::TestRequest::post()
        .uri(path)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

async fn get(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
    >,
    path: &str,
) -> ServiceResponse<impl MessageBody> {
    test::call_service(app, test::TestRequest::get().uri(path).to_request()).await
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = init_app().await;

    let resp = get(&app, "/api/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_create_configuration_applies_defaults() {
    let app = init_app().await;

    let resp = post_json(
        &app,
        "/api/configurations",
        json!({"name": "Chrome on Windows", "type": "desktop"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Chrome on Windows");
    assert_eq!(body["type"], "desktop");
    assert_eq!(body["status"], "active");
    assert_eq!(body["tags"], json!([]));
    assert_eq!(body["isTemplate"], false);
    assert!(body["createdAt"].is_string());
}

#[actix_web::test]
async fn test_list_configurations_filters_by_type() {
    let app = init_app().await;

    post_json(
        &app,
        "/api/configurations",
        json!({"name": "Chrome", "type": "desktop"}),
    )
    .await;
    post_json(
        &app,
        "/api/configurations",
        json!({"name": "iPhone 14 Pro", "type": "real_device"}),
    )
    .await;

    let resp = get(&app, "/api/configurations?type=desktop").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("array response");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Chrome");
}

#[actix_web::test]
async fn test_get_configuration_not_found() {
    let app = init_app().await;

    let resp = get(&app, "/api/configurations/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Configuration not found");
}

#[actix_web::test]
async fn test_update_configuration_merges_fields() {
    let app = init_app().await;

    post_json(
        &app,
        "/api/configurations",
        json!({"name": "Chrome", "type": "desktop", "browser": "Chrome"}),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/configurations/1")
        .set_json(json!({"status": "inactive"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "inactive");
    // Untouched fields survive the patch.
    assert_eq!(body["name"], "Chrome");
    assert_eq!(body["browser"], "Chrome");
}

#[actix_web::test]
async fn test_delete_configuration() {
    let app = init_app().await;

    post_json(
        &app,
        "/api/configurations",
        json!({"name": "Chrome", "type": "desktop"}),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri("/api/configurations/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get(&app, "/api/configurations/1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_body_returns_standard_error_shape() {
    let app = init_app().await;

    // Missing the required "type" field.
    let resp = post_json(&app, "/api/configurations", json!({"name": "Chrome"})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["details"].is_string());
}

#[actix_web::test]
async fn test_create_test_case_defaults() {
    let app = init_app().await;

    let resp = post_json(
        &app,
        "/api/test-cases",
        json!({"name": "Login Test", "category": "KaneAI"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["priority"], "medium");
    assert_eq!(body["status"], "active");
    assert_eq!(body["steps"], json!([]));
}

#[actix_web::test]
async fn test_test_run_status_transitions_via_update() {
    let app = init_app().await;

    let resp = post_json(&app, "/api/test-runs", json!({"name": "Nightly"})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pending");

    let req = test::TestRequest::put()
        .uri("/api/test-runs/1")
        .set_json(json!({"status": "running"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "running");
}

#[actix_web::test]
async fn test_create_allocation_without_targets() {
    let app = init_app().await;

    let resp = post_json(&app, "/api/allocations", json!({"configurationId": 1})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["configurationId"], 1);
    assert_eq!(body["testCaseId"], Value::Null);
    assert_eq!(body["testRunId"], Value::Null);
}

#[actix_web::test]
async fn test_bulk_allocations_partial_application() {
    let app = init_app().await;

    // The second item is missing configurationId; the first is created and
    // kept, the third is never reached.
    let resp = post_json(
        &app,
        "/api/allocations/bulk",
        json!({"allocations": [
            {"configurationId": 1, "testRunId": 7},
            {"testRunId": 7},
            {"configurationId": 2, "testRunId": 7}
        ]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid allocation data");
    assert_eq!(body["details"]["index"], 1);

    let resp = get(&app, "/api/allocations").await;
    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("array response");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["configurationId"], 1);
}

#[actix_web::test]
async fn test_bulk_allocations_all_valid() {
    let app = init_app().await;

    let resp = post_json(
        &app,
        "/api/allocations/bulk",
        json!({"allocations": [
            {"configurationId": 1, "testCaseId": 3},
            {"configurationId": 2, "testCaseId": 3}
        ]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn test_list_allocations_filtered_by_test_run() {
    let app = init_app().await;

    post_json(
        &app,
        "/api/allocations",
        json!({"configurationId": 1, "testRunId": 5}),
    )
    .await;
    post_json(
        &app,
        "/api/allocations",
        json!({"configurationId": 1, "testCaseId": 9}),
    )
    .await;

    let resp = get(&app, "/api/allocations?testRunId=5").await;
    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("array response");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["testRunId"], 5);
}

#[actix_web::test]
async fn test_delete_allocation_not_found() {
    let app = init_app().await;

    let req = test::TestRequest::delete()
        .uri("/api/allocations/42")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Allocation not found");
}

#[actix_web::test]
async fn test_test_results_filtered_by_run() {
    let app = init_app().await;

    for (run, status) in [(1, "completed"), (1, "failed"), (2, "completed")] {
        let resp = post_json(
            &app,
            "/api/test-results",
            json!({
                "testRunId": run,
                "testCaseId": 1,
                "configurationId": 1,
                "status": status
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = get(&app, "/api/test-results?testRunId=1").await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn test_stats_reflect_store_contents() {
    let app = init_app().await;

    let resp = get(&app, "/api/analytics/stats").await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalConfigurations"], 0);
    assert_eq!(body["successRate"], 0.0);

    post_json(
        &app,
        "/api/configurations",
        json!({"name": "Chrome", "type": "desktop"}),
    )
    .await;
    post_json(
        &app,
        "/api/applications",
        json!({"name": "Banking App", "version": "2.1.0", "platform": "iOS"}),
    )
    .await;
    post_json(&app, "/api/test-runs", json!({"name": "Nightly", "status": "running"})).await;
    for status in ["completed", "completed", "failed"] {
        post_json(
            &app,
            "/api/test-results",
            json!({
                "testRunId": 1,
                "testCaseId": 1,
                "configurationId": 1,
                "status": status
            }),
        )
        .await;
    }

    let resp = get(&app, "/api/analytics/stats").await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalConfigurations"], 1);
    assert_eq!(body["totalApplications"], 1);
    assert_eq!(body["activeTestRuns"], 1);
    assert_eq!(body["successRate"], 66.7);
}

#[actix_web::test]
async fn test_activity_feed_records_mutations() {
    let app = init_app().await;

    post_json(
        &app,
        "/api/configurations",
        json!({"name": "Chrome", "type": "desktop"}),
    )
    .await;
    let req = test::TestRequest::delete()
        .uri("/api/configurations/1")
        .to_request();
    test::call_service(&app, req).await;

    let resp = get(&app, "/api/activity").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("array response");
    assert_eq!(items.len(), 2);
    // Newest first.
    assert_eq!(items[0]["action"], "deleted");
    assert_eq!(items[1]["action"], "created");
    assert_eq!(items[0]["resourceType"], "configuration");
    assert_eq!(items[0]["resourceName"], "Chrome");
}

#[actix_web::test]
async fn test_activity_feed_respects_limit() {
    let app = init_app().await;

    for i in 0..5 {
        post_json(
            &app,
            "/api/test-cases",
            json!({"name": format!("Case {i}"), "category": "KaneAI"}),
        )
        .await;
    }

    let resp = get(&app, "/api/activity?limit=3").await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[actix_web::test]
async fn test_application_crud_round_trip() {
    let app = init_app().await;

    let resp = post_json(
        &app,
        "/api/applications",
        json!({
            "name": "Banking App",
            "version": "2.1.0",
            "platform": "iOS",
            "packageName": "com.bank.mobile"
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["packageName"], "com.bank.mobile");

    let resp = get(&app, "/api/applications/1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri("/api/applications/1")
        .set_json(json!({"version": "2.2.0"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["version"], "2.2.0");
    assert_eq!(body["name"], "Banking App");
}
