//! Integration tests for category endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_category_lifecycle() {
    let app = helpers::TestApp::new().await;

    let created = app
        .request("POST", "/api/category", Some(json!({ "CategoryName": "Beverages" })))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["CategoryID"].as_i64().expect("id");
    assert!(id > 0);
    assert_eq!(created.body["CategoryName"], "Beverages");
    assert_eq!(created.location, Some(format!("/api/categoryById/{id}")));

    let found = app.request("GET", "/api/category/search/Bev", None).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["success"], true);
    assert_eq!(found.body["message"], "request data successful");
    assert_eq!(
        found.body["data"],
        json!([{ "CategoryID": id, "CategoryName": "Beverages" }])
    );

    let deleted = app
        .request("DELETE", &format!("/api/category/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.body,
        json!({ "success": true, "message": "request delete successful" })
    );

    app.request("GET", &format!("/api/categoryById/{id}"), None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_list_and_get_by_id() {
    let app = helpers::TestApp::new().await;
    let snacks = app.create_category("Snacks").await;
    let dairy = app.create_category("Dairy").await;

    let list = app.request("GET", "/api/category", None).await;
    assert_eq!(list.status, StatusCode::OK);
    let names: Vec<&str> = list.body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|c| c["CategoryName"].as_str())
        .collect();
    assert_eq!(names, ["Dairy", "Snacks"]);

    let one = app
        .request("GET", &format!("/api/categoryById/{snacks}"), None)
        .await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(
        one.body["data"],
        json!({ "CategoryID": snacks, "CategoryName": "Snacks" })
    );
    assert_ne!(snacks, dairy);
}

#[tokio::test]
async fn test_empty_list_and_search_are_not_found() {
    let app = helpers::TestApp::new().await;

    app.request("GET", "/api/category", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");

    app.create_category("Produce").await;
    app.request("GET", "/api/category/search/zzz", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_literal() {
    let app = helpers::TestApp::new().await;
    app.create_category("Beverages").await;
    app.create_category("100% Juice").await;

    let lower = app.request("GET", "/api/category/search/bev", None).await;
    assert_eq!(lower.status, StatusCode::OK);
    assert_eq!(lower.body["data"][0]["CategoryName"], "Beverages");

    // `%25` decodes to a literal percent sign.
    let percent = app.request("GET", "/api/category/search/%25", None).await;
    assert_eq!(percent.status, StatusCode::OK);
    let data = percent.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["CategoryName"], "100% Juice");
}

#[tokio::test]
async fn test_update_category() {
    let app = helpers::TestApp::new().await;
    let id = app.create_category("Bakery").await;

    let updated = app
        .request(
            "PUT",
            "/api/category",
            Some(json!({ "CategoryID": id, "CategoryName": "Bread & Bakery" })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["message"], "request update successful");
    assert_eq!(updated.body["data"]["CategoryName"], "Bread & Bakery");

    let camel = app
        .request(
            "PUT",
            "/api/category",
            Some(json!({ "categoryID": id, "categoryName": "Bakery" })),
        )
        .await;
    assert_eq!(camel.status, StatusCode::OK);
    assert_eq!(camel.body["data"]["CategoryName"], "Bakery");
}

#[tokio::test]
async fn test_update_and_delete_unknown_id_are_not_found() {
    let app = helpers::TestApp::new().await;

    app.request(
        "PUT",
        "/api/category",
        Some(json!({ "CategoryID": 41, "CategoryName": "Nobody" })),
    )
    .await
    .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");

    app.request("DELETE", "/api/category/41", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_bad_input_is_bad_request() {
    let app = helpers::TestApp::new().await;

    app.send_raw("POST", "/api/category", "{not json")
        .await
        .assert_error(StatusCode::BAD_REQUEST, "VALIDATION");

    app.request("POST", "/api/category", Some(json!({})))
        .await
        .assert_error(StatusCode::BAD_REQUEST, "VALIDATION");

    app.request("POST", "/api/category", Some(json!({ "CategoryName": " " })))
        .await
        .assert_error(StatusCode::BAD_REQUEST, "VALIDATION");

    app.request(
        "PUT",
        "/api/category",
        Some(json!({ "CategoryName": "Missing id" })),
    )
    .await
    .assert_error(StatusCode::BAD_REQUEST, "VALIDATION");

    app.request("GET", "/api/categoryById/abc", None)
        .await
        .assert_error(StatusCode::BAD_REQUEST, "VALIDATION");
}

#[tokio::test]
async fn test_delete_referenced_category_is_conflict() {
    let app = helpers::TestApp::new().await;
    let id = app.create_category("Frozen").await;
    app.create_product(id, "Ice Cream", 3).await;

    app.request("DELETE", &format!("/api/category/{id}"), None)
        .await
        .assert_error(StatusCode::CONFLICT, "CONFLICT");

    let still_there = app
        .request("GET", &format!("/api/categoryById/{id}"), None)
        .await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let app = helpers::TestApp::new().await;

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["data"]["status"], "ok");
    assert_eq!(health.body["data"]["database"], "connected");

    app.request("GET", "/api/nothing-here", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = helpers::TestApp::new().await;

    let doc = app.request("GET", "/api-docs/openapi.json", None).await;
    assert_eq!(doc.status, StatusCode::OK);
    assert_eq!(doc.body["info"]["title"], "Catalog API");
    assert!(doc.body["paths"].get("/api/category").is_some());
    assert!(doc.body["paths"].get("/api/products/updatestock").is_some());
}
