//! Integration tests for the product detail (product + category) endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_details_join_category_name() {
    let app = helpers::TestApp::new().await;
    let drinks = app.create_category("Drinks").await;
    let snacks = app.create_category("Snacks").await;
    let juice = app.create_product(drinks, "Juice", 4).await;
    app.create_product(snacks, "Crackers", 9).await;

    let details = app.request("GET", "/api/detailsProduct/", None).await;
    assert_eq!(details.status, StatusCode::OK);
    let data = details.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["Name"], "Crackers");
    assert_eq!(data[0]["CategoryName"], "Snacks");
    assert_eq!(
        data[1],
        json!({
            "CategoryID": drinks,
            "ProductID": juice,
            "Name": "Juice",
            "Description": "Juice description",
            "Price": 9.5,
            "Quantity": 4,
            "CategoryName": "Drinks",
        })
    );

    let without_slash = app.request("GET", "/api/detailsProduct", None).await;
    assert_eq!(without_slash.status, StatusCode::OK);
    assert_eq!(without_slash.body["data"], details.body["data"]);
}

#[tokio::test]
async fn test_detail_search() {
    let app = helpers::TestApp::new().await;
    let drinks = app.create_category("Drinks").await;
    app.create_product(drinks, "Apple Juice", 2).await;
    app.create_product(drinks, "Sparkling Water", 2).await;

    let hits = app
        .request("GET", "/api/detailsProduct/search/juice", None)
        .await;
    assert_eq!(hits.status, StatusCode::OK);
    let data = hits.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["Name"], "Apple Juice");
    assert_eq!(data[0]["CategoryName"], "Drinks");

    app.request("GET", "/api/detailsProduct/search/milk", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_empty_details_are_not_found() {
    let app = helpers::TestApp::new().await;
    app.request("GET", "/api/detailsProduct/", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_orphaned_product_is_omitted() {
    let app = helpers::TestApp::new().await;
    let drinks = app.create_category("Drinks").await;
    app.create_product(drinks, "Lemonade", 1).await;

    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&app.db_pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO products (category_id, name, price_cents, quantity) VALUES (500, 'Lost Soda', 100, 1)",
    )
    .execute(&app.db_pool)
    .await
    .unwrap();
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&app.db_pool)
        .await
        .unwrap();

    let products = app.request("GET", "/api/product", None).await;
    assert_eq!(products.body["data"].as_array().map(Vec::len), Some(2));

    let details = app.request("GET", "/api/detailsProduct/", None).await;
    assert_eq!(details.status, StatusCode::OK);
    let data = details.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["Name"], "Lemonade");

    app.request("GET", "/api/detailsProduct/search/Soda", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_blocked_category_delete_keeps_details() {
    let app = helpers::TestApp::new().await;
    let drinks = app.create_category("Drinks").await;
    app.create_product(drinks, "Cola", 3).await;

    app.request("DELETE", &format!("/api/category/{drinks}"), None)
        .await
        .assert_error(StatusCode::CONFLICT, "CONFLICT");

    let details = app.request("GET", "/api/detailsProduct/", None).await;
    assert_eq!(details.status, StatusCode::OK);
    assert_eq!(details.body["data"][0]["CategoryName"], "Drinks");
}
