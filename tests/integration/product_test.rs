//! Integration tests for product endpoints and stock adjustment.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_product() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Beverages").await;

    let created = app
        .request(
            "POST",
            "/api/product",
            Some(json!({
                "CategoryID": category_id,
                "Name": "Cold Brew",
                "Description": "Slow steeped",
                "Price": 4.75,
                "Quantity": 20,
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["ProductID"].as_i64().expect("id");
    assert_eq!(created.location, Some(format!("/api/productById/{id}")));

    let fetched = app
        .request("GET", &format!("/api/productById/{id}"), None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.body["data"],
        json!({
            "ProductID": id,
            "CategoryID": category_id,
            "Name": "Cold Brew",
            "Description": "Slow steeped",
            "Price": 4.75,
            "Quantity": 20,
        })
    );
}

#[tokio::test]
async fn test_create_without_description_accepts_camel_case() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Beverages").await;

    let created = app
        .request(
            "POST",
            "/api/product",
            Some(json!({
                "categoryID": category_id,
                "name": "Water",
                "price": 1.0,
                "quantity": 5,
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["Description"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_with_unknown_category_is_conflict() {
    let app = helpers::TestApp::new().await;

    app.request(
        "POST",
        "/api/product",
        Some(json!({
            "CategoryID": 77,
            "Name": "Orphan",
            "Price": 1.0,
            "Quantity": 1,
        })),
    )
    .await
    .assert_error(StatusCode::CONFLICT, "CONFLICT");
}

#[tokio::test]
async fn test_list_and_search_products() {
    let app = helpers::TestApp::new().await;
    app.request("GET", "/api/product", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");

    let category_id = app.create_category("Tea").await;
    for name in ["Oolong Tea", "Biscuits", "Green Tea"] {
        app.create_product(category_id, name, 1).await;
    }

    let list = app.request("GET", "/api/product", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["data"].as_array().map(Vec::len), Some(3));

    let teas = app.request("GET", "/api/product/search/tea", None).await;
    assert_eq!(teas.status, StatusCode::OK);
    let names: Vec<&str> = teas.body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|p| p["Name"].as_str())
        .collect();
    assert_eq!(names, ["Green Tea", "Oolong Tea"]);

    app.request("GET", "/api/product/search/coffee", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_update_and_delete_product() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Bakery").await;
    let id = app.create_product(category_id, "Bagel", 6).await;

    let updated = app
        .request(
            "PUT",
            "/api/product",
            Some(json!({
                "ProductID": id,
                "CategoryID": category_id,
                "Name": "Sesame Bagel",
                "Price": 2.25,
                "Quantity": 8,
            })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["message"], "request update successful");
    assert_eq!(updated.body["data"]["Name"], "Sesame Bagel");
    assert_eq!(updated.body["data"]["Description"], serde_json::Value::Null);
    assert_eq!(updated.body["data"]["Quantity"], 8);

    let deleted = app
        .request("DELETE", &format!("/api/product/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "request delete successful");

    app.request("GET", &format!("/api/productById/{id}"), None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
    app.request("DELETE", &format!("/api/product/{id}"), None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_update_unknown_product_is_not_found() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Bakery").await;

    app.request(
        "PUT",
        "/api/product",
        Some(json!({
            "ProductID": 999,
            "CategoryID": category_id,
            "Name": "Ghost",
            "Price": 1.0,
            "Quantity": 1,
        })),
    )
    .await
    .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_update_stock_and_cancel() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Coffee").await;
    let id = app.create_product(category_id, "Espresso Beans", 5).await;

    let taken = app
        .request(
            "PUT",
            "/api/products/updatestock",
            Some(json!({ "ProductID": id, "Quantity": 3 })),
        )
        .await;
    assert_eq!(taken.status, StatusCode::OK);
    assert_eq!(taken.body["message"], "Product stock updated successfully");
    assert_eq!(taken.body["data"]["Quantity"], 2);

    app.request(
        "PUT",
        "/api/products/updatestock",
        Some(json!({ "ProductID": id, "Quantity": 3 })),
    )
    .await
    .assert_error(StatusCode::CONFLICT, "CONFLICT");

    let unchanged = app
        .request("GET", &format!("/api/productById/{id}"), None)
        .await;
    assert_eq!(unchanged.body["data"]["Quantity"], 2);

    let restored = app
        .request(
            "PUT",
            "/api/products/updatestockcancel",
            Some(json!({ "ProductID": id, "Quantity": 3 })),
        )
        .await;
    assert_eq!(restored.status, StatusCode::OK);
    assert_eq!(restored.body["data"]["Quantity"], 5);
}

#[tokio::test]
async fn test_stock_rejects_bad_requests() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Coffee").await;
    let id = app.create_product(category_id, "Filter Papers", 5).await;

    for path in ["/api/products/updatestock", "/api/products/updatestockcancel"] {
        app.request("PUT", path, Some(json!({ "ProductID": id, "Quantity": 0 })))
            .await
            .assert_error(StatusCode::BAD_REQUEST, "VALIDATION");
        app.request("PUT", path, Some(json!({ "ProductID": 4040, "Quantity": 1 })))
            .await
            .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
        app.request("PUT", path, Some(json!({ "ProductID": id })))
            .await
            .assert_error(StatusCode::BAD_REQUEST, "VALIDATION");
    }
}

#[tokio::test]
async fn test_price_round_trips_exactly() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Jewellery").await;

    let body = format!(
        r#"{{"CategoryID": {category_id}, "Name": "Crown", "Price": 1234567890123456.78, "Quantity": 1}}"#
    );
    let created = app.send_raw("POST", "/api/product", body).await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["Price"].to_string(), "1234567890123456.78");

    let id = created.body["ProductID"].as_i64().expect("id");
    let fetched = app
        .request("GET", &format!("/api/productById/{id}"), None)
        .await;
    assert_eq!(
        fetched.body["data"]["Price"].to_string(),
        "1234567890123456.78"
    );
}

#[tokio::test]
async fn test_unstorable_values_are_bad_request() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Bakery").await;

    for (price, quantity) in [("1.005", "1"), ("-2.50", "1"), ("2.50", "-1")] {
        let body = format!(
            r#"{{"CategoryID": {category_id}, "Name": "Scone", "Price": {price}, "Quantity": {quantity}}}"#
        );
        app.send_raw("POST", "/api/product", body)
            .await
            .assert_error(StatusCode::BAD_REQUEST, "VALIDATION");
    }

    app.request("GET", "/api/product", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_cancel_beyond_stock_limit_is_conflict() {
    let app = helpers::TestApp::new().await;
    let category_id = app.create_category("Coffee").await;
    let id = app.create_product(category_id, "Grinder", 5).await;

    app.request(
        "PUT",
        "/api/products/updatestockcancel",
        Some(json!({ "ProductID": id, "Quantity": i32::MAX })),
    )
    .await
    .assert_error(StatusCode::CONFLICT, "CONFLICT");

    let fetched = app
        .request("GET", &format!("/api/productById/{id}"), None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["Quantity"], 5);

    for path in ["/api/product", "/api/detailsProduct/"] {
        let listed = app.request("GET", path, None).await;
        assert_eq!(listed.status, StatusCode::OK, "{path}");
    }
}
