//! Products and storage over HTTP.

mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::spawn_app;

#[tokio::test]
async fn products_are_stocked_and_listed() {
    let app = spawn_app().await;

    let resp = app
        .post_json(
            "/products/add/",
            &json!({"handle": "donkey-plush", "weight": 1.2, "price": 9.99}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.text().await.unwrap(), "Success");

    app.post_json(
        "/products/add/",
        &json!({"handle": "empty-box", "weight": 0.1, "price": 1}),
    )
    .await;

    for (location, qty) in [("shelf-a", 3), ("shelf-b", 12)] {
        let resp = app
            .post_json(
                "/storage/donkey-plush/add/",
                &json!({"location": location, "qty": qty}),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let body: Value = app.get("/storage/").await.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            {
                "handle": "donkey-plush",
                "weight": 1.2,
                "price": 9.99,
                "inventory": [["shelf-a", 3], ["shelf-b", 12]],
            },
            {"handle": "empty-box", "weight": 0.1, "price": 1.0, "inventory": []},
        ])
    );
}

#[tokio::test]
async fn duplicate_handle_conflicts() {
    let app = spawn_app().await;
    let product = json!({"handle": "donkey-plush", "weight": 1.2, "price": 9.99});

    assert_eq!(
        app.post_json("/products/add/", &product).await.status(),
        StatusCode::CREATED
    );
    let resp = app.post_json("/products/add/", &product).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Handle already exists");
}

#[tokio::test]
async fn product_fields_are_checked() {
    let app = spawn_app().await;

    let resp = app
        .post_json(
            "/products/add/",
            &json!({"handle": "h", "weight": "heavy", "price": 1.0}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Weight and price must be numbers");

    let resp = app
        .post_json("/products/add/", &json!({"handle": "h", "weight": 1.0}))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .post_raw("/products/add/", "text/plain", "handle=h")
        .await;
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn storage_requires_known_product_and_integer_qty() {
    let app = spawn_app().await;

    let resp = app
        .post_json("/storage/ghost/add/", &json!({"location": "shelf-a", "qty": 1}))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Product not found");

    let resp = app
        .post_raw("/storage/ghost/add/", "text/plain", "qty=1")
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    app.post_json(
        "/products/add/",
        &json!({"handle": "donkey-plush", "weight": 1.2, "price": 9.99}),
    )
    .await;

    let resp = app
        .post_json(
            "/storage/donkey-plush/add/",
            &json!({"location": "shelf-a", "qty": 1.5}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Qty must be an integer");

    let resp = app
        .post_raw("/storage/donkey-plush/add/", "text/plain", "qty=1")
        .await;
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body: Value = app.get("/storage/").await.json().await.unwrap();
    assert_eq!(body[0]["inventory"], json!([]));
}
