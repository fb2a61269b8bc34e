//! Calculator, greeting, book list and health endpoints.

mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::spawn_app;

#[tokio::test]
async fn index_lists_available_routes() {
    let app = spawn_app().await;

    let resp = app.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let text = resp.text().await.unwrap();
    assert!(text.contains("/add/{a}/{b}"));
    assert!(text.contains("/api/sensors/"));
}

#[tokio::test]
async fn arithmetic_routes_answer_in_plain_text() {
    let app = spawn_app().await;

    let cases = [
        ("/add/1.5/2", "Addition result: 3.5"),
        ("/add/1.0/2.0", "Addition result: 3.0"),
        ("/sub/1/3", "Subtraction result: -2.0"),
        ("/sub/5.0/5.0", "Subtraction result: 0.0"),
        ("/mul/2.5/4", "Multiplication result: 10.0"),
        ("/div/4.0/2.0", "Division result: 2.0"),
        ("/div/1/4", "Division result: 0.25"),
        ("/div/1/0", "Division result: NaN (division by 0)"),
    ];
    for (path, expected) in cases {
        let resp = app.get(path).await;
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
        assert_eq!(resp.text().await.unwrap(), expected, "{path}");
    }

    assert_eq!(app.get("/add/x/1").await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn trig_checks_its_query() {
    let app = spawn_app().await;

    let resp = app.get("/trig/sin/?angle=90&unit=degree").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "Sine result: 1.000");

    let resp = app.get("/trig/cos/?angle=0").await;
    assert_eq!(resp.text().await.unwrap(), "Cosine result: 1.000");

    assert_eq!(
        app.get("/trig/sin/?angle=abc").await.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.get("/trig/sin/?angle=1&unit=gradian").await.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.get("/trig/sec/?angle=1").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn greeting_by_path_and_query() {
    let app = spawn_app().await;

    assert_eq!(app.get("/hello/alice/").await.text().await.unwrap(), "Hello alice");
    assert_eq!(
        app.get("/hello/?name=bob").await.text().await.unwrap(),
        "Hello bob"
    );

    let resp = app.get("/hello/").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing parameter: name");
}

#[tokio::test]
async fn book_list_grows_with_sequential_ids() {
    let app = spawn_app().await;

    let resp = app.get("/books").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Nothing found");

    let resp = app
        .client
        .post(app.url("/books"))
        .form(&[("author", "Tove Jansson"), ("language", "Swedish"), ("title", "Trollvinter")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .client
        .post(app.url("/books"))
        .form(&[("author", "Aleksis Kivi"), ("language", "Finnish"), ("title", "Seitsemän veljestä")])
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[1]["id"], 2);

    let body: Value = app.get("/books/1").await.json().await.unwrap();
    assert_eq!(
        body,
        json!({"id": 1, "author": "Tove Jansson", "language": "Swedish", "title": "Trollvinter"})
    );

    assert_eq!(app.delete("/books/1").await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.get("/books/1").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/books/1").await.status(), StatusCode::NOT_FOUND);

    let body: Value = app.get("/books").await.json().await.unwrap();
    assert_eq!(body[0]["id"], 2);
}

#[tokio::test]
async fn book_form_requires_every_field() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/books"))
        .form(&[("author", "Tove Jansson"), ("language", "Swedish")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing parameter: title");
}

#[tokio::test]
async fn health_check_reports_database() {
    let app = spawn_app().await;

    let resp = app.get("/healthz").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn responses_pass_through_cors_and_compression_layers() {
    let app = spawn_app().await;

    let resp = app
        .client
        .get(app.url("/"))
        .header("origin", "https://example.org")
        .header("accept-encoding", "gzip")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        resp.headers()
            .get("content-encoding")
            .and_then(|v| v.to_str().ok()),
        Some("gzip")
    );
}
