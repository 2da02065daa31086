mod common;

use serde_json::json;

#[tokio::test]
async fn test_index_renders_form_and_recent_links() {
    let db = common::TestDb::new().await;
    let server = common::create_test_server(common::create_test_state(db.service()));

    let empty = server.get("/").await;
    empty.assert_status_ok();
    assert!(empty.text().contains("id=\"urlForm\""));
    assert!(empty.text().contains("No URLs shortened yet"));

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/listed" }))
        .await;

    let page = server.get("/").await.text();
    assert!(page.contains("https://example.com/listed"));
    assert!(page.contains(common::PUBLIC_BASE_URL));
}

#[tokio::test]
async fn test_index_escapes_stored_urls() {
    let db = common::TestDb::new().await;
    let server = common::create_test_server(common::create_test_state(db.service()));

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/?q=<script>" }))
        .await;

    let page = server.get("/").await.text();
    assert!(!page.contains("<script>"));
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let db = common::TestDb::new().await;
    let server = common::create_test_server(common::create_test_state(db.service()));

    let response = server.get("/no/such/page").await;

    response.assert_status_not_found();
    assert!(response.text().contains("404"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let db = common::TestDb::new().await;
    let server = common::create_test_server(common::create_test_state(db.service()));

    let response = server.get("/static/js/app.js").await;

    response.assert_status_ok();
    assert!(response.text().contains("/api/shorten"));
}
