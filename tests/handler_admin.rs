mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_edit_by_short_name() {
    let server = common::create_test_server();
    common::create_mapping(&server, "https://old.com", "abc").await;

    let response = server
        .patch("/admin/edit-url")
        .add_query_param("short_name", "abc")
        .add_query_param("long_url", "https://new.com")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "https://s.example.com/abc");
    assert_eq!(json["long_url"], "https://new.com");

    let redirect = server.get("/abc").await;
    assert_eq!(redirect.header("location"), "https://new.com");
}

#[tokio::test]
async fn test_edit_by_short_url_with_json_body() {
    let server = common::create_test_server();
    common::create_mapping(&server, "https://old.com", "abc").await;

    let response = server
        .patch("/admin/edit-url")
        .json(&json!({
            "short_url": "https://s.example.com/abc",
            "long_url": "https://new.com"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(server.get("/abc").await.header("location"), "https://new.com");
}

#[tokio::test]
async fn test_edit_not_found() {
    let server = common::create_test_server();

    let response = server
        .patch("/admin/edit-url")
        .add_query_param("short_name", "missing")
        .add_query_param("long_url", "https://new.com")
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}

#[tokio::test]
async fn test_edit_same_value_is_update_failure() {
    let server = common::create_test_server();
    common::create_mapping(&server, "https://same.com", "abc").await;

    let response = server
        .patch("/admin/edit-url")
        .add_query_param("short_name", "abc")
        .add_query_param("long_url", "https://same.com")
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "update_failed"
    );
}

#[tokio::test]
async fn test_edit_missing_fields() {
    let server = common::create_test_server();

    let response = server
        .patch("/admin/edit-url")
        .add_query_param("short_name", "abc")
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "missing_long_url"
    );

    let response = server
        .patch("/admin/edit-url")
        .add_query_param("long_url", "https://new.com")
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "missing_identifier"
    );
}

#[tokio::test]
async fn test_edit_wrong_prefix() {
    let server = common::create_test_server();
    common::create_mapping(&server, "https://old.com", "abc").await;

    let response = server
        .patch("/admin/edit-url")
        .add_query_param("short_url", "https://other.example.com/abc")
        .add_query_param("long_url", "https://new.com")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_short_url_prefix");
    assert_eq!(
        json["error"]["message"],
        "Short URL must start with https://s.example.com/"
    );
}

#[tokio::test]
async fn test_delete_by_short_name() {
    let server = common::create_test_server();
    common::create_mapping(&server, "https://example.com", "abc").await;

    let response = server
        .delete("/admin/delete-url")
        .add_query_param("short_name", "abc")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Short URL deleted successfully"
    );

    server.get("/abc").await.assert_status_not_found();

    let again = server
        .delete("/admin/delete-url")
        .add_query_param("short_name", "abc")
        .await;
    again.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_by_id() {
    let server = common::create_test_server();
    common::create_mapping(&server, "https://example.com", "abc").await;

    let list = server.get("/admin/get_urls").await.json::<serde_json::Value>();
    let id = list["urls"][0]["id"].as_i64().unwrap();

    server
        .delete("/admin/delete-url")
        .add_query_param("id", id.to_string())
        .await
        .assert_status_ok();

    server.get("/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_id_takes_precedence_over_short_name() {
    let server = common::create_test_server();
    common::create_mapping(&server, "https://one.com", "one").await;
    common::create_mapping(&server, "https://two.com", "two").await;

    let list = server.get("/admin/get_urls").await.json::<serde_json::Value>();
    let id_of_one = list["urls"][0]["id"].as_i64().unwrap();

    server
        .delete("/admin/delete-url")
        .add_query_param("id", id_of_one.to_string())
        .add_query_param("short_name", "two")
        .await
        .assert_status_ok();

    server.get("/one").await.assert_status_not_found();
    assert_eq!(server.get("/two").await.status_code(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_delete_by_short_url() {
    let server = common::create_test_server();
    common::create_mapping(&server, "https://example.com", "abc").await;

    server
        .delete("/admin/delete-url")
        .add_query_param("short_url", "https://s.example.com/abc")
        .await
        .assert_status_ok();

    server.get("/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_errors() {
    let server = common::create_test_server();

    let response = server.delete("/admin/delete-url").await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "missing_identifier"
    );

    let response = server
        .delete("/admin/delete-url")
        .add_query_param("short_url", "abc")
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_short_url_prefix"
    );

    let response = server
        .delete("/admin/delete-url")
        .add_query_param("id", "not-a-number")
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_list_urls() {
    let server = common::create_test_server();

    let empty = server.get("/admin/get_urls").await;
    empty.assert_status_ok();
    assert_eq!(empty.json::<serde_json::Value>(), json!({ "urls": [] }));

    let created = [
        ("first", "https://one.com"),
        ("second", "https://two.com"),
        ("third", "https://three.com"),
    ];
    for (name, url) in created {
        common::create_mapping(&server, url, name).await;
    }

    let response = server.get("/admin/get_urls").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let urls = json["urls"].as_array().unwrap();
    assert_eq!(urls.len(), created.len());

    for (item, (name, url)) in urls.iter().zip(created) {
        assert!(item["id"].is_i64());
        assert_eq!(item["short_url"], format!("{}{}", common::BASE_SHORT_URL, name));
        assert_eq!(item["long_url"], url);
    }
}

#[tokio::test]
async fn test_health() {
    let server = common::create_test_server();

    let response = server.get("/admin/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
}
