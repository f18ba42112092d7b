#![allow(dead_code)]

use axum_test::{TestResponse, TestServer};
use std::sync::Arc;
use short_url_service::application::services::UrlMappingService;
use short_url_service::infrastructure::persistence::InMemoryUrlMappingRepository;
use short_url_service::routes::app_router;
use short_url_service::state::AppState;

pub const BASE_SHORT_URL: &str = "https://s.example.com/";
pub const ROOT_REDIRECT_URL: &str = "https://docs.example.com/";

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryUrlMappingRepository::new());
    let mapping_service = Arc::new(UrlMappingService::new(repository, BASE_SHORT_URL));

    AppState::new(mapping_service, ROOT_REDIRECT_URL)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}

pub async fn shorten(server: &TestServer, long_url: &str, short_name: &str) -> TestResponse {
    server
        .post("/shorten")
        .add_query_param("long_url", long_url)
        .add_query_param("short_name", short_name)
        .await
}

pub async fn create_mapping(server: &TestServer, long_url: &str, short_name: &str) {
    shorten(server, long_url, short_name)
        .await
        .assert_status_ok();
}
