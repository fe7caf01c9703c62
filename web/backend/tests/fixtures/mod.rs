#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use serde::de::DeserializeOwned;
use songwalk_core::RecommendationConfig;
use songwalk_web::create_router;
use songwalk_web::state::AppState;
use std::io::Write;
use tempfile::NamedTempFile;
use tower::util::ServiceExt;

pub const SONG_TABLE: &str = r#"source,target,value,s_artist,t_artist,s_tags,t_tags,s_attribute,t_attribute
Numb,In the End,0.9,Linkin Park,Linkin Park,"[['nu metal', 100]]","[['nu metal', 100]]",song,song
Numb,Scream,0.7,Linkin Park,Avenged Sevenfold,"[['nu metal', 100]]","[['metal', 100]]",song,song
In the End,Faint,0.8,Linkin Park,Linkin Park,"[['nu metal', 100]]","[['nu metal', 90]]",song,song
Faint,Numb,0.6,Linkin Park,Linkin Park,"[['nu metal', 90]]","[['nu metal', 100]]",song,song
Scream,Numb,0.5,Avenged Sevenfold,Linkin Park,"[['metal', 100]]","[['nu metal', 100]]",song,song
Linkin Park artist,Numb,1.0,,Linkin Park,[],"[['nu metal', 100]]",artist,song
Only Target Source,Lonely Target,1.0,Someone,Someone,[],[],song,song
"#;

/// Keeps the temp table alive for as long as the router is used.
pub struct TestApp {
    pub router: Router,
    pub table: NamedTempFile,
}

pub fn write_table(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn create_test_app(content: &str) -> TestApp {
    let table = write_table(content);
    let state = AppState::new(table.path(), RecommendationConfig::default()).with_seed(7);

    TestApp {
        router: create_router(state),
        table,
    }
}

pub fn create_song_app() -> TestApp {
    create_test_app(SONG_TABLE)
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn error_kind(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get("x-error-kind")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
