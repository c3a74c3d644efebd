//! Tests for the hero API client

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::HeroApi;
use crate::error::HeroError;

fn page_body(page: u32, ids: &[u32]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| serde_json::json!({"id": id, "name": format!("Hero {}", id)}))
        .collect();
    serde_json::json!({
        "length": 731,
        "size": ids.len(),
        "page": page,
        "firstPage": 1,
        "lastPage": 74,
        "startIndex": (page - 1) * ids.len() as u32,
        "endIndex": page * ids.len() as u32 - 1,
        "items": items
    })
}

#[tokio::test]
async fn fetch_heroes_sends_pagination_params() {
    let mock_server = MockServer::start().await;
    let api = HeroApi::new(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/heroes"))
        .and(query_param("page", "2"))
        .and(query_param("size", "10"))
        .and(header("User-Agent", "Herodex/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(2, &[11, 12])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = api.fetch_heroes(2, 10).await.unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, 11);
}

#[tokio::test]
async fn fetch_hero_sends_id_param() {
    let mock_server = MockServer::start().await;
    let api = HeroApi::new(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/hero"))
        .and(query_param("id", "70"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": 70, "name": "Batman"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let hero = api.fetch_hero(70).await.unwrap();
    assert_eq!(hero.id, 70);
    assert_eq!(hero.name, "Batman");
}

#[tokio::test]
async fn fetch_hero_maps_error_status() {
    let mock_server = MockServer::start().await;
    let api = HeroApi::new(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/hero"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = api.fetch_hero(1).await.unwrap_err();
    assert_eq!(
        err,
        HeroError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    );
}

#[tokio::test]
async fn fetch_hero_maps_malformed_body() {
    let mock_server = MockServer::start().await;
    let api = HeroApi::new(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/hero"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = api.fetch_hero(1).await.unwrap_err();
    assert!(matches!(err, HeroError::Decode(_)), "got: {:?}", err);
}
