//! End-to-end browse flow against a mock API: load a page, let the
//! prefetch warm the detail cache, then open details instantly.

use std::time::Duration;

use herodex::{format_hero_detail, format_hero_page, HeroApi, HeroService};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hero_body(id: u32, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "powerstats": {"intelligence": 94, "strength": 100, "speed": 83,
                       "durability": 100, "power": 100, "combat": 95},
        "biography": {"fullName": name, "publisher": "Marvel Comics", "aliases": []},
        "images": {"md": format!("https://cdn.example.com/md/{}.jpg", id)}
    })
}

#[tokio::test]
async fn browse_list_then_open_prefetched_detail() {
    let mock_server = MockServer::start().await;

    let names = ["A-Bomb", "Abe Sapien", "Abin Sur", "Abomination", "Abraxas"];
    let items: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| hero_body(i as u32 + 1, name))
        .collect();

    Mock::given(method("GET"))
        .and(path("/heroes"))
        .and(query_param("page", "1"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "length": 731, "size": 5, "page": 1,
            "firstPage": 1, "lastPage": 147,
            "startIndex": 0, "endIndex": 4,
            "items": items
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The prefetch pass may only ever ask for the first three heroes
    for (id, name) in [(1, "A-Bomb"), (2, "Abe Sapien"), (3, "Abin Sur")] {
        Mock::given(method("GET"))
            .and(path("/hero"))
            .and(query_param("id", id.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(hero_body(id, name)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let service = HeroService::new(HeroApi::new(mock_server.uri()));

    let page = service.fetch_heroes(1, 5).await.unwrap();
    let listing = format_hero_page(&page);
    assert!(listing.contains("A-Bomb"));
    assert!(listing.contains("Page 1 of 147"));

    // Wait for the background prefetch to settle
    let mut prefetched = false;
    for _ in 0..100 {
        if (1..=3).all(|id| service.hero_from_cache(id).is_some()) {
            prefetched = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(prefetched, "prefetch never filled the detail cache");

    // Opening a prefetched hero needs no further request (the detail
    // mocks above expect exactly one call each)
    let hero = service.hero_from_cache(2).expect("hero 2 should be cached");
    let detail = format_hero_detail(&hero);
    assert!(detail.contains("Abe Sapien (#2)"));
    assert!(detail.contains("Strength      100  Legendary"));

    // Heroes beyond the prefetch window were not fetched
    assert!(service.hero_from_cache(4).is_none());
    assert!(service.hero_from_cache(5).is_none());

    // A second visit to the same page is a pure cache hit
    let revisit = service.fetch_heroes(1, 5).await.unwrap();
    assert_eq!(revisit, page);
}
