//! End-to-end tests of the HTTP surface over a seeded in-memory store.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use starwars_api::routes::ROUTES;
use starwars_api::{app, AppState, Character, FavoriteKind, MemoryStore, Planet, User, Vehicle};
use tower::ServiceExt;

struct TestApp {
    store: MemoryStore,
    state: AppState,
}

impl TestApp {
    fn empty() -> Self {
        let store = MemoryStore::new();
        let state = AppState::new(store.clone());
        TestApp { store, state }
    }

    fn seeded() -> Self {
        let t = Self::empty();
        t.store
            .insert_user(User {
                id: 1,
                email: "luke@rebellion.org".into(),
                password: "x-wing".into(),
                is_active: true,
            })
            .unwrap();
        for (id, name) in [(1, "Luke Skywalker"), (5, "Leia Organa")] {
            t.store
                .insert_character(Character {
                    id,
                    name: name.into(),
                    gender: None,
                    birth_year: None,
                    height: None,
                    eye_color: None,
                    hair_color: None,
                })
                .unwrap();
        }
        t.store
            .insert_planet(Planet {
                id: 2,
                name: "Alderaan".into(),
                climate: Some("temperate".into()),
                terrain: Some("grasslands, mountains".into()),
                population: Some("2000000000".into()),
                diameter: Some("12500".into()),
            })
            .unwrap();
        t.store
            .insert_vehicle(Vehicle {
                id: 4,
                name: "Sand Crawler".into(),
                model: Some("Digger Crawler".into()),
                manufacturer: Some("Corellia Mining Corporation".into()),
                vehicle_class: Some("wheeled".into()),
                passengers: Some("30".into()),
            })
            .unwrap();
        t
    }

    async fn call(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        let response = app(self.state.clone()).oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri).await
    }

    async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::POST, uri).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri).await
    }
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn empty_collections_are_404() {
    let t = TestApp::empty();
    for (uri, message) in [
        ("/people", "Characters not found"),
        ("/planets", "Planets not found"),
        ("/vehicles", "Vehicles not found"),
        ("/users", "Users not found"),
    ] {
        let (status, body) = t.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": message }));
    }
}

#[tokio::test]
async fn collections_list_rows_in_id_order() {
    let t = TestApp::seeded();
    let (status, body) = t.get("/people").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 5]);

    let (status, body) = t.get("/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "email": "luke@rebellion.org", "is_active": true }]));
}

#[tokio::test]
async fn lookup_by_missing_id_is_404() {
    let t = TestApp::seeded();
    for (uri, message) in [
        ("/people/99", "Character not found"),
        ("/planets/99", "Planet not found"),
        ("/vehicles/99", "Vehicle not found"),
        ("/users/99/favorites", "User not found"),
    ] {
        let (status, body) = t.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], message);
    }
}

#[tokio::test]
async fn lookup_by_id_returns_the_row() {
    let t = TestApp::seeded();
    let (status, body) = t.get("/planets/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alderaan");
    assert_eq!(body["climate"], "temperate");

    let (status, body) = t.get("/vehicles/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["manufacturer"], "Corellia Mining Corporation");
}

#[tokio::test]
async fn non_integer_ids_do_not_match() {
    let t = TestApp::seeded();
    let (status, body) = t.get("/people/luke").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Resource not found");

    let (status, _) = t.post("/favorite/user/one/people/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trailing_slash_is_ignored() {
    let t = TestApp::seeded();
    let (status, body) = t.get("/people/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 5]);
}

#[tokio::test]
async fn favorite_character_lifecycle() {
    let t = TestApp::seeded();

    let (status, body) = t.post("/favorite/user/1/people/5").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!("Favorite character added successfully"));

    let (status, body) = t.get("/users/1/favorites").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["favorite_characters"]), vec![5]);
    assert_eq!(body["favorite_characters"][0]["name"], "Leia Organa");

    let (status, body) = t.delete("/favorite/user/1/people/5").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!("Favorite character removed successfully"));

    let (_, body) = t.get("/users/1/favorites").await;
    assert!(ids(&body["favorite_characters"]).is_empty());

    let (status, body) = t.delete("/favorite/user/1/people/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Favorite not found");
}

#[tokio::test]
async fn duplicate_add_conflicts_and_keeps_one_row() {
    let t = TestApp::seeded();
    let (status, _) = t.post("/favorite/user/1/planets/2").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = t.post("/favorite/user/1/planets/2").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "error": "Favorite already exists" }));
    assert_eq!(t.store.favorite_count(FavoriteKind::Planet, 1, 2).unwrap(), 1);

    let (_, body) = t.get("/users/1/favorites").await;
    assert_eq!(ids(&body["favorite_planets"]), vec![2]);
}

#[tokio::test]
async fn user_error_takes_precedence_over_entity_error() {
    let t = TestApp::seeded();
    for method in [Method::POST, Method::DELETE] {
        for uri in [
            "/favorite/user/99/people/99",
            "/favorite/user/99/planets/99",
            "/favorite/user/99/vehicles/99",
        ] {
            let (status, body) = t.call(method.clone(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
            assert_eq!(body["error"], "User not found", "{method} {uri}");
        }
    }
}

#[tokio::test]
async fn entity_error_takes_precedence_over_favorite_error() {
    let t = TestApp::seeded();
    let (status, body) = t.delete("/favorite/user/1/planets/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Planet not found");

    let (status, body) = t.post("/favorite/user/1/vehicles/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Vehicle not found");
}

#[tokio::test]
async fn vehicle_removal_uses_the_vehicles_segment() {
    let t = TestApp::seeded();
    let (status, body) = t.post("/favorite/user/1/vehicles/4").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!("Favorite vehicle added successfully"));

    // The planets segment addresses planets only; vehicle 4 is not a planet.
    let (status, body) = t.delete("/favorite/user/1/planets/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Planet not found");

    let (status, _) = t.delete("/favorite/user/1/vehicles/4").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(t.store.favorite_count(FavoriteKind::Vehicle, 1, 4).unwrap(), 0);
}

#[tokio::test]
async fn root_lists_routes() {
    let t = TestApp::empty();
    let (status, body) = t.get("/").await;
    assert_eq!(status, StatusCode::OK);
    let routes = body["routes"].as_array().unwrap();
    assert!(routes.contains(&json!({ "method": "GET", "path": "/people" })));
    assert!(routes.contains(&json!({
        "method": "DELETE",
        "path": "/favorite/user/{user_id}/vehicles/{vehicle_id}"
    })));
}

#[tokio::test]
async fn every_listed_route_is_registered() {
    let t = TestApp::empty();
    for (method, path) in ROUTES {
        let uri: String = path
            .split('/')
            .map(|seg| if seg.starts_with('{') { "1" } else { seg })
            .collect::<Vec<_>>()
            .join("/");
        let method = Method::from_bytes(method.as_bytes()).unwrap();
        let (status, body) = t.call(method.clone(), &uri).await;
        assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_ne!(body["error"], "Resource not found", "{method} {uri}");
    }
}

#[tokio::test]
async fn operational_routes() {
    let t = TestApp::empty();
    let (status, body) = t.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = t.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (status, body) = t.get("/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "starwars-api");

    let (status, body) = t.get("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/{id}/favorites"].is_object());
}

#[tokio::test]
async fn unknown_routes_are_json_404() {
    let t = TestApp::empty();
    let (status, body) = t.get("/starships").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Resource not found" }));
}
