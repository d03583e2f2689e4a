//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: query builder → HTTP request → typed documents

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::cmp::Ordering;
use theoneapi::{ClientConfig, Document, Error, Movie, QueryOptions, SortOrder, TheOneApi};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const API_KEY: &str = "test-key";

// ============================================================================
// Fake catalog
// ============================================================================

/// Serves `/v2/movie` the way The One API does: bearer check, sorting,
/// page or offset windows and the pagination envelope.
struct MovieCatalog {
    movies: Vec<Value>,
}

impl MovieCatalog {
    fn new() -> Self {
        let movies = [
            ("5cd95395de30eff6ebccde56", "The Lord of the Rings Series", 558.0, 281.0, 17),
            ("5cd95395de30eff6ebccde57", "The Hobbit Series", 462.0, 675.0, 1),
            ("5cd95395de30eff6ebccde58", "The Unexpected Journey", 169.0, 200.0, 1),
            ("5cd95395de30eff6ebccde59", "The Desolation of Smaug", 161.0, 217.0, 0),
            ("5cd95395de30eff6ebccde5a", "The Battle of the Five Armies", 144.0, 250.0, 0),
            ("5cd95395de30eff6ebccde5b", "The Two Towers", 179.0, 94.0, 2),
            ("5cd95395de30eff6ebccde5c", "The Fellowship of the Ring", 178.0, 93.0, 4),
            ("5cd95395de30eff6ebccde5d", "The Return of the King", 201.0, 94.0, 11),
        ]
        .into_iter()
        .map(|(id, name, runtime, budget, wins)| {
            json!({
                "_id": id,
                "name": name,
                "runtimeInMinutes": runtime,
                "budgetInMillions": budget,
                "academyAwardWins": wins,
                "__v": 0
            })
        })
        .collect();

        Self { movies }
    }
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.as_str().unwrap_or_default().cmp(b.as_str().unwrap_or_default()),
    }
}

impl Respond for MovieCatalog {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let expected = format!("Bearer {API_KEY}");
        let authorized = request
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some(expected.as_str());
        if !authorized {
            return ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "message": "Unauthorized."}));
        }

        let param = |name: &str| {
            request
                .url
                .query_pairs()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.into_owned())
        };
        let number = |name: &str| param(name).and_then(|v| v.parse::<i64>().ok());

        let mut movies = self.movies.clone();
        if let Some(sort) = param("sort") {
            let (field, direction) = sort.split_once(':').unwrap_or((sort.as_str(), "asc"));
            movies.sort_by(|a, b| compare(&a[field], &b[field]));
            if direction == "desc" {
                movies.reverse();
            }
        }

        let total = movies.len() as i64;
        let limit = number("limit").unwrap_or(1000);

        if let Some(offset) = number("offset") {
            let docs: Vec<Value> = movies
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            return ResponseTemplate::new(200).set_body_json(json!({
                "docs": docs,
                "total": total,
                "limit": limit,
                "offset": offset
            }));
        }

        let page = number("page").unwrap_or(1);
        if page < 1 {
            return ResponseTemplate::new(500)
                .set_body_json(json!({"success": false, "message": "Something went wrong."}));
        }
        let offset = (page - 1) * limit;
        let docs: Vec<Value> = movies
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "docs": docs,
            "total": total,
            "limit": limit,
            "offset": offset,
            "page": page,
            "pages": (total + limit - 1) / limit
        }))
    }
}

async fn catalog_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(MovieCatalog::new())
        .mount(&mock_server)
        .await;
    mock_server
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(API_KEY).with_base_url(format!("{}/v2", server.uri()))
}

fn names(movies: &[Movie]) -> Vec<&str> {
    movies.iter().filter_map(Movie::name).collect()
}

// ============================================================================
// Collection Integration Tests
// ============================================================================

#[tokio::test]
async fn test_movies_sorted_by_name() {
    let server = catalog_server().await;
    let api = TheOneApi::from_config(&config_for(&server)).unwrap();

    let mut movies = api.movies();
    movies.sort("name", SortOrder::Ascending).fetch().await.unwrap();

    assert_eq!(
        names(movies.docs()),
        vec![
            "The Battle of the Five Armies",
            "The Desolation of Smaug",
            "The Fellowship of the Ring",
            "The Hobbit Series",
            "The Lord of the Rings Series",
            "The Return of the King",
            "The Two Towers",
            "The Unexpected Journey",
        ]
    );
    assert_eq!(movies.metadata().total, Some(8));
    assert_eq!(movies.metadata().pages, Some(1));
}

#[tokio::test]
async fn test_limit_and_page_window() {
    let server = catalog_server().await;
    let api = TheOneApi::from_config(&config_for(&server)).unwrap();

    let mut movies = api.movies();
    movies
        .sort("name", SortOrder::Ascending)
        .limit(3)
        .page(2)
        .fetch()
        .await
        .unwrap();

    assert_eq!(
        names(movies.docs()),
        vec![
            "The Hobbit Series",
            "The Lord of the Rings Series",
            "The Return of the King",
        ]
    );
    assert_eq!(movies.metadata().page, Some(2));
    assert_eq!(movies.metadata().pages, Some(3));
    assert_eq!(movies.metadata().is_last_page(), Some(false));
}

#[tokio::test]
async fn test_walk_pages_forward_and_back() {
    let server = catalog_server().await;
    let api = TheOneApi::from_config(&config_for(&server)).unwrap();

    let mut movies = api.movies();
    movies.sort("name", SortOrder::Ascending).limit(3).fetch().await.unwrap();
    assert_eq!(movies.metadata().page, Some(1));

    movies.next_page().await.unwrap();
    movies.next_page().await.unwrap();
    assert_eq!(
        names(movies.docs()),
        vec!["The Two Towers", "The Unexpected Journey"]
    );
    assert_eq!(movies.metadata().is_last_page(), Some(true));

    movies.previous_page().await.unwrap();
    assert_eq!(movies.metadata().page, Some(2));
    assert_eq!(names(movies.docs())[0], "The Hobbit Series");
}

#[tokio::test]
async fn test_previous_page_below_one_is_an_empty_result() {
    let server = catalog_server().await;
    let api = TheOneApi::from_config(&config_for(&server)).unwrap();

    let mut movies = api.movies();
    movies.limit(3).fetch().await.unwrap();
    movies.previous_page().await.unwrap();

    assert!(movies.docs().is_empty());
    assert!(movies.metadata().is_empty());
    assert_eq!(
        movies.last_response().and_then(|r| r.message()),
        Some("Something went wrong.")
    );
}

#[tokio::test]
async fn test_offset_wins_over_page() {
    let server = catalog_server().await;
    let api = TheOneApi::from_config(&config_for(&server)).unwrap();

    let mut movies = api.movies();
    movies
        .sort("academyAwardWins", SortOrder::Descending)
        .limit(4)
        .page(2)
        .offset(2)
        .fetch()
        .await
        .unwrap();

    let wins: Vec<u64> = movies
        .docs()
        .iter()
        .filter_map(Movie::academy_award_wins)
        .collect();
    assert_eq!(wins, vec![4, 2, 1, 1]);
    assert_eq!(movies.metadata().page, None);
    assert_eq!(movies.metadata().offset, Some(2));
}

#[tokio::test]
async fn test_documents_drop_unknown_attributes() {
    let server = catalog_server().await;
    let api = TheOneApi::from_config(&config_for(&server)).unwrap();

    let mut movies = api.movies();
    movies
        .sort("runtimeInMinutes", SortOrder::Descending)
        .limit(1)
        .fetch()
        .await
        .unwrap();

    let movie = &movies.docs()[0];
    assert_eq!(movie.name(), Some("The Lord of the Rings Series"));
    assert_eq!(movie.id(), Some("5cd95395de30eff6ebccde56"));
    assert_eq!(movie.runtime_in_minutes(), Some(558.0));
    assert!(!movie.as_map().contains_key("__v"));
    assert!(matches!(
        movie.get("__v"),
        Err(Error::InvalidAttribute { .. })
    ));
}

#[tokio::test]
async fn test_wrong_api_key_is_an_empty_result() {
    let server = catalog_server().await;
    let config = config_for(&server).with_api_key("wrong");
    let api = TheOneApi::from_config(&config).unwrap();

    let mut movies = api.movies();
    movies.fetch().await.unwrap();

    assert!(movies.docs().is_empty());
    assert!(movies.metadata().is_empty());
    let response = movies.last_response().unwrap();
    assert_eq!(response.status, 401);
    assert_eq!(response.message(), Some("Unauthorized."));
}

#[tokio::test]
async fn test_filter_is_sent_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .and(query_param("budgetInMillions<100", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{"_id": "5cd95395de30eff6ebccde5b", "name": "The Two Towers"}],
            "total": 1, "limit": 1000, "offset": 0, "page": 1, "pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = TheOneApi::from_config(&config_for(&server)).unwrap();
    let mut movies = api.movies();
    movies.less_than("budgetInMillions", 100, false).fetch().await.unwrap();

    assert_eq!(names(movies.docs()), vec!["The Two Towers"]);
}

// ============================================================================
// Single Document and Quote Tests
// ============================================================================

#[tokio::test]
async fn test_movie_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/movie/5cd95395de30eff6ebccde5d"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{
                "_id": "5cd95395de30eff6ebccde5d",
                "name": "The Return of the King",
                "academyAwardNominations": 11,
                "academyAwardWins": 11,
                "rottenTomatoesScore": 95
            }],
            "total": 1, "limit": 1000, "offset": 0, "page": 1, "pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = TheOneApi::from_config(&config_for(&server)).unwrap();
    let mut movies = api.movies();
    movies.by_id("5cd95395de30eff6ebccde5d").await.unwrap();

    let movie = &movies.docs()[0];
    assert_eq!(movie.academy_award_wins(), Some(11));
    assert_eq!(movie.academy_award_nominations(), Some(11));
    assert_eq!(
        movies.options().filter.as_deref(),
        Some("_id=5cd95395de30eff6ebccde5d")
    );
}

#[tokio::test]
async fn test_quotes_of_a_movie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/movie/5cd95395de30eff6ebccde5c/quote"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [
                {
                    "_id": "5cd96e05de30eff6ebcce7e9",
                    "dialog": "Deagol!",
                    "movie": "5cd95395de30eff6ebccde5c",
                    "character": "5cd99d4bde30eff6ebccfe9e",
                    "id": "5cd96e05de30eff6ebcce7e9"
                },
                {
                    "_id": "5cd96e05de30eff6ebcce7ea",
                    "dialog": "Deagol!",
                    "movie": "5cd95395de30eff6ebccde5c",
                    "character": "5cd99d4bde30eff6ebccfe9e",
                    "id": "5cd96e05de30eff6ebcce7ea"
                }
            ],
            "total": 872, "limit": 2, "offset": 0, "page": 1, "pages": 436
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = TheOneApi::from_config(&config_for(&server)).unwrap();
    let mut quotes = api.movie_quotes("5cd95395de30eff6ebccde5c");
    quotes.limit(2).fetch().await.unwrap();

    assert_eq!(quotes.docs().len(), 2);
    assert_eq!(quotes.docs()[0].dialog(), Some("Deagol!"));
    assert_eq!(quotes.docs()[1].id(), Some("5cd96e05de30eff6ebcce7ea"));
    assert_eq!(quotes.metadata().pages, Some(436));
}

#[tokio::test]
async fn test_quotes_for_movie_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/quote"))
        .and(query_param("movie", "5cd95395de30eff6ebccde5b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{
                "_id": "5cd96e05de30eff6ebcce8a1",
                "dialog": "Sam!",
                "movie": "5cd95395de30eff6ebccde5b",
                "character": "5cd99d4bde30eff6ebccfc15"
            }],
            "total": 1, "limit": 1000, "offset": 0, "page": 1, "pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = TheOneApi::from_config(&config_for(&server)).unwrap();
    let movie = Movie::from_record(&json!({"_id": "5cd95395de30eff6ebccde5b"}));
    let mut quotes = api.quotes_for(&movie);
    quotes.fetch().await.unwrap();

    assert_eq!(quotes.docs()[0].movie(), movie.id());
}

// ============================================================================
// Raw Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_raw_get_movies() {
    let server = catalog_server().await;
    let api = TheOneApi::from_config(&config_for(&server)).unwrap();

    let body = api
        .get_movies(&QueryOptions::new().sort("name").limit(2))
        .await
        .unwrap();

    assert_eq!(body["docs"][0]["name"], "The Battle of the Five Armies");
    assert_eq!(body["docs"][0]["__v"], 0);
    assert_eq!(body["pages"], 4);
}

#[tokio::test]
async fn test_raw_get_quote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/quote/5cd96e05de30eff6ebcce7e9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{"_id": "5cd96e05de30eff6ebcce7e9", "dialog": "Deagol!"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = TheOneApi::from_config(&config_for(&server)).unwrap();
    let body = api.get_quote("5cd96e05de30eff6ebcce7e9").await.unwrap();
    assert_eq!(body["docs"][0]["dialog"], "Deagol!");
}

// ============================================================================
// Transport Error Tests
// ============================================================================

#[tokio::test]
async fn test_non_json_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let api = TheOneApi::from_config(&config_for(&server)).unwrap();
    let mut movies = api.movies();
    let err = movies.fetch().await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(movies.last_response().is_none());
}

#[tokio::test]
async fn test_rate_limited_client_sends_all_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"docs": []})))
        .expect(5)
        .mount(&server)
        .await;

    // Default quota allows a burst well above five requests
    let api = TheOneApi::from_config(&config_for(&server)).unwrap();
    let mut movies = api.movies();
    for _ in 0..5 {
        movies.fetch().await.unwrap();
    }
}
