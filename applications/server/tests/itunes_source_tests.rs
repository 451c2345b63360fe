/// iTunes source tests against a mock iTunes Search API
use serde_json::json;
use soft_server::{
    config::{ItunesSettings, ServerConfig},
    ItunesSource, ServerError, TrackSource,
};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ItunesSettings {
    ItunesSettings {
        base_url: server.uri(),
        retry_delay_ms: 10,
        requests_per_sec: 1000,
        ..ServerConfig::default().itunes
    }
}

fn result(name: &str, preview: Option<&str>) -> serde_json::Value {
    result_by(name, "Oh Wonder", preview)
}

fn result_by(name: &str, artist: &str, preview: Option<&str>) -> serde_json::Value {
    json!({
        "trackName": name,
        "artistName": artist,
        "artworkUrl100": format!("https://img.example.com/{name}/100x100bb.jpg"),
        "previewUrl": preview,
        "trackTimeMillis": 193_400,
        "trackViewUrl": format!("https://music.example.com/{name}")
    })
}

#[tokio::test]
async fn test_sends_itunes_search_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("term", "oh wonder"))
        .and(query_param("media", "music"))
        .and(query_param("entity", "musicTrack"))
        .and(query_param("country", "US"))
        .and(query_param("lang", "en_us"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultCount": 1,
            "results": [result("Lose It", Some("https://audio.example.com/lose-it.m4a"))]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = ItunesSource::new(&settings(&server)).unwrap();
    let tracks = source.search("oh wonder", 10).await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Lose It");
    assert_eq!(tracks[0].duration_sec, Some(193));
    assert_eq!(
        tracks[0].cover_url,
        "https://img.example.com/Lose It/600x600bb.jpg"
    );
}

#[tokio::test]
async fn test_preview_preference_keeps_relevance_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                result("No Preview", None),
                result("First Preview", Some("https://audio.example.com/1.m4a")),
                result("Second Preview", Some("https://audio.example.com/2.m4a"))
            ]
        })))
        .mount(&server)
        .await;

    let source = ItunesSource::new(&settings(&server)).unwrap();
    let tracks = source.search("preview", 10).await.unwrap();

    let titles: Vec<_> = tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["No Preview", "First Preview", "Second Preview"]);
}

#[tokio::test]
async fn test_preview_preference_picks_among_same_track() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                result_by("Drive", "Oh Wonder", None),
                result_by("Drive", "Halsey", Some("https://audio.example.com/halsey.m4a")),
                result_by("Drive", "Oh Wonder", Some("https://audio.example.com/ow.m4a"))
            ]
        })))
        .mount(&server)
        .await;

    let source = ItunesSource::new(&settings(&server)).unwrap();
    let tracks = source.search("drive", 10).await.unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].artist, "Oh Wonder");
    assert_eq!(
        tracks[0].preview_url.as_deref(),
        Some("https://audio.example.com/ow.m4a")
    );
    assert_eq!(tracks[1].artist, "Halsey");
}

#[tokio::test]
async fn test_relevance_order_kept_without_preview_preference() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                result("No Preview", None),
                result("With Preview", Some("https://audio.example.com/1.m4a"))
            ]
        })))
        .mount(&server)
        .await;

    let source = ItunesSource::new(&ItunesSettings {
        prefer_preview: false,
        ..settings(&server)
    })
    .unwrap();
    let tracks = source.search("preview", 10).await.unwrap();

    assert_eq!(tracks[0].title, "No Preview");
    assert_eq!(tracks.len(), 2);
}

#[tokio::test]
async fn test_empty_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultCount": 0,
            "results": []
        })))
        .mount(&server)
        .await;

    let source = ItunesSource::new(&settings(&server)).unwrap();
    assert!(source.search("nothing", 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let source = ItunesSource::new(&settings(&server)).unwrap();
    let result = source.search("blocked", 10).await;

    match result {
        Err(ServerError::Source(msg)) => assert!(msg.contains("403")),
        other => panic!("Expected Source error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let source = ItunesSource::new(&settings(&server)).unwrap();
    assert!(matches!(
        source.search("busy", 10).await,
        Err(ServerError::Source(_))
    ));
}

#[tokio::test]
async fn test_transient_failures_are_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [result("Lose It", Some("https://audio.example.com/lose-it.m4a"))]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = ItunesSource::new(&settings(&server)).unwrap();
    let tracks = source.search("lose it", 10).await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Lose It");
}

#[tokio::test]
async fn test_gives_up_after_configured_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let source = ItunesSource::new(&settings(&server)).unwrap();

    match source.search("busy", 10).await {
        Err(ServerError::Source(msg)) => assert!(msg.contains("429")),
        other => panic!("Expected Source error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_requests_are_throttled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(3)
        .mount(&server)
        .await;

    let source = ItunesSource::new(&ItunesSettings {
        requests_per_sec: 5,
        ..settings(&server)
    })
    .unwrap();

    let start = Instant::now();
    for term in ["one", "two", "three"] {
        source.search(term, 10).await.unwrap();
    }

    // First request goes out at once, the next two wait 200ms each
    assert!(start.elapsed() >= Duration::from_millis(400));
}
