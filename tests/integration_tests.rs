//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → extension → HTTP requests →
//! feeds, pages and cursors.

use dab_feed::extension::{
    LibraryFeedClient, LoginClient, SearchFeedClient, ShareClient, ALBUMS_SHELF, TRACKS_SHELF,
};
use dab_feed::pagination::{decode_cursor, encode_cursor, PaginationDescriptor};
use dab_feed::{DabConfig, DabExtension, Error, MediaItem};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::io::Write;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn extension_for(server: &MockServer) -> DabExtension {
    DabExtension::new(DabConfig {
        base_url: format!("{}/api/", server.uri()),
        ..Default::default()
    })
    .unwrap()
}

fn track(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Track {id}"),
        "artist": "Daft Punk",
        "artistId": 36819,
        "albumId": "0724384960650",
        "albumTitle": "Discovery",
        "duration": 240
    })
}

fn pagination(offset: u32, returned: u32, has_more: bool) -> serde_json::Value {
    json!({"offset": offset, "limit": 2, "total": 5, "returned": returned, "hasMore": has_more})
}

/// Tracks a..e served two per page; albums empty
async fn mount_five_tracks(server: &MockServer) {
    let pages = [
        (0, vec!["a", "b"], true),
        (2, vec!["c", "d"], true),
        (4, vec!["e"], false),
    ];
    for (offset, page_ids, has_more) in pages {
        let tracks: Vec<_> = page_ids.iter().map(|id| track(id)).collect();
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("type", "track"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": tracks,
                "pagination": pagination(offset, page_ids.len() as u32, has_more)
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("type", "album"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"albums": []})))
        .mount(server)
        .await;
}

fn ids(items: &[MediaItem]) -> Vec<String> {
    items.iter().map(|i| i.id().to_string()).collect()
}

// ============================================================================
// Search paging
// ============================================================================

#[tokio::test]
async fn test_search_pages_through_all_tracks() {
    let server = MockServer::start().await;
    mount_five_tracks(&server).await;

    let ext = extension_for(&server);
    let feed = ext.load_search_feed("daft punk").await.unwrap();
    let shelf = feed.shelf(TRACKS_SHELF).unwrap();

    // first page is eager, cursor points at it
    assert_eq!(ids(&shelf.items), vec!["a", "b"]);
    let c1 = shelf.next.clone().unwrap();
    assert_eq!(
        decode_cursor(&c1).unwrap(),
        PaginationDescriptor::new(0, 2, 5, 2, Some(true))
    );
    assert_eq!(c1, encode_cursor(&PaginationDescriptor::new(0, 2, 5, 2, Some(true))));

    // null cursor serves the cached first page
    let again = shelf.load_more(None).await.unwrap();
    assert_eq!(ids(&again.items), vec!["a", "b"]);
    assert_eq!(again.next.as_deref(), Some(c1.as_str()));

    let second = shelf.load_more(Some(&c1)).await.unwrap();
    assert_eq!(ids(&second.items), vec!["c", "d"]);
    let c2 = second.next.unwrap();
    assert_eq!(decode_cursor(&c2).unwrap().offset, 2);

    let last = shelf.load_more(Some(&c2)).await.unwrap();
    assert_eq!(ids(&last.items), vec!["e"]);
    assert!(last.next.is_none());

    // the album shelf had no pagination object: nothing more to load
    let albums = feed.shelf(ALBUMS_SHELF).unwrap();
    assert!(albums.items.is_empty());
    assert!(!albums.has_more());

    // expect(1) on every page mock is verified when the server drops
}

#[tokio::test]
async fn test_garbage_cursor_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track("a"), track("b")],
            "pagination": pagination(0, 2, true)
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let ext = extension_for(&server);
    let feed = ext.load_search_feed("daft punk").await.unwrap();
    let shelf = feed.shelf(TRACKS_SHELF).unwrap();

    let err = shelf.load_more(Some("garbage")).await.unwrap_err();
    assert!(matches!(err, Error::MalformedCursor { .. }));
}

#[tokio::test]
async fn test_blank_query_never_reaches_server() {
    let server = MockServer::start().await;
    let ext = extension_for(&server);

    let feed = ext.load_search_feed("").await.unwrap();
    assert!(feed.shelves.is_empty());
    assert!(feed.failures.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_page_with_more_still_has_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("type", "track"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [],
            "pagination": pagination(0, 0, true)
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("type", "album"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let ext = extension_for(&server);
    let feed = ext.load_search_feed("silence").await.unwrap();
    let shelf = feed.shelf(TRACKS_SHELF).unwrap();
    assert!(shelf.items.is_empty());
    assert!(shelf.has_more());
}

#[tokio::test]
async fn test_continuation_error_surfaces_to_caller() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track("a"), track("b")],
            "pagination": pagination(0, 2, true)
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let ext = extension_for(&server);
    let feed = ext.load_search_feed("q").await.unwrap();
    let shelf = feed.shelf(TRACKS_SHELF).unwrap();

    let err = shelf
        .load_more(shelf.next.as_deref())
        .await
        .unwrap_err();
    match err {
        Error::RemoteApi { status, ref message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad gateway");
        }
        ref other => panic!("Expected RemoteApi, got {other:?}"),
    }
    assert!(err.is_retryable());

    // first page is untouched
    assert_eq!(ids(&shelf.items), vec!["a", "b"]);
}

// ============================================================================
// Session flow
// ============================================================================

#[tokio::test]
async fn test_login_then_library() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=s3cr3t; Path=/; HttpOnly; SameSite=Lax")
                .set_body_json(json!({"message": "Login successful", "user": {"id": 1, "username": "alice"}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/favorites"))
        .and(header("cookie", "session=s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"favorites": [track("a")]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/libraries"))
        .and(header("cookie", "session=s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"libraries": []})))
        .mount(&server)
        .await;

    let ext = extension_for(&server);
    assert!(matches!(
        ext.load_library_feed().await,
        Err(Error::AuthenticationRequired)
    ));

    let data = HashMap::from([
        ("email".to_string(), "alice@example.com".to_string()),
        ("password".to_string(), "pw".to_string()),
    ]);
    let users = ext.on_login("login", &data).await.unwrap();
    ext.set_login_user(users.first()).await;

    let feed = ext.load_library_feed().await.unwrap();
    assert!(feed.failures.is_empty());
    assert_eq!(ids(&feed.shelf("fav").unwrap().items), vec!["a"]);
    assert!(feed.shelf("playlists").unwrap().items.is_empty());
}

// ============================================================================
// Config
// ============================================================================

#[tokio::test]
async fn test_extension_from_config_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/discography"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artist": {"id": 36819, "name": "Daft Punk", "slug": "daft-punk"},
            "albums": []
        })))
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_url: \"{}/api/\"", server.uri()).unwrap();
    writeln!(file, "share_base_url: \"https://music.example.com/fr-fr\"").unwrap();
    writeln!(file, "timeout_secs: 5").unwrap();

    let config = DabConfig::from_file(file.path()).unwrap();
    let ext = DabExtension::new(config).unwrap();

    let artist = dab_feed::extension::ArtistClient::load_artist(
        &ext,
        dab_feed::media::Artist {
            id: "36819".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let link = ext.share(&artist.into()).await.unwrap();
    assert_eq!(link, "https://music.example.com/fr-fr/interpreter/daft-punk/36819");
}
