//! Integration tests for the resource-specific paging adapters.

mod common;

use common::MockCatalog;
use encore_catalog::paging;
use encore_core::{ErrorKind, PageKey};
use encore_fetch::{LoadState, LoadStep};

#[tokio::test]
async fn test_playlist_pages_until_end_signal() {
    let (catalog, _, ctx) = MockCatalog::new().with_playlist("P1", 25).into_context();
    let source = paging::playlist_tracks(&ctx, "P1", "US");

    let LoadStep::Loaded(first) = source.load_next().await.unwrap() else {
        panic!("first page did not load");
    };
    assert_eq!(first.key, PageKey::new(0, 20));
    assert_eq!(first.len(), 20);
    assert!(!first.is_end());

    let LoadStep::Loaded(second) = source.load_next().await.unwrap() else {
        panic!("second page did not load");
    };
    assert_eq!(second.key, PageKey::new(20, 20));
    assert_eq!(second.len(), 5);
    assert!(second.is_end());

    assert_eq!(source.load_next().await.unwrap(), LoadStep::EndReached);
    assert_eq!(catalog.calls(), vec!["playlist:P1:0:20", "playlist:P1:20:20"]);

    let items = source.items();
    assert_eq!(items.len(), 25);
    assert_eq!(items[0].id, "P1-0");
    assert_eq!(items[24].id, "P1-24");
    assert_eq!(items[0].artists_string, "Artist One, Artist Two");
    assert_eq!(items[0].image_url.as_deref(), Some("https://img/al1/640"));
}

#[tokio::test]
async fn test_unknown_playlist_is_page_error() {
    let (_, _, ctx) = MockCatalog::new().into_context();
    let source = paging::playlist_tracks(&ctx, "nope", "US");

    let step = source.load_next().await.unwrap();
    assert_eq!(
        step,
        LoadStep::Failed {
            key: PageKey::new(0, 20),
            cause: ErrorKind::ResourceNotFound,
        }
    );
}

#[tokio::test]
async fn test_show_failure_skips_episode_call() {
    let mut catalog = MockCatalog::new().with_show("S1", 30);
    catalog.show_status = Some(503);
    let (catalog, _, ctx) = catalog.into_context();
    let source = paging::show_episodes(&ctx, "S1", "US");

    let step = source.load_next().await.unwrap();
    assert!(matches!(
        step,
        LoadStep::Failed {
            cause: ErrorKind::UnknownError,
            ..
        }
    ));
    assert_eq!(catalog.calls(), vec!["show:S1"]);
    assert_eq!(catalog.calls_starting_with("episodes:"), 0);
    assert!(source.is_empty());
}

#[tokio::test]
async fn test_episode_failure_after_show_is_page_error() {
    let mut catalog = MockCatalog::new().with_show("S1", 30);
    catalog.episodes_status = Some(429);
    let (catalog, _, ctx) = catalog.into_context();
    let source = paging::show_episodes(&ctx, "S1", "US");

    let step = source.load_next().await.unwrap();
    assert!(matches!(
        step,
        LoadStep::Failed {
            cause: ErrorKind::RateLimitExceeded,
            ..
        }
    ));
    assert_eq!(catalog.calls(), vec!["show:S1", "episodes:S1:0:20"]);
    assert!(source.is_empty());
}

#[tokio::test]
async fn test_episodes_carry_show_metadata() {
    let (catalog, _, ctx) = MockCatalog::new().with_show("S1", 22).into_context();
    let source = paging::show_episodes(&ctx, "S1", "US");

    source.load_next().await.unwrap();
    source.load_next().await.unwrap();

    let episodes = source.items();
    assert_eq!(episodes.len(), 22);
    for episode in &episodes {
        assert_eq!(episode.show.id, "S1");
        assert_eq!(episode.show.name, "Show S1");
        assert_eq!(episode.show.image_url.as_deref(), Some("https://img/S1/640"));
    }
    assert_eq!(episodes[0].hours_and_minutes(), (1, 0));

    // The show is fetched again for every page.
    assert_eq!(catalog.calls_starting_with("show:"), 2);
    assert_eq!(source.state(), LoadState::Loaded { end_reached: true });
}

#[tokio::test]
async fn test_artist_albums_short_page() {
    let (catalog, _, ctx) = MockCatalog::new().into_context();
    let source = paging::artist_albums(&ctx, "ar1", "US");

    assert!(matches!(source.load_next().await.unwrap(), LoadStep::Loaded(page) if page.len() == 3));
    assert!(source.end_reached());
    assert_eq!(catalog.calls(), vec!["artist-albums:ar1:0:20"]);
}

#[tokio::test]
async fn test_search_adapters_request_single_kind() {
    let mut catalog = MockCatalog::new();
    catalog.search_total = 45;
    let (catalog, _, ctx) = catalog.into_context();

    let podcasts = paging::search_podcasts(&ctx, "jazz", "US");
    podcasts.load_next().await.unwrap();
    podcasts.load_next().await.unwrap();
    podcasts.load_next().await.unwrap();
    assert_eq!(podcasts.len(), 45);
    assert!(podcasts.end_reached());
    assert_eq!(
        catalog.calls(),
        vec!["search:jazz:show:0", "search:jazz:show:20", "search:jazz:show:40"]
    );
    assert_eq!(podcasts.items()[0].name_of_publisher, "Pub");

    let tracks = paging::search_tracks(&ctx, "jazz", "US");
    tracks.load_next().await.unwrap();
    assert_eq!(tracks.items()[0].id, "jazz0");

    let artists = paging::search_artists(&ctx, "jazz", "US");
    artists.load_next().await.unwrap();
    assert_eq!(artists.items()[0].image_url, None);

    let episodes = paging::search_episodes(&ctx, "jazz", "US");
    episodes.load_next().await.unwrap();
    assert_eq!(episodes.items()[0].duration_ms, 1000);

    let albums = paging::search_albums(&ctx, "jazz", "US");
    albums.load_next().await.unwrap();
    assert_eq!(albums.items()[0].year_of_release, "2020");

    let playlists = paging::search_playlists(&ctx, "jazz", "US");
    playlists.load_next().await.unwrap();
    assert_eq!(playlists.items()[0].total_number_of_tracks, 42);
}
