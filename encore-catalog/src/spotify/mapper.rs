//! Mapping from Spotify response types to Encore models.

use encore_core::{
    AlbumSearchResult, ArtistSearchResult, EpisodeSearchResult, FeaturedPlaylists, ImageSize,
    PlaylistSearchResult, PlaylistsForCategory, PodcastEpisode, PodcastSearchResult, PodcastShow,
    PodcastShowInfo, SearchResults, TrackSearchResult,
};

use super::dto::{
    AlbumDto, AlbumSimplified, ArtistDto, ArtistSimplified, CategoryDto, EpisodeDto,
    FeaturedPlaylistsResponse, PlaylistItemDto, PlaylistSimplified, SearchResponse, ShowDto,
    ShowSimplified, TrackDto,
};

/// Artist names joined with ", ".
pub fn artists_string(artists: &[ArtistSimplified]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The year part of a release date.
pub fn year_of_release(release_date: &str) -> String {
    release_date.chars().take(4).collect()
}

// ============================================================================
// Music
// ============================================================================

/// Album listing entry to search result.
pub fn album(album: AlbumSimplified) -> AlbumSearchResult {
    AlbumSearchResult {
        artists_string: artists_string(&album.artists),
        album_art_url: ImageSize::Large.select(&album.images),
        year_of_release: year_of_release(&album.release_date),
        id: album.id,
        name: album.name,
    }
}

/// Full album to search result.
pub fn album_detail(album: &AlbumDto) -> AlbumSearchResult {
    AlbumSearchResult {
        id: album.id.clone(),
        name: album.name.clone(),
        artists_string: artists_string(&album.artists),
        album_art_url: ImageSize::Large.select(&album.images),
        year_of_release: year_of_release(&album.release_date),
    }
}

/// Artist to search result.
pub fn artist(artist: ArtistDto) -> ArtistSearchResult {
    ArtistSearchResult {
        image_url: ImageSize::Large.select(&artist.images),
        id: artist.id,
        name: artist.name,
    }
}

/// Track to search result.
///
/// Tracks listed inside an album carry no album of their own; their image is
/// `fallback_image`.
pub fn track(track: TrackDto, fallback_image: Option<&str>) -> TrackSearchResult {
    let image_url = track
        .album
        .as_ref()
        .and_then(|album| ImageSize::Large.select(&album.images))
        .or_else(|| fallback_image.map(str::to_owned));

    TrackSearchResult {
        artists_string: artists_string(&track.artists),
        id: track.id,
        name: track.name,
        image_url,
        preview_url: track.preview_url,
    }
}

/// Playlist entry to track, skipping entries without a track.
pub fn playlist_item(item: PlaylistItemDto) -> Option<TrackSearchResult> {
    item.track.map(|t| track(t, None))
}

/// Playlist listing entry to search result.
pub fn playlist(playlist: PlaylistSimplified) -> PlaylistSearchResult {
    PlaylistSearchResult {
        image_url: ImageSize::Large.select(&playlist.images),
        owners_name: playlist.owner.display_name.unwrap_or_default(),
        total_number_of_tracks: playlist.tracks.total,
        id: playlist.id,
        name: playlist.name,
    }
}

// ============================================================================
// Podcasts
// ============================================================================

/// Show listing entry to search result.
pub fn show_listing(show: ShowSimplified) -> PodcastSearchResult {
    PodcastSearchResult {
        image_url: ImageSize::Large.select(&show.images),
        id: show.id,
        name: show.name,
        name_of_publisher: show.publisher,
    }
}

/// Full show to podcast show.
pub fn show(show: ShowDto) -> PodcastShow {
    PodcastShow {
        image_url: ImageSize::Large.select(&show.images),
        id: show.id,
        name: show.name,
        name_of_publisher: show.publisher,
        html_description: show.html_description,
    }
}

/// Episode to search result.
pub fn episode_listing(episode: EpisodeDto) -> EpisodeSearchResult {
    EpisodeSearchResult {
        image_url: ImageSize::Large.select(&episode.images),
        id: episode.id,
        name: episode.name,
        description: episode.description,
        release_date: episode.release_date,
        duration_ms: episode.duration_ms,
    }
}

/// Episode to podcast episode, attached to `show`.
pub fn episode(episode: EpisodeDto, show: PodcastShowInfo) -> PodcastEpisode {
    PodcastEpisode {
        image_url: ImageSize::Large.select(&episode.images),
        id: episode.id,
        title: episode.name,
        description: episode.description,
        release_date: episode.release_date,
        duration_ms: episode.duration_ms,
        show,
        preview_url: episode.audio_preview_url,
    }
}

/// Episode that embeds its own show.
///
/// An episode without an embedded show gets an empty show with the episode's
/// cover image.
pub fn episode_with_embedded_show(mut dto: EpisodeDto) -> PodcastEpisode {
    let info = match dto.show.take() {
        Some(show) => PodcastShowInfo {
            image_url: ImageSize::Large.select(&show.images),
            id: show.id,
            name: show.name,
        },
        None => PodcastShowInfo {
            id: String::new(),
            name: String::new(),
            image_url: ImageSize::Large.select(&dto.images),
        },
    };
    episode(dto, info)
}

// ============================================================================
// Browse & Search
// ============================================================================

/// Featured playlists response to model.
pub fn featured_playlists(response: FeaturedPlaylistsResponse) -> FeaturedPlaylists {
    FeaturedPlaylists {
        playlists_description: response.message.unwrap_or_default(),
        playlists: response.playlists.items.into_iter().map(playlist).collect(),
    }
}

/// A category joined with its playlists.
pub fn category(category: CategoryDto, playlists: Vec<PlaylistSimplified>) -> PlaylistsForCategory {
    PlaylistsForCategory {
        category_id: category.id,
        name_of_category: category.name,
        associated_playlists: playlists.into_iter().map(playlist).collect(),
    }
}

/// Search response to grouped results. Missing kinds are empty.
pub fn search_results(response: SearchResponse) -> SearchResults {
    fn items<D, T>(page: Option<super::dto::PagingObject<D>>, map: impl FnMut(D) -> T) -> Vec<T> {
        page.map(|p| p.items.into_iter().map(map).collect())
            .unwrap_or_default()
    }

    SearchResults {
        tracks: items(response.tracks, |t| track(t, None)),
        albums: items(response.albums, album),
        artists: items(response.artists, artist),
        playlists: items(response.playlists, playlist),
        shows: items(response.shows, show_listing),
        episodes: items(response.episodes, episode_listing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn images(n: usize) -> serde_json::Value {
        json!((0..n)
            .map(|i| json!({ "url": format!("https://i.scdn.co/image/{i}"), "width": 640, "height": 640 }))
            .collect::<Vec<_>>())
    }

    #[test]
    fn test_artist_image_rule() {
        let none: ArtistDto =
            serde_json::from_value(json!({ "id": "a", "name": "A", "images": [] })).unwrap();
        assert_eq!(artist(none).image_url, None);

        let two: ArtistDto =
            serde_json::from_value(json!({ "id": "a", "name": "A", "images": images(2) })).unwrap();
        assert_eq!(artist(two).image_url.as_deref(), Some("https://i.scdn.co/image/0"));

        let three: ArtistDto =
            serde_json::from_value(json!({ "id": "a", "name": "A", "images": images(3) })).unwrap();
        assert_eq!(artist(three).image_url.as_deref(), Some("https://i.scdn.co/image/0"));
    }

    #[test]
    fn test_album_fields() {
        let dto: AlbumSimplified = serde_json::from_value(json!({
            "id": "al1",
            "name": "Discovery",
            "images": images(3),
            "artists": [{ "id": "x", "name": "Thomas" }, { "id": "y", "name": "Guy-Manuel" }],
            "release_date": "2001-03-12"
        }))
        .unwrap();

        let result = album(dto);
        assert_eq!(result.artists_string, "Thomas, Guy-Manuel");
        assert_eq!(result.year_of_release, "2001");
        assert!(result.album_art_url.is_some());
    }

    #[test]
    fn test_album_track_uses_fallback_image() {
        let dto: TrackDto = serde_json::from_value(json!({
            "id": "t1",
            "name": "One More Time",
            "artists": [{ "id": "x", "name": "Daft Punk" }]
        }))
        .unwrap();

        let result = track(dto, Some("https://cover"));
        assert_eq!(result.image_url.as_deref(), Some("https://cover"));
        assert_eq!(result.preview_url, None);
    }

    #[test]
    fn test_playlist_item_without_track_is_skipped() {
        let item: PlaylistItemDto = serde_json::from_value(json!({ "track": null })).unwrap();
        assert!(playlist_item(item).is_none());
    }

    #[test]
    fn test_search_results_missing_kinds_are_empty() {
        let response: SearchResponse = serde_json::from_value(json!({
            "artists": { "items": [{ "id": "a", "name": "A" }], "total": 1, "next": null }
        }))
        .unwrap();

        let results = search_results(response);
        assert_eq!(results.artists.len(), 1);
        assert!(results.tracks.is_empty());
        assert!(results.episodes.is_empty());
        assert_eq!(results.total(), 1);
    }

    #[test]
    fn test_episode_attaches_show() {
        let dto: EpisodeDto = serde_json::from_value(json!({
            "id": "e1",
            "name": "Pilot",
            "duration_ms": 1_800_000,
            "release_date": "2024-02-01"
        }))
        .unwrap();
        let info = PodcastShowInfo {
            id: "s1".into(),
            name: "Show".into(),
            image_url: None,
        };

        let result = episode(dto, info.clone());
        assert_eq!(result.title, "Pilot");
        assert_eq!(result.show, info);
    }
}
