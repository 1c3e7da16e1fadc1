//! Browse and home-feed types.

use serde::{Deserialize, Serialize};

use super::search::{AlbumSearchResult, PlaylistSearchResult, SearchResult};

// ============================================================================
// Playlists
// ============================================================================

/// Editorially featured playlists for a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedPlaylists {
    /// Short message describing the selection ("Afternoon delight").
    pub playlists_description: String,
    /// The featured playlists.
    pub playlists: Vec<PlaylistSearchResult>,
}

/// Playlists belonging to one browse category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistsForCategory {
    /// Category id.
    pub category_id: String,
    /// Category display name.
    pub name_of_category: String,
    /// Playlists in the category.
    pub associated_playlists: Vec<PlaylistSearchResult>,
}

impl PlaylistsForCategory {
    /// Converts the category into a home feed carousel.
    pub fn to_carousel(&self) -> HomeFeedCarousel {
        HomeFeedCarousel {
            id: self.category_id.clone(),
            title: self.name_of_category.clone(),
            associated_cards: self
                .associated_playlists
                .iter()
                .cloned()
                .map(HomeFeedCarouselCardInfo::from_playlist)
                .collect(),
        }
    }
}

// ============================================================================
// Genres
// ============================================================================

/// Genres the catalog can recommend tracks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenreType {
    /// Ambient.
    Ambient,
    /// Chill.
    Chill,
    /// Classical.
    Classical,
    /// Dance.
    Dance,
    /// Electronic.
    Electronic,
    /// Metal.
    Metal,
    /// Rainy day.
    RainyDay,
    /// Rock.
    Rock,
    /// Piano.
    Piano,
    /// Pop.
    Pop,
    /// Sleep.
    Sleep,
}

impl GenreType {
    /// Returns all genre types in display order.
    pub fn all() -> &'static [GenreType] {
        &[
            Self::Ambient,
            Self::Chill,
            Self::Classical,
            Self::Dance,
            Self::Electronic,
            Self::Metal,
            Self::RainyDay,
            Self::Rock,
            Self::Piano,
            Self::Pop,
            Self::Sleep,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ambient => "Ambient",
            Self::Chill => "Chill",
            Self::Classical => "Classical",
            Self::Dance => "Dance",
            Self::Electronic => "Electronic",
            Self::Metal => "Metal",
            Self::RainyDay => "Rainy day",
            Self::Rock => "Rock",
            Self::Piano => "Piano",
            Self::Pop => "Pop",
            Self::Sleep => "Sleep",
        }
    }

    /// Parses a genre from its label or snake-case name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");
        Self::all().iter().copied().find(|genre| {
            genre.label().to_lowercase().replace(' ', "_") == normalized
        })
    }
}

/// A genre as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    /// Stable numeric id.
    pub id: u32,
    /// Display label.
    pub label: String,
    /// The genre.
    pub genre_type: GenreType,
}

// ============================================================================
// Home Feed
// ============================================================================

/// One card of a home feed carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeedCarouselCardInfo {
    /// Id of the underlying object.
    pub id: String,
    /// Card image.
    pub image_url: Option<String>,
    /// Card caption.
    pub caption: String,
    /// The object the card opens.
    pub associated_search_result: SearchResult,
}

impl HomeFeedCarouselCardInfo {
    /// Card for an album.
    pub fn from_album(album: AlbumSearchResult) -> Self {
        Self {
            id: album.id.clone(),
            image_url: album.album_art_url.clone(),
            caption: album.name.clone(),
            associated_search_result: SearchResult::Album(album),
        }
    }

    /// Card for a playlist.
    pub fn from_playlist(playlist: PlaylistSearchResult) -> Self {
        Self {
            id: playlist.id.clone(),
            image_url: playlist.image_url.clone(),
            caption: playlist.name.clone(),
            associated_search_result: SearchResult::Playlist(playlist),
        }
    }
}

/// A titled row of cards on the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeedCarousel {
    /// Carousel id.
    pub id: String,
    /// Carousel title.
    pub title: String,
    /// Cards in display order.
    pub associated_cards: Vec<HomeFeedCarouselCardInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_from_name() {
        assert_eq!(GenreType::from_name("rainy day"), Some(GenreType::RainyDay));
        assert_eq!(GenreType::from_name("RAINY_DAY"), Some(GenreType::RainyDay));
        assert_eq!(GenreType::from_name("Pop"), Some(GenreType::Pop));
        assert_eq!(GenreType::from_name("polka"), None);
    }

    #[test]
    fn test_category_to_carousel() {
        let category = PlaylistsForCategory {
            category_id: "chill".into(),
            name_of_category: "Chill".into(),
            associated_playlists: vec![PlaylistSearchResult {
                id: "p1".into(),
                name: "Lo-fi".into(),
                owners_name: "Editor".into(),
                total_number_of_tracks: 50,
                image_url: Some("https://img".into()),
            }],
        };

        let carousel = category.to_carousel();
        assert_eq!(carousel.id, "chill");
        assert_eq!(carousel.title, "Chill");
        assert_eq!(carousel.associated_cards.len(), 1);
        assert_eq!(carousel.associated_cards[0].caption, "Lo-fi");
        assert!(matches!(
            carousel.associated_cards[0].associated_search_result,
            SearchResult::Playlist(_)
        ));
    }
}
