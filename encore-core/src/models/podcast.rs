//! Podcast shows and episodes.

use serde::{Deserialize, Serialize};

/// A podcast show with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastShow {
    /// Catalog id.
    pub id: String,
    /// Show name.
    pub name: String,
    /// Cover image.
    pub image_url: Option<String>,
    /// Publisher name.
    pub name_of_publisher: String,
    /// Description with HTML markup.
    pub html_description: String,
}

impl PodcastShow {
    /// The subset of show data every episode carries.
    pub fn info(&self) -> PodcastShowInfo {
        PodcastShowInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Show metadata attached to an episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastShowInfo {
    /// Catalog id of the show.
    pub id: String,
    /// Show name.
    pub name: String,
    /// Show cover image.
    pub image_url: Option<String>,
}

/// A podcast episode together with the show it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastEpisode {
    /// Catalog id.
    pub id: String,
    /// Episode title.
    pub title: String,
    /// Plain-text description.
    pub description: String,
    /// Release date as published.
    pub release_date: String,
    /// Length in milliseconds.
    pub duration_ms: u64,
    /// The show this episode belongs to.
    pub show: PodcastShowInfo,
    /// Streamable preview, when offered.
    pub preview_url: Option<String>,
    /// Episode-specific cover image.
    pub image_url: Option<String>,
}

impl PodcastEpisode {
    /// Duration split into whole hours and remaining minutes.
    pub fn hours_and_minutes(&self) -> (u64, u64) {
        let total_minutes = self.duration_ms / 60_000;
        (total_minutes / 60, total_minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_and_minutes() {
        let episode = PodcastEpisode {
            id: "e".into(),
            title: "t".into(),
            description: String::new(),
            release_date: "2024-01-01".into(),
            duration_ms: 5_430_000,
            show: PodcastShowInfo {
                id: "s".into(),
                name: "show".into(),
                image_url: None,
            },
            preview_url: None,
            image_url: None,
        };
        assert_eq!(episode.hours_and_minutes(), (1, 30));
    }
}
