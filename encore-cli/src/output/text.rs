//! Human-readable text output.

use encore_core::{
    AlbumSearchResult, ArtistSearchResult, EpisodeSearchResult, Genre, HomeFeedCarousel,
    PlaylistSearchResult, PodcastEpisode, PodcastSearchResult, PodcastShow, SearchResults,
    TrackSearchResult,
};
use encore_store::{Config, HomeFeedSnapshot, HomeFeedState};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ========================================================================
    // Lists
    // ========================================================================

    /// One line per track.
    pub fn format_tracks(&self, tracks: &[TrackSearchResult]) -> String {
        self.numbered(tracks, |t| format!("{} {}", t.name, self.dim(&format!("· {}", t.artists_string))))
    }

    /// One line per album.
    pub fn format_albums(&self, albums: &[AlbumSearchResult]) -> String {
        self.numbered(albums, |a| {
            format!("{} {}", a.name, self.dim(&format!("· {} · {}", a.artists_string, a.year_of_release)))
        })
    }

    /// One line per artist.
    pub fn format_artists(&self, artists: &[ArtistSearchResult]) -> String {
        self.numbered(artists, |a| a.name.clone())
    }

    /// One line per playlist.
    pub fn format_playlists(&self, playlists: &[PlaylistSearchResult]) -> String {
        self.numbered(playlists, |p| {
            format!(
                "{} {}",
                p.name,
                self.dim(&format!("· {} · {} tracks", p.owners_name, p.total_number_of_tracks))
            )
        })
    }

    /// One line per show.
    pub fn format_shows(&self, shows: &[PodcastSearchResult]) -> String {
        self.numbered(shows, |s| format!("{} {}", s.name, self.dim(&format!("· {}", s.name_of_publisher))))
    }

    /// One line per episode search result.
    pub fn format_episode_results(&self, episodes: &[EpisodeSearchResult]) -> String {
        self.numbered(episodes, |e| {
            format!(
                "{} {}",
                e.name,
                self.dim(&format!("· {} · {}", e.release_date, duration(e.duration_ms)))
            )
        })
    }

    /// One line per episode.
    pub fn format_episodes(&self, episodes: &[PodcastEpisode]) -> String {
        self.numbered(episodes, |e| {
            format!(
                "{} {}",
                e.title,
                self.dim(&format!("· {} · {}", e.release_date, duration(e.duration_ms)))
            )
        })
    }

    /// All result groups that have entries.
    pub fn format_search_results(&self, results: &SearchResults) -> String {
        if results.is_empty() {
            return "No results".to_string();
        }

        let mut sections = Vec::new();
        let mut push = |title: &str, count: usize, body: String| {
            if count > 0 {
                sections.push(format!("{}\n{}", self.bold(title), body));
            }
        };
        push("Tracks", results.tracks.len(), self.format_tracks(&results.tracks));
        push("Albums", results.albums.len(), self.format_albums(&results.albums));
        push("Artists", results.artists.len(), self.format_artists(&results.artists));
        push("Playlists", results.playlists.len(), self.format_playlists(&results.playlists));
        push("Podcasts", results.shows.len(), self.format_shows(&results.shows));
        push("Episodes", results.episodes.len(), self.format_episode_results(&results.episodes));
        sections.join("\n\n")
    }

    // ========================================================================
    // Details
    // ========================================================================

    /// Album header followed by its tracks.
    pub fn format_album(&self, album: &AlbumSearchResult, tracks: &[TrackSearchResult]) -> String {
        let mut lines = vec![
            self.bold(&album.name),
            format!("{} · {}", album.artists_string, album.year_of_release),
        ];
        if let Some(art) = &album.album_art_url {
            lines.push(self.dim(art));
        }
        lines.push(String::new());
        lines.push(self.format_tracks(tracks));
        lines.join("\n")
    }

    /// Show header followed by its episodes.
    pub fn format_show(&self, show: &PodcastShow, episodes: &[PodcastEpisode]) -> String {
        let mut lines = vec![self.bold(&show.name), show.name_of_publisher.clone()];
        let description = strip_tags(&show.html_description);
        if !description.is_empty() {
            lines.push(String::new());
            lines.push(description);
        }
        lines.push(String::new());
        lines.push(self.format_episodes(episodes));
        lines.join("\n")
    }

    /// Full episode detail.
    pub fn format_episode(&self, episode: &PodcastEpisode) -> String {
        let mut lines = vec![
            self.bold(&episode.title),
            format!("{} · {}", episode.show.name, self.cyan(&episode.release_date)),
            duration(episode.duration_ms),
        ];
        if let Some(preview) = &episode.preview_url {
            lines.push(format!("Preview: {}", self.dim(preview)));
        }
        if !episode.description.is_empty() {
            lines.push(String::new());
            lines.push(episode.description.clone());
        }
        lines.join("\n")
    }

    // ========================================================================
    // Home & Genres
    // ========================================================================

    /// Greeting, carousels and any failed sections.
    pub fn format_home(&self, greeting: &str, snapshot: &HomeFeedSnapshot) -> String {
        let mut blocks = vec![self.bold(greeting)];
        blocks.extend(snapshot.carousels.iter().map(|c| self.format_carousel(c)));

        if snapshot.state == HomeFeedState::Error {
            let failures: Vec<String> = snapshot
                .errors
                .iter()
                .map(|f| self.red(&format!("✗ {}: {}", f.section, f.message)))
                .collect();
            blocks.push(failures.join("\n"));
        }
        blocks.join("\n\n")
    }

    fn format_carousel(&self, carousel: &HomeFeedCarousel) -> String {
        let cards: Vec<String> = carousel
            .associated_cards
            .iter()
            .map(|card| format!("  {} {}", card.caption, self.dim(&format!("({})", card.id))))
            .collect();
        format!("{}\n{}", self.bold(&carousel.title), cards.join("\n"))
    }

    /// One line per genre.
    pub fn format_genres(&self, genres: &[Genre]) -> String {
        genres
            .iter()
            .map(|g| format!("{:>3}  {}", g.id, g.label))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Effective configuration, secret masked.
    pub fn format_config(&self, config: &Config) -> String {
        let secret = if config.api.client_secret.is_empty() {
            "(not set)"
        } else {
            "********"
        };
        let client_id = if config.api.client_id.is_empty() {
            "(not set)"
        } else {
            config.api.client_id.as_str()
        };
        [
            self.bold("Encore Configuration"),
            "─".repeat(40),
            format!("API base URL:      {}", config.api.base_url),
            format!("Token URL:         {}", config.api.token_url),
            format!("Timeout:           {}s", config.api.timeout_secs),
            format!("Client id:         {client_id}"),
            format!("Client secret:     {secret}"),
            format!("Expiry margin:     {}s", config.api.expiry_margin_secs),
            format!("Market:            {}_{}", config.market.language_code, config.market.country_code),
            format!(
                "Paging:            {} per page, first {}, prefetch {}",
                config.paging.page_size, config.paging.initial_load_size, config.paging.prefetch_distance
            ),
        ]
        .join("\n")
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn numbered<T>(&self, items: &[T], line: impl Fn(&T) -> String) -> String {
        if items.is_empty() {
            return self.dim("(none)");
        }
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{:>3}. {}", i + 1, line(item)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

/// `1 hr 30 min`, or `42 min` under an hour.
pub fn duration(duration_ms: u64) -> String {
    let total_minutes = duration_ms / 60_000;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    if hours == 0 {
        format!("{minutes} min")
    } else {
        format!("{hours} hr {minutes} min")
    }
}

/// Drops HTML tags from a show description.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.trim().to_string()
}
