//! Genres Encore can recommend tracks for.

use encore_core::{Genre, GenreType};

/// The `seed_genres` value for a genre.
pub fn seed_name(genre: GenreType) -> &'static str {
    match genre {
        GenreType::Ambient => "ambient",
        GenreType::Chill => "chill",
        GenreType::Classical => "classical",
        GenreType::Dance => "dance",
        GenreType::Electronic => "electronic",
        GenreType::Metal => "metal",
        GenreType::RainyDay => "rainy-day",
        GenreType::Rock => "rock",
        GenreType::Piano => "piano",
        GenreType::Pop => "pop",
        GenreType::Sleep => "sleep",
    }
}

/// Every supported genre, with ids in display order.
pub fn supported_genres() -> Vec<Genre> {
    GenreType::all()
        .iter()
        .zip(0u32..)
        .map(|(genre_type, id)| Genre {
            id,
            label: genre_type.label().to_string(),
            genre_type: *genre_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_genres_with_unique_seeds() {
        let genres = supported_genres();
        assert_eq!(genres.len(), 11);
        let mut seeds: Vec<_> = genres.iter().map(|g| seed_name(g.genre_type)).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 11);
        assert_eq!(genres[6].label, "Rainy day");
    }
}
