//! Fixed sample records each service is seeded with at startup.
//!
//! Seeds use IDs 1 and 2; the store positions its counter at 3, so the
//! first created record in any service always receives ID 3.

use catalog_core::{Anime, Episode, Movie, Series};

use super::CatalogStore;

/// Movie store seeded with the two sample movies.
#[must_use]
pub fn sample_movies() -> CatalogStore<Movie> {
    CatalogStore::with_seed(vec![
        Movie {
            id: 1,
            title: "Inception".to_string(),
            genre: "Sci-Fi Action".to_string(),
            year: 2010,
        },
        Movie {
            id: 2,
            title: "The Dark Knight".to_string(),
            genre: "Action Thriller".to_string(),
            year: 2008,
        },
    ])
}

/// Series store seeded with two sample series and their episode lists.
#[must_use]
pub fn sample_series() -> CatalogStore<Series> {
    CatalogStore::with_seed(vec![
        Series {
            id: 1,
            title: "Breaking Bad".to_string(),
            genre: "Crime Drama".to_string(),
            total_episodes: 7,
            watched_episodes: 0,
            cover_url: "https://example.com/covers/breaking-bad.jpg".to_string(),
            episodes: vec![
                episode(1, "Pilot", "https://example.com/breakingbad/s01e01.mp4"),
                episode(
                    2,
                    "Cat's in the Bag...",
                    "https://example.com/breakingbad/s01e02.mp4",
                ),
                episode(
                    3,
                    "...And the Bag's in the River",
                    "https://example.com/breakingbad/s01e03.mp4",
                ),
            ],
        },
        Series {
            id: 2,
            title: "Invincible".to_string(),
            genre: "Action, Adventure, Animation".to_string(),
            total_episodes: 8,
            watched_episodes: 0,
            cover_url: "https://example.com/covers/invincible.jpg".to_string(),
            episodes: vec![
                episode(1, "It's About Time", "https://example.com/invincible/ep1.mp4"),
                episode(
                    2,
                    "Here Goes Nothing",
                    "https://example.com/invincible/ep2.mp4",
                ),
            ],
        },
    ])
}

/// Anime store seeded with the two sample entries.
#[must_use]
pub fn sample_anime() -> CatalogStore<Anime> {
    CatalogStore::with_seed(vec![
        Anime {
            id: 1,
            title: "Attack on Titan".to_string(),
            genre: "Action, Dark Fantasy".to_string(),
            episodes: 88,
        },
        Anime {
            id: 2,
            title: "Demon Slayer".to_string(),
            genre: "Adventure, Dark Fantasy".to_string(),
            episodes: 55,
        },
    ])
}

fn episode(id: u32, title: &str, watch_url: &str) -> Episode {
    Episode {
        id,
        title: title.to_string(),
        watch_url: watch_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_seed_stores_start_their_counter_at_three() {
        assert_eq!(sample_movies().next_id(), 3);
        assert_eq!(sample_series().next_id(), 3);
        assert_eq!(sample_anime().next_id(), 3);
    }

    #[test]
    fn movie_seed_matches_fixture() {
        let store = sample_movies();
        assert_eq!(store.get(1).unwrap().title, "Inception");
        assert_eq!(store.get(2).unwrap().title, "The Dark Knight");
    }

    #[test]
    fn series_seed_carries_episode_lists() {
        let store = sample_series();
        assert_eq!(store.get(1).unwrap().episodes.len(), 3);
        assert_eq!(store.get(2).unwrap().episodes[0].title, "It's About Time");
    }
}
