//! Filter builders, one per list endpoint. Every movie list is restricted
//! to playable movies.

use crate::db::MovieFilter;

/// How the title-search query is turned into a pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPattern {
    /// Escape pattern metacharacters so the query is matched literally
    #[default]
    Literal,
    /// Interpolate the query verbatim, letting callers use pattern syntax
    Raw,
}

impl SearchPattern {
    pub fn from_raw_flag(raw: bool) -> Self {
        if raw {
            SearchPattern::Raw
        } else {
            SearchPattern::Literal
        }
    }

    fn build(self, query: &str) -> String {
        match self {
            SearchPattern::Literal => regex::escape(query),
            SearchPattern::Raw => query.to_string(),
        }
    }
}

/// All playable movies
pub fn playable() -> MovieFilter {
    MovieFilter::playable()
}

/// Playable movies whose title contains `query`, ignoring case
pub fn title_search(query: &str, mode: SearchPattern) -> MovieFilter {
    MovieFilter::playable().with_title_pattern(mode.build(query))
}

/// Playable movies featuring the actor with `key`
pub fn by_actor_key(key: &str) -> MovieFilter {
    MovieFilter::playable().with_actor_key(key)
}

/// Playable movies in the category with `key`
pub fn by_category_key(key: &str) -> MovieFilter {
    MovieFilter::playable().with_category_key(key)
}
