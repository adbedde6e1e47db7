use mongodb::bson::{doc, Document};

/// Predicate selecting movies from the catalog. All set conditions must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Require a non-empty video source
    pub playable: bool,
    /// Case-insensitive pattern searched anywhere in the title
    pub title_pattern: Option<String>,
    /// Key of an embedded actor reference
    pub actor_key: Option<String>,
    /// Key of an embedded category reference
    pub category_key: Option<String>,
}

impl MovieFilter {
    /// Matches every movie with a playable video source
    pub fn playable() -> Self {
        Self {
            playable: true,
            ..Self::default()
        }
    }

    pub fn with_title_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.title_pattern = Some(pattern.into());
        self
    }

    pub fn with_actor_key(mut self, key: impl Into<String>) -> Self {
        self.actor_key = Some(key.into());
        self
    }

    pub fn with_category_key(mut self, key: impl Into<String>) -> Self {
        self.category_key = Some(key.into());
        self
    }

    /// Query document for the `movies` collection
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();

        if let Some(pattern) = &self.title_pattern {
            document.insert("title", doc! { "$regex": pattern.as_str(), "$options": "i" });
        }
        if let Some(key) = &self.actor_key {
            document.insert("actorEmbeded.key", key.as_str());
        }
        if let Some(key) = &self.category_key {
            document.insert("categoryEmbeded.key", key.as_str());
        }
        if self.playable {
            document.insert("videoSource", doc! { "$exists": true, "$ne": "" });
        }

        document
    }
}
