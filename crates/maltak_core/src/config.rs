//! Store configuration.

/// Default result sizes applied when a caller omits `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDefaults {
    /// Page size for article listings.
    pub page_size: usize,
    /// Number of featured articles.
    pub featured: usize,
    /// Number of popular articles.
    pub popular: usize,
    /// Number of related articles.
    pub related: usize,
    /// Number of search hits.
    pub search: usize,
    /// Number of news items.
    pub news: usize,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            page_size: 10,
            featured: 5,
            popular: 5,
            related: 3,
            search: 10,
            news: 3,
        }
    }
}

/// Configuration for opening a content store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether `ContentStore::open` loads the built-in dataset.
    pub seed_on_open: bool,

    /// Limits applied when a query omits them.
    pub defaults: QueryDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_on_open: true,
            defaults: QueryDefaults::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to seed on open.
    #[must_use]
    pub const fn seed_on_open(mut self, value: bool) -> Self {
        self.seed_on_open = value;
        self
    }

    /// Sets the default article page size.
    #[must_use]
    pub const fn page_size(mut self, size: usize) -> Self {
        self.defaults.page_size = size;
        self
    }

    /// Replaces all query defaults.
    #[must_use]
    pub const fn defaults(mut self, defaults: QueryDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.seed_on_open);
        assert_eq!(config.defaults.page_size, 10);
        assert_eq!(config.defaults.featured, 5);
        assert_eq!(config.defaults.popular, 5);
        assert_eq!(config.defaults.related, 3);
        assert_eq!(config.defaults.search, 10);
        assert_eq!(config.defaults.news, 3);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new().seed_on_open(false).page_size(25);

        assert!(!config.seed_on_open);
        assert_eq!(config.defaults.page_size, 25);
        assert_eq!(config.defaults.news, 3);
    }
}
