//! API configuration.

/// Configuration for request handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Minimum number of characters in a comment, ignoring surrounding
    /// whitespace.
    pub min_comment_length: usize,
    /// Upper bound applied to caller-supplied limits. `None` leaves them
    /// unbounded.
    pub max_limit: Option<usize>,
}

impl ApiConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_comment_length: 3,
            max_limit: None,
        }
    }

    /// Sets the minimum comment length.
    #[must_use]
    pub const fn with_min_comment_length(mut self, length: usize) -> Self {
        self.min_comment_length = length;
        self
    }

    /// Caps every caller-supplied limit at `max`.
    #[must_use]
    pub const fn with_max_limit(mut self, max: usize) -> Self {
        self.max_limit = Some(max);
        self
    }

    /// Applies [`max_limit`](Self::max_limit) to a requested limit.
    ///
    /// An absent limit stays absent so the query default applies.
    pub fn clamp_limit(&self, limit: Option<usize>) -> Option<usize> {
        match (limit, self.max_limit) {
            (Some(requested), Some(max)) => Some(requested.min(max)),
            (limit, _) => limit,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.min_comment_length, 3);
        assert_eq!(config.max_limit, None);
        assert_eq!(config.clamp_limit(Some(10_000)), Some(10_000));
    }

    #[test]
    fn builder_pattern() {
        let config = ApiConfig::new().with_min_comment_length(10).with_max_limit(50);
        assert_eq!(config.min_comment_length, 10);
        assert_eq!(config.clamp_limit(Some(80)), Some(50));
        assert_eq!(config.clamp_limit(Some(20)), Some(20));
        assert_eq!(config.clamp_limit(None), None);
    }
}
