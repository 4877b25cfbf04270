//! Provider theme descriptor.
//!
//! The theming service itself lives outside this crate; the UI only needs to
//! know which theme is active to pick between the default domain and a
//! branded, path-namespaced subdomain.

/// Identifier of the default, unbranded theme.
pub const DEFAULT_THEME_ID: &str = "osf";

/// Active theme as exposed by the theming service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Theme identifier (provider name for branded themes).
    pub id: String,
}

impl Theme {
    /// Build a theme descriptor.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Whether this theme renders a branded provider.
    #[must_use]
    pub fn is_branded(&self) -> bool {
        self.id != DEFAULT_THEME_ID
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(DEFAULT_THEME_ID)
    }
}
