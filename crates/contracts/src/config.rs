/// Formspree form that relays contact messages
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xkgqzjee";

/// Path the site is served under (matches `public_url` in Trunk.toml)
pub const BASE_PATH: &str = "/Portfolio/";

/// Site-wide settings, provided to the component tree via context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub base_path: String,
    pub owner_name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: FORM_ENDPOINT.to_string(),
            base_path: BASE_PATH.to_string(),
            owner_name: crate::content::PROFILE.name.to_string(),
        }
    }
}

impl SiteConfig {
    /// URL of a static asset under the base path
    ///
    /// # Example
    /// ```rust
    /// let config = contracts::config::SiteConfig::default();
    /// assert_eq!(config.asset_url("myphoto.jpg"), "/Portfolio/myphoto.jpg");
    /// ```
    pub fn asset_url(&self, file: &str) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            file.trim_start_matches('/')
        )
    }
}
