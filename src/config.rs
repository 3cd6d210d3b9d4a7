use std::fmt;

use crate::table::LocaleTable;

/// The language loaded when the configured one cannot be retrieved.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Callback invoked with the table after every successful load.
pub type ReadyCallback = Box<dyn Fn(&LocaleTable) + Send + Sync>;

/// Translator configuration, immutable after construction.
///
/// Every field has a documented default; build a partial configuration
/// with struct update syntax:
///
/// ```
/// use remote_i18n::Config;
///
/// let config = Config {
///     language: "fr".to_string(),
///     ..Config::default()
/// };
/// assert!(config.publish_global);
/// ```
///
/// Values are not validated: a language with no resource on the server
/// only surfaces as a load failure. Booleans are concrete fields, so an
/// explicit `false` is always honored.
pub struct Config {
    /// Language code to load. Default: `"en"`.
    pub language: String,
    /// URL prefix of the locale resources, joined as
    /// `{base_path}/{language}{file_extension}`. Default: `"/locales"`
    /// (callers outside a browser-like origin pass an absolute prefix,
    /// e.g. `http://host/locales`).
    pub base_path: String,
    /// Locale resource extension. Default: `".json"`.
    pub file_extension: String,
    /// Whether [`init`](crate::init) installs the translator into the
    /// global registry. Default: `true`.
    pub publish_global: bool,
    /// Whether this instance emits diagnostics. Default: `true`.
    pub verbose: bool,
    /// Invoked with the loaded table after every successful load.
    /// Default: `None`.
    pub on_ready: Option<ReadyCallback>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            base_path: "/locales".to_string(),
            file_extension: ".json".to_string(),
            publish_global: true,
            verbose: true,
            on_ready: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("language", &self.language)
            .field("base_path", &self.base_path)
            .field("file_extension", &self.file_extension)
            .field("publish_global", &self.publish_global)
            .field("verbose", &self.verbose)
            .field("on_ready", &self.on_ready.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn documented_defaults() {
        let config = Config::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.base_path, "/locales");
        assert_eq!(config.file_extension, ".json");
        assert!(config.publish_global);
        assert!(config.verbose);
        assert!(config.on_ready.is_none());
    }

    #[test]
    fn explicit_false_is_honored() {
        let config = Config {
            publish_global: false,
            verbose: false,
            ..Config::default()
        };
        assert!(!config.publish_global);
        assert!(!config.verbose);
    }
}
