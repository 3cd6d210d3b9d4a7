use std::sync::{Arc, RwLock};

use crate::arg::ArgValue;
use crate::config::{Config, FALLBACK_LANGUAGE};
use crate::diag::Diagnostics;
use crate::error::{LoadError, TranslateError};
use crate::format::vsprintf;
use crate::global;
use crate::table::LocaleTable;
use crate::transport::{HttpTransport, Transport};

/// Client-side translator: one locale table, loaded from a
/// server-hosted resource, with printf-style substitution on lookup.
///
/// Construction performs no I/O; call [`load`](Self::load) (or use
/// [`init`]) to fetch the table. At most one table is current, and the
/// active language always names the table actually loaded.
pub struct Translator {
    config: Config,
    transport: Box<dyn Transport>,
    language: RwLock<String>,
    table: RwLock<Option<LocaleTable>>,
    diag: Diagnostics,
}

impl Translator {
    /// Create a translator using the blocking HTTP transport.
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, Box::new(HttpTransport::new()))
    }

    /// Create a translator with a caller-supplied transport.
    pub fn with_transport(config: Config, transport: Box<dyn Transport>) -> Self {
        let diag = Diagnostics::new(config.verbose);
        let language = RwLock::new(config.language.clone());
        Self {
            config,
            transport,
            language,
            table: RwLock::new(None),
            diag,
        }
    }

    /// Fetch and install the locale table for the active language.
    ///
    /// Blocking. On failure the resource path is logged and, when the
    /// active language is not [`FALLBACK_LANGUAGE`], the language is
    /// switched to it and the load is retried exactly once. A failing
    /// fallback is logged and returned; the table stays unset.
    ///
    /// Each successful load replaces the table atomically and invokes
    /// `on_ready` with it.
    pub fn load(&self) -> Result<(), LoadError> {
        loop {
            let language = self.language();
            let url = self.resource_path(&language);
            match self.fetch_table(&url) {
                Ok(table) => {
                    self.diag.info(&format!("locale file `{url}` loaded"));
                    *self.table.write().unwrap() = Some(table.clone());
                    if let Some(on_ready) = &self.config.on_ready {
                        on_ready(&table);
                    }
                    return Ok(());
                }
                Err(err) => {
                    self.diag.error(&format!("cannot get the file {url}: {err}"));
                    if language != FALLBACK_LANGUAGE {
                        self.diag
                            .warn(&format!("trying to fall back to `{FALLBACK_LANGUAGE}`"));
                        *self.language.write().unwrap() = FALLBACK_LANGUAGE.to_string();
                        // Next iteration runs with the fallback
                        // language, so a second failure returns.
                        continue;
                    }
                    return Err(err);
                }
            }
        }
    }

    fn fetch_table(&self, url: &str) -> Result<LocaleTable, LoadError> {
        let body = self.transport.fetch(url)?;
        LocaleTable::from_json_str(&body).map_err(|source| LoadError::Parse {
            url: url.to_string(),
            source,
        })
    }

    /// Look up `key` and substitute `args` printf-style.
    ///
    /// - no table loaded yet: `Err(TranslateError::TableUnloaded)`
    /// - `key` absent: logs the file to edit and a ready-to-paste JSON
    ///   fragment, returns `Ok(None)` (never the raw key)
    /// - `args` empty: the stored string, byte-for-byte (no formatting
    ///   pass, literal `%` passes through)
    /// - otherwise: the formatted string, or
    ///   `Err(TranslateError::Format(_))` on template/argument mismatch
    pub fn translate(&self, key: &str, args: &[ArgValue]) -> Result<Option<String>, TranslateError> {
        let table = self.table.read().unwrap();
        let Some(table) = table.as_ref() else {
            return Err(TranslateError::TableUnloaded);
        };
        let Some(template) = table.get(key) else {
            self.diag.log(&format!(
                "missing translation in '{file}', add:\n\"{key}\": \"{key}\"",
                file = self.locale_file_name(),
            ));
            return Ok(None);
        };
        if args.is_empty() {
            return Ok(Some(template.to_string()));
        }
        Ok(Some(vsprintf(template, args)?))
    }

    /// The active language. Mutated to [`FALLBACK_LANGUAGE`] when a
    /// load falls back, so it never diverges from the loaded table's
    /// origin.
    pub fn language(&self) -> String {
        self.language.read().unwrap().clone()
    }

    /// Whether a table has been loaded.
    pub fn is_ready(&self) -> bool {
        self.table.read().unwrap().is_some()
    }

    /// Resource URL for `language`: `{base_path}/{language}{file_extension}`.
    pub fn resource_path(&self, language: &str) -> String {
        format!(
            "{}/{}{}",
            self.config.base_path, language, self.config.file_extension
        )
    }

    fn locale_file_name(&self) -> String {
        format!("{}{}", self.language(), self.config.file_extension)
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("config", &self.config)
            .field("language", &self.language())
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}

/// One-call setup: construct, load, and (when `publish_global` is set)
/// install into the [`global`] registry.
///
/// Load failures are logged, never raised; a translator whose load
/// failed is still returned, with no table set.
pub fn init(config: Config) -> Arc<Translator> {
    let translator = Arc::new(Translator::new(config));
    let _ = translator.load();
    if translator.config.publish_global {
        global::install(Arc::clone(&translator));
    }
    translator
}

/// [`init`] with a caller-supplied transport.
pub fn init_with_transport(config: Config, transport: Box<dyn Transport>) -> Arc<Translator> {
    let translator = Arc::new(Translator::with_transport(config, transport));
    let _ = translator.load();
    if translator.config.publish_global {
        global::install(Arc::clone(&translator));
    }
    translator
}
