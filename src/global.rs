//! Optionally-registered process-wide translator.
//!
//! The registry replaces an implicit global binding: the composition
//! root decides whether to [`install`] a translator (usually via
//! [`init`](crate::init) with `publish_global`), and terse call sites
//! reach it through [`translate`] or the [`t!`](crate::t!) macro.
//!
//! Overwrite policy: last writer wins. Installing a second translator
//! silently replaces the first; there is no warning.

use std::sync::{Arc, RwLock};

use crate::arg::ArgValue;
use crate::error::TranslateError;
use crate::translator::Translator;

static REGISTRY: RwLock<Option<Arc<Translator>>> = RwLock::new(None);

/// Install `translator` as the process-wide instance (last writer wins).
pub fn install(translator: Arc<Translator>) {
    *REGISTRY.write().unwrap() = Some(translator);
}

/// Remove and return the installed translator, if any.
pub fn uninstall() -> Option<Arc<Translator>> {
    REGISTRY.write().unwrap().take()
}

/// The installed translator, if any.
pub fn get() -> Option<Arc<Translator>> {
    REGISTRY.read().unwrap().clone()
}

/// Translate through the installed instance.
///
/// Fails with [`TranslateError::NotInstalled`] when no translator has
/// been registered.
pub fn translate(key: &str, args: &[ArgValue]) -> Result<Option<String>, TranslateError> {
    match get() {
        Some(translator) => translator.translate(key, args),
        None => Err(TranslateError::NotInstalled),
    }
}
