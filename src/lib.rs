//! remote-i18n: client-side text localization.
//!
//! Loads a flat key→string translation table for a configured language
//! from a server-hosted JSON resource, exposes a translate-and-format
//! operation with printf-style positional substitution, and falls back
//! to `"en"` exactly once when the requested locale resource cannot be
//! retrieved. Missing translations are logged, never raised.
//!
//! # Quick start
//!
//! ```no_run
//! use remote_i18n::{init, t, Config};
//!
//! let translator = init(Config {
//!     language: "fr".to_string(),
//!     base_path: "http://localhost:8080/locales".to_string(),
//!     ..Config::default()
//! });
//!
//! // Through the instance...
//! let greeting = translator.translate("hello", &["Paul".into()]);
//!
//! // ...or, with `publish_global` (the default), through the registry.
//! let greeting = t!("hello", "Paul");
//! ```
//!
//! Loading is explicit and synchronous: [`Translator::new`] performs no
//! I/O, [`Translator::load`] blocks until the fetch (and the one
//! permitted fallback retry) resolves, and [`Translator::is_ready`]
//! reports whether a table is current. [`init`] bundles
//! construct + load + registry install for one-call setup; load
//! failures there are only logged.

mod arg;
mod config;
mod diag;
mod error;
mod format;
pub mod global;
mod table;
mod translator;
mod transport;

pub use arg::ArgValue;
pub use config::{Config, ReadyCallback, FALLBACK_LANGUAGE};
pub use error::{FormatError, LoadError, TranslateError};
pub use format::vsprintf;
pub use table::LocaleTable;
pub use translator::{init, init_with_transport, Translator};
pub use transport::{HttpTransport, Transport};

/// Terse lookup through the global registry.
///
/// Examples:
/// - `t!("app.title")`
/// - `t!("greeting", user_name, 3)`
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::global::translate($key, &[])
    };
    ($key:expr, $($arg:expr),+ $(,)?) => {
        $crate::global::translate($key, &[$($crate::ArgValue::from($arg)),+])
    };
}
