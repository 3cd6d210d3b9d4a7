use thiserror::Error;

/// Failure to retrieve or parse a locale resource.
///
/// Recovered locally at most once by the fallback-to-`"en"` retry in
/// [`Translator::load`](crate::Translator::load); never raised by
/// [`init`](crate::init).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("server returned status {status} for `{url}`")]
    Http { url: String, status: u16 },

    #[error("request for `{url}` failed: {message}")]
    Transport { url: String, message: String },

    #[error("malformed locale table at `{url}`: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Template/argument mismatch during printf-style substitution.
///
/// Always propagated to the caller; a partially formatted string would
/// mask a template bug.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("template consumes {expected} arguments, only {given} supplied")]
    MissingArguments { expected: usize, given: usize },

    #[error("{given} arguments supplied, template consumes {expected}")]
    ExtraArguments { expected: usize, given: usize },

    #[error("`%{conversion}` cannot format a {kind} argument (position {position})")]
    TypeMismatch {
        conversion: char,
        kind: &'static str,
        position: usize,
    },

    #[error("unsupported conversion `%{0}`")]
    UnsupportedConversion(char),

    #[error("width or precision is out of range")]
    WidthOverflow,

    #[error("template ends inside a conversion specifier")]
    TruncatedConversion,
}

/// Failure of a translate call.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No locale table has been loaded yet.
    #[error("no locale table loaded; call `Translator::load` first")]
    TableUnloaded,

    /// No translator has been installed in the global registry.
    #[error("no translator installed; call `global::install` first")]
    NotInstalled,

    #[error(transparent)]
    Format(#[from] FormatError),
}
