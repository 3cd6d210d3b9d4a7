use tracing::{debug, error, info, warn};

/// Verbosity-gated diagnostics.
///
/// Chosen once at construction from `Config::verbose`; when disabled,
/// nothing is emitted from this instance regardless of the subscriber.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Diagnostics {
    verbose: bool,
}

impl Diagnostics {
    pub(crate) fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub(crate) fn info(&self, message: &str) {
        if self.verbose {
            info!("{message}");
        }
    }

    pub(crate) fn warn(&self, message: &str) {
        if self.verbose {
            warn!("{message}");
        }
    }

    pub(crate) fn error(&self, message: &str) {
        if self.verbose {
            error!("{message}");
        }
    }

    pub(crate) fn log(&self, message: &str) {
        if self.verbose {
            debug!("{message}");
        }
    }
}
