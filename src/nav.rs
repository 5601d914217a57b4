//! Navigation seam.

/// Moves the user to another route after a successful submission.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigator for hosts without a router: records the destination in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(%path, "navigate");
    }
}
