//! User feedback
//!
//! The registration workflow reports outcomes through a [`Notifier`] so the
//! embedding application decides how to surface them (toast, terminal, log).

/// Outcome reporting seam for workflows
pub trait Notifier: Send + Sync {
    /// A short confirmation ("Employee registered successfully")
    fn success(&self, message: &str);

    /// A failure headline with a longer description
    fn error(&self, message: &str, description: &str);
}

/// Notifier that writes to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str, description: &str) {
        tracing::error!("{}: {}", message, description);
    }
}
