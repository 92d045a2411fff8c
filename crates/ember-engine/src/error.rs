use thiserror::Error;

/// Failures surfaced by [`crate::window::Window`].
///
/// Environment problems (`InvalidConfig`, `Context`, `Platform`) are kept apart
/// from application problems (`Init`, `Callback`) so callers can tell a driver
/// or display issue from a bug in their own hook.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("invalid window configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to create window or graphics context: {0:#}")]
    Context(anyhow::Error),

    #[error("application init failed: {0:#}")]
    Init(anyhow::Error),

    #[error("application callback failed: {0:#}")]
    Callback(anyhow::Error),

    #[error("platform failure in frame loop: {0:#}")]
    Platform(anyhow::Error),

    #[error("window loop has already run")]
    AlreadyRan,
}
