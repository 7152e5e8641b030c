// Every variant states *where* things went wrong. Configuration problems are
// raised before the animation loop starts; the steady-state tick/draw path has
// no failure modes of its own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] image::ImageError),
}
