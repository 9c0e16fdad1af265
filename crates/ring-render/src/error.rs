use std::path::PathBuf;

use ring_types::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ring configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("ring {0} does not exist; expected 1 or 2")]
    UnknownRing(u32),
}
