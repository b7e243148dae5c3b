use std::path::PathBuf;

use thiserror::Error;

use crate::{ContentId, Edge, PaneId};

#[derive(Debug, Error)]
pub enum DockError {
    #[error("portion for {edge:?} edge must be a positive number, got {value}")]
    PortionOutOfRange { edge: Edge, value: f64 },
    #[error("index {index} is out of range for a collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("pane {0} is not part of this dock panel")]
    UnknownPane(PaneId),
    #[error("content {0} is not part of this dock panel")]
    UnknownContent(ContentId),
    #[error("failed to read {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dock configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DockError>;
