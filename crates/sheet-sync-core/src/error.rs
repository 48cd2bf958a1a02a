use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    MissingAnchor = 1,
    InvalidArguments = 2,
    Io = 3,
}

impl ExitCode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            1 => Some(Self::MissingAnchor),
            2 => Some(Self::InvalidArguments),
            3 => Some(Self::Io),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("could not find {marker} marker in the preview file")]
    MissingAnchor { marker: &'static str },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SyncError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingAnchor { .. } => ExitCode::MissingAnchor,
            Self::Io(_) => ExitCode::Io,
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
