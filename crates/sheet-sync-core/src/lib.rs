pub mod diff;
pub mod engine;
pub mod error;
pub mod fragment;
pub mod fs;
pub mod markers;

pub use engine::{apply_sync, SyncOptions, SyncOutcome, SyncRequest};
pub use error::{ExitCode, SyncError};
pub use fragment::derive_fragment;
pub use markers::{locate_anchor, AnchorRegion};
