//! Store - on-disk formats
//!
//! Reading and writing both document kinds, the per-file session event
//! log, the workspace snapshot written on exit and the editor settings.

mod error;
mod file_io;
mod session_log;
mod settings;
mod snapshot;

pub use error::*;
pub use file_io::*;
pub use session_log::*;
pub use settings::*;
pub use snapshot::*;
