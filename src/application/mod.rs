// Application layer - the narrow interface any front end (CLI, TUI, API)
// calls into. Keeps the committee state machine free of I/O concerns.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
