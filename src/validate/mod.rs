//! Validation of added diff lines.
//!
//! - Scanner: marker pairing and file-context tracking over the whole diff
//! - Block validation: the confidentiality check on the first line of a block

mod block;
mod scanner;
mod types;


// Re-export public API
pub use block::{PendingLine, validate_block};
pub use scanner::{ScanOptions, scan_diff};
pub use types::{Verdict, Violation, ViolationKind};
