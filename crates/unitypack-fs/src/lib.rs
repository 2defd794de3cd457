//! Filesystem primitives used while unpacking a package.
//!
//! - `primitives/dir.rs` - Tolerant directory creation
//! - `primitives/write.rs` - Exact-size streaming writes
//! - `primitives/mv.rs` - Moves with a cross-device fallback

mod error;
mod primitives;

pub use error::{Error, Result};
pub use primitives::{ensure_dir, ensure_parent, move_file, write_exact};
