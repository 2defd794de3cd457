mod dir;
mod mv;
mod write;

pub use dir::{ensure_dir, ensure_parent};
pub use mv::move_file;
pub use write::write_exact;
