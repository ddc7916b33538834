//! File-open flags (`fcntl.h`).
//!
//! Re-exported directly from linux-raw-sys so the values always match the
//! target's kernel ABI.

pub use linux_raw_sys::general::{O_APPEND, O_RDONLY, O_RDWR, O_WRONLY};
