//! Error numbers reported by the `open`/`ioctl` paths of device access.

pub use linux_raw_sys::errno::{EACCES, EBADF, ENOENT};
