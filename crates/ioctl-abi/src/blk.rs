//! Block-device requests (`linux/fs.h`).

/// Size of the device in bytes.
///
/// The header declares the argument as `size_t` although the kernel always
/// writes a `u64`; the encoded size therefore follows the target's pointer
/// width.
pub use linux_raw_sys::ioctl::BLKGETSIZE64;
