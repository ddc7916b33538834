//! Linux kernel ABI definitions for device access from user space.
//!
//! Everything here is a `const` computed at build time for the compile
//! target: open flags and errno values come from linux-raw-sys, ioctl
//! request codes are built with the kernel's `_IOC` encoding so they follow
//! the target's field layout.

#![cfg_attr(not(test), no_std)]

pub mod blk;
pub mod errno;
pub mod fcntl;
pub mod ioctl;
pub mod spidev;

pub use ioctl::{Direction, IoctlCode, Layout};
