//! devconsts - report Linux device ABI constants
//!
//! Collects open flags, block-device and spidev ioctl request codes for the
//! build target into a fixed table and renders it for humans or tools.

pub mod report;
pub mod table;

pub use report::{render_decoded, render_line, write_report, OutputFormat};
pub use table::{lookup, ConstKind, NamedConstant, EXTENDED, REPORTED};
