//! The constants this tool knows how to report.

use ioctl_abi::blk::BLKGETSIZE64;
use ioctl_abi::errno::{EACCES, EBADF, ENOENT};
use ioctl_abi::fcntl::{O_APPEND, O_RDONLY, O_RDWR, O_WRONLY};
use ioctl_abi::spidev::{
    spi_ioc_message, SPI_IOC_RD_BITS_PER_WORD, SPI_IOC_RD_LSB_FIRST, SPI_IOC_RD_MAX_SPEED_HZ,
    SPI_IOC_RD_MODE, SPI_IOC_RD_MODE32, SPI_IOC_WR_BITS_PER_WORD, SPI_IOC_WR_LSB_FIRST,
    SPI_IOC_WR_MAX_SPEED_HZ, SPI_IOC_WR_MODE, SPI_IOC_WR_MODE32,
};
use serde::Serialize;

/// Where a constant comes from, used to decide how it can be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstKind {
    Flag,
    Errno,
    Ioctl,
}

/// A header macro name and the value it expands to on this target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedConstant {
    pub label: &'static str,
    pub value: u32,
    pub kind: ConstKind,
}

impl NamedConstant {
    pub const fn new(label: &'static str, value: u32, kind: ConstKind) -> Self {
        Self { label, value, kind }
    }
}

/// Label a constant with its own identifier.
macro_rules! named {
    ($kind:ident, $name:ident) => {
        NamedConstant::new(stringify!($name), $name, ConstKind::$kind)
    };
}

/// Reported by default, in this order.
pub static REPORTED: [NamedConstant; 16] = [
    // fcntl.h
    named!(Flag, O_RDONLY),
    named!(Flag, O_RDWR),
    // linux/fs.h
    named!(Ioctl, BLKGETSIZE64),
    // linux/spi/spidev.h
    named!(Ioctl, SPI_IOC_RD_MODE),
    named!(Ioctl, SPI_IOC_WR_MODE),
    named!(Ioctl, SPI_IOC_RD_MODE32),
    named!(Ioctl, SPI_IOC_WR_MODE32),
    named!(Ioctl, SPI_IOC_RD_LSB_FIRST),
    named!(Ioctl, SPI_IOC_WR_LSB_FIRST),
    named!(Ioctl, SPI_IOC_RD_BITS_PER_WORD),
    named!(Ioctl, SPI_IOC_WR_BITS_PER_WORD),
    named!(Ioctl, SPI_IOC_RD_MAX_SPEED_HZ),
    named!(Ioctl, SPI_IOC_WR_MAX_SPEED_HZ),
    NamedConstant::new("SPI_IOC_MESSAGE(1)", spi_ioc_message(1), ConstKind::Ioctl),
    NamedConstant::new("SPI_IOC_MESSAGE(2)", spi_ioc_message(2), ConstKind::Ioctl),
    NamedConstant::new("SPI_IOC_MESSAGE(3)", spi_ioc_message(3), ConstKind::Ioctl),
];

/// Values the JNA spidev bindings also hard-code; only printed on request.
pub static EXTENDED: [NamedConstant; 5] = [
    named!(Flag, O_WRONLY),
    named!(Flag, O_APPEND),
    named!(Errno, ENOENT),
    named!(Errno, EBADF),
    named!(Errno, EACCES),
];

/// Find a constant by its exact label in either table.
pub fn lookup(label: &str) -> Option<&'static NamedConstant> {
    REPORTED
        .iter()
        .chain(EXTENDED.iter())
        .find(|constant| constant.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_order() {
        let labels: Vec<_> = REPORTED.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            [
                "O_RDONLY",
                "O_RDWR",
                "BLKGETSIZE64",
                "SPI_IOC_RD_MODE",
                "SPI_IOC_WR_MODE",
                "SPI_IOC_RD_MODE32",
                "SPI_IOC_WR_MODE32",
                "SPI_IOC_RD_LSB_FIRST",
                "SPI_IOC_WR_LSB_FIRST",
                "SPI_IOC_RD_BITS_PER_WORD",
                "SPI_IOC_WR_BITS_PER_WORD",
                "SPI_IOC_RD_MAX_SPEED_HZ",
                "SPI_IOC_WR_MAX_SPEED_HZ",
                "SPI_IOC_MESSAGE(1)",
                "SPI_IOC_MESSAGE(2)",
                "SPI_IOC_MESSAGE(3)",
            ]
        );
    }

    #[test]
    fn test_labels_are_unique() {
        let all: Vec<_> = REPORTED.iter().chain(EXTENDED.iter()).collect();
        for (i, a) in all.iter().enumerate() {
            assert!(!a.label.is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn test_open_flags() {
        assert_eq!(lookup("O_RDONLY").map(|c| c.value), Some(0));
        assert_eq!(lookup("O_RDWR").map(|c| c.value), Some(2));
        assert_eq!(lookup("O_WRONLY").map(|c| c.value), Some(1));
    }

    #[test]
    fn test_lookup_covers_extended() {
        let enoent = lookup("ENOENT").unwrap();
        assert_eq!(enoent.value, 2);
        assert_eq!(enoent.kind, ConstKind::Errno);
        assert!(lookup("SPI_IOC_MESSAGE(4)").is_none());
        assert!(lookup("o_rdonly").is_none());
    }

    #[test]
    fn test_message_labels_carry_argument() {
        for (n, constant) in (1..=3).zip(&REPORTED[13..]) {
            assert_eq!(constant.label, format!("SPI_IOC_MESSAGE({n})"));
            assert_eq!(constant.value, spi_ioc_message(n));
        }
    }
}
