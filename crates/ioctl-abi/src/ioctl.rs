//! Linux ioctl request-code encoding.
//!
//! A request code packs four fields into 32 bits, low bits first:
//!
//! | field | generic width | powerpc/mips/sparc width |
//! |-------|---------------|--------------------------|
//! | nr    | 8             | 8                        |
//! | type  | 8             | 8                        |
//! | size  | 14            | 13                       |
//! | dir   | 2             | 3                        |
//!
//! The direction values also differ between the two families. [`Layout`]
//! describes one family; the free functions encode for [`Layout::TARGET`].

use core::fmt;
use core::mem::size_of;

pub const NR_BITS: u32 = 8;
pub const TYPE_BITS: u32 = 8;

pub const NR_SHIFT: u32 = 0;
pub const TYPE_SHIFT: u32 = NR_SHIFT + NR_BITS;
pub const SIZE_SHIFT: u32 = TYPE_SHIFT + TYPE_BITS;

const fn mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

/// Field widths and direction values of one architecture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size_bits: u32,
    pub dir_bits: u32,
    pub none: u32,
    pub read: u32,
    pub write: u32,
}

impl Layout {
    /// `asm-generic/ioctl.h`: x86, arm, aarch64, riscv, loongarch, s390x.
    pub const GENERIC: Self = Self {
        size_bits: 14,
        dir_bits: 2,
        none: 0,
        write: 1,
        read: 2,
    };

    /// powerpc, shared by mips and sparc.
    pub const POWERPC: Self = Self {
        size_bits: 13,
        dir_bits: 3,
        none: 1,
        read: 2,
        write: 4,
    };

    #[cfg(any(
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "mips32r6",
        target_arch = "mips64r6",
        target_arch = "sparc",
        target_arch = "sparc64",
    ))]
    pub const TARGET: Self = Self::POWERPC;

    #[cfg(not(any(
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "mips32r6",
        target_arch = "mips64r6",
        target_arch = "sparc",
        target_arch = "sparc64",
    )))]
    pub const TARGET: Self = Self::GENERIC;

    pub const fn dir_shift(&self) -> u32 {
        SIZE_SHIFT + self.size_bits
    }

    /// Largest argument size a request code can carry.
    pub const fn size_max(&self) -> u32 {
        mask(self.size_bits)
    }

    /// Pack the four fields into a request code (`_IOC`).
    pub const fn ioc(&self, dir: u32, ty: u32, nr: u32, size: u32) -> u32 {
        ((dir & mask(self.dir_bits)) << self.dir_shift())
            | ((size & mask(self.size_bits)) << SIZE_SHIFT)
            | ((ty & mask(TYPE_BITS)) << TYPE_SHIFT)
            | ((nr & mask(NR_BITS)) << NR_SHIFT)
    }

    pub const fn io(&self, ty: u8, nr: u8) -> u32 {
        self.ioc(self.none, ty as u32, nr as u32, 0)
    }

    pub const fn ior_size(&self, ty: u8, nr: u8, size: u32) -> u32 {
        self.ioc(self.read, ty as u32, nr as u32, size)
    }

    pub const fn iow_size(&self, ty: u8, nr: u8, size: u32) -> u32 {
        self.ioc(self.write, ty as u32, nr as u32, size)
    }

    pub const fn ior<T>(&self, ty: u8, nr: u8) -> u32 {
        self.ior_size(ty, nr, size_of::<T>() as u32)
    }

    pub const fn iow<T>(&self, ty: u8, nr: u8) -> u32 {
        self.iow_size(ty, nr, size_of::<T>() as u32)
    }

    pub const fn iowr<T>(&self, ty: u8, nr: u8) -> u32 {
        self.ioc(
            self.read | self.write,
            ty as u32,
            nr as u32,
            size_of::<T>() as u32,
        )
    }

    pub const fn decode(&self, code: u32) -> IoctlCode {
        IoctlCode {
            dir: (code >> self.dir_shift()) & mask(self.dir_bits),
            ty: (code >> TYPE_SHIFT) & mask(TYPE_BITS),
            nr: (code >> NR_SHIFT) & mask(NR_BITS),
            size: (code >> SIZE_SHIFT) & mask(self.size_bits),
        }
    }

    pub const fn encode(&self, code: &IoctlCode) -> u32 {
        self.ioc(code.dir, code.ty, code.nr, code.size)
    }

    pub const fn dir_value(&self, dir: Direction) -> u32 {
        match dir {
            Direction::None => self.none,
            Direction::Read => self.read,
            Direction::Write => self.write,
            Direction::ReadWrite => self.read | self.write,
        }
    }

    /// Returns `None` for bit patterns this layout does not define.
    pub const fn direction(&self, bits: u32) -> Option<Direction> {
        if bits == self.none {
            Some(Direction::None)
        } else if bits == self.read {
            Some(Direction::Read)
        } else if bits == self.write {
            Some(Direction::Write)
        } else if bits == self.read | self.write {
            Some(Direction::ReadWrite)
        } else {
            None
        }
    }
}

pub const SIZE_BITS: u32 = Layout::TARGET.size_bits;
pub const DIR_BITS: u32 = Layout::TARGET.dir_bits;
pub const DIR_SHIFT: u32 = Layout::TARGET.dir_shift();

/// Direction bits: no data transfer.
pub const IOC_NONE: u32 = Layout::TARGET.none;
/// Direction bits: kernel writes into the user buffer.
pub const IOC_READ: u32 = Layout::TARGET.read;
/// Direction bits: kernel reads from the user buffer.
pub const IOC_WRITE: u32 = Layout::TARGET.write;

/// Largest argument size a request code can carry on this target.
pub const SIZE_MAX: u32 = Layout::TARGET.size_max();

#[inline]
pub const fn ioc(dir: u32, ty: u32, nr: u32, size: u32) -> u32 {
    Layout::TARGET.ioc(dir, ty, nr, size)
}

/// `_IO`: request without an argument.
#[inline]
pub const fn io(ty: u8, nr: u8) -> u32 {
    Layout::TARGET.io(ty, nr)
}

/// `_IOR` with an explicit argument size.
#[inline]
pub const fn ior_size(ty: u8, nr: u8, size: u32) -> u32 {
    Layout::TARGET.ior_size(ty, nr, size)
}

/// `_IOW` with an explicit argument size.
#[inline]
pub const fn iow_size(ty: u8, nr: u8, size: u32) -> u32 {
    Layout::TARGET.iow_size(ty, nr, size)
}

/// `_IOR(ty, nr, T)`
#[inline]
pub const fn ior<T>(ty: u8, nr: u8) -> u32 {
    Layout::TARGET.ior::<T>(ty, nr)
}

/// `_IOW(ty, nr, T)`
#[inline]
pub const fn iow<T>(ty: u8, nr: u8) -> u32 {
    Layout::TARGET.iow::<T>(ty, nr)
}

/// `_IOWR(ty, nr, T)`
#[inline]
pub const fn iowr<T>(ty: u8, nr: u8) -> u32 {
    Layout::TARGET.iowr::<T>(ty, nr)
}

/// Data-transfer direction of a request, seen from user space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    None,
    Read,
    Write,
    ReadWrite,
}

impl Direction {
    /// Direction bits on this target.
    pub const fn bits(self) -> u32 {
        Layout::TARGET.dir_value(self)
    }

    pub const fn from_bits(bits: u32) -> Option<Self> {
        Layout::TARGET.direction(bits)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "read-write",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request code split back into its fields (`_IOC_DIR`, `_IOC_TYPE`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoctlCode {
    pub dir: u32,
    pub ty: u32,
    pub nr: u32,
    pub size: u32,
}

impl IoctlCode {
    pub const fn decode(code: u32) -> Self {
        Layout::TARGET.decode(code)
    }

    pub const fn encode(&self) -> u32 {
        Layout::TARGET.encode(self)
    }

    pub const fn direction(&self) -> Option<Direction> {
        Layout::TARGET.direction(self.dir)
    }
}
