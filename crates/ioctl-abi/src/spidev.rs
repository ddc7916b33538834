//! User-space SPI device interface (`linux/spi/spidev.h`).
//!
//! The `RD` requests read the current setting from the controller, `WR`
//! requests change it. Transfers are batched through [`spi_ioc_message`].

use core::mem::size_of;

use crate::ioctl::{ior, iow, Layout};

/// ioctl type shared by every spidev request.
pub const SPI_IOC_MAGIC: u8 = b'k';

/// One segment of a full-duplex transfer (`struct spi_ioc_transfer`).
///
/// Buffers are passed as `u64` so 32-bit user space talks to a 64-bit kernel
/// with the same layout.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpiIocTransfer {
    pub tx_buf: u64,
    pub rx_buf: u64,
    pub len: u32,
    pub speed_hz: u32,
    pub delay_usecs: u16,
    pub bits_per_word: u8,
    pub cs_change: u8,
    pub tx_nbits: u8,
    pub rx_nbits: u8,
    pub word_delay_usecs: u8,
    pub pad: u8,
}

/// Argument size for a batch of `n` transfers (`SPI_MSGSIZE`).
///
/// Batches that do not fit the size field encode as 0, which the driver
/// rejects.
pub const fn spi_msgsize(n: u32) -> u32 {
    spi_msgsize_for(&Layout::TARGET, n)
}

/// [`spi_msgsize`] for an explicit ioctl layout.
pub const fn spi_msgsize_for(layout: &Layout, n: u32) -> u32 {
    let bytes = n as u64 * size_of::<SpiIocTransfer>() as u64;
    if bytes < (1u64 << layout.size_bits) {
        bytes as u32
    } else {
        0
    }
}

/// `SPI_IOC_MESSAGE(n)`: submit `n` chained transfers.
pub const fn spi_ioc_message(n: u32) -> u32 {
    spi_ioc_message_for(&Layout::TARGET, n)
}

pub const fn spi_ioc_message_for(layout: &Layout, n: u32) -> u32 {
    layout.iow_size(SPI_IOC_MAGIC, 0, spi_msgsize_for(layout, n))
}

// Clock phase/polarity and other SPI_MODE_* bits, 8 bit view
pub const SPI_IOC_RD_MODE: u32 = ior::<u8>(SPI_IOC_MAGIC, 1);
pub const SPI_IOC_WR_MODE: u32 = iow::<u8>(SPI_IOC_MAGIC, 1);

// Bit order, zero is MSB first
pub const SPI_IOC_RD_LSB_FIRST: u32 = ior::<u8>(SPI_IOC_MAGIC, 2);
pub const SPI_IOC_WR_LSB_FIRST: u32 = iow::<u8>(SPI_IOC_MAGIC, 2);

// Word size, zero means 8 bits
pub const SPI_IOC_RD_BITS_PER_WORD: u32 = ior::<u8>(SPI_IOC_MAGIC, 3);
pub const SPI_IOC_WR_BITS_PER_WORD: u32 = iow::<u8>(SPI_IOC_MAGIC, 3);

// Default max clock in Hz
pub const SPI_IOC_RD_MAX_SPEED_HZ: u32 = ior::<u32>(SPI_IOC_MAGIC, 4);
pub const SPI_IOC_WR_MAX_SPEED_HZ: u32 = iow::<u32>(SPI_IOC_MAGIC, 4);

// Full 32 bit mode word
pub const SPI_IOC_RD_MODE32: u32 = ior::<u32>(SPI_IOC_MAGIC, 5);
pub const SPI_IOC_WR_MODE32: u32 = iow::<u32>(SPI_IOC_MAGIC, 5);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ioctl::{Direction, IoctlCode, SIZE_BITS};

    #[test]
    fn test_transfer_layout() {
        assert_eq!(size_of::<SpiIocTransfer>(), 32);
    }

    #[test]
    fn test_msgsize() {
        assert_eq!(spi_msgsize(0), 0);
        assert_eq!(spi_msgsize(1), 32);
        assert_eq!(spi_msgsize(3), 96);
        // 1 << SIZE_BITS bytes no longer fit
        assert_eq!(spi_msgsize((1 << SIZE_BITS) / 32), 0);
    }

    #[test]
    fn test_message_encodes_batch_size() {
        for n in 1..=3 {
            let code = IoctlCode::decode(spi_ioc_message(n));
            assert_eq!(code.direction(), Some(Direction::Write));
            assert_eq!(code.ty, u32::from(SPI_IOC_MAGIC));
            assert_eq!(code.nr, 0);
            assert_eq!(code.size, n * 32);
        }
    }

    #[test]
    fn test_read_write_pairs_differ_only_in_direction() {
        let pairs = [
            (SPI_IOC_RD_MODE, SPI_IOC_WR_MODE),
            (SPI_IOC_RD_LSB_FIRST, SPI_IOC_WR_LSB_FIRST),
            (SPI_IOC_RD_BITS_PER_WORD, SPI_IOC_WR_BITS_PER_WORD),
            (SPI_IOC_RD_MAX_SPEED_HZ, SPI_IOC_WR_MAX_SPEED_HZ),
            (SPI_IOC_RD_MODE32, SPI_IOC_WR_MODE32),
        ];
        for (rd, wr) in pairs {
            let rd = IoctlCode::decode(rd);
            let wr = IoctlCode::decode(wr);
            assert_eq!(rd.direction(), Some(Direction::Read));
            assert_eq!(wr.direction(), Some(Direction::Write));
            assert_eq!((rd.ty, rd.nr, rd.size), (wr.ty, wr.nr, wr.size));
        }
    }

    #[test]
    fn test_msgsize_follows_layout_size_field() {
        // 256 transfers fill 8 KiB: fits 14 size bits, not 13
        assert_eq!(spi_msgsize_for(&Layout::GENERIC, 256), 8192);
        assert_eq!(spi_msgsize_for(&Layout::POWERPC, 256), 0);
    }

    #[test]
    fn test_powerpc_values() {
        let ppc = Layout::POWERPC;
        assert_eq!(ppc.ior::<u8>(SPI_IOC_MAGIC, 1), 0x4001_6b01);
        assert_eq!(ppc.iow::<u8>(SPI_IOC_MAGIC, 1), 0x8001_6b01);
        assert_eq!(spi_ioc_message_for(&ppc, 1), 0x8020_6b00);
        assert_eq!(spi_ioc_message_for(&ppc, 3), 0x8060_6b00);
    }

    #[test]
    fn test_generic_values() {
        let generic = Layout::GENERIC;
        assert_eq!(generic.ior::<u32>(SPI_IOC_MAGIC, 5), 0x8004_6b05);
        assert_eq!(spi_ioc_message_for(&generic, 1), 0x4020_6b00);
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm"))]
    #[test]
    fn test_known_values() {
        assert_eq!(SPI_IOC_RD_MODE32, 0x8004_6b05);
        assert_eq!(SPI_IOC_WR_MAX_SPEED_HZ, 0x4004_6b04);
        assert_eq!(spi_ioc_message(1), 0x4020_6b00);
        assert_eq!(spi_ioc_message(2), 0x4040_6b00);
        assert_eq!(spi_ioc_message(3), 0x4060_6b00);
    }
}
