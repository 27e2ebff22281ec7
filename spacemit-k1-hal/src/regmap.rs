//! Register map abstraction.
//!
//! All clock nodes access their control registers through a [RegisterMap], which addresses
//! registers by their byte offset inside one register block. The hardware implementation is the
//! [MmioRegisterMap]. Any other implementation, for example an in-memory map for host tests, can be
//! used as well.
use embedded_hal::delay::DelayNs;

use crate::time::Micros;

pub trait RegisterMap {
    fn read(&self, offset: u32) -> u32;

    fn write(&self, offset: u32, value: u32);

    /// Read-modify-write which only touches the bits set in `mask`.
    fn update_bits(&self, offset: u32, mask: u32, value: u32) {
        let current = self.read(offset);
        self.write(offset, (current & !mask) | (value & mask));
    }
}

/// Memory-mapped register block.
#[derive(Debug)]
pub struct MmioRegisterMap {
    base_addr: usize,
}

impl MmioRegisterMap {
    /// Create a register map for the register block at the given base address.
    ///
    /// # Safety
    ///
    /// The base address must point to a valid, 4-byte aligned register block which stays
    /// mapped for the lifetime of the returned structure. This function also allows creating an
    /// arbitrary amount of register maps for the same block. Read-modify-write operations are
    /// only serialized against each other by a critical section, so all users of a block should
    /// go through this API.
    #[inline]
    pub const unsafe fn new_mmio_at(base_addr: usize) -> Self {
        Self { base_addr }
    }

    #[inline]
    pub const fn base_addr(&self) -> usize {
        self.base_addr
    }

    #[inline]
    fn ptr(&self, offset: u32) -> *mut u32 {
        (self.base_addr + offset as usize) as *mut u32
    }
}

impl RegisterMap for MmioRegisterMap {
    #[inline]
    fn read(&self, offset: u32) -> u32 {
        // Safety: The constructor contract guarantees a valid register block.
        unsafe { core::ptr::read_volatile(self.ptr(offset)) }
    }

    #[inline]
    fn write(&self, offset: u32, value: u32) {
        // Safety: The constructor contract guarantees a valid register block.
        unsafe { core::ptr::write_volatile(self.ptr(offset), value) }
    }

    fn update_bits(&self, offset: u32, mask: u32, value: u32) {
        critical_section::with(|_| {
            let current = self.read(offset);
            self.write(offset, (current & !mask) | (value & mask));
        });
    }
}

/// The polled condition did not become true in time. Contains the last read value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("register poll timeout, last value {0:#010x}")]
pub struct PollTimeout(pub u32);

/// Poll a register until `cond` holds for the read value.
///
/// The register is read once immediately. After that, the function waits `interval` between two
/// reads until the accumulated wait time reaches `timeout`. The read value which satisfied the
/// condition is returned.
pub fn read_poll_timeout(
    regmap: &dyn RegisterMap,
    offset: u32,
    delay: &mut impl DelayNs,
    interval: Micros,
    timeout: Micros,
    mut cond: impl FnMut(u32) -> bool,
) -> Result<u32, PollTimeout> {
    let mut waited_us: u32 = 0;
    loop {
        let value = regmap.read(offset);
        if cond(value) {
            return Ok(value);
        }
        if waited_us >= timeout.to_micros() {
            return Err(PollTimeout(value));
        }
        delay.delay_us(interval.to_micros());
        waited_us = waited_us.saturating_add(interval.to_micros());
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::clocks::testing::{CountingDelay, FakeRegisterMap, PanickingDelay};

    #[test]
    fn update_bits_only_touches_mask() {
        let regmap = FakeRegisterMap::default();
        regmap.set(0x10, 0xffff_0000);
        regmap.update_bits(0x10, 0x00f0_00f0, 0x0050_0030);
        assert_eq!(regmap.get(0x10), 0xff5f_0030);
    }

    #[test]
    fn mmio_map_accesses_memory() {
        let mut mem = [0u32; 4];
        let regmap = unsafe { MmioRegisterMap::new_mmio_at(mem.as_mut_ptr() as usize) };
        regmap.write(0x8, 0x1234_5678);
        assert_eq!(regmap.read(0x8), 0x1234_5678);
        regmap.update_bits(0x8, 0xff, 0xab);
        assert_eq!(regmap.read(0x8), 0x1234_56ab);
        assert_eq!(regmap.read(0x0), 0);
        assert_eq!(mem[2], 0x1234_56ab);
    }

    #[test]
    fn poll_returns_without_delay_when_condition_holds() {
        let regmap = FakeRegisterMap::default();
        regmap.set(0x4, 1 << 3);
        let val = read_poll_timeout(
            &regmap,
            0x4,
            &mut PanickingDelay,
            Micros::micros(5),
            Micros::micros(100),
            |val| val & (1 << 3) != 0,
        )
        .unwrap();
        assert_eq!(val, 1 << 3);
    }

    #[test]
    fn poll_times_out_after_bounded_waits() {
        let regmap = FakeRegisterMap::default();
        regmap.set(0x4, 0xdead);
        let mut delay = CountingDelay::default();
        let result = read_poll_timeout(
            &regmap,
            0x4,
            &mut delay,
            Micros::micros(5),
            Micros::micros(100),
            |val| val == 0,
        );
        assert_eq!(result, Err(PollTimeout(0xdead)));
        assert_eq!(delay.calls, 20);
        assert_eq!(delay.waited_us, 100);
    }
}
