//! APB spare (APBS) block, which contains the PLL control words.
//!
//! Each PLL has three software control registers. `SWCR1` and `SWCR3` hold the opaque
//! configuration words which select the PLL frequency, `SWCR2` holds the gate bits of the fixed
//! dividers tapped off the PLL output.
use arbitrary_int::u31;
use static_assertions::const_assert_eq;

pub const APBS_BASE_ADDR: usize = 0xD409_0000;

pub const PLL1_SWCR1: u32 = 0x100;
pub const PLL1_SWCR2: u32 = 0x104;
pub const PLL1_SWCR3: u32 = 0x108;
pub const PLL2_SWCR1: u32 = 0x118;
pub const PLL2_SWCR2: u32 = 0x11C;
pub const PLL2_SWCR3: u32 = 0x120;
pub const PLL3_SWCR1: u32 = 0x124;
pub const PLL3_SWCR2: u32 = 0x128;
pub const PLL3_SWCR3: u32 = 0x12C;

const_assert_eq!(PLL1_SWCR3 - PLL1_SWCR1, 0x8);
const_assert_eq!(PLL2_SWCR3 - PLL2_SWCR1, 0x8);
const_assert_eq!(PLL3_SWCR3 - PLL3_SWCR1, 0x8);

/// PLL enable bit inside `SWCR3`.
pub const PLL_SWCR3_EN: u32 = 1 << 31;
/// Configuration part of `SWCR3`. Rate table entries only ever describe these bits.
pub const PLL_SWCR3_MASK: u32 = !PLL_SWCR3_EN;

#[bitbybit::bitfield(u32)]
#[derive(Debug, PartialEq, Eq)]
pub struct PllSwcr3 {
    /// Enabling the PLL starts the lock sequence. Lock completion is reported in
    /// [crate::mpmu::POSR].
    #[bit(31, rw)]
    enable: bool,
    #[bits(0..=30, rw)]
    config: u31,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swcr3_enable_is_split_from_config() {
        let reg = PllSwcr3::new_with_raw_value(0x330c_cccd | PLL_SWCR3_EN);
        assert!(reg.enable());
        assert_eq!(reg.config().value(), 0x330c_cccd);
        assert_eq!(reg.raw_value() & PLL_SWCR3_MASK, 0x330c_cccd);
    }

    #[test]
    fn swcr3_disable_keeps_config() {
        let reg = PllSwcr3::new_with_raw_value(0xbfe0_0000).with_enable(false);
        assert_eq!(reg.raw_value(), 0x3fe0_0000);
    }
}
