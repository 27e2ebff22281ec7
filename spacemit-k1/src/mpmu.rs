//! Main PMU (MPMU) block.
//!
//! Besides the low speed clock taps, this block contains the lock status of the PLLs which
//! are configured in the [crate::apbs] block.

pub const MPMU_BASE_ADDR: usize = 0xD405_0000;

/// PLL and oscillator status register.
pub const POSR: u32 = 0x0010;
pub const POSR_PLL1_LOCK: u32 = 1 << 27;
pub const POSR_PLL2_LOCK: u32 = 1 << 28;
pub const POSR_PLL3_LOCK: u32 = 1 << 29;

#[bitbybit::bitfield(u32)]
#[derive(Debug, PartialEq, Eq)]
pub struct Posr {
    #[bit(29, r)]
    pll3_lock: bool,
    #[bit(28, r)]
    pll2_lock: bool,
    #[bit(27, r)]
    pll1_lock: bool,
}

/// Frequency change control register.
pub const FCCR: u32 = 0x0008;
/// Slow UART clock control register.
pub const SUCCR: u32 = 0x0014;
/// I2S clock control register.
pub const ISCCR: u32 = 0x0044;
/// Watchdog timer clock control register.
pub const WDTPCR: u32 = 0x0200;
pub const RIPCCR: u32 = 0x0210;
/// Application clock gate register.
pub const ACGR: u32 = 0x1024;
/// APB clock select register.
pub const APBCSCR: u32 = 0x1050;
/// Second slow UART clock control register.
pub const SUCCR_1: u32 = 0x10B0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_masks_match_status_bits() {
        let posr = Posr::new_with_raw_value(POSR_PLL2_LOCK);
        assert!(posr.pll2_lock());
        assert!(!posr.pll1_lock());
        assert!(!posr.pll3_lock());
        let posr = Posr::new_with_raw_value(POSR_PLL1_LOCK | POSR_PLL3_LOCK);
        assert!(posr.pll1_lock());
        assert!(posr.pll3_lock());
    }
}
