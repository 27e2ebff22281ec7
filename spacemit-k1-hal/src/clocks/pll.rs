//! PLL primitives.
//!
//! The PLL frequency is selected by writing a pair of opaque control words into `SWCR1` and
//! `SWCR3`. Only the operating points listed in the rate table of a PLL are supported.
use embedded_hal::delay::DelayNs;
use spacemit_k1::apbs::{PLL_SWCR3_EN, PLL_SWCR3_MASK, PllSwcr3};

use crate::{
    regmap::{RegisterMap, read_poll_timeout},
    time::Micros,
};

use super::{
    ClockError, TimeoutKind,
    descriptor::{PllConfig, PllRateEntry},
};

pub const PLL_LOCK_POLL_INTERVAL: Micros = Micros::micros(5);
pub const PLL_LOCK_TIMEOUT: Micros = Micros::micros(3000);

/// Table entry with the rate closest to `rate`. The first of several equally close entries wins.
pub fn best_rate_entry(table: &[PllRateEntry], rate: u64) -> Option<&PllRateEntry> {
    let mut best: Option<&PllRateEntry> = None;
    for entry in table {
        match best {
            Some(current) if entry.rate.abs_diff(rate) >= current.rate.abs_diff(rate) => (),
            _ => best = Some(entry),
        }
    }
    best
}

impl PllConfig {
    /// Entry which matches the currently programmed control words exactly.
    pub(crate) fn matched_entry(&self, regmap: &dyn RegisterMap) -> Option<&'static PllRateEntry> {
        let swcr1 = regmap.read(self.swcr1);
        let swcr3 = regmap.read(self.swcr3) & PLL_SWCR3_MASK;
        let table: &'static [PllRateEntry] = self.rate_table;
        table
            .iter()
            .find(|entry| entry.swcr1 == swcr1 && entry.swcr3 == swcr3)
    }

    pub(crate) fn rate(&self, name: &str, regmap: &dyn RegisterMap) -> u64 {
        match self.matched_entry(regmap) {
            Some(entry) => entry.rate,
            None => {
                log::warn!("{name}: unknown PLL configuration, no rate table entry matches");
                0
            }
        }
    }

    /// Program the table entry closest to `rate`. The enable bit is left untouched.
    pub(crate) fn set_rate(&self, regmap: &dyn RegisterMap, rate: u64) -> Option<u64> {
        let entry = best_rate_entry(self.rate_table, rate)?;
        self.program(regmap, entry);
        Some(entry.rate)
    }

    fn program(&self, regmap: &dyn RegisterMap, entry: &PllRateEntry) {
        regmap.write(self.swcr1, entry.swcr1);
        regmap.update_bits(self.swcr3, PLL_SWCR3_MASK, entry.swcr3);
    }

    /// Bring a PLL in an unknown state to a known operating point.
    ///
    /// A PLL whose control words match no table entry runs at an unknown rate, which is treated
    /// as 0 Hz, so the lowest rate entry gets programmed.
    pub(crate) fn init(&self, name: &str, regmap: &dyn RegisterMap) {
        if self.matched_entry(regmap).is_some() {
            return;
        }
        if let Some(entry) = best_rate_entry(self.rate_table, 0) {
            log::debug!("{name}: programming initial rate {} Hz", entry.rate);
            self.program(regmap, entry);
        }
    }

    pub(crate) fn enable(
        &self,
        name: &'static str,
        regmap: &dyn RegisterMap,
        lock_regmap: &dyn RegisterMap,
        delay: &mut impl DelayNs,
    ) -> Result<(), ClockError> {
        regmap.update_bits(self.swcr3, PLL_SWCR3_EN, PLL_SWCR3_EN);
        let lock_mask = self.lock_mask;
        read_poll_timeout(
            lock_regmap,
            self.lock_reg,
            delay,
            PLL_LOCK_POLL_INTERVAL,
            PLL_LOCK_TIMEOUT,
            |val| val & lock_mask != 0,
        )
        .map_err(|e| {
            log::debug!("{name}: {e}");
            ClockError::Timeout {
                clock: name,
                kind: TimeoutKind::PllLock,
            }
        })?;
        Ok(())
    }

    pub(crate) fn disable(&self, regmap: &dyn RegisterMap) {
        regmap.update_bits(self.swcr3, PLL_SWCR3_EN, 0);
    }

    pub(crate) fn is_enabled(&self, regmap: &dyn RegisterMap) -> bool {
        PllSwcr3::new_with_raw_value(regmap.read(self.swcr3)).enable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clocks::testing::{CountingDelay, FakeRegisterMap, PanickingDelay};

    const PLL3_TABLE: &[PllRateEntry] = &[
        PllRateEntry::new(1_600_000_000, 0x0050cd61, 0x43eaaaab),
        PllRateEntry::new(1_800_000_000, 0x0050cd61, 0x4b000000),
        PllRateEntry::new(2_000_000_000, 0x0050dd62, 0x2aeaaaab),
        PllRateEntry::new(2_457_600_000, 0x0050dd64, 0x330ccccd),
        PllRateEntry::new(3_000_000_000, 0x0050dd66, 0x3fe00000),
        PllRateEntry::new(3_200_000_000, 0x0050dd67, 0x43eaaaab),
    ];

    const PLL3: PllConfig = PllConfig::new(0x124, 0x12c, 0x10, 1 << 29, PLL3_TABLE);

    #[test]
    fn best_entry_is_nearest() {
        assert_eq!(best_rate_entry(PLL3_TABLE, 0).unwrap().rate, 1_600_000_000);
        assert_eq!(
            best_rate_entry(PLL3_TABLE, 1_890_000_000).unwrap().rate,
            1_800_000_000
        );
        assert_eq!(
            best_rate_entry(PLL3_TABLE, 2_300_000_000).unwrap().rate,
            2_457_600_000
        );
        assert_eq!(
            best_rate_entry(PLL3_TABLE, 10_000_000_000).unwrap().rate,
            3_200_000_000
        );
        assert!(best_rate_entry(&[], 1).is_none());
    }

    #[test]
    fn best_entry_exact_and_tie() {
        for entry in PLL3_TABLE {
            assert_eq!(best_rate_entry(PLL3_TABLE, entry.rate), Some(entry));
        }
        // Halfway between 1.6 GHz and 1.8 GHz, the first entry wins.
        assert_eq!(
            best_rate_entry(PLL3_TABLE, 1_700_000_000).unwrap().rate,
            1_600_000_000
        );
    }

    #[test]
    fn rate_requires_exact_match() {
        let regmap = FakeRegisterMap::default();
        assert_eq!(PLL3.rate("pll3", &regmap), 0);
        regmap.set(0x124, 0x0050dd66);
        regmap.set(0x12c, 0x3fe00000 | PLL_SWCR3_EN);
        assert_eq!(PLL3.rate("pll3", &regmap), 3_000_000_000);
        regmap.set(0x12c, 0x3fe00001);
        assert_eq!(PLL3.rate("pll3", &regmap), 0);
    }

    #[test]
    fn set_rate_keeps_enable_bit() {
        let regmap = FakeRegisterMap::default();
        regmap.set(0x12c, PLL_SWCR3_EN);
        assert_eq!(PLL3.set_rate(&regmap, 2_000_000_000), Some(2_000_000_000));
        assert_eq!(regmap.get(0x124), 0x0050dd62);
        assert_eq!(regmap.get(0x12c), 0x2aeaaaab | PLL_SWCR3_EN);
        assert!(PLL3.is_enabled(&regmap));
    }

    #[test]
    fn init_programs_lowest_entry_when_unknown() {
        let regmap = FakeRegisterMap::default();
        PLL3.init("pll3", &regmap);
        assert_eq!(PLL3.rate("pll3", &regmap), 1_600_000_000);
    }

    #[test]
    fn init_keeps_known_configuration() {
        let regmap = FakeRegisterMap::default();
        regmap.set(0x124, 0x0050dd67);
        regmap.set(0x12c, 0x43eaaaab);
        PLL3.init("pll3", &regmap);
        assert_eq!(regmap.writes(), 0);
        assert_eq!(PLL3.rate("pll3", &regmap), 3_200_000_000);
    }

    #[test]
    fn enable_waits_for_lock() {
        let regmap = FakeRegisterMap::default();
        let lock = FakeRegisterMap::default();
        lock.set(0x10, 1 << 29);
        PLL3.enable("pll3", &regmap, &lock, &mut PanickingDelay).unwrap();
        assert!(PLL3.is_enabled(&regmap));
        PLL3.disable(&regmap);
        assert!(!PLL3.is_enabled(&regmap));
    }

    #[test]
    fn enable_lock_timeout() {
        let regmap = FakeRegisterMap::default();
        let lock = FakeRegisterMap::default();
        // Lock bit of another PLL must not satisfy the poll.
        lock.set(0x10, 1 << 27);
        let mut delay = CountingDelay::default();
        let result = PLL3.enable("pll3", &regmap, &lock, &mut delay);
        assert_eq!(
            result,
            Err(ClockError::Timeout {
                clock: "pll3",
                kind: TimeoutKind::PllLock
            })
        );
        assert_eq!(delay.waited_us, 3000);
        // The enable request itself is not rolled back.
        assert!(PLL3.is_enabled(&regmap));
    }
}
