//! Gate, factor, divider and mux primitives.
use embedded_hal::delay::DelayNs;

use crate::{
    regmap::{RegisterMap, read_poll_timeout},
    time::Micros,
};

use super::{ClockError, TimeoutKind, descriptor::MixConfig};

pub const FC_POLL_INTERVAL: Micros = Micros::micros(5);
pub const FC_TIMEOUT: Micros = Micros::micros(10_000);

/// Result of the best-fit search for a target rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixSelection {
    /// Parent slot, as index into the parent list of the clock.
    pub parent: usize,
    /// Division ratio, starting at 1.
    pub div: u32,
    pub rate: u64,
}

#[inline]
const fn div_round_closest(dividend: u64, divisor: u64) -> u64 {
    (dividend + divisor / 2) / divisor
}

impl MixConfig {
    pub(crate) fn gate_enable(&self, regmap: &dyn RegisterMap) {
        if let Some(gate) = self.gate {
            regmap.update_bits(self.ctrl, gate.mask, gate.mask);
        }
    }

    pub(crate) fn gate_disable(&self, regmap: &dyn RegisterMap) {
        if let Some(gate) = self.gate {
            regmap.update_bits(self.ctrl, gate.mask, 0);
        }
    }

    /// [None] if the clock has no gate of its own.
    pub(crate) fn gate_is_enabled(&self, regmap: &dyn RegisterMap) -> Option<bool> {
        self.gate
            .map(|gate| regmap.read(self.ctrl) & gate.mask == gate.mask)
    }

    /// Active parent slot.
    ///
    /// A mux field value outside of the parent list selects the first parent.
    pub(crate) fn parent_index(
        &self,
        name: &str,
        regmap: &dyn RegisterMap,
        num_parents: usize,
    ) -> usize {
        let Some(mux) = self.mux else {
            return 0;
        };
        let index = mux.extract(regmap.read(self.ctrl)) as usize;
        if index >= num_parents {
            log::warn!(
                "{name}: mux value {index} out of range for {num_parents} parents, using parent 0"
            );
            return 0;
        }
        index
    }

    /// Current divider ratio, 1 if there is no divider.
    pub(crate) fn div_ratio(&self, regmap: &dyn RegisterMap) -> u32 {
        self.div
            .map(|div| div.extract(regmap.read(self.ctrl)) + 1)
            .unwrap_or(1)
    }

    pub(crate) fn recalc_rate(&self, regmap: &dyn RegisterMap, parent_rate: u64) -> u64 {
        if let Some(factor) = self.factor {
            if factor.div == 0 {
                return 0;
            }
            return parent_rate * factor.mul as u64 / factor.div as u64;
        }
        parent_rate.div_ceil(self.div_ratio(regmap) as u64)
    }

    /// Exhaustive search over all candidate parents and divider values.
    ///
    /// `candidates` contains the parent slots with their current rate. Every divider value from 1
    /// to `2^width` is tried for every candidate. On equal distance to the target, the earlier
    /// candidate and the smaller divider win. An exact match ends the search.
    pub fn best_fit(&self, target: u64, candidates: &[(usize, u64)]) -> Option<MixSelection> {
        let max_div = self.div.map(|div| div.max_value() + 1).unwrap_or(1);
        let mut best: Option<MixSelection> = None;
        for &(parent, parent_rate) in candidates {
            for div in 1..=max_div {
                let rate = div_round_closest(parent_rate, div as u64);
                if best.is_none_or(|b| rate.abs_diff(target) < b.rate.abs_diff(target)) {
                    best = Some(MixSelection { parent, div, rate });
                }
                if rate == target {
                    return best;
                }
            }
        }
        best
    }

    /// Write mux and divider fields of a selection with one read-modify-write.
    pub(crate) fn apply(&self, regmap: &dyn RegisterMap, selection: &MixSelection) {
        let mut mask = 0;
        let mut value = 0;
        if let Some(mux) = self.mux {
            mask |= mux.mask();
            value |= mux.prepare(selection.parent as u32);
        }
        if let Some(div) = self.div {
            mask |= div.mask();
            value |= div.prepare(selection.div - 1);
        }
        if mask != 0 {
            regmap.update_bits(self.ctrl, mask, value);
        }
    }

    pub(crate) fn select_parent(&self, regmap: &dyn RegisterMap, index: usize) {
        if let Some(mux) = self.mux {
            regmap.update_bits(self.ctrl, mux.mask(), mux.prepare(index as u32));
        }
    }

    /// Request the hardware to apply new divider or mux settings and wait until it is done.
    ///
    /// Does nothing for clocks without frequency change bits.
    pub(crate) fn trigger_fc(
        &self,
        name: &'static str,
        regmap: &dyn RegisterMap,
        delay: &mut impl DelayNs,
    ) -> Result<(), ClockError> {
        let Some(fc) = self.fc else {
            return Ok(());
        };
        regmap.update_bits(fc.reg, fc.mask, fc.mask);
        read_poll_timeout(
            regmap,
            fc.reg,
            delay,
            FC_POLL_INTERVAL,
            FC_TIMEOUT,
            |val| val & fc.mask == 0,
        )
        .map_err(|e| {
            log::debug!("{name}: frequency change not acknowledged, {e}");
            ClockError::Timeout {
                clock: name,
                kind: TimeoutKind::FrequencyChange,
            }
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clocks::testing::{CountingDelay, FakeRegisterMap, PanickingDelay};

    const SDH0: MixConfig = MixConfig::new(0x54)
        .with_div(8, 3)
        .with_fc(0x54, 1 << 11)
        .with_mux(5, 3)
        .with_gate(1 << 4);

    #[test]
    fn divider_best_fit_example() {
        let div = MixConfig::new(0x10).with_div(0, 3);
        let selection = div.best_fit(100_000_000, &[(0, 409_600_000)]).unwrap();
        assert_eq!(
            selection,
            MixSelection {
                parent: 0,
                div: 4,
                rate: 102_400_000
            }
        );
    }

    #[test]
    fn best_fit_is_minimal_over_search_space() {
        let candidates = [(0, 409_600_000), (1, 614_400_000), (2, 47_260_000), (3, 819_200_000)];
        for target in [1_000_000u64, 52_000_000, 200_000_000, 375_000_000, 900_000_000] {
            let best = SDH0.best_fit(target, &candidates).unwrap();
            for &(parent, parent_rate) in &candidates {
                for div in 1..=8u64 {
                    let rate = div_round_closest(parent_rate, div);
                    let delta = rate.abs_diff(target);
                    assert!(delta >= best.rate.abs_diff(target));
                    if delta == best.rate.abs_diff(target) {
                        assert!((parent, div as u32) >= (best.parent, best.div));
                    }
                }
            }
        }
    }

    #[test]
    fn best_fit_tie_keeps_first_candidate() {
        let mux = MixConfig::new(0x0).with_mux(0, 2);
        let selection = mux
            .best_fit(100, &[(0, 90), (1, 110), (2, 100), (3, 100)])
            .unwrap();
        assert_eq!(selection.parent, 2);
        let selection = mux.best_fit(100, &[(0, 90), (1, 110)]).unwrap();
        assert_eq!(selection.parent, 0);
        assert!(mux.best_fit(100, &[]).is_none());
    }

    #[test]
    fn divider_decode_rounds_up() {
        let regmap = FakeRegisterMap::default();
        let div = MixConfig::new(0x10).with_div(4, 2);
        regmap.set(0x10, 2 << 4);
        assert_eq!(div.div_ratio(&regmap), 3);
        assert_eq!(div.recalc_rate(&regmap, 100), 34);
        let factor = MixConfig::factor(16, 3);
        assert_eq!(factor.recalc_rate(&regmap, 2_457_600_000 / 8), 57_600_000);
    }

    #[test]
    fn mux_out_of_range_uses_first_parent() {
        let regmap = FakeRegisterMap::default();
        let mux = MixConfig::new(0x20).with_mux(4, 3);
        regmap.set(0x20, 2 << 4);
        assert_eq!(mux.parent_index("mux", &regmap, 2), 0);
        assert_eq!(mux.parent_index("mux", &regmap, 3), 2);
        regmap.set(0x20, 1 << 4);
        assert_eq!(mux.parent_index("mux", &regmap, 2), 1);
    }

    #[test]
    fn apply_writes_both_fields_once() {
        let regmap = FakeRegisterMap::default();
        regmap.set(0x54, 0xffff_f01f);
        SDH0.apply(
            &regmap,
            &MixSelection {
                parent: 1,
                div: 2,
                rate: 0,
            },
        );
        assert_eq!(regmap.writes(), 1);
        assert_eq!(regmap.get(0x54), 0xffff_f13f);
        assert_eq!(SDH0.parent_index("sdh0", &regmap, 7), 1);
        assert_eq!(SDH0.div_ratio(&regmap), 2);
    }

    #[test]
    fn gate_uses_whole_mask() {
        let regmap = FakeRegisterMap::default();
        let gate = MixConfig::new(0x0).with_gate(0b11);
        regmap.set(0x0, 0b01);
        assert_eq!(gate.gate_is_enabled(&regmap), Some(false));
        gate.gate_enable(&regmap);
        assert_eq!(gate.gate_is_enabled(&regmap), Some(true));
        gate.gate_disable(&regmap);
        assert_eq!(regmap.get(0x0), 0);
        assert_eq!(MixConfig::factor(2, 1).gate_is_enabled(&regmap), None);
    }

    #[test]
    fn fc_acknowledged() {
        let regmap = FakeRegisterMap::default();
        regmap.self_clearing(0x54, 1 << 11);
        SDH0.trigger_fc("sdh0", &regmap, &mut PanickingDelay).unwrap();
        assert_eq!(regmap.writes(), 1);
    }

    #[test]
    fn fc_timeout() {
        let regmap = FakeRegisterMap::default();
        let mut delay = CountingDelay::default();
        assert_eq!(
            SDH0.trigger_fc("sdh0", &regmap, &mut delay),
            Err(ClockError::Timeout {
                clock: "sdh0",
                kind: TimeoutKind::FrequencyChange
            })
        );
        assert_eq!(delay.waited_us, 10_000);
        assert_ne!(regmap.get(0x54) & (1 << 11), 0);
    }

    #[test]
    fn no_fc_is_no_op() {
        let regmap = FakeRegisterMap::default();
        let div = MixConfig::new(0x388).with_div(1, 2);
        div.trigger_fc("div", &regmap, &mut PanickingDelay).unwrap();
        assert_eq!(regmap.writes(), 0);
        assert_eq!(regmap.reads(), 0);
    }
}
