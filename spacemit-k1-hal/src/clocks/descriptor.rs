//! Static clock descriptors.
//!
//! A [ClockDescriptor] is immutable data which fully describes one clock of a clock controller
//! block: its binding index, its name, the names of its candidate parents and the register
//! geometry of its hardware. Parents are referenced by name so a table can name clocks of other
//! blocks which are registered later.
use arbitrary_int::u5;

/// Clock controller blocks of the K1. Each block has its own clock table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, num_enum::TryFromPrimitive, num_enum::IntoPrimitive,
)]
#[repr(u8)]
pub enum Domain {
    /// APBS block which contains the PLLs.
    Pll = 0,
    Mpmu = 1,
    Apbc = 2,
    Apmu = 3,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Pll, Domain::Mpmu, Domain::Apbc, Domain::Apmu];

    /// Offset added to the clock index to form the global numeric clock ID.
    #[inline]
    pub const fn id_offset(&self) -> u32 {
        (*self as u32 + 1) * 100
    }
}

/// Global numeric clock ID, consisting of the domain and the clock index inside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockId {
    domain: Domain,
    index: u32,
}

impl ClockId {
    #[inline]
    pub const fn new(domain: Domain, index: u32) -> Self {
        Self { domain, index }
    }

    #[inline]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn raw(&self) -> u32 {
        self.domain.id_offset() + self.index
    }

    /// Split a raw ID into domain and index.
    ///
    /// Indices of 100 or above alias the ID range of the next domain and always decode as
    /// belonging to that next domain.
    pub fn from_raw(raw: u32) -> Option<Self> {
        let domain_raw = (raw / 100).checked_sub(1)?;
        let domain = Domain::try_from(u8::try_from(domain_raw).ok()?).ok()?;
        Some(Self {
            domain,
            index: raw % 100,
        })
    }
}

/// Register bit field described by shift and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    shift: u5,
    width: u5,
}

impl FieldConfig {
    /// Panics at compile-time when used in a constant with a shift or width above 31.
    #[inline]
    pub const fn new(shift: u8, width: u8) -> Self {
        Self {
            shift: u5::new(shift),
            width: u5::new(width),
        }
    }

    #[inline]
    pub const fn shift(&self) -> u8 {
        self.shift.value()
    }

    #[inline]
    pub const fn width(&self) -> u8 {
        self.width.value()
    }

    /// Largest raw value of the field.
    #[inline]
    pub const fn max_value(&self) -> u32 {
        (1 << self.width.value()) - 1
    }

    /// Field mask at its register position.
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.max_value() << self.shift.value()
    }

    #[inline]
    pub const fn extract(&self, reg: u32) -> u32 {
        (reg >> self.shift.value()) & self.max_value()
    }

    /// Shift a raw value to its register position. Excess bits are discarded.
    #[inline]
    pub const fn prepare(&self, value: u32) -> u32 {
        (value & self.max_value()) << self.shift.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// All bits of the mask are set to enable the clock.
    pub mask: u32,
}

/// Fixed ratio `mul / div` relative to the parent rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorConfig {
    pub div: u32,
    pub mul: u32,
}

/// Frequency change request bits.
///
/// Setting the mask requests the hardware to apply a new divider or mux setting. The hardware
/// clears the bits again once the new setting is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FcConfig {
    pub reg: u32,
    pub mask: u32,
}

/// One characterized PLL operating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PllRateEntry {
    pub rate: u64,
    pub swcr1: u32,
    /// Configuration part of `SWCR3`, without the enable bit.
    pub swcr3: u32,
}

impl PllRateEntry {
    pub const fn new(rate: u64, swcr1: u32, swcr3: u32) -> Self {
        Self { rate, swcr1, swcr3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PllConfig {
    pub swcr1: u32,
    pub swcr3: u32,
    /// Lock status register inside the lock register map.
    pub lock_reg: u32,
    pub lock_mask: u32,
    pub rate_table: &'static [PllRateEntry],
}

impl PllConfig {
    pub const fn new(
        swcr1: u32,
        swcr3: u32,
        lock_reg: u32,
        lock_mask: u32,
        rate_table: &'static [PllRateEntry],
    ) -> Self {
        Self {
            swcr1,
            swcr3,
            lock_reg,
            lock_mask,
            rate_table,
        }
    }
}

/// Composition of gate, factor, divider and mux sharing one control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixConfig {
    pub ctrl: u32,
    pub gate: Option<GateConfig>,
    pub factor: Option<FactorConfig>,
    pub div: Option<FieldConfig>,
    pub mux: Option<FieldConfig>,
    /// [None] if divider or mux changes take effect without a frequency change request.
    pub fc: Option<FcConfig>,
}

impl MixConfig {
    pub const fn new(ctrl: u32) -> Self {
        Self {
            ctrl,
            gate: None,
            factor: None,
            div: None,
            mux: None,
            fc: None,
        }
    }

    /// Pure fixed factor without any register.
    pub const fn factor(div: u32, mul: u32) -> Self {
        Self::new(0).with_factor(div, mul)
    }

    pub const fn with_gate(mut self, mask: u32) -> Self {
        self.gate = Some(GateConfig { mask });
        self
    }

    pub const fn with_factor(mut self, div: u32, mul: u32) -> Self {
        self.factor = Some(FactorConfig { div, mul });
        self
    }

    pub const fn with_div(mut self, shift: u8, width: u8) -> Self {
        self.div = Some(FieldConfig::new(shift, width));
        self
    }

    pub const fn with_mux(mut self, shift: u8, width: u8) -> Self {
        self.mux = Some(FieldConfig::new(shift, width));
        self
    }

    pub const fn with_fc(mut self, reg: u32, mask: u32) -> Self {
        self.fc = Some(FcConfig { reg, mask });
        self
    }
}

/// Fractional divider: `rate = parent_rate * den / (pre_div * num)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdnConfig {
    pub ctrl: u32,
    pub num: FieldConfig,
    pub den: FieldConfig,
    pub pre_div: u32,
}

impl DdnConfig {
    pub const fn new(ctrl: u32, num: FieldConfig, den: FieldConfig, pre_div: u32) -> Self {
        Self {
            ctrl,
            num,
            den,
            pre_div,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockHw {
    Pll(PllConfig),
    Mix(MixConfig),
    Ddn(DdnConfig),
}

#[bitbybit::bitfield(u8)]
#[derive(Debug, PartialEq, Eq)]
pub struct ClockFlags {
    /// Clock must never be gated. [super::ClockController::enable_critical] enables all of
    /// these clocks.
    #[bit(0, rw)]
    critical: bool,
    /// Clock may be running without a known consumer.
    #[bit(1, rw)]
    ignore_unused: bool,
}

impl ClockFlags {
    pub const NONE: Self = Self::new_with_raw_value(0);
    pub const CRITICAL: Self = Self::NONE.with_critical(true);
    pub const IGNORE_UNUSED: Self = Self::NONE.with_ignore_unused(true);
}

/// Node kinds as derived from the hardware composition of a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    /// External fixed-rate root clock.
    FixedRate,
    Pll,
    Gate,
    Factor,
    Mux,
    Divider,
    FactorGate,
    MuxGate,
    DivGate,
    MuxDiv,
    MuxDivGate,
    MuxDivFc,
    MuxFc,
    MuxDivGateFc,
    Ddn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockDescriptor {
    /// Binding index inside the domain.
    pub index: u32,
    pub name: &'static str,
    /// Candidate parents, selected by the mux field if there is one.
    pub parents: &'static [&'static str],
    pub hw: ClockHw,
    pub flags: ClockFlags,
}

impl ClockDescriptor {
    pub const fn new(
        index: u32,
        name: &'static str,
        parents: &'static [&'static str],
        hw: ClockHw,
    ) -> Self {
        Self {
            index,
            name,
            parents,
            hw,
            flags: ClockFlags::NONE,
        }
    }

    #[inline]
    pub const fn pll(
        index: u32,
        name: &'static str,
        parents: &'static [&'static str],
        config: PllConfig,
    ) -> Self {
        Self::new(index, name, parents, ClockHw::Pll(config))
    }

    #[inline]
    pub const fn mix(
        index: u32,
        name: &'static str,
        parents: &'static [&'static str],
        config: MixConfig,
    ) -> Self {
        Self::new(index, name, parents, ClockHw::Mix(config))
    }

    #[inline]
    pub const fn ddn(
        index: u32,
        name: &'static str,
        parents: &'static [&'static str],
        config: DdnConfig,
    ) -> Self {
        Self::new(index, name, parents, ClockHw::Ddn(config))
    }

    #[inline]
    pub const fn with_flags(mut self, flags: ClockFlags) -> Self {
        self.flags = flags;
        self
    }

    pub const fn kind(&self) -> ClockKind {
        let mix = match self.hw {
            ClockHw::Pll(_) => return ClockKind::Pll,
            ClockHw::Ddn(_) => return ClockKind::Ddn,
            ClockHw::Mix(mix) => mix,
        };
        if mix.factor.is_some() {
            return if mix.gate.is_some() {
                ClockKind::FactorGate
            } else {
                ClockKind::Factor
            };
        }
        match (
            mix.mux.is_some(),
            mix.div.is_some(),
            mix.gate.is_some(),
            mix.fc.is_some(),
        ) {
            (true, true, true, true) => ClockKind::MuxDivGateFc,
            (true, true, false, true) => ClockKind::MuxDivFc,
            (true, false, _, true) => ClockKind::MuxFc,
            (true, true, true, false) => ClockKind::MuxDivGate,
            (true, true, false, false) => ClockKind::MuxDiv,
            (true, false, true, false) => ClockKind::MuxGate,
            (true, false, false, false) => ClockKind::Mux,
            (false, true, true, _) => ClockKind::DivGate,
            (false, true, false, _) => ClockKind::Divider,
            (false, false, true, _) => ClockKind::Gate,
            (false, false, false, _) => ClockKind::Factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_helpers() {
        let field = FieldConfig::new(4, 3);
        assert_eq!(field.mask(), 0x70);
        assert_eq!(field.max_value(), 7);
        assert_eq!(field.extract(0xffff_ff2f), 2);
        assert_eq!(field.prepare(0xf), 0x70);
    }

    #[test]
    fn raw_id_round_trip() {
        let id = ClockId::new(Domain::Apbc, 42);
        assert_eq!(id.raw(), 342);
        assert_eq!(ClockId::from_raw(342), Some(id));
        assert_eq!(ClockId::from_raw(100), Some(ClockId::new(Domain::Pll, 0)));
        assert_eq!(ClockId::from_raw(99), None);
        assert_eq!(ClockId::from_raw(500), None);
    }

    #[test]
    fn kind_from_composition() {
        const PARENTS: &[&str] = &["a", "b"];
        let mux_div_gate_fc = ClockDescriptor::mix(
            0,
            "x",
            PARENTS,
            MixConfig::new(0x54)
                .with_div(8, 3)
                .with_fc(0x54, 1 << 11)
                .with_mux(5, 3)
                .with_gate(1 << 4),
        );
        assert_eq!(mux_div_gate_fc.kind(), ClockKind::MuxDivGateFc);
        let factor_gate =
            ClockDescriptor::mix(0, "x", PARENTS, MixConfig::new(0).with_gate(1).with_factor(2, 1));
        assert_eq!(factor_gate.kind(), ClockKind::FactorGate);
        let mux_fc = ClockDescriptor::mix(
            0,
            "x",
            PARENTS,
            MixConfig::new(0x38c).with_fc(0x38c, 1 << 12).with_mux(0, 3),
        );
        assert_eq!(mux_fc.kind(), ClockKind::MuxFc);
        let div = ClockDescriptor::mix(0, "x", PARENTS, MixConfig::new(0x38c).with_div(6, 3));
        assert_eq!(div.kind(), ClockKind::Divider);
        let pass_through = ClockDescriptor::mix(0, "x", PARENTS, MixConfig::factor(1, 1));
        assert_eq!(pass_through.kind(), ClockKind::Factor);
    }

    #[test]
    fn flags() {
        assert!(ClockFlags::CRITICAL.critical());
        assert!(!ClockFlags::CRITICAL.ignore_unused());
        assert!(ClockFlags::IGNORE_UNUSED.ignore_unused());
        assert_eq!(ClockFlags::NONE.raw_value(), 0);
    }
}
