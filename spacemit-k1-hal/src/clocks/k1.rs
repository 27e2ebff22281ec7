//! Clock tables of the SpacemiT K1 SoC.
//!
//! [probe] registers the external oscillators and the four clock controller blocks in the order
//! PLL, MPMU, APBC and APMU and then checks that the whole tree is linked.
//!
//! Clock indices are the device tree binding indices from [spacemit_k1::bindings].
use embedded_hal::delay::DelayNs;
use spacemit_k1::{apbc, apbs, apmu, bindings as id, mpmu};

use crate::{
    regmap::{MmioRegisterMap, RegisterMap},
    time::Hertz,
};

use super::{
    ClockController, ClockError,
    descriptor::{
        ClockDescriptor, ClockFlags, DdnConfig, Domain, FieldConfig, MixConfig, PllConfig,
        PllRateEntry,
    },
};

/// External fixed-rate clocks provided by the board.
pub const FIXED_CLOCKS: [(&str, Hertz); 4] = [
    ("clock-1m", Hertz::from_raw(1_000_000)),
    ("clock-24m", Hertz::from_raw(24_000_000)),
    ("clock-3m", Hertz::from_raw(3_000_000)),
    ("clock-32k", Hertz::from_raw(32_000)),
];

// PLL1 and PLL2 must run at these rates to provide the correct peripheral rates.
pub const PLL1_RATES: &[PllRateEntry] =
    &[PllRateEntry::new(2_457_600_000, 0x0050dd64, 0x330ccccd)];

pub const PLL2_RATES: &[PllRateEntry] =
    &[PllRateEntry::new(3_000_000_000, 0x0050dd66, 0x3fe00000)];

pub const PLL3_RATES: &[PllRateEntry] = &[
    PllRateEntry::new(1_600_000_000, 0x0050cd61, 0x43eaaaab),
    PllRateEntry::new(1_800_000_000, 0x0050cd61, 0x4b000000),
    PllRateEntry::new(2_000_000_000, 0x0050dd62, 0x2aeaaaab),
    PllRateEntry::new(2_457_600_000, 0x0050dd64, 0x330ccccd),
    PllRateEntry::new(3_000_000_000, 0x0050dd66, 0x3fe00000),
    PllRateEntry::new(3_200_000_000, 0x0050dd67, 0x43eaaaab),
];

const fn gate(
    index: u32,
    name: &'static str,
    parents: &'static [&'static str],
    ctrl: u32,
    mask: u32,
) -> ClockDescriptor {
    ClockDescriptor::mix(index, name, parents, MixConfig::new(ctrl).with_gate(mask))
}

const fn factor(
    index: u32,
    name: &'static str,
    parents: &'static [&'static str],
    div: u32,
    mul: u32,
) -> ClockDescriptor {
    ClockDescriptor::mix(index, name, parents, MixConfig::factor(div, mul))
}

const fn factor_gate(
    index: u32,
    name: &'static str,
    parents: &'static [&'static str],
    ctrl: u32,
    mask: u32,
    div: u32,
    mul: u32,
) -> ClockDescriptor {
    ClockDescriptor::mix(
        index,
        name,
        parents,
        MixConfig::new(ctrl).with_gate(mask).with_factor(div, mul),
    )
}

const fn mux(
    index: u32,
    name: &'static str,
    parents: &'static [&'static str],
    ctrl: u32,
    shift: u8,
    width: u8,
) -> ClockDescriptor {
    ClockDescriptor::mix(index, name, parents, MixConfig::new(ctrl).with_mux(shift, width))
}

const fn mux_gate(
    index: u32,
    name: &'static str,
    parents: &'static [&'static str],
    ctrl: u32,
    shift: u8,
    width: u8,
    mask: u32,
) -> ClockDescriptor {
    ClockDescriptor::mix(
        index,
        name,
        parents,
        MixConfig::new(ctrl).with_mux(shift, width).with_gate(mask),
    )
}

/// Mux, divider and gate in `ctrl`, frequency change bit in `fc_reg`.
const fn mux_div_gate_fc(
    ctrl: u32,
    fc_reg: u32,
    div: (u8, u8),
    fc_mask: u32,
    mux: (u8, u8),
    gate: u32,
) -> MixConfig {
    MixConfig::new(ctrl)
        .with_div(div.0, div.1)
        .with_fc(fc_reg, fc_mask)
        .with_mux(mux.0, mux.1)
        .with_gate(gate)
}

const PLL1_D2: &[&str] = &["pll1"];
const PLL2_D: &[&str] = &["pll2"];
const PLL3_D: &[&str] = &["pll3"];
const OSC_24M: &[&str] = &["clock-24m"];

pub static PLL_CLOCKS: [ClockDescriptor; id::apbs::NUM_CLOCKS] = [
    ClockDescriptor::pll(
        id::apbs::PLL1,
        "pll1",
        OSC_24M,
        PllConfig::new(
            apbs::PLL1_SWCR1,
            apbs::PLL1_SWCR3,
            mpmu::POSR,
            mpmu::POSR_PLL1_LOCK,
            PLL1_RATES,
        ),
    ),
    ClockDescriptor::pll(
        id::apbs::PLL2,
        "pll2",
        OSC_24M,
        PllConfig::new(
            apbs::PLL2_SWCR1,
            apbs::PLL2_SWCR3,
            mpmu::POSR,
            mpmu::POSR_PLL2_LOCK,
            PLL2_RATES,
        ),
    ),
    ClockDescriptor::pll(
        id::apbs::PLL3,
        "pll3",
        OSC_24M,
        PllConfig::new(
            apbs::PLL3_SWCR1,
            apbs::PLL3_SWCR3,
            mpmu::POSR,
            mpmu::POSR_PLL3_LOCK,
            PLL3_RATES,
        ),
    ),
    factor_gate(id::apbs::PLL1_D2, "pll1_d2", PLL1_D2, apbs::PLL1_SWCR2, 1 << 1, 2, 1),
    factor_gate(id::apbs::PLL1_D3, "pll1_d3", PLL1_D2, apbs::PLL1_SWCR2, 1 << 2, 3, 1),
    factor_gate(id::apbs::PLL1_D4, "pll1_d4", PLL1_D2, apbs::PLL1_SWCR2, 1 << 3, 4, 1),
    factor_gate(id::apbs::PLL1_D5, "pll1_d5", PLL1_D2, apbs::PLL1_SWCR2, 1 << 4, 5, 1),
    factor_gate(id::apbs::PLL1_D6, "pll1_d6", PLL1_D2, apbs::PLL1_SWCR2, 1 << 5, 6, 1),
    factor_gate(id::apbs::PLL1_D7, "pll1_d7", PLL1_D2, apbs::PLL1_SWCR2, 1 << 6, 7, 1),
    factor_gate(id::apbs::PLL1_D8, "pll1_d8", PLL1_D2, apbs::PLL1_SWCR2, 1 << 7, 8, 1)
        .with_flags(ClockFlags::CRITICAL),
    factor_gate(
        id::apbs::PLL1_D11,
        "pll1_d11_223p4",
        PLL1_D2,
        apbs::PLL1_SWCR2,
        1 << 15,
        11,
        1,
    ),
    factor_gate(
        id::apbs::PLL1_D13,
        "pll1_d13_189",
        PLL1_D2,
        apbs::PLL1_SWCR2,
        1 << 16,
        13,
        1,
    ),
    factor_gate(
        id::apbs::PLL1_D23,
        "pll1_d23_106p8",
        PLL1_D2,
        apbs::PLL1_SWCR2,
        1 << 20,
        23,
        1,
    ),
    factor_gate(
        id::apbs::PLL1_D64,
        "pll1_d64_38p4",
        PLL1_D2,
        apbs::PLL1_SWCR2,
        1 << 0,
        64,
        1,
    ),
    factor_gate(
        id::apbs::PLL1_D10_AUD,
        "pll1_aud_245p7",
        PLL1_D2,
        apbs::PLL1_SWCR2,
        1 << 10,
        10,
        1,
    ),
    factor_gate(
        id::apbs::PLL1_D100_AUD,
        "pll1_aud_24p5",
        PLL1_D2,
        apbs::PLL1_SWCR2,
        1 << 11,
        100,
        1,
    ),
    factor_gate(id::apbs::PLL2_D1, "pll2_d1", PLL2_D, apbs::PLL2_SWCR2, 1 << 0, 1, 1),
    factor_gate(id::apbs::PLL2_D2, "pll2_d2", PLL2_D, apbs::PLL2_SWCR2, 1 << 1, 2, 1),
    factor_gate(id::apbs::PLL2_D3, "pll2_d3", PLL2_D, apbs::PLL2_SWCR2, 1 << 2, 3, 1),
    factor_gate(id::apbs::PLL2_D4, "pll2_d4", PLL2_D, apbs::PLL2_SWCR2, 1 << 3, 4, 1),
    factor_gate(id::apbs::PLL2_D5, "pll2_d5", PLL2_D, apbs::PLL2_SWCR2, 1 << 4, 5, 1),
    factor_gate(id::apbs::PLL2_D6, "pll2_d6", PLL2_D, apbs::PLL2_SWCR2, 1 << 5, 6, 1),
    factor_gate(id::apbs::PLL2_D7, "pll2_d7", PLL2_D, apbs::PLL2_SWCR2, 1 << 6, 7, 1),
    factor_gate(id::apbs::PLL2_D8, "pll2_d8", PLL2_D, apbs::PLL2_SWCR2, 1 << 7, 8, 1),
    factor_gate(id::apbs::PLL3_D1, "pll3_d1", PLL3_D, apbs::PLL3_SWCR2, 1 << 0, 1, 1),
    factor_gate(id::apbs::PLL3_D2, "pll3_d2", PLL3_D, apbs::PLL3_SWCR2, 1 << 1, 2, 1),
    factor_gate(id::apbs::PLL3_D3, "pll3_d3", PLL3_D, apbs::PLL3_SWCR2, 1 << 2, 3, 1),
    factor_gate(id::apbs::PLL3_D4, "pll3_d4", PLL3_D, apbs::PLL3_SWCR2, 1 << 3, 4, 1),
    factor_gate(id::apbs::PLL3_D5, "pll3_d5", PLL3_D, apbs::PLL3_SWCR2, 1 << 4, 5, 1),
    factor_gate(id::apbs::PLL3_D6, "pll3_d6", PLL3_D, apbs::PLL3_SWCR2, 1 << 5, 6, 1),
    factor_gate(id::apbs::PLL3_D7, "pll3_d7", PLL3_D, apbs::PLL3_SWCR2, 1 << 6, 7, 1),
    factor_gate(id::apbs::PLL3_D8, "pll3_d8", PLL3_D, apbs::PLL3_SWCR2, 1 << 7, 8, 1),
    factor(id::apbs::PLL3_80, "pll3_80", &["pll3_d8"], 5, 1),
    factor(id::apbs::PLL3_40, "pll3_40", &["pll3_d8"], 10, 1),
    factor(id::apbs::PLL3_20, "pll3_20", &["pll3_d8"], 20, 1),
];

const I2S_153P6_BASE_PARENTS: &[&str] = &["i2s_153p6", "pll1_d8_307p2"];
const I2S_SYSCLK_SRC_PARENTS: &[&str] = &["pll1_d96_25p6", "i2s_153p6_base"];
const APB_PARENTS: &[&str] = &[
    "pll1_d96_25p6",
    "pll1_d48_51p2",
    "pll1_d96_25p6",
    "pll1_d24_102p4",
];

pub static MPMU_CLOCKS: [ClockDescriptor; id::mpmu::NUM_CLOCKS] = [
    gate(id::mpmu::PLL1_307P2, "pll1_d8_307p2", &["pll1_d8"], mpmu::ACGR, 1 << 13),
    factor(id::mpmu::PLL1_76P8, "pll1_d32_76p8", &["pll1_d8_307p2"], 4, 1),
    factor(id::mpmu::PLL1_61P44, "pll1_d40_61p44", &["pll1_d8_307p2"], 5, 1),
    factor(id::mpmu::PLL1_153P6, "pll1_d16_153p6", &["pll1_d8"], 2, 1),
    factor_gate(
        id::mpmu::PLL1_102P4,
        "pll1_d24_102p4",
        &["pll1_d8"],
        mpmu::ACGR,
        1 << 12,
        3,
        1,
    ),
    factor_gate(
        id::mpmu::PLL1_51P2,
        "pll1_d48_51p2",
        &["pll1_d8"],
        mpmu::ACGR,
        1 << 7,
        6,
        1,
    ),
    factor_gate(
        id::mpmu::PLL1_51P2_AP,
        "pll1_d48_51p2_ap",
        &["pll1_d8"],
        mpmu::ACGR,
        1 << 11,
        6,
        1,
    ),
    factor_gate(
        id::mpmu::PLL1_57P6,
        "pll1_m3d128_57p6",
        &["pll1_d8"],
        mpmu::ACGR,
        1 << 8,
        16,
        3,
    ),
    factor_gate(
        id::mpmu::PLL1_25P6,
        "pll1_d96_25p6",
        &["pll1_d8"],
        mpmu::ACGR,
        1 << 4,
        12,
        1,
    ),
    factor_gate(
        id::mpmu::PLL1_12P8,
        "pll1_d192_12p8",
        &["pll1_d8"],
        mpmu::ACGR,
        1 << 3,
        24,
        1,
    ),
    factor_gate(
        id::mpmu::PLL1_12P8_WDT,
        "pll1_d192_12p8_wdt",
        &["pll1_d8"],
        mpmu::ACGR,
        1 << 19,
        24,
        1,
    ),
    factor_gate(
        id::mpmu::PLL1_6P4,
        "pll1_d384_6p4",
        &["pll1_d8"],
        mpmu::ACGR,
        1 << 2,
        48,
        1,
    ),
    factor(id::mpmu::PLL1_3P2, "pll1_d768_3p2", &["pll1_d384_6p4"], 2, 1),
    factor(id::mpmu::PLL1_1P6, "pll1_d1536_1p6", &["pll1_d384_6p4"], 4, 1),
    factor(id::mpmu::PLL1_0P8, "pll1_d3072_0p8", &["pll1_d384_6p4"], 8, 1),
    gate(id::mpmu::PLL1_409P6, "pll1_d6_409p6", &["pll1_d6"], mpmu::ACGR, 1 << 0),
    factor_gate(
        id::mpmu::PLL1_204P8,
        "pll1_d12_204p8",
        &["pll1_d6"],
        mpmu::ACGR,
        1 << 5,
        2,
        1,
    ),
    gate(id::mpmu::PLL1_491, "pll1_d5_491p52", &["pll1_d5"], mpmu::ACGR, 1 << 21),
    factor_gate(
        id::mpmu::PLL1_245P76,
        "pll1_d10_245p76",
        &["pll1_d5"],
        mpmu::ACGR,
        1 << 18,
        2,
        1,
    ),
    gate(id::mpmu::PLL1_614, "pll1_d4_614p4", &["pll1_d4"], mpmu::ACGR, 1 << 15),
    factor_gate(
        id::mpmu::PLL1_47P26,
        "pll1_d52_47p26",
        &["pll1_d4"],
        mpmu::ACGR,
        1 << 10,
        13,
        1,
    ),
    factor_gate(
        id::mpmu::PLL1_31P5,
        "pll1_d78_31p5",
        &["pll1_d4"],
        mpmu::ACGR,
        1 << 6,
        39,
        2,
    ),
    gate(id::mpmu::PLL1_819, "pll1_d3_819p2", &["pll1_d3"], mpmu::ACGR, 1 << 14),
    gate(id::mpmu::PLL1_1228, "pll1_d2_1228p8", &["pll1_d2"], mpmu::ACGR, 1 << 16),
    gate(id::mpmu::SLOW_UART, "slow_uart", &["clock-32k"], mpmu::ACGR, 1 << 1)
        .with_flags(ClockFlags::IGNORE_UNUSED),
    ClockDescriptor::ddn(
        id::mpmu::SLOW_UART1,
        "slow_uart1_14p74",
        &["pll1_d16_153p6"],
        DdnConfig::new(mpmu::SUCCR, FieldConfig::new(16, 13), FieldConfig::new(0, 13), 2),
    ),
    ClockDescriptor::ddn(
        id::mpmu::SLOW_UART2,
        "slow_uart2_48",
        &["pll1_d4_614p4"],
        DdnConfig::new(mpmu::SUCCR_1, FieldConfig::new(16, 13), FieldConfig::new(0, 13), 2),
    ),
    gate(id::mpmu::WDT, "wdt_clk", &["pll1_d96_25p6"], mpmu::WDTPCR, 1 << 1),
    mux(id::mpmu::APB, "apb_clk", APB_PARENTS, mpmu::APBCSCR, 0, 2),
    gate(id::mpmu::RIPC, "ripc_clk", &["apb_clk"], mpmu::RIPCCR, 0x1),
    factor(id::mpmu::I2S_153P6, "i2s_153p6", &["pll1_d8_307p2"], 2, 1),
    mux(
        id::mpmu::I2S_153P6_BASE,
        "i2s_153p6_base",
        I2S_153P6_BASE_PARENTS,
        mpmu::FCCR,
        29,
        1,
    ),
    mux_gate(
        id::mpmu::I2S_SYSCLK_SRC,
        "i2s_sysclk_src",
        I2S_SYSCLK_SRC_PARENTS,
        mpmu::ISCCR,
        30,
        1,
        1 << 31,
    ),
    ClockDescriptor::ddn(
        id::mpmu::I2S_SYSCLK,
        "i2s_sysclk",
        &["i2s_sysclk_src"],
        DdnConfig::new(mpmu::ISCCR, FieldConfig::new(0, 15), FieldConfig::new(15, 12), 1),
    ),
    // The divider of i2s_bclk always implies an additional factor of 2.
    factor(id::mpmu::I2S_BCLK_FACTOR, "i2s_bclk_factor", &["i2s_sysclk"], 2, 1),
    ClockDescriptor::mix(
        id::mpmu::I2S_BCLK,
        "i2s_bclk",
        &["i2s_bclk_factor"],
        MixConfig::new(mpmu::ISCCR).with_div(27, 2).with_gate(1 << 29),
    ),
    gate(id::mpmu::WDT_BUS, "wdt_bus_clk", &["apb_clk"], mpmu::WDTPCR, 1 << 0),
];

const UART_PARENTS: &[&str] = &["pll1_m3d128_57p6", "slow_uart1_14p74", "slow_uart2_48"];
const TWSI_PARENTS: &[&str] = &["pll1_d78_31p5", "pll1_d48_51p2", "pll1_d40_61p44"];
const PWM_PARENTS: &[&str] = &["pll1_d192_12p8", "clock-32k"];
const SSP_PARENTS: &[&str] = &[
    "pll1_d384_6p4",
    "pll1_d192_12p8",
    "pll1_d96_25p6",
    "pll1_d48_51p2",
    "pll1_d768_3p2",
    "pll1_d1536_1p6",
    "pll1_d3072_0p8",
];
const TIMER_PARENTS: &[&str] = &[
    "pll1_d192_12p8",
    "clock-32k",
    "pll1_d384_6p4",
    "clock-3m",
    "clock-1m",
];
const SSPA0_PARENTS: &[&str] = &[
    "pll1_d384_6p4",
    "pll1_d192_12p8",
    "pll1_d96_25p6",
    "pll1_d48_51p2",
    "pll1_d768_3p2",
    "pll1_d1536_1p6",
    "pll1_d3072_0p8",
    "sspa0_i2s_bclk",
];
const SSPA1_PARENTS: &[&str] = &[
    "pll1_d384_6p4",
    "pll1_d192_12p8",
    "pll1_d96_25p6",
    "pll1_d48_51p2",
    "pll1_d768_3p2",
    "pll1_d1536_1p6",
    "pll1_d3072_0p8",
    "sspa1_i2s_bclk",
];
const CAN_PARENTS: &[&str] = &["pll3_20", "pll3_40", "pll3_80"];
const APB: &[&str] = &["apb_clk"];

/// Functional and bus clock enable bits of an APBC `*_CLK_RST` register.
const APBC_FNCLK_BUSCLK: u32 = 0b11;
const APBC_FNCLK: u32 = 1 << 1;
const APBC_BUSCLK: u32 = 1 << 0;

/// Functional clock mux in bits 4..6 of an APBC register, gated together with the bus clock.
const fn apbc_mux(
    index: u32,
    name: &'static str,
    parents: &'static [&'static str],
    ctrl: u32,
) -> ClockDescriptor {
    mux_gate(index, name, parents, ctrl, 4, 3, APBC_FNCLK_BUSCLK)
}

/// Bus clock gate of an APBC register.
const fn apbc_bus(index: u32, name: &'static str, ctrl: u32) -> ClockDescriptor {
    gate(index, name, APB, ctrl, APBC_BUSCLK)
}

pub static APBC_CLOCKS: [ClockDescriptor; id::apbc::NUM_CLOCKS] = [
    apbc_mux(id::apbc::UART0, "uart0_clk", UART_PARENTS, apbc::UART1_CLK_RST),
    apbc_mux(id::apbc::UART2, "uart2_clk", UART_PARENTS, apbc::UART2_CLK_RST),
    apbc_mux(id::apbc::UART3, "uart3_clk", UART_PARENTS, apbc::UART3_CLK_RST),
    apbc_mux(id::apbc::UART4, "uart4_clk", UART_PARENTS, apbc::UART4_CLK_RST),
    apbc_mux(id::apbc::UART5, "uart5_clk", UART_PARENTS, apbc::UART5_CLK_RST),
    apbc_mux(id::apbc::UART6, "uart6_clk", UART_PARENTS, apbc::UART6_CLK_RST),
    apbc_mux(id::apbc::UART7, "uart7_clk", UART_PARENTS, apbc::UART7_CLK_RST),
    apbc_mux(id::apbc::UART8, "uart8_clk", UART_PARENTS, apbc::UART8_CLK_RST),
    apbc_mux(id::apbc::UART9, "uart9_clk", UART_PARENTS, apbc::UART9_CLK_RST),
    gate(id::apbc::GPIO, "gpio_clk", OSC_24M, apbc::GPIO_CLK_RST, APBC_FNCLK_BUSCLK),
    apbc_mux(id::apbc::PWM0, "pwm0_clk", PWM_PARENTS, apbc::PWM0_CLK_RST),
    apbc_mux(id::apbc::PWM1, "pwm1_clk", PWM_PARENTS, apbc::PWM1_CLK_RST),
    apbc_mux(id::apbc::PWM2, "pwm2_clk", PWM_PARENTS, apbc::PWM2_CLK_RST),
    apbc_mux(id::apbc::PWM3, "pwm3_clk", PWM_PARENTS, apbc::PWM3_CLK_RST),
    apbc_mux(id::apbc::PWM4, "pwm4_clk", PWM_PARENTS, apbc::PWM4_CLK_RST),
    apbc_mux(id::apbc::PWM5, "pwm5_clk", PWM_PARENTS, apbc::PWM5_CLK_RST),
    apbc_mux(id::apbc::PWM6, "pwm6_clk", PWM_PARENTS, apbc::PWM6_CLK_RST),
    apbc_mux(id::apbc::PWM7, "pwm7_clk", PWM_PARENTS, apbc::PWM7_CLK_RST),
    apbc_mux(id::apbc::PWM8, "pwm8_clk", PWM_PARENTS, apbc::PWM8_CLK_RST),
    apbc_mux(id::apbc::PWM9, "pwm9_clk", PWM_PARENTS, apbc::PWM9_CLK_RST),
    apbc_mux(id::apbc::PWM10, "pwm10_clk", PWM_PARENTS, apbc::PWM10_CLK_RST),
    apbc_mux(id::apbc::PWM11, "pwm11_clk", PWM_PARENTS, apbc::PWM11_CLK_RST),
    apbc_mux(id::apbc::PWM12, "pwm12_clk", PWM_PARENTS, apbc::PWM12_CLK_RST),
    apbc_mux(id::apbc::PWM13, "pwm13_clk", PWM_PARENTS, apbc::PWM13_CLK_RST),
    apbc_mux(id::apbc::PWM14, "pwm14_clk", PWM_PARENTS, apbc::PWM14_CLK_RST),
    apbc_mux(id::apbc::PWM15, "pwm15_clk", PWM_PARENTS, apbc::PWM15_CLK_RST),
    apbc_mux(id::apbc::PWM16, "pwm16_clk", PWM_PARENTS, apbc::PWM16_CLK_RST),
    apbc_mux(id::apbc::PWM17, "pwm17_clk", PWM_PARENTS, apbc::PWM17_CLK_RST),
    apbc_mux(id::apbc::PWM18, "pwm18_clk", PWM_PARENTS, apbc::PWM18_CLK_RST),
    apbc_mux(id::apbc::PWM19, "pwm19_clk", PWM_PARENTS, apbc::PWM19_CLK_RST),
    mux_gate(id::apbc::SSP3, "ssp3_clk", SSP_PARENTS, apbc::SSP3_CLK_RST, 4, 3, APBC_FNCLK),
    gate(id::apbc::RTC, "rtc_clk", &["clock-32k"], apbc::RTC_CLK_RST, (1 << 7) | APBC_FNCLK_BUSCLK),
    apbc_mux(id::apbc::TWSI0, "twsi0_clk", TWSI_PARENTS, apbc::TWSI0_CLK_RST),
    apbc_mux(id::apbc::TWSI1, "twsi1_clk", TWSI_PARENTS, apbc::TWSI1_CLK_RST),
    apbc_mux(id::apbc::TWSI2, "twsi2_clk", TWSI_PARENTS, apbc::TWSI2_CLK_RST),
    apbc_mux(id::apbc::TWSI4, "twsi4_clk", TWSI_PARENTS, apbc::TWSI4_CLK_RST),
    apbc_mux(id::apbc::TWSI5, "twsi5_clk", TWSI_PARENTS, apbc::TWSI5_CLK_RST),
    apbc_mux(id::apbc::TWSI6, "twsi6_clk", TWSI_PARENTS, apbc::TWSI6_CLK_RST),
    apbc_mux(id::apbc::TWSI7, "twsi7_clk", TWSI_PARENTS, apbc::TWSI7_CLK_RST),
    // TWSI8_CLK_RST always reads as zero, so functional and bus clock are one write-only gate.
    gate(id::apbc::TWSI8, "twsi8_clk", &["pll1_d78_31p5"], apbc::TWSI8_CLK_RST, APBC_FNCLK_BUSCLK),
    apbc_mux(id::apbc::TIMERS1, "timers1_clk", TIMER_PARENTS, apbc::TIMERS1_CLK_RST),
    apbc_mux(id::apbc::TIMERS2, "timers2_clk", TIMER_PARENTS, apbc::TIMERS2_CLK_RST),
    gate(id::apbc::AIB, "aib_clk", OSC_24M, apbc::AIB_CLK_RST, APBC_FNCLK_BUSCLK),
    gate(id::apbc::ONEWIRE, "onewire_clk", OSC_24M, apbc::ONEWIRE_CLK_RST, APBC_FNCLK_BUSCLK),
    mux_gate(id::apbc::SSPA0, "sspa0_clk", SSPA0_PARENTS, apbc::SSPA0_CLK_RST, 4, 3, APBC_FNCLK),
    mux_gate(id::apbc::SSPA1, "sspa1_clk", SSPA1_PARENTS, apbc::SSPA1_CLK_RST, 4, 3, APBC_FNCLK),
    gate(id::apbc::DRO, "dro_clk", APB, apbc::DRO_CLK_RST, APBC_FNCLK_BUSCLK),
    gate(id::apbc::IR, "ir_clk", APB, apbc::IR_CLK_RST, APBC_FNCLK_BUSCLK),
    gate(id::apbc::TSEN, "tsen_clk", APB, apbc::TSEN_CLK_RST, APBC_FNCLK_BUSCLK),
    gate(id::apbc::IPC_AP2AUD, "ipc_ap2aud_clk", APB, apbc::IPC_AP2AUD_CLK_RST, APBC_FNCLK_BUSCLK),
    mux_gate(id::apbc::CAN0, "can0_clk", CAN_PARENTS, apbc::CAN0_CLK_RST, 4, 3, APBC_FNCLK),
    gate(id::apbc::CAN0_BUS, "can0_bus_clk", OSC_24M, apbc::CAN0_CLK_RST, APBC_BUSCLK),
    apbc_bus(id::apbc::UART0_BUS, "uart0_bus_clk", apbc::UART1_CLK_RST),
    apbc_bus(id::apbc::UART2_BUS, "uart2_bus_clk", apbc::UART2_CLK_RST),
    apbc_bus(id::apbc::UART3_BUS, "uart3_bus_clk", apbc::UART3_CLK_RST),
    apbc_bus(id::apbc::UART4_BUS, "uart4_bus_clk", apbc::UART4_CLK_RST),
    apbc_bus(id::apbc::UART5_BUS, "uart5_bus_clk", apbc::UART5_CLK_RST),
    apbc_bus(id::apbc::UART6_BUS, "uart6_bus_clk", apbc::UART6_CLK_RST),
    apbc_bus(id::apbc::UART7_BUS, "uart7_bus_clk", apbc::UART7_CLK_RST),
    apbc_bus(id::apbc::UART8_BUS, "uart8_bus_clk", apbc::UART8_CLK_RST),
    apbc_bus(id::apbc::UART9_BUS, "uart9_bus_clk", apbc::UART9_CLK_RST),
    apbc_bus(id::apbc::GPIO_BUS, "gpio_bus_clk", apbc::GPIO_CLK_RST),
    apbc_bus(id::apbc::PWM0_BUS, "pwm0_bus_clk", apbc::PWM0_CLK_RST),
    apbc_bus(id::apbc::PWM1_BUS, "pwm1_bus_clk", apbc::PWM1_CLK_RST),
    apbc_bus(id::apbc::PWM2_BUS, "pwm2_bus_clk", apbc::PWM2_CLK_RST),
    apbc_bus(id::apbc::PWM3_BUS, "pwm3_bus_clk", apbc::PWM3_CLK_RST),
    apbc_bus(id::apbc::PWM4_BUS, "pwm4_bus_clk", apbc::PWM4_CLK_RST),
    apbc_bus(id::apbc::PWM5_BUS, "pwm5_bus_clk", apbc::PWM5_CLK_RST),
    apbc_bus(id::apbc::PWM6_BUS, "pwm6_bus_clk", apbc::PWM6_CLK_RST),
    apbc_bus(id::apbc::PWM7_BUS, "pwm7_bus_clk", apbc::PWM7_CLK_RST),
    apbc_bus(id::apbc::PWM8_BUS, "pwm8_bus_clk", apbc::PWM8_CLK_RST),
    apbc_bus(id::apbc::PWM9_BUS, "pwm9_bus_clk", apbc::PWM9_CLK_RST),
    apbc_bus(id::apbc::PWM10_BUS, "pwm10_bus_clk", apbc::PWM10_CLK_RST),
    apbc_bus(id::apbc::PWM11_BUS, "pwm11_bus_clk", apbc::PWM11_CLK_RST),
    apbc_bus(id::apbc::PWM12_BUS, "pwm12_bus_clk", apbc::PWM12_CLK_RST),
    apbc_bus(id::apbc::PWM13_BUS, "pwm13_bus_clk", apbc::PWM13_CLK_RST),
    apbc_bus(id::apbc::PWM14_BUS, "pwm14_bus_clk", apbc::PWM14_CLK_RST),
    apbc_bus(id::apbc::PWM15_BUS, "pwm15_bus_clk", apbc::PWM15_CLK_RST),
    apbc_bus(id::apbc::PWM16_BUS, "pwm16_bus_clk", apbc::PWM16_CLK_RST),
    apbc_bus(id::apbc::PWM17_BUS, "pwm17_bus_clk", apbc::PWM17_CLK_RST),
    apbc_bus(id::apbc::PWM18_BUS, "pwm18_bus_clk", apbc::PWM18_CLK_RST),
    apbc_bus(id::apbc::PWM19_BUS, "pwm19_bus_clk", apbc::PWM19_CLK_RST),
    apbc_bus(id::apbc::SSP3_BUS, "ssp3_bus_clk", apbc::SSP3_CLK_RST),
    apbc_bus(id::apbc::RTC_BUS, "rtc_bus_clk", apbc::RTC_CLK_RST),
    apbc_bus(id::apbc::TWSI0_BUS, "twsi0_bus_clk", apbc::TWSI0_CLK_RST),
    apbc_bus(id::apbc::TWSI1_BUS, "twsi1_bus_clk", apbc::TWSI1_CLK_RST),
    apbc_bus(id::apbc::TWSI2_BUS, "twsi2_bus_clk", apbc::TWSI2_CLK_RST),
    apbc_bus(id::apbc::TWSI4_BUS, "twsi4_bus_clk", apbc::TWSI4_CLK_RST),
    apbc_bus(id::apbc::TWSI5_BUS, "twsi5_bus_clk", apbc::TWSI5_CLK_RST),
    apbc_bus(id::apbc::TWSI6_BUS, "twsi6_bus_clk", apbc::TWSI6_CLK_RST),
    apbc_bus(id::apbc::TWSI7_BUS, "twsi7_bus_clk", apbc::TWSI7_CLK_RST),
    factor(id::apbc::TWSI8_BUS, "twsi8_bus_clk", APB, 1, 1),
    apbc_bus(id::apbc::TIMERS1_BUS, "timers1_bus_clk", apbc::TIMERS1_CLK_RST),
    apbc_bus(id::apbc::TIMERS2_BUS, "timers2_bus_clk", apbc::TIMERS2_CLK_RST),
    apbc_bus(id::apbc::AIB_BUS, "aib_bus_clk", apbc::AIB_CLK_RST),
    apbc_bus(id::apbc::ONEWIRE_BUS, "onewire_bus_clk", apbc::ONEWIRE_CLK_RST),
    apbc_bus(id::apbc::SSPA0_BUS, "sspa0_bus_clk", apbc::SSPA0_CLK_RST),
    apbc_bus(id::apbc::SSPA1_BUS, "sspa1_bus_clk", apbc::SSPA1_CLK_RST),
    apbc_bus(id::apbc::TSEN_BUS, "tsen_bus_clk", apbc::TSEN_CLK_RST),
    apbc_bus(id::apbc::IPC_AP2AUD_BUS, "ipc_ap2aud_bus_clk", apbc::IPC_AP2AUD_CLK_RST),
    // Must be set when i2s_bclk is the SSPA source.
    gate(id::apbc::SSPA0_I2S_BCLK, "sspa0_i2s_bclk", &["i2s_bclk"], apbc::SSPA0_CLK_RST, 1 << 3),
    gate(id::apbc::SSPA1_I2S_BCLK, "sspa1_i2s_bclk", &["i2s_bclk"], apbc::SSPA1_CLK_RST, 1 << 3),
];

const PMUA_ACLK: &[&str] = &["pmua_aclk"];
const PMUA_ACLK_PARENTS: &[&str] = &["pll1_d10_245p76", "pll1_d8_307p2"];
const CCI550_PARENTS: &[&str] = &[
    "pll1_d5_491p52",
    "pll1_d4_614p4",
    "pll1_d3_819p2",
    "pll2_d3",
];
const CPU_C0_HI_PARENTS: &[&str] = &["pll3_d2", "pll3_d1"];
const CPU_C0_PARENTS: &[&str] = &[
    "pll1_d4_614p4",
    "pll1_d3_819p2",
    "pll1_d6_409p6",
    "pll1_d5_491p52",
    "pll1_d2_1228p8",
    "pll3_d3",
    "pll2_d3",
    "cpu_c0_hi_clk",
];
const CPU_C1_PARENTS: &[&str] = &[
    "pll1_d4_614p4",
    "pll1_d3_819p2",
    "pll1_d6_409p6",
    "pll1_d5_491p52",
    "pll1_d2_1228p8",
    "pll3_d3",
    "pll2_d3",
    "cpu_c1_hi_clk",
];
const EMMC_PARENTS: &[&str] = &[
    "pll1_d6_409p6",
    "pll1_d4_614p4",
    "pll1_d52_47p26",
    "pll1_d3_819p2",
];
const CCIC_4X_PARENTS: &[&str] = &[
    "pll1_d5_491p52",
    "pll1_d6_409p6",
    "pll1_d4_614p4",
    "pll1_d3_819p2",
    "pll2_d2",
    "pll2_d3",
    "pll2_d4",
    "pll1_d2_1228p8",
];
const CCIC_PHY_PARENTS: &[&str] = &["pll1_d24_102p4", "pll1_d48_51p2_ap"];
const SDH01_PARENTS: &[&str] = &[
    "pll1_d6_409p6",
    "pll1_d4_614p4",
    "pll2_d8",
    "pll2_d5",
    "pll1_d11_223p4",
    "pll1_d13_189",
    "pll1_d23_106p8",
];
const SDH2_PARENTS: &[&str] = &[
    "pll1_d6_409p6",
    "pll1_d4_614p4",
    "pll2_d8",
    "pll1_d3_819p2",
    "pll1_d11_223p4",
    "pll1_d13_189",
    "pll1_d23_106p8",
];
const QSPI_PARENTS: &[&str] = &[
    "pll1_d6_409p6",
    "pll2_d8",
    "pll1_d8_307p2",
    "pll1_d10_245p76",
    "pll1_d11_223p4",
    "pll1_d23_106p8",
    "pll1_d5_491p52",
    "pll1_d13_189",
];
const AES_PARENTS: &[&str] = &["pll1_d12_204p8", "pll1_d24_102p4"];
/// Shared by VPU and GPU.
const MEDIA_PARENTS: &[&str] = &[
    "pll1_d4_614p4",
    "pll1_d5_491p52",
    "pll1_d3_819p2",
    "pll1_d6_409p6",
    "pll3_d6",
    "pll2_d3",
    "pll2_d4",
    "pll2_d5",
];
const AUDIO_PARENTS: &[&str] = &["pll1_aud_245p7", "pll1_d8_307p2", "pll1_d6_409p6"];
/// Shared by HDMI, ISP and the DPU main clock.
const DISPLAY_PARENTS: &[&str] = &[
    "pll1_d6_409p6",
    "pll1_d5_491p52",
    "pll1_d4_614p4",
    "pll1_d8_307p2",
];
const JPG_PARENTS: &[&str] = &[
    "pll1_d4_614p4",
    "pll1_d6_409p6",
    "pll1_d5_491p52",
    "pll1_d3_819p2",
    "pll1_d2_1228p8",
    "pll2_d4",
    "pll2_d3",
];
const CSI_PARENTS: &[&str] = &[
    "pll1_d5_491p52",
    "pll1_d6_409p6",
    "pll1_d4_614p4",
    "pll1_d3_819p2",
    "pll2_d2",
    "pll2_d3",
    "pll2_d4",
    "pll1_d2_1228p8",
];
const CAMM_PARENTS: &[&str] = &["pll1_d8_307p2", "pll2_d5", "pll1_d6_409p6", "clock-24m"];
const ISP_CPP_PARENTS: &[&str] = &["pll1_d8_307p2", "pll1_d6_409p6"];
const ISP_BUS_PARENTS: &[&str] = &[
    "pll1_d6_409p6",
    "pll1_d5_491p52",
    "pll1_d8_307p2",
    "pll1_d10_245p76",
];
const DPU_ESC_PARENTS: &[&str] = &[
    "pll1_d48_51p2_ap",
    "pll1_d52_47p26",
    "pll1_d96_25p6",
    "pll1_d32_76p8",
];
const DPU_BIT_PARENTS: &[&str] = &[
    "pll1_d3_819p2",
    "pll2_d2",
    "pll2_d3",
    "pll1_d2_1228p8",
    "pll2_d4",
    "pll2_d5",
    "pll2_d7",
    "pll2_d8",
];
const DPU_PX_PARENTS: &[&str] = &[
    "pll1_d6_409p6",
    "pll1_d5_491p52",
    "pll1_d4_614p4",
    "pll1_d8_307p2",
    "pll2_d7",
    "pll2_d8",
];
const DPU_SPI_PARENTS: &[&str] = &[
    "pll1_d8_307p2",
    "pll1_d6_409p6",
    "pll1_d10_245p76",
    "pll1_d11_223p4",
    "pll1_d13_189",
    "pll1_d23_106p8",
    "pll2_d3",
    "pll2_d5",
];
const V2D_PARENTS: &[&str] = &[
    "pll1_d5_491p52",
    "pll1_d6_409p6",
    "pll1_d8_307p2",
    "pll1_d4_614p4",
];

pub static APMU_CLOCKS: [ClockDescriptor; id::apmu::NUM_CLOCKS] = [
    ClockDescriptor::mix(
        id::apmu::CCI550,
        "cci550_clk",
        CCI550_PARENTS,
        MixConfig::new(apmu::CCI550_CLK_CTRL)
            .with_div(8, 3)
            .with_fc(apmu::CCI550_CLK_CTRL, 1 << 12)
            .with_mux(0, 2),
    )
    .with_flags(ClockFlags::CRITICAL),
    mux(id::apmu::CPU_C0_HI, "cpu_c0_hi_clk", CPU_C0_HI_PARENTS, apmu::CPU_C0_CLK_CTRL, 13, 1),
    ClockDescriptor::mix(
        id::apmu::CPU_C0_CORE,
        "cpu_c0_core_clk",
        CPU_C0_PARENTS,
        MixConfig::new(apmu::CPU_C0_CLK_CTRL)
            .with_fc(apmu::CPU_C0_CLK_CTRL, 1 << 12)
            .with_mux(0, 3),
    )
    .with_flags(ClockFlags::CRITICAL),
    ClockDescriptor::mix(
        id::apmu::CPU_C0_ACE,
        "cpu_c0_ace_clk",
        &["cpu_c0_core_clk"],
        MixConfig::new(apmu::CPU_C0_CLK_CTRL).with_div(6, 3),
    )
    .with_flags(ClockFlags::CRITICAL),
    ClockDescriptor::mix(
        id::apmu::CPU_C0_TCM,
        "cpu_c0_tcm_clk",
        &["cpu_c0_core_clk"],
        MixConfig::new(apmu::CPU_C0_CLK_CTRL).with_div(9, 3),
    )
    .with_flags(ClockFlags::CRITICAL),
    mux(id::apmu::CPU_C1_HI, "cpu_c1_hi_clk", CPU_C0_HI_PARENTS, apmu::CPU_C1_CLK_CTRL, 13, 1),
    ClockDescriptor::mix(
        id::apmu::CPU_C1_CORE,
        "cpu_c1_core_clk",
        CPU_C1_PARENTS,
        MixConfig::new(apmu::CPU_C1_CLK_CTRL)
            .with_fc(apmu::CPU_C1_CLK_CTRL, 1 << 12)
            .with_mux(0, 3),
    )
    .with_flags(ClockFlags::CRITICAL),
    ClockDescriptor::mix(
        id::apmu::CPU_C1_ACE,
        "cpu_c1_ace_clk",
        &["cpu_c1_core_clk"],
        MixConfig::new(apmu::CPU_C1_CLK_CTRL).with_div(6, 3),
    )
    .with_flags(ClockFlags::CRITICAL),
    ClockDescriptor::mix(
        id::apmu::CCIC_4X,
        "ccic_4x_clk",
        CCIC_4X_PARENTS,
        mux_div_gate_fc(
            apmu::CCIC_CLK_RES_CTRL,
            apmu::CCIC_CLK_RES_CTRL,
            (18, 3),
            1 << 15,
            (23, 2),
            1 << 4,
        ),
    ),
    mux_gate(
        id::apmu::CCIC1PHY,
        "ccic1phy_clk",
        CCIC_PHY_PARENTS,
        apmu::CCIC_CLK_RES_CTRL,
        7,
        1,
        1 << 5,
    ),
    gate(id::apmu::SDH_AXI, "sdh_axi_aclk", PMUA_ACLK, apmu::SDH0_CLK_RES_CTRL, 1 << 3),
    ClockDescriptor::mix(
        id::apmu::SDH0,
        "sdh0_clk",
        SDH01_PARENTS,
        mux_div_gate_fc(
            apmu::SDH0_CLK_RES_CTRL,
            apmu::SDH0_CLK_RES_CTRL,
            (8, 3),
            1 << 11,
            (5, 3),
            1 << 4,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::SDH1,
        "sdh1_clk",
        SDH01_PARENTS,
        mux_div_gate_fc(
            apmu::SDH1_CLK_RES_CTRL,
            apmu::SDH1_CLK_RES_CTRL,
            (8, 3),
            1 << 11,
            (5, 3),
            1 << 4,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::SDH2,
        "sdh2_clk",
        SDH2_PARENTS,
        mux_div_gate_fc(
            apmu::SDH2_CLK_RES_CTRL,
            apmu::SDH2_CLK_RES_CTRL,
            (8, 3),
            1 << 11,
            (5, 3),
            1 << 4,
        ),
    ),
    gate(id::apmu::USB_P1, "usb_p1_aclk", PMUA_ACLK, apmu::USB_CLK_RES_CTRL, 1 << 5),
    gate(id::apmu::USB_AXI, "usb_axi_clk", PMUA_ACLK, apmu::USB_CLK_RES_CTRL, 1 << 1),
    gate(id::apmu::USB30, "usb30_clk", PMUA_ACLK, apmu::USB_CLK_RES_CTRL, 1 << 8),
    ClockDescriptor::mix(
        id::apmu::QSPI,
        "qspi_clk",
        QSPI_PARENTS,
        mux_div_gate_fc(
            apmu::QSPI_CLK_RES_CTRL,
            apmu::QSPI_CLK_RES_CTRL,
            (9, 3),
            1 << 12,
            (6, 3),
            1 << 4,
        ),
    ),
    gate(id::apmu::QSPI_BUS, "qspi_bus_clk", PMUA_ACLK, apmu::QSPI_CLK_RES_CTRL, 1 << 3),
    gate(id::apmu::DMA, "dma_clk", PMUA_ACLK, apmu::DMA_CLK_RES_CTRL, 1 << 3),
    mux_gate(id::apmu::AES, "aes_clk", AES_PARENTS, apmu::AES_CLK_RES_CTRL, 6, 1, 1 << 5),
    ClockDescriptor::mix(
        id::apmu::VPU,
        "vpu_clk",
        MEDIA_PARENTS,
        mux_div_gate_fc(
            apmu::VPU_CLK_RES_CTRL,
            apmu::VPU_CLK_RES_CTRL,
            (13, 3),
            1 << 21,
            (10, 3),
            1 << 3,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::GPU,
        "gpu_clk",
        MEDIA_PARENTS,
        mux_div_gate_fc(
            apmu::GPU_CLK_RES_CTRL,
            apmu::GPU_CLK_RES_CTRL,
            (12, 3),
            1 << 15,
            (18, 3),
            1 << 4,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::EMMC,
        "emmc_clk",
        EMMC_PARENTS,
        mux_div_gate_fc(
            apmu::PMUA_EM_CLK_RES_CTRL,
            apmu::PMUA_EM_CLK_RES_CTRL,
            (8, 3),
            1 << 11,
            (6, 2),
            1 << 4,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::EMMC_X,
        "emmc_x_clk",
        &["pll1_d2_1228p8"],
        MixConfig::new(apmu::PMUA_EM_CLK_RES_CTRL)
            .with_div(12, 3)
            .with_gate(1 << 15),
    ),
    ClockDescriptor::mix(
        id::apmu::AUDIO,
        "audio_clk",
        AUDIO_PARENTS,
        mux_div_gate_fc(
            apmu::AUDIO_CLK_RES_CTRL,
            apmu::AUDIO_CLK_RES_CTRL,
            (4, 3),
            1 << 15,
            (7, 3),
            1 << 12,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::HDMI,
        "hdmi_mclk",
        DISPLAY_PARENTS,
        mux_div_gate_fc(
            apmu::HDMI_CLK_RES_CTRL,
            apmu::HDMI_CLK_RES_CTRL,
            (1, 4),
            1 << 29,
            (5, 3),
            1 << 0,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::PMUA_ACLK,
        "pmua_aclk",
        PMUA_ACLK_PARENTS,
        MixConfig::new(apmu::ACLK_CLK_CTRL)
            .with_div(1, 2)
            .with_fc(apmu::ACLK_CLK_CTRL, 1 << 4)
            .with_mux(0, 1),
    ),
    gate(id::apmu::PCIE0_MASTER, "pcie0_master_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_0, 1 << 2),
    gate(id::apmu::PCIE0_SLAVE, "pcie0_slave_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_0, 1 << 1),
    gate(id::apmu::PCIE0_DBI, "pcie0_dbi_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_0, 1 << 0),
    gate(id::apmu::PCIE1_MASTER, "pcie1_master_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_1, 1 << 2),
    gate(id::apmu::PCIE1_SLAVE, "pcie1_slave_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_1, 1 << 1),
    gate(id::apmu::PCIE1_DBI, "pcie1_dbi_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_1, 1 << 0),
    gate(id::apmu::PCIE2_MASTER, "pcie2_master_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_2, 1 << 2),
    gate(id::apmu::PCIE2_SLAVE, "pcie2_slave_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_2, 1 << 1),
    gate(id::apmu::PCIE2_DBI, "pcie2_dbi_clk", PMUA_ACLK, apmu::PCIE_CLK_RES_CTRL_2, 1 << 0),
    gate(id::apmu::EMAC0_BUS, "emac0_bus_clk", PMUA_ACLK, apmu::EMAC0_CLK_RES_CTRL, 1 << 0),
    gate(id::apmu::EMAC0_PTP, "emac0_ptp_clk", &["pll2_d6"], apmu::EMAC0_CLK_RES_CTRL, 1 << 15),
    gate(id::apmu::EMAC1_BUS, "emac1_bus_clk", PMUA_ACLK, apmu::EMAC1_CLK_RES_CTRL, 1 << 0),
    gate(id::apmu::EMAC1_PTP, "emac1_ptp_clk", &["pll2_d6"], apmu::EMAC1_CLK_RES_CTRL, 1 << 15),
    ClockDescriptor::mix(
        id::apmu::JPG,
        "jpg_clk",
        JPG_PARENTS,
        mux_div_gate_fc(
            apmu::JPG_CLK_RES_CTRL,
            apmu::JPG_CLK_RES_CTRL,
            (5, 3),
            1 << 15,
            (2, 3),
            1 << 1,
        ),
    ),
    mux_gate(
        id::apmu::CCIC2PHY,
        "ccic2phy_clk",
        CCIC_PHY_PARENTS,
        apmu::CSI_CCIC2_CLK_RES_CTRL,
        7,
        1,
        1 << 5,
    ),
    mux_gate(
        id::apmu::CCIC3PHY,
        "ccic3phy_clk",
        CCIC_PHY_PARENTS,
        apmu::CSI_CCIC2_CLK_RES_CTRL,
        31,
        1,
        1 << 30,
    ),
    ClockDescriptor::mix(
        id::apmu::CSI,
        "csi_clk",
        CSI_PARENTS,
        mux_div_gate_fc(
            apmu::CSI_CCIC2_CLK_RES_CTRL,
            apmu::CSI_CCIC2_CLK_RES_CTRL,
            (20, 3),
            1 << 15,
            (16, 3),
            1 << 4,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::CAMM0,
        "camm0_clk",
        CAMM_PARENTS,
        MixConfig::new(apmu::CSI_CCIC2_CLK_RES_CTRL)
            .with_div(23, 4)
            .with_mux(8, 2)
            .with_gate(1 << 28),
    ),
    ClockDescriptor::mix(
        id::apmu::CAMM1,
        "camm1_clk",
        CAMM_PARENTS,
        MixConfig::new(apmu::CSI_CCIC2_CLK_RES_CTRL)
            .with_div(23, 4)
            .with_mux(8, 2)
            .with_gate(1 << 6),
    ),
    ClockDescriptor::mix(
        id::apmu::CAMM2,
        "camm2_clk",
        CAMM_PARENTS,
        MixConfig::new(apmu::CSI_CCIC2_CLK_RES_CTRL)
            .with_div(23, 4)
            .with_mux(8, 2)
            .with_gate(1 << 3),
    ),
    ClockDescriptor::mix(
        id::apmu::ISP_CPP,
        "isp_cpp_clk",
        ISP_CPP_PARENTS,
        MixConfig::new(apmu::ISP_CLK_RES_CTRL)
            .with_div(24, 2)
            .with_mux(26, 1)
            .with_gate(1 << 28),
    ),
    ClockDescriptor::mix(
        id::apmu::ISP_BUS,
        "isp_bus_clk",
        ISP_BUS_PARENTS,
        mux_div_gate_fc(
            apmu::ISP_CLK_RES_CTRL,
            apmu::ISP_CLK_RES_CTRL,
            (18, 3),
            1 << 23,
            (21, 2),
            1 << 17,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::ISP,
        "isp_clk",
        DISPLAY_PARENTS,
        mux_div_gate_fc(
            apmu::ISP_CLK_RES_CTRL,
            apmu::ISP_CLK_RES_CTRL,
            (4, 3),
            1 << 7,
            (8, 2),
            1 << 1,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::DPU_MCLK,
        "dpu_mclk",
        DISPLAY_PARENTS,
        mux_div_gate_fc(
            apmu::LCD_CLK_RES_CTRL2,
            apmu::LCD_CLK_RES_CTRL1,
            (1, 4),
            1 << 29,
            (5, 3),
            1 << 0,
        ),
    ),
    mux_gate(
        id::apmu::DPU_ESC,
        "dpu_esc_clk",
        DPU_ESC_PARENTS,
        apmu::LCD_CLK_RES_CTRL1,
        0,
        2,
        1 << 2,
    ),
    ClockDescriptor::mix(
        id::apmu::DPU_BIT,
        "dpu_bit_clk",
        DPU_BIT_PARENTS,
        mux_div_gate_fc(
            apmu::LCD_CLK_RES_CTRL1,
            apmu::LCD_CLK_RES_CTRL1,
            (17, 3),
            1 << 31,
            (20, 3),
            1 << 16,
        ),
    ),
    ClockDescriptor::mix(
        id::apmu::DPU_PXCLK,
        "dpu_pxclk",
        DPU_PX_PARENTS,
        mux_div_gate_fc(
            apmu::LCD_CLK_RES_CTRL2,
            apmu::LCD_CLK_RES_CTRL1,
            (17, 4),
            1 << 30,
            (21, 3),
            1 << 16,
        ),
    ),
    gate(id::apmu::DPU_HCLK, "dpu_hclk", PMUA_ACLK, apmu::LCD_CLK_RES_CTRL1, 1 << 5),
    ClockDescriptor::mix(
        id::apmu::DPU_SPI,
        "dpu_spi_clk",
        DPU_SPI_PARENTS,
        mux_div_gate_fc(
            apmu::LCD_SPI_CLK_RES_CTRL,
            apmu::LCD_SPI_CLK_RES_CTRL,
            (8, 3),
            1 << 7,
            (12, 3),
            1 << 1,
        ),
    ),
    gate(id::apmu::DPU_SPI_HBUS, "dpu_spi_hbus_clk", PMUA_ACLK, apmu::LCD_SPI_CLK_RES_CTRL, 1 << 3),
    gate(id::apmu::DPU_SPIBUS, "dpu_spi_bus_clk", PMUA_ACLK, apmu::LCD_SPI_CLK_RES_CTRL, 1 << 5),
    gate(id::apmu::DPU_SPI_ACLK, "dpu_spi_aclk", PMUA_ACLK, apmu::LCD_SPI_CLK_RES_CTRL, 1 << 6),
    ClockDescriptor::mix(
        id::apmu::V2D,
        "v2d_clk",
        V2D_PARENTS,
        mux_div_gate_fc(
            apmu::LCD_CLK_RES_CTRL1,
            apmu::LCD_CLK_RES_CTRL1,
            (9, 3),
            1 << 28,
            (12, 2),
            1 << 8,
        ),
    ),
    gate(id::apmu::EMMC_BUS, "emmc_bus_clk", PMUA_ACLK, apmu::PMUA_EM_CLK_RES_CTRL, 1 << 3),
];

/// Register maps of the four clock controller blocks.
#[derive(Clone, Copy)]
pub struct K1RegisterMaps<'a> {
    pub apbs: &'a dyn RegisterMap,
    /// Also contains the PLL lock status register.
    pub mpmu: &'a dyn RegisterMap,
    pub apbc: &'a dyn RegisterMap,
    pub apmu: &'a dyn RegisterMap,
}

/// Memory mapped register maps at the fixed K1 base addresses.
pub struct K1Mmio {
    pub apbs: MmioRegisterMap,
    pub mpmu: MmioRegisterMap,
    pub apbc: MmioRegisterMap,
    pub apmu: MmioRegisterMap,
}

impl K1Mmio {
    /// Create the register maps at the fixed base addresses of the K1.
    ///
    /// # Safety
    ///
    /// This API can be used to potentially create a driver to the same peripheral structure
    /// from multiple threads. The user must ensure that concurrent accesses are safe and do not
    /// interfere with each other.
    pub const unsafe fn new_mmio_fixed() -> Self {
        unsafe {
            Self {
                apbs: MmioRegisterMap::new_mmio_at(apbs::APBS_BASE_ADDR),
                mpmu: MmioRegisterMap::new_mmio_at(mpmu::MPMU_BASE_ADDR),
                apbc: MmioRegisterMap::new_mmio_at(apbc::APBC_BASE_ADDR),
                apmu: MmioRegisterMap::new_mmio_at(apmu::APMU_BASE_ADDR),
            }
        }
    }

    pub fn register_maps(&self) -> K1RegisterMaps<'_> {
        K1RegisterMaps {
            apbs: &self.apbs,
            mpmu: &self.mpmu,
            apbc: &self.apbc,
            apmu: &self.apmu,
        }
    }
}

/// Register the external oscillators listed in [FIXED_CLOCKS].
pub fn register_fixed_clocks<D: DelayNs>(
    ctrl: &mut ClockController<'_, D>,
) -> Result<(), ClockError> {
    for (name, rate) in FIXED_CLOCKS {
        ctrl.register_fixed_rate(name, rate)?;
    }
    Ok(())
}

/// Build the complete K1 clock tree.
///
/// PLLs which are in an unknown state are programmed to their lowest rate during registration.
/// No clock is enabled, use [ClockController::enable_critical] for the clocks which must
/// always run.
pub fn probe<D: DelayNs>(
    maps: K1RegisterMaps<'_>,
    delay: D,
) -> Result<ClockController<'_, D>, ClockError> {
    let mut ctrl = ClockController::new(delay);
    register_fixed_clocks(&mut ctrl)?;
    ctrl.register_domain(Domain::Pll, maps.apbs, Some(maps.mpmu), &PLL_CLOCKS)?;
    ctrl.register_domain(Domain::Mpmu, maps.mpmu, None, &MPMU_CLOCKS)?;
    ctrl.register_domain(Domain::Apbc, maps.apbc, None, &APBC_CLOCKS)?;
    ctrl.register_domain(Domain::Apmu, maps.apmu, None, &APMU_CLOCKS)?;
    ctrl.finalize()?;
    Ok(ctrl)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::collections::BTreeSet;

    use super::*;
    use crate::clocks::{
        ClockHandle, ClockKind,
        testing::{FakeRegisterMap, PanickingDelay},
    };

    #[derive(Default)]
    struct Maps {
        apbs: FakeRegisterMap,
        mpmu: FakeRegisterMap,
        apbc: FakeRegisterMap,
        apmu: FakeRegisterMap,
    }

    impl Maps {
        fn locked() -> Self {
            let maps = Self::default();
            maps.mpmu.set(
                mpmu::POSR,
                mpmu::POSR_PLL1_LOCK | mpmu::POSR_PLL2_LOCK | mpmu::POSR_PLL3_LOCK,
            );
            maps
        }

        fn regmaps(&self) -> K1RegisterMaps<'_> {
            K1RegisterMaps {
                apbs: &self.apbs,
                mpmu: &self.mpmu,
                apbc: &self.apbc,
                apmu: &self.apmu,
            }
        }
    }

    fn handle(ctrl: &ClockController<'_, PanickingDelay>, name: &str) -> ClockHandle {
        ctrl.find_node_by_name(name).unwrap()
    }

    #[test]
    fn probe_links_every_clock() {
        let maps = Maps::locked();
        let ctrl = probe(maps.regmaps(), PanickingDelay).unwrap();
        let expected = [
            (Domain::Pll, id::apbs::NUM_CLOCKS),
            (Domain::Mpmu, id::mpmu::NUM_CLOCKS),
            (Domain::Apbc, id::apbc::NUM_CLOCKS),
            (Domain::Apmu, id::apmu::NUM_CLOCKS),
        ];
        let mut names = BTreeSet::new();
        for (domain, count) in expected {
            assert_eq!(ctrl.clocks(domain).count(), count);
            for index in 0..count as u32 {
                let clk = ctrl.find_node(domain, index).unwrap();
                assert!(names.insert(ctrl.name(clk).unwrap()));
            }
        }
        for (name, _) in FIXED_CLOCKS {
            assert!(names.insert(name));
        }
    }

    #[test]
    fn plls_initialized_to_table_rates() {
        let maps = Maps::locked();
        let ctrl = probe(maps.regmaps(), PanickingDelay).unwrap();
        let rate = |name| ctrl.get_rate(handle(&ctrl, name)).raw();
        assert_eq!(rate("pll1"), 2_457_600_000);
        assert_eq!(rate("pll2"), 3_000_000_000);
        assert_eq!(rate("pll3"), 1_600_000_000);
        assert_eq!(rate("pll1_d8"), 307_200_000);
        assert_eq!(rate("pll1_d8_307p2"), 307_200_000);
        assert_eq!(rate("pll1_m3d128_57p6"), 57_600_000);
        assert_eq!(rate("pll1_d78_31p5"), 31_507_692);
        assert_eq!(rate("pll3_20"), 10_000_000);
        assert_eq!(rate("slow_uart"), 32_000);
        // Zero numerator after reset.
        assert_eq!(rate("slow_uart1_14p74"), 0);
        assert_eq!(maps.apbs.get(apbs::PLL3_SWCR1), 0x0050cd61);
    }

    #[test]
    fn known_pll_state_is_kept() {
        let maps = Maps::locked();
        maps.apbs.set(apbs::PLL3_SWCR1, 0x0050dd67);
        maps.apbs.set(apbs::PLL3_SWCR3, 0x43eaaaab | apbs::PLL_SWCR3_EN);
        let ctrl = probe(maps.regmaps(), PanickingDelay).unwrap();
        let pll3 = handle(&ctrl, "pll3");
        assert_eq!(ctrl.get_rate(pll3).raw(), 3_200_000_000);
        assert!(ctrl.is_enabled(pll3));
        assert_eq!(ctrl.get_rate(handle(&ctrl, "pll3_d2")).raw(), 1_600_000_000);
    }

    #[test]
    fn uart_from_fractional_divider() {
        let maps = Maps::locked();
        let mut ctrl = probe(maps.regmaps(), PanickingDelay).unwrap();
        let slow_uart1 = handle(&ctrl, "slow_uart1_14p74");
        assert_eq!(
            ctrl.set_rate(slow_uart1, Hertz::from_raw(14_745_600))
                .unwrap()
                .raw(),
            14_745_600
        );
        assert_eq!(maps.mpmu.get(mpmu::SUCCR), (125 << 16) | 24);

        let uart0 = ctrl.xlate(Domain::Apbc, &[id::apbc::UART0]).unwrap();
        assert_eq!(ctrl.name(uart0), Some("uart0_clk"));
        assert_eq!(
            ctrl.set_rate(uart0, Hertz::from_raw(14_745_600)).unwrap().raw(),
            14_745_600
        );
        assert_eq!(ctrl.get_parent(uart0), Some(slow_uart1));
        assert_eq!((maps.apbc.get(apbc::UART1_CLK_RST) >> 4) & 0b111, 1);
    }

    #[test]
    fn emmc_rate_change_with_fc() {
        let maps = Maps::locked();
        maps.apmu.self_clearing(apmu::PMUA_EM_CLK_RES_CTRL, 1 << 11);
        let mut ctrl = probe(maps.regmaps(), PanickingDelay).unwrap();
        let emmc = ctrl.find_node(Domain::Apmu, id::apmu::EMMC).unwrap();
        assert_eq!(ctrl.kind(emmc), Some(ClockKind::MuxDivGateFc));
        assert_eq!(
            ctrl.set_rate(emmc, Hertz::from_raw(200_000_000)).unwrap().raw(),
            204_800_000
        );
        let ctrl_reg = maps.apmu.get(apmu::PMUA_EM_CLK_RES_CTRL);
        assert_eq!((ctrl_reg >> 6) & 0b11, 0);
        assert_eq!((ctrl_reg >> 8) & 0b111, 1);
        assert_eq!(ctrl_reg & (1 << 11), 0);
    }

    #[test]
    fn bus_clock_enables_whole_chain() {
        let maps = Maps::locked();
        let mut ctrl = probe(maps.regmaps(), PanickingDelay).unwrap();
        let emmc_bus = ctrl.find_node_by_id(400 + id::apmu::EMMC_BUS).unwrap();
        assert_eq!(ctrl.get_parent(emmc_bus), Some(handle(&ctrl, "pmua_aclk")));
        ctrl.enable(emmc_bus).unwrap();
        assert!(ctrl.is_enabled(emmc_bus));
        assert_ne!(maps.apbs.get(apbs::PLL1_SWCR3) & apbs::PLL_SWCR3_EN, 0);
        assert_ne!(maps.apbs.get(apbs::PLL1_SWCR2) & (1 << 4), 0);
        assert_ne!(maps.mpmu.get(mpmu::ACGR) & (1 << 18), 0);
        assert_ne!(maps.apmu.get(apmu::PMUA_EM_CLK_RES_CTRL) & (1 << 3), 0);
        assert_eq!(
            ctrl.get_rate(emmc_bus).raw(),
            ctrl.get_rate(handle(&ctrl, "pll1_d10_245p76")).raw()
        );
    }

    #[test]
    fn critical_clocks() {
        let maps = Maps::locked();
        let mut ctrl = probe(maps.regmaps(), PanickingDelay).unwrap();
        ctrl.enable_critical().unwrap();
        for name in ["pll1_d8", "cci550_clk", "cpu_c0_core_clk", "cpu_c1_ace_clk"] {
            assert!(ctrl.is_enabled(handle(&ctrl, name)), "{name}");
        }
        assert!(!ctrl.is_enabled(handle(&ctrl, "pll2")));
        assert!(!ctrl.is_enabled(handle(&ctrl, "uart0_clk")));
    }

    #[test]
    fn raw_ids_alias_next_domain() {
        let maps = Maps::locked();
        let ctrl = probe(maps.regmaps(), PanickingDelay).unwrap();
        let sspa0_bclk = ctrl
            .find_node(Domain::Apbc, id::apbc::SSPA0_I2S_BCLK)
            .unwrap();
        assert_eq!(ctrl.name(sspa0_bclk), Some("sspa0_i2s_bclk"));
        assert_eq!(ctrl.find_node_by_id(400), Some(handle(&ctrl, "cci550_clk")));
        assert_eq!(ctrl.find_node_by_id(300), Some(handle(&ctrl, "uart0_clk")));
        assert_eq!(ctrl.xlate(Domain::Pll, &[]), Ok(handle(&ctrl, "pll1")));
    }
}
