//! Clock indices as used by consumers to address a clock inside one clock controller block.
//!
//! The numbering follows the `spacemit,k1-syscon` device tree bindings, so a clock specifier
//! cell taken from a device tree can be used directly as an index.

pub mod apbs {
    pub const PLL1: u32 = 0;
    pub const PLL2: u32 = 1;
    pub const PLL3: u32 = 2;
    pub const PLL1_D2: u32 = 3;
    pub const PLL1_D3: u32 = 4;
    pub const PLL1_D4: u32 = 5;
    pub const PLL1_D5: u32 = 6;
    pub const PLL1_D6: u32 = 7;
    pub const PLL1_D7: u32 = 8;
    pub const PLL1_D8: u32 = 9;
    pub const PLL1_D11: u32 = 10;
    pub const PLL1_D13: u32 = 11;
    pub const PLL1_D23: u32 = 12;
    pub const PLL1_D64: u32 = 13;
    pub const PLL1_D10_AUD: u32 = 14;
    pub const PLL1_D100_AUD: u32 = 15;
    pub const PLL2_D1: u32 = 16;
    pub const PLL2_D2: u32 = 17;
    pub const PLL2_D3: u32 = 18;
    pub const PLL2_D4: u32 = 19;
    pub const PLL2_D5: u32 = 20;
    pub const PLL2_D6: u32 = 21;
    pub const PLL2_D7: u32 = 22;
    pub const PLL2_D8: u32 = 23;
    pub const PLL3_D1: u32 = 24;
    pub const PLL3_D2: u32 = 25;
    pub const PLL3_D3: u32 = 26;
    pub const PLL3_D4: u32 = 27;
    pub const PLL3_D5: u32 = 28;
    pub const PLL3_D6: u32 = 29;
    pub const PLL3_D7: u32 = 30;
    pub const PLL3_D8: u32 = 31;
    pub const PLL3_80: u32 = 32;
    pub const PLL3_40: u32 = 33;
    pub const PLL3_20: u32 = 34;

    pub const NUM_CLOCKS: usize = 35;
}

pub mod mpmu {
    pub const PLL1_307P2: u32 = 0;
    pub const PLL1_76P8: u32 = 1;
    pub const PLL1_61P44: u32 = 2;
    pub const PLL1_153P6: u32 = 3;
    pub const PLL1_102P4: u32 = 4;
    pub const PLL1_51P2: u32 = 5;
    pub const PLL1_51P2_AP: u32 = 6;
    pub const PLL1_57P6: u32 = 7;
    pub const PLL1_25P6: u32 = 8;
    pub const PLL1_12P8: u32 = 9;
    pub const PLL1_12P8_WDT: u32 = 10;
    pub const PLL1_6P4: u32 = 11;
    pub const PLL1_3P2: u32 = 12;
    pub const PLL1_1P6: u32 = 13;
    pub const PLL1_0P8: u32 = 14;
    pub const PLL1_409P6: u32 = 15;
    pub const PLL1_204P8: u32 = 16;
    pub const PLL1_491: u32 = 17;
    pub const PLL1_245P76: u32 = 18;
    pub const PLL1_614: u32 = 19;
    pub const PLL1_47P26: u32 = 20;
    pub const PLL1_31P5: u32 = 21;
    pub const PLL1_819: u32 = 22;
    pub const PLL1_1228: u32 = 23;
    pub const SLOW_UART: u32 = 24;
    pub const SLOW_UART1: u32 = 25;
    pub const SLOW_UART2: u32 = 26;
    pub const WDT: u32 = 27;
    pub const RIPC: u32 = 28;
    pub const I2S_SYSCLK: u32 = 29;
    pub const I2S_BCLK: u32 = 30;
    pub const APB: u32 = 31;
    pub const WDT_BUS: u32 = 32;
    pub const I2S_153P6: u32 = 33;
    pub const I2S_153P6_BASE: u32 = 34;
    pub const I2S_SYSCLK_SRC: u32 = 35;
    pub const I2S_BCLK_FACTOR: u32 = 36;

    pub const NUM_CLOCKS: usize = 37;
}

pub mod apbc {
    pub const UART0: u32 = 0;
    pub const UART2: u32 = 1;
    pub const UART3: u32 = 2;
    pub const UART4: u32 = 3;
    pub const UART5: u32 = 4;
    pub const UART6: u32 = 5;
    pub const UART7: u32 = 6;
    pub const UART8: u32 = 7;
    pub const UART9: u32 = 8;
    pub const GPIO: u32 = 9;
    pub const PWM0: u32 = 10;
    pub const PWM1: u32 = 11;
    pub const PWM2: u32 = 12;
    pub const PWM3: u32 = 13;
    pub const PWM4: u32 = 14;
    pub const PWM5: u32 = 15;
    pub const PWM6: u32 = 16;
    pub const PWM7: u32 = 17;
    pub const PWM8: u32 = 18;
    pub const PWM9: u32 = 19;
    pub const PWM10: u32 = 20;
    pub const PWM11: u32 = 21;
    pub const PWM12: u32 = 22;
    pub const PWM13: u32 = 23;
    pub const PWM14: u32 = 24;
    pub const PWM15: u32 = 25;
    pub const PWM16: u32 = 26;
    pub const PWM17: u32 = 27;
    pub const PWM18: u32 = 28;
    pub const PWM19: u32 = 29;
    pub const SSP3: u32 = 30;
    pub const RTC: u32 = 31;
    pub const TWSI0: u32 = 32;
    pub const TWSI1: u32 = 33;
    pub const TWSI2: u32 = 34;
    pub const TWSI4: u32 = 35;
    pub const TWSI5: u32 = 36;
    pub const TWSI6: u32 = 37;
    pub const TWSI7: u32 = 38;
    pub const TWSI8: u32 = 39;
    pub const TIMERS1: u32 = 40;
    pub const TIMERS2: u32 = 41;
    pub const AIB: u32 = 42;
    pub const ONEWIRE: u32 = 43;
    pub const SSPA0: u32 = 44;
    pub const SSPA1: u32 = 45;
    pub const DRO: u32 = 46;
    pub const IR: u32 = 47;
    pub const TSEN: u32 = 48;
    pub const IPC_AP2AUD: u32 = 49;
    pub const CAN0: u32 = 50;
    pub const CAN0_BUS: u32 = 51;
    pub const UART0_BUS: u32 = 52;
    pub const UART2_BUS: u32 = 53;
    pub const UART3_BUS: u32 = 54;
    pub const UART4_BUS: u32 = 55;
    pub const UART5_BUS: u32 = 56;
    pub const UART6_BUS: u32 = 57;
    pub const UART7_BUS: u32 = 58;
    pub const UART8_BUS: u32 = 59;
    pub const UART9_BUS: u32 = 60;
    pub const GPIO_BUS: u32 = 61;
    pub const PWM0_BUS: u32 = 62;
    pub const PWM1_BUS: u32 = 63;
    pub const PWM2_BUS: u32 = 64;
    pub const PWM3_BUS: u32 = 65;
    pub const PWM4_BUS: u32 = 66;
    pub const PWM5_BUS: u32 = 67;
    pub const PWM6_BUS: u32 = 68;
    pub const PWM7_BUS: u32 = 69;
    pub const PWM8_BUS: u32 = 70;
    pub const PWM9_BUS: u32 = 71;
    pub const PWM10_BUS: u32 = 72;
    pub const PWM11_BUS: u32 = 73;
    pub const PWM12_BUS: u32 = 74;
    pub const PWM13_BUS: u32 = 75;
    pub const PWM14_BUS: u32 = 76;
    pub const PWM15_BUS: u32 = 77;
    pub const PWM16_BUS: u32 = 78;
    pub const PWM17_BUS: u32 = 79;
    pub const PWM18_BUS: u32 = 80;
    pub const PWM19_BUS: u32 = 81;
    pub const SSP3_BUS: u32 = 82;
    pub const RTC_BUS: u32 = 83;
    pub const TWSI0_BUS: u32 = 84;
    pub const TWSI1_BUS: u32 = 85;
    pub const TWSI2_BUS: u32 = 86;
    pub const TWSI4_BUS: u32 = 87;
    pub const TWSI5_BUS: u32 = 88;
    pub const TWSI6_BUS: u32 = 89;
    pub const TWSI7_BUS: u32 = 90;
    pub const TWSI8_BUS: u32 = 91;
    pub const TIMERS1_BUS: u32 = 92;
    pub const TIMERS2_BUS: u32 = 93;
    pub const AIB_BUS: u32 = 94;
    pub const ONEWIRE_BUS: u32 = 95;
    pub const SSPA0_BUS: u32 = 96;
    pub const SSPA1_BUS: u32 = 97;
    pub const TSEN_BUS: u32 = 98;
    pub const IPC_AP2AUD_BUS: u32 = 99;
    pub const SSPA0_I2S_BCLK: u32 = 100;
    pub const SSPA1_I2S_BCLK: u32 = 101;

    pub const NUM_CLOCKS: usize = 102;
}

pub mod apmu {
    pub const CCI550: u32 = 0;
    pub const CPU_C0_HI: u32 = 1;
    pub const CPU_C0_CORE: u32 = 2;
    pub const CPU_C0_ACE: u32 = 3;
    pub const CPU_C0_TCM: u32 = 4;
    pub const CPU_C1_HI: u32 = 5;
    pub const CPU_C1_CORE: u32 = 6;
    pub const CPU_C1_ACE: u32 = 7;
    pub const CCIC_4X: u32 = 8;
    pub const CCIC1PHY: u32 = 9;
    pub const SDH_AXI: u32 = 10;
    pub const SDH0: u32 = 11;
    pub const SDH1: u32 = 12;
    pub const SDH2: u32 = 13;
    pub const USB_P1: u32 = 14;
    pub const USB_AXI: u32 = 15;
    pub const USB30: u32 = 16;
    pub const QSPI: u32 = 17;
    pub const QSPI_BUS: u32 = 18;
    pub const DMA: u32 = 19;
    pub const AES: u32 = 20;
    pub const VPU: u32 = 21;
    pub const GPU: u32 = 22;
    pub const EMMC: u32 = 23;
    pub const EMMC_X: u32 = 24;
    pub const AUDIO: u32 = 25;
    pub const HDMI: u32 = 26;
    pub const PMUA_ACLK: u32 = 27;
    pub const PCIE0_MASTER: u32 = 28;
    pub const PCIE0_SLAVE: u32 = 29;
    pub const PCIE0_DBI: u32 = 30;
    pub const PCIE1_MASTER: u32 = 31;
    pub const PCIE1_SLAVE: u32 = 32;
    pub const PCIE1_DBI: u32 = 33;
    pub const PCIE2_MASTER: u32 = 34;
    pub const PCIE2_SLAVE: u32 = 35;
    pub const PCIE2_DBI: u32 = 36;
    pub const EMAC0_BUS: u32 = 37;
    pub const EMAC0_PTP: u32 = 38;
    pub const EMAC1_BUS: u32 = 39;
    pub const EMAC1_PTP: u32 = 40;
    pub const JPG: u32 = 41;
    pub const CCIC2PHY: u32 = 42;
    pub const CCIC3PHY: u32 = 43;
    pub const CSI: u32 = 44;
    pub const CAMM0: u32 = 45;
    pub const CAMM1: u32 = 46;
    pub const CAMM2: u32 = 47;
    pub const ISP_CPP: u32 = 48;
    pub const ISP_BUS: u32 = 49;
    pub const ISP: u32 = 50;
    pub const DPU_MCLK: u32 = 51;
    pub const DPU_ESC: u32 = 52;
    pub const DPU_BIT: u32 = 53;
    pub const DPU_PXCLK: u32 = 54;
    pub const DPU_HCLK: u32 = 55;
    pub const DPU_SPI: u32 = 56;
    pub const DPU_SPI_HBUS: u32 = 57;
    pub const DPU_SPIBUS: u32 = 58;
    pub const DPU_SPI_ACLK: u32 = 59;
    pub const V2D: u32 = 60;
    pub const EMMC_BUS: u32 = 61;

    pub const NUM_CLOCKS: usize = 62;
}
