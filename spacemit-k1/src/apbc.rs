//! APB clock controller (APBC) block.
//!
//! Every peripheral owns one `*_CLK_RST` register. Bit 0 gates the bus clock, bit 1 gates
//! the functional clock and bits 4..=6 select the functional clock source.

pub const APBC_BASE_ADDR: usize = 0xD401_5000;

pub const UART1_CLK_RST: u32 = 0x00;
pub const UART2_CLK_RST: u32 = 0x04;
pub const GPIO_CLK_RST: u32 = 0x08;
pub const PWM0_CLK_RST: u32 = 0x0C;
pub const PWM1_CLK_RST: u32 = 0x10;
pub const PWM2_CLK_RST: u32 = 0x14;
pub const PWM3_CLK_RST: u32 = 0x18;
/// Reads of this register always return zero.
pub const TWSI8_CLK_RST: u32 = 0x20;
pub const UART3_CLK_RST: u32 = 0x24;
pub const RTC_CLK_RST: u32 = 0x28;
pub const TWSI0_CLK_RST: u32 = 0x2C;
pub const TWSI1_CLK_RST: u32 = 0x30;
pub const TIMERS1_CLK_RST: u32 = 0x34;
pub const TWSI2_CLK_RST: u32 = 0x38;
pub const AIB_CLK_RST: u32 = 0x3C;
pub const TWSI4_CLK_RST: u32 = 0x40;
pub const TIMERS2_CLK_RST: u32 = 0x44;
pub const ONEWIRE_CLK_RST: u32 = 0x48;
pub const TWSI5_CLK_RST: u32 = 0x4C;
pub const DRO_CLK_RST: u32 = 0x58;
pub const IR_CLK_RST: u32 = 0x5C;
pub const TWSI6_CLK_RST: u32 = 0x60;
pub const TWSI7_CLK_RST: u32 = 0x68;
pub const TSEN_CLK_RST: u32 = 0x6C;
pub const UART4_CLK_RST: u32 = 0x70;
pub const UART5_CLK_RST: u32 = 0x74;
pub const UART6_CLK_RST: u32 = 0x78;
pub const SSP3_CLK_RST: u32 = 0x7C;
pub const SSPA0_CLK_RST: u32 = 0x80;
pub const SSPA1_CLK_RST: u32 = 0x84;
pub const IPC_AP2AUD_CLK_RST: u32 = 0x90;
pub const UART7_CLK_RST: u32 = 0x94;
pub const UART8_CLK_RST: u32 = 0x98;
pub const UART9_CLK_RST: u32 = 0x9C;
pub const CAN0_CLK_RST: u32 = 0xA0;
pub const PWM4_CLK_RST: u32 = 0xA8;
pub const PWM5_CLK_RST: u32 = 0xAC;
pub const PWM6_CLK_RST: u32 = 0xB0;
pub const PWM7_CLK_RST: u32 = 0xB4;
pub const PWM8_CLK_RST: u32 = 0x20C;
pub const PWM9_CLK_RST: u32 = 0x210;
pub const PWM10_CLK_RST: u32 = 0x214;
pub const PWM11_CLK_RST: u32 = 0x218;
pub const PWM12_CLK_RST: u32 = 0x21C;
pub const PWM13_CLK_RST: u32 = 0x220;
pub const PWM14_CLK_RST: u32 = 0x224;
pub const PWM15_CLK_RST: u32 = 0x228;
pub const PWM16_CLK_RST: u32 = 0x22C;
pub const PWM17_CLK_RST: u32 = 0x230;
pub const PWM18_CLK_RST: u32 = 0x234;
pub const PWM19_CLK_RST: u32 = 0x238;
