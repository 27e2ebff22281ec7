//! Application PMU (APMU) block.
//!
//! Most clocks in this block are mux/divider/gate combinations which need the frequency
//! change (FC) handshake when their divider or mux field is changed at run-time.

pub const APMU_BASE_ADDR: usize = 0xD428_2800;

pub const JPG_CLK_RES_CTRL: u32 = 0x020;
pub const CSI_CCIC2_CLK_RES_CTRL: u32 = 0x024;
pub const ISP_CLK_RES_CTRL: u32 = 0x038;
pub const LCD_CLK_RES_CTRL1: u32 = 0x044;
pub const LCD_SPI_CLK_RES_CTRL: u32 = 0x048;
pub const LCD_CLK_RES_CTRL2: u32 = 0x04C;
pub const CCIC_CLK_RES_CTRL: u32 = 0x050;
pub const SDH0_CLK_RES_CTRL: u32 = 0x054;
pub const SDH1_CLK_RES_CTRL: u32 = 0x058;
pub const USB_CLK_RES_CTRL: u32 = 0x05C;
pub const QSPI_CLK_RES_CTRL: u32 = 0x060;
pub const DMA_CLK_RES_CTRL: u32 = 0x064;
pub const AES_CLK_RES_CTRL: u32 = 0x068;
pub const VPU_CLK_RES_CTRL: u32 = 0x0A4;
pub const GPU_CLK_RES_CTRL: u32 = 0x0CC;
pub const SDH2_CLK_RES_CTRL: u32 = 0x0E0;
pub const PMUA_EM_CLK_RES_CTRL: u32 = 0x104;
pub const AUDIO_CLK_RES_CTRL: u32 = 0x14C;
pub const HDMI_CLK_RES_CTRL: u32 = 0x1B8;
pub const CCI550_CLK_CTRL: u32 = 0x300;
pub const ACLK_CLK_CTRL: u32 = 0x388;
pub const CPU_C0_CLK_CTRL: u32 = 0x38C;
pub const CPU_C1_CLK_CTRL: u32 = 0x390;
pub const PCIE_CLK_RES_CTRL_0: u32 = 0x3CC;
pub const PCIE_CLK_RES_CTRL_1: u32 = 0x3D4;
pub const PCIE_CLK_RES_CTRL_2: u32 = 0x3DC;
pub const EMAC0_CLK_RES_CTRL: u32 = 0x3E4;
pub const EMAC1_CLK_RES_CTRL: u32 = 0x3EC;
