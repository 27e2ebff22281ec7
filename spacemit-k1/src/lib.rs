//! # Register definitions for the SpacemiT K1 clock controller units
//!
//! The K1 spreads its clock control registers over four system controller blocks:
//!
//! - [apbs]: APB spare block which contains all PLL control words.
//! - [mpmu]: Main PMU. Contains the PLL lock status register and the low speed clock taps.
//! - [apbc]: APB clock controller for the low speed peripherals.
//! - [apmu]: Application PMU for the high speed peripherals and the CPU clusters.
//!
//! All offsets are relative to the base address of the respective block. [bindings] contains the
//! clock indices used by consumers to address a clock within one block.
#![no_std]

pub mod apbc;
pub mod apbs;
pub mod apmu;
pub mod bindings;
pub mod mpmu;
