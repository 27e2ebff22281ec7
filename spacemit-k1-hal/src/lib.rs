//! # HAL for the SpacemiT K1 clock controllers
//!
//! This crate contains the clock tree engine for the SpacemiT K1 SoC. It builds on top of the
//! register definitions of the [spacemit_k1] crate.
//!
//! The clock tree is described by static [clocks::ClockDescriptor] tables. A
//! [clocks::ClockController] links these tables into a tree at run-time and exposes rate,
//! gating and parent selection operations for every clock. The K1 tables and a probe helper
//! which registers the whole SoC clock tree live inside [clocks::k1].
#![no_std]

pub mod clocks;
pub mod regmap;
pub mod time;
