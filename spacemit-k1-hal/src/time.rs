//! Time units

/// Hertz
pub type Hertz = fugit::HertzU64;

/// Microseconds
pub type Micros = fugit::MicrosDurationU32;
