//! Host test fixtures.
extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::regmap::RegisterMap;

/// In-memory register map. Unwritten registers read as zero.
#[derive(Default)]
pub struct FakeRegisterMap {
    regs: RefCell<BTreeMap<u32, u32>>,
    /// Bits which the hardware clears right after they were written.
    self_clearing: RefCell<BTreeMap<u32, u32>>,
    write_log: RefCell<Vec<(u32, u32)>>,
    reads: Cell<usize>,
}

impl FakeRegisterMap {
    /// Set a register without counting it as a write.
    pub fn set(&self, offset: u32, value: u32) {
        self.regs.borrow_mut().insert(offset, value);
    }

    pub fn get(&self, offset: u32) -> u32 {
        self.regs.borrow().get(&offset).copied().unwrap_or(0)
    }

    pub fn self_clearing(&self, offset: u32, mask: u32) {
        *self.self_clearing.borrow_mut().entry(offset).or_insert(0) |= mask;
    }

    pub fn writes(&self) -> usize {
        self.write_log.borrow().len()
    }

    /// Offsets of all writes in order.
    pub fn written_offsets(&self) -> Vec<u32> {
        self.write_log.borrow().iter().map(|(offset, _)| *offset).collect()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl RegisterMap for FakeRegisterMap {
    fn read(&self, offset: u32) -> u32 {
        self.reads.set(self.reads.get() + 1);
        self.get(offset)
    }

    fn write(&self, offset: u32, value: u32) {
        self.write_log.borrow_mut().push((offset, value));
        let clear = self
            .self_clearing
            .borrow()
            .get(&offset)
            .copied()
            .unwrap_or(0);
        self.set(offset, value & !clear);
    }
}

/// Delay provider which only accounts for the requested delays.
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub calls: usize,
    pub waited_us: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.waited_us += (ns / 1000) as u64;
    }

    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.waited_us += us as u64;
    }
}

/// Delay provider for code paths which must never wait.
#[derive(Debug, Default)]
pub struct PanickingDelay;

impl DelayNs for PanickingDelay {
    fn delay_ns(&mut self, _ns: u32) {
        panic!("unexpected delay");
    }
}
