//! Shared integration-test scaffolding.
//!
//! Every test family resets a CPU straight to `0x8000` (reset zeroes memory,
//! so there is nothing to clean up between tests) and writes its program
//! bytes from there.

#![allow(dead_code)]

use cpu6502::{FlatMemory, CPU};

pub const ORIGIN: u16 = 0x8000;

/// A fresh CPU and memory image, reset to [`ORIGIN`].
pub fn setup() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset_to(ORIGIN, &mut memory);
    (cpu, memory)
}
