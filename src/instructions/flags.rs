//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD, SED. Implicit addressing, 2 cycles each,
//! each touching exactly one flag.

use crate::cpu::CPU;
use crate::opcodes::OpcodeMetadata;
use crate::MemoryBus;

pub(crate) fn execute_clc(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.status.set_carry(false);
    metadata.base_cycles as i64
}

pub(crate) fn execute_sec(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.status.set_carry(true);
    metadata.base_cycles as i64
}

pub(crate) fn execute_cli(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.status.set_interrupt_disable(false);
    metadata.base_cycles as i64
}

pub(crate) fn execute_sei(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.status.set_interrupt_disable(true);
    metadata.base_cycles as i64
}

pub(crate) fn execute_clv(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.status.set_overflow(false);
    metadata.base_cycles as i64
}

pub(crate) fn execute_cld(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.status.set_decimal(false);
    metadata.base_cycles as i64
}

pub(crate) fn execute_sed(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.status.set_decimal(true);
    metadata.base_cycles as i64
}
