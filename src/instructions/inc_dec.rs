//! # Increment and Decrement Instructions
//!
//! Memory operations (INC, DEC) and register operations (INX, INY, DEX, DEY).
//! All update Z and N from the result; none touch the carry flag.

use crate::cpu::CPU;
use crate::opcodes::OpcodeMetadata;
use crate::MemoryBus;

pub(crate) fn execute_inc(
    cpu: &mut CPU,
    memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    let (addr, _) = cpu.effective_address(memory, metadata.addressing_mode, true);
    let result = memory.read(addr).wrapping_add(1);
    memory.write(addr, result);
    cpu.status.set_zero_negative_from(result);
    metadata.base_cycles as i64
}

pub(crate) fn execute_dec(
    cpu: &mut CPU,
    memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    let (addr, _) = cpu.effective_address(memory, metadata.addressing_mode, true);
    let result = memory.read(addr).wrapping_sub(1);
    memory.write(addr, result);
    cpu.status.set_zero_negative_from(result);
    metadata.base_cycles as i64
}

pub(crate) fn execute_inx(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zero_negative_from(cpu.x);
    metadata.base_cycles as i64
}

pub(crate) fn execute_iny(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zero_negative_from(cpu.y);
    metadata.base_cycles as i64
}

pub(crate) fn execute_dex(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zero_negative_from(cpu.x);
    metadata.base_cycles as i64
}

pub(crate) fn execute_dey(
    cpu: &mut CPU,
    _memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zero_negative_from(cpu.y);
    metadata.base_cycles as i64
}
