//! # Shift and Rotate Instructions
//!
//! Bit shift and rotate operations: ASL, LSR, ROL, ROR. Each operates either
//! on the accumulator (`Accumulator` addressing mode) or on a memory operand,
//! read-modify-write style.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::opcodes::OpcodeMetadata;
use crate::MemoryBus;

/// Reads the operand (accumulator or memory), applies `op` to it, writes the
/// result back to the same place, and sets Z/N from the result. `op` returns
/// `(result, carry_out)`.
fn shift_or_rotate(
    cpu: &mut CPU,
    memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
    op: impl FnOnce(u8, bool) -> (u8, bool),
) -> i64 {
    let carry_in = cpu.status.carry();

    if metadata.addressing_mode == AddressingMode::Accumulator {
        let (result, carry_out) = op(cpu.a, carry_in);
        cpu.a = result;
        cpu.status.set_carry(carry_out);
        cpu.status.set_zero_negative_from(result);
    } else {
        let (addr, _) = cpu.effective_address(memory, metadata.addressing_mode, true);
        let value = memory.read(addr);
        let (result, carry_out) = op(value, carry_in);
        memory.write(addr, result);
        cpu.status.set_carry(carry_out);
        cpu.status.set_zero_negative_from(result);
    }

    metadata.base_cycles as i64
}

pub(crate) fn execute_asl(
    cpu: &mut CPU,
    memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    shift_or_rotate(cpu, memory, metadata, |value, _| {
        (value << 1, value & 0x80 != 0)
    })
}

pub(crate) fn execute_lsr(
    cpu: &mut CPU,
    memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    shift_or_rotate(cpu, memory, metadata, |value, _| {
        (value >> 1, value & 0x01 != 0)
    })
}

pub(crate) fn execute_rol(
    cpu: &mut CPU,
    memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    shift_or_rotate(cpu, memory, metadata, |value, carry_in| {
        let result = (value << 1) | carry_in as u8;
        (result, value & 0x80 != 0)
    })
}

pub(crate) fn execute_ror(
    cpu: &mut CPU,
    memory: &mut impl MemoryBus,
    metadata: &OpcodeMetadata,
) -> i64 {
    shift_or_rotate(cpu, memory, metadata, |value, carry_in| {
        let result = (value >> 1) | ((carry_in as u8) << 7);
        (result, value & 0x01 != 0)
    })
}
