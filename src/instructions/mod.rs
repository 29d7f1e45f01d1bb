//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the CPU, the memory bus, and the opcode's metadata, returning the true number of
//! cycles the instruction consumed.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::cpu::CPU;
use crate::opcodes::OpcodeMetadata;
use crate::MemoryBus;

/// Dispatches a single decoded opcode to its handler and returns the true
/// cycle cost, including any page-crossing penalty the handler computed.
///
/// `opcode` is unused directly. `metadata` (looked up by the caller from
/// `OPCODE_TABLE[opcode]`) already carries everything a handler needs, and
/// is threaded through so every handler reads cycle cost, addressing mode,
/// and forced-page-cycle status from the same source of truth. A single
/// match on the opcode byte stands in for a closure table, which would
/// otherwise need to be generic over `MemoryBus` at the point of storage.
pub(crate) fn dispatch(
    cpu: &mut CPU,
    memory: &mut impl MemoryBus,
    opcode: u8,
    metadata: &OpcodeMetadata,
) -> i64 {
    match opcode {
        0x00 => control::execute_brk(cpu, memory, metadata),
        0x01 | 0x05 | 0x09 | 0x0D | 0x11 | 0x15 | 0x19 | 0x1D => alu::execute_ora(cpu, memory, metadata),
        0x06 | 0x0A | 0x0E | 0x16 | 0x1E => shifts::execute_asl(cpu, memory, metadata),
        0x08 => stack::execute_php(cpu, memory, metadata),
        0x10 => branches::execute_branch(cpu, memory, metadata, !cpu.flag_n()),
        0x18 => flags::execute_clc(cpu, memory, metadata),
        0x20 => control::execute_jsr(cpu, memory, metadata),
        0x21 | 0x25 | 0x29 | 0x2D | 0x31 | 0x35 | 0x39 | 0x3D => alu::execute_and(cpu, memory, metadata),
        0x24 | 0x2C => alu::execute_bit(cpu, memory, metadata),
        0x26 | 0x2A | 0x2E | 0x36 | 0x3E => shifts::execute_rol(cpu, memory, metadata),
        0x28 => stack::execute_plp(cpu, memory, metadata),
        0x30 => branches::execute_branch(cpu, memory, metadata, cpu.flag_n()),
        0x38 => flags::execute_sec(cpu, memory, metadata),
        0x40 => control::execute_rti(cpu, memory, metadata),
        0x41 | 0x45 | 0x49 | 0x4D | 0x51 | 0x55 | 0x59 | 0x5D => alu::execute_eor(cpu, memory, metadata),
        0x46 | 0x4A | 0x4E | 0x56 | 0x5E => shifts::execute_lsr(cpu, memory, metadata),
        0x48 => stack::execute_pha(cpu, memory, metadata),
        0x4C | 0x6C => control::execute_jmp(cpu, memory, metadata),
        0x50 => branches::execute_branch(cpu, memory, metadata, !cpu.flag_v()),
        0x58 => flags::execute_cli(cpu, memory, metadata),
        0x60 => control::execute_rts(cpu, memory, metadata),
        0x61 | 0x65 | 0x69 | 0x6D | 0x71 | 0x75 | 0x79 | 0x7D => alu::execute_adc(cpu, memory, metadata),
        0x66 | 0x6A | 0x6E | 0x76 | 0x7E => shifts::execute_ror(cpu, memory, metadata),
        0x68 => stack::execute_pla(cpu, memory, metadata),
        0x70 => branches::execute_branch(cpu, memory, metadata, cpu.flag_v()),
        0x78 => flags::execute_sei(cpu, memory, metadata),
        0x81 | 0x85 | 0x8D | 0x91 | 0x95 | 0x99 | 0x9D => load_store::execute_sta(cpu, memory, metadata),
        0x84 | 0x8C | 0x94 => load_store::execute_sty(cpu, memory, metadata),
        0x86 | 0x8E | 0x96 => load_store::execute_stx(cpu, memory, metadata),
        0x88 => inc_dec::execute_dey(cpu, memory, metadata),
        0x8A => transfer::execute_txa(cpu, memory, metadata),
        0x90 => branches::execute_branch(cpu, memory, metadata, !cpu.flag_c()),
        0x98 => transfer::execute_tya(cpu, memory, metadata),
        0x9A => transfer::execute_txs(cpu, memory, metadata),
        0xA0 | 0xA4 | 0xAC | 0xB4 | 0xBC => load_store::execute_ldy(cpu, memory, metadata),
        0xA1 | 0xA5 | 0xA9 | 0xAD | 0xB1 | 0xB5 | 0xB9 | 0xBD => load_store::execute_lda(cpu, memory, metadata),
        0xA2 | 0xA6 | 0xAE | 0xB6 | 0xBE => load_store::execute_ldx(cpu, memory, metadata),
        0xA8 => transfer::execute_tay(cpu, memory, metadata),
        0xAA => transfer::execute_tax(cpu, memory, metadata),
        0xB0 => branches::execute_branch(cpu, memory, metadata, cpu.flag_c()),
        0xB8 => flags::execute_clv(cpu, memory, metadata),
        0xBA => transfer::execute_tsx(cpu, memory, metadata),
        0xC0 | 0xC4 | 0xCC => alu::execute_cpy(cpu, memory, metadata),
        0xC1 | 0xC5 | 0xC9 | 0xCD | 0xD1 | 0xD5 | 0xD9 | 0xDD => alu::execute_cmp(cpu, memory, metadata),
        0xC6 | 0xCE | 0xD6 | 0xDE => inc_dec::execute_dec(cpu, memory, metadata),
        0xC8 => inc_dec::execute_iny(cpu, memory, metadata),
        0xCA => inc_dec::execute_dex(cpu, memory, metadata),
        0xD0 => branches::execute_branch(cpu, memory, metadata, !cpu.flag_z()),
        0xD8 => flags::execute_cld(cpu, memory, metadata),
        0xE0 | 0xE4 | 0xEC => alu::execute_cpx(cpu, memory, metadata),
        0xE1 | 0xE5 | 0xE9 | 0xED | 0xF1 | 0xF5 | 0xF9 | 0xFD => alu::execute_sbc(cpu, memory, metadata),
        0xE6 | 0xEE | 0xF6 | 0xFE => inc_dec::execute_inc(cpu, memory, metadata),
        0xE8 => inc_dec::execute_inx(cpu, memory, metadata),
        0xEA => control::execute_nop(cpu, memory, metadata),
        0xF0 => branches::execute_branch(cpu, memory, metadata, cpu.flag_z()),
        0xF8 => flags::execute_sed(cpu, memory, metadata),
        _ => unreachable!("step() only dispatches opcodes marked implemented in OPCODE_TABLE"),
    }
}
