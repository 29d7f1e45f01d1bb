//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 6502 instruction information.
//!
//! The table covers:
//! - **151 documented instructions** - official NMOS 6502 opcodes, all implemented
//! - **105 illegal/undocumented opcodes** - marked with the "???" mnemonic; dispatching
//!   one of these is a hard error, since illegal/undocumented opcodes are not implemented
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Base cycle cost (the documented cost for the non-page-crossing case)
//! - Instruction size in bytes
//! - Whether this addressing-mode/instruction pairing always pays the extra
//!   page-boundary cycle (stores and read-modify-write instructions) rather
//!   than only when a page is actually crossed (loads and other pure reads)

use crate::addressing::AddressingMode;

/// Metadata for a single 6502 opcode.
///
/// This struct contains all static information about an instruction needed for
/// decoding and cycle accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost: the full documented cost of the instruction in the
    /// non-page-crossing case (already includes the opcode fetch).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// True for the indexed/indirect addressing variants that always pay the
    /// extra page-boundary bus cycle: stores, and the read-modify-write shift
    /// and inc/dec instructions in Absolute,X. False variants only pay it
    /// when a page is actually crossed.
    pub forced_page_cycle: bool,

    /// Whether this opcode byte is a documented NMOS 6502 instruction.
    /// `false` entries are the 105 illegal/undocumented opcodes; dispatching
    /// one is `ExecutionError::IllegalOpcode`.
    pub implemented: bool,
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cpu6502::OPCODE_TABLE;
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.base_cycles, 2);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.implemented);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata {
        mnemonic: "BRK",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 7,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x01
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x02
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x03
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x04
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x05
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x06
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x07
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x08
    OpcodeMetadata {
        mnemonic: "PHP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 3,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x09
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x0A
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x0B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x0C
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x0D
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x0E
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x0F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x10
    OpcodeMetadata {
        mnemonic: "BPL",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x11
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x12
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x13
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x14
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x15
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x16
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x17
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x18
    OpcodeMetadata {
        mnemonic: "CLC",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x19
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x1A
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x1B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x1C
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x1D
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x1E
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0x1F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x20
    OpcodeMetadata {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x21
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x22
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x23
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x24
    OpcodeMetadata {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x25
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x26
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x27
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x28
    OpcodeMetadata {
        mnemonic: "PLP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 4,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x29
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x2A
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x2B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x2C
    OpcodeMetadata {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x2D
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x2E
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x2F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x30
    OpcodeMetadata {
        mnemonic: "BMI",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x31
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x32
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x33
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x34
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x35
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x36
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x37
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x38
    OpcodeMetadata {
        mnemonic: "SEC",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x39
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x3A
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x3B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x3C
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x3D
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x3E
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0x3F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x40
    OpcodeMetadata {
        mnemonic: "RTI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 6,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x41
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x42
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x43
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x44
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x45
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x46
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x47
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x48
    OpcodeMetadata {
        mnemonic: "PHA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 3,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x49
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x4A
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x4B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x4C
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 3,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x4D
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x4E
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x4F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x50
    OpcodeMetadata {
        mnemonic: "BVC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x51
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x52
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x53
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x54
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x55
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x56
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x57
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x58
    OpcodeMetadata {
        mnemonic: "CLI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x59
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x5A
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x5B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x5C
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x5D
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x5E
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0x5F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x60
    OpcodeMetadata {
        mnemonic: "RTS",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 6,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x61
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x62
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x63
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x64
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x65
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x66
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x67
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x68
    OpcodeMetadata {
        mnemonic: "PLA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 4,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x69
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x6A
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x6B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x6C
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Indirect,
        base_cycles: 5,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x6D
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x6E
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x6F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x70
    OpcodeMetadata {
        mnemonic: "BVS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x71
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x72
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x73
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x74
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x75
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x76
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x77
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x78
    OpcodeMetadata {
        mnemonic: "SEI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x79
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x7A
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x7B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x7C
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x7D
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x7E
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0x7F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x80
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x81
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x82
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x83
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x84
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x85
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x86
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x87
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x88
    OpcodeMetadata {
        mnemonic: "DEY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x89
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x8A
    OpcodeMetadata {
        mnemonic: "TXA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x8B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x8C
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x8D
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x8E
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x8F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x90
    OpcodeMetadata {
        mnemonic: "BCC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x91
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0x92
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x93
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x94
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x95
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x96
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x97
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x98
    OpcodeMetadata {
        mnemonic: "TYA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x99
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        size_bytes: 3,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0x9A
    OpcodeMetadata {
        mnemonic: "TXS",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0x9B
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x9C
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x9D
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        size_bytes: 3,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0x9E
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0x9F
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xA0
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xA1
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xA2
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xA3
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xA4
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xA5
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xA6
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xA7
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xA8
    OpcodeMetadata {
        mnemonic: "TAY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xA9
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xAA
    OpcodeMetadata {
        mnemonic: "TAX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xAB
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xAC
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xAD
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xAE
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xAF
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xB0
    OpcodeMetadata {
        mnemonic: "BCS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xB1
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xB2
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xB3
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xB4
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xB5
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xB6
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xB7
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xB8
    OpcodeMetadata {
        mnemonic: "CLV",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xB9
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xBA
    OpcodeMetadata {
        mnemonic: "TSX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xBB
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xBC
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xBD
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xBE
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xBF
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xC0
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xC1
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xC2
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xC3
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xC4
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xC5
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xC6
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xC7
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xC8
    OpcodeMetadata {
        mnemonic: "INY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xC9
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xCA
    OpcodeMetadata {
        mnemonic: "DEX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xCB
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xCC
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xCD
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xCE
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xCF
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xD0
    OpcodeMetadata {
        mnemonic: "BNE",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xD1
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xD2
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xD3
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xD4
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xD5
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xD6
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xD7
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xD8
    OpcodeMetadata {
        mnemonic: "CLD",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xD9
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xDA
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xDB
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xDC
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xDD
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xDE
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0xDF
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xE0
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xE1
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xE2
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xE3
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xE4
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xE5
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xE6
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xE7
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xE8
    OpcodeMetadata {
        mnemonic: "INX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xE9
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xEA
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xEB
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xEC
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xED
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xEE
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xEF
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xF0
    OpcodeMetadata {
        mnemonic: "BEQ",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xF1
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xF2
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xF3
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xF4
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xF5
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xF6
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xF7
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xF8
    OpcodeMetadata {
        mnemonic: "SED",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xF9
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xFA
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xFB
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xFC
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
    // 0xFD
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        forced_page_cycle: false,
        implemented: true,
    },
    // 0xFE
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        forced_page_cycle: true,
        implemented: true,
    },
    // 0xFF
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        forced_page_cycle: false,
        implemented: false,
    },
];
