//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table is the single source of truth for all
//! 6502 instruction information: mnemonic, addressing mode, and base cycle
//! cost. It covers the 151 documented NMOS 6502 opcodes; the remaining 105
//! byte values decode to [`Mnemonic::Ill`] with [`AddressingMode::None`]
//! (length 1, zero cycles) so the engine and disassembler can always advance
//! past them deterministically.

use crate::addressing::AddressingMode;

/// Instruction mnemonic: the 56 documented 6502 instructions plus `Ill` for
/// unassigned opcode bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    /// Illegal/undocumented opcode.
    Ill,
}

impl Mnemonic {
    /// The conventional three-letter assembly spelling, or `"???"` for
    /// illegal opcodes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Ill => "???",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use mos6502::{lookup, AddressingMode, Mnemonic};
///
/// // LDA immediate (opcode 0xA9)
/// let lda_imm = lookup(0xA9);
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.length(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode; determines the instruction length.
    pub mode: AddressingMode,

    /// Base cycle cost, before page-crossing and branch penalties.
    ///
    /// Documented opcodes cost 2-7 cycles. Illegal entries carry 0.
    pub base_cycles: u8,
}

impl OpcodeEntry {
    /// Total instruction length in bytes (1-3), derived from the mode.
    pub const fn length(&self) -> u8 {
        self.mode.instruction_length()
    }

    /// True for the 151 documented opcodes, false for unassigned bytes.
    pub const fn is_legal(&self) -> bool {
        !matches!(self.mnemonic, Mnemonic::Ill)
    }
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> OpcodeEntry {
    OpcodeEntry {
        mnemonic,
        mode,
        base_cycles,
    }
}

/// Unassigned opcode entry: length 1, zero cycles.
const ILL: OpcodeEntry = op(Mnemonic::Ill, AddressingMode::None, 0);

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Base cycle costs exclude the dynamic penalties: +1 for a page cross on
/// read-type AbsoluteX/AbsoluteY/IndirectY accesses, and +1/+2 for taken
/// branches. Indexed stores and read-modify-write instructions already price
/// the worst case into their base cost, matching 6502 hardware.
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeEntry; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;
    [
        // 0x00 - 0x0F
        op(Brk, Implied, 7), op(Ora, IndirectX, 6), ILL, ILL,
        ILL, op(Ora, ZeroPage, 3), op(Asl, ZeroPage, 5), ILL,
        op(Php, Implied, 3), op(Ora, Immediate, 2), op(Asl, Accumulator, 2), ILL,
        ILL, op(Ora, Absolute, 4), op(Asl, Absolute, 6), ILL,
        // 0x10 - 0x1F
        op(Bpl, Relative, 2), op(Ora, IndirectY, 5), ILL, ILL,
        ILL, op(Ora, ZeroPageX, 4), op(Asl, ZeroPageX, 6), ILL,
        op(Clc, Implied, 2), op(Ora, AbsoluteY, 4), ILL, ILL,
        ILL, op(Ora, AbsoluteX, 4), op(Asl, AbsoluteX, 7), ILL,
        // 0x20 - 0x2F
        op(Jsr, Absolute, 6), op(And, IndirectX, 6), ILL, ILL,
        op(Bit, ZeroPage, 3), op(And, ZeroPage, 3), op(Rol, ZeroPage, 5), ILL,
        op(Plp, Implied, 4), op(And, Immediate, 2), op(Rol, Accumulator, 2), ILL,
        op(Bit, Absolute, 4), op(And, Absolute, 4), op(Rol, Absolute, 6), ILL,
        // 0x30 - 0x3F
        op(Bmi, Relative, 2), op(And, IndirectY, 5), ILL, ILL,
        ILL, op(And, ZeroPageX, 4), op(Rol, ZeroPageX, 6), ILL,
        op(Sec, Implied, 2), op(And, AbsoluteY, 4), ILL, ILL,
        ILL, op(And, AbsoluteX, 4), op(Rol, AbsoluteX, 7), ILL,
        // 0x40 - 0x4F
        op(Rti, Implied, 6), op(Eor, IndirectX, 6), ILL, ILL,
        ILL, op(Eor, ZeroPage, 3), op(Lsr, ZeroPage, 5), ILL,
        op(Pha, Implied, 3), op(Eor, Immediate, 2), op(Lsr, Accumulator, 2), ILL,
        op(Jmp, Absolute, 3), op(Eor, Absolute, 4), op(Lsr, Absolute, 6), ILL,
        // 0x50 - 0x5F
        op(Bvc, Relative, 2), op(Eor, IndirectY, 5), ILL, ILL,
        ILL, op(Eor, ZeroPageX, 4), op(Lsr, ZeroPageX, 6), ILL,
        op(Cli, Implied, 2), op(Eor, AbsoluteY, 4), ILL, ILL,
        ILL, op(Eor, AbsoluteX, 4), op(Lsr, AbsoluteX, 7), ILL,
        // 0x60 - 0x6F
        op(Rts, Implied, 6), op(Adc, IndirectX, 6), ILL, ILL,
        ILL, op(Adc, ZeroPage, 3), op(Ror, ZeroPage, 5), ILL,
        op(Pla, Implied, 4), op(Adc, Immediate, 2), op(Ror, Accumulator, 2), ILL,
        op(Jmp, Indirect, 5), op(Adc, Absolute, 4), op(Ror, Absolute, 6), ILL,
        // 0x70 - 0x7F
        op(Bvs, Relative, 2), op(Adc, IndirectY, 5), ILL, ILL,
        ILL, op(Adc, ZeroPageX, 4), op(Ror, ZeroPageX, 6), ILL,
        op(Sei, Implied, 2), op(Adc, AbsoluteY, 4), ILL, ILL,
        ILL, op(Adc, AbsoluteX, 4), op(Ror, AbsoluteX, 7), ILL,
        // 0x80 - 0x8F
        ILL, op(Sta, IndirectX, 6), ILL, ILL,
        op(Sty, ZeroPage, 3), op(Sta, ZeroPage, 3), op(Stx, ZeroPage, 3), ILL,
        op(Dey, Implied, 2), ILL, op(Txa, Implied, 2), ILL,
        op(Sty, Absolute, 4), op(Sta, Absolute, 4), op(Stx, Absolute, 4), ILL,
        // 0x90 - 0x9F
        op(Bcc, Relative, 2), op(Sta, IndirectY, 6), ILL, ILL,
        op(Sty, ZeroPageX, 4), op(Sta, ZeroPageX, 4), op(Stx, ZeroPageY, 4), ILL,
        op(Tya, Implied, 2), op(Sta, AbsoluteY, 5), op(Txs, Implied, 2), ILL,
        ILL, op(Sta, AbsoluteX, 5), ILL, ILL,
        // 0xA0 - 0xAF
        op(Ldy, Immediate, 2), op(Lda, IndirectX, 6), op(Ldx, Immediate, 2), ILL,
        op(Ldy, ZeroPage, 3), op(Lda, ZeroPage, 3), op(Ldx, ZeroPage, 3), ILL,
        op(Tay, Implied, 2), op(Lda, Immediate, 2), op(Tax, Implied, 2), ILL,
        op(Ldy, Absolute, 4), op(Lda, Absolute, 4), op(Ldx, Absolute, 4), ILL,
        // 0xB0 - 0xBF
        op(Bcs, Relative, 2), op(Lda, IndirectY, 5), ILL, ILL,
        op(Ldy, ZeroPageX, 4), op(Lda, ZeroPageX, 4), op(Ldx, ZeroPageY, 4), ILL,
        op(Clv, Implied, 2), op(Lda, AbsoluteY, 4), op(Tsx, Implied, 2), ILL,
        op(Ldy, AbsoluteX, 4), op(Lda, AbsoluteX, 4), op(Ldx, AbsoluteY, 4), ILL,
        // 0xC0 - 0xCF
        op(Cpy, Immediate, 2), op(Cmp, IndirectX, 6), ILL, ILL,
        op(Cpy, ZeroPage, 3), op(Cmp, ZeroPage, 3), op(Dec, ZeroPage, 5), ILL,
        op(Iny, Implied, 2), op(Cmp, Immediate, 2), op(Dex, Implied, 2), ILL,
        op(Cpy, Absolute, 4), op(Cmp, Absolute, 4), op(Dec, Absolute, 6), ILL,
        // 0xD0 - 0xDF
        op(Bne, Relative, 2), op(Cmp, IndirectY, 5), ILL, ILL,
        ILL, op(Cmp, ZeroPageX, 4), op(Dec, ZeroPageX, 6), ILL,
        op(Cld, Implied, 2), op(Cmp, AbsoluteY, 4), ILL, ILL,
        ILL, op(Cmp, AbsoluteX, 4), op(Dec, AbsoluteX, 7), ILL,
        // 0xE0 - 0xEF
        op(Cpx, Immediate, 2), op(Sbc, IndirectX, 6), ILL, ILL,
        op(Cpx, ZeroPage, 3), op(Sbc, ZeroPage, 3), op(Inc, ZeroPage, 5), ILL,
        op(Inx, Implied, 2), op(Sbc, Immediate, 2), op(Nop, Implied, 2), ILL,
        op(Cpx, Absolute, 4), op(Sbc, Absolute, 4), op(Inc, Absolute, 6), ILL,
        // 0xF0 - 0xFF
        op(Beq, Relative, 2), op(Sbc, IndirectY, 5), ILL, ILL,
        ILL, op(Sbc, ZeroPageX, 4), op(Inc, ZeroPageX, 6), ILL,
        op(Sed, Implied, 2), op(Sbc, AbsoluteY, 4), ILL, ILL,
        ILL, op(Sbc, AbsoluteX, 4), op(Inc, AbsoluteX, 7), ILL,
    ]
};

/// Number of documented (legal) opcodes in the table.
pub const LEGAL_OPCODE_COUNT: usize = {
    let mut n = 0;
    let mut i = 0;
    while i < 256 {
        if OPCODE_TABLE[i].is_legal() {
            n += 1;
        }
        i += 1;
    }
    n
};

/// Returns the opcode entry for a byte value. Total function: unassigned
/// bytes resolve to an illegal entry rather than failing.
pub const fn lookup(opcode: u8) -> OpcodeEntry {
    OPCODE_TABLE[opcode as usize]
}
