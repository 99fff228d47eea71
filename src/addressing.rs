//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 processor plus a
//! `None` marker used for unassigned opcode bytes. Each mode determines how
//! the CPU interprets the bytes that follow an opcode and how the effective
//! memory address is calculated.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines operand length and effective-address
/// computation. `None` marks illegal/unassigned opcodes; it decodes with an
/// instruction length of 1 so the engine and disassembler can advance past
/// unknown bytes deterministically.
///
/// # Operand Sizes
///
/// - **0 bytes**: None, Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// Illegal/unassigned opcode, no operand.
    None,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: `LSR A`, `ROL A`, `ASL A`
    Accumulator,

    /// Full 16-bit address.
    ///
    /// Example: `JMP $1234`
    Absolute,

    /// 16-bit address indexed by X. May incur a +1 cycle page-cross penalty
    /// on read accesses.
    ///
    /// Example: `LDA $1234,X`
    AbsoluteX,

    /// 16-bit address indexed by Y. May incur a +1 cycle page-cross penalty
    /// on read accesses.
    ///
    /// Example: `LDA $1234,Y`
    AbsoluteY,

    /// 8-bit constant operand in the instruction.
    ///
    /// Example: `LDA #$10`
    Immediate,

    /// No operand, operation implied by the instruction.
    ///
    /// Examples: `CLC`, `RTS`, `NOP`
    Implied,

    /// Indirect jump through a 16-bit pointer. Only used by `JMP`.
    ///
    /// Example: `JMP ($FFFC)`
    Indirect,

    /// X-indexed indirect: add X to the zero-page operand (wrapping at 8
    /// bits), then dereference the 16-bit pointer found there.
    ///
    /// Example: `LDA ($40,X)`
    IndirectX,

    /// Indirect Y-indexed: dereference the zero-page pointer, then add Y to
    /// the result. May incur a +1 cycle page-cross penalty on read accesses.
    ///
    /// Example: `LDA ($40),Y`
    IndirectY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// of the next instruction.
    ///
    /// Example: `BEQ label`
    Relative,

    /// 8-bit address in the zero page (0x00-0xFF).
    ///
    /// Example: `LDA $80`
    ZeroPage,

    /// Zero-page address indexed by X, wrapping within the zero page.
    ///
    /// Example: `LDA $80,X`
    ZeroPageX,

    /// Zero-page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: `LDX $80,Y`
    ZeroPageY,
}

impl AddressingMode {
    /// Total instruction length in bytes (opcode plus operand) for this mode.
    ///
    /// ```
    /// use mos6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Implied.instruction_length(), 1);
    /// assert_eq!(AddressingMode::Immediate.instruction_length(), 2);
    /// assert_eq!(AddressingMode::Absolute.instruction_length(), 3);
    /// ```
    pub const fn instruction_length(self) -> u8 {
        match self {
            AddressingMode::None | AddressingMode::Accumulator | AddressingMode::Implied => 1,
            AddressingMode::Immediate
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_lengths() {
        assert_eq!(AddressingMode::None.instruction_length(), 1);
        assert_eq!(AddressingMode::Accumulator.instruction_length(), 1);
        assert_eq!(AddressingMode::Implied.instruction_length(), 1);
        assert_eq!(AddressingMode::Immediate.instruction_length(), 2);
        assert_eq!(AddressingMode::IndirectX.instruction_length(), 2);
        assert_eq!(AddressingMode::IndirectY.instruction_length(), 2);
        assert_eq!(AddressingMode::Relative.instruction_length(), 2);
        assert_eq!(AddressingMode::ZeroPage.instruction_length(), 2);
        assert_eq!(AddressingMode::ZeroPageX.instruction_length(), 2);
        assert_eq!(AddressingMode::ZeroPageY.instruction_length(), 2);
        assert_eq!(AddressingMode::Absolute.instruction_length(), 3);
        assert_eq!(AddressingMode::AbsoluteX.instruction_length(), 3);
        assert_eq!(AddressingMode::AbsoluteY.instruction_length(), 3);
        assert_eq!(AddressingMode::Indirect.instruction_length(), 3);
    }
}
