//! Tests for the 256-entry opcode decode table.
//!
//! Tests cover:
//! - Total decode (every byte maps to an entry)
//! - The documented-opcode census
//! - Length/mode agreement
//! - Spot checks of well-known encodings

use mos6502::{lookup, AddressingMode, Mnemonic, LEGAL_OPCODE_COUNT, OPCODE_TABLE};

// ========== Table Shape Tests ==========

#[test]
fn test_every_byte_decodes() {
    for opcode in 0u16..=0xFF {
        let entry = lookup(opcode as u8);
        let length = entry.length();
        assert!(
            (1..=3).contains(&length),
            "opcode {opcode:#04x} has bad length {length}"
        );
    }
}

#[test]
fn test_legal_opcode_census() {
    let legal = OPCODE_TABLE.iter().filter(|e| e.is_legal()).count();
    assert_eq!(legal, 151);
    assert_eq!(legal, LEGAL_OPCODE_COUNT);
}

#[test]
fn test_illegal_entries_are_uniform() {
    for (i, entry) in OPCODE_TABLE.iter().enumerate() {
        if !entry.is_legal() {
            assert_eq!(
                entry.mode,
                AddressingMode::None,
                "illegal opcode {i:#04x} has a mode"
            );
            assert_eq!(entry.base_cycles, 0);
            assert_eq!(entry.length(), 1);
        }
    }
}

#[test]
fn test_legal_entries_have_plausible_cycles() {
    for (i, entry) in OPCODE_TABLE.iter().enumerate() {
        if entry.is_legal() {
            assert!(
                (2..=7).contains(&entry.base_cycles),
                "opcode {i:#04x} has base cycles {}",
                entry.base_cycles
            );
        }
    }
}

// ========== Spot Checks ==========

#[test]
fn test_known_encodings() {
    let cases = [
        (0x00, Mnemonic::Brk, AddressingMode::Implied, 7),
        (0x20, Mnemonic::Jsr, AddressingMode::Absolute, 6),
        (0x4C, Mnemonic::Jmp, AddressingMode::Absolute, 3),
        (0x6C, Mnemonic::Jmp, AddressingMode::Indirect, 5),
        (0x69, Mnemonic::Adc, AddressingMode::Immediate, 2),
        (0x7D, Mnemonic::Adc, AddressingMode::AbsoluteX, 4),
        (0xA9, Mnemonic::Lda, AddressingMode::Immediate, 2),
        (0xB1, Mnemonic::Lda, AddressingMode::IndirectY, 5),
        (0x8D, Mnemonic::Sta, AddressingMode::Absolute, 4),
        (0x91, Mnemonic::Sta, AddressingMode::IndirectY, 6),
        (0x9D, Mnemonic::Sta, AddressingMode::AbsoluteX, 5),
        (0xF0, Mnemonic::Beq, AddressingMode::Relative, 2),
        (0xEA, Mnemonic::Nop, AddressingMode::Implied, 2),
        (0x4A, Mnemonic::Lsr, AddressingMode::Accumulator, 2),
        (0xFE, Mnemonic::Inc, AddressingMode::AbsoluteX, 7),
        (0x60, Mnemonic::Rts, AddressingMode::Implied, 6),
        (0x40, Mnemonic::Rti, AddressingMode::Implied, 6),
        (0xB6, Mnemonic::Ldx, AddressingMode::ZeroPageY, 4),
    ];

    for (opcode, mnemonic, mode, cycles) in cases {
        let entry = lookup(opcode);
        assert_eq!(entry.mnemonic, mnemonic, "opcode {opcode:#04x}");
        assert_eq!(entry.mode, mode, "opcode {opcode:#04x}");
        assert_eq!(entry.base_cycles, cycles, "opcode {opcode:#04x}");
    }
}

#[test]
fn test_known_illegal_bytes() {
    for opcode in [0x02, 0x03, 0x0B, 0x22, 0x44, 0x80, 0xFF] {
        assert!(!lookup(opcode).is_legal(), "opcode {opcode:#04x}");
        assert_eq!(lookup(opcode).mnemonic, Mnemonic::Ill);
    }
}

#[test]
fn test_mnemonic_display() {
    assert_eq!(Mnemonic::Lda.to_string(), "LDA");
    assert_eq!(Mnemonic::Ill.to_string(), "???");
}
