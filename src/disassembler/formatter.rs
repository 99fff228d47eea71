//! Text formatting for decoded instructions.
//!
//! Addresses and data print as lowercase hex; mnemonics and index registers
//! are uppercase. Branch operands print the raw offset byte, with the
//! resolved target address (or its symbol) in the comment column.

use crate::opcodes::OpcodeEntry;
use crate::AddressingMode;

use super::SymbolTable;

/// Formats the address-and-bytes column, e.g. `"0200: a9 05"`.
pub(super) fn format_dump(addr: u16, bytes: &[u8]) -> String {
    let mut s = format!("{addr:04x}:");
    for byte in bytes {
        s.push_str(&format!(" {byte:02x}"));
    }
    s
}

/// Formats the instruction column and its comment annotation.
///
/// `bytes` holds the full instruction (opcode plus operand) as decoded.
pub(super) fn format_instruction(
    entry: &OpcodeEntry,
    addr: u16,
    bytes: &[u8],
    symbols: Option<&SymbolTable>,
) -> (String, String) {
    use AddressingMode::*;

    let mnemonic = entry.mnemonic.as_str();
    let mut comment = String::new();

    let instruction = match entry.mode {
        None | Implied => mnemonic.to_string(),
        Accumulator => format!("{mnemonic} A"),
        Immediate => format!("{mnemonic} #${:02x}", bytes[1]),
        ZeroPage => format!("{mnemonic} ${:02x}", bytes[1]),
        ZeroPageX => format!("{mnemonic} ${:02x},X", bytes[1]),
        ZeroPageY => format!("{mnemonic} ${:02x},Y", bytes[1]),
        Absolute => {
            let operand = word(bytes);
            comment = symbol_for(operand, symbols);
            format!("{mnemonic} ${operand:04x}")
        }
        AbsoluteX => format!("{mnemonic} ${:04x},X", word(bytes)),
        AbsoluteY => format!("{mnemonic} ${:04x},Y", word(bytes)),
        Indirect => format!("{mnemonic} (${:04x})", word(bytes)),
        IndirectX => format!("{mnemonic} (${:02x},X)", bytes[1]),
        IndirectY => format!("{mnemonic} (${:02x}),Y", bytes[1]),
        Relative => {
            let offset = bytes[1];
            let target = addr.wrapping_add(2).wrapping_add_signed(offset as i8 as i16);
            comment = symbols
                .and_then(|st| st.get(target))
                .map(str::to_string)
                .unwrap_or_else(|| format!("${target:04x}"));
            format!("{mnemonic} ${offset:02x}")
        }
    };

    (instruction, comment)
}

/// Little-endian 16-bit operand from the instruction bytes.
fn word(bytes: &[u8]) -> u16 {
    (bytes[2] as u16) << 8 | bytes[1] as u16
}

fn symbol_for(addr: u16, symbols: Option<&SymbolTable>) -> String {
    symbols
        .and_then(|st| st.get(addr))
        .unwrap_or_default()
        .to_string()
}
