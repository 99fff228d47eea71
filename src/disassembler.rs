//! # Disassembler
//!
//! Decodes machine code back into human-readable assembly, driven by the
//! same 256-entry opcode table the execution engine uses. A decode therefore
//! always agrees with what the CPU would execute, including treating
//! unassigned bytes as one-byte `???` entries so a listing can advance past
//! unknown data deterministically.
//!
//! # Examples
//!
//! ```
//! use mos6502::{disassembler, FlatMemory, Memory};
//!
//! let mut mem = FlatMemory::new();
//! mem.write(0x0200, 0xA9); // LDA #$05
//! mem.write(0x0201, 0x05);
//!
//! let da = disassembler::decode_one(&mem, 0x0200, None);
//! assert_eq!(da.instruction, "LDA #$05");
//! assert_eq!(da.dump, "0200: a9 05");
//! ```

mod formatter;

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::memory::Memory;
use crate::opcodes::lookup;

/// Address-to-name map used to annotate disassembly listings.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<u16, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `name` with `addr`, replacing any previous name.
    pub fn insert(&mut self, addr: u16, name: impl Into<String>) {
        self.symbols.insert(addr, name.into());
    }

    /// Returns the name associated with `addr`, if any.
    pub fn get(&self, addr: u16) -> Option<&str> {
        self.symbols.get(&addr).map(String::as_str)
    }
}

/// One decoded instruction, split into display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    /// Address and raw bytes, e.g. `"0200: a9 05"`.
    pub dump: String,
    /// Symbol for the instruction address, or empty.
    pub symbol: String,
    /// Mnemonic and formatted operand, e.g. `"LDA #$05"`.
    pub instruction: String,
    /// Annotation such as a resolved branch target, or empty.
    pub comment: String,
    /// The raw instruction bytes (1-3 of them).
    pub bytes: Vec<u8>,
}

impl Disassembly {
    /// Instruction length in bytes.
    pub fn length(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Display for Disassembly {
    /// Columnar listing line: dump, symbol, instruction, optional comment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16} {:>8} {:<13}",
            self.dump, self.symbol, self.instruction
        )?;
        if !self.comment.is_empty() {
            write!(f, " ; {}", self.comment)?;
        }
        Ok(())
    }
}

/// Error from region decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisassemblyError {
    /// Decoding would continue past the top of the address space. `addr` is
    /// the start of the instruction that does not fit, or 0xFFFF when the
    /// requested region itself ran off the end.
    OutOfRange { addr: u16 },
}

impl fmt::Display for DisassemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisassemblyError::OutOfRange { addr } => {
                write!(f, "cannot decode past the top of memory (at {addr:#06x})")
            }
        }
    }
}

impl Error for DisassemblyError {}

/// Decodes the single instruction at `addr`.
///
/// Reads through the [`Memory`] trait without side effects on CPU state.
/// Unassigned opcode bytes decode as a one-byte `???` entry.
pub fn decode_one<M: Memory>(mem: &M, addr: u16, symbols: Option<&SymbolTable>) -> Disassembly {
    let entry = lookup(mem.read(addr));
    let length = entry.length() as usize;

    let mut bytes = Vec::with_capacity(length);
    for i in 0..length {
        bytes.push(mem.read(addr.wrapping_add(i as u16)));
    }

    let (instruction, comment) = formatter::format_instruction(&entry, addr, &bytes, symbols);

    Disassembly {
        dump: formatter::format_dump(addr, &bytes),
        symbol: symbols
            .and_then(|st| st.get(addr))
            .unwrap_or_default()
            .to_string(),
        instruction,
        comment,
        bytes,
    }
}

/// Decodes instructions starting at `addr` until at least `size` bytes have
/// been consumed.
///
/// Fails with [`DisassemblyError::OutOfRange`] if an instruction would run
/// past the top of the address space; decoding does not wrap.
pub fn decode_region<M: Memory>(
    mem: &M,
    addr: u16,
    size: usize,
    symbols: Option<&SymbolTable>,
) -> Result<Vec<Disassembly>, DisassemblyError> {
    let mut listing = Vec::new();
    let mut pos = addr as u32;
    let mut remaining = size as i64;

    while remaining > 0 {
        if pos > 0xFFFF {
            // the previous instruction ended flush with the top of memory
            return Err(DisassemblyError::OutOfRange { addr: u16::MAX });
        }
        let n = lookup(mem.read(pos as u16)).length() as u32;
        if pos + n > 0x1_0000 {
            return Err(DisassemblyError::OutOfRange { addr: pos as u16 });
        }
        let da = decode_one(mem, pos as u16, symbols);
        remaining -= n as i64;
        pos += n;
        listing.push(da);
    }

    Ok(listing)
}
