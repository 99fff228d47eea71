//! # MOS 6502 CPU Emulator
//!
//! An emulator for the full legal instruction set of the MOS Technology 6502,
//! with per-instruction cycle costs, decimal-mode arithmetic, NMI/IRQ/BRK
//! interrupt handling, and a virtual-subroutine (VSR) trap mechanism that lets
//! a host intercept calls to fixed addresses as if native routines lived there.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{Cpu, FlatMemory, Memory, StepResult};
//!
//! // Create 64KB flat memory with a reset vector pointing at 0x0200.
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x02); // High byte
//!
//! // LDA #$05 ; STA $0300
//! memory.write(0x0200, 0xA9);
//! memory.write(0x0201, 0x05);
//! memory.write(0x0202, 0x8D);
//! memory.write(0x0203, 0x00);
//! memory.write(0x0204, 0x03);
//!
//! let mut cpu = Cpu::new(memory);
//! assert_eq!(cpu.pc(), 0x0200);
//!
//! assert_eq!(cpu.step(), StepResult::Continue);
//! assert_eq!(cpu.step(), StepResult::Continue);
//! assert_eq!(cpu.memory().read(0x0300), 0x05);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from the memory implementation via
//!   the [`Memory`] trait; the backing store (flat RAM, MMIO, banking) is the
//!   host's concern.
//! - **Table-driven decode**: a single 256-entry [`OPCODE_TABLE`] is the
//!   source of truth for mnemonics, addressing modes, and base cycle costs,
//!   shared by the execution engine and the disassembler.
//! - **Structured step results**: [`Cpu::step`] returns a tagged
//!   [`StepResult`] instead of mutable error flags, so callers pattern-match
//!   on illegal opcodes, stuck program counters, and host-requested exits.
//! - **Host traps**: [`Cpu::register_vsr`] installs callbacks at 16-bit
//!   addresses; a `JSR`/`JMP` to a registered address invokes the host and,
//!   for `JSR`, simulates the `RTS` so no instruction bytes need to exist at
//!   the trapped address.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, addressing-mode resolution, and execution logic
//! - `memory` - `Memory` trait and the `FlatMemory` implementation
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing mode enumeration
//! - `vsr` - virtual subroutine registry
//! - `disassembler` - symbolic instruction decode

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod vsr;

// Internal instruction implementations (not part of the public API).
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{Cpu, Registers, Status};
pub use disassembler::{Disassembly, DisassemblyError, SymbolTable};
pub use memory::{FlatMemory, Memory};
pub use opcodes::{lookup, Mnemonic, OpcodeEntry, LEGAL_OPCODE_COUNT, OPCODE_TABLE};
pub use vsr::VsrHook;

/// Outcome of a single [`Cpu::step`] call.
///
/// `Continue` is the normal case. The other variants are terminal for the
/// current run: the engine reports them instead of silently executing on, and
/// the host decides whether to reset, inspect state, or stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepResult {
    /// The instruction (or interrupt service) completed normally.
    Continue,

    /// An unassigned opcode byte was fetched at `pc`.
    ///
    /// Recoverable only by a host-level reset; the PC has been advanced past
    /// the offending byte so diagnostic tooling can keep decoding.
    IllegalOpcode { pc: u16, opcode: u8 },

    /// The program counter did not change for four consecutive steps.
    ///
    /// This catches single-instruction infinite loops (`JMP *`, a branch to
    /// itself). Ordinary multi-instruction loops change the PC every step and
    /// are never flagged.
    Stuck { pc: u16, cycles: u64 },

    /// A VSR hook requested termination.
    ///
    /// Not an error: carries the exit status (drawn from the accumulator),
    /// the total cycle count, and the opcode coverage fraction at the moment
    /// of exit.
    Exited {
        status: u8,
        cycles: u64,
        coverage: f64,
    },
}

impl std::fmt::Display for StepResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StepResult::Continue => write!(f, "continue"),
            StepResult::IllegalOpcode { pc, opcode } => {
                write!(f, "illegal opcode 0x{opcode:02X} at 0x{pc:04X}")
            }
            StepResult::Stuck { pc, cycles } => {
                write!(f, "stuck at 0x{pc:04X} after {cycles} cycles")
            }
            StepResult::Exited {
                status,
                cycles,
                coverage,
            } => {
                write!(
                    f,
                    "exited with status {status} after {cycles} cycles ({:.1}% opcode coverage)",
                    coverage * 100.0
                )
            }
        }
    }
}
