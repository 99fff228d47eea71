//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct representing 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (S): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register** (P): [`Status`] bitflags (NV-BDIZC)
//! - **Interrupt lines**: latched NMI edge and level-sensitive IRQ
//! - **Diagnostics**: cycle counter, opcode coverage set, stuck-PC counter
//!
//! ## Execution Model
//!
//! [`Cpu::step`] executes one instruction (or services one interrupt) and
//! returns a [`StepResult`]. [`Cpu::run`] repeats `step()` until a cycle
//! budget is exhausted or a non-`Continue` status occurs. Execution is
//! single-threaded and synchronous: each step runs to completion, and pausing
//! is achieved by not calling `step()` again.

use bitflags::bitflags;
use log::{debug, warn};

use crate::instructions;
use crate::memory::Memory;
use crate::opcodes::{lookup, LEGAL_OPCODE_COUNT};
use crate::vsr::{VsrHook, VsrRegistry};
use crate::StepResult;

/// NMI vector address.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector address.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector address (shared).
pub const IRQ_VECTOR: u16 = 0xFFFE;
/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

// Architecturally-defined power-on register values.
const INITIAL_PC: u16 = 0x0000;
const INITIAL_S: u8 = 0xFD;
const INITIAL_P: u8 = 0x36;

// Consecutive same-PC steps before the engine reports Stuck.
const STUCK_STEP_LIMIT: u8 = 4;

bitflags! {
    /// 6502 processor status register (NV-BDIZC).
    ///
    /// Bit 5 (`U`) is unused on the hardware and always reads as 1; this
    /// implementation forces it on whenever `P` is restored from the stack.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Carry
        const C = 1 << 0;
        /// Zero
        const Z = 1 << 1;
        /// Interrupt disable
        const I = 1 << 2;
        /// Decimal mode
        const D = 1 << 3;
        /// Break
        const B = 1 << 4;
        /// Unused, always 1
        const U = 1 << 5;
        /// Overflow
        const V = 1 << 6;
        /// Negative
        const N = 1 << 7;

        /// Composite mask for bulk clear of N and Z.
        const NZ = Self::N.bits() | Self::Z.bits();
        /// Composite mask for bulk clear of N, Z, and C.
        const NZC = Self::NZ.bits() | Self::C.bits();
        /// Composite mask for bulk clear of N, V, and Z.
        const NVZ = Self::NZ.bits() | Self::V.bits();
    }
}

/// Snapshot of the CPU register file, not a live alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub pc: u16,
    pub s: u8,
    pub p: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`Memory`] trait.
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, FlatMemory, Memory};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.s(), 0xFD);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct Cpu<M: Memory> {
    /// Accumulator
    pub(crate) a: u8,
    /// X index register
    pub(crate) x: u8,
    /// Y index register
    pub(crate) y: u8,
    /// Program counter
    pub(crate) pc: u16,
    /// Stack pointer (offset into page 0x0100)
    pub(crate) s: u8,
    /// Processor status flags
    pub(crate) p: Status,

    /// Latched NMI edge, cleared when serviced
    nmi: bool,
    /// Level-sensitive IRQ line
    irq: bool,

    /// Total cycles executed
    cycles: u64,
    /// Consecutive steps with an unchanged PC
    stuck_steps: u8,
    /// Set by a VSR hook via `request_exit`
    exit_requested: bool,

    /// Legal opcodes executed at least once
    covered: [bool; 256],
    covered_count: usize,

    vsr: VsrRegistry<M>,

    /// Memory capability
    pub(crate) memory: M,
}

impl<M: Memory> Cpu<M> {
    /// Creates a CPU bound to `memory`, powered on and reset.
    ///
    /// Power-on loads the architecturally-defined register values
    /// (PC=0x0000, S=0xFD, P=0x36, A=X=Y=0); the reset then loads PC from
    /// the reset vector at 0xFFFC/0xFFFD.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            s: 0,
            p: Status::empty(),
            nmi: false,
            irq: false,
            cycles: 0,
            stuck_steps: 0,
            exit_requested: false,
            covered: [false; 256],
            covered_count: 0,
            vsr: VsrRegistry::new(),
            memory,
        };
        cpu.power(true);
        cpu.reset();
        cpu
    }

    /// Powers the CPU on or off.
    ///
    /// Powering on loads the power-on register values and clears the cycle
    /// counter, the coverage set, and the VSR registry. Powering off zeroes
    /// the register file.
    pub fn power(&mut self, on: bool) {
        if on {
            self.pc = INITIAL_PC;
            self.s = INITIAL_S;
            self.p = Status::from_bits_retain(INITIAL_P);
        } else {
            self.pc = 0;
            self.s = 0;
            self.p = Status::empty();
        }
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.nmi = false;
        self.irq = false;
        self.cycles = 0;
        self.stuck_steps = 0;
        self.exit_requested = false;
        self.covered = [false; 256];
        self.covered_count = 0;
        self.vsr.clear();
    }

    /// Resets the CPU: reloads PC from the reset vector at 0xFFFC and
    /// restores S and P to their power-on values. Registers A/X/Y, the cycle
    /// counter, and the coverage set are unaffected.
    pub fn reset(&mut self) {
        self.pc = self.read16(RESET_VECTOR);
        self.s = INITIAL_S;
        self.p = Status::from_bits_retain(INITIAL_P);
        self.nmi = false;
        self.irq = false;
        self.stuck_steps = 0;
    }

    /// Latches a non-maskable interrupt, serviced at the start of the next
    /// step regardless of the I flag.
    pub fn nmi(&mut self) {
        self.nmi = true;
    }

    /// Sets the level-sensitive IRQ line. The interrupt is serviced at the
    /// start of a step while the line is high and the I flag is clear.
    pub fn irq(&mut self, state: bool) {
        self.irq = state;
    }

    /// Installs a virtual subroutine hook at `addr`.
    ///
    /// A `JSR`/`JMP` whose target equals `addr` invokes the hook after the
    /// normal control transfer; for `JSR` the engine then pops the return
    /// address and resumes after the call site, simulating an `RTS`.
    ///
    /// Registration is configuration: install hooks before or between run
    /// phases, not concurrently with `step()`.
    pub fn register_vsr(&mut self, addr: u16, hook: VsrHook<M>) {
        self.vsr.register(addr, hook);
    }

    /// Requests termination of the run. Called from a VSR hook; the current
    /// step completes and returns [`StepResult::Exited`] with the exit
    /// status drawn from the accumulator.
    pub fn request_exit(&mut self) {
        debug!("exit requested (a={:#04x})", self.a);
        self.exit_requested = true;
    }

    /// Executes one instruction or services one pending interrupt.
    ///
    /// Interrupts are checked first, NMI before IRQ; servicing one consumes
    /// 7 cycles and no opcode is fetched that step. Otherwise the opcode at
    /// PC is fetched, decoded through the opcode table, and executed.
    ///
    /// # Returns
    ///
    /// - [`StepResult::Continue`] in the normal case
    /// - [`StepResult::IllegalOpcode`] if an unassigned opcode was fetched
    /// - [`StepResult::Stuck`] if the PC has not changed for four steps
    /// - [`StepResult::Exited`] if a VSR hook requested termination
    pub fn step(&mut self) -> StepResult {
        if self.nmi {
            self.nmi = false;
            self.service_interrupt(NMI_VECTOR);
            debug!("NMI serviced, pc={:#06x}", self.pc);
            // vectoring changed the PC, so same-PC counting starts over
            self.stuck_steps = 0;
            return StepResult::Continue;
        }

        if self.irq && !self.p.contains(Status::I) {
            self.service_interrupt(IRQ_VECTOR);
            debug!("IRQ serviced, pc={:#06x}", self.pc);
            self.stuck_steps = 0;
            return StepResult::Continue;
        }

        let pc_before = self.pc;
        let opcode = self.memory.read(self.pc);
        let entry = lookup(opcode);

        if !entry.is_legal() {
            warn!("illegal opcode {opcode:#04x} at {pc_before:#06x}");
            self.pc = self.pc.wrapping_add(1);
            self.stuck_steps = 0;
            return StepResult::IllegalOpcode {
                pc: pc_before,
                opcode,
            };
        }

        let cycles = instructions::execute(self, &entry);
        self.cycles += cycles as u64;

        if !self.covered[opcode as usize] {
            self.covered[opcode as usize] = true;
            self.covered_count += 1;
        }

        if self.exit_requested {
            self.exit_requested = false;
            return StepResult::Exited {
                status: self.a,
                cycles: self.cycles,
                coverage: self.coverage(),
            };
        }

        if self.pc == pc_before {
            self.stuck_steps += 1;
            if self.stuck_steps >= STUCK_STEP_LIMIT {
                return StepResult::Stuck {
                    pc: self.pc,
                    cycles: self.cycles,
                };
            }
        } else {
            self.stuck_steps = 0;
        }

        StepResult::Continue
    }

    /// Runs the CPU until at least `cycle_budget` more cycles have elapsed
    /// or a non-`Continue` status occurs.
    ///
    /// Returns `Continue` if the budget was exhausted normally; the consumed
    /// cycle count may overshoot slightly due to instruction granularity.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{Cpu, FlatMemory, Memory, StepResult};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0xFFFD, 0x02); // reset vector = 0x0200
    /// for addr in 0x0200..0x0220 {
    ///     memory.write(addr, 0xEA); // NOP
    /// }
    ///
    /// let mut cpu = Cpu::new(memory);
    /// assert_eq!(cpu.run(10), StepResult::Continue);
    /// assert!(cpu.cycles() >= 10);
    /// ```
    pub fn run(&mut self, cycle_budget: u64) -> StepResult {
        let target = self.cycles + cycle_budget;
        while self.cycles < target {
            let status = self.step();
            if status != StepResult::Continue {
                return status;
            }
        }
        StepResult::Continue
    }

    /// Fraction of legal opcodes executed at least once since power-on.
    /// Monotone non-decreasing during a run; reset only by `power`.
    pub fn coverage(&self) -> f64 {
        self.covered_count as f64 / LEGAL_OPCODE_COUNT as f64
    }

    /// Returns a snapshot of the register file.
    pub fn registers(&self) -> Registers {
        Registers {
            pc: self.pc,
            s: self.s,
            p: self.p.bits(),
            a: self.a,
            x: self.x,
            y: self.y,
        }
    }

    // ========== Interrupt servicing ==========

    /// Pushes PC and P (with B cleared) and vectors through `vector`.
    /// Common to NMI and IRQ; BRK has its own push sequence.
    fn service_interrupt(&mut self, vector: u16) {
        self.p.remove(Status::B);
        self.push16(self.pc);
        self.push8(self.p.bits());
        self.p.insert(Status::I);
        self.pc = self.read16(vector);
        self.cycles += 7;
    }

    // ========== VSR invocation ==========

    /// Consults the VSR registry after a control transfer to `self.pc`.
    ///
    /// If a hook is registered there it runs with full CPU access; for a JSR
    /// transfer the just-pushed return address is then popped and execution
    /// resumes after the call site, exactly as if the routine had ended in
    /// RTS.
    pub(crate) fn call_vsr(&mut self, from_jsr: bool) {
        if let Some(hook) = self.vsr.get(self.pc) {
            debug!("VSR hook invoked at {:#06x}", self.pc);
            hook(self);
            if from_jsr {
                self.pc = self.pop16().wrapping_add(1);
            }
        }
    }

    // ========== Memory helpers ==========

    /// Reads a little-endian 16-bit word at `addr`.
    pub(crate) fn read16(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian 16-bit word from the zero page, wrapping the
    /// high-byte fetch within the page (pointer at 0xFF reads 0xFF and 0x00).
    pub(crate) fn read16_zp(&self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Reads a 16-bit word reproducing the NMOS JMP-indirect bug: a pointer
    /// at $xxFF fetches its high byte from $xx00 instead of crossing pages.
    pub(crate) fn read16_bug(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi_addr = if addr & 0x00FF == 0x00FF {
            addr & 0xFF00
        } else {
            addr.wrapping_add(1)
        };
        let hi = self.memory.read(hi_addr) as u16;
        (hi << 8) | lo
    }

    // ========== Stack helpers ==========

    /// Pushes a byte; the stack wraps within page 1, no carry out.
    pub(crate) fn push8(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.s as u16, value);
        self.s = self.s.wrapping_sub(1);
    }

    pub(crate) fn pop8(&mut self) -> u8 {
        self.s = self.s.wrapping_add(1);
        self.memory.read(STACK_BASE + self.s as u16)
    }

    /// Pushes a 16-bit word, high byte first.
    pub(crate) fn push16(&mut self, value: u16) {
        self.push8((value >> 8) as u8);
        self.push8(value as u8);
    }

    pub(crate) fn pop16(&mut self) -> u16 {
        let lo = self.pop8() as u16;
        let hi = self.pop8() as u16;
        (hi << 8) | lo
    }

    // ========== Addressing-mode resolution ==========

    /// Computes the effective address for a memory-operand mode, with the PC
    /// still at the opcode byte. The second value reports whether indexing
    /// crossed a page boundary (meaningful for AbsoluteX/AbsoluteY/IndirectY
    /// only).
    fn effective_address(&self, mode: crate::AddressingMode) -> (u16, bool) {
        use crate::AddressingMode::*;

        let operand = self.pc.wrapping_add(1);
        match mode {
            ZeroPage => (self.memory.read(operand) as u16, false),
            ZeroPageX => (self.memory.read(operand).wrapping_add(self.x) as u16, false),
            ZeroPageY => (self.memory.read(operand).wrapping_add(self.y) as u16, false),
            Absolute => (self.read16(operand), false),
            AbsoluteX => {
                let base = self.read16(operand);
                let ea = base.wrapping_add(self.x as u16);
                (ea, (base & 0x00FF) + self.x as u16 > 0x00FF)
            }
            AbsoluteY => {
                let base = self.read16(operand);
                let ea = base.wrapping_add(self.y as u16);
                (ea, (base & 0x00FF) + self.y as u16 > 0x00FF)
            }
            IndirectX => {
                let ptr = self.memory.read(operand).wrapping_add(self.x);
                (self.read16_zp(ptr), false)
            }
            IndirectY => {
                let base = self.read16_zp(self.memory.read(operand));
                let ea = base.wrapping_add(self.y as u16);
                (ea, (base & 0x00FF) + self.y as u16 > 0x00FF)
            }
            // Immediate/Relative/Indirect/register modes have no memory
            // operand address; the instruction handlers resolve them.
            _ => (operand, false),
        }
    }

    /// Reads the operand value for a read-type instruction. The bool is the
    /// page-cross penalty flag: true adds one cycle (AbsoluteX, AbsoluteY,
    /// and IndirectY reads only).
    pub(crate) fn read_operand(&mut self, mode: crate::AddressingMode) -> (u8, bool) {
        if mode == crate::AddressingMode::Immediate {
            return (self.memory.read(self.pc.wrapping_add(1)), false);
        }
        let (ea, crossed) = self.effective_address(mode);
        (self.memory.read(ea), crossed)
    }

    /// Reads the operand value and its effective address for a
    /// read-modify-write instruction. Never penalized: indexed RMW always
    /// pays the worst-case cycle cost in its base cycles.
    pub(crate) fn read_operand_fixed(&mut self, mode: crate::AddressingMode) -> (u8, u16) {
        let (ea, _) = self.effective_address(mode);
        (self.memory.read(ea), ea)
    }

    /// Writes `value` through the addressing mode. Mirrors the read helpers
    /// without the page-cross penalty: indexed stores always pay the
    /// worst-case cycle cost in their base cycles, matching the hardware.
    pub(crate) fn write_operand(&mut self, mode: crate::AddressingMode, value: u8) {
        let (ea, _) = self.effective_address(mode);
        self.memory.write(ea, value);
    }

    /// Relative branch helper: 2 cycles not taken, +1 taken within the same
    /// page as the next instruction, +2 taken across a page. Sets the PC.
    pub(crate) fn branch(&mut self, condition: bool) -> u32 {
        let next = self.pc.wrapping_add(2);
        if condition {
            let offset = self.memory.read(self.pc.wrapping_add(1)) as i8;
            let target = next.wrapping_add_signed(offset as i16);
            self.pc = target;
            if target & 0xFF00 == next & 0xFF00 {
                3
            } else {
                4
            }
        } else {
            self.pc = next;
            2
        }
    }

    // ========== ALU/flag engine ==========

    /// Sets N and Z from a result value.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.p.set(Status::Z, value == 0);
        self.p.set(Status::N, value & 0x80 != 0);
    }

    /// Compare helper shared by CMP/CPX/CPY: C if reg >= val (unsigned),
    /// N/Z from the wrapping difference.
    pub(crate) fn compare(&mut self, reg: u8, value: u8) {
        let diff = reg.wrapping_sub(value);
        self.p.remove(Status::NZC);
        self.set_nz(diff);
        self.p.set(Status::C, reg >= value);
    }

    /// Add with carry, dispatching on the decimal flag.
    pub(crate) fn adc(&mut self, value: u8) {
        if self.p.contains(Status::D) {
            self.adc_decimal(value);
        } else {
            self.adc_binary(value);
        }
    }

    fn adc_binary(&mut self, value: u8) {
        let a = self.a as u16;
        let m = value as u16;
        let c = self.p.contains(Status::C) as u16;

        let sum = a + m + c;
        self.p.set(Status::C, sum > 0xFF);
        self.p.set(Status::V, (a ^ sum) & (m ^ sum) & 0x80 != 0);
        self.a = sum as u8;
        self.set_nz(self.a);
    }

    /// NMOS 6502 decimal-mode addition. N and V are derived from the
    /// intermediate sum before the high-nibble 0x60 correction; Z follows
    /// the binary sum. These are the documented hardware quirks.
    fn adc_decimal(&mut self, value: u8) {
        let a = self.a as u16;
        let m = value as u16;
        let c = self.p.contains(Status::C) as u16;

        let mut lo = (a & 0x0F) + (m & 0x0F) + c;
        let mut hi = (a & 0xF0) + (m & 0xF0);
        if lo > 0x09 {
            hi += 0x10;
            lo += 0x06;
        }

        self.p.set(Status::N, hi & 0x80 != 0);
        self.p.set(Status::V, !(a ^ m) & (a ^ hi) & 0x80 != 0);
        if hi > 0x90 {
            hi += 0x60;
        }
        self.p.set(Status::C, hi & 0xFF00 != 0);
        self.p.set(Status::Z, (a + m + c) & 0xFF == 0);

        self.a = ((hi & 0xF0) | (lo & 0x0F)) as u8;
    }

    /// Subtract with carry. Binary mode reuses the adder on the one's
    /// complement; decimal mode applies the symmetric borrow correction.
    pub(crate) fn sbc(&mut self, value: u8) {
        if self.p.contains(Status::D) {
            self.sbc_decimal(value);
        } else {
            self.adc_binary(!value);
        }
    }

    /// NMOS 6502 decimal-mode subtraction: all flags follow the binary
    /// difference, only the accumulator value is nibble-corrected.
    fn sbc_decimal(&mut self, value: u8) {
        let a = self.a as u16;
        let m = value as u16;
        let borrow = !self.p.contains(Status::C) as u16;

        let diff = a.wrapping_sub(m).wrapping_sub(borrow);

        let mut lo = (a & 0x0F).wrapping_sub(m & 0x0F).wrapping_sub(borrow);
        let mut hi = (a >> 4).wrapping_sub(m >> 4);
        if lo & 0x10 != 0 {
            lo = lo.wrapping_sub(0x06);
            hi = hi.wrapping_sub(1);
        }
        if hi & 0x10 != 0 {
            hi = hi.wrapping_sub(0x06);
        }

        self.p.set(Status::C, diff < 0x100);
        self.p.set(Status::V, (a ^ m) & (a ^ diff) & 0x80 != 0);
        self.set_nz(diff as u8);

        self.a = (((hi & 0x0F) << 4) | (lo & 0x0F)) as u8;
    }

    /// BIT test: N and V from bits 7/6 of the operand, Z from the AND with
    /// the accumulator. A is unchanged.
    pub(crate) fn bit_test(&mut self, value: u8) {
        self.p.remove(Status::NVZ);
        self.p.set(Status::N, value & 0x80 != 0);
        self.p.set(Status::V, value & 0x40 != 0);
        self.p.set(Status::Z, value & self.a == 0);
    }

    /// Arithmetic shift left: carry out from bit 7.
    pub(crate) fn shift_left(&mut self, value: u8) -> u8 {
        self.p.set(Status::C, value & 0x80 != 0);
        let result = value << 1;
        self.set_nz(result);
        result
    }

    /// Logical shift right: carry out from bit 0.
    pub(crate) fn shift_right(&mut self, value: u8) -> u8 {
        self.p.set(Status::C, value & 0x01 != 0);
        let result = value >> 1;
        self.set_nz(result);
        result
    }

    /// Rotate left through carry.
    pub(crate) fn rotate_left(&mut self, value: u8) -> u8 {
        let carry_in = self.p.contains(Status::C) as u8;
        self.p.set(Status::C, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.set_nz(result);
        result
    }

    /// Rotate right through carry.
    pub(crate) fn rotate_right(&mut self, value: u8) -> u8 {
        let carry_in = self.p.contains(Status::C) as u8;
        self.p.set(Status::C, value & 0x01 != 0);
        let result = (value >> 1) | (carry_in << 7);
        self.set_nz(result);
        result
    }

    // ========== Register accessors ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer. The full stack address is 0x0100 + S.
    pub fn s(&self) -> u8 {
        self.s
    }

    /// Returns the status register.
    pub fn p(&self) -> Status {
        self.p
    }

    /// Returns the total number of cycles executed since power-on.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_s(&mut self, value: u8) {
        self.s = value;
    }

    pub fn set_p(&mut self, value: Status) {
        self.p = value;
    }

    /// Sets or clears a single status flag.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.p.set(flag, value);
    }

    /// Returns a single status flag.
    pub fn flag(&self, flag: Status) -> bool {
        self.p.contains(flag)
    }

    /// Shared access to the memory capability.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory capability.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
