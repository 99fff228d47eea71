//! Load and store instructions.
//!
//! Loads are read-type and pay the +1 page-cross penalty in their indexed
//! forms; stores always pay the worst-case cost in their base cycles and
//! never a penalty.

use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::opcodes::OpcodeEntry;

/// LDA - load accumulator. Affects N, Z.
pub(crate) fn execute_lda<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.a = value;
    cpu.set_nz(value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// LDX - load X register. Affects N, Z.
pub(crate) fn execute_ldx<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.x = value;
    cpu.set_nz(value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// LDY - load Y register. Affects N, Z.
pub(crate) fn execute_ldy<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.y = value;
    cpu.set_nz(value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// STA - store accumulator. No flags affected.
pub(crate) fn execute_sta<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    cpu.write_operand(entry.mode, cpu.a);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}

/// STX - store X register. No flags affected.
pub(crate) fn execute_stx<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    cpu.write_operand(entry.mode, cpu.x);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}

/// STY - store Y register. No flags affected.
pub(crate) fn execute_sty<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    cpu.write_operand(entry.mode, cpu.y);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}
