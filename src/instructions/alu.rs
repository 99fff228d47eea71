//! Arithmetic and logic instructions: ADC, SBC, AND, ORA, EOR, BIT, and the
//! three compares.
//!
//! All of these are read-type instructions: indexed absolute and
//! indirect-indexed forms pay the +1 page-cross penalty on top of the base
//! cycle cost.

use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::opcodes::OpcodeEntry;

/// ADC - Add with Carry.
///
/// A = A + M + C. Binary or BCD addition depending on the D flag.
/// Affects N, V, Z, C.
pub(crate) fn execute_adc<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.adc(value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// SBC - Subtract with Carry.
///
/// A = A - M - (1 - C). Binary or BCD subtraction depending on the D flag.
/// Affects N, V, Z, C.
pub(crate) fn execute_sbc<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.sbc(value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// AND - bitwise AND with the accumulator. Affects N, Z.
pub(crate) fn execute_and<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.a &= value;
    cpu.set_nz(cpu.a);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// ORA - bitwise OR with the accumulator. Affects N, Z.
pub(crate) fn execute_ora<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.a |= value;
    cpu.set_nz(cpu.a);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// EOR - bitwise exclusive-OR with the accumulator. Affects N, Z.
pub(crate) fn execute_eor<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.a ^= value;
    cpu.set_nz(cpu.a);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// BIT - test bits against the accumulator.
///
/// N and V are copied from bits 7 and 6 of the operand; Z reflects
/// `A & M == 0`. The accumulator is not modified.
pub(crate) fn execute_bit<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, _) = cpu.read_operand(entry.mode);
    cpu.bit_test(value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}

/// CMP - compare accumulator with memory. Affects N, Z, C.
pub(crate) fn execute_cmp<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, crossed) = cpu.read_operand(entry.mode);
    cpu.compare(cpu.a, value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32 + crossed as u32
}

/// CPX - compare X register with memory. Affects N, Z, C.
pub(crate) fn execute_cpx<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, _) = cpu.read_operand(entry.mode);
    cpu.compare(cpu.x, value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}

/// CPY - compare Y register with memory. Affects N, Z, C.
pub(crate) fn execute_cpy<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, _) = cpu.read_operand(entry.mode);
    cpu.compare(cpu.y, value);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}
