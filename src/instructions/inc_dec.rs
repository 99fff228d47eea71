//! Increment and decrement instructions.
//!
//! INC/DEC are read-modify-write: the indexed forms always pay the
//! worst-case cycle cost in the base cycles, never a page-cross penalty.
//! The register forms are implied and cost 2 cycles.

use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::opcodes::OpcodeEntry;

/// INC - increment memory by one. Affects N, Z.
pub(crate) fn execute_inc<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, ea) = cpu.read_operand_fixed(entry.mode);
    let result = value.wrapping_add(1);
    cpu.memory.write(ea, result);
    cpu.set_nz(result);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}

/// DEC - decrement memory by one. Affects N, Z.
pub(crate) fn execute_dec<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let (value, ea) = cpu.read_operand_fixed(entry.mode);
    let result = value.wrapping_sub(1);
    cpu.memory.write(ea, result);
    cpu.set_nz(result);
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}

/// INX - increment X.
pub(crate) fn execute_inx<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_nz(cpu.x);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// DEX - decrement X.
pub(crate) fn execute_dex<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_nz(cpu.x);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// INY - increment Y.
pub(crate) fn execute_iny<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_nz(cpu.y);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// DEY - decrement Y.
pub(crate) fn execute_dey<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_nz(cpu.y);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}
