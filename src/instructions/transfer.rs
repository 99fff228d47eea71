//! Register transfer instructions. All implied, 2 cycles.
//!
//! Every transfer updates N and Z from the copied value except TXS, which
//! moves X into the stack pointer without touching flags.

use crate::cpu::Cpu;
use crate::memory::Memory;

/// TAX - transfer accumulator to X.
pub(crate) fn execute_tax<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.x = cpu.a;
    cpu.set_nz(cpu.x);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// TAY - transfer accumulator to Y.
pub(crate) fn execute_tay<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.y = cpu.a;
    cpu.set_nz(cpu.y);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// TXA - transfer X to accumulator.
pub(crate) fn execute_txa<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.a = cpu.x;
    cpu.set_nz(cpu.a);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// TYA - transfer Y to accumulator.
pub(crate) fn execute_tya<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.a = cpu.y;
    cpu.set_nz(cpu.a);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// TSX - transfer stack pointer to X. Affects N, Z.
pub(crate) fn execute_tsx<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.x = cpu.s;
    cpu.set_nz(cpu.x);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// TXS - transfer X to stack pointer. The only transfer that leaves the
/// flags untouched.
pub(crate) fn execute_txs<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.s = cpu.x;
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}
