//! Stack push and pull instructions.
//!
//! The hardware pushes P with the B and unused bits set (PHP and BRK share
//! that path), and forces the unused bit on when P is restored. Pushes cost
//! 3 cycles, pulls 4.

use crate::cpu::{Cpu, Status};
use crate::memory::Memory;

/// PHA - push accumulator.
pub(crate) fn execute_pha<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let a = cpu.a;
    cpu.push8(a);
    cpu.pc = cpu.pc.wrapping_add(1);
    3
}

/// PHP - push processor status with B and the unused bit set in the copy.
pub(crate) fn execute_php<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let p = (cpu.p | Status::B | Status::U).bits();
    cpu.push8(p);
    cpu.pc = cpu.pc.wrapping_add(1);
    3
}

/// PLA - pull accumulator. Affects N, Z.
pub(crate) fn execute_pla<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.a = cpu.pop8();
    cpu.set_nz(cpu.a);
    cpu.pc = cpu.pc.wrapping_add(1);
    4
}

/// PLP - pull processor status, forcing the unused bit on.
pub(crate) fn execute_plp<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let p = cpu.pop8();
    cpu.p = Status::from_bits_retain(p) | Status::U;
    cpu.pc = cpu.pc.wrapping_add(1);
    4
}
