//! The eight conditional branches.
//!
//! Every branch tests a single status flag. The shared helper in `Cpu`
//! handles the relative-offset arithmetic and cycle accounting: 2 cycles not
//! taken, 3 taken within the page of the next instruction, 4 taken across a
//! page boundary.

use crate::cpu::{Cpu, Status};
use crate::memory::Memory;

/// BCC - branch if carry clear.
pub(crate) fn execute_bcc<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let condition = !cpu.flag(Status::C);
    cpu.branch(condition)
}

/// BCS - branch if carry set.
pub(crate) fn execute_bcs<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let condition = cpu.flag(Status::C);
    cpu.branch(condition)
}

/// BEQ - branch if zero set.
pub(crate) fn execute_beq<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let condition = cpu.flag(Status::Z);
    cpu.branch(condition)
}

/// BNE - branch if zero clear.
pub(crate) fn execute_bne<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let condition = !cpu.flag(Status::Z);
    cpu.branch(condition)
}

/// BMI - branch if negative set.
pub(crate) fn execute_bmi<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let condition = cpu.flag(Status::N);
    cpu.branch(condition)
}

/// BPL - branch if negative clear.
pub(crate) fn execute_bpl<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let condition = !cpu.flag(Status::N);
    cpu.branch(condition)
}

/// BVS - branch if overflow set.
pub(crate) fn execute_bvs<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let condition = cpu.flag(Status::V);
    cpu.branch(condition)
}

/// BVC - branch if overflow clear.
pub(crate) fn execute_bvc<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let condition = !cpu.flag(Status::V);
    cpu.branch(condition)
}
