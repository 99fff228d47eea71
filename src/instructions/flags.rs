//! Flag set and clear instructions. All implied, 2 cycles.
//!
//! Note that CLI takes effect for interrupt recognition at the start of the
//! next step; this engine checks the IRQ line before each fetch, which gives
//! the same observable ordering.

use crate::cpu::{Cpu, Status};
use crate::memory::Memory;

fn set_and_advance<M: Memory>(cpu: &mut Cpu<M>, flag: Status, value: bool) -> u32 {
    cpu.set_flag(flag, value);
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}

/// CLC - clear carry.
pub(crate) fn execute_clc<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    set_and_advance(cpu, Status::C, false)
}

/// SEC - set carry.
pub(crate) fn execute_sec<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    set_and_advance(cpu, Status::C, true)
}

/// CLD - clear decimal mode.
pub(crate) fn execute_cld<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    set_and_advance(cpu, Status::D, false)
}

/// SED - set decimal mode.
pub(crate) fn execute_sed<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    set_and_advance(cpu, Status::D, true)
}

/// CLI - clear interrupt disable, enabling IRQs.
pub(crate) fn execute_cli<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    set_and_advance(cpu, Status::I, false)
}

/// SEI - set interrupt disable, masking IRQs.
pub(crate) fn execute_sei<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    set_and_advance(cpu, Status::I, true)
}

/// CLV - clear overflow. There is no corresponding set instruction.
pub(crate) fn execute_clv<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    set_and_advance(cpu, Status::V, false)
}
