//! Shift and rotate instructions: ASL, LSR, ROL, ROR.
//!
//! Each comes in an accumulator form (2 cycles) and memory read-modify-write
//! forms. RMW forms never pay a page-cross penalty.

use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::opcodes::OpcodeEntry;
use crate::AddressingMode;

/// Applies a shift/rotate either to the accumulator or in place in memory.
fn read_modify_write<M: Memory>(
    cpu: &mut Cpu<M>,
    entry: &OpcodeEntry,
    op: fn(&mut Cpu<M>, u8) -> u8,
) -> u32 {
    if entry.mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.a = op(cpu, value);
    } else {
        let (value, ea) = cpu.read_operand_fixed(entry.mode);
        let result = op(cpu, value);
        cpu.memory.write(ea, result);
    }
    cpu.pc = cpu.pc.wrapping_add(entry.length() as u16);
    entry.base_cycles as u32
}

/// ASL - arithmetic shift left. Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    read_modify_write(cpu, entry, Cpu::shift_left)
}

/// LSR - logical shift right. Bit 0 goes to carry, bit 7 becomes 0.
pub(crate) fn execute_lsr<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    read_modify_write(cpu, entry, Cpu::shift_right)
}

/// ROL - rotate left through carry.
pub(crate) fn execute_rol<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    read_modify_write(cpu, entry, Cpu::rotate_left)
}

/// ROR - rotate right through carry.
pub(crate) fn execute_ror<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    read_modify_write(cpu, entry, Cpu::rotate_right)
}
