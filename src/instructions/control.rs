//! Control-flow instructions: JMP, JSR, RTS, RTI, BRK, and NOP.
//!
//! JSR and JMP are the two instructions that consult the virtual subroutine
//! registry: after the control transfer, a hook registered at the target
//! address runs with full CPU access, and a JSR transfer is then completed
//! with a simulated RTS.

use crate::cpu::{Cpu, Status, IRQ_VECTOR};
use crate::memory::Memory;
use crate::opcodes::OpcodeEntry;
use crate::AddressingMode;

/// JMP - transfer control to the operand address.
///
/// The indirect form reproduces the NMOS hardware bug: a pointer at $xxFF
/// fetches its high byte from $xx00 instead of the next page.
pub(crate) fn execute_jmp<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    let operand = cpu.read16(cpu.pc.wrapping_add(1));
    cpu.pc = match entry.mode {
        AddressingMode::Indirect => cpu.read16_bug(operand),
        _ => operand,
    };
    cpu.call_vsr(false);
    entry.base_cycles as u32
}

/// JSR - jump to subroutine.
///
/// Pushes the address of the JSR's last byte (PC+2); RTS increments it on
/// return. 6 cycles.
pub(crate) fn execute_jsr<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let target = cpu.read16(cpu.pc.wrapping_add(1));
    let return_addr = cpu.pc.wrapping_add(2);
    cpu.push16(return_addr);
    cpu.pc = target;
    cpu.call_vsr(true);
    6
}

/// RTS - return from subroutine. Pops the return address and adds one.
pub(crate) fn execute_rts<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.pc = cpu.pop16().wrapping_add(1);
    6
}

/// RTI - return from interrupt.
///
/// Pops P then PC. Unlike RTS there is no +1 adjustment: the interrupt
/// sequence pushed the exact resume address. The unused bit is forced on.
pub(crate) fn execute_rti<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    let p = cpu.pop8();
    cpu.p = Status::from_bits_retain(p) | Status::U;
    cpu.pc = cpu.pop16();
    6
}

/// BRK - software interrupt.
///
/// Pushes PC+2 (skipping the padding byte after the opcode) and P with the
/// B flag set, sets B and I, and vectors through 0xFFFE. Executes regardless
/// of the I flag. 7 cycles.
pub(crate) fn execute_brk<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    // the padding byte after the opcode is fetched and discarded
    let _ = cpu.memory.read(cpu.pc.wrapping_add(1));
    let return_addr = cpu.pc.wrapping_add(2);
    cpu.push16(return_addr);
    cpu.push8((cpu.p | Status::B).bits());
    cpu.p.insert(Status::B | Status::I);
    cpu.pc = cpu.read16(IRQ_VECTOR);
    7
}

/// NOP - no operation. 2 cycles.
pub(crate) fn execute_nop<M: Memory>(cpu: &mut Cpu<M>) -> u32 {
    cpu.pc = cpu.pc.wrapping_add(1);
    2
}
