//! Tests for JMP, JSR, and RTS, including the NMOS indirect-jump bug.

use mos6502::{Cpu, FlatMemory, Memory, StepResult};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x00, 0x90]); // JMP $9000

    assert_eq!(cpu.step(), StepResult::Continue);

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x6C, 0x00, 0x30]); // JMP ($3000)
    cpu.memory_mut().write(0x3000, 0x34);
    cpu.memory_mut().write(0x3001, 0x12);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, 0x30]); // JMP ($30FF)
    cpu.memory_mut().write(0x30FF, 0x34); // low byte
    cpu.memory_mut().write(0x3000, 0x12); // high byte from $3000, not $3100
    cpu.memory_mut().write(0x3100, 0x99);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_return_minus_one() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000

    cpu.step();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.cycles(), 6);
    // pushed address is the JSR's last byte, 0x8002
    assert_eq!(cpu.memory().read(0x01FD), 0x80);
    assert_eq!(cpu.memory().read(0x01FC), 0x02);
    assert_eq!(cpu.s(), 0xFB);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90, 0xEA]); // JSR $9000; NOP
    cpu.memory_mut().write(0x9000, 0x60); // RTS

    cpu.step(); // JSR
    cpu.step(); // RTS

    assert_eq!(cpu.pc(), 0x8003); // lands on the NOP
    assert_eq!(cpu.s(), 0xFD);
    assert_eq!(cpu.cycles(), 12);
}

#[test]
fn test_nested_subroutines() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    cpu.memory_mut().load(0x9000, &[0x20, 0x00, 0xA0, 0x60]); // JSR $A000; RTS
    cpu.memory_mut().write(0xA000, 0x60); // RTS

    cpu.step(); // outer JSR
    cpu.step(); // inner JSR
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.s(), 0xF9);

    cpu.step(); // inner RTS
    assert_eq!(cpu.pc(), 0x9003);

    cpu.step(); // outer RTS
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.s(), 0xFD);
}
