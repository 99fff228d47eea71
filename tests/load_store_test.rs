//! Tests for the load and store instructions across addressing modes.
//!
//! Tests cover:
//! - N/Z updates on loads, no flag updates on stores
//! - Zero-page indexed wrap-around
//! - Indexed-indirect and indirect-indexed resolution
//! - Page-cross penalties on loads and their absence on stores

use mos6502::{Cpu, FlatMemory, Memory, Status, StepResult};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

// ========== Loads ==========

#[test]
fn test_lda_immediate_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x00]); // LDA #$00

    cpu.set_a(0x42);
    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Status::Z));
    assert!(!cpu.flag(Status::N));
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_negative_flag() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x80]); // LDA #$80

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag(Status::N));
    assert!(!cpu.flag(Status::Z));
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB5, 0xF0]); // LDA $F0,X
    cpu.memory_mut().write(0x0010, 0x99); // 0xF0 + 0x20 wraps to 0x10

    cpu.set_x(0x20);
    cpu.step();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB6, 0x40]); // LDX $40,Y
    cpu.memory_mut().write(0x0045, 0x77);

    cpu.set_y(0x05);
    cpu.step();

    assert_eq!(cpu.x(), 0x77);
}

#[test]
fn test_lda_indirect_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA1, 0x20]); // LDA ($20,X)
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x30); // pointer at 0x24 -> 0x3000
    cpu.memory_mut().write(0x3000, 0x5A);

    cpu.set_x(0x04);
    cpu.step();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA1, 0xFF]); // LDA ($FF,X), X=0
    cpu.memory_mut().write(0x00FF, 0x34);
    cpu.memory_mut().write(0x0000, 0x12); // high byte wraps to 0x00
    cpu.memory_mut().write(0x1234, 0xAB);

    cpu.set_x(0x00);
    cpu.step();

    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn test_lda_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB1, 0x40]); // LDA ($40),Y
    cpu.memory_mut().write(0x0040, 0x00);
    cpu.memory_mut().write(0x0041, 0x20); // pointer 0x2000
    cpu.memory_mut().write(0x2005, 0xEE);

    cpu.set_y(0x05);
    cpu.step();

    assert_eq!(cpu.a(), 0xEE);
    assert_eq!(cpu.cycles(), 5); // no page cross
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB9, 0xFF, 0x20]); // LDA $20FF,Y
    cpu.memory_mut().write(0x2100, 0x11);

    cpu.set_y(0x01);
    cpu.step();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.cycles(), 5); // 4 + 1
}

// ========== Stores ==========

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x8D, 0x00, 0x03]); // STA $0300

    cpu.set_a(0x42);
    cpu.set_flag(Status::Z, true);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0300), 0x42);
    assert!(cpu.flag(Status::Z)); // stores never touch flags
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_sta_absolute_x_no_page_cross_penalty() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x9D, 0xFF, 0x20]); // STA $20FF,X

    cpu.set_a(0x55);
    cpu.set_x(0x01);
    cpu.step();

    assert_eq!(cpu.memory().read(0x2100), 0x55);
    // worst case priced into the base cycles, crossing adds nothing
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_sta_indirect_y_fixed_cost() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x91, 0x40]); // STA ($40),Y
    cpu.memory_mut().write(0x0040, 0xFF);
    cpu.memory_mut().write(0x0041, 0x20);

    cpu.set_a(0x66);
    cpu.set_y(0x01);
    cpu.step();

    assert_eq!(cpu.memory().read(0x2100), 0x66);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stx_sty_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x86, 0x10, 0x84, 0x11]); // STX $10; STY $11

    cpu.set_x(0x01);
    cpu.set_y(0x02);
    assert_eq!(cpu.step(), StepResult::Continue);
    assert_eq!(cpu.step(), StepResult::Continue);

    assert_eq!(cpu.memory().read(0x0010), 0x01);
    assert_eq!(cpu.memory().read(0x0011), 0x02);
}
