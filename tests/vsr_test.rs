//! Tests for virtual subroutine hooks.
//!
//! Tests cover:
//! - Hook invocation on JSR and JMP to a registered address
//! - The simulated RTS after a JSR-invoked hook
//! - Host access to registers and memory from inside a hook
//! - Exit requests surfacing as `StepResult::Exited`
//! - Registry lifetime across `power`

use mos6502::{Cpu, FlatMemory, Memory, StepResult};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

fn store_marker(cpu: &mut Cpu<FlatMemory>) {
    let a = cpu.a();
    cpu.memory_mut().write(0x0300, a);
}

fn exit_hook(cpu: &mut Cpu<FlatMemory>) {
    cpu.request_exit();
}

// ========== Invocation ==========

#[test]
fn test_jsr_invokes_hook_and_simulates_rts() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0xF7, 0xFF, 0xEA]); // JSR $FFF7; NOP
    cpu.register_vsr(0xFFF7, store_marker);

    cpu.set_a(0x42);
    assert_eq!(cpu.step(), StepResult::Continue);

    // the hook ran and the engine returned past the call site
    assert_eq!(cpu.memory().read(0x0300), 0x42);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.s(), 0xFD); // stack balanced by the simulated RTS
}

#[test]
fn test_jmp_invokes_hook_without_return() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0xF7, 0xFF]); // JMP $FFF7
    cpu.register_vsr(0xFFF7, store_marker);

    cpu.set_a(0x07);
    cpu.step();

    assert_eq!(cpu.memory().read(0x0300), 0x07);
    // no simulated RTS on a JMP transfer
    assert_eq!(cpu.pc(), 0xFFF7);
    assert_eq!(cpu.s(), 0xFD);
}

#[test]
fn test_jsr_to_unregistered_address_is_normal() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    cpu.register_vsr(0xFFF7, store_marker);

    cpu.step();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.s(), 0xFB); // return address still on the stack
    assert_eq!(cpu.memory().read(0x0300), 0x00);
}

#[test]
fn test_hook_can_rewrite_registers() {
    fn set_xy(cpu: &mut Cpu<FlatMemory>) {
        cpu.set_x(0x11);
        cpu.set_y(0x22);
    }

    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0xF0]); // JSR $F000
    cpu.register_vsr(0xF000, set_xy);

    cpu.step();

    assert_eq!(cpu.x(), 0x11);
    assert_eq!(cpu.y(), 0x22);
}

// ========== Exit ==========

#[test]
fn test_exit_hook_terminates_run() {
    let mut cpu = setup_cpu();
    // LDA #$2A; JSR $FFF7
    cpu.memory_mut().load(0x8000, &[0xA9, 0x2A, 0x20, 0xF7, 0xFF]);
    cpu.register_vsr(0xFFF7, exit_hook);

    assert_eq!(cpu.step(), StepResult::Continue);
    let result = cpu.step();

    match result {
        StepResult::Exited {
            status,
            cycles,
            coverage,
        } => {
            assert_eq!(status, 0x2A); // accumulator is the exit status
            assert_eq!(cycles, 2 + 6);
            assert!(coverage > 0.0);
        }
        other => panic!("expected Exited, got {other:?}"),
    }
}

#[test]
fn test_run_stops_on_exit() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x00, 0x4C, 0xF7, 0xFF]); // LDA #$00; JMP $FFF7
    cpu.register_vsr(0xFFF7, exit_hook);

    let result = cpu.run(1_000_000);

    assert!(matches!(result, StepResult::Exited { status: 0, .. }));
}

// ========== Lifecycle ==========

#[test]
fn test_power_cycle_clears_registry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0xF7, 0xFF]); // JSR $FFF7
    cpu.register_vsr(0xFFF7, store_marker);

    cpu.power(false);
    cpu.power(true);
    cpu.reset();

    cpu.set_a(0x42);
    cpu.step();

    // hook is gone, the JSR transfers control normally
    assert_eq!(cpu.pc(), 0xFFF7);
    assert_eq!(cpu.memory().read(0x0300), 0x00);
}
