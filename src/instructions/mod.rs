//! # Instruction Execution
//!
//! Execution handlers for the 56 documented 6502 instructions, grouped by
//! category. Each handler receives the CPU with the PC still at the opcode
//! byte, performs the operation, advances the PC (or transfers control), and
//! returns the cycle cost including any dynamic penalty.
//!
//! ## Organization
//!
//! - [`alu`] - arithmetic, logic, compares, BIT
//! - [`branches`] - the eight conditional branches
//! - [`control`] - JMP, JSR, RTS, RTI, BRK, NOP
//! - [`flags`] - flag set/clear instructions
//! - [`inc_dec`] - increments and decrements
//! - [`load_store`] - loads and stores
//! - [`shifts`] - shifts and rotates
//! - [`stack`] - push/pull instructions
//! - [`transfer`] - register transfers

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::opcodes::{Mnemonic, OpcodeEntry};

/// Dispatches a decoded opcode to its handler and returns the cycle cost.
pub(crate) fn execute<M: Memory>(cpu: &mut Cpu<M>, entry: &OpcodeEntry) -> u32 {
    use Mnemonic::*;

    match entry.mnemonic {
        Adc => alu::execute_adc(cpu, entry),
        And => alu::execute_and(cpu, entry),
        Asl => shifts::execute_asl(cpu, entry),
        Bcc => branches::execute_bcc(cpu),
        Bcs => branches::execute_bcs(cpu),
        Beq => branches::execute_beq(cpu),
        Bit => alu::execute_bit(cpu, entry),
        Bmi => branches::execute_bmi(cpu),
        Bne => branches::execute_bne(cpu),
        Bpl => branches::execute_bpl(cpu),
        Brk => control::execute_brk(cpu),
        Bvc => branches::execute_bvc(cpu),
        Bvs => branches::execute_bvs(cpu),
        Clc => flags::execute_clc(cpu),
        Cld => flags::execute_cld(cpu),
        Cli => flags::execute_cli(cpu),
        Clv => flags::execute_clv(cpu),
        Cmp => alu::execute_cmp(cpu, entry),
        Cpx => alu::execute_cpx(cpu, entry),
        Cpy => alu::execute_cpy(cpu, entry),
        Dec => inc_dec::execute_dec(cpu, entry),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),
        Eor => alu::execute_eor(cpu, entry),
        Inc => inc_dec::execute_inc(cpu, entry),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Jmp => control::execute_jmp(cpu, entry),
        Jsr => control::execute_jsr(cpu),
        Lda => load_store::execute_lda(cpu, entry),
        Ldx => load_store::execute_ldx(cpu, entry),
        Ldy => load_store::execute_ldy(cpu, entry),
        Lsr => shifts::execute_lsr(cpu, entry),
        Nop => control::execute_nop(cpu),
        Ora => alu::execute_ora(cpu, entry),
        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),
        Rol => shifts::execute_rol(cpu, entry),
        Ror => shifts::execute_ror(cpu, entry),
        Rti => control::execute_rti(cpu),
        Rts => control::execute_rts(cpu),
        Sbc => alu::execute_sbc(cpu, entry),
        Sec => flags::execute_sec(cpu),
        Sed => flags::execute_sed(cpu),
        Sei => flags::execute_sei(cpu),
        Sta => load_store::execute_sta(cpu, entry),
        Stx => load_store::execute_stx(cpu, entry),
        Sty => load_store::execute_sty(cpu, entry),
        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txa => transfer::execute_txa(cpu),
        Txs => transfer::execute_txs(cpu),
        Tya => transfer::execute_tya(cpu),
        // Decode rejects unassigned opcodes before dispatch.
        Ill => 0,
    }
}
