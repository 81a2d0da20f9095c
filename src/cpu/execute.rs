/*!
execute.rs - 6502 instruction semantic helpers (stack unit, ALU, flag algebra)

Purpose
=======
Centralizes the side-effect logic every dispatch family shares, so each
mnemonic handler in `dispatch::*` reduces to "get operand, call helper,
store result".

Scope (crate-visible)
---------------------
- Stack unit (generic over `CpuRegs` + `Bus`): `push`, `pop`, `push_word`,
  `pop_word`, `push_status`, `pha`, `php`, `pla`, `plp`.
- Register loads / transfers: `lda`/`ldx`/`ldy`, `tax`/`tay`/`txa`/`tya`,
  `tsx`/`txs`.
- ALU: `and`/`ora`/`eor`/`bit`, `adc`/`sbc`, `compare`.
- Value transforms returning the new byte: `asl`/`lsr`/`rol`/`ror`,
  `increment`/`decrement`. The caller decides whether the result lands in
  A, an index register or memory.
- Branch arithmetic: `branch_target`.

Design Notes
============
- Helpers never touch cycle accounting; only branches report extra cycles,
  and they do so from `dispatch::branches`.
- Stack pointer wraps modulo 256 on push and pop with no overflow detection.
- Arithmetic is binary regardless of the DECIMAL flag.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{BREAK, CARRY, NEGATIVE, OVERFLOW, STACK_BASE, UNUSED, ZERO};

// ---------------------------------------------------------------------------
// Stack unit
// ---------------------------------------------------------------------------

/// Write to `$0100 + SP`, then decrement SP.
#[inline]
pub(crate) fn push<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, v: u8) {
    let sp = cpu.sp();
    bus.write_byte(STACK_BASE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

/// Increment SP, then read from `$0100 + SP`.
#[inline]
pub(crate) fn pop<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read_byte(STACK_BASE | sp as u16)
}

/// Push high byte first so the word sits little-endian in memory.
#[inline]
pub(crate) fn push_word<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, v: u16) {
    push(cpu, bus, (v >> 8) as u8);
    push(cpu, bus, v as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = pop(cpu, bus) as u16;
    let hi = pop(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Push P. BRK/PHP push with B set, IRQ/NMI with B clear.
#[inline]
pub(crate) fn push_status<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, set_break: bool) {
    let v = cpu.compose_status_for_push(set_break);
    push(cpu, bus, v);
}

/// Pull P. B is not a real latch and is discarded; U reads as 1.
#[inline]
pub(crate) fn pull_status<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let v = pop(cpu, bus);
    cpu.set_status((v | UNUSED) & !BREAK);
}

#[inline]
pub(crate) fn pha<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn php<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    push_status(cpu, bus, true);
}

#[inline]
pub(crate) fn pla<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let v = pop(cpu, bus);
    lda(cpu, v);
}

#[inline]
pub(crate) fn plp<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    pull_status(cpu, bus);
}

// ---------------------------------------------------------------------------
// Loads / transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    ldx(cpu, a);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    ldy(cpu, a);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let x = cpu.x();
    lda(cpu, x);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let y = cpu.y();
    lda(cpu, y);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let sp = cpu.sp();
    ldx(cpu, sp);
}

/// TXS is the one transfer that leaves flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    let x = cpu.x();
    cpu.set_sp(x);
}

// ---------------------------------------------------------------------------
// Logical / BIT
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    let zero = (cpu.a() & v) == 0;
    cpu.assign_flag(ZERO, zero);
    cpu.assign_flag(NEGATIVE, (v & 0x80) != 0);
    cpu.assign_flag(OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// ADC / SBC (binary only)
// ---------------------------------------------------------------------------

pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let sum = a as u16 + v as u16 + cpu.is_flag_set(CARRY) as u16;
    let result = sum as u8;
    cpu.update_carry(sum > 0xFF);
    cpu.update_overflow((!(a ^ v) & (a ^ result) & 0x80) != 0);
    lda(cpu, result);
}

/// A - M - (1 - C), computed as A + !M + C.
#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, !v);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.update_carry(reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Shift / rotate / inc / dec value transforms
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.update_carry((v & 0x80) != 0);
    let r = v << 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.update_carry((v & 0x01) != 0);
    let r = v >> 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.is_flag_set(CARRY) as u8;
    cpu.update_carry((v & 0x80) != 0);
    let r = (v << 1) | carry_in;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = (cpu.is_flag_set(CARRY) as u8) << 7;
    cpu.update_carry((v & 0x01) != 0);
    let r = (v >> 1) | carry_in;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn increment<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_add(1);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn decrement<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_sub(1);
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Branch arithmetic
// ---------------------------------------------------------------------------

/// `pc + offset` where `offset` is already sign-extended to 16 bits.
#[inline]
pub(crate) const fn branch_target(pc: u16, offset: u16) -> u16 {
    pc.wrapping_add(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu::state::{CpuState, RESET_SP};

    fn fresh() -> (CpuState, FlatMemory) {
        let mut s = CpuState::new();
        s.sp = RESET_SP;
        (s, FlatMemory::new())
    }

    #[test]
    fn push_pop_round_trip_restores_sp() {
        let (mut s, mut mem) = fresh();
        push(&mut s, &mut mem, 0xAB);
        assert_eq!(s.sp, 0xFE);
        assert_eq!(mem.peek(0x01FF), 0xAB);
        assert_eq!(pop(&mut s, &mut mem), 0xAB);
        assert_eq!(s.sp, 0xFF);
    }

    #[test]
    fn stack_pointer_wraps() {
        let (mut s, mut mem) = fresh();
        s.sp = 0x00;
        push(&mut s, &mut mem, 0x11);
        assert_eq!(mem.peek(0x0100), 0x11);
        assert_eq!(s.sp, 0xFF);
        assert_eq!(pop(&mut s, &mut mem), 0x11);
        assert_eq!(s.sp, 0x00);
        // Pulling past the top of the page wraps back to $0100.
        s.sp = 0xFF;
        assert_eq!(pop(&mut s, &mut mem), 0x11);
        assert_eq!(s.sp, 0x00);
    }

    #[test]
    fn push_word_layout() {
        let (mut s, mut mem) = fresh();
        push_word(&mut s, &mut mem, 0x1234);
        assert_eq!(mem.peek(0x01FF), 0x12);
        assert_eq!(mem.peek(0x01FE), 0x34);
        assert_eq!(pop_word(&mut s, &mut mem), 0x1234);
    }

    #[test]
    fn php_plp_break_and_unused() {
        let (mut s, mut mem) = fresh();
        s.status = CARRY;
        php(&mut s, &mut mem);
        assert_eq!(mem.peek(0x01FF), CARRY | BREAK | UNUSED);
        plp(&mut s, &mut mem);
        assert_eq!(s.status, CARRY | UNUSED);
    }

    #[test]
    fn adc_overflow_and_carry() {
        let (mut s, _) = fresh();
        s.a = 0x50;
        adc(&mut s, 0x50);
        assert_eq!(s.a, 0xA0);
        assert!(s.is_flag_set(OVERFLOW));
        assert!(!s.is_flag_set(CARRY));
        assert!(s.is_flag_set(NEGATIVE));

        s.a = 0xF0;
        adc(&mut s, 0x20);
        assert_eq!(s.a, 0x10);
        assert!(s.is_flag_set(CARRY));
        assert!(!s.is_flag_set(OVERFLOW));
    }

    #[test]
    fn adc_ignores_decimal_flag() {
        let (mut s, _) = fresh();
        s.status |= crate::cpu::state::DECIMAL;
        s.a = 0x09;
        adc(&mut s, 0x01);
        assert_eq!(s.a, 0x0A);
    }

    #[test]
    fn sbc_borrow() {
        let (mut s, _) = fresh();
        s.a = 0x10;
        s.assign_flag(CARRY, true);
        sbc(&mut s, 0x01);
        assert_eq!(s.a, 0x0F);
        assert!(s.is_flag_set(CARRY));

        s.a = 0x00;
        s.assign_flag(CARRY, true);
        sbc(&mut s, 0x01);
        assert_eq!(s.a, 0xFF);
        assert!(!s.is_flag_set(CARRY));
        assert!(s.is_flag_set(NEGATIVE));

        s.a = 0x80;
        s.assign_flag(CARRY, true);
        sbc(&mut s, 0x01);
        assert_eq!(s.a, 0x7F);
        assert!(s.is_flag_set(OVERFLOW));
    }

    #[test]
    fn compare_flags() {
        let (mut s, _) = fresh();
        compare(&mut s, 0x10, 0x10);
        assert!(s.is_flag_set(CARRY) && s.is_flag_set(ZERO) && !s.is_flag_set(NEGATIVE));
        compare(&mut s, 0x10, 0x20);
        assert!(!s.is_flag_set(CARRY) && !s.is_flag_set(ZERO) && s.is_flag_set(NEGATIVE));
        compare(&mut s, 0x20, 0x10);
        assert!(s.is_flag_set(CARRY) && !s.is_flag_set(ZERO));
    }

    #[test]
    fn bit_copies_high_bits() {
        let (mut s, _) = fresh();
        s.a = 0x01;
        bit(&mut s, 0xC0);
        assert!(s.is_flag_set(ZERO));
        assert!(s.is_flag_set(NEGATIVE));
        assert!(s.is_flag_set(OVERFLOW));
        assert_eq!(s.a, 0x01);
    }

    #[test]
    fn rotates_through_carry() {
        let (mut s, _) = fresh();
        s.assign_flag(CARRY, false);
        assert_eq!(rol(&mut s, 0x80), 0x00);
        assert!(s.is_flag_set(CARRY) && s.is_flag_set(ZERO));
        assert_eq!(rol(&mut s, 0x00), 0x01);
        assert!(!s.is_flag_set(CARRY));
        s.assign_flag(CARRY, true);
        assert_eq!(ror(&mut s, 0x01), 0x80);
        assert!(s.is_flag_set(CARRY) && s.is_flag_set(NEGATIVE));
    }

    #[test]
    fn shifts_and_steps() {
        let (mut s, _) = fresh();
        assert_eq!(asl(&mut s, 0xC1), 0x82);
        assert!(s.is_flag_set(CARRY));
        assert_eq!(lsr(&mut s, 0x02), 0x01);
        assert!(!s.is_flag_set(CARRY));
        assert_eq!(increment(&mut s, 0xFF), 0x00);
        assert!(s.is_flag_set(ZERO));
        assert_eq!(decrement(&mut s, 0x00), 0xFF);
        assert!(s.is_flag_set(NEGATIVE));
    }

    #[test]
    fn transfers() {
        let (mut s, _) = fresh();
        s.x = 0x00;
        s.sp = 0x80;
        tsx(&mut s);
        assert_eq!(s.x, 0x80);
        assert!(s.is_flag_set(NEGATIVE));
        s.x = 0x00;
        txs(&mut s);
        assert_eq!(s.sp, 0x00);
        assert!(s.is_flag_set(NEGATIVE)); // untouched by TXS
    }

    #[test]
    fn branch_target_wraps() {
        assert_eq!(branch_target(0x8002, 0x0005), 0x8007);
        assert_eq!(branch_target(0x8002, 0xFFFB), 0x7FFD);
        assert_eq!(branch_target(0xFFFF, 0x0002), 0x0001);
    }
}
