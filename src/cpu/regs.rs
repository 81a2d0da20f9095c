/*!
regs.rs - `CpuRegs`, the register and flag surface that addressing,
execution and dispatch helpers are generic over.

Bus traffic, the stack included, is not part of the trait. Helpers take the
bus as a separate `&mut B: Bus` argument so both borrows stay independent.
*/

use crate::cpu::state::{BREAK, CARRY, CpuState, NEGATIVE, OVERFLOW, UNUSED, ZERO};

pub trait CpuRegs {
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> u8;

    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: u8);

    /// PC += 1, wrapping at $FFFF.
    #[inline]
    fn advance_pc_one(&mut self) {
        self.set_pc(self.pc().wrapping_add(1));
    }

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        self.status() & mask != 0
    }

    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        let p = self.status();
        self.set_status(if value { p | mask } else { p & !mask });
    }

    /// Z from `result == 0`, N from bit 7.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, result & 0x80 != 0);
    }

    #[inline]
    fn update_carry(&mut self, carry: bool) {
        self.assign_flag(CARRY, carry);
    }

    #[inline]
    fn update_overflow(&mut self, overflow: bool) {
        self.assign_flag(OVERFLOW, overflow);
    }

    /// P as written to the stack: U always set, B only for PHP and BRK.
    #[inline]
    fn compose_status_for_push(&self, set_break: bool) -> u8 {
        let v = self.status() | UNUSED;
        if set_break { v | BREAK } else { v & !BREAK }
    }
}

impl CpuRegs for CpuState {
    fn a(&self) -> u8 {
        self.a
    }
    fn x(&self) -> u8 {
        self.x
    }
    fn y(&self) -> u8 {
        self.y
    }
    fn sp(&self) -> u8 {
        self.sp
    }
    fn pc(&self) -> u16 {
        self.pc
    }
    fn status(&self) -> u8 {
        self.status
    }

    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    fn set_status(&mut self, v: u8) {
        self.status = v;
    }
}
