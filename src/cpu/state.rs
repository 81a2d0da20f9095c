//! Architectural register file of the 6502: A, X, Y, SP, PC and P.
//!
//! The registers are plain public fields. Generic instruction code goes
//! through the `CpuRegs` trait instead, and the `Cpu` façade wraps them in
//! accessors. Status layout, high bit first:
//!
//! ```text
//! N V 1 B D I Z C
//! ```
//!
//! Bit 5 reads as 1. B only exists in a pushed copy of P: PHP and BRK push it
//! set, IRQ and NMI push it clear, and PLP/RTI never latch it.

use crate::bus::Bus;

pub const CARRY: u8 = 0x01;
pub const ZERO: u8 = 0x02;
pub const IRQ_DISABLE: u8 = 0x04;
/// Stored and toggled by SED/CLD; arithmetic ignores it.
pub const DECIMAL: u8 = 0x08;
pub const BREAK: u8 = 0x10;
pub const UNUSED: u8 = 0x20;
pub const OVERFLOW: u8 = 0x40;
pub const NEGATIVE: u8 = 0x80;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The stack lives in page one; SP is the low byte of the next free slot.
pub const STACK_BASE: u16 = 0x0100;
pub const RESET_SP: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
}

impl Default for CpuState {
    /// Power-on: all registers zero, P = U|I.
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            pc: 0,
            status: UNUSED | IRQ_DISABLE,
        }
    }
}

impl CpuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear A/X/Y, set SP to $FF and P to U|I, then load PC from $FFFC.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) {
        *self = Self {
            sp: RESET_SP,
            pc: bus.read_word(RESET_VECTOR),
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;

    #[test]
    fn power_on_state() {
        let s = CpuState::new();
        assert_eq!((s.a, s.x, s.y, s.sp, s.pc), (0, 0, 0, 0, 0));
        assert_eq!(s.status, UNUSED | IRQ_DISABLE);
        assert_eq!(s.status & BREAK, 0);
    }

    #[test]
    fn reset_loads_vector_and_clears_registers() {
        let mut mem = FlatMemory::new();
        mem.set_reset_vector(0xC123);
        let mut s = CpuState {
            a: 0x11,
            x: 0x22,
            y: 0x33,
            sp: 0x40,
            pc: 0x1234,
            status: 0xFF,
        };
        s.reset(&mut mem);
        assert_eq!(s.pc, 0xC123);
        assert_eq!(s.sp, RESET_SP);
        assert_eq!((s.a, s.x, s.y), (0, 0, 0));
        assert_eq!(s.status, UNUSED | IRQ_DISABLE);
    }
}
