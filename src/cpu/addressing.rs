/*!
addressing.rs - 6502 addressing modes and operand resolution

Overview
========
Provides:
- `AddressingMode`: the closed set of thirteen 6502 addressing modes.
- `resolve`: one exhaustive match turning a mode into a `Resolved` operand,
  consuming operand bytes at PC.
- Instruction stream fetch helpers and the two pointer-read quirks
  (zero-page wrap, JMP indirect page wrap).

Scope & Responsibilities
========================
- Pure address / operand resolution only.
- Does NOT read the operand value itself (handlers fetch lazily) and does
  NOT charge cycles. Page crossings are reported in `Resolved::page_crossed`;
  whether that costs a cycle is decided by `cycles::page_penalty`.

Caller Assumptions
==================
- PC points at the first operand byte (the opcode has already been fetched).
- PC is advanced exclusively by these helpers while resolving.

| Mode            | Bytes | Page-crossed reported            |
|-----------------|-------|----------------------------------|
| Implied         | 0     | never                            |
| Accumulator     | 0     | never                            |
| Immediate       | 1     | never                            |
| ZeroPage(,X/,Y) | 1     | never                            |
| Absolute        | 2     | never                            |
| Absolute,X / ,Y | 2     | base high byte != final high byte |
| Indirect        | 2     | never                            |
| (Indirect,X)    | 1     | never                            |
| (Indirect),Y    | 1     | base high byte != final high byte |
| Relative        | 1     | never (branch decides)           |
*/

use std::fmt;

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;

/// The thirteen 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect,
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            Self::Implied | Self::Accumulator => 0,
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::IndexedIndirect
            | Self::IndirectIndexed
            | Self::Relative => 1,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::Indirect => 2,
        }
    }

    /// Short three-letter tag, as used in opcode matrices and trace output.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Implied => "IMP",
            Self::Accumulator => "ACC",
            Self::Immediate => "IMM",
            Self::ZeroPage => "ZPG",
            Self::ZeroPageX => "ZPX",
            Self::ZeroPageY => "ZPY",
            Self::Absolute => "ABS",
            Self::AbsoluteX => "ABX",
            Self::AbsoluteY => "ABY",
            Self::Indirect => "IND",
            Self::IndexedIndirect => "IZX",
            Self::IndirectIndexed => "IZY",
            Self::Relative => "REL",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Where an instruction's operand lives once its addressing mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No explicit operand. Reads yield the accumulator (compatibility).
    Implied,
    /// The accumulator itself (shift/rotate A).
    Accumulator,
    /// A memory address (Immediate resolves to the address of the literal).
    Address(u16),
    /// Branch displacement, sign-extended to 16 bits.
    Relative(u16),
}

/// Result of running an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    pub page_crossed: bool,
}

impl Resolved {
    #[inline]
    const fn at(addr: u16) -> Self {
        Self {
            operand: Operand::Address(addr),
            page_crossed: false,
        }
    }

    #[inline]
    const fn indexed(base: u16, addr: u16) -> Self {
        Self {
            operand: Operand::Address(addr),
            page_crossed: (base & 0xFF00) != (addr & 0xFF00),
        }
    }

    /// Resolved address, if the operand lives in memory.
    #[inline]
    pub fn address(&self) -> Option<u16> {
        match self.operand {
            Operand::Address(a) => Some(a),
            _ => None,
        }
    }
}

/// Run `mode` against the instruction stream at PC.
pub fn resolve<C: CpuRegs, B: Bus>(mode: AddressingMode, cpu: &mut C, bus: &mut B) -> Resolved {
    match mode {
        AddressingMode::Implied => Resolved {
            operand: Operand::Implied,
            page_crossed: false,
        },
        AddressingMode::Accumulator => Resolved {
            operand: Operand::Accumulator,
            page_crossed: false,
        },
        AddressingMode::Immediate => {
            let addr = cpu.pc();
            cpu.advance_pc_one();
            Resolved::at(addr)
        }
        AddressingMode::ZeroPage => Resolved::at(fetch_byte(cpu, bus) as u16),
        AddressingMode::ZeroPageX => {
            let base = fetch_byte(cpu, bus);
            Resolved::at(base.wrapping_add(cpu.x()) as u16)
        }
        AddressingMode::ZeroPageY => {
            let base = fetch_byte(cpu, bus);
            Resolved::at(base.wrapping_add(cpu.y()) as u16)
        }
        AddressingMode::Absolute => Resolved::at(fetch_word(cpu, bus)),
        AddressingMode::AbsoluteX => {
            let base = fetch_word(cpu, bus);
            Resolved::indexed(base, base.wrapping_add(cpu.x() as u16))
        }
        AddressingMode::AbsoluteY => {
            let base = fetch_word(cpu, bus);
            Resolved::indexed(base, base.wrapping_add(cpu.y() as u16))
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(cpu, bus);
            Resolved::at(read_word_indirect_bug(bus, ptr))
        }
        AddressingMode::IndexedIndirect => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            Resolved::at(read_word_zp(bus, zp))
        }
        AddressingMode::IndirectIndexed => {
            let zp = fetch_byte(cpu, bus);
            let base = read_word_zp(bus, zp);
            Resolved::indexed(base, base.wrapping_add(cpu.y() as u16))
        }
        AddressingMode::Relative => {
            let raw = fetch_byte(cpu, bus);
            Resolved {
                operand: Operand::Relative(raw as i8 as i16 as u16),
                page_crossed: false,
            }
        }
    }
}

/// Fetch next byte from the instruction stream, incrementing PC.
#[inline]
pub(crate) fn fetch_byte<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u8 {
    let v = bus.read_byte(cpu.pc());
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
#[inline]
pub(crate) fn fetch_word<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Read a 16-bit little endian pointer from zero page with wraparound
/// on the high byte (standard 6502 zero-page indirect behavior).
#[inline]
pub(crate) fn read_word_zp<B: Bus>(bus: &mut B, base: u8) -> u16 {
    let lo = bus.read_byte(base as u16) as u16;
    let hi = bus.read_byte(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Emulate the 6502 JMP (indirect) hardware bug: when the low byte of the
/// pointer is $FF the high byte is read from the start of the same page.
#[inline]
pub(crate) fn read_word_indirect_bug<B: Bus>(bus: &mut B, ptr: u16) -> u16 {
    let lo = bus.read_byte(ptr) as u16;
    let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let hi = bus.read_byte(hi_addr) as u16;
    (hi << 8) | lo
}
