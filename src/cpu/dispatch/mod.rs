/*!
dispatch - Instruction executor: one exhaustive match from `Mnemonic` to its
family handler, plus the shared interrupt entry sequence.

Overview
========
The scheduler (`core::Cpu`) fetches the opcode, looks up its table entry and
resolves the addressing mode. It then builds an `Exec` around the resolved
operand and calls `execute`, which:
1. Routes the mnemonic to a family handler (`load_store`, `arithmetic`,
   `logical`, `compare`, `branches`, `rmw`, `control_flow`, `misc`).
2. Returns the instruction-specific extra cycles (non-zero only for taken
   branches). Page-cross penalties are added by the scheduler.

Operand Access
==============
`Exec` fetches the operand lazily: `read()` touches the bus only when a
handler asks for the value, and latches it in `fetched`. Implied and
Accumulator operands read (and write back to) the accumulator.

Interrupts
==========
`service_interrupt` implements the hardware sequence shared by IRQ and NMI:
push PC (high, low), push P with B clear, set I, load PC from the vector.
BRK uses the same push order from `control_flow` with B set.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{push_status, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{
    CARRY, DECIMAL, IRQ_DISABLE, IRQ_VECTOR, NEGATIVE, NMI_VECTOR, OVERFLOW, ZERO,
};
use crate::cpu::table::Mnemonic;

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

/// Execution context for a single instruction.
pub(crate) struct Exec<'a, C: CpuRegs, B: Bus> {
    pub(crate) cpu: &'a mut C,
    pub(crate) bus: &'a mut B,
    pub(crate) operand: Operand,
    /// Operand value once read.
    pub(crate) fetched: Option<u8>,
}

impl<'a, C: CpuRegs, B: Bus> Exec<'a, C, B> {
    pub(crate) fn new(cpu: &'a mut C, bus: &'a mut B, operand: Operand) -> Self {
        Self {
            cpu,
            bus,
            operand,
            fetched: None,
        }
    }

    /// Operand value: memory at the resolved address, or A for
    /// implied/accumulator forms. Reads the bus at most once.
    pub(crate) fn read(&mut self) -> u8 {
        if let Some(v) = self.fetched {
            return v;
        }
        let v = match self.operand {
            Operand::Implied | Operand::Accumulator => self.cpu.a(),
            Operand::Address(addr) => self.bus.read_byte(addr),
            Operand::Relative(offset) => offset as u8,
        };
        self.fetched = Some(v);
        v
    }

    /// Store to the operand location. Accumulator/implied forms set A.
    pub(crate) fn write(&mut self, v: u8) {
        match self.operand {
            Operand::Address(addr) => self.bus.write_byte(addr, v),
            Operand::Implied | Operand::Accumulator => self.cpu.set_a(v),
            Operand::Relative(_) => {}
        }
    }

    /// Read-modify-write: memory forms write the unmodified value back before
    /// the result, as the hardware does.
    pub(crate) fn modify(&mut self, f: impl FnOnce(&mut C, u8) -> u8) {
        let old = self.read();
        let new = f(&mut *self.cpu, old);
        if let Operand::Address(addr) = self.operand {
            self.bus.write_byte(addr, old);
        }
        self.write(new);
    }

    /// Resolved address for instructions that need it (stores, jumps).
    #[inline]
    pub(crate) fn address(&self) -> u16 {
        match self.operand {
            Operand::Address(addr) => addr,
            Operand::Relative(offset) => offset,
            Operand::Implied | Operand::Accumulator => 0,
        }
    }
}

/// Execute one decoded instruction. Returns extra cycles beyond the table's
/// base count and any page-cross penalty.
pub(crate) fn execute<C: CpuRegs, B: Bus>(mnemonic: Mnemonic, ex: &mut Exec<'_, C, B>) -> u8 {
    use Mnemonic::*;
    match mnemonic {
        Lda => load_store::lda(ex),
        Ldx => load_store::ldx(ex),
        Ldy => load_store::ldy(ex),
        Sta => load_store::sta(ex),
        Stx => load_store::stx(ex),
        Sty => load_store::sty(ex),

        Adc => arithmetic::adc(ex),
        Sbc => arithmetic::sbc(ex),

        And => logical::and(ex),
        Ora => logical::ora(ex),
        Eor => logical::eor(ex),
        Bit => logical::bit(ex),

        Cmp => compare::cmp(ex),
        Cpx => compare::cpx(ex),
        Cpy => compare::cpy(ex),

        Bpl => return branches::branch(ex, NEGATIVE, false),
        Bmi => return branches::branch(ex, NEGATIVE, true),
        Bvc => return branches::branch(ex, OVERFLOW, false),
        Bvs => return branches::branch(ex, OVERFLOW, true),
        Bcc => return branches::branch(ex, CARRY, false),
        Bcs => return branches::branch(ex, CARRY, true),
        Bne => return branches::branch(ex, ZERO, false),
        Beq => return branches::branch(ex, ZERO, true),

        Asl => rmw::asl(ex),
        Lsr => rmw::lsr(ex),
        Rol => rmw::rol(ex),
        Ror => rmw::ror(ex),
        Inc => rmw::inc(ex),
        Dec => rmw::dec(ex),

        Jmp => control_flow::jmp(ex),
        Jsr => control_flow::jsr(ex),
        Rts => control_flow::rts(ex),
        Rti => control_flow::rti(ex),
        Brk => control_flow::brk(ex),

        Tax => misc::tax(ex),
        Tay => misc::tay(ex),
        Txa => misc::txa(ex),
        Tya => misc::tya(ex),
        Tsx => misc::tsx(ex),
        Txs => misc::txs(ex),

        Pha => misc::pha(ex),
        Php => misc::php(ex),
        Pla => misc::pla(ex),
        Plp => misc::plp(ex),

        Clc => misc::flag(ex, CARRY, false),
        Sec => misc::flag(ex, CARRY, true),
        Cli => misc::flag(ex, IRQ_DISABLE, false),
        Sei => misc::flag(ex, IRQ_DISABLE, true),
        Cld => misc::flag(ex, DECIMAL, false),
        Sed => misc::flag(ex, DECIMAL, true),
        Clv => misc::flag(ex, OVERFLOW, false),

        Inx => misc::inx(ex),
        Iny => misc::iny(ex),
        Dex => misc::dex(ex),
        Dey => misc::dey(ex),

        // Undefined opcodes only consume their opcode byte.
        Nop | Illegal => {}
    }
    0
}

// ---------------------------------------------------------------------------
// Interrupts
// ---------------------------------------------------------------------------

/// Hardware interrupt sources serviced at an instruction boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Nmi,
    Irq,
}

impl Interrupt {
    #[inline]
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }
}

/// Push PC and P (B clear), set I and jump through the vector.
pub(crate) fn service_interrupt<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, kind: Interrupt) {
    let pc = cpu.pc();
    push_word(cpu, bus, pc);
    push_status(cpu, bus, false);
    cpu.assign_flag(IRQ_DISABLE, true);
    let target = bus.read_word(kind.vector());
    log::debug!("{:?} from ${:04X} -> ${:04X}", kind, pc, target);
    cpu.set_pc(target);
}
