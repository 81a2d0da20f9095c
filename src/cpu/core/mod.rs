/*!
core::Cpu - 6502 CPU façade: register state plus the cycle scheduler.

Overview
========
`Cpu` owns a `CpuState` and the bookkeeping that turns the instantaneous
fetch / decode / execute burst into one-cycle-per-call timing:

- `tick` advances exactly one clock cycle. When no cycles are owed it first
  services a pending NMI or IRQ, or runs the next instruction, and records
  what that costs in `cycles_remaining`.
- `step` drives `tick` until the next instruction (or interrupt entry)
  completes and returns its cycle cost.
- `run` is a convenience loop over `step`.

The memory bus is never stored. Every call that touches memory borrows it.

Decode Pipeline
===============
1. Fetch the opcode at PC (PC += 1) and look it up in `OPCODE_TABLE`.
2. Resolve the addressing mode (`addressing::resolve`), consuming operand
   bytes and noting a page crossing.
3. Execute via `dispatch::execute`, which reads the operand lazily.
4. `cycles_remaining = base + page_penalty + instruction extra`.

Interrupts
==========
- `nmi()` and `irq()` latch a request that is serviced at the next
  instruction boundary. NMI wins when both are pending.
- IRQ is ignored while I is set and stays pending until I clears.
- Entry costs 7 cycles. Reset costs 8.

Logging
=======
- `debug!` on reset, interrupt entry and illegal opcodes.
- `trace!` per instruction. With the `trace` feature the line also carries
  the disassembly.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, fetch_byte, resolve};
use crate::cpu::cycles::{INTERRUPT_CYCLES, RESET_CYCLES, page_penalty};
use crate::cpu::dispatch::{Exec, Interrupt, execute, service_interrupt};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CpuState, IRQ_DISABLE};
use crate::cpu::table::{Mnemonic, lookup};

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    /// Cycles still owed by the instruction in flight.
    cycles_remaining: u8,
    /// Last fetched opcode. Interrupt entry fetches none and leaves it as is.
    opcode: u8,
    /// Operand value read by the last instruction, if it read one.
    /// Cleared by interrupt entry.
    fetched: Option<u8>,
    /// Operand resolution of the last instruction. Cleared by interrupt entry.
    resolved: Option<Resolved>,
    nmi_pending: bool,
    irq_pending: bool,
    total_cycles: u64,
    last_cycles: u8,
}

impl Cpu {
    /// Construct a new CPU with power-up defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Mutable access to the registers, e.g. to seed a test scenario.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Hardware reset: clear registers, SP = $FF, P = U|I, PC from $FFFC.
    /// Drops pending interrupts and charges the 8-cycle reset sequence.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.state.reset(bus);
        self.nmi_pending = false;
        self.irq_pending = false;
        self.fetched = None;
        self.resolved = None;
        self.cycles_remaining = RESET_CYCLES;
        self.last_cycles = RESET_CYCLES;
        log::debug!("CPU reset, pc=${:04X}", self.state.pc);
    }

    // ---------------------------------------------------------------------
    // Scheduler
    // ---------------------------------------------------------------------

    /// Advance one clock cycle.
    pub fn tick<B: Bus>(&mut self, bus: &mut B) {
        if self.cycles_remaining == 0 {
            let cost = self.begin(bus);
            self.cycles_remaining = cost;
            self.last_cycles = cost;
        }
        // Zero-cost (illegal) opcodes still spend the fetch tick.
        self.cycles_remaining = self.cycles_remaining.saturating_sub(1);
        self.total_cycles += 1;
    }

    /// Finish any outstanding cycles, then run the next instruction or
    /// interrupt entry to completion. Returns its cycle cost.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.drain(bus);
        self.tick(bus);
        self.drain(bus);
        self.last_cycles as u32
    }

    /// Run up to `max_instructions` steps. Returns the cycles consumed.
    pub fn run<B: Bus>(&mut self, bus: &mut B, max_instructions: usize) -> u64 {
        let start = self.total_cycles;
        for _ in 0..max_instructions {
            self.step(bus);
        }
        self.total_cycles - start
    }

    /// True at an instruction boundary (no cycles owed).
    pub fn complete(&self) -> bool {
        self.cycles_remaining == 0
    }

    /// Request a maskable interrupt.
    pub fn irq(&mut self) {
        self.irq_pending = true;
    }

    /// Request a non-maskable interrupt.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    fn drain<B: Bus>(&mut self, bus: &mut B) {
        while self.cycles_remaining > 0 {
            self.tick(bus);
        }
    }

    /// Start the next unit of work at an instruction boundary and return its
    /// total cost.
    fn begin<B: Bus>(&mut self, bus: &mut B) -> u8 {
        if self.nmi_pending {
            self.nmi_pending = false;
            return self.enter_interrupt(bus, Interrupt::Nmi);
        }
        if self.irq_pending && !self.state.is_flag_set(IRQ_DISABLE) {
            self.irq_pending = false;
            return self.enter_interrupt(bus, Interrupt::Irq);
        }
        self.fetch_execute(bus)
    }

    fn enter_interrupt<B: Bus>(&mut self, bus: &mut B, kind: Interrupt) -> u8 {
        self.fetched = None;
        self.resolved = None;
        service_interrupt(&mut self.state, bus, kind);
        INTERRUPT_CYCLES
    }

    fn fetch_execute<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let pc = self.state.pc;
        self.trace_instruction(bus, pc);

        let opcode = fetch_byte(&mut self.state, bus);
        let entry = lookup(opcode);
        self.opcode = opcode;
        if entry.mnemonic == Mnemonic::Illegal {
            log::debug!("illegal opcode ${:02X} at ${:04X}, treated as no-op", opcode, pc);
        }

        let resolved = resolve(entry.mode, &mut self.state, bus);
        let mut ex = Exec::new(&mut self.state, bus, resolved.operand);
        let extra = execute(entry.mnemonic, &mut ex);
        self.fetched = ex.fetched;
        self.resolved = Some(resolved);

        entry.cycles + page_penalty(entry.mnemonic, resolved.page_crossed) + extra
    }

    #[cfg(feature = "trace")]
    fn trace_instruction<B: Bus>(&self, bus: &mut B, pc: u16) {
        if log::log_enabled!(log::Level::Trace) {
            let (text, _) = crate::cpu::disasm::disassemble(bus, pc);
            log::trace!("{:04X}  {:<14} {}", pc, text, self.register_summary());
        }
    }

    #[cfg(not(feature = "trace"))]
    fn trace_instruction<B: Bus>(&self, _bus: &mut B, pc: u16) {
        log::trace!("{:04X}  {}", pc, self.register_summary());
    }

    fn register_summary(&self) -> String {
        let s = &self.state;
        format!(
            "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            s.a, s.x, s.y, s.status, s.sp, self.total_cycles
        )
    }

    // ---------------------------------------------------------------------
    // Scheduler introspection
    // ---------------------------------------------------------------------
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles_remaining
    }
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }
    /// Cost of the most recently started instruction or interrupt entry.
    pub fn last_cycles(&self) -> u8 {
        self.last_cycles
    }
    pub fn opcode(&self) -> u8 {
        self.opcode
    }
    pub fn fetched(&self) -> Option<u8> {
        self.fetched
    }
    pub fn resolved(&self) -> Option<Resolved> {
        self.resolved
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatMemory;
    use crate::cpu::state::{BREAK, CARRY, UNUSED};
    use crate::test_utils::{IRQ_HANDLER, NMI_HANDLER, PROGRAM_START, setup};

    #[test]
    fn power_on_defaults() {
        let cpu = Cpu::new();
        assert_eq!((cpu.a(), cpu.x(), cpu.y(), cpu.sp(), cpu.pc()), (0, 0, 0, 0, 0));
        assert!(cpu.get_flag(IRQ_DISABLE));
        assert!(cpu.get_flag(UNUSED));
        assert!(cpu.complete());
    }

    #[test]
    fn reset_primes_eight_cycles() {
        let mut mem = FlatMemory::new();
        mem.set_reset_vector(0xC000);
        let mut cpu = Cpu::new();
        cpu.nmi();
        cpu.reset(&mut mem);
        assert_eq!(cpu.pc(), 0xC000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.cycles_remaining(), 8);
        assert!(!cpu.nmi_pending());
        for _ in 0..8 {
            assert!(!cpu.complete());
            cpu.tick(&mut mem);
        }
        assert!(cpu.complete());
        assert_eq!(cpu.total_cycles(), 8);
        assert_eq!(cpu.pc(), 0xC000);
    }

    #[test]
    fn tick_spreads_instruction_over_its_cycles() {
        // LDA $1234 (4 cycles)
        let (mut cpu, mut mem) = setup(&[0xAD, 0x34, 0x12]);
        mem.load(0x1234, &[0x77]).unwrap();
        cpu.tick(&mut mem);
        // Work happens on the first tick; the rest is countdown.
        assert_eq!(cpu.a(), 0x77);
        assert_eq!(cpu.opcode(), 0xAD);
        assert_eq!(cpu.fetched(), Some(0x77));
        assert_eq!(cpu.cycles_remaining(), 3);
        cpu.tick(&mut mem);
        cpu.tick(&mut mem);
        assert!(!cpu.complete());
        cpu.tick(&mut mem);
        assert!(cpu.complete());
        assert_eq!(cpu.last_cycles(), 4);
    }

    #[test]
    fn illegal_opcode_costs_only_the_fetch_tick() {
        let (mut cpu, mut mem) = setup(&[0x02, 0xEA]);
        let before = cpu.total_cycles();
        assert_eq!(cpu.step(&mut mem), 0);
        assert_eq!(cpu.total_cycles() - before, 1);
        assert_eq!(cpu.pc(), PROGRAM_START + 1);
        assert_eq!(cpu.step(&mut mem), 2);
    }

    #[test]
    fn nmi_serviced_at_boundary() {
        let (mut cpu, mut mem) = setup(&[0xEA, 0xEA]);
        cpu.nmi();
        assert_eq!(cpu.step(&mut mem), 7);
        assert_eq!(cpu.pc(), NMI_HANDLER);
        assert!(cpu.get_flag(IRQ_DISABLE));
        assert_eq!(mem.peek(0x01FF), 0x80);
        assert_eq!(mem.peek(0x01FE), 0x00);
        assert_eq!(mem.peek(0x01FD) & BREAK, 0);
        assert!(!cpu.nmi_pending());
    }

    #[test]
    fn irq_masked_until_cli() {
        // NOP ; CLI ; NOP
        let (mut cpu, mut mem) = setup(&[0xEA, 0x58, 0xEA]);
        cpu.irq();
        assert_eq!(cpu.step(&mut mem), 2);
        assert!(cpu.irq_pending());
        assert_eq!(cpu.step(&mut mem), 2);
        assert_eq!(cpu.step(&mut mem), 7);
        assert_eq!(cpu.pc(), IRQ_HANDLER);
        assert!(!cpu.irq_pending());
    }

    #[test]
    fn irq_entry_pushes_pc_and_status_without_break() {
        let (mut cpu, mut mem) = setup(&[0xEA, 0xEA]);
        cpu.set_flag(IRQ_DISABLE, false);
        cpu.set_flag(CARRY, true);
        cpu.irq();
        assert_eq!(cpu.step(&mut mem), 7);
        assert_eq!(cpu.pc(), IRQ_HANDLER);
        assert!(cpu.get_flag(IRQ_DISABLE));
        assert_eq!(cpu.sp(), 0xFC);
        // Return address is the instruction that was about to run.
        assert_eq!(mem.peek(0x01FF), 0x80);
        assert_eq!(mem.peek(0x01FE), 0x00);
        assert_eq!(mem.peek(0x01FD), UNUSED | CARRY);
        assert!(!cpu.irq_pending());
    }

    #[test]
    fn irq_handler_returns_to_interrupted_code() {
        // NOP ; LDA #$42 ; handler at $9000: RTI
        let (mut cpu, mut mem) = setup(&[0xEA, 0xA9, 0x42]);
        mem.write_byte(IRQ_HANDLER, 0x40);
        cpu.set_flag(IRQ_DISABLE, false);
        assert_eq!(cpu.step(&mut mem), 2);
        cpu.irq();
        assert_eq!(cpu.step(&mut mem), 7);
        assert_eq!(cpu.pc(), IRQ_HANDLER);
        assert_eq!(cpu.step(&mut mem), 6);
        assert_eq!(cpu.pc(), PROGRAM_START + 1);
        assert_eq!(cpu.sp(), 0xFF);
        // RTI restored the pre-interrupt P, so I is clear again.
        assert!(!cpu.get_flag(IRQ_DISABLE));
        assert!(!cpu.get_flag(BREAK));
        assert_eq!(cpu.step(&mut mem), 2);
        assert_eq!(cpu.a(), 0x42);
    }

    #[test]
    fn interrupt_entry_clears_operand_latches() {
        // LDA $1234 ; NOP
        let (mut cpu, mut mem) = setup(&[0xAD, 0x34, 0x12, 0xEA]);
        cpu.step(&mut mem);
        assert!(cpu.fetched().is_some());
        assert!(cpu.resolved().is_some());
        cpu.nmi();
        cpu.step(&mut mem);
        assert_eq!(cpu.pc(), NMI_HANDLER);
        assert_eq!(cpu.fetched(), None);
        assert_eq!(cpu.resolved(), None);
        assert_eq!(cpu.opcode(), 0xAD);
    }

    #[test]
    fn nmi_has_priority_over_irq() {
        let (mut cpu, mut mem) = setup(&[0xEA]);
        cpu.set_flag(IRQ_DISABLE, false);
        cpu.irq();
        cpu.nmi();
        cpu.step(&mut mem);
        assert_eq!(cpu.pc(), NMI_HANDLER);
        // I is now set, so the IRQ waits.
        assert!(cpu.irq_pending());
    }

    #[test]
    fn run_counts_cycles() {
        // CLC ; LDA #1 ; STA $10
        let (mut cpu, mut mem) = setup(&[0x18, 0xA9, 0x01, 0x85, 0x10]);
        assert_eq!(cpu.run(&mut mem, 3), 2 + 2 + 3);
        assert!(!cpu.get_flag(CARRY));
        assert_eq!(mem.peek(0x0010), 0x01);
    }
}
