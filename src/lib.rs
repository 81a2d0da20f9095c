#![doc = r#"
cpu6502 library crate.

A cycle-counted MOS 6502 / RP2A03 CPU core: 256-entry opcode table, the
thirteen addressing modes, all 56 documented instructions, IRQ / NMI / RESET
sequencing and a one-cycle-per-call scheduler.

Modules:
- bus: the `Bus` trait the CPU reads and writes through, plus `FlatMemory`,
  a plain 64 KiB implementation
- cpu: the `Cpu` façade, opcode table, addressing, executor and disassembler

The crate installs no logger. Diagnostics go through the `log` facade at
`debug` (reset, interrupts, illegal opcodes) and `trace` (every instruction).

In tests, shared program-image helpers are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cpu;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, FlatMemory};
pub use cpu::Cpu;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
