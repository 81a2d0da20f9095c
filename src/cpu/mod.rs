/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
state.rs        - Registers, flag masks, vectors, power-on / reset state.
regs.rs         - `CpuRegs` trait used by every generic helper.
table.rs        - 256-entry opcode table (mnemonic, mode, bytes, cycles).
addressing.rs   - The thirteen addressing modes and operand resolution.
execute.rs      - Stack unit and ALU / flag helpers.
dispatch/       - Mnemonic -> handler match, interrupt entry.
cycles.rs       - Page-cross and branch penalties, fixed sequence costs.
core/           - `Cpu` façade and the cycle scheduler.
disasm.rs       - One-instruction disassembler.
```

The public surface is the `Cpu` façade plus the table and disassembler.
Downstream code should not rely on the internal module layout.

Feature flags:

- `trace`: adds the disassembly to per-instruction trace logging.

Usage:
```rust
use cpu6502::bus::FlatMemory;
use cpu6502::cpu::Cpu;

let mut mem = FlatMemory::new();
mem.load(0x8000, &[0xA9, 0x49, 0x8D, 0xAA, 0xBB]).unwrap();
mem.set_reset_vector(0x8000);

let mut cpu = Cpu::new();
cpu.reset(&mut mem);
cpu.run(&mut mem, 2);
assert_eq!(mem.peek(0xBBAA), 0x49);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub mod disasm;
pub(crate) mod execute;
pub mod regs;
pub mod state;
pub mod table;

pub use crate::cpu::addressing::{AddressingMode, Operand, Resolved};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::disasm::disassemble;
pub use crate::cpu::dispatch::Interrupt;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, IRQ_VECTOR, NEGATIVE, NMI_VECTOR, OVERFLOW,
    RESET_VECTOR, UNUSED, ZERO,
};
pub use crate::cpu::table::{Mnemonic, OPCODE_TABLE, OpcodeEntry, lookup};
