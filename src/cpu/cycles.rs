/*!
cycles.rs - Cycle timing rules layered on top of the opcode table.

Purpose
=======
Provides:
  - `page_penalty(mnemonic, crossed)` : the +1 charged when an indexed read
                                        crosses a page boundary.
  - `branch_extra(taken, from, to)`   : the +1 / +2 a branch adds when taken.
  - Fixed costs for the reset and interrupt entry sequences.

Scope
=====
Base cycle counts live in `table::OPCODE_TABLE`. Everything here is a pure
function of values the scheduler and branch handlers already hold.

Design Notes
============
- Only read-class instructions pay the page-cross cycle. Stores and
  read-modify-write forms are listed in the table at their fixed worst-case
  cost, so they never get the extra cycle even though the resolver reports
  the crossing.
- Branch page crossing compares the page of the instruction that follows the
  branch with the page of the branch target.
*/

use crate::cpu::table::Mnemonic;

/// Cycles consumed by the reset sequence.
pub const RESET_CYCLES: u8 = 8;

/// Cycles consumed by IRQ / NMI entry.
pub const INTERRUPT_CYCLES: u8 = 7;

/// True for instructions whose indexed forms pay a page-cross cycle.
#[inline]
pub const fn pays_page_penalty(mnemonic: Mnemonic) -> bool {
    use Mnemonic::*;
    matches!(mnemonic, Adc | And | Cmp | Eor | Lda | Ldx | Ldy | Ora | Sbc)
}

/// Extra cycle for a page crossing during address resolution.
#[inline]
pub const fn page_penalty(mnemonic: Mnemonic, crossed: bool) -> u8 {
    if crossed && pays_page_penalty(mnemonic) { 1 } else { 0 }
}

/// Extra cycles for a conditional branch.
///
/// `from` is the address of the instruction after the branch; `to` is the
/// branch target.
#[inline]
pub const fn branch_extra(taken: bool, from: u16, to: u16) -> u8 {
    if !taken {
        0
    } else if (from & 0xFF00) != (to & 0xFF00) {
        2
    } else {
        1
    }
}
