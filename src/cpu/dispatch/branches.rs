/*!
branches.rs - Relative branch family (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Overview
========
Each branch tests one status bit, picked by the `dispatch` match. When the
condition holds, PC (already pointing at the next instruction) moves by the
sign-extended displacement.

Cycle Rules
===========
Base cost: 2 cycles (from the opcode table).
Taken: +1.
Taken and the target lies in a different page than the next instruction: +2.

The extra cycles are the return value of `branch`; the scheduler adds them
to the base count.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::cycles::branch_extra;
use crate::cpu::dispatch::Exec;
use crate::cpu::execute::branch_target;
use crate::cpu::regs::CpuRegs;

/// Branch when status bit `mask` equals `when`. Returns the extra cycles.
pub(super) fn branch<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>, mask: u8, when: bool) -> u8 {
    if ex.cpu.is_flag_set(mask) != when {
        return 0;
    }
    let Operand::Relative(offset) = ex.operand else {
        return 0;
    };
    let from = ex.cpu.pc();
    let to = branch_target(from, offset);
    ex.cpu.set_pc(to);
    branch_extra(true, from, to)
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, ZERO};
    use crate::test_utils::setup;

    #[test]
    fn bne_not_taken_when_zero_set() {
        let (mut cpu, mut mem) = setup(&[0xD0, 0x05]);
        cpu.set_flag(ZERO, true);
        let pc = cpu.pc();
        assert_eq!(cpu.step(&mut mem), 2);
        assert_eq!(cpu.pc(), pc + 2);
    }

    #[test]
    fn bne_taken_same_page() {
        let (mut cpu, mut mem) = setup(&[0xD0, 0x05]);
        cpu.set_flag(ZERO, false);
        let pc = cpu.pc();
        assert_eq!(cpu.step(&mut mem), 3);
        assert_eq!(cpu.pc(), pc + 2 + 5);
    }

    #[test]
    fn backward_branch_across_page() {
        // The branch sits at the end of page $80 but the instruction after it
        // starts page $81, which is the page the target is compared against.
        let (mut cpu, mut mem) = setup(&[]);
        mem.load(0x80FE, &[0xB0, 0x7F]).unwrap();
        cpu.set_pc(0x80FE);
        cpu.set_flag(CARRY, true);
        assert_eq!(cpu.step(&mut mem), 3);
        assert_eq!(cpu.pc(), 0x8100 + 0x7F);

        let (mut cpu, mut mem) = setup(&[0x90, 0xFC]);
        cpu.set_flag(CARRY, false);
        // $8002 - 4 = $7FFE: different page
        assert_eq!(cpu.step(&mut mem), 4);
        assert_eq!(cpu.pc(), 0x7FFE);
    }

    #[test]
    fn branch_to_self_loop() {
        // BEQ -2 spins on itself.
        let (mut cpu, mut mem) = setup(&[0xF0, 0xFE]);
        cpu.set_flag(ZERO, true);
        let pc = cpu.pc();
        for _ in 0..3 {
            assert_eq!(cpu.step(&mut mem), 3);
            assert_eq!(cpu.pc(), pc);
        }
    }
}
