/*!
load_store.rs - Load / Store family (LDA LDX LDY STA STX STY)

Loads read the resolved operand and set Z/N. Stores write the register to the
resolved address and leave flags alone. Page-cross penalties for the indexed
load forms are charged by the scheduler, never here; stores carry their fixed
worst-case count in the opcode table.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::Exec;
use crate::cpu::execute;
use crate::cpu::regs::CpuRegs;

pub(super) fn lda<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::lda(ex.cpu, v);
}

pub(super) fn ldx<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::ldx(ex.cpu, v);
}

pub(super) fn ldy<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::ldy(ex.cpu, v);
}

pub(super) fn sta<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.cpu.a();
    ex.write(v);
}

pub(super) fn stx<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.cpu.x();
    ex.write(v);
}

pub(super) fn sty<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.cpu.y();
    ex.write(v);
}
