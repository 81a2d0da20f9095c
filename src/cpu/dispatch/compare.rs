/*!
compare.rs - CMP / CPX / CPY

`reg - M` is computed and discarded. C is set when `reg >= M`, Z when they
are equal, N from bit 7 of the difference.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::Exec;
use crate::cpu::execute::compare;
use crate::cpu::regs::CpuRegs;

pub(super) fn cmp<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    let a = ex.cpu.a();
    compare(ex.cpu, a, v);
}

pub(super) fn cpx<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    let x = ex.cpu.x();
    compare(ex.cpu, x, v);
}

pub(super) fn cpy<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    let y = ex.cpu.y();
    compare(ex.cpu, y, v);
}
