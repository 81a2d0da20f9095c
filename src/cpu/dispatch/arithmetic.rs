/*!
arithmetic.rs - ADC / SBC

Binary add and subtract with carry. The DECIMAL flag is carried in P but
does not change the result (RP2A03 behaviour).
*/

use crate::bus::Bus;
use crate::cpu::dispatch::Exec;
use crate::cpu::execute;
use crate::cpu::regs::CpuRegs;

pub(super) fn adc<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::adc(ex.cpu, v);
}

pub(super) fn sbc<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::sbc(ex.cpu, v);
}
