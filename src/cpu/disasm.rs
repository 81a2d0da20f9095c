//! One-instruction disassembler driven by the opcode table.
//!
//! Used for trace logging (feature `trace`) and by hosts that want a
//! readable listing. Output follows conventional 6502 assembler syntax:
//! `LDA #$10`, `STA $0200,X`, `JMP ($FFFC)`, `BNE $8010`.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::table::lookup;

/// Disassemble the instruction at `addr`.
///
/// Returns the text and the address of the following instruction. Illegal
/// opcodes render as `???` and occupy one byte.
pub fn disassemble<B: Bus>(bus: &mut B, addr: u16) -> (String, u16) {
    let entry = lookup(bus.read_byte(addr));
    let next = addr.wrapping_add(entry.bytes.max(1) as u16);
    if !entry.is_legal() {
        return (entry.mnemonic.name().to_string(), next);
    }

    // Only the instruction's own bytes are read; hosts may map I/O nearby.
    let mut operand = [0u8; 2];
    for (i, byte) in operand.iter_mut().enumerate().take(entry.mode.operand_len() as usize) {
        *byte = bus.read_byte(addr.wrapping_add(1 + i as u16));
    }
    let b1 = operand[0];
    let word = u16::from_le_bytes(operand);
    let name = entry.mnemonic.name();
    let text = match entry.mode {
        AddressingMode::Implied => name.to_string(),
        AddressingMode::Accumulator => format!("{name} A"),
        AddressingMode::Immediate => format!("{name} #${b1:02X}"),
        AddressingMode::ZeroPage => format!("{name} ${b1:02X}"),
        AddressingMode::ZeroPageX => format!("{name} ${b1:02X},X"),
        AddressingMode::ZeroPageY => format!("{name} ${b1:02X},Y"),
        AddressingMode::Absolute => format!("{name} ${word:04X}"),
        AddressingMode::AbsoluteX => format!("{name} ${word:04X},X"),
        AddressingMode::AbsoluteY => format!("{name} ${word:04X},Y"),
        AddressingMode::Indirect => format!("{name} (${word:04X})"),
        AddressingMode::IndexedIndirect => format!("{name} (${b1:02X},X)"),
        AddressingMode::IndirectIndexed => format!("{name} (${b1:02X}),Y"),
        AddressingMode::Relative => {
            let target = next.wrapping_add(b1 as i8 as i16 as u16);
            format!("{name} ${target:04X}")
        }
    };
    (text, next)
}
