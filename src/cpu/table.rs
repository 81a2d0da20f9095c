/*!
table.rs - The 256-entry 6502 opcode table.

Purpose
=======
Maps every opcode byte to its mnemonic, addressing mode, instruction length
and base cycle count. The scheduler consults it once per fetch; the
disassembler uses it to size and render instructions.

Design
------
- `OPCODE_TABLE` is a `static` built at compile time by `build_table`, which
  starts from 256 illegal placeholders and overlays the 151 documented
  opcodes from `LEGAL`.
- Illegal entries decode as `Mnemonic::Illegal`, `Implied`, 0 bytes and
  0 cycles. The executor treats them as no-ops.
- Base cycle counts exclude page-cross and branch penalties; stores and
  read-modify-write forms carry their fixed worst-case count.

Notes
-----
- Byte length includes the opcode itself. BRK is listed as 1 byte; its
  padding byte is skipped by the handler.
*/

use std::fmt;

use crate::cpu::addressing::AddressingMode::{self, *};

/// The 56 documented 6502 mnemonics plus a catch-all for undefined opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    Illegal,
}

impl Mnemonic {
    /// Upper-case assembler name (`"???"` for illegal opcodes).
    pub const fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Illegal => "???",
        }
    }

    /// Branch family (relative addressing, conditional).
    pub const fn is_branch(self) -> bool {
        use Mnemonic::*;
        matches!(self, Bcc | Bcs | Beq | Bne | Bmi | Bpl | Bvc | Bvs)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Total instruction length including the opcode byte.
    pub bytes: u8,
    /// Base cycle count before page/branch penalties.
    pub cycles: u8,
}

impl OpcodeEntry {
    const fn illegal(opcode: u8) -> Self {
        Self {
            opcode,
            mnemonic: Mnemonic::Illegal,
            mode: Implied,
            bytes: 0,
            cycles: 0,
        }
    }

    #[inline]
    pub const fn is_legal(&self) -> bool {
        !matches!(self.mnemonic, Mnemonic::Illegal)
    }
}

/// Full decode table, indexed by opcode byte.
pub static OPCODE_TABLE: [OpcodeEntry; 256] = build_table();

/// Decode one opcode byte.
#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeEntry {
    &OPCODE_TABLE[opcode as usize]
}

const fn build_table() -> [OpcodeEntry; 256] {
    let mut table = [OpcodeEntry::illegal(0); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = OpcodeEntry::illegal(i as u8);
        i += 1;
    }
    let mut j = 0;
    while j < LEGAL.len() {
        let (opcode, mnemonic, mode, bytes, cycles) = LEGAL[j];
        table[opcode as usize] = OpcodeEntry {
            opcode,
            mnemonic,
            mode,
            bytes,
            cycles,
        };
        j += 1;
    }
    table
}

// ---------------------------------------------------------------------------
// Documented opcodes: (opcode, mnemonic, mode, bytes, base cycles)
// ---------------------------------------------------------------------------

use Mnemonic as M;

#[rustfmt::skip]
const LEGAL: [(u8, Mnemonic, AddressingMode, u8, u8); 151] = [
    // ADC
    (0x69, M::Adc, Immediate, 2, 2), (0x65, M::Adc, ZeroPage, 2, 3),
    (0x75, M::Adc, ZeroPageX, 2, 4), (0x6D, M::Adc, Absolute, 3, 4),
    (0x7D, M::Adc, AbsoluteX, 3, 4), (0x79, M::Adc, AbsoluteY, 3, 4),
    (0x61, M::Adc, IndexedIndirect, 2, 6), (0x71, M::Adc, IndirectIndexed, 2, 5),
    // AND
    (0x29, M::And, Immediate, 2, 2), (0x25, M::And, ZeroPage, 2, 3),
    (0x35, M::And, ZeroPageX, 2, 4), (0x2D, M::And, Absolute, 3, 4),
    (0x3D, M::And, AbsoluteX, 3, 4), (0x39, M::And, AbsoluteY, 3, 4),
    (0x21, M::And, IndexedIndirect, 2, 6), (0x31, M::And, IndirectIndexed, 2, 5),
    // ASL
    (0x0A, M::Asl, Accumulator, 1, 2), (0x06, M::Asl, ZeroPage, 2, 5),
    (0x16, M::Asl, ZeroPageX, 2, 6), (0x0E, M::Asl, Absolute, 3, 6),
    (0x1E, M::Asl, AbsoluteX, 3, 7),
    // Branches
    (0x90, M::Bcc, Relative, 2, 2), (0xB0, M::Bcs, Relative, 2, 2),
    (0xF0, M::Beq, Relative, 2, 2), (0x30, M::Bmi, Relative, 2, 2),
    (0xD0, M::Bne, Relative, 2, 2), (0x10, M::Bpl, Relative, 2, 2),
    (0x50, M::Bvc, Relative, 2, 2), (0x70, M::Bvs, Relative, 2, 2),
    // BIT
    (0x24, M::Bit, ZeroPage, 2, 3), (0x2C, M::Bit, Absolute, 3, 4),
    // BRK
    (0x00, M::Brk, Implied, 1, 7),
    // Flag clears
    (0x18, M::Clc, Implied, 1, 2), (0xD8, M::Cld, Implied, 1, 2),
    (0x58, M::Cli, Implied, 1, 2), (0xB8, M::Clv, Implied, 1, 2),
    // CMP
    (0xC9, M::Cmp, Immediate, 2, 2), (0xC5, M::Cmp, ZeroPage, 2, 3),
    (0xD5, M::Cmp, ZeroPageX, 2, 4), (0xCD, M::Cmp, Absolute, 3, 4),
    (0xDD, M::Cmp, AbsoluteX, 3, 4), (0xD9, M::Cmp, AbsoluteY, 3, 4),
    (0xC1, M::Cmp, IndexedIndirect, 2, 6), (0xD1, M::Cmp, IndirectIndexed, 2, 5),
    // CPX / CPY
    (0xE0, M::Cpx, Immediate, 2, 2), (0xE4, M::Cpx, ZeroPage, 2, 3),
    (0xEC, M::Cpx, Absolute, 3, 4),
    (0xC0, M::Cpy, Immediate, 2, 2), (0xC4, M::Cpy, ZeroPage, 2, 3),
    (0xCC, M::Cpy, Absolute, 3, 4),
    // DEC / DEX / DEY
    (0xC6, M::Dec, ZeroPage, 2, 5), (0xD6, M::Dec, ZeroPageX, 2, 6),
    (0xCE, M::Dec, Absolute, 3, 6), (0xDE, M::Dec, AbsoluteX, 3, 7),
    (0xCA, M::Dex, Implied, 1, 2), (0x88, M::Dey, Implied, 1, 2),
    // EOR
    (0x49, M::Eor, Immediate, 2, 2), (0x45, M::Eor, ZeroPage, 2, 3),
    (0x55, M::Eor, ZeroPageX, 2, 4), (0x4D, M::Eor, Absolute, 3, 4),
    (0x5D, M::Eor, AbsoluteX, 3, 4), (0x59, M::Eor, AbsoluteY, 3, 4),
    (0x41, M::Eor, IndexedIndirect, 2, 6), (0x51, M::Eor, IndirectIndexed, 2, 5),
    // INC / INX / INY
    (0xE6, M::Inc, ZeroPage, 2, 5), (0xF6, M::Inc, ZeroPageX, 2, 6),
    (0xEE, M::Inc, Absolute, 3, 6), (0xFE, M::Inc, AbsoluteX, 3, 7),
    (0xE8, M::Inx, Implied, 1, 2), (0xC8, M::Iny, Implied, 1, 2),
    // JMP / JSR
    (0x4C, M::Jmp, Absolute, 3, 3), (0x6C, M::Jmp, Indirect, 3, 5),
    (0x20, M::Jsr, Absolute, 3, 6),
    // LDA
    (0xA9, M::Lda, Immediate, 2, 2), (0xA5, M::Lda, ZeroPage, 2, 3),
    (0xB5, M::Lda, ZeroPageX, 2, 4), (0xAD, M::Lda, Absolute, 3, 4),
    (0xBD, M::Lda, AbsoluteX, 3, 4), (0xB9, M::Lda, AbsoluteY, 3, 4),
    (0xA1, M::Lda, IndexedIndirect, 2, 6), (0xB1, M::Lda, IndirectIndexed, 2, 5),
    // LDX
    (0xA2, M::Ldx, Immediate, 2, 2), (0xA6, M::Ldx, ZeroPage, 2, 3),
    (0xB6, M::Ldx, ZeroPageY, 2, 4), (0xAE, M::Ldx, Absolute, 3, 4),
    (0xBE, M::Ldx, AbsoluteY, 3, 4),
    // LDY
    (0xA0, M::Ldy, Immediate, 2, 2), (0xA4, M::Ldy, ZeroPage, 2, 3),
    (0xB4, M::Ldy, ZeroPageX, 2, 4), (0xAC, M::Ldy, Absolute, 3, 4),
    (0xBC, M::Ldy, AbsoluteX, 3, 4),
    // LSR
    (0x4A, M::Lsr, Accumulator, 1, 2), (0x46, M::Lsr, ZeroPage, 2, 5),
    (0x56, M::Lsr, ZeroPageX, 2, 6), (0x4E, M::Lsr, Absolute, 3, 6),
    (0x5E, M::Lsr, AbsoluteX, 3, 7),
    // NOP
    (0xEA, M::Nop, Implied, 1, 2),
    // ORA
    (0x09, M::Ora, Immediate, 2, 2), (0x05, M::Ora, ZeroPage, 2, 3),
    (0x15, M::Ora, ZeroPageX, 2, 4), (0x0D, M::Ora, Absolute, 3, 4),
    (0x1D, M::Ora, AbsoluteX, 3, 4), (0x19, M::Ora, AbsoluteY, 3, 4),
    (0x01, M::Ora, IndexedIndirect, 2, 6), (0x11, M::Ora, IndirectIndexed, 2, 5),
    // Stack
    (0x48, M::Pha, Implied, 1, 3), (0x08, M::Php, Implied, 1, 3),
    (0x68, M::Pla, Implied, 1, 4), (0x28, M::Plp, Implied, 1, 4),
    // ROL
    (0x2A, M::Rol, Accumulator, 1, 2), (0x26, M::Rol, ZeroPage, 2, 5),
    (0x36, M::Rol, ZeroPageX, 2, 6), (0x2E, M::Rol, Absolute, 3, 6),
    (0x3E, M::Rol, AbsoluteX, 3, 7),
    // ROR
    (0x6A, M::Ror, Accumulator, 1, 2), (0x66, M::Ror, ZeroPage, 2, 5),
    (0x76, M::Ror, ZeroPageX, 2, 6), (0x6E, M::Ror, Absolute, 3, 6),
    (0x7E, M::Ror, AbsoluteX, 3, 7),
    // RTI / RTS
    (0x40, M::Rti, Implied, 1, 6), (0x60, M::Rts, Implied, 1, 6),
    // SBC
    (0xE9, M::Sbc, Immediate, 2, 2), (0xE5, M::Sbc, ZeroPage, 2, 3),
    (0xF5, M::Sbc, ZeroPageX, 2, 4), (0xED, M::Sbc, Absolute, 3, 4),
    (0xFD, M::Sbc, AbsoluteX, 3, 4), (0xF9, M::Sbc, AbsoluteY, 3, 4),
    (0xE1, M::Sbc, IndexedIndirect, 2, 6), (0xF1, M::Sbc, IndirectIndexed, 2, 5),
    // Flag sets
    (0x38, M::Sec, Implied, 1, 2), (0xF8, M::Sed, Implied, 1, 2),
    (0x78, M::Sei, Implied, 1, 2),
    // STA
    (0x85, M::Sta, ZeroPage, 2, 3), (0x95, M::Sta, ZeroPageX, 2, 4),
    (0x8D, M::Sta, Absolute, 3, 4), (0x9D, M::Sta, AbsoluteX, 3, 5),
    (0x99, M::Sta, AbsoluteY, 3, 5), (0x81, M::Sta, IndexedIndirect, 2, 6),
    (0x91, M::Sta, IndirectIndexed, 2, 6),
    // STX / STY
    (0x86, M::Stx, ZeroPage, 2, 3), (0x96, M::Stx, ZeroPageY, 2, 4),
    (0x8E, M::Stx, Absolute, 3, 4),
    (0x84, M::Sty, ZeroPage, 2, 3), (0x94, M::Sty, ZeroPageX, 2, 4),
    (0x8C, M::Sty, Absolute, 3, 4),
    // Transfers
    (0xAA, M::Tax, Implied, 1, 2), (0xA8, M::Tay, Implied, 1, 2),
    (0xBA, M::Tsx, Implied, 1, 2), (0x8A, M::Txa, Implied, 1, 2),
    (0x9A, M::Txs, Implied, 1, 2), (0x98, M::Tya, Implied, 1, 2),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn legal_opcode_count() {
        let legal = OPCODE_TABLE.iter().filter(|e| e.is_legal()).count();
        assert_eq!(legal, 151);
    }

    #[test]
    fn no_duplicate_legal_entries() {
        let set: HashSet<u8> = LEGAL.iter().map(|e| e.0).collect();
        assert_eq!(set.len(), LEGAL.len());
    }

    #[test]
    fn entries_are_indexed_by_opcode() {
        for (i, e) in OPCODE_TABLE.iter().enumerate() {
            assert_eq!(e.opcode as usize, i);
        }
    }

    #[test]
    fn illegal_entries_are_inert() {
        for op in [0x02u8, 0x03, 0x1A, 0x80, 0xFF, 0xEB] {
            let e = lookup(op);
            assert_eq!(e.mnemonic, Mnemonic::Illegal);
            assert_eq!(e.mode, AddressingMode::Implied);
            assert_eq!((e.bytes, e.cycles), (0, 0));
        }
    }

    #[test]
    fn length_matches_addressing_mode() {
        for e in OPCODE_TABLE.iter().filter(|e| e.is_legal()) {
            assert_eq!(e.bytes, 1 + e.mode.operand_len(), "opcode {:02X}", e.opcode);
        }
    }

    #[test]
    fn fifty_six_mnemonics() {
        let set: HashSet<Mnemonic> = LEGAL.iter().map(|e| e.1).collect();
        assert_eq!(set.len(), 56);
    }

    #[test]
    fn spot_check_known_entries() {
        let lda = lookup(0xBD);
        assert_eq!(
            (lda.mnemonic, lda.mode, lda.bytes, lda.cycles),
            (Mnemonic::Lda, AddressingMode::AbsoluteX, 3, 4)
        );
        let jmp = lookup(0x6C);
        assert_eq!(
            (jmp.mnemonic, jmp.mode, jmp.cycles),
            (Mnemonic::Jmp, AddressingMode::Indirect, 5)
        );
        let brk = lookup(0x00);
        assert_eq!((brk.mnemonic, brk.bytes, brk.cycles), (Mnemonic::Brk, 1, 7));
        assert_eq!(lookup(0x91).cycles, 6);
        assert_eq!(lookup(0xFE).cycles, 7);
        assert!(lookup(0xD0).mnemonic.is_branch());
        assert_eq!(lookup(0xEA).mnemonic.to_string(), "NOP");
    }
}
