#![doc = r#"
Bus module: the memory interface the CPU core talks through.

Overview
- `Bus` is the only way the CPU reaches memory. Every operand fetch, stack
  access, vector load and write-back goes through these four calls, so a host
  can decode memory-mapped I/O behind it without the CPU noticing.
- `ram::FlatMemory` is a plain 64 KiB implementation used by tests and by
  hosts that do not need address decoding.

Contract
- Addresses are full 16-bit CPU addresses.
- Words are little-endian: low byte at `addr`, high byte at `addr + 1`
  (wrapping at $FFFF).
- Reads take `&mut self` because I/O registers may have read side effects.
- A bus that cannot honour an address (e.g. a sparse map) should panic; the
  CPU treats every access as infallible.
"#]

/// Flat 64 KiB memory implementing `Bus`.
pub mod ram;

pub use ram::FlatMemory;

/// CPU-visible memory interface.
pub trait Bus {
    /// Read one byte.
    fn read_byte(&mut self, addr: u16) -> u8;

    /// Write one byte.
    fn write_byte(&mut self, addr: u16, value: u8);

    /// Read a little-endian word (low at `addr`, high at `addr + 1`).
    #[inline]
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read_byte(addr) as u16;
        let hi = self.read_byte(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write a little-endian word (low at `addr`, high at `addr + 1`).
    #[inline]
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write_byte(addr, (value & 0xFF) as u8);
        self.write_byte(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read_byte(&mut self, addr: u16) -> u8 {
        (**self).read_byte(addr)
    }

    #[inline]
    fn write_byte(&mut self, addr: u16, value: u8) {
        (**self).write_byte(addr, value);
    }

    #[inline]
    fn read_word(&mut self, addr: u16) -> u16 {
        (**self).read_word(addr)
    }

    #[inline]
    fn write_word(&mut self, addr: u16, value: u16) {
        (**self).write_word(addr, value);
    }
}
