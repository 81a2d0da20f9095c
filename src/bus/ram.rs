/*!
RAM module: a flat 64 KiB memory image behind the `Bus` interface.

Address map:
- $0000-$00FF: zero page
- $0100-$01FF: hardware stack
- $0200-$FFF9: general memory / program space
- $FFFA-$FFFB: NMI vector
- $FFFC-$FFFD: RESET vector
- $FFFE-$FFFF: IRQ/BRK vector

Every 16-bit address maps to exactly one byte, so there is no mirroring and no
out-of-range access. Program images are placed with `load`, which is the only
fallible call here.
*/

use crate::bus::Bus;
use crate::cpu::state::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

/// Size of the CPU address space (in bytes).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Owned 64 KiB memory buffer.
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8]>,
}

impl Default for FlatMemory {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &self.data.len())
            .field("reset_vector", &format_args!("${:04X}", self.peek_word(RESET_VECTOR)))
            .finish()
    }
}

impl FlatMemory {
    /// Create a new memory image initialized to 0.
    pub fn new() -> Self {
        Self {
            data: vec![0u8; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Build a memory image from raw bytes placed at $0000.
    ///
    /// Fails when the image does not fit in the address space.
    pub fn from_image(image: &[u8]) -> Result<Self, String> {
        let mut mem = Self::new();
        mem.load(0x0000, image)?;
        Ok(mem)
    }

    /// Clear memory contents to 0.
    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Copy `bytes` into memory starting at `origin`.
    ///
    /// Loads never wrap around $FFFF; an image running past the end of the
    /// address space is rejected and memory is left untouched.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) -> Result<(), String> {
        let start = origin as usize;
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            return Err(format!(
                "Image of {} bytes at ${:04X} runs past $FFFF",
                bytes.len(),
                origin
            ));
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Store the RESET vector ($FFFC/$FFFD).
    pub fn set_reset_vector(&mut self, target: u16) {
        self.write_word(RESET_VECTOR, target);
    }

    /// Store the IRQ/BRK vector ($FFFE/$FFFF).
    pub fn set_irq_vector(&mut self, target: u16) {
        self.write_word(IRQ_VECTOR, target);
    }

    /// Store the NMI vector ($FFFA/$FFFB).
    pub fn set_nmi_vector(&mut self, target: u16) {
        self.write_word(NMI_VECTOR, target);
    }

    /// Read a byte without going through the `Bus` trait (no `&mut` needed).
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Little-endian word read without `&mut`; wraps at $FFFF.
    #[inline]
    pub fn peek_word(&self, addr: u16) -> u16 {
        let lo = self.peek(addr) as u16;
        let hi = self.peek(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Expose the whole image (read-only). Useful for diagnostics or hashing.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Bus for FlatMemory {
    #[inline]
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write_byte(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{FlatMemory, MEMORY_SIZE};
    use crate::bus::Bus;

    #[test]
    fn size_and_init() {
        let m = FlatMemory::new();
        assert_eq!(m.as_slice().len(), MEMORY_SIZE);
        assert!(m.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn every_address_is_distinct() {
        let mut m = FlatMemory::new();
        m.write_byte(0x0001, 0xAA);
        m.write_byte(0x0801, 0x55);
        assert_eq!(m.read_byte(0x0001), 0xAA);
        assert_eq!(m.read_byte(0x0801), 0x55);
        m.write_byte(0xFFFF, 0x77);
        assert_eq!(m.peek(0xFFFF), 0x77);
    }

    #[test]
    fn load_places_bytes_at_origin() {
        let mut m = FlatMemory::new();
        m.load(0x8000, &[0xA9, 0x49, 0x8D]).unwrap();
        assert_eq!(m.peek(0x7FFF), 0x00);
        assert_eq!(m.peek(0x8000), 0xA9);
        assert_eq!(m.peek(0x8002), 0x8D);
    }

    #[test]
    fn load_up_to_last_byte_fits() {
        let mut m = FlatMemory::new();
        assert!(m.load(0xFFFE, &[0x34, 0x12]).is_ok());
        assert_eq!(m.peek_word(0xFFFE), 0x1234);
    }

    #[test]
    fn load_past_end_is_rejected() {
        let mut m = FlatMemory::new();
        let err = m.load(0xFFFF, &[0x01, 0x02]).unwrap_err();
        assert!(err.contains("$FFFF"));
        assert_eq!(m.peek(0xFFFF), 0x00);
        assert_eq!(m.peek(0x0000), 0x00);
    }

    #[test]
    fn from_image_rejects_oversized() {
        assert!(FlatMemory::from_image(&vec![0u8; MEMORY_SIZE]).is_ok());
        assert!(FlatMemory::from_image(&vec![0u8; MEMORY_SIZE + 1]).is_err());
    }

    #[test]
    fn vector_setters() {
        let mut m = FlatMemory::new();
        m.set_nmi_vector(0x1111);
        m.set_reset_vector(0x2222);
        m.set_irq_vector(0x3333);
        assert_eq!(m.peek_word(0xFFFA), 0x1111);
        assert_eq!(m.peek_word(0xFFFC), 0x2222);
        assert_eq!(m.peek_word(0xFFFE), 0x3333);
        m.clear();
        assert_eq!(m.peek_word(0xFFFC), 0x0000);
    }
}
