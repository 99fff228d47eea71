//! # Memory Capability
//!
//! The [`Memory`] trait decouples the CPU from specific memory
//! implementations: flat 64KB RAM, memory-mapped I/O, ROM/RAM splits, banked
//! systems, or debugging wrappers.
//!
//! The trait follows 6502 hardware behavior: there is no bus error mechanism,
//! so reads and writes always succeed. Unmapped reads may return garbage and
//! writes to ROM regions may be ignored; that is the implementation's choice.

use rand::Rng;

/// Byte-addressable memory capability used by the CPU.
///
/// All 65536 addresses are always valid; there is no error channel. The CPU
/// holds the memory by value but does not dictate its content or mapping.
///
/// # Examples
///
/// ```
/// use mos6502::{FlatMemory, Memory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use mos6502::Memory;
///
/// struct RomRam {
///     ram: [u8; 0x8000], // 0x0000-0x7FFF
///     rom: [u8; 0x8000], // 0x8000-0xFFFF
/// }
///
/// impl Memory for RomRam {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // ROM writes are silently ignored.
///     }
/// }
/// ```
pub trait Memory {
    /// Reads a byte from the given 16-bit address. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the given 16-bit address. Must never panic; read-only
    /// regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat memory: every address is writable RAM.
///
/// Useful for testing and for hosts that load a program image and run it
/// without any memory-mapped hardware.
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, FlatMemory, Memory};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte
///
/// let cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a flat memory with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Creates a flat memory filled with random bytes.
    ///
    /// Real hardware powers up with unpredictable RAM content; filling with
    /// random bytes instead of zeroes catches programs that rely on
    /// uninitialized memory.
    pub fn new_random() -> Self {
        let mut data = Box::new([0u8; 65536]);
        rand::rng().fill(&mut data[..]);
        Self { data }
    }

    /// Copies `image` into memory starting at `addr`, wrapping at the top of
    /// the address space.
    pub fn load(&mut self, addr: u16, image: &[u8]) {
        for (i, &byte) in image.iter().enumerate() {
            self.data[addr.wrapping_add(i as u16) as usize] = byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
