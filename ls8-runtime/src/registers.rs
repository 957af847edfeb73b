//! Register file
//!
//! Seven general-purpose registers plus the stack pointer. The stack pointer
//! is held in its own field; `Register::SP` (R7) operands are routed to it.

use ls8_spec::{Register, NUM_REGISTERS, STACK_TOP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    /// R0-R6
    general: [u8; NUM_REGISTERS - 1],

    /// R7
    sp: u8,
}

impl RegisterFile {
    /// All general-purpose registers zero, stack pointer at `STACK_TOP`
    pub fn new() -> Self {
        Self {
            general: [0; NUM_REGISTERS - 1],
            sp: STACK_TOP,
        }
    }

    #[inline]
    pub fn read(&self, reg: Register) -> u8 {
        if reg.is_sp() {
            self.sp
        } else {
            self.general[reg.index()]
        }
    }

    #[inline]
    pub fn write(&mut self, reg: Register, value: u8) {
        if reg.is_sp() {
            self.sp = value;
        } else {
            self.general[reg.index()] = value;
        }
    }

    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }

    #[inline]
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Decrement the stack pointer (8-bit wrapping) and return the new value
    #[inline]
    pub fn dec_sp(&mut self) -> u8 {
        self.sp = self.sp.wrapping_sub(1);
        self.sp
    }

    /// Increment the stack pointer (8-bit wrapping)
    #[inline]
    pub fn inc_sp(&mut self) {
        self.sp = self.sp.wrapping_add(1);
    }

    /// Values of R0-R7 in index order
    pub fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        let mut regs = [0; NUM_REGISTERS];
        regs[..NUM_REGISTERS - 1].copy_from_slice(&self.general);
        regs[Register::SP.index()] = self.sp;
        regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
