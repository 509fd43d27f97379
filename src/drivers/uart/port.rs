//! Acesso à 16550 via port I/O (x86 legado).
//!
//! Usa `core::arch::asm!` para emitir `in`/`out`. COM1 fica em 0x3F8.

use core::arch::asm;

use super::{Register, RegisterAccess};

/// Registradores de uma UART em portas I/O consecutivas.
#[derive(Debug, Clone, Copy)]
pub struct PortIo {
    base: u16,
}

impl PortIo {
    /// Cria o acesso a partir da porta base
    pub const fn new(base: u16) -> Self {
        Self { base }
    }

    /// Porta base
    pub const fn base(&self) -> u16 {
        self.base
    }
}

impl RegisterAccess for PortIo {
    #[inline]
    fn read(&self, reg: Register) -> u8 {
        inb(self.base + reg.offset() as u16)
    }

    #[inline]
    fn write(&self, reg: Register, value: u8) {
        outb(self.base + reg.offset() as u16, value);
    }
}

/// Lê um byte de uma porta IO
#[inline]
fn inb(port: u16) -> u8 {
    let value: u8;
    // SAFETY: IO ports são operações privilegiadas mas seguras do ponto de vista de memória
    unsafe {
        asm!(
            "in al, dx",
            out("al") value,
            in("dx") port,
            options(nomem, nostack, preserves_flags)
        );
    }
    value
}

/// Escreve um byte em uma porta IO
#[inline]
fn outb(port: u16, value: u8) {
    // SAFETY: IO ports são operações privilegiadas mas seguras do ponto de vista de memória
    unsafe {
        asm!(
            "out dx, al",
            in("dx") port,
            in("al") value,
            options(nomem, nostack, preserves_flags)
        );
    }
}
