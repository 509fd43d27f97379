//! Acesso à 16550 mapeada em memória.
//!
//! Cada registrador é um byte em `base + offset * stride`. O `stride` cobre
//! SoCs que espaçam os registradores em 4 bytes (reg-shift = 2).

use core::ptr::NonNull;

use volatile::VolatilePtr;

use super::{Register, RegisterAccess};

/// Registradores de uma UART MMIO.
#[derive(Debug)]
pub struct MmioRegs {
    base: NonNull<u8>,
    stride: usize,
}

// SAFETY: O ponteiro aponta para MMIO fixo (ou memória estática nos testes).
// O acesso concorrente é serializado pelo lock do driver.
unsafe impl Send for MmioRegs {}
unsafe impl Sync for MmioRegs {}

impl MmioRegs {
    /// Cria o acesso aos registradores.
    ///
    /// # Safety
    ///
    /// `base` não pode ser nulo e `base + 5 * stride` precisa ser um
    /// endereço válido para leitura/escrita volátil durante toda a vida
    /// do valor.
    pub const unsafe fn new(base: *mut u8, stride: usize) -> Self {
        Self {
            base: NonNull::new_unchecked(base),
            stride,
        }
    }

    fn reg(&self, reg: Register) -> VolatilePtr<'_, u8> {
        // SAFETY: garantido pelo contrato de `new`
        unsafe {
            let ptr = self.base.as_ptr().add(reg.offset() * self.stride);
            VolatilePtr::new(NonNull::new_unchecked(ptr))
        }
    }
}

impl RegisterAccess for MmioRegs {
    #[inline]
    fn read(&self, reg: Register) -> u8 {
        self.reg(reg).read()
    }

    #[inline]
    fn write(&self, reg: Register, value: u8) {
        self.reg(reg).write(value);
    }
}
