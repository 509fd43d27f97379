//! Sink de semihosting ARM.
//!
//! Envia as mensagens ao stdout do debugger/QEMU via semihosting.
//! O handle é aberto sob demanda na primeira escrita. Se o host recusar a
//! abertura, a falha é lembrada e as mensagens seguintes são descartadas.
//!
//! # Requisito
//!
//! Exige um debugger (ou QEMU com `-semihosting`) conectado. Sem ele a
//! instrução `BKPT 0xAB` de qualquer chamada de semihosting gera HardFault
//! no Cortex-M. Não habilitar `backend_semihosting` em imagens que rodam
//! sem debugger: usar `backend_capture` ou `backend_null`.

use core::sync::atomic::{AtomicUsize, Ordering};

use cortex_m_semihosting::hio::{self, HostStream};
use spin::Mutex;

use crate::config::MAX_MESSAGE_LEN;
use crate::drivers::lazy::LazyHandle;
use crate::drivers::sink::Sink;

/// Sink em cima do stdout de semihosting
pub struct SemihostingSink {
    stdout: Mutex<LazyHandle<HostStream>>,
    dropped: AtomicUsize,
}

impl SemihostingSink {
    /// Cria o sink sem abrir o handle
    pub const fn new() -> Self {
        Self {
            stdout: Mutex::new(LazyHandle::new()),
            dropped: AtomicUsize::new(0),
        }
    }

    /// Mensagens descartadas
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for SemihostingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for SemihostingSink {
    fn write_bytes(&self, bytes: &[u8]) {
        let Some(mut handle) = self.stdout.try_lock() else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        };

        // Abre uma única vez (reabrir truncaria a saída em alguns hosts)
        match handle.get_or_open(|| hio::hstdout().ok()) {
            Some(stdout) => {
                if stdout.write_all(bytes).is_err() {
                    self.dropped.fetch_add(1, Ordering::Relaxed);
                }
            }
            None => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn max_message_len(&self) -> Option<usize> {
        Some(MAX_MESSAGE_LEN)
    }

    fn name(&self) -> &'static str {
        "semihosting"
    }
}
