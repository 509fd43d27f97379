//! Seleção do backend em tempo de build.
//!
//! Exatamente UMA feature `backend_*` por build. Nenhuma ou mais de uma é
//! erro de compilação, não de runtime.
//!
//! | Feature               | Backend                  | `init()`            |
//! |-----------------------|--------------------------|---------------------|
//! | `backend_null`        | `NullSink`               | no-op               |
//! | `backend_host`        | `HostSink` (stderr)      | no-op               |
//! | `backend_capture`     | `CaptureSink`            | no-op               |
//! | `backend_uart16550`   | `Uart16550<PortIo>` COM1 | programa a UART     |
//! | `backend_mmio_uart`   | `Uart16550<MmioRegs>`    | programa a UART     |
//! | `backend_semihosting` | `SemihostingSink`        | no-op               |

use crate::drivers::sink::Sink;

const SELECTED_BACKENDS: usize = cfg!(feature = "backend_null") as usize
    + cfg!(feature = "backend_host") as usize
    + cfg!(feature = "backend_capture") as usize
    + cfg!(feature = "backend_uart16550") as usize
    + cfg!(feature = "backend_mmio_uart") as usize
    + cfg!(feature = "backend_semihosting") as usize;

const _: () = assert!(
    SELECTED_BACKENDS == 1,
    "debuglog: habilite exatamente uma feature backend_* (null, host, capture, uart16550, mmio_uart, semihosting)"
);

#[cfg(all(
    feature = "backend_uart16550",
    not(any(target_arch = "x86", target_arch = "x86_64"))
))]
compile_error!("debuglog: backend_uart16550 requer x86/x86_64 (port I/O)");

#[cfg(all(feature = "backend_semihosting", not(target_arch = "arm")))]
compile_error!("debuglog: backend_semihosting requer ARM");

// =============================================================================
// BACKEND: NULL
// =============================================================================

#[cfg(feature = "backend_null")]
mod selected {
    use crate::drivers::NullSink;

    pub static SINK: NullSink = NullSink::new();

    pub fn init() {}

    pub fn verify_delivery(_marker: &str) -> Option<bool> {
        None
    }
}

// =============================================================================
// BACKEND: HOST
// =============================================================================

#[cfg(feature = "backend_host")]
mod selected {
    use crate::drivers::HostSink;

    pub static SINK: HostSink = HostSink::stderr();

    pub fn init() {}

    // O que vai para o stderr não pode ser lido de volta
    pub fn verify_delivery(_marker: &str) -> Option<bool> {
        None
    }
}

// =============================================================================
// BACKEND: CAPTURE
// =============================================================================

#[cfg(feature = "backend_capture")]
mod selected {
    use crate::config::CAPTURE_CAPACITY;
    use crate::drivers::CaptureSink;

    pub static SINK: CaptureSink<CAPTURE_CAPACITY> = CaptureSink::new();

    pub fn init() {}

    pub fn verify_delivery(marker: &str) -> Option<bool> {
        // Contenção descarta a escrita; algumas tentativas antes de reprovar
        for _ in 0..3 {
            crate::core::global::emit(marker);
            if SINK.contains(marker.as_bytes()) {
                return Some(true);
            }
        }
        Some(false)
    }
}

/// Buffer do backend de captura (para leitura via debugger ou pelo firmware)
#[cfg(feature = "backend_capture")]
pub fn capture() -> &'static crate::drivers::CaptureSink<{ crate::config::CAPTURE_CAPACITY }> {
    &selected::SINK
}

// =============================================================================
// BACKEND: UART 16550 (port I/O)
// =============================================================================

#[cfg(all(
    feature = "backend_uart16550",
    any(target_arch = "x86", target_arch = "x86_64")
))]
mod selected {
    use crate::config::COM1_PORT;
    use crate::drivers::uart::{PortIo, Uart16550};

    pub static SINK: Uart16550<PortIo> = Uart16550::new(PortIo::new(COM1_PORT));

    pub fn init() {
        SINK.init();
    }

    pub fn verify_delivery(marker: &str) -> Option<bool> {
        let before = SINK.dropped();
        crate::core::global::emit(marker);
        Some(SINK.is_initialized() && SINK.dropped() == before)
    }
}

// =============================================================================
// BACKEND: UART 16550 (MMIO)
// =============================================================================

#[cfg(feature = "backend_mmio_uart")]
mod selected {
    use crate::config::{MMIO_UART_BASE, MMIO_UART_STRIDE};
    use crate::drivers::uart::{MmioRegs, Uart16550};

    // SAFETY: endereço fixo da UART no mapa de memória do alvo
    pub static SINK: Uart16550<MmioRegs> = Uart16550::new(unsafe {
        MmioRegs::new(MMIO_UART_BASE as *mut u8, MMIO_UART_STRIDE)
    });

    pub fn init() {
        SINK.init();
    }

    pub fn verify_delivery(marker: &str) -> Option<bool> {
        let before = SINK.dropped();
        crate::core::global::emit(marker);
        Some(SINK.is_initialized() && SINK.dropped() == before)
    }
}

// =============================================================================
// BACKEND: SEMIHOSTING
// =============================================================================

#[cfg(all(feature = "backend_semihosting", target_arch = "arm"))]
mod selected {
    use crate::drivers::SemihostingSink;

    pub static SINK: SemihostingSink = SemihostingSink::new();

    pub fn init() {}

    pub fn verify_delivery(marker: &str) -> Option<bool> {
        let before = SINK.dropped();
        crate::core::global::emit(marker);
        Some(SINK.dropped() == before)
    }
}

// =============================================================================
// INTERFACE
// =============================================================================

/// Backend escolhido pelas features deste build.
#[inline]
pub fn default_sink() -> &'static dyn Sink {
    &selected::SINK
}

/// Inicializa o hardware do backend, se ele precisar.
///
/// Deve ser chamada uma vez no early-boot. Antes dela, backends de hardware
/// descartam as mensagens.
pub fn init() {
    selected::init();
    crate::dtrace!("(debuglog) backend da plataforma pronto");
}

/// Emite `marker` pelo dispatch global e verifica se o backend da plataforma
/// o recebeu.
///
/// `None` quando a entrega não é observável: backend null ou host, ou um
/// sink instalado por `install()` no lugar do backend da plataforma.
pub fn verify_delivery(marker: &str) -> Option<bool> {
    if !crate::core::global::platform_sink_active() {
        return None;
    }
    selected::verify_delivery(marker)
}
