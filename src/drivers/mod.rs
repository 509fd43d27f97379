//! # Drivers de Saída de Diagnóstico
//!
//! Cada driver é um `Sink`: um destino para o texto emitido.
//!
//! | Driver        | Arquivo          | Destino                              |
//! |---------------|------------------|--------------------------------------|
//! | Null          | `null.rs`        | Nenhum (descarta)                    |
//! | Capture       | `capture.rs`     | Ring buffer em memória               |
//! | UART 16550    | `uart/`          | Serial (port I/O x86 ou MMIO)        |
//! | Host          | `host.rs`        | stdout/stderr (requer `std`)         |
//! | Semihosting   | `semihosting.rs` | stdout do debugger (ARM)             |
//!
//! Qual deles é o padrão da plataforma é decidido em `platform.rs`.

pub mod capture;
pub mod lazy;
pub mod null;
pub mod sink;
pub mod uart;

#[cfg(feature = "std")]
pub mod host;

#[cfg(all(feature = "backend_semihosting", target_arch = "arm"))]
pub mod semihosting;

pub use capture::CaptureSink;
pub use null::NullSink;
pub use sink::Sink;
pub use uart::Uart16550;

#[cfg(feature = "std")]
pub use host::{HostSink, HostStream};

#[cfg(all(feature = "backend_semihosting", target_arch = "arm"))]
pub use semihosting::SemihostingSink;
