//! Debuglog: Hook de Debug Log da Plataforma.
//!
//! Ponto central de exportação do crate.
//!
//! Uma única operação: `emit(message)` entrega texto de diagnóstico ao sink
//! que a plataforma oferece (UART, semihosting, console do host, ring buffer
//! ou nada). Nunca retorna erro e nunca bloqueia indefinidamente, para poder
//! ser usada no early-boot, em handlers de interrupção e depois de uma falha.
//!
//! ```text
//! caller ──► emit(msg) ──► sink ativo ──► DebugEmitter ──► Sink::write_bytes
//!                            │               (truncagem)        │
//!                 install() uma vez                        hardware/buffer
//!                 ou platform::default_sink()
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

// --- Configuração e seleção de backend (tempo de build) ---
pub mod config;
pub mod platform;

// --- Drivers de Saída (Sinks) ---
pub mod drivers;

// --- Lógica Central (Emissor, Dispatch, ABI C, Logs) ---
pub mod core;
pub mod klib;


// Re-exportar a superfície pública para acesso fácil
pub use crate::core::emitter::DebugEmitter;
pub use crate::core::error::InstallError;
pub use crate::core::global::{active_sink_name, emit, emit_bytes, install, seal};
pub use crate::drivers::sink::Sink;
pub use crate::platform::init;
