//! Sink nulo - descarta tudo que é escrito
//!
//! Backend de plataformas sem dispositivo de saída.

use crate::drivers::sink::Sink;

/// Sink que descarta todas as mensagens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    /// Cria um novo sink nulo
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for NullSink {
    fn write_bytes(&self, _bytes: &[u8]) {
        // Descarta tudo
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
