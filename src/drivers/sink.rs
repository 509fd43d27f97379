//! Capability de saída de diagnóstico.
//!
//! Todo backend implementa `Sink`. O contrato é propositalmente mínimo:
//! aceitar bytes, nunca falhar, nunca bloquear indefinidamente.

/// Destino de texto de diagnóstico.
///
/// # Contrato
///
/// - `write_bytes` é best-effort. Sink ausente, cheio ou não inicializado
///   descarta a mensagem silenciosamente.
/// - Nenhuma espera sem limite: locks só via `try_lock`, hardware só com
///   polling limitado.
/// - Pode ser chamado de qualquer contexto (main loop, IRQ, fault handler).
pub trait Sink: Sync {
    /// Entrega os bytes ao destino.
    fn write_bytes(&self, bytes: &[u8]);

    /// Limite de tamanho por mensagem, se o backend tiver um.
    fn max_message_len(&self) -> Option<usize> {
        None
    }

    /// Identificador do backend (para diagnóstico).
    fn name(&self) -> &'static str;
}

impl<T: Sink + ?Sized> Sink for &T {
    #[inline]
    fn write_bytes(&self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }

    #[inline]
    fn max_message_len(&self) -> Option<usize> {
        (**self).max_message_len()
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
