//! DebugEmitter: a operação de emissão.
//!
//! Recebe uma mensagem do chamador, aplica o limite de tamanho e entrega ao
//! sink. Síncrono, sem retorno, sem estado entre chamadas.
//!
//! # Convenções
//!
//! - Mensagens são UTF-8. Bytes vindos de C são repassados como estão.
//! - Nenhum newline é adicionado: quem quer uma linha inclui `\n`.
//! - Truncagem no menor entre o limite do emissor e o do sink, sem partir
//!   um code point UTF-8.
//! - Mensagem vazia não chega ao sink.

use crate::drivers::sink::Sink;

/// Emissor de mensagens de diagnóstico sobre um sink.
#[derive(Debug, Clone, Copy)]
pub struct DebugEmitter<S> {
    sink: S,
    max_len: usize,
}

impl<S: Sink> DebugEmitter<S> {
    /// Cria um emissor sem limite próprio (vale o limite do sink)
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            max_len: usize::MAX,
        }
    }

    /// Cria um emissor que trunca em `max_len` bytes
    pub const fn with_limit(sink: S, max_len: usize) -> Self {
        Self { sink, max_len }
    }

    /// Sink de destino
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Limite efetivo por mensagem
    pub fn limit(&self) -> usize {
        match self.sink.max_message_len() {
            Some(sink_max) => sink_max.min(self.max_len),
            None => self.max_len,
        }
    }

    /// Emite uma mensagem de texto.
    #[inline]
    pub fn emit(&self, message: &str) {
        self.emit_bytes(message.as_bytes());
    }

    /// Emite uma mensagem em bytes (fronteira C).
    pub fn emit_bytes(&self, bytes: &[u8]) {
        let bytes = truncate_utf8(bytes, self.limit());
        if bytes.is_empty() {
            return;
        }
        self.sink.write_bytes(bytes);
    }
}

/// Corta `bytes` em no máximo `limit` bytes, recuando até uma fronteira de
/// caractere UTF-8. Para bytes que não são UTF-8 o corte só recua sobre
/// bytes de continuação (`10xxxxxx`).
pub fn truncate_utf8(bytes: &[u8], limit: usize) -> &[u8] {
    if bytes.len() <= limit {
        return bytes;
    }

    let mut cut = limit;
    while cut > 0 && (bytes[cut] & 0xC0) == 0x80 {
        cut -= 1;
    }
    &bytes[..cut]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{CaptureSink, NullSink};

    struct Limited<'a> {
        inner: &'a CaptureSink<64>,
        max: usize,
    }

    impl Sink for Limited<'_> {
        fn write_bytes(&self, bytes: &[u8]) {
            self.inner.write_bytes(bytes);
        }

        fn max_message_len(&self) -> Option<usize> {
            Some(self.max)
        }

        fn name(&self) -> &'static str {
            "limited"
        }
    }

    fn contents(sink: &CaptureSink<64>) -> Vec<u8> {
        let mut out = [0u8; 64];
        let n = sink.copy_to(&mut out);
        out[..n].to_vec()
    }

    #[test]
    fn truncate_keeps_short_input() {
        assert_eq!(truncate_utf8(b"abc", 3), b"abc");
        assert_eq!(truncate_utf8(b"", 0), b"");
    }

    #[test]
    fn truncate_never_splits_code_point() {
        // "ação" = 61 C3 A7 C3 A3 6F
        let text = "ação".as_bytes();
        assert_eq!(truncate_utf8(text, 2), b"a");
        assert_eq!(truncate_utf8(text, 3), "aç".as_bytes());
        assert_eq!(truncate_utf8(text, 4), "aç".as_bytes());
    }

    #[test]
    fn truncate_tolerates_invalid_utf8() {
        assert_eq!(truncate_utf8(&[0xFF, 0xFE, 0xFD], 2), &[0xFFu8, 0xFE]);
        assert_eq!(truncate_utf8(&[0x80, 0x80, 0x80], 2), b"");
    }

    #[test]
    fn sink_limit_applies() {
        let capture = CaptureSink::<64>::new();
        let emitter = DebugEmitter::new(Limited {
            inner: &capture,
            max: 4,
        });
        emitter.emit("truncated");
        assert_eq!(contents(&capture), b"trun");
    }

    #[test]
    fn emitter_limit_is_stricter_than_sink() {
        let capture = CaptureSink::<64>::new();
        let emitter = DebugEmitter::with_limit(
            Limited {
                inner: &capture,
                max: 8,
            },
            2,
        );
        assert_eq!(emitter.limit(), 2);
        emitter.emit("abcdef");
        assert_eq!(contents(&capture), b"ab");
    }

    #[test]
    fn empty_message_is_not_forwarded() {
        let capture = CaptureSink::<64>::new();
        let emitter = DebugEmitter::new(&capture);
        emitter.emit("");
        emitter.emit_bytes(&[]);
        assert!(capture.is_empty());
        assert_eq!(capture.dropped(), 0);
    }

    #[test]
    fn null_backend_leaves_other_state_untouched() {
        let capture = CaptureSink::<64>::new();
        DebugEmitter::new(&capture).emit("before");

        let null = DebugEmitter::new(NullSink::new());
        for _ in 0..1000 {
            null.emit("into the void");
        }

        assert_eq!(contents(&capture), b"before");
    }

    #[test]
    fn unlimited_sink_passes_long_messages() {
        let capture = CaptureSink::<64>::new();
        let message = "m".repeat(60);
        DebugEmitter::new(&capture).emit(&message);
        assert_eq!(capture.len(), 60);
    }
}
