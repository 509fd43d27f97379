//! Capture Sink
//!
//! Ring buffer em memória que guarda tudo que é emitido.
//! Serve como dublê de teste no host e como buffer post-mortem no alvo
//! (inspecionável via debugger depois de um crash).

use core::sync::atomic::{AtomicUsize, Ordering};

use spin::Mutex;

use crate::drivers::sink::Sink;

/// Buffer circular de bytes. Cheio, sobrescreve os mais antigos.
struct Ring<const N: usize> {
    buffer: [u8; N],
    read_pos: usize,
    count: usize,
    overwritten: usize,
}

impl<const N: usize> Ring<N> {
    const fn new() -> Self {
        Self {
            buffer: [0; N],
            read_pos: 0,
            count: 0,
            overwritten: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        if N == 0 {
            self.overwritten += 1;
            return;
        }

        let write_pos = (self.read_pos + self.count) % N;
        self.buffer[write_pos] = byte;

        if self.count < N {
            self.count += 1;
        } else {
            // Buffer cheio: o byte mais antigo foi sobrescrito
            self.read_pos = (self.read_pos + 1) % N;
            self.overwritten += 1;
        }
    }

    fn copy_to(&self, out: &mut [u8]) -> usize {
        let n = self.count.min(out.len());
        let mut i = 0;
        while i < n {
            out[i] = self.byte_at(i);
            i += 1;
        }
        n
    }

    fn byte_at(&self, i: usize) -> u8 {
        self.buffer[(self.read_pos + i) % N]
    }

    fn contains(&self, needle: &[u8]) -> bool {
        if needle.is_empty() {
            return true;
        }
        if needle.len() > self.count {
            return false;
        }

        (0..=self.count - needle.len()).any(|start| {
            needle
                .iter()
                .enumerate()
                .all(|(j, &byte)| self.byte_at(start + j) == byte)
        })
    }

    fn clear(&mut self) {
        self.read_pos = 0;
        self.count = 0;
    }
}

/// Sink que acumula as mensagens em um ring buffer de `N` bytes.
///
/// A escrita só usa `try_lock`: se outro contexto estiver no meio de uma
/// escrita (ex: IRQ interrompendo o main loop), a mensagem é descartada e
/// contada em `dropped()`.
pub struct CaptureSink<const N: usize> {
    ring: Mutex<Ring<N>>,
    dropped: AtomicUsize,
}

impl<const N: usize> CaptureSink<N> {
    /// Cria um sink vazio. `const` para poder viver em um `static`.
    pub const fn new() -> Self {
        Self {
            ring: Mutex::new(Ring::new()),
            dropped: AtomicUsize::new(0),
        }
    }

    /// Capacidade do buffer em bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Copia o conteúdo (do mais antigo para o mais novo) para `out`.
    ///
    /// Retorna quantos bytes foram copiados. Se `out` for menor que o
    /// conteúdo, apenas os bytes mais antigos cabem.
    pub fn copy_to(&self, out: &mut [u8]) -> usize {
        self.ring.lock().copy_to(out)
    }

    /// Número de bytes guardados
    pub fn len(&self) -> usize {
        self.ring.lock().count
    }

    /// Verifica se o buffer está vazio
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Verifica se `needle` aparece no conteúdo guardado
    pub fn contains(&self, needle: &[u8]) -> bool {
        self.ring.lock().contains(needle)
    }

    /// Descarta o conteúdo guardado (contadores são mantidos)
    pub fn clear(&self) {
        self.ring.lock().clear();
    }

    /// Mensagens descartadas por contenção
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Bytes antigos perdidos por estouro de capacidade
    pub fn overwritten(&self) -> usize {
        self.ring.lock().overwritten
    }
}

impl<const N: usize> Default for CaptureSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Sink for CaptureSink<N> {
    fn write_bytes(&self, bytes: &[u8]) {
        let Some(mut ring) = self.ring.try_lock() else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        };

        for &byte in bytes {
            ring.push(byte);
        }
    }

    fn name(&self) -> &'static str {
        "capture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DebugEmitter;

    fn contents<const N: usize>(sink: &CaptureSink<N>) -> Vec<u8> {
        let mut out = vec![0u8; N];
        let n = sink.copy_to(&mut out);
        out.truncate(n);
        out
    }

    #[test]
    fn stores_message_without_termination() {
        let sink = CaptureSink::<64>::new();
        DebugEmitter::new(&sink).emit("boot complete");
        assert_eq!(contents(&sink), b"boot complete");
    }

    #[test]
    fn preserves_order_of_sequential_emissions() {
        let sink = CaptureSink::<64>::new();
        let emitter = DebugEmitter::new(&sink);
        emitter.emit("A");
        emitter.emit("B");
        assert_eq!(contents(&sink), b"AB");
    }

    #[test]
    fn empty_message_leaves_buffer_unchanged() {
        let sink = CaptureSink::<16>::new();
        let emitter = DebugEmitter::new(&sink);
        emitter.emit("x");
        emitter.emit("");
        assert_eq!(contents(&sink), b"x");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn overwrites_oldest_bytes_when_full() {
        let sink = CaptureSink::<4>::new();
        sink.write_bytes(b"abcdef");
        assert_eq!(contents(&sink), b"cdef");
        assert_eq!(sink.overwritten(), 2);
        assert_eq!(sink.capacity(), 4);
    }

    #[test]
    fn contended_write_is_dropped_not_blocked() {
        let sink = CaptureSink::<16>::new();
        let guard = sink.ring.lock();
        sink.write_bytes(b"lost");
        drop(guard);

        assert_eq!(sink.dropped(), 1);
        assert!(sink.is_empty());

        sink.write_bytes(b"kept");
        assert_eq!(contents(&sink), b"kept");
    }

    #[test]
    fn clear_empties_buffer() {
        let sink = CaptureSink::<8>::new();
        sink.write_bytes(b"abc");
        sink.clear();
        assert!(sink.is_empty());
        sink.write_bytes(b"z");
        assert_eq!(contents(&sink), b"z");
    }

    #[test]
    fn zero_capacity_discards_everything() {
        let sink = CaptureSink::<0>::new();
        sink.write_bytes(b"abc");
        assert!(sink.is_empty());
        assert_eq!(sink.overwritten(), 3);
    }

    #[test]
    fn contains_finds_message_across_wraparound() {
        let sink = CaptureSink::<8>::new();
        sink.write_bytes(b"xxxxxx");
        sink.write_bytes(b"mark");
        // Ring: "xxxxmark" com início no meio do buffer
        assert!(sink.contains(b"mark"));
        assert!(sink.contains(b"xmar"));
        assert!(!sink.contains(b"markx"));
        assert!(!sink.contains(b"0123456789"));
        assert!(CaptureSink::<0>::new().contains(b""));
        assert!(!CaptureSink::<0>::new().contains(b"a"));
    }

    #[test]
    fn short_output_gets_oldest_bytes() {
        let sink = CaptureSink::<8>::new();
        sink.write_bytes(b"hello");
        let mut out = [0u8; 3];
        assert_eq!(sink.copy_to(&mut out), 3);
        assert_eq!(&out, b"hel");
    }
}
