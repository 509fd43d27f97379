//! Sink do host (simulação em PC).
//!
//! Escreve em stdout ou stderr do processo. Erros de I/O (pipe fechado,
//! stream redirecionado para lugar nenhum) são ignorados.

use std::io::Write;

use crate::drivers::sink::Sink;

/// Stream do host usado como destino
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStream {
    Stdout,
    Stderr,
}

/// Sink que escreve no console do host
#[derive(Debug, Clone, Copy)]
pub struct HostSink {
    stream: HostStream,
}

impl HostSink {
    /// Sink em stdout
    pub const fn stdout() -> Self {
        Self {
            stream: HostStream::Stdout,
        }
    }

    /// Sink em stderr (padrão da plataforma host)
    pub const fn stderr() -> Self {
        Self {
            stream: HostStream::Stderr,
        }
    }

    /// Stream de destino
    pub const fn stream(&self) -> HostStream {
        self.stream
    }
}

impl Sink for HostSink {
    fn write_bytes(&self, bytes: &[u8]) {
        match self.stream {
            HostStream::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = out.write_all(bytes);
                let _ = out.flush();
            }
            HostStream::Stderr => {
                let mut err = std::io::stderr().lock();
                let _ = err.write_all(bytes);
            }
        }
    }

    fn name(&self) -> &'static str {
        match self.stream {
            HostStream::Stdout => "host-stdout",
            HostStream::Stderr => "host-stderr",
        }
    }
}
