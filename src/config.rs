//! # Configuração do Debuglog
//!
//! Define constantes de tempo de build dos backends e do sistema de logs.
//! Não há configuração em runtime: o que muda por alvo muda por feature.

// =============================================================================
// LIMITES DE MENSAGEM
// =============================================================================

/// Tamanho máximo de uma mensagem em backends restritos (serial, semihosting).
///
/// Mensagens maiores são truncadas sem partir um code point UTF-8.
/// O emissor em si não impõe limite; quem declara é o sink.
pub const MAX_MESSAGE_LEN: usize = 256;

/// Capacidade do buffer de linha usado pelos macros de log.
pub const LOG_LINE_CAPACITY: usize = MAX_MESSAGE_LEN;

// =============================================================================
// UART 16550
// =============================================================================

/// Porta base da COM1 (x86 port I/O)
pub const COM1_PORT: u16 = 0x3F8;

/// Divisor de baud rate (115200 / 3 = 38400 baud)
pub const UART_BAUD_DIVISOR: u16 = 3;

/// Número máximo de polls do LSR esperando THR vazio, por byte.
///
/// Ao estourar, o resto da mensagem é descartado. A emissão nunca trava
/// esperando uma UART desconectada ou travada.
pub const UART_SPIN_LIMIT: usize = 100_000;

/// Endereço base da UART MMIO (16550 do QEMU `virt` RISC-V)
pub const MMIO_UART_BASE: usize = 0x1000_0000;

/// Distância em bytes entre registradores consecutivos da UART MMIO
pub const MMIO_UART_STRIDE: usize = 1;

// =============================================================================
// CAPTURE
// =============================================================================

/// Capacidade do ring buffer do backend `backend_capture` (4 KiB)
pub const CAPTURE_CAPACITY: usize = 4096;
