//! Driver de UART 16550
//!
//! Driver genérico sobre o acesso aos registradores: o mesmo código serve
//! COM1 via port I/O (x86) e UARTs 16550 mapeadas em memória.
//!
//! Diferenças em relação a um driver serial de uso geral:
//! - SEM espera infinita: cada byte faz no máximo `UART_SPIN_LIMIT` polls.
//! - SEM lock bloqueante: contenção descarta a mensagem.
//! - Escrita antes de `init()` é descartada (hardware não programado).

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use bitflags::bitflags;
use spin::Mutex;

use crate::config::{MAX_MESSAGE_LEN, UART_BAUD_DIVISOR, UART_SPIN_LIMIT};
use crate::drivers::sink::Sink;

pub mod mmio;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod port;

pub use mmio::MmioRegs;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use port::PortIo;

// =============================================================================
// REGISTRADORES
// =============================================================================

/// Registradores da 16550, com o offset (em registradores) a partir da base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// THR (escrita) / RBR (leitura) / DLL com DLAB=1
    Data = 0,
    /// IER / DLM com DLAB=1
    InterruptEnable = 1,
    /// FCR (escrita) / IIR (leitura)
    FifoControl = 2,
    /// LCR
    LineControl = 3,
    /// MCR
    ModemControl = 4,
    /// LSR
    LineStatus = 5,
}

impl Register {
    /// Offset em número de registradores
    pub const fn offset(self) -> usize {
        self as usize
    }
}

bitflags! {
    /// Line Status Register (LSR).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LineStatus: u8 {
        const DATA_READY = 1 << 0;
        const OVERRUN_ERROR = 1 << 1;
        const PARITY_ERROR = 1 << 2;
        const FRAMING_ERROR = 1 << 3;
        const BREAK = 1 << 4;
        /// Transmit holding register vazio: pode enviar o próximo byte.
        const THR_EMPTY = 1 << 5;
        const TRANSMITTER_IDLE = 1 << 6;
        const FIFO_ERROR = 1 << 7;
    }
}

bitflags! {
    /// Line Control Register (LCR).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LineControl: u8 {
        const WORD_8 = 0b11;
        const TWO_STOP_BITS = 1 << 2;
        const PARITY_ENABLE = 1 << 3;
        /// Divisor Latch Access Bit
        const DLAB = 1 << 7;
    }
}

bitflags! {
    /// FIFO Control Register (FCR).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FifoControl: u8 {
        const ENABLE = 1 << 0;
        const CLEAR_RX = 1 << 1;
        const CLEAR_TX = 1 << 2;
        const TRIGGER_14 = 0b11 << 6;
    }
}

bitflags! {
    /// Modem Control Register (MCR).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ModemControl: u8 {
        const DTR = 1 << 0;
        const RTS = 1 << 1;
        const OUT1 = 1 << 2;
        /// Necessário para IRQs no PC
        const OUT2 = 1 << 3;
        const LOOPBACK = 1 << 4;
    }
}

/// Acesso de baixo nível aos registradores de uma 16550.
pub trait RegisterAccess {
    /// Lê um registrador
    fn read(&self, reg: Register) -> u8;

    /// Escreve um registrador
    fn write(&self, reg: Register, value: u8);
}

// =============================================================================
// DRIVER
// =============================================================================

/// UART 16550 como sink de debug.
pub struct Uart16550<R> {
    regs: Mutex<R>,
    initialized: AtomicBool,
    dropped: AtomicUsize,
}

impl<R: RegisterAccess> Uart16550<R> {
    /// Cria o driver sem tocar no hardware
    pub const fn new(regs: R) -> Self {
        Self {
            regs: Mutex::new(regs),
            initialized: AtomicBool::new(false),
            dropped: AtomicUsize::new(0),
        }
    }

    /// Programa a UART: 8N1, FIFO habilitado, baud `UART_BAUD_DIVISOR`.
    ///
    /// Deve ser chamada uma vez durante o early-boot. Chamadas repetidas
    /// não reprogramam o hardware.
    pub fn init(&self) {
        let regs = self.regs.lock();
        if self.initialized.load(Ordering::Acquire) {
            return;
        }

        // Desabilitar interrupções
        regs.write(Register::InterruptEnable, 0x00);
        // Habilitar DLAB (set baud rate divisor)
        regs.write(Register::LineControl, LineControl::DLAB.bits());
        // Divisor low byte / high byte
        let [lo, hi] = UART_BAUD_DIVISOR.to_le_bytes();
        regs.write(Register::Data, lo);
        regs.write(Register::InterruptEnable, hi);
        // 8 bits, no parity, one stop bit
        regs.write(Register::LineControl, LineControl::WORD_8.bits());
        // Enable FIFO, clear them, with 14-byte threshold
        let fifo = FifoControl::ENABLE
            | FifoControl::CLEAR_RX
            | FifoControl::CLEAR_TX
            | FifoControl::TRIGGER_14;
        regs.write(Register::FifoControl, fifo.bits());
        // IRQs enabled, RTS/DSR set
        let modem = ModemControl::DTR | ModemControl::RTS | ModemControl::OUT2;
        regs.write(Register::ModemControl, modem.bits());

        self.initialized.store(true, Ordering::Release);
    }

    /// Verifica se `init()` já rodou
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Mensagens descartadas (UART não pronta, timeout ou contenção)
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    fn drop_message(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }
}

/// Espera THR vazio (limitado) e envia um byte. `false` em timeout.
fn put<R: RegisterAccess>(regs: &R, byte: u8) -> bool {
    let mut spins = 0usize;
    while !LineStatus::from_bits_truncate(regs.read(Register::LineStatus))
        .contains(LineStatus::THR_EMPTY)
    {
        spins += 1;
        if spins >= UART_SPIN_LIMIT {
            return false;
        }
        core::hint::spin_loop();
    }

    regs.write(Register::Data, byte);
    true
}

impl<R: RegisterAccess + Send> Sink for Uart16550<R> {
    fn write_bytes(&self, bytes: &[u8]) {
        if !self.is_initialized() {
            self.drop_message();
            return;
        }

        let Some(regs) = self.regs.try_lock() else {
            self.drop_message();
            return;
        };

        for &byte in bytes {
            // Terminais seriais esperam CRLF
            if byte == b'\n' && !put(&*regs, b'\r') {
                self.drop_message();
                return;
            }
            if !put(&*regs, byte) {
                self.drop_message();
                return;
            }
        }
    }

    fn max_message_len(&self) -> Option<usize> {
        Some(MAX_MESSAGE_LEN)
    }

    fn name(&self) -> &'static str {
        "uart16550"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DebugEmitter;

    /// Registradores simulados: grava tudo que passa por THR.
    struct FakeRegs {
        lsr: u8,
        log: Mutex<Vec<(Register, u8)>>,
    }

    impl FakeRegs {
        fn ready() -> Self {
            Self {
                lsr: (LineStatus::THR_EMPTY | LineStatus::TRANSMITTER_IDLE).bits(),
                log: Mutex::new(Vec::new()),
            }
        }

        fn stuck() -> Self {
            Self {
                lsr: 0,
                log: Mutex::new(Vec::new()),
            }
        }
    }

    impl RegisterAccess for FakeRegs {
        fn read(&self, reg: Register) -> u8 {
            match reg {
                Register::LineStatus => self.lsr,
                _ => 0,
            }
        }

        fn write(&self, reg: Register, value: u8) {
            self.log.lock().push((reg, value));
        }
    }

    fn transmitted(uart: &Uart16550<FakeRegs>) -> Vec<u8> {
        let regs = uart.regs.lock();
        let log = regs.log.lock();
        let mut dlab = false;
        let mut out = Vec::new();
        for &(reg, value) in log.iter() {
            match reg {
                Register::LineControl => dlab = (value & LineControl::DLAB.bits()) != 0,
                Register::Data if !dlab => out.push(value),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn drops_writes_before_init() {
        let uart = Uart16550::new(FakeRegs::ready());
        uart.write_bytes(b"early");
        assert!(transmitted(&uart).is_empty());
        assert_eq!(uart.dropped(), 1);
    }

    #[test]
    fn init_programs_8n1_with_fifo() {
        let uart = Uart16550::new(FakeRegs::ready());
        uart.init();
        uart.init();

        let regs = uart.regs.lock();
        let log = regs.log.lock();
        assert_eq!(
            log.as_slice(),
            &[
                (Register::InterruptEnable, 0x00),
                (Register::LineControl, 0x80),
                (Register::Data, 0x03),
                (Register::InterruptEnable, 0x00),
                (Register::LineControl, 0x03),
                (Register::FifoControl, 0xC7),
                (Register::ModemControl, 0x0B),
            ]
        );
    }

    #[test]
    fn expands_newline_to_crlf() {
        let uart = Uart16550::new(FakeRegs::ready());
        uart.init();
        DebugEmitter::new(&uart).emit("ok\n");
        assert_eq!(transmitted(&uart), b"ok\r\n");
        assert_eq!(uart.dropped(), 0);
    }

    #[test]
    fn stuck_transmitter_times_out() {
        let uart = Uart16550::new(FakeRegs::stuck());
        uart.init();
        uart.write_bytes(b"never");
        assert!(transmitted(&uart).is_empty());
        assert_eq!(uart.dropped(), 1);
    }

    #[test]
    fn truncates_to_backend_limit() {
        let uart = Uart16550::new(FakeRegs::ready());
        uart.init();
        let long = "x".repeat(MAX_MESSAGE_LEN + 10);
        DebugEmitter::new(&uart).emit(&long);
        assert_eq!(transmitted(&uart).len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn contended_write_is_dropped() {
        let uart = Uart16550::new(FakeRegs::ready());
        uart.init();
        let guard = uart.regs.lock();
        uart.write_bytes(b"busy");
        drop(guard);
        assert_eq!(uart.dropped(), 1);
        assert!(transmitted(&uart).is_empty());
    }
}
