// =============================================================================
// LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Macros de log por nível, construídos em cima de `emit`.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - Apenas strings e valores numéricos
// - SEM alocação - A linha é montada em um buffer de stack (`LineBuf`)
// - Cada linha é UMA emissão: prefixo, texto, valor e '\n' juntos
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Erros fatais ou críticos
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal de execução
// - DEBUG: Informações de debugging
// - TRACE: Detalhes extremos (cada operação)
//
// FEATURES:
// - no_logs:   Remove 100% dos logs
// - log_error: ERROR, WARN, [OK], [FAIL]
// - log_info:  + INFO
// - log_debug: + DEBUG
// - log_trace: Todos os níveis (padrão)
//
// COMO USAR:
//   dinfo!("(Runtime) Inicializando...");        // Apenas string
//   dinfo!("(Arena) Bytes=", 0x1000);             // String + hex
//   dlog!("Start=", start, " End=", end);         // Sem prefixo/newline
//
// =============================================================================

use crate::config::LOG_LINE_CAPACITY;
use crate::core::emitter::truncate_utf8;
use crate::core::global;

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================
//
// Formato: \x1b[<código>m  onde:
//   1;31 = Bold Red
//   1;33 = Bold Yellow
//   32   = Green
//   36   = Cyan
//   35   = Magenta
//   0    = Reset
//

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";
pub const P_OK: &str = "\x1b[32m[OK]\x1b[0m ";
pub const P_FAIL: &str = "\x1b[1;31m[FAIL]\x1b[0m ";

// =============================================================================
// BUFFER DE LINHA
// =============================================================================

/// Linha de log montada na stack, emitida de uma vez.
///
/// Ao encher, o excesso é descartado sem partir um code point UTF-8.
pub struct LineBuf {
    buf: [u8; LOG_LINE_CAPACITY],
    len: usize,
}

impl LineBuf {
    /// Cria linha vazia
    pub const fn new() -> Self {
        Self {
            buf: [0; LOG_LINE_CAPACITY],
            len: 0,
        }
    }

    /// Anexa texto
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        let room = LOG_LINE_CAPACITY - self.len;
        let bytes = truncate_utf8(s.as_bytes(), room);
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        self
    }

    fn push_byte(&mut self, byte: u8) {
        if self.len < LOG_LINE_CAPACITY {
            self.buf[self.len] = byte;
            self.len += 1;
        }
    }

    /// Anexa um u64 em hexadecimal.
    ///
    /// Formato: 0x0123456789ABCDEF (sempre 18 caracteres)
    pub fn push_hex(&mut self, value: u64) -> &mut Self {
        self.push_byte(b'0');
        self.push_byte(b'x');
        let mut shift = 64;
        while shift > 0 {
            shift -= 4;
            self.push_byte(nibble_to_ascii(((value >> shift) & 0xF) as u8));
        }
        self
    }

    /// Anexa um u64 em decimal.
    pub fn push_dec(&mut self, mut value: u64) -> &mut Self {
        // Buffer para dígitos (max 20 para u64)
        let mut digits = [0u8; 20];
        let mut pos = digits.len();

        if value == 0 {
            self.push_byte(b'0');
            return self;
        }

        while value > 0 {
            pos -= 1;
            digits[pos] = b'0' + (value % 10) as u8;
            value /= 10;
        }

        while pos < digits.len() {
            self.push_byte(digits[pos]);
            pos += 1;
        }
        self
    }

    /// Termina a linha com '\n', abrindo espaço se estiver cheia.
    pub fn terminate(&mut self) -> &mut Self {
        if self.len >= LOG_LINE_CAPACITY {
            self.len = truncate_utf8(&self.buf[..self.len], LOG_LINE_CAPACITY - 1).len();
        }
        self.push_byte(b'\n');
        self
    }

    /// Conteúdo montado até agora
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Número de bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Verifica se a linha está vazia
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Emite a linha no sink ativo
    pub fn emit(&self) {
        global::emit_bytes(self.as_bytes());
    }
}

impl Default for LineBuf {
    fn default() -> Self {
        Self::new()
    }
}

/// Converte nibble (0-15) para caractere ASCII ('0'-'9', 'A'-'F').
#[inline(always)]
const fn nibble_to_ascii(n: u8) -> u8 {
    if n < 10 {
        b'0' + n
    } else {
        b'A' + (n - 10)
    }
}

// =============================================================================
// FUNÇÕES USADAS PELOS MACROS
// =============================================================================

/// Emite `prefixo + msg + '\n'`
pub fn line(prefix: &str, msg: &str) {
    let mut line = LineBuf::new();
    line.push_str(prefix).push_str(msg).terminate();
    line.emit();
}

/// Emite `prefixo + msg + hex(value) + '\n'`
pub fn line_hex(prefix: &str, msg: &str, value: u64) {
    let mut line = LineBuf::new();
    line.push_str(prefix).push_str(msg).push_hex(value).terminate();
    line.emit();
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! derror {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_ERROR, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_ERROR, $msg, $val as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! derror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! dwarn {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_WARN, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_WARN, $msg, $val as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! dwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! dinfo {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_INFO, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_INFO, $msg, $val as u64);
    }};
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! dinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! ddebug {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_DEBUG, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_DEBUG, $msg, $val as u64);
    }};
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! ddebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================

#[cfg(all(not(feature = "no_logs"), feature = "log_trace"))]
#[macro_export]
macro_rules! dtrace {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_TRACE, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::line_hex($crate::core::logging::P_TRACE, $msg, $val as u64);
    }};
}

#[cfg(not(all(not(feature = "no_logs"), feature = "log_trace")))]
#[macro_export]
macro_rules! dtrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS AUXILIARES
// =============================================================================

/// dlog! - Log genérico sem prefixo de nível e sem newline.
///
/// Útil para construir logs com múltiplos valores.
///
/// # Uso
/// ```ignore
/// dlog!("Addr=", addr);                    // String + hex
/// dlog!("Start=", start, " End=", end);    // Múltiplos
/// ```
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! dlog {
    // Apenas string
    ($msg:expr) => {{
        $crate::core::global::emit($msg);
    }};
    // String + hex
    ($msg:expr, $val:expr) => {{
        let mut line = $crate::core::logging::LineBuf::new();
        line.push_str($msg).push_hex($val as u64);
        line.emit();
    }};
    // String + hex + string
    ($msg1:expr, $val:expr, $msg2:expr) => {{
        let mut line = $crate::core::logging::LineBuf::new();
        line.push_str($msg1).push_hex($val as u64).push_str($msg2);
        line.emit();
    }};
    // String + hex + string + hex
    ($msg1:expr, $val1:expr, $msg2:expr, $val2:expr) => {{
        let mut line = $crate::core::logging::LineBuf::new();
        line.push_str($msg1)
            .push_hex($val1 as u64)
            .push_str($msg2)
            .push_hex($val2 as u64);
        line.emit();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! dlog {
    ($($t:tt)*) => {{}};
}

/// dnl! - Emite apenas newline.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! dnl {
    () => {{
        $crate::core::global::emit("\n");
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! dnl {
    () => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// dok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! dok {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_OK, $msg);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! dok {
    ($($t:tt)*) => {{}};
}

/// dfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! dfail {
    ($msg:expr) => {{
        $crate::core::logging::line($crate::core::logging::P_FAIL, $msg);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! dfail {
    ($($t:tt)*) => {{}};
}
