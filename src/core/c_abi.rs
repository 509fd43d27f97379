//! Superfície C do hook de debug log.
//!
//! Exporta `void DebugLog(const char* s)`, o símbolo que o runtime de
//! inferência declara e espera que a plataforma defina. Todas as chamadas
//! passam pelo mesmo dispatch de `emit`.

use core::ffi::{c_char, CStr};

use crate::core::global;

/// Emite a string C terminada em NUL apontada por `s`.
///
/// Ponteiro nulo é ignorado. Bytes que não são UTF-8 são repassados como
/// estão.
///
/// # Safety
///
/// `s` precisa ser nulo ou apontar para uma string terminada em NUL válida
/// durante toda a chamada.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn DebugLog(s: *const c_char) {
    if s.is_null() {
        return;
    }

    // SAFETY: garantido pelo chamador (string C válida e terminada)
    let message = unsafe { CStr::from_ptr(s) };
    global::emit_bytes(message.to_bytes());
}
