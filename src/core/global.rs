//! Dispatch global da emissão.
//!
//! O sink ativo é fixado UMA vez: por `install()` durante o boot ou por
//! `seal()` com o padrão da plataforma. Depois disso nunca muda.
//!
//! Antes da fixação (ou enquanto uma instalação está em andamento em outro
//! contexto) `emit` usa `platform::default_sink()` diretamente. A leitura do
//! sink ativo nunca espera: `Once::get` não gira.

use spin::Once;

use crate::core::emitter::DebugEmitter;
use crate::core::error::{InstallError, InstallResult};
use crate::drivers::sink::Sink;
use crate::platform;

/// Sink ativo do processo/imagem
static ACTIVE: Once<&'static dyn Sink> = Once::new();

/// Sink para onde a emissão vai agora.
#[inline]
fn active() -> &'static dyn Sink {
    match ACTIVE.get() {
        Some(sink) => *sink,
        None => platform::default_sink(),
    }
}

/// Fixa `sink` como destino de todas as emissões.
///
/// Deve ser chamada no startup, antes de qualquer `seal()`. Uma segunda
/// chamada falha com `InstallError::AlreadyInstalled` e não troca o sink.
pub fn install(sink: &'static dyn Sink) -> InstallResult<()> {
    let mut installed = false;
    ACTIVE.call_once(|| {
        installed = true;
        sink
    });

    if !installed {
        crate::dwarn!("(debuglog) install recusado: sink ja fixado");
        return Err(InstallError::AlreadyInstalled);
    }

    crate::dtrace!("(debuglog) sink instalado");
    Ok(())
}

/// Fixa o backend da plataforma como sink ativo.
///
/// Depois disso `install()` sempre falha. Idempotente.
pub fn seal() {
    ACTIVE.call_once(platform::default_sink);
}

/// Nome do backend que recebe as emissões agora.
pub fn active_sink_name() -> &'static str {
    active().name()
}

/// Verifica se as emissões vão para o backend da plataforma.
pub fn platform_sink_active() -> bool {
    ::core::ptr::addr_eq(
        active() as *const dyn Sink,
        platform::default_sink() as *const dyn Sink,
    )
}

/// Emite uma mensagem de diagnóstico no sink ativo.
///
/// Nunca falha, nunca bloqueia indefinidamente, nunca suspende. Pode ser
/// chamada durante o early-boot, de handlers de interrupção e depois de
/// falhas.
#[inline]
pub fn emit(message: &str) {
    emit_bytes(message.as_bytes());
}

/// Emite uma mensagem em bytes no sink ativo.
pub fn emit_bytes(bytes: &[u8]) {
    DebugEmitter::new(active()).emit_bytes(bytes);
}
