//! Tipos de Erro do Debuglog
//!
//! A emissão em si não tem erros: falhas do sink são engolidas dentro do
//! backend. Só as operações de configuração (instalar o sink) retornam erro.

/// Erros de configuração do dispatch global
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallError {
    /// Já existe um sink ativo (instalado ou selado); ele não é trocado
    AlreadyInstalled,
}

impl InstallError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyInstalled => "Sink de debug já instalado",
        }
    }
}

impl core::fmt::Display for InstallError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tipo Result específico para a configuração do dispatch
pub type InstallResult<T> = Result<T, InstallError>;
