//! Handle aberto sob demanda.
//!
//! Abre na primeira escrita e lembra o resultado: um handle que falhou ao
//! abrir não é tentado de novo.

/// Estado de um handle de saída aberto na primeira utilização.
pub enum LazyHandle<T> {
    /// Ainda não tentou abrir
    Unopened,
    /// Aberto e pronto para escrita
    Open(T),
    /// A abertura falhou; as escritas são descartadas
    Unavailable,
}

impl<T> LazyHandle<T> {
    /// Cria o estado inicial, sem abrir nada
    pub const fn new() -> Self {
        Self::Unopened
    }

    /// Handle aberto, chamando `open` apenas na primeira vez.
    pub fn get_or_open(&mut self, open: impl FnOnce() -> Option<T>) -> Option<&mut T> {
        if let Self::Unopened = self {
            *self = match open() {
                Some(handle) => Self::Open(handle),
                None => Self::Unavailable,
            };
        }

        match self {
            Self::Open(handle) => Some(handle),
            _ => None,
        }
    }

    /// Verifica se a abertura já falhou
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl<T> Default for LazyHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}
