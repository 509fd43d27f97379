//! Debuglog Library (KLib).
//!
//! Utilitários internos que não dependem de backend.

pub mod test_framework;
