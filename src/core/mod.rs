//! Core Module
//!
//! A operação de emissão, o dispatch global que escolhe o sink, a superfície
//! C e os macros de log construídos em cima deles.

pub mod emitter;
pub mod error;
pub mod global;
pub mod logging;

#[cfg(feature = "ffi")]
pub mod c_abi;
