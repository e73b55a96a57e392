//! Pure data structures (DTOs) exchanged with the Empleado backend.

pub mod empleado;

pub use empleado::*;
