//! Error types for record validation.

use thiserror::Error;

/// The first business rule a draft record violates.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Name or email is empty, or salary is not positive.
    #[error("Todos los campos son obligatorios.")]
    MissingField,

    /// The name contains a digit.
    #[error("El nombre no puede contener números.")]
    NameContainsDigit,

    /// The email is not shaped like `local@domain.tld`.
    #[error("Por favor ingrese un correo electrónico válido.")]
    InvalidEmailFormat,
}
