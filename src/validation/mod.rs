//! Business rules a draft [`Empleado`] must satisfy before it is submitted.
//!
//! Both the create and the edit workflow go through [`validate`]. Rules are
//! checked in order and only the first failure is reported:
//!
//! 1. [`ValidationError::MissingField`]
//! 2. [`ValidationError::NameContainsDigit`]
//! 3. [`ValidationError::InvalidEmailFormat`]

pub mod error;

pub use error::*;

use crate::model::Empleado;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Checks a record against the submission rules.
pub fn validate(empleado: &Empleado) -> Result<(), ValidationError> {
    // NaN and infinite salaries count as missing.
    let sueldo_ok = empleado.sueldo.is_finite() && empleado.sueldo > 0.0;
    if empleado.nombre.is_empty() || empleado.correo.is_empty() || !sueldo_ok {
        return Err(ValidationError::MissingField);
    }

    if empleado.nombre.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NameContainsDigit);
    }

    if !is_valid_email(&empleado.correo) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(())
}

/// Whether `correo` looks like `local@domain.tld`.
pub fn is_valid_email(correo: &str) -> bool {
    EMAIL_PATTERN.is_match(correo)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(nombre: &str, correo: &str, sueldo: f64) -> Empleado {
        Empleado::new(nombre, correo, sueldo)
    }

    #[test]
    fn test_valid_record_passes() {
        assert_eq!(validate(&draft("Ana", "a@b.com", 1000.0)), Ok(()));
        assert_eq!(
            validate(&draft("José Pérez", "jose.perez@empresa.com.mx", 0.01)),
            Ok(())
        );
    }

    #[test]
    fn test_missing_fields() {
        let missing = Err(ValidationError::MissingField);
        assert_eq!(validate(&draft("", "a@b.com", 1000.0)), missing);
        assert_eq!(validate(&draft("Ana", "", 1000.0)), missing);
        assert_eq!(validate(&draft("Ana", "a@b.com", 0.0)), missing);
        assert_eq!(validate(&draft("Ana", "a@b.com", -5.0)), missing);
        assert_eq!(validate(&draft("Ana", "a@b.com", f64::NAN)), missing);
        assert_eq!(validate(&Empleado::default()), missing);
    }

    #[test]
    fn test_infinite_salary_is_rejected() {
        let missing = Err(ValidationError::MissingField);
        assert_eq!(validate(&draft("Ana", "a@b.com", f64::INFINITY)), missing);
        assert_eq!(validate(&draft("Ana", "a@b.com", f64::NEG_INFINITY)), missing);
    }

    #[test]
    fn test_missing_field_wins_over_later_rules() {
        // Digit in name and bad email, but salary is zero: first rule reported.
        assert_eq!(
            validate(&draft("Ana3", "nope", 0.0)),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn test_name_with_digit() {
        let digit = Err(ValidationError::NameContainsDigit);
        assert_eq!(validate(&draft("Ana3", "a@b.com", 1000.0)), digit);
        assert_eq!(validate(&draft("4na", "a@b.com", 1.0)), digit);
        // Checked before the email rule.
        assert_eq!(validate(&draft("Ana3", "a-b.com", 1000.0)), digit);
    }

    #[test]
    fn test_invalid_email() {
        let rejected = [
            "a-b.com", "a@b", "a@.com", "@b.com", "a b@c.com", "a@b c.com", "a@b.c@d", "a@b.com ",
        ];
        for correo in rejected {
            assert_eq!(
                validate(&draft("Ana", correo, 1000.0)),
                Err(ValidationError::InvalidEmailFormat),
                "expected {correo:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_email_shapes_accepted() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
        assert!(is_valid_email("a@b.c.d"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "Todos los campos son obligatorios."
        );
        assert_eq!(
            ValidationError::NameContainsDigit.to_string(),
            "El nombre no puede contener números."
        );
    }
}
