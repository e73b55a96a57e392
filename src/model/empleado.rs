use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumString};

/// Backend-assigned identifier of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmpleadoId(pub u32);

impl fmt::Display for EmpleadoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmpleadoId {
    fn from(id: u32) -> Self {
        EmpleadoId(id)
    }
}

/// An employee record as exchanged with the backend.
///
/// The wire shape is `{ idEmpleado, nombre, correo, sueldo }`. A record that
/// has not been persisted yet carries no id; the backend reports such records
/// with `idEmpleado: 0`, which is read back as `None`.
///
/// See [`crate::validation::validate`] for the rules a record must satisfy
/// before it is submitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Empleado {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "id_from_wire"
    )]
    pub id_empleado: Option<EmpleadoId>,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub correo: String,
    #[serde(default)]
    pub sueldo: f64,
}

/// Payload for creating a new employee. Carries no id at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpleadoCreate {
    pub nombre: String,
    pub correo: String,
    pub sueldo: f64,
}

/// The user-editable fields of an [`Empleado`].
///
/// The id is never user-editable and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EmpleadoField {
    Nombre,
    Correo,
    Sueldo,
}

fn id_from_wire<'de, D>(deserializer: D) -> Result<Option<EmpleadoId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<u32>::deserialize(deserializer)?;
    Ok(raw.filter(|id| *id != 0).map(EmpleadoId))
}

impl Empleado {
    /// Creates an unsaved record.
    ///
    /// # Notes
    /// The `id_empleado` field is left empty and will be assigned by the backend.
    pub fn new(nombre: impl Into<String>, correo: impl Into<String>, sueldo: f64) -> Self {
        Self {
            id_empleado: None,
            nombre: nombre.into(),
            correo: correo.into(),
            sueldo,
        }
    }

    pub fn with_id(mut self, id: EmpleadoId) -> Self {
        self.id_empleado = Some(id);
        self
    }

    /// Merges one raw input value into the record.
    ///
    /// Text fields keep the value verbatim. `Sueldo` is parsed as a number;
    /// empty, unparseable or non-finite input becomes `0.0`, which the
    /// validator rejects.
    pub fn apply(&mut self, field: EmpleadoField, value: &str) {
        match field {
            EmpleadoField::Nombre => self.nombre = value.to_string(),
            EmpleadoField::Correo => self.correo = value.to_string(),
            EmpleadoField::Sueldo => {
                self.sueldo = value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .unwrap_or(0.0)
            }
        }
    }

    /// The create payload for this record, dropping any id.
    pub fn to_create(&self) -> EmpleadoCreate {
        EmpleadoCreate {
            nombre: self.nombre.clone(),
            correo: self.correo.clone(),
            sueldo: self.sueldo,
        }
    }
}

impl From<EmpleadoCreate> for Empleado {
    fn from(params: EmpleadoCreate) -> Self {
        Self::new(params.nombre, params.correo, params.sueldo)
    }
}
