//! Wire DTOs for the loan REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON keys. The server persists booleans and
//! PC numbers in SQLite, so pending rows come back with `0/1` flags and integer
//! numbers; the deserializers below accept both shapes.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A person who can borrow equipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identification number, kept textual.
    #[serde(deserialize_with = "deserialize_text_id")]
    pub id: String,
    /// Full name, matched exactly against the form input.
    pub nombre: String,
    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    pub area: String,
}

/// A room or office where equipment is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub nombre: String,
    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    pub edificio: String,
}

/// Staff member who hands out or receives equipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assistant {
    pub nombre: String,
}

/// A numbered PC unit and the department it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    pub pertenece: String,
}

/// Payload of `GET /api/initial-data`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialData {
    #[serde(default)]
    pub usuarios: Vec<User>,
    #[serde(default)]
    pub ubicaciones: Vec<Location>,
    #[serde(default)]
    pub auxiliares: Vec<Assistant>,
}

/// Loan record sent to `POST /api/prestamos`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLoan {
    pub fecha: String,
    pub identificacion: String,
    pub nombre: String,
    pub area: String,
    pub ubicacion: String,
    pub edificio: String,
    pub hora_inicio: String,
    pub prestado_por: String,
    pub observaciones: String,
    pub pc: bool,
    /// Present only when `pc` is set.
    pub pc_numero: Option<String>,
    /// Owner resolved from the equipment list; advisory for the server.
    pub pc_pertenece: Option<String>,
    pub kit: bool,
    pub aire: bool,
    pub cabinas: bool,
    pub consola: bool,
    pub vbeam: bool,
}

/// A loan still waiting for its equipment, from `GET /api/prestamos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLoan {
    pub id: i64,
    pub fecha: String,
    pub nombre: String,
    pub ubicacion: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub pc: bool,
    #[serde(default, deserialize_with = "deserialize_optional_number_text")]
    pub pc_numero: Option<String>,
    pub hora_inicio: String,
}

/// Body of `POST /api/prestamos/{id}/devolver`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub recibido_por: String,
}

/// Response body of the mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn deserialize_text_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(int) => Ok(int != 0),
            None => Err(D::Error::custom("expected integer flag")),
        },
        serde_json::Value::String(text) => match text.as_str() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            other => Err(D::Error::custom(format!("unexpected flag value {other:?}"))),
        },
        _ => Err(D::Error::custom("expected boolean flag")),
    }
}

fn deserialize_optional_number_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) if text.is_empty() => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        _ => Err(D::Error::custom("expected number, string or null")),
    }
}
