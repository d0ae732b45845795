use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque employee identifier.
///
/// Parsing and formatting are the only places that know the storage engine's
/// id encoding (a 24-character hex ObjectId). In BSON it is stored as a native
/// ObjectId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(ObjectId);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid ID")]
pub struct InvalidEmployeeId;

impl EmployeeId {
    /// Fresh, globally unique id.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub(crate) fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl FromStr for EmployeeId {
    type Err = InvalidEmployeeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidEmployeeId)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Decode an explicit null the same way as a missing field: as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The mutable part of an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

/// A stored employee document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: EmployeeId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: f64,
}

impl Employee {
    pub fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            salary: fields.salary,
            age: fields.age,
        }
    }
}
