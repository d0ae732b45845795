use crate::models::{employee::null_as_default, Employee, EmployeeFields};
use serde::{Deserialize, Serialize, Serializer};

/// Body of create and update requests.
///
/// Omitted or null fields take their zero value; unknown fields, `id`
/// included, are ignored. Keys match in lower or capitalised form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeRequest {
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Salary", deserialize_with = "null_as_default")]
    pub salary: f64,
    #[serde(alias = "Age", deserialize_with = "null_as_default")]
    pub age: f64,
}

impl From<EmployeeRequest> for EmployeeFields {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            name: req.name,
            salary: req.salary,
            age: req.age,
        }
    }
}

// Largest magnitude below which every integral f64 is exact as an i64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole numbers without a fractional part (`1000`, not `1000.0`).
fn integral_as_int<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "integral_as_int")]
    pub salary: f64,
    #[serde(serialize_with = "integral_as_int")]
    pub age: f64,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name,
            salary: employee.salary,
            age: employee.age,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
