pub mod database;
pub mod metrics;
pub mod store;

pub use database::EmployeeDb;
pub use metrics::{get_metrics, init_metrics, record_operation};
pub use store::{EmployeeStore, InMemoryEmployeeStore};
