pub mod employee;

pub use employee::{Employee, EmployeeFields, EmployeeId, InvalidEmployeeId};
