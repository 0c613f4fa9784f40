//! Task CRUD use cases.

mod service;

pub use service::{TaskService, TaskUpdate};
