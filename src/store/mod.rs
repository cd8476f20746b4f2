//! Persistence ports for employees and their attendance history.
//!
//! Every call is one unit of work: implementations acquire their transaction
//! or lock at entry and release it on every exit path. Handlers only see the
//! traits, so the same routes run against MySQL or the in-memory store.

pub mod memory;
pub mod mysql;

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::error::HrResult;
use crate::model::attendance::{Attendance, MarkAttendance};
use crate::model::employee::{CreateEmployee, Employee, EmployeeDeletion};
use crate::model::summary::AttendanceSummary;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Fails with `DuplicateKey` when `employee_id` is taken.
    async fn create(&self, employee: CreateEmployee) -> HrResult<Employee>;

    /// All employees in ascending surrogate id order.
    async fn list_all(&self) -> HrResult<Vec<Employee>>;

    /// Removes the employee and all of its attendance rows atomically.
    async fn delete(&self, employee_id: &str) -> HrResult<EmployeeDeletion>;
}

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Fails with `NotFound` when the employee does not exist.
    /// Duplicate markings for the same day are kept.
    async fn mark(&self, attendance: MarkAttendance) -> HrResult<Attendance>;

    /// Newest date first; same-day rows newest insert first.
    async fn list_for_employee(&self, employee_id: &str) -> HrResult<Vec<Attendance>>;
}

#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn summary(&self, date: NaiveDate) -> HrResult<AttendanceSummary>;
}

/// Store handles shared with the actix workers.
#[derive(Clone)]
pub struct Stores {
    pub employees: Arc<dyn EmployeeStore>,
    pub attendance: Arc<dyn AttendanceStore>,
    pub summary: Arc<dyn SummaryStore>,
}

impl Stores {
    pub fn mysql(pool: MySqlPool) -> Self {
        Self::from_backend(Arc::new(MySqlStore::new(pool)))
    }

    pub fn in_memory() -> Self {
        Self::from_backend(Arc::new(InMemoryStore::new()))
    }

    fn from_backend<S>(backend: Arc<S>) -> Self
    where
        S: EmployeeStore + AttendanceStore + SummaryStore + 'static,
    {
        Self {
            employees: backend.clone(),
            attendance: backend.clone(),
            summary: backend,
        }
    }

    /// Registers each store as `web::Data<dyn …>` app data.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.employees.clone()))
            .app_data(web::Data::from(self.attendance.clone()))
            .app_data(web::Data::from(self.summary.clone()));
    }
}

impl From<InMemoryStore> for Stores {
    fn from(store: InMemoryStore) -> Self {
        Self::from_backend(Arc::new(store))
    }
}
