//! In-memory store used when no database is configured, and by the tests.
//!
//! One `RwLock` guards both tables, so holding the write guard for the whole
//! call gives every operation the same all-or-nothing behaviour as a
//! database transaction.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use super::{AttendanceStore, EmployeeStore, SummaryStore};
use crate::error::{HrError, HrResult};
use crate::model::attendance::{Attendance, AttendanceStatus, MarkAttendance};
use crate::model::employee::{CreateEmployee, Employee, EmployeeDeletion};
use crate::model::summary::{AttendanceSummary, DepartmentCount, SummaryCounts};

#[derive(Debug, Default)]
struct Tables {
    employees: Vec<Employee>,
    attendance: Vec<Attendance>,
    last_employee_id: u64,
    last_attendance_id: u64,
}

impl Tables {
    fn has_employee(&self, employee_id: &str) -> bool {
        self.employees.iter().any(|e| e.employee_id == employee_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> HrResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| HrError::Internal("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> HrResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| HrError::Internal("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn create(&self, employee: CreateEmployee) -> HrResult<Employee> {
        employee.validate()?;

        let mut tables = self.write()?;
        if tables.has_employee(&employee.employee_id) {
            return Err(HrError::duplicate_employee(&employee.employee_id));
        }

        tables.last_employee_id += 1;
        let created = Employee {
            id: tables.last_employee_id,
            employee_id: employee.employee_id,
            full_name: employee.full_name,
            email: employee.email,
            department: employee.department,
            created_at: Utc::now(),
        };
        tables.employees.push(created.clone());

        info!(id = created.id, employee_id = %created.employee_id, "Employee created");
        Ok(created)
    }

    async fn list_all(&self) -> HrResult<Vec<Employee>> {
        // Ids are handed out in increasing order and rows are only appended.
        Ok(self.read()?.employees.clone())
    }

    async fn delete(&self, employee_id: &str) -> HrResult<EmployeeDeletion> {
        let mut tables = self.write()?;

        let Some(pos) = tables
            .employees
            .iter()
            .position(|e| e.employee_id == employee_id)
        else {
            return Err(HrError::employee_not_found(employee_id));
        };

        tables.employees.remove(pos);
        let before = tables.attendance.len();
        tables.attendance.retain(|a| a.employee_id != employee_id);
        let attendance_removed = (before - tables.attendance.len()) as u64;

        info!(employee_id, attendance_removed, "Employee deleted");
        Ok(EmployeeDeletion::new(employee_id, attendance_removed))
    }
}

#[async_trait]
impl AttendanceStore for InMemoryStore {
    async fn mark(&self, attendance: MarkAttendance) -> HrResult<Attendance> {
        let status = attendance.validate()?;

        let mut tables = self.write()?;
        if !tables.has_employee(&attendance.employee_id) {
            return Err(HrError::employee_not_found(&attendance.employee_id));
        }

        tables.last_attendance_id += 1;
        let record = Attendance {
            id: tables.last_attendance_id,
            employee_id: attendance.employee_id,
            date: attendance.date,
            status,
            created_at: Utc::now(),
        };
        tables.attendance.push(record.clone());

        debug!(id = record.id, employee_id = %record.employee_id, "Attendance marked");
        Ok(record)
    }

    async fn list_for_employee(&self, employee_id: &str) -> HrResult<Vec<Attendance>> {
        let tables = self.read()?;
        if !tables.has_employee(employee_id) {
            return Err(HrError::employee_not_found(employee_id));
        }

        let mut records: Vec<Attendance> = tables
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        Ok(records)
    }
}

#[async_trait]
impl SummaryStore for InMemoryStore {
    async fn summary(&self, date: NaiveDate) -> HrResult<AttendanceSummary> {
        let tables = self.read()?;

        // Exact, case-sensitive names; BTreeMap keeps them ordered
        let mut headcount: BTreeMap<&str, u64> = BTreeMap::new();
        for employee in &tables.employees {
            *headcount.entry(employee.department.as_str()).or_default() += 1;
        }
        let departments = headcount
            .into_iter()
            .map(|(department, count)| DepartmentCount {
                department: department.to_string(),
                count,
            })
            .collect();

        let mut counts = SummaryCounts {
            total_employees: tables.employees.len() as u64,
            total_attendance_records: tables.attendance.len() as u64,
            ..Default::default()
        };

        for record in &tables.attendance {
            let on_date = record.date == date;
            match record.status {
                AttendanceStatus::Present => {
                    counts.total_present += 1;
                    if on_date {
                        counts.present_on_date += 1;
                    }
                }
                AttendanceStatus::Absent if on_date => counts.absent_on_date += 1,
                AttendanceStatus::Absent => {}
            }
        }

        Ok(AttendanceSummary::from_counts(date, counts, departments))
    }
}
