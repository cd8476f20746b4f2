use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::{MySql, MySqlPool, Transaction};
use tracing::{debug, error, info, instrument};

use super::{AttendanceStore, EmployeeStore, SummaryStore};
use crate::error::{HrError, HrResult};
use crate::model::attendance::{Attendance, AttendanceRow, AttendanceStatus, MarkAttendance};
use crate::model::employee::{CreateEmployee, Employee, EmployeeDeletion};
use crate::model::summary::{AttendanceSummary, DepartmentCount, SummaryCounts};

const EMPLOYEE_SELECT_SQL: &str = r#"
    SELECT id, employee_id, full_name, email, department, created_at
    FROM employees
"#;

const ATTENDANCE_SELECT_SQL: &str = r#"
    SELECT id, employee_id, date, status, created_at
    FROM attendance
"#;

/// MySQL-backed store. Each operation runs in its own transaction taken
/// from the pool; an uncommitted transaction rolls back when dropped.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Shared lock on the employee row so a concurrent delete waits for us.
async fn employee_exists(tx: &mut Transaction<'_, MySql>, employee_id: &str) -> HrResult<bool> {
    let id = sqlx::query_scalar::<_, u64>(
        "SELECT id FROM employees WHERE employee_id = ? LOCK IN SHARE MODE",
    )
    .bind(employee_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(id.is_some())
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

async fn count(tx: &mut Transaction<'_, MySql>, sql: &str) -> HrResult<u64> {
    let n = sqlx::query_scalar::<_, i64>(sql).fetch_one(&mut **tx).await?;
    Ok(n.max(0) as u64)
}

#[async_trait]
impl EmployeeStore for MySqlStore {
    #[instrument(skip(self, employee), fields(employee_id = %employee.employee_id))]
    async fn create(&self, employee: CreateEmployee) -> HrResult<Employee> {
        employee.validate()?;

        let mut tx = self.pool.begin().await?;

        // Plain read: the unique key decides concurrent inserts.
        let taken = sqlx::query_scalar::<_, u64>("SELECT id FROM employees WHERE employee_id = ?")
            .bind(&employee.employee_id)
            .fetch_optional(&mut *tx)
            .await?;
        if taken.is_some() {
            return Err(HrError::duplicate_employee(&employee.employee_id));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.employee_id)
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await;

        let id = match result {
            Ok(res) => res.last_insert_id(),
            // Lost the race against a concurrent insert of the same id
            Err(e) if is_unique_violation(&e) => {
                return Err(HrError::duplicate_employee(&employee.employee_id));
            }
            Err(e) => {
                error!(error = %e, "Failed to create employee");
                return Err(HrError::Internal(e.to_string()));
            }
        };

        let created = sqlx::query_as::<_, Employee>(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(id, "Employee created");
        Ok(created)
    }

    async fn list_all(&self) -> HrResult<Vec<Employee>> {
        let mut tx = self.pool.begin().await?;

        let employees = sqlx::query_as::<_, Employee>(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id"))
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    #[instrument(skip(self))]
    async fn delete(&self, employee_id: &str) -> HrResult<EmployeeDeletion> {
        let mut tx = self.pool.begin().await?;

        // Explicit cascade; the foreign key would also remove these rows.
        let attendance_removed = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            // tx dropped here, nothing is committed
            return Err(HrError::employee_not_found(employee_id));
        }

        tx.commit().await?;

        info!(attendance_removed, "Employee deleted");
        Ok(EmployeeDeletion::new(employee_id, attendance_removed))
    }
}

#[async_trait]
impl AttendanceStore for MySqlStore {
    #[instrument(skip(self, attendance), fields(employee_id = %attendance.employee_id, date = %attendance.date))]
    async fn mark(&self, attendance: MarkAttendance) -> HrResult<Attendance> {
        let status: AttendanceStatus = attendance.validate()?;

        let mut tx = self.pool.begin().await?;

        if !employee_exists(&mut tx, &attendance.employee_id).await? {
            return Err(HrError::employee_not_found(&attendance.employee_id));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO attendance (employee_id, date, status, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&attendance.employee_id)
        .bind(attendance.date)
        .bind(status.as_ref())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await;

        let id = match result {
            Ok(res) => res.last_insert_id(),
            Err(e) if is_foreign_key_violation(&e) => {
                return Err(HrError::employee_not_found(&attendance.employee_id));
            }
            Err(e) => {
                error!(error = %e, "Failed to mark attendance");
                return Err(HrError::Internal(e.to_string()));
            }
        };

        let row = sqlx::query_as::<_, AttendanceRow>(&format!("{ATTENDANCE_SELECT_SQL} WHERE id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(id, status = %status, "Attendance marked");
        Attendance::try_from(row)
    }

    #[instrument(skip(self))]
    async fn list_for_employee(&self, employee_id: &str) -> HrResult<Vec<Attendance>> {
        let mut tx = self.pool.begin().await?;

        if !employee_exists(&mut tx, employee_id).await? {
            return Err(HrError::employee_not_found(employee_id));
        }

        let rows = sqlx::query_as::<_, AttendanceRow>(&format!(
            "{ATTENDANCE_SELECT_SQL} WHERE employee_id = ? ORDER BY date DESC, id DESC"
        ))
        .bind(employee_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(count = rows.len(), "Fetched attendance");
        rows.into_iter().map(Attendance::try_from).collect()
    }
}

#[async_trait]
impl SummaryStore for MySqlStore {
    #[instrument(skip(self))]
    async fn summary(&self, date: NaiveDate) -> HrResult<AttendanceSummary> {
        let mut tx = self.pool.begin().await?;

        let mut counts = SummaryCounts {
            total_employees: count(&mut tx, "SELECT COUNT(*) FROM employees").await?,
            total_attendance_records: count(&mut tx, "SELECT COUNT(*) FROM attendance").await?,
            total_present: count(
                &mut tx,
                "SELECT COUNT(*) FROM attendance WHERE status = 'Present'",
            )
            .await?,
            ..Default::default()
        };

        // `department` has a binary collation, so names group exactly
        let departments = sqlx::query_as::<_, (String, i64)>(
            "SELECT department, COUNT(*) FROM employees GROUP BY department ORDER BY department",
        )
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|(department, n)| DepartmentCount {
            department,
            count: n.max(0) as u64,
        })
        .collect();

        let per_status = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM attendance WHERE date = ? GROUP BY status",
        )
        .bind(date)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        for (status, n) in per_status {
            let n = n.max(0) as u64;
            match AttendanceStatus::parse(&status) {
                Ok(AttendanceStatus::Present) => counts.present_on_date = n,
                Ok(AttendanceStatus::Absent) => counts.absent_on_date = n,
                Err(_) => {
                    return Err(HrError::Internal(format!(
                        "attendance table holds unknown status '{status}'"
                    )));
                }
            }
        }

        Ok(AttendanceSummary::from_counts(date, counts, departments))
    }
}
