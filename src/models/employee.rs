//! Employee model and related types.
//!
//! This module defines the Employee struct, its status and contract enums,
//! and the EmployeeSummary listing view.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently working.
    Active,
    /// On leave (vacation, medical or other).
    OnLeave,
    /// No longer employed.
    Inactive,
}

/// The contract under which an employee is engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Formal employment under the labor code (CLT).
    Clt,
    /// Independent contractor (PJ).
    Contractor,
    /// Fixed-term employment.
    Temporary,
    /// Internship.
    Internship,
}

/// Represents an employee in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Individual taxpayer number (CPF).
    pub cpf: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// The date the employee was admitted.
    pub admission_date: NaiveDate,
    /// Internal registration number (matrícula).
    pub registration: String,
    /// Job title.
    pub role: String,
    /// Department.
    pub department: String,
    /// Monthly gross salary.
    pub base_salary: Decimal,
    /// Current employment status.
    pub status: EmployeeStatus,
    /// Contract type.
    pub contract_type: ContractType,
    /// Work shift description (e.g. "morning").
    #[serde(default)]
    pub work_shift: Option<String>,
}

/// The basic employee fields shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Individual taxpayer number (CPF).
    pub cpf: String,
    /// Job title.
    pub role: String,
    /// Department.
    pub department: String,
    /// Current employment status.
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee is currently active.
    ///
    /// # Examples
    ///
    /// ```
    /// use cost_engine::models::{ContractType, Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "func_001".to_string(),
    ///     name: "Ana Souza".to_string(),
    ///     cpf: "123.456.789-00".to_string(),
    ///     email: "ana@example.com".to_string(),
    ///     phone: None,
    ///     date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
    ///     admission_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
    ///     registration: "M-0001".to_string(),
    ///     role: "Pedreiro".to_string(),
    ///     department: "Obras".to_string(),
    ///     base_salary: Decimal::new(2500, 0),
    ///     status: EmployeeStatus::Active,
    ///     contract_type: ContractType::Clt,
    ///     work_shift: None,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns the listing view of this employee.
    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            cpf: self.cpf.clone(),
            role: self.role.clone(),
            department: self.department.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(status: EmployeeStatus) -> Employee {
        Employee {
            id: "func_001".to_string(),
            name: "Ana Souza".to_string(),
            cpf: "123.456.789-00".to_string(),
            email: "ana@example.com".to_string(),
            phone: Some("(11) 99999-0000".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            admission_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            registration: "M-0001".to_string(),
            role: "Pedreiro".to_string(),
            department: "Obras".to_string(),
            base_salary: Decimal::new(2500, 0),
            status,
            contract_type: ContractType::Clt,
            work_shift: Some("morning".to_string()),
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "func_002",
            "name": "Bruno Lima",
            "cpf": "987.654.321-00",
            "email": "bruno@example.com",
            "date_of_birth": "1985-05-20",
            "admission_date": "2019-03-01",
            "registration": "M-0002",
            "role": "Eletricista",
            "department": "Obras",
            "base_salary": "3200.50",
            "status": "on_leave",
            "contract_type": "clt"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "func_002");
        assert_eq!(employee.status, EmployeeStatus::OnLeave);
        assert_eq!(employee.contract_type, ContractType::Clt);
        assert_eq!(employee.base_salary, Decimal::new(320050, 2));
        assert_eq!(
            employee.admission_date,
            NaiveDate::from_ymd_opt(2019, 3, 1).unwrap()
        );
        assert!(employee.phone.is_none());
        assert!(employee.work_shift.is_none());
    }

    #[test]
    fn test_is_active_only_for_active_status() {
        assert!(create_test_employee(EmployeeStatus::Active).is_active());
        assert!(!create_test_employee(EmployeeStatus::OnLeave).is_active());
        assert!(!create_test_employee(EmployeeStatus::Inactive).is_active());
    }

    #[test]
    fn test_summary_copies_listing_fields() {
        let employee = create_test_employee(EmployeeStatus::Active);
        let summary = employee.summary();

        assert_eq!(summary.id, "func_001");
        assert_eq!(summary.name, "Ana Souza");
        assert_eq!(summary.cpf, "123.456.789-00");
        assert_eq!(summary.role, "Pedreiro");
        assert_eq!(summary.department, "Obras");
        assert_eq!(summary.status, EmployeeStatus::Active);
    }

    #[test]
    fn test_contract_type_serialization() {
        assert_eq!(serde_json::to_string(&ContractType::Clt).unwrap(), "\"clt\"");
        assert_eq!(
            serde_json::to_string(&ContractType::Contractor).unwrap(),
            "\"contractor\""
        );
        assert_eq!(
            serde_json::to_string(&ContractType::Internship).unwrap(),
            "\"internship\""
        );
    }
}
