//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the charge
//! policy, the employee roster and the client directory from YAML files.

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::calculation::compute_employee_cost_with_rates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Client, Employee, EmployeeCostBreakdown, EmployeeSummary};

use super::types::{ChargePolicy, ClientsConfig, EmployeesConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the policy, employees and clients.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml     # Charge and allocation percentages
/// ├── employees.yaml  # Employee roster
/// └── clients.yaml    # Client directory
/// ```
///
/// # Example
///
/// ```no_run
/// use cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let employee = loader.get_employee("func_001").unwrap();
/// let cost = loader.employee_cost("func_001").unwrap();
/// println!("{} costs {} per month", employee.name, cost.total_cost);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: ChargePolicy,
    employees: Vec<Employee>,
    clients: Vec<Client>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Two employees share an id or two clients share a code
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<ChargePolicy>(&path.join("policy.yaml"))?;

        let employees_path = path.join("employees.yaml");
        let employees = Self::load_yaml::<EmployeesConfig>(&employees_path)?.employees;
        Self::ensure_unique(&employees_path, employees.iter().map(|e| e.id.as_str()))?;

        let clients_path = path.join("clients.yaml");
        let clients = Self::load_yaml::<ClientsConfig>(&clients_path)?.clients;
        Self::ensure_unique(&clients_path, clients.iter().map(|c| c.code.as_str()))?;

        debug!(
            path = %path.display(),
            employees = employees.len(),
            clients = clients.len(),
            "Loaded configuration"
        );

        Ok(Self::new(policy, employees, clients))
    }

    /// Creates a loader from already-parsed parts.
    pub fn new(policy: ChargePolicy, employees: Vec<Employee>, clients: Vec<Client>) -> Self {
        Self {
            policy,
            employees,
            clients,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn ensure_unique<'a>(path: &Path, keys: impl Iterator<Item = &'a str>) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for key in keys {
            if !seen.insert(key) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate entry '{}'", key),
                });
            }
        }
        Ok(())
    }

    /// Returns the charge policy.
    pub fn policy(&self) -> &ChargePolicy {
        &self.policy
    }

    /// Returns every employee in the roster.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the listing view of every employee.
    pub fn employee_summaries(&self) -> Vec<EmployeeSummary> {
        self.employees.iter().map(Employee::summary).collect()
    }

    /// Gets an employee by id.
    ///
    /// # Returns
    ///
    /// Returns the employee if found, or `EmployeeNotFound` error.
    pub fn get_employee(&self, id: &str) -> EngineResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Computes the cost breakdown of an employee from their base salary.
    pub fn employee_cost(&self, id: &str) -> EngineResult<EmployeeCostBreakdown> {
        let employee = self.get_employee(id)?;
        Ok(compute_employee_cost_with_rates(
            employee.base_salary,
            &self.policy.employee_cost,
        ))
    }

    /// Returns the number of employees holding a role and their average base salary.
    ///
    /// The average is zero when nobody holds the role.
    pub fn average_salary_for_role(&self, role: &str) -> (usize, Decimal) {
        let salaries: Vec<Decimal> = self
            .employees
            .iter()
            .filter(|e| e.role == role)
            .map(|e| e.base_salary)
            .collect();

        if salaries.is_empty() {
            return (0, Decimal::ZERO);
        }

        let total: Decimal = salaries.iter().sum();
        (salaries.len(), total / Decimal::from(salaries.len()))
    }

    /// Gets a client by code.
    pub fn get_client(&self, code: &str) -> EngineResult<&Client> {
        self.clients
            .iter()
            .find(|c| c.code == code)
            .ok_or_else(|| EngineError::ClientNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the clients whose code, name, CNPJ or email contain the term.
    pub fn search_clients(&self, term: &str) -> Vec<&Client> {
        self.clients.iter().filter(|c| c.matches(term)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.employees().len(), 6);
        assert_eq!(loader.search_clients("").len(), 4);
    }

    #[test]
    fn test_policy_matches_statutory_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.policy(), ChargePolicy::default());
    }

    #[test]
    fn test_get_employee() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let employee = loader.get_employee("func_001").unwrap();
        assert_eq!(employee.name, "Ana Paula Souza");
        assert_eq!(employee.base_salary, dec("1000.00"));
    }

    #[test]
    fn test_get_employee_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_employee("unknown") {
            Err(EngineError::EmployeeNotFound { id }) => assert_eq!(id, "unknown"),
            _ => panic!("Expected EmployeeNotFound error"),
        }
    }

    #[test]
    fn test_employee_cost_uses_base_salary() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let cost = loader.employee_cost("func_001").unwrap();
        assert_eq!(cost.gross_salary, dec("1000"));
        assert_eq!(cost.total_cost, dec("1489.952"));
    }

    #[test]
    fn test_average_salary_for_role() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        // Pedreiro: 2400.00 and 2600.00
        let (count, average) = loader.average_salary_for_role("Pedreiro");
        assert_eq!(count, 2);
        assert_eq!(average, dec("2500"));
    }

    #[test]
    fn test_average_salary_for_unknown_role_is_zero() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(
            loader.average_salary_for_role("Astronauta"),
            (0, Decimal::ZERO)
        );
    }

    #[test]
    fn test_employee_summaries_cover_roster() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let summaries = loader.employee_summaries();
        assert_eq!(summaries.len(), loader.employees().len());
        assert_eq!(summaries[0].id, "func_001");
    }

    #[test]
    fn test_search_clients_by_name() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let found = loader.search_clients("horizonte");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "CLI-001");
    }

    #[test]
    fn test_get_client_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_client("CLI-999") {
            Err(EngineError::ClientNotFound { code }) => assert_eq!(code, "CLI-999"),
            _ => panic!("Expected ClientNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_ensure_unique_rejects_duplicates() {
        let result = ConfigLoader::ensure_unique(
            Path::new("employees.yaml"),
            ["func_001", "func_002", "func_001"].into_iter(),
        );

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("func_001"));
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }
}
