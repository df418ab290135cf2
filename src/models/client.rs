//! Client model.

use serde::{Deserialize, Serialize};

/// A client that quotes are issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique client code.
    pub code: String,
    /// Company or person name.
    pub name: String,
    /// Company registry number (CNPJ).
    pub cnpj: String,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email.
    pub email: String,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Client {
    /// Returns true if the term occurs in the code, name, CNPJ or email,
    /// ignoring case. A blank term matches every client.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        [&self.code, &self.name, &self.cnpj, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client {
            code: "CLI-001".to_string(),
            name: "Construtora Horizonte".to_string(),
            cnpj: "12.345.678/0001-90".to_string(),
            phone: None,
            email: "contato@horizonte.com.br".to_string(),
            address: None,
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        assert!(client().matches("horizonte"));
        assert!(client().matches("CONSTRUTORA"));
    }

    #[test]
    fn test_matches_code_cnpj_and_email() {
        assert!(client().matches("cli-001"));
        assert!(client().matches("0001-90"));
        assert!(client().matches("@horizonte"));
    }

    #[test]
    fn test_blank_term_matches_everything() {
        assert!(client().matches(""));
        assert!(client().matches("   "));
    }

    #[test]
    fn test_unrelated_term_does_not_match() {
        assert!(!client().matches("pavimentadora"));
    }

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let json = serde_json::to_string(&client()).unwrap();
        assert!(!json.contains("phone"));
        assert!(!json.contains("address"));
    }
}
