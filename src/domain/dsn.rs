//! Sample DSN generation for the DBMS configuration form.

use serde::{Deserialize, Serialize};

const DB_PLACEHOLDER: &str = "{db}";
const HOST_PLACEHOLDER: &str = "{host}";

/// DSN template with `{db}` and `{host}` placeholders, e.g.
/// `dbi:mysql:database={db};host={host}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DsnTemplate(String);

impl DsnTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes the first occurrence of each placeholder.
    pub fn render(&self, db: &str, host: &str) -> String {
        self.0
            .replacen(DB_PLACEHOLDER, db, 1)
            .replacen(HOST_PLACEHOLDER, host, 1)
    }
}
