//! DBMS connection configuration form and its test variant.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dsn::DsnTemplate;
use crate::forms::RunMode;

const RUN_MODE_FIELD: &str = "rm";
const DB_FIELD: &str = "db";
const HOST_FIELD: &str = "host";
const DSN_FIELD: &str = "dsn";

/// Current values of the connection configuration form, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionConfigForm {
    fields: Vec<(String, String)>,
}

impl ConnectionConfigForm {
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets the first field called `name`, appending it when absent.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Renders the sample DSN from the form's own `db` and `host` values
    /// into its `dsn` field and returns it.
    pub fn apply_dsn_sample(&mut self, template: &DsnTemplate) -> String {
        let dsn = template.render(
            self.value(DB_FIELD).unwrap_or_default(),
            self.value(HOST_FIELD).unwrap_or_default(),
        );
        self.set(DSN_FIELD, dsn.clone());
        dsn
    }

    /// The same fields with the save marker swapped for the test marker.
    pub fn to_test_form(&self) -> ConnectionTestForm {
        let mut fields = self.fields.clone();
        match fields.iter_mut().find(|(field, _)| field == RUN_MODE_FIELD) {
            Some((_, mode)) if mode == RunMode::DbmsSave.as_str() => {
                *mode = RunMode::DbmsTest.as_str().to_string();
            }
            Some(_) => {}
            None => fields.push((
                RUN_MODE_FIELD.to_string(),
                RunMode::DbmsTest.as_str().to_string(),
            )),
        }
        ConnectionTestForm { fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(transparent)]
/// Form asking the backend to try the configured connection.
pub struct ConnectionTestForm {
    #[validate(length(min = 1))]
    pub fields: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::encode;

    fn form() -> ConnectionConfigForm {
        ConnectionConfigForm::new([
            ("rm", "dbms_save"),
            ("db", "orders"),
            ("host", "db.example.com"),
            ("dsn", ""),
        ])
    }

    #[test]
    fn test_form_swaps_save_marker() {
        let body = encode(&form().to_test_form()).unwrap();
        assert_eq!(body, "rm=dbms_test&db=orders&host=db.example.com&dsn=");
    }

    #[test]
    fn test_form_adds_marker_when_missing() {
        let form = ConnectionConfigForm::new([("db", "orders")]);
        let test = form.to_test_form();
        assert_eq!(
            test.fields.last(),
            Some(&("rm".to_string(), "dbms_test".to_string()))
        );
    }

    #[test]
    fn dsn_sample_uses_form_values() {
        let mut form = form();
        let dsn = form.apply_dsn_sample(&DsnTemplate::new("dbi:mysql:{db};host={host}"));

        assert_eq!(dsn, "dbi:mysql:orders;host=db.example.com");
        assert_eq!(form.value("dsn"), Some(dsn.as_str()));
    }

    #[test]
    fn dsn_sample_tolerates_missing_inputs() {
        let mut form = ConnectionConfigForm::default();
        let dsn = form.apply_dsn_sample(&DsnTemplate::new("{db}@{host}"));
        assert_eq!(dsn, "@");
    }
}
