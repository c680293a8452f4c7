//! DBMS connection test and DSN helper of the configuration form.

use crate::backend::ConnectionTester;
use crate::backend::errors::BackendResult;
use crate::domain::status::StatusIndicator;
use crate::domain::types::RequestToken;
use crate::forms::connection::{ConnectionConfigForm, ConnectionTestForm};
use crate::services::{CONNECTION_OK_MESSAGE, Completion, RequestTicket, ServiceResult};

pub type ConnectionTestTicket = RequestTicket<ConnectionTestForm>;

/// Result badge next to the test button.
#[derive(Debug, Default)]
pub struct ConnectionTestPanel {
    indicator: StatusIndicator,
    latest: RequestToken,
}

impl ConnectionTestPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indicator(&self) -> &StatusIndicator {
        &self.indicator
    }

    /// Builds the test request from the current form values.
    pub fn begin_test(&mut self, form: &ConnectionConfigForm) -> ConnectionTestTicket {
        self.latest = self.latest.next();
        self.indicator = StatusIndicator::Loading;
        log::info!("Testing connection ({})", self.latest);

        RequestTicket {
            token: self.latest,
            form: form.to_test_form(),
        }
    }

    pub fn complete_test(
        &mut self,
        ticket: &ConnectionTestTicket,
        outcome: BackendResult<()>,
    ) -> Completion {
        if ticket.token != self.latest {
            log::debug!("Ignoring superseded connection test {}", ticket.token);
            return Completion::Stale;
        }

        match outcome {
            Ok(()) => {
                self.indicator = StatusIndicator::Success(CONNECTION_OK_MESSAGE.to_string());
                Completion::Applied
            }
            Err(err) => {
                log::warn!("Connection test failed: {err}");
                let message = err.user_message();
                self.indicator = StatusIndicator::Failure(message.clone());
                Completion::Rejected(message)
            }
        }
    }

    /// Clears the result whenever the form is edited; a test still in flight
    /// describes the old values and is ignored when it completes.
    pub fn on_form_changed(&mut self) {
        self.indicator = StatusIndicator::Idle;
        self.latest = self.latest.next();
    }
}

/// Runs a connection test for the current form values.
pub fn test_connection<B>(
    panel: &mut ConnectionTestPanel,
    form: &ConnectionConfigForm,
    backend: &B,
) -> ServiceResult<Completion>
where
    B: ConnectionTester + ?Sized,
{
    let ticket = panel.begin_test(form);
    let outcome = backend.test_connection(&ticket.form);
    Ok(panel.complete_test(&ticket, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::errors::BackendError;
    use crate::backend::mock::MockBackend;

    fn form() -> ConnectionConfigForm {
        ConnectionConfigForm::new([("rm", "dbms_save"), ("db", "orders"), ("host", "localhost")])
    }

    #[test]
    fn successful_test_shows_ok() {
        let mut panel = ConnectionTestPanel::new();
        let mut backend = MockBackend::new();
        backend
            .expect_test_connection()
            .withf(|form| {
                form.fields
                    .iter()
                    .any(|(name, value)| name == "rm" && value == "dbms_test")
            })
            .times(1)
            .returning(|_| Ok(()));

        let completion = test_connection(&mut panel, &form(), &backend).unwrap();

        assert_eq!(completion, Completion::Applied);
        assert_eq!(
            panel.indicator(),
            &StatusIndicator::Success(CONNECTION_OK_MESSAGE.to_string())
        );
    }

    #[test]
    fn failed_test_shows_backend_error() {
        let mut panel = ConnectionTestPanel::new();
        let mut backend = MockBackend::new();
        backend
            .expect_test_connection()
            .returning(|_| Err(BackendError::Application("Access denied".to_string())));

        test_connection(&mut panel, &form(), &backend).unwrap();

        assert_eq!(
            panel.indicator(),
            &StatusIndicator::Failure("Access denied".to_string())
        );
    }

    #[test]
    fn form_change_clears_result() {
        let mut panel = ConnectionTestPanel::new();
        let ticket = panel.begin_test(&form());
        panel.complete_test(&ticket, Ok(()));

        panel.on_form_changed();

        assert_eq!(panel.indicator(), &StatusIndicator::Idle);
    }

    #[test]
    fn result_of_edited_form_is_ignored() {
        let mut panel = ConnectionTestPanel::new();
        let ticket = panel.begin_test(&form());
        assert!(panel.indicator().is_loading());

        panel.on_form_changed();
        let completion = panel.complete_test(&ticket, Ok(()));

        assert_eq!(completion, Completion::Stale);
        assert_eq!(panel.indicator(), &StatusIndicator::Idle);
    }
}
