#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use dbms_profiles::backend::FormTransport;
use dbms_profiles::backend::errors::{BackendError, BackendResult};
use dbms_profiles::services::prompt::UserPrompt;

/// Transport replaying queued responses and recording every posted body.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<BackendResult<String>>>,
    bodies: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(body.to_string()));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(BackendError::Transport(reason.to_string())));
        self
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.borrow().clone()
    }

    pub fn posts_with(&self, fragment: &str) -> usize {
        self.bodies
            .borrow()
            .iter()
            .filter(|body| body.contains(fragment))
            .count()
    }
}

impl FormTransport for ScriptedTransport {
    fn post_form(&self, body: &str) -> BackendResult<String> {
        self.bodies.borrow_mut().push(body.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Transport("no scripted response".to_string())))
    }
}

/// Prompt answering confirmations from a queue and recording every dialog.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    confirmations: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: &[bool]) -> Self {
        let prompt = Self::default();
        prompt.answers.borrow_mut().extend(answers.iter().copied());
        prompt
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
