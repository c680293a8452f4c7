use dbms_profiles::backend::FormBackend;
use dbms_profiles::backend::errors::TRANSPORT_FAILURE_NOTICE;
use dbms_profiles::domain::profile_type::{
    FieldGroup, FieldGroupKind, ProfileType, ProfileTypeKey, RecordAction,
};
use dbms_profiles::domain::types::{DriverTypeId, FieldName, ProfileId};
use dbms_profiles::services::editor::{
    ProfileTypeEditor, delete_profile_type, save_profile_type,
};
use dbms_profiles::services::{
    Completion, DELETE_CONFIRMATION, DELETE_SUCCESS_MESSAGE, SAVE_SUCCESS_MESSAGE,
};

mod common;

use common::{ScriptedPrompt, ScriptedTransport};

fn key() -> ProfileTypeKey {
    ProfileTypeKey::new(ProfileId::new(3).unwrap(), DriverTypeId::new(7).unwrap())
}

fn group(fields: &[(&str, &str)]) -> FieldGroup {
    FieldGroup::new(
        fields
            .iter()
            .map(|(name, value)| (FieldName::new(*name).unwrap(), *value)),
    )
}

fn editor_with(exists: bool, host: &str) -> ProfileTypeEditor {
    let mut editor = ProfileTypeEditor::new();
    editor.bind(ProfileType::new(
        key(),
        group(&[("host", host), ("port", "3306")]),
        group(&[("charset", "utf8")]),
        exists,
    ));
    editor
}

#[test]
fn cancelled_create_restores_fields_and_create_control() {
    let mut editor = editor_with(false, "");

    editor.begin_create(key()).unwrap();
    assert!(editor.fields_enabled(key()).unwrap());
    assert_eq!(
        editor.controls(key()).unwrap().visible(),
        vec![RecordAction::Save, RecordAction::Cancel]
    );

    editor
        .set_field(key(), FieldGroupKind::Standard, "host", "db.example.com")
        .unwrap();
    editor.cancel(key()).unwrap();

    let record = editor.record(key()).unwrap();
    assert_eq!(record.field(FieldGroupKind::Standard, "host"), Some(""));
    assert!(!record.fields_enabled());
    assert_eq!(record.controls().visible(), vec![RecordAction::Create]);
}

#[test]
fn save_posts_both_groups_and_returns_to_viewing() {
    let mut editor = editor_with(true, "localhost");
    let backend = FormBackend::new(ScriptedTransport::new().respond(r#"{"success":1}"#));
    let prompt = ScriptedPrompt::new();

    editor.begin_edit(key()).unwrap();
    editor
        .set_field(key(), FieldGroupKind::Standard, "host", "db.example.com")
        .unwrap();
    let completion = save_profile_type(&mut editor, key(), &backend, &prompt).unwrap();

    assert_eq!(completion, Completion::Applied);
    assert_eq!(prompt.alerts(), vec![SAVE_SUCCESS_MESSAGE.to_string()]);

    let bodies = backend.transport().bodies();
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].starts_with("rm=profile_detail_save&profile=3&type=7&JSONDATA="));
    assert!(bodies[0].contains("db.example.com"));
    assert!(bodies[0].contains("charset"));

    let record = editor.record(key()).unwrap();
    assert!(record.exists());
    assert!(!record.fields_enabled());
    assert_eq!(
        record.controls().visible(),
        vec![RecordAction::Edit, RecordAction::Delete]
    );
}

#[test]
fn rejected_save_keeps_user_values() {
    let mut editor = editor_with(true, "localhost");
    let backend = FormBackend::new(
        ScriptedTransport::new().respond(r#"{"success":false,"error":"Port is invalid"}"#),
    );
    let prompt = ScriptedPrompt::new();

    editor.begin_edit(key()).unwrap();
    editor
        .set_field(key(), FieldGroupKind::Standard, "port", "abc")
        .unwrap();
    let completion = save_profile_type(&mut editor, key(), &backend, &prompt).unwrap();

    assert_eq!(completion, Completion::Rejected("Port is invalid".to_string()));
    assert_eq!(prompt.alerts(), vec!["Port is invalid".to_string()]);

    let record = editor.record(key()).unwrap();
    assert!(record.is_editing());
    assert_eq!(record.field(FieldGroupKind::Standard, "port"), Some("abc"));
}

#[test]
fn unreachable_backend_shows_generic_notice() {
    let mut editor = editor_with(true, "localhost");
    let backend = FormBackend::new(ScriptedTransport::new().fail("connection refused"));
    let prompt = ScriptedPrompt::new();

    editor.begin_edit(key()).unwrap();
    save_profile_type(&mut editor, key(), &backend, &prompt).unwrap();

    assert_eq!(prompt.alerts(), vec![TRANSPORT_FAILURE_NOTICE.to_string()]);
    assert!(editor.record(key()).unwrap().is_editing());
}

#[test]
fn confirmed_delete_clears_fields() {
    let mut editor = editor_with(true, "localhost");
    let backend = FormBackend::new(ScriptedTransport::new().respond(r#"{"success":true}"#));
    let prompt = ScriptedPrompt::answering(&[true]);

    let completion = delete_profile_type(&mut editor, key(), &backend, &prompt).unwrap();

    assert_eq!(completion, Completion::Applied);
    assert_eq!(prompt.confirmations(), vec![DELETE_CONFIRMATION.to_string()]);
    assert_eq!(prompt.alerts(), vec![DELETE_SUCCESS_MESSAGE.to_string()]);
    assert_eq!(
        backend.transport().bodies(),
        vec!["rm=profile_detail_save&profile=3&type=7&delete=1".to_string()]
    );

    let record = editor.record(key()).unwrap();
    assert!(!record.exists());
    assert_eq!(record.field(FieldGroupKind::Standard, "host"), Some(""));
    assert_eq!(record.controls().visible(), vec![RecordAction::Create]);
}

#[test]
fn declined_delete_sends_nothing() {
    let mut editor = editor_with(true, "localhost");
    let backend = FormBackend::new(ScriptedTransport::new());
    let prompt = ScriptedPrompt::answering(&[false]);

    let completion = delete_profile_type(&mut editor, key(), &backend, &prompt).unwrap();

    assert_eq!(completion, Completion::Declined);
    assert!(backend.transport().bodies().is_empty());
    assert_eq!(
        editor.record(key()).unwrap().field(FieldGroupKind::Standard, "host"),
        Some("localhost")
    );
}
