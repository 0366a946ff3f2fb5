//! Draft state for the simulated submission forms.
//!
//! DESIGN
//! ======
//! Every form (demo request, job application, support ticket, contact) is a
//! flat map of named string fields plus one `SubmissionPhase`. The phase is a
//! single enum so idle, submitting and submitted can never overlap. The field
//! schema per form lives here as static data; rendering is generic over it.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use thiserror::Error;

/// Which form a draft belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    RequestDemo,
    ApplyNow,
    SupportTicket,
    Contact,
}

/// Input control used to render a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Url,
    TextArea,
    Select(&'static [&'static str]),
}

impl FieldKind {
    /// HTML `type` attribute for single-line inputs.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Text | Self::TextArea | Self::Select(_) => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec { name, label, kind, required, default: "" }
}

pub const TEAM_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];
pub const TICKET_CATEGORIES: &[&str] = &["Account & Billing", "Technical Issue", "Integrations", "Feature Request", "Other"];
pub const TICKET_PRIORITIES: &[&str] = &["Low", "Normal", "High", "Urgent"];

const REQUEST_DEMO_FIELDS: &[FieldSpec] = &[
    field("first_name", "First name", FieldKind::Text, true),
    field("last_name", "Last name", FieldKind::Text, true),
    field("work_email", "Work email", FieldKind::Email, true),
    field("company", "Company", FieldKind::Text, true),
    field("team_size", "Team size", FieldKind::Select(TEAM_SIZES), true),
    field("phone", "Phone", FieldKind::Tel, false),
    field("message", "What would you like to see?", FieldKind::TextArea, false),
];

const APPLY_NOW_FIELDS: &[FieldSpec] = &[
    field("full_name", "Full name", FieldKind::Text, true),
    field("email", "Email", FieldKind::Email, true),
    field("phone", "Phone", FieldKind::Tel, false),
    field("position", "Position", FieldKind::Text, true),
    field("linkedin", "LinkedIn profile", FieldKind::Url, false),
    field("portfolio", "Portfolio or website", FieldKind::Url, false),
    field("cover_letter", "Why do you want to join Cadence?", FieldKind::TextArea, true),
];

const SUPPORT_TICKET_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text, true),
    field("email", "Email", FieldKind::Email, true),
    field("category", "Category", FieldKind::Select(TICKET_CATEGORIES), true),
    FieldSpec {
        name: "priority",
        label: "Priority",
        kind: FieldKind::Select(TICKET_PRIORITIES),
        required: false,
        default: "Normal",
    },
    field("subject", "Subject", FieldKind::Text, true),
    field("description", "Describe the problem", FieldKind::TextArea, true),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text, true),
    field("email", "Email", FieldKind::Email, true),
    field("company", "Company", FieldKind::Text, false),
    field("subject", "Subject", FieldKind::Text, false),
    field("message", "Message", FieldKind::TextArea, true),
];

impl FormKind {
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::RequestDemo => REQUEST_DEMO_FIELDS,
            Self::ApplyNow => APPLY_NOW_FIELDS,
            Self::SupportTicket => SUPPORT_TICKET_FIELDS,
            Self::Contact => CONTACT_FIELDS,
        }
    }

    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::RequestDemo => "Request demo",
            Self::ApplyNow => "Submit application",
            Self::SupportTicket => "Submit ticket",
            Self::Contact => "Send message",
        }
    }

    /// Label shown on the disabled submit control while submitting.
    pub fn progress_label(self) -> &'static str {
        match self {
            Self::RequestDemo => "Scheduling...",
            Self::ApplyNow => "Submitting application...",
            Self::SupportTicket => "Submitting ticket...",
            Self::Contact => "Sending...",
        }
    }

    pub fn confirmation_title(self) -> &'static str {
        match self {
            Self::RequestDemo => "Your demo is on the way!",
            Self::ApplyNow => "Application received!",
            Self::SupportTicket => "Ticket submitted",
            Self::Contact => "Message sent!",
        }
    }

    /// Field names echoed back on the confirmation view, in display order.
    fn echoed_fields(self) -> &'static [&'static str] {
        match self {
            Self::RequestDemo => &["work_email"],
            Self::ApplyNow => &["position", "email"],
            Self::SupportTicket => &["email"],
            Self::Contact => &["name"],
        }
    }

    /// Whether completion issues a reference number.
    pub fn issues_reference(self) -> bool {
        self == Self::SupportTicket
    }
}

/// Lifecycle of a single draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("submission already in progress")]
    AlreadySubmitting,

    #[error("form was already submitted")]
    AlreadySubmitted,
}

/// Field values and submission phase for one mounted form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormDraft {
    kind: FormKind,
    values: BTreeMap<&'static str, String>,
    phase: SubmissionPhase,
    reference: Option<String>,
}

impl FormDraft {
    pub fn new(kind: FormKind) -> Self {
        let values = kind.fields().iter().map(|f| (f.name, f.default.to_owned())).collect();
        Self { kind, values, phase: SubmissionPhase::Idle, reference: None }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Value of a field; unknown names read as empty.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Update a field. Edits are ignored once submission has started.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownField` if `name` is not part of this form.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let spec = self.kind.field(name).ok_or_else(|| FormError::UnknownField(name.to_owned()))?;
        if self.phase == SubmissionPhase::Idle {
            self.values.insert(spec.name, value.into());
        }
        Ok(())
    }

    /// Required fields whose trimmed value is empty, in schema order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.kind
            .fields()
            .iter()
            .filter(|f| f.required && self.value(f.name).trim().is_empty())
            .map(|f| f.name)
            .collect()
    }

    /// Move from idle to submitting.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for the first empty required field, or
    /// `AlreadySubmitting` / `AlreadySubmitted` outside the idle phase.
    pub fn begin_submit(&mut self) -> Result<(), FormError> {
        match self.phase {
            SubmissionPhase::Submitting => return Err(FormError::AlreadySubmitting),
            SubmissionPhase::Submitted => return Err(FormError::AlreadySubmitted),
            SubmissionPhase::Idle => {}
        }
        if let Some(name) = self.missing_required().into_iter().next() {
            return Err(FormError::MissingField(name));
        }
        self.phase = SubmissionPhase::Submitting;
        Ok(())
    }

    /// Finish a pending submission. Returns `false` if none was pending.
    ///
    /// `reference` is kept only for forms that issue one (support tickets).
    pub fn complete_submit(&mut self, reference: Option<String>) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }
        self.phase = SubmissionPhase::Submitted;
        if self.kind.issues_reference() {
            self.reference = reference;
        }
        true
    }

    /// Reference issued on completion (support tickets only).
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// `(label, value)` pairs shown on the confirmation view.
    pub fn confirmation_echo(&self) -> Vec<(&'static str, String)> {
        let mut echo = Vec::new();
        if let Some(reference) = &self.reference {
            echo.push(("Ticket reference", reference.clone()));
        }
        for name in self.kind.echoed_fields() {
            if let Some(spec) = self.kind.field(name) {
                echo.push((spec.label, self.value(name).to_owned()));
            }
        }
        echo
    }
}

/// Support ticket reference: `TKT-` plus the first eight hex digits of a
/// random UUID, upper-cased.
pub fn new_ticket_reference() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("TKT-{}", id[..8].to_ascii_uppercase())
}
