//! Contact form handling.
//!
//! The form is checked only for blank required fields (the server-side
//! equivalent of the browser's `required`). Submission waits for a fixed delay
//! and then reports success; the data is never stored or sent anywhere.

use std::time::Duration;

use serde::Deserialize;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::info;

use crate::i18n::{Localized, Text, UiStrings};

/// Kind of project a visitor wants to discuss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Residential,
    Commercial,
    Institutional,
    Interior,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Institutional,
        ProjectType::Interior,
        ProjectType::Other,
    ];

    /// Form value of the option.
    pub fn value(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Institutional => "institutional",
            ProjectType::Interior => "interior",
            ProjectType::Other => "other",
        }
    }

    pub fn label(&self) -> Text {
        match self {
            ProjectType::Residential => Localized::new("Residencial", "Residential"),
            ProjectType::Commercial => Localized::new("Comercial", "Commercial"),
            ProjectType::Institutional => Localized::new("Institucional", "Institutional"),
            ProjectType::Interior => Localized::new("Interiores", "Interior"),
            ProjectType::Other => Localized::new("Outro", "Other"),
        }
    }

    pub fn from_value(value: &str) -> Option<ProjectType> {
        ProjectType::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

/// Raw form body as posted by the browser.
///
/// Every field defaults to empty so a partially filled form can be re-rendered
/// with what the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, rename = "projectType")]
    pub project_type: String,
    #[serde(default)]
    pub message: String,
}

/// Required form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    ProjectType,
    Message,
}

impl ContactField {
    pub fn label(&self, strings: &UiStrings) -> &'static str {
        match self {
            ContactField::Name => strings.field_name,
            ContactField::Email => strings.field_email,
            ContactField::ProjectType => strings.field_project_type,
            ContactField::Message => strings.field_message,
        }
    }
}

/// A form with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_type: ProjectType,
    pub message: String,
}

impl ContactForm {
    /// Check the required fields.
    ///
    /// # Returns
    /// * `Ok(ContactRequest)` when all required fields are filled
    /// * `Err(fields)` listing the blank required fields in form order; a
    ///   project type outside the option list counts as blank
    pub fn validate(&self) -> Result<ContactRequest, Vec<ContactField>> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push(ContactField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(ContactField::Email);
        }
        let project_type = ProjectType::from_value(self.project_type.trim());
        if project_type.is_none() {
            missing.push(ContactField::ProjectType);
        }
        if self.message.trim().is_empty() {
            missing.push(ContactField::Message);
        }

        match project_type {
            Some(project_type) if missing.is_empty() => {
                let phone = self.phone.trim();
                Ok(ContactRequest {
                    name: self.name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    phone: (!phone.is_empty()).then(|| phone.to_string()),
                    project_type,
                    message: self.message.trim().to_string(),
                })
            }
            _ => Err(missing),
        }
    }
}

/// Observable state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Done,
}

impl SubmissionStatus {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionStatus::Done)
    }
}

/// Default simulated submission delay.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Simulated submission: waits a fixed delay, then reports success.
#[derive(Debug, Clone)]
pub struct ContactSubmitter {
    delay: Duration,
}

impl ContactSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Submit a validated request.
    ///
    /// Sleeps for the configured delay and returns `Done`. When `observer` is
    /// given, `Pending` is published on it before the delay and `Done` after.
    /// There is no failure path and no cancellation.
    pub async fn submit(
        &self,
        request: &ContactRequest,
        observer: Option<&watch::Sender<SubmissionStatus>>,
    ) -> SubmissionStatus {
        if let Some(status) = observer {
            status.send_replace(SubmissionStatus::Pending);
        }

        info!(
            project_type = request.project_type.value(),
            has_phone = request.phone.is_some(),
            "Contact form submitted"
        );
        sleep(self.delay).await;

        if let Some(status) = observer {
            status.send_replace(SubmissionStatus::Done);
        }
        SubmissionStatus::Done
    }
}

impl Default for ContactSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}
