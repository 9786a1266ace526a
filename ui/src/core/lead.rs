//! Lead form model: the field bag, its submission status and the write.

use api::{Fields, LeadStore, StoreError, LEADS_COLLECTION};
use dioxus::logger::tracing::{error, info};

/// Farmer contact details, all free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub village: String,
    pub district: String,
    pub requirement: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Phone,
    Email,
    Village,
    District,
    Requirement,
}

impl LeadField {
    /// Form order.
    pub const ALL: [LeadField; 6] = [
        LeadField::Name,
        LeadField::Phone,
        LeadField::Email,
        LeadField::Village,
        LeadField::District,
        LeadField::Requirement,
    ];

    /// Document field name, also the form control name.
    pub fn key(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Phone => "phone",
            LeadField::Email => "email",
            LeadField::Village => "village",
            LeadField::District => "district",
            LeadField::Requirement => "requirement",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, LeadField::Email)
    }

    /// HTML input type; `None` renders a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            LeadField::Phone => Some("tel"),
            LeadField::Email => Some("email"),
            LeadField::Requirement => None,
            LeadField::Name | LeadField::Village | LeadField::District => Some("text"),
        }
    }
}

impl LeadRecord {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Phone => &self.phone,
            LeadField::Email => &self.email,
            LeadField::Village => &self.village,
            LeadField::District => &self.district,
            LeadField::Requirement => &self.requirement,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Phone => &mut self.phone,
            LeadField::Email => &mut self.email,
            LeadField::Village => &mut self.village,
            LeadField::District => &mut self.district,
            LeadField::Requirement => &mut self.requirement,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The stored document: exactly the six fields, nothing added.
    pub fn to_fields(&self) -> Fields {
        LeadField::ALL
            .into_iter()
            .map(|f| (f.key().to_string(), self.get(f).to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// Form state owned by the page shell so it outlives the form slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub fields: LeadRecord,
    pub status: SubmitStatus,
    pub success_visible: bool,
}

impl LeadForm {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Marks a write as outstanding and hands back the record to send.
    /// Returns `None` while another write is still in flight.
    pub fn begin_submit(&mut self) -> Option<LeadRecord> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.fields.clone())
    }

    /// Applies the outcome of the write started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, outcome: &Result<(), StoreError>) {
        match outcome {
            Ok(()) => {
                self.fields = LeadRecord::default();
                self.status = SubmitStatus::Idle;
                self.success_visible = true;
            }
            Err(err) => {
                self.status = SubmitStatus::Failed(err.to_string());
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.success_visible = false;
    }
}

/// Appends `record` to the leads collection.
pub async fn submit_lead(store: &dyn LeadStore, record: &LeadRecord) -> Result<(), StoreError> {
    let outcome = store.append(LEADS_COLLECTION, record.to_fields()).await;
    match &outcome {
        Ok(()) => info!(collection = LEADS_COLLECTION, "lead submitted"),
        Err(err) => error!(collection = LEADS_COLLECTION, "lead submission failed: {err}"),
    }
    outcome
}
