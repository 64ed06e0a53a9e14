use chrono::{NaiveDate, Utc};
use cloudcert_core::error::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocCategory {
    FeeReceipt,
    HallTicket,
    ExamResult,
    Certificate,
    PersonalFile,
}

impl DocCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DocCategory::FeeReceipt => "Fee Receipt",
            DocCategory::HallTicket => "Hall Ticket",
            DocCategory::ExamResult => "Result",
            DocCategory::Certificate => "Certificate",
            DocCategory::PersonalFile => "Personal File",
        }
    }

    /// All categories, in the order the hub's filter bar presents them.
    pub fn all() -> [DocCategory; 5] {
        [
            DocCategory::FeeReceipt,
            DocCategory::HallTicket,
            DocCategory::ExamResult,
            DocCategory::Certificate,
            DocCategory::PersonalFile,
        ]
    }
}

/// Flat review status, derived from [`ReviewState`] for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocStatus::Pending => "Pending",
            DocStatus::Approved => "Approved",
            DocStatus::Rejected => "Rejected",
        }
    }
}

/// Review lifecycle of a document. Each state carries exactly the fields
/// valid for it: an approved document always has a fingerprint and a rejected
/// one always has a reason, so the two can never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ReviewState {
    Pending,
    Approved { fingerprint: String },
    Rejected { reason: String },
}

impl ReviewState {
    pub fn status(&self) -> DocStatus {
        match self {
            ReviewState::Pending => DocStatus::Pending,
            ReviewState::Approved { .. } => DocStatus::Approved,
            ReviewState::Rejected { .. } => DocStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub category: DocCategory,
    pub review: ReviewState,
    pub upload_date: NaiveDate,
    pub points: u32,
    /// Formatted size label ("2.4 MB"), not a true byte count.
    pub size: String,
    /// Display name of the submitting user; a label, not a key.
    pub owner: String,
}

impl Document {
    pub fn new(
        name: String,
        category: DocCategory,
        review: ReviewState,
        points: u32,
        size: String,
        owner: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            review,
            upload_date: Utc::now().date_naive(),
            points,
            size,
            owner,
        }
    }

    pub fn status(&self) -> DocStatus {
        self.review.status()
    }

    pub fn is_pending(&self) -> bool {
        self.review == ReviewState::Pending
    }

    pub fn fingerprint(&self) -> Option<&str> {
        match &self.review {
            ReviewState::Approved { fingerprint } => Some(fingerprint),
            _ => None,
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match &self.review {
            ReviewState::Rejected { reason } => Some(reason),
            _ => None,
        }
    }

    /// `Pending -> Approved`, attaching the verification fingerprint.
    /// Approved and Rejected are terminal; a second decision is a conflict.
    pub(crate) fn approve(&mut self, fingerprint: String) -> Result<(), AppError> {
        match self.review {
            ReviewState::Pending => {
                self.review = ReviewState::Approved { fingerprint };
                Ok(())
            }
            _ => Err(self.already_decided()),
        }
    }

    /// `Pending -> Rejected`, attaching the reviewer's reason.
    pub(crate) fn reject(&mut self, reason: String) -> Result<(), AppError> {
        match self.review {
            ReviewState::Pending => {
                self.review = ReviewState::Rejected { reason };
                Ok(())
            }
            _ => Err(self.already_decided()),
        }
    }

    fn already_decided(&self) -> AppError {
        AppError::Conflict(anyhow::anyhow!(
            "Document {} has already been decided ({})",
            self.id,
            self.status().as_str()
        ))
    }
}
