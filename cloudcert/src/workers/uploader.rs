use std::time::Duration;

use cloudcert_core::error::AppError;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::config::SimulatorConfig;
use crate::models::{DocCategory, Document, ReviewState};
use crate::services::fingerprint;

/// Credits awarded for a certificate submission. Every submission category
/// currently maps to the same award.
const CERTIFICATE_POINTS: u32 = 25;
/// Size label used when no file is attached to a personal upload.
const DEFAULT_PERSONAL_SIZE: &str = "1.0 MB";
const DEFAULT_EXTENSION: &str = "pdf";

/// Submission categories offered by the certificate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionCategory {
    CategoryOne,
    CategoryTwo,
    CategoryThree,
}

impl SubmissionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionCategory::CategoryOne => "Category 1",
            SubmissionCategory::CategoryTwo => "Category 2",
            SubmissionCategory::CategoryThree => "Category 3",
        }
    }

    pub fn credit_points(&self) -> u32 {
        match self {
            SubmissionCategory::CategoryOne => CERTIFICATE_POINTS,
            SubmissionCategory::CategoryTwo => CERTIFICATE_POINTS,
            SubmissionCategory::CategoryThree => CERTIFICATE_POINTS,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CertificateSubmission {
    #[validate(length(min = 1, message = "Document title is required"))]
    pub title: String,
    pub category: SubmissionCategory,
}

/// Client-side view of a selected file: only its name and size are read,
/// never its contents.
#[derive(Debug, Clone)]
pub struct AttachedFile {
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Validate)]
pub struct PersonalUpload {
    #[validate(length(min = 1, message = "File name is required"))]
    pub name: String,
    pub file: Option<AttachedFile>,
}

/// Synthesizes new document records after an artificial delay standing in
/// for network latency. Both flows validate their input up front and are
/// cancellable through the owning session's token.
#[derive(Debug, Clone)]
pub struct UploadSimulator {
    config: SimulatorConfig,
    cancel: CancellationToken,
}

impl UploadSimulator {
    pub fn new(config: SimulatorConfig, cancel: CancellationToken) -> Self {
        Self { config, cancel }
    }

    /// Certificate submission path: enters the review workflow as Pending.
    pub async fn submit_certificate(
        &self,
        submission: &CertificateSubmission,
        owner: &str,
    ) -> Result<Document, AppError> {
        submission.validate()?;

        tracing::info!(
            title = %submission.title,
            category = submission.category.label(),
            "Certificate submitted, validating metadata"
        );
        self.simulate_latency(self.config.certificate_delay()).await?;

        let size = format!("{:.1} MB", thread_rng().gen_range(0.0_f64..5.0));
        let document = Document::new(
            format!("{}.pdf", submission.title),
            DocCategory::Certificate,
            ReviewState::Pending,
            submission.category.credit_points(),
            size,
            owner.to_string(),
        );

        tracing::info!(document_id = %document.id, "Certificate queued for review");
        Ok(document)
    }

    /// Personal file path: bypasses review and enters directly as Approved,
    /// fingerprint included, with zero credit points.
    pub async fn upload_personal(
        &self,
        upload: &PersonalUpload,
        owner: &str,
    ) -> Result<Document, AppError> {
        upload.validate()?;

        tracing::info!(
            name = %upload.name,
            attached = upload.file.is_some(),
            "Personal file upload started"
        );
        self.simulate_latency(self.config.personal_delay()).await?;

        let extension = upload
            .file
            .as_ref()
            .and_then(|file| file.name.rsplit_once('.'))
            .map_or(DEFAULT_EXTENSION.to_string(), |(_, ext)| ext.to_string());
        let size = upload.file.as_ref().map_or_else(
            || DEFAULT_PERSONAL_SIZE.to_string(),
            |file| format!("{:.1} MB", file.size_bytes as f64 / 1024.0 / 1024.0),
        );

        let document = Document::new(
            format!("{}.{}", upload.name, extension),
            DocCategory::PersonalFile,
            ReviewState::Approved {
                fingerprint: fingerprint::generate(),
            },
            0,
            size,
            owner.to_string(),
        );

        tracing::info!(document_id = %document.id, size = %document.size, "Personal file stored");
        Ok(document)
    }

    /// Stand-in for a network round trip. Resolves to `Cancelled` when the
    /// owning session is torn down mid-flight, so no stale state is written.
    async fn simulate_latency(&self, delay: Duration) -> Result<(), AppError> {
        tokio::select! {
            _ = self.cancel.cancelled() => {
                tracing::info!("Simulated upload cancelled");
                Err(AppError::Cancelled)
            }
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}
