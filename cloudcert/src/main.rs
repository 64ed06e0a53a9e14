use cloudcert::app::App;
use cloudcert::config::CloudCertConfig;
use cloudcert::models::{Role, View};
use cloudcert::workers::{CertificateSubmission, PersonalUpload, SubmissionCategory};
use cloudcert_core::error::AppError;
use cloudcert_core::observability::init_tracing;

/// Scripted walkthrough of the mock product: a student submits a certificate
/// and stores a personal file, then the teacher works the review queue.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = CloudCertConfig::load()?;
    init_tracing("cloudcert", &config.common.log_level);

    let mut app = App::new(config);

    // Student session
    app.login(Role::Student);
    app.navigate(View::CertificateUpload)?;
    let submitted = app
        .submit_certificate(CertificateSubmission {
            title: "AWS Solutions Architect".to_string(),
            category: SubmissionCategory::CategoryOne,
        })
        .await?;
    tracing::info!(
        document_id = %submitted.id,
        points = submitted.points,
        "Certificate awaiting review"
    );

    let stored = app
        .upload_personal(PersonalUpload {
            name: "Project Backup".to_string(),
            file: None,
        })
        .await?;
    tracing::info!(document_id = %stored.id, size = %stored.size, "Personal file stored");

    app.set_search_query("cert");
    tracing::info!(
        matches = app.visible_documents().len(),
        "Search results for \"cert\""
    );
    app.logout();

    // Teacher session
    app.login(Role::Teacher);
    app.navigate(View::ReviewPanel)?;
    let queue: Vec<String> = app
        .review_queue()?
        .iter()
        .map(|doc| doc.id.clone())
        .collect();
    tracing::info!(pending = queue.len(), "Review queue loaded");

    let mut decisions = queue.into_iter();
    if let Some(id) = decisions.next() {
        let approved = app.approve(&id)?;
        tracing::info!(
            document_id = %approved.id,
            fingerprint = approved.fingerprint().unwrap_or_default(),
            "Submission approved"
        );
    }
    if let Some(id) = decisions.next() {
        let rejected = app.reject(&id, "Invalid signature. Please re-upload with official seal.")?;
        tracing::info!(
            document_id = %rejected.id,
            reason = rejected.rejection_reason().unwrap_or_default(),
            "Submission rejected"
        );
    }

    tracing::info!(
        pending = app.pending_count(),
        total = app.documents().len(),
        "Review pass complete"
    );

    let snapshot = serde_json::to_string_pretty(app.documents())
        .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))?;
    println!("{snapshot}");

    Ok(())
}
