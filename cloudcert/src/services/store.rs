use cloudcert_core::error::AppError;

use crate::models::Document;
use crate::services::fingerprint;

/// Ordered, in-memory document collection. Insertion order is
/// most-recent-first; records are never removed and decided records are
/// never re-opened.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Prepends a fully-formed record so the newest upload displays first.
    pub fn add(&mut self, document: Document) {
        tracing::info!(
            document_id = %document.id,
            name = %document.name,
            category = document.category.label(),
            status = document.status().as_str(),
            "Document added"
        );
        self.documents.insert(0, document);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The reviewer queue: a live projection over status, never a separately
    /// maintained list. A decision removes the record on the next read.
    pub fn pending(&self) -> Vec<&Document> {
        self.documents.iter().filter(|doc| doc.is_pending()).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.documents.iter().filter(|doc| doc.is_pending()).count()
    }

    /// `Pending -> Approved`, synthesizing the verification fingerprint.
    /// Returns the updated record.
    pub fn approve(&mut self, id: &str) -> Result<Document, AppError> {
        let document = self.find_mut(id)?;
        document.approve(fingerprint::generate())?;
        tracing::info!(document_id = %document.id, "Document approved");
        Ok(document.clone())
    }

    /// `Pending -> Rejected` with the reviewer's reason. An empty reason is
    /// rejected here rather than silently dropped at the UI boundary.
    pub fn reject(&mut self, id: &str, reason: &str) -> Result<Document, AppError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "A rejection reason is required"
            )));
        }

        let document = self.find_mut(id)?;
        document.reject(reason.to_string())?;
        tracing::info!(document_id = %document.id, reason = %reason, "Document rejected");
        Ok(document.clone())
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Document, AppError> {
        self.documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Document not found: {}", id)))
    }
}
