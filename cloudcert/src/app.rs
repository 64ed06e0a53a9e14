use cloudcert_core::error::AppError;
use tokio_util::sync::CancellationToken;

use crate::config::CloudCertConfig;
use crate::models::{plan, CategoryFilter, DocCategory, Document, Plan, Role, User, View, PLANS};
use crate::seed;
use crate::services::projection;
use crate::services::{DocumentStore, Session};
use crate::workers::{
    CertificateSubmission, PaymentSimulator, PersonalUpload, PlanUpgrade, UploadSimulator,
};

/// Top-level application state: the document collection, the current session,
/// and the router state, owned in one place. Every mutation flows through the
/// operations below; no component holds a private copy that could drift.
pub struct App {
    config: CloudCertConfig,
    store: DocumentStore,
    session: Session,
    active_view: View,
    active_filter: CategoryFilter,
    search_query: String,
    /// Cancelled on logout so in-flight simulated tasks resolve to
    /// `Cancelled` instead of firing into state that is no longer visible.
    session_token: CancellationToken,
}

impl App {
    pub fn new(config: CloudCertConfig) -> Self {
        Self::with_documents(config, seed::initial_documents())
    }

    pub fn with_documents(config: CloudCertConfig, documents: Vec<Document>) -> Self {
        Self {
            config,
            store: DocumentStore::new(documents),
            session: Session::default(),
            active_view: View::Dashboard,
            active_filter: CategoryFilter::All,
            search_query: String::new(),
            session_token: CancellationToken::new(),
        }
    }

    // --- Session ---

    pub fn login(&mut self, role: Role) -> &User {
        self.reset_router_state();
        self.session.login(role)
    }

    pub fn logout(&mut self) {
        self.session_token.cancel();
        self.session_token = CancellationToken::new();
        self.session.logout();
        self.reset_router_state();
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    // --- Routing ---

    /// Switches the active view, enforcing role gating. Opening the Document
    /// Hub through navigation resets the category filter.
    pub fn navigate(&mut self, view: View) -> Result<(), AppError> {
        let user = self.session.require_user()?;
        if !view.accessible_to(user.role) {
            return Err(AppError::Forbidden(anyhow::anyhow!(
                "The {} view is not available to the {} role",
                view.label(),
                user.role.as_str()
            )));
        }

        if view == View::DocumentHub {
            self.active_filter = CategoryFilter::All;
        }
        self.active_view = view;
        Ok(())
    }

    /// Quick filter: jumps to the Document Hub and narrows it to one
    /// category in a single step.
    pub fn filter_by(&mut self, category: DocCategory) -> Result<(), AppError> {
        self.session.require_user()?;
        self.active_view = View::DocumentHub;
        self.active_filter = CategoryFilter::Category(category);
        Ok(())
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn active_filter(&self) -> CategoryFilter {
        self.active_filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    // --- Projections ---

    pub fn documents(&self) -> &[Document] {
        self.store.documents()
    }

    /// The hub's view of the collection under the current query and filter.
    pub fn visible_documents(&self) -> Vec<&Document> {
        projection::filter_documents(self.store.documents(), &self.search_query, self.active_filter)
    }

    pub fn pending_count(&self) -> usize {
        self.store.pending_count()
    }

    /// The live pending queue, visible to the teacher role only.
    pub fn review_queue(&self) -> Result<Vec<&Document>, AppError> {
        self.session.require_role(Role::Teacher)?;
        Ok(self.store.pending())
    }

    // --- Review workflow ---

    pub fn approve(&mut self, id: &str) -> Result<Document, AppError> {
        self.session.require_role(Role::Teacher)?;
        self.store.approve(id)
    }

    pub fn reject(&mut self, id: &str, reason: &str) -> Result<Document, AppError> {
        self.session.require_role(Role::Teacher)?;
        self.store.reject(id, reason)
    }

    // --- Uploads ---

    /// Submits a certificate for review. Student only; the new record enters
    /// the collection at index 0 once the simulated validation completes.
    pub async fn submit_certificate(
        &mut self,
        submission: CertificateSubmission,
    ) -> Result<Document, AppError> {
        let owner = self.session.require_role(Role::Student)?.name.clone();
        let document = self.uploader().submit_certificate(&submission, &owner).await?;
        self.store.add(document.clone());
        Ok(document)
    }

    /// Stores a personal file. Available to any logged-in user; bypasses the
    /// review workflow entirely.
    pub async fn upload_personal(&mut self, upload: PersonalUpload) -> Result<Document, AppError> {
        let owner = self.session.require_user()?.name.clone();
        let document = self.uploader().upload_personal(&upload, &owner).await?;
        self.store.add(document.clone());
        Ok(document)
    }

    // --- Premium ---

    pub fn plans(&self) -> &'static [Plan] {
        PLANS
    }

    /// Runs the simulated payment flow and applies the purchased plan's
    /// storage allocation to the current user.
    pub async fn upgrade_plan(&mut self, plan_name: &str) -> Result<PlanUpgrade, AppError> {
        self.session.require_user()?;
        let selected = plan::find(plan_name)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Unknown plan: {}", plan_name)))?;

        let upgrade = self.payments().process(selected).await?;
        if let Some(user) = self.session.current_user_mut() {
            user.storage_limit_gb = upgrade.storage_limit_gb;
        }
        Ok(upgrade)
    }

    // --- Internals ---

    fn uploader(&self) -> UploadSimulator {
        UploadSimulator::new(self.config.simulator.clone(), self.session_token.child_token())
    }

    fn payments(&self) -> PaymentSimulator {
        PaymentSimulator::new(self.config.simulator.clone(), self.session_token.child_token())
    }

    fn reset_router_state(&mut self) {
        self.active_view = View::Dashboard;
        self.active_filter = CategoryFilter::All;
        self.search_query.clear();
    }
}
