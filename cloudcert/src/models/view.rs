use serde::{Deserialize, Serialize};

use super::document::DocCategory;
use super::user::Role;

/// Top-level screens. A closed set so routing is exhaustiveness-checked
/// instead of dispatching on string labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    DocumentHub,
    CertificateUpload,
    ReviewPanel,
    Settings,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::DocumentHub => "Document Hub",
            View::CertificateUpload => "Certificate Upload",
            View::ReviewPanel => "Review Panel",
            View::Settings => "Settings",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            View::Dashboard => "At a glance overview of your academic records.",
            View::DocumentHub => "Manage and access your stored academic files.",
            View::CertificateUpload => "Earn points by verifying your external achievements.",
            View::ReviewPanel => "Approve or reject student submission requests.",
            View::Settings => "Configure your institutional profile.",
        }
    }

    /// Role required to open the view, if it is gated.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            View::CertificateUpload => Some(Role::Student),
            View::ReviewPanel => Some(Role::Teacher),
            View::Dashboard | View::DocumentHub | View::Settings => None,
        }
    }

    pub fn accessible_to(&self, role: Role) -> bool {
        self.required_role().map_or(true, |required| required == role)
    }

    /// Sidebar entries for a role, in display order.
    pub fn sidebar_for(role: Role) -> Vec<View> {
        match role {
            Role::Student => vec![
                View::Dashboard,
                View::DocumentHub,
                View::CertificateUpload,
                View::Settings,
            ],
            Role::Teacher => vec![
                View::Dashboard,
                View::ReviewPanel,
                View::DocumentHub,
                View::Settings,
            ],
        }
    }
}

/// Category selector for the Document Hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    Category(DocCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: DocCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(selected) => *selected == category,
        }
    }
}
