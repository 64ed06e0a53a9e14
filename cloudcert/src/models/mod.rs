pub mod document;
pub mod plan;
pub mod user;
pub mod view;

pub use document::{DocCategory, DocStatus, Document, ReviewState};
pub use plan::{Plan, PLANS};
pub use user::{Role, User};
pub use view::{CategoryFilter, View};
