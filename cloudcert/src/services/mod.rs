pub mod fingerprint;
pub mod projection;
pub mod session;
pub mod store;

pub use session::Session;
pub use store::DocumentStore;
