//! CloudCert: an in-memory academic document vault.
//!
//! Students submit certificates for credit and store personal files; a
//! teacher works through the pending queue, approving submissions (attaching
//! a verification fingerprint) or rejecting them (attaching a reason).
//! Everything lives in one process; simulated latency stands in for the
//! network.
pub mod app;
pub mod config;
pub mod models;
pub mod seed;
pub mod services;
pub mod workers;
