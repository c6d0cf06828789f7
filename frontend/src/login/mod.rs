//! Credential submission: everything between the form and the browser.
//!
//! The submitter is plain async Rust over an [`ApiClient`], the browser side
//! (fetch, alert, navigation) lives in [`browser`].

mod action;
pub mod browser;
mod client;
mod credentials;
mod error;
mod gate;
mod submitter;

pub use action::{Action, Operation};
pub use client::{ApiClient, Reply};
pub use credentials::Credentials;
pub use error::{SubmitError, TransportError};
pub use gate::SubmissionGate;
pub use submitter::Submitter;
