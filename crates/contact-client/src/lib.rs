//! Contact form client
//!
//! Drives the visitor-facing side of the contact pipeline: collect input,
//! validate it with the same rules the server uses, send it once, and turn
//! the outcome into a notification.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`SubmissionClient`] | One `POST /api/contact` per call, outcome as [`ClientError`] or receipt |
//! | [`ContactForm`] | Input state, field errors and the in-flight flag |
//! | [`Notifier`] / [`Translator`] | Seams for toasts and localized text |
//!
//! ## Example
//!
//! ```rust,no_run
//! use contact_client::{ContactForm, Notice, Notifier, StaticTranslator, SubmissionClient};
//!
//! struct Stdout;
//!
//! impl Notifier for Stdout {
//!     fn notify(&self, notice: Notice) {
//!         println!("{}: {}", notice.title, notice.description);
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> contact_client::Result<()> {
//!     let client = SubmissionClient::new("http://localhost:8080")?;
//!     let form = ContactForm::new();
//!     form.set("name", "Ada Lovelace");
//!     form.set("email", "ada@example.com");
//!     form.set("message", "Interested in your consulting services.");
//!
//!     let receipt = form.submit(&client, &Stdout, &StaticTranslator::english()).await?;
//!     println!("submission #{}", receipt.id);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod feedback;
pub mod form;

pub use client::{ClientConfig, SubmissionClient, SubmissionClientBuilder, SubmissionReceipt};
pub use error::{ClientError, Result};
pub use feedback::{Notice, NoticeKind, Notifier, StaticTranslator, Translator};
pub use form::{ContactForm, SubmitIndicator};
