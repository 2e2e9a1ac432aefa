//! Stationery advisor chat for Ink & Paper.
//!
//! An [`AdvisorSession`] keeps the transcript and asks an [`Advisor`] for
//! each reply. [`GeminiAdvisor`] talks to the Gemini REST API; tests and
//! offline front ends plug in their own implementation.
//!
//! ```rust,no_run
//! use inkpaper_advisor::prelude::*;
//! use inkpaper_commerce::catalog::Catalog;
//!
//! # async fn run() -> Result<(), AdvisorError> {
//! let instruction = system_instruction(&Catalog::ink_and_paper(), "Penelope", "Ink & Paper")?;
//! let config = GeminiConfig::default().with_api_key_from_env(DEFAULT_API_KEY_ENV);
//! let mut session = AdvisorSession::new(GeminiAdvisor::new(config, instruction), "Penelope");
//!
//! if let Some(reply) = session.send("A gift for a watercolour painter?").await {
//!     println!("{}", reply.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod error;
pub mod gemini;
pub mod message;
pub mod prompt;
pub mod session;

pub use advisor::Advisor;
pub use error::{AdvisorError, AdvisorResult};
pub use session::{AdvisorSession, FALLBACK_REPLY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::advisor::Advisor;
    pub use crate::error::{AdvisorError, AdvisorResult};
    pub use crate::gemini::{
        GeminiAdvisor, GeminiConfig, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
        DEFAULT_TEMPERATURE,
    };
    pub use crate::message::{ChatMessage, ChatRole};
    pub use crate::prompt::{system_instruction, welcome_message};
    pub use crate::session::{AdvisorSession, FALLBACK_REPLY, WELCOME_ID};
}
