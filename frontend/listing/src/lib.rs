//! # Adoption Listing
//!
//! State behind the adoption page.
//!
//! ## Fallback
//!
//! The page is never left empty without an explanation:
//! - live data when the API has animals
//! - the built-in samples, with an [`Advisory`], when it has none or cannot be reached
//! - filtered samples when a filter comes back empty or fails
//!
//! ## Urgent
//!
//! Urgent animals come from the full listing filtered locally. If neither the
//! API nor the samples have one, the user is told so and the full listing is
//! loaded again.
pub mod host;
pub mod samples;
pub mod share;
pub mod state;

pub use host::{Host, HostError, Notice, SharePayload, TerminalHost};
pub use share::ShareOutcome;
pub use state::{Advisory, Listing, Phase};
