//! # Adoption Page
//!
//! What the adoption page does with the API.
//!
//! ## Load
//!
//! - `GET animales/`
//! - Non-empty: show it
//! - Empty: show the samples, advisory "no hay animales en el servidor"
//! - Error: show the samples, advisory "no se pudo conectar"
//!
//! ## Filter by Type
//!
//! - `GET animales/?tipo_animal=gato`
//! - Empty or error: samples of that type, compared ignoring case
//! - Can end up with nothing on screen, samples are all dogs
//!
//! ## Urgent
//!
//! - `GET animales/` then keep `urgente`
//! - Nothing urgent: urgent samples with an advisory
//! - Still nothing: tell the user, load the full listing again
//!
//! ## Share
//!
//! - Native share if the host has one, failures only logged
//! - Otherwise clipboard, then legacy copy, then notify the user
//!
//!
//!
//! ## Samples
//!
//! | id | nombre | raza          | urgente |
//! |----|--------|---------------|---------|
//! | 1  | Paco   | Labrador      | no      |
//! | 2  | Negu   | Pug           | sí      |
//! | 3  | Luna   | Pastor Alemán | no      |
//!
//! ## Overlapping Actions
//!
//! Actions borrow the listing mutably, one at a time. Clicking two filters
//! quickly cannot leave the older result on screen.
