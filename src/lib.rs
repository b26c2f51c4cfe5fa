//! # Villa Pirritx Documentation
//!
//! Adoption site of the Villa Pirritx animal shelter.
//!
//! ## Notes
//!
//! ### Backend
//! - Django REST framework under `/api/`
//! - List views use the short serializer, so most descriptive fields only show up on `animales/{id}/`
//! - Field names follow the Django models, `tamaño` included
//!
//! ### Crates
//! - `shelter`: API client, envelope detection, normalization
//! - `listing`: adoption page state, fallback samples, sharing

pub mod listing;
