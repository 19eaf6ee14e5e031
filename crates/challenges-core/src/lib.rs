//! challenges-core: Challenge configuration model for the admin client
//!
//! This crate contains the typed challenge definition, the ordered-list
//! editing helpers for goals, tiers and match rules, goal import from
//! presets and CSV text, and the validation run before a draft is submitted.

pub mod criteria;
pub mod errors;
pub mod export;
pub mod goals;
pub mod presets;
pub mod tiers;
pub mod types;
pub mod validation;

pub use criteria::*;
pub use errors::*;
pub use export::*;
pub use goals::*;
pub use presets::Preset;
pub use tiers::*;
pub use types::*;
pub use validation::*;
