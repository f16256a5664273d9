//! Entity structs for Lumen domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.

mod research;

pub use research::ResearchItem;
