//! Type-safe wrappers and enums for lineup inputs.

pub mod directive;
pub mod ids;
pub mod position;
pub mod profile;

pub use directive::InclusionDirective;
pub use ids::PlayerId;
pub use position::Position;
pub use profile::ProfileName;
