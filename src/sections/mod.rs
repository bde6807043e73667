//! Local policy sections
//!
//! Each section checks a candidate password against one organizational rule
//! that the external policy engine cannot express.

mod complexity;
mod display_name;
mod email;

pub use complexity::complexity_section;
pub use display_name::display_name_section;
pub use email::email_section;

/// Result type for section check functions.
/// - `Ok(Some(reason))` - Section failed with reason
/// - `Ok(None)` - Section passed
/// - `Err(())` - Fatal error during evaluation
pub type SectionResult = Result<Option<String>, ()>;
