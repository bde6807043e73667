//! Policy-constrained password generation and reset flows
//!
//! This library generates temporary passwords that satisfy both an
//! externally managed password policy and a set of local organizational
//! rules, then drives the external identity service to apply them. The
//! directory, policy validator and identity service are trait seams; the
//! host product supplies the implementations.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation support and a channel-based
//!   generation variant
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RESET_MAX_ATTEMPTS`: Candidate attempt budget for the generation
//!   loop (`0` for unbounded; default: 100000)
//!
//! # Example
//!
//! ```rust,ignore
//! use pwd_reset::{PasswordGenerator, GeneratorConfig};
//!
//! let generator = PasswordGenerator::new(&directory, &validator);
//!
//! #[cfg(feature = "async")]
//! let password = generator.generate("jlee", None)?;
//!
//! #[cfg(not(feature = "async"))]
//! let password = generator.generate("jlee")?;
//! ```

// Internal modules
mod charset;
mod collaborators;
mod config;
mod error;
mod generator;
mod reset;
mod sections;
mod types;

// Public API
pub use charset::{DEFAULT_ALPHABET, DEFAULT_SYMBOLS, derive_symbols, effective_alphabet};
pub use collaborators::{IdentityService, PolicyValidator, UserDirectory};
pub use config::{DEFAULT_MAX_ATTEMPTS, GeneratorConfig, MAX_ATTEMPTS_ENV};
pub use error::{
    DirectoryError, GenerateError, IdentityError, ResetError, ValidatorError,
};
pub use generator::PasswordGenerator;
pub use reset::{ResetFlow, Severity, UiMessage};
pub use types::{DEFAULT_MAX_LENGTH, PasswordPolicy, UserProfile, ValidationOutcome};
