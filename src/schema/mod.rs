//! Schema system - validation of stored data and interactive prompts

pub mod registry;
pub mod validator;
pub mod wizard;

pub use registry::SchemaRegistry;
pub use validator::{SchemaViolation, ValidationError, Validator};
pub use wizard::{SchemaWizard, WizardResult};
