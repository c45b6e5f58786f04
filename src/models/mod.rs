pub mod form_definition;
pub mod form_deployment;

// Re-export core models for easy access
pub use form_definition::{FormDefinition, NewFormDefinition};
pub use form_deployment::{FormDeployment, NewFormDeployment};
