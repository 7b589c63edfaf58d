//! Domain layer — pure diagnosis types, configuration schema, and text helpers.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod remediation;

pub use config::{DoctorConfig, LessVariables, VariableValue, VariantConfig};
pub use diagnosis::{
    CompileAttempt, CompileOutcome, CompiledStyle, DeployedArtifact, DeployedListing,
    DiagnosisReport, FileEntry, InspectMode, ModeQuery, SourceContent, SourceInspection,
};
pub use error::{CommandError, ConfigError};
pub use remediation::{RemediationOption, RemediationPlan, remediation_plan};
