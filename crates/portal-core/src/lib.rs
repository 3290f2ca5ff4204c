//! # portal-core - Core Domain Types
//!
//! Foundation crate for the NYQST portal mock. Provides the entity types,
//! the seeded sample data, the [`Catalog`] that owns them, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Project`], [`AppCard`], [`Bundle`], [`CrmEntity`], [`Model`],
//!   [`Dashboard`], [`WorkflowDef`], [`Run`], [`CanvasBlock`]
//! - Status/type enums: [`AppType`], [`AppStatus`], [`RunStatus`], [`RunKind`], ...
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - All entity tables with `Option`-returning lookups and
//!   reference validation
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod catalog;
pub mod error;
pub mod logging;
pub mod seed;
pub mod types;

/// Prelude for common imports used throughout all portal crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use catalog::Catalog;
pub use error::{Error, Result, ResultExt};
pub use types::{
    AppCard, AppStatus, AppType, Bundle, BundleVersion, CanvasBlock, CrmEntity, CrmEntityType,
    Dashboard, LastRun, Model, ModelStatus, ProgressStatus, Project, Run, RunKind, RunStatus,
    Trigger, Validation, ValidationStatus, VersionStatus, WorkflowDef,
};
