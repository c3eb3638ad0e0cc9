//! rowhook-registry — discovers which deployed functions get trigger wiring.
//!
//! The deployment pipeline writes a manifest listing every deployed
//! function; entries carrying an explicit `hook` registration record are
//! eligible for synchronization. This crate loads that manifest, filters
//! it down to eligible [`FunctionDescriptor`]s, and applies the operator's
//! optional name selection.
//!
//! [`FunctionDescriptor`]: rowhook_core::FunctionDescriptor

pub mod error;
pub mod manifest;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use manifest::{FunctionManifest, HookRegistration, ManifestEntry};
pub use registry::{eligible_functions, select};
