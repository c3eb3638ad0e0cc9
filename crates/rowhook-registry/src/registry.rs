//! Eligibility filtering and operator selection.

use std::collections::BTreeMap;

use rowhook_core::{EventKind, FunctionDescriptor};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::manifest::FunctionManifest;

/// Filter the manifest down to functions registered for trigger wiring.
///
/// An empty result is fatal: it means the operator pointed the tool at
/// the wrong manifest, and proceeding would silently sync nothing.
pub fn eligible_functions(
    manifest: &FunctionManifest,
) -> RegistryResult<BTreeMap<String, FunctionDescriptor>> {
    let mut registry = BTreeMap::new();

    for entry in &manifest.functions {
        let Some(hook) = &entry.hook else { continue };

        let event: EventKind = hook.event.parse()?;
        let descriptor = FunctionDescriptor {
            name: entry.name.clone(),
            table: hook.table.clone(),
            event,
        };

        if registry.insert(entry.name.clone(), descriptor).is_some() {
            return Err(RegistryError::DuplicateFunction(entry.name.clone()));
        }
    }

    if registry.is_empty() {
        return Err(RegistryError::NoEligibleFunctions);
    }

    debug!(count = registry.len(), "eligible functions discovered");
    Ok(registry)
}

/// Narrow the registry to an operator-requested set of names.
///
/// An empty selection returns the registry unchanged. Every requested
/// name is validated before anything is narrowed, so an unknown name
/// fails the run with no partial selection.
pub fn select(
    registry: &BTreeMap<String, FunctionDescriptor>,
    only: &[String],
) -> RegistryResult<BTreeMap<String, FunctionDescriptor>> {
    if only.is_empty() {
        return Ok(registry.clone());
    }

    for name in only {
        if !registry.contains_key(name) {
            return Err(RegistryError::UnknownFunction(name.clone()));
        }
    }

    debug!(only = ?only, "restricting run to requested functions");

    Ok(registry
        .iter()
        .filter(|(name, _)| only.contains(name))
        .map(|(name, descriptor)| (name.clone(), descriptor.clone()))
        .collect())
}
