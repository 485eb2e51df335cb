//! Module dependency collection.

use indexmap::IndexMap;
use svcforge_core::Version;

use crate::{Error, Result};

/// A required module and its pinned version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub module: &'static str,
    pub version: Version,
}

impl Dependency {
    pub const fn new(module: &'static str, version: Version) -> Self {
        Self { module, version }
    }
}

/// Ordered set of dependencies keyed by module.
///
/// Requiring a module twice at the same version is a no-op; requiring it at
/// a different version is a [`Error::DependencyConflict`].
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    entries: IndexMap<&'static str, Version>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, dependency: Dependency) -> Result<()> {
        match self.entries.get(dependency.module) {
            Some(existing) if *existing != dependency.version => Err(Error::DependencyConflict {
                module: dependency.module.to_string(),
                existing: *existing,
                requested: dependency.version,
            }),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(dependency.module, dependency.version);
                Ok(())
            }
        }
    }

    pub fn extend<'a>(&mut self, dependencies: impl IntoIterator<Item = &'a Dependency>) -> Result<()> {
        for dependency in dependencies {
            self.require(*dependency)?;
        }
        Ok(())
    }

    pub fn get(&self, module: &str) -> Option<Version> {
        self.entries.get(module).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in first-required order.
    pub fn iter(&self) -> impl Iterator<Item = Dependency> + '_ {
        self.entries
            .iter()
            .map(|(module, version)| Dependency::new(*module, *version))
    }
}
