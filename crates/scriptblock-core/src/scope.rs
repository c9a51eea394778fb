//! Capability-limited views of a [`ConfigurationTarget`] handed to blocks.
//!
//! A [`ScopedConfigurator`] borrows its target mutably for the duration of a
//! single block invocation. Blocks receive it as `&mut ScopedConfigurator<'_>`,
//! so the borrow checker rejects any attempt to keep it past the call.

use std::path::Path;

use scriptblock_util::errors::ScriptError;

use crate::context::ContextKind;
use crate::dependency::{ClasspathDependency, Exclusion, MavenCoordinate};
use crate::repository::Repository;
use crate::target::ConfigurationTarget;

/// The surface exposed inside `buildscript { }` / `initscript { }`.
pub struct ScopedConfigurator<'t> {
    target: &'t mut ConfigurationTarget,
}

impl<'t> ScopedConfigurator<'t> {
    pub fn new(target: &'t mut ConfigurationTarget) -> Self {
        Self { target }
    }

    /// The context the enclosing block runs under.
    pub fn context(&self) -> ContextKind {
        self.target.context()
    }

    /// Path of the script declaring the block, if the host recorded one.
    pub fn source_file(&self) -> Option<&Path> {
        self.target.source()
    }

    /// Add a repository by well-known name or configured alias.
    pub fn add_repository(&mut self, name: &str) -> miette::Result<()> {
        self.repositories(|repos| repos.named(name))
    }

    /// Add a custom Maven repository.
    pub fn maven(&mut self, name: &str, url: &str) -> miette::Result<()> {
        self.repositories(|repos| repos.maven(name, url))
    }

    /// Configure repositories in a nested scope.
    pub fn repositories<F>(&mut self, configure: F) -> miette::Result<()>
    where
        F: FnOnce(&mut RepositoryScope<'_>) -> miette::Result<()>,
    {
        configure(&mut RepositoryScope {
            target: &mut *self.target,
        })
    }

    /// Add a dependency to the script classpath.
    pub fn classpath(&mut self, notation: &str) -> miette::Result<()> {
        self.dependencies(|deps| deps.classpath(notation))
    }

    /// Configure classpath dependencies in a nested scope.
    pub fn dependencies<F>(&mut self, configure: F) -> miette::Result<()>
    where
        F: FnOnce(&mut DependencyScope<'_>) -> miette::Result<()>,
    {
        configure(&mut DependencyScope {
            target: &mut *self.target,
        })
    }

    /// Enable dependency locking for every configuration of the script classpath.
    pub fn lock_all_configurations(&mut self) {
        self.target.set_lock_all_configurations();
    }
}

/// Nested `repositories { }` scope.
pub struct RepositoryScope<'t> {
    target: &'t mut ConfigurationTarget,
}

impl RepositoryScope<'_> {
    pub fn maven_central(&mut self) {
        self.target.push_repository(Repository::maven_central());
    }

    pub fn google(&mut self) {
        self.target.push_repository(Repository::google());
    }

    pub fn maven_local(&mut self) {
        self.target.push_repository(Repository::maven_local());
    }

    pub fn gradle_plugin_portal(&mut self) {
        self.target.push_repository(Repository::plugin_portal());
    }

    pub fn maven(&mut self, name: &str, url: &str) -> miette::Result<()> {
        if url.trim().is_empty() {
            return Err(ScriptError::Generic {
                message: format!("Repository '{name}' has an empty URL"),
            }
            .into());
        }
        self.target.push_repository(Repository::custom(name, url));
        Ok(())
    }

    /// Well-known names win over aliases with the same name.
    pub fn named(&mut self, name: &str) -> miette::Result<()> {
        let repo = match Repository::well_known(name) {
            Some(repo) => repo,
            None => match self.target.alias(name) {
                Some(url) => Repository::custom(name, url),
                None => {
                    return Err(ScriptError::UnknownRepository {
                        name: name.to_string(),
                    }
                    .into())
                }
            },
        };
        self.target.push_repository(repo);
        Ok(())
    }
}

/// Nested `dependencies { }` scope.
pub struct DependencyScope<'t> {
    target: &'t mut ConfigurationTarget,
}

impl DependencyScope<'_> {
    pub fn classpath(&mut self, notation: &str) -> miette::Result<()> {
        self.classpath_excluding(notation, &[])
    }

    /// Add a classpath dependency with transitive exclusions
    /// (`"group"` or `"group:artifact"`).
    pub fn classpath_excluding(
        &mut self,
        notation: &str,
        exclusions: &[&str],
    ) -> miette::Result<()> {
        let coordinate = parse_notation(notation)?;
        let exclusions = exclusions
            .iter()
            .map(|e| {
                Exclusion::parse(e).ok_or_else(|| ScriptError::InvalidNotation {
                    notation: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.target.push_classpath(ClasspathDependency {
            coordinate,
            exclusions,
        });
        Ok(())
    }

    /// Constrain the version of a module on the script classpath.
    pub fn constraint(&mut self, notation: &str) -> miette::Result<()> {
        let coordinate = parse_notation(notation)?;
        self.target.push_constraint(coordinate);
        Ok(())
    }
}

fn parse_notation(notation: &str) -> Result<MavenCoordinate, ScriptError> {
    MavenCoordinate::parse(notation).ok_or_else(|| ScriptError::InvalidNotation {
        notation: notation.to_string(),
    })
}
