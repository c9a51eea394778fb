//! The mutable classpath configuration behind a block.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::context::ContextKind;
use crate::dependency::{ClasspathDependency, MavenCoordinate};
use crate::repository::Repository;

/// Classpath/dependency configuration surface for one script evaluation.
///
/// A target is created for exactly one [`ContextKind`] and may only be
/// configured by blocks running under that context. Mutations are made
/// through a [`ScopedConfigurator`](crate::scope::ScopedConfigurator).
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationTarget {
    context: ContextKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,
    #[serde(skip)]
    aliases: BTreeMap<String, String>,
    repositories: Vec<Repository>,
    classpath: Vec<ClasspathDependency>,
    constraints: Vec<MavenCoordinate>,
    lock_all_configurations: bool,
}

impl ConfigurationTarget {
    pub fn new(context: ContextKind) -> Self {
        Self {
            context,
            source: None,
            aliases: BTreeMap::new(),
            repositories: Vec::new(),
            classpath: Vec::new(),
            constraints: Vec::new(),
            lock_all_configurations: false,
        }
    }

    /// Record the path of the script this target belongs to.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Repository aliases (name to URL) resolvable by `add_repository`.
    pub fn with_aliases(mut self, aliases: BTreeMap<String, String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn context(&self) -> ContextKind {
        self.context
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn repository_names(&self) -> Vec<&str> {
        self.repositories.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn classpath(&self) -> &[ClasspathDependency] {
        &self.classpath
    }

    pub fn constraints(&self) -> &[MavenCoordinate] {
        &self.constraints
    }

    pub fn locks_all_configurations(&self) -> bool {
        self.lock_all_configurations
    }

    /// True if no block has changed anything on this target.
    pub fn is_pristine(&self) -> bool {
        self.repositories.is_empty()
            && self.classpath.is_empty()
            && self.constraints.is_empty()
            && !self.lock_all_configurations
    }

    pub(crate) fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Append a repository, suffixing its name with 2, 3, ... if taken.
    pub(crate) fn push_repository(&mut self, mut repo: Repository) {
        if self.has_repository(&repo.name) {
            let base = repo.name.clone();
            let mut n = 2;
            while self.has_repository(&format!("{base}{n}")) {
                n += 1;
            }
            repo.name = format!("{base}{n}");
        }
        self.repositories.push(repo);
    }

    pub(crate) fn push_classpath(&mut self, dep: ClasspathDependency) {
        self.classpath.push(dep);
    }

    pub(crate) fn push_constraint(&mut self, coordinate: MavenCoordinate) {
        self.constraints.push(coordinate);
    }

    pub(crate) fn set_lock_all_configurations(&mut self) {
        self.lock_all_configurations = true;
    }

    fn has_repository(&self, name: &str) -> bool {
        self.repositories.iter().any(|r| r.name == name)
    }
}
