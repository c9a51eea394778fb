//! Declarative block manifests.
//!
//! A manifest is a TOML file with one table per block keyword. Each table is
//! turned into a block closure and dispatched like any other block.
//!
//! ```toml
//! [buildscript]
//! repositories = ["central"]
//! classpath = ["com.android.tools.build:gradle:8.2.0"]
//!
//! [buildscript.maven]
//! internal = "https://repo.example.com/maven"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use scriptblock_util::errors::ScriptError;

use crate::context::{BlockName, ContextKind};
use crate::dispatch::dispatch_named;
use crate::provider::TargetProvider;
use crate::scope::ScopedConfigurator;

/// Parsed manifest file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockManifest {
    #[serde(default)]
    pub buildscript: Option<BlockSpec>,
    #[serde(default)]
    pub initscript: Option<BlockSpec>,
}

/// Body of one block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockSpec {
    /// Well-known repository names or configured aliases.
    #[serde(default)]
    pub repositories: Vec<String>,

    /// Custom Maven repositories, name to URL.
    #[serde(default)]
    pub maven: BTreeMap<String, String>,

    #[serde(default)]
    pub classpath: Vec<ClasspathSpec>,

    #[serde(default)]
    pub constraints: Vec<String>,

    #[serde(default, rename = "lock-all-configurations")]
    pub lock_all_configurations: bool,
}

/// A classpath entry: shorthand notation or notation with exclusions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClasspathSpec {
    Short(String),
    Detailed {
        notation: String,
        #[serde(default)]
        exclude: Vec<String>,
    },
}

impl BlockManifest {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let content = scriptblock_util::fs::read_text(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            ScriptError::Manifest {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Block keywords present in this manifest, in declaration order.
    pub fn blocks(&self) -> Vec<(BlockName, &BlockSpec)> {
        let mut blocks = Vec::new();
        if let Some(spec) = &self.buildscript {
            blocks.push((BlockName::Buildscript, spec));
        }
        if let Some(spec) = &self.initscript {
            blocks.push((BlockName::Initscript, spec));
        }
        blocks
    }

    /// Dispatch every block in the manifest under `context`.
    ///
    /// Stops at the first failing block; earlier blocks stay applied.
    pub fn apply<P>(&self, context: ContextKind, provider: &mut P) -> miette::Result<()>
    where
        P: TargetProvider + ?Sized,
    {
        for (name, spec) in self.blocks() {
            dispatch_named(provider, context, name, |scope| spec.configure(scope))?;
        }
        Ok(())
    }
}

impl BlockSpec {
    /// Replay this spec through a scoped configurator.
    pub fn configure(&self, scope: &mut ScopedConfigurator<'_>) -> miette::Result<()> {
        scope.repositories(|repos| {
            for name in &self.repositories {
                repos.named(name)?;
            }
            for (name, url) in &self.maven {
                repos.maven(name, url)?;
            }
            Ok(())
        })?;

        scope.dependencies(|deps| {
            for entry in &self.classpath {
                match entry {
                    ClasspathSpec::Short(notation) => deps.classpath(notation)?,
                    ClasspathSpec::Detailed { notation, exclude } => {
                        let exclude: Vec<&str> = exclude.iter().map(String::as_str).collect();
                        deps.classpath_excluding(notation, &exclude)?;
                    }
                }
            }
            for notation in &self.constraints {
                deps.constraint(notation)?;
            }
            Ok(())
        })?;

        if self.lock_all_configurations {
            scope.lock_all_configurations();
        }
        Ok(())
    }
}
