use std::path::{Path, PathBuf};

use miette::Result;
use serde::Serialize;

use scriptblock_core::config::GlobalConfig;
use scriptblock_core::context::{BlockName, ContextKind};
use scriptblock_core::manifest::BlockManifest;
use scriptblock_core::provider::TargetRegistry;
use scriptblock_core::target::ConfigurationTarget;
use scriptblock_util::errors::ScriptError;
use scriptblock_util::fs::find_ancestor_with;
use scriptblock_util::progress::{status, status_info};

const DEFAULT_MANIFEST: &str = "blocks.toml";

#[derive(Serialize)]
struct TargetReport<'a> {
    block: BlockName,
    #[serde(flatten)]
    target: &'a ConfigurationTarget,
}

pub fn exec(file: Option<&Path>, context: &str, json: bool, config: &GlobalConfig) -> Result<()> {
    let context = ContextKind::from_str(context).ok_or_else(|| ScriptError::Generic {
        message: format!("Unknown context '{context}'. Expected project, settings, or global"),
    })?;
    let path = match file {
        Some(p) => p.to_path_buf(),
        None => locate_manifest()?,
    };

    let manifest = BlockManifest::load(&path)?;
    let mut registry = TargetRegistry::new()
        .with_source(&path)
        .with_aliases(config.repositories.clone());
    manifest.apply(context, &mut registry)?;

    if json {
        let reports: Vec<TargetReport<'_>> = registry
            .targets()
            .map(|((_, block), target)| TargetReport {
                block: *block,
                target,
            })
            .collect();
        let out = serde_json::to_string_pretty(&reports).map_err(|e| ScriptError::Generic {
            message: format!("Failed to serialize targets: {e}"),
        })?;
        println!("{out}");
        return Ok(());
    }

    if registry.is_empty() {
        status_info("Skipped", &format!("{} has no blocks", path.display()));
        return Ok(());
    }

    for ((context, block), target) in registry.targets() {
        status("Applied", &format!("{block} ({context})"));
        for repo in target.repositories() {
            println!("repository {} {}", repo.name, repo.url);
        }
        for dep in target.classpath() {
            println!("classpath {}", dep.coordinate);
        }
        for constraint in target.constraints() {
            println!("constraint {constraint}");
        }
        if target.locks_all_configurations() {
            println!("locking all-configurations");
        }
    }
    Ok(())
}

fn locate_manifest() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(ScriptError::Io)?;
    let dir = find_ancestor_with(&cwd, DEFAULT_MANIFEST).ok_or_else(|| ScriptError::Manifest {
        message: format!("Could not find {DEFAULT_MANIFEST} in this directory or any parent"),
    })?;
    Ok(dir.join(DEFAULT_MANIFEST))
}
