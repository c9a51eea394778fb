use std::collections::BTreeMap;
use std::fs;

use scriptblock_core::context::{BlockName, ContextKind};
use scriptblock_core::manifest::BlockManifest;
use scriptblock_core::provider::TargetRegistry;
use scriptblock_util::errors::ScriptError;
use tempfile::TempDir;

const FULL: &str = r#"
[buildscript]
repositories = ["central", "google"]
classpath = [
    "com.android.tools.build:gradle:8.2.0",
    { notation = "org.jetbrains.kotlin:kotlin-gradle-plugin:2.0.0", exclude = ["org.ow2.asm"] },
]
constraints = ["org.jetbrains.kotlin:kotlin-stdlib:2.0.0"]
lock-all-configurations = true

[buildscript.maven]
internal = "https://repo.example.com/maven"
"#;

#[test]
fn parse_and_apply_project_manifest() {
    let manifest = BlockManifest::parse(FULL).unwrap();
    let mut registry = TargetRegistry::new();
    manifest.apply(ContextKind::Project, &mut registry).unwrap();

    let target = registry
        .get(ContextKind::Project, BlockName::Buildscript)
        .unwrap();
    assert_eq!(target.repository_names(), ["central", "google", "internal"]);
    assert_eq!(target.classpath().len(), 2);
    assert_eq!(target.classpath()[1].exclusions[0].group, "org.ow2.asm");
    assert_eq!(target.constraints().len(), 1);
    assert!(target.locks_all_configurations());
}

#[test]
fn buildscript_manifest_is_rejected_for_global_context() {
    let manifest = BlockManifest::parse(FULL).unwrap();
    let mut registry = TargetRegistry::new();
    let err = manifest
        .apply(ContextKind::Global, &mut registry)
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ScriptError>(),
        Some(ScriptError::UnsupportedBlock { .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn initscript_manifest_uses_configured_aliases() {
    let manifest = BlockManifest::parse("[initscript]\nrepositories = [\"corp\"]\n").unwrap();
    let mut aliases = BTreeMap::new();
    aliases.insert("corp".to_string(), "https://corp.example.com/m2".to_string());
    let mut registry = TargetRegistry::new().with_aliases(aliases);

    manifest.apply(ContextKind::Global, &mut registry).unwrap();

    let target = registry
        .get(ContextKind::Global, BlockName::Initscript)
        .unwrap();
    assert_eq!(target.repositories()[0].url, "https://corp.example.com/m2");
}

#[test]
fn failing_entry_keeps_earlier_entries() {
    let manifest = BlockManifest::parse(
        "[buildscript]\nrepositories = [\"central\"]\nclasspath = [\"not-a-coordinate\"]\n",
    )
    .unwrap();
    let mut registry = TargetRegistry::new();
    let err = manifest
        .apply(ContextKind::Settings, &mut registry)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScriptError>(),
        Some(ScriptError::InvalidNotation { .. })
    ));
    let target = registry
        .get(ContextKind::Settings, BlockName::Buildscript)
        .unwrap();
    assert_eq!(target.repository_names(), ["central"]);
    assert!(target.classpath().is_empty());
}

#[test]
fn unknown_key_is_a_manifest_error() {
    let err = BlockManifest::parse("[buildscript]\nplugins = []\n").unwrap_err();
    assert!(err.to_string().starts_with("Manifest error"), "got: {err}");
}

#[test]
fn empty_manifest_applies_nothing() {
    let manifest = BlockManifest::parse("").unwrap();
    assert!(manifest.blocks().is_empty());
    let mut registry = TargetRegistry::new();
    manifest.apply(ContextKind::Project, &mut registry).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn load_reads_manifest_from_disk() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("blocks.toml");
    fs::write(&path, "[initscript]\nrepositories = [\"mavenLocal\"]\n").unwrap();
    let manifest = BlockManifest::load(&path).unwrap();
    assert_eq!(manifest.blocks()[0].0, BlockName::Initscript);
}
