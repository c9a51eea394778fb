//! Suppliers of configuration targets.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::context::{BlockName, ContextKind};
use crate::target::ConfigurationTarget;

/// Supplies the live [`ConfigurationTarget`] for the current script evaluation.
///
/// Implementations must return the same target for repeated requests with
/// the same `(context, block)` pair during one evaluation.
pub trait TargetProvider {
    fn target_for(
        &mut self,
        context: ContextKind,
        block: BlockName,
    ) -> miette::Result<&mut ConfigurationTarget>;
}

/// In-process provider holding one target per `(context, block)` pair.
///
/// Targets are created on first request, seeded with the registry's script
/// source path and repository aliases.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    source: Option<PathBuf>,
    aliases: BTreeMap<String, String>,
    targets: BTreeMap<(ContextKind, BlockName), ConfigurationTarget>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_aliases(mut self, aliases: BTreeMap<String, String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn get(&self, context: ContextKind, block: BlockName) -> Option<&ConfigurationTarget> {
        self.targets.get(&(context, block))
    }

    /// All targets created so far, ordered by context then block.
    pub fn targets(&self) -> impl Iterator<Item = (&(ContextKind, BlockName), &ConfigurationTarget)> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl TargetProvider for TargetRegistry {
    fn target_for(
        &mut self,
        context: ContextKind,
        block: BlockName,
    ) -> miette::Result<&mut ConfigurationTarget> {
        let source = &self.source;
        let aliases = &self.aliases;
        let target = self.targets.entry((context, block)).or_insert_with(|| {
            tracing::trace!(context = %context, block = %block, "creating configuration target");
            let target = ConfigurationTarget::new(context).with_aliases(aliases.clone());
            match source {
                Some(path) => target.with_source(path.clone()),
                None => target,
            }
        });
        Ok(target)
    }
}
