//! Block dispatch.
//!
//! [`dispatch`] is the single entry point every block keyword goes through.
//! It is identical for all contexts; the only per-context difference is
//! which target kind is legal, checked against [`ConfigurationTarget::context`].

use scriptblock_util::errors::ScriptError;

use crate::context::{BlockName, ContextKind};
use crate::provider::TargetProvider;
use crate::scope::ScopedConfigurator;
use crate::target::ConfigurationTarget;

/// Apply `block` to `target` under `context`.
///
/// The block runs once, synchronously, against a fresh [`ScopedConfigurator`].
/// Its mutations land on `target` immediately and are not rolled back if it
/// fails part-way. Errors from the block are returned as-is.
///
/// Returns [`ScriptError::InvalidContext`] without running the block if
/// `target` was created for a different context.
pub fn dispatch<F>(
    context: ContextKind,
    target: &mut ConfigurationTarget,
    block: F,
) -> miette::Result<()>
where
    F: FnOnce(&mut ScopedConfigurator<'_>) -> miette::Result<()>,
{
    if target.context() != context {
        return Err(ScriptError::InvalidContext {
            context: context.to_string(),
            target: target.context().to_string(),
        }
        .into());
    }

    tracing::debug!(
        context = %context,
        block = %context.block_name(),
        "applying configuration block"
    );

    let mut scope = ScopedConfigurator::new(target);
    block(&mut scope)
}

/// Dispatch a block by keyword, fetching its target from `provider`.
///
/// Fails with [`ScriptError::UnsupportedBlock`] if `block_name` may not be
/// used in `context` scripts.
pub fn dispatch_named<P, F>(
    provider: &mut P,
    context: ContextKind,
    block_name: BlockName,
    block: F,
) -> miette::Result<()>
where
    P: TargetProvider + ?Sized,
    F: FnOnce(&mut ScopedConfigurator<'_>) -> miette::Result<()>,
{
    if !context.accepts(block_name) {
        return Err(ScriptError::UnsupportedBlock {
            block: block_name.to_string(),
            context: context.to_string(),
        }
        .into());
    }
    let target = provider.target_for(context, block_name)?;
    dispatch(context, target, block)
}
