use std::cell::Cell;

use miette::Diagnostic;
use scriptblock_core::context::{BlockName, ContextKind};
use scriptblock_core::dispatch::{dispatch, dispatch_named};
use scriptblock_core::provider::{TargetProvider, TargetRegistry};
use scriptblock_core::target::ConfigurationTarget;
use scriptblock_util::errors::ScriptError;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("block failed at step {step}")]
struct BlockFailure {
    step: u32,
}

#[test]
fn empty_block_leaves_target_untouched_for_every_context() {
    for context in ContextKind::ALL {
        let mut target = ConfigurationTarget::new(context);
        dispatch(context, &mut target, |_| Ok(())).unwrap();
        assert!(target.is_pristine(), "{context} target was mutated");
    }
}

#[test]
fn block_runs_exactly_once_before_returning() {
    for context in ContextKind::ALL {
        let calls = Cell::new(0);
        let mut target = ConfigurationTarget::new(context);
        dispatch(context, &mut target, |_| {
            calls.set(calls.get() + 1);
            Ok(())
        })
        .unwrap();
        assert_eq!(calls.get(), 1);
    }
}

#[test]
fn project_repository_is_visible_after_dispatch() {
    let mut target = ConfigurationTarget::new(ContextKind::Project);
    dispatch(ContextKind::Project, &mut target, |c| c.add_repository("central")).unwrap();
    assert_eq!(target.repository_names(), ["central"]);
}

#[test]
fn settings_empty_block_keeps_prior_state() {
    let mut target = ConfigurationTarget::new(ContextKind::Settings);
    dispatch(ContextKind::Settings, &mut target, |c| c.add_repository("google")).unwrap();
    let before = target.clone();

    dispatch(ContextKind::Settings, &mut target, |_| Ok(())).unwrap();

    assert_eq!(target.repositories(), before.repositories());
    assert_eq!(target.classpath(), before.classpath());
}

#[test]
fn mismatched_target_is_rejected_without_running_block() {
    let ran = Cell::new(false);
    let mut target = ConfigurationTarget::new(ContextKind::Settings);

    let err = dispatch(ContextKind::Project, &mut target, |c| {
        ran.set(true);
        c.add_repository("central")
    })
    .unwrap_err();

    assert!(!ran.get());
    assert!(target.is_pristine());
    assert!(matches!(
        err.downcast_ref::<ScriptError>(),
        Some(ScriptError::InvalidContext { context, target })
            if context == "project" && target == "settings"
    ));
}

#[test]
fn every_mismatched_pair_is_invalid() {
    for context in ContextKind::ALL {
        for owner in ContextKind::ALL {
            if context == owner {
                continue;
            }
            let mut target = ConfigurationTarget::new(owner);
            let err = dispatch(context, &mut target, |_| Ok(())).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ScriptError>(),
                Some(ScriptError::InvalidContext { .. })
            ));
        }
    }
}

#[test]
fn block_error_propagates_unchanged_and_keeps_earlier_mutations() {
    let mut target = ConfigurationTarget::new(ContextKind::Project);

    let err = dispatch(ContextKind::Project, &mut target, |c| {
        c.add_repository("central")?;
        c.classpath("com.example:plugin:1.0")?;
        Err(BlockFailure { step: 3 }.into())
    })
    .unwrap_err();

    let failure = err
        .downcast_ref::<BlockFailure>()
        .expect("block error should not be wrapped");
    assert_eq!(failure.step, 3);
    assert_eq!(err.to_string(), "block failed at step 3");

    // No rollback: work done before the failure stays applied.
    assert_eq!(target.repository_names(), ["central"]);
    assert_eq!(target.classpath().len(), 1);
}

#[test]
fn scope_error_inside_block_propagates_and_keeps_earlier_mutations() {
    let mut target = ConfigurationTarget::new(ContextKind::Global);

    let err = dispatch(ContextKind::Global, &mut target, |c| {
        c.add_repository("mavenLocal")?;
        c.add_repository("nexus")?;
        c.add_repository("google")
    })
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScriptError>(),
        Some(ScriptError::UnknownRepository { name }) if name == "nexus"
    ));
    assert_eq!(target.repository_names(), ["mavenLocal"]);
}

#[test]
fn named_dispatch_rejects_block_not_legal_in_context() {
    let mut registry = TargetRegistry::new();
    let err = dispatch_named(
        &mut registry,
        ContextKind::Project,
        BlockName::Initscript,
        |_| Ok(()),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScriptError>(),
        Some(ScriptError::UnsupportedBlock { block, context })
            if block == "initscript" && context == "project"
    ));
    assert!(registry.is_empty());
}

#[test]
fn named_dispatch_uses_provider_target() {
    let mut registry = TargetRegistry::new();
    dispatch_named(
        &mut registry,
        ContextKind::Global,
        BlockName::Initscript,
        |c| c.add_repository("google"),
    )
    .unwrap();

    let target = registry
        .get(ContextKind::Global, BlockName::Initscript)
        .unwrap();
    assert_eq!(target.repository_names(), ["google"]);
}

struct WrongKindProvider {
    target: ConfigurationTarget,
}

impl TargetProvider for WrongKindProvider {
    fn target_for(
        &mut self,
        _context: ContextKind,
        _block: BlockName,
    ) -> miette::Result<&mut ConfigurationTarget> {
        Ok(&mut self.target)
    }
}

#[test]
fn named_dispatch_rejects_provider_returning_wrong_target() {
    let mut provider = WrongKindProvider {
        target: ConfigurationTarget::new(ContextKind::Settings),
    };
    let err = dispatch_named(
        &mut provider,
        ContextKind::Project,
        BlockName::Buildscript,
        |c| c.add_repository("central"),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScriptError>(),
        Some(ScriptError::InvalidContext { .. })
    ));
    assert!(provider.target.is_pristine());
}
