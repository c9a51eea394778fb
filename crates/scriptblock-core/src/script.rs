//! Typed script entry points.
//!
//! A [`Script`] is parameterized by a context marker ([`Project`],
//! [`Settings`], [`Global`]) so each context exposes only the block keyword
//! it supports. All of them funnel into the same [`dispatch`].

use std::marker::PhantomData;

use crate::context::ContextKind;
use crate::dispatch::dispatch;
use crate::provider::TargetProvider;
use crate::scope::ScopedConfigurator;

/// Marker trait tying a script type to its [`ContextKind`].
pub trait ScriptContext {
    const KIND: ContextKind;
}

/// Project build scripts.
#[derive(Debug)]
pub struct Project;

/// Settings scripts.
#[derive(Debug)]
pub struct Settings;

/// Init scripts, evaluated against the global build context.
#[derive(Debug)]
pub struct Global;

impl ScriptContext for Project {
    const KIND: ContextKind = ContextKind::Project;
}

impl ScriptContext for Settings {
    const KIND: ContextKind = ContextKind::Settings;
}

impl ScriptContext for Global {
    const KIND: ContextKind = ContextKind::Global;
}

/// A script being evaluated in context `C`, drawing targets from `P`.
pub struct Script<'p, C, P: ?Sized> {
    provider: &'p mut P,
    _context: PhantomData<C>,
}

impl<'p, C, P> Script<'p, C, P>
where
    C: ScriptContext,
    P: TargetProvider + ?Sized,
{
    pub fn new(provider: &'p mut P) -> Self {
        Self {
            provider,
            _context: PhantomData,
        }
    }

    pub fn context(&self) -> ContextKind {
        C::KIND
    }

    fn configure<F>(&mut self, block: F) -> miette::Result<()>
    where
        F: FnOnce(&mut ScopedConfigurator<'_>) -> miette::Result<()>,
    {
        let target = self.provider.target_for(C::KIND, C::KIND.block_name())?;
        dispatch(C::KIND, target, block)
    }
}

impl<P: TargetProvider + ?Sized> Script<'_, Project, P> {
    /// Configures the build script classpath for this project.
    pub fn buildscript<F>(&mut self, block: F) -> miette::Result<()>
    where
        F: FnOnce(&mut ScopedConfigurator<'_>) -> miette::Result<()>,
    {
        self.configure(block)
    }
}

impl<P: TargetProvider + ?Sized> Script<'_, Settings, P> {
    /// Configures the build script classpath for settings.
    pub fn buildscript<F>(&mut self, block: F) -> miette::Result<()>
    where
        F: FnOnce(&mut ScopedConfigurator<'_>) -> miette::Result<()>,
    {
        self.configure(block)
    }
}

impl<P: TargetProvider + ?Sized> Script<'_, Global, P> {
    /// Configures the classpath of the init script.
    pub fn initscript<F>(&mut self, block: F) -> miette::Result<()>
    where
        F: FnOnce(&mut ScopedConfigurator<'_>) -> miette::Result<()>,
    {
        self.configure(block)
    }
}
