//! Script contexts and the block keywords each one accepts.

use serde::{Deserialize, Serialize};

/// The evaluation environment a script belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    Project,
    Settings,
    Global,
}

/// Keyword of a configuration block as written in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockName {
    Buildscript,
    Initscript,
}

/// Which block keyword configures the classpath of each context.
const BLOCK_TABLE: &[(ContextKind, BlockName)] = &[
    (ContextKind::Project, BlockName::Buildscript),
    (ContextKind::Settings, BlockName::Buildscript),
    (ContextKind::Global, BlockName::Initscript),
];

impl ContextKind {
    pub const ALL: [ContextKind; 3] = [Self::Project, Self::Settings, Self::Global];

    /// Parse a context name. `init` and `gradle` are accepted as aliases for `global`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "project" => Some(Self::Project),
            "settings" => Some(Self::Settings),
            "global" | "init" | "gradle" => Some(Self::Global),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Settings => "settings",
            Self::Global => "global",
        }
    }

    /// The block keyword that configures this context's script classpath.
    pub fn block_name(&self) -> BlockName {
        match self {
            Self::Project | Self::Settings => BlockName::Buildscript,
            Self::Global => BlockName::Initscript,
        }
    }

    /// Whether `block` may appear in scripts of this context.
    pub fn accepts(&self, block: BlockName) -> bool {
        BLOCK_TABLE
            .iter()
            .any(|(ctx, b)| ctx == self && *b == block)
    }
}

impl BlockName {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "buildscript" => Some(Self::Buildscript),
            "initscript" => Some(Self::Initscript),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buildscript => "buildscript",
            Self::Initscript => "initscript",
        }
    }
}

/// The full context-to-block mapping, in declaration order.
pub fn block_table() -> &'static [(ContextKind, BlockName)] {
    BLOCK_TABLE
}

impl std::fmt::Display for ContextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::fmt::Display for BlockName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
