use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all scriptblock operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ScriptError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration target was handed to a dispatcher running under a
    /// different context. This is a host programming error and is never retried.
    #[error("Invalid context: {context} block cannot configure a {target} target")]
    #[diagnostic(
        code(scriptblock::invalid_context),
        help("The script host supplied a configuration target of the wrong kind")
    )]
    InvalidContext { context: String, target: String },

    /// The block keyword is not available in the given context.
    #[error("`{block}` is not available in {context} scripts")]
    #[diagnostic(code(scriptblock::unsupported_block))]
    UnsupportedBlock { block: String, context: String },

    /// Repository name is neither well-known nor a configured alias.
    #[error("Unknown repository '{name}'")]
    #[diagnostic(help(
        "Use central, google, mavenLocal, gradlePluginPortal, or add an alias under [repositories] in config.toml"
    ))]
    UnknownRepository { name: String },

    /// Dependency notation could not be parsed.
    #[error("Invalid dependency notation '{notation}'")]
    #[diagnostic(help("Expected group:artifact:version or group:artifact:version:classifier"))]
    InvalidNotation { notation: String },

    /// Global configuration could not be read or parsed.
    #[error("Config error: {message}")]
    Config { message: String },

    /// Block manifest could not be read or parsed.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check the block manifest for syntax errors"))]
    Manifest { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
