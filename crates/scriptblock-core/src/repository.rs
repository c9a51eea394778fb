//! Repositories declared inside a configuration block.

use serde::{Deserialize, Serialize};

use crate::config::home_dir;

/// Maven Central base URL.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// Google's Maven repository.
pub const GOOGLE_MAVEN_URL: &str = "https://maven.google.com";

/// Gradle plugin portal, served as a Maven repository.
pub const PLUGIN_PORTAL_URL: &str = "https://plugins.gradle.org/m2";

/// `file://` URL of the user-local Maven repository (`<home>/.m2/repository`).
pub fn maven_local_url() -> String {
    let repo = home_dir().join(".m2").join("repository");
    format!("file://{}", repo.to_string_lossy().replace('\\', "/"))
}

/// How a repository was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryKind {
    MavenCentral,
    Google,
    MavenLocal,
    PluginPortal,
    Custom,
}

/// A repository on a configuration target's classpath resolution list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub url: String,
    pub kind: RepositoryKind,
}

impl Repository {
    pub fn maven_central() -> Self {
        Self::known("central", MAVEN_CENTRAL_URL, RepositoryKind::MavenCentral)
    }

    pub fn google() -> Self {
        Self::known("google", GOOGLE_MAVEN_URL, RepositoryKind::Google)
    }

    pub fn maven_local() -> Self {
        Self::known("mavenLocal", &maven_local_url(), RepositoryKind::MavenLocal)
    }

    pub fn plugin_portal() -> Self {
        Self::known(
            "gradlePluginPortal",
            PLUGIN_PORTAL_URL,
            RepositoryKind::PluginPortal,
        )
    }

    /// A user-declared Maven repository. Trailing slashes are dropped.
    pub fn custom(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.trim_end_matches('/').to_string(),
            kind: RepositoryKind::Custom,
        }
    }

    /// Look up a well-known repository by any of its accepted names.
    pub fn well_known(name: &str) -> Option<Self> {
        match name {
            "central" | "mavenCentral" | "maven-central" => Some(Self::maven_central()),
            "google" => Some(Self::google()),
            "mavenLocal" | "local" | "maven-local" => Some(Self::maven_local()),
            "gradlePluginPortal" | "plugins" | "plugin-portal" => Some(Self::plugin_portal()),
            _ => None,
        }
    }

    fn known(name: &str, url: &str, kind: RepositoryKind) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            kind,
        }
    }
}
