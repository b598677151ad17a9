use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::core::error::{DistroError, DistroResult};

/// Packaging assumed when a coordinate carries no `@extension` suffix.
pub const DEFAULT_EXTENSION: &str = "jar";

/// Represents a fully parsed Maven coordinate.
///
/// Supported formats:
///   `group:artifact:version`
///   `group:artifact:version:classifier`
///   `group:artifact:version@extension`
///   `group:artifact:version:classifier@extension`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MavenArtifact {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
    /// File extension. `"jar"` unless the coordinate overrides it.
    pub extension: String,
}

impl MavenArtifact {
    /// Parse a Maven coordinate string.
    ///
    /// # Examples
    /// ```
    /// use distro_core::MavenArtifact;
    /// let a = MavenArtifact::parse("net.minecraftforge:forge:1.12.2-14.23.5.2860").unwrap();
    /// assert_eq!(a.group, "net.minecraftforge");
    /// ```
    pub fn parse(coordinate: &str) -> DistroResult<Self> {
        // Split off @extension first
        let (coordinate_part, extension) = match coordinate.rsplit_once('@') {
            Some((head, ext)) if !head.is_empty() && !ext.is_empty() => (head, ext),
            Some(_) => return Err(DistroError::InvalidMavenCoordinate(coordinate.to_string())),
            None => (coordinate, DEFAULT_EXTENSION),
        };

        let parts: Vec<&str> = coordinate_part.split(':').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(DistroError::InvalidMavenCoordinate(coordinate.to_string()));
        }

        match parts.len() {
            3 => Ok(Self {
                group: parts[0].to_string(),
                artifact: parts[1].to_string(),
                version: parts[2].to_string(),
                classifier: None,
                extension: extension.to_string(),
            }),
            4 => Ok(Self {
                group: parts[0].to_string(),
                artifact: parts[1].to_string(),
                version: parts[2].to_string(),
                classifier: Some(parts[3].to_string()),
                extension: extension.to_string(),
            }),
            _ => Err(DistroError::InvalidMavenCoordinate(coordinate.to_string())),
        }
    }

    /// Construct the group path portion (`com.example` → `com/example`).
    pub fn group_path(&self) -> String {
        self.group.replace('.', "/")
    }

    /// Build the artifact filename.
    ///
    /// `artifact-version[-classifier].extension`
    pub fn filename(&self) -> String {
        match &self.classifier {
            Some(c) => format!("{}-{}-{}.{}", self.artifact, self.version, c, self.extension),
            None => format!("{}-{}.{}", self.artifact, self.version, self.extension),
        }
    }

    /// Normalized local path below a repository root.
    ///
    /// Mirrors Maven's repo layout:
    /// `<group_path>/<artifact>/<version>/<filename>`
    pub fn local_path(&self) -> PathBuf {
        PathBuf::from(self.group_path())
            .join(&self.artifact)
            .join(&self.version)
            .join(self.filename())
    }

    /// Full identifier: `group:artifact:version[:classifier][@extension]`.
    ///
    /// The default `jar` extension stays implicit, so the common coordinate
    /// form round-trips unchanged through parse and render.
    pub fn identifier(&self) -> String {
        let mut id = self.extensionless_identifier();
        if self.extension != DEFAULT_EXTENSION {
            id.push('@');
            id.push_str(&self.extension);
        }
        id
    }

    /// `group:artifact:version[:classifier]`
    pub fn extensionless_identifier(&self) -> String {
        match &self.classifier {
            Some(c) => format!("{}:{}:{}:{}", self.group, self.artifact, self.version, c),
            None => format!("{}:{}:{}", self.group, self.artifact, self.version),
        }
    }

    /// `group:artifact`
    pub fn versionless_identifier(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl fmt::Display for MavenArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
