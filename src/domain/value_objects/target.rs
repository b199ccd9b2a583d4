//! Target value object - defines which language to emit accessor classes for

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target language for emission
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Java classes with `this`-returning setters
    #[default]
    Java,
    /// PHP 7.4+ classes with typed properties
    Php,
}

impl Target {
    /// Every supported target
    pub const ALL: [Target; 2] = [Target::Java, Target::Php];

    /// Lowercase identifier used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Java => "java",
            Target::Php => "php",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Target::Java => "Java",
            Target::Php => "PHP",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "java" => Ok(Target::Java),
            "php" => Ok(Target::Php),
            other => Err(format!("unknown target '{}'", other)),
        }
    }
}
