//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models known to the comparison (Value Object)
///
/// The dashboard compares one hosted model against one small local model.
/// Anything else configured by name is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Hosted GPT-4o chat-completion deployment
    Gpt4o,
    /// TinyLlama served by a local Ollama process
    TinyLlama,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::TinyLlama => "tinyllama",
            Model::Custom(s) => s,
        }
    }

    /// Human-readable name used in headings and chart legends
    pub fn display_name(&self) -> &str {
        match self {
            Model::Gpt4o => "GPT-4",
            Model::TinyLlama => "TinyLlama",
            Model::Custom(s) => s,
        }
    }

    /// Default hosted model
    pub fn default_cloud() -> Model {
        Model::Gpt4o
    }

    /// Default local model
    pub fn default_local() -> Model {
        Model::TinyLlama
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o" => Model::Gpt4o,
            "tinyllama" => Model::TinyLlama,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

/// Which column of the comparison a model occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSide {
    /// Large hosted model
    Cloud,
    /// Small locally-run model
    Local,
}

impl ModelSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSide::Cloud => "cloud",
            ModelSide::Local => "local",
        }
    }
}

impl std::fmt::Display for ModelSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
