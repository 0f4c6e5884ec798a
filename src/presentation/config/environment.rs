use std::fmt;

/// Deployment stage that namespaces every storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentStage {
    Beta,
    Prod,
    Custom(String),
}

impl DeploymentStage {
    pub fn as_str(&self) -> &str {
        match self {
            DeploymentStage::Beta => "beta",
            DeploymentStage::Prod => "prod",
            DeploymentStage::Custom(name) => name,
        }
    }
}

impl From<String> for DeploymentStage {
    fn from(s: String) -> Self {
        match s.trim() {
            "" | "beta" => Self::Beta,
            "prod" => Self::Prod,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for DeploymentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
