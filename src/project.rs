//! Core data model for a scaffolding run.
//! A [`ProjectRequest`] is collected once per invocation and consumed by every
//! downstream stage; it is never persisted.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Default domain applied when the user gives an empty answer
pub const DEFAULT_DOMAIN: &str = "example.com";

/// Default base path applied when the user gives an empty answer
pub const DEFAULT_BASE_PATH: &str = "api";

/// Target execution environment of the generated service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    #[default]
    NodeJs,
    Python,
}

/// Concrete deployment mapping for a [`Runtime`]: the identifier written into
/// deployment configuration and the handler file the runtime keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeProfile {
    pub identifier: &'static str,
    pub handler: &'static str,
}

impl Runtime {
    /// Choice labels presented to the user, in prompt order.
    pub const CHOICES: [&'static str; 2] = ["nodejs", "python"];

    pub fn profile(&self) -> RuntimeProfile {
        match self {
            Runtime::NodeJs => {
                RuntimeProfile { identifier: "nodejs10.x", handler: "handler.js" }
            }
            Runtime::Python => {
                RuntimeProfile { identifier: "python3.7", handler: "handler.py" }
            }
        }
    }

    /// The handler file belonging to the runtime that was *not* selected.
    pub fn discarded_handler(&self) -> &'static str {
        match self {
            Runtime::NodeJs => Runtime::Python.profile().handler,
            Runtime::Python => Runtime::NodeJs.profile().handler,
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runtime::NodeJs => write!(f, "nodejs"),
            Runtime::Python => write!(f, "python"),
        }
    }
}

impl FromStr for Runtime {
    type Err = String;

    /// Parses a runtime choice, normalized to lower case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nodejs" => Ok(Runtime::NodeJs),
            "python" => Ok(Runtime::Python),
            other => Err(format!("unknown runtime '{}'", other)),
        }
    }
}

/// Capability set of the fetched template.
///
/// The original tooling shipped two near-identical pipelines; here a single
/// pipeline is parameterized by what the template actually supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateVariant {
    /// Deployment configuration file to render, when the template has one
    pub deploy_config: Option<&'static str>,
    /// Whether the template carries one handler file per runtime
    pub multi_runtime: bool,
}

impl TemplateVariant {
    /// Template with per-runtime handlers and a serverless deployment config.
    pub const MULTI_RUNTIME: Self =
        Self { deploy_config: Some("serverless.yml"), multi_runtime: true };

    /// Template with a single fixed runtime and no deployment config.
    pub const BASIC: Self = Self { deploy_config: None, multi_runtime: false };
}

impl Default for TemplateVariant {
    fn default() -> Self {
        TemplateVariant::MULTI_RUNTIME
    }
}

/// Fully resolved answers for one scaffolding run. Immutable once collected.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRequest {
    /// Target directory name; must not exist when the run starts
    pub name: String,
    pub description: String,
    pub domain: String,
    pub base_path: String,
    pub runtime: Runtime,
}

impl ProjectRequest {
    /// Context for rendering `package.json`.
    pub fn package_context(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
        })
    }

    /// Context for rendering the deployment configuration.
    pub fn deploy_context(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "runtime": self.runtime.profile().identifier,
            "domain": self.domain,
            "basePath": self.base_path,
        })
    }

    /// Context for rendering `README.md`.
    pub fn readme_context(&self) -> serde_json::Value {
        serde_json::json!({ "name": self.name })
    }
}
