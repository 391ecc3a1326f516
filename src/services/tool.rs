use crate::core::Matcher;
use crate::models::{SeekerProfile, ToolResponse, ToolSpec};
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

/// Name the matching tool is registered under
pub const FINDER_COUPLE: &str = "finder_couple";

/// Errors raised before a tool gets to run
///
/// Matching outcomes are never reported here; they are part of the tool's
/// normal output.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// A capability an agent framework can invoke by name
pub trait Tool: Send + Sync {
    /// Name used for registration and lookup
    fn name(&self) -> &str;

    fn spec(&self) -> ToolSpec;

    fn call(&self, args: Value) -> Result<ToolResponse, ToolError>;
}

/// Matches the user's collected details against the candidate pool
#[derive(Debug, Clone)]
pub struct FinderCouple {
    matcher: Matcher,
}

impl FinderCouple {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    /// Run the matcher on an already-typed persona
    pub fn run(&self, persona: &SeekerProfile) -> ToolResponse {
        self.matcher.respond(persona)
    }

    fn parameters_schema() -> Value {
        let text = json!({ "type": "string" });
        let text_or_number = json!({ "type": ["string", "number"] });
        json!({
            "type": "object",
            "properties": {
                "persona_data": {
                    "type": "object",
                    "description": "Details collected from the user",
                    "properties": {
                        "name": text,
                        "gender": {
                            "type": "string",
                            "description": "male or female, any casing"
                        },
                        "age": text_or_number,
                        "relationship_status": text,
                        "profession": text,
                        "location": text,
                        "education": text,
                        "hobbies": text,
                        "languages": text,
                        "whatsapp_no": text_or_number,
                    },
                    "required": ["gender", "location"]
                }
            },
            "required": ["persona_data"]
        })
    }
}

impl Tool for FinderCouple {
    fn name(&self) -> &str {
        FINDER_COUPLE
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: "Match the user's data with database and return the best match.".to_string(),
            parameters: Self::parameters_schema(),
        }
    }

    /// Accepts `{"persona_data": {...}}` or the persona fields at top level
    fn call(&self, args: Value) -> Result<ToolResponse, ToolError> {
        let persona = match args {
            Value::Object(mut map) => match map.remove("persona_data") {
                Some(inner) => inner,
                None => Value::Object(map),
            },
            other => {
                return Err(ToolError::InvalidArguments(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };

        let persona: SeekerProfile = serde_json::from_value(persona)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        persona
            .validate()
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        Ok(self.run(&persona))
    }
}

/// Tools exposed to the agent framework, looked up by name
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the matching tool
    pub fn with_matcher(matcher: Matcher) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FinderCouple::new(matcher)));
        registry
    }

    /// Register a tool; a tool with the same name is replaced
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    pub fn call(&self, name: &str, args: Value) -> Result<ToolResponse, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        tool.call(args)
    }
}
