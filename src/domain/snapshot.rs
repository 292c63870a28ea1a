use serde::{Deserialize, Serialize};

/// Public API surface of one artifact, as produced by an introspection step.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiSnapshot {
    /// Embedded product version of the artifact, if it declares one
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub types: Vec<TypeSnapshot>,
}

/// One public type and its members. Members are identified by signature strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TypeSnapshot {
    pub name: String,

    #[serde(default)]
    pub base_type: Option<String>,

    #[serde(default)]
    pub interfaces: Vec<String>,

    #[serde(default)]
    pub events: Vec<String>,

    #[serde(default)]
    pub fields: Vec<String>,

    #[serde(default)]
    pub methods: Vec<String>,
}

impl ApiSnapshot {
    pub fn new(types: Vec<TypeSnapshot>) -> Self {
        ApiSnapshot {
            version: None,
            types,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl TypeSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        TypeSnapshot {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    pub fn with_interfaces(mut self, interfaces: &[&str]) -> Self {
        self.interfaces = interfaces.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_events(mut self, events: &[&str]) -> Self {
        self.events = events.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_methods(mut self, methods: &[&str]) -> Self {
        self.methods = methods.iter().map(|s| s.to_string()).collect();
        self
    }
}
