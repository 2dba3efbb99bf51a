//! Argument-fill templates built from callable signatures

use serde::{Deserialize, Serialize};

use crate::template::Template;

/// A declared parameter of a callable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: &str, default: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            default: default.map(str::to_string),
        }
    }

    /// `name=default`, or just `name` when there is no default
    pub fn fragment(&self) -> String {
        match &self.default {
            Some(default) => format!("{}={}", self.name, default),
            None => self.name.clone(),
        }
    }
}

/// Source of callable signatures (introspection of the host language)
pub trait SignatureLookup {
    fn signature(&self, callable: &str) -> Option<&[Parameter]>;

    /// `(a=1, b=2)` text for a call tip
    fn call_tip(&self, callable: &str) -> Option<String> {
        self.signature(callable).map(format_arguments)
    }
}

fn format_arguments(params: &[Parameter]) -> String {
    let fragments: Vec<String> = params.iter().map(Parameter::fragment).collect();
    format!("({})", fragments.join(", "))
}

/// Template for filling the arguments of `callable`, or None when the
/// callable is unknown.
pub fn argument_template(lookup: &dyn SignatureLookup, callable: &str) -> Option<Template> {
    let params = lookup.signature(callable)?;
    let placeholders = params.iter().map(Parameter::fragment).collect();
    Some(Template::from_parts(format_arguments(params), placeholders))
}
