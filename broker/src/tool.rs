use serde::Serialize;
use std::collections::BTreeMap;

/// A capability the realtime model may invoke during a session.
///
/// Declared once at startup and sent verbatim to the upstream provider;
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: ParameterSchema,
}

/// JSON Schema for the tool's arguments.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: BTreeMap<&'static str, ParameterField>,
    pub required: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterField {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

/// The one tool this service exposes: product filtering for the store front.
pub fn filter_products_tool() -> ToolDefinition {
    let mut properties = BTreeMap::new();
    properties.insert(
        "category",
        ParameterField {
            kind: "string",
            description: "Product category, e.g. shoes, shirts",
        },
    );
    properties.insert(
        "color",
        ParameterField {
            kind: "string",
            description: "Color of the product",
        },
    );
    properties.insert(
        "max_price",
        ParameterField {
            kind: "number",
            description: "Maximum price in USD",
        },
    );

    ToolDefinition {
        kind: "function",
        name: "filter_products",
        description: "Filters products in an online store.",
        parameters: ParameterSchema {
            kind: "object",
            properties,
            required: vec!["category"],
        },
    }
}
