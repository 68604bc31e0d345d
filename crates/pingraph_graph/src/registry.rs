// SPDX-License-Identifier: MIT OR Apache-2.0
//! Registry of callable functions and the node factory built on it.
//!
//! Each function is described statically by name, parameters and return
//! type. Instantiating a descriptor produces a node with one input pin per
//! parameter and one output pin for the return value.

use crate::graph::Graph;
use crate::node::Node;
use crate::pin::{PinDirection, PinType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name given to the return-value pin
pub const RETURN_PIN_NAME: &str = "Output";

/// A function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Parameter name, shown as the pin label
    pub name: String,
    /// Type token of the input pin
    pub type_token: String,
}

/// Static description of a callable function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// Stable identifier, `library.name` by default
    pub id: String,
    /// Library (palette group) the function belongs to
    pub library: String,
    /// Function name as declared
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ParamDescriptor>,
    /// Return type token, `None` for functions without a result
    #[serde(default)]
    pub return_type: Option<String>,
}

/// Extra pins added when instantiating a function node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeOptions {
    /// Add an untyped flow input pin
    pub flow_input: bool,
    /// Add an untyped flow output pin
    pub flow_output: bool,
}

impl NodeOptions {
    /// Both flow pins
    pub fn with_flow() -> Self {
        Self {
            flow_input: true,
            flow_output: true,
        }
    }
}

impl FunctionDescriptor {
    /// Create a descriptor with no parameters and no return value
    pub fn new(library: impl Into<String>, name: impl Into<String>) -> Self {
        let library = library.into();
        let name = name.into();
        Self {
            id: format!("{library}.{name}"),
            library,
            name,
            description: String::new(),
            params: Vec::new(),
            return_type: None,
        }
    }

    /// Append a parameter
    pub fn param(mut self, name: impl Into<String>, type_token: impl Into<String>) -> Self {
        self.params.push(ParamDescriptor {
            name: name.into(),
            type_token: type_token.into(),
        });
        self
    }

    /// Set the return type
    pub fn returns(mut self, type_token: impl Into<String>) -> Self {
        self.return_type = Some(type_token.into());
        self
    }

    /// Set the description
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Name shown in the node header
    pub fn display_name(&self) -> String {
        sanitize_name(&self.name)
    }

    /// Build a node for this function with an ID from `graph`.
    ///
    /// Pin order: flow output, flow input, return value, then parameters.
    /// The node is returned unattached; pass it to [`Graph::add_node`].
    pub fn instantiate(&self, graph: &mut Graph, options: NodeOptions) -> Node {
        let mut node = graph.new_node(self.display_name());

        if options.flow_output {
            node.add_pin(PinDirection::Output, PinType::Untyped, "");
        }
        if options.flow_input {
            node.add_pin(PinDirection::Input, PinType::Untyped, "");
        }
        if let Some(return_type) = &self.return_type {
            node.add_pin(
                PinDirection::Output,
                PinType::typed(return_type.as_str()),
                RETURN_PIN_NAME,
            );
        }
        for param in &self.params {
            node.add_pin(
                PinDirection::Input,
                PinType::typed(param.type_token.as_str()),
                param.name.as_str(),
            );
        }

        node
    }
}

/// Registry of available functions
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    /// Registered functions by ID
    functions: IndexMap<String, FunctionDescriptor>,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function, replacing any previous one with the same ID
    pub fn register(&mut self, function: FunctionDescriptor) {
        if self.functions.contains_key(&function.id) {
            tracing::warn!("Replacing registered function '{}'", function.id);
        }
        self.functions.insert(function.id.clone(), function);
    }

    /// Register several functions
    pub fn extend(&mut self, functions: impl IntoIterator<Item = FunctionDescriptor>) {
        for function in functions {
            self.register(function);
        }
    }

    /// Get a function by ID
    pub fn get(&self, id: &str) -> Option<&FunctionDescriptor> {
        self.functions.get(id)
    }

    /// Get all registered functions
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.functions.values()
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Library names in registration order
    pub fn libraries(&self) -> Vec<&str> {
        let mut libraries: Vec<&str> = Vec::new();
        for function in self.functions.values() {
            if !libraries.contains(&function.library.as_str()) {
                libraries.push(&function.library);
            }
        }
        libraries
    }

    /// Get functions of one library
    pub fn functions_in<'a>(
        &'a self,
        library: &'a str,
    ) -> impl Iterator<Item = &'a FunctionDescriptor> + 'a {
        self.functions.values().filter(move |f| f.library == library)
    }

    /// Create a node from a function ID
    pub fn create_node(&self, id: &str, graph: &mut Graph, options: NodeOptions) -> Option<Node> {
        match self.get(id) {
            Some(function) => Some(function.instantiate(graph, options)),
            None => {
                tracing::error!("Function '{}' not found", id);
                None
            }
        }
    }
}

/// Turn a declared name into a display name by splitting camel case words.
///
/// `"SquareRoot"` becomes `"Square Root"`; runs of capitals stay together.
pub fn sanitize_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut previous_upper = true;
    for c in name.chars() {
        let upper = c.is_ascii_uppercase();
        if upper && !previous_upper {
            result.push(' ');
        }
        result.push(c);
        previous_upper = upper;
    }
    result
}
