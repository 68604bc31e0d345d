// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in function libraries for the node palette.

use crate::registry::{FunctionDescriptor, FunctionRegistry};

/// Type token for floating point values
pub const FLOAT: &str = "float";

/// Scalar math functions over `float`
pub fn math_library() -> Vec<FunctionDescriptor> {
    const LIBRARY: &str = "Math";

    let binary = |name: &str, description: &str| {
        FunctionDescriptor::new(LIBRARY, name)
            .param("A", FLOAT)
            .param("B", FLOAT)
            .returns(FLOAT)
            .describe(description)
    };
    let unary = |name: &str, description: &str| {
        FunctionDescriptor::new(LIBRARY, name)
            .param("Input", FLOAT)
            .returns(FLOAT)
            .describe(description)
    };

    vec![
        binary("Add", "A + B"),
        binary("Subtract", "A - B"),
        binary("Multiply", "A * B"),
        binary("Divide", "A / B"),
        unary("Sin", "Sine of the input, in radians"),
        unary("Cos", "Cosine of the input, in radians"),
    ]
}

/// Registry preloaded with every built-in library
pub fn default_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    registry.extend(math_library());
    registry
}
