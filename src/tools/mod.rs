//! Tool contract layer: self-describing callables the agent may invoke.

pub mod arguments;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use tool::{FunctionTool, Tool};
pub use types::ToolParameters;
pub use validation::validate_arguments;
