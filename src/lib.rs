pub mod environment;
pub mod schema;
pub mod stack;

pub use environment::{Environment, StackParams};
pub use stack::PredictionStack;
