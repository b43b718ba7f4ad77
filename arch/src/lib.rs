pub mod op;
pub mod token;
