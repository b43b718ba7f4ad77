pub mod asm;
pub mod encode;
pub mod error;
pub mod label;
pub mod parser;
