pub mod ast;
pub mod error;
pub mod printer;
pub mod visitor;

pub use ast::*;
pub use error::AstError;
pub use printer::Printer;
pub use visitor::{Accept, Visitor};
