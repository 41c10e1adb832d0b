//! Abstract Syntax Tree (AST) type definitions for SysY
//!
//! This module contains all the AST node types produced by the parser,
//! from the compilation-unit root down through declarations, statements
//! and the precedence-layered expression grammar. The tree is write-once:
//! every node owns its children exclusively, children are supplied at
//! construction time, and no node is mutated once a parent takes
//! ownership of it.

pub mod decl;
pub mod expr;
pub mod query;
pub mod stmt;

pub use decl::*;
pub use expr::*;
pub use stmt::*;

use nonempty::NonEmpty;
use serde::Serialize;

/// The root of the tree: one translation unit.
///
/// A well-formed unit carries at least one top-level definition, which
/// `NonEmpty` enforces structurally.
#[derive(Debug, Clone, Serialize)]
pub struct CompUnit {
    pub defs: NonEmpty<TopLevelDef>,
}

impl CompUnit {
    pub fn new(defs: NonEmpty<TopLevelDef>) -> Self {
        Self { defs }
    }

    /// Convenience for the common single-definition case.
    pub fn single(def: TopLevelDef) -> Self {
        Self {
            defs: NonEmpty::new(def),
        }
    }
}

/// One top-level definition: a declaration or a function.
#[derive(Debug, Clone, Serialize)]
pub enum TopLevelDef {
    Decl(Decl),
    Func(FuncDef),
}
