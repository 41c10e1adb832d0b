//! Statement AST node definitions
//!
//! One enum variant per statement discriminant, each carrying exactly the
//! children that discriminant requires. A block is an ordered sequence of
//! block items, where an item is either a nested declaration or a statement.

use super::decl::Decl;
use super::expr::{Exp, LVal};
use serde::Serialize;

/// A `{ ... }` scope.
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub items: Vec<BlockItem>,
}

impl Block {
    pub fn new(items: Vec<BlockItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

/// The unit of composition inside a block.
#[derive(Debug, Clone, Serialize)]
pub enum BlockItem {
    Decl(Decl),
    Stmt(Stmt),
}

/// One statement.
#[derive(Debug, Clone, Serialize)]
pub enum Stmt {
    /// A bare `;`.
    Empty,
    /// An expression evaluated for effect.
    Exp(Exp),
    Assign(AssignStmt),
    /// `return;` or `return exp;`.
    Return(Option<Exp>),
    Break,
    Continue,
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
}

/// `target = value;` — the target is stored before the value.
#[derive(Debug, Clone, Serialize)]
pub struct AssignStmt {
    pub target: LVal,
    pub value: Exp,
}

/// A conditional. Presence or absence of `else_branch` is the sole
/// disambiguator of the dangling else; the grammar resolves the ambiguity
/// before this node is built.
#[derive(Debug, Clone, Serialize)]
pub struct IfStmt {
    pub cond: Exp,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

/// A `while` loop.
#[derive(Debug, Clone, Serialize)]
pub struct WhileStmt {
    pub cond: Exp,
    pub body: Box<Stmt>,
}
