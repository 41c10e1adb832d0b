//! Declaration AST node definitions
//!
//! Constant and variable declarations, the named bindings they introduce,
//! initializer trees, and function definitions with their formal parameters.
//! Constness is a structural distinction rather than a flag so that the
//! "const bindings must carry an initializer" rule cannot be violated by
//! construction.

use super::expr::Exp;
use super::stmt::Block;
use nonempty::NonEmpty;
use serde::Serialize;
use std::fmt;

/// Base type of a declaration or formal parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BType {
    Int,
    Float,
}

impl fmt::Display for BType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BType::Int => write!(f, "int"),
            BType::Float => write!(f, "float"),
        }
    }
}

/// Return type of a function definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FuncType {
    Void,
    Int,
    Float,
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FuncType::Void => write!(f, "void"),
            FuncType::Int => write!(f, "int"),
            FuncType::Float => write!(f, "float"),
        }
    }
}

/// A declaration, at file scope or inside a block.
#[derive(Debug, Clone, Serialize)]
pub enum Decl {
    Const(ConstDecl),
    Var(VarDecl),
}

/// `const int a = 1, b[2] = {1, 2};`
#[derive(Debug, Clone, Serialize)]
pub struct ConstDecl {
    pub btype: BType,
    pub defs: NonEmpty<ConstDef>,
}

/// `int a, b[2] = {1, 2};`
#[derive(Debug, Clone, Serialize)]
pub struct VarDecl {
    pub btype: BType,
    pub defs: NonEmpty<VarDef>,
}

/// One constant binding; the initializer is mandatory.
#[derive(Debug, Clone, Serialize)]
pub struct ConstDef {
    pub ident: String,
    /// Array dimension expressions, outermost first; empty means scalar.
    pub dims: Vec<Exp>,
    pub init: InitVal,
}

/// One variable binding; the initializer is optional.
#[derive(Debug, Clone, Serialize)]
pub struct VarDef {
    pub ident: String,
    /// Array dimension expressions, outermost first; empty means scalar.
    pub dims: Vec<Exp>,
    pub init: Option<InitVal>,
}

/// Initializer for a binding or a nested array element: either a single
/// expression or a brace-enclosed list of further initializers, nested to
/// any depth. `{}` is the empty list.
#[derive(Debug, Clone, Serialize)]
pub enum InitVal {
    Exp(Exp),
    List(Vec<InitVal>),
}

/// A function definition.
#[derive(Debug, Clone, Serialize)]
pub struct FuncDef {
    pub func_type: FuncType,
    pub ident: String,
    pub params: Vec<FuncParam>,
    pub body: Block,
}

/// One formal parameter.
#[derive(Debug, Clone, Serialize)]
pub struct FuncParam {
    pub btype: BType,
    pub ident: String,
    pub kind: ParamKind,
}

/// Whether a parameter is a scalar or an array. An array parameter's first
/// dimension is always unsized (`int a[]`, `int a[][3]`), so `Array` carries
/// only the dimensions after the implicit first one.
#[derive(Debug, Clone, Serialize)]
pub enum ParamKind {
    Scalar,
    Array(Vec<Exp>),
}
