//! Expression AST node definitions
//!
//! SysY expressions are precedence-layered: each grammar level (logical-or
//! down to primary) is its own node type, and a level is either a
//! pass-through wrapper around the next lower level or a binary node whose
//! left operand stays at the same level while the right operand comes from
//! the level below. Left-associativity and precedence are therefore encoded
//! in the tree shape itself; no consumer ever needs to re-derive them.

use crate::error::AstError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The full expression grammar entered from above (statement conditions,
/// array dimensions, call arguments, initializers).
pub type Exp = LOrExp;

/// Logical-or level: `a || b`.
#[derive(Debug, Clone, Serialize)]
pub enum LOrExp {
    LAnd(LAndExp),
    Or {
        left: Box<LOrExp>,
        right: LAndExp,
    },
}

/// Logical-and level: `a && b`.
#[derive(Debug, Clone, Serialize)]
pub enum LAndExp {
    Eq(EqExp),
    And {
        left: Box<LAndExp>,
        right: EqExp,
    },
}

/// Equality level: `==`, `!=`.
#[derive(Debug, Clone, Serialize)]
pub enum EqExp {
    Rel(RelExp),
    Binary {
        left: Box<EqExp>,
        op: EqOp,
        right: RelExp,
    },
}

/// Relational level: `<`, `<=`, `>`, `>=`.
#[derive(Debug, Clone, Serialize)]
pub enum RelExp {
    Add(AddExp),
    Binary {
        left: Box<RelExp>,
        op: RelOp,
        right: AddExp,
    },
}

/// Additive level: `+`, `-`.
#[derive(Debug, Clone, Serialize)]
pub enum AddExp {
    Mul(MulExp),
    Binary {
        left: Box<AddExp>,
        op: AddOp,
        right: MulExp,
    },
}

/// Multiplicative level: `*`, `/`, `%`.
#[derive(Debug, Clone, Serialize)]
pub enum MulExp {
    Unary(UnaryExp),
    Binary {
        left: Box<MulExp>,
        op: MulOp,
        right: UnaryExp,
    },
}

/// Unary level: a primary, a prefixed unary, or a function call.
#[derive(Debug, Clone, Serialize)]
pub enum UnaryExp {
    Primary(PrimaryExp),
    Unary {
        op: UnaryOp,
        operand: Box<UnaryExp>,
    },
    Call(CallExp),
}

/// Primary level: a parenthesized expression, a variable reference or a
/// numeric literal.
#[derive(Debug, Clone, Serialize)]
pub enum PrimaryExp {
    Paren(Box<Exp>),
    LVal(LVal),
    Number(Number),
}

/// A variable reference, scalar (`indices` empty) or array-indexed.
#[derive(Debug, Clone, Serialize)]
pub struct LVal {
    pub ident: String,
    pub indices: Vec<Exp>,
}

impl LVal {
    pub fn scalar(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            indices: Vec::new(),
        }
    }

    pub fn indexed(ident: impl Into<String>, indices: Vec<Exp>) -> Self {
        Self {
            ident: ident.into(),
            indices,
        }
    }
}

/// A function invocation appearing inside a unary expression.
#[derive(Debug, Clone, Serialize)]
pub struct CallExp {
    pub ident: String,
    pub args: Vec<Exp>,
}

impl CallExp {
    pub fn new(ident: impl Into<String>, args: Vec<Exp>) -> Self {
        Self {
            ident: ident.into(),
            args,
        }
    }
}

/// A numeric literal; exactly one payload is meaningful per tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Number {
    Int(i32),
    Float(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EqOp {
    Eq,
    Ne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelOp {
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddOp {
    Add,
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MulOp {
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
}

impl fmt::Display for EqOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EqOp::Eq => write!(f, "=="),
            EqOp::Ne => write!(f, "!="),
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RelOp::Lt => write!(f, "<"),
            RelOp::Le => write!(f, "<="),
            RelOp::Gt => write!(f, ">"),
            RelOp::Ge => write!(f, ">="),
        }
    }
}

impl fmt::Display for AddOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddOp::Add => write!(f, "+"),
            AddOp::Sub => write!(f, "-"),
        }
    }
}

impl fmt::Display for MulOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MulOp::Mul => write!(f, "*"),
            MulOp::Div => write!(f, "/"),
            MulOp::Mod => write!(f, "%"),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Minus => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

impl FromStr for EqOp {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(EqOp::Eq),
            "!=" => Ok(EqOp::Ne),
            _ => Err(AstError::unknown_operator("equality", s)),
        }
    }
}

impl FromStr for RelOp {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(RelOp::Lt),
            "<=" => Ok(RelOp::Le),
            ">" => Ok(RelOp::Gt),
            ">=" => Ok(RelOp::Ge),
            _ => Err(AstError::unknown_operator("relational", s)),
        }
    }
}

impl FromStr for AddOp {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(AddOp::Add),
            "-" => Ok(AddOp::Sub),
            _ => Err(AstError::unknown_operator("additive", s)),
        }
    }
}

impl FromStr for MulOp {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "*" => Ok(MulOp::Mul),
            "/" => Ok(MulOp::Div),
            "%" => Ok(MulOp::Mod),
            _ => Err(AstError::unknown_operator("multiplicative", s)),
        }
    }
}

impl FromStr for UnaryOp {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(UnaryOp::Plus),
            "-" => Ok(UnaryOp::Minus),
            "!" => Ok(UnaryOp::Not),
            _ => Err(AstError::unknown_operator("unary", s)),
        }
    }
}

// Lifting a finished node one precedence level up is how the parser builds
// pass-through nodes. The chain never skips a level, so only adjacent lifts
// exist; the composed impls below run the whole ladder for leaf nodes.

impl From<Number> for PrimaryExp {
    fn from(n: Number) -> Self {
        PrimaryExp::Number(n)
    }
}

impl From<LVal> for PrimaryExp {
    fn from(lval: LVal) -> Self {
        PrimaryExp::LVal(lval)
    }
}

impl From<PrimaryExp> for UnaryExp {
    fn from(primary: PrimaryExp) -> Self {
        UnaryExp::Primary(primary)
    }
}

impl From<CallExp> for UnaryExp {
    fn from(call: CallExp) -> Self {
        UnaryExp::Call(call)
    }
}

impl From<UnaryExp> for MulExp {
    fn from(unary: UnaryExp) -> Self {
        MulExp::Unary(unary)
    }
}

impl From<MulExp> for AddExp {
    fn from(mul: MulExp) -> Self {
        AddExp::Mul(mul)
    }
}

impl From<AddExp> for RelExp {
    fn from(add: AddExp) -> Self {
        RelExp::Add(add)
    }
}

impl From<RelExp> for EqExp {
    fn from(rel: RelExp) -> Self {
        EqExp::Rel(rel)
    }
}

impl From<EqExp> for LAndExp {
    fn from(eq: EqExp) -> Self {
        LAndExp::Eq(eq)
    }
}

impl From<LAndExp> for LOrExp {
    fn from(land: LAndExp) -> Self {
        LOrExp::LAnd(land)
    }
}

impl From<EqExp> for Exp {
    fn from(eq: EqExp) -> Self {
        LOrExp::from(LAndExp::from(eq))
    }
}

impl From<RelExp> for Exp {
    fn from(rel: RelExp) -> Self {
        Exp::from(EqExp::from(rel))
    }
}

impl From<AddExp> for Exp {
    fn from(add: AddExp) -> Self {
        Exp::from(RelExp::from(add))
    }
}

impl From<MulExp> for Exp {
    fn from(mul: MulExp) -> Self {
        Exp::from(AddExp::from(mul))
    }
}

impl From<UnaryExp> for Exp {
    fn from(unary: UnaryExp) -> Self {
        Exp::from(MulExp::from(unary))
    }
}

impl From<PrimaryExp> for Exp {
    fn from(primary: PrimaryExp) -> Self {
        Exp::from(UnaryExp::from(primary))
    }
}

impl From<Number> for Exp {
    fn from(n: Number) -> Self {
        Exp::from(PrimaryExp::from(n))
    }
}

impl From<LVal> for Exp {
    fn from(lval: LVal) -> Self {
        Exp::from(PrimaryExp::from(lval))
    }
}

impl From<CallExp> for Exp {
    fn from(call: CallExp) -> Self {
        Exp::from(UnaryExp::from(call))
    }
}
