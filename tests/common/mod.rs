#![allow(dead_code)]

use nonempty::NonEmpty;
use sysy_ast::*;

/// An integer literal lifted through the whole precedence chain.
pub fn int(v: i32) -> Exp {
    Exp::from(Number::Int(v))
}

/// A scalar variable reference lifted through the whole precedence chain.
pub fn var(name: &str) -> Exp {
    Exp::from(LVal::scalar(name))
}

/// A left-deep additive chain: `first op v op v ...`.
pub fn add_chain(first: i32, rest: &[(AddOp, i32)]) -> Exp {
    let mut acc = AddExp::from(MulExp::from(UnaryExp::from(PrimaryExp::from(
        Number::Int(first),
    ))));
    for (op, v) in rest {
        acc = AddExp::Binary {
            left: Box::new(acc),
            op: *op,
            right: MulExp::from(UnaryExp::from(PrimaryExp::from(Number::Int(*v)))),
        };
    }
    Exp::from(acc)
}

/// A function with no parameters.
pub fn func(func_type: FuncType, ident: &str, items: Vec<BlockItem>) -> FuncDef {
    FuncDef {
        func_type,
        ident: ident.to_string(),
        params: Vec::new(),
        body: Block::new(items),
    }
}

/// `int main() { return <exp>; }` wrapped in a compilation unit.
pub fn main_returning(exp: Exp) -> CompUnit {
    CompUnit::single(TopLevelDef::Func(func(
        FuncType::Int,
        "main",
        vec![BlockItem::Stmt(Stmt::Return(Some(exp)))],
    )))
}

/// A compilation unit holding a single statement inside `main`.
pub fn main_with(stmt: Stmt) -> CompUnit {
    CompUnit::single(TopLevelDef::Func(func(
        FuncType::Int,
        "main",
        vec![BlockItem::Stmt(stmt)],
    )))
}

/// A variable declaration with a single definition.
pub fn var_decl(btype: BType, def: VarDef) -> Decl {
    Decl::Var(VarDecl {
        btype,
        defs: NonEmpty::new(def),
    })
}

/// A constant declaration with a single definition.
pub fn const_decl(btype: BType, def: ConstDef) -> Decl {
    Decl::Const(ConstDecl {
        btype,
        defs: NonEmpty::new(def),
    })
}

/// Render a unit with a fresh printer.
pub fn print(unit: &CompUnit) -> String {
    Printer::new().print(unit)
}
