//! Query API and walkers for common AST traversal patterns
//!
//! Lightweight, closure-driven traversal for analyses that do not need the
//! full [`crate::visitor::Visitor`] protocol: walking statements in pre- or
//! post-order with early exit, collecting the expressions a statement owns,
//! and asking simple questions of an expression chain.

use super::decl::{Decl, InitVal};
use super::expr::{
    AddExp, CallExp, EqExp, Exp, LAndExp, LOrExp, LVal, MulExp, PrimaryExp, RelExp, UnaryExp,
};
use super::stmt::{BlockItem, Stmt};
use std::collections::HashSet;

/// Extension trait for statement traversal
pub trait StmtExt {
    /// Walk the statement tree in pre-order. Return `Err` to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>;

    /// Walk the statement tree in post-order (children before parents).
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>;

    /// Find all sub-statements matching a predicate.
    fn find_statements<F>(&self, predicate: F) -> Vec<&Stmt>
    where
        F: Fn(&Stmt) -> bool;

    /// Visit every expression owned by this statement tree, including array
    /// dimensions, index expressions and initializers of nested declarations.
    fn walk_exps<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Exp) -> Result<(), E>;

    /// Whether the statement or any sub-statement is a return.
    fn contains_return(&self) -> bool;
}

impl StmtExt for Stmt {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>,
    {
        visitor(self)?;

        match self {
            Stmt::Block(block) => {
                for item in &block.items {
                    if let BlockItem::Stmt(stmt) = item {
                        stmt.walk(visitor)?;
                    }
                }
            }
            Stmt::If(if_stmt) => {
                if_stmt.then_branch.walk(visitor)?;
                if let Some(else_branch) = &if_stmt.else_branch {
                    else_branch.walk(visitor)?;
                }
            }
            Stmt::While(while_stmt) => {
                while_stmt.body.walk(visitor)?;
            }
            // Leaf statements
            Stmt::Empty
            | Stmt::Exp(_)
            | Stmt::Assign(_)
            | Stmt::Return(_)
            | Stmt::Break
            | Stmt::Continue => {}
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>,
    {
        match self {
            Stmt::Block(block) => {
                for item in &block.items {
                    if let BlockItem::Stmt(stmt) = item {
                        stmt.walk_post(visitor)?;
                    }
                }
            }
            Stmt::If(if_stmt) => {
                if_stmt.then_branch.walk_post(visitor)?;
                if let Some(else_branch) = &if_stmt.else_branch {
                    else_branch.walk_post(visitor)?;
                }
            }
            Stmt::While(while_stmt) => {
                while_stmt.body.walk_post(visitor)?;
            }
            Stmt::Empty
            | Stmt::Exp(_)
            | Stmt::Assign(_)
            | Stmt::Return(_)
            | Stmt::Break
            | Stmt::Continue => {}
        }

        visitor(self)
    }

    fn find_statements<F>(&self, predicate: F) -> Vec<&Stmt>
    where
        F: Fn(&Stmt) -> bool,
    {
        let mut results = Vec::new();
        collect_matching(self, &predicate, &mut results);
        results
    }

    fn walk_exps<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Exp) -> Result<(), E>,
    {
        match self {
            Stmt::Exp(exp) => visitor(exp)?,
            Stmt::Assign(assign) => {
                for index in &assign.target.indices {
                    visitor(index)?;
                }
                visitor(&assign.value)?;
            }
            Stmt::Return(Some(exp)) => visitor(exp)?,
            Stmt::Return(None) | Stmt::Empty | Stmt::Break | Stmt::Continue => {}
            Stmt::If(if_stmt) => {
                visitor(&if_stmt.cond)?;
                if_stmt.then_branch.walk_exps(visitor)?;
                if let Some(else_branch) = &if_stmt.else_branch {
                    else_branch.walk_exps(visitor)?;
                }
            }
            Stmt::While(while_stmt) => {
                visitor(&while_stmt.cond)?;
                while_stmt.body.walk_exps(visitor)?;
            }
            Stmt::Block(block) => {
                for item in &block.items {
                    match item {
                        BlockItem::Stmt(stmt) => stmt.walk_exps(visitor)?,
                        BlockItem::Decl(decl) => walk_decl_exps(decl, visitor)?,
                    }
                }
            }
        }
        Ok(())
    }

    fn contains_return(&self) -> bool {
        let mut found = false;
        let _ = self.walk(&mut |stmt| {
            if matches!(stmt, Stmt::Return(_)) {
                found = true;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        found
    }
}

fn collect_matching<'a, F>(stmt: &'a Stmt, predicate: &F, results: &mut Vec<&'a Stmt>)
where
    F: Fn(&Stmt) -> bool,
{
    if predicate(stmt) {
        results.push(stmt);
    }

    match stmt {
        Stmt::Block(block) => {
            for item in &block.items {
                if let BlockItem::Stmt(s) = item {
                    collect_matching(s, predicate, results);
                }
            }
        }
        Stmt::If(if_stmt) => {
            collect_matching(&if_stmt.then_branch, predicate, results);
            if let Some(else_branch) = &if_stmt.else_branch {
                collect_matching(else_branch, predicate, results);
            }
        }
        Stmt::While(while_stmt) => {
            collect_matching(&while_stmt.body, predicate, results);
        }
        _ => {}
    }
}

fn walk_decl_exps<F, E>(decl: &Decl, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&Exp) -> Result<(), E>,
{
    match decl {
        Decl::Const(decl) => {
            for def in decl.defs.iter() {
                for dim in &def.dims {
                    visitor(dim)?;
                }
                walk_init_exps(&def.init, visitor)?;
            }
        }
        Decl::Var(decl) => {
            for def in decl.defs.iter() {
                for dim in &def.dims {
                    visitor(dim)?;
                }
                if let Some(init) = &def.init {
                    walk_init_exps(init, visitor)?;
                }
            }
        }
    }
    Ok(())
}

fn walk_init_exps<F, E>(init: &InitVal, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&Exp) -> Result<(), E>,
{
    match init {
        InitVal::Exp(exp) => visitor(exp),
        InitVal::List(items) => {
            for item in items {
                walk_init_exps(item, visitor)?;
            }
            Ok(())
        }
    }
}

/// Query API for common expression-chain questions
pub struct AstQuery;

impl AstQuery {
    /// Check if an expression contains any function calls.
    pub fn contains_calls(exp: &Exp) -> bool {
        Self::count_calls(exp) > 0
    }

    /// Count the number of function calls in an expression, including calls
    /// nested inside argument lists and array indices.
    pub fn count_calls(exp: &Exp) -> usize {
        let mut count = 0;
        for_each_unary(exp, &mut |unary| {
            if matches!(unary, UnaryExp::Call(_)) {
                count += 1;
            }
        });
        count
    }

    /// Get all identifiers referenced in an expression: variable references
    /// and the names of called functions.
    pub fn collect_identifiers(exp: &Exp) -> HashSet<String> {
        let mut ids = HashSet::new();
        for_each_unary(exp, &mut |unary| match unary {
            UnaryExp::Primary(PrimaryExp::LVal(LVal { ident, .. })) => {
                ids.insert(ident.clone());
            }
            UnaryExp::Call(CallExp { ident, .. }) => {
                ids.insert(ident.clone());
            }
            _ => {}
        });
        ids
    }
}

// The chain is transparent to these queries: each level either forwards to
// the level below or recurses into both operands of a binary node, until a
// unary node is reached.

fn for_each_unary<F: FnMut(&UnaryExp)>(exp: &LOrExp, f: &mut F) {
    match exp {
        LOrExp::LAnd(land) => walk_land(land, f),
        LOrExp::Or { left, right } => {
            for_each_unary(left, f);
            walk_land(right, f);
        }
    }
}

fn walk_land<F: FnMut(&UnaryExp)>(exp: &LAndExp, f: &mut F) {
    match exp {
        LAndExp::Eq(eq) => walk_eq(eq, f),
        LAndExp::And { left, right } => {
            walk_land(left, f);
            walk_eq(right, f);
        }
    }
}

fn walk_eq<F: FnMut(&UnaryExp)>(exp: &EqExp, f: &mut F) {
    match exp {
        EqExp::Rel(rel) => walk_rel(rel, f),
        EqExp::Binary { left, right, .. } => {
            walk_eq(left, f);
            walk_rel(right, f);
        }
    }
}

fn walk_rel<F: FnMut(&UnaryExp)>(exp: &RelExp, f: &mut F) {
    match exp {
        RelExp::Add(add) => walk_add(add, f),
        RelExp::Binary { left, right, .. } => {
            walk_rel(left, f);
            walk_add(right, f);
        }
    }
}

fn walk_add<F: FnMut(&UnaryExp)>(exp: &AddExp, f: &mut F) {
    match exp {
        AddExp::Mul(mul) => walk_mul(mul, f),
        AddExp::Binary { left, right, .. } => {
            walk_add(left, f);
            walk_mul(right, f);
        }
    }
}

fn walk_mul<F: FnMut(&UnaryExp)>(exp: &MulExp, f: &mut F) {
    match exp {
        MulExp::Unary(unary) => walk_unary(unary, f),
        MulExp::Binary { left, right, .. } => {
            walk_mul(left, f);
            walk_unary(right, f);
        }
    }
}

fn walk_unary<F: FnMut(&UnaryExp)>(exp: &UnaryExp, f: &mut F) {
    f(exp);
    match exp {
        UnaryExp::Primary(PrimaryExp::Paren(inner)) => for_each_unary(inner, f),
        UnaryExp::Primary(PrimaryExp::LVal(lval)) => {
            for index in &lval.indices {
                for_each_unary(index, f);
            }
        }
        UnaryExp::Primary(PrimaryExp::Number(_)) => {}
        UnaryExp::Unary { operand, .. } => walk_unary(operand, f),
        UnaryExp::Call(call) => {
            for arg in &call.args {
                for_each_unary(arg, f);
            }
        }
    }
}
