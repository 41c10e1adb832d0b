//! Double-dispatch traversal protocol over the AST
//!
//! A traversal implements [`Visitor`] with one handler per node family; the
//! trait has no default bodies, so forgetting a handler is a compile error
//! rather than a runtime surprise. [`Accept`] is the other half of the
//! dispatch: calling `node.accept(&mut visitor)` routes to the handler for
//! the node's own concrete variant, once, with no re-entry. Routing-only
//! enums (`TopLevelDef`, `Decl`, `BlockItem`) forward transparently to the
//! handler of the node they wrap.
//!
//! Dispatch never fails. Handlers recurse by calling `accept` on children,
//! so a traversal decides its own order and what to do at each node.

use crate::ast::*;

/// The closed set of handlers every traversal must provide.
pub trait Visitor {
    type Output;

    fn visit_comp_unit(&mut self, unit: &CompUnit) -> Self::Output;
    fn visit_const_decl(&mut self, decl: &ConstDecl) -> Self::Output;
    fn visit_var_decl(&mut self, decl: &VarDecl) -> Self::Output;
    fn visit_const_def(&mut self, def: &ConstDef) -> Self::Output;
    fn visit_var_def(&mut self, def: &VarDef) -> Self::Output;
    fn visit_init_val(&mut self, init: &InitVal) -> Self::Output;
    fn visit_func_def(&mut self, func: &FuncDef) -> Self::Output;
    fn visit_func_param(&mut self, param: &FuncParam) -> Self::Output;
    fn visit_block(&mut self, block: &Block) -> Self::Output;
    fn visit_stmt(&mut self, stmt: &Stmt) -> Self::Output;
    fn visit_lor_exp(&mut self, exp: &LOrExp) -> Self::Output;
    fn visit_land_exp(&mut self, exp: &LAndExp) -> Self::Output;
    fn visit_eq_exp(&mut self, exp: &EqExp) -> Self::Output;
    fn visit_rel_exp(&mut self, exp: &RelExp) -> Self::Output;
    fn visit_add_exp(&mut self, exp: &AddExp) -> Self::Output;
    fn visit_mul_exp(&mut self, exp: &MulExp) -> Self::Output;
    fn visit_unary_exp(&mut self, exp: &UnaryExp) -> Self::Output;
    fn visit_primary_exp(&mut self, exp: &PrimaryExp) -> Self::Output;
    fn visit_lval(&mut self, lval: &LVal) -> Self::Output;
    fn visit_call(&mut self, call: &CallExp) -> Self::Output;
    fn visit_number(&mut self, number: &Number) -> Self::Output;
}

/// Routes a node of statically unknown variant to its matching handler.
pub trait Accept {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output;
}

impl Accept for CompUnit {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_comp_unit(self)
    }
}

impl Accept for TopLevelDef {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            TopLevelDef::Decl(decl) => decl.accept(visitor),
            TopLevelDef::Func(func) => func.accept(visitor),
        }
    }
}

impl Accept for Decl {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Decl::Const(decl) => visitor.visit_const_decl(decl),
            Decl::Var(decl) => visitor.visit_var_decl(decl),
        }
    }
}

impl Accept for ConstDecl {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_const_decl(self)
    }
}

impl Accept for VarDecl {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_var_decl(self)
    }
}

impl Accept for ConstDef {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_const_def(self)
    }
}

impl Accept for VarDef {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_var_def(self)
    }
}

impl Accept for InitVal {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_init_val(self)
    }
}

impl Accept for FuncDef {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_func_def(self)
    }
}

impl Accept for FuncParam {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_func_param(self)
    }
}

impl Accept for Block {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_block(self)
    }
}

impl Accept for BlockItem {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            BlockItem::Decl(decl) => decl.accept(visitor),
            BlockItem::Stmt(stmt) => stmt.accept(visitor),
        }
    }
}

impl Accept for Stmt {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_stmt(self)
    }
}

impl Accept for LOrExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_lor_exp(self)
    }
}

impl Accept for LAndExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_land_exp(self)
    }
}

impl Accept for EqExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_eq_exp(self)
    }
}

impl Accept for RelExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_rel_exp(self)
    }
}

impl Accept for AddExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_add_exp(self)
    }
}

impl Accept for MulExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_mul_exp(self)
    }
}

impl Accept for UnaryExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_unary_exp(self)
    }
}

impl Accept for PrimaryExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_primary_exp(self)
    }
}

impl Accept for LVal {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_lval(self)
    }
}

impl Accept for CallExp {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_call(self)
    }
}

impl Accept for Number {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_number(self)
    }
}
