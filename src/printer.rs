//! Canonical indented-text rendering of the AST
//!
//! [`Printer`] is the reference traversal: every node contributes one
//! labeled line, children sit two spaces deeper than their parent, and the
//! same tree always renders to byte-identical text, so parser output can be
//! diffed against golden files.
//!
//! Handlers return their subtree's text with children already indented
//! relative to the subtree root; parents splice child blocks through
//! [`indent`]. There is no shared depth counter, so a `Printer` carries no
//! state between calls and is safely reusable and reentrant.

use crate::ast::*;
use crate::visitor::{Accept, Visitor};

/// Renders a tree as indented, labeled text.
#[derive(Debug, Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Printer
    }

    /// Render a whole compilation unit.
    pub fn print(&mut self, unit: &CompUnit) -> String {
        unit.accept(self)
    }

    /// Renders `label` followed by the expressions one level deeper, or
    /// nothing at all when the sequence is empty.
    fn exp_list(&mut self, label: &str, exps: &[Exp]) -> String {
        if exps.is_empty() {
            return String::new();
        }
        let mut children = String::new();
        for exp in exps {
            children.push_str(&self.visit_lor_exp(exp));
        }
        format!("{}\n{}", label, indent(&children))
    }
}

/// Shifts every line of an already-rendered block one level deeper.
fn indent(block: &str) -> String {
    let mut out = String::with_capacity(block.len() + block.lines().count() * 2);
    for line in block.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

impl Visitor for Printer {
    type Output = String;

    fn visit_comp_unit(&mut self, unit: &CompUnit) -> String {
        let mut children = String::new();
        for def in unit.defs.iter() {
            children.push_str(&def.accept(self));
        }
        format!("CompUnit:\n{}", indent(&children))
    }

    fn visit_const_decl(&mut self, decl: &ConstDecl) -> String {
        let mut children = format!("BType:{}\n", decl.btype);
        for def in decl.defs.iter() {
            children.push_str(&self.visit_const_def(def));
        }
        format!("ConstDecl:\n{}", indent(&children))
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> String {
        let mut children = format!("BType:{}\n", decl.btype);
        for def in decl.defs.iter() {
            children.push_str(&self.visit_var_def(def));
        }
        format!("Decl:\n{}", indent(&children))
    }

    fn visit_const_def(&mut self, def: &ConstDef) -> String {
        let mut children = format!("Ident:{}\n", def.ident);
        children.push_str(&self.exp_list("Arrays:", &def.dims));
        // The initializer of a constant renders as ConstInitVal.
        children.push_str("Const");
        children.push_str(&self.visit_init_val(&def.init));
        format!("ConstDef:\n{}", indent(&children))
    }

    fn visit_var_def(&mut self, def: &VarDef) -> String {
        let mut children = format!("Ident:{}\n", def.ident);
        children.push_str(&self.exp_list("Arrays:", &def.dims));
        if let Some(init) = &def.init {
            children.push_str(&self.visit_init_val(init));
        }
        format!("Def:\n{}", indent(&children))
    }

    fn visit_init_val(&mut self, init: &InitVal) -> String {
        match init {
            InitVal::Exp(exp) => format!("InitVal:\n{}", indent(&self.visit_lor_exp(exp))),
            InitVal::List(items) if items.is_empty() => "InitVal:{}\n".to_string(),
            InitVal::List(items) => {
                let mut inner = String::new();
                for item in items {
                    inner.push_str(&self.visit_init_val(item));
                }
                let list = format!("InitValList:\n{}", indent(&inner));
                format!("InitVal:\n{}", indent(&list))
            }
        }
    }

    fn visit_func_def(&mut self, func: &FuncDef) -> String {
        let mut children = format!("FuncType:{}\n", func.func_type);
        children.push_str(&format!("Ident:{}\n", func.ident));
        if !func.params.is_empty() {
            let mut params = String::new();
            for param in &func.params {
                params.push_str(&self.visit_func_param(param));
            }
            children.push_str(&format!("FuncFParamList:\n{}", indent(&params)));
        }
        children.push_str(&self.visit_block(&func.body));
        format!("FuncDef:\n{}", indent(&children))
    }

    fn visit_func_param(&mut self, param: &FuncParam) -> String {
        let mut children = format!("BType:{}\n", param.btype);
        children.push_str(&format!("Ident:{}\n", param.ident));
        if let ParamKind::Array(dims) = &param.kind {
            // The implicit unsized first dimension of an array parameter.
            children.push_str("Array:[]\n");
            children.push_str(&self.exp_list("Arrays:", dims));
        }
        format!("FuncFParam:\n{}", indent(&children))
    }

    fn visit_block(&mut self, block: &Block) -> String {
        if block.items.is_empty() {
            return "Block:\n".to_string();
        }
        let mut items = String::new();
        for item in &block.items {
            items.push_str(&item.accept(self));
        }
        let list = format!("BlockItemList:\n{}", indent(&items));
        format!("Block:\n{}", indent(&list))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Empty => "Stmt:Semicolon\n".to_string(),
            Stmt::Break => "Stmt:Break\n".to_string(),
            Stmt::Continue => "Stmt:Continue\n".to_string(),
            Stmt::Exp(exp) => format!("Stmt:Exp\n{}", indent(&self.visit_lor_exp(exp))),
            Stmt::Assign(assign) => {
                let mut children = self.visit_lval(&assign.target);
                children.push_str(&self.visit_lor_exp(&assign.value));
                format!("Stmt:Assign\n{}", indent(&children))
            }
            Stmt::Return(None) => "Stmt:Return\n".to_string(),
            Stmt::Return(Some(exp)) => {
                format!("Stmt:Return\n{}", indent(&self.visit_lor_exp(exp)))
            }
            Stmt::Block(block) => format!("Stmt:Block\n{}", indent(&self.visit_block(block))),
            Stmt::If(if_stmt) => {
                let mut children = self.visit_lor_exp(&if_stmt.cond);
                children.push_str(&self.visit_stmt(&if_stmt.then_branch));
                if let Some(else_branch) = &if_stmt.else_branch {
                    children.push_str("Else\n");
                    children.push_str(&self.visit_stmt(else_branch));
                }
                format!("Stmt:If\n{}", indent(&children))
            }
            Stmt::While(while_stmt) => {
                let mut children = self.visit_lor_exp(&while_stmt.cond);
                children.push_str(&self.visit_stmt(&while_stmt.body));
                format!("Stmt:While\n{}", indent(&children))
            }
        }
    }

    fn visit_lor_exp(&mut self, exp: &LOrExp) -> String {
        let children = match exp {
            LOrExp::LAnd(land) => self.visit_land_exp(land),
            LOrExp::Or { left, right } => {
                let mut s = self.visit_lor_exp(left);
                s.push_str("OR_OP:||\n");
                s.push_str(&self.visit_land_exp(right));
                s
            }
        };
        format!("LOrExp:\n{}", indent(&children))
    }

    fn visit_land_exp(&mut self, exp: &LAndExp) -> String {
        let children = match exp {
            LAndExp::Eq(eq) => self.visit_eq_exp(eq),
            LAndExp::And { left, right } => {
                let mut s = self.visit_land_exp(left);
                s.push_str("AND_OP:&&\n");
                s.push_str(&self.visit_eq_exp(right));
                s
            }
        };
        format!("LAndExp:\n{}", indent(&children))
    }

    fn visit_eq_exp(&mut self, exp: &EqExp) -> String {
        let children = match exp {
            EqExp::Rel(rel) => self.visit_rel_exp(rel),
            EqExp::Binary { left, op, right } => {
                let mut s = self.visit_eq_exp(left);
                s.push_str(&format!("EqOP:{}\n", op));
                s.push_str(&self.visit_rel_exp(right));
                s
            }
        };
        format!("EqExp:\n{}", indent(&children))
    }

    fn visit_rel_exp(&mut self, exp: &RelExp) -> String {
        let children = match exp {
            RelExp::Add(add) => self.visit_add_exp(add),
            RelExp::Binary { left, op, right } => {
                let mut s = self.visit_rel_exp(left);
                s.push_str(&format!("RelOP:{}\n", op));
                s.push_str(&self.visit_add_exp(right));
                s
            }
        };
        format!("RelExp:\n{}", indent(&children))
    }

    fn visit_add_exp(&mut self, exp: &AddExp) -> String {
        let children = match exp {
            AddExp::Mul(mul) => self.visit_mul_exp(mul),
            AddExp::Binary { left, op, right } => {
                let mut s = self.visit_add_exp(left);
                s.push_str(&format!("AddOP:{}\n", op));
                s.push_str(&self.visit_mul_exp(right));
                s
            }
        };
        format!("AddExp:\n{}", indent(&children))
    }

    fn visit_mul_exp(&mut self, exp: &MulExp) -> String {
        let children = match exp {
            MulExp::Unary(unary) => self.visit_unary_exp(unary),
            MulExp::Binary { left, op, right } => {
                let mut s = self.visit_mul_exp(left);
                s.push_str(&format!("MulOP:{}\n", op));
                s.push_str(&self.visit_unary_exp(right));
                s
            }
        };
        format!("MulExp:\n{}", indent(&children))
    }

    fn visit_unary_exp(&mut self, exp: &UnaryExp) -> String {
        let children = match exp {
            UnaryExp::Primary(primary) => self.visit_primary_exp(primary),
            UnaryExp::Unary { op, operand } => {
                format!("UnaryOp:{}\n{}", op, self.visit_unary_exp(operand))
            }
            UnaryExp::Call(call) => self.visit_call(call),
        };
        format!("UnaryExp:\n{}", indent(&children))
    }

    fn visit_primary_exp(&mut self, exp: &PrimaryExp) -> String {
        let children = match exp {
            PrimaryExp::Paren(exp) => self.visit_lor_exp(exp),
            PrimaryExp::LVal(lval) => self.visit_lval(lval),
            PrimaryExp::Number(number) => self.visit_number(number),
        };
        format!("PrimaryExp:\n{}", indent(&children))
    }

    fn visit_lval(&mut self, lval: &LVal) -> String {
        let mut children = format!("Ident:{}\n", lval.ident);
        children.push_str(&self.exp_list("Arrays:", &lval.indices));
        format!("LVal:\n{}", indent(&children))
    }

    fn visit_call(&mut self, call: &CallExp) -> String {
        let mut children = format!("Ident:{}\n", call.ident);
        if !call.args.is_empty() {
            let mut args = String::new();
            for arg in &call.args {
                args.push_str(&self.visit_lor_exp(arg));
            }
            children.push_str(&format!(
                "FuncRParamList:{}\n{}",
                call.args.len(),
                indent(&args)
            ));
        }
        format!("Call:\n{}", indent(&children))
    }

    fn visit_number(&mut self, number: &Number) -> String {
        match number {
            Number::Int(v) => format!("Number: IntConst: {}\n", v),
            Number::Float(v) => format!("Number: FloatConst: {}\n", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_shifts_every_line() {
        assert_eq!(indent("a:\n  b:\n"), "  a:\n    b:\n");
        assert_eq!(indent(""), "");
    }

    #[test]
    fn number_lines_carry_the_literal() {
        let mut printer = Printer::new();
        assert_eq!(
            printer.visit_number(&Number::Int(42)),
            "Number: IntConst: 42\n"
        );
        assert_eq!(
            printer.visit_number(&Number::Float(1.5)),
            "Number: FloatConst: 1.5\n"
        );
    }

    #[test]
    fn empty_block_renders_without_item_list() {
        let mut printer = Printer::new();
        assert_eq!(printer.visit_block(&Block::empty()), "Block:\n");
    }

    #[test]
    fn subtree_rendering_is_independent_of_context() {
        let mut printer = Printer::new();
        let standalone = printer.visit_stmt(&Stmt::Return(Some(Exp::from(Number::Int(0)))));
        // Rendering something else in between must not change the result.
        printer.visit_stmt(&Stmt::Break);
        let again = printer.visit_stmt(&Stmt::Return(Some(Exp::from(Number::Int(0)))));
        assert_eq!(standalone, again);
    }
}
