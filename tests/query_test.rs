mod common;

use common::*;
use nonempty::NonEmpty;
use sysy_ast::ast::query::AstQuery;
use sysy_ast::ast::query::StmtExt;
use sysy_ast::*;

#[test]
fn test_contains_calls() {
    // Simple identifier - no calls
    assert!(!AstQuery::contains_calls(&var("x")));

    // Function call
    let call = Exp::from(CallExp::new("foo", Vec::new()));
    assert!(AstQuery::contains_calls(&call));

    // Call hidden inside an array index
    let indexed = Exp::from(LVal::indexed(
        "a",
        vec![Exp::from(CallExp::new("idx", Vec::new()))],
    ));
    assert!(AstQuery::contains_calls(&indexed));
}

#[test]
fn test_count_calls_nested() {
    // f(g(1), h())
    let exp = Exp::from(CallExp::new(
        "f",
        vec![
            Exp::from(CallExp::new("g", vec![int(1)])),
            Exp::from(CallExp::new("h", Vec::new())),
        ],
    ));
    assert_eq!(AstQuery::count_calls(&exp), 3);
}

#[test]
fn test_collect_identifiers() {
    // x + y
    let exp = {
        let left = AddExp::from(MulExp::from(UnaryExp::from(PrimaryExp::from(
            LVal::scalar("x"),
        ))));
        let right = MulExp::from(UnaryExp::from(PrimaryExp::from(LVal::scalar("y"))));
        Exp::from(AddExp::Binary {
            left: Box::new(left),
            op: AddOp::Add,
            right,
        })
    };

    let ids = AstQuery::collect_identifiers(&exp);
    assert_eq!(ids.len(), 2);
    assert!(ids.contains("x"));
    assert!(ids.contains("y"));

    // A call contributes its own name and its argument identifiers.
    let call = Exp::from(CallExp::new("f", vec![var("arg")]));
    let ids = AstQuery::collect_identifiers(&call);
    assert_eq!(ids.len(), 2);
    assert!(ids.contains("f"));
    assert!(ids.contains("arg"));
}

#[test]
fn test_walk_statements_pre_order() {
    let block = Stmt::Block(Block::new(vec![
        BlockItem::Stmt(Stmt::Assign(AssignStmt {
            target: LVal::scalar("x"),
            value: int(42),
        })),
        BlockItem::Stmt(Stmt::Exp(var("x"))),
        BlockItem::Stmt(Stmt::Return(Some(var("x")))),
    ]));

    let mut visited = Vec::new();
    let result = block.walk(&mut |stmt| {
        match stmt {
            Stmt::Block(_) => visited.push("block"),
            Stmt::Assign(_) => visited.push("assign"),
            Stmt::Exp(_) => visited.push("exp"),
            Stmt::Return(_) => visited.push("return"),
            _ => visited.push("other"),
        }
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    assert_eq!(visited, vec!["block", "assign", "exp", "return"]);
}

#[test]
fn test_walk_post_order_visits_children_first() {
    let if_stmt = Stmt::If(IfStmt {
        cond: var("c"),
        then_branch: Box::new(Stmt::Block(Block::new(vec![BlockItem::Stmt(
            Stmt::Break,
        )]))),
        else_branch: Some(Box::new(Stmt::Continue)),
    });

    let mut visited = Vec::new();
    let result = if_stmt.walk_post(&mut |stmt| {
        match stmt {
            Stmt::If(_) => visited.push("if"),
            Stmt::Block(_) => visited.push("block"),
            Stmt::Break => visited.push("break"),
            Stmt::Continue => visited.push("continue"),
            _ => visited.push("other"),
        }
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    assert_eq!(visited, vec!["break", "block", "continue", "if"]);
}

#[test]
fn test_walk_stops_early_on_err() {
    let block = Stmt::Block(Block::new(vec![
        BlockItem::Stmt(Stmt::Empty),
        BlockItem::Stmt(Stmt::Break),
        BlockItem::Stmt(Stmt::Continue),
    ]));

    let mut seen = 0;
    let result = block.walk(&mut |stmt| {
        seen += 1;
        if matches!(stmt, Stmt::Break) {
            Err("stop")
        } else {
            Ok(())
        }
    });

    assert_eq!(result, Err("stop"));
    assert_eq!(seen, 3); // block, empty, break - continue never visited
}

#[test]
fn test_find_statements() {
    let loop_stmt = Stmt::While(WhileStmt {
        cond: var("c"),
        body: Box::new(Stmt::Block(Block::new(vec![
            BlockItem::Stmt(Stmt::Return(None)),
            BlockItem::Stmt(Stmt::If(IfStmt {
                cond: var("d"),
                then_branch: Box::new(Stmt::Return(Some(int(1)))),
                else_branch: None,
            })),
        ]))),
    });

    let returns = loop_stmt.find_statements(|s| matches!(s, Stmt::Return(_)));
    assert_eq!(returns.len(), 2);
}

#[test]
fn test_walk_exps_covers_declarations_in_blocks() {
    // { int a[2] = {1}; x = a[0]; }
    let block = Stmt::Block(Block::new(vec![
        BlockItem::Decl(var_decl(
            BType::Int,
            VarDef {
                ident: "a".to_string(),
                dims: vec![int(2)],
                init: Some(InitVal::List(vec![InitVal::Exp(int(1))])),
            },
        )),
        BlockItem::Stmt(Stmt::Assign(AssignStmt {
            target: LVal::indexed("a", vec![int(0)]),
            value: var("x"),
        })),
    ]));

    let mut count = 0;
    let result = block.walk_exps(&mut |_| {
        count += 1;
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    // dim, initializer element, index, assigned value
    assert_eq!(count, 4);
}

#[test]
fn test_contains_return() {
    let with_return = Stmt::While(WhileStmt {
        cond: var("c"),
        body: Box::new(Stmt::Return(None)),
    });
    assert!(with_return.contains_return());

    let without = Stmt::Block(Block::new(vec![
        BlockItem::Stmt(Stmt::Break),
        BlockItem::Stmt(Stmt::Empty),
    ]));
    assert!(!without.contains_return());
}

#[test]
fn test_queries_do_not_disturb_later_printing() {
    let unit = CompUnit::new(NonEmpty::new(TopLevelDef::Func(func(
        FuncType::Int,
        "main",
        vec![BlockItem::Stmt(Stmt::Return(Some(var("x"))))],
    ))));

    let before = print(&unit);
    if let TopLevelDef::Func(f) = unit.defs.first() {
        for item in &f.body.items {
            if let BlockItem::Stmt(stmt) = item {
                let _ = stmt.find_statements(|_| true);
            }
        }
    }
    assert_eq!(print(&unit), before);
}
