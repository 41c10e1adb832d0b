mod common;

use common::*;
use sysy_ast::*;

#[test]
fn compilation_unit_serializes_with_tagged_variants() {
    let unit = main_returning(int(0));
    let value = serde_json::to_value(&unit).expect("serializable tree");

    let func = &value["defs"][0]["Func"];
    assert_eq!(func["ident"], "main");
    assert_eq!(func["func_type"], "Int");

    // The full pass-through chain is visible in the serialized form.
    let literal = &func["body"]["items"][0]["Stmt"]["Return"]["LAnd"]["Eq"]["Rel"]["Add"]["Mul"]
        ["Unary"]["Primary"]["Number"]["Int"];
    assert_eq!(literal, 0);
}

#[test]
fn nonempty_definition_lists_serialize_as_sequences() {
    let unit = CompUnit::single(TopLevelDef::Decl(var_decl(
        BType::Int,
        VarDef {
            ident: "a".to_string(),
            dims: Vec::new(),
            init: None,
        },
    )));
    let value = serde_json::to_value(&unit).expect("serializable tree");

    let defs = &value["defs"][0]["Decl"]["Var"]["defs"];
    assert!(defs.is_array());
    assert_eq!(defs[0]["ident"], "a");
    assert!(defs[0]["init"].is_null());
}

#[test]
fn serialization_is_deterministic() {
    let unit = main_returning(add_chain(1, &[(AddOp::Add, 2)]));
    let first = serde_json::to_string(&unit).expect("serializable tree");
    let second = serde_json::to_string(&unit).expect("serializable tree");
    assert_eq!(first, second);
}
