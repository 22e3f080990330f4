use alaias::{tokenize, TokenKind};

#[test]
fn assigning_a_real_literal_to_an_intn_variable_is_flagged() {
    let tokens = tokenize("als\nintn x\nx <= 3.5\n");
    let error = tokens
        .iter()
        .find(|t| t.kind == TokenKind::IncompatibleType)
        .expect("expected an INCOMPATIBLE_TYPE diagnostic");
    assert!(error.description.contains("x"));
    assert_eq!(error.lexeme, "x <= 3.5");
    assert_eq!(error.line, 3);
    assert_eq!(error.column, 1);
}

#[test]
fn assigning_a_bool_literal_to_a_bln_variable_is_clean() {
    let tokens = tokenize("als\nbln ok\nok <= valid\n");
    assert!(!tokens.iter().any(|t| t.kind == TokenKind::IncompatibleType));
}
