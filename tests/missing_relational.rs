use alaias::{tokenize, TokenKind};

#[test]
fn two_adjacent_operands_without_a_relational_operator_are_flagged() {
    let tokens = tokenize("als\ncdt [x 0]\n");
    let error = tokens
        .iter()
        .find(|t| t.kind == TokenKind::MissingRelationalOperator)
        .expect("expected a MISSING_RELATIONAL_OPERATOR diagnostic");
    assert_eq!(error.lexeme, "x 0");
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 6);
}

#[test]
fn a_well_formed_condition_is_clean() {
    let tokens = tokenize("als\ncdt [x gt 0]\n");
    assert!(!tokens
        .iter()
        .any(|t| t.kind == TokenKind::MissingRelationalOperator));
}
