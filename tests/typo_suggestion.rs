use alaias::{tokenize, TokenKind};

#[test]
fn misspelled_write_keyword_suggests_correction() {
    let tokens = tokenize("als\nwr \"hi\"\n");
    let typo = tokens
        .iter()
        .find(|t| t.kind == TokenKind::MalformedReservedWord)
        .expect("expected a MALFORMED_RESERVED_WORD diagnostic");
    assert!(typo.description.contains("wrt"));
}

#[test]
fn misspelled_relational_operator_inside_condition_suggests_correction() {
    let tokens = tokenize("als\ncdt [x maior 0]\n");
    let typo = tokens
        .iter()
        .find(|t| t.kind == TokenKind::MalformedRelationalOperator)
        .expect("expected a MALFORMED_RELATIONAL_OPERATOR diagnostic");
    assert!(typo.description.contains("gt"));
}
