use alaias::{tokenize, TokenKind};

#[test]
fn input_referencing_an_undeclared_variable_is_flagged() {
    let tokens = tokenize("als\ninput(y)\n");
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::InputUndeclaredVariable));
}

#[test]
fn input_without_parentheses_is_flagged_as_malformed() {
    let tokens = tokenize("als\nintn y\ninput y\n");
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::InputMalformedSyntax));
}

#[test]
fn input_on_a_declared_variable_is_clean() {
    let tokens = tokenize("als\nintn y\ninput(y)\n");
    assert!(!tokens
        .iter()
        .any(|t| t.kind == TokenKind::InputUndeclaredVariable || t.kind == TokenKind::InputMalformedSyntax));
}
