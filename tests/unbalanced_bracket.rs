use alaias::{analyze, SyntacticErrorKind};

#[test]
fn missing_closing_bracket_is_reported() {
    let (_, _, errors) = analyze("als\ncdt [x gt 0\nwrt x\n");
    assert!(errors.iter().any(|e| e.kind == SyntacticErrorKind::UnbalancedBracket));
}

#[test]
fn missing_closing_paren_is_reported() {
    let (_, _, errors) = analyze("als\nfunc f(\n");
    assert!(errors.iter().any(|e| e.kind == SyntacticErrorKind::UnbalancedParen));
}

#[test]
fn balanced_brackets_report_nothing() {
    let (_, _, errors) = analyze("als\ncdt [x gt 0]\nwrt x\n");
    assert!(!errors
        .iter()
        .any(|e| matches!(e.kind, SyntacticErrorKind::UnbalancedBracket | SyntacticErrorKind::UnbalancedParen)));
}
