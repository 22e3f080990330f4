use alaias::analyze;

#[test]
fn well_formed_program_has_no_errors() {
    let source = "als\nintn x\nx <= 5\ncdt [x gt 0]\nwrt x\n";
    let (tokens, tree, syntactic_errors) = analyze(source);

    assert!(!tokens.iter().any(|t| t.is_error));
    assert!(syntactic_errors.is_empty());
    assert_eq!(tree.children.len(), 2);
}
