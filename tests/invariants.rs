use alaias::{analyze, statistics, tokenize, TokenKind};

const SAMPLES: &[&str] = &[
    "als\nintn x\nx <= 5\n",
    "intn x\n",
    "als\n\"unterminated\n",
    "als\ncdt [x gt 0]\nwrt x\n!cdt\nwrt 0\n",
    "als\ncycle [i lt 10]\nwrt i\n",
    "",
];

#[test]
fn token_stream_always_ends_with_exactly_one_eof() {
    for source in SAMPLES {
        let tokens = tokenize(source);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
        assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }
}

#[test]
fn error_tokens_always_carry_a_description() {
    for source in SAMPLES {
        let tokens = tokenize(source);
        for token in &tokens {
            if token.is_error {
                assert!(!token.description.is_empty(), "error token without description: {token:?}");
            }
        }
    }
}

#[test]
fn parse_tree_is_never_missing() {
    for source in SAMPLES {
        let (_, tree, _) = analyze(source);
        assert_eq!(tree.children.len(), 2);
    }
}

#[test]
fn statistics_total_matches_non_trivial_tokens() {
    for source in SAMPLES {
        let tokens = tokenize(source);
        let stats = statistics(&tokens);
        let expected = tokens
            .iter()
            .filter(|t| !matches!(t.kind, TokenKind::Eof | TokenKind::Whitespace))
            .count();
        assert_eq!(stats.total, expected);
        assert_eq!(stats.total, stats.errors + stats.valid);
    }
}

#[test]
fn empty_balanced_program_has_no_syntactic_errors() {
    let (_, _, errors) = analyze("als\n");
    assert!(errors.is_empty());
}
