use std::collections::HashMap;

use crate::cst::CstNode;
use crate::lexer::{Token, TokenKind};
use crate::parser::{self, SyntacticError};
use crate::postlex;

/// Tokenizes `source`: runs the lexer, then folds in the post-lex
/// validators' findings. Always ends with exactly one `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens = crate::lexer::tokenize(source);
    postlex::apply(tokens)
}

/// Parses a token stream into a concrete syntax tree plus syntactic errors.
pub fn parse(tokens: &[Token]) -> (CstNode, Vec<SyntacticError>) {
    parser::parse(tokens)
}

/// Full pipeline: lex, validate, parse.
pub fn analyze(source: &str) -> (Vec<Token>, CstNode, Vec<SyntacticError>) {
    let tokens = tokenize(source);
    let (tree, errors) = parse(&tokens);
    (tokens, tree, errors)
}

/// Renders a token list as a fixed-width table (`EOF` rows suppressed).
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<25}{:<20}{:<6}{:<7}{}\n",
        "Token", "Lexeme", "Line", "Column", "Description"
    ));

    for token in tokens {
        if token.kind == TokenKind::Eof {
            continue;
        }
        out.push_str(&format!(
            "{:<25}{:<20}{:<6}{:<7}{}\n",
            token.kind.as_str(),
            token.lexeme,
            token.line,
            token.column,
            token.description
        ));
    }

    out
}

/// Aggregate counts over a token list, excluding `EOF` and `WHITESPACE`.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Statistics {
    pub total: usize,
    pub errors: usize,
    pub valid: usize,
    pub per_kind: HashMap<String, usize>,
}

pub fn statistics(tokens: &[Token]) -> Statistics {
    let mut stats = Statistics::default();

    for token in tokens {
        if matches!(token.kind, TokenKind::Eof | TokenKind::Whitespace) {
            continue;
        }
        stats.total += 1;
        if token.is_error {
            stats.errors += 1;
        } else {
            stats.valid += 1;
        }
        *stats.per_kind.entry(token.kind.as_str().to_string()).or_insert(0) += 1;
    }

    stats
}

/// Renders a concrete syntax tree as a 2-space indented outline.
pub fn format_tree(root: &CstNode) -> String {
    let mut out = String::new();
    format_tree_rec(root, 0, &mut out);
    out
}

fn format_tree_rec(node: &CstNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    if node.value.is_empty() {
        out.push_str(&format!("{indent}{}\n", node.kind.as_str()));
    } else {
        out.push_str(&format!("{indent}{}: {}\n", node.kind.as_str(), node.value));
    }
    for child in &node.children {
        format_tree_rec(child, depth + 1, out);
    }
}
