//! Validators that run once lexing has finished, over the full (unfiltered)
//! token list. Each returns the error tokens it wants appended; none of
//! them mutate the list or see each other's output, which keeps them
//! independent and idempotent.

use std::collections::{HashMap, HashSet};

use crate::lexer::{Token, TokenKind};

/// Runs every post-lex validator over `tokens` and folds their findings
/// back in: B1 is prepended (it diagnoses the very first token), B2-B4 are
/// appended, and the trailing `EOF` is kept last either way.
pub fn apply(tokens: Vec<Token>) -> Vec<Token> {
    let b1 = check_program_start(&tokens);
    let b2 = check_assignment_types(&tokens);
    let b3 = check_conditions(&tokens);
    let b4 = check_input_commands(&tokens);

    let eof = tokens.last().filter(|t| t.kind == TokenKind::Eof).cloned();
    let body_len = if eof.is_some() { tokens.len() - 1 } else { tokens.len() };

    let mut result = Vec::with_capacity(tokens.len() + b1.len() + b2.len() + b3.len() + b4.len());
    result.extend(b1);
    result.extend(tokens.into_iter().take(body_len));
    result.extend(b2);
    result.extend(b3);
    result.extend(b4);
    if let Some(eof) = eof {
        result.push(eof);
    }
    result
}

/// B1: the first non-trivia token of a program must be `PROGRAM_START`.
fn check_program_start(tokens: &[Token]) -> Vec<Token> {
    let first_real = tokens.iter().find(|t| !t.kind.is_trivia());

    match first_real {
        Some(t) if t.kind == TokenKind::ProgramStart => Vec::new(),
        Some(t) => vec![Token::new(TokenKind::ProgramWithoutStart, "", t.line, t.column)
            .with_description("Programa deve começar com a palavra reservada 'als'".to_string())],
        None => vec![Token::new(TokenKind::ProgramWithoutStart, "", 1, 1)
            .with_description("Programa deve começar com a palavra reservada 'als'".to_string())],
    }
}

fn declared_variables(tokens: &[Token]) -> HashMap<String, char> {
    let mut scope = HashMap::new();
    let mut i = 0;
    while i + 1 < tokens.len() {
        if tokens[i].kind == TokenKind::TypeVar {
            if let Some(name_tok) = tokens[i + 1..].iter().find(|t| !t.kind.is_trivia()) {
                if name_tok.kind == TokenKind::Ident {
                    let type_char = tokens[i].lexeme.chars().next().unwrap_or(' ');
                    scope.insert(name_tok.lexeme.clone(), type_char);
                }
            }
        }
        i += 1;
    }
    scope
}

/// B2: a simple left-to-right type check of `IDENT <= VALUE` assignments
/// against the declared type of `IDENT`. Only the immediately following
/// value token is inspected; this is intentionally shallow.
fn check_assignment_types(tokens: &[Token]) -> Vec<Token> {
    let scope = declared_variables(tokens);
    let mut errors = Vec::new();

    let significant: Vec<&Token> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();

    for window in significant.windows(3) {
        let [ident, assign, value] = window else {
            continue;
        };
        if ident.kind != TokenKind::Ident || assign.kind != TokenKind::AssignOp {
            continue;
        }
        let Some(declared) = scope.get(&ident.lexeme) else {
            continue;
        };

        let description = match declared {
            'i' if value.kind == TokenKind::RealLit => Some(format!(
                "Variável '{}' do tipo 'intn' não pode receber valor decimal '{}'. Use tipo 'den' para valores decimais.",
                ident.lexeme, value.lexeme
            )),
            'b' if value.kind != TokenKind::BoolLit => Some(format!(
                "Variável '{}' do tipo 'bln' só pode receber valores lógicos (valid/invalid).",
                ident.lexeme
            )),
            't' if value.kind != TokenKind::StringLit => Some(format!(
                "Variável '{}' do tipo 'txt' só pode receber valores de texto entre aspas.",
                ident.lexeme
            )),
            _ => None,
        };

        if let Some(description) = description {
            errors.push(
                Token::new(
                    TokenKind::IncompatibleType,
                    format!("{} <= {}", ident.lexeme, value.lexeme),
                    ident.line,
                    ident.column,
                )
                .with_description(description),
            );
        }
    }

    errors
}

fn is_operand(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Ident | TokenKind::IntLit | TokenKind::RealLit)
}

/// B3: inspects each `[ ... ]` condition span for two adjacent operands with
/// no relational operator between them, and for a logical operator sitting
/// too close to either edge of the bracket to have a complete side.
fn check_conditions(tokens: &[Token]) -> Vec<Token> {
    let mut errors = Vec::new();
    let significant: Vec<&Token> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();

    let mut i = 0;
    while i < significant.len() {
        if significant[i].kind != TokenKind::LBracket {
            i += 1;
            continue;
        }
        let Some(close) = significant[i + 1..].iter().position(|t| t.kind == TokenKind::RBracket) else {
            i += 1;
            continue;
        };
        let span = &significant[i + 1..i + 1 + close];
        let len = span.len();

        for k in 0..len.saturating_sub(1) {
            if is_operand(span[k].kind) && is_operand(span[k + 1].kind) {
                let preceded_by_logic = k > 0 && span[k - 1].kind == TokenKind::LogicOp;
                if !preceded_by_logic {
                    errors.push(
                        Token::new(
                            TokenKind::MissingRelationalOperator,
                            format!("{} {}", span[k].lexeme, span[k + 1].lexeme),
                            span[k].line,
                            span[k].column,
                        )
                        .with_description(format!(
                            "Operador relacional ausente entre '{}' e '{}'. Use: gt, eq, ne, lt, ge, le",
                            span[k].lexeme,
                            span[k + 1].lexeme
                        )),
                    );
                }
            }

            if span[k].kind == TokenKind::LogicOp {
                if k < 3 {
                    errors.push(
                        Token::new(
                            TokenKind::MissingRelationalOperator,
                            span[k].lexeme.clone(),
                            span[k].line,
                            span[k].column,
                        )
                        .with_description(format!(
                            "Operador lógico '{}' sem expressão relacional completa anterior",
                            span[k].lexeme
                        )),
                    );
                }
                if k + 3 >= len {
                    errors.push(
                        Token::new(
                            TokenKind::MissingRelationalOperator,
                            span[k].lexeme.clone(),
                            span[k].line,
                            span[k].column,
                        )
                        .with_description(format!(
                            "Operador lógico '{}' sem expressão relacional completa posterior",
                            span[k].lexeme
                        )),
                    );
                }
            }
        }

        i += 1 + close + 1;
    }

    errors
}

/// B4: `input(x)` must reference a single declared identifier.
fn check_input_commands(tokens: &[Token]) -> Vec<Token> {
    let declared_map = declared_variables(tokens);
    let declared: HashSet<&str> = declared_map.keys().map(String::as_str).collect();
    let significant: Vec<&Token> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();
    let mut errors = Vec::new();

    for (idx, tok) in significant.iter().enumerate() {
        if tok.kind != TokenKind::Input {
            continue;
        }

        let rest = &significant[idx + 1..];
        match rest {
            [lp, id, rp, ..] if lp.kind == TokenKind::LParen && rp.kind == TokenKind::RParen => {
                if id.kind != TokenKind::Ident {
                    errors.push(
                        Token::new(TokenKind::InputWithoutVariable, id.lexeme.clone(), id.line, id.column)
                            .with_description(
                                "Comando 'input' deve conter uma variável válida entre parênteses".to_string(),
                            ),
                    );
                } else if !declared.contains(id.lexeme.as_str()) {
                    errors.push(
                        Token::new(
                            TokenKind::InputUndeclaredVariable,
                            id.lexeme.clone(),
                            id.line,
                            id.column,
                        )
                        .with_description(format!("Variável '{}' não foi declarada antes do comando input", id.lexeme)),
                    );
                }
            }
            _ => {
                errors.push(
                    Token::new(TokenKind::InputMalformedSyntax, tok.lexeme.clone(), tok.line, tok.column)
                        .with_description(
                            "Comando 'input' deve ser seguido por parênteses: input(variavel)".to_string(),
                        ),
                );
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_program_without_start() {
        let tokens = tokenize("intn x");
        let errors = check_program_start(&tokens);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, TokenKind::ProgramWithoutStart);
    }

    #[test]
    fn test_program_with_start_is_clean() {
        let tokens = tokenize("als\nintn x");
        assert!(check_program_start(&tokens).is_empty());
    }

    #[test]
    fn test_incompatible_type_assignment() {
        let tokens = tokenize("als\nintn x\nx <= 3.5");
        let errors = check_assignment_types(&tokens);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, TokenKind::IncompatibleType);
    }

    #[test]
    fn test_compatible_type_assignment() {
        let tokens = tokenize("als\nintn x\nx <= 3");
        assert!(check_assignment_types(&tokens).is_empty());
    }

    #[test]
    fn test_input_undeclared_variable() {
        let tokens = tokenize("als\ninput(y)");
        let errors = check_input_commands(&tokens);
        assert!(errors.iter().any(|e| e.kind == TokenKind::InputUndeclaredVariable));
    }

    #[test]
    fn test_input_declared_variable_is_clean() {
        let tokens = tokenize("als\nintn y\ninput(y)");
        assert!(check_input_commands(&tokens).is_empty());
    }
}
