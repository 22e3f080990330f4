mod token;
mod tokens;
mod typo;

pub use token::*;
pub use tokens::*;
pub use typo::{RELATIONAL_TYPOS, RESERVED_WORD_TYPOS};

/// Longest a plain identifier may be before it becomes `IDENTIFIER_TOO_LONG`.
pub const MAX_IDENT_LENGTH: usize = 30;
/// Longest a plain numeric literal may be before it becomes `NUMBER_TOO_LONG`.
pub const MAX_NUMBER_LENGTH: usize = 15;

fn match_keyword(word: &str) -> Option<TokenKind> {
    Some(match word {
        "als" => TokenKind::ProgramStart,
        "cdt" => TokenKind::If,
        "cycle" => TokenKind::For,
        "during" => TokenKind::While,
        "repeat" => TokenKind::Repeat,
        "wrt" => TokenKind::Write,
        "input" => TokenKind::Input,
        "func" => TokenKind::Function,
        "brkln" => TokenKind::NewlineCmd,
        "in" => TokenKind::In,
        "intn" | "den" | "txt" | "bln" | "crt" => TokenKind::TypeVar,
        "gt" | "eq" | "ne" | "lt" | "ge" | "le" => TokenKind::RelOp,
        "and" | "or" => TokenKind::LogicOp,
        "valid" | "invalid" => TokenKind::BoolLit,
        _ => return None,
    })
}

/// Tokenizes ALAIAS source text, always terminating with a single `EOF`
/// token. Lexical mistakes never abort the scan: they are recorded inline
/// as error tokens at the position they were found.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    bracket_depth: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            bracket_depth: 0,
        }
    }

    pub fn lex(mut self) -> Vec<Token> {
        let lines: Vec<&str> = self.source.split('\n').collect();
        let line_count = lines.len();

        for (idx, line) in lines.iter().enumerate() {
            let line_no = idx + 1;
            self.lex_line(line_no, line);
            if idx + 1 < line_count {
                self.tokens.push(Token::new(TokenKind::Newline, "\\n", line_no, line.chars().count() + 1));
            }
        }

        self.tokens.push(Token::new(TokenKind::Eof, "", line_count + 1, 1));
        self.tokens
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn lex_line(&mut self, line_no: usize, line: &str) {
        let chars: Vec<char> = line.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            let c = chars[i];
            let col = i + 1;

            if c == ' ' || c == '\t' {
                i += 1;
                continue;
            }

            if c == '-' && i + 1 < len && chars[i + 1] == '-' {
                let lexeme: String = chars[i..].iter().collect();
                self.push(Token::new(TokenKind::Comment, lexeme, line_no, col));
                i = len;
                continue;
            }

            if c == '"' {
                i = self.lex_string(&chars, i, line_no, col);
                continue;
            }

            if c.is_ascii_digit() {
                i = self.lex_number(&chars, i, line_no, col);
                continue;
            }

            if c.is_alphabetic() || c == '_' {
                i = self.lex_word(&chars, i, line_no, col);
                continue;
            }

            if c == '!' {
                let rest: String = chars[i..].iter().collect();
                if rest.starts_with("!cdt+") {
                    self.push(Token::new(TokenKind::ElseIf, "!cdt+", line_no, col));
                    i += 5;
                } else if rest.starts_with("!cdt") {
                    self.push(Token::new(TokenKind::Else, "!cdt", line_no, col));
                    i += 4;
                } else {
                    self.push(
                        Token::new(TokenKind::InvalidSymbol, "!", line_no, col)
                            .with_description("Símbolo inválido: !".to_string()),
                    );
                    i += 1;
                }
                continue;
            }

            if c == '<' && i + 1 < len && chars[i + 1] == '=' {
                self.push(Token::new(TokenKind::AssignOp, "<=", line_no, col));
                i += 2;
                continue;
            }

            if c == '+' || c == '-' || c == '*' || c == '/' {
                self.push(Token::new(TokenKind::MathOp, c.to_string(), line_no, col));
                i += 1;
                continue;
            }

            match c {
                '(' => self.push(Token::new(TokenKind::LParen, "(", line_no, col)),
                ')' => self.push(Token::new(TokenKind::RParen, ")", line_no, col)),
                '[' => {
                    self.bracket_depth += 1;
                    self.push(Token::new(TokenKind::LBracket, "[", line_no, col));
                }
                ']' => {
                    self.bracket_depth = self.bracket_depth.saturating_sub(1);
                    self.push(Token::new(TokenKind::RBracket, "]", line_no, col));
                }
                ',' => self.push(Token::new(TokenKind::Comma, ",", line_no, col)),
                '@' | '$' | '%' | '#' | '&' => self.push(
                    Token::new(TokenKind::InvalidSymbol, c.to_string(), line_no, col)
                        .with_description(format!("Símbolo inválido: {c}")),
                ),
                _ => self.push(
                    Token::new(TokenKind::GenericError, c.to_string(), line_no, col)
                        .with_description(format!("Caractere não reconhecido: {c}")),
                ),
            }
            i += 1;
        }
    }

    fn lex_string(&mut self, chars: &[char], start: usize, line_no: usize, col: usize) -> usize {
        let len = chars.len();
        if let Some(rel) = chars[start + 1..].iter().position(|&ch| ch == '"') {
            let end = start + 1 + rel + 1;
            let lexeme: String = chars[start..end].iter().collect();
            self.push(Token::new(TokenKind::StringLit, lexeme, line_no, col));
            end
        } else {
            let lexeme: String = chars[start..].iter().collect();
            self.push(
                Token::new(TokenKind::UnterminatedString, lexeme.clone(), line_no, col)
                    .with_description(format!("String não fechada: {lexeme}")),
            );
            len
        }
    }

    fn lex_number(&mut self, chars: &[char], start: usize, line_no: usize, col: usize) -> usize {
        let len = chars.len();
        let mut j = start;
        let mut dot_seen = false;

        while j < len {
            if chars[j].is_ascii_digit() {
                j += 1;
            } else if chars[j] == '.' && !dot_seen && j + 1 < len && chars[j + 1].is_ascii_digit() {
                dot_seen = true;
                j += 1;
            } else {
                break;
            }
        }

        if j < len && (chars[j].is_alphabetic() || chars[j] == '_' || chars[j] == '.') {
            let mut k = j;
            while k < len && (chars[k].is_alphanumeric() || chars[k] == '.' || chars[k] == '_') {
                k += 1;
            }
            let lexeme: String = chars[start..k].iter().collect();
            self.push(
                Token::new(TokenKind::MalformedNumber, lexeme.clone(), line_no, col)
                    .with_description(format!("Número malformado: {lexeme}")),
            );
            return k;
        }

        let lexeme: String = chars[start..j].iter().collect();
        if lexeme.len() > MAX_NUMBER_LENGTH {
            self.push(
                Token::new(TokenKind::NumberTooLong, lexeme.clone(), line_no, col).with_description(
                    format!("Número excede o tamanho máximo de {MAX_NUMBER_LENGTH} caracteres: {lexeme}"),
                ),
            );
        } else if dot_seen {
            self.push(Token::new(TokenKind::RealLit, lexeme, line_no, col));
        } else {
            self.push(Token::new(TokenKind::IntLit, lexeme, line_no, col));
        }
        j
    }

    fn lex_word(&mut self, chars: &[char], start: usize, line_no: usize, col: usize) -> usize {
        let len = chars.len();
        let mut j = start;
        while j < len && (chars[j].is_alphanumeric() || chars[j] == '_' || chars[j] == '@') {
            j += 1;
        }
        let lexeme: String = chars[start..j].iter().collect();

        if lexeme.contains('@') {
            self.push(
                Token::new(TokenKind::MalformedIdentifier, lexeme.clone(), line_no, col)
                    .with_description(format!("Identificador malformado: {lexeme}")),
            );
            return j;
        }

        if self.bracket_depth > 0 {
            if let Some(suggestion) = RELATIONAL_TYPOS.get(lexeme.as_str()) {
                self.push(
                    Token::new(TokenKind::MalformedRelationalOperator, lexeme.clone(), line_no, col)
                        .with_description(format!(
                            "Operador relacional malformado '{lexeme}', você quis dizer '{suggestion}'?"
                        )),
                );
                return j;
            }
        }

        if let Some(suggestion) = RESERVED_WORD_TYPOS.get(lexeme.as_str()) {
            self.push(
                Token::new(TokenKind::MalformedReservedWord, lexeme.clone(), line_no, col).with_description(
                    format!("Palavra reservada malformada '{lexeme}', você quis dizer '{suggestion}'?"),
                ),
            );
            return j;
        }

        if let Some(kind) = match_keyword(&lexeme) {
            self.push(Token::new(kind, lexeme, line_no, col));
            return j;
        }

        if lexeme.len() > MAX_IDENT_LENGTH {
            self.push(
                Token::new(TokenKind::IdentifierTooLong, lexeme.clone(), line_no, col).with_description(
                    format!("Identificador excede o tamanho máximo de {MAX_IDENT_LENGTH} caracteres: {lexeme}"),
                ),
            );
        } else {
            self.push(Token::new(TokenKind::Ident, lexeme, line_no, col));
        }
        j
    }
}

/// Tokenizes `source`, always ending with a single `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).lex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_program_start() {
        let tokens = tokenize("als");
        assert_eq!(tokens[0].kind, TokenKind::ProgramStart);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_lex_var_decl() {
        let tokens = tokenize("intn x");
        assert_eq!(tokens[0].kind, TokenKind::TypeVar);
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].lexeme, "x");
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize("\"abc");
        assert_eq!(tokens[0].kind, TokenKind::UnterminatedString);
        assert!(tokens[0].is_error);
    }

    #[test]
    fn test_malformed_number() {
        let tokens = tokenize("2.a3");
        assert_eq!(tokens[0].kind, TokenKind::MalformedNumber);
        assert_eq!(tokens[0].lexeme, "2.a3");
    }

    #[test]
    fn test_identifier_too_long() {
        let long_ident = "a".repeat(MAX_IDENT_LENGTH + 1);
        let tokens = tokenize(&long_ident);
        assert_eq!(tokens[0].kind, TokenKind::IdentifierTooLong);
    }

    #[test]
    fn test_number_too_long() {
        let long_number = "1".repeat(MAX_NUMBER_LENGTH + 1);
        let tokens = tokenize(&long_number);
        assert_eq!(tokens[0].kind, TokenKind::NumberTooLong);
    }

    #[test]
    fn test_malformed_reserved_word() {
        let tokens = tokenize("wr \"hi\"");
        assert_eq!(tokens[0].kind, TokenKind::MalformedReservedWord);
        assert!(tokens[0].description.contains("wrt"));
    }

    #[test]
    fn test_malformed_relational_operator_inside_bracket() {
        let tokens = tokenize("[x e 1]");
        let malformed = tokens
            .iter()
            .find(|t| t.kind == TokenKind::MalformedRelationalOperator);
        assert!(malformed.is_some());
    }

    #[test]
    fn test_else_if_precedence() {
        let tokens = tokenize("!cdt+");
        assert_eq!(tokens[0].kind, TokenKind::ElseIf);
    }

    #[test]
    fn test_else_precedence() {
        let tokens = tokenize("!cdt");
        assert_eq!(tokens[0].kind, TokenKind::Else);
    }
}
