use serde::{Deserialize, Serialize};

/// All distinguishable token categories, including the error kinds that the
/// lexer and the post-lex validators can attach to a token instead of
/// rejecting the input outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    ProgramStart,
    TypeVar,
    If,
    Else,
    ElseIf,
    For,
    While,
    Repeat,
    Write,
    Input,
    Function,
    NewlineCmd,
    In,

    MathOp,
    AssignOp,
    LogicOp,
    RelOp,

    BoolLit,
    StringLit,
    IntLit,
    RealLit,

    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,

    Comment,
    Whitespace,
    Newline,
    Eof,

    Ident,

    InvalidSymbol,
    MalformedIdentifier,
    IdentifierTooLong,
    MalformedNumber,
    NumberTooLong,
    UnterminatedString,
    UnterminatedComment,
    ProgramWithoutStart,
    IncompatibleType,
    MalformedRelationalOperator,
    MalformedReservedWord,
    MissingRelationalOperator,
    InputWithoutVariable,
    InputUndeclaredVariable,
    InputMalformedSyntax,
    GenericError,
}

impl TokenKind {
    pub fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::InvalidSymbol
                | TokenKind::MalformedIdentifier
                | TokenKind::IdentifierTooLong
                | TokenKind::MalformedNumber
                | TokenKind::NumberTooLong
                | TokenKind::UnterminatedString
                | TokenKind::UnterminatedComment
                | TokenKind::ProgramWithoutStart
                | TokenKind::IncompatibleType
                | TokenKind::MalformedRelationalOperator
                | TokenKind::MalformedReservedWord
                | TokenKind::MissingRelationalOperator
                | TokenKind::InputWithoutVariable
                | TokenKind::InputUndeclaredVariable
                | TokenKind::InputMalformedSyntax
                | TokenKind::GenericError
        )
    }

    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::Whitespace | TokenKind::Newline | TokenKind::Eof
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::ProgramStart => "PROGRAM_START",
            TokenKind::TypeVar => "TYPE_VAR",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::ElseIf => "ELSE_IF",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Write => "WRITE",
            TokenKind::Input => "INPUT",
            TokenKind::Function => "FUNCTION",
            TokenKind::NewlineCmd => "NEWLINE_CMD",
            TokenKind::In => "IN",
            TokenKind::MathOp => "MATH_OP",
            TokenKind::AssignOp => "ASSIGN_OP",
            TokenKind::LogicOp => "LOGIC_OP",
            TokenKind::RelOp => "REL_OP",
            TokenKind::BoolLit => "BOOL_LIT",
            TokenKind::StringLit => "STRING_LIT",
            TokenKind::IntLit => "INT_LIT",
            TokenKind::RealLit => "REAL_LIT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::InvalidSymbol => "INVALID_SYMBOL",
            TokenKind::MalformedIdentifier => "MALFORMED_IDENTIFIER",
            TokenKind::IdentifierTooLong => "IDENTIFIER_TOO_LONG",
            TokenKind::MalformedNumber => "MALFORMED_NUMBER",
            TokenKind::NumberTooLong => "NUMBER_TOO_LONG",
            TokenKind::UnterminatedString => "UNTERMINATED_STRING",
            TokenKind::UnterminatedComment => "UNTERMINATED_COMMENT",
            TokenKind::ProgramWithoutStart => "PROGRAM_WITHOUT_START",
            TokenKind::IncompatibleType => "INCOMPATIBLE_TYPE",
            TokenKind::MalformedRelationalOperator => "MALFORMED_RELATIONAL_OPERATOR",
            TokenKind::MalformedReservedWord => "MALFORMED_RESERVED_WORD",
            TokenKind::MissingRelationalOperator => "MISSING_RELATIONAL_OPERATOR",
            TokenKind::InputWithoutVariable => "INPUT_WITHOUT_VARIABLE",
            TokenKind::InputUndeclaredVariable => "INPUT_UNDECLARED_VARIABLE",
            TokenKind::InputMalformedSyntax => "INPUT_MALFORMED_SYNTAX",
            TokenKind::GenericError => "ERROR",
        }
    }
}

/// A single lexical unit, carrying its own source position and, for error
/// kinds, a human readable (Portuguese) description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub description: String,
    pub is_error: bool,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        let is_error = kind.is_error();
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            description: String::new(),
            is_error,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self.is_error = true;
        self
    }
}
