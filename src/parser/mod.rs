use std::fmt::Display;
use std::rc::Rc;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::cst::{CstNode, NodeKind};
use crate::lexer::{Token, TokenKind, Tokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntacticErrorKind {
    IncompleteProgram,
    UnbalancedParen,
    UnbalancedBracket,
    IncompleteCommand,
    MalformedConditional,
    MalformedLoop,
    InvalidExpression,
    BadVarDecl,
    BadAssignment,
    BadInputStmt,
    BadWriteStmt,
    WrongOrder,
}

/// A syntactic diagnostic: structured kind, human-readable description and
/// a source position. Parsing never short-circuits on these — they are
/// collected as data alongside a best-effort tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntacticError {
    pub kind: SyntacticErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl SyntacticError {
    pub fn new(kind: SyntacticErrorKind, message: String, line: usize, column: usize) -> Self {
        Self {
            kind,
            message,
            line,
            column,
        }
    }

    /// Renders the error the way a terminal-facing tool would: the
    /// offending source line with a caret under the reported column.
    pub fn render(&self, source: &str) -> String {
        let lines: Vec<&str> = source.lines().collect();
        if self.line == 0 || self.line > lines.len() {
            return self.to_string();
        }

        let line_str = lines[self.line - 1];
        let margin = self.line.to_string().len();
        let margin_fill = " ".repeat(margin);
        let pad = " ".repeat(self.column.saturating_sub(1));
        let caret = "^".red();

        format!(
            "{margin_fill} |\n{line} |{line_str}\n{margin_fill} |{pad}{caret} {}",
            self.message,
            line = self.line
        )
    }
}

impl Display for SyntacticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockCtx {
    Top,
    If,
    Loop,
}

struct Parser {
    tokens: Tokens<Rc<Token>>,
    errors: Vec<SyntacticError>,
}

impl Parser {
    fn new(tokens: Vec<Rc<Token>>) -> Self {
        Self {
            tokens: Tokens::new(tokens),
            errors: Vec::new(),
        }
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.peek().map(|t| t.kind)
    }

    fn bump(&mut self) -> Rc<Token> {
        self.tokens
            .next()
            .expect("bump called with no tokens remaining")
    }

    fn expect(&mut self, kind: TokenKind, err_kind: SyntacticErrorKind, message: &str) -> Option<Rc<Token>> {
        match self.tokens.peek() {
            Some(t) if t.kind == kind => {
                self.tokens.next();
                Some(t)
            }
            Some(t) => {
                self.errors
                    .push(SyntacticError::new(err_kind, message.to_string(), t.line, t.column));
                None
            }
            None => {
                self.errors
                    .push(SyntacticError::new(err_kind, format!("{message} (fim do programa)"), 0, 0));
                None
            }
        }
    }

    fn record_error(&mut self, kind: SyntacticErrorKind, message: String) {
        let (line, column) = self.tokens.peek().map(|t| (t.line, t.column)).unwrap_or((0, 0));
        self.errors.push(SyntacticError::new(kind, message, line, column));
    }

    fn parse_program(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::Program);
        node.push(self.parse_start());
        node.push(self.parse_block(NodeKind::CommandList, BlockCtx::Top));
        node
    }

    fn parse_start(&mut self) -> CstNode {
        match self.expect(
            TokenKind::ProgramStart,
            SyntacticErrorKind::IncompleteProgram,
            "Programa deve começar com 'als'",
        ) {
            Some(t) => CstNode::new(NodeKind::Start).with_token(t),
            None => CstNode::new(NodeKind::Start),
        }
    }

    fn at_block_end(&self, ctx: BlockCtx, parsed_any: bool) -> bool {
        let Some(kind) = self.peek_kind() else {
            return true;
        };
        match kind {
            TokenKind::Else | TokenKind::ElseIf => true,
            TokenKind::If | TokenKind::For | TokenKind::While | TokenKind::Repeat if parsed_any => match ctx {
                BlockCtx::Loop => true,
                BlockCtx::If => kind == TokenKind::If,
                BlockCtx::Top => false,
            },
            _ => false,
        }
    }

    fn parse_block(&mut self, node_kind: NodeKind, ctx: BlockCtx) -> CstNode {
        let mut node = CstNode::new(node_kind);
        let mut parsed_any = false;

        loop {
            if self.at_block_end(ctx, parsed_any) {
                break;
            }
            match self.parse_command() {
                Some(cmd) => {
                    node.push(cmd);
                    parsed_any = true;
                }
                None => {
                    if self.tokens.peek().is_none() {
                        break;
                    }
                    self.record_error(
                        SyntacticErrorKind::IncompleteCommand,
                        "Comando desconhecido ou incompleto".to_string(),
                    );
                    self.tokens.next();
                }
            }
        }

        node
    }

    fn parse_command(&mut self) -> Option<CstNode> {
        let next = self.tokens.peek()?;
        match next.kind {
            TokenKind::TypeVar => Some(self.parse_var_decl()),
            TokenKind::Function => Some(self.parse_func_decl()),
            TokenKind::Input => Some(self.parse_input_cmd()),
            TokenKind::Write => Some(self.parse_write_cmd()),
            TokenKind::If => Some(self.parse_if_stmt()),
            TokenKind::For | TokenKind::While | TokenKind::Repeat => Some(self.parse_loop_stmt()),
            TokenKind::NewlineCmd => Some(self.parse_break_line()),
            TokenKind::Ident => match self.tokens.peek_at(1).map(|t| t.kind) {
                Some(TokenKind::LParen) => Some(self.parse_func_call()),
                Some(TokenKind::AssignOp) => Some(self.parse_assign()),
                _ => None,
            },
            _ => None,
        }
    }

    fn parse_var_decl(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::VarDecl);
        let type_tok = self.bump();
        node.push(CstNode::new(NodeKind::Type).with_token(type_tok));
        if let Some(id) = self.expect(
            TokenKind::Ident,
            SyntacticErrorKind::BadVarDecl,
            "Esperado identificador após o tipo da variável",
        ) {
            node.push(CstNode::new(NodeKind::Ident).with_token(id));
        }
        node
    }

    fn parse_func_decl(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::FuncDecl);
        self.bump();
        if let Some(id) = self.expect(
            TokenKind::Ident,
            SyntacticErrorKind::BadVarDecl,
            "Esperado nome da função",
        ) {
            node.push(CstNode::new(NodeKind::FuncName).with_token(id));
        }
        self.expect(
            TokenKind::LParen,
            SyntacticErrorKind::UnbalancedParen,
            "Esperado '(' na declaração de função",
        );
        self.expect(
            TokenKind::RParen,
            SyntacticErrorKind::UnbalancedParen,
            "Esperado ')' na declaração de função",
        );
        node
    }

    fn parse_func_call(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::FuncCall);
        let id = self.bump();
        node.push(CstNode::new(NodeKind::FuncName).with_token(id));
        self.bump();
        self.expect(
            TokenKind::RParen,
            SyntacticErrorKind::UnbalancedParen,
            "Esperado ')' na chamada de função",
        );
        node
    }

    fn parse_assign(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::Assign);
        let id = self.bump();
        node.push(CstNode::new(NodeKind::Ident).with_token(id));
        let op = self.bump();
        node.push(CstNode::new(NodeKind::AssignOp).with_token(op));
        node.push(self.parse_expression());
        node
    }

    fn parse_input_cmd(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::InputCmd);
        self.bump();
        self.expect(
            TokenKind::LParen,
            SyntacticErrorKind::BadInputStmt,
            "Esperado '(' após 'input'",
        );
        if let Some(id) = self.expect(
            TokenKind::Ident,
            SyntacticErrorKind::BadInputStmt,
            "Esperado identificador em 'input'",
        ) {
            node.push(CstNode::new(NodeKind::Ident).with_token(id));
        }
        self.expect(
            TokenKind::RParen,
            SyntacticErrorKind::BadInputStmt,
            "Esperado ')' após identificador em 'input'",
        );
        node
    }

    fn parse_write_cmd(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::WriteCmd);
        self.bump();
        node.push(self.parse_expression());
        node
    }

    fn parse_break_line(&mut self) -> CstNode {
        let t = self.bump();
        CstNode::new(NodeKind::BreakLine).with_token(t)
    }

    fn parse_if_stmt(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::IfStmt);
        self.bump();
        node.push(self.parse_condition());
        node.push(self.parse_block(NodeKind::Block, BlockCtx::If));

        while matches!(self.peek_kind(), Some(TokenKind::ElseIf)) {
            self.bump();
            let mut clause = CstNode::new(NodeKind::ElseIfClause);
            clause.push(self.parse_condition());
            clause.push(self.parse_block(NodeKind::Block, BlockCtx::If));
            node.push(clause);
        }

        if matches!(self.peek_kind(), Some(TokenKind::Else)) {
            self.bump();
            let mut clause = CstNode::new(NodeKind::ElseClause);
            clause.push(self.parse_block(NodeKind::Block, BlockCtx::If));
            node.push(clause);
        }

        node
    }

    fn parse_loop_stmt(&mut self) -> CstNode {
        let mut node = CstNode::new(NodeKind::Loop);
        match self.peek_kind() {
            Some(TokenKind::For) | Some(TokenKind::While) => {
                let kw = self.bump();
                node.push(CstNode::new(NodeKind::LoopKind).with_token(kw));
                node.push(self.parse_condition());
                node.push(self.parse_block(NodeKind::Block, BlockCtx::Loop));
            }
            Some(TokenKind::Repeat) => {
                let kw = self.bump();
                node.push(CstNode::new(NodeKind::LoopKind).with_token(kw));
                if let Some(id) = self.expect(
                    TokenKind::Ident,
                    SyntacticErrorKind::MalformedLoop,
                    "Esperado identificador após 'repeat'",
                ) {
                    node.push(CstNode::new(NodeKind::Ident).with_token(id));
                }
                if let Some(in_kw) =
                    self.expect(TokenKind::In, SyntacticErrorKind::MalformedLoop, "Esperado 'in'")
                {
                    node.push(CstNode::new(NodeKind::InKeyword).with_token(in_kw));
                }
                node.push(self.parse_value());
                node.push(self.parse_block(NodeKind::Block, BlockCtx::Loop));
            }
            _ => {
                self.record_error(
                    SyntacticErrorKind::MalformedLoop,
                    "Estrutura de laço desconhecida".to_string(),
                );
            }
        }
        node
    }

    fn parse_condition(&mut self) -> CstNode {
        self.expect(
            TokenKind::LBracket,
            SyntacticErrorKind::MalformedConditional,
            "Esperado '[' no início da condição",
        );
        let expr = self.parse_logic_expr();
        self.expect(
            TokenKind::RBracket,
            SyntacticErrorKind::MalformedConditional,
            "Esperado ']' no final da condição",
        );
        expr
    }

    fn parse_logic_expr(&mut self) -> CstNode {
        let mut left = self.parse_rel_expr();
        while matches!(self.peek_kind(), Some(TokenKind::LogicOp)) {
            let op = self.bump();
            let right = self.parse_rel_expr();
            let mut node = CstNode::new(NodeKind::LogicExpr).with_value(op.lexeme.clone());
            node.push(left);
            node.push(right);
            left = node;
        }
        left
    }

    fn parse_rel_expr(&mut self) -> CstNode {
        let left = self.parse_expression();
        if matches!(self.peek_kind(), Some(TokenKind::RelOp)) {
            let op = self.bump();
            let right = self.parse_expression();
            let mut node = CstNode::new(NodeKind::RelExpr).with_value(op.lexeme.clone());
            node.push(left);
            node.push(right);
            node
        } else {
            left
        }
    }

    fn parse_expression(&mut self) -> CstNode {
        let mut left = self.parse_term();
        while matches!(self.peek_kind(), Some(TokenKind::MathOp)) {
            let op = self.bump();
            let right = self.parse_term();
            let mut node = CstNode::new(NodeKind::MathExpr).with_value(op.lexeme.clone());
            node.push(left);
            node.push(right);
            left = node;
        }
        left
    }

    fn parse_term(&mut self) -> CstNode {
        match self.peek_kind() {
            Some(TokenKind::IntLit) => CstNode::new(NodeKind::IntLit).with_token(self.bump()),
            Some(TokenKind::RealLit) => CstNode::new(NodeKind::RealLit).with_token(self.bump()),
            Some(TokenKind::StringLit) => CstNode::new(NodeKind::StringLit).with_token(self.bump()),
            Some(TokenKind::BoolLit) => CstNode::new(NodeKind::BoolLit).with_token(self.bump()),
            Some(TokenKind::Ident) => CstNode::new(NodeKind::Ident).with_token(self.bump()),
            Some(TokenKind::LParen) => {
                self.bump();
                let inner = self.parse_expression();
                self.expect(TokenKind::RParen, SyntacticErrorKind::UnbalancedParen, "Esperado ')'");
                inner
            }
            _ => {
                self.record_error(
                    SyntacticErrorKind::InvalidExpression,
                    "Esperado valor, identificador ou expressão entre parênteses".to_string(),
                );
                CstNode::new(NodeKind::MathExpr)
            }
        }
    }

    fn parse_value(&mut self) -> CstNode {
        match self.peek_kind() {
            Some(TokenKind::IntLit) => CstNode::new(NodeKind::IntLit).with_token(self.bump()),
            Some(TokenKind::RealLit) => CstNode::new(NodeKind::RealLit).with_token(self.bump()),
            Some(TokenKind::StringLit) => CstNode::new(NodeKind::StringLit).with_token(self.bump()),
            Some(TokenKind::BoolLit) => CstNode::new(NodeKind::BoolLit).with_token(self.bump()),
            _ => {
                self.record_error(
                    SyntacticErrorKind::InvalidExpression,
                    "Esperado um valor literal".to_string(),
                );
                CstNode::new(NodeKind::IntLit)
            }
        }
    }
}

fn check_bracket_balance(tokens: &[Rc<Token>]) -> Vec<SyntacticError> {
    let mut paren_stack: Vec<Rc<Token>> = Vec::new();
    let mut bracket_stack: Vec<Rc<Token>> = Vec::new();
    let mut errors = Vec::new();

    for t in tokens {
        match t.kind {
            TokenKind::LParen => paren_stack.push(t.clone()),
            TokenKind::RParen => {
                if paren_stack.pop().is_none() {
                    errors.push(SyntacticError::new(
                        SyntacticErrorKind::UnbalancedParen,
                        "')' sem '(' correspondente".to_string(),
                        t.line,
                        t.column,
                    ));
                }
            }
            TokenKind::LBracket => bracket_stack.push(t.clone()),
            TokenKind::RBracket => {
                if bracket_stack.pop().is_none() {
                    errors.push(SyntacticError::new(
                        SyntacticErrorKind::UnbalancedBracket,
                        "']' sem '[' correspondente".to_string(),
                        t.line,
                        t.column,
                    ));
                }
            }
            _ => {}
        }
    }

    for t in paren_stack {
        errors.push(SyntacticError::new(
            SyntacticErrorKind::UnbalancedParen,
            "'(' sem ')' correspondente".to_string(),
            t.line,
            t.column,
        ));
    }
    for t in bracket_stack {
        errors.push(SyntacticError::new(
            SyntacticErrorKind::UnbalancedBracket,
            "'[' sem ']' correspondente".to_string(),
            t.line,
            t.column,
        ));
    }

    errors
}

/// Parses an already-tokenized stream into a concrete syntax tree plus a
/// list of syntactic errors. Trivia and lexical-error tokens are filtered
/// out before parsing; a tree is always returned, even on malformed input.
pub fn parse(tokens: &[Token]) -> (CstNode, Vec<SyntacticError>) {
    let filtered: Vec<Rc<Token>> = tokens
        .iter()
        .filter(|t| !t.kind.is_trivia() && !t.is_error)
        .cloned()
        .map(Rc::new)
        .collect();

    let bracket_errors = check_bracket_balance(&filtered);

    let mut parser = Parser::new(filtered);
    let tree = parser.parse_program();
    let mut errors = parser.errors;
    errors.extend(bracket_errors);

    (tree, errors)
}
