use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::lexer::Token;

/// Grammar production a [`CstNode`] corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    Start,
    CommandList,
    Block,
    VarDecl,
    Assign,
    AssignOp,
    InputCmd,
    WriteCmd,
    IfStmt,
    ElseIfClause,
    ElseClause,
    Loop,
    LoopKind,
    InKeyword,
    FuncDecl,
    FuncCall,
    FuncName,
    LParen,
    RParen,
    RelExpr,
    LogicExpr,
    MathExpr,
    Ident,
    IntLit,
    RealLit,
    StringLit,
    BoolLit,
    BreakLine,
    Type,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "PROGRAM",
            NodeKind::Start => "START",
            NodeKind::CommandList => "COMMAND_LIST",
            NodeKind::Block => "BLOCK",
            NodeKind::VarDecl => "VAR_DECL",
            NodeKind::Assign => "ASSIGN",
            NodeKind::AssignOp => "ASSIGN_OP",
            NodeKind::InputCmd => "INPUT_CMD",
            NodeKind::WriteCmd => "WRITE_CMD",
            NodeKind::IfStmt => "IF_STMT",
            NodeKind::ElseIfClause => "ELSE_IF",
            NodeKind::ElseClause => "ELSE",
            NodeKind::Loop => "LOOP",
            NodeKind::LoopKind => "LOOP_KIND",
            NodeKind::InKeyword => "IN_KW",
            NodeKind::FuncDecl => "FUNC_DECL",
            NodeKind::FuncCall => "FUNC_CALL",
            NodeKind::FuncName => "FUNC_NAME",
            NodeKind::LParen => "LPAREN",
            NodeKind::RParen => "RPAREN",
            NodeKind::RelExpr => "REL_EXPR",
            NodeKind::LogicExpr => "LOGIC_EXPR",
            NodeKind::MathExpr => "MATH_EXPR",
            NodeKind::Ident => "IDENT",
            NodeKind::IntLit => "INT_LIT",
            NodeKind::RealLit => "REAL_LIT",
            NodeKind::StringLit => "STRING_LIT",
            NodeKind::BoolLit => "BOOL_LIT",
            NodeKind::BreakLine => "BREAK_LINE",
            NodeKind::Type => "TYPE",
        }
    }
}

/// A node of the concrete syntax tree. Children are owned; the originating
/// token (when one exists) is shared rather than cloned so the token list
/// and the tree can both be returned from [`crate::api::analyze`].
#[derive(Debug, Clone)]
pub struct CstNode {
    pub kind: NodeKind,
    pub value: String,
    pub children: Vec<CstNode>,
    pub source_token: Option<Rc<Token>>,
}

impl CstNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: String::new(),
            children: Vec::new(),
            source_token: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_token(mut self, token: Rc<Token>) -> Self {
        self.value = token.lexeme.clone();
        self.source_token = Some(token);
        self
    }

    pub fn push(&mut self, child: CstNode) {
        self.children.push(child);
    }
}
