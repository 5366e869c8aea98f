use crate::language::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Identifier(String),
    Integer(i64),

    Return,
    If,
    Else,
    True,
    False,

    Bang,
    BangEq,
    EqEq,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    Semi,

    LParen,
    RParen,
    LBrace,
    RBrace,

    Eof,
}
