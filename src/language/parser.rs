use crate::language::{
    ast::*,
    errors::{SyntaxError, SyntaxErrors},
    lexer::lex,
    span::Span,
    token::{Token, TokenKind},
};

pub fn parse_program(source: &str) -> Result<Program, SyntaxErrors> {
    let tokens = match lex(source) {
        Ok(tokens) => tokens,
        Err(errors) => {
            let errors: Vec<_> = errors
                .into_iter()
                .map(|err| SyntaxError::new(err.message, err.span))
                .collect();
            return Err(errors.into());
        }
    };
    Parser::new(tokens).parse()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Program, SyntaxErrors> {
        let mut statements = Vec::new();

        while !self.is_eof() {
            if self.matches(TokenKind::Semi) {
                continue;
            }
            let before = self.pos;
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.report(err);
                    self.synchronize_statement();
                    // Recovery must consume something: a token that can
                    // never start a statement (a stray `}`, say) would
                    // otherwise be re-reported forever.
                    if self.pos == before {
                        self.advance();
                    }
                }
            }
        }

        if self.errors.is_empty() {
            Ok(Program { statements })
        } else {
            Err(self.errors.into())
        }
    }

    fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        if self.matches(TokenKind::Return) {
            let stmt = self.parse_return()?;
            return Ok(Statement::Return(stmt));
        }
        self.parse_expression_statement()
    }

    fn parse_return(&mut self) -> Result<ReturnStmt, SyntaxError> {
        let start = self
            .previous_span()
            .map(|s| s.start)
            .unwrap_or_else(|| self.current_span_start());
        let value = self.parse_expression()?;
        let mut end = value.span().end;
        if self.check(TokenKind::Semi) {
            end = self.advance().span.end;
        }
        Ok(ReturnStmt {
            value,
            span: Span::new(start, end),
        })
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, SyntaxError> {
        let expr = self.parse_expression()?;
        let span = expr.span();
        // Trailing ';' is optional, so `5` and `5;` are both programs.
        self.matches(TokenKind::Semi);
        Ok(Statement::Expr(ExprStmt { expr, span }))
    }

    fn parse_block(&mut self) -> Result<Block, SyntaxError> {
        let start = self.expect(TokenKind::LBrace)?.span.start;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_eof() {
            if self.matches(TokenKind::Semi) {
                continue;
            }
            statements.push(self.parse_statement()?);
        }
        let end = self.expect(TokenKind::RBrace)?.span.end;
        Ok(Block {
            statements,
            span: Span::new(start, end),
        })
    }

    fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary(0)
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_unary()?;

        loop {
            let (op, prec) = match self.current_binary_op() {
                Some(info) => info,
                None => break,
            };
            if prec < min_prec {
                break;
            }
            self.advance();
            let right = self.parse_binary(prec + 1)?;
            let span = left.span().union(right.span());
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, SyntaxError> {
        if self.check(TokenKind::Minus) {
            let start = self.advance().span.start;
            let expr = self.parse_unary()?;
            let span = Span::new(start, expr.span().end);
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                expr: Box::new(expr),
                span,
            });
        }
        if self.check(TokenKind::Bang) {
            let start = self.advance().span.start;
            let expr = self.parse_unary()?;
            let span = Span::new(start, expr.span().end);
            return Ok(Expr::Unary {
                op: UnaryOp::Not,
                expr: Box::new(expr),
                span,
            });
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        if self.matches(TokenKind::If) {
            return self.parse_if_expression();
        }

        match self.peek_kind() {
            Some(TokenKind::Integer(value)) => {
                let span = self.advance().span;
                Ok(Expr::Literal(Literal::Int(value, span)))
            }
            Some(TokenKind::True) => {
                let span = self.advance().span;
                Ok(Expr::Literal(Literal::Bool(true, span)))
            }
            Some(TokenKind::False) => {
                let span = self.advance().span;
                Ok(Expr::Literal(Literal::Bool(false, span)))
            }
            Some(TokenKind::LParen) => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            Some(TokenKind::Identifier(name)) => Err(self
                .error_here(&format!("Unknown identifier `{}`", name))
                .with_help("this language has no variable bindings")),
            _ => Err(self.error_here("Expected an expression")),
        }
    }

    fn parse_if_expression(&mut self) -> Result<Expr, SyntaxError> {
        let start = self
            .previous_span()
            .map(|s| s.start)
            .unwrap_or_else(|| self.current_span_start());
        let condition = self.parse_expression()?;
        let then_branch = self.parse_block()?;
        let else_branch = if self.matches(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };
        let span = Span::new(
            start,
            else_branch
                .as_ref()
                .map(|b| b.span.end)
                .unwrap_or(then_branch.span.end),
        );
        Ok(Expr::If(Box::new(IfExpr {
            condition,
            then_branch,
            else_branch,
            span,
        })))
    }

    fn current_binary_op(&self) -> Option<(BinaryOp, u8)> {
        match self.peek_kind() {
            Some(TokenKind::Plus) => Some((BinaryOp::Add, 10)),
            Some(TokenKind::Minus) => Some((BinaryOp::Sub, 10)),
            Some(TokenKind::Star) => Some((BinaryOp::Mul, 20)),
            Some(TokenKind::Slash) => Some((BinaryOp::Div, 20)),
            Some(TokenKind::EqEq) => Some((BinaryOp::Eq, 5)),
            Some(TokenKind::BangEq) => Some((BinaryOp::NotEq, 5)),
            Some(TokenKind::Lt) => Some((BinaryOp::Lt, 9)),
            Some(TokenKind::Gt) => Some((BinaryOp::Gt, 9)),
            _ => None,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token, SyntaxError> {
        if self.check(kind.clone()) {
            Ok(self.advance())
        } else {
            Err(self.error_here(&format!("Expected {:?}", kind)))
        }
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind.clone()) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        matches!(self.peek_kind(), Some(tk) if tk == kind)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind.clone())
    }

    fn advance(&mut self) -> &Token {
        let token = self
            .tokens
            .get(self.pos)
            .unwrap_or_else(|| self.tokens.last().unwrap());
        self.pos = (self.pos + 1).min(self.tokens.len());
        token
    }

    fn is_eof(&self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Eof) | None)
    }

    fn current_span_start(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|t| t.span.start)
            .unwrap_or_else(|| self.tokens.last().map(|t| t.span.end).unwrap_or(0))
    }

    fn previous_span(&self) -> Option<Span> {
        if self.pos == 0 {
            None
        } else {
            Some(self.tokens[self.pos - 1].span)
        }
    }

    fn error_here(&self, message: &str) -> SyntaxError {
        let span = self
            .tokens
            .get(self.pos)
            .map(|t| t.span)
            .unwrap_or_else(|| {
                self.tokens
                    .last()
                    .map(|t| t.span)
                    .unwrap_or_else(|| Span::new(0, 0))
            });
        SyntaxError::new(message.to_string(), span)
    }

    fn report(&mut self, err: SyntaxError) {
        self.errors.push(err);
    }

    fn synchronize_statement(&mut self) {
        while !self.is_eof() {
            match self.peek_kind() {
                Some(TokenKind::Semi) => {
                    self.advance();
                    return;
                }
                Some(TokenKind::Return | TokenKind::RBrace) => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
