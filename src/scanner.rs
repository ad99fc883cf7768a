use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink},
    token::{Literal, Token, TokenKind},
};

/// Single-pass scanner over an in-memory source buffer. One instance
/// performs one `source -> token sequence` conversion and is consumed by it.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scan the whole buffer, reporting lexical errors through `sink`.
    /// The returned sequence always ends with an `Eof` token.
    pub fn scan_tokens(mut self, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(sink);
        }
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.line,
        });
        self.tokens
    }

    fn scan_token(&mut self, sink: &mut dyn DiagnosticSink) {
        let Some(ch) = self.advance() else {
            return;
        };
        match ch {
            '(' => self.add_token(TokenKind::LParen),
            ')' => self.add_token(TokenKind::RParen),
            '{' => self.add_token(TokenKind::LBrace),
            '}' => self.add_token(TokenKind::RBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_next('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_next('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Assign
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_next('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_next('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_next('/') {
                    // Line comment runs to the newline, which is left for
                    // the next iteration to count.
                    while let Some(ch) = self.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string_literal(sink),
            '0'..='9' => self.number_literal(),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(),
            other => sink.report(Diagnostic::new(
                DiagnosticKind::UnexpectedCharacter,
                self.line,
                format!("unexpected character: {other}"),
            )),
        }
    }

    fn string_literal(&mut self, sink: &mut dyn DiagnosticSink) {
        let opening_line = self.line;
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            sink.report(Diagnostic::new(
                DiagnosticKind::UnterminatedString,
                self.line,
                "unterminated string",
            ));
            return;
        }

        self.advance(); // closing '"'
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_literal_token(TokenKind::String, Literal::String(value), opening_line);
    }

    fn number_literal(&mut self) {
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }
        // A '.' is part of the number only when a digit follows; a trailing
        // dot is left for the next iteration.
        if self.peek() == Some('.') && matches!(self.peek_next(), Some('0'..='9')) {
            self.advance();
            while matches!(self.peek(), Some('0'..='9')) {
                self.advance();
            }
        }
        // The lexeme is digits with an optional fractional part; the parse
        // cannot fail.
        let value: f64 = self.lexeme().parse().unwrap_or_default();
        self.add_literal_token(TokenKind::Number, Literal::Number(value), self.line);
    }

    fn identifier_or_keyword(&mut self) {
        while matches!(self.peek(), Some('a'..='z' | 'A'..='Z' | '0'..='9' | '_')) {
            self.advance();
        }
        let kind = keyword_for(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.source[self.current..].chars().next()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn lexeme(&self) -> &str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal: None,
            line: self.line,
        });
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal, line: usize) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal: Some(literal),
            line,
        });
    }
}

/// Scan `source` to completion, collecting lexical errors instead of
/// streaming them through a caller-supplied sink.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
    (tokens, diagnostics)
}

fn keyword_for(ident: &str) -> Option<TokenKind> {
    use crate::token::Keyword as Kw;
    let keyword = match ident {
        "and" => Kw::And,
        "class" => Kw::Class,
        "else" => Kw::Else,
        "false" => Kw::False,
        "for" => Kw::For,
        "fun" => Kw::Fun,
        "if" => Kw::If,
        "nil" => Kw::Nil,
        "or" => Kw::Or,
        "print" => Kw::Print,
        "return" => Kw::Return,
        "super" => Kw::Super,
        "this" => Kw::This,
        "true" => Kw::True,
        "var" => Kw::Var,
        "while" => Kw::While,
        _ => return None,
    };
    Some(TokenKind::Keyword(keyword))
}
