use crate::token::{self, Location, Token, TokenKind};

/// A lexical scanner that converts a raw SQL string into an ordered
/// sequence of [Token]s, recording the line and column of every token.
///
/// The scanner works on bytes. Keywords, identifiers and numbers are
/// ASCII; string literals may carry arbitrary UTF-8 between their quotes.
pub struct Lexer {
    source: String,
    /// Byte index of `ch` in `source`.
    position: usize,
    /// The current byte, or 0 at end of input.
    ch: u8,
    line: usize,
    col: usize,
}

impl Lexer {
    /// Creates a new Lexer over the given source string.
    pub fn new(source: &str) -> Self {
        Self {
            ch: source.as_bytes().first().copied().unwrap_or(0),
            source: source.to_owned(),
            position: 0,
            line: 1,
            col: 1,
        }
    }

    /// Consumes the entire input and returns its tokens. No end-of-file
    /// token is appended; running out of tokens is the end marker.
    ///
    /// Unrecognised bytes become [TokenKind::Illegal] tokens rather than
    /// failing the scan, so the output always covers the whole input.
    ///
    /// # Example
    /// ```
    /// # use minisql::lexer::Lexer;
    /// # use minisql::token::TokenKind;
    /// let tokens = Lexer::new("SELECT *").tokenize();
    /// assert_eq!(tokens[0].kind, TokenKind::Select);
    /// assert_eq!(tokens[1].kind, TokenKind::Asterisk);
    /// ```
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while self.ch != 0 {
            self.skip_whitespace();

            match self.ch {
                0 => break,
                b';' => tokens.push(self.symbol(TokenKind::Semicolon)),
                b'*' => tokens.push(self.symbol(TokenKind::Asterisk)),
                b',' => tokens.push(self.symbol(TokenKind::Comma)),
                b'(' => tokens.push(self.symbol(TokenKind::LParen)),
                b')' => tokens.push(self.symbol(TokenKind::RParen)),
                b'<' => tokens.push(self.symbol(TokenKind::Lt)),
                b'>' => tokens.push(self.symbol(TokenKind::Gt)),
                b'=' => tokens.push(self.symbol(TokenKind::Eq)),
                b'!' => {
                    if self.peek() == b'=' {
                        let location = self.location();
                        self.advance();
                        self.advance();
                        tokens.push(Token {
                            kind: TokenKind::NotEq,
                            literal: "!=".to_owned(),
                            location,
                        });
                    } else {
                        tokens.push(self.symbol(TokenKind::Illegal));
                    }
                }
                b'\'' => tokens.push(self.read_string()),
                c if c.is_ascii_alphabetic() => tokens.push(self.read_identifier()),
                c if c.is_ascii_digit() => tokens.push(self.read_number()),
                _ => tokens.push(self.symbol(TokenKind::Illegal)),
            }
        }

        tokens
    }

    // --- Navigation Helpers ---

    /// Moves the cursor forward by one byte.
    fn advance(&mut self) {
        self.position += 1;
        self.col += 1;
        self.ch = self.source.as_bytes().get(self.position).copied().unwrap_or(0);
    }

    /// Returns the byte after the current one without consuming it.
    fn peek(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.position + 1)
            .copied()
            .unwrap_or(0)
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            col: self.col,
        }
    }

    /// Consumes spaces, tabs and newlines; newlines bump the line counter
    /// and reset the column.
    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n') {
            if self.ch == b'\n' {
                self.line += 1;
                self.col = 0;
            }
            self.advance();
        }
    }

    /// Emits a single-byte token and consumes it.
    fn symbol(&mut self, kind: TokenKind) -> Token {
        let tok = Token {
            kind,
            literal: (self.ch as char).to_string(),
            location: self.location(),
        };
        self.advance();
        tok
    }

    // --- Extraction Logic ---

    /// Reads letters, digits and underscores, then decides between a
    /// keyword kind and [TokenKind::Identifier].
    fn read_identifier(&mut self) -> Token {
        let location = self.location();
        let start = self.position;
        while self.ch.is_ascii_alphanumeric() || self.ch == b'_' {
            self.advance();
        }
        let literal = self.source[start..self.position].to_owned();
        Token {
            kind: token::lookup_identifier(&literal),
            literal,
            location,
        }
    }

    /// Reads a number: digits, then optionally a dot and more digits.
    /// `20.` is accepted as a FLOAT; exponents are not supported.
    fn read_number(&mut self) -> Token {
        let location = self.location();
        let start = self.position;
        let mut kind = TokenKind::Int;

        while self.ch.is_ascii_digit() {
            self.advance();
        }
        if self.ch == b'.' {
            kind = TokenKind::Float;
            self.advance();
            while self.ch.is_ascii_digit() {
                self.advance();
            }
        }

        Token {
            kind,
            literal: self.source[start..self.position].to_owned(),
            location,
        }
    }

    /// Reads a string literal enclosed in single quotes. There are no
    /// escape sequences; a missing closing quote yields an empty literal.
    fn read_string(&mut self) -> Token {
        let location = self.location();
        self.advance(); // opening quote

        let start = self.position;
        while self.ch != b'\'' && self.ch != 0 {
            self.advance();
        }

        let literal = if self.ch == b'\'' {
            let content = self.source[start..self.position].to_owned();
            self.advance(); // closing quote
            content
        } else {
            String::new()
        };

        Token {
            kind: TokenKind::String,
            literal,
            location,
        }
    }
}
