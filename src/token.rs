use std::fmt;

/// Classifies the smallest meaningful units (atoms) of the SQL language.
///
/// `Int`, `Float` and `Text` pull double duty: they are the type keywords
/// of `CREATE TABLE`, and the first two also tag number literals. The
/// token's literal text disambiguates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // --- SQL Keywords ---
    Select,
    From,
    As,
    Table,
    Create,
    Insert,
    Into,
    Values,
    Where,
    And,
    Or,
    Update,
    Set,
    Delete,

    // --- Type keywords / number literals ---
    Int,
    Float,
    Text,

    // --- Literals ---
    /// A string literal, defined between single quotes (e.g. `'Alice'`).
    String,
    /// A name representing a table or a column (e.g. `users`, `id`).
    Identifier,

    // --- Symbols ---
    Semicolon,
    Asterisk,
    Comma,
    LParen,
    RParen,

    // --- Operators ---
    Plus,
    Minus,
    Eq,
    NotEq,
    Gt,
    Lt,

    // --- Special ---
    /// A byte the lexer does not recognise.
    Illegal,
    /// End of input. Never emitted by the lexer; the parser uses it to
    /// name the position past the last token.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::As => "AS",
            TokenKind::Table => "TABLE",
            TokenKind::Create => "CREATE",
            TokenKind::Insert => "INSERT",
            TokenKind::Into => "INTO",
            TokenKind::Values => "VALUES",
            TokenKind::Where => "WHERE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Update => "UPDATE",
            TokenKind::Set => "SET",
            TokenKind::Delete => "DELETE",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Text => "TEXT",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "identifier",
            TokenKind::Semicolon => ";",
            TokenKind::Asterisk => "*",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Eq => "=",
            TokenKind::NotEq => "!=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        };
        f.write_str(spelling)
    }
}

/// The 1-based position of a token's first byte in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

/// A token: its kind, its literal text as it appeared in the source, and
/// where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: Location,
}

/// Resolves an identifier's literal to a keyword kind, or
/// [TokenKind::Identifier] if it is not a reserved word.
///
/// Keywords match case-insensitively; identifiers keep their casing.
pub fn lookup_identifier(literal: &str) -> TokenKind {
    match literal.to_uppercase().as_str() {
        "SELECT" => TokenKind::Select,
        "FROM" => TokenKind::From,
        "AS" => TokenKind::As,
        "TABLE" => TokenKind::Table,
        "CREATE" => TokenKind::Create,
        "INSERT" => TokenKind::Insert,
        "INTO" => TokenKind::Into,
        "VALUES" => TokenKind::Values,
        "WHERE" => TokenKind::Where,
        "AND" => TokenKind::And,
        "OR" => TokenKind::Or,
        "UPDATE" => TokenKind::Update,
        "SET" => TokenKind::Set,
        "DELETE" => TokenKind::Delete,
        "INT" => TokenKind::Int,
        "FLOAT" => TokenKind::Float,
        "TEXT" => TokenKind::Text,
        _ => TokenKind::Identifier,
    }
}

/// Returns true iff the literal is a reserved word, case-insensitively.
pub fn is_keyword(literal: &str) -> bool {
    lookup_identifier(literal) != TokenKind::Identifier
}
