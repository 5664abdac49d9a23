use crate::ast::{
    Assignment, ColumnDefinition, CreateTableStatement, DeleteStatement, Expression,
    InfixExpression, InsertStatement, Program, SelectStatement, Statement, UpdateStatement,
};
use crate::error::{ParseError, ParseErrorKind};
use crate::token::{self, Location, Token, TokenKind};

/// Binding strength of infix operators, lowest first. Only the
/// comparison and connective levels have operators today; the rest of
/// the ladder fixes where future operators slot in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[allow(dead_code)]
enum Precedence {
    Lowest,
    Assign,
    And,
    Or,
    Equals,
    LtGt,
    Sum,
    Product,
    Prefix,
    Index,
    Call,
}

impl Precedence {
    /// The next-lower level. Recursing with this instead of the
    /// operator's own level makes equal-precedence chains associate to
    /// the right.
    fn lower(self) -> Precedence {
        match self {
            Precedence::Lowest | Precedence::Assign => Precedence::Lowest,
            Precedence::And => Precedence::Assign,
            Precedence::Or => Precedence::And,
            Precedence::Equals => Precedence::Or,
            Precedence::LtGt => Precedence::Equals,
            Precedence::Sum => Precedence::LtGt,
            Precedence::Product => Precedence::Sum,
            Precedence::Prefix => Precedence::Product,
            Precedence::Index => Precedence::Prefix,
            Precedence::Call => Precedence::Index,
        }
    }
}

fn token_precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LtGt,
        TokenKind::And => Precedence::And,
        TokenKind::Or => Precedence::Or,
        _ => Precedence::Lowest,
    }
}

/// A recursive descent parser over a token vector, with a Pratt-style
/// expression parser for WHERE predicates and INSERT values.
///
/// Single-token lookahead: `current` is the token being examined and
/// `peek` the one after it. Running past the final token stands in for
/// an end-of-file token.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    /// Suppresses the `line L, col C: ` prefix on error messages.
    pub omit_error_location: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            omit_error_location: false,
        }
    }

    /// Parses the tokens into a [Program], consuming statements until
    /// the stream is exhausted. Statements must be separated by `;`; a
    /// trailing `;` is optional.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut program = Program::default();

        while self.current().is_some() {
            let statement = match self.parse_statement() {
                Ok(statement) => statement,
                Err(kind) => return Err(self.locate(kind)),
            };
            program.statements.push(statement);

            if !self.peek_is(TokenKind::Eof) && !self.current_is(TokenKind::Semicolon) {
                return Err(self.locate(ParseErrorKind::ExpectedToken(TokenKind::Semicolon)));
            }
            self.advance();
        }

        Ok(program)
    }

    // --- Navigation Helpers ---

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// [TokenKind::Eof] matches the absence of a token.
    fn check(token: Option<&Token>, kind: TokenKind) -> bool {
        match token {
            Some(token) => token.kind == kind,
            None => kind == TokenKind::Eof,
        }
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        Self::check(self.current(), kind)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        Self::check(self.peek(), kind)
    }

    /// Advances iff the next token has the expected kind.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Clones the current token if it has the expected kind; does not
    /// advance.
    fn take_current(&self, kind: TokenKind) -> Option<Token> {
        match self.current() {
            Some(token) if token.kind == kind => Some(token.clone()),
            _ => None,
        }
    }

    /// Attaches the current source location to an error, unless the
    /// parser was configured to omit it.
    fn locate(&self, kind: ParseErrorKind) -> ParseError {
        let location = (!self.omit_error_location).then(|| match self.current() {
            Some(token) => token.location,
            None => self.end_location(),
        });
        ParseError { kind, location }
    }

    /// The position one column past the final token, reported when a
    /// parse fails at end of input.
    fn end_location(&self) -> Location {
        match self.tokens.last() {
            Some(token) => Location {
                line: token.location.line,
                col: token.location.col + token.literal.len(),
            },
            None => Location { line: 1, col: 1 },
        }
    }

    // --- Statements ---

    fn parse_statement(&mut self) -> Result<Statement, ParseErrorKind> {
        let Some(token) = self.current() else {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::Eof));
        };
        let (kind, literal) = (token.kind, token.literal.clone());

        match kind {
            TokenKind::Select => self.parse_select(),
            TokenKind::Create => self.parse_create_table(),
            TokenKind::Insert => self.parse_insert(),
            TokenKind::Delete => self.parse_delete(),
            TokenKind::Update => self.parse_update(),
            _ => Err(ParseErrorKind::InvalidKeyword(literal)),
        }
    }

    /// `SELECT <column-list> FROM <table> [WHERE <predicate>] [;]`
    fn parse_select(&mut self) -> Result<Statement, ParseErrorKind> {
        let mut columns = Vec::new();

        self.advance();
        while self.current_is(TokenKind::Identifier) || self.current_is(TokenKind::Asterisk) {
            if let Some(token) = self.current() {
                columns.push(token.clone());
            }
            self.advance();
            if self.current_is(TokenKind::Comma) {
                self.advance();
            }
        }

        if columns.is_empty() {
            return Err(ParseErrorKind::EmptyColumnsList);
        }
        if !self.current_is(TokenKind::From) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::From));
        }

        self.advance();
        let table = self
            .take_current(TokenKind::Identifier)
            .ok_or(ParseErrorKind::ExpectedTableName)?;

        let predicate = self.parse_optional_predicate()?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Ok(Statement::Select(SelectStatement {
            table,
            columns,
            predicate,
        }))
    }

    /// `CREATE TABLE <table> (<name> <type>, ...) [;]`
    ///
    /// The column definition list is mandatory and must be non-empty; a
    /// bare `CREATE TABLE t;` is a syntax error.
    fn parse_create_table(&mut self) -> Result<Statement, ParseErrorKind> {
        if !self.expect_peek(TokenKind::Table) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::Table));
        }
        if !self.expect_peek(TokenKind::Identifier) {
            return Err(ParseErrorKind::ExpectedTableName);
        }
        let table = self
            .take_current(TokenKind::Identifier)
            .ok_or(ParseErrorKind::ExpectedTableName)?;

        self.advance();
        if !self.current_is(TokenKind::LParen) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::LParen));
        }
        self.advance();

        let mut columns = Vec::new();
        while self.current().is_some() && !self.current_is(TokenKind::RParen) {
            let name = self
                .take_current(TokenKind::Identifier)
                .ok_or(ParseErrorKind::ExpectedColumnName)?;
            self.advance();

            // Any keyword is accepted as a type here; the engine rejects
            // everything but INT, FLOAT and TEXT.
            let data_type = match self.current() {
                Some(token) if token::is_keyword(&token.literal) => token.clone(),
                _ => return Err(ParseErrorKind::ExpectedColumnType),
            };
            columns.push(ColumnDefinition { name, data_type });

            self.advance();
            if self.current_is(TokenKind::Comma) {
                self.advance();
            }
        }

        if !self.current_is(TokenKind::RParen) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::RParen));
        }
        if columns.is_empty() {
            return Err(ParseErrorKind::EmptyColumnDefinitions);
        }
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Ok(Statement::CreateTable(CreateTableStatement { table, columns }))
    }

    /// `INSERT INTO <table> (<column-list>) VALUES (<value-list>) [;]`
    fn parse_insert(&mut self) -> Result<Statement, ParseErrorKind> {
        if !self.expect_peek(TokenKind::Into) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::Into));
        }
        if !self.expect_peek(TokenKind::Identifier) {
            return Err(ParseErrorKind::ExpectedTableName);
        }
        let table = self
            .take_current(TokenKind::Identifier)
            .ok_or(ParseErrorKind::ExpectedTableName)?;

        if !self.expect_peek(TokenKind::LParen) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::LParen));
        }
        self.advance();

        let mut columns = Vec::new();
        while self.current().is_some() && !self.current_is(TokenKind::RParen) {
            if let Some(token) = self.current() {
                columns.push(token.clone());
            }
            self.advance();
            if self.current_is(TokenKind::Comma) {
                self.advance();
            }
        }
        if columns.is_empty() {
            return Err(ParseErrorKind::EmptyColumnsList);
        }

        if !self.expect_peek(TokenKind::Values) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::Values));
        }
        if !self.expect_peek(TokenKind::LParen) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::LParen));
        }
        self.advance();

        let mut values = Vec::new();
        while self.current().is_some() && !self.current_is(TokenKind::RParen) {
            values.push(self.parse_expression(Precedence::Lowest)?);
            self.advance();
            if self.current_is(TokenKind::Comma) {
                self.advance();
            }
        }

        if columns.len() != values.len() {
            return Err(ParseErrorKind::ValueCountMismatch);
        }
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Ok(Statement::Insert(InsertStatement {
            table,
            columns,
            values,
        }))
    }

    /// `DELETE FROM <table> [WHERE <predicate>] [;]`
    fn parse_delete(&mut self) -> Result<Statement, ParseErrorKind> {
        if !self.expect_peek(TokenKind::From) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::From));
        }
        if !self.expect_peek(TokenKind::Identifier) {
            return Err(ParseErrorKind::ExpectedTableName);
        }
        let table = self
            .take_current(TokenKind::Identifier)
            .ok_or(ParseErrorKind::ExpectedTableName)?;

        let predicate = self.parse_optional_predicate()?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Ok(Statement::Delete(DeleteStatement { table, predicate }))
    }

    /// `UPDATE <table> SET <column> = <value>, ... [WHERE <predicate>] [;]`
    fn parse_update(&mut self) -> Result<Statement, ParseErrorKind> {
        if !self.expect_peek(TokenKind::Identifier) {
            return Err(ParseErrorKind::ExpectedTableName);
        }
        let table = self
            .take_current(TokenKind::Identifier)
            .ok_or(ParseErrorKind::ExpectedTableName)?;

        if !self.expect_peek(TokenKind::Set) {
            return Err(ParseErrorKind::ExpectedToken(TokenKind::Set));
        }

        let mut assignments = Vec::new();
        loop {
            if !self.expect_peek(TokenKind::Identifier) {
                return Err(ParseErrorKind::ExpectedColumnName);
            }
            let column = self
                .take_current(TokenKind::Identifier)
                .ok_or(ParseErrorKind::ExpectedColumnName)?;

            if !self.expect_peek(TokenKind::Eq) {
                return Err(ParseErrorKind::ExpectedToken(TokenKind::Eq));
            }

            self.advance();
            let value = self
                .current()
                .cloned()
                .ok_or(ParseErrorKind::ExpectedValue)?;
            assignments.push(Assignment { column, value });

            if self.peek_is(TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        let predicate = self.parse_optional_predicate()?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Ok(Statement::Update(UpdateStatement {
            table,
            assignments,
            predicate,
        }))
    }

    /// Parses `WHERE <expression>` if the next token starts one.
    fn parse_optional_predicate(&mut self) -> Result<Option<Expression>, ParseErrorKind> {
        if !self.peek_is(TokenKind::Where) {
            return Ok(None);
        }
        self.advance(); // WHERE
        self.advance(); // first token of the expression
        self.parse_expression(Precedence::Lowest).map(Some)
    }

    // --- Expressions ---

    /// The Pratt loop: a prefix parse for the current token, then infix
    /// parses while the next operator binds tighter than the caller.
    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression, ParseErrorKind> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    fn peek_precedence(&self) -> Precedence {
        self.peek()
            .map(|token| token_precedence(token.kind))
            .unwrap_or(Precedence::Lowest)
    }

    fn parse_prefix(&mut self) -> Result<Expression, ParseErrorKind> {
        let Some(token) = self.current() else {
            return Err(ParseErrorKind::NoPrefixParser(TokenKind::Eof));
        };
        match token.kind {
            TokenKind::Int => token
                .literal
                .parse::<i64>()
                .map(Expression::Integer)
                .map_err(|_| ParseErrorKind::ExpectedToken(TokenKind::Int)),
            TokenKind::Float => token
                .literal
                .parse::<f64>()
                .map(Expression::Float)
                .map_err(|_| ParseErrorKind::ExpectedToken(TokenKind::Float)),
            TokenKind::String => Ok(Expression::String(token.literal.clone())),
            TokenKind::Identifier => Ok(Expression::Identifier(token.literal.clone())),
            kind => Err(ParseErrorKind::NoPrefixParser(kind)),
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Result<Expression, ParseErrorKind> {
        let Some(token) = self.current() else {
            return Err(ParseErrorKind::NoPrefixParser(TokenKind::Eof));
        };
        let operator = token.literal.clone();
        let precedence = token_precedence(token.kind);

        self.advance();
        let right = self.parse_expression(precedence.lower())?;

        Ok(Expression::Infix(Box::new(InfixExpression {
            left,
            operator,
            right,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(sql: &str) -> Result<Program, ParseError> {
        let mut parser = Parser::new(Lexer::new(sql).tokenize());
        parser.omit_error_location = true;
        parser.parse()
    }

    fn parse_with_locations(sql: &str) -> Result<Program, ParseError> {
        Parser::new(Lexer::new(sql).tokenize()).parse()
    }

    fn single_statement(sql: &str) -> Statement {
        let mut program = parse(sql).unwrap();
        assert_eq!(program.statements.len(), 1);
        program.statements.remove(0)
    }

    fn error_kind(sql: &str) -> ParseErrorKind {
        parse(sql).unwrap_err().kind
    }

    #[test]
    fn test_parse_select_star() {
        let Statement::Select(stmt) = single_statement("SELECT * FROM people") else {
            panic!("expected a select statement");
        };
        assert_eq!(stmt.table.literal, "people");
        assert_eq!(stmt.columns.len(), 1);
        assert_eq!(stmt.columns[0].kind, TokenKind::Asterisk);
        assert!(stmt.predicate.is_none());
    }

    #[test]
    fn test_parse_select_columns() {
        let Statement::Select(stmt) = single_statement("SELECT name, age FROM people;") else {
            panic!("expected a select statement");
        };
        let columns: Vec<&str> = stmt.columns.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(columns, vec!["name", "age"]);
    }

    #[test]
    fn test_parse_select_with_predicate() {
        let Statement::Select(stmt) = single_statement("SELECT age FROM people WHERE age = 30;")
        else {
            panic!("expected a select statement");
        };
        let Some(Expression::Infix(infix)) = stmt.predicate else {
            panic!("expected an infix predicate");
        };
        assert_eq!(infix.left, Expression::Identifier("age".into()));
        assert_eq!(infix.operator, "=");
        assert_eq!(infix.right, Expression::Integer(30));
    }

    #[test]
    fn test_equals_binds_tighter_than_and() {
        let Statement::Select(stmt) =
            single_statement("SELECT * FROM t WHERE a = 1 AND b = 2")
        else {
            panic!("expected a select statement");
        };
        let Some(Expression::Infix(and)) = stmt.predicate else {
            panic!("expected an infix predicate");
        };
        assert_eq!(and.operator, "AND");
        let Expression::Infix(left) = &and.left else {
            panic!("expected a comparison on the left");
        };
        let Expression::Infix(right) = &and.right else {
            panic!("expected a comparison on the right");
        };
        assert_eq!(left.operator, "=");
        assert_eq!(right.operator, "=");
    }

    #[test]
    fn test_equal_precedence_chains_are_right_associative() {
        let Statement::Select(stmt) =
            single_statement("SELECT * FROM t WHERE a = 1 AND b = 2 AND c = 3")
        else {
            panic!("expected a select statement");
        };
        let Some(Expression::Infix(outer)) = stmt.predicate else {
            panic!("expected an infix predicate");
        };
        assert_eq!(outer.operator, "AND");
        // The left side is a single comparison; the chain nests to the
        // right.
        let Expression::Infix(left) = &outer.left else {
            panic!("expected a comparison on the left");
        };
        assert_eq!(left.operator, "=");
        let Expression::Infix(inner) = &outer.right else {
            panic!("expected the nested AND on the right");
        };
        assert_eq!(inner.operator, "AND");
    }

    #[test]
    fn test_select_empty_columns_list() {
        assert_eq!(error_kind("SELECT , FROM people"), ParseErrorKind::EmptyColumnsList);
    }

    #[test]
    fn test_select_missing_from() {
        assert_eq!(
            error_kind("SELECT name people"),
            ParseErrorKind::ExpectedToken(TokenKind::From)
        );
    }

    #[test]
    fn test_select_missing_table_name() {
        assert_eq!(error_kind("SELECT name FROM"), ParseErrorKind::ExpectedTableName);
    }

    #[test]
    fn test_no_prefix_parser_error() {
        assert_eq!(
            error_kind("SELECT * FROM t WHERE @"),
            ParseErrorKind::NoPrefixParser(TokenKind::Illegal)
        );
    }

    #[test]
    fn test_parse_create_table() {
        let Statement::CreateTable(stmt) =
            single_statement("CREATE TABLE people (name TEXT, age INT);")
        else {
            panic!("expected a create table statement");
        };
        assert_eq!(stmt.table.literal, "people");
        assert_eq!(stmt.columns.len(), 2);
        assert_eq!(stmt.columns[0].name.literal, "name");
        assert_eq!(stmt.columns[0].data_type.kind, TokenKind::Text);
        assert_eq!(stmt.columns[1].name.literal, "age");
        assert_eq!(stmt.columns[1].data_type.kind, TokenKind::Int);
    }

    #[test]
    fn test_create_table_requires_column_list() {
        assert_eq!(
            error_kind("CREATE TABLE people;"),
            ParseErrorKind::ExpectedToken(TokenKind::LParen)
        );
        assert_eq!(
            error_kind("CREATE TABLE people ()"),
            ParseErrorKind::EmptyColumnDefinitions
        );
    }

    #[test]
    fn test_create_table_errors() {
        assert_eq!(
            error_kind("CREATE people (a INT)"),
            ParseErrorKind::ExpectedToken(TokenKind::Table)
        );
        assert_eq!(error_kind("CREATE TABLE"), ParseErrorKind::ExpectedTableName);
        assert_eq!(
            error_kind("CREATE TABLE t (a INT"),
            ParseErrorKind::ExpectedToken(TokenKind::RParen)
        );
        assert_eq!(
            error_kind("CREATE TABLE t (a 44)"),
            ParseErrorKind::ExpectedColumnType
        );
    }

    #[test]
    fn test_parse_insert() {
        let Statement::Insert(stmt) =
            single_statement("INSERT INTO people (name, age) VALUES ('John', 40);")
        else {
            panic!("expected an insert statement");
        };
        assert_eq!(stmt.table.literal, "people");
        let columns: Vec<&str> = stmt.columns.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(columns, vec!["name", "age"]);
        assert_eq!(
            stmt.values,
            vec![Expression::String("John".into()), Expression::Integer(40)]
        );
    }

    #[test]
    fn test_insert_arity_mismatch() {
        assert_eq!(
            error_kind("INSERT INTO t (a,b) VALUES (1);"),
            ParseErrorKind::ValueCountMismatch
        );
        assert_eq!(
            error_kind("INSERT INTO t (a) VALUES (1, 2);"),
            ParseErrorKind::ValueCountMismatch
        );
    }

    #[test]
    fn test_insert_errors() {
        assert_eq!(
            error_kind("INSERT people (a) VALUES (1)"),
            ParseErrorKind::ExpectedToken(TokenKind::Into)
        );
        assert_eq!(
            error_kind("INSERT INTO t () VALUES (1)"),
            ParseErrorKind::EmptyColumnsList
        );
        assert_eq!(
            error_kind("INSERT INTO t (a) (1)"),
            ParseErrorKind::ExpectedToken(TokenKind::Values)
        );
    }

    #[test]
    fn test_parse_delete() {
        let Statement::Delete(stmt) = single_statement("DELETE FROM people WHERE age = 30;")
        else {
            panic!("expected a delete statement");
        };
        assert_eq!(stmt.table.literal, "people");
        assert!(stmt.predicate.is_some());

        let Statement::Delete(stmt) = single_statement("DELETE FROM people") else {
            panic!("expected a delete statement");
        };
        assert!(stmt.predicate.is_none());
    }

    #[test]
    fn test_parse_update() {
        let Statement::Update(stmt) =
            single_statement("UPDATE people SET age = 66, name = 'Joe' WHERE age = 40;")
        else {
            panic!("expected an update statement");
        };
        assert_eq!(stmt.table.literal, "people");
        assert_eq!(stmt.assignments.len(), 2);
        assert_eq!(stmt.assignments[0].column.literal, "age");
        assert_eq!(stmt.assignments[0].value.literal, "66");
        assert_eq!(stmt.assignments[1].column.literal, "name");
        assert_eq!(stmt.assignments[1].value.literal, "Joe");
        assert!(stmt.predicate.is_some());
    }

    #[test]
    fn test_update_errors() {
        assert_eq!(
            error_kind("UPDATE people age = 66"),
            ParseErrorKind::ExpectedToken(TokenKind::Set)
        );
        assert_eq!(
            error_kind("UPDATE people SET age 66"),
            ParseErrorKind::ExpectedToken(TokenKind::Eq)
        );
        assert_eq!(error_kind("UPDATE people SET age ="), ParseErrorKind::ExpectedValue);
    }

    #[test]
    fn test_multiple_statements() {
        let program = parse("CREATE TABLE t (a INT); INSERT INTO t (a) VALUES (1); SELECT a FROM t")
            .unwrap();
        assert_eq!(program.statements.len(), 3);
    }

    #[test]
    fn test_missing_statement_separator() {
        assert_eq!(
            error_kind("SELECT a FROM t SELECT b FROM t"),
            ParseErrorKind::ExpectedToken(TokenKind::Semicolon)
        );
    }

    #[test]
    fn test_invalid_leading_keyword() {
        assert_eq!(
            error_kind("FOO bar;"),
            ParseErrorKind::InvalidKeyword("FOO".into())
        );
    }

    #[test]
    fn test_error_location_prefix() {
        let err = parse_with_locations("SELECT , FROM people").unwrap_err();
        assert_eq!(err.to_string(), "line 1, col 8: must specify a column name");
    }

    #[test]
    fn test_error_location_past_end_of_input() {
        let err = parse_with_locations("SELECT name FROM").unwrap_err();
        assert_eq!(err.to_string(), "line 1, col 17: expected table name");
    }

    #[test]
    fn test_error_location_on_later_line() {
        let err = parse_with_locations("CREATE TABLE t (a INT);\nSELECT , FROM t").unwrap_err();
        assert_eq!(err.to_string(), "line 2, col 8: must specify a column name");
    }
}
