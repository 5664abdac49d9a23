use std::collections::HashMap;

use tracing::debug;

use crate::ast::{
    CreateTableStatement, DeleteStatement, Expression, InsertStatement, SelectStatement,
    Statement, UpdateStatement,
};
use crate::cell::{Cell, ColumnType};
use crate::error::{Error, ParseError, Result};
use crate::eval::{eval_expression, is_truthy, Scope};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::table::{Column, Row, Table};
use crate::token::TokenKind;

/// A projected column of a [FetchResult].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultColumn {
    pub name: String,
    pub column_type: ColumnType,
}

/// The rows and column descriptors produced by a SELECT.
///
/// Rows come back in table order; each row holds one `Option<Cell>` per
/// projected column, `None` where the stored slot is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub columns: Vec<ResultColumn>,
    pub rows: Vec<Vec<Option<Cell>>>,
}

impl FetchResult {
    /// Lazily materialised name-to-cell views over the rows, in row
    /// order. Absent cells are omitted from each mapping.
    pub fn assoc_rows(&self) -> impl Iterator<Item = HashMap<&str, &Cell>> + '_ {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .zip(row)
                .filter_map(|(column, cell)| cell.as_ref().map(|c| (column.name.as_str(), c)))
                .collect()
        })
    }
}

/// The per-statement result of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementOutcome {
    /// Rows fetched by a SELECT.
    Rows(FetchResult),
    /// Rows affected by CREATE TABLE (always 0), INSERT, DELETE or
    /// UPDATE.
    Affected(usize),
    /// The statement failed; no later statement was executed.
    Failed(Error),
}

/// The in-memory storage engine: a set of named tables and the entry
/// point for executing SQL against them.
#[derive(Debug, Default)]
pub struct Database {
    tables: HashMap<String, Table>,
}

impl Database {
    /// Creates a new, empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// The named table, if it exists.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Parses `source` and executes its statements in order.
    ///
    /// A parse error executes nothing. An execution error stops the
    /// submission: the outcomes of the statements before it are kept and
    /// the failing statement's error becomes the final outcome.
    ///
    /// # Example
    /// ```
    /// use minisql::{Database, StatementOutcome};
    ///
    /// let mut db = Database::new();
    /// let outcomes = db.submit("CREATE TABLE users (id INT)").unwrap();
    /// assert_eq!(outcomes, vec![StatementOutcome::Affected(0)]);
    ///
    /// db.submit("INSERT INTO users (id) VALUES (1)").unwrap();
    /// let outcomes = db.submit("SELECT id FROM users").unwrap();
    /// match &outcomes[0] {
    ///     StatementOutcome::Rows(result) => assert_eq!(result.rows.len(), 1),
    ///     other => panic!("unexpected outcome: {other:?}"),
    /// }
    /// ```
    pub fn submit(
        &mut self,
        source: &str,
    ) -> std::result::Result<Vec<StatementOutcome>, ParseError> {
        let tokens = Lexer::new(source).tokenize();
        let program = Parser::new(tokens).parse()?;
        debug!(statements = program.statements.len(), "executing program");

        let mut outcomes = Vec::with_capacity(program.statements.len());
        for statement in &program.statements {
            match self.execute(statement) {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    debug!(%err, "statement failed, halting submission");
                    outcomes.push(StatementOutcome::Failed(err));
                    break;
                }
            }
        }
        Ok(outcomes)
    }

    fn execute(&mut self, statement: &Statement) -> Result<StatementOutcome> {
        match statement {
            Statement::Select(stmt) => self.select(stmt).map(StatementOutcome::Rows),
            Statement::CreateTable(stmt) => self
                .create_table(stmt)
                .map(|()| StatementOutcome::Affected(0)),
            Statement::Insert(stmt) => self.insert(stmt).map(StatementOutcome::Affected),
            Statement::Delete(stmt) => self.delete(stmt).map(StatementOutcome::Affected),
            Statement::Update(stmt) => self.update(stmt).map(StatementOutcome::Affected),
        }
    }

    /// Creates a table from its definition. Table names are unique
    /// within the database.
    pub fn create_table(&mut self, stmt: &CreateTableStatement) -> Result<()> {
        if self.tables.contains_key(&stmt.table.literal) {
            return Err(Error::TableExists);
        }

        let mut columns = Vec::with_capacity(stmt.columns.len());
        for definition in &stmt.columns {
            let column_type = match definition.data_type.kind {
                TokenKind::Int => ColumnType::Int,
                TokenKind::Float => ColumnType::Float,
                TokenKind::Text => ColumnType::Text,
                _ => return Err(Error::InvalidDataType),
            };
            columns.push(Column {
                name: definition.name.literal.clone(),
                column_type,
            });
        }

        self.tables
            .insert(stmt.table.literal.clone(), Table::new(columns));
        Ok(())
    }

    /// Appends one row. Columns the statement does not mention are left
    /// absent; each mentioned value is encoded for its column's type.
    pub fn insert(&mut self, stmt: &InsertStatement) -> Result<usize> {
        let table = self
            .tables
            .get_mut(&stmt.table.literal)
            .ok_or(Error::TableNotFound)?;

        let mut row = Row::absent(table.columns.len());
        for (column, value) in stmt.columns.iter().zip(&stmt.values) {
            let index = table
                .column_index(&column.literal)
                .ok_or(Error::ColumnNotFound)?;
            let cell = Cell::encode(&value.to_string(), table.columns[index].column_type)?;
            row.set(index, cell);
        }

        table.rows.push(row);
        Ok(1)
    }

    /// Runs a SELECT and returns the projected rows in table order.
    ///
    /// `*` expands to all columns; duplicate projection names collapse;
    /// the projection is ordered by the columns' declaration order so
    /// the output is deterministic.
    pub fn select(&self, stmt: &SelectStatement) -> Result<FetchResult> {
        let table = self
            .tables
            .get(&stmt.table.literal)
            .ok_or(Error::TableNotFound)?;

        let mut projection: Vec<(usize, ResultColumn)> = Vec::new();
        for column in &stmt.columns {
            if column.kind == TokenKind::Asterisk {
                for (index, col) in table.columns.iter().enumerate() {
                    push_unique(&mut projection, index, col);
                }
                continue;
            }
            let index = table
                .column_index(&column.literal)
                .ok_or(Error::ColumnNotFound)?;
            push_unique(&mut projection, index, &table.columns[index]);
        }
        projection.sort_unstable_by_key(|(index, _)| *index);

        let mut rows = Vec::new();
        for row in &table.rows {
            if !row_matches(table, stmt.predicate.as_ref(), row)? {
                continue;
            }
            rows.push(
                projection
                    .iter()
                    .map(|(index, _)| row.get(*index).cloned())
                    .collect(),
            );
        }

        Ok(FetchResult {
            columns: projection.into_iter().map(|(_, column)| column).collect(),
            rows,
        })
    }

    /// Removes every row the predicate matches (all rows if there is
    /// none), preserving the order of the survivors. Returns the number
    /// of rows removed.
    pub fn delete(&mut self, stmt: &DeleteStatement) -> Result<usize> {
        let table = self
            .tables
            .get_mut(&stmt.table.literal)
            .ok_or(Error::TableNotFound)?;

        let mut matched = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            matched.push(row_matches(table, stmt.predicate.as_ref(), row)?);
        }

        let before = table.rows.len();
        let mut index = 0;
        table.rows.retain(|_| {
            let keep = !matched[index];
            index += 1;
            keep
        });
        Ok(before - table.rows.len())
    }

    /// Overwrites the assigned cells of every matching row (all rows if
    /// there is no predicate). Returns the number of rows affected.
    pub fn update(&mut self, stmt: &UpdateStatement) -> Result<usize> {
        let table = self
            .tables
            .get_mut(&stmt.table.literal)
            .ok_or(Error::TableNotFound)?;

        let mut targets = Vec::with_capacity(stmt.assignments.len());
        for assignment in &stmt.assignments {
            let index = table
                .column_index(&assignment.column.literal)
                .ok_or(Error::ColumnNotFound)?;
            targets.push((index, assignment.value.literal.as_str()));
        }

        let mut affected = 0;
        for row_index in 0..table.rows.len() {
            if !row_matches(table, stmt.predicate.as_ref(), &table.rows[row_index])? {
                continue;
            }
            for (index, literal) in &targets {
                let cell = Cell::encode(literal, table.columns[*index].column_type)?;
                table.rows[row_index].set(*index, cell);
            }
            affected += 1;
        }
        Ok(affected)
    }
}

fn push_unique(projection: &mut Vec<(usize, ResultColumn)>, index: usize, column: &Column) {
    if projection.iter().all(|(_, existing)| existing.name != column.name) {
        projection.push((
            index,
            ResultColumn {
                name: column.name.clone(),
                column_type: column.column_type,
            },
        ));
    }
}

/// Builds the per-row scope (absent cells stay unbound) and applies the
/// predicate. Rows match unconditionally when there is no predicate;
/// evaluation failures propagate instead of dropping the row.
fn row_matches(table: &Table, predicate: Option<&Expression>, row: &Row) -> Result<bool> {
    let Some(predicate) = predicate else {
        return Ok(true);
    };

    let mut scope = Scope::new();
    for (index, column) in table.columns.iter().enumerate() {
        let Some(cell) = row.get(index) else {
            continue;
        };
        let literal = match column.column_type {
            ColumnType::Int => Expression::Integer(cell.as_int()),
            ColumnType::Float => Expression::Float(cell.as_float()),
            ColumnType::Text => Expression::String(cell.as_text().to_owned()),
        };
        scope.set_var(&column.name, literal);
    }

    let value = eval_expression(predicate, &scope)?;
    Ok(is_truthy(value.as_ref()))
}
