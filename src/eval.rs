use std::collections::HashMap;

use crate::ast::{Expression, InfixExpression};
use crate::error::{Error, Result};

/// Per-row variable bindings consulted when a predicate names a column.
///
/// The engine builds one scope per row, binding each present cell's
/// column name to a literal expression; absent cells are left unbound.
#[derive(Debug, Default)]
pub struct Scope<'a> {
    vars: HashMap<&'a str, Expression>,
}

impl<'a> Scope<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_var(&mut self, name: &'a str, value: Expression) {
        self.vars.insert(name, value);
    }

    pub fn get_var(&self, name: &str) -> Option<&Expression> {
        self.vars.get(name)
    }
}

/// Reduces an expression to a literal under the given scope.
///
/// Literals evaluate to themselves. An identifier resolves through the
/// scope and reduces to `None` when unbound; the caller decides what an
/// absent result means (predicates treat it as falsy). An infix node
/// evaluates both operands, then dispatches on their kinds and the
/// operator text.
pub fn eval_expression(expr: &Expression, scope: &Scope) -> Result<Option<Expression>> {
    match expr {
        Expression::Identifier(name) => Ok(scope.get_var(name).cloned()),
        Expression::Infix(infix) => eval_infix(infix, scope),
        literal => Ok(Some(literal.clone())),
    }
}

fn eval_infix(infix: &InfixExpression, scope: &Scope) -> Result<Option<Expression>> {
    let left = eval_expression(&infix.left, scope)?;
    let right = eval_expression(&infix.right, scope)?;

    match (left, right) {
        (Some(left), Some(right)) => apply_operator(&left, &infix.operator, &right).map(Some),
        // An absent operand has no kind to dispatch on.
        _ => Err(Error::InvalidOperation),
    }
}

/// The operator table, keyed by (left kind, operator text, right kind).
///
/// Alphabetic operators match case-insensitively; there is no implicit
/// numeric coercion, and INT arithmetic wraps on overflow. Both sides
/// are always evaluated before AND/OR apply, so there is no
/// short-circuiting.
fn apply_operator(left: &Expression, operator: &str, right: &Expression) -> Result<Expression> {
    use Expression::{Boolean, Float, Integer, String};

    let operator = operator.to_uppercase();
    match (left, operator.as_str(), right) {
        (Integer(a), "+", Integer(b)) => Ok(Integer(a.wrapping_add(*b))),
        (Integer(a), "-", Integer(b)) => Ok(Integer(a.wrapping_sub(*b))),
        (Integer(a), "=", Integer(b)) => Ok(Boolean(a == b)),
        (Integer(a), "!=", Integer(b)) => Ok(Boolean(a != b)),
        (Integer(a), "<", Integer(b)) => Ok(Boolean(a < b)),
        (Integer(a), ">", Integer(b)) => Ok(Boolean(a > b)),

        (Float(a), "+", Float(b)) => Ok(Float(a + b)),
        (Float(a), "-", Float(b)) => Ok(Float(a - b)),
        (Float(a), "=", Float(b)) => Ok(Boolean(a == b)),
        (Float(a), "!=", Float(b)) => Ok(Boolean(a != b)),
        (Float(a), "<", Float(b)) => Ok(Boolean(a < b)),
        (Float(a), ">", Float(b)) => Ok(Boolean(a > b)),

        (String(a), "=", String(b)) => Ok(Boolean(a == b)),
        (String(a), "!=", String(b)) => Ok(Boolean(a != b)),

        (Boolean(a), "AND", Boolean(b)) => Ok(Boolean(*a && *b)),
        (Boolean(a), "OR", Boolean(b)) => Ok(Boolean(*a || *b)),

        _ => Err(Error::InvalidOperation),
    }
}

/// Predicate truthiness: BOOLEAN is its value, numbers are truthy when
/// nonzero, strings when nonempty; an absent value is falsy.
pub fn is_truthy(value: Option<&Expression>) -> bool {
    match value {
        Some(Expression::Boolean(b)) => *b,
        Some(Expression::Integer(i)) => *i != 0,
        Some(Expression::Float(f)) => *f != 0.0,
        Some(Expression::String(s)) => !s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infix(left: Expression, operator: &str, right: Expression) -> Expression {
        Expression::Infix(Box::new(InfixExpression {
            left,
            operator: operator.into(),
            right,
        }))
    }

    fn eval(expr: &Expression) -> Result<Option<Expression>> {
        eval_expression(expr, &Scope::new())
    }

    #[test]
    fn test_literals_evaluate_to_themselves() {
        for literal in [
            Expression::Integer(42),
            Expression::Float(0.5),
            Expression::String("hello".into()),
            Expression::Boolean(true),
        ] {
            assert_eq!(eval(&literal).unwrap(), Some(literal));
        }
    }

    #[test]
    fn test_identifier_resolution() {
        let mut scope = Scope::new();
        scope.set_var("age", Expression::Integer(40));

        let hit = eval_expression(&Expression::Identifier("age".into()), &scope).unwrap();
        assert_eq!(hit, Some(Expression::Integer(40)));

        let miss = eval_expression(&Expression::Identifier("ghost".into()), &scope).unwrap();
        assert_eq!(miss, None);
    }

    #[test]
    fn test_integer_arithmetic() {
        let sum = infix(Expression::Integer(2), "+", Expression::Integer(3));
        assert_eq!(eval(&sum).unwrap(), Some(Expression::Integer(5)));

        let diff = infix(Expression::Integer(2), "-", Expression::Integer(3));
        assert_eq!(eval(&diff).unwrap(), Some(Expression::Integer(-1)));
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        let overflow = infix(Expression::Integer(i64::MAX), "+", Expression::Integer(1));
        assert_eq!(eval(&overflow).unwrap(), Some(Expression::Integer(i64::MIN)));
    }

    #[test]
    fn test_integer_comparisons() {
        let cases = [
            ("=", 30, 30, true),
            ("=", 30, 40, false),
            ("!=", 30, 40, true),
            ("<", 30, 40, true),
            (">", 30, 40, false),
        ];
        for (operator, a, b, expected) in cases {
            let expr = infix(Expression::Integer(a), operator, Expression::Integer(b));
            assert_eq!(eval(&expr).unwrap(), Some(Expression::Boolean(expected)));
        }
    }

    #[test]
    fn test_float_operations() {
        let gt = infix(Expression::Float(0.5), ">", Expression::Float(0.25));
        assert_eq!(eval(&gt).unwrap(), Some(Expression::Boolean(true)));

        let sum = infix(Expression::Float(0.5), "+", Expression::Float(0.25));
        assert_eq!(eval(&sum).unwrap(), Some(Expression::Float(0.75)));
    }

    #[test]
    fn test_string_equality_is_bytewise() {
        let eq = infix(
            Expression::String("John".into()),
            "=",
            Expression::String("John".into()),
        );
        assert_eq!(eval(&eq).unwrap(), Some(Expression::Boolean(true)));

        let neq = infix(
            Expression::String("John".into()),
            "!=",
            Expression::String("john".into()),
        );
        assert_eq!(eval(&neq).unwrap(), Some(Expression::Boolean(true)));
    }

    #[test]
    fn test_boolean_connectives_ignore_operator_case() {
        for operator in ["AND", "and", "And"] {
            let expr = infix(
                Expression::Boolean(true),
                operator,
                Expression::Boolean(false),
            );
            assert_eq!(eval(&expr).unwrap(), Some(Expression::Boolean(false)));
        }
        let or = infix(Expression::Boolean(true), "or", Expression::Boolean(false));
        assert_eq!(eval(&or).unwrap(), Some(Expression::Boolean(true)));
    }

    #[test]
    fn test_unregistered_operation_fails() {
        let mixed = infix(Expression::Integer(1), "+", Expression::Float(1.0));
        assert_eq!(eval(&mixed).unwrap_err(), Error::InvalidOperation);

        let ordered_strings = infix(
            Expression::String("a".into()),
            "<",
            Expression::String("b".into()),
        );
        assert_eq!(eval(&ordered_strings).unwrap_err(), Error::InvalidOperation);
    }

    #[test]
    fn test_absent_operand_fails() {
        let expr = infix(
            Expression::Identifier("ghost".into()),
            "=",
            Expression::Integer(1),
        );
        assert_eq!(eval(&expr).unwrap_err(), Error::InvalidOperation);
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(Some(&Expression::Boolean(true))));
        assert!(!is_truthy(Some(&Expression::Boolean(false))));
        assert!(is_truthy(Some(&Expression::Integer(1))));
        assert!(!is_truthy(Some(&Expression::Integer(0))));
        assert!(is_truthy(Some(&Expression::Float(0.5))));
        assert!(!is_truthy(Some(&Expression::Float(0.0))));
        assert!(is_truthy(Some(&Expression::String("x".into()))));
        assert!(!is_truthy(Some(&Expression::String(String::new()))));
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Expression::Identifier("age".into()))));
    }
}
