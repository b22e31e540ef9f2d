mod environment;
mod error;
mod value;

pub use environment::*;
pub use error::*;
pub use value::*;

use std::{cmp::Ordering, io::Write};

use log::trace;

use crate::{
    page::PageBuffer,
    parser::ast::{
        BinaryExpression, Comparison, Expression, IfStatement, Initialisation, PrintStatement,
        Statement, WhileLoop,
    },
};

/// Result of running a single statement: either control flows on normally,
/// or a loop signal travels up to the innermost enclosing `while`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Normal,
    Break,
    Continue,
}

pub struct Interpreter {
    statements: Vec<Statement>,
}

impl Interpreter {
    pub fn from_ast(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Run the whole program against a fresh environment, printing through
    /// `page` into `sink`. The first runtime error aborts the run.
    pub fn run(&self, page: &mut PageBuffer, sink: &mut dyn Write) -> Result<(), RuntimeError> {
        let mut env = Environment::new();

        for statement in &self.statements {
            let signal = Self::run_statement(statement, &mut env, page, sink)?;
            trace!("top-level statement finished with {signal:?}");
        }

        Ok(())
    }

    fn run_statement(
        statement: &Statement,
        env: &mut Environment,
        page: &mut PageBuffer,
        sink: &mut dyn Write,
    ) -> Result<Signal, RuntimeError> {
        match statement {
            Statement::Let(Initialisation { name, value }) => {
                let value = Self::run_expression(value, env)?;
                trace!("binding '{name}' to {value:?}");
                env.set(name, value);
                Ok(Signal::Normal)
            }
            Statement::Print(PrintStatement { value }) => {
                let value = Self::run_expression(value, env)?;
                page.append(&value.to_string());
                Ok(Signal::Normal)
            }
            Statement::If(if_statement) => Self::run_if(if_statement, env, page, sink),
            Statement::While(while_loop) => Self::run_while(while_loop, env, page, sink),
            Statement::Break => Ok(Signal::Break),
            Statement::Continue => Ok(Signal::Continue),
            Statement::Page => {
                page.flush(sink)?;
                Ok(Signal::Normal)
            }
            Statement::Expression(expression) => {
                Self::run_expression(expression, env)?;
                Ok(Signal::Normal)
            }
        }
    }

    /// A signal raised inside the body skips the rest of the body and
    /// propagates out of the `if`, up to the enclosing loop.
    fn run_if(
        if_statement: &IfStatement,
        env: &mut Environment,
        page: &mut PageBuffer,
        sink: &mut dyn Write,
    ) -> Result<Signal, RuntimeError> {
        if Self::run_expression(&if_statement.condition, env)?.is_truthy() {
            for statement in &if_statement.body {
                let signal = Self::run_statement(statement, env, page, sink)?;
                if signal != Signal::Normal {
                    return Ok(signal);
                }
            }
        }

        Ok(Signal::Normal)
    }

    fn run_while(
        while_loop: &WhileLoop,
        env: &mut Environment,
        page: &mut PageBuffer,
        sink: &mut dyn Write,
    ) -> Result<Signal, RuntimeError> {
        while Self::run_expression(&while_loop.condition, env)?.is_truthy() {
            for statement in &while_loop.body {
                match Self::run_statement(statement, env, page, sink)? {
                    Signal::Normal => {}
                    Signal::Break => return Ok(Signal::Normal),
                    Signal::Continue => break,
                }
            }
        }

        Ok(Signal::Normal)
    }

    fn run_expression(expression: &Expression, env: &Environment) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Num(value) => Ok(Value::Number(*value)),
            Expression::Str(value) => Ok(Value::Str(value.clone())),
            Expression::Bool(value) => Ok(Value::Bool(*value)),
            Expression::Id(name) => env
                .get(name)
                .ok_or_else(|| RuntimeError::UndefinedVariable(name.clone())),
            Expression::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(Self::run_expression(element, env)?);
                }
                Ok(Value::array(values))
            }
            Expression::Index { target, index } => Self::run_index(target, index, env),
            Expression::Binary(binary) => Self::run_binary(binary, env),
            Expression::Comparison(comparison) => Self::run_comparison(comparison, env),
        }
    }

    fn run_index(
        target: &Expression,
        index: &Expression,
        env: &Environment,
    ) -> Result<Value, RuntimeError> {
        let target = Self::run_expression(target, env)?;
        let index = Self::run_expression(index, env)?;

        let Value::Number(index) = index else {
            return Err(RuntimeError::InvalidValue(format!(
                "Array index must be a number, not a {}",
                index.type_name()
            )));
        };
        if !index.is_finite() {
            return Err(RuntimeError::InvalidValue(
                "Array index must be finite".into(),
            ));
        }

        let Value::Array(values) = target else {
            return Err(RuntimeError::TypeMismatch(
                "Attempted to access an index on a non-array".into(),
            ));
        };

        let index = index.trunc();
        let values = values.borrow();
        if index < 0.0 || index >= values.len() as f64 {
            return Err(RuntimeError::IndexOutOfRange);
        }

        Ok(values[index as usize].clone())
    }

    fn run_binary(binary: &BinaryExpression, env: &Environment) -> Result<Value, RuntimeError> {
        match binary {
            BinaryExpression::Addition(left, right) => {
                match Self::run_operands(left, right, env)? {
                    (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
                    (Value::Str(left), Value::Str(right)) => Ok(Value::Str(format!(
                        "{left}{right}"
                    ))),
                    (Value::Array(left), Value::Array(right)) => {
                        let mut values = left.borrow().clone();
                        values.extend(right.borrow().iter().cloned());
                        Ok(Value::array(values))
                    }
                    (left, right) => Err(Self::operand_mismatch("+", &left, &right)),
                }
            }
            BinaryExpression::Subtraction(left, right) => {
                match Self::run_operands(left, right, env)? {
                    (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left - right)),
                    (left, right) => Err(Self::operand_mismatch("-", &left, &right)),
                }
            }
            BinaryExpression::Multiplication(left, right) => {
                match Self::run_operands(left, right, env)? {
                    (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left * right)),
                    (left, right) => Err(Self::operand_mismatch("*", &left, &right)),
                }
            }
            BinaryExpression::Division(left, right) => {
                match Self::run_operands(left, right, env)? {
                    (Value::Number(_), Value::Number(right)) if right == 0.0 => {
                        Err(RuntimeError::DivisionByZero)
                    }
                    (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left / right)),
                    (left, right) => Err(Self::operand_mismatch("/", &left, &right)),
                }
            }
        }
    }

    fn run_comparison(
        comparison: &Comparison,
        env: &Environment,
    ) -> Result<Value, RuntimeError> {
        match comparison {
            Comparison::Equal(left, right) => {
                let (left, right) = Self::run_operands(left, right, env)?;
                Ok(Value::Bool(left == right))
            }
            Comparison::NotEqual(left, right) => {
                let (left, right) = Self::run_operands(left, right, env)?;
                Ok(Value::Bool(left != right))
            }
            Comparison::LessThan(left, right) => {
                Self::run_ordered("<", left, right, env, Ordering::is_lt)
            }
            Comparison::GreaterThan(left, right) => {
                Self::run_ordered(">", left, right, env, Ordering::is_gt)
            }
            Comparison::LessOrEqual(left, right) => {
                Self::run_ordered("<=", left, right, env, Ordering::is_le)
            }
            Comparison::GreaterOrEqual(left, right) => {
                Self::run_ordered(">=", left, right, env, Ordering::is_ge)
            }
        }
    }

    /// Ordering comparisons work on two numbers or two strings; a
    /// comparison involving NaN is false.
    fn run_ordered(
        op: &str,
        left: &Expression,
        right: &Expression,
        env: &Environment,
        test: fn(Ordering) -> bool,
    ) -> Result<Value, RuntimeError> {
        let (left, right) = Self::run_operands(left, right, env)?;

        match (&left, &right) {
            (Value::Number(l), Value::Number(r)) => match l.partial_cmp(r) {
                Some(ordering) => Ok(Value::Bool(test(ordering))),
                None => Ok(Value::Bool(false)),
            },
            (Value::Str(l), Value::Str(r)) => Ok(Value::Bool(test(l.cmp(r)))),
            _ => Err(Self::operand_mismatch(op, &left, &right)),
        }
    }

    fn run_operands(
        left: &Expression,
        right: &Expression,
        env: &Environment,
    ) -> Result<(Value, Value), RuntimeError> {
        Ok((
            Self::run_expression(left, env)?,
            Self::run_expression(right, env)?,
        ))
    }

    fn operand_mismatch(op: &str, left: &Value, right: &Value) -> RuntimeError {
        RuntimeError::TypeMismatch(format!(
            "unsupported operand types for '{op}': {} and {}",
            left.type_name(),
            right.type_name()
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::{lexer::Lexer, parser};

    use super::*;

    struct Run {
        page: String,
        sink: String,
        result: Result<(), RuntimeError>,
    }

    fn run(source: &str) -> Run {
        let tokens = Lexer::new(source).lex();
        let statements = parser::parse(&mut tokens.into()).expect("program should parse");

        let mut page = PageBuffer::new();
        let mut sink = Vec::new();
        let result = Interpreter::from_ast(statements).run(&mut page, &mut sink);

        Run {
            page: page.contents().to_string(),
            sink: String::from_utf8(sink).expect("sink should be UTF-8"),
            result,
        }
    }

    #[test]
    fn test_let_and_print() {
        let run = run("let x = 2; print(x);");

        assert!(run.result.is_ok());
        assert_eq!("2.0\n", run.page);
        assert_eq!("", run.sink);
    }

    #[test]
    fn test_rebinding_overwrites() {
        let run = run("let x = 1; let x = x + 1; print(x);");

        assert_eq!("2.0\n", run.page);
    }

    #[test]
    fn test_while_counts() {
        let run = run("let i = 0; while (i < 3) { print(i); let i = i + 1; }");

        assert_eq!("0.0\n1.0\n2.0\n", run.page);
    }

    #[test]
    fn test_break_terminates_the_loop() {
        let run = run("let i = 0; while (true) { print(i); break; print(99); } print(\"done\");");

        assert_eq!("0.0\ndone\n", run.page);
    }

    #[test]
    fn test_continue_skips_the_rest_of_the_pass() {
        let run = run(
            "let i = 0; while (i < 3) { let i = i + 1; continue; print(i); } print(\"done\");",
        );

        assert_eq!("done\n", run.page);
    }

    #[test]
    fn test_break_through_an_if() {
        let run = run("let i = 0; while (i < 5) { if (i == 2) { break; } print(i); let i = i + 1; }");

        assert_eq!("0.0\n1.0\n", run.page);
    }

    #[test]
    fn test_break_affects_only_the_innermost_loop() {
        let run = run(concat!(
            "let i = 0; ",
            "while (i < 2) { ",
            "  let j = 0; ",
            "  while (true) { ",
            "    if (j == 2) { break; } ",
            "    let j = j + 1; ",
            "  } ",
            "  print(j); ",
            "  let i = i + 1; ",
            "}",
        ));

        assert_eq!("2.0\n2.0\n", run.page);
    }

    #[test]
    fn test_if_false_skips_the_body() {
        let run = run("if (false) { print(1); } print(2);");

        assert_eq!("2.0\n", run.page);
    }

    #[test]
    fn test_page_flushes_mid_run() {
        let run = run("print(1); page; print(2);");

        assert_eq!("1\n.\n0\n", run.sink);
        assert_eq!("2.0\n", run.page);
    }

    #[test]
    fn test_array_literal_and_index() {
        let run = run("let a = [5]; print(a[0]);");

        assert_eq!("5.0\n", run.page);
    }

    #[test]
    fn test_space_separated_array_elements() {
        let run = run("let a = [1 2 3]; print(a[2]);");

        assert_eq!("3.0\n", run.page);
    }

    #[test]
    fn test_index_truncates() {
        let run = run("let a = [1 2 3]; print(a[2.9]);");

        assert_eq!("3.0\n", run.page);
    }

    #[test]
    fn test_index_out_of_range() {
        let run = run("let a = [7]; print(a[1]);");

        assert!(matches!(run.result, Err(RuntimeError::IndexOutOfRange)));
        assert_eq!("", run.page);
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let run = run("let a = [7]; print(a[0 - 1]);");

        assert!(matches!(run.result, Err(RuntimeError::IndexOutOfRange)));
    }

    #[test]
    fn test_indexing_a_non_array() {
        let run = run("let a = 5; print(a[0]);");

        assert_eq!(
            "Attempted to access an index on a non-array",
            run.result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_undefined_variable() {
        let run = run("print(ghost);");

        assert_eq!(
            "Variable 'ghost' not defined",
            run.result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_string_concatenation() {
        let run = run("let s = \"foo\" + \"bar\"; print(s);");

        assert_eq!("foobar\n", run.page);
    }

    #[test]
    fn test_array_concatenation() {
        let run = run("let a = [1] + [2]; print(a[1]);");

        assert_eq!("2.0\n", run.page);
    }

    #[test]
    fn test_mixed_addition_fails() {
        let run = run("let s = \"foo\" + 1;");

        assert_eq!(
            "unsupported operand types for '+': string and number",
            run.result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_comparisons() {
        let run = run(concat!(
            "print(1 < 2); print(2 <= 2); print(3 > 2); print(2 >= 3); ",
            "print(1 == 1); print(1 != 1); print(\"a\" < \"b\");",
        ));

        assert_eq!("true\ntrue\ntrue\nfalse\ntrue\nfalse\ntrue\n", run.page);
    }

    #[test]
    fn test_cross_type_equality() {
        let run = run("print(1 == \"1\"); print(1 != \"1\");");

        assert_eq!("false\ntrue\n", run.page);
    }

    #[test]
    fn test_ordering_mixed_types_fails() {
        let run = run("let x = 1 < \"2\";");

        assert_eq!(
            "unsupported operand types for '<': number and string",
            run.result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_error_aborts_the_run() {
        let run = run("print(1); print(ghost); print(2);");

        assert!(run.result.is_err());
        assert_eq!("1.0\n", run.page);
    }

    #[test]
    fn test_truthiness_of_numbers_and_strings() {
        let run = run(concat!(
            "if (1) { print(\"number\"); } ",
            "if (0) { print(\"zero\"); } ",
            "if (\"x\") { print(\"string\"); } ",
            "if (\"\") { print(\"empty\"); }",
        ));

        assert_eq!("number\nstring\n", run.page);
    }

    #[test]
    fn test_non_number_index() {
        let run = run("let a = [1]; print(a[\"x\"]);");

        assert_eq!(
            "Array index must be a number, not a string",
            run.result.unwrap_err().to_string()
        );
    }

    // `*` and `/` never come out of the parser, but their AST shapes are
    // still evaluated when built by hand.

    #[test]
    fn test_multiplication_evaluates() {
        let expression = Expression::Binary(Box::new(BinaryExpression::Multiplication(
            Expression::Num(6.0),
            Expression::Num(7.0),
        )));

        assert_eq!(
            Value::Number(42.0),
            Interpreter::run_expression(&expression, &Environment::new()).unwrap()
        );
    }

    #[test]
    fn test_division_by_zero_fails() {
        let expression = Expression::Binary(Box::new(BinaryExpression::Division(
            Expression::Num(1.0),
            Expression::Num(0.0),
        )));

        let result = Interpreter::run_expression(&expression, &Environment::new());
        assert!(matches!(result, Err(RuntimeError::DivisionByZero)));
    }

    #[test]
    fn test_expression_statement_has_no_effect_on_signals() {
        // a loop body evaluating the string "break" keeps looping
        let run = run(concat!(
            "let i = 0; ",
            "while (i < 2) { \"break\" \"continue\" print(i); let i = i + 1; }",
        ));

        assert_eq!("0.0\n1.0\n", run.page);
    }
}
