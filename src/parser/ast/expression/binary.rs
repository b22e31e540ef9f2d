use super::Expression;

/// Arithmetic on two operands. `Multiplication` and `Division` exist
/// because their tokens do, but no grammar rule produces them; only the
/// evaluator knows what they would mean.
#[derive(Debug, Clone, PartialEq)]
pub enum BinaryExpression {
    Addition(Expression, Expression),
    Subtraction(Expression, Expression),
    Multiplication(Expression, Expression),
    Division(Expression, Expression),
}
