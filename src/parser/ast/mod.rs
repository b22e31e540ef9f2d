mod expression;
mod statement;

pub use self::expression::*;
pub use self::statement::*;
