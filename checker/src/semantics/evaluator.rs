// checker/src/semantics/evaluator.rs
use crate::ast::{BinaryOp, Expr};
use crate::semantics::errors::EvalError;
use crate::semantics::symbols::SymbolTable;
use crate::semantics::value::{Type, Value};

pub type EvalResult<T> = Result<T, EvalError>;

/// Folds an expression against the current symbol table.
///
/// Every operand pairing goes through one exhaustive `match` in
/// [`Evaluator::apply`], so a new `Value` variant cannot compile until each
/// rule has been decided for it.
pub struct Evaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Identifier(name) => Ok(self.symbols.lookup(name)?.into_value()),
            Expr::BinaryOp(left, op, right) => {
                // Left operand first; its error wins.
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::apply(*op, &left, &right)
            }
        }
    }

    /// The operator rule matrix.
    pub fn apply(op: BinaryOp, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{Boolean, Integer, Real, String, Undefined};

        match (left, right) {
            (Integer(a), Integer(b)) => integer_op(op, *a, *b),
            (Real(a), Real(b)) => real_op(op, *a, *b),
            (Integer(a), Real(b)) => real_op(op, *a as f64, *b),
            (Real(a), Integer(b)) => real_op(op, *a, *b as f64),
            (String(a), String(b)) => string_op(op, a, b),
            (String(_), Integer(_) | Real(_) | Boolean(_))
            | (Integer(_) | Real(_) | Boolean(_), String(_))
            | (Boolean(_), Integer(_) | Real(_) | Boolean(_))
            | (Integer(_) | Real(_), Boolean(_)) => Err(mismatch(op, left, right)),
            // A failed lookup has already raised before an operator is reached.
            (Undefined, _) | (_, Undefined) => Err(mismatch(op, left, right)),
        }
    }
}

fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::TypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
}

fn integer_op(op: BinaryOp, a: i64, b: i64) -> EvalResult<Value> {
    let overflow = || EvalError::IntegerOverflow { op };
    let result = match op {
        BinaryOp::Add => a.checked_add(b).ok_or_else(overflow)?,
        BinaryOp::Sub => a.checked_sub(b).ok_or_else(overflow)?,
        BinaryOp::Mul => a.checked_mul(b).ok_or_else(overflow)?,
        // Rust's `/` and `%` truncate toward zero; the remainder takes the
        // dividend's sign.
        BinaryOp::Div | BinaryOp::Mod if b == 0 => return Err(EvalError::DivisionByZero { op }),
        BinaryOp::Div => a.checked_div(b).ok_or_else(overflow)?,
        BinaryOp::Mod => a.checked_rem(b).ok_or_else(overflow)?,
        BinaryOp::Pow => return integer_pow(a, b),
        BinaryOp::Eq => return Ok(Value::Boolean(a == b)),
        BinaryOp::Neq => return Ok(Value::Boolean(a != b)),
        BinaryOp::Lt => return Ok(Value::Boolean(a < b)),
        BinaryOp::Le => return Ok(Value::Boolean(a <= b)),
        BinaryOp::Gt => return Ok(Value::Boolean(a > b)),
        BinaryOp::Ge => return Ok(Value::Boolean(a >= b)),
    };
    Ok(Value::Integer(result))
}

/// Exact for non-negative exponents; a negative exponent gives a real.
fn integer_pow(base: i64, exponent: i64) -> EvalResult<Value> {
    if exponent < 0 {
        return Ok(Value::Real((base as f64).powf(exponent as f64)));
    }
    // Bases whose powers never grow, for exponents of any size.
    match base {
        0 => return Ok(Value::Integer(if exponent == 0 { 1 } else { 0 })),
        1 => return Ok(Value::Integer(1)),
        -1 => return Ok(Value::Integer(if exponent % 2 == 0 { 1 } else { -1 })),
        _ => {}
    }
    let overflow = EvalError::IntegerOverflow { op: BinaryOp::Pow };
    let exponent = u32::try_from(exponent).map_err(|_| overflow.clone())?;
    base.checked_pow(exponent)
        .map(Value::Integer)
        .ok_or(overflow)
}

fn real_op(op: BinaryOp, a: f64, b: f64) -> EvalResult<Value> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div if b == 0.0 => return Err(EvalError::DivisionByZero { op }),
        BinaryOp::Div => a / b,
        // f64 `%` is C's fmod; a zero divisor gives NaN.
        BinaryOp::Mod => a % b,
        BinaryOp::Pow => a.powf(b),
        BinaryOp::Eq => return Ok(Value::Boolean(a == b)),
        BinaryOp::Neq => return Ok(Value::Boolean(a != b)),
        BinaryOp::Lt => return Ok(Value::Boolean(a < b)),
        BinaryOp::Le => return Ok(Value::Boolean(a <= b)),
        BinaryOp::Gt => return Ok(Value::Boolean(a > b)),
        BinaryOp::Ge => return Ok(Value::Boolean(a >= b)),
    };
    Ok(Value::Real(result))
}

/// Strings only support equality; ordering and arithmetic are mismatches.
fn string_op(op: BinaryOp, a: &str, b: &str) -> EvalResult<Value> {
    if !op.is_equality() {
        return Err(EvalError::TypeMismatch {
            op,
            left: Type::String.name(),
            right: Type::String.name(),
        });
    }
    Ok(Value::Boolean((a == b) == (op == BinaryOp::Eq)))
}
