//! Operator and function application on `f64`, via `libm` so the crate
//! builds without `std`.

use alloc::vec::Vec;

use crate::{
    evaluator::AngleUnit,
    token::{Function, Operation},
    Error,
};

fn pop_operand(values: &mut Vec<f64>) -> Result<f64, Error> {
    values.pop().ok_or(Error::MalformedExpression)
}

/// Pops the operands `op` needs off `values` and applies it. Binary
/// operators pop the right-hand side first; postfix `!` pops one value.
/// Running out of operands is a malformed expression.
pub fn apply_operation(op: Operation, values: &mut Vec<f64>) -> Result<f64, Error> {
    let rhs = pop_operand(values)?;

    Ok(match op {
        Operation::Factorial => factorial(rhs)?,
        Operation::Add => pop_operand(values)? + rhs,
        Operation::Subtract => pop_operand(values)? - rhs,
        Operation::Multiply => pop_operand(values)? * rhs,
        Operation::Divide => {
            let lhs = pop_operand(values)?;
            if rhs == 0.0 {
                return Err(Error::DivideByZero);
            }
            lhs / rhs
        }
        Operation::Modulus => libm::fmod(pop_operand(values)?, rhs),
        Operation::Power => libm::pow(pop_operand(values)?, rhs),
    })
}

/// Applies a function to its single argument.
///
/// `log` and `ln` are left to return NaN (or -inf) outside their domain,
/// only `sqrt` rejects a negative argument.
pub fn apply_function(func: Function, arg: f64, angle: AngleUnit) -> Result<f64, Error> {
    Ok(match func {
        Function::Sin => libm::sin(angle.to_radians(arg)),
        Function::Cos => libm::cos(angle.to_radians(arg)),
        Function::Tan => libm::tan(angle.to_radians(arg)),
        Function::Asin => angle.from_radians(libm::asin(arg)),
        Function::Acos => angle.from_radians(libm::acos(arg)),
        Function::Atan => angle.from_radians(libm::atan(arg)),
        Function::Log => libm::log10(arg),
        Function::Ln => libm::log(arg),
        Function::Sqrt => {
            if arg < 0.0 {
                return Err(Error::InvalidSqrt);
            }
            libm::sqrt(arg)
        }
    })
}

/// `n!` for non-negative integral `n`. Large arguments saturate to infinity.
pub fn factorial(n: f64) -> Result<f64, Error> {
    if n < 0.0 || n != libm::floor(n) {
        return Err(Error::InvalidFactorial);
    }

    let mut result: f64 = 1.0;
    let mut i: f64 = 2.0;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            libm::fabs(actual - expected) < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn binary(op: Operation, lhs: f64, rhs: f64) -> Result<f64, Error> {
        apply_operation(op, &mut vec![lhs, rhs])
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(binary(Operation::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(binary(Operation::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(binary(Operation::Multiply, 2.0, 3.0), Ok(6.0));
        assert_eq!(binary(Operation::Divide, 3.0, 2.0), Ok(1.5));
        assert_eq!(binary(Operation::Power, 2.0, 10.0), Ok(1024.0));
    }

    #[test]
    fn test_operands_are_consumed() {
        let mut values = vec![1.0, 8.0, 2.0];
        assert_eq!(apply_operation(Operation::Divide, &mut values), Ok(4.0));
        assert_eq!(values, vec![1.0]);

        let mut values = vec![7.0, 4.0];
        assert_eq!(apply_operation(Operation::Factorial, &mut values), Ok(24.0));
        assert_eq!(values, vec![7.0]);
    }

    #[test]
    fn test_missing_operands() {
        assert_eq!(
            apply_operation(Operation::Add, &mut vec![2.0]),
            Err(Error::MalformedExpression)
        );
        assert_eq!(
            apply_operation(Operation::Factorial, &mut vec![]),
            Err(Error::MalformedExpression)
        );
        // the left operand is missing before the divisor is checked
        assert_eq!(
            apply_operation(Operation::Divide, &mut vec![0.0]),
            Err(Error::MalformedExpression)
        );
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(binary(Operation::Divide, 5.0, 0.0), Err(Error::DivideByZero));
        assert_eq!(binary(Operation::Divide, 5.0, -0.0), Err(Error::DivideByZero));
    }

    #[test]
    fn test_modulus_keeps_dividend_sign() {
        assert_eq!(binary(Operation::Modulus, 7.0, 3.0), Ok(1.0));
        assert_eq!(binary(Operation::Modulus, -7.0, 3.0), Ok(-1.0));
        assert_eq!(binary(Operation::Modulus, 5.5, 2.0), Ok(1.5));
        assert!(binary(Operation::Modulus, 1.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_trig_in_degrees() {
        let deg = AngleUnit::Degrees;
        assert_close(apply_function(Function::Sin, 90.0, deg).unwrap(), 1.0);
        assert_close(apply_function(Function::Cos, 180.0, deg).unwrap(), -1.0);
        assert_close(apply_function(Function::Tan, 45.0, deg).unwrap(), 1.0);
        assert_close(apply_function(Function::Asin, 1.0, deg).unwrap(), 90.0);
        assert_close(apply_function(Function::Acos, 0.0, deg).unwrap(), 90.0);
        assert_close(apply_function(Function::Atan, 1.0, deg).unwrap(), 45.0);
    }

    #[test]
    fn test_trig_in_radians() {
        let rad = AngleUnit::Radians;
        let half_pi = core::f64::consts::FRAC_PI_2;
        assert_close(apply_function(Function::Sin, half_pi, rad).unwrap(), 1.0);
        assert_close(apply_function(Function::Asin, 1.0, rad).unwrap(), half_pi);
    }

    #[test]
    fn test_logarithms() {
        let deg = AngleUnit::Degrees;
        assert_close(apply_function(Function::Log, 1000.0, deg).unwrap(), 3.0);
        assert_close(
            apply_function(Function::Ln, core::f64::consts::E, deg).unwrap(),
            1.0,
        );
        assert!(apply_function(Function::Log, -1.0, deg).unwrap().is_nan());
        assert!(apply_function(Function::Ln, -1.0, deg).unwrap().is_nan());
        assert_eq!(apply_function(Function::Ln, 0.0, deg), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn test_sqrt() {
        let deg = AngleUnit::Degrees;
        assert_eq!(apply_function(Function::Sqrt, 16.0, deg), Ok(4.0));
        assert_eq!(apply_function(Function::Sqrt, 0.0, deg), Ok(0.0));
        assert_eq!(
            apply_function(Function::Sqrt, -1.0, deg),
            Err(Error::InvalidSqrt)
        );
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
        assert_eq!(factorial(10.0), Ok(3628800.0));
    }

    #[test]
    fn test_invalid_factorial() {
        assert_eq!(factorial(-1.0), Err(Error::InvalidFactorial));
        assert_eq!(factorial(2.5), Err(Error::InvalidFactorial));
        assert_eq!(factorial(f64::NAN), Err(Error::InvalidFactorial));
    }

    #[test]
    fn test_factorial_overflows_to_infinity() {
        assert_eq!(factorial(171.0), Ok(f64::INFINITY));
        assert_eq!(factorial(1e12), Ok(f64::INFINITY));
    }
}
