use core_types::{CalcError, EPSILON};

/// Rejects NaN and infinite operands. `name` identifies the operand in the message.
pub(crate) fn validate_operand(value: f64, name: &str) -> Result<(), CalcError> {
    if value.is_nan() {
        return Err(CalcError::InvalidOperand(format!(
            "{name} is NaN (Not a Number)"
        )));
    }
    if value.is_infinite() {
        return Err(CalcError::InvalidOperand(format!("{name} is infinite")));
    }
    Ok(())
}

/// Maps an infinite result of a finite-input computation to `Overflow`.
pub(crate) fn check_overflow(result: f64) -> Result<f64, CalcError> {
    if result.is_infinite() {
        return Err(CalcError::Overflow(
            "Result exceeds maximum representable value".to_string(),
        ));
    }
    Ok(result)
}

/// Rejects divisors whose magnitude is indistinguishable from zero.
pub(crate) fn check_divisor(divisor: f64, message: &str) -> Result<(), CalcError> {
    if divisor.abs() < EPSILON {
        return Err(CalcError::DivideByZero(message.to_string()));
    }
    Ok(())
}

/// True when `value` is within `EPSILON` of a whole number.
pub(crate) fn is_integral(value: f64) -> bool {
    (value - value.round()).abs() < EPSILON
}
