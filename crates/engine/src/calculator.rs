use crate::util::{check_divisor, check_overflow, is_integral, validate_operand};
use core_types::{CalcError, EPSILON, Operation};

/// Largest `n` whose factorial fits in an `i64`.
const MAX_FACTORIAL: i64 = 20;

/// A stateless calculator for validated arithmetic and scientific functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches `op` over `operands`.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `operands` - Exactly `op.arity()` values.
    ///
    /// # Returns
    ///
    /// The finite result, or `InvalidInput` when the operand count does not match the
    /// operation, or whichever error the operation itself raises.
    pub fn evaluate(&self, op: Operation, operands: &[f64]) -> Result<f64, CalcError> {
        if operands.len() != op.arity() {
            return Err(CalcError::InvalidInput(format!(
                "{op} expects {} operand(s), got {}",
                op.arity(),
                operands.len()
            )));
        }

        let a = operands[0];
        let b = operands.get(1).copied().unwrap_or_default();
        let result = match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
            Operation::Power => self.power(a, b),
            Operation::SquareRoot => self.square_root(a),
            Operation::Modulo => self.modulo(a, b),
            Operation::Absolute => self.absolute(a),
            Operation::Sine => self.sine(a),
            Operation::Cosine => self.cosine(a),
            Operation::Tangent => self.tangent(a),
            Operation::Logarithm => self.logarithm(a),
            Operation::NaturalLog => self.natural_log(a),
            Operation::Factorial => self.factorial_of(a),
        }?;

        tracing::debug!(operation = %op, ?operands, result, "Evaluated operation");
        Ok(result)
    }

    // --- Basic operations ---

    pub fn add(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        validate_operand(a, "First operand")?;
        validate_operand(b, "Second operand")?;
        Ok(a + b)
    }

    pub fn subtract(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        validate_operand(a, "First operand")?;
        validate_operand(b, "Second operand")?;
        Ok(a - b)
    }

    pub fn multiply(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        validate_operand(a, "First operand")?;
        validate_operand(b, "Second operand")?;
        check_overflow(a * b)
    }

    /// Divides `a` by `b`. Any `|b| < EPSILON` counts as zero, not only an exact `0.0`.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        validate_operand(a, "Dividend")?;
        validate_operand(b, "Divisor")?;
        check_divisor(b, "Cannot divide by zero")?;
        check_overflow(a / b)
    }

    // --- Advanced operations ---

    /// Raises `base` to `exponent`. A negative base requires an integral exponent.
    pub fn power(&self, base: f64, exponent: f64) -> Result<f64, CalcError> {
        validate_operand(base, "Base")?;
        validate_operand(exponent, "Exponent")?;

        if base < 0.0 && !is_integral(exponent) {
            return Err(CalcError::InvalidOperation(
                "Cannot raise negative number to non-integer power".to_string(),
            ));
        }

        let result = check_overflow(base.powf(exponent))?;
        validate_operand(result, "Result")?;
        Ok(result)
    }

    pub fn square_root(&self, number: f64) -> Result<f64, CalcError> {
        validate_operand(number, "Number")?;
        if number < 0.0 {
            return Err(CalcError::InvalidOperation(
                "Cannot calculate square root of negative number".to_string(),
            ));
        }
        Ok(number.sqrt())
    }

    /// Floating-point remainder: the sign of the result follows the dividend, so
    /// `modulo(-7, 3) == -1`.
    pub fn modulo(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        validate_operand(a, "Dividend")?;
        validate_operand(b, "Divisor")?;
        check_divisor(b, "Cannot perform modulo with zero divisor")?;
        Ok(a % b)
    }

    pub fn absolute(&self, number: f64) -> Result<f64, CalcError> {
        validate_operand(number, "Number")?;
        Ok(number.abs())
    }

    // --- Scientific operations (angles in degrees) ---

    pub fn sine(&self, degrees: f64) -> Result<f64, CalcError> {
        validate_operand(degrees, "Angle")?;
        Ok(degrees.to_radians().sin())
    }

    pub fn cosine(&self, degrees: f64) -> Result<f64, CalcError> {
        validate_operand(degrees, "Angle")?;
        Ok(degrees.to_radians().cos())
    }

    /// Rejects every angle congruent to ±90° modulo 180°.
    pub fn tangent(&self, degrees: f64) -> Result<f64, CalcError> {
        validate_operand(degrees, "Angle")?;

        let residue = degrees % 180.0;
        if (residue - 90.0).abs() < EPSILON || (residue + 90.0).abs() < EPSILON {
            return Err(CalcError::InvalidOperation(format!(
                "Tangent is undefined at {degrees}°"
            )));
        }

        Ok(degrees.to_radians().tan())
    }

    /// Base-10 logarithm.
    pub fn logarithm(&self, number: f64) -> Result<f64, CalcError> {
        validate_operand(number, "Number")?;
        if number <= 0.0 {
            return Err(CalcError::InvalidOperation(
                "Logarithm is only defined for positive numbers".to_string(),
            ));
        }
        Ok(number.log10())
    }

    pub fn natural_log(&self, number: f64) -> Result<f64, CalcError> {
        validate_operand(number, "Number")?;
        if number <= 0.0 {
            return Err(CalcError::InvalidOperation(
                "Natural logarithm is only defined for positive numbers".to_string(),
            ));
        }
        Ok(number.ln())
    }

    /// Exact `n!` for `0 <= n <= 20`.
    pub fn factorial(&self, n: i64) -> Result<i64, CalcError> {
        if n < 0 {
            return Err(CalcError::InvalidOperation(
                "Factorial is only defined for non-negative integers".to_string(),
            ));
        }
        if n > MAX_FACTORIAL {
            return Err(CalcError::InvalidOperation(format!(
                "Factorial of {n} exceeds 64-bit capacity (max n={MAX_FACTORIAL})"
            )));
        }
        Ok((2..=n).product())
    }

    /// Factorial of a real operand, which must be integral.
    fn factorial_of(&self, value: f64) -> Result<f64, CalcError> {
        validate_operand(value, "Number")?;
        if !is_integral(value) {
            return Err(CalcError::InvalidOperation(
                "Factorial is only defined for non-negative integers".to_string(),
            ));
        }
        // Saturating cast; anything out of i64 range is rejected by the bound check.
        let n = value.round() as i64;
        Ok(self.factorial(n)? as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    // --- basic ---

    #[test]
    fn basic_arithmetic() {
        let e = engine();
        assert_eq!(e.add(2.0, 3.0), Ok(5.0));
        assert_eq!(e.subtract(2.0, 3.0), Ok(-1.0));
        assert_eq!(e.multiply(-4.0, 2.5), Ok(-10.0));
        assert_eq!(e.divide(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn non_finite_operands_are_rejected_everywhere() {
        let e = engine();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(e.add(bad, 1.0), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.subtract(1.0, bad), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.multiply(bad, 1.0), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.divide(1.0, bad), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.power(bad, 2.0), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.square_root(bad), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.modulo(bad, 2.0), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.absolute(bad), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.sine(bad), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.cosine(bad), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.tangent(bad), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.logarithm(bad), Err(CalcError::InvalidOperand(_))));
            assert!(matches!(e.natural_log(bad), Err(CalcError::InvalidOperand(_))));
        }
    }

    #[test]
    fn validation_precedes_domain_checks() {
        // A NaN divisor is an operand problem, not a division by zero.
        assert!(matches!(
            engine().divide(f64::NAN, 0.0),
            Err(CalcError::InvalidOperand(_))
        ));
        assert!(matches!(
            engine().square_root(f64::NEG_INFINITY),
            Err(CalcError::InvalidOperand(_))
        ));
    }

    #[test]
    fn multiply_overflow() {
        assert!(matches!(
            engine().multiply(f64::MAX, 2.0),
            Err(CalcError::Overflow(_))
        ));
    }

    #[test]
    fn divide_by_near_zero() {
        let e = engine();
        assert!(matches!(e.divide(1.0, 0.0), Err(CalcError::DivideByZero(_))));
        assert!(matches!(e.divide(1.0, -0.0), Err(CalcError::DivideByZero(_))));
        assert!(matches!(e.divide(1.0, 1e-11), Err(CalcError::DivideByZero(_))));
        assert!(matches!(e.divide(1.0, -5e-11), Err(CalcError::DivideByZero(_))));
        assert_close(e.divide(1.0, 1e-10).unwrap(), 1e10);
    }

    #[test]
    fn divide_overflow() {
        assert!(matches!(
            engine().divide(f64::MAX, 0.5),
            Err(CalcError::Overflow(_))
        ));
    }

    // --- advanced ---

    #[test]
    fn power_of_negative_base() {
        let e = engine();
        assert!(matches!(
            e.power(-2.0, 0.5),
            Err(CalcError::InvalidOperation(_))
        ));
        assert_eq!(e.power(-2.0, 2.0), Ok(4.0));
        assert_eq!(e.power(-2.0, 3.0), Ok(-8.0));
    }

    #[test]
    fn power_overflow_and_zero_base() {
        let e = engine();
        assert!(matches!(e.power(10.0, 400.0), Err(CalcError::Overflow(_))));
        assert!(matches!(e.power(0.0, -1.0), Err(CalcError::Overflow(_))));
        assert_eq!(e.power(2.0, 10.0), Ok(1024.0));
        assert_eq!(e.power(5.0, 0.0), Ok(1.0));
    }

    #[test]
    fn square_root_domain() {
        let e = engine();
        assert_eq!(e.square_root(16.0), Ok(4.0));
        assert_eq!(e.square_root(0.0), Ok(0.0));
        assert!(matches!(
            e.square_root(-1.0),
            Err(CalcError::InvalidOperation(_))
        ));
    }

    #[test]
    fn modulo_sign_follows_dividend() {
        let e = engine();
        assert_eq!(e.modulo(10.0, 3.0), Ok(1.0));
        assert_eq!(e.modulo(-7.0, 3.0), Ok(-1.0));
        assert_eq!(e.modulo(7.0, -3.0), Ok(1.0));
        assert_close(e.modulo(5.5, 2.0).unwrap(), 1.5);
        assert!(matches!(e.modulo(5.0, 0.0), Err(CalcError::DivideByZero(_))));
        assert!(matches!(e.modulo(5.0, 1e-12), Err(CalcError::DivideByZero(_))));
    }

    #[test]
    fn absolute_value() {
        assert_eq!(engine().absolute(-3.25), Ok(3.25));
        assert_eq!(engine().absolute(3.25), Ok(3.25));
    }

    // --- scientific ---

    #[test]
    fn trigonometry_in_degrees() {
        let e = engine();
        assert_close(e.sine(30.0).unwrap(), 0.5);
        assert_close(e.sine(90.0).unwrap(), 1.0);
        assert_close(e.cosine(60.0).unwrap(), 0.5);
        assert_close(e.cosine(180.0).unwrap(), -1.0);
        assert_close(e.tangent(45.0).unwrap(), 1.0);
        assert_close(e.tangent(-45.0).unwrap(), -1.0);
        assert_close(e.tangent(180.0).unwrap(), 0.0);
    }

    #[test]
    fn tangent_asymptotes_use_the_periodic_residue() {
        let e = engine();
        for deg in [90.0, 270.0, 450.0, -90.0, -270.0, 90.0 + 1e-11] {
            assert!(
                matches!(e.tangent(deg), Err(CalcError::InvalidOperation(_))),
                "tangent({deg}) should be undefined"
            );
        }
    }

    #[test]
    fn logarithm_domains() {
        let e = engine();
        assert_close(e.logarithm(1000.0).unwrap(), 3.0);
        assert_close(e.natural_log(std::f64::consts::E).unwrap(), 1.0);
        for bad in [0.0, -1.0] {
            assert!(matches!(
                e.logarithm(bad),
                Err(CalcError::InvalidOperation(_))
            ));
            assert!(matches!(
                e.natural_log(bad),
                Err(CalcError::InvalidOperation(_))
            ));
        }
    }

    #[test]
    fn factorial_bounds() {
        let e = engine();
        assert_eq!(e.factorial(0), Ok(1));
        assert_eq!(e.factorial(1), Ok(1));
        assert_eq!(e.factorial(5), Ok(120));
        assert_eq!(e.factorial(20), Ok(2_432_902_008_176_640_000));
        assert!(matches!(e.factorial(21), Err(CalcError::InvalidOperation(_))));
        assert!(matches!(e.factorial(-1), Err(CalcError::InvalidOperation(_))));
    }

    // --- dispatch ---

    #[test]
    fn evaluate_dispatches_by_operation() {
        let e = engine();
        assert_eq!(e.evaluate(Operation::Add, &[2.0, 3.0]), Ok(5.0));
        assert_eq!(e.evaluate(Operation::SquareRoot, &[81.0]), Ok(9.0));
        assert_eq!(e.evaluate(Operation::Factorial, &[5.0]), Ok(120.0));
        assert!(matches!(
            e.evaluate(Operation::Divide, &[1.0, 0.0]),
            Err(CalcError::DivideByZero(_))
        ));
    }

    #[test]
    fn evaluate_checks_arity() {
        let e = engine();
        assert!(matches!(
            e.evaluate(Operation::Add, &[1.0]),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            e.evaluate(Operation::Sine, &[1.0, 2.0]),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            e.evaluate(Operation::Absolute, &[]),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn evaluate_factorial_requires_an_integer() {
        let e = engine();
        assert!(matches!(
            e.evaluate(Operation::Factorial, &[2.5]),
            Err(CalcError::InvalidOperation(_))
        ));
        assert!(matches!(
            e.evaluate(Operation::Factorial, &[1e300]),
            Err(CalcError::InvalidOperation(_))
        ));
        assert!(matches!(
            e.evaluate(Operation::Factorial, &[f64::NAN]),
            Err(CalcError::InvalidOperand(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn add_then_subtract_round_trips(a in -1e12_f64..1e12, b in -1e12_f64..1e12) {
            let e = Engine::new();
            let sum = e.add(a, b).unwrap();
            let back = e.subtract(sum, b).unwrap();
            let tolerance = 1e-9 * a.abs().max(b.abs()).max(1.0);
            prop_assert!((back - a).abs() <= tolerance, "{} != {}", back, a);
        }

        #[test]
        fn near_zero_divisors_are_rejected(a in -1e6_f64..1e6, b in -9.99e-11_f64..9.99e-11) {
            let result = Engine::new().divide(a, b);
            prop_assert!(matches!(result, Err(CalcError::DivideByZero(_))));
        }

        #[test]
        fn results_are_always_finite(
            op in proptest::sample::select(Operation::ALL.to_vec()),
            a in -1e6_f64..1e6,
            b in -50_f64..50.0,
        ) {
            let operands = if op.arity() == 2 { vec![a, b] } else { vec![a] };
            if let Ok(value) = Engine::new().evaluate(op, &operands) {
                prop_assert!(value.is_finite(), "{} produced {}", op, value);
            }
        }

        #[test]
        fn sine_and_cosine_stay_in_unit_range(deg in -1e6_f64..1e6) {
            let e = Engine::new();
            let s = e.sine(deg).unwrap();
            let c = e.cosine(deg).unwrap();
            prop_assert!((-1.0..=1.0).contains(&s));
            prop_assert!((-1.0..=1.0).contains(&c));
        }
    }
}
