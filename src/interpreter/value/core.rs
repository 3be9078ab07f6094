use crate::{ast::LiteralValue, util::num::i64_to_f64};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value that can be bound to a variable, passed to
/// or returned from a function, printed, or tested as a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A string value.
    Str(String),
    /// A boolean value, produced by the comparison operators.
    Bool(bool),
    /// The absence of a value.
    ///
    /// Returned by a function whose body finishes without `mayar`.
    None,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}

impl Value {
    /// Applies the truthiness rule.
    ///
    /// `False`, `None`, numeric zero and the empty string are falsy; every
    /// other value is truthy.
    ///
    /// # Example
    /// ```
    /// use hausalang::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(Value::Str("0".to_string()).is_truthy());
    /// assert!(Value::Real(-0.5).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::None => false,
        }
    }

    /// Returns the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::None => "none",
        }
    }

    /// Returns the value as an `f64` if it is numeric.
    ///
    /// Integers are widened; precision may be lost above `2^53`.
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(i64_to_f64(*n)),
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Formats a real in its shortest round-tripping form.
///
/// Integral values keep a `.0`. Magnitudes below `1e-4` or from `1e16` up use
/// an exponent with an explicit sign and at least two digits (`1e+16`,
/// `2.5e-05`). Non-finite values print as `inf`, `-inf` and `nan`.
fn format_real(r: f64) -> String {
    if r.is_nan() {
        return "nan".to_string();
    }

    // Debug keeps the fractional part (4.0 prints as "4.0") and switches to
    // exponent form at the same magnitudes, but writes "1e16" and "1e-5".
    let text = format!("{r:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn printed_forms() {
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Real(3.5).to_string(), "3.5");
        assert_eq!(Value::Real(4.0).to_string(), "4.0");
        assert_eq!(Value::Real(0.1).to_string(), "0.1");
        assert_eq!(Value::from("sannu").to_string(), "sannu");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(Value::None.to_string(), "None");
    }

    #[test]
    fn large_and_small_reals_use_a_signed_exponent() {
        assert_eq!(Value::Real(1e16).to_string(), "1e+16");
        assert_eq!(Value::Real(-2.5e20).to_string(), "-2.5e+20");
        assert_eq!(Value::Real(1e-5).to_string(), "1e-05");
        assert_eq!(Value::Real(1.5e-100).to_string(), "1.5e-100");
        assert_eq!(Value::Real(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Value::Real(0.0001).to_string(), "0.0001");
    }

    #[test]
    fn non_finite_reals() {
        assert_eq!(Value::Real(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Real(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Value::Real(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn falsy_values() {
        for value in [Value::Bool(false),
                      Value::None,
                      Value::Integer(0),
                      Value::Real(0.0),
                      Value::Str(String::new())]
        {
            assert!(!value.is_truthy(), "{value:?} should be falsy");
        }
    }

    #[test]
    fn truthy_values() {
        for value in [Value::Bool(true),
                      Value::Integer(-1),
                      Value::Real(0.1),
                      Value::from(" ")]
        {
            assert!(value.is_truthy(), "{value:?} should be truthy");
        }
    }

    #[test]
    fn literals_convert_to_values() {
        assert_eq!(Value::from(&LiteralValue::Integer(7)), Value::Integer(7));
        assert_eq!(Value::from(&LiteralValue::Real(7.5)), Value::Real(7.5));
        assert_eq!(Value::from(&LiteralValue::Str("a".to_string())), Value::from("a"));
    }

    #[test]
    fn only_numbers_widen_to_real() {
        assert_eq!(Value::Integer(2).as_real(), Some(2.0));
        assert_eq!(Value::Real(2.5).as_real(), Some(2.5));
        assert_eq!(Value::from("2").as_real(), None);
        assert_eq!(Value::Bool(true).as_real(), None);
    }
}
