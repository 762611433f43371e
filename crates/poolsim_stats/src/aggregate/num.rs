//! Type-preserving accumulation of JSON numbers.

use serde_json::Number;
use std::ops::Add;

/// Running sum over pool counters. Integer inputs keep an integer sum;
/// the first float (or an integer overflow) switches the accumulator
/// to float for the rest of the reduction.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Sum {
    Int(i64),
    Float(f64),
}

impl Sum {
    pub(crate) const ZERO: Sum = Sum::Int(0);

    pub(crate) fn as_f64(&self) -> f64 {
        match *self {
            Sum::Int(v) => v as f64,
            Sum::Float(v) => v,
        }
    }

    pub(crate) fn to_number(self) -> Number {
        match self {
            Sum::Int(v) => Number::from(v),
            Sum::Float(v) => Number::from_f64(v).unwrap_or_else(|| Number::from(0)),
        }
    }
}

impl Add<&Number> for Sum {
    type Output = Sum;

    fn add(self, n: &Number) -> Sum {
        match (self, n.as_i64()) {
            (Sum::Int(acc), Some(v)) => match acc.checked_add(v) {
                Some(sum) => Sum::Int(sum),
                None => Sum::Float(acc as f64 + v as f64),
            },
            _ => Sum::Float(self.as_f64() + n.as_f64().unwrap_or(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn integer_sum_stays_integer() {
        let sum = Sum::ZERO + &num("3") + &num("5");
        assert_eq!(sum.to_number(), Number::from(8));
    }

    #[test]
    fn float_operand_makes_sum_float() {
        let sum = Sum::ZERO + &num("3") + &num("0.5");
        assert_eq!(sum.to_number().as_f64(), Some(3.5));
        assert!(!sum.to_number().is_i64());
    }

    #[test]
    fn overflow_promotes_to_float() {
        let sum = Sum::Int(i64::MAX) + &num("1");
        assert!(matches!(sum, Sum::Float(_)));
        assert_eq!(sum.as_f64(), i64::MAX as f64 + 1.0);
    }

    #[test]
    fn order_does_not_matter() {
        let a = Sum::ZERO + &num("1.5") + &num("2");
        let b = Sum::ZERO + &num("2") + &num("1.5");
        assert_eq!(a.as_f64(), b.as_f64());
    }
}
