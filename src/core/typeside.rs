// =============================================================================
// TYPESIDE : Les types primitifs et les valeurs dynamiques
// =============================================================================
//
// Les enregistrements (Orchestra, Conductor, ...) sont fortement typés.
// Mais quand une clé de tri est choisie PAR NOM d'attribut (depuis la CLI
// ou la configuration), il faut une représentation dynamique des valeurs :
// c'est le rôle de `Value`.
//
// ORDRE :
//   - Int/Int, Float/Float, String/String, Bool/Bool : ordre naturel
//   - Int/Float croisés : comparés exactement (partie entière puis partie
//     fractionnaire du flottant), sans passer par une conversion en f64
//   - Float : ordre numérique (-0.0 == 0.0) ; les NaN suivent
//     `f64::total_cmp` (NaN positif en haut, NaN négatif en bas)
//   - ces règles forment un ordre total sur la famille Int/Float, ce que
//     `slice::sort_by` exige
//   - Tout le reste (String contre Int, NULL contre quoi que ce soit) :
//     Error::TypeMismatch, jamais de coercition silencieuse
//
// =============================================================================

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Le type d'une valeur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BaseType {
    String,
    Integer,
    Float,
    Boolean,
    Null,
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseType::String => write!(f, "String"),
            BaseType::Integer => write!(f, "Int"),
            BaseType::Float => write!(f, "Float"),
            BaseType::Boolean => write!(f, "Bool"),
            BaseType::Null => write!(f, "Null"),
        }
    }
}

/// Une valeur concrète lue dans un enregistrement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "NULL"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl Value {
    /// Retourne le BaseType correspondant à cette valeur
    pub fn get_type(&self) -> BaseType {
        match self {
            Value::String(_) => BaseType::String,
            Value::Integer(_) => BaseType::Integer,
            Value::Float(_) => BaseType::Float,
            Value::Boolean(_) => BaseType::Boolean,
            Value::Null => BaseType::Null,
        }
    }

    /// Vrai si `try_cmp` réussit sur ces deux valeurs.
    ///
    /// Int et Float forment une même famille ; NULL n'est comparable à rien.
    pub fn comparable_with(&self, other: &Value) -> bool {
        matches!(
            (self, other),
            (Value::Integer(_) | Value::Float(_), Value::Integer(_) | Value::Float(_))
                | (Value::String(_), Value::String(_))
                | (Value::Boolean(_), Value::Boolean(_))
        )
    }

    /// Comparaison ordonnée de deux valeurs.
    ///
    /// Échoue avec `Error::TypeMismatch` si les types ne sont pas comparables.
    pub fn try_cmp(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => Ok(cmp_floats(*a, *b)),
            (Value::Integer(a), Value::Float(b)) => Ok(cmp_int_float(*a, *b)),
            (Value::Float(a), Value::Integer(b)) => Ok(cmp_int_float(*b, *a).reverse()),
            (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(a.cmp(b)),
            _ => Err(Error::TypeMismatch {
                left: self.get_type(),
                right: other.get_type(),
            }),
        }
    }
}

/// Ordre numérique ; `total_cmp` seulement si un NaN est en jeu.
fn cmp_floats(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ord) => ord,
        None => a.total_cmp(&b),
    }
}

/// Compare un entier et un flottant sans perte de précision.
///
/// Les NaN suivent `total_cmp` : NaN positif au-dessus de tout, NaN négatif
/// en dessous.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    // 2^63, exactement représentable en f64
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() { Ordering::Greater } else { Ordering::Less };
    }
    if f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }

    // Ici trunc(f) ∈ [-2^63, 2^63) : la conversion en i64 est exacte
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => {
            let frac = f - whole;
            if frac > 0.0 {
                Ordering::Less
            } else if frac < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        ord => ord,
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert_eq!(Value::from("hello").get_type(), BaseType::String);
        assert_eq!(Value::from(42).get_type(), BaseType::Integer);
        assert_eq!(Value::Null.get_type(), BaseType::Null);
    }

    #[test]
    fn test_cmp_same_type() {
        assert_eq!(Value::from(1).try_cmp(&Value::from(2)).unwrap(), Ordering::Less);
        assert_eq!(
            Value::from("Петров").try_cmp(&Value::from("Андреев")).unwrap(),
            Ordering::Greater
        );
        assert_eq!(Value::from(true).try_cmp(&Value::from(true)).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_cmp_int_float_cross() {
        assert_eq!(Value::from(2).try_cmp(&Value::from(2.5)).unwrap(), Ordering::Less);
        assert_eq!(Value::from(3.0).try_cmp(&Value::from(3)).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_signed_zeros_consistent_with_int_zero() {
        let neg = Value::from(-0.0);
        let pos = Value::from(0.0);
        assert_eq!(neg.try_cmp(&Value::from(0)).unwrap(), Ordering::Equal);
        assert_eq!(Value::from(0).try_cmp(&pos).unwrap(), Ordering::Equal);
        assert_eq!(neg.try_cmp(&pos).unwrap(), Ordering::Equal);
        let nan = Value::from(f64::from_bits(0x7ff8_0000_0000_0000));
        assert_eq!(nan.try_cmp(&Value::from(1e300)).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_cmp_int_float_beyond_f64_precision() {
        // 2^53 + 1 n'est pas représentable en f64 : il ne doit pas être égal à 2^53
        let big = (1i64 << 53) + 1;
        let float = (1i64 << 53) as f64;
        assert_eq!(Value::from(big).try_cmp(&Value::from(float)).unwrap(), Ordering::Greater);
        assert_eq!(Value::from(float).try_cmp(&Value::from(big)).unwrap(), Ordering::Less);

        assert_eq!(Value::from(i64::MAX).try_cmp(&Value::from(9.3e18)).unwrap(), Ordering::Less);
        assert_eq!(Value::from(i64::MIN).try_cmp(&Value::from(-9.3e18)).unwrap(), Ordering::Greater);
        assert_eq!(Value::from(-3).try_cmp(&Value::from(-2.5)).unwrap(), Ordering::Less);
        assert_eq!(Value::from(-2).try_cmp(&Value::from(-2.5)).unwrap(), Ordering::Greater);
        let nan = Value::from(f64::from_bits(0x7ff8_0000_0000_0000));
        assert_eq!(Value::from(0).try_cmp(&nan).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_comparable_with() {
        assert!(Value::from(1).comparable_with(&Value::from(1.5)));
        assert!(Value::from("a").comparable_with(&Value::from("b")));
        assert!(!Value::from("a").comparable_with(&Value::from(1)));
        assert!(!Value::Null.comparable_with(&Value::Null));
        assert!(!Value::from(true).comparable_with(&Value::Null));
    }

    #[test]
    fn test_cmp_mismatch() {
        let err = Value::from("a").try_cmp(&Value::from(1)).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { left: BaseType::String, right: BaseType::Integer }
        ));

        let err = Value::Null.try_cmp(&Value::Null).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }
}
