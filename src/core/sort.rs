// =============================================================================
// SORT : Tri stable ascendant par clé extraite
// =============================================================================
//
// Contrat : le résultat est une permutation de l'entrée, les clés sont
// croissantes (au sens large), et deux éléments de clés égales gardent leur
// ordre relatif d'origine. `slice::sort_by` est stable, on s'appuie dessus.
//
// Deux variantes :
//   - statique : la clé est `Ord`, le tri ne peut pas échouer
//   - dynamique : la clé est une `Value` (ex: attribut choisi par nom) ;
//     deux clés de types incomparables donnent Error::TypeMismatch, propagée
//     telle quelle à l'appelant
//
// =============================================================================

use std::cmp::Ordering;

use super::record::Record;
use super::typeside::Value;
use crate::error::{Error, Result};

/// Tri stable ascendant par clé. Les clés sont extraites une seule fois.
pub fn stable_sort_by_key<T, K, F>(rows: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut keyed: Vec<(K, T)> = rows.into_iter().map(|row| (key(&row), row)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::debug!(rows = keyed.len(), "stable sort");
    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Tri stable ascendant par comparateur, pour les clés empruntées à l'élément.
pub fn stable_sort_by<T, F>(mut rows: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    rows.sort_by(compare);
    tracing::debug!(rows = rows.len(), "stable sort");
    rows
}

/// Tri stable par clé dynamique.
///
/// Les clés sont vérifiées AVANT le tri : si deux clés consécutives de
/// l'entrée ne sont pas comparables (ou si un NULL apparaît parmi au moins
/// deux clés), la première paire fautive donne `Error::TypeMismatch` et
/// rien n'est trié. Une fois la vérification passée, toutes les clés sont
/// de la même famille et la comparaison ne peut plus échouer.
pub fn try_stable_sort_by_value<T, F>(rows: Vec<T>, key: F) -> Result<Vec<T>>
where
    F: Fn(&T) -> Value,
{
    let mut keyed: Vec<(Value, T)> = rows.into_iter().map(|row| (key(&row), row)).collect();

    if let Some(pair) = keyed.windows(2).find(|pair| !pair[0].0.comparable_with(&pair[1].0)) {
        let e = Error::TypeMismatch {
            left: pair[0].0.get_type(),
            right: pair[1].0.get_type(),
        };
        tracing::warn!(error = %e, "dynamic sort rejected");
        return Err(e);
    }

    // Toutes les paires sont comparables : `try_cmp` réussit toujours ici
    keyed.sort_by(|a, b| a.0.try_cmp(&b.0).unwrap_or(Ordering::Equal));
    tracing::debug!(rows = keyed.len(), "dynamic stable sort");
    Ok(keyed.into_iter().map(|(_, row)| row).collect())
}

/// Tri stable par un attribut nommé d'un `Record`.
pub fn try_sort_by_attribute<T: Record>(rows: Vec<T>, attribute: &str) -> Result<Vec<T>> {
    if !T::attribute_names().iter().any(|name| *name == attribute) {
        return Err(Error::UnknownAttribute(attribute.to_string()));
    }
    try_stable_sort_by_value(rows, |row| row.attribute(attribute).unwrap_or(Value::Null))
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Placement;
    use crate::core::typeside::BaseType;

    #[test]
    fn test_sort_by_key_is_stable() {
        let rows = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        let sorted = stable_sort_by_key(rows, |r| r.0);
        assert_eq!(sorted, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_sort_by_comparator_is_stable() {
        let rows = vec![("Петров", 1), ("Антонов", 2), ("Петров", 3)];
        let sorted = stable_sort_by(rows, |a, b| a.0.cmp(b.0));
        assert_eq!(sorted, vec![("Антонов", 2), ("Петров", 1), ("Петров", 3)]);
    }

    #[test]
    fn test_sort_empty() {
        let sorted: Vec<i32> = stable_sort_by_key(Vec::new(), |x| *x);
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_dynamic_sort_mixed_numeric() {
        let rows = vec![Value::from(3), Value::from(1.5), Value::from(2)];
        let sorted = try_stable_sort_by_value(rows, |v| v.clone()).unwrap();
        assert_eq!(sorted, vec![Value::from(1.5), Value::from(2), Value::from(3)]);
    }

    #[test]
    fn test_dynamic_sort_type_mismatch() {
        let rows = vec![Value::from(1), Value::from(2), Value::from("трое")];
        let err = try_stable_sort_by_value(rows, |v| v.clone()).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_dynamic_sort_null_among_many_keys() {
        // Un NULL toutes les trois clés : erreur, jamais de panique
        let rows: Vec<Value> = (0..25i64)
            .map(|i| if i % 3 == 2 { Value::Null } else { Value::from(25 - i) })
            .collect();
        let err = try_stable_sort_by_value(rows, |v| v.clone()).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { left: BaseType::Integer, right: BaseType::Null }
        ));
    }

    #[test]
    fn test_dynamic_sort_single_null_is_fine() {
        let sorted = try_stable_sort_by_value(vec![Value::Null], |v| v.clone()).unwrap();
        assert_eq!(sorted, vec![Value::Null]);
    }

    #[test]
    fn test_sort_by_attribute() {
        let rows = vec![
            Placement::new("Петров", 60000, "Фил"),
            Placement::new("Андреев", 45000, "Фил"),
        ];
        let sorted = try_sort_by_attribute(rows, "salary").unwrap();
        assert_eq!(sorted[0].full_name, "Андреев");
    }

    #[test]
    fn test_sort_by_unknown_attribute() {
        let rows = vec![Placement::new("Петров", 60000, "Фил")];
        let err = try_sort_by_attribute(rows, "budget").unwrap_err();
        assert!(matches!(err, Error::UnknownAttribute(name) if name == "budget"));
    }
}
