// =============================================================================
// AGGREGATE : Regroupement puis minimum
// =============================================================================
//
// Pour chaque clé candidate g (dans l'ordre des candidats) :
//
//   groupe(g) = { row ∈ rows | group_key(row) == g }
//   si groupe(g) est vide  → g est OMIS du résultat
//   sinon                  → émettre (g, min(value(row) pour row ∈ groupe(g)))
//
// Un groupe vide n'est jamais émis avec une valeur nulle ou zéro : il
// disparaît. Seule la valeur minimale est conservée, pas la ligne qui la
// porte, donc les égalités à l'intérieur d'un groupe sont sans effet.
//
// =============================================================================

/// Minimum de `value` par groupe.
///
/// Le résultat suit l'ordre des candidats ; les groupes vides sont omis.
pub fn group_min<'a, T, K, V, C, FK, FV>(
    rows: &'a [T],
    candidates: C,
    group_key: FK,
    value: FV,
) -> Vec<(K, V)>
where
    C: IntoIterator<Item = K>,
    K: PartialEq,
    V: Ord,
    FK: Fn(&'a T) -> K,
    FV: Fn(&'a T) -> V,
{
    let mut out = Vec::new();
    let mut omitted = 0usize;

    for candidate in candidates {
        let minimum = rows
            .iter()
            .filter(|row| group_key(*row) == candidate)
            .map(&value)
            .min();
        match minimum {
            Some(v) => out.push((candidate, v)),
            None => omitted += 1,
        }
    }

    tracing::debug!(rows = rows.len(), groups = out.len(), omitted, "group min");
    out
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<(&'static str, i64, &'static str)> {
        vec![
            ("Антонов", 50000, "Симф"),
            ("Петров", 60000, "Фил"),
            ("Алексеев", 55000, "Симф"),
            ("Андреев", 45000, "Фил"),
        ]
    }

    #[test]
    fn test_group_min_candidate_order() {
        let rows = rows();
        let out = group_min(&rows, ["Фил", "Симф"], |r| r.2, |r| r.1);
        assert_eq!(out, vec![("Фил", 45000), ("Симф", 50000)]);
    }

    #[test]
    fn test_empty_group_omitted() {
        let rows = rows();
        let out = group_min(&rows, ["Симф", "Камерный", "Фил"], |r| r.2, |r| r.1);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|(k, _)| *k != "Камерный"));
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<(&str, i64, &str)> = Vec::new();
        let out = group_min(&rows, ["Симф"], |r| r.2, |r| r.1);
        assert!(out.is_empty());
    }
}
