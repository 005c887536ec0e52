// =============================================================================
// JOIN : Équi-jointure par boucles imbriquées
// =============================================================================
//
// Pour deux séquences L et R et deux extracteurs de clés :
//
//   for l in L:            (ordre d'origine de L)
//       for r in R:        (ordre d'origine de R)
//           if key_l(l) == key_r(r): emit (l, r)
//
// C'est exactement un produit cartésien filtré par égalité de clés.
// Seule l'ÉGALITÉ des clés compte : aucun tri, aucun index, donc l'ordre
// de sortie est entièrement déterminé par l'ordre des deux entrées.
// Les éléments sans correspondance ne produisent aucune paire.
//
// Coût O(|L|·|R|), suffisant pour les fixtures.
//
// =============================================================================

/// Équi-jointure : toutes les paires `(l, r)` telles que `key_l(l) == key_r(r)`,
/// L-majeur puis R-majeur.
pub fn equi_join<'l, 'r, L, R, K, FL, FR>(
    left: &'l [L],
    right: &'r [R],
    key_l: FL,
    key_r: FR,
) -> Vec<(&'l L, &'r R)>
where
    K: PartialEq,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
{
    join_map(left, right, key_l, key_r, |l, r| (l, r))
}

/// Équi-jointure suivie d'une projection de chaque paire.
///
/// Les clés de `right` sont extraites une seule fois ; celles de `left`
/// une fois par élément externe.
pub fn join_map<'l, 'r, L, R, K, T, FL, FR, P>(
    left: &'l [L],
    right: &'r [R],
    key_l: FL,
    key_r: FR,
    project: P,
) -> Vec<T>
where
    K: PartialEq,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    P: Fn(&'l L, &'r R) -> T,
{
    let right_keys: Vec<K> = right.iter().map(&key_r).collect();
    let mut out = Vec::new();

    for l in left {
        let k = key_l(l);
        for (r, rk) in right.iter().zip(&right_keys) {
            if k == *rk {
                out.push(project(l, r));
            }
        }
    }

    tracing::debug!(
        left = left.len(),
        right = right.len(),
        matched = out.len(),
        "equi-join"
    );
    out
}
