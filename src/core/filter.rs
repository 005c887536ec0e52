// =============================================================================
// FILTER : Sélection par prédicat, ordre préservé
// =============================================================================
//
// `filter` garde les éléments qui satisfont le prédicat, dans leur ordre
// d'entrée, sans copie ni réordonnancement : les éléments retenus sont
// déplacés tels quels dans le résultat.
//
// Un prédicat est soit une closure `Fn(&T) -> bool`, soit un type nommé
// implémentant `Predicate` (ex: `NameStartsWith`).
//
// =============================================================================

use super::record::Placement;

/// Un prédicat booléen sur des éléments de type `T`.
pub trait Predicate<T: ?Sized> {
    fn test(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Vrai quand le nom complet commence par `prefix`.
///
/// La comparaison porte sur les caractères Unicode tels quels : le « А »
/// cyrillique n'est pas le « A » latin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameStartsWith {
    prefix: String,
}

impl NameStartsWith {
    pub fn new(prefix: &str) -> Self {
        NameStartsWith { prefix: prefix.to_string() }
    }
}

impl Predicate<Placement> for NameStartsWith {
    fn test(&self, item: &Placement) -> bool {
        item.full_name.starts_with(&self.prefix)
    }
}

/// Sous-séquence des éléments satisfaisant `predicate`, ordre d'entrée conservé.
pub fn filter<T, P, I>(rows: I, predicate: &P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: Predicate<T> + ?Sized,
{
    let mut seen = 0usize;
    let kept: Vec<T> = rows
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|row| predicate.test(row))
        .collect();

    tracing::debug!(scanned = seen, kept = kept.len(), "filter");
    kept
}
