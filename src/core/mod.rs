// =============================================================================
// CORE : Le cœur relationnel pur
// =============================================================================
//
// Toute la logique de transformation, sans I/O : chaque opération est une
// fonction pure de ses entrées. Aucune ne lit un état global, aucune ne
// garde de référence vers les fixtures après l'appel.
//
// Architecture (des feuilles vers la racine) :
//   typeside  → valeurs dynamiques et leur ordre (TypeMismatch)
//   record    → enregistrements de base et lignes dérivées
//   instance  → le magasin de fixtures (lecture seule)
//   join      → équi-jointure par boucles imbriquées
//   filter    → sélection par prédicat, ordre préservé
//   aggregate → regroupement + minimum (groupes vides omis)
//   sort      → tri stable par clé
//   report    → vues un-à-plusieurs / plusieurs-à-plusieurs et rapports B1-B3
//   validate  → diagnostic d'intégrité référentielle (jamais bloquant)
//
// =============================================================================

pub mod typeside;
pub mod record;
pub mod instance;
pub mod join;
pub mod filter;
pub mod aggregate;
pub mod sort;
pub mod report;
pub mod validate;
