// =============================================================================
// REPORT : Construction des vues et des trois rapports
// =============================================================================
//
// Deux vues dérivées, recalculées à chaque appel :
//
//   un-à-plusieurs :
//     Orchestra ⋈ Conductor  sur  orchestra.id == conductor.orchestra_id
//     → (full_name, salary, orchestra_name), orchestre-majeur
//
//   plusieurs-à-plusieurs (deux sauts) :
//     Orchestra ⋈ Assignment  sur  orchestra.id == assignment.orchestra_id
//       → (orchestra_name, conductor_id)
//     ⋈ Conductor  sur  conductor_id == conductor.id
//       → (full_name, salary, orchestra_name)
//     orchestre-majeur, puis affectation, puis chef
//
// Trois rapports :
//   B1 = filter(un-à-plusieurs, nom commence par une lettre)
//   B2 = sort(group_min(un-à-plusieurs, par orchestre, salaire), par minimum)
//   B3 = sort(plusieurs-à-plusieurs, par nom de chef)
//
// Les références cassées ne produisent aucune ligne, à chaque saut.
//
// `order_placements_by` re-trie B1 et B3 selon un attribut nommé de
// `Placement` (tri stable, l'ordre précédent départage les égalités).
//
// =============================================================================

use serde::Serialize;

use super::aggregate::group_min;
use super::filter::{filter, NameStartsWith, Predicate};
use super::instance::Fixtures;
use super::join::join_map;
use super::record::{Assignment, Conductor, ConductorId, Orchestra, OrchestraMinSalary, Placement};
use super::sort::{stable_sort_by, stable_sort_by_key, try_sort_by_attribute};
use crate::error::Result;

/// Résultat intermédiaire du premier saut plusieurs-à-plusieurs
#[derive(Debug, Clone, Copy)]
struct AssignedSeat<'a> {
    orchestra_name: &'a str,
    conductor_id: ConductorId,
}

/// Vue un-à-plusieurs : chaque chef avec son orchestre principal.
pub fn build_one_to_many(orchestras: &[Orchestra], conductors: &[Conductor]) -> Vec<Placement> {
    join_map(
        orchestras,
        conductors,
        |o| o.id,
        |c| c.orchestra_id,
        |o, c| Placement::new(&c.full_name, c.salary, &o.name),
    )
}

/// Vue plusieurs-à-plusieurs : chaque affectation résolue en (chef, orchestre).
pub fn build_many_to_many(
    orchestras: &[Orchestra],
    assignments: &[Assignment],
    conductors: &[Conductor],
) -> Vec<Placement> {
    let seats: Vec<AssignedSeat<'_>> = join_map(
        orchestras,
        assignments,
        |o| o.id,
        |a| a.orchestra_id,
        |o, a| AssignedSeat {
            orchestra_name: &o.name,
            conductor_id: a.conductor_id,
        },
    );

    join_map(
        &seats,
        conductors,
        |s| s.conductor_id,
        |c| c.id,
        |s, c| Placement::new(&c.full_name, c.salary, s.orchestra_name),
    )
}

/// B1 : lignes un-à-plusieurs dont le nom commence par `prefix`, ordre conservé.
pub fn report_b1(one_to_many: &[Placement], prefix: &str) -> Vec<Placement> {
    let predicate = NameStartsWith::new(prefix);
    filter(one_to_many.iter(), &|p: &&Placement| predicate.test(*p))
        .into_iter()
        .cloned()
        .collect()
}

/// B2 : salaire minimum par orchestre, trié par ce minimum.
///
/// Les orchestres sans aucun chef sont omis. À minimum égal, l'ordre des
/// orchestres dans `orchestras` est conservé.
pub fn report_b2(one_to_many: &[Placement], orchestras: &[Orchestra]) -> Vec<OrchestraMinSalary> {
    let minimums: Vec<OrchestraMinSalary> = group_min(
        one_to_many,
        orchestras.iter().map(|o| o.name.as_str()),
        |p| p.orchestra_name.as_str(),
        |p| p.salary,
    )
    .into_iter()
    .map(|(name, min)| OrchestraMinSalary::new(name, min))
    .collect();

    stable_sort_by_key(minimums, |r| r.min_salary)
}

/// B3 : vue plusieurs-à-plusieurs triée par nom de chef.
pub fn report_b3(many_to_many: Vec<Placement>) -> Vec<Placement> {
    stable_sort_by(many_to_many, |a, b| a.full_name.cmp(&b.full_name))
}

/// Les trois rapports calculés sur un même instantané des fixtures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSet {
    /// Préfixe utilisé pour B1
    pub prefix: String,
    pub b1: Vec<Placement>,
    pub b2: Vec<OrchestraMinSalary>,
    pub b3: Vec<Placement>,
}

impl ReportSet {
    pub fn compute(fixtures: &Fixtures, prefix: &str) -> Self {
        let one_to_many = build_one_to_many(fixtures.orchestras(), fixtures.conductors());
        let many_to_many = build_many_to_many(
            fixtures.orchestras(),
            fixtures.assignments(),
            fixtures.conductors(),
        );

        let set = ReportSet {
            prefix: prefix.to_string(),
            b1: report_b1(&one_to_many, prefix),
            b2: report_b2(&one_to_many, fixtures.orchestras()),
            b3: report_b3(many_to_many),
        };
        tracing::info!(
            b1 = set.b1.len(),
            b2 = set.b2.len(),
            b3 = set.b3.len(),
            "reports computed"
        );
        set
    }

    /// Re-trie B1 et B3 par un attribut de `Placement` choisi par son nom.
    ///
    /// B2 n'est pas touché. Un nom inconnu donne `Error::UnknownAttribute`.
    pub fn order_placements_by(self, attribute: &str) -> Result<Self> {
        let b1 = try_sort_by_attribute(self.b1, attribute)?;
        let b3 = try_sort_by_attribute(self.b3, attribute)?;
        tracing::debug!(attribute, "placements reordered");
        Ok(ReportSet { b1, b3, ..self })
    }
}
