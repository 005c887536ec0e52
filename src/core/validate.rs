// =============================================================================
// VALIDATE : Diagnostic d'intégrité référentielle des fixtures
// =============================================================================
//
// L'intégrité référentielle n'est PAS imposée : les jointures ignorent
// silencieusement les références cassées. Ce module se contente de les
// LISTER, pour qu'un humain puisse les voir (sous-commande `check`).
// Il ne modifie jamais les données ni le résultat des jointures.
//
// Problèmes détectés :
//   - id d'orchestre ou de chef dupliqué
//   - orchestre principal inexistant pour un chef
//   - affectation vers un orchestre ou un chef inexistant
//
// =============================================================================

use std::collections::HashSet;
use std::fmt;

use super::instance::Fixtures;
use super::record::{ConductorId, OrchestraId};

/// Un problème d'intégrité dans les fixtures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    DuplicateOrchestraId(OrchestraId),
    DuplicateConductorId(ConductorId),
    /// Le chef pointe vers un orchestre principal inexistant
    DanglingPrimaryOrchestra {
        conductor_id: ConductorId,
        orchestra_id: OrchestraId,
    },
    /// L'affectation n° `index` pointe vers un orchestre inexistant
    DanglingAssignmentOrchestra { index: usize, orchestra_id: OrchestraId },
    /// L'affectation n° `index` pointe vers un chef inexistant
    DanglingAssignmentConductor { index: usize, conductor_id: ConductorId },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::DuplicateOrchestraId(id) => {
                write!(f, "Orchestra id {} apparaît plusieurs fois", id)
            }
            IntegrityIssue::DuplicateConductorId(id) => {
                write!(f, "Conductor id {} apparaît plusieurs fois", id)
            }
            IntegrityIssue::DanglingPrimaryOrchestra { conductor_id, orchestra_id } => write!(
                f,
                "Conductor[{}] : orchestre principal {} inexistant (ligne ignorée par la jointure)",
                conductor_id, orchestra_id
            ),
            IntegrityIssue::DanglingAssignmentOrchestra { index, orchestra_id } => write!(
                f,
                "Assignment #{} : orchestre {} inexistant (ligne ignorée par la jointure)",
                index, orchestra_id
            ),
            IntegrityIssue::DanglingAssignmentConductor { index, conductor_id } => write!(
                f,
                "Assignment #{} : chef {} inexistant (ligne ignorée par la jointure)",
                index, conductor_id
            ),
        }
    }
}

/// Vérifie l'intégrité référentielle des fixtures.
///
/// Retourne la liste complète des problèmes trouvés, dans l'ordre des
/// collections (orchestres, chefs, affectations).
pub fn validate_fixtures(fixtures: &Fixtures) -> Result<(), Vec<IntegrityIssue>> {
    let mut issues = Vec::new();

    let mut orchestra_ids = HashSet::new();
    for o in fixtures.orchestras() {
        if !orchestra_ids.insert(o.id) {
            issues.push(IntegrityIssue::DuplicateOrchestraId(o.id));
        }
    }

    let mut conductor_ids = HashSet::new();
    for c in fixtures.conductors() {
        if !conductor_ids.insert(c.id) {
            issues.push(IntegrityIssue::DuplicateConductorId(c.id));
        }
        if !orchestra_ids.contains(&c.orchestra_id) {
            issues.push(IntegrityIssue::DanglingPrimaryOrchestra {
                conductor_id: c.id,
                orchestra_id: c.orchestra_id,
            });
        }
    }

    for (index, a) in fixtures.assignments().iter().enumerate() {
        if !orchestra_ids.contains(&a.orchestra_id) {
            issues.push(IntegrityIssue::DanglingAssignmentOrchestra {
                index,
                orchestra_id: a.orchestra_id,
            });
        }
        if !conductor_ids.contains(&a.conductor_id) {
            issues.push(IntegrityIssue::DanglingAssignmentConductor {
                index,
                conductor_id: a.conductor_id,
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        for issue in &issues {
            tracing::warn!(%issue, "integrity issue");
        }
        Err(issues)
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{Assignment, Conductor, Orchestra};

    #[test]
    fn test_sample_is_valid() {
        assert!(validate_fixtures(&Fixtures::sample()).is_ok());
    }

    #[test]
    fn test_detects_dangling_references() {
        let fx = Fixtures::new(
            vec![Orchestra::new(1, "Симфонический оркестр")],
            vec![
                Conductor::new(1, "Антонов", 50000, 1),
                Conductor::new(2, "Петров", 60000, 5),
            ],
            vec![Assignment::new(1, 1), Assignment::new(9, 3)],
        );

        let issues = validate_fixtures(&fx).unwrap_err();
        assert_eq!(
            issues,
            vec![
                IntegrityIssue::DanglingPrimaryOrchestra { conductor_id: 2, orchestra_id: 5 },
                IntegrityIssue::DanglingAssignmentOrchestra { index: 1, orchestra_id: 9 },
                IntegrityIssue::DanglingAssignmentConductor { index: 1, conductor_id: 3 },
            ]
        );
    }

    #[test]
    fn test_detects_duplicate_ids() {
        let fx = Fixtures::new(
            vec![Orchestra::new(1, "А"), Orchestra::new(1, "Б")],
            vec![Conductor::new(3, "В", 1, 1), Conductor::new(3, "Г", 1, 1)],
            vec![],
        );
        let issues = validate_fixtures(&fx).unwrap_err();
        assert!(issues.contains(&IntegrityIssue::DuplicateOrchestraId(1)));
        assert!(issues.contains(&IntegrityIssue::DuplicateConductorId(3)));
    }

    #[test]
    fn test_issue_display() {
        let issue = IntegrityIssue::DanglingAssignmentConductor { index: 4, conductor_id: 7 };
        assert!(issue.to_string().contains("Assignment #4"));
    }
}
