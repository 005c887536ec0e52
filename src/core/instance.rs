// =============================================================================
// INSTANCE : Le magasin de fixtures (les données de base)
// =============================================================================
//
// `Fixtures` contient les trois collections de base :
//   orchestras  : Vec<Orchestra>
//   conductors  : Vec<Conductor>
//   assignments : Vec<Assignment>
//
// Construites une seule fois, elles ne sont ensuite exposées qu'en lecture
// (slices). Les vues dérivées ne sont jamais stockées ici : elles sont
// recalculées à chaque rapport, à partir de ce qu'on leur passe en
// paramètre.
//
// La construction est totale : aucune validation. Les références cassées
// (orchestra_id inconnu, affectation orpheline) ne ressortent qu'au moment
// de la jointure, où elles ne produisent simplement aucune ligne.
//
// Format TOML accepté par `from_toml_str` :
//
//   [[orchestra]]
//   id = 1
//   name = "Симфонический оркестр"
//
//   [[conductor]]
//   id = 1
//   full_name = "Антонов"
//   salary = 50000
//   orchestra_id = 1
//
//   [[assignment]]
//   orchestra_id = 1
//   conductor_id = 1
//
// =============================================================================

use std::path::Path;

use serde::Deserialize;

use super::record::{Assignment, Conductor, Orchestra};
use crate::error::Result;

/// Les trois collections de base, en lecture seule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixtures {
    orchestras: Vec<Orchestra>,
    conductors: Vec<Conductor>,
    assignments: Vec<Assignment>,
}

/// Forme sérialisée d'un fichier de fixtures
#[derive(Debug, Default, Deserialize)]
struct FixtureFile {
    #[serde(default, rename = "orchestra")]
    orchestras: Vec<Orchestra>,
    #[serde(default, rename = "conductor")]
    conductors: Vec<Conductor>,
    #[serde(default, rename = "assignment")]
    assignments: Vec<Assignment>,
}

impl Fixtures {
    pub fn new(
        orchestras: Vec<Orchestra>,
        conductors: Vec<Conductor>,
        assignments: Vec<Assignment>,
    ) -> Self {
        Fixtures { orchestras, conductors, assignments }
    }

    /// Le jeu de données d'exemple : 4 orchestres, 5 chefs, 7 affectations.
    pub fn sample() -> Self {
        Fixtures::new(
            vec![
                Orchestra::new(1, "Симфонический оркестр"),
                Orchestra::new(2, "Филармонический оркестр"),
                Orchestra::new(3, "Камерный оркестр"),
                Orchestra::new(4, "Академический оркестр"),
            ],
            vec![
                Conductor::new(1, "Антонов", 50000, 1),
                Conductor::new(2, "Петров", 60000, 2),
                Conductor::new(3, "Алексеев", 55000, 1),
                Conductor::new(4, "Сидоров", 70000, 3),
                Conductor::new(5, "Андреев", 45000, 2),
            ],
            vec![
                Assignment::new(1, 1),
                Assignment::new(2, 2),
                Assignment::new(1, 3),
                Assignment::new(3, 4),
                Assignment::new(2, 5),
                Assignment::new(4, 1),
                Assignment::new(4, 4),
            ],
        )
    }

    /// Charge des fixtures depuis un texte TOML.
    /// Une section absente donne une collection vide.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: FixtureFile = toml::from_str(text)?;
        Ok(Fixtures::new(file.orchestras, file.conductors, file.assignments))
    }

    /// Charge des fixtures depuis un fichier TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let fixtures = Fixtures::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            rows = fixtures.total_rows(),
            "fixtures loaded"
        );
        Ok(fixtures)
    }

    pub fn orchestras(&self) -> &[Orchestra] {
        &self.orchestras
    }

    pub fn conductors(&self) -> &[Conductor] {
        &self.conductors
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Nombre total de lignes dans les trois collections
    pub fn total_rows(&self) -> usize {
        self.orchestras.len() + self.conductors.len() + self.assignments.len()
    }

    /// Affiche les fixtures de manière lisible (pour le debug)
    pub fn display(&self) -> String {
        let mut out = String::from("fixtures = {\n");

        out.push_str(&format!("  Orchestra ({} lignes):\n", self.orchestras.len()));
        for o in &self.orchestras {
            out.push_str(&format!("    [{}] name: \"{}\"\n", o.id, o.name));
        }

        out.push_str(&format!("  Conductor ({} lignes):\n", self.conductors.len()));
        for c in &self.conductors {
            out.push_str(&format!(
                "    [{}] full_name: \"{}\", salary: {}, orchestra_id -> Orchestra[{}]\n",
                c.id, c.full_name, c.salary, c.orchestra_id
            ));
        }

        out.push_str(&format!("  Assignment ({} lignes):\n", self.assignments.len()));
        for a in &self.assignments {
            out.push_str(&format!(
                "    Orchestra[{}] <-> Conductor[{}]\n",
                a.orchestra_id, a.conductor_id
            ));
        }

        out.push_str("}\n");
        out
    }
}
