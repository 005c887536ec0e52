// =============================================================================
// RECORD : Les enregistrements de base et les lignes dérivées
// =============================================================================
//
// Trois entités de base :
//
//   Orchestra ◀──orchestra_id── Conductor        (un-à-plusieurs)
//       ▲                           ▲
//       │orchestra_id               │conductor_id
//       └──────── Assignment ───────┘            (plusieurs-à-plusieurs)
//
// La relation un-à-plusieurs (orchestre principal) et la relation
// plusieurs-à-plusieurs (affectations) sont INDÉPENDANTES : un chef peut
// être affecté à un orchestre qui n'est pas son orchestre principal.
//
// Deux formes de lignes dérivées :
//   Placement          = (full_name, salary, orchestra_name)
//   OrchestraMinSalary = (orchestra_name, min_salary)
//
// Le trait `Record` expose les attributs d'une ligne par leur nom sous forme
// de `Value`, pour les tris choisis à l'exécution (`podium report --order-by`).
//
// =============================================================================

use serde::{Deserialize, Serialize};

use super::typeside::Value;

pub type OrchestraId = i64;
pub type ConductorId = i64;
pub type Salary = i64;

/// Accès dynamique aux attributs d'un enregistrement.
pub trait Record {
    /// Noms des attributs lisibles via `attribute`
    fn attribute_names() -> &'static [&'static str]
    where
        Self: Sized;

    /// Lit un attribut par son nom, `None` s'il n'existe pas
    fn attribute(&self, name: &str) -> Option<Value>;
}

/// Un orchestre. Identité = `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orchestra {
    pub id: OrchestraId,
    pub name: String,
}

impl Orchestra {
    pub fn new(id: OrchestraId, name: &str) -> Self {
        Orchestra { id, name: name.to_string() }
    }
}

/// Un chef d'orchestre, rattaché à un orchestre principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conductor {
    pub id: ConductorId,
    pub full_name: String,
    pub salary: Salary,
    /// Référence (non vérifiée) vers `Orchestra::id`
    pub orchestra_id: OrchestraId,
}

impl Conductor {
    pub fn new(id: ConductorId, full_name: &str, salary: Salary, orchestra_id: OrchestraId) -> Self {
        Conductor {
            id,
            full_name: full_name.to_string(),
            salary,
            orchestra_id,
        }
    }
}

/// Une affectation chef ↔ orchestre (table de liaison).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub orchestra_id: OrchestraId,
    pub conductor_id: ConductorId,
}

impl Assignment {
    pub fn new(orchestra_id: OrchestraId, conductor_id: ConductorId) -> Self {
        Assignment { orchestra_id, conductor_id }
    }
}

/// Ligne des vues un-à-plusieurs et plusieurs-à-plusieurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub full_name: String,
    pub salary: Salary,
    pub orchestra_name: String,
}

impl Placement {
    pub fn new(full_name: &str, salary: Salary, orchestra_name: &str) -> Self {
        Placement {
            full_name: full_name.to_string(),
            salary,
            orchestra_name: orchestra_name.to_string(),
        }
    }
}

/// Ligne du rapport B2 : salaire minimum par orchestre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrchestraMinSalary {
    pub orchestra_name: String,
    pub min_salary: Salary,
}

impl OrchestraMinSalary {
    pub fn new(orchestra_name: &str, min_salary: Salary) -> Self {
        OrchestraMinSalary {
            orchestra_name: orchestra_name.to_string(),
            min_salary,
        }
    }
}

impl Record for Placement {
    fn attribute_names() -> &'static [&'static str] {
        &["full_name", "salary", "orchestra_name"]
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "full_name" => Some(Value::String(self.full_name.clone())),
            "salary" => Some(Value::Integer(self.salary)),
            "orchestra_name" => Some(Value::String(self.orchestra_name.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_attributes() {
        let p = Placement::new("Антонов", 50000, "Симфонический оркестр");
        assert_eq!(p.attribute("salary"), Some(Value::Integer(50000)));
        assert_eq!(p.attribute("full_name"), Some(Value::from("Антонов")));
        assert_eq!(p.attribute("budget"), None);
    }

    #[test]
    fn test_attribute_names_are_readable() {
        let p = Placement::new("Петров", 60000, "Филармонический оркестр");
        for name in Placement::attribute_names() {
            assert!(p.attribute(name).is_some(), "attribut {} illisible", name);
        }
    }
}
