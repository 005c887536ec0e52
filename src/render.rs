// =============================================================================
// RENDER : Mise en forme des rapports
// =============================================================================
//
// Le cœur ne connaît JAMAIS le format de sortie. Un `Renderer` traduit un
// `ReportSet` (ou les fixtures) en texte :
//   - TextRenderer : un tuple par ligne, sous un titre par rapport
//   - JsonRenderer : un objet JSON { "b1": [...], "b2": [...], ... }
//
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::core::report::ReportSet;
use crate::error::Result;

/// Un des trois rapports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    B1,
    B2,
    B3,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::B1, Section::B2, Section::B3];

    fn key(self) -> &'static str {
        match self {
            Section::B1 => "b1",
            Section::B2 => "b2",
            Section::B3 => "b3",
        }
    }
}

/// Format de sortie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer { pretty: true }),
        }
    }
}

/// Trait commun à tous les formats de sortie.
pub trait Renderer {
    /// Rend les sections demandées, dans l'ordre donné.
    fn render(&self, reports: &ReportSet, sections: &[Section]) -> Result<String>;

    /// Retourne le nom du format
    fn name(&self) -> &str;
}

/// Rendu texte lisible, un tuple par ligne.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn title(section: Section, reports: &ReportSet) -> String {
        match section {
            Section::B1 => format!(
                "═══ B1 : chefs dont le nom commence par « {} » ═══",
                reports.prefix
            ),
            Section::B2 => "═══ B2 : salaire minimum par orchestre ═══".to_string(),
            Section::B3 => "═══ B3 : affectations triées par nom de chef ═══".to_string(),
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, reports: &ReportSet, sections: &[Section]) -> Result<String> {
        let mut out = String::new();

        for (i, &section) in sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&Self::title(section, reports));
            out.push('\n');

            let lines: Vec<String> = match section {
                Section::B1 => reports.b1.iter().map(placement_line).collect(),
                Section::B2 => reports
                    .b2
                    .iter()
                    .map(|r| format!("(\"{}\", {})", r.orchestra_name, r.min_salary))
                    .collect(),
                Section::B3 => reports.b3.iter().map(placement_line).collect(),
            };

            if lines.is_empty() {
                out.push_str("(aucune ligne)\n");
            }
            for line in lines {
                out.push_str(&line);
                out.push('\n');
            }
        }

        Ok(out)
    }

    fn name(&self) -> &str {
        "text"
    }
}

fn placement_line(p: &crate::core::record::Placement) -> String {
    format!("(\"{}\", {}, \"{}\")", p.full_name, p.salary, p.orchestra_name)
}

/// Rendu JSON via serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, reports: &ReportSet, sections: &[Section]) -> Result<String> {
        let mut object = serde_json::Map::new();
        for &section in sections {
            let value = match section {
                Section::B1 => serde_json::to_value(&reports.b1)?,
                Section::B2 => serde_json::to_value(&reports.b2)?,
                Section::B3 => serde_json::to_value(&reports.b3)?,
            };
            object.insert(section.key().to_string(), value);
        }

        let value = serde_json::Value::Object(object);
        let text = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    fn name(&self) -> &str {
        "json"
    }
}
