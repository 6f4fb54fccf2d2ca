//! Reference fact sheets for the detail panel.

use std::collections::HashMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::bodies::Body;
use crate::error::CatalogError;

const BUILTIN_FACTS: &str = include_str!("../assets/facts.ron");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSheet {
    pub name: String,
    pub kind: String,
    pub diameter: String,
    pub mass: String,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub facts: Vec<String>,
}

impl FactSheet {
    /// Labelled rows in display order, skipping absent values.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let optional = [
            ("Distance", &self.distance),
            ("Day length", &self.day),
            ("Year length", &self.year),
            ("Temperature", &self.temperature),
            ("Composition", &self.composition),
        ];
        let mut rows = vec![
            ("Type", self.kind.as_str()),
            ("Diameter", self.diameter.as_str()),
            ("Mass", self.mass.as_str()),
        ];
        rows.extend(
            optional
                .into_iter()
                .filter_map(|(label, value)| value.as_deref().map(|v| (label, v))),
        );
        rows
    }
}

/// What the detail panel shows for a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyInfo<'a> {
    Sheet(&'a FactSheet),
    /// No sheet: name, kind and the short catalog line
    Summary {
        name: &'a str,
        kind: &'static str,
        description: &'a str,
    },
}

#[derive(Debug, Clone, Default)]
pub struct FactBook {
    sheets: AHashMap<String, FactSheet>,
}

impl FactBook {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_ron(BUILTIN_FACTS)
    }

    pub fn from_ron(source: &str) -> Result<Self, CatalogError> {
        let sheets: HashMap<String, FactSheet> =
            ron::from_str(source).map_err(|e| CatalogError::parse("fact sheets", e))?;
        log::debug!("Loaded {} fact sheets", sheets.len());
        Ok(Self {
            sheets: sheets.into_iter().collect(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&FactSheet> {
        self.sheets.get(key)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn describe<'a>(&'a self, body: &'a Body) -> BodyInfo<'a> {
        match self.get(&body.key) {
            Some(sheet) => BodyInfo::Sheet(sheet),
            None => BodyInfo::Summary {
                name: &body.name,
                kind: body.kind.label(),
                description: &body.description,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyKind;

    #[test]
    fn test_builtin_sheets() {
        let book = FactBook::builtin().unwrap();
        assert_eq!(book.len(), 10);

        let earth = book.get("earth").unwrap();
        assert_eq!(earth.diameter, "12,756 km");
        assert_eq!(earth.facts.len(), 3);

        let moon = book.get("moon").unwrap();
        assert_eq!(moon.facts.len(), 4);
    }

    #[test]
    fn test_rows_skip_missing() {
        let book = FactBook::builtin().unwrap();
        let sun = book.get("sun").unwrap();
        let labels: Vec<_> = sun.rows().into_iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            ["Type", "Diameter", "Mass", "Temperature", "Composition"]
        );
    }

    #[test]
    fn test_describe_falls_back_to_summary() {
        let book = FactBook::builtin().unwrap();
        let pluto = Body::new("pluto", "Pluto", BodyKind::DwarfPlanet, 0.3)
            .with_description("Former 9th planet, now classified as dwarf planet");

        match book.describe(&pluto) {
            BodyInfo::Summary { name, kind, .. } => {
                assert_eq!(name, "Pluto");
                assert_eq!(kind, "Dwarf Planet");
            }
            other => panic!("expected summary, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_source() {
        assert!(matches!(
            FactBook::from_ron("{ \"sun\": (name: 3) }"),
            Err(CatalogError::Parse { .. })
        ));
    }
}
