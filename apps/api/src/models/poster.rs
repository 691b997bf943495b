//! Content tree consumed by the layout engine.
//!
//! Field names follow the engine's vocabulary (`groups`, `items`, `highlight`), with serde
//! aliases for the names the content generator emits (`data`, `knowledges`,
//! `first_level_highlight`, ...), so a parser result can be posted as-is.

use serde::{Deserialize, Serialize};

/// A full poster outline: one title and an ordered list of groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(alias = "data")]
    pub groups: Vec<Group>,
}

/// A titled cluster of items sharing one subtitle band (a "VG").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, alias = "subtask_title")]
    pub subtitle: String,
    #[serde(alias = "knowledges")]
    pub items: Vec<Item>,
}

/// One highlighted fact (a "KG"), optionally paired with an icon and/or a chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "knowledge_content")]
    pub content: String,
    #[serde(alias = "first_level_highlight")]
    pub highlight: String,
    #[serde(default)]
    pub second_level_highlight: Option<String>,
    #[serde(default)]
    pub data_insight: Option<String>,
    /// Empty means "no icon".
    #[serde(default)]
    pub icon_keyword: String,
    #[serde(default)]
    pub visualization: Visualization,
}

impl Item {
    pub fn has_icon(&self) -> bool {
        !self.icon_keyword.trim().is_empty()
    }

    pub fn has_visualization(&self) -> bool {
        self.visualization.is_visualization
    }
}

/// Visualization descriptor. The engine only reads `is_visualization`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    #[serde(default)]
    pub is_visualization: bool,
    #[serde(default, rename = "type", alias = "Visualization_type")]
    pub kind: Option<VisualizationType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualizationType {
    #[serde(rename = "Pie_Chart", alias = "pie_chart")]
    PieChart,
    #[serde(rename = "Bar_Chart", alias = "bar_chart")]
    BarChart,
    #[serde(rename = "Line_Chart", alias = "line_chart")]
    LineChart,
    #[serde(rename = "Pictogram", alias = "pictogram")]
    Pictogram,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_generator_field_names() {
        let raw = json!({
            "title": "World War II: Deaths & Casualties",
            "data": [{
                "subtask_title": "Military deaths",
                "subtask_content": "ignored",
                "knowledges": [{
                    "knowledge_content": "Deaths: 189",
                    "data_insight": "Value",
                    "first_level_highlight": "189",
                    "second_level_highlight": null,
                    "icon_keyword": "skull",
                    "visualization": { "is_visualization": true, "type": "Pie_Chart" }
                }]
            }]
        });
        let doc: Document = serde_json::from_value(raw).unwrap();
        assert_eq!(doc.groups.len(), 1);
        assert_eq!(doc.groups[0].subtitle, "Military deaths");
        let item = &doc.groups[0].items[0];
        assert_eq!(item.content, "Deaths: 189");
        assert_eq!(item.highlight, "189");
        assert!(item.has_icon());
        assert!(item.has_visualization());
        assert_eq!(item.visualization.kind, Some(VisualizationType::PieChart));
    }

    #[test]
    fn test_deserialize_engine_field_names_with_defaults() {
        let raw = json!({
            "groups": [{ "items": [{ "content": "Deaths: 189", "highlight": "189" }] }]
        });
        let doc: Document = serde_json::from_value(raw).unwrap();
        let item = &doc.groups[0].items[0];
        assert!(doc.title.is_empty());
        assert!(!item.has_icon());
        assert!(!item.has_visualization());
    }

    #[test]
    fn test_blank_icon_keyword_means_no_icon() {
        let item = Item {
            content: "x".to_string(),
            highlight: "x".to_string(),
            icon_keyword: "   ".to_string(),
            ..Item::default()
        };
        assert!(!item.has_icon());
    }
}
