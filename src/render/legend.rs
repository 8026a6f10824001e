//! Filter-Legende: eine Checkbox pro Kategorie.

use super::html::escape;
use crate::core::{CategoryFilterState, MarkerCategory};
use std::fmt::Write;

/// Überschrift der Legende.
pub const LEGEND_HEADING: &str = "Filter";

/// Ein Legenden-Eintrag (Checkbox + Icon + Label).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub category: MarkerCategory,
    pub checkbox_id: String,
    pub icon: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Vollständige Legende in kanonischer Kategorie-Reihenfolge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    pub heading: &'static str,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Rendert die Legende als HTML-Formular.
    ///
    /// Jede Checkbox ruft beim Klick `boxclick(this, '<key>')` auf.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<form action=\"#\">");
        let _ = write!(
            out,
            "<div class=\"legend-heading\">{}</div>",
            escape(self.heading)
        );
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(" &nbsp; &nbsp;");
            }
            let checked = if entry.checked {
                " checked=\"checked\""
            } else {
                ""
            };
            let _ = write!(
                out,
                "<input type=\"checkbox\" id=\"{id}\" onclick=\"boxclick(this,'{key}')\"{checked} />\
                 <img src=\"{icon}\" class=\"category-icon\" /> {label}",
                id = escape(&entry.checkbox_id),
                key = entry.category.key(),
                checked = checked,
                icon = escape(entry.icon),
                label = escape(entry.label),
            );
        }
        out.push_str("</form>");
        out
    }

    /// Eintrag für eine Kategorie.
    pub fn entry(&self, category: MarkerCategory) -> Option<&LegendEntry> {
        self.entries.iter().find(|e| e.category == category)
    }
}

/// Baut die Legende aus dem aktuellen Filter-Zustand.
pub fn build_legend(filter: &CategoryFilterState) -> Legend {
    let entries = MarkerCategory::ALL
        .into_iter()
        .map(|category| LegendEntry {
            category,
            checkbox_id: category.checkbox_id(),
            icon: category.icon_path(),
            label: category.label(),
            checked: filter.is_checked(category),
        })
        .collect();

    Legend {
        heading: LEGEND_HEADING,
        entries,
    }
}
