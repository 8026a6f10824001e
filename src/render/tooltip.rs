//! Tooltip-Inhalt eines Markers.
//!
//! Reine Funktion des Records: Kategorie-Icon und -Label immer, Titel,
//! Bild und Text jeweils nur wenn vorhanden. Fehlende Felder erzeugen
//! keinen leeren Block.

use super::html::escape;
use crate::core::{MarkerCategory, MarkerRecord};
use crate::shared::options::{TOOLTIP_ICON_HEIGHT_PX, TOOLTIP_ICON_WIDTH_PX};
use std::fmt::Write;

/// Ein Abschnitt des Tooltips, in Anzeigereihenfolge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipSection {
    /// Kategorie-Icon
    CategoryIcon { src: &'static str },
    /// Großgeschriebenes Kategorie-Label
    CategoryLabel(&'static str),
    /// Überschrift
    Title(String),
    /// Bild-Container
    Image { src: String },
    /// Fließtext-Container
    Body(String),
}

/// Strukturierter Tooltip-Inhalt; `to_html` liefert das Markup fürs SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub category: MarkerCategory,
    pub sections: Vec<TooltipSection>,
}

impl Tooltip {
    /// Rendert den Tooltip als HTML-Fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            // write! auf String kann nicht fehlschlagen
            let _ = match section {
                TooltipSection::CategoryIcon { src } => write!(
                    out,
                    "<img src=\"{}\" class=\"category-icon\" width=\"{}px\" height=\"{}px\" />",
                    escape(src),
                    TOOLTIP_ICON_WIDTH_PX,
                    TOOLTIP_ICON_HEIGHT_PX
                ),
                TooltipSection::CategoryLabel(label) => write!(out, "{}", escape(label)),
                TooltipSection::Title(title) => write!(out, "<h1>{}</h1>", escape(title)),
                TooltipSection::Image { src } => write!(
                    out,
                    "<div class=\"tooltip-image\"><img src=\"{}\" /></div>",
                    escape(src)
                ),
                TooltipSection::Body(body) => {
                    write!(out, "<div class=\"tooltip-body\">{}</div>", escape(body))
                }
            };
        }
        out
    }

    pub fn title(&self) -> Option<&str> {
        self.sections.iter().find_map(|s| match s {
            TooltipSection::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }
}

/// Baut den Tooltip-Inhalt für einen Record.
pub fn render_tooltip(record: &MarkerRecord) -> Tooltip {
    let category = record.category();
    let mut sections = vec![
        TooltipSection::CategoryIcon {
            src: category.icon_path(),
        },
        TooltipSection::CategoryLabel(category.label()),
    ];

    if let Some(title) = record.title() {
        sections.push(TooltipSection::Title(title.to_string()));
    }
    if let Some(image) = record.image() {
        sections.push(TooltipSection::Image {
            src: image.to_string(),
        });
    }
    if let Some(body) = record.body() {
        sections.push(TooltipSection::Body(body.to_string()));
    }

    Tooltip { category, sections }
}
