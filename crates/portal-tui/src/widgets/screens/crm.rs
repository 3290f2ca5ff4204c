//! CRM: flat entity list

use portal_app::NavKey;
use portal_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::{entry_lines, entry_title, header, split_header, CardScreen};
use crate::theme::{icons::IconSet, styles};
use crate::widgets::common::{buttons, card_height, render_card, ScreenHeader, DOT};

pub struct CrmScreen<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
    focused: bool,
}

impl<'a> CrmScreen<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet, focused: bool) -> Self {
        Self {
            catalog,
            icons,
            focused,
        }
    }

    fn entity_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.catalog
            .crm
            .iter()
            .flat_map(|entity| {
                let title = vec![
                    styles::badge(entity.entity_type.as_str(), styles::text_secondary()),
                    Span::raw(" "),
                    entry_title(&entity.name, (width as usize).saturating_sub(24)),
                ];
                let meta = format!(
                    "{}{}updated {}",
                    entity.tags.join(DOT),
                    DOT,
                    entity.last_updated
                );
                entry_lines(title, Some(meta), buttons(&["Open"]), width)
            })
            .collect()
    }
}

impl Widget for CrmScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Crm)
            .action(&format!("{} New entity", self.icons.plus()))
            .render(head, buf);

        let lines = self.entity_lines(body.width.saturating_sub(2));
        render_card(body, buf, "Entities", self.focused, lines);
    }
}

impl CardScreen for CrmScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        ScreenHeader::HEIGHT.saturating_add(card_height(&self.entity_lines(inner), inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_entities_with_tags() {
        let catalog = Catalog::seeded();
        let mut term = TestTerminal::wide();
        term.render_widget(CrmScreen::new(&catalog, IconSet::default(), false), term.area());

        assert!(term.line_contains(0, "New entity"));
        assert!(term.buffer_contains("[COMPANY] RiskCo"));
        assert!(term.buffer_contains("[ASSET] Riverside Office"));
        assert!(term.buffer_contains("vendor • security • updated 2026-02-18 12:03"));
    }
}
