//! Models: registry with version, status and last validation

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

pub struct ModelsScreen<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
    focused: bool,
}

impl<'a> ModelsScreen<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet, focused: bool) -> Self {
        Self {
            catalog,
            icons,
            focused,
        }
    }

    fn model_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.catalog
            .models
            .iter()
            .flat_map(|model| {
                let mut lines = entry_lines(
                    vec![entry_title(&model.name, (width as usize).saturating_sub(24))],
                    None,
                    buttons(&["Open", "Validate"]),
                    width,
                );
                lines.insert(
                    1,
                    Line::from(vec![
                        Span::styled(format!("v{}", model.version), styles::text_muted()),
                        Span::styled(DOT, styles::text_muted()),
                        Span::styled(
                            model.status.as_str(),
                            styles::model_status_style(model.status),
                        ),
                    ]),
                );
                let validation = &model.last_validation;
                lines.insert(
                    lines.len() - 1,
                    Line::from(vec![styles::badge(
                        &format!(
                            "Last validation: {}{}{}",
                            validation.status.as_str(),
                            DOT,
                            validation.at
                        ),
                        styles::validation_style(validation.status),
                    )]),
                );
                lines
            })
            .collect()
    }
}

impl Widget for ModelsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Models)
            .action(&format!("{} New model", self.icons.plus()))
            .render(head, buf);

        let lines = self.model_lines(body.width.saturating_sub(2));
        render_card(body, buf, "Model registry", self.focused, lines);
    }
}

impl CardScreen for ModelsScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        ScreenHeader::HEIGHT.saturating_add(card_height(&self.model_lines(inner), inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_models_with_validation() {
        let catalog = Catalog::seeded();
        let mut term = TestTerminal::wide();
        term.render_widget(ModelsScreen::new(&catalog, IconSet::default(), false), term.area());

        assert!(term.line_contains(0, "New model"));
        assert!(term.buffer_contains("Lease Risk Model"));
        assert!(term.buffer_contains("v3 • ACTIVE"));
        assert!(term.buffer_contains("[Last validation: FAIL • 2026-02-20 09:15]"));
        assert!(term.buffer_contains("[Last validation: PASS • 2026-02-19 18:40]"));
    }

    #[test]
    fn test_model_status_is_colored() {
        let catalog = Catalog::seeded();
        let mut term = TestTerminal::wide();
        term.render_widget(ModelsScreen::new(&catalog, IconSet::default(), false), term.area());

        let buffer = term.buffer();
        let row = (0..buffer.area.height)
            .find(|y| term.line_contains(*y, "v3 • ACTIVE"))
            .expect("status row");
        let x = (0..buffer.area.width)
            .find(|x| buffer[(*x, row)].symbol() == "A")
            .expect("status text");
        assert_eq!(buffer[(x, row)].fg, crate::theme::palette::STATUS_GREEN);
    }
}
