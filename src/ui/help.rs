use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

// Help section definitions
pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Navigation:",
        items: &[
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("g  ", "Go to top"),
            ("G  ", "Go to bottom"),
            ("⇥  ", "Switch floor/cart panel"),
        ],
    },
    HelpSection {
        title: "Cart:",
        items: &[
            ("⏎/␣", "Add booth (floor) or remove item (cart)"),
            ("a  ", "Add highlighted booth"),
            ("d/x", "Remove highlighted item"),
            ("c  ", "Clear cart"),
            ("clk", "Click [Add], [Remove] or [Clear cart]"),
        ],
    },
    HelpSection {
        title: "General:",
        items: &[("?  ", "Help"), ("q  ", "Quit")],
    },
];

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help_text = Self::build_help_text();
        let block = Block::default().borders(Borders::ALL).title(" Help ");
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![Span::styled(
                "booth-cart Help",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        for section in SECTIONS {
            lines.push(Line::from(vec![Span::styled(
                section.title,
                Style::default().add_modifier(Modifier::BOLD),
            )]));

            for (key, desc) in section.items {
                lines.push(Line::from(format!("  {}  {}", key, desc)));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }
}
