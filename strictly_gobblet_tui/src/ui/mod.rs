//! Screen rendering.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

pub use board::render_board;

/// Draws one frame.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let view = app.game().view();

    let title = Paragraph::new(view.status_line())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(title, Rect::new(area.x, area.y, area.width, 1));

    render_board(f, area, app.geometry(), &view);

    let footer_y = area.bottom().saturating_sub(2);
    let message = Paragraph::new(app.status_message());
    f.render_widget(message, Rect::new(area.x, footer_y, area.width, 1).intersection(area));
    let help = Paragraph::new("Click a piece, then a square. 'r' restart, 'q' quit.")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, Rect::new(area.x, footer_y + 1, area.width, 1).intersection(area));
}
