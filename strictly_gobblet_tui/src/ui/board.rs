//! Board and reserve rendering at the engine's own coordinates.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_gobblet::{Anchor, Cell, CellView, GameView, Geometry, PieceInfo, Player, Point};

/// Renders both reserves and the 3x3 board.
pub fn render_board(f: &mut Frame, area: Rect, geometry: &Geometry, view: &GameView) {
    let selected = view.selection.map(|s| s.anchor);

    for player in [Player::A, Player::B] {
        let center = geometry.reserve_center(player, 0);
        let (_, row) = to_terminal(center);
        let label = Paragraph::new(format!("{}:", label(player))).style(player_style(player));
        render_clipped(f, area, Rect::new(0, row, 2, 1), label);

        for (slot, piece) in &view.reserve(player).pieces {
            let highlight = selected == Some(Anchor::Reserve { player, slot: *slot });
            let (x, y) = to_terminal(geometry.reserve_center(player, *slot));
            render_glyph(f, area, x, y, piece, highlight);
        }
    }

    for cell in Cell::ALL {
        render_square(f, area, geometry, view.cell(cell), selected == Some(Anchor::Board(cell)));
    }
}

fn render_square(f: &mut Frame, area: Rect, geometry: &Geometry, cell: &CellView, highlight: bool) {
    let half = geometry.square_size / 2.0;
    let center = geometry.cell_center(cell.cell);
    let (left, top) = to_terminal(Point::new(center.x - half, center.y - half));
    let (right, bottom) = to_terminal(Point::new(center.x + half, center.y + half));
    let outline = Rect::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top));
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    render_clipped(f, area, outline, border);

    let Some(piece) = cell.top else {
        return;
    };
    let (x, y) = to_terminal(center);
    render_glyph(f, area, x, y, &piece, highlight);
    if cell.depth > 1 {
        let depth = Paragraph::new(format!("x{}", cell.depth))
            .style(Style::default().fg(Color::DarkGray));
        render_clipped(f, area, Rect::new(x, y + 1, 3, 1), depth);
    }
}

fn render_glyph(f: &mut Frame, area: Rect, x: u16, y: u16, piece: &PieceInfo, highlight: bool) {
    let mut style = player_style(piece.owner).add_modifier(Modifier::BOLD);
    if highlight {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let glyph = Paragraph::new(piece.size.glyph().to_string()).style(style);
    render_clipped(f, area, Rect::new(x, y, 1, 1), glyph);
}

fn render_clipped<W: ratatui::widgets::Widget>(f: &mut Frame, area: Rect, rect: Rect, widget: W) {
    let rect = rect.intersection(area);
    if !rect.is_empty() {
        f.render_widget(widget, rect);
    }
}

fn player_style(player: Player) -> Style {
    match player {
        Player::A => Style::default().fg(Color::Blue),
        Player::B => Style::default().fg(Color::Red),
    }
}

fn label(player: Player) -> char {
    match player {
        Player::A => 'A',
        Player::B => 'B',
    }
}

/// Terminal cell containing engine point `point`.
fn to_terminal(point: Point) -> (u16, u16) {
    (point.x.max(0.0) as u16, (point.y / 2.0).max(0.0) as u16)
}
