//! Board table markup.

use crate::form::cell_field;
use crate::view::escape;
use heuristic_tictactoe::{Board, Coord, GRID_SIZE, Player, Turn};
use tracing::instrument;

/// Renders the board as a table of cells.
///
/// Occupied squares show their marker and echo the value back in a hidden
/// input. Free squares are checkboxes that submit the form on click and
/// are disabled once the turn is closed. Squares on the winning line get
/// the `winner` class.
#[instrument(skip(turn), fields(status = %turn.status()))]
pub fn render_board(turn: &Turn, field_name: &str) -> String {
    let board = turn.board();
    let line = turn.winning_line();
    let mut html = String::from("<table>");

    for row in 0..GRID_SIZE {
        html.push_str("<tr>");
        for col in 0..GRID_SIZE {
            let Some(at) = Coord::new(row, col) else {
                continue;
            };
            let class = if line.is_some_and(|l| l.contains(at)) {
                "cell winner"
            } else {
                "cell"
            };
            html.push_str(&format!(
                r#"<td class="{}">{}</td>"#,
                class,
                cell_html(board, at, field_name, turn.closed())
            ));
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}

fn cell_html(board: &Board, at: Coord, field_name: &str, closed: bool) -> String {
    let name = escape(&cell_field(field_name, at.row(), at.col()));
    let cell = board.get(at);
    match cell.player() {
        Some(player) => format!(
            r#"<b>{}</b><input type="hidden" name="{}" value="{}" />"#,
            player.marker(),
            name,
            cell.value()
        ),
        None => format!(
            r#"<input type="checkbox" name="{}" value="{}" onclick="this.form.submit()" {}/>"#,
            name,
            Player::Human.value(),
            if closed { r#"disabled="true" "# } else { "" }
        ),
    }
}
