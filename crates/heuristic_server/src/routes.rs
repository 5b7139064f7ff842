//! HTTP routes for the game page.
//!
//! `GET /` starts a new game; `POST /` evaluates a re-submitted board.
//! No game state lives on the server between requests.

use crate::board_view::render_board;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::form::parse_board;
use crate::view::{Page, escape};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use heuristic_tictactoe::{Submission, Turn, evaluate};
use std::sync::Arc;
use tracing::{debug, info, instrument};

const STYLE: &str = "
table {
    font-size: bigger;
    width: 10em;
    height: 10em;
    border: 1px solid black;
}
.status {
    background-color: lightyellow;
}
.restart {
    background-color: silver;
}
.winner {
    background-color: green;
}
";

/// Read-only state shared by all handlers.
#[derive(Debug, Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

/// Builds the application router.
#[instrument(skip(config))]
pub fn router(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/", get(new_game).post(resubmit))
        .with_state(state)
}

#[instrument(skip(state))]
async fn new_game(State(state): State<AppState>) -> Html<String> {
    debug!("Starting new game");
    Html(respond(&state.config, &Submission::fresh()))
}

#[instrument(skip(state, pairs), fields(pairs = pairs.len()))]
async fn resubmit(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let raw = parse_board(state.config.field_name(), &pairs);
    Html(respond(&state.config, &Submission::from_board(raw)))
}

fn respond(config: &ServerConfig, submission: &Submission) -> String {
    let turn = evaluate(submission);
    render_page(config, &turn)
}

/// Renders the full page for a turn.
pub fn render_page(config: &ServerConfig, turn: &Turn) -> String {
    Page::new()
        .title(config.title())
        .style(STYLE)
        .form("/", "post", render_board(turn, config.field_name()))
        .div("status", escape(&turn.message()))
        .div("restart", r#"<a href="/">Restart</a>"#)
        .render()
}

/// Binds to the configured address and serves until the process stops.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .map_err(|e| {
            ServerError::new(format!(
                "Failed to bind {}:{}: {}",
                config.host(),
                config.port(),
                e
            ))
        })?;

    info!("Server ready at http://{}:{}/", config.host(), config.port());
    axum::serve(listener, router(config)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heuristic_tictactoe::RawBoard;

    #[test]
    fn test_page_sections_in_order() {
        let config = ServerConfig::default();
        let html = render_page(&config, &evaluate(&Submission::fresh()));

        let title = html.find("<title>Tic-Tac-Toe</title>").unwrap();
        let form = html.find(r#"<form action="/" method="post"><table>"#).unwrap();
        let status = html
            .find(r#"<div class="status">Your turn ...</div>"#)
            .unwrap();
        let restart = html
            .find(r#"<div class="restart"><a href="/">Restart</a></div>"#)
            .unwrap();
        assert!(title < form && form < status && status < restart);
        assert!(html.contains(".winner {"));
    }

    #[test]
    fn test_page_reports_stale_game() {
        let mut raw = RawBoard::new();
        for (row, col, v) in [
            (0, 0, 1i64),
            (0, 1, -1),
            (0, 2, 1),
            (1, 0, 1),
            (1, 1, -1),
            (2, 0, -1),
            (2, 1, 1),
        ] {
            raw.insert(row, col, v);
        }
        let html = render_page(
            &ServerConfig::default(),
            &evaluate(&Submission::from_board(raw)),
        );
        assert!(html.contains(r#"<div class="status">Stale game!</div>"#));
        assert!(html.contains(r#"disabled="true""#));
    }
}
