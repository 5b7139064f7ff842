//! Web front end for the heuristic tic-tac-toe engine.
//!
//! Serves a single HTML page whose form carries the whole board. Every
//! submission is decoded, handed to the engine, and rendered back out;
//! the server itself keeps no game state.
//!
//! # Architecture
//!
//! - **Config**: [`ServerConfig`] from TOML with defaults
//! - **Form**: [`parse_board`] decodes `game[row][col]` fields
//! - **View**: [`Page`] builder and [`render_board`] table markup
//! - **Routes**: [`router`] and [`serve`] on axum

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod config;
mod error;
mod form;
mod routes;
mod view;

pub use board_view::render_board;
pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;
pub use form::{cell_field, parse_board};
pub use routes::{render_page, router, serve};
pub use view::{Page, escape};
