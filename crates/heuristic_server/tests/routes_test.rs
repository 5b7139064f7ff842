//! Round-trip tests for the game page routes.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use heuristic_server::{ServerConfig, router};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

async fn post_form(config: ServerConfig, form: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("request");
    let response = router(config).oneshot(request).await.expect("response");
    let status = response.status();
    (status, body_text(response).await)
}

#[tokio::test]
async fn test_get_starts_new_game() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("request");
    let response = router(ServerConfig::default())
        .oneshot(request)
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<b>X</b><input type="hidden" name="game[1][1]" value="-1" />"#));
    assert!(html.contains(r#"<div class="status">Your turn ...</div>"#));
}

#[tokio::test]
async fn test_post_plays_second_round() {
    // Human checked top left; the machine's center comes back as a hidden field.
    let (status, html) =
        post_form(ServerConfig::default(), "game%5B1%5D%5B1%5D=-1&game%5B0%5D%5B0%5D=1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<b>O</b><input type="hidden" name="game[0][0]" value="1" />"#));
    assert!(html.contains(r#"<b>X</b><input type="hidden" name="game[0][2]" value="-1" />"#));
    assert!(html.contains("Your turn ..."));
}

#[tokio::test]
async fn test_post_human_win_closes_board() {
    let form = "game[0][0]=1&game[0][1]=1&game[0][2]=1&game[1][1]=-1&game[2][0]=-1";
    let (_, html) = post_form(ServerConfig::default(), form).await;

    assert!(html.contains("Human won, completed: row 1"));
    assert_eq!(html.matches("cell winner").count(), 3);
    assert!(html.contains(r#"disabled="true""#));
}

#[tokio::test]
async fn test_post_with_no_cells_matches_new_game() {
    let (_, html) = post_form(ServerConfig::default(), "").await;
    assert!(html.contains(r#"name="game[1][1]" value="-1""#));
    assert_eq!(html.matches(r#"type="checkbox""#).count(), 8);
}

#[tokio::test]
async fn test_post_ignores_junk_fields() {
    let form = "game[1][1]=-1&game[0][0]=1&game[x][0]=1&game[9][9]=1&other=1";
    let (status, html) = post_form(ServerConfig::default(), form).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<b>").count(), 3);
}

#[tokio::test]
async fn test_configured_field_name_and_title() {
    let config = ServerConfig::from_toml("field_name = \"board\"\ntitle = \"Noughts & Crosses\"")
        .expect("config");
    let (_, html) = post_form(config, "board[1][1]=-1&board[2][2]=1").await;

    assert!(html.contains("<title>Noughts &amp; Crosses</title>"));
    assert!(html.contains(r#"name="board[2][2]" value="1""#));
    assert!(html.contains(r#"name="board[0][2]" value="-1""#));
}
