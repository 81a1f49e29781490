use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use crawler::{ClientConfig, XkcdClient};
use tokio::net::TcpListener;
use xkcd_core::{DocumentSource, IndexBuilder, IndexState};

async fn comic(Path(num): Path<u32>) -> Response {
    match num {
        1 => Json(serde_json::json!({
            "num": 1,
            "title": "Barrel - Part 1",
            "safe_title": "Barrel - Part 1",
            "transcript": "[[A boy sits in a barrel which is floating in an ocean.]]\nBoy: I wonder where I'll float next?\n{{Alt: Don't we all.}}",
        }))
        .into_response(),
        2 => Json(serde_json::json!({ "num": 2, "transcript": "Caption without brackets" })).into_response(),
        3 => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        4 => "not json".into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve() -> String {
    let app = Router::new().route("/:num/info.0.json", get(comic));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn client() -> XkcdClient {
    let config = ClientConfig { base_url: serve().await, ..Default::default() };
    XkcdClient::new(&config).unwrap()
}

#[tokio::test]
async fn found_comic_yields_transcript() {
    let c = client().await;
    let transcript = c.fetch(1).await.unwrap().unwrap();
    assert!(transcript.starts_with("[[A boy sits"));
    let comic = c.comic(1).await.unwrap().unwrap();
    assert_eq!(comic.safe_title, "Barrel - Part 1");
}

#[tokio::test]
async fn not_found_is_none() {
    assert!(client().await.fetch(99).await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_and_bad_json_are_errors() {
    let c = client().await;
    let err = c.fetch(3).await.unwrap_err();
    assert!(format!("{err:#}").contains("500"));
    assert!(c.fetch(4).await.is_err());
}

#[tokio::test]
async fn build_pass_over_http_source_stops_at_first_failure() {
    let c = client().await;
    let err = IndexBuilder::new(&c).run(IndexState::default()).await.unwrap_err();
    assert!(err.to_string().contains("document 3"));
}
