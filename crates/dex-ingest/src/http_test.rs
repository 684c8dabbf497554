use super::*;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

async fn entity(Path(id): Path<u32>) -> (StatusCode, String) {
    match id {
        25 => (
            StatusCode::OK,
            r#"{"name":"pikachu","height":4,"weight":60,
                "sprites":{"front_default":"https://img.example/25.png"},
                "stats":[{"base_stat":90,"stat":{"name":"speed"}}],
                "types":[{"slot":1,"type":{"name":"electric"}}]}"#
                .to_string(),
        ),
        500 => (StatusCode::OK, "not json".to_string()),
        _ => (StatusCode::NOT_FOUND, "Not Found".to_string()),
    }
}

/// Serve a fake API on an ephemeral port and return its base URL.
async fn fake_api() -> String {
    let app = Router::new().route("/pokemon/{id}", get(entity));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/pokemon/")
}

fn source(base_url: String) -> HttpSource {
    HttpSource::new(&ApiConfig {
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_decodes_payload() {
    let source = source(fake_api().await);
    let payload = source.fetch(25).await.unwrap();
    let record = payload.into_record(25, 1).unwrap();
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.stats.speed, Some(90));
    assert_eq!(record.types.len(), 1);
}

#[tokio::test]
async fn test_not_found_is_status_error() {
    let source = source(fake_api().await);
    let err = source.fetch(9999).await.unwrap_err();
    match err {
        IngestError::Status { id, status, url } => {
            assert_eq!(id, 9999);
            assert_eq!(status, 404);
            assert!(url.ends_with("/pokemon/9999"));
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn test_bad_body_is_decode_error() {
    let source = source(fake_api().await);
    let err = source.fetch(500).await.unwrap_err();
    assert!(matches!(err, IngestError::Decode { id: 500, .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = source(format!("http://{addr}"));
    let err = source.fetch(1).await.unwrap_err();
    assert!(matches!(err, IngestError::Fetch { id: 1, .. }));
    assert!(err.to_string().starts_with("[I001]"));
}

#[test]
fn test_describe_is_base_url() {
    let source = source("https://pokeapi.co/api/v2/pokemon".to_string());
    assert_eq!(source.describe(), "https://pokeapi.co/api/v2/pokemon");
}

/// Serve a fake API whose every response is slower than one second.
async fn slow_api() -> String {
    let app = Router::new().route(
        "/pokemon/{id}",
        get(|Path(id): Path<u32>| async move {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            entity(Path(id)).await
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/pokemon")
}

fn impatient_source(base_url: String) -> HttpSource {
    HttpSource::new(&ApiConfig {
        base_url,
        timeout_secs: 1,
    })
    .unwrap()
}

#[tokio::test]
async fn test_slow_response_is_timeout_fetch_error() {
    let source = impatient_source(slow_api().await);
    let err = source.fetch(25).await.unwrap_err();
    match err {
        IngestError::Fetch { id, source, .. } => {
            assert_eq!(id, 25);
            assert!(source.is_timeout(), "expected timeout, got {source}");
        }
        other => panic!("expected fetch error, got {other}"),
    }
}

#[tokio::test]
async fn test_timeout_aborts_band_without_rows() {
    let store = dex_store::StoreDb::open_memory().unwrap();
    let source = impatient_source(slow_api().await);

    let err = crate::Loader::new(&store, &source)
        .load_generation(1, &mut ())
        .await
        .unwrap_err();
    assert!(matches!(err, IngestError::Fetch { id: 1, .. }));

    let rows: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}
