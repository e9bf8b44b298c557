use std::io::Cursor;

use http_body_util::BodyExt;
use micro_adaptor::protocol::{AdaptError, ReqBody};
use micro_adaptor::{adapt, adapt_with_engine, to_compat, EngineConfig};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

type External = http::Request<Option<Cursor<Vec<u8>>>>;

fn external(headers: &[(&str, &str)], body: &[u8]) -> External {
    let mut builder = http::Request::post("/upload").header("Host", "127.0.0.1:8080");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Some(Cursor::new(body.to_vec()))).unwrap()
}

async fn show(name: &str, engine: &EngineConfig, mut req: External) {
    let request = match adapt_with_engine(engine, &mut req).await {
        Ok(request) => request,
        Err(e @ AdaptError::MalformedLength { .. }) => {
            warn!(case = name, cause = %e, "rejecting request");
            return;
        }
        Err(e) => {
            error!(case = name, cause = %e, "unrecoverable, closing connection");
            return;
        }
    };

    info!(case = name, framing = %request.header().framing(), length = ?request.content_length(), "adapted request");

    let (header, body) = request.into_parts();
    let shape = match &body {
        ReqBody::InMemory(_) => "in-memory",
        ReqBody::Stream(_) => "stream",
        ReqBody::Suppressed => "suppressed",
    };
    let bytes = body.collect().await.unwrap().to_bytes();
    info!(case = name, shape, body = ?bytes, headers = header.headers().len(), "materialized body");
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let body = b"0123456789abcdefghij";
    let default_engine = EngineConfig::default();
    let streaming_engine = EngineConfig::builder().always_stream(true).build();

    show("fixed", &default_engine, external(&[("Content-Length", "10")], body)).await;
    show("length_then_chunked", &default_engine, external(&[("Content-Length", "10"), ("Transfer-Encoding", "chunked")], body)).await;
    show("chunked_then_length", &default_engine, external(&[("Transfer-Encoding", "chunked"), ("Content-Length", "10")], body)).await;
    show("malformed", &default_engine, external(&[("Content-Length", "notanumber")], body)).await;
    show("no_framing", &default_engine, external(&[], body)).await;
    show("always_stream", &streaming_engine, external(&[("Content-Length", "10")], body)).await;

    let mut req = external(&[("Content-Length", "5"), ("Accept", "*/*")], body);
    let request = adapt(&mut req).await.unwrap();
    let compat = to_compat(request).await.unwrap();
    info!(method = %compat.method(), uri = %compat.uri(), headers = ?compat.headers(), "compat request");
}
