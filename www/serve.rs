use folio_deps::{
	http,
	hyper::{self, Body},
	tokio,
};
use std::{
	convert::Infallible,
	net::{IpAddr, SocketAddr},
	path::{Component, Path, PathBuf},
	sync::Arc,
};

/// Serve the files under `dir`. Directory paths get their `index.html`.
pub async fn serve(dir: PathBuf, host: IpAddr, port: u16) -> hyper::Result<()> {
	let dir = Arc::new(dir);
	let service = hyper::service::make_service_fn(|_| {
		let dir = dir.clone();
		async move {
			Ok::<_, Infallible>(hyper::service::service_fn(move |request| {
				let dir = dir.clone();
				async move { Ok::<_, Infallible>(handle(&dir, request).await) }
			}))
		}
	});
	let addr = SocketAddr::new(host, port);
	let server = hyper::Server::try_bind(&addr)?;
	tracing::info!(dir = %dir.display(), "serving on http://{}", addr);
	server.serve(service).await
}

async fn handle(dir: &Path, request: http::Request<Body>) -> http::Response<Body> {
	let method = request.method().clone();
	let path = request.uri().path().to_owned();
	let response = if method != http::Method::GET && method != http::Method::HEAD {
		status_response(http::StatusCode::METHOD_NOT_ALLOWED)
	} else {
		match resolve_path(dir, &path) {
			Some(file_path) => match tokio::fs::read(&file_path).await {
				Ok(bytes) => file_response(&file_path, bytes),
				Err(_) => status_response(http::StatusCode::NOT_FOUND),
			},
			None => status_response(http::StatusCode::NOT_FOUND),
		}
	};
	tracing::info!("{} {} {}", method, path, response.status().as_u16());
	response
}

/// Map a request path to a file under `dir`. Paths that would leave `dir` resolve to nothing.
pub fn resolve_path(dir: &Path, path: &str) -> Option<PathBuf> {
	let relative = Path::new(path.trim_start_matches('/'));
	let mut file_path = dir.to_owned();
	for component in relative.components() {
		match component {
			Component::Normal(component) => file_path.push(component),
			Component::CurDir => {}
			_ => return None,
		}
	}
	if path.ends_with('/') || file_path.is_dir() {
		file_path.push("index.html");
	}
	Some(file_path)
}

pub fn content_type(path: &Path) -> &'static str {
	match path.extension().and_then(|extension| extension.to_str()) {
		Some("html") => "text/html; charset=utf-8",
		Some("css") => "text/css",
		Some("js") => "text/javascript",
		Some("wasm") => "application/wasm",
		Some("json") => "application/json",
		Some("svg") => "image/svg+xml",
		Some("png") => "image/png",
		Some("jpg") | Some("jpeg") => "image/jpeg",
		Some("ico") => "image/x-icon",
		Some("pdf") => "application/pdf",
		_ => "application/octet-stream",
	}
}

fn file_response(path: &Path, bytes: Vec<u8>) -> http::Response<Body> {
	let mut response = http::Response::new(Body::from(bytes));
	response.headers_mut().insert(
		http::header::CONTENT_TYPE,
		http::HeaderValue::from_static(content_type(path)),
	);
	response
}

fn status_response(status: http::StatusCode) -> http::Response<Body> {
	let mut response = http::Response::new(Body::empty());
	*response.status_mut() = status;
	response
}

#[test]
fn test_resolve_path() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::create_dir(dir.path().join("pkg")).unwrap();
	assert_eq!(
		resolve_path(dir.path(), "/"),
		Some(dir.path().join("index.html"))
	);
	assert_eq!(
		resolve_path(dir.path(), "/aboutme.html"),
		Some(dir.path().join("aboutme.html"))
	);
	assert_eq!(
		resolve_path(dir.path(), "/pkg"),
		Some(dir.path().join("pkg").join("index.html"))
	);
	assert_eq!(
		resolve_path(dir.path(), "/./pkg/folio_client_bg.wasm"),
		Some(dir.path().join("pkg").join("folio_client_bg.wasm"))
	);
	assert_eq!(resolve_path(dir.path(), "/../secret"), None);
	assert_eq!(resolve_path(dir.path(), "/pkg/../../secret"), None);
}

#[test]
fn test_content_type() {
	assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
	assert_eq!(content_type(Path::new("pkg/folio_client_bg.wasm")), "application/wasm");
	assert_eq!(content_type(Path::new("README")), "application/octet-stream");
}

#[tokio::test]
async fn test_handle() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("index.html"), "<p>home</p>").unwrap();
	let request = http::Request::get("/").body(Body::empty()).unwrap();
	let response = handle(dir.path(), request).await;
	assert_eq!(response.status(), http::StatusCode::OK);
	assert_eq!(
		response.headers()[http::header::CONTENT_TYPE],
		"text/html; charset=utf-8"
	);
	let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
	assert_eq!(&body[..], b"<p>home</p>");
	let request = http::Request::get("/missing.html").body(Body::empty()).unwrap();
	assert_eq!(
		handle(dir.path(), request).await.status(),
		http::StatusCode::NOT_FOUND
	);
	let request = http::Request::post("/").body(Body::empty()).unwrap();
	assert_eq!(
		handle(dir.path(), request).await.status(),
		http::StatusCode::METHOD_NOT_ALLOWED
	);
}
