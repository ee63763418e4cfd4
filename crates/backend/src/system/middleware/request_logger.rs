use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог метод, путь, статус и длительность (ms).
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration = start.elapsed().as_millis();

    // Ошибки клиента и сервера выделяем уровнем warn
    if status >= 400 {
        tracing::warn!("{} {:>6} {} | {:>5}ms", status, method, uri.path(), duration);
    } else {
        tracing::info!("{} {:>6} {} | {:>5}ms", status, method, uri.path(), duration);
    }

    response
}
