//! HTTP middleware for Axum.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use tower::{Layer, Service};

use super::metrics::{HttpLabels, HttpLabelsWithStatus, HttpMethod, Metrics};

/// Layer that wraps services with metrics collection.
#[derive(Clone)]
pub struct MetricsLayer {
    metrics: Arc<Metrics>,
}

impl MetricsLayer {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }
}

impl<S> Layer<S> for MetricsLayer {
    type Service = MetricsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MetricsService {
            inner,
            metrics: self.metrics.clone(),
        }
    }
}

/// Service that records the request counter, latency histogram, and
/// in-flight gauge for every request.
#[derive(Clone)]
pub struct MetricsService<S> {
    inner: S,
    metrics: Arc<Metrics>,
}

impl<S, ResBody> Service<Request<Body>> for MetricsService<S>
where
    S: Service<Request<Body>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ResBody: Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let method = HttpMethod::from(request.method());
        let endpoint = request.uri().path().to_string();
        let metrics = self.metrics.clone();

        metrics.http_requests_in_flight.inc();
        let start = Instant::now();
        let future = self.inner.call(request);

        Box::pin(async move {
            let result = future.await;
            metrics.http_requests_in_flight.dec();

            metrics
                .http_request_duration_seconds
                .get_or_create(&HttpLabels {
                    method: method.clone(),
                    endpoint: endpoint.clone(),
                })
                .observe(start.elapsed().as_secs_f64());

            let response = result?;
            metrics
                .http_requests_total
                .get_or_create(&HttpLabelsWithStatus {
                    method,
                    endpoint,
                    status: response.status().as_u16(),
                })
                .inc();

            Ok(response)
        })
    }
}

/// Layer that wraps services with request tracing.
#[derive(Clone)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

/// Service that logs HTTP requests and responses at debug level.
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S, ResBody> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ResBody: Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let http_method = request.method().clone();
        let uri = request.uri().clone();

        tracing::debug!(method = %http_method, uri = %uri, "HTTP request received");

        let start_time = Instant::now();
        let future = self.inner.call(request);

        Box::pin(async move {
            let response = future.await?;
            let status = response.status().as_u16();
            let elapsed = start_time.elapsed();

            tracing::debug!(
                method = %http_method,
                uri = %uri,
                status = %status,
                duration_ms = %elapsed.as_millis(),
                "HTTP request completed"
            );

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;
    use tower::service_fn;

    #[tokio::test]
    async fn should_record_request_metrics() {
        // given - a test service that returns 200 OK
        let test_service = service_fn(|_req: Request<Body>| async {
            Ok::<_, std::convert::Infallible>(
                Response::builder().status(200).body(Body::empty()).unwrap(),
            )
        });
        let metrics = Arc::new(Metrics::new());
        let mut service = MetricsService {
            inner: test_service,
            metrics: metrics.clone(),
        };

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/v1/log/stats")
            .body(Body::empty())
            .unwrap();

        // when
        let response = service.call(request).await.unwrap();

        // then
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(metrics.http_requests_in_flight.get(), 0);
        let encoded = metrics.encode();
        assert!(encoded.contains("http_requests_total"));
    }

    #[tokio::test]
    async fn should_log_request_and_response_with_tracing_middleware() {
        let test_service = service_fn(|_req: Request<Body>| async {
            Ok::<_, std::convert::Infallible>(
                Response::builder().status(200).body(Body::empty()).unwrap(),
            )
        });

        let mut service = TracingService {
            inner: test_service,
        };

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/v1/log/entries?limit=10")
            .body(Body::empty())
            .unwrap();

        let response = service.call(request).await.unwrap();

        assert_eq!(response.status().as_u16(), 200);
    }
}
