use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
struct Window {
    started: Instant,
    hits: u32,
}

/// Fixed one-second window shared by the whole API surface.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    rps: u32,
    window: Arc<Mutex<Window>>,
}

impl RateLimiter {
    fn new(rps: u32) -> Self {
        Self {
            rps: rps.max(1),
            window: Arc::new(Mutex::new(Window {
                started: Instant::now(),
                hits: 0,
            })),
        }
    }

    fn try_acquire(&self) -> bool {
        let mut window = self.window.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();
        if now.duration_since(window.started) >= Duration::from_secs(1) {
            window.started = now;
            window.hits = 0;
        }
        if window.hits < self.rps {
            window.hits += 1;
            true
        } else {
            false
        }
    }
}

pub async fn rps_middleware(
    State(state): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.try_acquire() {
        return (StatusCode::TOO_MANY_REQUESTS, "rate_limit_exceeded").into_response();
    }
    next.run(req).await
}

pub fn new_rps_state(rps: u32) -> RateLimiter {
    RateLimiter::new(rps)
}
