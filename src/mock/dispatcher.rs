use std::sync::atomic::{AtomicU64, Ordering};

use http::StatusCode;
use reqwest::Method;
use serde_json::Value;

/// Counter wraps at 2^53, the largest range a JS consumer of the recorded
/// tick values could represent exactly.
const COUNTER_MODULUS: u64 = 1 << 53;

/// One canned response: a JSON body and the status it is served with.
#[derive(Debug, Clone)]
pub struct ResponseVariant {
    pub body: Value,
    pub status: StatusCode,
}

impl ResponseVariant {
    pub fn ok(body: Value) -> Self {
        Self {
            body,
            status: StatusCode::OK,
        }
    }

    pub fn with_status(body: Value, status: StatusCode) -> Self {
        Self { body, status }
    }
}

struct MockRoute {
    method: Method,
    template: String,
    variants: Vec<ResponseVariant>,
}

/// Route table with a single shared dispatch counter.
///
/// Every dispatch advances the counter by one; the route served gets
/// `variants[counter % variants.len()]`. Calling one route N times in a row
/// (N = variant count) therefore serves each variant exactly once, in
/// registration order, before repeating.
pub struct MockDispatcher {
    routes: Vec<MockRoute>,
    counter: AtomicU64,
}

impl Default for MockDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            counter: AtomicU64::new(0),
        }
    }

    /// Registers a route. Path templates use `{name}` placeholder segments,
    /// e.g. `/pet/{petId}`.
    ///
    /// Panics if `variants` is empty; a route with no canned responses can
    /// never be served and always indicates a broken mock setup.
    pub fn register(&mut self, method: Method, template: &str, variants: Vec<ResponseVariant>) {
        assert!(
            !variants.is_empty(),
            "mock route {} {} registered without response variants",
            method,
            template
        );
        self.routes.push(MockRoute {
            method,
            template: template.to_string(),
            variants,
        });
    }

    /// Selects the next variant for the first route matching the request,
    /// advancing the shared counter. Returns `None` for unregistered routes
    /// without consuming a tick.
    pub fn dispatch(&self, method: &Method, path: &str) -> Option<ResponseVariant> {
        let route = self
            .routes
            .iter()
            .find(|route| route.method == *method && template_matches(&route.template, path))?;

        let tick = self.tick();
        let variant = &route.variants[(tick % route.variants.len() as u64) as usize];
        log::debug!(
            "mock dispatch {} {} -> {} (tick {})",
            method,
            path,
            variant.status,
            tick
        );
        Some(variant.clone())
    }

    /// Current counter value, i.e. the tick the next dispatch will use.
    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub(crate) fn set_counter(&self, value: u64) {
        self.counter.store(value, Ordering::SeqCst);
    }

    fn tick(&self) -> u64 {
        let result = self.counter.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
            Some((n + 1) % COUNTER_MODULUS)
        });
        match result {
            Ok(previous) | Err(previous) => previous,
        }
    }
}

/// Segment-wise template match; `{name}` segments match any non-empty
/// concrete segment.
fn template_matches(template: &str, path: &str) -> bool {
    let template_segments: Vec<&str> = template.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    if template_segments.len() != path_segments.len() {
        return false;
    }
    template_segments
        .iter()
        .zip(&path_segments)
        .all(|(template_segment, path_segment)| {
            if template_segment.starts_with('{') && template_segment.ends_with('}') {
                !path_segment.is_empty()
            } else {
                template_segment == path_segment
            }
        })
}
