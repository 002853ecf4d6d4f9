/**
 * CORS Middleware
 *
 * Builds the Cross-Origin Resource Sharing layer from `CorsConfig`.
 *
 * A list containing `*` allows anything for that dimension. Credentials are
 * only advertised when origins, methods and headers are all explicit lists,
 * since browsers refuse credentialed responses with wildcard values.
 */

use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::backend::server::config::CorsConfig;

/// How long browsers may cache a preflight answer
pub const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

fn is_wildcard(values: &[String]) -> bool {
    values.is_empty() || values.iter().any(|value| value == "*")
}

/// Configure CORS settings for the blog API
///
/// # Examples
///
/// ```bash
/// # Allow all origins (development)
/// export ALLOWED_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export ALLOWED_ORIGINS="https://blog.example.com,https://admin.example.com"
/// ```
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let any_origin = is_wildcard(&config.allowed_origins);
    let any_method = is_wildcard(&config.allowed_methods);
    let any_header = is_wildcard(&config.allowed_headers);

    let allow_origin = if any_origin {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    let allow_methods = if any_method {
        AllowMethods::any()
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|method| match Method::from_bytes(method.to_uppercase().as_bytes()) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS method: {}", method);
                    None
                }
            })
            .collect();
        AllowMethods::list(methods)
    };

    let allow_headers = if any_header {
        AllowHeaders::any()
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|name| match HeaderName::from_bytes(name.to_lowercase().as_bytes()) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS header: {}", name);
                    None
                }
            })
            .collect();
        AllowHeaders::list(headers)
    };

    let layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(allow_methods)
        .allow_headers(allow_headers)
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(PREFLIGHT_MAX_AGE);

    if any_origin || any_method || any_header {
        layer
    } else {
        layer.allow_credentials(true)
    }
}
