//! Response interception.
//!
//! Every exchange made by [`ApiClient`](crate::ApiClient) is reported to a
//! [`ResponseInterceptor`] before its result reaches the caller. Interceptors
//! observe only: a failed request is handed back to the caller unchanged
//! whatever the interceptor does with it.

use crate::error::RequestError;
use reqwest::Method;
use tracing::{debug, error};

/// Hook invoked once per HTTP exchange.
pub trait ResponseInterceptor: Send + Sync {
    /// Called after a successful (2xx) response.
    fn on_response(&self, _method: &Method, _url: &str, _status: u16) {}

    /// Called after a failed exchange, before the error is returned.
    fn on_error(&self, error: &RequestError);
}

/// Default interceptor: writes failures to the diagnostic log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

impl ResponseInterceptor for LoggingInterceptor {
    fn on_response(&self, method: &Method, url: &str, status: u16) {
        debug!("{} {} -> {}", method, url, status);
    }

    fn on_error(&self, err: &RequestError) {
        error!("API Error: {}", err.diagnostic());
    }
}
