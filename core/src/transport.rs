//! The seam between the probe core and the network.

use crate::error::ProbeError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one `HttpRequest` and returns the complete response.
///
/// Implementations must read the whole body before returning. Any failure to
/// complete the exchange is reported as `ProbeError::Transport`; the status
/// code of a completed exchange is never an error.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ProbeError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ProbeError> {
        (**self).execute(request)
    }
}
