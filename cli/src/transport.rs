use shopping_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Blocking transport over ureq.
///
/// Status codes are returned as data so the core decides what a 4xx/5xx
/// means; only connection-level failures become `Err`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = &self.agent;
        let mut response = match (req.method, req.body) {
            (HttpMethod::Get, _) => agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => {
                agent.post(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                agent.put(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
        }
        .map_err(|e| ApiError::TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failure_is_a_transport_error() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: "http://127.0.0.1:1/api/items".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let result = UreqTransport::new().execute(request);
        assert!(matches!(result, Err(ApiError::TransportError(_))));
    }
}
