use crate::utils::js_random_below;
use gloo::net::http::Request;
use jeopardy_core::{TriviaError, TriviaResult, TriviaSource};
use jeopardy_protocol::{self as protocol, CategoryId, CategoryRecord, CategorySummary};
use serde::de::DeserializeOwned;

/// [`TriviaSource`] backed by the jservice HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaSource {
    base_url: String,
    max_offset: u32,
}

impl HttpTriviaSource {
    pub(crate) fn new(base_url: impl Into<String>, max_offset: u32) -> Self {
        Self {
            base_url: base_url.into(),
            max_offset,
        }
    }

    async fn get_json<T: DeserializeOwned>(url: &str) -> TriviaResult<T> {
        log::debug!("GET {}", url);
        let response = Request::get(url).send().await.map_err(transport_error)?;
        status_error(response.ok(), response.status())?;
        response.json::<T>().await.map_err(transport_error)
    }
}

pub(crate) fn transport_error(err: gloo::net::Error) -> TriviaError {
    match err {
        gloo::net::Error::SerdeError(err) => TriviaError::Decode(err.to_string()),
        err => TriviaError::Transport(err.to_string()),
    }
}

/// Non-2xx responses are errors even though the request itself went through.
pub(crate) fn status_error(ok: bool, status: u16) -> TriviaResult<()> {
    if ok {
        Ok(())
    } else {
        Err(TriviaError::Status(status))
    }
}

impl TriviaSource for HttpTriviaSource {
    async fn category_listing(&self, count: usize) -> TriviaResult<Vec<CategorySummary>> {
        let offset = js_random_below(self.max_offset);
        Self::get_json(&protocol::categories_url(&self.base_url, count, offset)).await
    }

    async fn category(&self, id: CategoryId) -> TriviaResult<CategoryRecord> {
        Self::get_json(&protocol::category_url(&self.base_url, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_status_passes() {
        assert_eq!(status_error(true, 200), Ok(()));
        assert_eq!(status_error(true, 204), Ok(()));
    }

    #[test]
    fn failed_status_is_reported_with_code() {
        assert_eq!(status_error(false, 404), Err(TriviaError::Status(404)));
        assert_eq!(status_error(false, 503), Err(TriviaError::Status(503)));
    }

    #[test]
    fn serde_failure_maps_to_decode() {
        let err = serde_json::from_str::<Vec<CategorySummary>>("{\"oops\": 1}").unwrap_err();

        assert!(matches!(
            transport_error(gloo::net::Error::SerdeError(err)),
            TriviaError::Decode(_)
        ));
    }

    #[test]
    fn other_failures_map_to_transport() {
        let err = gloo::net::Error::GlooError("network unreachable".to_string());

        assert!(matches!(
            transport_error(err),
            TriviaError::Transport(message) if message.contains("network unreachable")
        ));
    }
}
