//! HTTP client for the RDKit depiction sidecar.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::embed;
use crate::error::{DepictError, Result};

/// Client for the depiction service. The sidecar takes a SMILES string and
/// answers with an SVG document; anything it cannot parse comes back as a
/// 4xx.
#[derive(Debug, Clone)]
pub struct Depictor {
    client: reqwest::Client,
    base_url: Url,
}

impl Depictor {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DepictError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DepictError::ServiceUnavailable)?;
        Ok(Self { client, base_url })
    }

    /// Render `smiles` and rewrite the returned SVG into an inline fragment.
    pub async fn depict(&self, smiles: &str) -> Result<String> {
        let svg = self.fetch_svg(smiles).await?;
        embed::inline_fragment(&svg)
    }

    /// Fetch the raw SVG document for `smiles` from the sidecar.
    pub async fn fetch_svg(&self, smiles: &str) -> Result<String> {
        let mut url = self
            .base_url
            .join("depict")
            .map_err(|e| DepictError::InvalidBaseUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("smiles", smiles);

        debug!(%smiles, "requesting depiction");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_client_error() {
            return Err(DepictError::InvalidSmiles {
                smiles: smiles.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DepictError::DepictFailed {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const SVG: &str = "<?xml version='1.0' encoding='iso-8859-1'?>\n\
<svg xml:space='preserve' width='200px' height='200px'>\n<!-- END OF HEADER -->\n</svg>";

    fn depictor(server: &MockServer) -> Depictor {
        Depictor::new(&server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_depict_rewrites_service_svg() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/depict")
                .query_param("smiles", "c1ccccc1");
            then.status(200).body(SVG);
        });

        let fragment = depictor(&server).depict("c1ccccc1").await.unwrap();
        mock.assert();
        assert!(fragment.starts_with("<svg"));
        assert!(fragment.contains("width='100px' height='100px'"));
    }

    #[tokio::test]
    async fn test_client_error_maps_to_invalid_smiles() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/depict");
            then.status(422).body("unparseable SMILES");
        });

        let err = depictor(&server).depict("not-a-molecule").await.unwrap_err();
        assert!(matches!(err, DepictError::InvalidSmiles { smiles } if smiles == "not-a-molecule"));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_depict_failed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/depict");
            then.status(500);
        });

        let err = depictor(&server).depict("c1ccccc1").await.unwrap_err();
        assert!(matches!(err, DepictError::DepictFailed { status: 500 }));
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        assert!(matches!(
            Depictor::new("not a url", Duration::from_secs(5)),
            Err(DepictError::InvalidBaseUrl(_))
        ));
    }
}
