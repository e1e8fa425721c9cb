use geojson::{FeatureCollection, GeoJson};
use isoreach_core::model::{Point, TravelRecord};
use serde_json::Value;

use super::{
    request_ops, response_ops, ClientError, GeoService, PolygonOptions, ReachabilityOptions,
    RouteOptions,
};

/// HTTP client for the Targomo polygon, route and reachability services
#[derive(Debug, Clone)]
pub struct TargomoClient {
    http: reqwest::Client,
    base_url: String,
    region: String,
    api_key: String,
}

impl TargomoClient {
    pub fn new(http: reqwest::Client, base_url: &str, region: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            region: region.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// `{base_url}/{region}/v1/{endpoint}`, without the key
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}/v1/{}", self.base_url, self.region, endpoint)
    }

    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, ClientError> {
        let url = self.endpoint_url(endpoint);
        log::debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::RequestError {
                url: url.clone(),
                source,
            })?;
        read_json(url, response).await
    }
}

async fn read_json(url: String, response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = error_body(&url, response.text().await);
        return Err(ClientError::HttpStatus {
            url,
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<Value>()
        .await
        .map_err(|source| ClientError::RequestError { url, source })
}

/// body of a failed response, empty if it could not be read
fn error_body(url: &str, body: Result<String, reqwest::Error>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            log::debug!("could not read error body from '{url}': {e}");
            String::new()
        }
    }
}

impl GeoService for TargomoClient {
    async fn polygons(
        &self,
        sources: &[Point],
        options: &PolygonOptions,
    ) -> Result<FeatureCollection, ClientError> {
        let body = request_ops::polygon_request(sources, options);
        let response = self.post("polygon", &body).await?;
        let polygons = response_ops::parse_polygons(response)?;
        log::info!(
            "received {} polygon features for {} sources",
            polygons.features.len(),
            sources.len()
        );
        Ok(polygons)
    }

    async fn routes(
        &self,
        sources: &[Point],
        targets: &[Point],
        options: &RouteOptions,
    ) -> Result<Vec<FeatureCollection>, ClientError> {
        let body = request_ops::route_request(sources, targets, options);
        let response = self.post("route", &body).await?;
        let routes = response_ops::parse_routes(response)?;
        log::info!("received {} routes", routes.len());
        Ok(routes)
    }

    async fn reachability(
        &self,
        sources: &[Point],
        targets: &[Point],
        options: &ReachabilityOptions,
    ) -> Result<Vec<TravelRecord>, ClientError> {
        let body = request_ops::reachability_request(sources, targets, options);
        let response = self.post("reachability", &body).await?;
        let records = response_ops::parse_reachability(response)?;
        log::info!(
            "received {} travel records for {} sources and {} targets",
            records.len(),
            sources.len(),
            targets.len()
        );
        Ok(records)
    }

    async fn fetch_dataset(&self, url: &str) -> Result<FeatureCollection, ClientError> {
        log::debug!("GET {url}");
        let response =
            self.http
                .get(url)
                .send()
                .await
                .map_err(|source| ClientError::RequestError {
                    url: url.to_string(),
                    source,
                })?;
        let json = read_json(url.to_string(), response).await?;
        match GeoJson::from_json_value(json) {
            Ok(GeoJson::FeatureCollection(fc)) => Ok(fc),
            Ok(_) => Err(ClientError::DecodeError {
                what: format!("dataset '{url}'"),
                msg: String::from("expected a FeatureCollection"),
            }),
            Err(e) => Err(ClientError::DecodeError {
                what: format!("dataset '{url}'"),
                msg: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{error_body, TargomoClient};

    #[test]
    fn test_unreadable_error_body_is_empty() {
        let read_failure = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        assert_eq!(error_body("https://api.targomo.com/", Err(read_failure)), "");
        assert_eq!(
            error_body("https://api.targomo.com/", Ok(String::from("bad key"))),
            "bad key"
        );
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = TargomoClient::new(
            reqwest::Client::new(),
            "https://api.targomo.com/",
            "westcentraleurope",
            "key",
        );
        assert_eq!(
            client.endpoint_url("polygon"),
            "https://api.targomo.com/westcentraleurope/v1/polygon"
        );
    }
}
