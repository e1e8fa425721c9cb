#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("missing Targomo API key, set `client.api_key` in the config file or ISOREACH__CLIENT__API_KEY")]
    MissingApiKey,
    #[error("failure building HTTP client: {source}")]
    BuildError { source: reqwest::Error },
    #[error("request to '{url}' failed: {source}")]
    RequestError { url: String, source: reqwest::Error },
    #[error("'{url}' responded with HTTP {status}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },
    #[error("service responded with code '{code}': {message}")]
    ServiceError { code: String, message: String },
    #[error("failure decoding {what} response: {msg}")]
    DecodeError { what: String, msg: String },
}
