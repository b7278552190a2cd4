use super::response::ApiError;

pub const UNEXPECTED_RESPONSE: &'static str = "Unexpected response from Cloudflare Images";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ReqwestError( #[from] reqwest::Error ),
    #[error(transparent)]
    IoError( #[from] std::io::Error ),
    #[error(transparent)]
    UrlError( #[from] url::ParseError ),
    #[error(transparent)]
    HeaderError( #[from] reqwest::header::InvalidHeaderValue ),
    #[error("RemoteError: {}", describe(.0))]
    RemoteError(Vec<ApiError>),
    #[error("{}", UNEXPECTED_RESPONSE)]
    UnexpectedResponse,
}

fn describe(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no errors reported".to_owned();
    }
    errors
        .iter()
        .map(|err| format!("[{}] {}", err.code, err.message))
        .collect::<Vec<_>>()
        .join(", ")
}
