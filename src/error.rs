use thiserror::Error;

/// Ошибки одной итерации опроса. Цикл в `bot.rs` разбирает их явно:
/// сетевые сбои только логируются, остальные уходят в чат.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to reach the homework API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("endpoint unavailable: url - {endpoint}, from_date - {from_date}, response status - {status}")]
    Endpoint {
        endpoint: String,
        from_date: i64,
        status: reqwest::StatusCode,
    },

    #[error("failed to parse the API response body as JSON: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("API response does not match the documented shape: {0}")]
    BadResponse(String),

    #[error("unexpected homework status {0:?}")]
    UnknownStatus(String),
}
