use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Debug, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub homeworks: Vec<Homework>,
    pub current_date: i64,
}

pub struct PracticumClient {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

impl PracticumClient {
    pub fn new(token: String) -> Self {
        Self::with_endpoint(ENDPOINT.to_string(), token)
    }

    pub fn with_endpoint(endpoint: String, token: String) -> Self {
        Self {
            endpoint,
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Запрашивает статусы домашних работ начиная с `from_date`.
    pub async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ApiError::Endpoint {
                endpoint: self.endpoint.clone(),
                from_date,
                status,
            });
        }

        response.json().await.map_err(ApiError::Parse)
    }
}

/// Проверяет ответ API на соответствие документации и сужает его до
/// типизированного конверта. Пустой список работ — корректный ответ
/// "изменений нет".
pub fn validate(raw: Value) -> Result<Envelope, ApiError> {
    let object = raw
        .as_object()
        .ok_or_else(|| ApiError::BadResponse("top-level value is not an object".to_string()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| ApiError::BadResponse("missing key \"homeworks\"".to_string()))?;
    if !homeworks.is_array() {
        return Err(ApiError::BadResponse(
            "\"homeworks\" is not a list".to_string(),
        ));
    }

    let current_date = object
        .get("current_date")
        .ok_or_else(|| ApiError::BadResponse("missing key \"current_date\"".to_string()))?;
    if !current_date.is_i64() {
        return Err(ApiError::BadResponse(
            "\"current_date\" is not an integer timestamp".to_string(),
        ));
    }

    serde_json::from_value(raw).map_err(|e| ApiError::BadResponse(e.to_string()))
}
