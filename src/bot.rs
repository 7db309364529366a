use anyhow::Result;
use chrono::Utc;
use std::time::Duration;
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::api_client::{validate, PracticumClient};
use crate::config::Config;
use crate::error::ApiError;
use crate::notifier::Notifier;
use crate::status::compose_status_message;

const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Память цикла: последние отправленные тексты, чтобы не слать повторы.
#[derive(Debug, Default)]
pub struct LoopState {
    last_message: Option<String>,
    last_error: Option<String>,
}

impl LoopState {
    /// true, если сообщение о статусе отличается от последнего отправленного.
    pub fn note_status(&mut self, message: &str) -> bool {
        if self.last_message.as_deref() == Some(message) {
            return false;
        }
        self.last_message = Some(message.to_string());
        true
    }

    /// true, если текст ошибки ещё не уходил в чат.
    pub fn note_error(&mut self, message: &str) -> bool {
        if self.last_error.as_deref() == Some(message) {
            return false;
        }
        self.last_error = Some(message.to_string());
        true
    }
}

/// Одна итерация: запрос, проверка ответа, сборка текста уведомления.
/// Возвращает None, если обновлений нет, и курсор следующего опроса.
async fn poll_once(
    client: &PracticumClient,
    from_date: i64,
) -> Result<(Option<String>, i64), ApiError> {
    let raw = client.fetch(from_date).await?;
    let envelope = validate(raw)?;
    let message = match envelope.homeworks.first() {
        Some(homework) => Some(compose_status_message(homework)?),
        None => None,
    };
    Ok((message, envelope.current_date))
}

pub async fn run(bot: Bot, config: Config) -> Result<()> {
    let client = PracticumClient::new(config.practicum_token.clone());
    let notifier = Notifier::new(bot, config.chat_id);
    let mut state = LoopState::default();
    let mut from_date = Utc::now().timestamp();

    info!(
        "polling homework statuses every {} seconds",
        RETRY_PERIOD.as_secs()
    );

    loop {
        debug!("polling with from_date={from_date}");
        match poll_once(&client, from_date).await {
            Ok((Some(message), next_cursor)) => {
                if state.note_status(&message) {
                    notifier.notify(&message).await;
                } else {
                    debug!("status unchanged, skipping notification");
                }
                from_date = next_cursor;
            }
            Ok((None, next_cursor)) => {
                info!("no homework updates");
                from_date = next_cursor;
            }
            // Курсор не двигается: неудачное окно будет опрошено заново
            Err(ApiError::Transport(e)) => {
                warn!("failed to reach the homework API: {e}");
            }
            Err(e) => {
                let message = format!("Сбой в работе программы: {e}");
                error!("{message}");
                if state.note_error(&message) {
                    notifier.notify(&message).await;
                }
            }
        }
        sleep(RETRY_PERIOD).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_status_message_is_sent_once() {
        let mut state = LoopState::default();
        assert!(state.note_status("работа принята"));
        assert!(!state.note_status("работа принята"));
        assert!(!state.note_status("работа принята"));
    }

    #[test]
    fn distinct_status_messages_are_both_sent() {
        let mut state = LoopState::default();
        assert!(state.note_status("работа на проверке"));
        assert!(state.note_status("работа принята"));
    }

    #[test]
    fn status_can_flip_back_after_a_change() {
        let mut state = LoopState::default();
        assert!(state.note_status("a"));
        assert!(state.note_status("b"));
        assert!(state.note_status("a"));
    }

    #[test]
    fn repeated_error_message_is_sent_once() {
        let mut state = LoopState::default();
        assert!(state.note_error("Сбой в работе программы: 503"));
        assert!(!state.note_error("Сбой в работе программы: 503"));
        assert!(state.note_error("Сбой в работе программы: 404"));
    }

    #[test]
    fn error_and_status_deduplication_are_independent() {
        let mut state = LoopState::default();
        assert!(state.note_status("работа принята"));
        assert!(state.note_error("работа принята"));
    }
}
