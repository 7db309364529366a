use anyhow::{Context, Result};
use std::env;
use teloxide::types::ChatId;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: ChatId,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let chat_id = env::var("TELEGRAM_CHAT_ID")
            .context("TELEGRAM_CHAT_ID environment variable is required")?
            .parse::<i64>()
            .context("TELEGRAM_CHAT_ID must be a numeric chat id")?;

        Ok(Self {
            practicum_token: env::var("PRACTICUM_TOKEN")
                .context("PRACTICUM_TOKEN environment variable is required")?,
            telegram_token: env::var("TELEGRAM_TOKEN")
                .context("TELEGRAM_TOKEN environment variable is required")?,
            chat_id: ChatId(chat_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Тесты мутируют окружение процесса, поэтому выполняются по очереди
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_all_vars() {
        env::set_var("PRACTICUM_TOKEN", "practicum-token");
        env::set_var("TELEGRAM_TOKEN", "telegram-token");
        env::set_var("TELEGRAM_CHAT_ID", "123456789");
    }

    #[test]
    fn loads_all_three_secrets() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_all_vars();

        let config = Config::from_env().unwrap();
        assert_eq!(config.practicum_token, "practicum-token");
        assert_eq!(config.telegram_token, "telegram-token");
        assert_eq!(config.chat_id, ChatId(123456789));
    }

    #[test]
    fn fails_when_telegram_token_is_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_all_vars();
        env::remove_var("TELEGRAM_TOKEN");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_TOKEN"));
    }

    #[test]
    fn fails_when_chat_id_is_not_numeric() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_all_vars();
        env::set_var("TELEGRAM_CHAT_ID", "@my_chat");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("numeric"));
    }
}
