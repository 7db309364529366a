use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{debug, error};

/// Отправляет текстовые уведомления в один настроенный чат.
pub struct Notifier {
    bot: Bot,
    chat_id: ChatId,
}

impl Notifier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Ошибка отправки не прерывает цикл опроса: только лог.
    pub async fn notify(&self, text: &str) {
        match self.bot.send_message(self.chat_id, text).await {
            Ok(_) => debug!("sent message to chat {}: {}", self.chat_id, text),
            Err(e) => error!("failed to send message to chat {}: {}", self.chat_id, e),
        }
    }
}
