use crate::api_client::Homework;
use crate::error::ApiError;

/// Вердикт ревьюера по известному статусу работы.
fn verdict(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Собирает текст уведомления об изменении статуса работы.
pub fn compose_status_message(homework: &Homework) -> Result<String, ApiError> {
    let verdict = verdict(&homework.status)
        .ok_or_else(|| ApiError::UnknownStatus(homework.status.clone()))?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name, verdict
    ))
}
