use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Идентификаторы хранятся как непрозрачные строки: в URL, в CSV и в JSON
/// они передаются без изменений.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;

    /// Выпустить новый уникальный ID
    fn generate() -> Self;
}

/// Общая проверка для строковых идентификаторов: пустой ID не допускается
pub fn parse_opaque_id(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Empty id".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opaque_id() {
        assert_eq!(parse_opaque_id(" 3 ").unwrap(), "3");
        assert!(parse_opaque_id("   ").is_err());
        assert!(parse_opaque_id("").is_err());
    }
}
