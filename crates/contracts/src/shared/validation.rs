//! Field-level validation helpers shared by all entry forms
//!
//! Every form is validated field by field: a failure in one field never stops
//! the checks of the others, so the user sees all problems at once.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ошибки валидации формы: имя поля -> сообщение
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Записать ошибку поля. Для одного поля хранится одно сообщение (первое).
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Снять результат проверки поля: `Some(value)` при успехе,
    /// иначе ошибка запоминается и возвращается `None`.
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Обязательное текстовое поле: возвращает значение без пробелов по краям
pub fn required<'a>(raw: &'a str, label: &str) -> Result<&'a str, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(value)
}

/// Ограничение длины в символах (не в байтах)
pub fn max_chars(value: &str, max: usize, label: &str) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{} must be at most {} characters", label, max));
    }
    Ok(())
}

/// Обязательное десятичное число. NaN и бесконечности не принимаются.
pub fn parse_decimal(raw: &str, label: &str) -> Result<f64, String> {
    let value = required(raw, label)?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("{} must be a number", label)),
    }
}

/// Обязательное целое число
pub fn parse_whole(raw: &str, label: &str) -> Result<i64, String> {
    let value = required(raw, label)?;
    value
        .parse::<i64>()
        .map_err(|_| format!("{} must be a whole number", label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.insert("sku", "first");
        errors.insert("sku", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("sku"), Some("first"));
    }

    #[test]
    fn test_check_collects_errors() {
        let mut errors = FieldErrors::new();
        let ok: Option<i64> = errors.check("a", Ok(1));
        let bad: Option<i64> = errors.check("b", Err("broken".to_string()));
        assert_eq!(ok, Some(1));
        assert_eq!(bad, None);
        assert!(errors.contains("b"));
        assert!(!errors.contains("a"));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(" 12.5 ", "Price"), Ok(12.5));
        assert_eq!(parse_decimal("", "Price"), Err("Price is required".to_string()));
        assert_eq!(
            parse_decimal("abc", "Price"),
            Err("Price must be a number".to_string())
        );
        assert!(parse_decimal("NaN", "Price").is_err());
        assert!(parse_decimal("inf", "Price").is_err());
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole("42", "Qty"), Ok(42));
        assert_eq!(
            parse_whole("4.2", "Qty"),
            Err("Qty must be a whole number".to_string())
        );
    }

    #[test]
    fn test_max_chars_counts_characters() {
        assert!(max_chars("ééé", 3, "Name").is_ok());
        assert!(max_chars("abcd", 3, "Name").is_err());
    }

    #[test]
    fn test_serializes_as_object() {
        let mut errors = FieldErrors::new();
        errors.insert("unitPrice", "too high");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"unitPrice":"too high"}"#);
    }
}
