use serde::{Deserialize, Serialize};

/// Шаг подгрузки списка ("Load more")
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Видимая часть отфильтрованного списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisiblePage<T> {
    pub items: Vec<T>,
    /// Количество записей в отфильтрованном списке
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

impl<T> VisiblePage<T> {
    /// Преобразовать элементы страницы, сохранив счётчики
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> VisiblePage<U> {
        VisiblePage {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            has_more: self.has_more,
        }
    }
}

/// Первые `page_size * pages_shown` элементов отфильтрованного списка.
///
/// `pages_shown` меньше 1 трактуется как 1: после сброса фильтров всегда
/// видна хотя бы первая страница.
pub fn visible_page<T: Clone>(
    filtered: &[T],
    page_size: usize,
    pages_shown: usize,
) -> VisiblePage<T> {
    let limit = page_size.saturating_mul(pages_shown.max(1));
    VisiblePage {
        items: filtered.iter().take(limit).cloned().collect(),
        total_count: filtered.len(),
        has_more: filtered.len() > limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_page_first_page() {
        let data: Vec<u32> = (1..=14).collect();
        let page = visible_page(&data, 6, 1);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(page.total_count, 14);
        assert!(page.has_more);
    }

    #[test]
    fn test_visible_page_exact_fit_has_no_more() {
        let data: Vec<u32> = (1..=12).collect();
        let page = visible_page(&data, 6, 2);
        assert_eq!(page.items.len(), 12);
        assert!(!page.has_more);
    }

    #[test]
    fn test_visible_page_zero_pages_shows_first() {
        let data: Vec<u32> = (1..=3).collect();
        let page = visible_page(&data, 6, 0);
        assert_eq!(page.items.len(), 3);
        assert!(!page.has_more);
    }

    #[test]
    fn test_map_keeps_counts() {
        let data: Vec<u32> = (1..=8).collect();
        let page = visible_page(&data, 6, 1).map(|v| v * 10);
        assert_eq!(page.items, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(page.total_count, 8);
        assert!(page.has_more);
    }

    #[test]
    fn test_visible_page_empty() {
        let data: Vec<u32> = Vec::new();
        let page = visible_page(&data, 6, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert!(!page.has_more);
    }
}
