//! Проверка claims для условного рендера кнопок и пунктов меню.
//!
//! Это только скрытие элементов интерфейса: backend проверяет права сам.

/// `true`, если пользователю выданы все требуемые claims.
/// Пустой список требований ничего не ограничивает.
pub fn can_render<S: AsRef<str>>(required: &[&str], granted: &[S]) -> bool {
    required
        .iter()
        .all(|claim| granted.iter().any(|g| g.as_ref() == *claim))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::claims::{POSTS_DELETE, POSTS_READ, POSTS_WRITE};

    #[test]
    fn test_no_requirements() {
        let granted: Vec<String> = vec![];
        assert!(can_render(&[], &granted));
    }

    #[test]
    fn test_all_required_must_be_granted() {
        let granted = vec![POSTS_READ.to_string(), POSTS_WRITE.to_string()];
        assert!(can_render(&[POSTS_READ], &granted));
        assert!(can_render(&[POSTS_READ, POSTS_WRITE], &granted));
        assert!(!can_render(&[POSTS_WRITE, POSTS_DELETE], &granted));
    }

    #[test]
    fn test_anonymous_user() {
        let granted: Vec<String> = vec![];
        assert!(!can_render(&[POSTS_READ], &granted));
    }
}
