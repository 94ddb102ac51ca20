use serde::{Deserialize, Serialize};

use crate::builtin;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub image: String,
    pub body: String,
}

impl NewsItem {
    /// First sentence of the article, used for the teaser line
    pub fn teaser(&self) -> &str {
        match self.body.find(". ") {
            Some(end) => &self.body[..=end],
            None => &self.body,
        }
    }
}

/// Latest news, newest first
pub fn latest_news() -> Vec<NewsItem> {
    builtin::news()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teaser_is_first_sentence() {
        let news = latest_news();
        assert_eq!(news[0].id, "afcon-qualify");
        assert!(news[0].teaser().starts_with("In an historic night"));
        assert!(news[0].teaser().ends_with("2-1 victory over their rivals."));
    }

    #[test]
    fn test_teaser_without_sentence_break() {
        let item = NewsItem {
            id: "short".to_string(),
            title: "Short".to_string(),
            date: "1 Jan 2026".to_string(),
            image: String::new(),
            body: "One line only".to_string(),
        };
        assert_eq!(item.teaser(), "One line only");
    }
}
