use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: NaiveDate,
    pub views: u64,
    pub likes: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub body: String,
    /// Authorship marker; when absent, ownership falls back to the author name.
    #[serde(default)]
    pub owner_id: Option<String>,
}

impl Post {
    /// Concatenated lowercase text searched by the free-text filter.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.title, self.tags.join(" "), self.body).to_lowercase()
    }

    /// Whether the current user owns this post (gates edit/delete).
    pub fn is_mine(&self, identity: &Identity) -> bool {
        match &self.owner_id {
            Some(owner) => *owner == identity.id,
            None => self.author == identity.name,
        }
    }
}

/// The current user as the boards see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Latest,
    Views,
    Likes,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Latest => "latest",
            SortKey::Views => "views",
            SortKey::Likes => "likes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Latest => "최신순",
            SortKey::Views => "조회순",
            SortKey::Likes => "추천순",
        }
    }

    /// Cycle to the next entry in selector order.
    pub fn next(&self) -> Self {
        match self {
            SortKey::Latest => SortKey::Views,
            SortKey::Views => SortKey::Likes,
            SortKey::Likes => SortKey::Latest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    CoverLetter,
    Free,
    HotIssue,
}

impl BoardKind {
    pub const ALL: [BoardKind; 3] = [BoardKind::CoverLetter, BoardKind::Free, BoardKind::HotIssue];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardKind::CoverLetter => "cover-letter",
            BoardKind::Free => "free",
            BoardKind::HotIssue => "hot-issue",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoardKind::CoverLetter => "자소서 게시판",
            BoardKind::Free => "자유 게시판",
            BoardKind::HotIssue => "핫이슈 게시판",
        }
    }

    /// Category selector entries for this board.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            BoardKind::CoverLetter => &["합격후기", "불합격피드백", "자소서템플릿", "공지"],
            BoardKind::Free => &["일상", "질문", "정보", "공지"],
            BoardKind::HotIssue => &[
                "스포츠",
                "유머/밈",
                "게임",
                "연예인",
                "부동산",
                "애니",
                "공지",
            ],
        }
    }
}
