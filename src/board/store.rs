//! In-memory post collection with user-triggered mutations
//!
//! One store per board. The collection is seeded once from a fixture and
//! mutated only through these methods; there is no persistence, so state
//! lasts for the process lifetime.

use chrono::NaiveDate;
use tracing::debug;

use super::errors::BoardError;
use crate::models::{Identity, Post};

pub struct BoardStore {
    posts: Vec<Post>,
    next_id: u64,
}

impl BoardStore {
    pub fn new(seed: Vec<Post>) -> Self {
        let next_id = seed.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            posts: seed,
            next_id,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Append a new post with a fresh id and today's date.
    pub fn create(
        &mut self,
        title: &str,
        category: &str,
        author: &Identity,
        today: NaiveDate,
    ) -> Result<u64, BoardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyInput);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.posts.push(Post {
            id,
            title: title.to_string(),
            category: category.to_string(),
            author: author.name.clone(),
            date: today,
            views: 0,
            likes: 0,
            tags: Vec::new(),
            body: String::new(),
            owner_id: Some(author.id.clone()),
        });
        debug!(id, title, "post created");
        Ok(id)
    }

    /// Update a post's title in place.
    pub fn rename(&mut self, id: u64, new_title: &str) -> Result<(), BoardError> {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Err(BoardError::EmptyInput);
        }

        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.title = new_title.to_string();
                debug!(id, "post renamed");
                Ok(())
            }
            None => Err(BoardError::NotFound(id)),
        }
    }

    /// Remove a post. Confirmation happens at the UI layer; a missing id
    /// leaves the collection unchanged.
    pub fn remove(&mut self, id: u64) -> Result<Post, BoardError> {
        match self.posts.iter().position(|p| p.id == id) {
            Some(idx) => {
                let removed = self.posts.remove(idx);
                debug!(id, "post removed");
                Ok(removed)
            }
            None => Err(BoardError::NotFound(id)),
        }
    }

    /// Count one view, as the web app did when the detail modal opened.
    pub fn record_view(&mut self, id: u64) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.views += 1;
        }
    }

    /// Apply or retract one like. Likes never go below zero.
    pub fn set_liked(&mut self, id: u64, liked: bool) -> Result<u64, BoardError> {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                if liked {
                    post.likes += 1;
                } else {
                    post.likes = post.likes.saturating_sub(1);
                }
                Ok(post.likes)
            }
            None => Err(BoardError::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(ids: &[u64]) -> Vec<Post> {
        ids.iter()
            .map(|&id| Post {
                id,
                title: format!("글 {}", id),
                category: "일상".to_string(),
                author: "익명".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
                views: 0,
                likes: 0,
                tags: Vec::new(),
                body: String::new(),
                owner_id: None,
            })
            .collect()
    }

    fn me() -> Identity {
        Identity {
            id: "me".to_string(),
            name: "익명".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 26).unwrap()
    }

    #[test]
    fn create_assigns_fresh_unique_id() {
        let mut store = BoardStore::new(seed(&[3, 7, 5]));
        let id = store.create("새 글", "일상", &me(), today()).unwrap();
        assert_eq!(id, 8);
        let second = store.create("둘째 글", "일상", &me(), today()).unwrap();
        assert_eq!(second, 9);
        assert_eq!(store.len(), 5);
        assert_eq!(store.get(id).unwrap().owner_id.as_deref(), Some("me"));
    }

    #[test]
    fn create_rejects_blank_title() {
        let mut store = BoardStore::new(seed(&[1]));
        assert_eq!(
            store.create("   ", "일상", &me(), today()),
            Err(BoardError::EmptyInput)
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rename_updates_in_place() {
        let mut store = BoardStore::new(seed(&[1, 2]));
        store.rename(2, "고친 제목").unwrap();
        assert_eq!(store.get(2).unwrap().title, "고친 제목");
    }

    #[test]
    fn rename_missing_id_is_noop() {
        let mut store = BoardStore::new(seed(&[1, 2]));
        assert_eq!(store.rename(99, "없는 글"), Err(BoardError::NotFound(99)));
        assert_eq!(store.get(1).unwrap().title, "글 1");
        assert_eq!(store.get(2).unwrap().title, "글 2");
    }

    #[test]
    fn remove_deletes_exactly_one() {
        let mut store = BoardStore::new(seed(&[1, 2, 3]));
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(store.len(), 2);
        assert!(store.get(2).is_none());
        assert!(store.get(1).is_some() && store.get(3).is_some());
    }

    #[test]
    fn remove_missing_id_leaves_collection_unchanged() {
        let mut store = BoardStore::new(seed(&[1, 2, 3]));
        assert_eq!(store.remove(42), Err(BoardError::NotFound(42)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn likes_never_go_negative() {
        let mut store = BoardStore::new(seed(&[1]));
        assert_eq!(store.set_liked(1, false).unwrap(), 0);
        assert_eq!(store.set_liked(1, true).unwrap(), 1);
        assert_eq!(store.set_liked(1, false).unwrap(), 0);
    }

    #[test]
    fn record_view_increments() {
        let mut store = BoardStore::new(seed(&[1]));
        store.record_view(1);
        store.record_view(1);
        assert_eq!(store.get(1).unwrap().views, 2);
        // unknown id is ignored
        store.record_view(9);
    }
}
