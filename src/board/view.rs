//! Pure view derivation for board list screens
//!
//! Filtering, sorting, pagination and the page-control strip are computed
//! here from plain data, with no rendering surface involved. Screens feed
//! the result straight into widgets; tests exercise it directly.

use chrono::NaiveDate;

use crate::models::{Identity, Post, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Mutable filter state for one list screen.
///
/// The setters encode the reset rules: changing category, query or sort
/// snaps back to page 1, changing the page leaves the filters alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub query: String,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            query: String::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ListQuery {
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One visible table row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: NaiveDate,
    pub views: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    /// Gates the edit/delete affordances.
    pub mine: bool,
}

/// One entry of the page-selector strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub label: String,
    pub target: Option<usize>,
    pub active: bool,
    pub disabled: bool,
}

impl PageControl {
    fn number(page: usize, current: usize) -> Self {
        Self {
            label: page.to_string(),
            target: Some(page),
            active: page == current,
            disabled: false,
        }
    }

    fn ellipsis() -> Self {
        Self {
            label: "…".to_string(),
            target: None,
            active: false,
            disabled: true,
        }
    }

    fn prev(current: usize) -> Self {
        Self {
            label: "이전".to_string(),
            target: (current > 1).then(|| current - 1),
            active: false,
            disabled: current == 1,
        }
    }

    fn next(current: usize, total: usize) -> Self {
        Self {
            label: "다음".to_string(),
            target: (current < total).then(|| current + 1),
            active: false,
            disabled: current == total,
        }
    }
}

/// The derived view: one page of rows plus the strip describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<RowView>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub strip: Vec<PageControl>,
}

/// Derive the visible page from the full collection.
///
/// The requested page is clamped to `[1, total_pages]`, so a filter change
/// that shrinks the result set can never leave the view past the end.
pub fn derive(posts: &[Post], query: &ListQuery, me: &Identity, page_size: usize) -> PageView {
    let mut matches: Vec<&Post> = posts
        .iter()
        .filter(|p| matches_filters(p, query))
        .collect();

    // Vec::sort_by is stable, which is exactly the contract for the
    // views/likes keys: ties keep their input order.
    match query.sort {
        SortKey::Latest => matches.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id))),
        SortKey::Views => matches.sort_by(|a, b| b.views.cmp(&a.views)),
        SortKey::Likes => matches.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }

    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(page_size).max(1);
    let page = query.page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let rows = matches
        .iter()
        .skip(start)
        .take(page_size)
        .map(|p| RowView {
            id: p.id,
            title: p.title.clone(),
            category: p.category.clone(),
            author: p.author.clone(),
            date: p.date,
            views: p.views,
            likes: p.likes,
            tags: p.tags.clone(),
            mine: p.is_mine(me),
        })
        .collect();

    PageView {
        rows,
        page,
        total_pages,
        total_matches,
        strip: build_strip(page, total_pages),
    }
}

fn matches_filters(post: &Post, query: &ListQuery) -> bool {
    if let Some(cat) = &query.category {
        if !cat.is_empty() && post.category != *cat {
            return false;
        }
    }

    let q = query.query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    post.search_haystack().contains(&q)
}

/// Current page ± 1 neighbor, first and last always present, an ellipsis
/// only where at least one page number is actually omitted.
fn build_strip(current: usize, total: usize) -> Vec<PageControl> {
    let mut strip = vec![PageControl::prev(current)];

    let window_start = current.saturating_sub(1).max(1);
    let window_end = (current + 1).min(total);

    if window_start > 1 {
        strip.push(PageControl::number(1, current));
        if window_start > 2 {
            strip.push(PageControl::ellipsis());
        }
    }
    for page in window_start..=window_end {
        strip.push(PageControl::number(page, current));
    }
    if window_end < total {
        if window_end < total - 1 {
            strip.push(PageControl::ellipsis());
        }
        strip.push(PageControl::number(total, current));
    }

    strip.push(PageControl::next(current, total));
    strip
}

#[cfg(test)]
mod tests {
    use super::*;

    fn me() -> Identity {
        Identity {
            id: "me".to_string(),
            name: "익명".to_string(),
        }
    }

    fn post(id: u64, title: &str, category: &str, date: &str, views: u64, likes: u64) -> Post {
        Post {
            id,
            title: title.to_string(),
            category: category.to_string(),
            author: format!("익명{}", id),
            date: date.parse().unwrap(),
            views,
            likes,
            tags: vec![format!("#{}", category)],
            body: String::new(),
            owner_id: None,
        }
    }

    /// Twelve records in the shape of the hot-issue seed, one of them 공지.
    fn seed_12() -> Vec<Post> {
        let mut posts = vec![post(
            7,
            "[공지] 핫이슈 게시판 이용 가이드",
            "공지",
            "2025-10-22",
            734,
            12,
        )];
        for id in [12, 11, 10, 9, 8, 6, 5, 4, 3, 2, 1] {
            posts.push(post(
                id,
                &format!("글 {}", id),
                "스포츠",
                "2025-10-20",
                id * 10,
                id,
            ));
        }
        posts
    }

    #[test]
    fn query_matches_appear_in_haystack() {
        let mut posts = seed_12();
        posts[3].title = "GOTY 후보작 토론방".to_string();
        posts[5].tags.push("#goty".to_string());

        let mut query = ListQuery::default();
        query.set_query("GoTy".to_string());
        let view = derive(&posts, &query, &me(), DEFAULT_PAGE_SIZE);

        assert_eq!(view.total_matches, 2);
        for row in &view.rows {
            let source = posts.iter().find(|p| p.id == row.id).unwrap();
            assert!(source.search_haystack().contains("goty"));
        }
    }

    #[test]
    fn latest_sorts_by_date_then_id_descending() {
        let posts = vec![
            post(1, "a", "스포츠", "2025-10-20", 0, 0),
            post(3, "b", "스포츠", "2025-10-22", 0, 0),
            post(2, "c", "스포츠", "2025-10-22", 0, 0),
        ];
        let view = derive(&posts, &ListQuery::default(), &me(), DEFAULT_PAGE_SIZE);
        let ids: Vec<u64> = view.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        for pair in view.rows.windows(2) {
            assert!((pair[0].date, pair[0].id) >= (pair[1].date, pair[1].id));
        }
    }

    #[test]
    fn views_sort_puts_maximum_first_and_keeps_ties_stable() {
        let mut posts: Vec<Post> = (1..=11)
            .map(|id| post(id, &format!("글 {}", id), "게임", "2025-10-20", id * 7, 0))
            .collect();
        posts[2].views = 9000;
        posts[5].views = 9000;

        let mut query = ListQuery::default();
        query.set_sort(SortKey::Views);
        let view = derive(&posts, &query, &me(), DEFAULT_PAGE_SIZE);

        let max = posts.iter().map(|p| p.views).max().unwrap();
        assert_eq!(view.rows[0].views, max);
        // ids 3 and 6 tie on views; input order must survive
        assert_eq!(view.rows[0].id, 3);
        assert_eq!(view.rows[1].id, 6);
    }

    #[test]
    fn total_pages_follows_ceiling_formula() {
        let posts = seed_12();
        let me = me();

        let view = derive(&posts, &ListQuery::default(), &me, 10);
        assert_eq!(view.total_pages, 2);

        let mut query = ListQuery::default();
        query.set_category(Some("공지".to_string()));
        let view = derive(&posts, &query, &me, 10);
        assert_eq!(view.total_matches, 1);
        assert_eq!(view.total_pages, 1);

        // No matches still yields one (empty) page.
        query.set_query("절대없는검색어".to_string());
        let view = derive(&posts, &query, &me, 10);
        assert_eq!(view.total_matches, 0);
        assert_eq!(view.total_pages, 1);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn filter_changes_reset_page_but_page_changes_keep_filters() {
        let mut query = ListQuery {
            category: Some("게임".to_string()),
            query: "goty".to_string(),
            sort: SortKey::Views,
            page: 3,
        };

        query.set_page(2);
        assert_eq!(query.category.as_deref(), Some("게임"));
        assert_eq!(query.query, "goty");
        assert_eq!(query.sort, SortKey::Views);

        query.set_category(None);
        assert_eq!(query.page, 1);

        query.set_page(4);
        query.set_query("밈".to_string());
        assert_eq!(query.page, 1);

        query.set_page(4);
        query.set_sort(SortKey::Likes);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn page_is_clamped_into_valid_range() {
        let posts = seed_12();
        let mut query = ListQuery::default();
        query.set_page(9);
        let view = derive(&posts, &query, &me(), 10);
        assert_eq!(view.page, 2);

        // Shrinking the result set pulls the page back in.
        query.category = Some("공지".to_string());
        let view = derive(&posts, &query, &me(), 10);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn notice_category_isolates_the_guide_post() {
        let posts = seed_12();
        let mut query = ListQuery::default();
        query.set_category(Some("공지".to_string()));
        let view = derive(&posts, &query, &me(), 10);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].title, "[공지] 핫이슈 게시판 이용 가이드");
    }

    #[test]
    fn twelve_records_split_ten_and_two_without_ellipsis() {
        let posts = seed_12();
        let me = me();

        let view = derive(&posts, &ListQuery::default(), &me, 10);
        assert_eq!(view.rows.len(), 10);

        let mut query = ListQuery::default();
        query.set_page(2);
        let view = derive(&posts, &query, &me, 10);
        assert_eq!(view.rows.len(), 2);

        let numbers: Vec<usize> = view.strip.iter().filter_map(|c| c.target).collect();
        // prev target, pages 1 and 2; no ellipsis entries at all
        assert!(view.strip.iter().all(|c| c.label != "…"));
        assert_eq!(numbers, vec![1, 1, 2]);
        let next = view.strip.last().unwrap();
        assert!(next.disabled);
        assert_eq!(next.target, None);
    }

    #[test]
    fn strip_windows_with_ellipsis_on_real_gaps_only() {
        let labels = |current, total| -> Vec<String> {
            build_strip(current, total).iter().map(|c| c.label.clone()).collect()
        };

        assert_eq!(
            labels(4, 7),
            vec!["이전", "1", "…", "3", "4", "5", "…", "7", "다음"]
        );
        // Window already touches the edges: no page is omitted, no ellipsis.
        assert_eq!(labels(2, 4), vec!["이전", "1", "2", "3", "4", "다음"]);
        assert_eq!(labels(1, 1), vec!["이전", "1", "다음"]);

        let strip = build_strip(4, 7);
        let active: Vec<&PageControl> = strip.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "4");
        assert_eq!(strip[0].target, Some(3));
        assert_eq!(strip.last().unwrap().target, Some(5));
    }

    #[test]
    fn mine_flag_gates_rows() {
        let mut posts = seed_12();
        posts[1].owner_id = Some("me".to_string());
        posts[2].author = "익명".to_string();
        posts[2].owner_id = None;

        let view = derive(&posts, &ListQuery::default(), &me(), 20);
        let mine: Vec<u64> = view.rows.iter().filter(|r| r.mine).map(|r| r.id).collect();
        assert_eq!(mine.len(), 2);
        assert!(mine.contains(&posts[1].id));
        assert!(mine.contains(&posts[2].id));
    }
}
