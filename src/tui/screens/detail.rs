//! Post detail screen, the terminal take on the web app's detail modal

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Post;
use crate::tui::ui::{format_count, Styles};

/// Detail screen state
pub struct DetailScreen {
    pub post_id: Option<u64>,
    pub scroll_offset: u16,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self {
            post_id: None,
            scroll_offset: 0,
        }
    }

    pub fn open(&mut self, id: u64) {
        self.post_id = Some(id);
        self.scroll_offset = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Draw the detail screen for the given post.
    pub fn draw(&self, f: &mut Frame, area: Rect, post: &Post, mine: bool, liked: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Meta
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Key hints
            ])
            .split(area);

        let title = Paragraph::new(post.title.as_str())
            .style(Styles::title().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let meta = vec![
            Line::from(vec![
                Span::styled("작성자 ", Styles::info()),
                Span::raw(post.author.as_str()),
                Span::styled("  날짜 ", Styles::info()),
                Span::raw(post.date.to_string()),
                Span::styled("  카테고리 ", Styles::info()),
                Span::raw(post.category.as_str()),
            ]),
            Line::from(vec![
                Span::styled("조회수 ", Styles::info()),
                Span::raw(format_count(post.views)),
                Span::styled("  추천수 ", Styles::info()),
                Span::raw(format_count(post.likes)),
                Span::styled("  ", Styles::info()),
                Span::styled(post.tags.join(" "), Styles::tag()),
            ]),
        ];
        let meta_widget = Paragraph::new(meta).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(meta_widget, chunks[1]);

        let body = if post.body.is_empty() {
            "(본문 없음)"
        } else {
            post.body.as_str()
        };
        let body_widget = Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0))
            .block(
                Block::default()
                    .title("본문")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            );
        f.render_widget(body_widget, chunks[2]);

        let like_hint = if liked { "l: 추천 취소" } else { "l: 추천하기" };
        let manage_hint = if mine { " | e: 수정 | d: 삭제" } else { "" };
        let hints = Paragraph::new(format!(
            "↑/↓: 스크롤 | {}{} | ESC: 목록으로",
            like_hint, manage_hint
        ))
        .style(Styles::info())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(hints, chunks[3]);
    }
}
