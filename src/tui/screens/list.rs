//! Generic board list screen: toolbar, post table and page strip
//!
//! One instance serves every board; `open` re-parameterises it with the
//! board's title and category set and resets the filter state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::board::{ListQuery, PageView};
use crate::models::BoardKind;
use crate::tui::ui::{centered_rect, format_count, truncate_text, InputField, Styles};

/// Interaction mode of the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Navigating the table
    Browse,
    /// Typing in the search field; every keystroke re-filters
    Search,
    /// Title prompt for a new post
    Write,
    /// Title prompt for renaming the given post
    Edit(u64),
    /// Confirmation gate before deleting the given post
    ConfirmDelete(u64),
}

/// List screen state
pub struct ListScreen {
    pub board: BoardKind,
    pub query: ListQuery,
    pub mode: ListMode,
    pub table_state: ListState,
    pub search_input: InputField,
    pub prompt: InputField,
    /// 0 = all categories, n = categories()[n - 1]
    pub category_index: usize,
}

impl ListScreen {
    pub fn new(board: BoardKind) -> Self {
        let mut table_state = ListState::default();
        table_state.select(Some(0));
        Self {
            board,
            query: ListQuery::default(),
            mode: ListMode::Browse,
            table_state,
            search_input: InputField::new("검색").with_placeholder("제목/태그/본문 검색"),
            prompt: InputField::new("제목"),
            category_index: 0,
        }
    }

    /// Enter a board, dropping any filter state left from the previous one.
    pub fn open(&mut self, board: BoardKind) {
        self.board = board;
        self.query.reset();
        self.mode = ListMode::Browse;
        self.search_input.clear();
        self.prompt.clear();
        self.category_index = 0;
        self.table_state.select(Some(0));
    }

    pub fn current_category(&self) -> Option<&'static str> {
        if self.category_index == 0 {
            None
        } else {
            self.board.categories().get(self.category_index - 1).copied()
        }
    }

    /// Advance the category selector: all -> each category -> all.
    pub fn cycle_category(&mut self) {
        self.category_index = (self.category_index + 1) % (self.board.categories().len() + 1);
        self.query
            .set_category(self.current_category().map(str::to_string));
        self.table_state.select(Some(0));
    }

    /// Clear every filter, as the toolbar reset button did.
    pub fn reset_filters(&mut self) {
        self.query.reset();
        self.search_input.clear();
        self.category_index = 0;
        self.table_state.select(Some(0));
    }

    /// Id of the highlighted row, if any.
    pub fn selected_id(&self, view: &PageView) -> Option<u64> {
        self.table_state
            .selected()
            .and_then(|idx| view.rows.get(idx))
            .map(|row| row.id)
    }

    /// Keep the highlight inside the current page after the view changed.
    pub fn sync_selection(&mut self, view: &PageView) {
        if view.rows.is_empty() {
            self.table_state.select(None);
            return;
        }
        match self.table_state.selected() {
            Some(idx) if idx < view.rows.len() => {}
            _ => self.table_state.select(Some(view.rows.len() - 1)),
        }
    }

    /// Draw the list screen
    pub fn draw(&mut self, f: &mut Frame, area: Rect, view: &PageView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Toolbar
                Constraint::Min(0),    // Post table
                Constraint::Length(4), // Instructions and page strip
            ])
            .split(area);

        self.draw_toolbar(f, chunks[0]);
        self.draw_table(f, chunks[1], view);
        self.draw_bottom(f, chunks[2], view);
    }

    fn draw_toolbar(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(18),
                Constraint::Length(14),
                Constraint::Min(0),
            ])
            .split(area);

        let category_label = self.current_category().unwrap_or("전체");
        let category = Paragraph::new(category_label)
            .style(Styles::default())
            .block(
                Block::default()
                    .title("카테고리 (c)")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );
        f.render_widget(category, chunks[0]);

        let sort = Paragraph::new(self.query.sort.label())
            .style(Styles::default())
            .block(
                Block::default()
                    .title("정렬 (s)")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );
        f.render_widget(sort, chunks[1]);

        self.search_input
            .set_focus(self.mode == ListMode::Search);
        self.search_input.render(f, chunks[2]);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, view: &PageView) {
        let title = format!(
            "{} - {}건",
            self.board.title(),
            format_count(view.total_matches as u64)
        );

        if view.rows.is_empty() {
            let empty_message = if view.total_matches == 0 {
                "게시글이 없습니다. 검색 조건을 바꿔보세요."
            } else {
                "이 페이지에는 게시글이 없습니다."
            };
            let empty_widget = Paragraph::new(empty_message).style(Styles::inactive()).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );
            f.render_widget(empty_widget, area);
            return;
        }

        let header = ListItem::new(Line::from(vec![
            Span::styled("번호 ", Styles::title()),
            Span::styled("│ 제목                              ", Styles::title()),
            Span::styled("│ 카테고리     ", Styles::title()),
            Span::styled("│ 작성자   ", Styles::title()),
            Span::styled("│ 날짜       ", Styles::title()),
            Span::styled("│ 조회수  ", Styles::title()),
            Span::styled("│ 추천  ", Styles::title()),
            Span::styled("│ 관리", Styles::title()),
        ]));

        let items: Vec<ListItem> = std::iter::once(header)
            .chain(view.rows.iter().enumerate().map(|(i, row)| {
                let style = if Some(i) == self.table_state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };

                let mut spans = vec![Span::styled(
                    format!("{:4} │ ", row.id),
                    style,
                )];
                spans.push(Span::styled(truncate_text(&row.title, 34), style));
                if !row.tags.is_empty() {
                    spans.push(Span::styled(
                        format!(" {}", row.tags.join(" ")),
                        if Some(i) == self.table_state.selected() {
                            style
                        } else {
                            Styles::tag()
                        },
                    ));
                }
                spans.push(Span::styled(
                    format!(
                        "│ {}│ {}│ {} │ {}│ {}│ {}",
                        truncate_text(&row.category, 13),
                        truncate_text(&row.author, 9),
                        row.date,
                        truncate_text(&format_count(row.views), 8),
                        truncate_text(&format_count(row.likes), 6),
                        if row.mine { "수정/삭제" } else { "-" }
                    ),
                    style,
                ));

                ListItem::new(Line::from(spans))
            }))
            .collect();

        let table = List::new(items).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );
        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_bottom(&self, f: &mut Frame, area: Rect, view: &PageView) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let instructions = vec![
            Line::from("↑/↓: 이동 | ←/→: 페이지 | Enter: 상세보기 | /: 검색 | r: 초기화"),
            Line::from("w: 글쓰기 | e: 수정 | d: 삭제 | ESC: 게시판 목록"),
        ];
        let instructions_widget = Paragraph::new(instructions).style(Styles::info()).block(
            Block::default()
                .title("단축키")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(instructions_widget, chunks[0]);

        let mut spans: Vec<Span> = Vec::new();
        for control in &view.strip {
            let style = if control.active {
                Styles::selected()
            } else if control.disabled {
                Styles::inactive()
            } else {
                Styles::default()
            };
            spans.push(Span::styled(format!(" {} ", control.label), style));
        }
        let strip_widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(format!("페이지 {}/{}", view.page, view.total_pages))
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(strip_widget, chunks[1]);
    }

    /// Draw the write/edit prompt or the delete confirmation over the list.
    pub fn draw_popups(&mut self, f: &mut Frame, area: Rect) {
        match self.mode {
            ListMode::Write | ListMode::Edit(_) => {
                let popup_area = centered_rect(60, 20, area);
                f.render_widget(Clear, popup_area);

                let title = match self.mode {
                    ListMode::Write => "글쓰기 - 제목 입력 (Enter 등록, ESC 취소)",
                    _ => "수정 - 제목 입력 (Enter 저장, ESC 취소)",
                };
                let block = Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Styles::warning());
                let inner = block.inner(popup_area);
                f.render_widget(block, popup_area);

                let prompt_chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(0)])
                    .split(inner);
                self.prompt.set_focus(true);
                self.prompt.render(f, prompt_chunks[0]);
            }
            ListMode::ConfirmDelete(id) => {
                let popup_area = centered_rect(50, 15, area);
                f.render_widget(Clear, popup_area);

                let confirm = Paragraph::new(format!(
                    "{}번 글을 정말 삭제하시겠습니까?\n\ny: 삭제 | n/ESC: 취소",
                    id
                ))
                .style(Styles::warning())
                .block(
                    Block::default()
                        .title("삭제 확인")
                        .borders(Borders::ALL)
                        .border_style(Styles::error()),
                );
                f.render_widget(confirm, popup_area);
            }
            ListMode::Browse | ListMode::Search => {}
        }
    }
}
