//! Board picker screen for the commu TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::BoardKind;
use crate::tui::ui::Styles;

/// Board picker state
pub struct BoardsScreen {
    pub list_state: ListState,
}

impl BoardsScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    pub fn selected_board(&self) -> BoardKind {
        let idx = self.list_state.selected().unwrap_or(0);
        BoardKind::ALL[idx.min(BoardKind::ALL.len() - 1)]
    }

    pub fn select_board(&mut self, kind: BoardKind) {
        if let Some(idx) = BoardKind::ALL.iter().position(|k| *k == kind) {
            self.list_state.select(Some(idx));
        }
    }

    pub fn next(&mut self) {
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(Some((selected + 1) % BoardKind::ALL.len()));
    }

    pub fn previous(&mut self) {
        let selected = self.list_state.selected().unwrap_or(0);
        let new_selected = if selected == 0 {
            BoardKind::ALL.len() - 1
        } else {
            selected - 1
        };
        self.list_state.select(Some(new_selected));
    }

    /// Draw the board picker; `counts` holds the post count per board in
    /// `BoardKind::ALL` order.
    pub fn draw(&mut self, f: &mut Frame, area: Rect, counts: &[usize]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Board list
                Constraint::Length(4), // Instructions
            ])
            .split(area);

        let title = Paragraph::new("커뮤니티 게시판")
            .style(Styles::title().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = BoardKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let style = if Some(i) == self.list_state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };

                let count = counts.get(i).copied().unwrap_or(0);
                let content = vec![
                    Line::from(vec![
                        Span::styled(format!("[{}] ", i + 1), Styles::info()),
                        Span::styled(kind.title(), style.add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("     {} · 게시글 {}개", kind.as_str(), count),
                        if Some(i) == self.list_state.selected() {
                            style
                        } else {
                            Styles::inactive()
                        },
                    )),
                ];

                ListItem::new(content)
            })
            .collect();

        let menu = List::new(items)
            .block(
                Block::default()
                    .title("게시판 선택")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            )
            .highlight_style(Styles::selected());
        f.render_stateful_widget(menu, chunks[1], &mut self.list_state);

        let instructions = vec![
            Line::from(vec![
                Span::styled("이동: ", Styles::info()),
                Span::raw("↑/↓, "),
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" 입장, "),
                Span::styled("1-3", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" 바로가기"),
            ]),
            Line::from(vec![
                Span::styled("전역: ", Styles::info()),
                Span::styled("F1/?", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" 도움말, "),
                Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" 종료"),
            ]),
        ];
        let instructions_paragraph = Paragraph::new(instructions).block(
            Block::default()
                .title("안내")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(instructions_paragraph, chunks[2]);
    }
}
