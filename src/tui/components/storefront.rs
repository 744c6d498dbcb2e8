//! # Storefront Screen
//!
//! The signed-in landing page: product cards in a scrollable column.
//! Up/Down move the selection, Enter "buys" (the demo has no checkout, so
//! the reducer only answers on the status line), Esc logs off.
//!
//! Cards are laid out the scroll-view way: each product becomes a bordered
//! paragraph with a measured height, stacked into a `ScrollView` that is
//! kept scrolled to the selection.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Product;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_column;
use crate::tui::components::login::{render_heading, render_hint_line};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontEvent {
    /// Buy the catalog item at this index.
    Buy(usize),
    /// Return to the login screen.
    LogOff,
}

pub struct Storefront {
    /// Catalog to display (Prop, fixed at mount)
    pub products: Vec<Product>,
    /// Index of the highlighted card
    pub selected: usize,
    store_name: String,
    scroll_state: ScrollViewState,
}

struct RenderedCard<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> RenderedCard<'a> {
    fn new(product: &'a Product, content_width: u16, is_selected: bool) -> Self {
        let (style, border_style) = if is_selected {
            (
                Style::default().bg(Color::DarkGray),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        };

        let lines = vec![
            Line::styled(
                product.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(product.price.as_str(), Style::default().fg(Color::Green)),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            )
            .style(style)
            .wrap(Wrap { trim: true });

        let inner_width = content_width.saturating_sub(2);
        let height = paragraph.line_count(inner_width) as u16;

        RenderedCard { paragraph, height }
    }
}

impl Storefront {
    pub fn new(store_name: String, products: Vec<Product>) -> Self {
        Self {
            products,
            selected: 0,
            store_name,
            scroll_state: ScrollViewState::default(),
        }
    }
}

/// Adjust the scroll offset so the selected card is fully visible.
fn scroll_to_selected(
    scroll_state: &mut ScrollViewState,
    selected: usize,
    heights: &[u16],
    viewport_height: u16,
) {
    let top: u16 = heights[..selected].iter().sum();
    let bottom = top + heights.get(selected).copied().unwrap_or(0);

    let mut offset = scroll_state.offset().y;
    if top < offset {
        offset = top;
    } else if bottom > offset + viewport_height {
        offset = bottom.saturating_sub(viewport_height);
    }
    scroll_state.set_offset(Position::new(0, offset));
}

impl EventHandler for Storefront {
    type Event = StorefrontEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::FocusPrev => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::FocusNext => {
                if !self.products.is_empty() {
                    self.selected = (self.selected + 1).min(self.products.len() - 1);
                }
                None
            }
            TuiEvent::Submit => {
                if self.products.is_empty() {
                    None
                } else {
                    Some(StorefrontEvent::Buy(self.selected))
                }
            }
            TuiEvent::Escape => Some(StorefrontEvent::LogOff),
            _ => None,
        }
    }
}

impl Component for Storefront {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let column = centered_column(70, area);

        let [heading_area, _, cards_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(column);

        render_heading(
            frame,
            heading_area,
            &format!("Welcome to {}", self.store_name),
        );
        render_hint_line(frame, hint_area, "↑/↓ Browse  Enter Buy  Esc Log off");

        if self.products.is_empty() {
            let empty = Paragraph::new("The shelves are empty.")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, cards_area);
            return;
        }

        // Reserve a column for the scrollbar.
        let content_width = cards_area.width.saturating_sub(1);

        let cards: Vec<RenderedCard> = self
            .products
            .iter()
            .enumerate()
            .map(|(index, product)| RenderedCard::new(product, content_width, index == self.selected))
            .collect();

        let heights: Vec<u16> = cards.iter().map(|c| c.height).collect();
        scroll_to_selected(
            &mut self.scroll_state,
            self.selected,
            &heights,
            cards_area.height,
        );

        let total_height: u16 = heights.iter().sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for card in cards {
            let card_rect = Rect::new(0, y_offset, content_width, card.height);
            scroll_view.render_widget(card.paragraph, card_rect);
            y_offset += card.height;
        }

        frame.render_stateful_widget(scroll_view, cards_area, &mut self.scroll_state);
    }
}
