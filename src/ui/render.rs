use crate::inventory::InventorySnapshot;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, QUANTITY_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem};
use ratatui::Frame;

/// Text of each list entry, `name: quantity`, in name order.
pub fn entry_lines(snapshot: &InventorySnapshot) -> Vec<String> {
    snapshot
        .iter()
        .map(|(name, amount)| format!("{}: {}", name, amount))
        .collect()
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let snapshot = app.snapshot();

    frame.render_widget(
        Header::new(app.service_url(), snapshot.len()).widget(),
        header,
    );
    frame.render_widget(Clear, body);
    frame.render_widget(stock_list(snapshot), body);
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn stock_list(snapshot: &InventorySnapshot) -> List<'_> {
    let items: Vec<ListItem> = snapshot
        .iter()
        .map(|(name, amount)| {
            ListItem::new(Line::from(vec![
                Span::styled(name.as_str(), Style::default().fg(HEADER_TEXT)),
                Span::styled(": ", Style::default().fg(HEADER_TEXT)),
                Span::styled(amount.to_string(), Style::default().fg(QUANTITY_TEXT)),
            ]))
        })
        .collect();

    List::new(items).block(
        Block::default()
            .title(Span::styled(" Stocks ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
