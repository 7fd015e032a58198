use crate::model::{AllocationStatus, Gender, RoomStatus};
use crate::ui::app::{App, FocusPanel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};

// Brand colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // available beds
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // focus, full rooms
const BRAND_RED: Color = Color::Rgb(0xA8, 0x45, 0x45); // maintenance, expired
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // footer

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const COUNT_COLOR: Color = BRAND_GREEN;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    let help = footer_text(
        app,
        " ←→ Panel | ↑↓ Select | Enter Room | a Allocations | n New Room | x Remove | q Quit ",
    );
    draw_footer(frame, chunks[2], &help);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.inventory.stats();
    let title = format!(
        " Hostel Inventory | {} hostels | {} beds | {} active allocations | {:.1}% occupied ",
        stats.total_hostels, stats.total_capacity, stats.active_allocations, stats.occupancy_rate
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(15), // Genders
        Constraint::Percentage(35), // Hostels
        Constraint::Percentage(50), // Rooms
    ])
    .split(area);

    draw_genders(frame, chunks[0], app);
    draw_hostels(frame, chunks[1], app);
    draw_rooms(frame, chunks[2], app);
}

fn focus_border(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    }
}

fn item_style(is_selected: bool, is_focused: bool) -> Style {
    if is_selected && is_focused {
        SELECTED_STYLE
    } else if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn focus_marker(is_selected: bool, is_focused: bool) -> &'static str {
    if is_selected && is_focused {
        " ◄"
    } else {
        ""
    }
}

fn draw_genders(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Genders;

    // "All" first, then each gender
    let labels =
        std::iter::once("All".to_string()).chain(Gender::ALL.iter().map(Gender::to_string));

    let items: Vec<ListItem> = labels
        .enumerate()
        .map(|(i, label)| {
            let is_selected = i == app.selected_gender;
            ListItem::new(Line::from(vec![
                Span::styled(label, item_style(is_selected, is_focused)),
                Span::styled(
                    focus_marker(is_selected, is_focused),
                    Style::default().fg(BRAND_ORANGE),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Gender ")
            .borders(Borders::ALL)
            .border_style(focus_border(is_focused)),
    );

    frame.render_widget(list, area);
}

fn draw_hostels(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Hostels;
    let hostels = app.get_filtered_hostels();

    let items: Vec<ListItem> = hostels
        .iter()
        .enumerate()
        .map(|(i, hostel)| {
            let is_selected = i == app.selected_hostel;

            let content = Line::from(vec![
                Span::styled(&hostel.name, item_style(is_selected, is_focused)),
                Span::raw(" "),
                Span::styled(
                    format!("({}/{})", hostel.available_rooms, hostel.capacity),
                    Style::default().fg(COUNT_COLOR),
                ),
                Span::styled(
                    focus_marker(is_selected, is_focused),
                    Style::default().fg(BRAND_ORANGE),
                ),
            ]);

            ListItem::new(content)
        })
        .collect();

    let title = format!(
        " Hostels: {} ({}) ",
        app.get_selected_gender_name(),
        hostels.len()
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_border(is_focused)),
    );

    frame.render_widget(list, area);
}

fn status_color(status: RoomStatus) -> Color {
    match status {
        RoomStatus::Available => BRAND_GREEN,
        RoomStatus::Full => BRAND_ORANGE,
        RoomStatus::Maintenance => BRAND_RED,
    }
}

fn draw_rooms(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Rooms;
    let rooms = app.get_hostel_rooms();

    let hostel_name = app
        .get_selected_hostel()
        .map(|h| h.name.clone())
        .unwrap_or_default();

    // Calculate visible area (subtract 3 for borders and header)
    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = scroll_offset(app.selected_room, visible_rows);

    let header = Row::new(vec!["Room", "Beds", "Occupants", "Status"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = rooms
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, room)| {
            let style = item_style(i == app.selected_room, is_focused);
            Row::new(vec![
                Line::from(room.room_number.clone()),
                Line::from(format!("{}-bed", room.capacity)),
                Line::from(format!("{} / {}", room.occupants.len(), room.capacity)),
                Line::from(Span::styled(
                    room.status.to_string(),
                    Style::default().fg(status_color(room.status)),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ];

    let title = format!(" {} ({} rooms) ", hostel_name, rooms.len());
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_border(is_focused)),
    );

    frame.render_widget(table, area);
    draw_scrollbar(frame, area, rooms.len(), visible_rows, app.selected_room);
}

/// Keeps the selected row inside the visible window.
fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if selected >= visible_rows {
        selected - visible_rows + 1
    } else {
        0
    }
}

fn draw_scrollbar(frame: &mut Frame, area: Rect, len: usize, visible_rows: usize, position: usize) {
    if len <= visible_rows || area.height < 3 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(len).position(position);

    let scrollbar_area = Rect {
        x: area.x + area.width - 1,
        y: area.y + 2,
        width: 1,
        height: area.height - 3,
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

/// Key help, replaced by the outcome of the last edit while one is pending.
fn footer_text(app: &App, help: &str) -> String {
    app.status_message
        .as_ref()
        .map_or_else(|| help.to_string(), |message| format!(" {message} "))
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn allocation_status_color(status: AllocationStatus) -> Color {
    match status {
        AllocationStatus::Active => BRAND_GREEN,
        AllocationStatus::Pending => BRAND_ORANGE,
        AllocationStatus::Expired => BRAND_RED,
    }
}

pub fn draw_room_detail(frame: &mut Frame, app: &App) {
    let room = match app.get_selected_room() {
        Some(r) => r,
        None => return,
    };
    let hostel = match app.get_selected_hostel() {
        Some(h) => h,
        None => return,
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: room
        Constraint::Length(3), // Info: Hostel | Beds | Price | Room X/Y
        Constraint::Min(6),    // Allocations
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(format!(" Room {} | {} ", room.room_number, hostel.name))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let room_count = app.get_hostel_rooms().len();
    let info_text = format!(
        "{}-bed  |  {} / {} occupied  |  {}  |  Session price: {}  |  Room {}/{}",
        room.capacity,
        room.occupants.len(),
        room.capacity,
        room.status,
        hostel.price_for(room.capacity),
        app.selected_room + 1,
        room_count
    );
    let info_widget = Paragraph::new(info_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info_widget, chunks[1]);

    let allocations = app.get_room_allocations();
    let rows: Vec<Row> = allocations
        .iter()
        .map(|a| {
            Row::new(vec![
                Line::from(a.bed_space.clone()),
                Line::from(a.student_name.clone()),
                Line::from(a.student_matric.clone()),
                Line::from(a.amount_paid.to_string()),
                Line::from(Span::styled(
                    a.status.to_string(),
                    Style::default().fg(allocation_status_color(a.status)),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(12),
        Constraint::Percentage(25),
        Constraint::Percentage(28),
        Constraint::Percentage(18),
        Constraint::Percentage(17),
    ];
    let table_header =
        Row::new(vec!["Bed", "Student", "Matric", "Paid", "Status"]).style(HEADER_STYLE);

    let title = if allocations.is_empty() {
        " Occupants (room is empty) ".to_string()
    } else {
        format!(" Occupants ({}) ", allocations.len())
    };
    let table = Table::new(rows, widths)
        .header(table_header)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(table, chunks[2]);

    let help = footer_text(
        app,
        " Esc Back | ←→ Room | m Maintenance | Enter Allocations | q Quit ",
    );
    draw_footer(frame, chunks[3], &help);
}

pub fn draw_allocation_browser(frame: &mut Frame, app: &App) {
    let hostel = match app.get_selected_hostel() {
        Some(h) => h,
        None => return,
    };
    let allocations = app.get_hostel_allocations();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Allocation list
        Constraint::Length(3), // Footer / status
    ])
    .split(frame.area());

    let active = allocations.iter().filter(|a| a.is_active()).count();
    let header = Paragraph::new(format!(
        " Allocations: {} ({} active of {}) ",
        hostel.name,
        active,
        allocations.len()
    ))
    .style(HEADER_STYLE)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let visible_rows = (chunks[1].height as usize).saturating_sub(3);
    let offset = scroll_offset(app.selected_allocation, visible_rows);

    let table_header = Row::new(vec![
        "Ref ID", "Student", "Matric", "Room", "Bed", "Date", "Paid", "Status",
    ])
    .style(HEADER_STYLE)
    .height(1);

    let rows: Vec<Row> = allocations
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(i, a)| {
            let style = if i == app.selected_allocation {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            Row::new(vec![
                Line::from(a.reference()),
                Line::from(a.student_name.clone()),
                Line::from(a.student_matric.clone()),
                Line::from(a.room_number.clone()),
                Line::from(a.bed_space.clone()),
                Line::from(a.date_allocated.clone()),
                Line::from(a.amount_paid.to_string()),
                Line::from(Span::styled(
                    a.status.to_string(),
                    Style::default().fg(allocation_status_color(a.status)),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(14),
        Constraint::Percentage(14),
        Constraint::Percentage(18),
        Constraint::Percentage(8),
        Constraint::Percentage(8),
        Constraint::Percentage(13),
        Constraint::Percentage(12),
        Constraint::Percentage(13),
    ];

    let table = Table::new(rows, widths)
        .header(table_header)
        .block(Block::default().title(" Allocations ").borders(Borders::ALL));
    frame.render_widget(table, chunks[1]);
    draw_scrollbar(
        frame,
        chunks[1],
        allocations.len(),
        visible_rows,
        app.selected_allocation,
    );

    let help = footer_text(app, " Esc Back | ↑↓ Navigate | r Revoke | q Quit ");
    draw_footer(frame, chunks[2], &help);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{builtin_templates, generate_inventory};
    use crate::ui::app::View;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn app(view: View) -> App {
        let mut rng = StdRng::seed_from_u64(31);
        let mut app = App::new(generate_inventory(&builtin_templates(), &mut rng).unwrap());
        app.view = view;
        app
    }

    fn render(view: View) -> String {
        render_app(&app(view))
    }

    fn render_app(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal
            .draw(|frame| match app.view {
                View::Dashboard => draw_dashboard(frame, app),
                View::RoomDetail => draw_room_detail(frame, app),
                View::AllocationBrowser => draw_allocation_browser(frame, app),
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn dashboard_lists_hostels_and_rooms() {
        let screen = render(View::Dashboard);
        assert!(screen.contains("Hostel Inventory | 7 hostels"));
        assert!(screen.contains("Peace Hall"));
        assert!(screen.contains("401"));
    }

    #[test]
    fn room_detail_shows_room_header() {
        let screen = render(View::RoomDetail);
        assert!(screen.contains("Room 401 | Peace Hall"));
    }

    #[test]
    fn room_detail_footer_shows_edit_outcome() {
        let screen = render(View::RoomDetail);
        assert!(screen.contains("m Maintenance"));

        let mut app = app(View::RoomDetail);
        app.status_message = Some("Room 401 set to Maintenance".to_string());
        let screen = render_app(&app);
        assert!(screen.contains("Room 401 set to Maintenance"));
        assert!(!screen.contains("m Maintenance"));
    }

    #[test]
    fn allocation_browser_shows_hostel() {
        let screen = render(View::AllocationBrowser);
        assert!(screen.contains("Allocations: Peace Hall"));
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(3, 10), 0);
        assert_eq!(scroll_offset(12, 10), 3);
    }
}
