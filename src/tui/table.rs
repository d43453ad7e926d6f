//! Rendering for the three screens: loading, error and the project table
//! with its pagination bar.

use crate::data::Project;
use crate::pagination::Pager;
use crate::tui::{styles::Theme, Frame};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

/// Full-screen loading indicator, shown while the fetch is in flight.
pub fn render_loading(frame: &mut Frame, area: Rect, theme: &Theme) {
    let paragraph = Paragraph::new("Loading projects...")
        .style(theme.text_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" fundview "),
        );
    frame.render_widget(paragraph, centered_line(area));
}

/// Full-screen error region; replaces the whole table UI.
pub fn render_error(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let paragraph = Paragraph::new(format!("Error: {}", message))
        .style(theme.error_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" fundview "),
        );
    frame.render_widget(paragraph, centered_line(area));
}

/// The project table for the current page plus the pagination controls.
pub fn render_projects(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    projects: &[Project],
    pager: &Pager,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // table
            Constraint::Length(1), // "Page X of Y"
            Constraint::Length(1), // pagination bar
            Constraint::Length(1), // key hints
        ])
        .split(area);

    render_table(frame, chunks[0], theme, projects, pager);
    render_page_info(frame, chunks[1], theme, pager);
    render_pagination_bar(frame, chunks[2], theme, pager);
    render_help(frame, chunks[3], theme);
}

fn render_table(frame: &mut Frame, area: Rect, theme: &Theme, projects: &[Project], pager: &Pager) {
    let header = Row::new(vec![
        Cell::from("S.No."),
        Cell::from("Percentage Funded"),
        Cell::from("Amount Pledged"),
    ])
    .style(theme.header_style())
    .height(1);

    let rows: Vec<Row> = projects[pager.page_range()]
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(project.serial_no.to_string()),
                Cell::from(project.percentage_funded.to_string()),
                Cell::from(project.amount_pledged.to_string()),
            ])
            .style(theme.text_style())
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Percentage(46),
            Constraint::Percentage(46),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Projects "),
    );

    frame.render_widget(table, area);
}

fn render_page_info(frame: &mut Frame, area: Rect, theme: &Theme, pager: &Pager) {
    let info = Paragraph::new(format!(
        "Page {} of {}",
        pager.current_page(),
        pager.total_pages()
    ))
    .style(theme.text_style())
    .alignment(Alignment::Center);
    frame.render_widget(info, area);
}

fn render_pagination_bar(frame: &mut Frame, area: Rect, theme: &Theme, pager: &Pager) {
    let bar = Paragraph::new(pagination_line(theme, pager)).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = Paragraph::new("←/→ page  Home/End first/last  1-9,0 jump  q quit")
        .style(theme.help_style())
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

/// Build the pagination bar: Previous, the visible page numbers with the
/// current one highlighted, Next. Previous/Next are dimmed when disabled.
fn pagination_line<'a>(theme: &Theme, pager: &Pager) -> Line<'a> {
    let mut spans = Vec::new();

    let previous_style = if pager.has_previous() {
        theme.control_style()
    } else {
        theme.disabled_style()
    };
    spans.push(Span::styled("Previous ", previous_style));

    for page in pager.visible_window() {
        if page == pager.current_page() {
            spans.push(Span::styled(
                format!("[{}]", page),
                theme.current_page_style(),
            ));
            spans.push(Span::raw(" "));
        } else {
            spans.push(Span::styled(format!("{} ", page), theme.control_style()));
        }
    }

    let next_style = if pager.has_next() {
        theme.control_style()
    } else {
        theme.disabled_style()
    };
    spans.push(Span::styled("Next", next_style));

    Line::from(spans)
}

/// A short centered band so the loading/error text does not sit at the
/// very top of a tall terminal.
fn centered_line(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn sample_projects(count: usize) -> Vec<Project> {
        (0..count)
            .map(|i| Project {
                serial_no: i as u64,
                amount_pledged: (1000 + i) as f64,
                percentage_funded: (50 + i) as f64,
                title: format!("Project {}", i),
                blurb: String::new(),
                by: String::new(),
                country: "US".to_string(),
                currency: "usd".to_string(),
                end_time: String::new(),
                location: String::new(),
                num_backers: String::new(),
                state: String::new(),
                kind: String::new(),
                url: String::new(),
            })
            .collect()
    }

    fn render_to_text<F>(render: F) -> String
    where
        F: FnOnce(&mut Frame, Rect, &Theme),
    {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render(frame, area, &theme);
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn loading_screen_shows_indicator() {
        let text = render_to_text(|frame, area, theme| render_loading(frame, area, theme));
        assert!(text.contains("Loading projects..."));
    }

    #[test]
    fn error_screen_shows_message() {
        let text = render_to_text(|frame, area, theme| {
            render_error(frame, area, theme, "Failed to fetch data")
        });
        assert!(text.contains("Error: Failed to fetch data"));
    }

    #[test]
    fn first_page_shows_first_five_rows_and_label() {
        let projects = sample_projects(25);
        let mut pager = Pager::new(5, 10);
        pager.set_total_items(projects.len());

        let text = render_to_text(|frame, area, theme| {
            render_projects(frame, area, theme, &projects, &pager)
        });

        assert!(text.contains("Page 1 of 5"));
        assert!(text.contains("S.No."));
        // items 0-4 on page 1, item 5 on page 2
        assert!(text.contains("1000"));
        assert!(text.contains("1004"));
        assert!(!text.contains("1005"));
        // current page highlighted, window shows every page
        assert!(text.contains("[1]"));
        assert!(text.contains("5 Next"));
    }

    #[test]
    fn empty_collection_renders_page_one_of_one() {
        let projects = sample_projects(0);
        let mut pager = Pager::new(5, 10);
        pager.set_total_items(0);

        let text = render_to_text(|frame, area, theme| {
            render_projects(frame, area, theme, &projects, &pager)
        });

        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("[1]"));
    }

    #[test]
    fn last_page_renders_remaining_rows() {
        let projects = sample_projects(23);
        let mut pager = Pager::new(5, 10);
        pager.set_total_items(projects.len());
        pager.last_page();

        let text = render_to_text(|frame, area, theme| {
            render_projects(frame, area, theme, &projects, &pager)
        });

        assert!(text.contains("Page 5 of 5"));
        assert!(text.contains("1022"));
        assert!(text.contains("[5]"));
    }
}
