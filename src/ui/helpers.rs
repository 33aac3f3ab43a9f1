use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Dots marking the visible carousel slot, e.g. `○ ● ○ ○ ○`.
pub(crate) fn carousel_dots(index: usize, len: usize) -> String {
    (0..len)
        .map(|slot| if slot == index { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short chart label for a breed: the first word of its name, so labels
/// stay narrow enough to share the x axis.
pub(crate) fn axis_label(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Fixed-size rectangle pinned to the top-right corner of `area`, shrunk to
/// fit when the terminal is smaller. Used for toasts.
pub(crate) fn top_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
