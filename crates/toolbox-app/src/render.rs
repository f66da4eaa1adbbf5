//! Plain-text outline of a toolbox, laid out the way a host would wrap the
//! buttons at the configured panel width.

use std::fmt::Write;

use toolbox_ui::{ActionButton, Section, Toolbox, WrapBox, WrapLayout};

const EXPANDED: &str = "v";
const COLLAPSED: &str = ">";
const INDENT: &str = "  ";

/// One line per group header and one line per row of buttons. Collapsed
/// groups show only their header.
pub fn outline(toolbox: &Toolbox, layout: &WrapLayout, width: f64) -> String {
    let mut out = String::new();

    for section in toolbox.sections() {
        match section {
            Section::Group(panel) => {
                let marker = if panel.is_expanded() { EXPANDED } else { COLLAPSED };
                let _ = writeln!(out, "{marker} {}", panel.title());
                if panel.is_expanded() {
                    write_rows(&mut out, toolbox, panel.content(), layout, width);
                }
            }
            Section::Flow(wrap) => write_rows(&mut out, toolbox, wrap, layout, width),
        }
    }

    out
}

fn write_rows(out: &mut String, toolbox: &Toolbox, wrap: &WrapBox, layout: &WrapLayout, width: f64) {
    let buttons: Vec<&ActionButton> = wrap
        .children()
        .iter()
        .filter_map(|id| toolbox.button(*id))
        .collect();
    let sizes: Vec<_> = buttons
        .iter()
        .map(|b| layout.button_size(b.icon_size()))
        .collect();
    let rects = layout.compute(&sizes, width);

    let mut row_y = None;
    for (button, rect) in buttons.iter().zip(&rects) {
        if row_y != Some(rect.y) {
            if row_y.is_some() {
                out.push('\n');
            }
            out.push_str(INDENT);
            row_y = Some(rect.y);
        } else {
            out.push(' ');
        }
        out.push_str(&cell(button));
    }
    if row_y.is_some() {
        out.push('\n');
    }
}

fn cell(button: &ActionButton) -> String {
    let text = button
        .tooltip()
        .unwrap_or_else(|| button.action().to_string());
    if button.is_active() {
        format!("[*{text}]")
    } else {
        format!("[{text}]")
    }
}
