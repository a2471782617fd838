//! Terminal painter: redraws the whole screen whenever it changes

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use tokio_util::sync::CancellationToken;

use crate::render::{TableRow, TABLE_COLUMNS};
use crate::screen::{Screen, ScreenHandle};

const HEADERS: [&str; TABLE_COLUMNS] = ["ID", "Status", "Fecha", "IP"];
const LOADING_TEXT: &str = "Cargando...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Title,
    Status,
    Loading,
    Header,
    Plain,
    Error,
    Disabled,
}

/// Draws a [`Screen`] to stdout
#[derive(Debug, Clone)]
pub struct TerminalPainter {
    title: String,
}

impl TerminalPainter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn layout(&self, screen: &Screen) -> Vec<(Tone, String)> {
        let mut lines = vec![(Tone::Title, self.title.clone()), (Tone::Plain, String::new())];

        if screen.loading {
            lines.push((Tone::Loading, LOADING_TEXT.to_string()));
        }
        if screen.status_visible {
            lines.push((Tone::Status, format!("Último estado: {}", screen.status)));
        }
        lines.push((Tone::Plain, String::new()));

        let cells: Vec<[&str; TABLE_COLUMNS]> = screen
            .rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Record {
                    id,
                    status,
                    date,
                    ip,
                } => Some([id.as_str(), status.as_str(), date.as_str(), ip.as_str()]),
                TableRow::Error { .. } => None,
            })
            .collect();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let join = |row: [&str; TABLE_COLUMNS]| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        lines.push((Tone::Header, join(HEADERS)));
        let mut cells = cells.into_iter();
        for row in &screen.rows {
            match row {
                TableRow::Record { .. } => {
                    if let Some(cells) = cells.next() {
                        lines.push((Tone::Plain, join(cells)));
                    }
                }
                TableRow::Error { message } => lines.push((Tone::Error, message.clone())),
            }
        }

        if !screen.buttons.is_empty() {
            lines.push((Tone::Plain, String::new()));
            let tone = if screen.buttons_enabled {
                Tone::Plain
            } else {
                Tone::Disabled
            };
            for (index, command) in screen.buttons.iter().enumerate() {
                lines.push((tone, format!("  [{:>2}] {}", index + 1, command)));
            }
        }

        lines
    }

    /// Plain-text rendering, one string per terminal line
    pub fn render_lines(&self, screen: &Screen) -> Vec<String> {
        self.layout(screen).into_iter().map(|(_, line)| line).collect()
    }

    pub fn paint(&self, screen: &Screen) -> io::Result<()> {
        self.paint_to(&mut io::stdout().lock(), screen)
    }

    /// Overwrite the drawing in place from the top-left corner. Each line
    /// clears its own tail; below the drawing is cleared once at the end.
    pub fn paint_to<W: Write>(&self, out: &mut W, screen: &Screen) -> io::Result<()> {
        out.queue(MoveTo(0, 0))?;
        for (tone, line) in self.layout(screen) {
            let styled = match tone {
                Tone::Title => line.bold(),
                Tone::Status => line.green(),
                Tone::Loading => line.yellow(),
                Tone::Header => line.underlined(),
                Tone::Plain => line.reset(),
                Tone::Error => line.red(),
                Tone::Disabled => line.dark_grey(),
            };
            out.queue(PrintStyledContent(styled))?
                .queue(Clear(ClearType::UntilNewLine))?;
            out.write_all(b"\r\n")?;
        }
        out.queue(Clear(ClearType::FromCursorDown))?;
        out.flush()
    }
}

/// Repaint on every screen revision until cancelled
pub async fn run_painter(screen: ScreenHandle, painter: TerminalPainter, cancel: CancellationToken) {
    let mut changes = screen.subscribe();
    loop {
        if let Err(e) = painter.paint(&screen.snapshot()) {
            tracing::warn!("Failed to paint screen: {}", e);
        }
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = cancel.cancelled() => {
                tracing::debug!("Painter stopped");
                break;
            }
        }
    }
}
