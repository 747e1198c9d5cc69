use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use tickoff::api::{CmdMessage, Counts, MessageLevel};
use tickoff::error::{Result, TickoffError};
use tickoff::model::Todo;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const DONE_MARKER: &str = "[x]";
const PENDING_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(TickoffError::Serialization)?;
    println!("{}", json);
    Ok(())
}

pub(super) fn print_heading(text: &str) {
    println!("\n{}", format!("==> {}", text).bold());
}

pub(super) fn print_todos(todos: &[Todo]) {
    for line in render_todo_lines(todos, Utc::now()) {
        println!("{}", line);
    }
}

pub(super) fn print_counts(counts: &Counts) {
    println!("{}", render_counts(counts));
}

/// One aligned line per todo: index, state marker, task, age.
fn render_todo_lines(todos: &[Todo], now: DateTime<Utc>) -> Vec<String> {
    let id_width = todos
        .iter()
        .map(|t| t.id().to_string().width())
        .max()
        .unwrap_or(0);

    todos
        .iter()
        .map(|todo| {
            let id_str = format!("{:>width$}", todo.id().to_string(), width = id_width);
            let marker = if todo.is_completed() {
                DONE_MARKER
            } else {
                PENDING_MARKER
            };

            let fixed_width = 2 + id_width + 1 + marker.width() + 1 + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed_width);
            let task = truncate_to_width(todo.task(), available);
            let padding = available.saturating_sub(task.width());

            let (id_colored, marker_colored, task_colored) = if todo.is_completed() {
                (
                    id_str.dimmed(),
                    marker.green(),
                    task.strikethrough().dimmed(),
                )
            } else {
                (id_str.yellow(), marker.normal(), task.normal())
            };

            format!(
                "  {} {} {}{}{}",
                id_colored,
                marker_colored,
                task_colored,
                " ".repeat(padding),
                format_time_ago(todo.created_at(), now).dimmed()
            )
        })
        .collect()
}

fn render_counts(counts: &Counts) -> String {
    format!(
        "{} completed, {} pending ({} total)",
        counts.completed.to_string().green(),
        counts.pending.to_string().yellow(),
        counts.total()
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
