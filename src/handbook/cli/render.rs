use chrono::{DateTime, Utc};
use colored::Colorize;
use handbook::api::{CmdMessage, MessageLevel, PageSummary};
use handbook::config::HandbookConfig;
use handbook::model::{EntryKind, Page};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const COPY_MARKER: &str = "⧉";
const INFO_MARKER: &str = "ℹ";

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

pub(super) fn print_page_list(pages: &[PageSummary]) {
    if pages.is_empty() {
        println!("No pages yet. Add one with `handbook page add <name>`.");
        return;
    }

    for summary in pages {
        let counts = format!(
            "{} {}, {} {}",
            summary.category_count,
            plural(summary.category_count, "category", "categories"),
            summary.entry_count,
            plural(summary.entry_count, "entry", "entries"),
        );
        let left = format!("  {}  {}", summary.name, summary.id.dimmed());
        let left_width = summary.name.width() + summary.id.width() + 4;

        let available = LINE_WIDTH.saturating_sub(TIME_WIDTH + counts.width());
        let padding = available.saturating_sub(left_width).max(1);

        println!(
            "{}{}{}{}",
            left,
            " ".repeat(padding),
            counts,
            format_time_ago(summary.updated_at).dimmed()
        );
    }
}

pub(super) fn print_page(page: &Page) {
    println!("{} {}", page.name.bold(), page.id.dimmed());

    if page.categories.is_empty() {
        println!();
        println!("  No categories yet.");
        return;
    }

    for category in &page.categories {
        println!();
        println!("  {} {}", category.name.bold().underline(), category.id.dimmed());

        if category.entries.is_empty() {
            println!("    {}", "No entries yet".dimmed());
            continue;
        }

        for entry in &category.entries {
            let marker = match entry.kind {
                EntryKind::Copyable => COPY_MARKER.cyan(),
                EntryKind::Info => INFO_MARKER.blue(),
            };
            println!("    {} {}  {}", marker, entry.title, entry.id.dimmed());

            let preview_width = LINE_WIDTH.saturating_sub(6);
            let preview: String = entry
                .content
                .chars()
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            println!("      {}", truncate_to_width(&preview, preview_width).dimmed());
        }
    }
}

pub(super) fn print_config(config: &HandbookConfig) {
    for key in HandbookConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
