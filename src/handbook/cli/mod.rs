//! # CLI Layer
//!
//! This module is **one possible UI client** for handbook, not the application itself.
//!
//! It is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Installs a tracing subscriber
//! - Trims and validates user input before it reaches the store
//! - Asks for confirmation before destructive operations
//!
//! Business rules stay in the library: handlers call `HandbookApi` and render
//! the `CmdResult` they get back.

mod render;
mod setup;

use clap::Parser;
use handbook::api::{ConfigAction, EntryDraft};
use handbook::clipboard::copy_entry;
use handbook::commands::config;
use handbook::error::{HandbookError, Result};
use handbook::init::{initialize, resolve_data_dir, HandbookContext};
use handbook::model::EntryKind;
use render::{print_config, print_messages, print_page, print_page_list};
use setup::{CategoryCommands, Cli, Commands, EntryCommands, PageCommands};
use std::io::{self, BufRead, Write};
use tracing::Level;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir)?;
    let mut ctx = initialize(data_dir);

    match cli.command {
        None | Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Show { page }) => handle_show(&ctx, &page),
        Some(Commands::Page(cmd)) => handle_page(&mut ctx, cmd),
        Some(Commands::Category(cmd)) => handle_category(&mut ctx, cmd),
        Some(Commands::Entry(cmd)) => handle_entry(&mut ctx, cmd),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_list(ctx: &HandbookContext) -> Result<()> {
    print_page_list(&ctx.api.summaries());
    Ok(())
}

fn handle_show(ctx: &HandbookContext, page_id: &str) -> Result<()> {
    let page = ctx.api.find_page(page_id)?;
    print_page(page);
    Ok(())
}

fn handle_page(ctx: &mut HandbookContext, cmd: PageCommands) -> Result<()> {
    let result = match cmd {
        PageCommands::Add { name } => {
            let name = required("Page name", &name)?;
            let result = ctx.api.add_page(&name);
            if let Some(id) = &result.created_id {
                println!("{}", id);
            }
            result
        }
        PageCommands::Rename { page, name } => {
            let name = required("Page name", &name)?;
            ctx.api.update_page(&page, &name)
        }
        PageCommands::Rm { page, yes } => {
            let target = ctx.api.find_page(&page)?;
            let prompt = format!(
                "Delete page '{}' with {} categories and {} entries? This cannot be undone.",
                target.name,
                target.categories.len(),
                target.entry_count()
            );
            if !confirmed(ctx, yes, &prompt)? {
                println!("Operation cancelled.");
                return Ok(());
            }
            ctx.api.delete_page(&page)
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_category(ctx: &mut HandbookContext, cmd: CategoryCommands) -> Result<()> {
    let result = match cmd {
        CategoryCommands::Add { page, name } => {
            let name = required("Category name", &name)?;
            ctx.api.find_page(&page)?;
            let result = ctx.api.add_category(&page, &name);
            if let Some(id) = &result.created_id {
                println!("{}", id);
            }
            result
        }
        CategoryCommands::Rename {
            page,
            category,
            name,
        } => {
            let name = required("Category name", &name)?;
            ctx.api.update_category(&page, &category, &name)
        }
        CategoryCommands::Rm { page, category } => ctx.api.delete_category(&page, &category),
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_entry(ctx: &mut HandbookContext, cmd: EntryCommands) -> Result<()> {
    let result = match cmd {
        EntryCommands::Add {
            page,
            category,
            title,
            content,
            info,
        } => {
            let kind = if info { EntryKind::Info } else { EntryKind::Copyable };
            let draft = EntryDraft::new(
                required("Title", &title)?,
                required("Content", &content)?,
                kind,
            );
            ctx.api.find_category(&page, &category)?;
            let result = ctx.api.add_entry(&page, &category, &draft);
            if let Some(id) = &result.created_id {
                println!("{}", id);
            }
            result
        }
        EntryCommands::Edit {
            page,
            category,
            entry,
            title,
            content,
            info,
            copyable,
        } => {
            let kind = match (info, copyable) {
                (true, _) => EntryKind::Info,
                (_, true) => EntryKind::Copyable,
                _ => ctx.api.find_entry(&page, &category, &entry)?.kind,
            };
            let draft = EntryDraft::new(
                required("Title", &title)?,
                required("Content", &content)?,
                kind,
            );
            ctx.api.update_entry(&page, &category, &entry, &draft)
        }
        EntryCommands::Rm {
            page,
            category,
            entry,
        } => ctx.api.delete_entry(&page, &category, &entry),
        EntryCommands::Copy {
            page,
            category,
            entry,
        } => {
            let target = ctx.api.find_entry(&page, &category, &entry)?;
            copy_entry(target)?;
            println!("Copied '{}' to clipboard.", target.title);
            return Ok(());
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut HandbookContext, yes: bool) -> Result<()> {
    let prompt = "Reset all data to the default handbook? This cannot be undone.";
    if !confirmed(ctx, yes, prompt)? {
        println!("Operation cancelled.");
        return Ok(());
    }
    let result = ctx.api.reset_to_default();
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &HandbookContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = config::run(&ctx.paths, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Trims `value` and rejects it if nothing is left.
fn required(label: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HandbookError::Api(format!("{} cannot be empty", label)));
    }
    Ok(trimmed.to_string())
}

fn confirmed(ctx: &HandbookContext, yes: bool, prompt: &str) -> Result<bool> {
    if yes || !ctx.config.confirm_destructive {
        return Ok(true);
    }

    print!("{} [y/N]: ", prompt);
    io::stdout().flush().map_err(HandbookError::Io)?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(HandbookError::Io)?;

    Ok(matches!(input.trim(), "y" | "Y" | "yes" | "YES" | "Yes"))
}
