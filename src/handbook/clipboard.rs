use crate::error::{HandbookError, Result};
use crate::model::{Entry, EntryKind};
use std::io::Write;
use std::process::{Command, Stdio};

type Program = (&'static str, &'static [&'static str]);

// Clipboard programs to try, in order:
// - macOS: pbcopy
// - Linux: xclip, then xsel
// - Windows: clip.exe
#[cfg(target_os = "macos")]
const CLIPBOARD_PROGRAMS: &[Program] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CLIPBOARD_PROGRAMS: &[Program] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CLIPBOARD_PROGRAMS: &[Program] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CLIPBOARD_PROGRAMS: &[Program] = &[];

/// Copies text to the system clipboard in an OS-specific way.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let programs = CLIPBOARD_PROGRAMS;
    if programs.is_empty() {
        return Err(HandbookError::Api(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_err = None;
    for (program, args) in programs {
        match Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .spawn()
        {
            Ok(child) => return feed(program, child, text),
            Err(e) => last_err = Some(format!("{}: {}", program, e)),
        }
    }

    Err(HandbookError::Api(format!(
        "Failed to spawn a clipboard program ({}). Install one of: {}",
        last_err.unwrap_or_default(),
        programs
            .iter()
            .map(|(p, _)| *p)
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

fn feed(program: &str, mut child: std::process::Child, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| HandbookError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| HandbookError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(HandbookError::Api(format!("{} exited with error", program)))
    }
}

/// The text an entry puts on the clipboard. Info entries are display-only.
pub fn clipboard_text(entry: &Entry) -> Result<&str> {
    match entry.kind {
        EntryKind::Copyable => Ok(&entry.content),
        EntryKind::Info => Err(HandbookError::Api(format!(
            "Entry '{}' is informational and cannot be copied",
            entry.title
        ))),
    }
}

pub fn copy_entry(entry: &Entry) -> Result<()> {
    copy_to_clipboard(clipboard_text(entry)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn copyable_entry_yields_content_only() {
        let entry = Entry::new(
            "e".into(),
            "Greeting",
            "Welcome!",
            EntryKind::Copyable,
            Utc::now(),
        );
        assert_eq!(clipboard_text(&entry).unwrap(), "Welcome!");
    }

    #[test]
    fn info_entry_is_refused() {
        let entry = Entry::new("e".into(), "Hours", "9-5", EntryKind::Info, Utc::now());
        assert!(clipboard_text(&entry).is_err());
        assert!(copy_entry(&entry).is_err());
    }
}
