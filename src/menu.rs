use anyhow::{Context, Result};
use console::style;
use std::env::consts;
use std::io::Write;

use crate::bootstrap::UiRoot;
use crate::translator::Translator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        id: &'static str,
        label: String,
        accelerator: Option<String>,
    },
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submenu {
    pub title: String,
    pub entries: Vec<MenuEntry>,
}

fn item(t: &Translator, id: &'static str, key: &str, accelerator: Option<&str>) -> MenuEntry {
    MenuEntry::Item {
        id,
        label: t.t(key),
        accelerator: accelerator.map(String::from),
    }
}

fn close_accelerator(os: &str) -> &'static str {
    if os == "macos" { "Cmd+W" } else { "Alt+F4" }
}

fn fullscreen_accelerator(os: &str) -> &'static str {
    if os == "macos" { "Cmd+Ctrl+F" } else { "F11" }
}

/// The application menu, labels translated through `t`.
pub fn build(t: &Translator) -> Vec<Submenu> {
    build_for_os(t, consts::OS)
}

pub fn build_for_os(t: &Translator, os: &str) -> Vec<Submenu> {
    vec![
        Submenu {
            title: t.t("File"),
            entries: vec![
                item(t, "open", "Open...", Some("CmdOrCtrl+O")),
                MenuEntry::Separator,
                item(t, "remove", "Move to Trash", Some("DELETE")),
                MenuEntry::Separator,
                item(t, "close", "Close", Some(close_accelerator(os))),
            ],
        },
        Submenu {
            title: t.t("View"),
            entries: vec![
                item(t, "next", "Next Image", Some("J")),
                item(t, "prev", "Prev Image", Some("K")),
                MenuEntry::Separator,
                item(t, "grid", "Toggle Grid View", Some("H")),
            ],
        },
        Submenu {
            title: t.t("Window"),
            entries: vec![
                item(t, "minimize", "Minimize", Some("CmdOrCtrl+M")),
                item(t, "zoom", "Zoom", None),
                MenuEntry::Separator,
                item(t, "fullscreen", "Toggle Fullscreen", Some(fullscreen_accelerator(os))),
            ],
        },
        Submenu {
            title: t.t("Help"),
            entries: vec![item(t, "support", "Support URL...", None)],
        },
    ]
}

/// Writes the menu to a terminal (or any writer).
pub struct TerminalMenu<W: Write> {
    out: W,
}

impl<W: Write> TerminalMenu<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UiRoot for TerminalMenu<W> {
    fn render(&mut self, t: &Translator) -> Result<()> {
        for submenu in build(t) {
            writeln!(self.out, "{}", style(&submenu.title).bold())
                .context("failed to write menu")?;
            for entry in &submenu.entries {
                match entry {
                    MenuEntry::Item {
                        label,
                        accelerator: Some(accel),
                        ..
                    } => writeln!(self.out, "  {label:<28} {}", style(accel).dim())?,
                    MenuEntry::Item { label, .. } => writeln!(self.out, "  {label}")?,
                    MenuEntry::Separator => writeln!(self.out, "  ────")?,
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
