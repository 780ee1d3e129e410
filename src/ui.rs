use std::collections::VecDeque;

use crate::catalog::Catalog;
use crate::inventory::Inventory;

/// Where narration goes and where answers come from.
pub trait Presentation {
    fn display(&mut self, line: &str);
    /// Read one line of input. `None` means input is exhausted.
    fn prompt_line(&mut self, message: &str) -> Option<String>;
}

/// Terminal frontend: prints each line, optionally pausing for effect.
#[cfg(feature = "cli")]
pub struct ConsoleUi {
    pace: std::time::Duration,
}

#[cfg(feature = "cli")]
impl ConsoleUi {
    pub fn new(pace: std::time::Duration) -> Self {
        Self { pace }
    }
}

#[cfg(feature = "cli")]
impl Presentation for ConsoleUi {
    fn display(&mut self, line: &str) {
        println!("{}", line);
        if !self.pace.is_zero() {
            std::thread::sleep(self.pace);
        }
    }

    fn prompt_line(&mut self, message: &str) -> Option<String> {
        use std::io::{self, BufRead, IsTerminal, Write};
        if io::stdin().is_terminal() {
            return dialoguer::Input::<String>::new()
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
                .ok();
        }
        print!("{} ", message);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

/// Canned answers in, recorded lines out. Used to drive the game without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    inputs: VecDeque<String>,
    pub lines: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedUi {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { inputs: inputs.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Presentation for ScriptedUi {
    fn display(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn prompt_line(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.inputs.pop_front()
    }
}

pub fn print_simple_header(ui: &mut impl Presentation, title: &str) {
    ui.display(&format!("\n──── {} ────", title));
}

/// Ask until the (trimmed, lowercased) answer is one of `options`.
pub fn prompt_choice(
    ui: &mut impl Presentation,
    message: &str,
    options: &[&str],
) -> Option<String> {
    loop {
        let answer = ui.prompt_line(message)?.trim().to_lowercase();
        if options.contains(&answer.as_str()) {
            return Some(answer);
        }
        ui.display("Invalid choice. Please try again.");
    }
}

/// Ask a yes/no question; `None` on end of input.
pub fn prompt_yes_no(ui: &mut impl Presentation, message: &str) -> Option<bool> {
    prompt_choice(ui, message, &["y", "yes", "n", "no"]).map(|a| a.starts_with('y'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the inventory.
    Item(usize),
    Cancelled,
    Empty,
}

/// Show the backpack numbered from 1 and wait for a valid pick.
///
/// Out-of-range or non-numeric answers re-prompt. `q`, `0` or end of input cancel.
pub fn select_item(ui: &mut impl Presentation, inv: &Inventory, catalog: &Catalog) -> Selection {
    if inv.is_empty() {
        ui.display("Your backpack is empty.");
        return Selection::Empty;
    }
    ui.display("You open your backpack and see the following items:");
    for (i, (item, power)) in inv.list_with_power(catalog).enumerate() {
        ui.display(&format!("{}. {} (Power: {})", i + 1, item, power));
    }
    let count = inv.len();
    loop {
        let Some(raw) = ui.prompt_line("Choose an item by number (q to back off):") else {
            return Selection::Cancelled;
        };
        let answer = raw.trim();
        if answer.eq_ignore_ascii_case("q") || answer == "0" {
            return Selection::Cancelled;
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Selection::Item(n - 1),
            _ => ui.display(&format!("Please enter a number from 1 to {}.", count)),
        }
    }
}
