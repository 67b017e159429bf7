//! Toy commands. None of these touch the filesystem.

use crate::config::{COLOR_THEMES, exit};
use crate::host::Host;

use super::CommandResult;
use super::calc;

const GREETINGS: &[&str] = &[
    "Hello, world!",
    "Hi there! Type 'help' to see what this shell can do.",
    "Greetings, traveler.",
    "Hey! Nice to see you.",
    "Ahoy from the other side of the wasm boundary!",
];

const FORECASTS: &[&str] = &[
    "Sunny, 24°C. Perfect weather for shipping code.",
    "Cloudy with a chance of merge conflicts, 17°C.",
    "Light rain, 12°C. Stay inside and refactor.",
    "Thunderstorms, 19°C. Back up your work.",
    "Clear skies, 8°C. Cold enough for a hot cup of coffee.",
];

const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, walks up to two tables and asks: 'Can I join you?'",
    "Why did the developer go broke? Because they used up all their cache.",
    "I would tell you a UDP joke, but you might not get it.",
];

const FORTUNES: &[&str] = &[
    "You will find a missing semicolon in your near future.",
    "A clean build is the beginning of wisdom.",
    "Today is a good day to write tests.",
    "The bug you seek is in the code you trust the most.",
    "Simplicity is prerequisite for reliability.",
];

const MATRIX_GLYPHS: &[char] = &[
    '0', '1', 'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ﾊ', 'ﾐ', 'ﾋ', 'ｰ', 'Z', ':', '.',
    '=', '*', '+', '<', '>', '|',
];
const MATRIX_ROWS: usize = 12;
const MATRIX_COLS: usize = 40;

const DEFAULT_COW_MESSAGE: &str = "Moo!";

const COW: &str = r"        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||";

/// Three-row glyphs for `A`..=`Z`.
const LETTERS: [[&str; 3]; 26] = [
    [" _ ", "|_|", "| |"],
    [" _ ", "|_)", "|_)"],
    [" _ ", "|  ", "|_ "],
    [" _ ", "| \\", "|_/"],
    [" _ ", "|_ ", "|_ "],
    [" _ ", "|_ ", "|  "],
    [" __", "| _", "|_|"],
    ["   ", "|_|", "| |"],
    ["___", " | ", "_|_"],
    ["  _", "  |", "|_|"],
    ["   ", "|/ ", "|\\ "],
    ["   ", "|  ", "|_ "],
    ["    ", "|\\/|", "|  |"],
    ["    ", "|\\ |", "| \\|"],
    [" _ ", "| |", "|_|"],
    [" _ ", "|_)", "|  "],
    [" _ ", "| |", "|_\\"],
    [" _ ", "|_)", "| \\"],
    [" __", "(_ ", "__)"],
    ["___", " | ", " | "],
    ["   ", "| |", "|_|"],
    ["   ", "\\ /", " v "],
    ["    ", "|  |", "|/\\|"],
    ["   ", "\\ /", "/ \\"],
    ["   ", "\\_/", " | "],
    ["__ ", " / ", "/_ "],
];
const SPACE_GLYPH: [&str; 3] = ["  ", "  ", "  "];
const UNKNOWN_GLYPH: [&str; 3] = ["   ", "[?]", "   "];

pub(super) fn hello(host: &mut dyn Host) -> CommandResult {
    CommandResult::text(host.choose(GREETINGS))
}

pub(super) fn weather(host: &mut dyn Host) -> CommandResult {
    CommandResult::text(host.choose(FORECASTS))
}

pub(super) fn joke(host: &mut dyn Host) -> CommandResult {
    CommandResult::text(host.choose(JOKES))
}

pub(super) fn fortune(host: &mut dyn Host) -> CommandResult {
    CommandResult::text(host.choose(FORTUNES))
}

/// Evaluate an arithmetic expression.
pub(super) fn calc(expr: &str) -> CommandResult {
    if expr.trim().is_empty() {
        return CommandResult::failure(exit::FAILURE, "calc: missing expression");
    }
    match calc::evaluate(expr) {
        Ok(value) => CommandResult::text(calc::format_number(value)),
        Err(e) => CommandResult::failure(exit::FAILURE, format!("calc: {}", e)),
    }
}

/// Draw a cow saying `message`.
pub(super) fn cowsay(message: &str) -> CommandResult {
    let message = if message.is_empty() {
        DEFAULT_COW_MESSAGE
    } else {
        message
    };
    let width = message.chars().count() + 2;
    CommandResult::text(format!(
        " {}\n< {} >\n {}\n{}",
        "_".repeat(width),
        message,
        "-".repeat(width),
        COW
    ))
}

/// A screenful of random glyphs.
pub(super) fn matrix(host: &mut dyn Host) -> CommandResult {
    let rows: Vec<String> = (0..MATRIX_ROWS)
        .map(|_| {
            (0..MATRIX_COLS)
                .map(|_| MATRIX_GLYPHS[host.random_index(MATRIX_GLYPHS.len())])
                .collect()
        })
        .collect();
    CommandResult::text(rows.join("\n"))
}

fn glyph(c: char) -> [&'static str; 3] {
    match c {
        'A'..='Z' => LETTERS[(c as u8 - b'A') as usize],
        ' ' => SPACE_GLYPH,
        _ => UNKNOWN_GLYPH,
    }
}

/// Render text as three-row banner letters.
pub(super) fn ascii(input: &str) -> CommandResult {
    if input.is_empty() {
        return CommandResult::failure(exit::FAILURE, "Usage: ascii <text>");
    }

    let glyphs: Vec<[&str; 3]> = input.to_uppercase().chars().map(glyph).collect();
    let rows: Vec<String> = (0..3)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    CommandResult::text(rows.join("\n"))
}

/// Acknowledge a theme change.
pub(super) fn color(theme: Option<&str>) -> CommandResult {
    let Some(theme) = theme else {
        return CommandResult::failure(
            exit::FAILURE,
            format!("Usage: color <theme>\nThemes: {}", COLOR_THEMES.join(", ")),
        );
    };
    if COLOR_THEMES.contains(&theme) {
        CommandResult::text(format!("Color theme set to {}", theme))
    } else {
        CommandResult::failure(
            exit::FAILURE,
            format!(
                "color: unknown theme '{}' (available: {})",
                theme,
                COLOR_THEMES.join(", ")
            ),
        )
    }
}

/// Print a countdown banner. Nothing actually waits.
pub(super) fn timer(seconds: Option<&str>) -> CommandResult {
    let Some(arg) = seconds else {
        return CommandResult::failure(exit::FAILURE, "Usage: timer <seconds>");
    };
    let seconds = match arg.parse::<u64>() {
        Ok(n) if n > 0 => n,
        _ => {
            return CommandResult::failure(
                exit::FAILURE,
                format!("timer: invalid duration '{}': expected a positive integer", arg),
            );
        }
    };

    let clock = format!("{:02}:{:02}", seconds / 60, seconds % 60);
    let label = format!("| TIMER  {} |", clock);
    let border = format!("+{}+", "-".repeat(label.chars().count() - 2));
    CommandResult::text(format!(
        "{}\n{}\n{}\nTimer set for {} second{}.",
        border,
        label,
        border,
        seconds,
        if seconds == 1 { "" } else { "s" }
    ))
}
