use colored::*;
use hostmap_common::host::Host;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Width of the key column in host trees.
const KEY_WIDTH: usize = 8;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.width()));
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

/// Index line, groups and hostvars of one host.
pub fn host_tree(idx: usize, host: &Host) {
    tree_head(idx, &host.name);

    let mut details: Vec<(String, ColoredString)> = Vec::new();

    let groups: String = if host.groups.is_empty() {
        String::from("-")
    } else {
        host.groups.join(", ")
    };
    details.push(("Groups".to_string(), groups.color(colors::GROUP)));

    for (key, value) in &host.hostvars {
        details.push((key.clone(), value.color(colors::VAR_VALUE)));
    }

    if !host.fields.is_empty() {
        let count: ColoredString = format!("{} top-level", host.fields.len()).normal();
        details.push(("Facts".to_string(), count));
    }

    as_tree_one_level(details);
}

/// The fact fields of one host, each as a compact JSON value.
pub fn field_lines(host: &Host) {
    let details: Vec<(String, ColoredString)> = host
        .fields
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string().normal()))
        .collect();

    if !details.is_empty() {
        as_tree_one_level(details);
    }
}

pub fn centerln(msg: &str) {
    print(&centered(msg));
}

fn centered(msg: &str) -> String {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{}{}{}", space, msg, space)
}

const NO_RESULTS_0: &str = r#"
         _   _  ___    _   _  ___  ____ _____ ____
        | \ | |/ _ \  | | | |/ _ \/ ___|_   _/ ___|
        |  \| | | | | | |_| | | | \___ \ | | \___ \
        | |\  | |_| | |  _  | |_| |___) || |  ___) |
        |_| \_|\___/  |_| |_|\___/|____/ |_| |____/
"#;

pub fn no_results() {
    print(&format!("{}", NO_RESULTS_0.red().bold()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_ignores_colour_codes() {
        colored::control::set_override(true);
        let coloured = format!("{} hosts", "12".green().bold());
        let plain = centered("12 hosts");
        let padded = centered(&coloured);
        colored::control::unset_override();

        let pad = |s: &str| s.len() - s.trim_start().len();
        assert_eq!(pad(&padded), pad(&plain));
        assert_eq!(pad(&plain), (TOTAL_WIDTH - "12 hosts".len()) / 2);
    }
}
