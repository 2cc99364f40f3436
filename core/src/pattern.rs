//! # Host Pattern Expansion
//!
//! Expands a compressed host definition into the hostnames it denotes.
//!
//! Supported forms:
//! * **Literal**: `db1.example.com`
//! * **Numeric range**: `web[01:12].example.com` (a leading zero on the start
//!   bound pads every number to the width of the start bound)
//! * **Character range**: `rack[a:f]`
//! * **Several ranges**: `h[1:2]-[a:b]`, left range outermost
//! * **Port suffix**: `db1:5432`, stripped from every result
//!
//! The port strip cuts at the first `:` of each expanded name, so IPv6
//! literals cannot be written as host definitions.
//!
//! Every hostname is generated up front with no upper bound, so a range such
//! as `web[0:9999999999]` allocates one string per value before returning.

use std::collections::VecDeque;

use hostmap_common::error::PatternError;

/// Expands `hostdef` into an ordered list of hostnames.
///
/// Numbers and characters ascend. When a definition holds several ranges,
/// every value of the left range is paired with the full expansion of the
/// ranges to its right before moving on.
pub fn expand(hostdef: &str) -> Result<Vec<String>, PatternError> {
    let mut queue: VecDeque<String> = VecDeque::from([hostdef.to_string()]);
    let mut hosts: Vec<String> = Vec::new();

    while let Some(current) = queue.pop_front() {
        if !current.contains('[') {
            hosts.push(current);
            continue;
        }

        for candidate in expand_first_range(&current, hostdef)? {
            if candidate.contains('[') {
                queue.push_back(candidate);
            } else {
                hosts.push(candidate);
            }
        }
    }

    Ok(hosts.into_iter().map(strip_port).collect())
}

/// Expands only the leftmost `[start:end]` of `current`.
fn expand_first_range(current: &str, hostdef: &str) -> Result<Vec<String>, PatternError> {
    let (head, pattern, tail) = split_first_range(current).ok_or_else(|| {
        PatternError::UnclosedBracket {
            hostdef: hostdef.to_string(),
        }
    })?;

    let bounds: Vec<&str> = pattern.split(':').collect();
    let [start, end] = bounds[..] else {
        return Err(PatternError::MissingSeparator {
            hostdef: hostdef.to_string(),
            pattern: pattern.to_string(),
        });
    };

    if let (Ok(first), Ok(last)) = (start.parse::<i64>(), end.parse::<i64>()) {
        let width: usize = if start.starts_with('0') { start.len() } else { 0 };
        return Ok((first..=last)
            .map(|i| format!("{head}{i:0width$}{tail}"))
            .collect());
    }

    match (single_char(start), single_char(end)) {
        (Some(first), Some(last)) => Ok((first as u32..=last as u32)
            .filter_map(char::from_u32)
            .map(|c| format!("{head}{c}{tail}"))
            .collect()),
        _ => Err(PatternError::InvalidBounds {
            hostdef: hostdef.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}

/// Splits `s` around its first bracket pair into `(head, pattern, tail)`.
fn split_first_range(s: &str) -> Option<(&str, &str, &str)> {
    let open = s.find('[')?;
    let close = open + s[open..].find(']')?;
    Some((&s[..open], &s[open + 1..close], &s[close + 1..]))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn strip_port(host: String) -> String {
    match host.split_once(':') {
        Some((name, _port)) => name.to_string(),
        None => host,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_range_keeps_zero_padding() {
        assert_eq!(
            expand("foo[01:03].bar.com").unwrap(),
            vec!["foo01.bar.com", "foo02.bar.com", "foo03.bar.com"]
        );
    }

    #[test]
    fn numeric_range_without_leading_zero_is_unpadded() {
        assert_eq!(
            expand("n[9:11]").unwrap(),
            vec!["n9", "n10", "n11"]
        );
    }

    #[test]
    fn padding_follows_start_width_when_bounds_differ_in_length() {
        assert_eq!(
            expand("n[08:10]").unwrap(),
            vec!["n08", "n09", "n10"]
        );
        assert_eq!(expand("n[001:2]").unwrap(), vec!["n001", "n002"]);
    }

    #[test]
    fn character_range() {
        assert_eq!(
            expand("foo[a:c].bar.com").unwrap(),
            vec!["fooa.bar.com", "foob.bar.com", "fooc.bar.com"]
        );
    }

    #[test]
    fn left_range_is_outermost() {
        assert_eq!(
            expand("h[1:2]-[1:2]").unwrap(),
            vec!["h1-1", "h1-2", "h2-1", "h2-2"]
        );
        assert_eq!(
            expand("r[a:b]n[1:3]").unwrap(),
            vec!["ran1", "ran2", "ran3", "rbn1", "rbn2", "rbn3"]
        );
    }

    #[test]
    fn port_suffix_is_stripped() {
        assert_eq!(expand("host.example.com:22").unwrap(), vec!["host.example.com"]);
        assert_eq!(expand("db[1:2]:5432").unwrap(), vec!["db1", "db2"]);
    }

    #[test]
    fn literal_passes_through() {
        assert_eq!(expand("plain").unwrap(), vec!["plain"]);
    }

    #[test]
    fn descending_bounds_expand_to_nothing() {
        assert!(expand("h[5:1]").unwrap().is_empty());
    }

    // --- Error Cases ---

    #[test]
    fn missing_separator() {
        assert!(matches!(
            expand("h[1-3]"),
            Err(PatternError::MissingSeparator { .. })
        ));
        assert!(matches!(
            expand("h[1:2:3]"),
            Err(PatternError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn invalid_bounds() {
        assert!(matches!(
            expand("h[1:zz]"),
            Err(PatternError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn unclosed_bracket() {
        assert!(matches!(
            expand("h[1:3"),
            Err(PatternError::UnclosedBracket { .. })
        ));
    }
}
