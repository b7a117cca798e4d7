//! List item markers

use super::Rule;
use crate::language::LanguageProfile;
use crate::text_view::{EditBuffer, TextView, PARAGRAPH_BREAK};

const ROMAN_NUMERALS: &[&str] = &[
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii",
];

/// Masks the period of line-initial markers (`1.`, `a.`, `iv.`) and splits
/// inline numbered lists (`1. foo 2. bar`) into separate lines.
#[derive(Debug)]
pub struct ListMarkers;

/// An inline `N.` or `N)` marker
#[derive(Debug, Clone, Copy)]
struct Marker {
    start: usize,
    punct: usize,
    number: u32,
}

impl ListMarkers {
    /// Index of the marker's `.` when a line-initial marker starts at `i`
    fn line_marker_period(view: &TextView, i: usize) -> Option<usize> {
        let mut end = i;
        while view.get(end).is_some_and(|c| c.is_alphanumeric()) {
            end += 1;
        }
        if end == i || view.get(end) != Some('.') {
            return None;
        }
        if !view.get(end + 1).is_some_and(char::is_whitespace) {
            return None;
        }

        let token: String = view.chars()[i..end].iter().collect();
        let is_number = token.len() <= 2 && token.chars().all(|c| c.is_ascii_digit());
        let is_letter = token.chars().count() == 1 && token.chars().all(char::is_alphabetic);
        let is_roman = ROMAN_NUMERALS.contains(&token.to_lowercase().as_str());
        (is_number || is_letter || is_roman).then_some(end)
    }

    fn inline_markers(view: &TextView) -> Vec<Marker> {
        let mut markers = Vec::new();
        let mut i = 0;
        while i < view.len() {
            let starts_token = view.prev(i).map_or(true, char::is_whitespace);
            if !starts_token || !view.get(i).is_some_and(|c| c.is_ascii_digit()) {
                i += 1;
                continue;
            }
            let mut end = i;
            while view.get(end).is_some_and(|c| c.is_ascii_digit()) {
                end += 1;
            }
            let punct_ok = matches!(view.get(end), Some('.') | Some(')'));
            let space_after = view.get(end + 1).is_some_and(char::is_whitespace);
            if end - i <= 2 && punct_ok && space_after {
                let number: String = view.chars()[i..end].iter().collect();
                if let Ok(number) = number.parse() {
                    markers.push(Marker {
                        start: i,
                        punct: end,
                        number,
                    });
                }
            }
            i = end.max(i + 1);
        }
        markers
    }

    /// Markers that belong to an ascending run starting at 1
    fn list_members(markers: &[Marker]) -> Vec<Marker> {
        let mut members = Vec::new();
        let mut run: Vec<Marker> = Vec::new();
        for &marker in markers {
            match run.last() {
                Some(last) if marker.number == last.number + 1 => run.push(marker),
                _ => {
                    if run.len() >= 2 {
                        members.append(&mut run);
                    }
                    run.clear();
                    if marker.number == 1 {
                        run.push(marker);
                    }
                }
            }
        }
        if run.len() >= 2 {
            members.append(&mut run);
        }
        members
    }
}

impl Rule for ListMarkers {
    fn name(&self) -> &str {
        "list_markers"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);

        // only blanks between the last line start and `i`
        let mut indented = true;
        for (i, &c) in view.chars().iter().enumerate() {
            if view.is_line_start(i) {
                indented = true;
            }
            if indented && !c.is_whitespace() {
                if let Some(period) = Self::line_marker_period(&view, i) {
                    buffer.mask(period);
                }
            }
            if c != ' ' && c != '\t' {
                indented = false;
            }
        }

        for marker in Self::list_members(&Self::inline_markers(&view)) {
            if view.get(marker.punct) == Some('.') {
                buffer.mask(marker.punct);
            }
            if !view.is_line_start(marker.start) {
                // the whitespace before the marker becomes the break
                buffer.set(marker.start - 1, PARAGRAPH_BREAK);
            }
        }

        if buffer.is_modified(&view) {
            buffer.into_string()
        } else {
            text.to_string()
        }
    }
}
