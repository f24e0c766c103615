//! Parser for the alarm/error page
//!
//! The errors page carries the usual label/value pairs plus two free-form
//! sections:
//!
//! ```text
//! <h2>Alarm</h2>No active alarm<br>
//! <h3>Alarm history</h3>E12 Dry running<br><b>12.05.2024 14:03</b><br>...
//! ```

use crate::parser::clean::{clean_value, normalize_space};
use crate::parser::page::{extract_pairs, parse_document};
use crate::telemetry::{AlarmHistoryEntry, CategoryRecord};
use scraper::{ElementRef, Html, Selector};

const ALARM_HEADING: &str = "Alarm";
const HISTORY_HEADING: &str = "Alarm history";

/// Everything extracted from the errors page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlarmPage {
    /// Label/value pairs found incidentally on the page
    pub record: CategoryRecord,

    /// Current alarm message; `None` when the page has no alarm heading
    pub active_alarm: Option<String>,

    /// Alarm history in page order; `None` when the page has no history heading
    pub alarm_history: Option<Vec<AlarmHistoryEntry>>,
}

/// Parses the errors page
///
/// A missing `Alarm` heading leaves `active_alarm` unset, which consumers treat
/// as "no data" rather than "no alarm". A history heading without entries
/// yields `Some(vec![])`.
///
/// # Example
///
/// ```
/// use rain3_telemetry::parse_error_page;
///
/// let page = parse_error_page("<h2>Alarm</h2>No active alarm<br><h3>Alarm history</h3>");
/// assert_eq!(page.active_alarm.as_deref(), Some("No active alarm"));
/// assert_eq!(page.alarm_history, Some(vec![]));
/// ```
pub fn parse_error_page(html: &str) -> AlarmPage {
    let document = parse_document(html);

    let active_alarm = find_heading(&document, "h2", ALARM_HEADING).and_then(active_alarm_text);
    let alarm_history = find_heading(&document, "h3", HISTORY_HEADING).map(history_entries);

    AlarmPage {
        record: extract_pairs(&document),
        active_alarm,
        alarm_history,
    }
}

/// Finds the first heading of the given tag whose normalized text equals `title`
fn find_heading<'a>(document: &'a Html, tag: &str, title: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(tag).ok()?;

    document
        .select(&selector)
        .find(|heading| normalize_space(&heading.text().collect::<String>()) == title)
}

/// Takes the first text node following the heading as the current alarm
fn active_alarm_text(heading: ElementRef) -> Option<String> {
    heading
        .next_siblings()
        .find_map(|node| node.value().as_text().map(|text| text.to_string()))
        .filter(|text| !text.is_empty())
        .map(|text| clean_value(Some(&text)))
}

/// Collects one entry per bold sibling after the history heading
fn history_entries(heading: ElementRef) -> Vec<AlarmHistoryEntry> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "b")
        .map(|bold| AlarmHistoryEntry {
            error: preceding_description(bold, heading),
            timestamp: clean_value(Some(&bold.text().collect::<String>())),
        })
        .collect()
}

/// Finds the description text belonging to a history timestamp
///
/// Walks backwards over the bold's preceding siblings and returns the nearest
/// text node with visible content, stepping over elements including earlier
/// timestamps. The walk stops at the history heading.
fn preceding_description(bold: ElementRef, heading: ElementRef) -> String {
    for node in bold.prev_siblings() {
        if node.id() == heading.id() {
            break;
        }

        if let Some(text) = node.value().as_text() {
            let cleaned = clean_value(Some(&**text));
            if !cleaned.is_empty() {
                return cleaned;
            }
        }
    }

    String::new()
}
