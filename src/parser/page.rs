//! Parser for the label/bold-value page layout
//!
//! Every generic status page is a sequence of `<span>LABEL</span>` elements,
//! each followed somewhere later in the document by a `<b>VALUE</b>`. All
//! other markup is ignored.

use crate::parser::clean::{clean_key, clean_value};
use crate::telemetry::CategoryRecord;
use scraper::{ElementRef, Html};

/// Prefix of a firmware bookkeeping field that is never surfaced
const HIDDEN_KEY_PREFIX: &str = "last occur";

/// Parses a label/value page into a category record
///
/// # Extraction Rules
///
/// - Each `<span>` is paired with the first `<b>` that starts after the span
///   ends, in document order. An empty bold is still that span's value.
/// - Spans without any following bold contribute nothing.
/// - Keys and values go through [`clean_key`] and [`clean_value`].
/// - Empty keys and keys starting with "last occur" (any case) are dropped.
/// - A repeated key overwrites the earlier value.
///
/// # Example
///
/// ```
/// use rain3_telemetry::parse_page;
///
/// let record = parse_page("<span>MP</span><b>ON</b><span>Pressure</span><b>3.2 bar</b>");
/// assert_eq!(record.get("MP"), Some("ON"));
/// assert_eq!(record.get("Pressure"), Some("3.2 bar"));
/// ```
pub fn parse_page(html: &str) -> CategoryRecord {
    let document = parse_document(html);
    extract_pairs(&document)
}

/// Parses an HTML document after removing NUL characters
pub(crate) fn parse_document(html: &str) -> Html {
    Html::parse_document(&html.replace('\0', ""))
}

/// Extracts all span/bold pairs from an already parsed document
pub(crate) fn extract_pairs(document: &Html) -> CategoryRecord {
    let elements: Vec<ElementRef> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .collect();

    let bold_positions: Vec<usize> = elements
        .iter()
        .enumerate()
        .filter(|(_, element)| element.value().name() == "b")
        .map(|(index, _)| index)
        .collect();

    let mut record = CategoryRecord::new();

    for (index, span) in elements.iter().enumerate() {
        if span.value().name() != "span" {
            continue;
        }

        let Some(bold) = following_bold(span, index, &elements, &bold_positions) else {
            continue;
        };

        let key = clean_key(&span.text().collect::<String>());
        if key.is_empty() || key.to_lowercase().starts_with(HIDDEN_KEY_PREFIX) {
            continue;
        }

        let value = clean_value(Some(&bold.text().collect::<String>()));
        record.insert(key, value);
    }

    record
}

/// Finds the first bold element after the span's subtree in document order
///
/// `elements` is in pre-order, so the span's descendants directly follow it
/// and its ancestors all precede it.
fn following_bold<'a>(
    span: &ElementRef<'a>,
    index: usize,
    elements: &[ElementRef<'a>],
    bold_positions: &[usize],
) -> Option<ElementRef<'a>> {
    let start = bold_positions.partition_point(|&position| position <= index);

    bold_positions[start..]
        .iter()
        .map(|&position| elements[position])
        .find(|bold| !bold.ancestors().any(|ancestor| ancestor.id() == span.id()))
}
