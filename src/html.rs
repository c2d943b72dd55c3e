//! Builds a [`RawTable`] from a device detail page.
//!
//! Every `h1`, `td`, `span` or `div` carrying a `data-spec` attribute becomes
//! a field. The network table is walked once here so the extractor can work
//! from plain rows.

use once_cell::sync::Lazy;
use scraper::node::Node as HtmlNode;
use scraper::{ElementRef, Html, Selector};

use crate::raw_table::{Fragment, Node, NetworkRow, RawTable};

static SPEC_ELEMENTS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1[data-spec], td[data-spec], span[data-spec], div[data-spec]").unwrap()
});
static NETWORK_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[data-spec="net2g"]"#).unwrap());

/// Parse page markup into a raw table.
pub fn parse_raw_table(html: &str) -> RawTable {
    let document = Html::parse_document(html);
    let mut table = RawTable::new();
    let mut skipped = 0usize;

    for element in document.select(&SPEC_ELEMENTS) {
        let Some(code) = element.value().attr("data-spec") else {
            continue;
        };
        let fragments: Vec<Fragment> = element.children().filter_map(to_fragment).collect();
        if !table.insert_raw(code, fragments) {
            tracing::trace!("ignoring field code '{}'", code);
            skipped += 1;
        }
    }

    table.set_network_rows(network_rows(&document));

    tracing::debug!(
        "parsed {} fields ({} unrecognized), {} network rows",
        table.len(),
        skipped,
        table.network_rows().len()
    );
    table
}

fn to_fragment(node: ego_tree::NodeRef<'_, HtmlNode>) -> Option<Fragment> {
    match node.value() {
        HtmlNode::Text(text) => Some(Fragment::Text(String::from(&**text))),
        HtmlNode::Element(_) => ElementRef::wrap(node).map(|element| {
            Fragment::Node(Node {
                tag: element.value().name().to_string(),
                text: element.text().collect(),
                children: element.children().filter_map(to_fragment).collect(),
            })
        }),
        _ => None,
    }
}

/// Rows of the table enclosing the `net2g` cell, in document order
fn network_rows(document: &Html) -> Vec<NetworkRow> {
    let Some(anchor) = document.select(&NETWORK_ANCHOR).next() else {
        return Vec::new();
    };
    let Some(table) = anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "table")
    else {
        return Vec::new();
    };

    table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| matches!(element.value().name(), "tr" | "td"))
        .filter_map(network_row)
        .collect()
}

fn network_row(element: ElementRef<'_>) -> Option<NetworkRow> {
    let spec = element.value().attr("data-spec");
    let optional = element.value().attr("data-spec-optional").is_some();

    if optional && spec != Some("speed") {
        let info = element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| cell.value().classes().any(|class| class == "nfo"))
            .filter_map(first_child_text)
            .collect();
        return Some(NetworkRow::Optional { info });
    }

    Some(NetworkRow::Spec {
        code: spec?.to_string(),
        text: first_child_text(element).unwrap_or_default(),
    })
}

fn first_child_text(element: ElementRef<'_>) -> Option<String> {
    let child = element.children().next()?;
    let text = match child.value() {
        HtmlNode::Text(text) => String::from(&**text),
        HtmlNode::Element(_) => ElementRef::wrap(child)?.text().collect(),
        _ => return None,
    };
    Some(text.trim().to_string())
}
