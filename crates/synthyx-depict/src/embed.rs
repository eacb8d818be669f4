//! SVG → inline-fragment rewrite.
//!
//! The frontend embeds the depiction inside JSX, which cannot take the SVG
//! document as RDKit emits it. The rewrite below is a fixed, order-sensitive
//! sequence of exact-string substitutions matched to RDKit's output format;
//! a change in that format breaks it.

use crate::error::{DepictError, Result};

/// Presentation attributes substituted for RDKit's `xml:space` attribute so
/// the fragment renders on a white card without extra styling.
const PRESENTATION_ATTRS: &str = "fill='#fff' stroke='#000' x='-50' y='-20' xmlSpace";

/// Rewrite an RDKit SVG document into a JSX-embeddable fragment.
///
/// Steps, in order: collapse newlines, normalise double quotes to single,
/// strip the header comment, rename `xmlns:xlink`, drop the rdkit namespace
/// declaration, swap `xml:space` for fixed presentation attributes, shrink
/// the 200px canvas to 100px, and cut everything up to and including the
/// XML declaration.
pub fn inline_fragment(svg: &str) -> Result<String> {
    let rewritten = svg
        .replace('\n', " ")
        .replace('"', "'")
        .replace("<!-- END OF HEADER -->", "")
        .replace("xmlns:xlink", "xmlnsXlink")
        .replace("xmlns:rdkit='http://www.rdkit.org/xml'", "")
        .replace("xml:space", PRESENTATION_ATTRS)
        .replace("width='200px' height='200px'", "width='100px' height='100px'");

    match rewritten.split_once("?> ") {
        Some((_, fragment)) => Ok(fragment.to_string()),
        None => Err(DepictError::MalformedSvg),
    }
}
