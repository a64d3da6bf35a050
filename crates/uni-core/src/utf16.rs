//! Entrées UTF-16 (unités de 16 bits), pour les appelants qui stockent le
//! texte comme des `u16`.
//!
//! Les paires de surrogates sont décodées en un seul scalaire avant la
//! recherche. Un surrogate isolé n'est pas une erreur : il est recopié tel
//! quel, comme une unité opaque.

use crate::engine::{Engine, LONG_STROKE_OVERLAY};
use crate::table::StyleTable;

/// Unité décodée : un scalaire valide, ou un surrogate orphelin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    Scalar(char),
    Lone(u16),
}

fn decode(units: &[u16]) -> impl DoubleEndedIterator<Item = Unit> {
    char::decode_utf16(units.iter().copied())
        .map(|r| r.map_or_else(|e| Unit::Lone(e.unpaired_surrogate()), Unit::Scalar))
        .collect::<Vec<_>>()
        .into_iter()
}

fn push_scalar(c: char, out: &mut Vec<u16>) {
    let mut buf = [0u16; 2];
    out.extend_from_slice(c.encode_utf16(&mut buf));
}

fn apply_units<I>(table: &StyleTable, units: I, out: &mut Vec<u16>)
where
    I: Iterator<Item = Unit>,
{
    let mut scratch = String::new();
    for unit in units {
        match unit {
            Unit::Scalar(c) => {
                scratch.clear();
                table.apply_chars([c], &mut scratch);
                out.extend(scratch.encode_utf16());
            }
            Unit::Lone(u) => out.push(u),
        }
    }
}

/// [`StyleTable::apply`] over UTF-16 code units.
///
/// # Example
/// ```
/// use uni_core::{styles, utf16};
/// let table = styles::bold().unwrap();
/// let input: Vec<u16> = "A\u{1F600}".encode_utf16().collect();
/// let out = utf16::apply(&table, &input);
/// assert_eq!(String::from_utf16(&out).unwrap(), "𝗔\u{1F600}");
/// ```
#[must_use]
pub fn apply(table: &StyleTable, units: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(units.len() * 2);
    apply_units(table, decode(units), &mut out);
    out
}

/// [`crate::engine::strike`] over UTF-16 code units.
#[must_use]
pub fn strike(units: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(units.len() * 2);
    for unit in decode(units) {
        match unit {
            Unit::Scalar(c) => push_scalar(c, &mut out),
            Unit::Lone(u) => out.push(u),
        }
        push_scalar(LONG_STROKE_OVERLAY, &mut out);
    }
    out
}

/// [`Engine::upside_down`] over UTF-16 code units.
///
/// L'inversion se fait par unité décodée : une paire de surrogates reste
/// dans le bon ordre.
#[must_use]
pub fn upside_down(engine: &Engine, units: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(units.len() * 2);
    if let Some(table) = engine.table(crate::Style::UpsideDown) {
        apply_units(table, decode(units).rev(), &mut out);
    }
    out
}
