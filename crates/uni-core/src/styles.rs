//! Données des tables de style.
//!
//! Les alphabets mathématiques (bloc U+1D400) sont contigus : une règle par
//! plage suffit. Subscript, superscript et upside-down sont irréguliers.

use crate::error::CoreError;
use crate::rule::RangeRule;
use crate::table::StyleTable;

/// Mathematical sans-serif bold.
///
/// # Errors
/// Propagates rule or table construction errors.
pub fn bold() -> Result<StyleTable, CoreError> {
    StyleTable::new(
        "Bold",
        vec![
            RangeRule::uppercase("𝗔")?,
            RangeRule::lowercase("𝗮")?,
            RangeRule::digits("𝟬")?,
        ],
    )
}

/// Mathematical sans-serif italic. Pas de chiffres italiques en Unicode.
///
/// # Errors
/// Propagates rule or table construction errors.
pub fn italic() -> Result<StyleTable, CoreError> {
    StyleTable::new(
        "Italic",
        vec![RangeRule::uppercase("𝘈")?, RangeRule::lowercase("𝘢")?],
    )
}

/// Mathematical sans-serif bold italic.
///
/// # Errors
/// Propagates rule or table construction errors.
pub fn bold_italic() -> Result<StyleTable, CoreError> {
    StyleTable::new(
        "Bold & Italic",
        vec![
            RangeRule::uppercase("𝘼")?,
            RangeRule::lowercase("𝙖")?,
            // Pas de chiffres gras italiques : on retombe sur le gras.
            RangeRule::digits("𝟬")?,
        ],
    )
}

/// Mathematical monospace.
///
/// # Errors
/// Propagates rule or table construction errors.
pub fn monospace() -> Result<StyleTable, CoreError> {
    StyleTable::new(
        "Monospace",
        vec![
            RangeRule::uppercase("𝙰")?,
            RangeRule::lowercase("𝚊")?,
            RangeRule::digits("𝟶")?,
        ],
    )
}

/// Mathematical bold script.
///
/// # Errors
/// Propagates rule or table construction errors.
pub fn script() -> Result<StyleTable, CoreError> {
    StyleTable::new(
        "Script",
        vec![RangeRule::uppercase("𝓐")?, RangeRule::lowercase("𝓪")?],
    )
}

/// Indices. Couverture partielle : les autres lettres passent telles quelles.
///
/// # Errors
/// Propagates rule or table construction errors.
pub fn subscript() -> Result<StyleTable, CoreError> {
    StyleTable::new(
        "Subscript",
        vec![
            RangeRule::digits("₀")?,
            RangeRule::single('a', "ₐ")?,
            RangeRule::single('e', "ₑ")?,
            RangeRule::single('h', "ₕ")?,
            RangeRule::single('i', "ᵢ")?,
            RangeRule::single('j', "ⱼ")?,
            RangeRule::span('k', 'n', "ₖ")?,
            RangeRule::single('o', "ₒ")?,
            RangeRule::single('p', "ₚ")?,
            RangeRule::single('r', "ᵣ")?,
            RangeRule::span('s', 't', "ₛ")?,
            RangeRule::single('u', "ᵤ")?,
            RangeRule::single('v', "ᵥ")?,
            RangeRule::single('x', "ₓ")?,
        ],
    )
}

/// Exposants. Couverture partielle.
///
/// ¹²³ vivent dans Latin-1, le reste des chiffres dans U+2070 : la plage
/// des chiffres est coupée en quatre règles disjointes.
///
/// # Errors
/// Propagates rule or table construction errors.
pub fn superscript() -> Result<StyleTable, CoreError> {
    StyleTable::new(
        "Superscript",
        vec![
            RangeRule::single('0', "⁰")?,
            RangeRule::single('1', "¹")?,
            RangeRule::span('2', '3', "²")?,
            RangeRule::span('4', '9', "⁴")?,
            RangeRule::span('(', ')', "⁽")?,
            RangeRule::single('+', "⁺")?,
            RangeRule::single('-', "⁻")?,
            RangeRule::single('=', "⁼")?,
            RangeRule::single('n', "ⁿ")?,
            RangeRule::single('i', "ⁱ")?,
        ],
    )
}

/// Paires (source, glyphe retourné).
const UPSIDE_DOWN: &[(char, &str)] = &[
    ('a', "ɐ"),
    ('b', "q"),
    ('c', "ɔ"),
    ('d', "p"),
    ('e', "ǝ"),
    ('f', "ɟ"),
    ('g', "ƃ"),
    ('h', "ɥ"),
    ('i', "ᴉ"),
    ('j', "ɾ"),
    ('k', "ʞ"),
    ('l', "l"),
    ('m', "ɯ"),
    ('n', "u"),
    ('o', "o"),
    ('p', "d"),
    ('q', "b"),
    ('r', "ɹ"),
    ('s', "s"),
    ('t', "ʇ"),
    ('u', "n"),
    ('v', "ʌ"),
    ('w', "ʍ"),
    ('x', "x"),
    ('y', "ʎ"),
    ('z', "z"),
    ('A', "∀"),
    ('B', "B"),
    ('C', "Ɔ"),
    ('D', "D"),
    ('E', "Ǝ"),
    ('F', "Ⅎ"),
    ('G', "פ"),
    ('H', "H"),
    ('I', "I"),
    ('J', "ſ"),
    ('K', "K"),
    ('L', "˥"),
    ('M', "W"),
    ('N', "N"),
    ('O', "O"),
    ('P', "Ԁ"),
    ('Q', "Q"),
    ('R', "R"),
    ('S', "S"),
    ('T', "┴"),
    ('U', "∩"),
    ('V', "Λ"),
    ('W', "M"),
    ('X', "X"),
    ('Y', "⅄"),
    ('Z', "Z"),
    ('0', "0"),
    ('1', "Ɩ"),
    ('2', "ᄅ"),
    ('3', "Ɛ"),
    ('4', "ㄣ"),
    ('5', "ϛ"),
    ('6', "9"),
    ('7', "ㄥ"),
    ('8', "8"),
    ('9', "6"),
    (',', "'"),
    ('.', "˙"),
    ('?', "¿"),
    ('!', "¡"),
    ('"', ",,"),
    ('\'', ","),
    ('`', ","),
    ('(', ")"),
    (')', "("),
    ('[', "]"),
    (']', "["),
    ('{', "}"),
    ('}', "{"),
    ('<', ">"),
    ('>', "<"),
    ('&', "⅋"),
    ('_', "‾"),
];

/// Glyphes retournés. L'inversion de l'ordre est faite par l'engine.
///
/// # Errors
/// Propagates rule or table construction errors.
pub fn upside_down() -> Result<StyleTable, CoreError> {
    let rules = UPSIDE_DOWN
        .iter()
        .map(|&(origin, flipped)| RangeRule::single(origin, flipped))
        .collect::<Result<Vec<_>, _>>()?;
    StyleTable::new("Upside-down", rules)
}
