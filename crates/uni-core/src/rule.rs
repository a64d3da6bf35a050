use std::fmt;

use crate::error::CoreError;

/// Plage des surrogates UTF-16, interdite pour un `char`.
const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// Une plage contiguë de caractères source décalée vers une plage destination.
///
/// `replacement` encode le premier caractère de la plage. Pour tout `c` de
/// `[start, end]`, la sortie est `replacement` avec son dernier scalaire
/// incrémenté de `c - start`.
///
/// # Example
/// ```
/// use uni_core::rule::RangeRule;
/// let rule = RangeRule::uppercase("𝗔").unwrap();
/// let mut out = String::new();
/// rule.push_transformed('C', &mut out);
/// assert_eq!(out, "𝗖");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeRule {
    start: u32,
    end: u32,
    replacement: Box<[char]>,
}

impl RangeRule {
    /// Règle sur une plage arbitraire `[start, end]`.
    ///
    /// # Errors
    /// Returns an error if `start > end`, if `replacement` is empty, or if
    /// shifting its last scalar across the range would produce an invalid
    /// `char`.
    pub fn span(start: char, end: char, replacement: &str) -> Result<Self, CoreError> {
        let (start, end) = (u32::from(start), u32::from(end));
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }
        let replacement: Box<[char]> = replacement.chars().collect();
        let Some(&last) = replacement.last() else {
            return Err(CoreError::EmptyReplacement { start, end });
        };

        let anchor = u32::from(last);
        let span = end - start;
        let top = anchor.checked_add(span).filter(|&t| t <= u32::from(char::MAX));
        let crosses_surrogates =
            top.is_some_and(|t| anchor < *SURROGATES.start() && t >= *SURROGATES.start());
        if top.is_none() || crosses_surrogates {
            return Err(CoreError::ReplacementOverflow { anchor, span });
        }

        Ok(Self {
            start,
            end,
            replacement,
        })
    }

    /// `a`..=`z`, ancrée sur le remplacement de `a`.
    ///
    /// # Errors
    /// See [`RangeRule::span`].
    pub fn lowercase(replacement: &str) -> Result<Self, CoreError> {
        Self::span('a', 'z', replacement)
    }

    /// `A`..=`Z`, ancrée sur le remplacement de `A`.
    ///
    /// # Errors
    /// See [`RangeRule::span`].
    pub fn uppercase(replacement: &str) -> Result<Self, CoreError> {
        Self::span('A', 'Z', replacement)
    }

    /// `0`..=`9`, ancrée sur le remplacement de `0`.
    ///
    /// # Errors
    /// See [`RangeRule::span`].
    pub fn digits(replacement: &str) -> Result<Self, CoreError> {
        Self::span('0', '9', replacement)
    }

    /// Un seul caractère, pour les glyphes irréguliers et la ponctuation.
    ///
    /// # Errors
    /// See [`RangeRule::span`].
    pub fn single(origin: char, replacement: &str) -> Result<Self, CoreError> {
        Self::span(origin, origin, replacement)
    }

    /// First source code point.
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last source code point (inclusive).
    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Scalars emitted for `start`.
    #[must_use]
    pub fn replacement(&self) -> &[char] {
        &self.replacement
    }

    /// `true` si `c` tombe dans `[start, end]`.
    #[inline]
    #[must_use]
    pub fn matches(&self, c: char) -> bool {
        (self.start..=self.end).contains(&u32::from(c))
    }

    /// `true` si les deux plages partagent au moins un code point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Écrit la transformation de `c` dans `out`.
    ///
    /// Si `c` est hors de `[start, end]`, il est recopié tel quel.
    #[inline]
    pub fn push_transformed(&self, c: char, out: &mut String) {
        let code = u32::from(c);
        let Some((&last, head)) = self.replacement.split_last() else {
            out.push(c);
            return;
        };
        if !self.matches(c) {
            out.push(c);
            return;
        }
        out.extend(head.iter());
        // Validé à la construction : jamais None.
        out.push(char::from_u32(u32::from(last) + (code - self.start)).unwrap_or(c));
    }
}

impl fmt::Display for RangeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let replacement: String = self.replacement.iter().collect();
        if self.start == self.end {
            write!(f, "U+{:04X} -> {replacement:?}", self.start)
        } else {
            write!(
                f,
                "U+{:04X}..=U+{:04X} -> {replacement:?}",
                self.start, self.end
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transformed(rule: &RangeRule, c: char) -> String {
        let mut out = String::new();
        rule.push_transformed(c, &mut out);
        out
    }

    #[test]
    fn anchor_maps_to_replacement() -> Result<(), CoreError> {
        let rule = RangeRule::lowercase("𝗮")?;
        assert_eq!(transformed(&rule, 'a'), "𝗮");
        assert_eq!(transformed(&rule, 'z'), "𝘇");
        Ok(())
    }

    #[test]
    fn multi_scalar_replacement_shifts_last_only() -> Result<(), CoreError> {
        let rule = RangeRule::span('a', 'c', "xa")?;
        assert_eq!(transformed(&rule, 'a'), "xa");
        assert_eq!(transformed(&rule, 'c'), "xc");
        Ok(())
    }

    #[test]
    fn single_rule_bounds() -> Result<(), CoreError> {
        let rule = RangeRule::single('"', ",,")?;
        assert!(rule.matches('"'));
        assert!(!rule.matches('#'));
        assert_eq!(rule.start(), rule.end());
        assert_eq!(transformed(&rule, '"'), ",,");
        Ok(())
    }

    #[test]
    fn digits_bounds() -> Result<(), CoreError> {
        let rule = RangeRule::digits("₀")?;
        assert_eq!(rule.start(), u32::from('0'));
        assert_eq!(rule.end(), u32::from('9'));
        assert_eq!(transformed(&rule, '7'), "₇");
        Ok(())
    }

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(
            RangeRule::span('z', 'a', "x"),
            Err(CoreError::InvalidRange {
                start: u32::from('z'),
                end: u32::from('a'),
            })
        );
    }

    #[test]
    fn rejects_empty_replacement() {
        assert!(matches!(
            RangeRule::single('a', ""),
            Err(CoreError::EmptyReplacement { .. })
        ));
    }

    #[test]
    fn rejects_shift_into_surrogates() {
        // U+D7FF + 25 tomberait dans les surrogates.
        assert!(matches!(
            RangeRule::lowercase("\u{D7FF}"),
            Err(CoreError::ReplacementOverflow { .. })
        ));
    }

    #[test]
    fn rejects_shift_past_max() {
        assert!(matches!(
            RangeRule::digits("\u{10FFFF}"),
            Err(CoreError::ReplacementOverflow { .. })
        ));
    }

    #[test]
    fn out_of_range_is_copied() -> Result<(), CoreError> {
        let rule = RangeRule::digits("𝟬")?;
        assert_eq!(transformed(&rule, 'a'), "a");
        Ok(())
    }

    #[test]
    fn overlap_detection() -> Result<(), CoreError> {
        let digits = RangeRule::digits("⁰")?;
        let one = RangeRule::single('1', "¹")?;
        let letters = RangeRule::lowercase("𝗮")?;
        assert!(digits.overlaps(&one));
        assert!(one.overlaps(&digits));
        assert!(!digits.overlaps(&letters));
        Ok(())
    }
}
