use crate::error::CoreError;
use crate::rule::RangeRule;

/// Table de règles pour un style, immuable après construction.
///
/// La recherche est un scan linéaire : la première règle qui contient le
/// caractère gagne. Les caractères sans règle sont recopiés tels quels.
///
/// # Example
/// ```
/// use uni_core::rule::RangeRule;
/// use uni_core::table::StyleTable;
///
/// let table = StyleTable::new(
///     "Bold",
///     vec![RangeRule::uppercase("𝗔").unwrap(), RangeRule::digits("𝟬").unwrap()],
/// )
/// .unwrap();
/// assert_eq!(table.apply("AB 12 ok"), "𝗔𝗕 𝟭𝟮 ok");
/// ```
#[derive(Clone, Debug)]
pub struct StyleTable {
    name: &'static str,
    rules: Vec<RangeRule>,
}

impl StyleTable {
    /// Build a table whose rules must be pairwise disjoint.
    ///
    /// # Errors
    /// Returns [`CoreError::OverlappingRules`] naming the first pair of rules
    /// that share a code point.
    pub fn new(name: &'static str, rules: Vec<RangeRule>) -> Result<Self, CoreError> {
        for (i, first) in rules.iter().enumerate() {
            if let Some(second) = rules[i + 1..].iter().find(|r| first.overlaps(r)) {
                return Err(CoreError::OverlappingRules {
                    style: name.to_string(),
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }
        log::debug!("Table {name} construite : {} règles", rules.len());
        Ok(Self { name, rules })
    }

    /// Build a table without the disjointness check.
    ///
    /// Les règles peuvent se chevaucher : l'ordre du vecteur décide, la
    /// première règle qui contient le caractère l'emporte.
    #[must_use]
    pub fn layered(name: &'static str, rules: Vec<RangeRule>) -> Self {
        log::debug!("Table {name} (superposée) construite : {} règles", rules.len());
        Self { name, rules }
    }

    /// Label the table was built with.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rules in match order.
    #[must_use]
    pub fn rules(&self) -> &[RangeRule] {
        &self.rules
    }

    /// `true` si aucune paire de règles ne partage un code point.
    #[must_use]
    pub fn is_disjoint(&self) -> bool {
        self.rules
            .iter()
            .enumerate()
            .all(|(i, a)| self.rules[i + 1..].iter().all(|b| !a.overlaps(b)))
    }

    /// First rule containing `c`.
    #[inline]
    #[must_use]
    pub fn lookup(&self, c: char) -> Option<&RangeRule> {
        self.rules.iter().find(|r| r.matches(c))
    }

    /// Transforme `text` scalaire par scalaire.
    ///
    /// Totale : l'entrée vide donne une sortie vide, et un caractère sans
    /// règle (emoji, autre écriture, contrôle) est recopié.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        self.apply_chars(text.chars(), &mut out);
        log::trace!("{} : {} -> {} octets", self.name, text.len(), out.len());
        out
    }

    /// Append the transform of every scalar in `chars` to `out`.
    pub fn apply_chars<I>(&self, chars: I, out: &mut String)
    where
        I: IntoIterator<Item = char>,
    {
        for c in chars {
            match self.lookup(c) {
                Some(rule) => rule.push_transformed(c, out),
                None => out.push(c),
            }
        }
    }
}
