//! Shorthand to canonical symbol translation

use crate::alphabet::TRANSLATIONS;

/// Rewrite shorthand connectives into their canonical display symbols
///
/// Substitutions run in [`TRANSLATIONS`] order so that `<>` becomes `↔` before the
/// lone `>` rule could consume its second half. Running it on an already canonical
/// formula changes nothing.
///
/// ```
/// use prop_analyzer::translate::translate;
///
/// assert_eq!(translate("((PvQ)>R)<>~P"), "((PvQ)→R)↔¬P");
/// assert_eq!(translate("P^Q"), "P∧Q");
/// ```
pub fn translate(formula: &str) -> String {
    TRANSLATIONS
        .iter()
        .fold(formula.to_string(), |acc, &(from, to)| acc.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_every_connective() {
        assert_eq!(translate("~P"), "¬P");
        assert_eq!(translate("P^Q"), "P∧Q");
        assert_eq!(translate("PvQ"), "PvQ");
        assert_eq!(translate("P>Q"), "P→Q");
        assert_eq!(translate("P<>Q"), "P↔Q");
    }

    #[test]
    fn test_bi_implication_is_not_split() {
        let canonical = translate("P<>Q>R");
        assert_eq!(canonical, "P↔Q→R");
        assert!(!canonical.contains('<'));
    }

    #[test]
    fn test_idempotent() {
        for formula in ["", "P", "((PvQ)>R)<>P", "~(P^~Q)", "[V>F]"] {
            let once = translate(formula);
            assert_eq!(translate(&once), once);
        }
    }

    #[test]
    fn test_lone_less_than_survives() {
        assert_eq!(translate("P<Q"), "P<Q");
    }

    #[test]
    fn test_empty() {
        assert_eq!(translate(""), "");
    }
}
