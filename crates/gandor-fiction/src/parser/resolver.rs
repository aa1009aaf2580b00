//! Fuzzy name suggestions for failed lookups.

use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Pick the closest-matching name to `input` among `candidates`, if any is
/// similar enough to be worth suggesting. Used to soften "no such item"
/// outcomes with a "did you mean" hint.
pub fn suggest_name<'a>(input: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let input_lower = input.trim().to_lowercase();
    let mut best: Option<(f64, &str)> = None;

    for candidate in candidates {
        let score = jaro_winkler(&input_lower, &candidate.to_lowercase());
        if score >= SUGGEST_THRESHOLD && best.is_none_or(|(s, _)| score > s) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, name)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_typo() {
        let names = ["Rusty Dagger", "Leather Armour", "Fur Gauntlets"];
        let hit = suggest_name("rusty daggr", names.iter().copied());
        assert_eq!(hit.as_deref(), Some("Rusty Dagger"));
    }

    #[test]
    fn no_suggestion_for_distant_input() {
        let names = ["Rusty Dagger", "Leather Armour"];
        assert!(suggest_name("binoculars", names.iter().copied()).is_none());
    }

    #[test]
    fn picks_the_best_of_several() {
        let names = ["Ruby", "Red Ruby", "Rusty Key"];
        let hit = suggest_name("red rubby", names.iter().copied());
        assert_eq!(hit.as_deref(), Some("Red Ruby"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert!(suggest_name("anything", std::iter::empty()).is_none());
    }
}
