//! Ordered keyword rules: the first rule whose keywords match wins.

/// Matches when the lowercased input contains any of `any_of` and all of
/// `all_of` as substrings.
#[derive(Debug)]
pub struct KeywordRule<T: 'static> {
    pub any_of: &'static [&'static str],
    pub all_of: &'static [&'static str],
    pub result: T,
}

impl<T> KeywordRule<T> {
    pub fn matches(&self, text_lower: &str) -> bool {
        self.any_of.iter().any(|k| text_lower.contains(k))
            && self.all_of.iter().all(|k| text_lower.contains(k))
    }
}

/// Evaluates `rules` top to bottom against `text` (lowercased here).
pub fn first_match<'r, T>(rules: &'r [KeywordRule<T>], text: &str) -> Option<&'r T> {
    let lower = text.to_lowercase();
    rules.iter().find(|r| r.matches(&lower)).map(|r| &r.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[KeywordRule<u8>] = &[
        KeywordRule {
            any_of: &["intern"],
            all_of: &["data"],
            result: 1,
        },
        KeywordRule {
            any_of: &["intern", "trainee"],
            all_of: &[],
            result: 2,
        },
        KeywordRule {
            any_of: &["data"],
            all_of: &[],
            result: 3,
        },
    ];

    #[test]
    fn test_earlier_rule_wins() {
        assert_eq!(first_match(RULES, "Data Intern"), Some(&1));
        assert_eq!(first_match(RULES, "Summer Intern"), Some(&2));
        assert_eq!(first_match(RULES, "Data Analyst"), Some(&3));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(first_match(RULES, "Chef"), None);
        assert_eq!(first_match(RULES, ""), None);
    }
}
