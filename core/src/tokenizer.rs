use unicode_normalization::UnicodeNormalization;

/// Tokenize text into lowercase tokens using NFKC normalization and
/// whitespace splitting. No stemming, no stopword removal: query tokens and
/// posting tokens must compare literally.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    normalized.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Senior React\tDeveloper");
        assert_eq!(t, vec!["senior", "react", "developer"]);
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(tokenize("   \t \n ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        assert_eq!(tokenize("rust   engineer"), vec!["rust", "engineer"]);
    }
}
