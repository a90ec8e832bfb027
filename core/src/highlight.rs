use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::Posting;

pub const MARK_OPEN: &str = "<em>";
pub const MARK_CLOSE: &str = "</em>";

lazy_static! {
    static ref MARKS: Regex = Regex::new("</?em>").expect("valid regex");
}

/// One case-insensitive alternation over all tokens, longest alternative
/// first so an occurrence covered by two tokens is wrapped once by the
/// longer one. Tokens are escaped, so characters special to the regex
/// syntax match literally.
fn combined_pattern(tokens: &[String]) -> Option<Regex> {
    if tokens.is_empty() {
        return None;
    }
    let mut escaped: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();
    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    escaped.dedup();
    RegexBuilder::new(&escaped.join("|"))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Wrap every token occurrence in `<em>` markers in a single pass. Existing
/// markers are stripped first so already-highlighted text re-wraps cleanly.
/// With no tokens this is an identity copy.
pub fn highlight(text: &str, tokens: &[String]) -> String {
    let re = match combined_pattern(tokens) {
        Some(re) => re,
        None => return text.to_string(),
    };
    let stripped = MARKS.replace_all(text, "");
    re.replace_all(&stripped, |caps: &regex::Captures| {
        format!("{MARK_OPEN}{}{MARK_CLOSE}", &caps[0])
    })
    .into_owned()
}

/// Derived copy of a posting with its displayed fields highlighted. The
/// source posting is never mutated.
pub fn highlight_posting(posting: &Posting, tokens: &[String]) -> Posting {
    let mut out = posting.clone();
    out.title = highlight(&posting.title, tokens);
    out.company = highlight(&posting.company, tokens);
    out.location = highlight(&posting.location, tokens);
    out.summary = highlight(&posting.summary, tokens);
    out
}
