use joblens_core::highlight::{highlight, highlight_posting};
use joblens_core::tokenizer::tokenize;
use joblens_core::Posting;

#[test]
fn empty_query_output_equals_input() {
    let texts = [
        "Senior React Developer",
        "",
        "pre-<em>marked</em> summary",
    ];
    for text in texts {
        assert_eq!(highlight(text, &tokenize("")), text);
        assert_eq!(highlight(text, &tokenize("   ")), text);
    }
}

#[test]
fn every_occurrence_is_wrapped() {
    let out = highlight("React loves react; REACTive too", &tokenize("react"));
    assert_eq!(
        out,
        "<em>React</em> loves <em>react</em>; <em>REACT</em>ive too"
    );
}

#[test]
fn overlapping_tokens_never_double_wrap() {
    let out = highlight("Developer dev", &tokenize("dev developer"));
    assert_eq!(out, "<em>Developer</em> <em>dev</em>");
}

#[test]
fn adjacent_matches_wrap_independently() {
    let out = highlight("devdev", &tokenize("dev"));
    assert_eq!(out, "<em>dev</em><em>dev</em>");
}

#[test]
fn source_posting_is_untouched() {
    let p = Posting {
        title: "Rust Engineer".into(),
        summary: "rust all day".into(),
        ..Posting::new("1")
    };
    let out = highlight_posting(&p, &tokenize("rust"));
    assert_eq!(out.title, "<em>Rust</em> Engineer");
    assert_eq!(out.summary, "<em>rust</em> all day");
    assert_eq!(p.title, "Rust Engineer");
    assert_eq!(p.summary, "rust all day");
    assert_eq!(out.id, p.id);
}

#[test]
fn summary_with_stale_markers_rewraps_cleanly() {
    let p = Posting {
        summary: "knows <em>rust</em> and go".into(),
        ..Posting::new("1")
    };
    let out = highlight_posting(&p, &tokenize("go"));
    assert_eq!(out.summary, "knows rust and <em>go</em>");
}
