use joblens_core::filter::exact_filter;
use joblens_core::tokenizer::tokenize;
use joblens_core::Posting;

fn posting(id: &str, title: &str, company: &str, location: &str, summary: &str) -> Posting {
    Posting {
        title: title.into(),
        company: company.into(),
        location: location.into(),
        summary: summary.into(),
        ..Posting::new(id)
    }
}

fn sample() -> Vec<Posting> {
    vec![
        posting(
            "1",
            "Senior React Developer",
            "Acme",
            "Berlin",
            "Build frontend features",
        ),
        posting(
            "2",
            "Senior Backend Engineer",
            "Acme",
            "Remote",
            "Rust services",
        ),
        posting("3", "Junior React Engineer", "Globex", "Madrid", "SPA work"),
    ]
}

#[test]
fn filter_is_conjunctive() {
    let postings = sample();
    let out = exact_filter(&postings, &tokenize("senior react"));
    let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
    // "2" has senior but not react, "3" has react but not senior
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn tokens_match_any_field() {
    let postings = sample();
    let out = exact_filter(&postings, &tokenize("globex madrid"));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "3");
}

#[test]
fn empty_query_returns_collection_unchanged() {
    let postings = sample();
    for q in ["", "   ", "\t\n"] {
        let out = exact_filter(&postings, &tokenize(q));
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"], "query {q:?}");
    }
}

#[test]
fn order_preserves_input_order() {
    let postings = sample();
    let out = exact_filter(&postings, &tokenize("acme"));
    let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}
