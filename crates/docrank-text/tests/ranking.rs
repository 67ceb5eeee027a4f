use docrank_core::traits::Ranker;
use docrank_core::types::{Query, TextChunk};
use docrank_text::TfIdfRanker;

fn chunk(document: &str, page: u32, text: &str) -> TextChunk {
    TextChunk { document: document.into(), page, text: text.into() }
}

fn hr_query() -> Query {
    Query::new("HR Manager", "Create onboarding material")
}

#[test]
fn empty_corpus_ranks_to_nothing() {
    assert!(TfIdfRanker::new().rank(vec![], &hr_query()).is_empty());
    assert!(TfIdfRanker::new().rank(vec![], &Query::new("", "")).is_empty());
}

#[test]
fn onboarding_page_outranks_finance_page() {
    let corpus = vec![
        chunk("handbook.pdf", 1, "Employee onboarding checklist"),
        chunk("handbook.pdf", 2, "Quarterly financial results"),
    ];
    let ranked = TfIdfRanker::new().rank(corpus, &hr_query());

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].chunk.page, 1);
    assert!(ranked[0].score > 0.0);
    assert_eq!(ranked[1].chunk.page, 2);
    assert_eq!(ranked[1].score, 0.0, "no shared terms with the query");
}

#[test]
fn keeps_at_most_ten_sorted_with_scores_in_range() {
    let corpus: Vec<TextChunk> = (1..=25)
        .map(|i| {
            let repeats = "onboarding ".repeat((i % 7) as usize);
            chunk("big.pdf", i, &format!("page {i} notes {repeats} travel budget"))
        })
        .collect();
    let ranked = TfIdfRanker::new().rank(corpus.clone(), &hr_query());

    assert_eq!(ranked.len(), 10);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for s in &ranked {
        assert!((0.0..=1.0).contains(&s.score), "score {} out of range", s.score);
        assert!(corpus.contains(&s.chunk), "ranked chunks come from the corpus");
    }
}

#[test]
fn small_corpus_returns_every_chunk() {
    let corpus = vec![chunk("a.pdf", 1, "onboarding"), chunk("a.pdf", 2, "payroll"), chunk("a.pdf", 3, "benefits")];
    assert_eq!(TfIdfRanker::new().rank(corpus, &hr_query()).len(), 3);
}

#[test]
fn equal_scores_keep_input_order() {
    let corpus = vec![
        chunk("x.pdf", 4, "weather forecast"),
        chunk("x.pdf", 2, "garden tools"),
        chunk("y.pdf", 1, "onboarding plan"),
        chunk("x.pdf", 9, "recipe ideas"),
        chunk("x.pdf", 1, "garden tools"),
    ];
    let ranked = TfIdfRanker::new().rank(corpus, &hr_query());

    assert_eq!(ranked[0].chunk.document, "y.pdf");
    let tail: Vec<u32> = ranked[1..].iter().map(|s| s.chunk.page).collect();
    assert_eq!(tail, vec![4, 2, 9, 1]);
    assert!(ranked[1..].iter().all(|s| s.score == 0.0));
}

#[test]
fn stop_word_only_corpus_scores_zero() {
    let corpus = vec![chunk("s.pdf", 1, "the and of"), chunk("s.pdf", 2, "which would be")];
    let ranked = TfIdfRanker::new().rank(corpus, &Query::new("the", "of and"));

    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|s| s.score == 0.0));
    assert_eq!(ranked[0].chunk.page, 1);
}

#[test]
fn identical_text_scores_one() {
    let corpus = vec![chunk("q.pdf", 1, "HR Manager Create onboarding material")];
    let ranked = TfIdfRanker::new().rank(corpus, &hr_query());
    assert!((ranked[0].score - 1.0).abs() < 1e-9);
    assert!(ranked[0].score <= 1.0);
}

#[test]
fn limit_is_capped() {
    let corpus: Vec<TextChunk> = (1..=12).map(|i| chunk("c.pdf", i, "onboarding")).collect();
    assert_eq!(TfIdfRanker::new().with_limit(3).rank(corpus.clone(), &hr_query()).len(), 3);
    assert_eq!(TfIdfRanker::new().with_limit(50).rank(corpus, &hr_query()).len(), 10);
}

#[test]
fn ranking_is_deterministic() {
    let corpus = vec![
        chunk("a.pdf", 1, "manager training onboarding"),
        chunk("a.pdf", 2, "material costs onboarding"),
        chunk("b.pdf", 1, "hr policies"),
    ];
    let first = TfIdfRanker::new().rank(corpus.clone(), &hr_query());
    let second = TfIdfRanker::new().rank(corpus, &hr_query());
    assert_eq!(first, second);
}

#[test]
fn disjoint_and_stop_word_chunks_tie_in_input_order() {
    let corpus = vec![
        chunk("h.pdf", 1, "Employee onboarding checklist"),
        chunk("h.pdf", 2, "Quarterly financial results"),
        chunk("h.pdf", 3, "the and of"),
    ];
    let ranked = TfIdfRanker::new().rank(corpus, &hr_query());

    let pages: Vec<u32> = ranked.iter().map(|s| s.chunk.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);
    for s in &ranked {
        assert!(!s.score.is_sign_negative(), "page {} scored {}", s.chunk.page, s.score);
    }
}
