use super::*;


fn names(candidates: Vec<ReplCandidate>) -> Vec<&'static str> {
    candidates.iter().map(|c| c.operator.name()).collect()
}

#[test]
fn candidates() {
    let helper = ReplHelper::new();
    assert_eq!(names(helper.candidates("")), vec!["+", "-", "*", "/"]);
    assert_eq!(names(helper.candidates("*")), vec!["*"]);
    assert!(helper.candidates("x").is_empty());
}

#[test]
fn word_bounds() {
    let helper = ReplHelper::new();
    assert_eq!(helper.word_bounds("(+", 2), (1, 2));
    assert_eq!(helper.word_bounds("(", 1), (1, 1));
    assert_eq!(helper.word_bounds("(* 1 2)", 1), (1, 2));
    assert_eq!(helper.word_bounds("(+ 1 2)", 7), (7, 7));
}

#[test]
fn incomplete_input() {
    let helper = ReplHelper::new();
    assert!(helper.is_incomplete("(+ 1"));
    assert!(helper.is_incomplete("(+ 1\n (* 2 3)"));
    assert!(!helper.is_incomplete("(+ 1 2)"));
    assert!(!helper.is_incomplete(""));
    // Errors are reported right away rather than waiting for more input.
    assert!(!helper.is_incomplete("(+ 1 x"));
    assert!(!helper.is_incomplete("1)"));
    assert!(!helper.is_incomplete(") ("));
    assert!(!helper.is_incomplete("1) ("));
    assert!(!helper.is_incomplete("(+ 1)) (\n(2"));
}

#[test]
fn unmatched_close_is_not_awaited() {
    let helper = ReplHelper::new();
    for input in &[") (", "1) (", "(1)) (("] {
        assert!(crate::grammar::parse(crate::STDIN, input).is_err());
        assert!(!helper.is_incomplete(input), "{}", input);
    }
}
