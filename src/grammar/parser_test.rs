use super::*;


fn tags(node: &AstNode) -> Vec<&str> {
    node.children().iter().map(|c| c.tag().as_str()).collect()
}

#[test]
fn root_shape() {
    let root = parse("<test>", "1 +").unwrap();
    assert_eq!(root.tag(), tag::ROOT);
    assert_eq!(tags(&root), vec![tag::REGEX, tag::NUMBER, tag::SYMBOL, tag::REGEX]);
    assert_eq!(root.children()[1].contents(), "1");
    assert_eq!(root.children()[2].contents(), "+");
}

#[test]
fn empty_input() {
    let root = parse("<test>", "").unwrap();
    assert_eq!(tags(&root), vec![tag::REGEX, tag::REGEX]);

    let root = parse("<test>", "   ").unwrap();
    assert_eq!(root.children_num(), 2);
}

#[test]
fn groups() {
    let root = parse("<test>", "(+ 1 (* 2 3))").unwrap();
    assert_eq!(root.children_num(), 3);

    let outer = &root.children()[1];
    assert_eq!(outer.tag(), tag::SEXPR);
    assert_eq!(
        tags(outer),
        vec![tag::CHAR, tag::SYMBOL, tag::NUMBER, tag::SEXPR, tag::CHAR]
    );
    assert_eq!(outer.children()[0].contents(), "(");
    assert_eq!(outer.children()[4].contents(), ")");

    let inner = &outer.children()[3];
    assert_eq!((*inner.line(), *inner.col()), (1, 6));
    assert_eq!(
        inner
            .children()
            .iter()
            .map(|c| c.contents().as_str())
            .collect::<Vec<_>>(),
        vec!["(", "*", "2", "3", ")"]
    );
}

#[test]
fn tree_dump() {
    let root = parse("<test>", "(- 1)").unwrap();
    assert_eq!(
        root.to_string(),
        "> 1:1\n\
         \x20 regex 1:1\n\
         \x20 expr|sexpr|> 1:1\n\
         \x20   char 1:1 '('\n\
         \x20   expr|symbol|char 1:2 '-'\n\
         \x20   expr|number|regex 1:4 '1'\n\
         \x20   char 1:5 ')'\n\
         \x20 regex 1:6\n"
    );
}

#[test]
fn empty_group() {
    let root = parse("<test>", "()").unwrap();
    let group = &root.children()[1];
    assert_eq!(tags(group), vec![tag::CHAR, tag::CHAR]);
}

#[test]
fn unmatched_open() {
    let err = parse("<stdin>", "(+ 1 2").unwrap_err();
    assert_eq!(*err.reason(), ParseErrorReason::UnmatchedOpen);
    assert_eq!((*err.line(), *err.col()), (1, 7));
    assert_eq!(
        err.to_string(),
        "<stdin>:1:7: error: expected ')' at end of input"
    );
}

#[test]
fn unmatched_close() {
    let err = parse("<stdin>", "(+ 1 2))").unwrap_err();
    assert_eq!(*err.reason(), ParseErrorReason::UnmatchedClose);
    assert_eq!((*err.line(), *err.col()), (1, 8));
}

#[test]
fn unexpected_char() {
    let err = parse("<stdin>", "(+ 1 a)").unwrap_err();
    assert_eq!(*err.reason(), ParseErrorReason::UnexpectedChar('a'));
    assert_eq!(err.filename(), "<stdin>");
}

#[test]
fn depth_overflow() {
    let ok = format!("{}{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert!(parse("<test>", ok).is_ok());

    let deep = format!("{}{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    let err = parse("<test>", deep).unwrap_err();
    assert_eq!(*err.reason(), ParseErrorReason::DepthOverflow);
    assert_eq!(*err.col(), MAX_DEPTH + 1);
}

#[test]
fn into_error() {
    let err: Error = parse("<stdin>", ")").unwrap_err().into();
    assert_eq!(err.kind().name(), "ParseError");
    assert_eq!(err.to_string(), "<stdin>:1:1: error: unexpected ')'");
}
