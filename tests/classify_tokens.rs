use lexdfa::{classify, tokenize, Lexer, LexerOptions, Token, TokenCategory, Variant};
use pretty_assertions::assert_eq;

#[test]
fn end_to_end_line() {
    use TokenCategory::*;

    let tokens = tokenize("id1 + 23 out 3.14 $").unwrap();
    let categories: Vec<_> = tokens.iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![Identifier, Operator, UnsignedInteger, KeywordOut, Float, Unknown]
    );

    let printed: Vec<String> = tokens.iter().map(Token::to_string).collect();
    assert_eq!(
        printed,
        vec![
            "Token: Identifier; String: id1",
            "Token: Operator; String: +",
            "Token: Unsigned Integer; String: 23",
            "Token: Keyword 'out'; String: out",
            "Token: Floating Point; String: 3.14",
            "Token: Unknown; String: $",
        ]
    );
}

#[test]
fn identifiers() {
    assert_eq!(classify("id1"), TokenCategory::Identifier);
    assert_eq!(classify("idx9"), TokenCategory::Identifier);
    assert_eq!(classify("id"), TokenCategory::Identifier);
    assert_eq!(classify("ax"), TokenCategory::Unknown);
    assert_eq!(classify("i"), TokenCategory::Unknown);
    assert_eq!(classify("1id"), TokenCategory::Unknown);
}

#[test]
fn numbers() {
    assert_eq!(classify("123"), TokenCategory::UnsignedInteger);
    assert_eq!(classify("0"), TokenCategory::UnsignedInteger);
    assert_eq!(classify("3.14"), TokenCategory::Float);
    assert_eq!(classify("0.001"), TokenCategory::Float);
    assert_eq!(classify(".5"), TokenCategory::Unknown);
    assert_eq!(classify("5."), TokenCategory::Unknown);
    assert_eq!(classify("12a"), TokenCategory::Unknown);
    assert_eq!(classify("-3"), TokenCategory::Unknown);
}

#[test]
fn operators() {
    for op in ["+", "-", "*", "/"] {
        assert_eq!(classify(op), TokenCategory::Operator, "{op}");
    }
    assert_eq!(classify("++"), TokenCategory::Unknown);
    assert_eq!(classify("%"), TokenCategory::Unknown);
}

#[test]
fn keywords() {
    assert_eq!(classify("in"), TokenCategory::KeywordIn);
    assert_eq!(classify("out"), TokenCategory::KeywordOut);
    assert_eq!(classify("IN"), TokenCategory::Unknown);
    assert_eq!(classify("output"), TokenCategory::Unknown);
}

#[test]
fn empty_token_is_unknown() {
    assert_eq!(classify(""), TokenCategory::Unknown);
}

#[test]
fn lexers_share_tables_across_threads() {
    let lexer = Lexer::new(LexerOptions {
        variant: Variant::Float,
        max_line_length: 0,
    });

    let handles: Vec<_> = ["id1 2.5", "out / 7", "in $ idq"]
        .into_iter()
        .map(|line| {
            let lexer = lexer.clone();
            std::thread::spawn(move || lexer.tokenize(line).unwrap())
        })
        .collect();

    let results: Vec<Vec<TokenCategory>> = handles
        .into_iter()
        .map(|h| h.join().unwrap().into_iter().map(|t| t.category).collect())
        .collect();

    use TokenCategory::*;
    assert_eq!(
        results,
        vec![
            vec![Identifier, Float],
            vec![KeywordOut, Operator, UnsignedInteger],
            vec![KeywordIn, Unknown, Identifier],
        ]
    );
}
