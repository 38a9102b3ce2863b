use bongscript::{
    ast::BinaryOperator,
    error::LexError,
    interpreter::lexer::{Keyword, Token, tokenize},
};

fn kinds(source: &str) -> Vec<Token> {
    tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}"))
                    .into_iter()
                    .map(|(token, _)| token)
                    .collect()
}

#[test]
fn tokenizing_is_pure() {
    let source = "kaj shuru eta holo x = 1.5 * 2; lekho(\"x\"); kaj shesh";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn ends_with_exactly_one_eof() {
    for source in ["", "   \n\n", "kaj shuru kaj shesh", "montobbo only a comment"] {
        let tokens = kinds(source);
        assert_eq!(tokens.iter().filter(|t| **t == Token::Eof).count(), 1);
        assert_eq!(tokens.last(), Some(&Token::Eof));
    }
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("kaj kajer eta_x Lekho lekho"),
               vec![Token::Keyword(Keyword::Kaj),
                    Token::Identifier("kajer".to_string()),
                    Token::Identifier("eta_x".to_string()),
                    Token::Identifier("Lekho".to_string()),
                    Token::Keyword(Keyword::Lekho),
                    Token::Eof]);
}

#[test]
fn unicode_identifiers() {
    assert_eq!(kinds("eta holo নাম = সংখ্যা২ + x_১;"),
               vec![Token::Keyword(Keyword::Eta),
                    Token::Keyword(Keyword::Holo),
                    Token::Identifier("নাম".to_string()),
                    Token::Assign,
                    Token::Identifier("সংখ্যা২".to_string()),
                    Token::Operator(BinaryOperator::Add),
                    Token::Identifier("x_১".to_string()),
                    Token::Semicolon,
                    Token::Eof]);
}

#[test]
fn unicode_whitespace_is_skipped() {
    let tokens = tokenize("lekho\u{a0}\u{3000}\t(\u{2003}1)\nkaj").unwrap();

    assert_eq!(tokens,
               vec![(Token::Keyword(Keyword::Lekho), 1),
                    (Token::LParen, 1),
                    (Token::Integer(1), 1),
                    (Token::RParen, 1),
                    (Token::Keyword(Keyword::Kaj), 2),
                    (Token::Eof, 2)]);
}

#[test]
fn number_literals() {
    assert_eq!(kinds("42 2.25 7. 007"),
               vec![Token::Integer(42),
                    Token::Float(2.25),
                    Token::Float(7.0),
                    Token::Integer(7),
                    Token::Eof]);
}

#[test]
fn boolean_literals() {
    assert_eq!(kinds("true false truth"),
               vec![Token::Bool(true),
                    Token::Bool(false),
                    Token::Identifier("truth".to_string()),
                    Token::Eof]);
}

#[test]
fn two_character_operators_win() {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Sub,
    };

    assert_eq!(kinds("== != <= >= = < > ! + - * / % && ||"),
               vec![Token::Operator(Equal),
                    Token::Operator(NotEqual),
                    Token::Operator(LessEqual),
                    Token::Operator(GreaterEqual),
                    Token::Assign,
                    Token::Operator(Less),
                    Token::Operator(Greater),
                    Token::Bang,
                    Token::Operator(Add),
                    Token::Operator(Sub),
                    Token::Operator(Mul),
                    Token::Operator(Div),
                    Token::Operator(Mod),
                    Token::Operator(And),
                    Token::Operator(Or),
                    Token::Eof]);
}

#[test]
fn strings_are_raw() {
    assert_eq!(kinds(r#""a\nb" "" "two words""#),
               vec![Token::Str(r"a\nb".to_string()),
                    Token::Str(String::new()),
                    Token::Str("two words".to_string()),
                    Token::Eof]);
}

#[test]
fn comments_run_to_the_next_semicolon() {
    assert_eq!(kinds("montobbo lekho(1); lekho"),
               vec![Token::Keyword(Keyword::Lekho), Token::Eof]);
    assert_eq!(kinds("lekho montobbo no terminator"),
               vec![Token::Keyword(Keyword::Lekho), Token::Eof]);
    assert_eq!(kinds("montobbox"), vec![Token::Identifier("montobbox".to_string()), Token::Eof]);
}

#[test]
fn line_numbers() {
    let tokens = tokenize("kaj\nshuru\n\nmontobbo two\nlines;\nkaj \"a\nb\"").unwrap();
    let lines: Vec<_> = tokens.iter().map(|(_, line)| *line).collect();

    assert_eq!(lines, vec![1, 2, 6, 7, 7]);
}

#[test]
fn unknown_character() {
    let e = tokenize("x = 1\n@ 2").unwrap_err();
    assert!(matches!(e, LexError::UnknownCharacter { ref character, line: 2 } if character == "@"));
    assert_eq!(e.line(), 2);

    assert!(matches!(tokenize("a & b"), Err(LexError::UnknownCharacter { .. })));
    assert!(matches!(tokenize("a | b"), Err(LexError::UnknownCharacter { .. })));
}

#[test]
fn unterminated_string() {
    let e = tokenize("lekho(\n\"abc").unwrap_err();
    assert!(matches!(e, LexError::UnterminatedString { line: 2 }));
}

#[test]
fn integer_literal_too_large() {
    assert!(matches!(tokenize("99999999999999999999"), Err(LexError::LiteralTooLarge { .. })));
    assert_eq!(kinds("9223372036854775807"), vec![Token::Integer(i64::MAX), Token::Eof]);
}
