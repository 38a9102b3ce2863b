use logos::Logos;

use crate::{
    ast::BinaryOperator,
    error::{LexError, LexErrorKind},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Reserved words such as `kaj` or `jodi`.
    #[token("eta", |_| Keyword::Eta)]
    #[token("holo", |_| Keyword::Holo)]
    #[token("lekho", |_| Keyword::Lekho)]
    #[token("ullekho", |_| Keyword::Ullekho)]
    #[token("jodi", |_| Keyword::Jodi)]
    #[token("nahole", |_| Keyword::Nahole)]
    #[token("jotokhon", |_| Keyword::Jotokhon)]
    #[token("kaj", |_| Keyword::Kaj)]
    #[token("shuru", |_| Keyword::Shuru)]
    #[token("shesh", |_| Keyword::Shesh)]
    #[token("theme", |_| Keyword::Theme)]
    #[token("egiye", |_| Keyword::Egiye)]
    #[token("jao", |_| Keyword::Jao)]
    #[token("sonkhya", |_| Keyword::Sonkhya)]
    #[token("dosomik", |_| Keyword::Dosomik)]
    #[token("bhasha", |_| Keyword::Bhasha)]
    #[token("nao", |_| Keyword::Nao)]
    Keyword(Keyword),
    /// `montobbo ... ;` comments. Everything up to and including the next `;`
    /// is discarded.
    #[token("montobbo", skip_comment)]
    Comment,
    /// Numeric literal tokens with a decimal point, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Raw string literals, such as `"namaskar"`. No escapes are processed.
    #[token("\"", lex_string)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Identifier tokens; variable names such as `x`, `mot_jog` or `নাম`.
    ///
    /// Any alphabetic character may start a name; the rest may also hold
    /// combining marks, digits and `_`.
    #[regex(r"\p{Alphabetic}[\p{Alphabetic}\p{M}\p{N}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Binary operators, such as `+` or `<=`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("%", |_| BinaryOperator::Mod)]
    #[token("<", |_| BinaryOperator::Less)]
    #[token(">", |_| BinaryOperator::Greater)]
    #[token("<=", |_| BinaryOperator::LessEqual)]
    #[token(">=", |_| BinaryOperator::GreaterEqual)]
    #[token("==", |_| BinaryOperator::Equal)]
    #[token("!=", |_| BinaryOperator::NotEqual)]
    #[token("&&", |_| BinaryOperator::And)]
    #[token("||", |_| BinaryOperator::Or)]
    Operator(BinaryOperator),
    /// `!`, an operator with no binary meaning.
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Line breaks advance the line counter and are otherwise ignored.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Whitespace other than line breaks, including Unicode spaces.
    #[regex(r"[\s--\n]+", logos::skip)]
    Ignored,
    /// End of input. Appended once by [`tokenize`]; never matched.
    Eof,
}

/// The fixed, case-sensitive keyword table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Keyword {
    /// `eta`, first half of a declaration.
    Eta,
    /// `holo`, second half of a declaration.
    Holo,
    /// `lekho`, print with newline.
    Lekho,
    /// `ullekho`, print without newline.
    Ullekho,
    /// `jodi`, if.
    Jodi,
    /// `nahole`, else.
    Nahole,
    /// `jotokhon`, while.
    Jotokhon,
    /// `kaj`, opens `kaj shuru` and `kaj shesh`.
    Kaj,
    /// `shuru`, program start.
    Shuru,
    /// `shesh`, program end.
    Shesh,
    /// `theme`, first half of break.
    Theme,
    /// `egiye`, first half of continue.
    Egiye,
    /// `jao`, second half of break and continue.
    Jao,
    /// `sonkhya`, integer input.
    Sonkhya,
    /// `dosomik`, float input.
    Dosomik,
    /// `bhasha`, string input.
    Bhasha,
    /// `nao`, take (input).
    Nao,
}

impl Keyword {
    /// Gets the keyword as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eta => "eta",
            Self::Holo => "holo",
            Self::Lekho => "lekho",
            Self::Ullekho => "ullekho",
            Self::Jodi => "jodi",
            Self::Nahole => "nahole",
            Self::Jotokhon => "jotokhon",
            Self::Kaj => "kaj",
            Self::Shuru => "shuru",
            Self::Shesh => "shesh",
            Self::Theme => "theme",
            Self::Egiye => "egiye",
            Self::Jao => "jao",
            Self::Sonkhya => "sonkhya",
            Self::Dosomik => "dosomik",
            Self::Bhasha => "bhasha",
            Self::Nao => "nao",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(k) => write!(f, "keyword '{k}'"),
            Self::Float(r) => write!(f, "number {r}"),
            Self::Integer(n) => write!(f, "number {n}"),
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Bool(b) => write!(f, "boolean {b}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Operator(op) => write!(f, "operator '{op}'"),
            Self::Bang => write!(f, "operator '!'"),
            Self::Assign => write!(f, "'='"),
            Self::Semicolon => write!(f, "';'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Eof => write!(f, "end of file"),
            Self::Comment | Self::NewLine | Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into tokens paired with their line numbers.
///
/// The returned sequence always ends with exactly one [`Token::Eof`].
/// Tokenizing is pure: the same source always yields the same sequence.
///
/// # Errors
/// Returns a [`LexError`] at the first character that cannot start a token,
/// for a string literal missing its closing quote, or for an integer literal
/// that does not fit in an `i64`.
///
/// # Example
/// ```
/// use bongscript::interpreter::lexer::{Keyword, Token, tokenize};
///
/// let tokens = tokenize("kaj shuru montobbo ignored; kaj shesh").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Keyword(Keyword::Kaj),
///                 Token::Keyword(Keyword::Shuru),
///                 Token::Keyword(Keyword::Kaj),
///                 Token::Keyword(Keyword::Shesh),
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(kind) => {
                return Err(LexError::from_kind(kind, lexer.slice(), lexer.extras.line));
            },
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    Ok(tokens)
}

/// Discards a `montobbo` comment up to and including the next `;`, or to the
/// end of input when there is none.
fn skip_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let remainder = lex.remainder();
    let end = remainder.find(';').map_or(remainder.len(), |i| i + 1);
    lex.extras.line += remainder[..end].matches('\n').count();
    lex.bump(end);
    logos::Skip
}

/// Reads a string literal after its opening quote.
///
/// # Returns
/// - `Ok(String)`: The raw text between the quotes.
/// - `Err(LexErrorKind::UnterminatedString)`: If no closing quote follows.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();
    let Some(end) = remainder.find('"') else {
        return Err(LexErrorKind::UnterminatedString);
    };

    let content = remainder[..end].to_string();
    lex.extras.line += content.matches('\n').count();
    lex.bump(end + 1);
    Ok(content)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::InvalidNumber)
}

/// Parses an integer literal from the current token slice.
///
/// The slice holds only digits, so the only possible failure is overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::LiteralTooLarge)
}
