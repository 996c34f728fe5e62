#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Number(String),
    Symbol(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub token: TokenKind,
    pub line: usize,
    pub col: usize,
}

