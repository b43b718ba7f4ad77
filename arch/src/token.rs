/// One symbol of the three-symbol output alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Space,
    Tab,
    Newline,
}

impl Token {
    /// Character written to the output stream.
    pub fn to_char(self) -> char {
        match self {
            Token::Space => ' ',
            Token::Tab => '\t',
            Token::Newline => '\n',
        }
    }

    /// One-letter readable form for dump listings.
    pub fn glyph(self) -> char {
        match self {
            Token::Space => 'S',
            Token::Tab => 'T',
            Token::Newline => 'L',
        }
    }
}

pub fn to_text(seq: &[Token]) -> String {
    seq.iter().map(|t| t.to_char()).collect()
}

pub fn glyphs(seq: &[Token]) -> String {
    seq.iter().map(|t| t.glyph()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_glyphs() {
        let seq = [Token::Space, Token::Tab, Token::Newline];
        assert_eq!(to_text(&seq), " \t\n");
        assert_eq!(glyphs(&seq), "STL");
    }
}
