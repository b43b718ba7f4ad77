use arch::op::MNEMONIC_LEN;

use crate::error::Error;

/// One classified source line. Blank and comment-only lines classify to
/// `None` before this type is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Mnemonic word plus optional raw parameter, not yet checked against
    /// the instruction table.
    Code(String, Option<String>),
    /// `name:` definition, surface sugar for `LABEL name`.
    Label(String),
}

/// Classifies a raw line. A trailing `#` comment is stripped first; the
/// mnemonic-length window comes from the instruction table itself.
pub fn classify(raw: &str) -> Result<Option<Stmt>, Error> {
    let code = match raw.split_once('#') {
        Some((code, _comment)) => code,
        None => raw,
    };
    let code = code.trim();
    if code.is_empty() {
        return Ok(None);
    }

    if let Some(head) = code.strip_suffix(':') {
        let name = head.trim_end();
        if is_ident(name) {
            return Ok(Some(Stmt::Label(name.to_string())));
        }
    }

    let words: Vec<&str> = code.split_whitespace().collect();
    match words.as_slice() {
        [mnemonic] if is_mnemonic(mnemonic) => Ok(Some(Stmt::Code(mnemonic.to_string(), None))),
        [mnemonic, param] if is_mnemonic(mnemonic) && is_param(param) => Ok(Some(Stmt::Code(
            mnemonic.to_string(),
            Some(param.to_string()),
        ))),
        _ => Err(Error::UnparsableLine(raw.trim().to_string())),
    }
}

fn is_mnemonic(word: &str) -> bool {
    MNEMONIC_LEN.contains(&word.len()) && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_param(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn is_ident(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(mnemonic: &str, param: Option<&str>) -> Option<Stmt> {
        Some(Stmt::Code(mnemonic.to_string(), param.map(str::to_string)))
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(classify("").unwrap(), None);
        assert_eq!(classify("   \t ").unwrap(), None);
        assert_eq!(classify("# a comment").unwrap(), None);
        assert_eq!(classify("  # indented comment").unwrap(), None);
    }

    #[test]
    fn instruction_lines() {
        assert_eq!(classify("ADD").unwrap(), code("ADD", None));
        assert_eq!(classify("  PUSH 42  ").unwrap(), code("PUSH", Some("42")));
        assert_eq!(classify("PUSH -7 # neg").unwrap(), code("PUSH", Some("-7")));
        assert_eq!(classify("JMP loop_1").unwrap(), code("JMP", Some("loop_1")));
        // unknown-but-mnemonic-shaped words pass; the table decides later
        assert_eq!(classify("FOO").unwrap(), code("FOO", None));
    }

    #[test]
    fn label_definitions() {
        assert_eq!(
            classify("loop:").unwrap(),
            Some(Stmt::Label("loop".to_string()))
        );
        assert_eq!(
            classify("  _start :  # entry").unwrap(),
            Some(Stmt::Label("_start".to_string()))
        );
    }

    #[test]
    fn unparsable_lines() {
        assert!(classify("AB").is_err());
        assert!(classify("TOOLONGNAME").is_err());
        assert!(classify("PUSH 1 2").is_err());
        assert!(classify("PUSH 4.5").is_err());
        assert!(classify("PU SH").is_err());
        assert!(classify("123:").is_err());
        assert!(classify("JMP loop:").is_err());
    }
}
