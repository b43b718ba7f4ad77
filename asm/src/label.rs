use arch::token::Token;
use indexmap::IndexMap;

/// Allocates one unique token sequence per label name.
///
/// Sequences are drawn from the enumeration of all finite `{Space, Tab}`
/// strings, shortest first and lexicographic within a length (Space before
/// Tab), each suffixed with a Newline terminator. The cursor advances only
/// when an unseen name arrives, so the assignment is deterministic in
/// first-sight order. One allocator per assembly run.
pub struct Labels {
    assigned: IndexMap<String, Vec<Token>>,
    // next sequence to hand out, without its Newline terminator;
    // holds Space/Tab symbols only
    cursor: Vec<Token>,
}

impl Labels {
    pub fn new() -> Self {
        Self {
            assigned: IndexMap::new(),
            cursor: vec![Token::Space],
        }
    }

    /// Returns the sequence for `name`, assigning the next free one on
    /// first sight. Idempotent per name.
    pub fn resolve(&mut self, name: &str) -> &[Token] {
        if !self.assigned.contains_key(name) {
            let mut seq = self.cursor.clone();
            seq.push(Token::Newline);
            self.advance();
            self.assigned.insert(name.to_string(), seq);
        }
        &self.assigned[name]
    }

    // Binary odometer: Space plays 0, Tab plays 1. When every position
    // wraps, the sequence grows by one symbol (all Spaces).
    fn advance(&mut self) {
        for sym in self.cursor.iter_mut().rev() {
            match sym {
                Token::Space => {
                    *sym = Token::Tab;
                    return;
                }
                _ => *sym = Token::Space,
            }
        }
        self.cursor.insert(0, Token::Space);
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Assignments in first-sight order, for dump listings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Token])> + '_ {
        self.assigned.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use arch::token::to_text;

    use super::*;

    #[test]
    fn enumeration_is_length_first_then_lexicographic() {
        let mut labels = Labels::new();
        let expect = [" \n", "\t\n", "  \n", " \t\n", "\t \n", "\t\t\n", "   \n"];
        for (idx, want) in expect.iter().enumerate() {
            let name = format!("label{}", idx);
            assert_eq!(to_text(labels.resolve(&name)), *want);
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut labels = Labels::new();
        let first = labels.resolve("loop").to_vec();
        labels.resolve("other");
        assert_eq!(labels.resolve("loop"), first.as_slice());
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn distinct_names_never_collide() {
        let mut labels = Labels::new();
        let mut seen = std::collections::HashSet::new();
        for idx in 0..100 {
            let seq = labels.resolve(&format!("l{}", idx)).to_vec();
            assert!(seen.insert(seq));
        }
    }

    #[test]
    fn fresh_allocator_restarts_the_enumeration() {
        let mut a = Labels::new();
        let mut b = Labels::new();
        assert_eq!(a.resolve("x"), b.resolve("completely_different"));
    }
}
