use arch::token::Token;

/// Signed-magnitude encoding: a sign symbol (Space for non-negative, Tab
/// for negative), the magnitude in binary most-significant-bit first with
/// `0` as Space and `1` as Tab, then a terminating Newline. Zero keeps a
/// single Space digit.
pub fn number(num: i64) -> Vec<Token> {
    let mag = num.unsigned_abs();
    let digits = if mag == 0 { 1 } else { 64 - mag.leading_zeros() };

    let mut seq = Vec::with_capacity(digits as usize + 2);
    seq.push(if num < 0 { Token::Tab } else { Token::Space });
    for shift in (0..digits).rev() {
        seq.push(if (mag >> shift) & 1 == 1 {
            Token::Tab
        } else {
            Token::Space
        });
    }
    seq.push(Token::Newline);
    seq
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use arch::token::to_text;

    use super::*;

    #[test]
    fn zero_is_sign_and_single_digit() {
        assert_eq!(to_text(&number(0)), "  \n");
    }

    #[test]
    fn small_values() {
        assert_eq!(to_text(&number(1)), " \t\n");
        assert_eq!(to_text(&number(3)), " \t\t\n");
        assert_eq!(to_text(&number(4)), " \t  \n");
        assert_eq!(to_text(&number(-1)), "\t\t\n");
    }

    #[test]
    fn negation_flips_only_the_sign() {
        for n in 1..200i64 {
            let pos = number(n);
            let neg = number(-n);
            assert_eq!(pos[0], Token::Space);
            assert_eq!(neg[0], Token::Tab);
            assert_eq!(pos[1..], neg[1..]);
        }
    }

    #[test]
    fn injective_over_a_window() {
        let mut seen = HashSet::new();
        for n in -1000..=1000i64 {
            assert!(seen.insert(number(n)), "collision at {}", n);
        }
    }

    #[test]
    fn extremes_do_not_wrap() {
        // i64::MIN has no positive counterpart; unsigned_abs covers it
        let min = number(i64::MIN);
        assert_eq!(min[0], Token::Tab);
        assert_eq!(min.len(), 66);
        let max = number(i64::MAX);
        assert_eq!(max[0], Token::Space);
        assert_eq!(max.len(), 65);
    }
}
