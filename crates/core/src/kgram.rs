use crate::tokenize::Token;

/// All contiguous windows of `k` tokens in order, each serialized as its
/// token texts joined by a single space. Two k-grams are equal iff their
/// token texts and order are identical. Fewer than `k` tokens yields an
/// empty sequence.
pub fn build_kgrams(tokens: &[Token], k: usize) -> Vec<String> {
    if k == 0 || tokens.len() < k {
        return Vec::new();
    }

    tokens
        .windows(k)
        .map(|window| {
            let mut kgram = String::new();
            for (idx, token) in window.iter().enumerate() {
                if idx > 0 {
                    kgram.push(' ');
                }
                kgram.push_str(&token.text);
            }
            kgram
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    #[test]
    fn overlapping_windows_in_order() {
        let tokens = tokenize("a = b ;");
        let kgrams = build_kgrams(&tokens, 3);
        assert_eq!(kgrams, ["a = b", "= b ;"]);
    }

    #[test]
    fn window_count_is_len_minus_k_plus_one() {
        let tokens = tokenize("a b c d e f");
        assert_eq!(build_kgrams(&tokens, 4).len(), 3);
    }

    #[test]
    fn short_input_yields_no_kgrams() {
        let tokens = tokenize("a b");
        assert!(build_kgrams(&tokens, 3).is_empty());
        assert!(build_kgrams(&[], 3).is_empty());
    }

    #[test]
    fn k_of_one_is_the_token_stream() {
        let tokens = tokenize("x + y");
        assert_eq!(build_kgrams(&tokens, 1), ["x", "+", "y"]);
    }
}
