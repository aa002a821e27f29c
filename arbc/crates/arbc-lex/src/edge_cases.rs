//! Edge case tests for arbc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, LexErrorKind, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize("edge.arb", source).unwrap()
    }

    fn lex_err(source: &str) -> LexError {
        tokenize("edge.arb", source).unwrap_err()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t \t  ").is_empty());
    }

    #[test]
    fn test_edge_blank_line_is_illegal() {
        let err = lex_err("\n");
        assert_eq!(err.detail, "'\n'");
        assert_eq!((err.start.index, err.end.index), (0, 1));
        assert_eq!((err.end.line, err.end.column), (1, 0));
    }

    #[test]
    fn test_edge_crlf_after_comment_only() {
        assert!(lex_all("# a\r\n# b\r\n").is_empty());
        assert_eq!(lex_err("a\r\n").detail, "'\r'");
    }

    #[test]
    fn test_edge_comment_without_trailing_newline() {
        assert!(lex_all("# last line").is_empty());
    }

    #[test]
    fn test_edge_hash_alone() {
        assert!(lex_all("#").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(kinds("x"), vec![TokenKind::Identifier("x".into())]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&name);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span().len(), 10000);
    }

    #[test]
    fn test_edge_negative_literal_exactly_one_token() {
        let tokens = lex_all("-5");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Int(-5));
    }

    #[test]
    fn test_edge_plus_exactly_one_token() {
        let tokens = lex_all("@+@");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Plus);
        assert_eq!(tokens[0].span().len(), 3);
    }

    #[test]
    fn test_edge_unknown_block() {
        let err = lex_err("@FOO@");
        assert_eq!(err.kind, LexErrorKind::IllegalCharacter);
        assert_eq!(err.start.index, 0);
        assert_eq!(err.end.index, 1);
    }

    #[test]
    fn test_edge_unterminated_keyword() {
        let source = "@TRU";
        let err = lex_err(source);
        assert!(err.is_unmatched_block());
        assert_eq!(err.start.index, source.chars().count());
        assert!(err.span().is_empty());
    }

    #[test]
    fn test_edge_unterminated_after_valid_tokens() {
        let source = "a @IS@ b @IS";
        let err = lex_err(source);
        assert_eq!(err.start.index, source.chars().count());
        assert_eq!(err.start.column, 12);
    }

    #[test]
    fn test_edge_minus_at_end_of_input() {
        let err = lex_err("3 -");
        assert_eq!(err.detail, "'-'");
        assert_eq!(err.start.index, 2);
    }

    #[test]
    fn test_edge_minus_before_letter() {
        assert_eq!(lex_err("-x").detail, "'-'");
    }

    #[test]
    fn test_edge_minus_operator_followed_by_literal() {
        assert_eq!(
            kinds("@-@-1"),
            vec![TokenKind::Minus, TokenKind::Int(-1)]
        );
    }

    #[test]
    fn test_edge_parens_list() {
        assert_eq!(
            kinds("(a,b)"),
            vec![
                TokenKind::LParen,
                TokenKind::Identifier("a".into()),
                TokenKind::Comma,
                TokenKind::Identifier("b".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_edge_number_directly_followed_by_identifier() {
        assert_eq!(
            kinds("12ab"),
            vec![TokenKind::Int(12), TokenKind::Identifier("ab".into())]
        );
    }

    #[test]
    fn test_edge_keyword_glued_to_identifier() {
        assert_eq!(
            kinds("x@IS@y"),
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::Is,
                TokenKind::Identifier("y".into()),
            ]
        );
    }

    #[test]
    fn test_edge_operator_inside_block_is_not_recursive() {
        // "@@+@@" is the empty block "@@" followed by "+@@"
        assert!(lex_err("@@+@@").is_unmatched_block());
    }

    #[test]
    fn test_edge_unknown_block_after_newlines() {
        let err = lex_err("# header\n#\n   @WHILE@");
        assert_eq!((err.start.line, err.start.column), (2, 3));
    }

    #[test]
    fn test_edge_multibyte_in_comment_keeps_offsets() {
        let source = "# ünïcödé\nabc";
        let tokens = lex_all(source);
        assert_eq!(tokens[0].start.line, 1);
        assert_eq!(&source[tokens[0].start.offset..tokens[0].end.offset], "abc");
    }

    #[test]
    fn test_edge_multibyte_inside_block_rewinds_cleanly() {
        let err = lex_err("@Ω@");
        assert!(err.is_unmatched_block());
        assert_eq!(err.end.offset, 1);
    }

    #[test]
    fn test_edge_lexing_twice_is_identical() {
        let source = "@DEF@ f(a, b) @IS@ a @>=@ -12 @END@ # done";
        assert_eq!(tokenize("a", source), tokenize("a", source));
    }

    #[test]
    fn test_edge_token_end_is_next_token_start_when_adjacent() {
        let tokens = lex_all("f(1)");
        for pair in tokens.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
