// tests/scanner_tests.rs

use sift_lang::ast::{Token, TokenKind};
use sift_lang::scanner::{ScanError, Scanner};

// ============================================================================
// Raw reads
// ============================================================================

#[test]
fn test_read_single_chars() {
    let mut scanner = Scanner::new("A = 'b'");
    assert_eq!(scanner.read(), Some('A'));
    assert_eq!(scanner.read(), Some(' '));
    assert_eq!(scanner.read(), Some('='));
}

#[test]
fn test_read_exhausts() {
    let mut scanner = Scanner::new("a");
    assert_eq!(scanner.read(), Some('a'));
    assert_eq!(scanner.read(), None);
    assert_eq!(scanner.read(), None);
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn test_scan_whitespace() {
    let test_cases = vec!["   ", "\t", "\n", " \t \n "];

    for input in test_cases {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Whitespace, "Failed for input: {:?}", input);
        assert_eq!(token.literal, input, "Whitespace literal is kept verbatim");
        assert_eq!(scanner.scan().unwrap(), Token::eof());
    }
}

// ============================================================================
// Identifiers
// ============================================================================

#[test]
fn test_scan_identifier() {
    // (input, expected literal)
    let test_cases = vec![
        ("test", "test"),
        ("@test.123", "@test.123"),
        ("_test.123", "_test.123"),
        ("#test.123", "#test.123"),
        ("#test.123:456", "#test.123:456"),
        ("test'", "test"),
        ("test\"d", "test"),
    ];

    for (input, expected) in test_cases {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier, "Failed for input: {}", input);
        assert_eq!(token.literal, expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_leading_dot_or_colon_is_unexpected() {
    // A leading `.`/`:` is not an identifier start, so it surfaces as an
    // unexpected-character token rather than a scan failure.
    let test_cases = vec![(".test.123", "."), (":test.123", ":")];

    for (input, expected) in test_cases {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Unexpected, "Failed for input: {}", input);
        assert_eq!(token.literal, expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_invalid_identifiers() {
    let test_cases = vec!["test#@", "test.", "test:"];

    for input in test_cases {
        let mut scanner = Scanner::new(input);
        let result = scanner.scan();
        assert_eq!(
            result,
            Err(ScanError::InvalidIdentifier(input.to_string())),
            "Failed for input: {}",
            input
        );
        assert!(result.unwrap_err().to_string().contains("Invalid identifier"));
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_scan_number() {
    let test_cases = vec![
        ("123", "123"),
        ("-123", "-123"),
        ("-123.456", "-123.456"),
        ("123.456", "123.456"),
        // The minus of a following number is left unread
        ("12-3", "12"),
    ];

    for (input, expected) in test_cases {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Number, "Failed for input: {}", input);
        assert_eq!(token.literal, expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_number_then_negative_number() {
    let mut scanner = Scanner::new("12-3");
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Number, "12"));
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Number, "-3"));
    assert_eq!(scanner.scan().unwrap(), Token::eof());
}

#[test]
fn test_leading_dot_number_is_unexpected() {
    let mut scanner = Scanner::new(".123");
    let token = scanner.scan().unwrap();
    assert_eq!(token.kind, TokenKind::Unexpected);
    assert_eq!(token.literal, ".");
}

#[test]
fn test_invalid_numbers() {
    // (input, rejected literal)
    let test_cases = vec![("- 123", "-"), ("123.abc", "123."), ("-.", "-.")];

    for (input, expected) in test_cases {
        let mut scanner = Scanner::new(input);
        let result = scanner.scan();
        assert_eq!(
            result,
            Err(ScanError::InvalidNumber(expected.to_string())),
            "Failed for input: {}",
            input
        );
        assert!(result.unwrap_err().to_string().contains("Invalid number"));
    }
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_scan_text() {
    let test_cases = vec![
        (r#""""#, ""),
        ("''", ""),
        ("'test'", "test"),
        (r"'te\'st'", "te'st"),
        (r#""te\"st""#, "te\"st"),
        (r#""tes@#,;!@#%^'\"t""#, r#"tes@#,;!@#%^'"t"#),
        (r#"'tes@#,;!@#%^\'"t'"#, r#"tes@#,;!@#%^'"t"#),
    ];

    for (input, expected) in test_cases {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Text, "Failed for input: {}", input);
        assert_eq!(token.literal, expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_opposite_quote_is_not_unescaped() {
    // Only the wrapping quote character is unescaped
    let mut scanner = Scanner::new(r#""te\'st""#);
    let token = scanner.scan().unwrap();
    assert_eq!(token.literal, r"te\'st");
}

#[test]
fn test_unterminated_text_carries_partial_token() {
    let mut scanner = Scanner::new("'abc");
    let result = scanner.scan();

    match result {
        Err(ScanError::UnterminatedText { token }) => {
            assert_eq!(token.kind, TokenKind::Text);
            assert_eq!(token.literal, "'abc", "Partial literal keeps the opening quote");
        }
        other => panic!("Expected unterminated text error, got {:?}", other),
    }
}

// ============================================================================
// Signs
// ============================================================================

#[test]
fn test_scan_sign() {
    let test_cases = vec![
        "=", "!=", "~", "!~", "<", "<=", ">", ">=", "?=", "?!=", "?~", "?!~", "?<", "?<=", "?>",
        "?>=",
    ];

    for input in test_cases {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Sign, "Failed for input: {}", input);
        assert_eq!(token.literal, input, "Failed for input: {}", input);
    }
}

#[test]
fn test_invalid_signs() {
    let test_cases = vec!["==", "!", "?", "=~", "?!", "~~"];

    for input in test_cases {
        let mut scanner = Scanner::new(input);
        let result = scanner.scan();
        assert_eq!(
            result,
            Err(ScanError::InvalidSign(input.to_string())),
            "Failed for input: {}",
            input
        );
        assert!(result.unwrap_err().to_string().contains("Invalid sign operator"));
    }
}

// ============================================================================
// Joins
// ============================================================================

#[test]
fn test_scan_join() {
    let mut scanner = Scanner::new("&& ||");
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Join, "&&"));
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Whitespace);
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Join, "||"));
}

#[test]
fn test_join_inside_quotes_is_text() {
    let mut scanner = Scanner::new("'||test&&'&&123");
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Text, "||test&&"));
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Join, "&&"));
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Number, "123"));
}

#[test]
fn test_invalid_joins() {
    let test_cases = vec!["&", "|", "&|", "&&&", "||&"];

    for input in test_cases {
        let mut scanner = Scanner::new(input);
        let result = scanner.scan();
        assert_eq!(
            result,
            Err(ScanError::InvalidJoin(input.to_string())),
            "Failed for input: {}",
            input
        );
        assert!(result.unwrap_err().to_string().contains("Invalid join operator"));
    }
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_scan_group() {
    // (input, expected literal)
    let test_cases = vec![
        ("(a b c)", "a b c"),
        ("((a b c))", "(a b c)"),
        ("((a )b c)", "(a )b c"),
        (r#"("ab)("c)"#, r#""ab)("c"#),
    ];

    for (input, expected) in test_cases {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Group, "Failed for input: {}", input);
        assert_eq!(token.literal, expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_close_paren_stops_identifier() {
    let mut scanner = Scanner::new("a)");
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Identifier, "a"));
}

#[test]
fn test_group_preserves_quote_character() {
    let mut scanner = Scanner::new(r"('a\'b')");
    let token = scanner.scan().unwrap();
    assert_eq!(token.kind, TokenKind::Group);
    assert_eq!(token.literal, r"'a\'b'", "Escapes are reinstated in the original quote");
}

#[test]
fn test_unbalanced_group() {
    let mut scanner = Scanner::new("(a b c");
    let result = scanner.scan();
    assert_eq!(result, Err(ScanError::UnbalancedGroup { missing: 1 }));
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("missing 1 closing bracket(s)")
    );

    let mut scanner = Scanner::new("((a=1)");
    assert_eq!(scanner.scan(), Err(ScanError::UnbalancedGroup { missing: 1 }));

    let mut scanner = Scanner::new("(((");
    assert_eq!(scanner.scan(), Err(ScanError::UnbalancedGroup { missing: 3 }));
}

#[test]
fn test_unterminated_text_in_group() {
    let mut scanner = Scanner::new(r#"("ab)(c)"#);
    let result = scanner.scan();

    match result {
        Err(ScanError::UnterminatedTextInGroup { text, token }) => {
            assert_eq!(text, r#""ab)(c)"#);
            assert_eq!(token.kind, TokenKind::Group);
            assert_eq!(token.literal, r#""ab)(c)"#, "Partial group context is carried");
        }
        other => panic!("Expected unterminated text in group, got {:?}", other),
    }
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_eof() {
    let mut scanner = Scanner::new("");
    assert_eq!(scanner.scan().unwrap(), Token::eof());
    assert_eq!(scanner.scan().unwrap(), Token::eof());
}

#[test]
fn test_unexpected_characters() {
    let test_cases = vec![("{a=1}", "{"), ("[a=1]", "["), ("$", "$"), (")", ")")];

    for (input, expected) in test_cases {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan().unwrap();
        assert_eq!(token.kind, TokenKind::Unexpected, "Failed for input: {}", input);
        assert_eq!(token.literal, expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_unexpected_character_is_consumed() {
    let mut scanner = Scanner::new("$a");
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Unexpected);
    assert_eq!(scanner.scan().unwrap(), Token::new(TokenKind::Identifier, "a"));
}

#[test]
fn test_full_token_stream() {
    let mut scanner = Scanner::new(r#"a.b >= -2 && (c ?~ 'x')"#);

    let expected = vec![
        Token::new(TokenKind::Identifier, "a.b"),
        Token::new(TokenKind::Whitespace, " "),
        Token::new(TokenKind::Sign, ">="),
        Token::new(TokenKind::Whitespace, " "),
        Token::new(TokenKind::Number, "-2"),
        Token::new(TokenKind::Whitespace, " "),
        Token::new(TokenKind::Join, "&&"),
        Token::new(TokenKind::Whitespace, " "),
        Token::new(TokenKind::Group, "c ?~ 'x'"),
        Token::eof(),
    ];

    for expected_token in expected {
        assert_eq!(scanner.scan().unwrap(), expected_token);
    }
}
