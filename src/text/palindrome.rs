// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Alphanumeric characters of `text`, lowercased, in their original order.
pub fn normalize_for_palindrome(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether `text` reads the same backwards once case and non-alphanumerics are ignored.
///
/// Text with no alphanumeric characters normalizes to nothing and counts as a
/// palindrome.
///
/// # Example
/// ```
/// use textkit::text::is_palindrome;
///
/// assert!(is_palindrome("Was it a car or a cat I saw?"));
/// assert!(!is_palindrome("Hello"));
/// assert!(is_palindrome("?!"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    let normalized = normalize_for_palindrome(text);
    normalized.iter().eq(normalized.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_palindrome_table_driven() {
        struct TestCase {
            input: &'static str,
            expected: bool,
        }

        let test_cases = vec![
            TestCase { input: "A man, a plan, a canal: Panama", expected: true },
            TestCase { input: "Hello", expected: false },
            TestCase { input: "racecar", expected: true },
            TestCase { input: "RaceCar", expected: true },
            TestCase { input: "No 'x' in Nixon", expected: true },
            TestCase { input: "12321", expected: true },
            TestCase { input: "123 21", expected: true },
            TestCase { input: "12345", expected: false },
            TestCase { input: "ab", expected: false },
            TestCase { input: "a", expected: true },
        ];

        for case in test_cases {
            assert_eq!(
                is_palindrome(case.input),
                case.expected,
                "Failed for input: {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_vacuous_palindromes() {
        // No alphanumerics left after normalization: trivially equal to its reverse
        for input in ["", "   ", "\t\n", "!!!", ".,;: -", "¿?"] {
            assert!(normalize_for_palindrome(input).is_empty());
            assert!(is_palindrome(input), "Expected vacuous palindrome for {:?}", input);
        }
    }

    #[test]
    fn test_reversed_input_gives_same_verdict() {
        let inputs = [
            "A man, a plan, a canal: Panama",
            "Hello, World",
            "Step on no pets",
            "abc!def",
            "",
        ];

        for input in inputs {
            let reversed: String = input.chars().rev().collect();
            assert_eq!(is_palindrome(input), is_palindrome(&reversed), "Failed for {:?}", input);
        }
    }

    #[test]
    fn test_normalize_keeps_unicode_alphanumerics() {
        assert_eq!(normalize_for_palindrome("Été!"), vec!['é', 't', 'é']);
        assert!(is_palindrome("Été"));
    }
}
