// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pure text transformations behind every textkit tool.
//!
//! Nothing in this module performs I/O or keeps state between calls. Callers
//! hand in already-loaded text and get a freshly built value back:
//!
//! * [`count_word_frequency`] - tokenizes text and counts each word
//! * [`is_palindrome`] - normalized reversal check
//! * [`caesar_encrypt`] / [`caesar_decrypt`] - ASCII letter shifting
//!
//! # Example
//! ```
//! use textkit::text::{caesar_decrypt, caesar_encrypt, count_word_frequency, is_palindrome};
//!
//! let counts = count_word_frequency("The cat. The CAT, the cat!");
//! assert_eq!(counts.get("the"), Some(3));
//!
//! assert!(is_palindrome("A man, a plan, a canal: Panama"));
//!
//! let secret = caesar_encrypt("Attack at dawn!", 3);
//! assert_eq!(secret, "Dwwdfn dw gdzq!");
//! assert_eq!(caesar_decrypt(&secret, 3), "Attack at dawn!");
//! ```

pub mod caesar;
pub mod palindrome;
pub mod word_frequency;

pub use caesar::{caesar_decrypt, caesar_encrypt, caesar_transform, CipherDirection, Shift, ALPHABET_LEN};
pub use palindrome::{is_palindrome, normalize_for_palindrome};
pub use word_frequency::{count_word_frequency, normalize_for_words, WordCount, WordFrequency};
