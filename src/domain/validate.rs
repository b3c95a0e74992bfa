//! Field validation for listing input
//!
//! These are the checks the shell applies before a listing is added:
//! names are short alphabetic phrases, addresses start with a house
//! number, and price/size fit fixed digit widths. None of this is
//! re-applied when records are loaded from disk.

use super::property::{ADDRESS_MAX, NAME_MAX};

/// Counts letter runs ("words") in a string of letters and spaces.
///
/// Returns `None` if the string contains anything other than letters and
/// spaces.
fn letter_words(s: &str) -> Option<usize> {
    let mut words = 0;
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if !in_word {
                words += 1;
                in_word = true;
            }
        } else if c == ' ' {
            in_word = false;
        } else {
            return None;
        }
    }
    Some(words)
}

/// Validates a property name: letters and spaces only, 1-3 words, and
/// within the storage width.
pub fn validate_name(name: &str) -> bool {
    name.len() <= NAME_MAX && matches!(letter_words(name), Some(1..=3))
}

/// Validates an address: a house number, one space, then exactly two
/// words of letters.
pub fn validate_address(address: &str) -> bool {
    if address.len() > ADDRESS_MAX {
        return false;
    }

    let rest = address.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == address.len() {
        return false; // no leading house number
    }

    match rest.strip_prefix(' ') {
        Some(rest) => letter_words(rest) == Some(2),
        None => false,
    }
}

/// Decimal digit count of `n`; zero counts as one digit.
pub fn digit_count(mut n: u32) -> u32 {
    if n == 0 {
        return 1;
    }
    let mut digits = 0;
    while n != 0 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// True iff `n` fits in `max_digits` decimal digits.
pub fn validate_digit_count(n: u32, max_digits: u32) -> bool {
    digit_count(n) <= max_digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_up_to_three_words() {
        assert!(validate_name("Cottage"));
        assert!(validate_name("John Smith"));
        assert!(validate_name("Sea View Villa"));
    }

    #[test]
    fn name_rejects_digits_and_punctuation() {
        assert!(!validate_name("John 3"));
        assert!(!validate_name("Flat 4B"));
        assert!(!validate_name("O'Brien"));
    }

    #[test]
    fn name_rejects_wrong_word_counts() {
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
        assert!(!validate_name("A B C D"));
    }

    #[test]
    fn name_rejects_overlong_input() {
        let long = "A".repeat(NAME_MAX + 1);
        assert!(!validate_name(&long));
    }

    #[test]
    fn name_tolerates_extra_spacing() {
        assert!(validate_name("  John   Smith  "));
    }

    #[test]
    fn address_accepts_number_and_two_words() {
        assert!(validate_address("123 Main Street"));
        assert!(validate_address("1 Ocean Drive"));
    }

    #[test]
    fn address_rejects_missing_house_number() {
        assert!(!validate_address("Main Street"));
    }

    #[test]
    fn address_rejects_missing_space_after_number() {
        assert!(!validate_address("123Main Street"));
    }

    #[test]
    fn address_rejects_wrong_word_count() {
        assert!(!validate_address("123 Main"));
        assert!(!validate_address("123 Main Street North"));
    }

    #[test]
    fn address_rejects_punctuation() {
        assert!(!validate_address("123 Main St."));
    }

    #[test]
    fn address_rejects_overlong_input() {
        let long = format!("1 {} Street", "A".repeat(ADDRESS_MAX));
        assert!(!validate_address(&long));
    }

    #[test]
    fn digit_count_of_zero_is_one() {
        assert_eq!(digit_count(0), 1);
        assert!(validate_digit_count(0, 3));
    }

    #[test]
    fn digit_count_limits() {
        assert!(validate_digit_count(999_999, 6));
        assert!(!validate_digit_count(1_000_000, 6));
        assert!(validate_digit_count(999, 3));
        assert!(!validate_digit_count(1_000, 3));
    }
}
