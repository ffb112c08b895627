//! Display-safe rendering of card numbers.

/// Character used to hide card digits.
pub const MASK_CHAR: char = '*';

const MASKED_DIGITS: usize = 12;
const VISIBLE_DIGITS: usize = 4;

/// Replaces a card number with twelve mask characters followed by its last
/// four characters, e.g. `1234123412341234` becomes `************1234`.
///
/// Expects an already validated card number. Shorter input is not rejected:
/// whatever trailing characters exist (up to four) are kept.
pub fn mask_card_number(card_number: &str) -> String {
    let visible_from = card_number
        .char_indices()
        .rev()
        .nth(VISIBLE_DIGITS - 1)
        .map_or(0, |(idx, _)| idx);

    let mut masked: String = std::iter::repeat_n(MASK_CHAR, MASKED_DIGITS).collect();
    masked.push_str(&card_number[visible_from..]);
    masked
}
