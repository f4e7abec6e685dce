pub const SPECIAL_CHARACTERS: &str = " !\"#$%&'()*+,-./:;<=>?@[]^_`{|}~";

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// At least six characters with a lowercase letter, an uppercase letter,
/// a digit and one of `SPECIAL_CHARACTERS`.
pub fn is_strong_password(password: &str) -> bool {
    let contains_lowercase = password.chars().any(char::is_lowercase);
    let contains_uppercase = password.chars().any(char::is_uppercase);
    let contains_numbers = password.chars().any(char::is_numeric);
    let contains_special_characters = password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));
    let is_long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;

    contains_lowercase
        && contains_uppercase
        && contains_numbers
        && contains_special_characters
        && is_long_enough
}
