/// A country the engine can answer holiday questions about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    abbreviation: String,
    name: String,
    flag: String
}

impl Country {
    pub fn new(abbreviation: String, name: String) -> Country {
        let flag = flag_glyph(&abbreviation);
        Country { abbreviation, name, flag }
    }

    /// ISO 3166-1 alpha-2 code.
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }
}

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Emoji flag for a two-letter code, built from regional indicator symbols.
/// Empty for anything that is not two ASCII letters.
pub fn flag_glyph(alpha_2: &str) -> String {
    if alpha_2.len() != 2 || !alpha_2.chars().all(|c| c.is_ascii_alphabetic()) {
        return String::new();
    }
    alpha_2
        .chars()
        .map(|c| c.to_ascii_uppercase() as u32 - 'A' as u32)
        .filter_map(|offset| char::from_u32(REGIONAL_INDICATOR_A + offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_for_united_states() {
        let country = Country::new("US".to_owned(), "United States".to_owned());
        assert_eq!(country.flag(), "🇺🇸");
        assert_eq!(country.abbreviation(), "US");
        assert_eq!(country.name(), "United States");
    }

    #[test]
    fn no_flag_for_malformed_codes() {
        assert_eq!(flag_glyph("USA"), "");
        assert_eq!(flag_glyph("1?"), "");
        assert_eq!(flag_glyph("gb"), "🇬🇧");
    }
}
