use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    Ru,
    Uk,
    En,
    De,
    Fr,
}

/// Toggle order.
pub const LOCALES: [Locale; 5] = [Locale::Ru, Locale::Uk, Locale::En, Locale::De, Locale::Fr];

impl Default for Locale {
    fn default() -> Self {
        Locale::De
    }
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::Uk => "uk",
            Locale::En => "en",
            Locale::De => "de",
            Locale::Fr => "fr",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::Ru => "🇷🇺",
            Locale::Uk => "🇺🇦",
            Locale::En => "🇬🇧",
            Locale::De => "🇩🇪",
            Locale::Fr => "🇫🇷",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        LOCALES
            .iter()
            .copied()
            .find(|locale| locale.code() == trimmed)
    }

    pub fn next(self) -> Self {
        let idx = LOCALES.iter().position(|locale| *locale == self).unwrap_or(0);
        LOCALES[(idx + 1) % LOCALES.len()]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_on_codes() {
        assert_eq!(Locale::parse("uk"), Some(Locale::Uk));
        assert_eq!(Locale::parse(" fr "), Some(Locale::Fr));
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse("es"), None);
    }

    #[test]
    fn next_cycles_through_all_locales() {
        let mut locale = Locale::Ru;
        let mut seen = Vec::new();
        for _ in 0..LOCALES.len() {
            seen.push(locale);
            locale = locale.next();
        }
        assert_eq!(seen, LOCALES.to_vec());
        assert_eq!(locale, Locale::Ru);
        assert_eq!(Locale::Fr.next(), Locale::Ru);
    }
}
