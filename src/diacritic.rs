/// Vietnamese tone mark, used both as the recording folder name and as the LM label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiacriticClass {
    Unmarked,
    Acute,
    Grave,
    Hook,
    Tilde,
    Dot,
}

impl DiacriticClass {
    pub const ALL: [DiacriticClass; 6] = [
        DiacriticClass::Unmarked,
        DiacriticClass::Acute,
        DiacriticClass::Grave,
        DiacriticClass::Hook,
        DiacriticClass::Tilde,
        DiacriticClass::Dot,
    ];

    /// Marked classes in classification priority.
    const PRIORITY: [DiacriticClass; 5] = [
        DiacriticClass::Acute,
        DiacriticClass::Grave,
        DiacriticClass::Hook,
        DiacriticClass::Tilde,
        DiacriticClass::Dot,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            DiacriticClass::Unmarked => "unmarked",
            DiacriticClass::Acute => "acute",
            DiacriticClass::Grave => "grave",
            DiacriticClass::Hook => "hook",
            DiacriticClass::Tilde => "tilde",
            DiacriticClass::Dot => "dot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiacriticClass::Unmarked => "UNMARKED",
            DiacriticClass::Acute => "ACUTE",
            DiacriticClass::Grave => "GRAVE",
            DiacriticClass::Hook => "HOOK",
            DiacriticClass::Tilde => "TILDE",
            DiacriticClass::Dot => "DOT",
        }
    }

    /// Lowercase letters carrying this tone mark. Empty for `Unmarked`.
    pub fn marks(self) -> &'static str {
        match self {
            DiacriticClass::Unmarked => "",
            DiacriticClass::Acute => "áắấéếíóốớúứý",
            DiacriticClass::Grave => "àằầèềìòồờùừỳ",
            DiacriticClass::Hook => "ảẳẩẻểỉỏổởủửỷ",
            DiacriticClass::Tilde => "ãẵẫẽễĩõỗỡũữỹ",
            DiacriticClass::Dot => "ạặậẹệịọộợụựỵ",
        }
    }

    /// First class (acute, grave, hook, tilde, dot) with any of its marks in `word` wins.
    pub fn classify(word: &str) -> DiacriticClass {
        Self::PRIORITY
            .into_iter()
            .find(|class| word.chars().any(|c| class.marks().contains(c)))
            .unwrap_or(DiacriticClass::Unmarked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_single_syllables() {
        assert_eq!(DiacriticClass::classify("ba"), DiacriticClass::Unmarked);
        assert_eq!(DiacriticClass::classify("cá"), DiacriticClass::Acute);
        assert_eq!(DiacriticClass::classify("cà"), DiacriticClass::Grave);
        assert_eq!(DiacriticClass::classify("cả"), DiacriticClass::Hook);
        assert_eq!(DiacriticClass::classify("cã"), DiacriticClass::Tilde);
        assert_eq!(DiacriticClass::classify("cạ"), DiacriticClass::Dot);
        assert_eq!(DiacriticClass::classify("người"), DiacriticClass::Grave);
        assert_eq!(DiacriticClass::classify("đường"), DiacriticClass::Grave);
        assert_eq!(DiacriticClass::classify("ơn"), DiacriticClass::Unmarked);
    }

    #[test]
    fn mixed_marks_follow_priority_not_position() {
        // grave appears first in the word, acute still wins
        assert_eq!(DiacriticClass::classify("càá"), DiacriticClass::Acute);
        assert_eq!(DiacriticClass::classify("ạã"), DiacriticClass::Tilde);
    }

    #[test]
    fn labels_are_uppercase_dir_names() {
        for class in DiacriticClass::ALL {
            assert_eq!(class.label(), class.dir_name().to_uppercase());
        }
    }
}
