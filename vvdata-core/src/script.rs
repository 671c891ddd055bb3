//! Unicode script membership for verse lines
//!
//! Detection is plain block-range membership. No linguistic analysis is
//! attempted: a line is tagged by the first script in [`Script::PRECEDENCE`]
//! that has at least one character on it.

/// Scripts recognized in raw verse transcripts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Script {
    /// Telugu block (U+0C00..U+0C7F)
    Telugu,
    /// Latin letters, including the extended ranges used by IAST
    Latin,
    /// Devanagari block (U+0900..U+097F)
    Devanagari,
}

impl Script {
    /// Order in which scripts are tested; first match wins
    pub const PRECEDENCE: [Script; 3] = [Script::Telugu, Script::Latin, Script::Devanagari];

    /// Check whether a character belongs to this script
    pub fn contains(self, ch: char) -> bool {
        match self {
            Script::Telugu => ('\u{0C00}'..='\u{0C7F}').contains(&ch),
            Script::Latin => is_latin_letter(ch),
            Script::Devanagari => ('\u{0900}'..='\u{097F}').contains(&ch),
        }
    }

    /// Check whether any character of `line` belongs to this script
    pub fn appears_in(self, line: &str) -> bool {
        line.chars().any(|ch| self.contains(ch))
    }
}

fn is_latin_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    match ch {
        // Latin-1 Supplement and Latin Extended-A/B, letters only (skips × and ÷)
        '\u{00C0}'..='\u{024F}' => ch.is_alphabetic(),
        // Latin Extended Additional: ṛ, ṣ, ṭ, ḥ, ṃ ...
        '\u{1E00}'..='\u{1EFF}' => true,
        _ => false,
    }
}

/// Detect the dominant script of a line by fixed precedence
///
/// Returns `None` when the line carries no character of a known script
/// (digits, ASCII punctuation, symbols and so on).
pub fn detect_line_script(line: &str) -> Option<Script> {
    Script::PRECEDENCE
        .into_iter()
        .find(|script| script.appears_in(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_boundaries() {
        assert!(Script::Telugu.contains('\u{0C00}'));
        assert!(Script::Telugu.contains('\u{0C7F}'));
        assert!(!Script::Telugu.contains('\u{0C80}'));
        assert!(Script::Devanagari.contains('\u{0900}'));
        assert!(Script::Devanagari.contains('\u{097F}'));
        assert!(!Script::Devanagari.contains('\u{0980}'));
    }

    #[test]
    fn test_latin_letters() {
        assert!(Script::Latin.contains('a'));
        assert!(Script::Latin.contains('Z'));
        assert!(Script::Latin.contains('ā'));
        assert!(Script::Latin.contains('ṣ'));
        assert!(!Script::Latin.contains('7'));
        assert!(!Script::Latin.contains('×'));
        assert!(!Script::Latin.contains('।'));
    }

    #[test]
    fn test_precedence_telugu_first() {
        assert_eq!(detect_line_script("Rama రామ राम"), Some(Script::Telugu));
    }

    #[test]
    fn test_precedence_latin_before_devanagari() {
        assert_eq!(detect_line_script("राम Rama"), Some(Script::Latin));
    }

    #[test]
    fn test_devanagari_only() {
        assert_eq!(detect_line_script("ॐ नमो नारायणाय ॥"), Some(Script::Devanagari));
    }

    #[test]
    fn test_no_script() {
        assert_eq!(detect_line_script("|| 12 ||"), None);
        assert_eq!(detect_line_script(""), None);
    }
}
