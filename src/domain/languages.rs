//! Known hub language tags, used to decide English eligibility.
//!
//! The hub tags models with bare ISO 639-1 codes. A static copy of the
//! code set keeps the filter pure and usable offline; framework and
//! architecture tags (`pytorch`, `bert`, ...) never collide with it.

pub const LANGUAGE_TAGS: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// A model is English-eligible when it is tagged `en`, or when none of
/// its tags name another known language.
pub fn is_english_eligible(tags: &[String]) -> bool {
    if tags.iter().any(|t| t == "en") {
        return true;
    }
    !tags
        .iter()
        .any(|t| t != "en" && LANGUAGE_TAGS.contains(&t.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn en_tag_is_eligible() {
        assert!(is_english_eligible(&tags(&["pytorch", "en", "bert"])));
    }

    #[test]
    fn en_tag_wins_over_other_languages() {
        assert!(is_english_eligible(&tags(&["en", "fr", "de"])));
    }

    #[test]
    fn other_language_without_en_is_excluded() {
        assert!(!is_english_eligible(&tags(&["pytorch", "fr"])));
        assert!(!is_english_eligible(&tags(&["zh", "bert"])));
    }

    #[test]
    fn no_language_tags_is_eligible() {
        assert!(is_english_eligible(&tags(&["pytorch", "transformers", "bert"])));
        assert!(is_english_eligible(&[]));
    }
}
