//! Static fallback advice, substituted whenever the external advice source
//! is unavailable or fails. Table lookup only.

use crate::models::{Language, SpatialAdvice};

/// Fixed tip/caution pair for a language.
pub fn fallback_advice(language: Language) -> SpatialAdvice {
    let (tip, caution) = match language {
        Language::En => (
            "Corridors are wide; stay to the right for the smoothest tiles.",
            "Expect higher density near the duty-free entrance.",
        ),
        Language::Hi => (
            "गलियारे चौड़े हैं; सुगम टाइलों के लिए दाईं ओर रहें।",
            "ड्यूटी-फ्री प्रवेश द्वार के पास अधिक भीड़ की अपेक्षा करें।",
        ),
        Language::Te => (
            "కారిడార్లు వెడల్పుగా ఉన్నాయి; మృదువైన టైల్స్ కోసం కుడి వైపున ఉండండి.",
            "డ్యూటీ-ఫ్రీ ప్రవేశం వద్ద ఎక్కువ రద్దీని ఆశించండి.",
        ),
        Language::Ta => (
            "நடைபாதைகள் அகலமானவை; மென்மையான தரைக்கு வலது பக்கம் ஒதுங்கிச் செல்லவும்.",
            "சுங்கமில்லா நுழைவாயிலுக்கு அருகில் அதிக நெரிசலை எதிர்பார்க்கலாம்.",
        ),
        Language::Ml => (
            "ഇടനാഴികൾ വീതിയുള്ളതാണ്; സുഗമമായ യാത്രയ്ക്കായി വലതുവശം ചേർന്ന് നീങ്ങുക.",
            "ഡ്യൂട്ടി ഫ്രീ കവാടത്തിന് സമീപം തിരക്ക് പ്രതീക്ഷിക്കുക.",
        ),
    };
    SpatialAdvice {
        tip: tip.into(),
        caution: caution.into(),
    }
}

/// Fixed three-step instruction list for a journey, used when the dynamic
/// instruction source fails.
pub fn fallback_instructions(start: &str, end: &str, language: Language) -> Vec<String> {
    match language {
        Language::En => vec![
            format!("Move from {start}"),
            "Follow signs through hub".into(),
            format!("Arrive at {end}"),
        ],
        Language::Hi => vec![
            format!("{start} से शुरू करें"),
            "हब के माध्यम से संकेतों का पालन करें".into(),
            format!("{end} पर पहुंचें"),
        ],
        Language::Te => vec![
            format!("{start} నుండి బయలుదేరండి"),
            "గుర్తులను అనుసరించండి".into(),
            format!("{end} కి చేరుకోండి"),
        ],
        Language::Ta => vec![
            format!("{start} இலிருந்து செல்லவும்"),
            "அடையாளங்களைப் பின்தொடரவும்".into(),
            format!("{end} ஐ அடையுங்கள்"),
        ],
        Language::Ml => vec![
            format!("{start}-ൽ നിന്ന് ആരംഭിക്കുക"),
            "അടയാളങ്ങൾ ശ്രദ്ധിക്കുക".into(),
            format!("{end}-ൽ എത്തുക"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_fallback_pair() {
        for lang in [
            Language::En,
            Language::Hi,
            Language::Te,
            Language::Ta,
            Language::Ml,
        ] {
            let advice = fallback_advice(lang);
            assert!(!advice.tip.is_empty());
            assert!(!advice.caution.is_empty());
        }
    }

    #[test]
    fn fallback_instructions_mention_the_endpoints() {
        let steps = fallback_instructions("Gate 1", "Gate 15", Language::En);
        assert_eq!(steps.len(), 3);
        assert!(steps[0].contains("Gate 1"));
        assert!(steps[2].contains("Gate 15"));
    }
}
