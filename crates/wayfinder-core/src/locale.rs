//! Fixed display and instruction strings per language.
//!
//! Pure data. The path generator reads the `step_*` fragments; the UI layer
//! reads the rest. Every language carries every key, so lookup is total.

use crate::models::Language;

/// The full string set for one language.
#[derive(Debug)]
pub struct Strings {
    pub welcome: &'static str,
    pub tagline: &'static str,
    pub initialize: &'static str,
    pub helper_title: &'static str,
    pub helper_question: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub finding_helper: &'static str,
    pub helper_found: &'static str,
    pub select_hub: &'static str,
    pub traveler: &'static str,
    pub destination: &'static str,
    pub commence: &'static str,
    pub eta: &'static str,
    pub dist: &'static str,
    pub navigate: &'static str,
    pub congestion: &'static str,
    pub high: &'static str,
    pub med: &'static str,
    pub quiet: &'static str,
    pub sos: &'static str,
    pub cancel_sos: &'static str,
    pub step_start: &'static str,
    pub step_head: &'static str,
    pub step_security: &'static str,
    pub step_use: &'static str,
    pub step_accessibility: &'static str,
    pub step_arrive: &'static str,
}

/// Strings for a language.
pub const fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Te => &TE,
        Language::Ta => &TA,
        Language::Ml => &ML,
    }
}

static EN: Strings = Strings {
    welcome: "WELCOME",
    tagline: "Precision Indoor Navigation",
    initialize: "INITIALIZE ENGINE",
    helper_title: "MOBILITY ASSISTANCE",
    helper_question: "Do you require a mobility helper for your journey?",
    yes: "YES, REQUEST HELPER",
    no: "NO, I'M INDEPENDENT",
    finding_helper: "LOCATING NEAREST HELPER...",
    helper_found: "HELPER ASSIGNED: ARJUN V.",
    select_hub: "SELECT HUB",
    traveler: "TRAVELER PROFILE",
    destination: "FLIGHT GATE",
    commence: "COMMENCE MISSION",
    eta: "ETA",
    dist: "DISTANCE",
    navigate: "NAVIGATE",
    congestion: "Congestion Levels",
    high: "High Traffic",
    med: "Medium Flow",
    quiet: "Quiet Path",
    sos: "EMERGENCY EXIT (SOS)",
    cancel_sos: "CANCEL EVACUATION",
    step_start: "Start at ",
    step_head: "Head toward corridor junction.",
    step_security: "Security screening point.",
    step_use: "Use ",
    step_accessibility: " for accessibility.",
    step_arrive: "Arrive at: ",
};

static HI: Strings = Strings {
    welcome: "स्वागत है",
    tagline: "सटीक इनडोर नेविगेशन",
    initialize: "इंजन शुरू करें",
    helper_title: "गतिशीलता सहायता",
    helper_question: "क्या आपको अपनी यात्रा के लिए सहायक की आवश्यकता है?",
    yes: "हाँ, सहायक का अनुरोध करें",
    no: "नहीं, मैं स्वतंत्र हूँ",
    finding_helper: "निकटतम सहायक की तलाश...",
    helper_found: "सहायक नियुक्त: अर्जुन वी.",
    select_hub: "हब चुनें",
    traveler: "यात्री प्रोफाइल",
    destination: "फ्लाइट गेट",
    commence: "मिशन शुरू करें",
    eta: "समय",
    dist: "दूरी",
    navigate: "नेविगेट करें",
    congestion: "भीड़ का स्तर",
    high: "अधिक भीड़",
    med: "सामान्य",
    quiet: "शांत रास्ता",
    sos: "आपातकालीन निकास",
    cancel_sos: "निकासी रद्द करें",
    step_start: "शुरू करें: ",
    step_head: "कॉरिडोर जंक्शन की ओर बढ़ें।",
    step_security: "सुरक्षा जांच बिंदु।",
    step_use: "उपयोग करें: ",
    step_accessibility: " सुलभता के लिए।",
    step_arrive: "पहुंचें: ",
};

static TE: Strings = Strings {
    welcome: "స్వాగతం",
    tagline: "ఖచ్చితమైన ఇండోర్ నావిగేషన్",
    initialize: "ప్రారంభించు",
    helper_title: "మొబిలిటీ సహాయం",
    helper_question: "మీ ప్రయాణం కోసం మీకు మొబిలిటీ హెల్పర్ అవసరమా?",
    yes: "అవును, హెల్పర్‌ని కోరండి",
    no: "లేదు, నేను స్వతంత్రంగా వెళ్తాను",
    finding_helper: "సమీప హెల్పర్‌ను వెతుకుతోంది...",
    helper_found: "హెల్పర్ కేటాయించబడింది: అర్జున్ వి.",
    select_hub: "విమానాశ్రయాన్ని ఎంచుకోండి",
    traveler: "ప్రయాణీకుల ప్రొఫైల్",
    destination: "ఫ్లైట్ గేట్",
    commence: "ప్రయాణాన్ని ప్రారంభించండి",
    eta: "సమయం",
    dist: "దూరం",
    navigate: "నావిగేట్",
    congestion: "రద్దీ స్థాయిలు",
    high: "ఎక్కువ రద్దీ",
    med: "మధ్యస్థ రద్దీ",
    quiet: "ప్రశాంత మార్గం",
    sos: "అత్యవసర నిష్క్రమణ (SOS)",
    cancel_sos: "తరలింపును రద్దు చేయండి",
    step_start: "ప్రారంభం: ",
    step_head: "కారిడార్ జంక్షన్ వైపు వెళ్ళండి.",
    step_security: "సెక్యూరిటీ స్క్రీనింగ్ పాయింట్.",
    step_use: "ఉపయోగించండి: ",
    step_accessibility: " యాక్సెసిబిలిటీ కోసం.",
    step_arrive: "చేరుకోండి: ",
};

static TA: Strings = Strings {
    welcome: "வரவேற்பு",
    tagline: "துல்லியமான உட்புற வழிசெலுத்தல்",
    initialize: "தொடங்கவும்",
    helper_title: "இயக்க உதவி",
    helper_question: "உங்கள் பயணத்திற்கு இயக்க உதவியாளர் தேவையா?",
    yes: "ஆம், உதவியாளரைக் கோரவும்",
    no: "இல்லை, நான் சுதந்திரமானவன்",
    finding_helper: "அருகிலுள்ள உதவியாளரைக் கண்டறிகிறது...",
    helper_found: "உதவியாளர் நியமிக்கப்பட்டார்: அர்ஜுன் வி.",
    select_hub: "மையத்தைத் தேர்ந்தெடுக்கவும்",
    traveler: "பயணியின் சுயவிவரம்",
    destination: "விமான வாயில்",
    commence: "பயணத்தைத் தொடங்கு",
    eta: "நேரம்",
    dist: "தூரம்",
    navigate: "வழிசெலுத்து",
    congestion: "நெரிசல் நிலைகள்",
    high: "அதிக போக்குவரத்து",
    med: "மிதமான ஓட்டம்",
    quiet: "அமைதியான பாதை",
    sos: "அவசரகால வெளியேற்றம் (SOS)",
    cancel_sos: "வெளியேற்றத்தை ரத்து செய்",
    step_start: "தொடக்க இடம்: ",
    step_head: "தாழ்வார சந்திப்பை நோக்கிச் செல்லவும்.",
    step_security: "பாதுகாப்பு சோதனை மையம்.",
    step_use: "பயன்படுத்தவும்: ",
    step_accessibility: " எளிதாக செல்ல.",
    step_arrive: "சென்றடையும் இடம்: ",
};

static ML: Strings = Strings {
    welcome: "സ്വാഗതം",
    tagline: "കൃത്യമായ ഇൻഡോർ നാവിഗേഷൻ",
    initialize: "തുടങ്ങുക",
    helper_title: "മൊബിലിറ്റി സഹായം",
    helper_question: "നിങ്ങളുടെ യാത്രയ്ക്ക് ഒരു സഹായിയെ ആവശ്യമുണ്ടോ?",
    yes: "അതെ, സഹായിയെ ആവശ്യപ്പെടുക",
    no: "ഇല്ല, ഞാൻ ഒറ്റയ്ക്ക് പോകും",
    finding_helper: "സഹായിയെ കണ്ടെത്തുന്നു...",
    helper_found: "സഹായിയെ നിയോഗിച്ചു: അർജുൻ വി.",
    select_hub: "വിമാനത്താവളം തിരഞ്ഞെടുക്കുക",
    traveler: "യാത്രക്കാരന്റെ വിവരങ്ങൾ",
    destination: "ഫ്ലൈറ്റ് ഗേറ്റ്",
    commence: "യാത്ര ആരംഭിക്കുക",
    eta: "സമയം",
    dist: "ദൂരം",
    navigate: "നാവിഗേറ്റ് ചെയ്യുക",
    congestion: "തിരക്ക് നില",
    high: "കൂടുതൽ തിരക്ക്",
    med: "മിതമായ തിരക്ക്",
    quiet: "ശാന്തമായ വഴി",
    sos: "അടിയന്തര പുറത്തുകടക്കൽ (SOS)",
    cancel_sos: "ഒഴിപ്പിക്കൽ റദ്ദാക്കുക",
    step_start: "ആരംഭം: ",
    step_head: "കോറിഡോർ ജംഗ്ഷനിലേക്ക് നീങ്ങുക.",
    step_security: "സെക്യൂരിറ്റി പരിശോധനാ കേന്ദ്രം.",
    step_use: "ഉപയോഗിക്കുക: ",
    step_accessibility: " എളുപ്പത്തിലുള്ള യാത്രയ്ക്ക്.",
    step_arrive: "എത്തിച്ചേരുക: ",
};
