//! Multilingual keyword and template tables
//!
//! Process-wide static lookup data for the fallback paths: per-language
//! trigger words for the keyword classifier and per-language canned reply
//! templates for the response suggester. Read-only for the lifetime of the
//! process. English serves as the table for any language without a
//! dedicated entry.

use ticketflow_core::Language;

/// Trigger-word lists for one language
pub struct KeywordSet {
    /// Words that escalate priority to urgent
    pub urgent: &'static [&'static str],
    /// Words that indicate a technical problem
    pub technical: &'static [&'static str],
    /// Words that indicate a billing problem
    pub billing: &'static [&'static str],
}

const EN_KEYWORDS: KeywordSet = KeywordSet {
    urgent: &["urgent", "critical", "emergency", "asap", "immediately", "crisis"],
    technical: &[
        "bug",
        "error",
        "broken",
        "not working",
        "crash",
        "issue",
        "problem",
        "api",
        "integration",
    ],
    billing: &[
        "payment",
        "invoice",
        "billing",
        "charge",
        "refund",
        "subscription",
        "price",
    ],
};

const HI_KEYWORDS: KeywordSet = KeywordSet {
    urgent: &["अत्यावश्यक", "तत्काल", "आपातकालीन", "जरूरी", "संकट"],
    technical: &["बग", "त्रुटि", "टूटा", "काम नहीं कर रहा", "क्रैश", "समस्या", "एपीआई"],
    billing: &["भुगतान", "बिल", "चालान", "शुल्क", "रिफंड", "सदस्यता", "कीमत"],
};

const TA_KEYWORDS: KeywordSet = KeywordSet {
    urgent: &["அவசர", "முக்கியமான", "அவசரகால", "உடனடி"],
    technical: &["பிழை", "தவறு", "உடைந்த", "வேலை செய்யவில்லை", "சிக்கல்"],
    billing: &["பணம்", "பில்", "கட்டணம்", "திருப்பி", "சந்தா", "விலை"],
};

const TE_KEYWORDS: KeywordSet = KeywordSet {
    urgent: &["అత్యవసర", "క్లిష్టమైన", "అత్యవసరం", "వెంటనే"],
    technical: &["బగ్", "లోపం", "పనిచేయడంలేదు", "సమస్య", "క్రాష్"],
    billing: &["చెల్లింపు", "బిల్లు", "ఛార్జ్", "రిఫండ్", "చందా", "ధర"],
};

const KN_KEYWORDS: KeywordSet = KeywordSet {
    urgent: &["ಅತ್ಯವಸರ", "ಬಿಕ್ಕಟ್ಟು", "ತುರ್ತು", "ಕೂಡಲೇ"],
    technical: &["ದೋಷ", "ತಪ್ಪು", "ಕೆಲಸ ಮಾಡುತ್ತಿಲ್ಲ", "ಸಮಸ್ಯೆ"],
    billing: &["ಪಾವತಿ", "ಬಿಲ್", "ಶುಲ್ಕ", "ಮರುಪಾವತಿ", "ಚಂದಾ", "ಬೆಲೆ"],
};

/// The trigger-word lists for a language
pub fn keywords(language: Language) -> &'static KeywordSet {
    match language {
        Language::En => &EN_KEYWORDS,
        Language::Hi => &HI_KEYWORDS,
        Language::Ta => &TA_KEYWORDS,
        Language::Te => &TE_KEYWORDS,
        Language::Kn => &KN_KEYWORDS,
    }
}

/// Words that mark negative sentiment
///
/// Sentiment detection matches these English lists regardless of the
/// declared ticket language.
pub const NEGATIVE_WORDS: &[&str] = &[
    "not working",
    "broken",
    "error",
    "failed",
    "problem",
    "issue",
    "bad",
];

/// Words that mark positive sentiment
pub const POSITIVE_WORDS: &[&str] = &["thank", "good", "great", "excellent", "love", "appreciate"];

/// Canned reply templates for one language
pub struct ResponseTemplates {
    /// Variant for urgent and critical tickets
    pub urgent: &'static str,
    /// Variant for everything else
    pub standard: &'static str,
}

const EN_TEMPLATES: ResponseTemplates = ResponseTemplates {
    urgent: "Thank you for contacting us about this urgent matter. We understand the importance of this issue and our team is prioritizing your request. We will get back to you within 2 hours.",
    standard: "Thank you for contacting us. We have received your request and will review it shortly. Our team will get back to you within 24 hours.",
};

const HI_TEMPLATES: ResponseTemplates = ResponseTemplates {
    urgent: "इस अत्यावश्यक मामले के बारे में हमसे संपर्क करने के लिए धन्यवाद। हम इस मुद्दे के महत्व को समझते हैं और हमारी टीम आपके अनुरोध को प्राथमिकता दे रही है।",
    standard: "हमसे संपर्क करने के लिए धन्यवाद। हमें आपका अनुरोध प्राप्त हो गया है और हम इसकी जल्द ही समीक्षा करेंगे।",
};

const TA_TEMPLATES: ResponseTemplates = ResponseTemplates {
    urgent: "இந்த அவசர விஷயத்தைப் பற்றி எங்களைத் தொடர்பு கொண்டதற்கு நன்றி. உங்கள் கோரிக்கைக்கு முன்னுரிமை அளிக்கிறோம்.",
    standard: "எங்களைத் தொடர்பு கொண்டதற்கு நன்றி. உங்கள் கோரிக்கை பெறப்பட்டது, விரைவில் பரிசீலிக்கப்படும்.",
};

const TE_TEMPLATES: ResponseTemplates = ResponseTemplates {
    urgent: "ఈ అత్యవసర విషయం గురించి మమ్మల్ని సంప్రదించినందుకు ధన్యవాదాలు. మీ అభ్యర్థనకు ప్రాధాన్యత ఇస్తున్నాము.",
    standard: "మమ్మల్ని సంప్రదించినందుకు ధన్యవాదాలు. మీ అభ్యర్థన అందింది, త్వరలో పరిశీలించబడుతుంది.",
};

const KN_TEMPLATES: ResponseTemplates = ResponseTemplates {
    urgent: "ಈ ತುರ್ತು ವಿಷಯದ ಬಗ್ಗೆ ನಮ್ಮನ್ನು ಸಂಪರ್ಕಿಸಿದ್ದಕ್ಕಾಗಿ ಧನ್ಯವಾದಗಳು. ನಿಮ್ಮ ವಿನಂತಿಗೆ ಆದ್ಯತೆ ನೀಡುತ್ತಿದ್ದೇವೆ.",
    standard: "ನಮ್ಮನ್ನು ಸಂಪರ್ಕಿಸಿದ್ದಕ್ಕಾಗಿ ಧನ್ಯವಾದಗಳು. ನಿಮ್ಮ ವಿನಂತಿಯನ್ನು ಸ್ವೀಕರಿಸಲಾಗಿದೆ ಮತ್ತು ಶೀಘ್ರದಲ್ಲೇ ಪರಿಶೀಲಿಸಲಾಗುವುದು.",
};

/// The canned reply templates for a language
pub fn response_templates(language: Language) -> &'static ResponseTemplates {
    match language {
        Language::En => &EN_TEMPLATES,
        Language::Hi => &HI_TEMPLATES,
        Language::Ta => &TA_TEMPLATES,
        Language::Te => &TE_TEMPLATES,
        Language::Kn => &KN_TEMPLATES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_keywords_and_templates() {
        for language in Language::ALL {
            let set = keywords(language);
            assert!(!set.urgent.is_empty());
            assert!(!set.technical.is_empty());
            assert!(!set.billing.is_empty());

            let templates = response_templates(language);
            assert!(!templates.urgent.is_empty());
            assert!(!templates.standard.is_empty());
        }
    }
}
