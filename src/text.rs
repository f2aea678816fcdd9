//! UI text in the three supported languages.
//!
//! Indonesian is the default, matching the audience the avatar app was
//! built for; English and Turkish are selectable at runtime.

use serde::{Deserialize, Serialize};

use crate::classifier::PoseLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Id,
    En,
    Tr,
}

pub const LANGUAGES: [Language; 3] = [Language::Id, Language::En, Language::Tr];

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "id" => Some(Language::Id),
            "en" => Some(Language::En),
            "tr" => Some(Language::Tr),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Id => "id",
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Id => "Bahasa Indonesia",
            Language::En => "English",
            Language::Tr => "Turkce",
        }
    }

    /// The next language in the cycle order, for the hotkey toggle.
    pub fn next(&self) -> Language {
        match self {
            Language::Id => Language::En,
            Language::En => Language::Tr,
            Language::Tr => Language::Id,
        }
    }
}

/// Localized display name for a pose label.
pub fn pose_name(label: PoseLabel, language: Language) -> &'static str {
    match language {
        Language::Id => match label {
            PoseLabel::RaisingHand => "Mengangkat Tangan",
            PoseLabel::Shocking => "Terkejut (Mulut Terbuka)",
            PoseLabel::Thinking => "Berpikir (Tangan di Wajah)",
            PoseLabel::Default => "Posisi Normal",
        },
        Language::En => match label {
            PoseLabel::RaisingHand => "Raising Hand",
            PoseLabel::Shocking => "Shocking (Open Mouth)",
            PoseLabel::Thinking => "Thinking (Hand on Face)",
            PoseLabel::Default => "Default Pose",
        },
        Language::Tr => match label {
            PoseLabel::RaisingHand => "Isaret Parmagi Yukarida",
            PoseLabel::Shocking => "Agiz Acik (Saskinlik)",
            PoseLabel::Thinking => "El Yuzde (Dusunme)",
            PoseLabel::Default => "Normal Durus",
        },
    }
}

/// Labels used by the debug panel.
pub struct DebugText {
    pub hands: &'static str,
    pub face: &'static str,
    pub mouth: &'static str,
    pub hand_height: &'static str,
    pub pose: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

pub fn debug_text(language: Language) -> DebugText {
    match language {
        Language::Id => DebugText {
            hands: "Tangan",
            face: "Wajah",
            mouth: "Mulut",
            hand_height: "Tinggi Tangan",
            pose: "Pose",
            yes: "YA",
            no: "TIDAK",
        },
        Language::En => DebugText {
            hands: "Hands",
            face: "Face",
            mouth: "Mouth",
            hand_height: "Hand Height",
            pose: "Pose",
            yes: "YES",
            no: "NO",
        },
        Language::Tr => DebugText {
            hands: "Eller",
            face: "Yuz",
            mouth: "Agiz",
            hand_height: "El Yuksekligi",
            pose: "Poz",
            yes: "EVET",
            no: "HAYIR",
        },
    }
}
