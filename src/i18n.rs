//! Static localization table for prayer display names.

use serde::{Deserialize, Serialize};

use crate::types::Prayer;

/// Display language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Arabic,
    Kurdish,
}

/// Name triplet for one prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedName {
    pub english: &'static str,
    pub arabic: &'static str,
    pub kurdish: &'static str,
}

impl LocalizedName {
    pub fn in_language(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Arabic => self.arabic,
            Language::Kurdish => self.kurdish,
        }
    }
}

/// Returns the name triplet for a prayer.
pub fn names(prayer: Prayer) -> LocalizedName {
    match prayer {
        Prayer::Fajr => LocalizedName {
            english: "Fajr",
            arabic: "الفجر",
            kurdish: "بەیانی",
        },
        Prayer::Sunrise => LocalizedName {
            english: "Sunrise",
            arabic: "الشروق",
            kurdish: "خۆرهەڵات",
        },
        Prayer::Dhuhr => LocalizedName {
            english: "Dhuhr",
            arabic: "الظهر",
            kurdish: "نیوەڕۆ",
        },
        Prayer::Asr => LocalizedName {
            english: "Asr",
            arabic: "العصر",
            kurdish: "عەسر",
        },
        Prayer::Maghrib => LocalizedName {
            english: "Maghrib",
            arabic: "المغرب",
            kurdish: "ئاوابوون",
        },
        Prayer::Isha => LocalizedName {
            english: "Isha",
            arabic: "العشاء",
            kurdish: "عیشا",
        },
    }
}
