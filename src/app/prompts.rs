use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// User-facing strings of the interactive session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prompts {
    language: Language,
}

impl Prompts {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn capacity(&self) -> &'static str {
        match self.language {
            Language::En => "Enter bin capacity W: ",
            Language::Ru => "Введите вместимость контейнера W: ",
        }
    }

    pub fn item_count(&self) -> &'static str {
        match self.language {
            Language::En => "Enter number of items: ",
            Language::Ru => "Введите количество предметов: ",
        }
    }

    pub fn weights_header(&self) -> &'static str {
        match self.language {
            Language::En => "Enter item weights:",
            Language::Ru => "Введите веса предметов:",
        }
    }

    /// Prompt for the weight of item `index` (1-based).
    pub fn item_weight(&self, index: usize) -> String {
        match self.language {
            Language::En => format!("Weight of item {}: ", index),
            Language::Ru => format!("Вес предмета {}: ", index),
        }
    }

    pub fn result(&self, bin_count: usize) -> String {
        match self.language {
            Language::En => format!("Bins used: {}", bin_count),
            Language::Ru => format!("Количество контейнеров: {}", bin_count),
        }
    }

    pub fn bin_line(&self, index: usize, load: u64, capacity: u64) -> String {
        match self.language {
            Language::En => format!("  bin {}: {}/{}", index, load, capacity),
            Language::Ru => format!("  контейнер {}: {}/{}", index, load, capacity),
        }
    }
}
