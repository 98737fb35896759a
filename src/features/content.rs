//! Per-stage presentation data
//!
//! The table has one field per [`Stage`], so the built-in table cannot miss
//! an entry and a user-supplied table that leaves one out fails to parse.

use serde::{Deserialize, Serialize};

use super::interaction::Stage;

/// Background theme of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundTheme {
    Pink,
    Orange,
    Blue,
    Purple,
    Yellow,
}

/// What the card shows for one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageContent {
    pub image_url: String,
    pub message: String,
    pub theme: BackgroundTheme,
}

impl StageContent {
    fn new(image_url: &str, message: &str, theme: BackgroundTheme) -> Self {
        Self {
            image_url: image_url.to_string(),
            message: message.to_string(),
            theme,
        }
    }
}

/// Stage to content mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTable {
    pub initial: StageContent,
    pub begging: StageContent,
    pub crying: StageContent,
    pub smug: StageContent,
    pub happy: StageContent,
}

impl StageTable {
    pub fn get(&self, stage: Stage) -> &StageContent {
        match stage {
            Stage::Initial => &self.initial,
            Stage::Begging => &self.begging,
            Stage::Crying => &self.crying,
            Stage::Smug => &self.smug,
            Stage::Happy => &self.happy,
        }
    }
}

impl Default for StageTable {
    fn default() -> Self {
        Self {
            initial: StageContent::new(
                "https://images.unsplash.com/photo-1517849845537-4d257902454a?w=600&h=600&fit=crop",
                "艺萍姐姐可以请我喝奶茶吗？",
                BackgroundTheme::Pink,
            ),
            begging: StageContent::new(
                "https://images.unsplash.com/photo-1518020382113-a7e8fc38eac9?w=600&h=600&fit=crop",
                "求求你了嘛~",
                BackgroundTheme::Orange,
            ),
            crying: StageContent::new(
                "https://images.unsplash.com/photo-1504595403659-9088ce801e29?w=600&h=600&fit=crop",
                "我什么都会做的...",
                BackgroundTheme::Blue,
            ),
            smug: StageContent::new(
                "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?w=600&h=600&fit=crop",
                "那可由不得你，哼！",
                BackgroundTheme::Purple,
            ),
            happy: StageContent::new(
                "https://images.unsplash.com/photo-1534361960057-19889db9621e?w=600&h=600&fit=crop",
                "谢谢姐姐！最喜欢姐姐了！",
                BackgroundTheme::Yellow,
            ),
        }
    }
}

/// Button and footer text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub affirmative: String,
    pub celebration: String,
    pub negative: String,
    pub reset: String,
    pub footer: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            affirmative: "可以".to_string(),
            celebration: "太棒啦！✨".to_string(),
            negative: "不可以".to_string(),
            reset: "还想喝？".to_string(),
            footer: "MADE WITH ❤️ FOR YIPING SISTER".to_string(),
        }
    }
}
