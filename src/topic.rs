//! Keyword-based topic classification for incoming analysis requests.
//! - Rules are checked in priority order; the first hit wins
//! - Matching is a case-insensitive substring test over the request text
//!   and, when given, the submitted code
//! - No hit falls back to `Topic::Performance`

use serde::Serialize;
use std::fmt;

/// Closed set of game-development topics a request can be bucketed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Performance,
    Gameplay,
    Architecture,
    Graphics,
    Audio,
    Tools,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Performance => "performance",
            Topic::Gameplay => "gameplay",
            Topic::Architecture => "architecture",
            Topic::Graphics => "graphics",
            Topic::Audio => "audio",
            Topic::Tools => "tools",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_TOPIC: Topic = Topic::Performance;

struct KeywordRule {
    keywords: &'static [&'static str],
    topic: Topic,
}

// Order matters: "optimize the collision code" is a performance request.
const RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["fps", "performance", "optimize", "speed", "memory", "lag"],
        topic: Topic::Performance,
    },
    KeywordRule {
        keywords: &["input", "player", "enemy", "combat", "ai", "npc"],
        topic: Topic::Gameplay,
    },
    KeywordRule {
        keywords: &["component", "system", "manager", "service", "state"],
        topic: Topic::Architecture,
    },
    KeywordRule {
        keywords: &["render", "draw", "sprite", "shader", "camera"],
        topic: Topic::Graphics,
    },
    KeywordRule {
        keywords: &["sound", "audio", "music", "play"],
        topic: Topic::Audio,
    },
    KeywordRule {
        keywords: &["debug", "test", "tool", "editor"],
        topic: Topic::Tools,
    },
];

/// Pick the topic for a request. Total: empty input yields the default.
pub fn classify(request: &str, code: Option<&str>) -> Topic {
    let request = request.to_lowercase();
    let code = code.map(str::to_lowercase);

    RULES
        .iter()
        .find(|rule| {
            rule.keywords.iter().any(|kw| {
                request.contains(kw) || code.as_deref().is_some_and(|c| c.contains(kw))
            })
        })
        .map_or(DEFAULT_TOPIC, |rule| rule.topic)
}
