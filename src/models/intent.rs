use serde::{Deserialize, Serialize};

/// A category of user question the assistant recognizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    SweetPotato,
    Recipes,
    Cooking,
    Health,
}

impl Intent {
    /// Match order. When a message contains triggers from more than one
    /// category, the earliest entry here wins.
    pub const PRIORITY: [Intent; 5] = [
        Intent::Greeting,
        Intent::SweetPotato,
        Intent::Recipes,
        Intent::Cooking,
        Intent::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::SweetPotato => "sweet_potato",
            Intent::Recipes => "recipes",
            Intent::Cooking => "cooking",
            Intent::Health => "health",
        }
    }

    /// Lowercase substrings whose presence marks a message as this intent.
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Intent::Greeting => &["hello", "hi", "hey"],
            Intent::SweetPotato => &["sweet potato", "khoai ngọt"],
            Intent::Recipes => &["recipe", "cook", "dish"],
            Intent::Cooking => &["tip", "how to", "help"],
            Intent::Health => &["health", "nutrition", "benefit"],
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.triggers().iter().any(|t| normalized.contains(t))
    }

    /// Classify a message by plain substring containment. The input is
    /// lowercased and nothing else; punctuation and whitespace match as-is.
    pub fn classify(input: &str) -> Option<Intent> {
        let normalized = input.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|intent| intent.matches(&normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single_intent() {
        assert_eq!(Intent::classify("show me a recipe"), Some(Intent::Recipes));
        assert_eq!(
            Intent::classify("any nutrition facts?"),
            Some(Intent::Health)
        );
        assert_eq!(Intent::classify("got a tip for me?"), Some(Intent::Cooking));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Intent::classify("HELLO"), Intent::classify("hello"));
        assert_eq!(Intent::classify("Hello"), Some(Intent::Greeting));
        assert_eq!(
            Intent::classify("SWEET POTATO fries"),
            Some(Intent::SweetPotato)
        );
    }

    #[test]
    fn test_classify_priority_on_multi_intent_input() {
        // "hi" and "recipe" both appear; greeting is evaluated first.
        assert_eq!(
            Intent::classify("hi, got a recipe?"),
            Some(Intent::Greeting)
        );

        // "sweet potato" and "benefit" both appear; sweet_potato is earlier.
        assert_eq!(
            Intent::classify("what's the health benefit of sweet potato"),
            Some(Intent::SweetPotato)
        );
    }

    #[test]
    fn test_classify_no_match() {
        assert_eq!(Intent::classify("random gibberish xyz"), None);
        assert_eq!(Intent::classify(""), None);
        assert_eq!(Intent::classify("   "), None);
    }

    #[test]
    fn test_every_intent_has_triggers() {
        for intent in Intent::PRIORITY {
            assert!(!intent.triggers().is_empty(), "{} has no triggers", intent.as_str());
        }
    }
}
