use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Intent;

use super::ResponderEngine;

/// First bot message of every session.
pub const WELCOME_MESSAGE: &str = "👋 Welcome to Sweet Potatou! I'm Chi Lan's cooking assistant. Ask me anything about sweet potato recipes!";

/// Returned when no trigger is found in the message. Never randomized.
pub const FALLBACK_REPLY: &str = "That's interesting! Tell me more about what you'd like to cook with sweet potatoes, or ask me about Chi Lan's recipes! 🍠✨";

/// Canned replies per intent, fixed at compile time. One is picked at random
/// for each matching message.
pub fn replies(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => &[
            "Hi there! I'm Chi Lan's cooking assistant. How can I help you today? 🍠",
            "Hello! Want to know about sweet potato recipes or cooking tips? ✨",
            "Hey! I'm here to help with your cooking questions! 👩‍🍳",
        ],
        Intent::SweetPotato => &[
            "Sweet potatoes are amazing! They're rich in beta-carotene, fiber, and natural sweetness. What would you like to cook?",
            "I love sweet potatoes too! Try roasting them with a drizzle of honey and cinnamon.",
            "Sweet potatoes are so versatile! Perfect for both sweet and savory dishes.",
        ],
        Intent::Recipes => &[
            "Chi Lan has some fantastic recipes! Try the Roasted Sweet Potato with Coconut - it's crispy outside and creamy inside!",
            "The Sweet Potato Coconut Che is a traditional Vietnamese dessert that's absolutely delicious!",
            "For a quick snack, the Crispy Sweet Potato Fries are perfect - golden and seasoned to perfection!",
        ],
        Intent::Cooking => &[
            "Here's a pro tip from Chi Lan: Always choose firm sweet potatoes for the best texture!",
            "Don't overcook sweet potatoes in desserts - they should hold their shape!",
            "For extra crispy fries, soak the sweet potato strips in cold water before cooking!",
        ],
        Intent::Health => &[
            "Sweet potatoes are nutritional powerhouses! They're packed with Vitamin A, fiber, and potassium.",
            "They're great for your immune system and provide natural energy throughout the day!",
            "Sweet potatoes contain antioxidants that help protect your cells and support overall health.",
        ],
    }
}

/// Substring classification plus a uniform random pick from the matched
/// intent's reply list.
pub struct ScriptedResponder {
    rng: Mutex<StdRng>,
}

impl ScriptedResponder {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed seed, for reproducible reply sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for ScriptedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponderEngine for ScriptedResponder {
    fn respond(&self, input: &str) -> String {
        match Intent::classify(input) {
            Some(intent) => {
                let options = replies(intent);
                let idx = self.rng.lock().unwrap().gen_range(0..options.len());
                options[idx].to_string()
            }
            None => FALLBACK_REPLY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_is_member_of_matched_intent_list() {
        let responder = ScriptedResponder::with_seed(1);
        for _ in 0..20 {
            let reply = responder.respond("hi there");
            assert!(
                replies(Intent::Greeting).contains(&reply.as_str()),
                "unexpected greeting reply: {reply}"
            );
        }
    }

    #[test]
    fn test_priority_order_picks_earlier_intent() {
        let responder = ScriptedResponder::with_seed(2);
        // Contains both "sweet potato" and "benefit"; sweet_potato wins.
        let reply = responder.respond("what's the health benefit of sweet potato");
        assert!(replies(Intent::SweetPotato).contains(&reply.as_str()));
    }

    #[test]
    fn test_fallback_is_fixed() {
        let responder = ScriptedResponder::with_seed(3);
        assert_eq!(responder.respond("random gibberish xyz"), FALLBACK_REPLY);
        assert_eq!(responder.respond("random gibberish xyz"), FALLBACK_REPLY);
        assert_eq!(responder.respond(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_case_insensitive_classification() {
        let a = ScriptedResponder::with_seed(4);
        let b = ScriptedResponder::with_seed(4);
        assert_eq!(a.respond("HELLO"), b.respond("hello"));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = ScriptedResponder::with_seed(42);
        let b = ScriptedResponder::with_seed(42);
        for input in ["hi", "recipe please", "any tip?", "nutrition?", "hello again"] {
            assert_eq!(a.respond(input), b.respond(input));
        }
    }

    #[test]
    fn test_every_intent_has_replies() {
        for intent in Intent::PRIORITY {
            assert!(!replies(intent).is_empty(), "{} has no replies", intent.as_str());
        }
    }
}
