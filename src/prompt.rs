// src/prompt.rs
//! The fixed persona sent with every request, and the optional preferences
//! block appended to the user's message.

use serde::{Deserialize, Serialize};

pub const MODEL: &str = "gpt-4o-mini";

pub const SYSTEM_PROMPT: &str = "\
You are a helpful meal prep planner assistant specializing in helping Indian students studying abroad.
You understand the challenges of balancing busy schedules with studies and part-time work, and you know how much Indian students miss home food while living in western countries.
You help create practical, time-efficient meal prep plans that incorporate Indian flavors and comfort foods.
You provide recipes that are budget-friendly, can be prepared in advance, and make students feel connected to home.
You're warm, understanding, and practical in your advice.

- Prioritize: 30–60 min meal prep, minimal cooking skills, low cleanup
- Use ingredients available in western grocery stores (Walmart/Costco/No Frills/Metro/Tesco)
- Give exact meal plan + grocery list + meal prep steps
- Avoid overly fancy recipes

Ask 2-3 clarification questions ONLY if needed.
Always output in this format:

1) Meal Plan (2–3 days or 5 days depending on user request)
2) Grocery List (grouped: Proteins, Carbs, Veggies, Pantry/Spices)
3) Meal Prep Plan (Step-by-step Sunday prep)
4) Storage Tips (fridge/freezer)
5) Estimated Cost Range (rough)";

/// Planning preferences the web client collects next to the chat box.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPreferences {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub budget_level: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub preferred_store: Option<String>,
}

impl MealPreferences {
    /// Renders the non-empty fields as a `User Preferences:` block, or an
    /// empty string when nothing is set.
    pub fn context_block(&self) -> String {
        let text = |label: &str, value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}: {}", label, v))
        };

        let lines: Vec<String> = [
            text("Country", &self.country),
            text("Diet", &self.diet),
            text("Budget", &self.budget_level),
            self.prep_time
                .filter(|m| *m > 0)
                .map(|m| format!("Prep Time: {} minutes", m)),
            text("Preferred Store", &self.preferred_store),
        ]
        .into_iter()
        .flatten()
        .collect();

        if lines.is_empty() {
            String::new()
        } else {
            format!("\n\nUser Preferences:\n{}", lines.join("\n"))
        }
    }
}

/// The user-role content: the validated message plus any preferences.
pub fn user_content(message: &str, preferences: Option<&MealPreferences>) -> String {
    match preferences {
        Some(p) => format!("{}{}", message, p.context_block()),
        None => message.to_string(),
    }
}
