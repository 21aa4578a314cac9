use crate::models::ChatMessage;

pub const SYSTEM_INSTRUCTION: &str =
    "You generate elite, factual, executive-ready slide content. Return strict JSON only.";

/// Section order the model is asked to follow.
pub const SECTIONS: [&str; 12] = [
    "Problem",
    "Solution",
    "Market",
    "Product",
    "Traction",
    "GTM",
    "Business Model",
    "Roadmap",
    "Competition",
    "Team",
    "Financials",
    "Ask",
];

pub fn user_prompt(brief: &str) -> String {
    format!(
        r#"
Brief:
{brief}

Return a JSON object with:
{{
  "deck": {{
    "theme": one of ["black","white","league","beige","night","serif","simple","solarized"],
    "ratio": "16:9" or "4:3",
    "slides": [
      {{
        "title": string,
        "subtitle": string (optional),
        "bullets": [2-6 concise bullets without emojis],
        "imageQuery": string (keyword for stock photo),
        "notes": string (speaker notes, optional)
      }}
    ]
  }}
}}

Rules:
- Facts over fluff. If unknown, use general phrasing.
- Keep titles <= 8 words.
- Enterprise-credible tone.
- Structure: {sections}.
- 'imageQuery' should be short visual concepts (e.g., "enterprise cybersecurity dashboard", "cloud lock").
"#,
        brief = brief,
        sections = SECTIONS.join(", ")
    )
}

pub fn deck_messages(brief: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(user_prompt(brief)),
    ]
}
