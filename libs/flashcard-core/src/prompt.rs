//! Instruction and response schema for the word-info request.

use serde_json::{json, Value};

const PROMPT_TEMPLATE: &str = r#"Explain the Mandarin Chinese word "{word}".
Return the answer in JSON format according to the provided schema.

Mandatory rules:
- The field "word.meaning" must contain the main meanings of the word translated into "{language}".
- The field "word.pinyin" must contain the full pinyin of the word.
- The field "characters" must contain a list with **each character of the input word exactly as it appears**, in order.
- Each character listed in "characters" must have:
  - "character": the character itself from the input word
  - "meaning": the meaning of that character translated into "{language}" (without components or radicals).
- Never include radicals, inner parts, or graphical decompositions.
- All texts must be lowercase.

IMPORTANT NOTE:
The following examples are written in English only as a demonstration.
All generated meanings must be in "{language}".

Correct example (input word: "你好"):
{
  "word": { "meaning": "hello, hi", "pinyin": "nǐhǎo" },
  "characters": [
    { "character": "你", "meaning": "you" },
    { "character": "好", "meaning": "good, well" }
  ]
}

Correct example (input word: "她"):
{
  "word": { "meaning": "she, her", "pinyin": "tā" },
  "characters": [
    { "character": "她", "meaning": "she, her" }
  ]
}

Incorrect example (DO NOT do this, input word: "她"):
{
  "word": { "meaning": "she, her", "pinyin": "tā" },
  "characters": [
    { "character": "女", "meaning": "woman" },
    { "character": "也", "meaning": "also" }
  ]
}
"#;

/// Render the instruction for `word`, asking for glosses in `language`.
pub fn render_prompt(word: &str, language: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{word}", word)
        .replace("{language}", language)
}

/// Response schema in the structured-output dialect of the model API.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "word": {
                "type": "OBJECT",
                "properties": {
                    "meaning": { "type": "STRING" },
                    "pinyin": { "type": "STRING" }
                },
                "required": ["meaning", "pinyin"]
            },
            "characters": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "character": { "type": "STRING" },
                        "meaning": { "type": "STRING" }
                    },
                    "required": ["character", "meaning"]
                }
            }
        },
        "required": ["word", "characters"]
    })
}
