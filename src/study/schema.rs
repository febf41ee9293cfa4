// Response schemas handed to the API
//
// Gemini's OpenAPI-subset schema dialect: upper-case type names, `required`
// lists, descriptions steering the model.

use serde_json::{json, Value};

pub fn study_guide_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING" },
            "overview": { "type": "STRING" },
            "relatedTopics": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Predictive Pathway: Suggest 2 related topics the student should study next."
            },
            "sections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "foundational": { "type": "STRING" },
                        "clinical": { "type": "STRING" },
                        "mermaidChart": {
                            "type": "STRING",
                            "description": "Mermaid.js graph syntax (e.g. 'graph TD; A[\"Start\"]-->B[\"End\"]'). Use double quotes for node text."
                        },
                        "keyPoints": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        },
                        "mnemonics": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "List of memory aids or acronyms"
                        },
                        "matchingPairs": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "term": { "type": "STRING" },
                                    "definition": { "type": "STRING" }
                                },
                                "required": ["term", "definition"]
                            }
                        }
                    },
                    "required": [
                        "title",
                        "foundational",
                        "clinical",
                        "mermaidChart",
                        "keyPoints",
                        "mnemonics",
                        "matchingPairs"
                    ]
                }
            }
        },
        "required": ["topic", "overview", "sections", "relatedTopics"]
    })
}

pub fn quiz_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "List of 4 or 5 potential answers"
                        },
                        "correctAnswer": {
                            "type": "INTEGER",
                            "description": "Zero-based index of the correct option"
                        },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctAnswer", "explanation"]
                }
            }
        },
        "required": ["questions"]
    })
}
