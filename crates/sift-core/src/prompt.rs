//! Instruction template sent to the model.

use serde_json::{json, Value};

use crate::category::SensitiveCategory;

const TEMPLATE: &str = "
You are a sensitive data classifier. Your task is to analyze the input text and classify it into one of the following categories: {categories}.
Provide a confidence score (0-1) and a brief explanation for your classification.
Return the response in the following JSON format:

{format_instructions}

Input text: {input_text}
";

/// JSON schema describing the expected model output.
pub fn output_schema() -> Value {
    json!({
        "properties": {
            "category": {
                "description": "The sensitive data category the input text belongs to",
                "title": "Category",
                "type": "string"
            },
            "confidence": {
                "description": "Confidence score for the classification (0-1)",
                "title": "Confidence",
                "type": "number"
            },
            "explanation": {
                "description": "Explanation for the classification",
                "title": "Explanation",
                "type": "string"
            }
        },
        "required": ["category", "confidence", "explanation"]
    })
}

/// Instructions telling the model how to shape its answer.
pub fn format_instructions() -> String {
    format!(
        "The output should be a single JSON object that conforms to the JSON schema below. \
         Answer with the object itself, not with the schema.\n\
         \n\
         Here is the output schema:\n\
         ```\n\
         {}\n\
         ```",
        output_schema()
    )
}

/// Builds the full prompt for one input text.
///
/// The input is inserted last so that braces in user text are never
/// treated as placeholders.
pub fn build_prompt(input_text: &str) -> String {
    TEMPLATE
        .replace("{categories}", &SensitiveCategory::joined_labels())
        .replace("{format_instructions}", &format_instructions())
        .replace("{input_text}", input_text)
}
