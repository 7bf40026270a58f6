//! Prompt templates for the answer pipeline

use crate::catalog::IntentCatalog;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for intent classification.
    ///
    /// Enumerates every intent as `ID <id>: <description>` in catalog order,
    /// so the prompt is identical for identical catalogs.
    pub fn classification_system(intents: &IntentCatalog) -> String {
        let intents_list = intents
            .iter()
            .map(|intent| format!("ID {}: {}", intent.id, intent.description))
            .collect::<Vec<_>>()
            .join("\n");
        let allowed_ids = intents
            .ids()
            .map(|id| format!("\"{}\"", id))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"You are an AI assistant for a dog food company's customer service department.
Your task is to analyze customer questions and classify them into the most appropriate intent category.

Available intent categories:
{}

For each customer question, you must:
1. Select the most appropriate intent ID from the available categories
2. Return the corresponding intent description
3. Provide a confidence score (0.0 to 1.0)
4. Explain your reasoning for the classification

Be precise and consider the context of dog food, pet nutrition, orders, shipping, and customer support.
The intent_id must be one of the available IDs: [{}]

Respond with a JSON object containing exactly these four fields:
{{
    "intent_id": "selected_intent_id",
    "intent_description": "corresponding_description",
    "confidence": 0.95,
    "reasoning": "explanation_for_selection"
}}"#,
            intents_list, allowed_ids
        )
    }

    /// User prompt for intent classification
    pub fn classification_query(question: &str) -> String {
        format!("Classify this customer question: {}", question)
    }

    /// System prompt for answer customization
    pub fn customization_system() -> &'static str {
        r#"You are an expert at rewriting customer service responses in a personalized, friendly manner.

Your task is to:
1. Extract the customer's name and pet's name from the conversation (if mentioned)
2. Restyle the prepared answer to be more personal and engaging using those names

Instructions:
- Look for names mentioned in the conversation
- Use the customer's name when available to make it personal
- Include the pet's name when mentioned to create connection
- Maintain the core information from the original answer
- Make the tone warm and conversational
- Return ONLY the restyled answer, nothing else"#
    }

    /// User prompt for answer customization
    pub fn customization_request(conversation: &str, prepared_answer: &str) -> String {
        format!(
            r#"Conversation:
{}

Prepared answer to restyle:
{}

Please extract any customer and pet names from the conversation above, then restyle the prepared answer to be more personal and engaging using those names when available."#,
            conversation, prepared_answer
        )
    }
}
