use crate::domain::prompt::entities::PromptVariant;

const ROLE: &str = "You are a highly accurate food recognition and nutritional analysis assistant.
You identify meals from images and estimate calories and macros based on visual appearance.
If uncertain, provide the most reasonable likely estimate.";

const TASK: &str = "Identify the food shown in this image and provide a nutritional estimate.";

const STRUCTURED_GUIDANCE: &str = "Always answer with exactly these fields, one per line, in this order:
Food Name, Description, Likely Ingredients, Estimated Serving Size, Estimated Calories,
Estimated Macros (Protein, Carbs, Fat in grams) and Confidence.
Confidence must be one of low, medium or high and reflects how sure you are of the identification and portion.
Do not add any text before or after the fields.";

const STRUCTURED_FORMAT: &str = "Return the result in this exact format:

Food Name: <name>
Description: <short description>
Likely Ingredients: <comma separated list>
Estimated Serving Size: <grams or simple measure>
Estimated Calories: <number> kcal
Estimated Macros:
- Protein: <number> g
- Carbs: <number> g
- Fat: <number> g
Confidence: <low|medium|high>";

const LEGACY_GUIDANCE: &str = "Always respond concisely and clearly.";

const LEGACY_FORMAT: &str = "Tell me the name of the food, the estimated calories in kcal, \
and the estimated protein, carbs and fat in grams.";

/// Renders the (system, user) instruction pair for a variant. Both halves
/// restate the expected output so the answer shape stays stable.
pub(crate) fn render(variant: PromptVariant) -> (String, String) {
    let (guidance, format) = match variant {
        PromptVariant::Structured => (STRUCTURED_GUIDANCE, STRUCTURED_FORMAT),
        PromptVariant::Legacy => (LEGACY_GUIDANCE, LEGACY_FORMAT),
    };

    (
        format!("{ROLE}\n{guidance}"),
        format!("{TASK}\n\n{format}"),
    )
}
