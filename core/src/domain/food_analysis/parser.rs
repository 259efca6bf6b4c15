use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    food_analysis::entities::{AnalysisKind, Confidence, Macros, NutritionEstimate},
    prompt::entities::PromptVariant,
};

// A value like "95", "12.5" or a range like "300-400" / "300 to 400".
static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)(?:\s*(?:-|–|to)\s*(\d+(?:\.\d+)?))?")
        .expect("quantity pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    FoodName,
    Description,
    Ingredients,
    ServingSize,
    Calories,
    Protein,
    Carbs,
    Fat,
    Confidence,
}

impl Field {
    fn from_label(label: &str) -> Option<Self> {
        let field = match label {
            "food name" | "food" | "name" | "dish" | "dish name" => Field::FoodName,
            "description" => Field::Description,
            "likely ingredients" | "ingredients" => Field::Ingredients,
            "estimated serving size" | "serving size" | "serving" | "portion" => {
                Field::ServingSize
            }
            "estimated calories" | "calories" | "calorie estimate" => Field::Calories,
            "protein" => Field::Protein,
            "carbs" | "carbohydrates" => Field::Carbs,
            "fat" | "fats" => Field::Fat,
            "confidence" | "confidence level" => Field::Confidence,
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, Default)]
struct Fields {
    food_name: Option<String>,
    description: Option<String>,
    ingredients: Option<Vec<String>>,
    serving_size: Option<String>,
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
    confidence: Option<Confidence>,
}

/// Reads the field-per-line layout the structured prompt asks for.
///
/// Food name, calories and the three macros are required. Confidence is
/// required too when the answer came from the structured prompt, since only
/// that prompt asks for it. Anything short of that is reported as
/// [`AnalysisKind::Unparsed`]. Labels are matched case insensitively,
/// markdown emphasis and bullets are ignored, and the first occurrence of a
/// field wins.
pub fn parse_estimate(raw: &str, variant: PromptVariant) -> AnalysisKind {
    let mut fields = Fields::default();

    for line in raw.lines() {
        let Some((label, value)) = split_line(line) else {
            continue;
        };
        let Some(field) = Field::from_label(&label) else {
            continue;
        };

        match field {
            Field::FoodName => set_once(&mut fields.food_name, Some(value)),
            Field::Description => set_once(&mut fields.description, Some(value)),
            Field::Ingredients => set_once(&mut fields.ingredients, Some(split_list(&value))),
            Field::ServingSize => set_once(&mut fields.serving_size, Some(value)),
            Field::Calories => set_once(&mut fields.calories, parse_quantity(&value)),
            Field::Protein => set_once(&mut fields.protein, parse_quantity(&value)),
            Field::Carbs => set_once(&mut fields.carbs, parse_quantity(&value)),
            Field::Fat => set_once(&mut fields.fat, parse_quantity(&value)),
            Field::Confidence => set_once(&mut fields.confidence, parse_confidence(&value)),
        }
    }

    if variant == PromptVariant::Structured && fields.confidence.is_none() {
        return AnalysisKind::Unparsed;
    }

    match fields {
        Fields {
            food_name: Some(food_name),
            calories: Some(calories_kcal),
            protein: Some(protein_g),
            carbs: Some(carbs_g),
            fat: Some(fat_g),
            description,
            ingredients,
            serving_size,
            confidence,
        } => AnalysisKind::Structured(NutritionEstimate {
            food_name,
            description,
            ingredients: ingredients.unwrap_or_default(),
            serving_size,
            calories_kcal,
            macros: Macros {
                protein_g,
                carbs_g,
                fat_g,
            },
            confidence,
        }),
        _ => AnalysisKind::Unparsed,
    }
}

fn set_once<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

/// Splits `**Label:** value` into a lowercase label and a non-empty value.
fn split_line(line: &str) -> Option<(String, String)> {
    let cleaned = line.replace("**", "").replace("__", "");
    let (label, value) = cleaned.split_once(':')?;

    let label = label
        .trim()
        .trim_start_matches(['-', '*', '•', '#', ' '])
        .trim()
        .to_ascii_lowercase();
    let value = value.trim();

    if label.is_empty() || value.is_empty() {
        return None;
    }

    Some((label, value.to_string()))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// First number in the value; the midpoint when it is a range.
fn parse_quantity(value: &str) -> Option<f64> {
    let value = value.replace(',', "");
    let captures = QUANTITY.captures(&value)?;

    let low: f64 = captures.get(1)?.as_str().parse().ok()?;
    match captures.get(2).and_then(|m| m.as_str().parse::<f64>().ok()) {
        Some(high) => Some((low + high) / 2.0),
        None => Some(low),
    }
}

fn parse_confidence(value: &str) -> Option<Confidence> {
    let word = value
        .split_whitespace()
        .next()?
        .trim_matches(|c: char| !c.is_alphabetic())
        .to_ascii_lowercase();

    match word.as_str() {
        "high" => Some(Confidence::High),
        "medium" | "moderate" => Some(Confidence::Medium),
        "low" => Some(Confidence::Low),
        _ => None,
    }
}
