use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

const INGREDIENT_SEPARATORS: [char; 5] = [',', ';', '\n', '|', '•'];

static LIST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*\d+.)\s]+").expect("valid list prefix regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(the|a|an)\s+").expect("valid article regex"));
static TRAILING_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(brand|product|item)$").expect("valid trailing noise regex")
});
static BARCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{8,14}\b").expect("valid barcode regex"));

/// Splits a provider ingredient string ("a, b, c") into trimmed entries.
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts ingredients from free text such as a pasted label.
///
/// The first separator found in the text wins. Entries of a single character
/// are dropped and list markers ("1.", "-", "•") are stripped.
pub fn extract_ingredients_from_text(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let raw: Vec<&str> = match INGREDIENT_SEPARATORS
        .iter()
        .find(|separator| text.contains(**separator))
    {
        Some(separator) => text.split(*separator).collect(),
        None => vec![text],
    };

    raw.into_iter()
        .map(str::trim)
        .filter(|ingredient| ingredient.chars().count() > 1)
        .map(|ingredient| LIST_PREFIX.replace(ingredient, "").to_string())
        .filter(|ingredient| !ingredient.is_empty())
        .collect()
}

/// 8 to 14 digits once every non-digit is removed.
pub fn validate_barcode(barcode: &str) -> bool {
    let digits = normalize_barcode(barcode);
    (8..=14).contains(&digits.len())
}

pub fn normalize_barcode(barcode: &str) -> String {
    barcode.chars().filter(char::is_ascii_digit).collect()
}

pub fn extract_barcode_from_text(text: &str) -> Option<String> {
    BARCODE.find(text).map(|m| m.as_str().to_string())
}

pub fn sanitize_food_name(name: &str) -> String {
    if name.trim().is_empty() {
        return "Unknown Food".to_string();
    }

    let name = WHITESPACE.replace_all(name.trim(), " ");
    let name = LEADING_ARTICLE.replace(&name, "");
    let name = TRAILING_NOISE.replace(&name, "");

    title_case(&name)
}

fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_alpha = false;

    for c in text.chars() {
        if previous_is_alpha {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_alpha = c.is_alphabetic();
    }

    result
}

/// Decodes base64 audio, accepting an optional `data:audio/...;base64,` prefix.
pub fn decode_base64_audio(audio_base64: &str) -> Result<Vec<u8>, CoreError> {
    let payload = if audio_base64.starts_with("data:audio") {
        audio_base64
            .split_once(',')
            .map(|(_, data)| data)
            .unwrap_or_default()
    } else {
        audio_base64
    };

    general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| CoreError::ValidationError(format!("Failed to decode base64 audio: {}", e)))
}

/// Sniffs the container format from the leading magic bytes.
pub fn detect_image_format(data: &[u8]) -> Option<&'static str> {
    match data {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        _ => None,
    }
}
