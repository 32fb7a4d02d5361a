//! Prompt and response-schema construction for restaurant detail lookups.

use crate::gemini::{Content, GenerateContentRequest, GenerationConfig, Schema};

pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Fields requested from the model, in prompt order.
pub const DETAIL_FIELDS: [&str; 13] = [
    "name", "cuisine", "cost", "rating", "whyGo", "nonVeg", "veg", "maps", "insta", "lat", "lng",
    "tags", "image",
];

pub fn build_prompt(restaurant_name: &str) -> String {
    format!(
        "Generate details for the London restaurant '{restaurant_name}'. \
         Provide only a valid JSON object with these exact keys: name, cuisine, cost, rating, \
         whyGo, nonVeg (array), veg (array), maps (URL), insta (URL), lat (number), lng (number), \
         tags (array), and image (a valid, public image URL). \
         If a detail isn't found, use an empty string or array."
    )
}

/// Shape the upstream model is constrained to.
pub fn response_schema() -> Schema {
    Schema::object([
        ("name", Schema::string()),
        ("cuisine", Schema::string()),
        ("cost", Schema::string()),
        ("rating", Schema::string()),
        ("whyGo", Schema::string()),
        ("nonVeg", Schema::array(Schema::string())),
        ("veg", Schema::array(Schema::string())),
        ("maps", Schema::string()),
        ("insta", Schema::string()),
        ("lat", Schema::number()),
        ("lng", Schema::number()),
        ("tags", Schema::array(Schema::string())),
        ("image", Schema::string()),
    ])
}

pub fn build_request(restaurant_name: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(build_prompt(restaurant_name))],
        generation_config: Some(GenerationConfig {
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            response_schema: response_schema(),
        }),
    }
}
