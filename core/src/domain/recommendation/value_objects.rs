use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_REGION: &str = "Unknown Region";

/// Raw form submission. Every value is free text and nothing is coerced.
#[derive(Debug, Clone, Default)]
pub struct RecommendationInput {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub veg_or_nonveg: Option<String>,
    pub disease: Option<String>,
    pub region: Option<String>,
    pub allergics: Option<String>,
    pub foodtype: Option<String>,
}

/// Form input that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub diet: String,
    pub disease: Option<String>,
    pub region: String,
    pub allergics: Option<String>,
    pub food_type: Option<String>,
}

/// The submitted value, untouched, unless it is absent or blank.
fn filled(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

impl RecommendationInput {
    /// Form field names that must be present and non-blank.
    pub const REQUIRED_FIELDS: [&'static str; 6] =
        ["age", "gender", "weight", "height", "veg_or_nonveg", "region"];

    fn required(&self) -> [(&'static str, Option<String>); 6] {
        [
            ("age", filled(&self.age)),
            ("gender", filled(&self.gender)),
            ("weight", filled(&self.weight)),
            ("height", filled(&self.height)),
            ("veg_or_nonveg", filled(&self.veg_or_nonveg)),
            ("region", filled(&self.region)),
        ]
    }

    pub fn validate(&self) -> Result<Profile, CoreError> {
        let missing: Vec<String> = self
            .required()
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::MissingFields(missing));
        }

        let [age, gender, weight, height, diet, region] =
            self.required().map(|(_, value)| value.unwrap_or_default());

        Ok(Profile {
            age,
            gender,
            weight,
            height,
            diet,
            disease: filled(&self.disease),
            region: if region.is_empty() {
                DEFAULT_REGION.to_string()
            } else {
                region
            },
            allergics: filled(&self.allergics),
            food_type: filled(&self.foodtype),
        })
    }
}
