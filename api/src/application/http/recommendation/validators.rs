use nutriplan_core::domain::recommendation::value_objects::RecommendationInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendationForm {
    #[validate(required(message = "age is required"), length(min = 1, message = "age is required"))]
    #[schema(example = "30")]
    pub age: Option<String>,

    #[validate(
        required(message = "gender is required"),
        length(min = 1, message = "gender is required")
    )]
    #[schema(example = "male")]
    pub gender: Option<String>,

    /// Kilograms
    #[validate(
        required(message = "weight is required"),
        length(min = 1, message = "weight is required")
    )]
    #[schema(example = "70")]
    pub weight: Option<String>,

    /// Metres
    #[validate(
        required(message = "height is required"),
        length(min = 1, message = "height is required")
    )]
    #[schema(example = "1.75")]
    pub height: Option<String>,

    #[validate(
        required(message = "veg_or_nonveg is required"),
        length(min = 1, message = "veg_or_nonveg is required")
    )]
    #[schema(example = "veg")]
    pub veg_or_nonveg: Option<String>,

    pub disease: Option<String>,

    #[validate(
        required(message = "region is required"),
        length(min = 1, message = "region is required")
    )]
    #[schema(example = "Asia")]
    pub region: Option<String>,

    pub allergics: Option<String>,

    pub foodtype: Option<String>,
}

impl From<RecommendationForm> for RecommendationInput {
    fn from(form: RecommendationForm) -> Self {
        RecommendationInput {
            age: form.age,
            gender: form.gender,
            weight: form.weight,
            height: form.height,
            veg_or_nonveg: form.veg_or_nonveg,
            disease: form.disease,
            region: form.region,
            allergics: form.allergics,
            foodtype: form.foodtype,
        }
    }
}
