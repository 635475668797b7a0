use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One of the labeled lists requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Restaurants,
    Breakfast,
    Dinner,
    Workouts,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Restaurants,
        Section::Breakfast,
        Section::Dinner,
        Section::Workouts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Restaurants => "Restaurants",
            Section::Breakfast => "Breakfast",
            Section::Dinner => "Dinner",
            Section::Workouts => "Workouts",
        }
    }

    /// Number of items requested in the prompt, and kept on extraction.
    pub fn max_items(&self) -> usize {
        match self {
            Section::Restaurants => 6,
            Section::Breakfast => 6,
            Section::Dinner => 5,
            Section::Workouts => 6,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub restaurant_names: Vec<String>,
    pub breakfast_names: Vec<String>,
    pub dinner_names: Vec<String>,
    pub workout_names: Vec<String>,
    pub region: String,
}
