use crate::domain::recommendation::{entities::Section, value_objects::Profile};

const ROLE: &str = "You are a dietician and fitness coach. Based on the following data, provide strictly formatted recommendations:";

/// Builds the instruction sent to the text-generation model.
///
/// The output always ends with the fixed `Format:` block listing every
/// [`Section`] with `N. ...` placeholders, one per item the extractor keeps.
pub fn build_prompt(profile: &Profile) -> String {
    let mut prompt = format!(
        "{ROLE}
Age: {age}
Gender: {gender}
Weight: {weight}kg
Height: {height}m
Diet: {diet}
Disease: {disease}
Region: {region}
Allergics: {allergics}
Foodtype: {food_type}
",
        age = profile.age,
        gender = profile.gender,
        weight = profile.weight,
        height = profile.height,
        diet = profile.diet,
        disease = profile.disease.as_deref().unwrap_or("None"),
        region = profile.region,
        allergics = profile.allergics.as_deref().unwrap_or("None"),
        food_type = profile.food_type.as_deref().unwrap_or("Any"),
    );

    prompt.push_str("\nFormat:\n");

    let slots: Vec<String> = Section::ALL
        .iter()
        .map(|section| {
            let items: Vec<String> = (1..=section.max_items())
                .map(|n| format!("{n}. ..."))
                .collect();
            format!("{}:\n{}", section.label(), items.join("\n"))
        })
        .collect();
    prompt.push_str(&slots.join("\n"));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            age: "30".to_string(),
            gender: "male".to_string(),
            weight: "70".to_string(),
            height: "1.75".to_string(),
            diet: "veg".to_string(),
            disease: None,
            region: "Asia".to_string(),
            allergics: None,
            food_type: None,
        }
    }

    #[test]
    fn test_prompt_contains_every_value() {
        let profile = Profile {
            disease: Some("hypertension".to_string()),
            allergics: Some("peanuts".to_string()),
            food_type: Some("street food".to_string()),
            ..profile()
        };
        let prompt = build_prompt(&profile);

        for value in [
            "Age: 30",
            "Gender: male",
            "Weight: 70kg",
            "Height: 1.75m",
            "Diet: veg",
            "Disease: hypertension",
            "Region: Asia",
            "Allergics: peanuts",
            "Foodtype: street food",
        ] {
            assert!(prompt.contains(value), "missing {value:?} in {prompt}");
        }
    }

    #[test]
    fn test_prompt_defaults_for_empty_optionals() {
        let prompt = build_prompt(&profile());
        assert!(prompt.contains("Disease: None\n"));
        assert!(prompt.contains("Allergics: None\n"));
        assert!(prompt.contains("Foodtype: Any\n"));
    }

    #[test]
    fn test_prompt_has_each_section_header_once() {
        let prompt = build_prompt(&profile());
        for section in Section::ALL {
            let header = format!("{}:\n", section.label());
            assert_eq!(prompt.matches(&header).count(), 1, "{header:?}");
        }
    }

    #[test]
    fn test_prompt_format_block() {
        let prompt = build_prompt(&profile());
        let expected = "\n\nFormat:\n\
            Restaurants:\n1. ...\n2. ...\n3. ...\n4. ...\n5. ...\n6. ...\n\
            Breakfast:\n1. ...\n2. ...\n3. ...\n4. ...\n5. ...\n6. ...\n\
            Dinner:\n1. ...\n2. ...\n3. ...\n4. ...\n5. ...\n\
            Workouts:\n1. ...\n2. ...\n3. ...\n4. ...\n5. ...\n6. ...";
        assert!(prompt.ends_with(expected), "{prompt}");
        assert!(prompt.starts_with(ROLE));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&profile()), build_prompt(&profile()));
    }
}
