//! The closed set of buildings a bundle can belong to

use std::fmt;

use serde::{Deserialize, Serialize};

/// Building a drawing set was submitted for
///
/// Menu indices are stable: they are what the operator types, and the
/// order of [`Building::ALL`] is the order of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Building {
    Other,
    DistrictOffice,
    PrimarySchool,
    IntermediateSchool,
    HighSchool,
    CommunityCenter,
    OutdoorClassroom,
    WaterTreatmentFacility,
    LandSurveys,
    BayviewSchool,
}

impl Building {
    pub const ALL: [Building; 10] = [
        Building::Other,
        Building::DistrictOffice,
        Building::PrimarySchool,
        Building::IntermediateSchool,
        Building::HighSchool,
        Building::CommunityCenter,
        Building::OutdoorClassroom,
        Building::WaterTreatmentFacility,
        Building::LandSurveys,
        Building::BayviewSchool,
    ];

    /// Human-readable label shown in the menu
    pub fn label(self) -> &'static str {
        match self {
            Building::Other => "Other",
            Building::DistrictOffice => "District Office",
            Building::PrimarySchool => "Primary School",
            Building::IntermediateSchool => "Intermediate School",
            Building::HighSchool => "High School",
            Building::CommunityCenter => "Community Center",
            Building::OutdoorClassroom => "Outdoor Classroom",
            Building::WaterTreatmentFacility => "Water Treatment Facility",
            Building::LandSurveys => "Land Surveys",
            Building::BayviewSchool => "Bayview School",
        }
    }

    /// Hyphenated label used for directory names and log records
    pub fn slug(self) -> String {
        self.label().replace(' ', "-")
    }

    /// Position of this building in the menu
    pub fn index(self) -> usize {
        Building::ALL
            .iter()
            .position(|b| *b == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: i64) -> Option<Building> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Building::ALL.get(i).copied())
    }

    /// Parse a raw menu answer such as `"2"` or `" 7 "`
    ///
    /// Returns `None` for anything that is not an index into the menu.
    pub fn from_menu_choice(answer: &str) -> Option<Building> {
        answer
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(Building::from_index)
    }

    /// Menu lines in the `"0.) Other"` form
    pub fn menu() -> Vec<String> {
        Building::ALL
            .iter()
            .enumerate()
            .map(|(i, b)| format!("{i}.) {}", b.label()))
            .collect()
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.slug())
    }
}

impl From<Building> for String {
    fn from(building: Building) -> Self {
        building.slug()
    }
}

impl TryFrom<String> for Building {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Building::ALL
            .into_iter()
            .find(|b| b.slug() == value || b.label() == value)
            .ok_or_else(|| format!("unknown building: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_index_maps_to_its_label() {
        let expected = [
            "Other",
            "District Office",
            "Primary School",
            "Intermediate School",
            "High School",
            "Community Center",
            "Outdoor Classroom",
            "Water Treatment Facility",
            "Land Surveys",
            "Bayview School",
        ];
        for (i, label) in expected.iter().enumerate() {
            let building = Building::from_index(i as i64).unwrap();
            assert_eq!(building.label(), *label);
            assert_eq!(building.index(), i);
        }
    }

    #[test]
    fn test_out_of_range_indices_rejected() {
        assert_eq!(Building::from_index(-1), None);
        assert_eq!(Building::from_index(10), None);
        assert_eq!(Building::from_menu_choice("-1"), None);
        assert_eq!(Building::from_menu_choice("10"), None);
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(
            Building::from_menu_choice(" 2 "),
            Some(Building::PrimarySchool)
        );
        assert_eq!(Building::from_menu_choice("two"), None);
        assert_eq!(Building::from_menu_choice(""), None);
    }

    #[test]
    fn test_slug_is_hyphenated() {
        assert_eq!(
            Building::WaterTreatmentFacility.to_string(),
            "Water-Treatment-Facility"
        );
        assert_eq!(Building::Other.slug(), "Other");
    }

    #[test]
    fn test_menu_lines() {
        let menu = Building::menu();
        assert_eq!(menu.len(), 10);
        assert_eq!(menu[0], "0.) Other");
        assert_eq!(menu[9], "9.) Bayview School");
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Building::HighSchool).unwrap();
        assert_eq!(json, "\"High-School\"");
        let back: Building = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Building::HighSchool);
    }
}
