//! Bundle aggregate
//!
//! A bundle is the set of pages scanned for one project, building and cover
//! sheet date. The session owns exactly one [`BundleAggregate`] at a time and
//! turns it into a [`FinalizedBundle`] once the operator moves on.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::blueprint::hyphenate;
use super::{BlueprintDescriptor, Building, BundleDate};
use crate::error::Result;
use crate::operator::Operator;

/// Bundle currently accumulating pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleAggregate {
    id: Uuid,
    project_name: String,
    building: Building,
    date: BundleDate,
    contents: BTreeMap<u32, String>,
}

impl BundleAggregate {
    pub fn new(project_name: &str, building: Building, date: BundleDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_name: hyphenate(project_name),
            building,
            date,
            contents: BTreeMap::new(),
        }
    }

    /// Ask the operator for project name, building and cover sheet date
    ///
    /// Invalid building and date answers are re-prompted; they never surface
    /// as errors. Only a failed or cancelled prompt does.
    pub fn capture(operator: &mut dyn Operator) -> Result<Self> {
        let project_name =
            operator.text("Enter the name of the project that is the subject of these prints")?;
        let building = capture_building(operator)?;
        let date = capture_date(operator)?;
        Ok(Self::new(&project_name, building, date))
    }

    /// Add a page and return its page number
    pub fn append(&mut self, blueprint: &BlueprintDescriptor) -> u32 {
        let page = self.page_count() + 1;
        self.contents
            .insert(page, blueprint.drawing_title().to_string());
        page
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn building(&self) -> Building {
        self.building
    }

    pub fn date(&self) -> BundleDate {
        self.date
    }

    pub fn page_count(&self) -> u32 {
        u32::try_from(self.contents.len()).unwrap_or(u32::MAX)
    }

    pub fn contents(&self) -> &BTreeMap<u32, String> {
        &self.contents
    }

    /// Directory name for this bundle below the building directory
    pub fn directory_name(&self) -> String {
        format!("{}_{}", self.date, self.project_name)
    }

    pub fn to_log_record(&self) -> BundleRecord {
        BundleRecord {
            uuid: self.id,
            date: self.date,
            building: self.building,
            pages: self.page_count(),
            contents: self.contents.clone(),
        }
    }

    /// Close the bundle; no further pages can be added
    pub fn finalize(self) -> FinalizedBundle {
        FinalizedBundle(self)
    }
}

/// A bundle that has been superseded or reached the end of the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedBundle(BundleAggregate);

impl FinalizedBundle {
    pub fn bundle(&self) -> &BundleAggregate {
        &self.0
    }

    pub fn to_log_record(&self) -> BundleRecord {
        self.0.to_log_record()
    }
}

impl fmt::Display for FinalizedBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "Project named {} drawn up on {} specifying the {} with {} page(s). Registered UUID is {}",
            b.project_name,
            b.date,
            b.building,
            b.page_count(),
            b.id
        )
    }
}

/// One entry of the bundle log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRecord {
    #[serde(rename = "UUID")]
    pub uuid: Uuid,
    #[serde(rename = "Date")]
    pub date: BundleDate,
    #[serde(rename = "Building")]
    pub building: Building,
    #[serde(rename = "Pages")]
    pub pages: u32,
    #[serde(rename = "Contents")]
    pub contents: BTreeMap<u32, String>,
}

fn capture_building(operator: &mut dyn Operator) -> Result<Building> {
    let menu = Building::menu();
    loop {
        let answer = operator.choose(
            "Enter the associated building this bundle applies to",
            &menu,
        )?;
        if let Some(building) = Building::from_menu_choice(&answer) {
            return Ok(building);
        }
        operator.warn("Invalid building choice. Please re-enter a value from the list.");
    }
}

fn capture_date(operator: &mut dyn Operator) -> Result<BundleDate> {
    loop {
        let year = operator.text("Enter cover sheet year")?;
        let month = operator.text("Enter cover sheet month")?;
        let day = operator.text("Enter cover sheet day")?;
        match BundleDate::parse(&year, &month, &day) {
            Ok(date) => return Ok(date),
            Err(rejection) => operator.warn(&rejection.to_string()),
        }
    }
}
