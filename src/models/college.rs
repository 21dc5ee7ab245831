// src/models/college.rs

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// Represents the 'colleges' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub location: String,
    /// City cluster used for filtering, e.g. "Mumbai" or "Pune".
    pub region: String,
    /// Government, Private or Autonomous.
    /// `type` is a reserved keyword in Rust.
    #[serde(rename = "type")]
    pub college_type: String,
    pub nirf_rank: Option<i64>,
    pub established: Option<i64>,
    pub website: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub facilities: Json<Vec<String>>,
    pub specializations: Json<Vec<String>>,
    pub mhtcet_cutoffs: Json<Cutoffs>,
    pub fees: Json<Fees>,
    pub placement: Json<Placement>,
    pub admission_process: Json<Vec<String>>,
    pub documents: Json<Vec<String>>,
    pub important_dates: Json<Vec<String>>,
    pub image: Option<String>,
}

/// MHT-CET closing percentiles per branch. Zero means the branch is not offered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cutoffs {
    pub computer: f64,
    pub mechanical: f64,
    pub electrical: f64,
    pub civil: f64,
    pub it: f64,
    pub ai: f64,
    pub data_science: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fees {
    pub government: Option<String>,
    pub private: Option<String>,
    pub nri: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Placement {
    pub average_package: Option<String>,
    pub highest_package: Option<String>,
    pub placement_percentage: Option<String>,
    pub top_recruiters: Vec<String>,
}

/// Query parameters for listing colleges.
#[derive(Debug, Deserialize)]
pub struct CollegeListParams {
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub college_type: Option<String>,
    /// Matched against name, location and specializations.
    pub search: Option<String>,
}
