use serde::{Deserialize, Serialize};

use crate::{constants::KilometerPerSecond, oem::StateVector};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpochsQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochSpeedResponse {
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    #[serde(rename = "Speed")]
    pub speed: KilometerPerSecond,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NowResponse {
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    pub state_vector: StateVector,
    #[serde(rename = "Speed")]
    pub speed: KilometerPerSecond,
}
