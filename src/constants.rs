//! # Constants and type definitions for the ISS tracker
//!
//! This module centralizes the **upstream locations**, **service defaults**, and **common type
//! definitions** used throughout the crate.
//!
//! ## Overview
//!
//! - Location of the public ISS ephemeris (CCSDS OEM, XML flavour)
//! - Defaults for the HTTP query service and the upstream client
//! - Unit aliases for the quantities carried by a state vector
//! - The container type for an ordered set of state vectors

use std::time::Duration;

use crate::oem::StateVector;

// -------------------------------------------------------------------------------------------------
// Upstream feed
// -------------------------------------------------------------------------------------------------

/// Public ISS trajectory data published by NASA (J2000 frame, UTC epochs)
pub const ISS_URL: &str =
    "https://nasa-public-data.s3.amazonaws.com/iss-coords/current/ISS_OEM/ISS.OEM_J2K_EPH.xml";

/// Global timeout applied to a single upstream retrieval
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// -------------------------------------------------------------------------------------------------
// Query service
// -------------------------------------------------------------------------------------------------

/// Address the query API listens on when nothing else is configured
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Location of the key-value cache when the `redis-store` feature is enabled
pub const DEFAULT_REDIS_URL: &str = "redis://redis-db:6379";

// -------------------------------------------------------------------------------------------------
// Units and containers
// -------------------------------------------------------------------------------------------------

pub type Kilometer = f64;
pub type KilometerPerSecond = f64;

/// Ordered sequence of state vectors, in the order delivered by the feed
/// (chronological for the ISS OEM).
pub type EphemerisSet = Vec<StateVector>;
