/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! the flight data model (trackpoints, tracks, flights and their identities) together with the
//! algorithms that operate on it: geo restriction tests, track post processing and the grouping
//! of batch imported trackpoints into flights

pub mod errors;

pub mod trackpoint;
pub mod track;
pub mod identity;
pub mod flight;
pub mod refdata;

pub mod restrictor;
pub mod intersection;
pub mod process;

pub mod grouping;
pub mod foia;

pub use trackpoint::Trackpoint;
pub use track::Track;
pub use identity::{Identity,FlightNumber,CarrierCode,Schedule,parse_callsign};
pub use flight::Flight;
pub use restrictor::GeoRestrictor;
pub use intersection::{TrackIntersection,Rejection,RestrictionResult,evaluate};
