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

//! read-only reference data collaborators: barometric pressure archives, waypoint tables and
//! airframe registries. All of them are explicitly constructed and passed to where they are used

use std::{collections::HashMap, fs, path::Path};
use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};
use tracing::{debug,warn};

use fdb_common::{datetime::TimeRange, geo::GeoPoint};
use crate::{flight::Flight, errors::{FdbTrackError,Result}};

/// ISA sea level pressure
pub const STANDARD_PRESSURE_INHG: f64 = 29.92;

/// altimeter rule of thumb: one inch of mercury corresponds to 1000ft
pub const FEET_PER_INHG: f64 = 1000.0;

/* #region barometric data ******************************************************************************/

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct PressureReading {
    pub station: String,
    pub timestamp: DateTime<Utc>,
    pub altimeter_inhg: f64,
}

impl PressureReading {
    pub fn new (station: impl ToString, timestamp: DateTime<Utc>, altimeter_inhg: f64)->Self {
        PressureReading { station: station.to_string(), timestamp, altimeter_inhg }
    }

    /// the correction to apply to a barometric altitude (in feet)
    pub fn altitude_correction_ft (&self)->f64 {
        (self.altimeter_inhg - STANDARD_PRESSURE_INHG) * FEET_PER_INHG
    }
}

/// where we get pressure readings from (e.g. a METAR archive)
pub trait BarometricSource {
    fn lookup (&self, station: &str, range: &TimeRange)->Result<Vec<PressureReading>>;
}

/// time ordered pressure readings of one station
#[derive(Debug,Clone,Default)]
pub struct PressureArchive {
    station: String,
    readings: Vec<PressureReading>,
}

impl PressureArchive {
    pub fn from_readings (station: impl ToString, mut readings: Vec<PressureReading>)->Self {
        readings.sort_by_key( |r| r.timestamp);
        PressureArchive { station: station.to_string(), readings }
    }

    pub fn load (source: &dyn BarometricSource, station: &str, range: &TimeRange)->Result<Self> {
        let readings = source.lookup( station, range)?;
        debug!("loaded {} pressure readings for {} in {}", readings.len(), station, range);
        Ok( PressureArchive::from_readings( station, readings))
    }

    pub fn station (&self)->&str { self.station.as_str() }
    pub fn len (&self)->usize { self.readings.len() }
    pub fn is_empty (&self)->bool { self.readings.is_empty() }

    /// the last reading that is not later than `t`
    pub fn nearest_prior (&self, t: &DateTime<Utc>)->Option<&PressureReading> {
        let idx = self.readings.partition_point( |r| r.timestamp <= *t);
        if idx > 0 { self.readings.get(idx-1) } else { None }
    }
}

/* #endregion barometric data */

/* #region waypoints ************************************************************************************/

/// named navigation fixes (e.g. "EPICK") that can be used to position geo restrictors
#[derive(Debug,Clone,Default,Serialize,Deserialize)]
#[serde(transparent)]
pub struct WaypointTable {
    fixes: HashMap<String,GeoPoint>,
}

impl WaypointTable {
    pub fn new ()->Self { WaypointTable { fixes: HashMap::new() } }

    pub fn from_pairs<I,S> (pairs: I)->Self where I: IntoIterator<Item=(S,GeoPoint)>, S: AsRef<str> {
        let fixes = pairs.into_iter().map( |(name,pos)| (name.as_ref().to_uppercase(), pos)).collect();
        WaypointTable { fixes }
    }

    /// parse a RON map such as `{ "EPICK": (lat: 37.42, lon: -122.0) }`
    pub fn from_ron_str (s: &str)->Result<Self> {
        let fixes: HashMap<String,GeoPoint> = ron::from_str(s)?;
        Ok( WaypointTable::from_pairs( fixes))
    }

    pub fn from_ron_file (path: impl AsRef<Path>)->Result<Self> {
        let s = fs::read_to_string( path)?;
        WaypointTable::from_ron_str( &s)
    }

    /// case insensitive lookup
    pub fn lookup (&self, name: &str)->Option<&GeoPoint> {
        self.fixes.get( &name.trim().to_uppercase())
    }

    pub fn contains (&self, name: &str)->bool { self.lookup(name).is_some() }
    pub fn len (&self)->usize { self.fixes.len() }
    pub fn is_empty (&self)->bool { self.fixes.is_empty() }
}

/* #endregion waypoints */

/* #region airframes ************************************************************************************/

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Airframe {
    pub registration: String,    // e.g. "N12345"
    pub equipment_type: String,  // ICAO type designator, e.g. "B738"
}

impl Airframe {
    pub fn new (registration: impl ToString, equipment_type: impl ToString)->Self {
        Airframe { registration: registration.to_string(), equipment_type: equipment_type.to_string() }
    }
}

/// maps transponder hex ids to airframes
#[derive(Debug,Clone,Default,Serialize,Deserialize)]
#[serde(transparent)]
pub struct AirframeRegistry {
    airframes: HashMap<String,Airframe>,
}

impl AirframeRegistry {
    pub fn new ()->Self { AirframeRegistry { airframes: HashMap::new() } }

    pub fn from_ron_str (s: &str)->Result<Self> {
        let airframes: HashMap<String,Airframe> = ron::from_str(s)?;
        Ok( AirframeRegistry { airframes: airframes.into_iter().map( |(k,v)| (k.to_lowercase(), v)).collect() })
    }

    pub fn insert (&mut self, icao_id: &str, airframe: Airframe) {
        self.airframes.insert( icao_id.to_lowercase(), airframe);
    }

    pub fn get (&self, icao_id: &str)->Option<&Airframe> {
        self.airframes.get( &icao_id.to_lowercase())
    }

    pub fn len (&self)->usize { self.airframes.len() }

    /// set the airframe of a flight we don't have one for yet. Returns true if the flight was updated
    pub fn enrich (&self, flight: &mut Flight)->bool {
        if flight.airframe().is_none() {
            if let Some(af) = flight.identity().icao_id().and_then( |id| self.get(id)) {
                flight.set_airframe( af.clone());
                return true
            }
        }
        false
    }
}

/* #endregion airframes */
