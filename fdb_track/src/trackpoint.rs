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

use std::fmt;
use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};
use uom::si::{length::foot, velocity::{knot,foot_per_minute}, f64::{Length,Velocity}};

use fdb_common::{angle::Angle360, geo::GeoPoint, lerp};

/// a single timestamped position report of one aircraft from one data source.
/// Trackpoints are immutable once created - corrections produce new trackpoints
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Trackpoint {
    source: String,             // the feed this point came from (e.g. "ADSB", "FAA-FOIA")
    receiver: Option<String>,   // name of the receiver for privately received ADS-B
    timestamp: DateTime<Utc>,
    position: GeoPoint,
    altitude: Length,           // barometric unless corrected
    groundspeed: Velocity,
    heading: Angle360,
    vertical_rate: Velocity,
    squawk: Option<String>,
}

impl Trackpoint {
    pub fn new (source: impl ToString, timestamp: DateTime<Utc>, position: GeoPoint, altitude_ft: f64)->Self {
        Trackpoint {
            source: source.to_string(),
            receiver: None,
            timestamp,
            position,
            altitude: Length::new::<foot>( altitude_ft),
            groundspeed: Velocity::new::<knot>(0.0),
            heading: Angle360::from_degrees(0.0),
            vertical_rate: Velocity::new::<foot_per_minute>(0.0),
            squawk: None,
        }
    }

    //--- construction time setters

    pub fn with_groundspeed_kts (mut self, kts: f64)->Self { self.groundspeed = Velocity::new::<knot>(kts); self }
    pub fn with_heading_degrees (mut self, deg: f64)->Self { self.heading = Angle360::from_degrees(deg); self }
    pub fn with_vertical_rate_fpm (mut self, fpm: f64)->Self { self.vertical_rate = Velocity::new::<foot_per_minute>(fpm); self }
    pub fn with_squawk (mut self, squawk: impl ToString)->Self { self.squawk = Some(squawk.to_string()); self }
    pub fn with_receiver (mut self, receiver: impl ToString)->Self { self.receiver = Some(receiver.to_string()); self }

    //--- derived copies

    pub fn with_timestamp (&self, timestamp: DateTime<Utc>)->Self {
        Trackpoint { timestamp, ..self.clone() }
    }

    pub fn with_altitude_ft (&self, altitude_ft: f64)->Self {
        Trackpoint { altitude: Length::new::<foot>( altitude_ft), ..self.clone() }
    }

    //--- accessors

    pub fn source (&self)->&str { self.source.as_str() }
    pub fn receiver (&self)->Option<&str> { self.receiver.as_deref() }
    pub fn timestamp (&self)->DateTime<Utc> { self.timestamp }
    pub fn position (&self)->&GeoPoint { &self.position }
    pub fn latitude (&self)->f64 { self.position.latitude_degrees() }
    pub fn longitude (&self)->f64 { self.position.longitude_degrees() }
    pub fn altitude (&self)->Length { self.altitude }
    pub fn altitude_ft (&self)->f64 { self.altitude.get::<foot>() }
    pub fn groundspeed (&self)->Velocity { self.groundspeed }
    pub fn groundspeed_kts (&self)->f64 { self.groundspeed.get::<knot>() }
    pub fn heading (&self)->Angle360 { self.heading }
    pub fn heading_degrees (&self)->f64 { self.heading.degrees() }
    pub fn vertical_rate (&self)->Velocity { self.vertical_rate }
    pub fn vertical_rate_fpm (&self)->f64 { self.vertical_rate.get::<foot_per_minute>() }
    pub fn squawk (&self)->Option<&str> { self.squawk.as_deref() }

    /// source name including the receiver, e.g. "ADSB/sfo-rooftop"
    pub fn long_source (&self)->String {
        match &self.receiver {
            Some(r) => format!("{}/{}", self.source, r),
            None => self.source.clone()
        }
    }

    /// linear interpolation between self and `other` with fraction `t` (0: self, 1: other). The timestamp is
    /// passed in so that callers can use exact (grid) times instead of a rounded interpolation result.
    /// Headings interpolate along the shortest arc, non-numeric fields are taken from self
    pub fn interpolate (&self, other: &Trackpoint, t: f64, timestamp: DateTime<Utc>)->Trackpoint {
        Trackpoint {
            source: self.source.clone(),
            receiver: self.receiver.clone(),
            timestamp,
            position: self.position.interpolate( &other.position, t),
            altitude: Length::new::<foot>( lerp( self.altitude_ft(), other.altitude_ft(), t)),
            groundspeed: Velocity::new::<knot>( lerp( self.groundspeed_kts(), other.groundspeed_kts(), t)),
            heading: self.heading.interpolate( &other.heading, t),
            vertical_rate: Velocity::new::<foot_per_minute>( lerp( self.vertical_rate_fpm(), other.vertical_rate_fpm(), t)),
            squawk: self.squawk.clone(),
        }
    }
}

impl fmt::Display for Trackpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "[{}] {} {} {:.0}ft {:.0}kts {:.0}deg {:.0}fpm",
            self.long_source(), self.timestamp.format("%H:%M:%S"), self.position,
            self.altitude_ft(), self.groundspeed_kts(), self.heading_degrees(), self.vertical_rate_fpm())?;
        if let Some(sq) = &self.squawk { write!( f, " sq:{sq}")?; }
        Ok(())
    }
}
