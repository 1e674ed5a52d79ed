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

use std::{fmt, fs, path::Path, time::Duration};
use serde::{Serialize,Deserialize};

use fdb_common::{
    datetime::{self, TimeRange, deserialize_duration, serialize_duration},
    geo::GeoPoint
};
use fdb_track::{process::PostProcessParams, refdata::WaypointTable, GeoRestrictor};
use crate::errors::{FdbReportError,Result,validation_error};

#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Default,Serialize,Deserialize)]
pub enum ReportLogLevel {
    Debug,
    #[default]
    Info,
}

fn default_timeslot ()->Duration { datetime::minutes(30) }

/// the configuration shared by all report kinds. Some options are only used by some kinds, e.g.
/// `reference_point` by "refpoint" reports and `altitude_threshold_ft` by "gate" reports.
/// Options are normally read from RON, e.g.
/// ```text
/// ( name: "gate",
///   time_range: ( start: "2024-05-01T00:00:00Z", end: "2024-05-01T23:59:59Z"),
///   window_from: Some((lat: 37.5, lon: -122.1)), window_to: Some((lat: 37.5, lon: -121.9)),
///   window_max_ft: 15000.0,
///   altitude_threshold_ft: 5000.0 )
/// ```
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ReportOptions {
    /// the report kind tag
    pub name: String,
    pub time_range: TimeRange,
    #[serde(default)] pub tags: Vec<String>,

    // geo restriction 1: circle or box around center and/or the named waypoints
    #[serde(default)] pub center: Option<GeoPoint>,
    #[serde(default)] pub radius_km: f64,
    #[serde(default)] pub side_km: f64,
    #[serde(default)] pub waypoints: Vec<String>,

    // geo restriction 2: window
    #[serde(default)] pub window_from: Option<GeoPoint>,
    #[serde(default)] pub window_to: Option<GeoPoint>,
    #[serde(default)] pub window_min_ft: f64,
    #[serde(default)] pub window_max_ft: f64,

    /// overrides the track preference list of the report kind
    #[serde(default)] pub track_data_source: Option<String>,

    #[serde(default)] pub reference_point: Option<GeoPoint>,
    #[serde(default)] pub ref_distance_km: f64,
    #[serde(default)] pub altitude_threshold_ft: f64,

    #[serde(default="default_timeslot", deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub timeslot: Duration,

    #[serde(default)] pub post_process: PostProcessParams,
    #[serde(default)] pub log_level: ReportLogLevel,
}

impl ReportOptions {
    pub fn new (name: impl ToString, time_range: TimeRange)->Self {
        ReportOptions {
            name: name.to_string(),
            time_range,
            tags: Vec::new(),
            center: None,
            radius_km: 0.0,
            side_km: 0.0,
            waypoints: Vec::new(),
            window_from: None,
            window_to: None,
            window_min_ft: 0.0,
            window_max_ft: 0.0,
            track_data_source: None,
            reference_point: None,
            ref_distance_km: 0.0,
            altitude_threshold_ft: 0.0,
            timeslot: default_timeslot(),
            post_process: PostProcessParams::default(),
            log_level: ReportLogLevel::default(),
        }
    }

    pub fn from_ron_str (s: &str)->Result<Self> {
        Ok( ron::from_str(s)?)
    }

    pub fn from_ron_file (path: impl AsRef<Path>)->Result<Self> {
        let s = fs::read_to_string( path)?;
        ReportOptions::from_ron_str( &s)
    }

    /// check everything that does not depend on the report kind. This has to succeed before
    /// any flight is processed
    pub fn validate (&self, waypoints: &WaypointTable)->Result<()> {
        if !self.time_range.is_valid() {
            return Err( validation_error!("time range end precedes start: {}", self.time_range))
        }
        if self.timeslot.is_zero() {
            return Err( validation_error!("timeslot must not be zero"))
        }
        if (self.center.is_some() || !self.waypoints.is_empty()) && self.radius_km <= 0.0 && self.side_km <= 0.0 {
            return Err( validation_error!("must define a radius or box side for the region"))
        }
        if self.window_from.is_some() != self.window_to.is_some() {
            return Err( validation_error!("window needs both end points"))
        }
        self.post_process.check().map_err( |msg| validation_error!("{}", msg))?;

        for wp in &self.waypoints {
            if !waypoints.contains( wp) {
                return Err( validation_error!("waypoint '{}' not known", wp))
            }
        }

        for gr in self.list_geo_restrictors( waypoints)? {
            gr.check().map_err( |msg| validation_error!("{}", msg))?;
        }
        Ok(())
    }

    /// the restrictors in evaluation order: window, center region, waypoint regions
    pub fn list_geo_restrictors (&self, waypoints: &WaypointTable)->Result<Vec<GeoRestrictor>> {
        let mut restrictors = Vec::new();

        if let (Some(from), Some(to)) = (self.window_from, self.window_to) {
            restrictors.push( GeoRestrictor::window( from, to, self.window_min_ft, self.window_max_ft));
        }

        if let Some(center) = self.center {
            if let Some(gr) = self.centered_restrictor( center) { restrictors.push( gr) }
        }

        for wp in &self.waypoints {
            let pos = waypoints.lookup( wp).ok_or_else( || validation_error!("waypoint '{}' not known", wp))?;
            if let Some(gr) = self.centered_restrictor( *pos) { restrictors.push( gr) }
        }

        Ok( restrictors)
    }

    fn centered_restrictor (&self, pos: GeoPoint)->Option<GeoRestrictor> {
        if self.radius_km > 0.0 {
            Some( GeoRestrictor::circle( pos, self.radius_km))
        } else if self.side_km > 0.0 {
            Some( GeoRestrictor::square( pos, self.side_km))
        } else {
            None
        }
    }

    /// the configured track source if there is one, `default_spec` otherwise
    pub fn preferred_sources (&self, default_spec: &[&str])->Vec<String> {
        match &self.track_data_source {
            Some(src) => vec![ src.clone() ],
            None => default_spec.iter().map( |s| s.to_string()).collect()
        }
    }
}

impl fmt::Display for ReportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{} {}", self.name, self.time_range)?;
        if !self.tags.is_empty() { write!( f, " tags:{}", self.tags.join(","))?; }
        if let Some(src) = &self.track_data_source { write!( f, " source:{src}")?; }
        Ok(())
    }
}
