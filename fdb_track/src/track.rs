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

use std::{fmt, time::Duration};
use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};

use fdb_common::datetime::{floor_to_slot, to_time_delta, short_utc_datetime_string};
use crate::trackpoint::Trackpoint;
use crate::errors::{FdbTrackError,Result};

/// the time ordered sequence of trackpoints from one data source (named by `source`, e.g. "ADSB" or "FOIA").
/// Points are non-decreasing in timestamp, which is enforced by all mutators
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Track {
    source: String,
    points: Vec<Trackpoint>,
}

impl Track {
    pub fn new (source: impl ToString)->Self {
        Track { source: source.to_string(), points: Vec::new() }
    }

    /// build a track from samples in arbitrary order. The sort is stable so that samples with the same
    /// timestamp keep their input order
    pub fn from_unsorted (source: impl ToString, mut points: Vec<Trackpoint>)->Self {
        points.sort_by_key( |p| p.timestamp());
        Track { source: source.to_string(), points }
    }

    /// build a track from samples that have to be already ordered
    pub fn from_ordered (source: impl ToString, points: Vec<Trackpoint>)->Result<Self> {
        if let Some(i) = points.windows(2).position( |w| w[1].timestamp() < w[0].timestamp()) {
            return Err( FdbTrackError::TrackOrderError(
                format!("point {} at {} precedes its predecessor at {}", i+1, points[i+1].timestamp(), points[i].timestamp())))
        }
        Ok( Track { source: source.to_string(), points })
    }

    /// append a sample, which must not be older than the current last sample
    pub fn push (&mut self, tp: Trackpoint)->Result<()> {
        if let Some(last) = self.points.last() {
            if tp.timestamp() < last.timestamp() {
                return Err( FdbTrackError::TrackOrderError(
                    format!("{} sample at {} is older than last sample at {}", self.source, tp.timestamp(), last.timestamp())))
            }
        }
        self.points.push(tp);
        Ok(())
    }

    pub fn source (&self)->&str { self.source.as_str() }
    pub fn points (&self)->&[Trackpoint] { self.points.as_slice() }
    pub fn len (&self)->usize { self.points.len() }
    pub fn is_empty (&self)->bool { self.points.is_empty() }

    pub fn first (&self)->Option<&Trackpoint> { self.points.first() }
    pub fn last (&self)->Option<&Trackpoint> { self.points.last() }

    pub fn start_time (&self)->Option<DateTime<Utc>> { self.points.first().map( |p| p.timestamp()) }
    pub fn end_time (&self)->Option<DateTime<Utc>> { self.points.last().map( |p| p.timestamp()) }

    /// the floor-aligned time slots (of length `slot`) the track touches, in ascending order
    pub fn timeslots (&self, slot: Duration)->Vec<DateTime<Utc>> {
        let mut slots = Vec::new();
        if let (Some(start), Some(end)) = (self.start_time(), self.end_time()) {
            let dt = to_time_delta(slot);
            if dt.is_zero() { return slots }

            let mut t = floor_to_slot( &start, slot);
            while t <= end {
                slots.push(t);
                t = t + dt;
            }
        }
        slots
    }

    /// index of the last point with a timestamp that is not later than `t`
    pub fn index_at_or_before (&self, t: &DateTime<Utc>)->Option<usize> {
        let idx = self.points.partition_point( |p| p.timestamp() <= *t);
        if idx > 0 { Some(idx-1) } else { None }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => write!( f, "{}:{}pts [{} - {}]", self.source, self.points.len(),
                                                 short_utc_datetime_string( &first.timestamp()),
                                                 short_utc_datetime_string( &last.timestamp())),
            _ => write!( f, "{}:empty", self.source)
        }
    }
}
