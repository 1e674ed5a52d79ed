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

use std::{collections::{BTreeMap,BTreeSet}, fmt, time::Duration};
use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};

use crate::{identity::{Identity,Schedule}, refdata::Airframe, track::Track};

/// the well known track source names
pub const ADSB_SOURCE: &str = "ADSB";
pub const MLAT_SOURCE: &str = "MLAT";
pub const FOIA_SOURCE: &str = "FOIA";
pub const FA_SOURCE: &str = "FA";
pub const FR24_SOURCE: &str = "fr24";

/// one flight of one aircraft. A flight can have several tracks, one per data source. Tracks are never
/// merged - clients pick the one they want with a preference order of source names
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Flight {
    identity: Identity,
    tags: BTreeSet<String>,
    tracks: BTreeMap<String,Track>,
    schedule: Option<Schedule>,
    airframe: Option<Airframe>,
}

impl Flight {
    pub fn new (identity: Identity)->Self {
        Flight { identity, tags: BTreeSet::new(), tracks: BTreeMap::new(), schedule: None, airframe: None }
    }

    pub fn with_tag (mut self, tag: impl ToString)->Self { self.add_tag(tag); self }
    pub fn with_track (mut self, track: Track)->Self { self.add_track(track); self }
    pub fn with_schedule (mut self, schedule: Schedule)->Self { self.schedule = Some(schedule); self }
    pub fn with_airframe (mut self, airframe: Airframe)->Self { self.airframe = Some(airframe); self }

    pub fn identity (&self)->&Identity { &self.identity }
    pub fn add_foreign_key (&mut self, system: impl ToString, key: impl ToString) {
        self.identity.add_foreign_key( system, key)
    }
    pub fn ident_string (&self)->String { self.identity.ident_string() }

    pub fn tags (&self)->&BTreeSet<String> { &self.tags }
    pub fn has_tag (&self, tag: &str)->bool { self.tags.contains(tag) }
    pub fn add_tag (&mut self, tag: impl ToString) { self.tags.insert( tag.to_string()); }

    /// true if the flight carries all of the given tags
    pub fn has_all_tags (&self, tags: &[String])->bool { tags.iter().all( |t| self.tags.contains(t)) }

    pub fn schedule (&self)->Option<&Schedule> { self.schedule.as_ref() }
    pub fn airframe (&self)->Option<&Airframe> { self.airframe.as_ref() }
    pub fn set_airframe (&mut self, airframe: Airframe) { self.airframe = Some(airframe) }

    /// store track under its source name, replacing a previous track of the same source
    pub fn add_track (&mut self, track: Track)->Option<Track> {
        self.tracks.insert( track.source().to_string(), track)
    }

    pub fn track (&self, source: &str)->Option<&Track> { self.tracks.get(source) }
    pub fn has_track (&self, source: &str)->bool { self.tracks.contains_key(source) }
    pub fn track_names (&self)->Vec<&str> { self.tracks.keys().map( |k| k.as_str()).collect() }
    pub fn tracks (&self)->impl Iterator<Item=&Track> { self.tracks.values() }

    /// the first track in `prefs` order the flight has
    pub fn preferred_track<S: AsRef<str>> (&self, prefs: &[S])->Option<&Track> {
        prefs.iter().find_map( |s| self.tracks.get( s.as_ref()))
    }

    /// earliest start and latest end over all tracks
    pub fn times (&self)->Option<(DateTime<Utc>,DateTime<Utc>)> {
        let start = self.tracks.values().filter_map( |t| t.start_time()).min()?;
        let end = self.tracks.values().filter_map( |t| t.end_time()).max()?;
        Some( (start,end) )
    }

    /// the time slots of the preferred track (see `Track::timeslots`)
    pub fn timeslots<S: AsRef<str>> (&self, prefs: &[S], slot: Duration)->Vec<DateTime<Utc>> {
        self.preferred_track(prefs).map( |t| t.timeslots(slot)).unwrap_or_default()
    }

    pub fn first_timeslot<S: AsRef<str>> (&self, prefs: &[S], slot: Duration)->Option<DateTime<Utc>> {
        self.timeslots( prefs, slot).first().copied()
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}", self.identity.ident_string())?;
        if let Some(s) = &self.schedule {
            if !s.origin.is_empty() || !s.destination.is_empty() {
                write!( f, " {}-{}", s.origin, s.destination)?;
            }
        }
        let tracks: Vec<String> = self.tracks.values().map( |t| t.to_string()).collect();
        write!( f, " {{{}}}", tracks.join(", "))
    }
}
