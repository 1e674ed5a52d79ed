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
use geo::{Coord, Line};
use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use tracing::debug;

use fdb_common::{datetime::short_utc_datetime_string, geo::{GeoPoint,LocalPlane}, lerp};
use crate::{flight::Flight, restrictor::GeoRestrictor, track::Track, trackpoint::Trackpoint};

/// why a track did not satisfy a restrictor
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum Rejection {
    NoUsableTrack,
    TrackTooShort,
    NeverInside,
    OutsideAltitudeBand,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rejection::NoUsableTrack => "no usable track",
            Rejection::TrackTooShort => "track too short",
            Rejection::NeverInside => "never inside",
            Rejection::OutsideAltitudeBand => "crossed outside altitude band",
        };
        write!( f, "{s}")
    }
}

/// the result of testing a track against a restrictor. For satisfied restrictors the entry fields
/// describe where the track got in (or crossed the window). For windows that were crossed outside of
/// their altitude band they describe the first crossing
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct TrackIntersection {
    pub restrictor: GeoRestrictor,
    pub track_source: Option<String>,
    pub entry_position: Option<GeoPoint>,
    pub entry_altitude_ft: Option<f64>,
    pub entry_time: Option<DateTime<Utc>>,
    pub satisfied: bool,
    pub rejection: Option<Rejection>,
}

impl TrackIntersection {
    fn rejected (restrictor: &GeoRestrictor, track_source: Option<&str>, reason: Rejection)->Self {
        TrackIntersection {
            restrictor: restrictor.clone(),
            track_source: track_source.map( |s| s.to_string()),
            entry_position: None,
            entry_altitude_ft: None,
            entry_time: None,
            satisfied: false,
            rejection: Some(reason),
        }
    }

    fn entered (restrictor: &GeoRestrictor, track_source: &str, pos: GeoPoint, alt_ft: f64, time: DateTime<Utc>)->Self {
        TrackIntersection {
            restrictor: restrictor.clone(),
            track_source: Some( track_source.to_string()),
            entry_position: Some(pos),
            entry_altitude_ft: Some(alt_ft),
            entry_time: Some(time),
            satisfied: true,
            rejection: None,
        }
    }
}

impl fmt::Display for TrackIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{} ", self.restrictor)?;
        if let Some(src) = &self.track_source { write!( f, "[{src}] ")?; }
        if let (Some(pos),Some(alt),Some(t)) = (&self.entry_position, self.entry_altitude_ft, &self.entry_time) {
            write!( f, "at {pos} {alt:.0}ft {} ", short_utc_datetime_string(t))?;
        }
        match &self.rejection {
            Some(reason) => write!( f, "not satisfied: {reason}"),
            None => write!( f, "satisfied")
        }
    }
}

/// test a single track against a restrictor
pub fn evaluate (track: &Track, gr: &GeoRestrictor)->(bool,TrackIntersection) {
    let ti = match gr {
        GeoRestrictor::Window {..} => evaluate_window( track, gr),
        _ => evaluate_region( track, gr),
    };
    (ti.satisfied, ti)
}

fn evaluate_region (track: &Track, gr: &GeoRestrictor)->TrackIntersection {
    if track.is_empty() {
        return TrackIntersection::rejected( gr, Some(track.source()), Rejection::TrackTooShort)
    }

    match track.points().iter().find( |p| gr.contains_point( p.position())) {
        Some(p) => TrackIntersection::entered( gr, track.source(), *p.position(), p.altitude_ft(), p.timestamp()),
        None => TrackIntersection::rejected( gr, Some(track.source()), Rejection::NeverInside)
    }
}

/// where a track segment crosses a window, as fraction of the segment
fn crossing_fraction (seg: Line, gate: Line)->Option<f64> {
    let ix: Coord = match line_intersection( seg, gate)? {
        LineIntersection::SinglePoint { intersection, .. } => intersection,
        LineIntersection::Collinear { intersection } => intersection.start, // the overlap, in seg direction
    };

    let seg_len = (seg.end.x - seg.start.x).hypot( seg.end.y - seg.start.y);
    if seg_len == 0.0 {
        Some(0.0)
    } else {
        let d = (ix.x - seg.start.x).hypot( ix.y - seg.start.y);
        Some( (d / seg_len).clamp( 0.0, 1.0))
    }
}

fn evaluate_window (track: &Track, gr: &GeoRestrictor)->TrackIntersection {
    let Some(gate_line) = gr.window_line() else {
        return TrackIntersection::rejected( gr, Some(track.source()), Rejection::NeverInside)
    };
    if track.len() < 2 {
        return TrackIntersection::rejected( gr, Some(track.source()), Rejection::TrackTooShort)
    }

    let plane = LocalPlane::new( gate_line.midpoint());
    let gate = plane.project_line( &gate_line);
    let mut first_crossing: Option<TrackIntersection> = None;

    for w in track.points().windows(2) {
        let (a,b) = (&w[0], &w[1]);
        let seg = Line::new( plane.project( a.position()), plane.project( b.position()));

        if let Some(t) = crossing_fraction( seg, gate) {
            let alt_ft = lerp( a.altitude_ft(), b.altitude_ft(), t);
            let dt_ms = (b.timestamp() - a.timestamp()).num_milliseconds() as f64;
            let time = a.timestamp() + chrono::TimeDelta::milliseconds( (dt_ms * t).round() as i64);
            let pos = a.position().interpolate( b.position(), t);

            if gr.altitude_in_band( alt_ft) {
                return TrackIntersection::entered( gr, track.source(), pos, alt_ft, time)
            }

            if first_crossing.is_none() {
                debug!("{} crossed {} outside of altitude band at {:.0}ft", track.source(), gr, alt_ft);
                let mut ti = TrackIntersection::entered( gr, track.source(), pos, alt_ft, time);
                ti.satisfied = false;
                ti.rejection = Some( Rejection::OutsideAltitudeBand);
                first_crossing = Some(ti);
            }
        }
    }

    first_crossing.unwrap_or_else( || TrackIntersection::rejected( gr, Some(track.source()), Rejection::NeverInside))
}

/// the combined result of testing a flight against an ordered set of restrictors
#[derive(Debug,Clone,PartialEq)]
pub struct RestrictionResult {
    pub satisfied: bool,
    /// the satisfied intersections, in restrictor order
    pub intersections: Vec<TrackIntersection>,
    /// index of the restrictor that failed. Evaluation stops there
    pub failed: Option<usize>,
    /// the (unsatisfied) intersection of the failed restrictor
    pub failed_intersection: Option<TrackIntersection>,
}

impl Flight {
    /// test the first track in `prefs` order against `gr`
    pub fn satisfies_geo_restriction<S: AsRef<str>> (&self, gr: &GeoRestrictor, prefs: &[S])->(bool,TrackIntersection) {
        match self.preferred_track( prefs) {
            Some(track) => evaluate( track, gr),
            None => (false, TrackIntersection::rejected( gr, None, Rejection::NoUsableTrack))
        }
    }

    /// logical AND over all restrictors, evaluated in order until the first one fails
    pub fn satisfies_geo_restrictions<S: AsRef<str>> (&self, restrictors: &[GeoRestrictor], prefs: &[S])->RestrictionResult {
        let mut intersections = Vec::with_capacity( restrictors.len());

        for (i,gr) in restrictors.iter().enumerate() {
            let (satisfied, ti) = self.satisfies_geo_restriction( gr, prefs);
            if !satisfied {
                return RestrictionResult { satisfied: false, intersections, failed: Some(i), failed_intersection: Some(ti) }
            }
            intersections.push( ti);
        }
        RestrictionResult { satisfied: true, intersections, failed: None, failed_intersection: None }
    }
}
