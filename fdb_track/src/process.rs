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

//! track transformations: resampling, smoothed kinematics, barometric altitude correction and
//! distance projections

use std::{collections::BTreeSet, time::Duration};
use serde::{Serialize,Deserialize};
use chrono::{DateTime,TimeDelta,Utc};
use uom::si::{f64::Length, length::meter};
use tracing::debug;

use fdb_common::{
    datetime::{self, to_time_delta, secs_between, deserialize_duration, serialize_duration},
    geo::GeoPoint, angle::heading_delta
};
use crate::{
    errors::{FdbTrackError,Result}, flight::FOIA_SOURCE, refdata::PressureArchive,
    track::Track, trackpoint::Trackpoint
};

/* #region resampling ********************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum ResampleMode {
    /// take the sample closest in time (earlier one on ties), retimed to the grid
    Nearest,
    /// interpolate between the enclosing samples
    #[default]
    Linear,
}

/// produce a track with samples spaced `interval` apart, starting at the first timestamp and always
/// ending with the last timestamp. Grid times that coincide with input samples return those samples
/// unmodified, which makes resampling idempotent
pub fn resample (track: &Track, interval: Duration, mode: ResampleMode)->Track {
    let pts = track.points();
    let dt = to_time_delta( interval);
    if pts.len() < 2 || dt <= TimeDelta::zero() {
        return track.clone()
    }

    let t0 = pts[0].timestamp();
    let t_last = pts[pts.len()-1].timestamp();

    let mut resampled = Vec::new();
    let mut t = t0;
    while t < t_last {
        resampled.push( sample_at( pts, t, mode));
        match t.checked_add_signed( dt) {
            Some(t_next) => t = t_next,
            None => break // interval beyond the representable date range
        }
    }
    resampled.push( sample_at( pts, t_last, mode));

    Track::from_unsorted( track.source(), resampled)
}

fn sample_at (pts: &[Trackpoint], t: DateTime<Utc>, mode: ResampleMode)->Trackpoint {
    let j = pts.partition_point( |p| p.timestamp() < t);
    if j >= pts.len() { return pts[pts.len()-1].with_timestamp(t) }
    if pts[j].timestamp() == t { return pts[j].clone() }
    if j == 0 { return pts[0].with_timestamp(t) }

    let (a,b) = (&pts[j-1], &pts[j]);
    match mode {
        ResampleMode::Nearest => {
            if (t - a.timestamp()) <= (b.timestamp() - t) { a.with_timestamp(t) } else { b.with_timestamp(t) }
        }
        ResampleMode::Linear => {
            let frac = secs_between( &a.timestamp(), &t) / secs_between( &a.timestamp(), &b.timestamp());
            a.interpolate( b, frac, t)
        }
    }
}

/* #endregion resampling */

/* #region kinematics ********************************************************************************/

/// per-point rates of change
#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize,Deserialize)]
pub struct Kinematics {
    pub ground_acceleration: f64,   // kts/s
    pub vertical_acceleration: f64, // fpm/s
    pub turn_rate: f64,             // deg/s, positive is clockwise
}

impl Kinematics {
    fn between (prev: &Trackpoint, cur: &Trackpoint)->Kinematics {
        let dt = secs_between( &prev.timestamp(), &cur.timestamp());
        if dt <= 0.0 { return Kinematics::default() }

        Kinematics {
            ground_acceleration: (cur.groundspeed_kts() - prev.groundspeed_kts()) / dt,
            vertical_acceleration: (cur.vertical_rate_fpm() - prev.vertical_rate_fpm()) / dt,
            turn_rate: heading_delta( prev.heading_degrees(), cur.heading_degrees()) / dt,
        }
    }
}

/// backward differences. The first point has no predecessor and gets the value of the second one
pub fn raw_kinematics (track: &Track)->Vec<Kinematics> {
    let pts = track.points();
    let mut ks: Vec<Kinematics> = Vec::with_capacity( pts.len());

    if pts.len() < 2 {
        ks.resize( pts.len(), Kinematics::default());
        return ks
    }

    ks.push( Kinematics::default()); // placeholder for the first point
    for w in pts.windows(2) {
        ks.push( Kinematics::between( &w[0], &w[1]));
    }
    ks[0] = ks[1];
    ks
}

/// raw kinematics averaged over all points within `[t_i - window/2, t_i + window/2]`. At the track
/// boundaries this uses the available subset, a zero window returns the raw values
pub fn kinematics (track: &Track, window: Duration)->Vec<Kinematics> {
    let raw = raw_kinematics( track);
    let half = to_time_delta( window) / 2;
    if half <= TimeDelta::zero() { return raw }

    let pts = track.points();
    pts.iter().map( |p| {
        let t = p.timestamp();
        let lo = match t.checked_sub_signed( half) {
            Some(t_lo) => pts.partition_point( |q| q.timestamp() < t_lo),
            None => 0
        };
        let hi = match t.checked_add_signed( half) {
            Some(t_hi) => pts.partition_point( |q| q.timestamp() <= t_hi),
            None => pts.len()
        };
        average( &raw[lo..hi])
    }).collect()
}

fn average (ks: &[Kinematics])->Kinematics {
    if ks.is_empty() { return Kinematics::default() }
    let n = ks.len() as f64;
    let mut sum = Kinematics::default();
    for k in ks {
        sum.ground_acceleration += k.ground_acceleration;
        sum.vertical_acceleration += k.vertical_acceleration;
        sum.turn_rate += k.turn_rate;
    }
    Kinematics {
        ground_acceleration: sum.ground_acceleration / n,
        vertical_acceleration: sum.vertical_acceleration / n,
        turn_rate: sum.turn_rate / n,
    }
}

/* #endregion kinematics */

/* #region altitude correction ***********************************************************************/

/// which track sources already report corrected (true) altitudes
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AltitudeCorrectionPolicy {
    pub corrected_sources: BTreeSet<String>,
}

impl AltitudeCorrectionPolicy {
    pub fn new<I,S> (sources: I)->Self where I: IntoIterator<Item=S>, S: ToString {
        AltitudeCorrectionPolicy { corrected_sources: sources.into_iter().map( |s| s.to_string()).collect() }
    }

    pub fn is_corrected (&self, source: &str)->bool { self.corrected_sources.contains(source) }
}

impl Default for AltitudeCorrectionPolicy {
    fn default()->Self { AltitudeCorrectionPolicy::new( [FOIA_SOURCE]) }
}

/// correct barometric altitudes with the last pressure reading prior to each point. Tracks of sources
/// the policy lists as corrected, and calls without an archive, return the track unchanged
pub fn adjust_altitudes (track: &Track, archive: Option<&PressureArchive>, policy: &AltitudeCorrectionPolicy)->Result<Track> {
    let archive = match archive {
        Some(archive) if !policy.is_corrected( track.source()) => archive,
        _ => return Ok( track.clone())
    };

    let mut adjusted = Vec::with_capacity( track.len());
    for p in track.points() {
        let reading = archive.nearest_prior( &p.timestamp()).ok_or_else( || FdbTrackError::MissingReferenceData(
            format!("no {} pressure reading prior to {}", archive.station(), p.timestamp())))?;
        adjusted.push( p.with_altitude_ft( p.altitude_ft() + reading.altitude_correction_ft()));
    }
    Ok( Track::from_unsorted( track.source(), adjusted))
}

/* #endregion altitude correction */

/* #region distances *********************************************************************************/

/// great circle distance of each point from `origin`
pub fn distance_from_origin (track: &Track, origin: &GeoPoint)->Vec<Length> {
    track.points().iter().map( |p| origin.haversine_distance( p.position())).collect()
}

/// accumulated path length up to each point (0 at the first point)
pub fn distance_along_path (track: &Track)->Vec<Length> {
    cumulative_meters( track).into_iter().map( |m| Length::new::<meter>(m)).collect()
}

/// path length still to go from each point (0 at the last point)
pub fn distance_remaining_along_path (track: &Track)->Vec<Length> {
    let cum = cumulative_meters( track);
    let total = cum.last().copied().unwrap_or(0.0);
    let n = cum.len();

    cum.iter().enumerate().map( |(i,m)| {
        if i+1 == n { Length::new::<meter>(0.0) } else { Length::new::<meter>( (total - m).max(0.0)) }
    }).collect()
}

fn cumulative_meters (track: &Track)->Vec<f64> {
    let pts = track.points();
    let mut cum = Vec::with_capacity( pts.len());
    let mut acc = 0.0;
    for (i,p) in pts.iter().enumerate() {
        if i > 0 {
            acc += pts[i-1].position().haversine_distance( p.position()).get::<meter>();
        }
        cum.push( acc);
    }
    cum
}

/* #endregion distances */

/* #region post processing ***************************************************************************/

/// parameters for the resample, correct, smooth chain used by reports that look at vertical profiles
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct PostProcessParams {
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub sample_interval: Duration,

    pub resample_mode: ResampleMode,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub averaging_window: Duration,

    pub altitude_policy: AltitudeCorrectionPolicy,
}

/// upper limit for post processing intervals and windows
pub const MAX_POST_PROCESS_DURATION: Duration = Duration::from_secs( 24*60*60);

impl PostProcessParams {
    pub fn check (&self)->std::result::Result<(),String> {
        if self.sample_interval.is_zero() {
            return Err( "sample interval must not be zero".to_string())
        }
        if self.sample_interval > MAX_POST_PROCESS_DURATION {
            return Err( format!("sample interval exceeds {:?}", MAX_POST_PROCESS_DURATION))
        }
        if self.averaging_window > MAX_POST_PROCESS_DURATION {
            return Err( format!("averaging window exceeds {:?}", MAX_POST_PROCESS_DURATION))
        }
        Ok(())
    }
}

impl Default for PostProcessParams {
    fn default()->Self {
        PostProcessParams {
            sample_interval: datetime::secs(15),
            resample_mode: ResampleMode::Linear,
            averaging_window: datetime::secs(60),
            altitude_policy: AltitudeCorrectionPolicy::default(),
        }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct ProcessedTrack {
    pub track: Track,
    pub kinematics: Vec<Kinematics>, // one per track point
}

/// resample, then correct altitudes (if the policy says so) and compute smoothed kinematics
pub fn post_process (track: &Track, params: &PostProcessParams, archive: Option<&PressureArchive>)->Result<ProcessedTrack> {
    let resampled = resample( track, params.sample_interval, params.resample_mode);
    let track = adjust_altitudes( &resampled, archive, &params.altitude_policy)?;
    let kinematics = kinematics( &track, params.averaging_window);
    debug!("post processed {} -> {} points", resampled.source(), track.len());

    Ok( ProcessedTrack { track, kinematics })
}

/* #endregion post processing */
