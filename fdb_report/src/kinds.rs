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

use std::{cmp::Ordering, fmt, str::FromStr};
use serde::{Serialize,Deserialize};
use uom::si::length::kilometer;

use fdb_common::{datetime::short_utc_datetime_string, histogram::Histogram};
use fdb_track::{
    Flight, TrackIntersection,
    flight::{ADSB_SOURCE, MLAT_SOURCE, FOIA_SOURCE, FA_SOURCE, FR24_SOURCE},
    process::{distance_from_origin, post_process}
};
use crate::{
    errors::{FdbReportError,Result,validation_error},
    options::ReportOptions,
    report::{FlightReportOutcome,Report}
};

/// track preference if the options don't name a source
pub const DEFAULT_TRACK_SPEC: [&str;5] = [ADSB_SOURCE, MLAT_SOURCE, FOIA_SOURCE, FA_SOURCE, FR24_SOURCE];

/// what a report kind has to provide to the report engine
pub trait ReportLogic {
    /// track sources in order of preference
    fn track_spec (&self)->&'static [&'static str];

    /// check kind specific options
    fn validate (&self, opts: &ReportOptions)->Result<()>;

    fn histogram (&self)->Histogram;

    /// called for each flight that satisfied all geo restrictors
    fn process (&self, r: &mut Report, flight: &Flight, intersections: &[TrackIntersection])->Result<FlightReportOutcome>;

    /// called once after all flights were processed
    fn summarize (&self, r: &mut Report);
}

/// the closed set of reports we support, selected by tag
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum ReportKind {
    /// one row per accepted flight
    List,
    /// altitude statistics of flights crossing all restrictors, split at a threshold altitude
    Gate,
    /// altitude of post processed tracks at their closest point to a reference point
    RefPoint,
}

impl ReportKind {
    pub fn tag (&self)->&'static str {
        match self {
            ReportKind::List => "list",
            ReportKind::Gate => "gate",
            ReportKind::RefPoint => "refpoint",
        }
    }
}

impl FromStr for ReportKind {
    type Err = FdbReportError;

    fn from_str (s: &str)->Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(ReportKind::List),
            "gate" => Ok(ReportKind::Gate),
            "refpoint" => Ok(ReportKind::RefPoint),
            _ => Err( validation_error!("unknown report '{}'", s))
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!( f, "{}", self.tag()) }
}

impl ReportLogic for ReportKind {
    fn track_spec (&self)->&'static [&'static str] { &DEFAULT_TRACK_SPEC }

    fn validate (&self, opts: &ReportOptions)->Result<()> {
        match self {
            ReportKind::List => Ok(()),
            ReportKind::Gate => {
                if opts.window_from.is_none() && opts.center.is_none() && opts.waypoints.is_empty() {
                    return Err( validation_error!("gate report needs a window or region"))
                }
                if opts.altitude_threshold_ft <= 0.0 {
                    return Err( validation_error!("gate report needs a positive altitude threshold"))
                }
                Ok(())
            }
            ReportKind::RefPoint => {
                if opts.reference_point.is_none() {
                    return Err( validation_error!("refpoint report needs a reference point"))
                }
                if opts.ref_distance_km <= 0.0 {
                    return Err( validation_error!("refpoint report needs a positive reference distance"))
                }
                Ok(())
            }
        }
    }

    fn histogram (&self)->Histogram {
        match self {
            ReportKind::List => Histogram::default(),
            ReportKind::Gate | ReportKind::RefPoint => Histogram::new( 20, 0.0, 20000.0), // altitudes in ft
        }
    }

    fn process (&self, r: &mut Report, flight: &Flight, intersections: &[TrackIntersection])->Result<FlightReportOutcome> {
        match self {
            ReportKind::List => process_list( r, flight, intersections),
            ReportKind::Gate => process_gate( r, flight, intersections),
            ReportKind::RefPoint => process_refpoint( r, flight),
        }
    }

    fn summarize (&self, r: &mut Report) {
        match self {
            ReportKind::List => {}
            ReportKind::Gate => summarize_gate( r),
            ReportKind::RefPoint => summarize_refpoint( r),
        }
    }
}

/* #region list *************************************************************************************/

fn process_list (r: &mut Report, flight: &Flight, intersections: &[TrackIntersection])->Result<FlightReportOutcome> {
    let first = intersections.first();
    let source = first.and_then( |ti| ti.track_source.clone())
        .or_else( || flight.preferred_track( r.preferred_sources()).map( |t| t.source().to_string()))
        .unwrap_or_default();
    let entry_time = first.and_then( |ti| ti.entry_time).map( |t| short_utc_datetime_string( &t)).unwrap_or_default();
    let entry_alt = first.and_then( |ti| ti.entry_altitude_ft).map( |a| format!("{a:.0}")).unwrap_or_default();

    r.set_headers( &["Flight", "Source", "Entry time", "Entry altitude (ft)"]);
    r.add_row( vec![ flight.ident_string(), source, entry_time, entry_alt ], Some( vec![ flight.to_string() ]));
    r.incr("[C] Listed");

    Ok( FlightReportOutcome::Accepted)
}

/* #endregion list */

/* #region gate *************************************************************************************/

fn below_key (threshold: f64)->String { format!("[C] below {threshold:.0}ft") }
fn above_key (threshold: f64)->String { format!("[C] above {threshold:.0}ft") }

fn process_gate (r: &mut Report, flight: &Flight, intersections: &[TrackIntersection])->Result<FlightReportOutcome> {
    let Some(ti) = intersections.last() else {
        r.incr("[C] no gate crossing");
        return Ok( FlightReportOutcome::RejectedByReportLogic)
    };
    let Some(alt) = ti.entry_altitude_ft else {
        r.incr("[C] no gate crossing");
        return Ok( FlightReportOutcome::RejectedByReportLogic)
    };

    let threshold = r.options().altitude_threshold_ft;
    r.add_to_histogram( alt);

    if alt < threshold {
        r.incr( below_key( threshold));
        r.set_headers( &["Flight", "Source", "Crossing time", "Crossing altitude (ft)"]);
        r.add_row( vec![
            flight.ident_string(),
            ti.track_source.clone().unwrap_or_default(),
            ti.entry_time.map( |t| short_utc_datetime_string( &t)).unwrap_or_default(),
            format!("{alt:.0}")
        ], None);
        Ok( FlightReportOutcome::Accepted)

    } else {
        r.incr( above_key( threshold));
        Ok( FlightReportOutcome::RejectedByReportLogic)
    }
}

fn summarize_gate (r: &mut Report) {
    let threshold = r.options().altitude_threshold_ft;
    let below = r.i( &below_key( threshold));
    let total = below + r.i( &above_key( threshold));

    if total > 0 {
        r.set_f("[D] percent below threshold", 100.0 * below as f64 / total as f64);
    }
}

/* #endregion gate */

/* #region refpoint *********************************************************************************/

fn process_refpoint (r: &mut Report, flight: &Flight)->Result<FlightReportOutcome> {
    let refpt = r.options().reference_point.ok_or_else( || validation_error!("no reference point"))?;
    let max_dist_km = r.options().ref_distance_km;

    let Some(track) = flight.preferred_track( r.preferred_sources()) else {
        r.incr("[C] no usable track");
        return Ok( FlightReportOutcome::RejectedByReportLogic)
    };

    let processed = post_process( track, &r.options().post_process, r.pressure_archive())?;
    let dists = distance_from_origin( &processed.track, &refpt);
    let closest = dists.iter().enumerate()
        .min_by( |(_,a),(_,b)| a.partial_cmp(b).unwrap_or( Ordering::Equal))
        .map( |(i,d)| (i, d.get::<kilometer>()));

    match closest {
        Some((idx,dist_km)) if dist_km <= max_dist_km => {
            let p = &processed.track.points()[idx];
            let k = &processed.kinematics[idx];
            r.debug( &format!("{} closest to reference point at {}", flight.ident_string(), p));

            r.add_to_histogram( p.altitude_ft());
            r.set_headers( &["Flight", "Source", "Time", "Altitude (ft)", "Distance (km)", "Groundspeed (kts)", "Vertical acceleration (fpm/s)"]);
            r.add_row( vec![
                flight.ident_string(),
                processed.track.source().to_string(),
                short_utc_datetime_string( &p.timestamp()),
                format!("{:.0}", p.altitude_ft()),
                format!("{:.2}", dist_km),
                format!("{:.0}", p.groundspeed_kts()),
                format!("{:.1}", k.vertical_acceleration),
            ], None);
            r.incr("[C] passed near reference point");
            Ok( FlightReportOutcome::Accepted)
        }
        _ => {
            r.incr("[C] did not pass near reference point");
            Ok( FlightReportOutcome::RejectedByReportLogic)
        }
    }
}

fn summarize_refpoint (r: &mut Report) {
    if let Some(refpt) = r.options().reference_point {
        r.set_s("[D] reference point", refpt);
    }
    if let Some(stats) = r.histogram().stats() {
        r.set_f("[D] min altitude at reference point", stats.min);
        r.set_f("[D] max altitude at reference point", stats.max);
    }
}

/* #endregion refpoint */
