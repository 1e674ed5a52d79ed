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

use std::{
    collections::BTreeMap, fmt, str::FromStr,
    sync::{Arc, atomic::{AtomicBool,Ordering}}
};
use serde::{Serialize,Deserialize};
use tracing::{debug,info,warn};

use fdb_common::histogram::Histogram;
use fdb_track::{
    Flight, GeoRestrictor, TrackIntersection,
    flight::ADSB_SOURCE,
    refdata::{AirframeRegistry,PressureArchive,WaypointTable}
};
use crate::{
    errors::{FdbReportError,Result,state_error},
    kinds::{ReportKind,ReportLogic},
    options::{ReportLogLevel,ReportOptions},
    source::FlightSource
};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum FlightReportOutcome {
    Accepted,
    RejectedByGeoRestriction,
    RejectedByReportLogic,
}

/// the lifecycle of a report. Flights can be processed until the report is summarized
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ReportState {
    Created,
    Processing,
    Summarized,
}

#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct OutcomeTally {
    pub accepted: usize,
    pub rejected_by_geo_restriction: usize,
    pub rejected_by_report_logic: usize,
}

impl OutcomeTally {
    fn add (&mut self, outcome: FlightReportOutcome) {
        match outcome {
            FlightReportOutcome::Accepted => self.accepted += 1,
            FlightReportOutcome::RejectedByGeoRestriction => self.rejected_by_geo_restriction += 1,
            FlightReportOutcome::RejectedByReportLogic => self.rejected_by_report_logic += 1,
        }
    }

    pub fn total (&self)->usize { self.accepted + self.rejected_by_geo_restriction + self.rejected_by_report_logic }
}

/// an output row. The text columns are always set, the rich variant is for renderers that support markup
#[derive(Debug,Clone,PartialEq)]
pub struct Row {
    pub text: Vec<String>,
    pub rich: Option<Vec<String>>,
}

/// a per-flight processing error. These do not abort the report
#[derive(Debug,Clone,PartialEq)]
pub struct FlightError {
    pub ident: String,
    pub message: String,
}

#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct RunStats {
    pub n_flights: usize,
    pub n_skipped: usize,  // flights that started before the report window
    pub n_errors: usize,
    pub cancelled: bool,
}

/// a report accumulates counters, a histogram and rows over all the flights it processes
pub struct Report {
    options: ReportOptions,
    kind: ReportKind,
    restrictors: Vec<GeoRestrictor>,
    preferred_sources: Vec<String>,

    pressure_archive: Option<PressureArchive>,
    airframes: Option<AirframeRegistry>,

    state: ReportState,
    outcomes: OutcomeTally,
    n_evaluated: usize, // flights handed to the report kind

    i: BTreeMap<String,i64>,
    f: BTreeMap<String,f64>,
    s: BTreeMap<String,String>,
    histogram: Histogram,

    headers: Vec<String>,
    rows: Vec<Row>,
    errors: Vec<FlightError>,
    log: String,
}

impl Report {
    /// create a report for the given options. All configuration errors are detected here
    pub fn new (options: ReportOptions, waypoints: &WaypointTable)->Result<Self> {
        let kind = ReportKind::from_str( &options.name)?;
        options.validate( waypoints)?;
        kind.validate( &options)?;

        let restrictors = options.list_geo_restrictors( waypoints)?;
        let preferred_sources = options.preferred_sources( kind.track_spec());
        let histogram = kind.histogram();

        info!("created {} report {} with {} geo restrictors", kind, options.time_range, restrictors.len());

        Ok( Report {
            options, kind, restrictors, preferred_sources,
            pressure_archive: None,
            airframes: None,
            state: ReportState::Created,
            outcomes: OutcomeTally::default(),
            n_evaluated: 0,
            i: BTreeMap::new(),
            f: BTreeMap::new(),
            s: BTreeMap::new(),
            histogram,
            headers: Vec::new(),
            rows: Vec::new(),
            errors: Vec::new(),
            log: String::new(),
        })
    }

    pub fn with_pressure_archive (mut self, archive: PressureArchive)->Self { self.pressure_archive = Some(archive); self }
    pub fn with_airframe_registry (mut self, airframes: AirframeRegistry)->Self { self.airframes = Some(airframes); self }

    //--- accessors

    pub fn options (&self)->&ReportOptions { &self.options }
    pub fn kind (&self)->ReportKind { self.kind }
    pub fn state (&self)->ReportState { self.state }
    pub fn restrictors (&self)->&[GeoRestrictor] { self.restrictors.as_slice() }
    pub fn preferred_sources (&self)->&[String] { self.preferred_sources.as_slice() }
    pub fn pressure_archive (&self)->Option<&PressureArchive> { self.pressure_archive.as_ref() }
    pub fn outcomes (&self)->&OutcomeTally { &self.outcomes }

    /// number of flights that passed the geo restrictors and were evaluated by the report kind
    pub fn n_evaluated (&self)->usize { self.n_evaluated }

    pub fn ints (&self)->&BTreeMap<String,i64> { &self.i }
    pub fn floats (&self)->&BTreeMap<String,f64> { &self.f }
    pub fn strings (&self)->&BTreeMap<String,String> { &self.s }
    pub fn histogram (&self)->&Histogram { &self.histogram }
    pub fn headers (&self)->&[String] { self.headers.as_slice() }
    pub fn rows (&self)->&[Row] { self.rows.as_slice() }
    pub fn errors (&self)->&[FlightError] { self.errors.as_slice() }
    pub fn log (&self)->&str { self.log.as_str() }

    /// counter value, 0 if it was never incremented
    pub fn i (&self, key: &str)->i64 { self.i.get(key).copied().unwrap_or(0) }

    //--- accumulators (used by report kinds)

    pub fn incr (&mut self, key: impl Into<String>) { self.add_i( key, 1) }
    pub fn add_i (&mut self, key: impl Into<String>, n: i64) { *self.i.entry( key.into()).or_insert(0) += n }
    pub fn add_f (&mut self, key: impl Into<String>, v: f64) { *self.f.entry( key.into()).or_insert(0.0) += v }
    pub fn set_f (&mut self, key: impl Into<String>, v: f64) { self.f.insert( key.into(), v); }
    pub fn set_s (&mut self, key: impl Into<String>, v: impl ToString) { self.s.insert( key.into(), v.to_string()); }
    pub fn add_to_histogram (&mut self, v: f64) { self.histogram.add(v) }

    /// headers can only be set once, subsequent calls are ignored
    pub fn set_headers<S: ToString> (&mut self, headers: &[S]) {
        if self.headers.is_empty() {
            self.headers = headers.iter().map( |h| h.to_string()).collect();
        }
    }

    pub fn add_row (&mut self, text: Vec<String>, rich: Option<Vec<String>>) {
        self.rows.push( Row { text, rich });
    }

    //--- the in-report log

    pub fn log_msg (&mut self, level: ReportLogLevel, msg: &str) {
        match level {
            ReportLogLevel::Debug => debug!("{}", msg),
            ReportLogLevel::Info => info!("{}", msg),
        }
        if level >= self.options.log_level {
            self.log.push_str( msg);
            self.log.push('\n');
        }
    }

    pub fn debug (&mut self, msg: &str) { self.log_msg( ReportLogLevel::Debug, msg) }
    pub fn info (&mut self, msg: &str) { self.log_msg( ReportLogLevel::Info, msg) }

    //--- flight processing

    /// check if the flight satisfies all geo restrictors and return the satisfied intersections.
    /// Restrictors are evaluated in order and evaluation stops at the first one that is not
    /// satisfied, which is the only one we count
    pub fn preprocess (&mut self, flight: &Flight)->(bool,Vec<TrackIntersection>) {
        self.incr("[A] PreProcessed");

        let res = flight.satisfies_geo_restrictions( &self.restrictors, &self.preferred_sources);
        if let Some(idx) = res.failed {
            let key = format!("[B] Eliminated: did not satisfy {}", self.restrictors[idx]);
            if let Some(ti) = &res.failed_intersection {
                self.debug( &format!("{} eliminated: {}", flight.ident_string(), ti));
            }
            self.incr( key);
            return (false, res.intersections)
        }

        self.incr("[B] Satisfied geo restrictions");
        let data_src = if flight.has_track( ADSB_SOURCE) { "ADSB" } else { "non-ADSB" };
        self.incr( format!("[Bz] track source: {data_src}"));

        (true, res.intersections)
    }

    /// run the flight through the geo restrictors and, if it passes, through the report kind logic
    pub fn process (&mut self, flight: &Flight)->Result<FlightReportOutcome> {
        if self.state == ReportState::Summarized {
            return Err( state_error!("cannot process {} after report was summarized", flight.ident_string()))
        }
        self.state = ReportState::Processing;

        let (ok, intersections) = self.preprocess( flight);
        let outcome = if ok {
            let kind = self.kind;
            self.n_evaluated += 1;
            kind.process( self, flight, &intersections)?
        } else {
            FlightReportOutcome::RejectedByGeoRestriction
        };

        self.outcomes.add( outcome);
        Ok(outcome)
    }

    pub fn record_error (&mut self, flight: &Flight, err: FdbReportError) {
        let ident = flight.ident_string();
        warn!("error processing {}: {}", ident, err);
        self.debug( &format!("error processing {ident}: {err}"));
        self.errors.push( FlightError { ident, message: err.to_string() });
    }

    /// let the report kind compute its derived values. This can only be called once
    pub fn summarize (&mut self)->Result<()> {
        if self.state == ReportState::Summarized {
            return Err( state_error!("report already summarized"))
        }
        self.info("**** Stage: finish summary");

        let kind = self.kind;
        kind.summarize( self);
        self.state = ReportState::Summarized;
        Ok(())
    }

    /// process all flights of the report time range we get from `source`, then summarize. Errors of
    /// single flights are recorded and do not stop the run, errors of the source do. Setting `cancel`
    /// stops the run after the current flight, leaving partial results
    pub fn run (&mut self, source: &dyn FlightSource, cancel: Arc<AtomicBool>)->Result<RunStats> {
        if self.state == ReportState::Summarized {
            return Err( state_error!("report already summarized"))
        }

        let range = self.options.time_range;
        let tags = self.options.tags.clone();
        let mut stats = RunStats::default();

        self.info( &format!("**** Stage: processing flights in {range}"));
        let mut flights = source.iterate( &range, &tags)?;
        loop {
            // check before fetching, the source might block
            if cancel.load( Ordering::Relaxed) {
                self.info("**** run cancelled");
                stats.cancelled = true;
                break
            }
            let Some(res) = flights.next() else { break };

            let mut flight = res?;
            stats.n_flights += 1;

            if let Some(airframes) = &self.airframes {
                airframes.enrich( &mut flight);
            }

            // flights that straddle the start of the window belong to the previous window
            if let Some(first) = flight.first_timeslot( &self.preferred_sources, self.options.timeslot) {
                if first < range.start {
                    self.debug( &format!("skipping {}: first timeslot {} precedes report start", flight.ident_string(), first));
                    stats.n_skipped += 1;
                    continue
                }
            }

            if let Err(e) = self.process( &flight) {
                stats.n_errors += 1;
                self.record_error( &flight, e);
            }
        }

        self.summarize()?;
        info!("{} report done: {:?}, {:?}", self.kind, stats, self.outcomes);
        Ok(stats)
    }

    /// sorted snapshot of all counters and the histogram statistics
    pub fn metadata_table (&self)->Vec<(String,String)> {
        let mut all: BTreeMap<String,String> = BTreeMap::new();

        for (k,v) in &self.i { all.insert( k.clone(), format!("{v}")); }
        for (k,v) in &self.f { all.insert( k.clone(), format!("{v:.1}")); }
        for (k,v) in &self.s { all.insert( k.clone(), v.clone()); }

        if let Some(stats) = self.histogram.stats() {
            all.insert( "[Z] stats, N".to_string(), format!("{}", stats.n));
            all.insert( "[Z] stats, Mean".to_string(), format!("{:.0}", stats.mean));
            all.insert( "[Z] stats, Stddev".to_string(), format!("{:.0}", stats.stddev));
        }

        all.into_iter().collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Report({}, {:?}, flights: {}, rows: {}, errors: {})",
                self.options, self.state, self.outcomes.total(), self.rows.len(), self.errors.len())
    }
}
