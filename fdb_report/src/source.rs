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

use fdb_common::datetime::TimeRange;
use fdb_track::Flight;
use crate::errors::{FdbReportError,Result};

pub type FlightIter<'a> = Box<dyn Iterator<Item=Result<Flight>> + 'a>;

/// where reports get their flights from. Implementations are expected to return flights that
/// overlap `range` and carry all of `tags`, in ascending order of their start time. Errors of the
/// returned iterator are considered to be transient IO errors that abort the report run
pub trait FlightSource {
    fn iterate<'a> (&'a self, range: &TimeRange, tags: &[String])->Result<FlightIter<'a>>;

    /// the latest flight that matches `identifier` (hex id, callsign or flight number)
    fn lookup_most_recent (&self, identifier: &str)->Result<Option<Flight>>;

    /// like `lookup_most_recent` but an unknown identifier is an error
    fn get_most_recent (&self, identifier: &str)->Result<Flight> {
        self.lookup_most_recent( identifier)?
            .ok_or_else( || FdbReportError::NotFoundError( format!("no flight for identifier '{}'", identifier)))
    }
}

/// a FlightSource for flights that are already in memory
#[derive(Debug,Clone,Default)]
pub struct VecFlightSource {
    flights: Vec<Flight>,
}

impl VecFlightSource {
    pub fn new (mut flights: Vec<Flight>)->Self {
        flights.sort_by_key( |f| f.times().map( |(start,_)| start));
        VecFlightSource { flights }
    }

    pub fn len (&self)->usize { self.flights.len() }
    pub fn is_empty (&self)->bool { self.flights.is_empty() }
}

fn matches_identifier (f: &Flight, identifier: &str)->bool {
    let id = f.identity();
    id.icao_id().map( |s| s.eq_ignore_ascii_case( identifier)).unwrap_or(false)
        || id.callsign().eq_ignore_ascii_case( identifier)
        || id.flight_number().map( |n| n.to_string().eq_ignore_ascii_case( identifier)).unwrap_or(false)
}

impl FlightSource for VecFlightSource {
    fn iterate<'a> (&'a self, range: &TimeRange, tags: &[String])->Result<FlightIter<'a>> {
        let range = *range;
        let tags = tags.to_vec();

        Ok( Box::new( self.flights.iter()
            .filter( move |f| {
                f.has_all_tags( &tags) && f.times().map( |(start,end)| range.overlaps( &start, &end)).unwrap_or(false)
            })
            .map( |f| Ok::<Flight,FdbReportError>(f.clone()))
        ))
    }

    fn lookup_most_recent (&self, identifier: &str)->Result<Option<Flight>> {
        Ok( self.flights.iter().rev().find( |f| matches_identifier( f, identifier)).cloned())
    }
}
