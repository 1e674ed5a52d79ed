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

use std::collections::HashSet;
use serde::{Serialize,Deserialize};
use tracing::debug;

use crate::{
    errors::{FdbTrackError,Result,ingestion_error},
    flight::Flight, track::Track, trackpoint::Trackpoint
};

/// a row of a batch import (e.g. a CSV line) that contributes one trackpoint to a flight
pub trait BatchRecord {
    /// rows of the same flight share this key
    fn group_key (&self)->&str;

    fn trackpoint (&self)->Trackpoint;

    /// the source name of the track the rows are collected into
    fn track_source (&self)->&str;

    /// flight without tracks, using the identity data of this (first) row
    fn new_flight (&self)->Flight;
}

/// how to treat grouping keys that show up again after their group was flushed
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum GroupingMode {
    /// every contiguous run of rows becomes a flight, recurring keys produce additional flights
    #[default]
    Lenient,
    /// a recurring key is an ingestion error
    Strict,
}

/// iterator adapter that turns a stream of batch rows into flights. Consecutive rows with the same
/// group key are accumulated and turned into a flight once the key changes or the input ends
pub struct FlightGrouper<I,R> where I: Iterator<Item=Result<R>>, R: BatchRecord {
    rows: I,
    mode: GroupingMode,
    pending: Vec<R>,
    seen: HashSet<String>, // strict mode only
    n_rows: usize,
    deferred_error: Option<FdbTrackError>, // reported after the flight that was flushed before it
    done: bool,
}

impl<I,R> FlightGrouper<I,R> where I: Iterator<Item=Result<R>>, R: BatchRecord {
    pub fn new (rows: I, mode: GroupingMode)->Self {
        FlightGrouper { rows, mode, pending: Vec::new(), seen: HashSet::new(), n_rows: 0, deferred_error: None, done: false }
    }

    fn flush (&mut self)->Option<Flight> {
        if self.pending.is_empty() { return None }

        let rows = std::mem::take( &mut self.pending);
        let first = &rows[0];
        let points: Vec<Trackpoint> = rows.iter().map( |r| r.trackpoint()).collect();
        let track = Track::from_unsorted( first.track_source(), points);

        debug!("grouped {} rows [{}..{}] into flight {}", rows.len(), self.n_rows - rows.len(), self.n_rows, first.group_key());
        let mut flight = first.new_flight();
        flight.add_track( track);
        Some(flight)
    }

    /// add a row that starts a new group. Keys are only remembered in strict mode, lenient grouping
    /// does not retain anything beyond the current group
    fn start_group (&mut self, row: R)->Result<()> {
        if self.mode == GroupingMode::Strict {
            let key = row.group_key();
            if self.seen.contains( key) {
                return Err( ingestion_error!("grouping key {} recurs after row {}", key, self.n_rows))
            }
            self.seen.insert( key.to_string());
        }
        self.pending.push( row);
        Ok(())
    }

    /// number of group keys retained for recurrence checks
    pub fn n_tracked_keys (&self)->usize { self.seen.len() }
}

impl<I,R> Iterator for FlightGrouper<I,R> where I: Iterator<Item=Result<R>>, R: BatchRecord {
    type Item = Result<Flight>;

    fn next (&mut self)->Option<Self::Item> {
        if self.done { return None }
        if let Some(e) = self.deferred_error.take() {
            self.done = true;
            return Some(Err(e))
        }

        loop {
            match self.rows.next() {
                Some(Ok(row)) => {
                    self.n_rows += 1;
                    let same_group = self.pending.last().map( |r| r.group_key() == row.group_key()).unwrap_or(false);

                    if same_group {
                        self.pending.push( row);
                    } else {
                        let flushed = self.flush();
                        if let Err(e) = self.start_group( row) {
                            match flushed {
                                Some(flight) => {
                                    self.deferred_error = Some(e);
                                    return Some(Ok(flight))
                                }
                                None => {
                                    self.done = true;
                                    return Some(Err(e))
                                }
                            }
                        }
                        if let Some(flight) = flushed {
                            return Some(Ok(flight))
                        }
                    }
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e))
                }
                None => {
                    self.done = true;
                    return self.flush().map( Ok)
                }
            }
        }
    }
}
