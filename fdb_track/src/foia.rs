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

//! decoding of the FAA track table CSV files we got through FOIA requests. Each row is one radar
//! track point, rows of one flight are contiguous:
//! ```text
//! AIRCRAFT_ID,FLIGHT_INDEX,TRACK_INDEX,SOURCE_FACILITY,BEACON_CODE,DEP_APRT,ARR_APRT,ACFT_TYPE,LATITUDE,LONGITUDE,ALTITUDEx100ft,TRACK_POINT_DATE_UTC,TRACK_POINT_TIME_UTC
//! VOI902,2015020103105708,20150201065937NCT1024VOI902,NCT,1024,MMGL,OAK,A320,37.69849,-122.21049,1,20150201,07:24:04
//! ```

use std::io;
use chrono::{DateTime,NaiveDateTime,Utc};
use csv::StringRecord;
use tracing::warn;

use fdb_common::geo::GeoPoint;
use crate::{
    errors::{FdbTrackError,Result,ingestion_error,parse_error},
    flight::{Flight,FOIA_SOURCE}, grouping::{BatchRecord,FlightGrouper,GroupingMode},
    identity::{Identity,Schedule}, refdata::Airframe, trackpoint::Trackpoint
};

pub const N_FOIA_COLUMNS: usize = 13;

/// the data source name of FOIA trackpoints (the track itself is stored as FOIA_SOURCE)
pub const FOIA_POINT_SOURCE: &str = "FAA-FOIA";

/// foreign key system name for the FAA track index
pub const FAA_KEY: &str = "FAA";

#[derive(Debug,Clone,PartialEq)]
pub struct FoiaRow {
    pub aircraft_id: String,
    pub flight_index: String,
    pub track_index: String,
    pub source_facility: String,
    pub beacon_code: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub aircraft_type: String,
    pub position: GeoPoint,
    pub altitude_ft: f64,
    pub timestamp: DateTime<Utc>,
}

impl FoiaRow {
    pub fn from_record (rec: &StringRecord)->Result<Self> {
        if rec.len() != N_FOIA_COLUMNS {
            return Err( ingestion_error!("expected {} columns, got {} in {:?}", N_FOIA_COLUMNS, rec.len(), rec))
        }
        let field = |i: usize| rec.get(i).unwrap_or("").trim();

        let lat: f64 = field(8).parse().map_err( |_| ingestion_error!("invalid latitude '{}'", field(8)))?;
        let lon: f64 = field(9).parse().map_err( |_| ingestion_error!("invalid longitude '{}'", field(9)))?;

        // a missing altitude does not invalidate the position
        let altitude_ft = match parse_altitude_ft( field(10)) {
            Ok(alt) => alt,
            Err(e) => {
                warn!("{} for {}, using 0", e, field(0));
                0.0
            }
        };

        let dt_str = format!("{} {}", field(11), field(12));
        let timestamp = NaiveDateTime::parse_from_str( &dt_str, "%Y%m%d %H:%M:%S")
            .map_err( |_| ingestion_error!("invalid timestamp '{}'", dt_str))?
            .and_utc();

        Ok( FoiaRow {
            aircraft_id: field(0).to_string(),
            flight_index: field(1).to_string(),
            track_index: field(2).to_string(),
            source_facility: field(3).to_string(),
            beacon_code: field(4).to_string(),
            departure_airport: field(5).to_string(),
            arrival_airport: field(6).to_string(),
            aircraft_type: field(7).to_string(),
            position: GeoPoint::from_lat_lon_degrees( lat, lon),
            altitude_ft,
            timestamp,
        })
    }
}

/// FOIA altitudes are given in flight levels (hundreds of feet)
pub fn parse_altitude_ft (s: &str)->Result<f64> {
    let fl: f64 = s.trim().parse().map_err( |_| parse_error!("invalid altitude '{}'", s))?;
    if fl.is_finite() { Ok( fl * 100.0) } else { Err( parse_error!("invalid altitude '{}'", s)) }
}

impl BatchRecord for FoiaRow {
    fn group_key (&self)->&str { self.aircraft_id.as_str() }

    fn trackpoint (&self)->Trackpoint {
        let tp = Trackpoint::new( FOIA_POINT_SOURCE, self.timestamp, self.position, self.altitude_ft);
        if self.beacon_code.is_empty() { tp } else { tp.with_squawk( &self.beacon_code) }
    }

    fn track_source (&self)->&str { FOIA_SOURCE }

    fn new_flight (&self)->Flight {
        let identity = Identity::new( None, &self.aircraft_id).with_foreign_key( FAA_KEY, &self.track_index);
        let mut flight = Flight::new( identity)
            .with_tag( FOIA_SOURCE)
            .with_schedule( Schedule::new( &self.departure_airport, &self.arrival_airport));
        if !self.aircraft_type.is_empty() {
            flight.set_airframe( Airframe::new( "", &self.aircraft_type));
        }
        flight
    }
}

/// decode the rows of a FOIA CSV source. The header row is skipped
pub fn read_foia_rows<R: io::Read> (rdr: R)->impl Iterator<Item=Result<FoiaRow>> {
    let csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // we check the column count ourselves to get a meaningful error
        .from_reader( rdr);

    csv_reader.into_records().map( |res| {
        let rec = res?;
        FoiaRow::from_record( &rec)
    })
}

/// decode a FOIA CSV source into flights
pub fn read_foia_flights<R: io::Read> (rdr: R, mode: GroupingMode)->FlightGrouper<impl Iterator<Item=Result<FoiaRow>>,FoiaRow> {
    FlightGrouper::new( read_foia_rows( rdr), mode)
}
