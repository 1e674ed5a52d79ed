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

use std::{collections::BTreeMap, fmt};
use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};
use lazy_static::lazy_static;
use regex::Regex;

/// the airline part of a flight number. IATA codes have two, ICAO codes three characters
#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum CarrierCode {
    Iata(String),
    Icao(String),
}

impl CarrierCode {
    pub fn as_str (&self)->&str {
        match self {
            CarrierCode::Iata(s) => s.as_str(),
            CarrierCode::Icao(s) => s.as_str(),
        }
    }
}

#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct FlightNumber {
    pub carrier: CarrierCode,
    pub number: u32,
}

impl FlightNumber {
    pub fn iata (carrier: impl ToString, number: u32)->Self {
        FlightNumber { carrier: CarrierCode::Iata( carrier.to_string()), number }
    }

    pub fn icao (carrier: impl ToString, number: u32)->Self {
        FlightNumber { carrier: CarrierCode::Icao( carrier.to_string()), number }
    }

    pub fn carrier_code (&self)->&str { self.carrier.as_str() }
    pub fn is_icao (&self)->bool { matches!( self.carrier, CarrierCode::Icao(_)) }
    pub fn is_iata (&self)->bool { matches!( self.carrier, CarrierCode::Iata(_)) }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}{}", self.carrier.as_str(), self.number)
    }
}

lazy_static! {
    static ref IATA_FLIGHT_RE: Regex = Regex::new( r"^([A-Z][0-9A-Z])([0-9]{1,4})$").unwrap();
}

/// try to extract an IATA flight number (e.g. "AA353") from a raw callsign. ICAO callsigns ("AAL353"),
/// registrations and everything else yields None - callers then have to use the raw callsign as identifier
pub fn parse_callsign (raw: &str)->Option<FlightNumber> {
    let caps = IATA_FLIGHT_RE.captures( raw.trim())?;
    let number = caps[2].parse::<u32>().ok()?;
    Some( FlightNumber::iata( &caps[1], number))
}

/// published flight plan data we might know for scheduled flights
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct Schedule {
    pub planned_departure: Option<DateTime<Utc>>,
    pub planned_arrival: Option<DateTime<Utc>>,
    pub origin: String,       // airport codes, might be empty
    pub destination: String,
}

impl Schedule {
    pub fn new (origin: impl ToString, destination: impl ToString)->Self {
        Schedule { origin: origin.to_string(), destination: destination.to_string(), ..Default::default() }
    }
}

/// how a flight is identified. The identity is set when the flight is created, the only
/// subsequent change is adding keys of other systems (e.g. "FAA", "fr24")
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct Identity {
    icao_id: Option<String>,   // transponder hex id
    callsign: String,          // raw, as transmitted
    flight_number: Option<FlightNumber>,
    foreign_keys: BTreeMap<String,String>,
}

impl Identity {
    /// create identity and derive the flight number from the callsign if it is an IATA flight
    pub fn new (icao_id: Option<String>, callsign: impl ToString)->Self {
        let callsign = callsign.to_string().trim().to_string();
        let flight_number = parse_callsign( &callsign);
        let icao_id = icao_id.map( |s| s.trim().to_string()).filter( |s| !s.is_empty());
        Identity { icao_id, callsign, flight_number, foreign_keys: BTreeMap::new() }
    }

    /// set an explicitly known flight number (e.g. from schedule data). ICAO numbers win over IATA numbers
    pub fn with_flight_number (mut self, fnum: FlightNumber)->Self {
        let keep_existing = fnum.is_iata() && self.flight_number.as_ref().map( |f| f.is_icao()).unwrap_or(false);
        if !keep_existing {
            self.flight_number = Some(fnum);
        }
        self
    }

    pub fn with_foreign_key (mut self, system: impl ToString, key: impl ToString)->Self {
        self.add_foreign_key( system, key);
        self
    }

    pub fn add_foreign_key (&mut self, system: impl ToString, key: impl ToString) {
        self.foreign_keys.insert( system.to_string(), key.to_string());
    }

    pub fn icao_id (&self)->Option<&str> { self.icao_id.as_deref() }
    pub fn callsign (&self)->&str { self.callsign.as_str() }
    pub fn flight_number (&self)->Option<&FlightNumber> { self.flight_number.as_ref() }
    pub fn foreign_key (&self, system: &str)->Option<&str> { self.foreign_keys.get(system).map( |s| s.as_str()) }
    pub fn foreign_keys (&self)->&BTreeMap<String,String> { &self.foreign_keys }

    /// the human readable identifier: flight number if we have one, raw callsign otherwise, plus hex id if known
    pub fn ident_string (&self)->String {
        let mut s = match &self.flight_number {
            Some(fnum) => fnum.to_string(),
            None => self.callsign.clone()
        };
        if let Some(id) = &self.icao_id {
            s.push_str( &format!(" [{id}]"));
        }
        s
    }

    /// all identification data, for diagnostics
    pub fn full_string (&self)->String {
        let (iata,icao,num) = match &self.flight_number {
            Some(FlightNumber{ carrier: CarrierCode::Iata(c), number }) => (c.as_str(), "", *number),
            Some(FlightNumber{ carrier: CarrierCode::Icao(c), number }) => ("", c.as_str(), *number),
            None => ("", "", 0)
        };
        let mut s = format!("{{{iata}|{icao}}}{num} [{}] c:{}", self.icao_id.as_deref().unwrap_or(""), self.callsign);
        for (k,v) in &self.foreign_keys {
            s.push_str( &format!(" {k}:{v}"));
        }
        s
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}", self.ident_string())
    }
}
