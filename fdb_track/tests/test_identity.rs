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

use fdb_track::{CarrierCode, FlightNumber, Identity, parse_callsign};

#[test]
fn test_parse_callsign() {
    assert_eq!( parse_callsign("AAL353"), None);

    let fnum = parse_callsign("AA353").unwrap();
    assert_eq!( fnum.carrier, CarrierCode::Iata("AA".into()));
    assert_eq!( fnum.number, 353);
    assert_eq!( fnum.to_string(), "AA353");

    assert_eq!( parse_callsign("B61"), Some( FlightNumber::iata( "B6", 1)));
    assert_eq!( parse_callsign("UA12345"), None);
    assert_eq!( parse_callsign("N123AB"), None);
    assert_eq!( parse_callsign(""), None);
}

#[test]
fn test_ident_string() {
    let id = Identity::new( Some("a1b2c3".into()), "AAL353");
    assert!( id.flight_number().is_none());
    assert_eq!( id.ident_string(), "AAL353 [a1b2c3]");

    let id = Identity::new( None, "UA123");
    assert_eq!( id.ident_string(), "UA123");

    // ICAO flight numbers take precedence
    let id = Identity::new( Some("a1b2c3".into()), "UA123")
        .with_flight_number( FlightNumber::icao( "UAL", 123))
        .with_flight_number( FlightNumber::iata( "UA", 123));
    assert_eq!( id.ident_string(), "UAL123 [a1b2c3]");
    println!("{}", id.full_string());
}

#[test]
fn test_foreign_keys() {
    let mut id = Identity::new( None, "VOI902").with_foreign_key( "FAA", "20150201065937NCT1024VOI902");
    id.add_foreign_key( "fr24", "9c1a2b3");
    assert_eq!( id.foreign_key("FAA"), Some("20150201065937NCT1024VOI902"));
    assert_eq!( id.foreign_keys().len(), 2);
    assert!( id.full_string().contains("fr24:9c1a2b3"));
}
