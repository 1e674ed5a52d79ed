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

use chrono::{TimeZone,Utc};
use fdb_common::{datetime::{minutes,secs}, geo::GeoPoint};
use fdb_track::{GeoRestrictor, refdata::WaypointTable};
use fdb_report::{ReportKind, ReportLogLevel, ReportOptions, errors::FdbReportError};

const GATE_CONFIG: &str = r#"(
    name: "gate",
    time_range: ( start: "2024-05-01T00:00:00Z", end: "2024-05-01T23:59:59Z"),
    tags: ["FOIA"],
    window_from: Some((lat: 37.5, lon: -122.1)),
    window_to: Some((lat: 37.5, lon: -121.9)),
    window_max_ft: 15000.0,
    waypoints: ["EPICK"],
    radius_km: 2.0,
    altitude_threshold_ft: 5000.0,
    post_process: ( sample_interval: "10s" ),
    log_level: Debug,
)"#;

#[test]
fn test_ron_options() {
    let opts = ReportOptions::from_ron_str( GATE_CONFIG).unwrap();
    println!("{opts}");

    assert_eq!( opts.name, "gate");
    assert_eq!( opts.time_range.start, Utc.with_ymd_and_hms( 2024, 5, 1, 0, 0, 0).unwrap());
    assert_eq!( opts.timeslot, minutes(30));
    assert_eq!( opts.post_process.sample_interval, secs(10));
    assert_eq!( opts.log_level, ReportLogLevel::Debug);
    assert!( opts.track_data_source.is_none());

    let wps = WaypointTable::from_ron_str( r#"{ "EPICK": (lat: 37.3831, lon: -122.0558) }"#).unwrap();
    opts.validate( &wps).unwrap();

    let grs = opts.list_geo_restrictors( &wps).unwrap();
    assert_eq!( grs.len(), 2);
    assert!( grs[0].is_window());
    assert!( matches!( grs[1], GeoRestrictor::Circle{ radius_km, .. } if radius_km == 2.0));

    assert!( matches!( opts.validate( &WaypointTable::new()), Err( FdbReportError::ValidationError(_))));
}

#[test]
fn test_post_process_validation() {
    let wps = WaypointTable::from_ron_str( r#"{ "EPICK": (lat: 37.3831, lon: -122.0558) }"#).unwrap();

    let config = GATE_CONFIG.replace( r#"sample_interval: "10s""#, r#"sample_interval: "0s""#);
    let opts = ReportOptions::from_ron_str( &config).unwrap();
    assert!( matches!( opts.validate( &wps), Err( FdbReportError::ValidationError(_))));

    let config = GATE_CONFIG.replace( r#"sample_interval: "10s""#, r#"sample_interval: "10s", averaging_window: "1000000h""#);
    let opts = ReportOptions::from_ron_str( &config).unwrap();
    assert!( matches!( opts.validate( &wps), Err( FdbReportError::ValidationError(_))));
}

#[test]
fn test_preferred_sources() {
    let mut opts = ReportOptions::from_ron_str( GATE_CONFIG).unwrap();
    assert_eq!( opts.preferred_sources( &["ADSB","FOIA"]), vec!["ADSB","FOIA"]);

    opts.track_data_source = Some("fr24".into());
    assert_eq!( opts.preferred_sources( &["ADSB","FOIA"]), vec!["fr24"]);
}

#[test]
fn test_report_kinds() {
    assert_eq!( "Gate".parse::<ReportKind>().unwrap(), ReportKind::Gate);
    assert_eq!( "refpoint".parse::<ReportKind>().unwrap().tag(), "refpoint");
    assert!( "descent".parse::<ReportKind>().is_err());
}
