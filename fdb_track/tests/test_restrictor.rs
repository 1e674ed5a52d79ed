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

use chrono::{DateTime,TimeZone,Utc};
use fdb_common::{geo::GeoPoint, geo_constants::KM_PER_DEGREE};
use fdb_track::{
    Flight, GeoRestrictor, Identity, Rejection, Track, Trackpoint, evaluate,
    intersection::RestrictionResult
};

// run with "cargo test test_window -- --nocapture"

fn ts (h: u32, m: u32, s: u32)->DateTime<Utc> {
    Utc.with_ymd_and_hms( 2024, 5, 1, h, m, s).unwrap()
}

fn track_of (source: &str, pts: &[(f64,f64,f64,DateTime<Utc>)])->Track {
    let points = pts.iter().map( |(lat,lon,alt,t)| Trackpoint::new( source, *t, GeoPoint::from_lat_lon_degrees( *lat, *lon), *alt)).collect();
    Track::from_unsorted( source, points)
}

const SFO_LAT: f64 = 37.6189;
const SFO_LON: f64 = -122.3750;

#[test]
fn test_circle() {
    let gr = GeoRestrictor::circle( GeoPoint::from_lat_lon_degrees( SFO_LAT, SFO_LON), 5.0);

    let at_center = track_of( "ADSB", &[(SFO_LAT, SFO_LON, 1000.0, ts(12,0,0))]);
    let (ok, ti) = evaluate( &at_center, &gr);
    println!("{ti}");
    assert!( ok);
    assert_eq!( ti.entry_time, Some( ts(12,0,0)));
    assert_eq!( ti.track_source.as_deref(), Some("ADSB"));

    let ten_km_north = track_of( "ADSB", &[(SFO_LAT + 10.0/KM_PER_DEGREE, SFO_LON, 1000.0, ts(12,0,0))]);
    let (ok, ti) = evaluate( &ten_km_north, &gr);
    println!("{ti}");
    assert!( !ok);
    assert_eq!( ti.rejection, Some( Rejection::NeverInside));
}

#[test]
fn test_circle_first_entry() {
    let gr = GeoRestrictor::circle( GeoPoint::from_lat_lon_degrees( SFO_LAT, SFO_LON), 5.0);
    let track = track_of( "ADSB", &[
        (SFO_LAT + 0.2, SFO_LON, 6000.0, ts(12,0,0)),
        (SFO_LAT + 0.02, SFO_LON, 3000.0, ts(12,2,0)),
        (SFO_LAT, SFO_LON, 0.0, ts(12,4,0)),
    ]);
    let (ok, ti) = evaluate( &track, &gr);
    assert!( ok);
    assert_eq!( ti.entry_time, Some( ts(12,2,0)));
    assert!( (ti.entry_altitude_ft.unwrap() - 3000.0).abs() < 1e-6);
}

#[test]
fn test_box() {
    let center = GeoPoint::from_lat_lon_degrees( SFO_LAT, SFO_LON);
    let gr = GeoRestrictor::square( center, 10.0);

    let dlon_4km = 4.0 / (KM_PER_DEGREE * SFO_LAT.to_radians().cos());
    assert!( gr.contains_point( &GeoPoint::from_lat_lon_degrees( SFO_LAT + 4.0/KM_PER_DEGREE, SFO_LON + dlon_4km)));
    assert!( !gr.contains_point( &GeoPoint::from_lat_lon_degrees( SFO_LAT + 6.0/KM_PER_DEGREE, SFO_LON)));
    assert!( !gr.contains_point( &GeoPoint::from_lat_lon_degrees( SFO_LAT, SFO_LON - 1.5 * dlon_4km)));
}

fn gate ()->GeoRestrictor {
    GeoRestrictor::window(
        GeoPoint::from_lat_lon_degrees( 37.5, -122.1),
        GeoPoint::from_lat_lon_degrees( 37.5, -121.9),
        5000.0, 15000.0
    )
}

#[test]
fn test_window() {
    // crosses the gate at 3/4 of the segment
    let track = track_of( "ADSB", &[
        (37.4925, -122.0, 4000.0, ts(12,0,0)),
        (37.5025, -122.0, 6000.0, ts(12,1,0)),
    ]);
    let (ok, ti) = evaluate( &track, &gate());
    println!("{ti}");
    assert!( ok);

    let alt = ti.entry_altitude_ft.unwrap();
    assert!( alt > 4000.0 && alt < 6000.0);
    assert!( (alt - 5500.0).abs() < 1e-3);

    let pos = ti.entry_position.unwrap();
    assert!( (pos.latitude_degrees() - 37.5).abs() < 1e-6);

    let dt = (ti.entry_time.unwrap() - ts(12,0,0)).num_milliseconds();
    assert!( (dt - 45_000).abs() <= 1);
}

#[test]
fn test_window_outside_band() {
    let track = track_of( "ADSB", &[
        (37.4925, -122.0, 3000.0, ts(12,0,0)),
        (37.5025, -122.0, 4000.0, ts(12,1,0)),
    ]);
    let (ok, ti) = evaluate( &track, &gate());
    println!("{ti}");
    assert!( !ok);
    assert_eq!( ti.rejection, Some( Rejection::OutsideAltitudeBand));
    assert!( (ti.entry_altitude_ft.unwrap() - 3750.0).abs() < 1e-3);
}

#[test]
fn test_window_not_crossed() {
    // runs parallel to the gate, and a single point track
    let track = track_of( "ADSB", &[
        (37.45, -122.1, 8000.0, ts(12,0,0)),
        (37.45, -121.9, 8000.0, ts(12,1,0)),
    ]);
    let (ok, ti) = evaluate( &track, &gate());
    assert!( !ok);
    assert_eq!( ti.rejection, Some( Rejection::NeverInside));

    let track = track_of( "ADSB", &[(37.5, -122.0, 8000.0, ts(12,0,0))]);
    let (ok, ti) = evaluate( &track, &gate());
    assert!( !ok);
    assert_eq!( ti.rejection, Some( Rejection::TrackTooShort));
}

#[test]
fn test_and_composition() {
    let track = track_of( "ADSB", &[
        (SFO_LAT, SFO_LON, 1000.0, ts(12,0,0)),
        (SFO_LAT + 0.1, SFO_LON, 4000.0, ts(12,5,0)),
    ]);
    let flight = Flight::new( Identity::new( Some("a1b2c3".into()), "UA123")).with_track( track);

    let inside = GeoRestrictor::circle( GeoPoint::from_lat_lon_degrees( SFO_LAT, SFO_LON), 5.0);
    let res = flight.satisfies_geo_restrictions( &[inside.clone(), gate(), inside.clone()], &["FOIA","ADSB"]);
    assert!( !res.satisfied);
    assert_eq!( res.failed, Some(1));
    assert_eq!( res.intersections.len(), 1);
    assert!( res.intersections[0].satisfied);
    let failed = res.failed_intersection.as_ref().unwrap();
    assert!( !failed.satisfied);
    assert_eq!( failed.restrictor, gate());

    // a single unsatisfied restrictor leaves no intersections
    let far = GeoRestrictor::circle( GeoPoint::from_lat_lon_degrees( 40.0, -100.0), 5.0);
    let res = flight.satisfies_geo_restrictions( &[far], &["ADSB"]);
    assert!( !res.satisfied);
    assert!( res.intersections.is_empty());
    assert_eq!( res.failed_intersection.unwrap().rejection, Some( Rejection::NeverInside));

    let res = flight.satisfies_geo_restrictions( &[inside.clone()], &["ADSB"]);
    assert!( res.satisfied);
    assert_eq!( res.failed, None);
    assert!( res.failed_intersection.is_none());
    assert_eq!( res.intersections.len(), 1);

    let (ok, ti) = flight.satisfies_geo_restriction( &inside, &["FOIA","MLAT"]);
    assert!( !ok);
    assert_eq!( ti.rejection, Some( Rejection::NoUsableTrack));
    assert_eq!( ti.track_source, None);
}

#[test]
fn test_config() {
    let input = r#"[
        Circle( center: (lat: 37.6189, lon: -122.375), radius_km: 5.0),
        Window( from: (lat: 37.5, lon: -122.1), to: (lat: 37.5, lon: -121.9), min_altitude_ft: 5000.0, max_altitude_ft: 15000.0)
    ]"#;
    let grs: Vec<GeoRestrictor> = ron::from_str( input).unwrap();
    println!("{grs:?}");
    assert_eq!( grs.len(), 2);
    assert_eq!( grs[1], gate());
    assert!( grs.iter().all( |gr| gr.check().is_ok()));

    assert!( GeoRestrictor::circle( GeoPoint::from_lat_lon_degrees( 0.0, 0.0), 0.0).check().is_err());
    assert_eq!( grs[0].to_string(), "Circle(37.618900,-122.375000) r=5.0km");
}
