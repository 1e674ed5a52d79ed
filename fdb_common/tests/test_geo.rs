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

use fdb_common::angle::*;
use fdb_common::geo::*;
use fdb_common::geo_constants::KM_PER_DEGREE;

// run with "cargo test test_haversine -- --nocapture"

#[test]
fn test_haversine() {
    let sfo = GeoPoint::from_lat_lon_degrees( 37.6189, -122.3750);
    let north = GeoPoint::from_lat_lon_degrees( 37.6189 + 10.0/KM_PER_DEGREE, -122.3750);

    let d = sfo.haversine_distance_km( &north);
    println!("distance along meridian: {d} km");
    assert!( (d - 10.0).abs() < 1e-6);
    assert_eq!( sfo.haversine_distance_km(&sfo), 0.0);
}

#[test]
fn test_interpolate() {
    let a = GeoPoint::from_lat_lon_degrees( 37.0, -122.0);
    let b = GeoPoint::from_lat_lon_degrees( 38.0, -121.0);
    let m = a.interpolate( &b, 0.5);
    assert!( (m.latitude_degrees() - 37.5).abs() < 1e-9);
    assert!( (m.longitude_degrees() + 121.5).abs() < 1e-9);
    assert_eq!( a.interpolate( &b, 0.0), a);
    assert_eq!( a.interpolate( &b, 1.0), b);

    // across the antimeridian we take the short way
    let w = GeoPoint::from_lat_lon_degrees( 0.0, 179.0);
    let e = GeoPoint::from_lat_lon_degrees( 0.0, -179.0);
    let m = w.interpolate( &e, 0.5);
    assert!( (m.longitude_degrees().abs() - 180.0).abs() < 1e-9);
}

#[test]
fn test_local_plane() {
    let origin = GeoPoint::from_lat_lon_degrees( 60.0, 10.0);
    let plane = LocalPlane::new( origin);

    // at 60deg one degree of longitude is half a degree of latitude
    let p = GeoPoint::from_lat_lon_degrees( 60.0, 11.0);
    let c = plane.project( &p);
    assert!( (c.x - KM_PER_DEGREE * 0.5).abs() < 1e-6);
    assert!( c.y.abs() < 1e-9);

    let q = GeoPoint::from_lat_lon_degrees( 60.3, 9.4);
    let back = plane.unproject( &plane.project( &q));
    assert!( (back.latitude_degrees() - 60.3).abs() < 1e-9);
    assert!( (back.longitude_degrees() - 9.4).abs() < 1e-9);
}

#[test]
fn test_serde() {
    let input = r#"{ "latitude": 37.0, "longitude": -122.0 }"#;
    let p: GeoPoint = serde_json::from_str( input).unwrap();
    assert_eq!( p, GeoPoint::from_lat_lon_degrees( 37.0, -122.0));

    let p: GeoPoint = ron::from_str( "(lat: 37.5, lon: -122.25)").unwrap();
    assert_eq!( p.latitude_degrees(), 37.5);

    let s = serde_json::to_string( &p).unwrap();
    println!("serialized GeoPoint: '{}'", s);
    assert_eq!( s, r#"{"lat":37.5,"lon":-122.25}"#);
}

#[test]
fn test_heading_delta() {
    assert_eq!( heading_delta( 350.0, 10.0), 20.0);
    assert_eq!( heading_delta( 10.0, 350.0), -20.0);

    let h1 = Angle360::from_degrees( 350.0);
    let h2 = Angle360::from_degrees( 10.0);
    let h = h1.interpolate( &h2, 0.5);
    assert!( h.degrees().abs() < 1e-9 || (h.degrees() - 360.0).abs() < 1e-9);
    assert_eq!( Angle360::from_degrees( -90.0).degrees(), 270.0);
}
