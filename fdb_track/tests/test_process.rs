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

use std::time::Duration;
use chrono::{DateTime,TimeDelta,TimeZone,Utc};
use uom::si::length::meter;
use fdb_common::{datetime::{secs,TimeRange}, geo::GeoPoint};
use fdb_track::{
    Track, Trackpoint,
    errors::FdbTrackError,
    process::*,
    refdata::{BarometricSource,PressureArchive,PressureReading}
};

fn t0 ()->DateTime<Utc> {
    Utc.with_ymd_and_hms( 2024, 5, 1, 12, 0, 0).unwrap()
}

fn at (secs: i64)->DateTime<Utc> { t0() + TimeDelta::seconds(secs) }

fn irregular_track (source: &str)->Track {
    let samples = [
        (0, 37.50, 2000.0, 150.0, 350.0),
        (7, 37.51, 2300.0, 155.0, 355.0),
        (20, 37.53, 2900.0, 160.0, 5.0),
        (31, 37.55, 3400.0, 170.0, 10.0),
        (50, 37.58, 4100.0, 180.0, 12.0),
        (61, 37.60, 4500.0, 185.0, 15.0),
    ];
    let points = samples.iter().map( |(s,lat,alt,spd,hdg)| {
        Trackpoint::new( source, at(*s), GeoPoint::from_lat_lon_degrees( *lat, -122.0), *alt)
            .with_groundspeed_kts( *spd)
            .with_heading_degrees( *hdg)
    }).collect();
    Track::from_unsorted( source, points)
}

#[test]
fn test_resample() {
    let track = irregular_track("ADSB");

    for mode in [ResampleMode::Linear, ResampleMode::Nearest] {
        let r1 = resample( &track, secs(15), mode);
        let times: Vec<DateTime<Utc>> = r1.points().iter().map( |p| p.timestamp()).collect();
        assert_eq!( times, vec![at(0), at(15), at(30), at(45), at(60), at(61)]);

        let r2 = resample( &r1, secs(15), mode);
        assert_eq!( r1, r2);
    }

    let r = resample( &track, secs(15), ResampleMode::Linear);
    let p15 = &r.points()[1]; // between 7s and 20s
    let expected = 2300.0 + (2900.0 - 2300.0) * 8.0 / 13.0;
    assert!( (p15.altitude_ft() - expected).abs() < 1e-6);
    assert!( p15.heading_degrees() >= 355.0 || p15.heading_degrees() <= 5.0); // shortest arc across north

    let r = resample( &track, secs(15), ResampleMode::Nearest);
    assert!( (r.points()[1].altitude_ft() - 2900.0).abs() < 1e-6); // 20s is closer to 15s than 7s
}

#[test]
fn test_resample_short_tracks() {
    let empty = Track::new("ADSB");
    assert_eq!( resample( &empty, secs(15), ResampleMode::Linear), empty);

    let single = Track::from_unsorted( "ADSB", vec![ Trackpoint::new( "ADSB", t0(), GeoPoint::from_lat_lon_degrees( 37.0, -122.0), 1000.0)]);
    assert_eq!( resample( &single, secs(15), ResampleMode::Linear), single);
}

#[test]
fn test_kinematics() {
    let points = [(0, 100.0, 350.0), (10, 110.0, 10.0), (20, 130.0, 10.0)].iter().map( |(s,spd,hdg)| {
        Trackpoint::new( "ADSB", at(*s), GeoPoint::from_lat_lon_degrees( 37.0, -122.0), 1000.0)
            .with_groundspeed_kts( *spd)
            .with_heading_degrees( *hdg)
    }).collect();
    let track = Track::from_unsorted( "ADSB", points);

    let raw = kinematics( &track, secs(0));
    let accel: Vec<f64> = raw.iter().map( |k| k.ground_acceleration).collect();
    for (a,e) in accel.iter().zip( [1.0, 1.0, 2.0]) {
        assert!( (a - e).abs() < 1e-9);
    }
    assert!( (raw[1].turn_rate - 2.0).abs() < 1e-9);
    assert_eq!( raw[0], raw[1]);

    let smoothed = kinematics( &track, secs(20));
    assert!( (smoothed[0].ground_acceleration - 1.0).abs() < 1e-9);
    assert!( (smoothed[1].ground_acceleration - 4.0/3.0).abs() < 1e-9);
    assert!( (smoothed[2].ground_acceleration - 1.5).abs() < 1e-9);
}

#[test]
fn test_adjust_altitudes() {
    let archive = PressureArchive::from_readings( "KSFO", vec![
        PressureReading::new( "KSFO", at(10), 29.72),
        PressureReading::new( "KSFO", at(-3600), 30.12),
    ]);
    let policy = AltitudeCorrectionPolicy::default();

    let track = Track::from_unsorted( "ADSB", vec![
        Trackpoint::new( "ADSB", at(0), GeoPoint::from_lat_lon_degrees( 37.0, -122.0), 1000.0),
        Trackpoint::new( "ADSB", at(20), GeoPoint::from_lat_lon_degrees( 37.01, -122.0), 1000.0),
    ]);
    let adjusted = adjust_altitudes( &track, Some(&archive), &policy).unwrap();
    assert!( (adjusted.points()[0].altitude_ft() - 1200.0).abs() < 1e-6);
    assert!( (adjusted.points()[1].altitude_ft() - 800.0).abs() < 1e-6);

    // no archive, or a source that is already corrected
    assert_eq!( adjust_altitudes( &track, None, &policy).unwrap(), track);
    let foia = Track::from_unsorted( "FOIA", track.points().to_vec());
    assert_eq!( adjust_altitudes( &foia, Some(&archive), &policy).unwrap(), foia);

    // no reading before the first point
    let late = PressureArchive::from_readings( "KSFO", vec![ PressureReading::new( "KSFO", at(10), 29.72)]);
    match adjust_altitudes( &track, Some(&late), &policy) {
        Err( FdbTrackError::MissingReferenceData(msg)) => println!("expected error: {msg}"),
        other => panic!("unexpected result: {other:?}")
    }
}

#[test]
fn test_distances() {
    let track = irregular_track("ADSB");

    let along = distance_along_path( &track);
    assert_eq!( along[0].get::<meter>(), 0.0);
    assert!( along.windows(2).all( |w| w[1] >= w[0]));

    let remaining = distance_remaining_along_path( &track);
    assert_eq!( remaining.last().unwrap().get::<meter>(), 0.0);
    assert!( remaining.windows(2).all( |w| w[1] <= w[0]));
    assert!( (remaining[0].get::<meter>() - along.last().unwrap().get::<meter>()).abs() < 1e-6);

    let origin = GeoPoint::from_lat_lon_degrees( 37.50, -122.0);
    let from_origin = distance_from_origin( &track, &origin);
    assert_eq!( from_origin[0].get::<meter>(), 0.0);
    assert_eq!( from_origin.len(), track.len());
}

#[test]
fn test_post_process() {
    let params: PostProcessParams = ron::from_str( r#"( sample_interval: "15s", averaging_window: "30s" )"#).unwrap();
    assert_eq!( params.sample_interval, secs(15));
    assert_eq!( params.resample_mode, ResampleMode::Linear);
    assert!( params.altitude_policy.is_corrected("FOIA"));

    let processed = post_process( &irregular_track("ADSB"), &params, None).unwrap();
    assert_eq!( processed.track.len(), 6);
    assert_eq!( processed.kinematics.len(), 6);
}

#[test]
fn test_huge_intervals() {
    let track = irregular_track("ADSB");
    let huge = Duration::from_secs( u64::MAX / 2);

    let r = resample( &track, huge, ResampleMode::Linear);
    let times: Vec<DateTime<Utc>> = r.points().iter().map( |p| p.timestamp()).collect();
    assert_eq!( times, vec![at(0), at(61)]);

    // the window covers the whole track for every point
    let raw = kinematics( &track, secs(0));
    let ks = kinematics( &track, huge);
    assert_eq!( ks.len(), track.len());
    let mean = raw.iter().map( |k| k.ground_acceleration).sum::<f64>() / raw.len() as f64;
    for k in &ks {
        assert!( (k.ground_acceleration - mean).abs() < 1e-9);
    }
}

#[test]
fn test_post_process_params_check() {
    assert!( PostProcessParams::default().check().is_ok());

    let params: PostProcessParams = ron::from_str( r#"( sample_interval: "0s" )"#).unwrap();
    assert!( params.check().is_err());

    let params: PostProcessParams = ron::from_str( r#"( sample_interval: "48h" )"#).unwrap();
    assert!( params.check().is_err());

    let params = PostProcessParams { averaging_window: Duration::from_secs( u64::MAX / 2), ..PostProcessParams::default() };
    assert!( params.check().is_err());
}

/// returns its readings unordered, the way an archive query might
struct UnorderedStation {
    readings: Vec<PressureReading>,
}

impl BarometricSource for UnorderedStation {
    fn lookup (&self, station: &str, range: &TimeRange)->fdb_track::errors::Result<Vec<PressureReading>> {
        Ok( self.readings.iter()
            .filter( |r| r.station == station && range.contains( &r.timestamp))
            .cloned()
            .collect())
    }
}

#[test]
fn test_load_pressure_archive() {
    let source = UnorderedStation { readings: vec![
        PressureReading::new( "KSFO", at(600), 29.80),
        PressureReading::new( "KSFO", at(-600), 30.02),
        PressureReading::new( "KOAK", at(0), 29.50),
        PressureReading::new( "KSFO", at(0), 29.92),
    ]};
    let range = TimeRange::new( at(-3600), at(3600));

    let archive = PressureArchive::load( &source, "KSFO", &range).unwrap();
    assert_eq!( archive.station(), "KSFO");
    assert_eq!( archive.len(), 3);

    assert!( archive.nearest_prior( &at(-601)).is_none());
    assert_eq!( archive.nearest_prior( &at(-600)).unwrap().altimeter_inhg, 30.02);
    assert_eq!( archive.nearest_prior( &at(300)).unwrap().altimeter_inhg, 29.92);
    assert_eq!( archive.nearest_prior( &at(7200)).unwrap().altimeter_inhg, 29.80);
}
