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

use fdb_common::histogram::Histogram;

#[test]
fn test_stats() {
    let mut h = Histogram::new( 10, 0.0, 100.0);
    assert!( h.stats().is_none());

    for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] { h.add(v) }

    let stats = h.stats().unwrap();
    println!("{h} -> {stats:?}");
    assert_eq!( stats.n, 8);
    assert!( (stats.mean - 5.0).abs() < 1e-12);
    assert!( (stats.stddev - 2.0).abs() < 1e-12);
    assert_eq!( stats.min, 2.0);
    assert_eq!( stats.max, 9.0);
}

#[test]
fn test_buckets() {
    let mut h = Histogram::new( 4, 0.0, 40.0);
    h.add( -5.0);  // clamped into first bucket
    h.add( 15.0);
    h.add( 39.9);
    h.add( 100.0); // clamped into last bucket
    h.add( f64::NAN); // ignored

    assert_eq!( h.counts(), &[1, 1, 0, 2]);
    assert_eq!( h.len(), 4);
    assert_eq!( h.bucket_start(2), 20.0);
}
