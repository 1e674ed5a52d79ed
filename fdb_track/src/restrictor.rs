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

use std::fmt;
use serde::{Serialize,Deserialize};

use fdb_common::geo::{GeoPoint, GeoLine, LocalPlane};

/// a geographic condition a flight has to satisfy. Restrictors are stateless values that can be
/// read from RON configs, e.g. `Circle( center: (lat: 37.6189, lon: -122.375), radius_km: 5.0)`
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum GeoRestrictor {
    /// satisfied by any point within `radius_km` great circle distance from `center`
    Circle { center: GeoPoint, radius_km: f64 },

    /// satisfied by any point within an axis aligned (east/north) rectangle around `center`
    Box { center: GeoPoint, half_width_km: f64, half_height_km: f64 },

    /// satisfied if the track crosses the line segment between `from` and `to` within the altitude
    /// band [min_altitude_ft, max_altitude_ft]. Non-positive limits are not checked
    Window { from: GeoPoint, to: GeoPoint, min_altitude_ft: f64, max_altitude_ft: f64 },
}

impl GeoRestrictor {
    pub fn circle (center: GeoPoint, radius_km: f64)->Self {
        GeoRestrictor::Circle { center, radius_km }
    }

    pub fn square (center: GeoPoint, side_km: f64)->Self {
        GeoRestrictor::Box { center, half_width_km: side_km / 2.0, half_height_km: side_km / 2.0 }
    }

    pub fn window (from: GeoPoint, to: GeoPoint, min_altitude_ft: f64, max_altitude_ft: f64)->Self {
        GeoRestrictor::Window { from, to, min_altitude_ft, max_altitude_ft }
    }

    pub fn is_window (&self)->bool { matches!( self, GeoRestrictor::Window{..}) }

    /// check parameters, returning a description of the first problem we find
    pub fn check (&self)->std::result::Result<(),String> {
        match self {
            GeoRestrictor::Circle { radius_km, .. } => {
                if !(*radius_km > 0.0) { return Err( format!("circle radius has to be positive: {radius_km}")) }
            }
            GeoRestrictor::Box { half_width_km, half_height_km, .. } => {
                if !(*half_width_km > 0.0 && *half_height_km > 0.0) {
                    return Err( format!("box extent has to be positive: {half_width_km}x{half_height_km}"))
                }
            }
            GeoRestrictor::Window { from, to, min_altitude_ft, max_altitude_ft } => {
                if from == to { return Err( format!("window end points are identical: {from}")) }
                if *max_altitude_ft > 0.0 && *min_altitude_ft > *max_altitude_ft {
                    return Err( format!("window altitude band is empty: [{min_altitude_ft}..{max_altitude_ft}]"))
                }
            }
        }
        Ok(())
    }

    /// is `p` inside the region? Windows have no area and hence never contain points
    pub fn contains_point (&self, p: &GeoPoint)->bool {
        match self {
            GeoRestrictor::Circle { center, radius_km } => center.haversine_distance_km(p) <= *radius_km,
            GeoRestrictor::Box { center, half_width_km, half_height_km } => {
                let c = LocalPlane::new( *center).project(p);
                c.x.abs() <= *half_width_km && c.y.abs() <= *half_height_km
            }
            GeoRestrictor::Window {..} => false
        }
    }

    /// is `alt_ft` within the altitude band? Only windows have one
    pub fn altitude_in_band (&self, alt_ft: f64)->bool {
        match self {
            GeoRestrictor::Window { min_altitude_ft, max_altitude_ft, .. } => {
                !(*min_altitude_ft > 0.0 && alt_ft < *min_altitude_ft) && !(*max_altitude_ft > 0.0 && alt_ft > *max_altitude_ft)
            }
            _ => true
        }
    }

    pub fn window_line (&self)->Option<GeoLine> {
        match self {
            GeoRestrictor::Window { from, to, .. } => Some( GeoLine::from_geo_points( *from, *to)),
            _ => None
        }
    }
}

/// the rendering is stable since it is used to build counter keys
impl fmt::Display for GeoRestrictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoRestrictor::Circle { center, radius_km } => write!( f, "Circle{center} r={radius_km:.1}km"),
            GeoRestrictor::Box { center, half_width_km, half_height_km } => {
                write!( f, "Box{center} {:.1}x{:.1}km", half_width_km * 2.0, half_height_km * 2.0)
            }
            GeoRestrictor::Window { from, to, min_altitude_ft, max_altitude_ft } => {
                write!( f, "Window{from}-{to} [{min_altitude_ft:.0}..{max_altitude_ft:.0}]ft")
            }
        }
    }
}
