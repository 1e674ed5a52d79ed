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

/// this module provides the 2D geometry we need to evaluate tracks against regions and gates.
/// Following the design principle of using existing crates we wrap [geo](https://docs.rs/geo/latest/geo/index.html)
/// types with the new type pattern, adding units-of-measure via [uom](https://docs.rs/uom/latest/uom/)
/// and normalized angles for latitude/longitude.
///
/// Note that `geo` uses (x,y) == (lon,lat) order whereas most aviation sources (and our ctor names) use lat,lon

use std::fmt;
use serde::{Serialize,Deserialize};

use geo::{Coord, Distance, Haversine, Line, Point};

use uom::si::f64::Length;
use uom::si::length::{kilometer,meter};

use crate::angle::{normalize_180, normalize_90, Longitude, Latitude};
use crate::geo_constants::KM_PER_DEGREE;
use crate::lerp;

pub type GeoCoord = Coord<f64>;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from="LatLon",into="LatLon")]
pub struct GeoPoint(Point);

/// the serialized form of GeoPoint - we accept the common aliases on input
#[derive(Serialize,Deserialize)]
struct LatLon {
    #[serde(alias="latitude")] lat: f64,
    #[serde(alias="longitude",alias="long")] lon: f64,
}

impl From<LatLon> for GeoPoint {
    fn from (ll: LatLon)->Self { GeoPoint::from_lat_lon_degrees( ll.lat, ll.lon) }
}

impl From<GeoPoint> for LatLon {
    fn from (p: GeoPoint)->Self { LatLon{ lat: p.latitude_degrees(), lon: p.longitude_degrees() } }
}

impl GeoPoint {
    pub fn from_lat_lon_degrees (lat: f64, lon: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    pub fn longitude(&self) -> Longitude { Longitude::from_degrees( self.0.x()) }
    pub fn latitude(&self) -> Latitude { Latitude::from_degrees( self.0.y()) }

    #[inline] pub fn longitude_degrees(&self) -> f64 { self.0.x() }
    #[inline] pub fn latitude_degrees(&self) -> f64 { self.0.y() }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }
    pub fn coord (&self)->GeoCoord { self.0.0 }

    /// great circle distance on the mean earth sphere
    pub fn haversine_distance (&self, other: &GeoPoint)->Length {
        Length::new::<meter>( Haversine.distance( self.0, other.0))
    }

    pub fn haversine_distance_km (&self, other: &GeoPoint)->f64 {
        Haversine.distance( self.0, other.0) / 1000.0
    }

    /// plain linear interpolation of lat/lon degrees. This is only meant to be used between close track samples
    pub fn interpolate (&self, other: &GeoPoint, t: f64)->GeoPoint {
        if t == 0.0 { return *self }
        if t == 1.0 { return *other }

        let dlon = normalize_180( other.longitude_degrees() - self.longitude_degrees());
        GeoPoint::from_lat_lon_degrees(
            lerp( self.latitude_degrees(), other.latitude_degrees(), t),
            self.longitude_degrees() + dlon * t
        )
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6},{:.6})", self.0.y(),self.0.x())
    }
}

/* #endregion GeoPoint */

/* #region GeoLine ***********************************************************************************************/

#[derive(Debug,Clone,PartialEq)]
pub struct GeoLine(Line);

impl GeoLine {
    pub fn from_geo_points (start: GeoPoint, end: GeoPoint) -> Self {
        GeoLine( Line::new( *start.point(), *end.point()))
    }
    pub fn line<'a> (&'a self) -> &'a Line { &self.0 }

    pub fn start (&self)->GeoPoint { GeoPoint(self.0.start_point()) }
    pub fn end (&self)->GeoPoint { GeoPoint(self.0.end_point()) }

    pub fn haversine_distance (&self) -> Length {
        let (start,end) = self.0.points();
        Length::new::<meter>( Haversine.distance( start, end))
    }

    /// the point halfway between start and end (planar approximation)
    pub fn midpoint (&self)->GeoPoint { self.start().interpolate( &self.end(), 0.5) }
}

impl fmt::Display for GeoLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

/* #endregion GeoLine */

/* #region LocalPlane *********************************************************************************************/

/// an equirectangular projection around a reference point that maps positions into a planar
/// (east,north) system measured in kilometers. East-west distances are scaled by cos(ref.latitude), which
/// keeps them locally correct. Only use this for regions up to a few hundred km around the reference
#[derive(Debug,Clone,Copy)]
pub struct LocalPlane {
    origin: GeoPoint,
    cos_lat: f64,
}

impl LocalPlane {
    pub fn new (origin: GeoPoint)->Self {
        LocalPlane { origin, cos_lat: origin.latitude().cos() }
    }

    pub fn origin (&self)->&GeoPoint { &self.origin }

    /// (east_km, north_km) of `p` relative to the origin
    pub fn project (&self, p: &GeoPoint)->GeoCoord {
        let dlon = normalize_180( p.longitude_degrees() - self.origin.longitude_degrees());
        let dlat = p.latitude_degrees() - self.origin.latitude_degrees();
        Coord { x: dlon * self.cos_lat * KM_PER_DEGREE, y: dlat * KM_PER_DEGREE }
    }

    pub fn unproject (&self, c: &GeoCoord)->GeoPoint {
        let lat = self.origin.latitude_degrees() + c.y / KM_PER_DEGREE;
        let lon = self.origin.longitude_degrees() + c.x / (self.cos_lat * KM_PER_DEGREE);
        GeoPoint::from_lat_lon_degrees( lat, lon)
    }

    pub fn project_line (&self, line: &GeoLine)->Line {
        Line::new( self.project( &line.start()), self.project( &line.end()))
    }
}

/* #endregion LocalPlane */
