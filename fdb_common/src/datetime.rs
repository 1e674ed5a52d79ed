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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Serialize,Deserialize,Serializer,Deserializer};
use std::time::Duration;
use std::fmt;
use parse_duration::parse;

// simple Duration ctors that do not require nightly or the chrono TimeDelta panicking variants
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }

/// std Duration to chrono TimeDelta. Durations we use are far below the TimeDelta limits so we saturate
pub fn to_time_delta (d: Duration)->TimeDelta {
    TimeDelta::from_std(d).unwrap_or( TimeDelta::MAX)
}

/// fractional seconds between two dates (negative if `later` is before `earlier`)
pub fn secs_between (earlier: &DateTime<Utc>, later: &DateTime<Utc>)->f64 {
    (*later - *earlier).num_milliseconds() as f64 / 1000.0
}

/// round dt down to a multiple of `slot` since the epoch. Slots that evenly divide a day are therefore aligned with UTC midnight
pub fn floor_to_slot (dt: &DateTime<Utc>, slot: Duration)->DateTime<Utc> {
    let slot_ms = slot.as_millis() as i64;
    if slot_ms <= 0 { return *dt }

    let ms = dt.timestamp_millis();
    let floored = ms - ms.rem_euclid( slot_ms);
    DateTime::<Utc>::from_timestamp_millis( floored).unwrap_or(*dt)
}

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn naive_utc_date_to_utc_datetime (nd: NaiveDate) -> DateTime<Utc> {
    let ndt = NaiveDateTime::new( nd, NaiveTime::MIN);
    DateTime::from_naive_utc_and_offset(ndt,Utc)
}

/* #region TimeRange **************************************************************************/

/// a closed interval [start..end] of UTC times
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new (start: DateTime<Utc>, end: DateTime<Utc>)->Self { TimeRange{start,end} }

    /// the UTC day that starts at midnight of the given date
    pub fn utc_day (date: NaiveDate)->Self {
        let start = naive_utc_date_to_utc_datetime( date);
        TimeRange { start, end: start + TimeDelta::days(1) - TimeDelta::seconds(1) }
    }

    pub fn contains (&self, dt: &DateTime<Utc>)->bool { *dt >= self.start && *dt <= self.end }

    pub fn overlaps (&self, start: &DateTime<Utc>, end: &DateTime<Utc>)->bool {
        *start <= self.end && *end >= self.start
    }

    pub fn is_valid (&self)->bool { self.start <= self.end }

    pub fn duration (&self)->TimeDelta { self.end - self.start }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", short_utc_datetime_string(&self.start), short_utc_datetime_string(&self.end))
    }
}

/* #endregion TimeRange */

pub fn short_utc_datetime_string (dt: &DateTime<Utc>) -> String {
    format!("{}", dt.format("%Y-%m-%dT%H:%M:%S%Z"))
}

//--- support for serde

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
