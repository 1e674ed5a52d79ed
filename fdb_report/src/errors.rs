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

use thiserror::Error;
use fdb_track::errors::FdbTrackError;

pub type Result<T> = std::result::Result<T,FdbReportError>;

#[derive(Error,Debug)]
pub enum FdbReportError {

    #[error("invalid report configuration: {0}")]
    ValidationError(String),

    #[error("not found {0}")]
    NotFoundError(String),

    #[error("transient IO error {0}")]
    TransientIOError(String),

    #[error("invalid report state: {0}")]
    StateError(String),

    #[error("track error {0}")]
    TrackError( #[from] FdbTrackError),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),
}

macro_rules! validation_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        FdbReportError::ValidationError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use validation_error;

macro_rules! state_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        FdbReportError::StateError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use state_error;
