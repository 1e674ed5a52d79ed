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

//! the report engine: reports take flights from a [`source::FlightSource`], test them against the
//! configured geo restrictors and aggregate counters, histograms and rows through one of the
//! supported [`kinds::ReportKind`]s

pub mod errors;
pub mod options;
pub mod source;
pub mod kinds;
pub mod report;

pub use options::{ReportOptions,ReportLogLevel};
pub use report::{Report,FlightReportOutcome,ReportState,RunStats};
pub use kinds::{ReportKind,ReportLogic};
pub use source::{FlightSource,VecFlightSource};
