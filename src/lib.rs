//! Opportunity scoring for institutions and research funders.
//!
//! [`score::calculate_institution_score`] and [`score::calculate_funder_score`] turn
//! raw publishing counters into a 0-100 score; [`rank`] and [`report`] build ranked
//! views over a whole [`types::entity::Dataset`].

pub mod check;
pub mod config;
pub mod dataset;
pub mod error;
pub mod rank;
pub mod report;
pub mod score;
pub mod telemetry;
pub mod types;
