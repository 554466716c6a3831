//! ResumeRise client: submit a resume and a job description to the scoring
//! service and show the overlap score, the model score and the missing skills.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod scoring_client;
pub mod terminal;
