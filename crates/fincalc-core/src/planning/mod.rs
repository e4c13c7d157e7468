//! Household planning tools: emergency-fund sizing and the financial
//! growth-level assessment.

pub mod assessment;
pub mod emergency_fund;

pub use assessment::{
    level_descriptor, score_assessment, Assessment, AssessmentState, LevelDescriptor, LEVELS,
    QUESTIONS,
};
pub use emergency_fund::{
    calculate_emergency_fund, EmergencyFundInput, EmergencyFundResult, JobStability,
};
