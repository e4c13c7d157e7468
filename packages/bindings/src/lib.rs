use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Tax
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_tax(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::tax::TaxInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::tax::calculate_tax(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_sip(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::growth::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::growth::calculate_sip(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_lumpsum(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::growth::LumpsumInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::growth::calculate_lumpsum(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_amortization(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::loan::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::loan::calculate_amortization(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emergency_fund(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::planning::EmergencyFundInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::planning::calculate_emergency_fund(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
struct AssessmentBindingInput {
    scores: Vec<u8>,
}

#[napi]
pub fn score_assessment(input_json: String) -> NapiResult<String> {
    let binding_input: AssessmentBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let level =
        fincalc_core::planning::score_assessment(&binding_input.scores).map_err(to_napi_error)?;
    let descriptor = fincalc_core::planning::level_descriptor(level)
        .ok_or_else(|| napi::Error::from_reason("no descriptor for computed level"))?;
    serde_json::to_string(&descriptor).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Retirement
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_pia(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::retirement::PiaInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::retirement::calculate_pia(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_rmd(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::retirement::RmdInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::retirement::calculate_rmd(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
