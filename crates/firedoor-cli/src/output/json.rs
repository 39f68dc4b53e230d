use firedoor_core::error::FiredoorError;
use firedoor_core::model::ExtractionResult;

pub fn print(result: &ExtractionResult) -> Result<(), FiredoorError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
