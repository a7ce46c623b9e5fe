use crate::application::checkout::PricingAction;
use crate::domain::coupon::Coupon;
use crate::domain::price::parse_grouped;
use crate::error::{PricingError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum ActionType {
    Coupon,
    Points,
}

#[derive(Debug, Deserialize)]
struct ActionRecord {
    action: ActionType,
    value: String,
}

impl TryFrom<ActionRecord> for PricingAction {
    type Error = PricingError;

    fn try_from(record: ActionRecord) -> Result<Self> {
        match record.action {
            ActionType::Coupon => Ok(PricingAction::ApplyCoupon(record.value.parse::<Coupon>()?)),
            ActionType::Points => parse_grouped(&record.value)
                .map(PricingAction::ApplyPoints)
                .ok_or(PricingError::MalformedPoints(record.value)),
        }
    }
}

/// Reads pricing actions from a CSV source with an `action,value` header.
///
/// Each row is either `coupon,<label>` (`10%`, `"5,000원"`) or
/// `points,<amount>`. Fields are trimmed.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields actions in file order. A bad row yields an error without
    /// ending the stream.
    pub fn actions(self) -> impl Iterator<Item = Result<PricingAction>> {
        self.reader
            .into_deserialize::<ActionRecord>()
            .map(|result| -> Result<PricingAction> { PricingAction::try_from(result?) })
    }
}
