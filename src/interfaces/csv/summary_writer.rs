use crate::application::checkout::CheckoutSummary;
use crate::error::Result;
use std::io::Write;

/// Writes checkout summaries as CSV with a header row.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_summary(&mut self, summary: &CheckoutSummary) -> Result<()> {
        self.writer.serialize(summary)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price::Price;

    #[test]
    fn test_writes_header_and_row() {
        let summary = CheckoutSummary {
            product: "망고T".to_string(),
            quantity: "1개".to_string(),
            base_price: Price::new(10_000),
            price_after_coupon: Price::new(9_000),
            points_input: 1_000,
            final_price: Price::new(8_000),
            available_points: 2_000,
        };

        let mut buf = Vec::new();
        SummaryWriter::new(&mut buf).write_summary(&summary).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert_eq!(
            out,
            "product,quantity,base_price,price_after_coupon,points_input,final_price,available_points\n\
             망고T,1개,10000,9000,1000,8000,2000\n"
        );
    }
}
