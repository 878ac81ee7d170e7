use crate::error::Result;
use crate::types::fields::pct;
use crate::types::number::round2;
use crate::types::record::MetricRecord;
use crate::types::report::{MetricSpan, SpanEntry};

impl MetricSpan {
    pub fn observe(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |span, value| match span {
            None => Some(Self {
                min: value,
                max: value,
            }),
            Some(Self { min, max }) => Some(Self {
                min: min.min(value),
                max: max.max(value),
            }),
        })
    }

    /// Position of `value` within the span on a 0..=100 scale, rounded to
    /// two decimals. A span with no width scores every value as 100.
    pub fn percentile(&self, value: f64) -> f64 {
        let width = self.max - self.min;
        if width == 0.0 {
            100.0
        } else {
            round2((value - self.min) / width * 100.0)
        }
    }
}

pub fn scale_records(records: &mut [MetricRecord], keys: &[String]) -> Result<Vec<SpanEntry>> {
    let mut spans = Vec::with_capacity(keys.len());
    for key in keys {
        let values = records
            .iter()
            .map(|record| record.number(key))
            .collect::<Result<Vec<_>>>()?;
        let Some(span) = MetricSpan::observe(values.iter().copied()) else {
            continue;
        };
        tracing::debug!(metric = %key, min = span.min, max = span.max, "percentile span");

        let pct_key = pct(key);
        for (record, value) in records.iter_mut().zip(values) {
            record.set(&pct_key, span.percentile(value));
        }
        spans.push(SpanEntry {
            metric: key.clone(),
            span,
        });
    }
    Ok(spans)
}
