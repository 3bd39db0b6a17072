use once_cell::sync::Lazy;
use opentelemetry::{global, metrics::Counter, KeyValue};

pub static METRICS: Lazy<EdgeTableMetrics> = Lazy::new(EdgeTableMetrics::init);

pub struct EdgeTableMetrics {
    pub fields_synthesized_total: Counter<u64>,
    pub relationships_skipped_total: Counter<u64>,
}

impl EdgeTableMetrics {
    pub fn init() -> Self {
        let meter = global::meter("edgetable");

        let fields_synthesized_total = meter
            .u64_counter("edgetable_fields_synthesized_total")
            .with_description("Edge table fields added to parent types")
            .build();

        let relationships_skipped_total = meter
            .u64_counter("edgetable_relationships_skipped_total")
            .with_description("Parent types left untouched by the edge table hook")
            .build();

        Self {
            fields_synthesized_total,
            relationships_skipped_total,
        }
    }

    pub fn record_field(&self, kind: &'static str) {
        self.fields_synthesized_total
            .add(1, &[KeyValue::new("kind", kind)]);
    }

    pub fn record_skip(&self, reason: &'static str) {
        self.relationships_skipped_total
            .add(1, &[KeyValue::new("reason", reason)]);
    }
}
