use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorError {
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("vendor envelope reported status \"{status}\"")]
    Envelope { status: String },

    #[error("normalization error for product {source_product_id}: {reason}")]
    Normalization {
        source_product_id: String,
        reason: String,
    },
}
