mod order_id_extractor;

pub use order_id_extractor::extract_order_id;
