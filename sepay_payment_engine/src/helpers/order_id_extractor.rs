use crate::order_types::OrderId;

/// Pull an order id out of free-form transfer text.
///
/// Banks prepend their own reference codes and strip whitespace unpredictably, so the id can sit anywhere in the
/// string. The first `ORDER<digits>` run wins.
pub fn extract_order_id(text: &str) -> Option<OrderId> {
    let order_id = regex::Regex::new(r"ORDER\d+").unwrap();
    order_id.find(text).map(|m| m.as_str().to_string().into())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn find_order_ids() {
        let order = extract_order_id("");
        assert_eq!(order, None);
        let order = extract_order_id("Some random text");
        assert_eq!(order, None);
        let order = extract_order_id("ORDER1700000000001").unwrap();
        assert_eq!(order.as_str(), "ORDER1700000000001");
        let order = extract_order_id("MBVCB.123.CK den ORDER1700000000001.GD tu tai khoan").unwrap();
        assert_eq!(order.as_str(), "ORDER1700000000001");
        let order = extract_order_id("ORDER without digits");
        assert_eq!(order, None);
        // only the first run of digits counts
        let order = extract_order_id("ORDER111 then ORDER222").unwrap();
        assert_eq!(order.as_str(), "ORDER111");
    }
}
