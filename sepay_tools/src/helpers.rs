use spg_common::Vnd;

/// Build the VietQR image URL for a bank transfer of `amount` with `add_info` as the transfer description.
///
/// The payer scans this image with their banking app; the pre-filled description is what ties the transfer back to
/// an order, so it must survive verbatim.
pub fn vietqr_image_url(bank_code: &str, account_number: &str, amount: Vnd, add_info: &str) -> String {
    format!(
        "https://img.vietqr.io/image/{bank_code}-{account_number}-print.png?amount={}&addInfo={add_info}",
        amount.value()
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_the_image_url() {
        let url = vietqr_image_url("MB", "0917436401", Vnd::from(100_000), "ORDER1700000000001");
        assert_eq!(
            url,
            "https://img.vietqr.io/image/MB-0917436401-print.png?amount=100000&addInfo=ORDER1700000000001"
        );
    }
}
