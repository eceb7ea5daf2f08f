use super::*;

#[test]
fn usd_prices_use_dollar_sign() {
    assert_eq!(format_price(2999, "usd"), "$29.99");
    assert_eq!(format_price(2999, "USD"), "$29.99");
}

#[test]
fn whole_dollar_amounts_keep_two_decimals() {
    assert_eq!(format_price(5000, "usd"), "$50.00");
}

#[test]
fn sub_dollar_amounts_format() {
    assert_eq!(format_price(99, "usd"), "$0.99");
}

#[test]
fn other_currencies_show_the_code() {
    assert_eq!(format_price(2999, "eur"), "29.99 EUR");
}

#[test]
fn billing_date_is_long_form() {
    assert_eq!(
        format_billing_date("2024-12-31T00:00:00+00:00"),
        "December 31, 2024"
    );
}

#[test]
fn unparsable_billing_date_passes_through() {
    assert_eq!(format_billing_date("soon"), "soon");
}
