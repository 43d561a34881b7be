use lazy_static::lazy_static;
use regex::Regex;

// Canonical Base64: groups of four alphabet characters, with one final
// group carrying `=` padding. Named so data-URI parsing can extract it.
const BASE64_GROUP: &str =
    "(?<content>(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4}))";

lazy_static! {
    // Lowercase local part, then a dotted domain or a bracketed IPv4 literal.
    pub(crate) static ref EMAIL_ADDRESS: Regex = Regex::new(
        r"^([a-z0-9_\-])([a-z0-9_\-\.]*)@(\[((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}|((([a-z0-9\-]+)\.)+))([a-z]{2,}|(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\])$"
    )
    .unwrap();

    pub(crate) static ref BASE64_CONTENT: Regex =
        Regex::new(&format!("^{BASE64_GROUP}$")).unwrap();

    pub(crate) static ref BASE64_DATA_URI: Regex = Regex::new(&format!(
        "^data:(?<type>.+?/(?<extension>.+?));(?<base>.+),{BASE64_GROUP}$"
    ))
    .unwrap();

    // Applied to normalized digits: two-digit area code (no zeros), the
    // literal mobile prefix `9`, then the eight subscriber digits.
    pub(crate) static ref MOBILE_NUMBER: Regex =
        Regex::new(r"^[1-9]{2}9[0-9]{8}$").unwrap();

    // Applied to the raw input: CEP with an optional dash.
    pub(crate) static ref ZIP_CODE: Regex = Regex::new(r"^[0-9]{5}-?[0-9]{3}$").unwrap();

    // Optional sign, integer digits, optional fractional part. No exponents.
    pub(crate) static ref DECIMAL_NUMBER: Regex =
        Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").unwrap();
}
