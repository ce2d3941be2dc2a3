//! Shipping Info Data

use crate::domain::shipping::records::ShippingInfoUuid;

/// Minimum number of digits in a zipcode.
pub const MIN_ZIPCODE_DIGITS: usize = 5;

/// Minimum length of a phone number.
pub const MIN_PHONE_CHARS: usize = 10;

/// New Shipping Info Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShippingInfo {
    pub uuid: ShippingInfoUuid,
    pub country: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub address: String,
    pub phone: String,
    pub is_default: bool,
}

impl NewShippingInfo {
    /// Uppercase the country code and trim surrounding whitespace.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.country = self.country.trim().to_ascii_uppercase();
        self.city = self.city.trim().to_string();
        self.state = self.state.trim().to_string();
        self.zipcode = self.zipcode.trim().to_string();
        self.address = self.address.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self
    }

    /// Whether every field satisfies its format rules.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_country_code(&self.country)
            && !self.city.is_empty()
            && !self.address.is_empty()
            && self.zipcode.len() >= MIN_ZIPCODE_DIGITS
            && self.zipcode.chars().all(|c| c.is_ascii_digit())
            && self.phone.chars().count() >= MIN_PHONE_CHARS
    }
}

/// ISO 3166-1 alpha-2 shape: two uppercase ASCII letters.
#[must_use]
pub fn is_country_code(country: &str) -> bool {
    country.len() == 2 && country.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipping_info() -> NewShippingInfo {
        NewShippingInfo {
            uuid: ShippingInfoUuid::new(),
            country: " gb ".to_string(),
            city: "London".to_string(),
            state: String::new(),
            zipcode: "12345".to_string(),
            address: "1 High Street".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            is_default: true,
        }
    }

    #[test]
    fn normalized_uppercases_country() {
        let info = shipping_info().normalized();

        assert_eq!(info.country, "GB");
        assert!(info.is_valid());
    }

    #[test]
    fn rejects_short_or_non_numeric_zipcodes() {
        let mut info = shipping_info().normalized();
        info.zipcode = "1234".to_string();
        assert!(!info.is_valid());

        info.zipcode = "12a45".to_string();
        assert!(!info.is_valid());
    }

    #[test]
    fn rejects_short_phone_numbers() {
        let mut info = shipping_info().normalized();
        info.phone = "555-0100".to_string();

        assert!(!info.is_valid());
    }

    #[test]
    fn country_codes_are_two_uppercase_letters() {
        assert!(is_country_code("US"));
        assert!(!is_country_code("USA"));
        assert!(!is_country_code("us"));
        assert!(!is_country_code("U1"));
    }
}
