//! Test Helpers

use jiff::ToSpan;
use rust_decimal::Decimal;

use crate::{
    domain::{
        customers::{
            CustomersService, CustomersServiceError,
            data::NewCustomer,
            records::{CustomerRecord, CustomerUuid},
        },
        discounts::{
            DiscountsService, DiscountsServiceError,
            data::NewDiscount,
            records::{DiscountRecord, DiscountUuid},
        },
        products::{data::NewProduct, records::ProductUuid},
        shipping::{data::NewShippingInfo, records::ShippingInfoUuid},
        today,
    },
    test::TestContext,
};

pub(crate) async fn create_customer(
    ctx: &TestContext,
    username: &str,
    is_staff: bool,
) -> Result<CustomerRecord, CustomersServiceError> {
    ctx.customers
        .create_customer(NewCustomer {
            uuid: CustomerUuid::new(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            full_name: "Test Customer".to_string(),
            is_staff,
        })
        .await
}

pub(crate) fn new_product(name: &str, price: u64, stock: u32, digital: bool) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: String::new(),
        category_uuid: None,
        price,
        stock,
        digital,
    }
}

pub(crate) async fn create_discount(
    ctx: &TestContext,
    percentage: Decimal,
    active: bool,
) -> Result<DiscountRecord, DiscountsServiceError> {
    ctx.discounts
        .create_discount(NewDiscount {
            uuid: DiscountUuid::new(),
            name: format!("{percentage}% off"),
            percentage,
            active,
            expires_on: today().saturating_add(30.days()),
        })
        .await
}

pub(crate) fn new_shipping_info(country: &str, is_default: bool) -> NewShippingInfo {
    NewShippingInfo {
        uuid: ShippingInfoUuid::new(),
        country: country.to_string(),
        city: "Springfield".to_string(),
        state: String::new(),
        zipcode: "12345".to_string(),
        address: "1 Main Street".to_string(),
        phone: "5555550100".to_string(),
        is_default,
    }
}
