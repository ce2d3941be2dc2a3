//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use storefront_app::{
    auth::{AuthenticatedCustomer, MockAuthService},
    context::AppContext,
    domain::{
        categories::MockCategoriesService,
        customers::{MockCustomersService, records::CustomerUuid},
        discounts::{
            MockDiscountsService,
            records::{DiscountRecord, DiscountUuid},
        },
        orders::{
            MockOrdersService,
            records::{
                Cart, OrderItemRecord, OrderItemUuid, OrderRecord, OrderUuid, PaymentStatus,
                ShippingStatus,
            },
            totals::CartTotals,
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        reviews::{
            MockReviewsService,
            records::{ReviewRecord, ReviewUuid},
        },
        shipping::{
            MockShippingService,
            records::{ShippingInfoRecord, ShippingInfoUuid},
        },
    },
};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER_UUID: CustomerUuid = CustomerUuid::from_uuid(Uuid::nil());

/// Service mocks backing a test [`State`]. Any call without an expectation fails the test.
#[derive(Default)]
pub(crate) struct TestMocks {
    pub customers: MockCustomersService,
    pub auth: MockAuthService,
    pub categories: MockCategoriesService,
    pub discounts: MockDiscountsService,
    pub products: MockProductsService,
    pub shipping: MockShippingService,
    pub orders: MockOrdersService,
    pub reviews: MockReviewsService,
}

pub(crate) fn state_with(mocks: TestMocks) -> Arc<State> {
    State::from_app_context(AppContext {
        customers: Arc::new(mocks.customers),
        auth: Arc::new(mocks.auth),
        categories: Arc::new(mocks.categories),
        discounts: Arc::new(mocks.discounts),
        products: Arc::new(mocks.products),
        shipping: Arc::new(mocks.shipping),
        orders: Arc::new(mocks.orders),
        reviews: Arc::new(mocks.reviews),
    })
}

#[salvo::handler]
async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_customer(AuthenticatedCustomer {
        customer_uuid: TEST_CUSTOMER_UUID,
        is_staff: false,
    });

    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
async fn inject_staff(req: &mut Request, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    depot.insert_customer(AuthenticatedCustomer {
        customer_uuid: TEST_CUSTOMER_UUID,
        is_staff: true,
    });

    ctrl.call_next(req, depot, res).await;
}

/// Serve `route` without an authenticated customer.
pub(crate) fn anonymous_service(mocks: TestMocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with(mocks))).push(route))
}

/// Serve `route` as a regular customer.
pub(crate) fn customer_service(mocks: TestMocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(mocks)))
            .hoop(inject_customer)
            .push(route),
    )
}

/// Serve `route` as a staff member.
pub(crate) fn staff_service(mocks: TestMocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(mocks)))
            .hoop(inject_staff)
            .push(route),
    )
}

pub(crate) fn make_discount(uuid: DiscountUuid, percentage: Decimal) -> DiscountRecord {
    DiscountRecord {
        uuid,
        name: "Spring sale".to_string(),
        percentage,
        active: true,
        expires_on: date(2999, 1, 1),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Kettle".to_string(),
        description: "Boils water".to_string(),
        category_uuid: None,
        price: 2_000,
        stock: 5,
        digital: false,
        rating: Decimal::ZERO,
        num_reviews: 0,
        discounts: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_review(rating: u8) -> ReviewRecord {
    ReviewRecord {
        uuid: ReviewUuid::new(),
        product_uuid: ProductUuid::new(),
        customer_uuid: TEST_CUSTOMER_UUID,
        customer_name: "Ada Lovelace".to_string(),
        rating,
        comment: "Does the job".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn make_item(order_uuid: OrderUuid, price: u64, quantity: u32, digital: bool) -> OrderItemRecord {
    OrderItemRecord {
        uuid: OrderItemUuid::new(),
        order_uuid,
        product_uuid: ProductUuid::new(),
        product_name: if digital { "E-book" } else { "Kettle" }.to_string(),
        digital,
        quantity,
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// An open order holding one kettle (2000) and two e-books (500 each), shipped for 600.
pub(crate) fn make_cart(uuid: OrderUuid) -> Cart {
    Cart {
        order: OrderRecord {
            uuid,
            customer_uuid: Some(TEST_CUSTOMER_UUID),
            customer_name: None,
            customer_email: None,
            complete: false,
            payment_status: PaymentStatus::NotPaid,
            shipping_status: ShippingStatus::Pending,
            shipping_info_uuid: None,
            shipping_cost: 0,
            total: 0,
            transaction_uuid: None,
            items: vec![
                make_item(uuid, 2_000, 1, false),
                make_item(uuid, 500, 2, true),
            ],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            completed_at: None,
        },
        totals: CartTotals {
            item_count: 3,
            physical_quantity: 1,
            subtotal: 3_000,
            shipping_required: true,
            shipping_cost: 600,
            total: 3_600,
        },
    }
}

/// The order from [`make_cart`] after a successful checkout.
pub(crate) fn make_completed_order(uuid: OrderUuid) -> OrderRecord {
    let Cart { mut order, totals } = make_cart(uuid);

    order.customer_name = Some("Ada Lovelace".to_string());
    order.customer_email = Some("ada@example.com".to_string());
    order.complete = true;
    order.payment_status = PaymentStatus::Paid;
    order.shipping_cost = totals.shipping_cost;
    order.total = totals.total;
    order.transaction_uuid = Some(Uuid::now_v7());
    order.completed_at = Some(Timestamp::UNIX_EPOCH);

    order
}

pub(crate) fn make_shipping_info(uuid: ShippingInfoUuid) -> ShippingInfoRecord {
    ShippingInfoRecord {
        uuid,
        customer_uuid: TEST_CUSTOMER_UUID,
        country: "GB".to_string(),
        city: "London".to_string(),
        state: String::new(),
        zipcode: "12345".to_string(),
        address: "1 High Street".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        is_default: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
