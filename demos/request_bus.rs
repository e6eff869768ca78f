//! Request Bus With Validation
//!
//! A handler validates incoming orders before fulfilling them. Rejections
//! come back on the failure track with the handler's errors, while transport
//! faults such as a missed deadline surface as `BusError`.

use std::time::Duration;

use rop_rail::bus::{send_timeout, HandlerBus, RequestHandler};
use rop_rail::{Error, RopResult};

#[derive(Debug, Clone)]
struct PlaceOrder {
    sku: &'static str,
    quantity: u32,
}

#[derive(Debug)]
struct OrderPlaced {
    sku: &'static str,
    total_cents: u64,
}

struct Warehouse {
    latency: Duration,
}

impl RequestHandler<PlaceOrder> for Warehouse {
    type Response = OrderPlaced;

    async fn validate(&self, order: &PlaceOrder) -> Vec<Error> {
        let mut errors = Vec::new();
        if order.sku.is_empty() {
            errors.push(Error::custom("UnknownSku"));
        }
        if order.quantity == 0 {
            errors.push(Error::custom("EmptyOrder").with_code("Q-0"));
        }
        errors
    }

    async fn handle(&self, order: PlaceOrder) -> OrderPlaced {
        tokio::time::sleep(self.latency).await;
        OrderPlaced {
            sku: order.sku,
            total_cents: u64::from(order.quantity) * 1_250,
        }
    }
}

fn describe(reply: RopResult<OrderPlaced>) {
    reply.match_with(
        |placed| println!("placed {} for {} cents", placed.sku, placed.total_cents),
        |errors| println!("rejected: {}", errors),
    );
}

#[tokio::main]
async fn main() {
    let bus = HandlerBus::new(Warehouse { latency: Duration::from_millis(20) });
    let limit = Duration::from_millis(500);

    let orders = [
        PlaceOrder { sku: "bolt-m6", quantity: 40 },
        PlaceOrder { sku: "", quantity: 0 },
    ];

    for order in orders {
        match send_timeout(&bus, order, limit).await {
            Ok(reply) => describe(reply),
            Err(fault) => eprintln!("transport fault: {}", fault),
        }
    }

    let slow = HandlerBus::new(Warehouse { latency: Duration::from_secs(2) });
    let order = PlaceOrder { sku: "nut-m6", quantity: 10 };
    match send_timeout(&slow, order, limit).await {
        Ok(reply) => describe(reply),
        Err(fault) => eprintln!("transport fault: {}", fault),
    }
}
