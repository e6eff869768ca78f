//! Car Assembly Pipeline
//!
//! Builds a car part by part. Every part comes from its own fallible factory;
//! the first failure parks the car on the failure track and later stages
//! only carry the errors forward.

use rop_rail::builder::AggregateBuilder;
use rop_rail::{Error, RopResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum Engine {
    Diesel,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum Model {
    Citroen,
    Peugeot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum Wheels {
    Three,
    Four,
}

#[derive(Debug, Clone, Default, Serialize)]
struct Car {
    engine: Option<Engine>,
    model: Option<Model>,
    wheels: Option<Wheels>,
}

fn create_engine(engine: Engine) -> RopResult<Engine> {
    RopResult::from_value(engine)
}

fn create_model(model: Model) -> RopResult<Model> {
    match model {
        Model::Citroen => RopResult::from_value(model),
        Model::Peugeot => RopResult::from_error(
            Error::custom("ModelUnavailable").with_code("M-01").with_message("out of stock"),
        ),
    }
}

fn create_wheels(wheels: Wheels) -> RopResult<Wheels> {
    match wheels {
        Wheels::Four => RopResult::from_value(wheels),
        Wheels::Three => RopResult::from_error(Error::custom("UnsafeWheelCount").with_code("W-03")),
    }
}

fn assemble(engine: Engine, model: Model, wheels: Wheels) -> RopResult<Car> {
    AggregateBuilder::new(Car::default())
        .tee(|_| println!("  chassis ready"))
        .with_field(create_engine(engine), |car, engine| Car { engine: Some(engine), ..car })
        .tee(|car| println!("  engine fitted: {:?}", car.engine))
        .with_field(create_model(model), |car, model| Car { model: Some(model), ..car })
        .tee(|car| println!("  badge applied: {:?}", car.model))
        .with_field(create_wheels(wheels), |car, wheels| Car { wheels: Some(wheels), ..car })
        .tee(|car| println!("  wheels mounted: {:?}", car.wheels))
        .finish()
}

fn report(label: &str, car: &RopResult<Car>) {
    match serde_json::to_string_pretty(car) {
        Ok(json) => println!("{}:\n{}\n", label, json),
        Err(e) => eprintln!("{}: could not serialize: {}", label, e),
    }
}

fn main() {
    println!("assembling hybrid citroen");
    let car = assemble(Engine::Hybrid, Model::Citroen, Wheels::Four);
    report("complete", &car);

    println!("assembling diesel peugeot on three wheels");
    let car = assemble(Engine::Diesel, Model::Peugeot, Wheels::Three);
    report("rejected", &car);

    // Raw parts cannot fail, so only the starting aggregate can put the car
    // on the failure track.
    let car = RopResult::from_value(Car::default())
        .with_value(Engine::Diesel, |car, engine| Car { engine: Some(engine), ..car })
        .with_value(Model::Citroen, |car, model| Car { model: Some(model), ..car })
        .with_value(Wheels::Four, |car, wheels| Car { wheels: Some(wheels), ..car });
    report("from raw parts", &car);
}
