//! Fan-In Validation
//!
//! Runs several independent checks against a signup form and merges their
//! outcomes. Duplicate errors collapse to one entry, so the caller sees each
//! problem once no matter how many checks spotted it.

use rop_rail::{combine, Error, RopResult};

#[derive(Debug, Clone)]
struct Signup {
    username: String,
    email: String,
    age: u8,
}

fn check_username(form: &Signup) -> RopResult<()> {
    if form.username.trim().is_empty() {
        return RopResult::from_error(Error::custom("UsernameRequired"));
    }
    RopResult::from_value(())
}

fn check_email(form: &Signup) -> RopResult<()> {
    RopResult::from_value(form.email.as_str())
        .boolean_switch(|email| email.contains('@'))
        .map_errors(|_| Error::custom("InvalidEmail").with_message(form.email.clone()))
        .map(|_| ())
}

fn check_age(form: &Signup) -> RopResult<()> {
    RopResult::from_value(form.age)
        .try_switch(|age| {
            if age >= 18 {
                Ok(())
            } else {
                Err(format!("{} is under the minimum age", age))
            }
        })
}

fn check_reserved(form: &Signup) -> RopResult<()> {
    // Overlaps with `check_username` on blank input.
    if form.username.trim().is_empty() || form.username == "admin" {
        return RopResult::from_error(Error::custom("UsernameRequired"));
    }
    RopResult::from_value(())
}

fn validate(form: &Signup) -> RopResult<Signup> {
    let checks = [check_username(form), check_email(form), check_age(form), check_reserved(form)];
    combine(checks).map(|()| form.clone())
}

fn main() {
    let good = Signup { username: "ada".into(), email: "ada@example.org".into(), age: 36 };
    let bad = Signup { username: " ".into(), email: "nobody".into(), age: 12 };

    for form in [good, bad] {
        validate(&form).match_with(
            |signup| println!("accepted {}", signup.username),
            |errors| println!("rejected {:?}:\n{:#}", form.username, errors),
        );
    }

    // Collecting keeps every payload, or merges every failure.
    let ages: RopResult<Vec<u8>> = ["42", "x", "17", "y"]
        .into_iter()
        .map(|raw| RopResult::from_value(raw).try_switch(|s| s.parse::<u8>()))
        .collect();
    match ages.into_std() {
        Ok(ages) => println!("parsed ages {:?}", ages),
        Err(errors) => println!("could not parse ages: {}", errors),
    }
}
