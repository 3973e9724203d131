//! Domain E2E tests across optional and fallible constructors.

use outcome_domain::{
    AppError, BatchReport, Either, Maybe, TrafficLight, change_name, collect_errors,
    create_person, create_person_and_show, create_valid_people, default_inputs, describe_light,
    mean, uppercase_name,
};
use std::error::Error;

#[test]
fn optional_values_end_to_end() {
    assert_eq!(mean(&[]), Maybe::Absent);
    assert_eq!(mean(&[2, 3]), Maybe::Present(2.5));

    let lights: Vec<Maybe<TrafficLight>> = ["red", "green", "yellow", "RED"]
        .into_iter()
        .map(TrafficLight::from_text)
        .collect();
    assert_eq!(
        lights,
        vec![
            Maybe::Present(TrafficLight::Red),
            Maybe::Present(TrafficLight::Green),
            Maybe::Present(TrafficLight::Yellow),
            Maybe::Absent,
        ]
    );
    assert!(describe_light("RED").contains("RED"));

    assert!(change_name("Fred", 32, "Wilma").is_present());
    assert_eq!(change_name("Fred", 121, "Wilma"), Maybe::Absent);
}

#[test]
fn recoverable_errors_end_to_end() -> Result<(), Box<dyn Error>> {
    let fred = create_person("Fred", "32").into_result()?;
    assert_eq!((fred.name(), fred.age()), ("Fred", 32));

    let renamed = fred.with_name("Frederick");
    assert_eq!(renamed.name(), "Frederick");
    assert_eq!(renamed.age(), fred.age());

    let upper = uppercase_name("Fred", "32").into_result()?;
    assert_eq!(upper.name(), "FRED");

    assert_eq!(create_person_and_show("Fred", "32"), "Fred is 32");
    assert!(matches!(
        create_person("", "nope"),
        Either::Failure(AppError::EmptyName(_))
    ));

    Ok(())
}

#[test]
fn batch_projections_end_to_end() {
    let inputs = default_inputs();
    let errors = collect_errors(&inputs);
    let people = create_valid_people(&inputs);

    assert_eq!(errors.len(), 4);
    assert_eq!(people.len(), 3);
    assert_eq!(
        BatchReport::evaluate(&inputs),
        BatchReport { people, errors }
    );
}
