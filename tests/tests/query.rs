use moniker::{
    driver::{
        operation::{FindAll, FindFirst, GetByKey},
        Operation,
    },
    record, Args, Config, Filter, Value,
};
use pretty_assertions::assert_eq;
use tests::{assert_err, assert_none, fixtures, DbTest, MemDriver};

#[test]
fn by_id_gets_by_key() {
    let test = DbTest::fixtures();

    let view = test.db.call_strict("UserById", 1).unwrap();
    let user = view.as_entity().unwrap();

    assert_eq!(user["first_name"], "Ann");
    assert_eq!(user.view_type().name(), "ReadonlyUser");
    assert_eq!(
        test.log().pop_op(),
        Operation::GetByKey(GetByKey {
            model: "user".to_string(),
            key: Value::from(1),
        })
    );
    assert!(test.log().is_empty());
}

#[test]
fn by_field_finds_first() {
    let test = DbTest::fixtures();

    let user = test
        .db
        .call_strict("UserByLastName", "Jones")
        .unwrap()
        .into_entity()
        .unwrap();

    assert_eq!(user["first_name"], "Cy");
    assert_eq!(
        test.log().pop_op(),
        Operation::FindFirst(FindFirst {
            model: "user".to_string(),
            filter: Filter::eq("last_name", "Jones"),
        })
    );
}

#[test]
fn plural_by_field_finds_all() {
    let test = DbTest::fixtures();

    let users = test
        .db
        .call_strict("UsersByLastName", "Smith")
        .unwrap()
        .into_collection()
        .unwrap();

    assert_eq!(users.view_type().name(), "ReadonlyUserCollection");
    let names: Vec<_> = users.iter().map(|u| u["first_name"].clone()).collect();
    assert_eq!(names, [Value::from("Ann"), Value::from("Bob")]);

    assert_eq!(
        test.log().pop_op(),
        Operation::FindAll(FindAll {
            model: "user".to_string(),
            filter: Filter::eq("last_name", "Smith"),
        })
    );
}

#[test]
fn plural_without_matches_is_an_empty_collection() {
    let test = DbTest::fixtures();

    for strict in [false, true] {
        let view = if strict {
            test.db.call_strict("UsersByLastName", "Nobody").unwrap()
        } else {
            test.db.call("UsersByLastName", "Nobody").unwrap().unwrap()
        };

        let users = view.as_collection().unwrap();
        assert!(users.is_empty());
        assert_none!(users.first());
    }
}

#[test]
fn plural_by_id_filters_on_the_primary_key() {
    let test = DbTest::fixtures();

    let users = test
        .db
        .call_strict("UsersById", 2)
        .unwrap()
        .into_collection()
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(
        test.log().pop_op(),
        Operation::FindAll(FindAll {
            model: "user".to_string(),
            filter: Filter::eq("id", 2),
        })
    );
}

#[test]
fn field_less_query_takes_a_filter() {
    let test = DbTest::fixtures();

    let user = test
        .db
        .call_strict(
            "UserBy",
            Filter::eq("last_name", "Smith").and("first_name", "Bob"),
        )
        .unwrap();
    assert_eq!(user.get("id").unwrap(), &Value::from(2));

    let users = test
        .db
        .call_strict("UsersBy", Filter::eq("employer_id", 11))
        .unwrap()
        .into_collection()
        .unwrap();
    assert_eq!(users.len(), 2);
}

#[test]
fn empty_filter_is_rejected_before_the_driver() {
    let test = DbTest::fixtures();

    let err = assert_err!(test.db.call("UsersBy", Filter::new()));
    assert!(err.is_invalid_argument());
    assert!(test.log().is_empty());
}

#[test]
fn argument_shape_must_fit_the_identifier() {
    let test = DbTest::fixtures();

    let cases: Vec<(&str, Args<'_>)> = vec![
        ("UserById", Filter::eq("id", 1).into()),
        ("UserByLastName", Filter::eq("last_name", "Smith").into()),
        ("UserBy", "Smith".into()),
        ("UsersByLastName", Args::subject(&1)),
    ];

    for (identifier, args) in cases {
        let err = assert_err!(test.db.call(identifier, args), "identifier={identifier}");
        assert!(err.is_invalid_argument(), "identifier={identifier}; err={err}");
    }

    assert!(test.log().is_empty());
}

#[test]
fn lenient_returns_none_and_strict_fails() {
    let test = DbTest::fixtures();

    for identifier in ["UserById", "UserByLastName"] {
        let args = || -> Args<'static> {
            if identifier == "UserById" {
                999.into()
            } else {
                "Nobody".into()
            }
        };

        assert_none!(test.db.call(identifier, args()).unwrap());

        let err = assert_err!(test.db.call_strict(identifier, args()));
        assert!(err.is_record_not_found(), "identifier={identifier}; err={err}");
    }

    // both forms issued the same operation
    let ops = test.log().operations();
    assert_eq!(ops.len(), 4);
    assert_eq!(ops[0], ops[1]);
    assert_eq!(ops[2], ops[3]);
}

#[test]
fn configured_primary_key() {
    let driver = MemDriver::new("uuid").seed(
        "user",
        [record! { "uuid" => "u-1", "first_name" => "Ann" }],
    );
    let test = DbTest::with_config(driver, Config::new().primary_key("uuid"));

    let user = test
        .db
        .call_strict("UserById", "u-1")
        .unwrap()
        .into_entity()
        .unwrap();

    assert_eq!(user.key(), Some(&Value::from("u-1")));
    assert_eq!(
        test.log().pop_op(),
        Operation::GetByKey(GetByKey {
            model: "user".to_string(),
            key: Value::from("u-1"),
        })
    );
}

#[test]
fn multi_word_models() {
    let driver = fixtures().seed(
        "sports_car",
        [
            record! { "id" => 1, "top_speed" => 250 },
            record! { "id" => 2, "top_speed" => 250 },
        ],
    );
    let test = DbTest::new(driver);

    let cars = test
        .db
        .call_strict("SportsCarsByTopSpeed", 250)
        .unwrap()
        .into_collection()
        .unwrap();

    assert_eq!(cars.len(), 2);
    assert_eq!(cars.view_type().name(), "ReadonlySportsCarCollection");
    assert_eq!(cars[0].view_type().name(), "ReadonlySportsCar");
}
