use moniker::{
    driver::{operation::Traverse, Operation},
    record, Args, Config, Identity, Value,
};
use pretty_assertions::assert_eq;
use tests::{assert_err, assert_none, assert_ok, DbTest, MemDriver};

#[test]
fn singular_association_from_an_id() {
    let test = DbTest::fixtures();

    let employer = test
        .db
        .call_strict("EmployerFromUser", Args::subject(&1))
        .unwrap()
        .into_entity()
        .unwrap();

    assert_eq!(employer["name"], "Acme");
    // named after the model the relation reaches, not the relation
    assert_eq!(employer.view_type().name(), "ReadonlyCompany");

    assert_eq!(
        test.log().pop_op(),
        Operation::Traverse(Traverse {
            model: "user".to_string(),
            identity: Value::from(1),
            hops: vec!["employer".to_string()],
        })
    );
}

#[test]
fn subject_can_be_a_projected_entity() {
    let test = DbTest::fixtures();

    let user = test
        .db
        .call_strict("UserByFirstName", "Bob")
        .unwrap()
        .into_entity()
        .unwrap();

    let employer = test.db.call_strict("EmployerFromUser", &user).unwrap();
    assert_eq!(employer.get("name").unwrap(), "Globex");

    // the entity itself cannot reach the employer
    assert!(assert_err!(user.get("employer")).is_undefined_attribute());
}

#[test]
fn plural_association() {
    let test = DbTest::fixtures();

    let cars = test
        .db
        .call_strict("SportscarsFromUser", Args::subject(&1))
        .unwrap()
        .into_collection()
        .unwrap();

    assert_eq!(cars.view_type().name(), "ReadonlySportscarCollection");
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["make"], "Caterham");
}

#[test]
fn via_chain_is_traversed_in_order() {
    let test = DbTest::fixtures();

    let cars = test
        .db
        .call_strict(
            "SportscarsFromUser",
            Args::subject(&1).via(["employer"]),
        )
        .unwrap()
        .into_collection()
        .unwrap();

    let makes: Vec<_> = cars.iter().map(|car| car["make"].clone()).collect();
    assert_eq!(makes, [Value::from("Lotus"), Value::from("Alpine")]);

    assert_eq!(
        test.log().pop_op(),
        Operation::Traverse(Traverse {
            model: "user".to_string(),
            identity: Value::from(1),
            hops: vec!["employer".to_string(), "sportscars".to_string()],
        })
    );
}

#[test]
fn has_one_is_single_shaped() {
    let test = DbTest::fixtures();

    let owner = test
        .db
        .call_strict("OwnerFromUser", Args::subject(&1).via(["employer"]))
        .unwrap();

    assert_eq!(owner.get("name").unwrap(), "Wile");
    assert_eq!(owner.view_type().name(), "ReadonlyPerson");
}

#[test]
fn missing_target_is_not_found() {
    let test = DbTest::fixtures();

    // Di has no employer
    assert_none!(test.db.call("EmployerFromUser", Args::subject(&4)).unwrap());

    let err = assert_err!(test.db.call_strict("EmployerFromUser", Args::subject(&4)));
    assert!(err.is_record_not_found());
}

#[test]
fn missing_subject_is_not_found() {
    let test = DbTest::fixtures();

    assert_none!(test.db.call("EmployerFromUser", Args::subject(&999)).unwrap());

    let err = assert_err!(test.db.call_strict("EmployerFromUser", Args::subject(&999)));
    assert!(err.is_record_not_found());
}

fn collection_shaped_employer() -> MemDriver {
    MemDriver::default()
        .has_many("user", "employer", "company", "user_id")
        .belongs_to("user", "managers", "person", "manager_id")
        .seed(
            "user",
            [
                record! { "id" => 1, "manager_id" => 7 },
                record! { "id" => 2 },
            ],
        )
        .seed("company", [record! { "id" => 10, "user_id" => 1 }])
        .seed("person", [record! { "id" => 7 }])
}

#[test]
fn singular_identifier_over_a_collection_is_invalid_ancestry() {
    let test = DbTest::new(collection_shaped_employer());

    // user 1 has one matching company, user 2 has none; neither matters
    for id in [1, 2] {
        for strict in [false, true] {
            let args = Args::subject(&id);
            let err = if strict {
                assert_err!(test.db.call_strict("EmployerFromUser", args))
            } else {
                assert_err!(test.db.call("EmployerFromUser", args))
            };
            assert!(err.is_invalid_ancestry(), "id={id}; strict={strict}; err={err}");
        }
    }
}

#[test]
fn plural_identifier_over_a_single_record_is_invalid_ancestry() {
    let test = DbTest::new(collection_shaped_employer());

    for id in [1, 2] {
        let err = assert_err!(test.db.call("ManagersFromUser", Args::subject(&id)));
        assert!(err.is_invalid_ancestry(), "id={id}; err={err}");
    }
}

#[test]
fn unknown_hop_is_invalid_ancestry() {
    let test = DbTest::fixtures();

    let err = assert_err!(test.db.call("EmployerFromUser", Args::subject(&1).via(["manager"])));
    assert!(err.is_invalid_ancestry());

    let err = assert_err!(test.db.call("LandlordFromUser", Args::subject(&1)));
    assert!(err.is_invalid_ancestry());
}

#[test]
fn association_requires_a_subject() {
    let test = DbTest::fixtures();

    let err = assert_err!(test.db.call("EmployerFromUser", 1));
    assert!(err.is_invalid_argument());
    assert!(test.log().is_empty());
}

#[test]
fn entity_without_key_cannot_be_a_subject() {
    // the store keys tags by `id`, but identities are read from `tag_id`
    let driver = MemDriver::default().seed("tag", [record! { "label" => "x" }]);
    let test = DbTest::with_config(driver, Config::new().primary_key("tag_id"));

    let tag = test
        .db
        .call_strict("TagByLabel", "x")
        .unwrap()
        .into_entity()
        .unwrap();
    assert_none!(tag.key());

    let err = assert_err!(test.db.call("EmployerFromTag", &tag));
    assert!(err.is_undefined_attribute());
}

#[test]
fn entity_identity_is_its_primary_key() {
    let test = DbTest::fixtures();

    let user = test
        .db
        .call_strict("UserByLastName", "Ray")
        .unwrap()
        .into_entity()
        .unwrap();

    assert_eq!(assert_ok!(user.identity()), Value::from(4));
}
