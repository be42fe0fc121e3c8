use moniker::{
    driver::{operation::UpdateByKey, Driver},
    record, Args, Filter, Value,
};
use pretty_assertions::assert_eq;
use tests::{assert_err, DbTest};

#[test]
fn entity_reads_only_its_own_attributes() {
    let test = DbTest::fixtures();

    let user = test
        .db
        .call_strict("UserById", 1)
        .unwrap()
        .into_entity()
        .unwrap();

    assert_eq!(
        user.attribute_names().collect::<Vec<_>>(),
        ["id", "first_name", "last_name", "employer_id"]
    );
    assert_eq!(user.get("employer_id").unwrap(), &Value::from(10));

    // relation names never resolve, whatever the relation's shape
    for name in ["employer", "sportscars", "employers", "owner", "save", "update"] {
        let err = assert_err!(user.get(name));
        assert!(err.is_undefined_attribute(), "name={name}");
        assert!(!user.contains(name));
    }
}

#[test]
fn to_record_is_a_copy_of_the_raw_mapping() {
    let test = DbTest::fixtures();

    let view = test.db.call_strict("EmployerFromUser", Args::subject(&1)).unwrap();

    assert_eq!(
        view.to_record().unwrap(),
        record! { "id" => 10, "name" => "Acme", "founder_id" => 1 }
    );
}

#[test]
fn collections_reject_single_record_operations() {
    let test = DbTest::fixtures();

    let view = test.db.call_strict("UsersByLastName", "Smith").unwrap();

    assert!(view.is_collection());
    assert!(assert_err!(view.to_record()).is_cannot_project_collection());
    assert!(assert_err!(view.get("first_name")).is_cannot_project_collection());
    assert!(assert_err!(view.clone().into_entity()).is_cannot_project_collection());
}

#[test]
fn collection_enumeration() {
    let test = DbTest::fixtures();

    let users = test
        .db
        .call_strict("UsersBy", Filter::eq("employer_id", 11))
        .unwrap()
        .into_collection()
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users.first().unwrap()["first_name"], "Bob");
    assert_eq!(users.last().unwrap()["first_name"], "Cy");
    assert!(users.get(2).is_none());

    let mut ids = vec![];
    for user in &users {
        ids.push(user.key().cloned());
    }
    assert_eq!(ids, [Some(Value::from(2)), Some(Value::from(3))]);

    let owned: Vec<_> = users.into_iter().collect();
    assert_eq!(owned.len(), 2);
}

#[test]
fn views_are_independent_of_later_writes() {
    let test = DbTest::fixtures();

    let before = test
        .db
        .call_strict("UserById", 1)
        .unwrap()
        .into_entity()
        .unwrap();

    test.db
        .driver()
        .exec(
            UpdateByKey {
                model: "user".to_string(),
                key: Value::from(1),
                assignments: record! { "last_name" => "Jones" },
            }
            .into(),
        )
        .unwrap();

    assert_eq!(before["last_name"], "Smith");

    let after = test.db.call_strict("UserById", 1).unwrap();
    assert_eq!(after.get("last_name").unwrap(), "Jones");
}
