use std::collections::{BTreeMap, HashSet};

use assertlib::{assert_either, assert_not_either, AssertResult, Exactly};

#[test]
fn scalar_candidates_match_by_equality() -> AssertResult {
    assert_either(&11, &10, &11)?;
    assert_either(&'a', &'a', &'b')?;
    assert_either(&true, &false, &true)
}

#[test]
fn container_candidates_match_by_membership() -> AssertResult {
    assert_either(&"foo", &["bar"], &["foo"])?;
    assert_either(&3, &vec![1, 2], &vec![3, 4])?;
    let owned = HashSet::from([String::from("x")]);
    assert_either(&String::from("x"), &owned, &Vec::<String>::new())?;
    assert_either(&"k", &BTreeMap::from([("k", 1)]), &["other"])?;
    assert_either(&vec!["foo"], &vec![vec!["bar"]], &vec![vec!["foo"]])
}

#[test]
fn whole_collections_match_by_equality() -> AssertResult {
    assert_either(&vec!["foo"], &Exactly(vec!["bar"]), &Exactly(vec!["foo"]))?;
    assert_either(&["foo"], &Exactly(vec!["foo"]), &Exactly(vec!["bar"]))?;
    assert_either(&vec![1, 2], &Exactly(vec![1, 2]), &vec![vec![3]])?;

    let err = assert_either(&vec!["baz"], &Exactly(vec!["bar"]), &Exactly(vec!["foo"])).unwrap_err();
    assert_eq!(
        err.message(),
        "[\"baz\"] is neither Exactly([\"bar\"]) nor Exactly([\"foo\"])"
    );

    assert!(assert_not_either(&vec!["foo"], &Exactly(vec!["bar"]), &Exactly(vec!["foo"])).is_err());
    assert_not_either(&vec!["foo"], &Exactly(vec!["bar"]), &Exactly(vec!["baz"]))
}

#[test]
fn text_candidates_match_by_equality_or_substring() -> AssertResult {
    assert_either(&11i32.to_string(), "foo", "11")?;
    assert_either("a", "xyz", "cat")?;
    assert_either(&'z', "xyz", "abc")?;
    assert_either(&"oo", &String::from("foo"), &String::from("bar"))
}

#[test]
fn no_match_reports_all_operands() {
    let err = assert_either(&"z", &["a", "b"], &["c", "d"]).unwrap_err();
    assert!(err.is_assertion());
    assert_eq!(err.code(), "either");
    assert_eq!(
        err.message(),
        "\"z\" is neither [\"a\", \"b\"] nor [\"c\", \"d\"]"
    );
    assert_eq!(err.info().context["value"], "\"z\"");

    assert!(assert_either(&12, &10, &11).is_err());
}

#[test]
fn not_either_is_the_complement() {
    let err = assert_not_either(&11, &10, &11).unwrap_err();
    assert_eq!(err.code(), "not_either");
    assert_eq!(err.message(), "11 is 10 or 11");

    assert!(assert_not_either(&"z", &["a", "b"], &["c", "d"]).is_ok());
    assert!(assert_not_either("a", "c", "A").is_ok());
    assert!(assert_not_either("a", "abc", "1").is_err());
    assert!(assert_not_either(&2, &vec![1, 2], &vec![3]).is_err());
}
